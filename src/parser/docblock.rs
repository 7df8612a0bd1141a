//! JSDoc-style `/** ... */` docblock scanner.
//!
//! Recognised tags:
//! - `@name <ident>` → record name (last one in a block wins)
//! - `@example` → every following comment line belongs to the example
//!
//! Other `@` tags (`@param`, `@returns`, ...) are skipped. Plain comment lines
//! before `@example` make up the description.

use crate::model::ApiDocRecord;
use crate::parser::{trim, trim_start};

const OPEN: &str = "/**";
const CLOSE: &str = "*/";
const TAG_NAME: &str = "@name";
const TAG_EXAMPLE: &str = "@example";

/// Declarations that count as a docblock's signature.
const SIGNATURE_PREFIXES: &[&str] = &["void ", "int ", "#define "];

// -- Block state --------------------------------------------------------------

#[derive(Default)]
struct Block {
    name: String,
    desc: Vec<String>,
    example: Vec<String>,
    in_example: bool,
}

impl Block {
    /// Feed one trimmed line from between the delimiters.
    fn push_line(&mut self, line: &str) {
        if let Some((_, rest)) = line.split_once(TAG_NAME) {
            self.name = trim(rest).to_string();
        } else if line.contains(TAG_EXAMPLE) {
            self.in_example = true;
        } else if self.in_example {
            let text = strip_continuation(line);
            if !text.is_empty() {
                self.example.push(text.to_string());
            }
        } else {
            let text = strip_continuation(line);
            if !text.is_empty() && !text.starts_with('@') {
                self.desc.push(text.to_string());
            }
        }
    }

    fn finish(self, sig: String) -> ApiDocRecord {
        ApiDocRecord {
            name: self.name,
            desc: self.desc.join(" "),
            example: self.example.join("\n"),
            sig,
        }
    }
}

// -- Public API ---------------------------------------------------------------

/// Scan all lines for docblocks, in source order.
pub fn parse(lines: &[&str]) -> Vec<ApiDocRecord> {
    let mut records = Vec::new();
    let mut i = 0;

    while i < lines.len() {
        if trim(lines[i]).starts_with(OPEN) {
            let start = i + 1;
            let mut block = Block::default();
            i += 1;
            while i < lines.len() && !trim(lines[i]).starts_with(CLOSE) {
                block.push_line(trim(lines[i]));
                i += 1;
            }
            if i >= lines.len() {
                tracing::warn!(line = start, "docblock is never closed");
            }

            // The lookahead does not move the outer scan.
            let sig = find_signature(lines.get(i + 1..).unwrap_or_default());
            let record = block.finish(sig);
            tracing::debug!(name = %record.name, line = start, "docblock");
            records.push(record);
        }
        i += 1;
    }

    records
}

/// First `void `, `int ` or `#define ` line, trimmed; empty if none.
fn find_signature(lines: &[&str]) -> String {
    lines
        .iter()
        .map(|line| trim(line))
        .find(|line| SIGNATURE_PREFIXES.iter().any(|p| line.starts_with(p)))
        .unwrap_or_default()
        .to_string()
}

/// Strip one leading `*` and the whitespace after it.
fn strip_continuation(line: &str) -> &str {
    line.strip_prefix('*').map_or(line, trim_start)
}

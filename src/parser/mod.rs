//! Parser module — two independent passes over the same header lines.

pub mod docblock;
pub mod preamble;

use crate::model::Document;

/// Parse a C header into a Document.
///
/// The preamble pass and the docblock pass both start at line 0; a docblock
/// sitting inside the preamble (or a header without a sentinel) is still
/// picked up by the docblock pass.
pub fn parse(input: &str) -> Document {
    let lines = split_lines(input);
    tracing::debug!(lines = lines.len(), "parsing header");

    Document {
        preamble: preamble::parse(&lines),
        records: docblock::parse(&lines),
    }
}

/// Split on `\n`, `\r\n` and lone `\r`. A break at end of input does not
/// start an extra empty line.
fn split_lines(input: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut rest = input;

    while !rest.is_empty() {
        match rest.find(|c: char| c == '\r' || c == '\n') {
            Some(idx) => {
                lines.push(&rest[..idx]);
                let width = if rest[idx..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[idx + width..];
            }
            None => {
                lines.push(rest);
                break;
            }
        }
    }

    lines
}

/// Whitespace as C-header tooling sees it: Unicode whitespace plus the
/// `\x1c`..`\x1f` separator controls.
fn is_space(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

pub(crate) fn trim(s: &str) -> &str {
    s.trim_matches(is_space)
}

pub(crate) fn trim_start(s: &str) -> &str {
    s.trim_start_matches(is_space)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_docblocks_means_no_records() {
        let doc = parse("// Title\n// ___HEADER_END___\n#pragma once\n");
        assert_eq!(doc.preamble, vec!["Title"]);
        assert!(doc.records.is_empty());
    }

    #[test]
    fn passes_are_independent_without_sentinel() {
        let input = "// Intro\n/**\n * Does it.\n * @name it\n */\nvoid it(void);\n";
        let doc = parse(input);
        // Whole file is the preamble, cut positionally
        assert_eq!(doc.preamble, vec!["Intro", "", "Does it.", "@name it", "", "d it(void);"]);
        assert_eq!(doc.records.len(), 1);
        assert_eq!(doc.records[0].name, "it");
        assert_eq!(doc.records[0].sig, "void it(void);");
    }

    #[test]
    fn crlf_line_endings() {
        let input = "// Intro\r\n// ___HEADER_END___\r\n/**\r\n * Hi.\r\n * @name hi\r\n */\r\n";
        let doc = parse(input);
        assert_eq!(doc.preamble, vec!["Intro"]);
        assert_eq!(doc.records[0].desc, "Hi.");
        assert_eq!(doc.records[0].name, "hi");
    }

    #[test]
    fn lone_cr_line_endings() {
        let input = "// A\r// B\r// ___HEADER_END___\r/**\r * x\r * @name n\r */\r";
        let doc = parse(input);
        assert_eq!(doc.preamble, vec!["A", "B"]);
        assert_eq!(doc.records.len(), 1);
        assert_eq!(doc.records[0].name, "n");
        assert_eq!(doc.records[0].desc, "x");
    }

    #[test]
    fn trailing_cr_at_eof() {
        let doc = parse("// A\r\n// B\r");
        assert_eq!(doc.preamble, vec!["A", "B"]);
    }

    #[test]
    fn split_lines_mixed_endings() {
        assert_eq!(split_lines("a\nb\r\nc\rd"), vec!["a", "b", "c", "d"]);
        assert_eq!(split_lines("a\n\nb\n"), vec!["a", "", "b"]);
        assert_eq!(split_lines("a\r\r\nb"), vec!["a", "", "b"]);
        assert!(split_lines("").is_empty());
    }

    #[test]
    fn trim_strips_separator_controls() {
        assert_eq!(trim("\x1c n \x1f"), "n");
        assert_eq!(trim_start("\x1e\t x "), "x ");
        assert_eq!(trim("\u{a0}x\u{3000}"), "x");
    }

    #[test]
    fn name_with_trailing_separator_control() {
        let doc = parse("/**\n * @name n\x1c\n */\n");
        assert_eq!(doc.records[0].name, "n");
    }
}

//! Markdown renderer.
//!
//! The layout is fixed: the preamble verbatim, then an `## API Docs` section
//! with one `###` entry and a `c` code fence per record. Signatures are not
//! part of the output.

use crate::model::*;
use crate::render::Renderer;

pub struct MarkdownRenderer;

impl Renderer for MarkdownRenderer {
    fn render(&self, doc: &Document) -> String {
        let mut output = String::new();

        for line in &doc.preamble {
            output.push_str(line);
            output.push('\n');
        }

        if !doc.records.is_empty() {
            output.push_str("\n## API Docs\n\n");
        }

        for record in &doc.records {
            output.push_str(&render_record(record));
        }

        output
    }

    fn file_extension(&self) -> &str {
        "md"
    }
}

/// Render one record, including the two blank lines that separate entries.
fn render_record(record: &ApiDocRecord) -> String {
    format!(
        "### {}\n\n{}\n\n```c\n{}\n```\n\n\n",
        record.name, record.desc, record.example
    )
}

//! Renderer module — turns a parsed Document into output text.

pub mod markdown;

use crate::model::Document;

/// Trait for rendering a Document into a specific output format.
pub trait Renderer {
    fn render(&self, doc: &Document) -> String;
    fn file_extension(&self) -> &str;
}

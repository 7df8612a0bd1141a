//! Data model for an extracted header — format-agnostic.

/// Everything pulled out of a single header file.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Document {
    /// Lines before the `___HEADER_END___` sentinel, comment prefix cut off.
    pub preamble: Vec<String>,
    /// One entry per `/** ... */` docblock, in source order.
    pub records: Vec<ApiDocRecord>,
}

/// A single documented function or macro.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ApiDocRecord {
    /// @name (last occurrence wins)
    pub name: String,
    /// Description lines joined by a single space
    pub desc: String,
    /// Lines after @example, joined by newlines
    pub example: String,
    /// First `void `/`int `/`#define ` line after the docblock.
    /// Collected but not rendered.
    #[allow(dead_code)]
    pub sig: String,
}

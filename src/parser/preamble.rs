//! Leading documentation block.
//!
//! Every line above the `___HEADER_END___` sentinel is kept with its first
//! three characters cut off. The cut is positional: `// `, `/* ` or any other
//! three characters go the same way.

/// Marks the end of the leading block. The line holding it is dropped.
pub const SENTINEL: &str = "___HEADER_END___";

const PREFIX_WIDTH: usize = 3;

/// Collect the leading block. Without a sentinel the whole file is returned.
pub fn parse(lines: &[&str]) -> Vec<String> {
    lines
        .iter()
        .take_while(|line| !line.contains(SENTINEL))
        .map(|line| strip_prefix_width(line).to_string())
        .collect()
}

/// Drop the first three characters; shorter lines come back empty.
fn strip_prefix_width(line: &str) -> &str {
    match line.char_indices().nth(PREFIX_WIDTH) {
        Some((idx, _)) => &line[idx..],
        None => "",
    }
}

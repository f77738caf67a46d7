//! Line classification: headings vs. ordinary lines.

use serde::Serialize;

/// Prefix that turns a line into a heading.
pub const HEADER_PREFIX: &str = "# ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum LineType {
    Heading,
    Paragraph,
}

/// Classify `line`, returning its type and the part that goes through the inline pipeline.
pub fn classify_line(line: &str) -> (LineType, &str) {
    match line.strip_prefix(HEADER_PREFIX) {
        Some(content) => (LineType::Heading, content),
        None => (LineType::Paragraph, line),
    }
}

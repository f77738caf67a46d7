//! # mdhtml
//!
//! Converts a small Markdown dialect into HTML: `_emphasis_`, `__strong__`, backslash escapes
//! and single-level `# ` headers.
//!
//! The heart of the crate is the inline pipeline that runs once per line:
//!
//!     line -> lexing::tokenize -> inlines::pair -> inlines::resolve_conflicts -> formats
//!
//! Everything that is not an emphasis pair degrades to literal text; rendering never fails.
//!
//! ```ignore
//! assert_eq!(mdhtml::render("__a _b_ c__"), "<strong>a <em>b</em> c</strong>");
//! ```

pub mod mdhtml;

pub use mdhtml::config::{load_defaults, Loader, MdConfig};
pub use mdhtml::error::MdError;
pub use mdhtml::formats::{Converter, ConverterRegistry};
pub use mdhtml::pipeline::{Md, MdTokenizer, Tokenizer};
pub use mdhtml::token::{Token, TokenKind, TokenStream};

/// Render `text` with the default pipeline (html output, headers on).
pub fn render(text: &str) -> String {
    Md::default().render(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render() {
        assert_eq!(render("_hi_"), "<em>hi</em>");
    }
}

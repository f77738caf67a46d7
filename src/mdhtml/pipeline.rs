//! Rendering pipeline
//!
//! [`Md`] ties the two strategies together: a [`Tokenizer`] that turns a line into a paired
//! [`TokenStream`], and a [`Converter`] that writes the stream out. The renderer itself only
//! does the mechanical work around them: splitting the input into lines, peeling off the
//! `# ` heading prefix and joining the converted lines back together.
//!
//! Lines are independent. Nothing computed for one line is visible to the next.

use serde::Serialize;
use std::sync::Arc;

use crate::mdhtml::config::MdConfig;
use crate::mdhtml::error::MdError;
use crate::mdhtml::formats::{Converter, ConverterRegistry, HtmlConverter};
use crate::mdhtml::inlines::{self, PairingOptions};
use crate::mdhtml::lexing::{self, classify_line, LineType};
use crate::mdhtml::token::TokenStream;

/// Strategy turning one line of source into paired tokens.
pub trait Tokenizer: Send + Sync {
    fn tokenize(&self, line: &str) -> TokenStream;
}

/// The standard tokenizer: lexing, delimiter pairing and conflict resolution.
#[derive(Debug, Clone, Copy, Default)]
pub struct MdTokenizer {
    options: PairingOptions,
}

impl MdTokenizer {
    pub fn new(options: PairingOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> PairingOptions {
        self.options
    }
}

impl Tokenizer for MdTokenizer {
    fn tokenize(&self, line: &str) -> TokenStream {
        inlines::pair(line, lexing::tokenize(line), self.options)
    }
}

/// Token dump of a single input line.
///
/// For headings, spans are relative to the text after the `# ` prefix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineTokens {
    /// 1-based line number.
    pub line: usize,
    pub line_type: LineType,
    pub stream: TokenStream,
}

/// Markdown renderer.
pub struct Md {
    tokenizer: Box<dyn Tokenizer>,
    converter: Arc<dyn Converter>,
    headers: bool,
}

impl Md {
    pub fn new(tokenizer: impl Tokenizer + 'static, converter: impl Converter + 'static) -> Self {
        Self {
            tokenizer: Box::new(tokenizer),
            converter: Arc::new(converter),
            headers: true,
        }
    }

    /// Enable or disable `# ` heading detection.
    pub fn with_headers(mut self, headers: bool) -> Self {
        self.headers = headers;
        self
    }

    /// Build the pipeline described by `config`.
    pub fn from_config(config: &MdConfig) -> Result<Self, MdError> {
        let mut registry = ConverterRegistry::with_defaults();
        registry.register(HtmlConverter::new().with_escaping(config.render.escape_html));
        let converter = registry.get(&config.render.format)?;
        let options = config.inline.pairing_options();

        log::debug!(
            "rendering with '{}' (headers: {}, split unmatched strong: {})",
            converter.name(),
            config.render.headers,
            options.split_unmatched_strong
        );

        Ok(Self {
            tokenizer: Box::new(MdTokenizer::new(options)),
            converter,
            headers: config.render.headers,
        })
    }

    pub fn converter(&self) -> &dyn Converter {
        self.converter.as_ref()
    }

    /// Render a whole document.
    ///
    /// A trailing line break does not produce a trailing empty line; `\r\n` is accepted.
    pub fn render(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len() + text.len() / 4);
        for (index, line) in text.lines().enumerate() {
            if index > 0 {
                out.push('\n');
            }
            out.push_str(&self.render_line(line));
        }
        out
    }

    /// Render a single line (no embedded line breaks).
    pub fn render_line(&self, line: &str) -> String {
        let (line_type, content) = self.classify(line);
        let converted = self.converter.convert(&self.tokenizer.tokenize(content));
        match line_type {
            LineType::Heading => self.converter.heading(converted),
            LineType::Paragraph => converted,
        }
    }

    /// Tokenize every line without converting, for inspection and debugging.
    pub fn inspect(&self, text: &str) -> Vec<LineTokens> {
        text.lines()
            .enumerate()
            .map(|(index, line)| {
                let (line_type, content) = self.classify(line);
                LineTokens {
                    line: index + 1,
                    line_type,
                    stream: self.tokenizer.tokenize(content),
                }
            })
            .collect()
    }

    fn classify<'a>(&self, line: &'a str) -> (LineType, &'a str) {
        if self.headers {
            classify_line(line)
        } else {
            (LineType::Paragraph, line)
        }
    }
}

impl Default for Md {
    fn default() -> Self {
        Md::new(MdTokenizer::default(), HtmlConverter::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mdhtml::config::Loader;
    use crate::mdhtml::formats::PlainTextConverter;
    use crate::mdhtml::token::{Token, TokenKind};

    #[test]
    fn test_render_lines_and_headers() {
        let md = Md::default();
        assert_eq!(md.render("# T\n_a_"), "<h1>T</h1>\n<em>a</em>");
    }

    #[test]
    fn test_trailing_newline_is_trimmed() {
        assert_eq!(Md::default().render("a\n"), "a");
        assert_eq!(Md::default().render("a\r\nb\r\n"), "a\nb");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(Md::default().render(""), "");
    }

    #[test]
    fn test_inner_empty_lines_are_kept() {
        assert_eq!(Md::default().render("a\n\nb"), "a\n\nb");
    }

    #[test]
    fn test_pairs_do_not_cross_lines() {
        assert_eq!(Md::default().render("_a\nb_"), "_a\nb_");
    }

    #[test]
    fn test_headers_can_be_disabled() {
        let md = Md::default().with_headers(false);
        assert_eq!(md.render("# __T__"), "# <strong>T</strong>");
    }

    #[test]
    fn test_from_config_selects_converter() {
        let config = Loader::new()
            .set_override("render.format", "text")
            .unwrap()
            .build()
            .unwrap();
        let md = Md::from_config(&config).unwrap();
        assert_eq!(md.converter().name(), "text");
        assert_eq!(md.render("# __a__ _b_"), "a b");
    }

    #[test]
    fn test_from_config_unknown_converter() {
        let mut config = MdConfig::default();
        config.render.format = "docx".into();
        assert!(matches!(
            Md::from_config(&config),
            Err(MdError::ConverterNotFound(name)) if name == "docx"
        ));
    }

    #[test]
    fn test_from_config_escaping() {
        let mut config = MdConfig::default();
        config.render.escape_html = true;
        let md = Md::from_config(&config).unwrap();
        assert_eq!(md.render("# a<b"), "<h1>a&lt;b</h1>");
    }

    #[test]
    fn test_custom_tokenizer_strategy() {
        struct WholeLine;
        impl Tokenizer for WholeLine {
            fn tokenize(&self, line: &str) -> TokenStream {
                TokenStream::new(vec![Token::new(TokenKind::Text, line, 0..line.len())])
            }
        }

        let md = Md::new(WholeLine, PlainTextConverter);
        assert_eq!(md.render("__a__"), "__a__");
    }

    #[test]
    fn test_inspect_reports_line_types() {
        let lines = Md::default().inspect("# a\nb");
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].line, 1);
        assert_eq!(lines[0].line_type, LineType::Heading);
        assert_eq!(lines[0].stream.source_text("a"), "a");
        assert_eq!(lines[1].line_type, LineType::Paragraph);
    }
}

//! HTML serializer.
//!
//! Paired `_` and `__` become `<em>` and `<strong>`; everything else, including delimiters
//! that lost their partner, is written out as literal text.

use super::Converter;
use crate::mdhtml::token::{TokenKind, TokenStream};

/// Which emphasis elements are currently open while serializing a line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmphasisState {
    pub italic: bool,
    pub strong: bool,
}

impl EmphasisState {
    /// Flip the state of `kind`, returning true when this emission opens the element.
    pub fn toggle(&mut self, kind: TokenKind) -> bool {
        let open = match kind {
            TokenKind::Italic => &mut self.italic,
            TokenKind::Strong => &mut self.strong,
            _ => return false,
        };
        *open = !*open;
        *open
    }
}

pub fn open_tag(name: &str) -> String {
    format!("<{}>", name)
}

pub fn close_tag(name: &str) -> String {
    format!("</{}>", name)
}

pub fn wrap(name: &str, content: &str) -> String {
    format!("{}{}{}", open_tag(name), content, close_tag(name))
}

fn tag_name(kind: TokenKind) -> Option<&'static str> {
    match kind {
        TokenKind::Italic => Some("em"),
        TokenKind::Strong => Some("strong"),
        _ => None,
    }
}

/// Serialize `tokens` into `out`, threading `state` through the line.
pub fn serialize(tokens: &TokenStream, state: &mut EmphasisState, escape: bool, out: &mut String) {
    for (token, partner) in tokens.iter() {
        match (tag_name(token.kind), partner) {
            (Some(name), Some(_)) => {
                if state.toggle(token.kind) {
                    out.push_str(&open_tag(name));
                } else {
                    out.push_str(&close_tag(name));
                }
            }
            _ if escape => out.push_str(&html_escape::encode_text(&token.text)),
            _ => out.push_str(&token.text),
        }
    }
}

/// Converter producing HTML fragments.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlConverter {
    escape_text: bool,
}

impl HtmlConverter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Escape `&`, `<` and `>` in literal text.
    pub fn with_escaping(mut self, escape_text: bool) -> Self {
        self.escape_text = escape_text;
        self
    }
}

impl Converter for HtmlConverter {
    fn name(&self) -> &str {
        "html"
    }

    fn description(&self) -> &str {
        "HTML with <em>, <strong> and <h1>"
    }

    fn convert(&self, tokens: &TokenStream) -> String {
        let mut out = String::with_capacity(tokens.len() * 4);
        let mut state = EmphasisState::default();
        serialize(tokens, &mut state, self.escape_text, &mut out);
        out
    }

    fn heading(&self, content: String) -> String {
        wrap("h1", &content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mdhtml::inlines::{pair, PairingOptions};
    use crate::mdhtml::lexing::tokenize;

    fn html(line: &str) -> String {
        HtmlConverter::new().convert(&pair(line, tokenize(line), PairingOptions::default()))
    }

    #[test]
    fn test_tags() {
        assert_eq!(open_tag("em"), "<em>");
        assert_eq!(close_tag("em"), "</em>");
        assert_eq!(wrap("h1", "x"), "<h1>x</h1>");
    }

    #[test]
    fn test_toggle() {
        let mut state = EmphasisState::default();
        assert!(state.toggle(TokenKind::Strong));
        assert!(state.toggle(TokenKind::Italic));
        assert!(!state.toggle(TokenKind::Italic));
        assert!(!state.toggle(TokenKind::Strong));
        assert!(!state.toggle(TokenKind::Text));
        assert_eq!(state, EmphasisState::default());
    }

    #[test]
    fn test_paired_delimiters_become_tags() {
        assert_eq!(html("__a _b_ c__"), "<strong>a <em>b</em> c</strong>");
    }

    #[test]
    fn test_unpaired_delimiters_stay_literal() {
        assert_eq!(html("_a __b__ c_"), "_a __b__ c_");
    }

    #[test]
    fn test_escapes_lose_backslash() {
        assert_eq!(html("\\_x\\_"), "_x_");
    }

    #[test]
    fn test_escaping_literal_text() {
        let line = "a<b> & _c_";
        let stream = pair(line, tokenize(line), PairingOptions::default());
        assert_eq!(
            HtmlConverter::new().with_escaping(true).convert(&stream),
            "a&lt;b&gt; &amp; <em>c</em>"
        );
        assert_eq!(HtmlConverter::new().convert(&stream), "a<b> & <em>c</em>");
    }

    #[test]
    fn test_heading_wraps_in_h1() {
        assert_eq!(HtmlConverter::new().heading("T".into()), "<h1>T</h1>");
    }
}

//! Plain text output: emphasis markers removed, everything else kept.

use super::Converter;
use crate::mdhtml::token::TokenStream;

#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextConverter;

impl Converter for PlainTextConverter {
    fn name(&self) -> &str {
        "text"
    }

    fn description(&self) -> &str {
        "Plain text with emphasis markers removed"
    }

    fn convert(&self, tokens: &TokenStream) -> String {
        tokens
            .iter()
            .filter(|(token, partner)| !(token.is_delimiter() && partner.is_some()))
            .map(|(token, _)| token.text.as_str())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mdhtml::inlines::{pair, PairingOptions};
    use crate::mdhtml::lexing::tokenize;

    fn text(line: &str) -> String {
        PlainTextConverter.convert(&pair(line, tokenize(line), PairingOptions::default()))
    }

    #[test]
    fn test_strips_paired_markers() {
        assert_eq!(text("__a _b_ c__"), "a b c");
    }

    #[test]
    fn test_keeps_unpaired_markers() {
        assert_eq!(text("_a __b__ c_ \\_d"), "_a __b__ c_ _d");
    }

    #[test]
    fn test_heading_is_unchanged() {
        assert_eq!(PlainTextConverter.heading("Title".into()), "Title");
    }
}

//! Token stream: the tokens of one line plus their pair table.

use super::{Pairs, Token, TokenKind};
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TokenStream {
    tokens: Vec<Token>,
    pairs: Pairs,
}

impl TokenStream {
    /// Wrap freshly scanned tokens; nothing is paired yet.
    pub fn new(tokens: Vec<Token>) -> Self {
        let pairs = Pairs::new(tokens.len());
        Self { tokens, pairs }
    }

    pub(crate) fn from_parts(tokens: Vec<Token>, pairs: Pairs) -> Self {
        debug_assert_eq!(tokens.len(), pairs.len());
        Self { tokens, pairs }
    }

    pub fn into_parts(self) -> (Vec<Token>, Pairs) {
        (self.tokens, self.pairs)
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn pairs(&self) -> &Pairs {
        &self.pairs
    }

    pub(crate) fn pairs_mut(&mut self) -> &mut Pairs {
        &mut self.pairs
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    pub fn kind(&self, index: usize) -> Option<TokenKind> {
        self.tokens.get(index).map(|token| token.kind)
    }

    pub fn partner(&self, index: usize) -> Option<usize> {
        self.pairs.partner(index)
    }

    pub fn is_paired(&self, index: usize) -> bool {
        self.pairs.is_paired(index)
    }

    /// Iterate tokens together with their current partner.
    pub fn iter(&self) -> impl Iterator<Item = (&Token, Option<usize>)> + '_ {
        self.tokens
            .iter()
            .enumerate()
            .map(|(index, token)| (token, self.pairs.partner(index)))
    }

    /// Rebuild the source line from token spans.
    ///
    /// `line` must be the line this stream was produced from.
    pub fn source_text(&self, line: &str) -> String {
        self.tokens
            .iter()
            .filter_map(|token| line.get(token.span.clone()))
            .collect()
    }

    /// Concatenate the decoded text of every token, ignoring pairs.
    pub fn plain_text(&self) -> String {
        self.tokens.iter().map(|token| token.text.as_str()).collect()
    }
}

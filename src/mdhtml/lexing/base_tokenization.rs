//! Base tokenization using the logos lexer library.
//!
//! This is the entry point where a source line becomes raw lexemes with byte spans. No
//! context is applied here: whether an underscore run means anything is decided afterwards
//! from its neighbours.

use logos::Logos;
use std::ops::Range;

/// Raw lexemes. Every character of a line falls into exactly one of these.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawToken {
    /// Backslash followed by any character.
    #[regex(r"\\.")]
    Escape,

    /// Backslash with nothing after it (end of line).
    ///
    /// `\` and `_` are punctuation too; the raised priority keeps them out of `Punctuation`.
    #[token("\\", priority = 3)]
    Backslash,

    #[token("__")]
    DoubleUnderscore,

    #[token("_", priority = 3)]
    Underscore,

    #[regex(r"\s+")]
    Whitespace,

    /// Any other Unicode punctuation character.
    #[regex(r"\p{P}")]
    Punctuation,

    /// Catch-all run of everything else.
    #[regex(r"[^\s\p{P}]+")]
    Text,
}

/// Scan `source`, returning raw tokens paired with their byte spans.
///
/// Input logos cannot match is reported as [`RawToken::Text`] so spans always cover the whole
/// line.
pub fn scan(source: &str) -> Vec<(RawToken, Range<usize>)> {
    let mut lexer = RawToken::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        tokens.push((result.unwrap_or(RawToken::Text), lexer.span()));
    }

    tokens
}

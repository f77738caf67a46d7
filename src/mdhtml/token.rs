//! Inline tokens
//!
//! A line is tokenized once into a flat, ordered list of [`Token`]s. Pairing never links tokens
//! to each other directly: partners are recorded by index in [`Pairs`], which travels next to
//! the tokens inside a [`TokenStream`]. Tokens and pairs are created per line and dropped once
//! the line has been converted.
//!
//! Every token remembers the byte span of the source it came from, so concatenating the spans
//! of a stream gives back the original line (see [`TokenStream::source_text`]).

mod pairs;
mod stream;

pub use pairs::Pairs;
pub use stream::TokenStream;

use serde::Serialize;
use std::ops::Range;

/// The delimiter character for both emphasis kinds.
pub const DELIMITER: char = '_';

/// Token classes produced by the tokenizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TokenKind {
    /// Run of word characters (or anything without a dedicated kind).
    Text,
    /// Run of whitespace.
    Whitespace,
    /// A single punctuation character.
    Punctuation,
    /// A backslash escape; `text` holds the escaped character only.
    Escape,
    /// Candidate `_` delimiter.
    Italic,
    /// Candidate `__` delimiter.
    Strong,
}

impl TokenKind {
    /// Check if this kind is one of the emphasis delimiters
    pub fn is_delimiter(self) -> bool {
        matches!(self, TokenKind::Italic | TokenKind::Strong)
    }

    /// Number of `_` characters a delimiter of this kind spans.
    pub fn run_length(self) -> Option<usize> {
        match self {
            TokenKind::Italic => Some(1),
            TokenKind::Strong => Some(2),
            _ => None,
        }
    }

    /// Delimiter kind for a run of `len` underscores (runs are capped at two).
    pub fn for_run(len: usize) -> Option<Self> {
        match len {
            1 => Some(TokenKind::Italic),
            2 => Some(TokenKind::Strong),
            _ => None,
        }
    }
}

/// Which sides of a delimiter run touch a boundary character.
///
/// `opening` means the character right after the run is a boundary, `closing` means the one
/// right before it is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Flanking {
    pub opening: bool,
    pub closing: bool,
}

impl Flanking {
    pub fn new(opening: bool, closing: bool) -> Self {
        Self { opening, closing }
    }

    /// Neither side qualifies; the run is literal text.
    pub fn is_none(&self) -> bool {
        !self.opening && !self.closing
    }

    /// Both sides qualify; the run is ambiguous until pairing decides.
    pub fn is_both(&self) -> bool {
        self.opening && self.closing
    }
}

/// A single token of a line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    /// Decoded text: the escaped character for escapes, the literal source otherwise.
    pub text: String,
    /// Byte range of the source line this token stands for.
    pub span: Range<usize>,
    #[serde(skip_serializing_if = "Flanking::is_none")]
    pub flanking: Flanking,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, span: Range<usize>) -> Self {
        Self {
            kind,
            text: text.into(),
            span,
            flanking: Flanking::default(),
        }
    }

    /// Build a delimiter candidate; `kind` decides how many underscores `text` holds.
    pub fn delimiter(kind: TokenKind, span: Range<usize>, flanking: Flanking) -> Self {
        let len = kind.run_length().unwrap_or(1);
        Self {
            kind,
            text: DELIMITER.to_string().repeat(len),
            span,
            flanking,
        }
    }

    pub fn is_delimiter(&self) -> bool {
        self.kind.is_delimiter()
    }
}

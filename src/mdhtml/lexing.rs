//! Lexer
//!
//! Turns one line of source into the flat token list the inline stages work on.
//!
//! The pipeline consists of:
//! 1. Raw tokenization with logos (./lexing/base_tokenization.rs): escapes, `_`/`__` runs,
//!    whitespace runs, punctuation and text runs. Runs of three or more underscores come out as
//!    a `__` followed by the leftover, because logos always takes the longest token.
//! 2. Escape resolution: `\x` becomes an escape token whose text is `x`; a lone trailing `\`
//!    stays literal.
//! 3. Flanking: each underscore run looks at the raw characters right outside it. A run that
//!    can neither open nor close is folded into the surrounding text.
//!
//! Tokenization never fails. At worst the whole line comes out as text.

pub mod base_tokenization;
pub mod classification;
pub mod line_classification;

pub use base_tokenization::{scan, RawToken};
pub use classification::{classify, is_delimiter_boundary, CharClass};
pub use line_classification::{classify_line, LineType};

use crate::mdhtml::token::{Flanking, Token, TokenKind};
use std::ops::Range;

/// Tokenize a single line (no embedded line breaks).
pub fn tokenize(line: &str) -> Vec<Token> {
    let mut tokens: Vec<Token> = Vec::new();

    for (raw, span) in scan(line) {
        let source = &line[span.clone()];
        match raw {
            RawToken::Escape => {
                let escaped = &source[1..];
                tokens.push(Token::new(TokenKind::Escape, escaped, span));
            }
            RawToken::Underscore | RawToken::DoubleUnderscore => {
                let flanking = flanking(line, span.clone());
                match TokenKind::for_run(span.len()) {
                    Some(kind) if !flanking.is_none() => {
                        tokens.push(Token::delimiter(kind, span, flanking));
                    }
                    _ => push_text(&mut tokens, source, span),
                }
            }
            RawToken::Whitespace => tokens.push(Token::new(TokenKind::Whitespace, source, span)),
            RawToken::Punctuation => tokens.push(Token::new(TokenKind::Punctuation, source, span)),
            RawToken::Backslash | RawToken::Text => push_text(&mut tokens, source, span),
        }
    }

    tokens
}

/// Decide whether the underscore run at `run` may open and/or close emphasis.
///
/// Closing needs a boundary character right before the run, opening one right after it.
/// The start and end of the line are not boundaries.
pub fn flanking(line: &str, run: Range<usize>) -> Flanking {
    let before = line[..run.start].chars().next_back();
    let after = line[run.end..].chars().next();

    Flanking::new(
        after.is_some_and(is_delimiter_boundary),
        before.is_some_and(is_delimiter_boundary),
    )
}

/// Append literal text, merging with a preceding text token.
fn push_text(tokens: &mut Vec<Token>, text: &str, span: Range<usize>) {
    if let Some(last) = tokens.last_mut() {
        if last.kind == TokenKind::Text && last.span.end == span.start {
            last.text.push_str(text);
            last.span.end = span.end;
            return;
        }
    }
    tokens.push(Token::new(TokenKind::Text, text, span));
}

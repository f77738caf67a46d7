//! Character classes used for flanking decisions.

use crate::mdhtml::token::DELIMITER;
use once_cell::sync::Lazy;
use regex::Regex;

static PUNCTUATION: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\p{P}$").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Letter,
    Digit,
    Punctuation,
    Whitespace,
    /// The emphasis delimiter itself (`_`).
    Delimiter,
    /// Symbols, control characters and anything else.
    Other,
}

/// Classify a single character.
pub fn classify(ch: char) -> CharClass {
    if ch == DELIMITER {
        CharClass::Delimiter
    } else if ch.is_whitespace() {
        CharClass::Whitespace
    } else if ch.is_alphabetic() {
        CharClass::Letter
    } else if ch.is_numeric() {
        CharClass::Digit
    } else if is_punctuation(ch) {
        CharClass::Punctuation
    } else {
        CharClass::Other
    }
}

/// Whether `ch` can sit right outside a delimiter run that opens or closes emphasis.
///
/// Only letters and punctuation qualify. Digits never do, so `12_3` stays literal.
pub fn is_delimiter_boundary(ch: char) -> bool {
    matches!(classify(ch), CharClass::Letter | CharClass::Punctuation)
}

/// ASCII punctuation is matched directly; only non-ASCII characters reach the regex.
fn is_punctuation(ch: char) -> bool {
    if ch.is_ascii() {
        return matches!(
            ch,
            '!' | '"' | '#' | '%' | '&' | '\'' | '(' | ')' | '*' | ',' | '-' | '.' | '/' | ':'
                | ';' | '?' | '@' | '[' | '\\' | ']' | '_' | '{' | '}'
        );
    }
    let mut buf = [0u8; 4];
    PUNCTUATION.is_match(ch.encode_utf8(&mut buf))
}

//! Inline emphasis
//!
//! Takes the flat token list of one line and decides which delimiter candidates become
//! emphasis. The stages run in a fixed order:
//!
//! 1. Pair `__` candidates (./inlines/pairing.rs).
//! 2. Optionally split every `__` left unpaired into two `_` candidates.
//! 3. Pair `_` candidates.
//! 4. Drop pairs that are not allowed to coexist (./inlines/conflicts.rs): strong nested in
//!    italic, and crossing pairs.
//!
//! Candidates that end up without a partner are rendered as the underscores they came from.

pub mod conflicts;
pub mod pairing;

pub use conflicts::resolve_conflicts;
pub use pairing::{pair_delimiters, split_unmatched_strong, PairingOptions, WhitespaceIndex};

use crate::mdhtml::token::{Token, TokenKind, TokenStream};

/// Pair and resolve the tokens of `line`.
///
/// `tokens` must come from tokenizing `line`; spans are looked up in it.
pub fn pair(line: &str, tokens: Vec<Token>, options: PairingOptions) -> TokenStream {
    let whitespace = WhitespaceIndex::new(line);
    let mut stream = TokenStream::new(tokens);

    pair_delimiters(&mut stream, TokenKind::Strong, &whitespace);
    if options.split_unmatched_strong {
        stream = split_unmatched_strong(stream);
    }
    pair_delimiters(&mut stream, TokenKind::Italic, &whitespace);
    resolve_conflicts(&mut stream);

    stream
}

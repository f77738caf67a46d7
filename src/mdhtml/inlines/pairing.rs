//! Delimiter pairing.
//!
//! One pass per delimiter kind with a stack of open candidates: the closest opener wins.
//! Ambiguous candidates (valid on both sides) only close the top opener when no whitespace
//! separates them; otherwise they are pushed and may still be claimed by a later closer.

use crate::mdhtml::token::{Flanking, Pairs, Token, TokenKind, TokenStream};
use std::ops::Range;

/// Knobs for the pairing stage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PairingOptions {
    /// Retry every `__` left unpaired as two independent `_` candidates.
    pub split_unmatched_strong: bool,
}

/// Prefix counts of whitespace characters, indexed by byte offset.
///
/// Answers "is there whitespace in this range" in constant time, which keeps pairing linear
/// no matter how far apart an opener and its closer are.
#[derive(Debug, Clone)]
pub struct WhitespaceIndex {
    counts: Vec<usize>,
}

impl WhitespaceIndex {
    pub fn new(line: &str) -> Self {
        let mut counts = Vec::with_capacity(line.len() + 1);
        let mut seen = 0;
        counts.push(seen);
        for ch in line.chars() {
            if ch.is_whitespace() {
                seen += 1;
            }
            for _ in 0..ch.len_utf8() {
                counts.push(seen);
            }
        }
        Self { counts }
    }

    /// Whether any whitespace character starts inside `range` (byte offsets).
    pub fn contains_whitespace(&self, range: Range<usize>) -> bool {
        match (self.counts.get(range.start), self.counts.get(range.end)) {
            (Some(start), Some(end)) => end > start,
            _ => false,
        }
    }
}

/// Pair all unpaired candidates of `kind` in `stream`.
pub fn pair_delimiters(stream: &mut TokenStream, kind: TokenKind, whitespace: &WhitespaceIndex) {
    let mut openers: Vec<usize> = Vec::new();

    for index in 0..stream.len() {
        let (flanking, start) = match stream.get(index) {
            Some(token) if token.kind == kind && !stream.is_paired(index) => {
                (token.flanking, token.span.start)
            }
            _ => continue,
        };

        match (flanking.opening, flanking.closing) {
            (true, false) => openers.push(index),
            (false, true) => {
                if let Some(opener) = openers.pop() {
                    link(stream, opener, index);
                }
            }
            (true, true) => {
                let top = openers
                    .last()
                    .copied()
                    .and_then(|opener| stream.get(opener).map(|token| (opener, token.span.end)));
                match top {
                    Some((opener, end)) if !whitespace.contains_whitespace(end..start) => {
                        openers.pop();
                        link(stream, opener, index);
                    }
                    _ => openers.push(index),
                }
            }
            (false, false) => {}
        }
    }
}

fn link(stream: &mut TokenStream, opener: usize, closer: usize) {
    log::trace!("pairing delimiters {} and {}", opener, closer);
    stream.pairs_mut().link(opener, closer);
}

/// Replace every unpaired `__` with two `_` candidates.
///
/// The first half keeps the run's closing side, the second its opening side; the inner sides
/// face another `_` and can never qualify. A half that qualifies on neither side is plain
/// text. Existing pairs are carried over to the new positions.
pub fn split_unmatched_strong(stream: TokenStream) -> TokenStream {
    let (tokens, pairs) = stream.into_parts();
    let unmatched = |index: usize, token: &Token| {
        token.kind == TokenKind::Strong && !pairs.is_paired(index)
    };
    if !tokens
        .iter()
        .enumerate()
        .any(|(index, token)| unmatched(index, token))
    {
        return TokenStream::from_parts(tokens, pairs);
    }

    let mut positions = Vec::with_capacity(tokens.len());
    let mut split = Vec::with_capacity(tokens.len() + 2);
    for (index, token) in tokens.into_iter().enumerate() {
        positions.push(split.len());
        if unmatched(index, &token) {
            log::trace!("splitting unmatched strong run at {:?}", token.span);
            let middle = token.span.start + 1;
            split.push(half(
                token.span.start..middle,
                Flanking::new(false, token.flanking.closing),
            ));
            split.push(half(
                middle..token.span.end,
                Flanking::new(token.flanking.opening, false),
            ));
        } else {
            split.push(token);
        }
    }

    let mut moved = Pairs::new(split.len());
    for (opener, closer) in pairs.iter() {
        moved.link(positions[opener], positions[closer]);
    }
    TokenStream::from_parts(split, moved)
}

fn half(span: Range<usize>, flanking: Flanking) -> Token {
    if flanking.is_none() {
        Token::new(TokenKind::Text, "_", span)
    } else {
        Token::delimiter(TokenKind::Italic, span, flanking)
    }
}

//! Conflict resolution between strong and italic pairs.
//!
//! Strong emphasis may not nest inside italic emphasis, and pairs of different kinds may not
//! cross. Walking the line left to right with a stack of open pairs:
//!
//! - a paired `__` opening while any italic pair is open breaks itself and the innermost open
//!   italic pair, unless it sits right next to an `_` token (back to back runs such as `___`);
//! - a closer whose opener is not on top of the stack crosses every pair opened after it, and
//!   all of them are broken together with it.
//!
//! Every index enters and leaves each stack at most once, so the pass stays linear.

use crate::mdhtml::token::{TokenKind, TokenStream};

pub fn resolve_conflicts(stream: &mut TokenStream) {
    let mut open: Vec<usize> = Vec::new();
    let mut italics: Vec<usize> = Vec::new();

    for index in 0..stream.len() {
        let (Some(partner), Some(kind)) = (stream.partner(index), stream.kind(index)) else {
            continue;
        };

        if partner < index {
            close(stream, &mut open, partner, index);
            continue;
        }

        match kind {
            TokenKind::Strong => {
                if let Some(italic) = innermost_italic(stream, &mut italics, index) {
                    if !touches_italic(stream, index) {
                        log::trace!(
                            "dropping strong pair at {} nested in italic pair at {}",
                            index,
                            italic
                        );
                        stream.pairs_mut().unlink(italic);
                        stream.pairs_mut().unlink(index);
                        continue;
                    }
                }
            }
            TokenKind::Italic => italics.push(index),
            _ => {}
        }
        open.push(index);
    }
}

/// Pop `opener` off the open stack, breaking every live pair that was opened after it.
fn close(stream: &mut TokenStream, open: &mut Vec<usize>, opener: usize, closer: usize) {
    let mut crossed = false;
    while let Some(top) = open.pop() {
        if top == opener {
            break;
        }
        if stream.pairs_mut().unlink(top).is_some() {
            log::trace!("dropping pair at {} crossing pair at {}", top, opener);
            crossed = true;
        }
    }
    if crossed {
        stream.pairs_mut().unlink(closer);
    }
}

/// The innermost italic opener still open at `index`. Closed and broken entries are discarded.
fn innermost_italic(
    stream: &TokenStream,
    italics: &mut Vec<usize>,
    index: usize,
) -> Option<usize> {
    while let Some(&top) = italics.last() {
        if stream.partner(top).is_some_and(|closer| closer > index) {
            return Some(top);
        }
        italics.pop();
    }
    None
}

/// Whether the token right before or right after `index` is an italic delimiter.
fn touches_italic(stream: &TokenStream, index: usize) -> bool {
    let before = index.checked_sub(1).and_then(|prev| stream.kind(prev));
    let after = stream.kind(index + 1);
    before == Some(TokenKind::Italic) || after == Some(TokenKind::Italic)
}

//! Index-based pair table.
//!
//! Each slot holds the index of the partner token, if any. Links are always written and cleared
//! on both sides, so a token never points at a partner that does not point back.

use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Pairs {
    partners: Vec<Option<usize>>,
}

impl Pairs {
    /// An empty table for `len` tokens.
    pub fn new(len: usize) -> Self {
        Self {
            partners: vec![None; len],
        }
    }

    pub fn len(&self) -> usize {
        self.partners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.partners.is_empty()
    }

    pub fn partner(&self, index: usize) -> Option<usize> {
        self.partners.get(index).copied().flatten()
    }

    pub fn is_paired(&self, index: usize) -> bool {
        self.partner(index).is_some()
    }

    /// Pair `a` with `b`. Existing links on either side are dropped first.
    pub fn link(&mut self, a: usize, b: usize) {
        if a == b || a >= self.partners.len() || b >= self.partners.len() {
            return;
        }
        self.unlink(a);
        self.unlink(b);
        self.partners[a] = Some(b);
        self.partners[b] = Some(a);
    }

    /// Break the pair `index` belongs to, returning the former partner.
    pub fn unlink(&mut self, index: usize) -> Option<usize> {
        let partner = self.partners.get_mut(index)?.take()?;
        if let Some(slot) = self.partners.get_mut(partner) {
            *slot = None;
        }
        Some(partner)
    }

    /// Iterate over `(opener, closer)` pairs in opener order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.partners
            .iter()
            .enumerate()
            .filter_map(|(index, partner)| match partner {
                Some(partner) if *partner > index => Some((index, *partner)),
                _ => None,
            })
    }
}

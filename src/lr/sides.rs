//! Side resolution: turn relative sides into absolute ones.

use std::fmt::Debug;
use std::hash::Hash;

use super::{EdgeIdx, LrPlanarity};
use crate::planarity_error::PlanarityError;

impl<V: Copy + Eq + Hash + Debug> LrPlanarity<'_, V> {
    /// Absolute side of `e`.
    ///
    /// Follows the `reference` chain to its end, then unwinds it so every
    /// edge on the way becomes absolute and loses its reference. Later calls
    /// on the same edges are O(1).
    pub(super) fn sign(&mut self, e: EdgeIdx) -> Result<i8, PlanarityError> {
        let mut chain = vec![e];
        let mut cur = e;
        while let Some(next) = self.edges[cur].reference {
            if chain.len() > self.edges.len() {
                return Err(PlanarityError::CyclicReference {
                    edge: self.describe(e),
                });
            }
            chain.push(next);
            cur = next;
        }
        let mut side = self.edges[cur].side;
        for &x in chain.iter().rev().skip(1) {
            side *= self.edges[x].side;
            self.edges[x].side = side;
            self.edges[x].reference = None;
        }
        Ok(self.edges[e].side)
    }
}

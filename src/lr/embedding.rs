//! Embedding pass: splice back edges into the rotations of their targets.

use std::fmt::Debug;
use std::hash::Hash;

use super::{LrPlanarity, VertexIdx};
use crate::embedding::rotation::RotationSystem;
use crate::planarity_error::PlanarityError;

impl<V: Copy + Eq + Hash + Debug> LrPlanarity<'_, V> {
    /// Top-down DFS over the oriented tree rooted at `root`.
    ///
    /// Expects every vertex's outgoing half-edges already in `rotation`, in
    /// signed `nesting_depth` order. A tree edge `(v, w)` puts `v` first in
    /// `w`'s rotation and anchors both refs of `v` at `w`; a back edge
    /// `(v, w)` lands right after `right_ref[w]` (side +1) or right before
    /// `left_ref[w]` (side -1, which then moves to `v`).
    pub(super) fn dfs_embedding(
        &mut self,
        root: VertexIdx,
        rotation: &mut RotationSystem,
    ) -> Result<(), PlanarityError> {
        let mut frames: Vec<(VertexIdx, usize)> = vec![(root, 0)];
        while let Some((v, next)) = frames.last_mut() {
            let v = *v;
            let mut descend = None;
            while *next < self.ordered_adjs[v].len() {
                let ei = self.ordered_adjs[v][*next];
                *next += 1;
                let w = self.edges[ei].target;

                if self.parent_edge[w] == Some(ei) {
                    if !rotation.add_half_edge_first(w, v) {
                        return Err(self.splice_error(ei));
                    }
                    self.left_ref[v] = Some(w);
                    self.right_ref[v] = Some(w);
                    descend = Some(w);
                    break;
                }

                let spliced = if self.edges[ei].side == 1 {
                    rotation.add_half_edge_cw(w, v, self.right_ref[w])
                } else {
                    let ok = rotation.add_half_edge_ccw(w, v, self.left_ref[w]);
                    self.left_ref[w] = Some(v);
                    ok
                };
                if !spliced {
                    return Err(self.splice_error(ei));
                }
            }

            match descend {
                Some(w) => frames.push((w, 0)),
                None => {
                    frames.pop();
                }
            }
        }
        Ok(())
    }
}

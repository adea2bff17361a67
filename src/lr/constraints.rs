//! Testing pass: the conflict-pair stack.
//!
//! Each back edge enters the stack as a conflict pair with an empty left
//! interval. Returning from a subtree, [`add_constraints`] merges the
//! subtree's pairs into one and pushes it on top of the pairs of earlier
//! siblings it conflicts with; [`remove_back_edges`] drops the pairs whose
//! return edges all end at the parent and trims the rest.
//!
//! [`add_constraints`]: LrPlanarity::add_constraints
//! [`remove_back_edges`]: LrPlanarity::remove_back_edges

use std::fmt::Debug;
use std::hash::Hash;
use std::mem;

use super::{EdgeIdx, LrPlanarity, VertexIdx};
use crate::planarity_error::PlanarityError;

/// A run of return edges `low..=high` that must share one side.
/// Both bounds are `None` for the empty interval.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(super) struct Interval {
    pub low: Option<EdgeIdx>,
    pub high: Option<EdgeIdx>,
}

impl Interval {
    fn single(e: EdgeIdx) -> Self {
        Self {
            low: Some(e),
            high: Some(e),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.low.is_none() && self.high.is_none()
    }
}

/// Intervals whose edges must be embedded on opposite sides.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(super) struct ConflictPair {
    pub left: Interval,
    pub right: Interval,
}

impl ConflictPair {
    fn back_edge(e: EdgeIdx) -> Self {
        Self {
            left: Interval::default(),
            right: Interval::single(e),
        }
    }

    fn swap(&mut self) {
        mem::swap(&mut self.left, &mut self.right);
    }
}

struct Frame {
    v: VertexIdx,
    next: usize,
    /// `ordered_adjs[v][next]` is a tree edge whose subtree was just tested.
    returning: bool,
}

impl Frame {
    fn new(v: VertexIdx) -> Self {
        Self {
            v,
            next: 0,
            returning: false,
        }
    }
}

impl<V: Copy + Eq + Hash + Debug> LrPlanarity<'_, V> {
    /// Test the component rooted at `root`. `Ok(false)` on the first
    /// unresolvable conflict.
    pub(super) fn dfs_testing(&mut self, root: VertexIdx) -> Result<bool, PlanarityError> {
        let mut frames = vec![Frame::new(root)];
        while let Some(frame) = frames.last_mut() {
            let v = frame.v;
            let parent = self.parent_edge[v];
            if frame.returning {
                frame.returning = false;
                let ei = self.ordered_adjs[v][frame.next];
                if !self.integrate_return_edges(v, ei, frame.next, parent)? {
                    return Ok(false);
                }
                frame.next += 1;
            }

            let mut descend = None;
            while frame.next < self.ordered_adjs[v].len() {
                let ei = self.ordered_adjs[v][frame.next];
                self.edges[ei].stack_bottom = self.stack.len();
                let w = self.edges[ei].target;
                if self.parent_edge[w] == Some(ei) {
                    frame.returning = true;
                    descend = Some(w);
                    break;
                }
                self.edges[ei].lowpt_edge = Some(ei);
                self.stack.push(ConflictPair::back_edge(ei));
                if !self.integrate_return_edges(v, ei, frame.next, parent)? {
                    return Ok(false);
                }
                frame.next += 1;
            }

            match descend {
                Some(w) => frames.push(Frame::new(w)),
                None => {
                    if let Some(e) = parent {
                        self.remove_back_edges(e)?;
                    }
                    frames.pop();
                }
            }
        }
        Ok(true)
    }

    /// Hand the return edges of `ei` (the `position`-th edge out of `v`) to
    /// the parent edge of `v`.
    fn integrate_return_edges(
        &mut self,
        v: VertexIdx,
        ei: EdgeIdx,
        position: usize,
        parent: Option<EdgeIdx>,
    ) -> Result<bool, PlanarityError> {
        if self.edges[ei].lowpt >= self.height[v] {
            return Ok(true);
        }
        // roots have height 0, so only non-roots get here
        let Some(e) = parent else {
            return Ok(true);
        };
        if position == 0 {
            self.edges[e].lowpt_edge = self.edges[ei].lowpt_edge;
            Ok(true)
        } else {
            self.add_constraints(ei, e)
        }
    }

    fn pop_pair(&mut self, e: EdgeIdx) -> Result<ConflictPair, PlanarityError> {
        self.stack
            .pop()
            .ok_or_else(|| PlanarityError::ConstraintStackUnderflow {
                edge: self.describe(e),
            })
    }

    fn set_ref(&mut self, e: Option<EdgeIdx>, target: Option<EdgeIdx>) {
        if let Some(e) = e {
            self.edges[e].reference = target;
        }
    }

    /// Interval `interval` has a return edge strictly below `lowpt(b)`.
    fn conflicting(&self, interval: Interval, b: EdgeIdx) -> Result<bool, PlanarityError> {
        if interval.is_empty() {
            return Ok(false);
        }
        Ok(self.lowpt(interval.high)? > self.lowpt(Some(b))?)
    }

    /// Lowest return point of any edge in `pair`.
    fn lowest(&self, pair: &ConflictPair) -> Result<usize, PlanarityError> {
        if pair.left.is_empty() {
            return self.lowpt(pair.right.low);
        }
        if pair.right.is_empty() {
            return self.lowpt(pair.left.low);
        }
        Ok(self.lowpt(pair.left.low)?.min(self.lowpt(pair.right.low)?))
    }

    /// Merge the constraints of `ei`'s subtree with those of earlier
    /// siblings below parent edge `e`.
    fn add_constraints(&mut self, ei: EdgeIdx, e: EdgeIdx) -> Result<bool, PlanarityError> {
        let mut p = ConflictPair::default();
        let bottom = self.edges[ei].stack_bottom;

        // merge return edges of ei into p.right
        loop {
            let mut q = self.pop_pair(ei)?;
            if !q.left.is_empty() {
                q.swap();
            }
            if !q.left.is_empty() {
                log::trace!("lr: both sides occupied below {}", self.describe(ei));
                return Ok(false);
            }
            if self.lowpt(q.right.low)? > self.edges[e].lowpt {
                // merge intervals
                if p.right.is_empty() {
                    p.right = q.right;
                } else {
                    self.set_ref(p.right.low, q.right.high);
                }
                p.right.low = q.right.low;
            } else {
                // align
                self.set_ref(q.right.low, self.edges[e].lowpt_edge);
            }
            if self.stack.len() == bottom {
                break;
            }
        }

        // merge conflicting return edges of earlier siblings into p.left
        while let Some(&top) = self.stack.last() {
            if !(self.conflicting(top.left, ei)? || self.conflicting(top.right, ei)?) {
                break;
            }
            let mut q = self.pop_pair(ei)?;
            if self.conflicting(q.right, ei)? {
                q.swap();
            }
            if self.conflicting(q.right, ei)? {
                log::trace!("lr: conflicting return edges on both sides of {}", self.describe(ei));
                return Ok(false);
            }
            // merge interval below lowpt(ei) into p.right
            self.set_ref(p.right.low, q.right.high);
            if q.right.low.is_some() {
                p.right.low = q.right.low;
            }
            if p.left.is_empty() {
                p.left = q.left;
            } else {
                self.set_ref(p.left.low, q.left.high);
            }
            p.left.low = q.left.low;
        }

        if !(p.left.is_empty() && p.right.is_empty()) {
            self.stack.push(p);
        }
        Ok(true)
    }

    /// Leaving the subtree under tree edge `e = (u, v)`: discard return edges
    /// ending at `u` and pick the edge that decides `e`'s side.
    fn remove_back_edges(&mut self, e: EdgeIdx) -> Result<(), PlanarityError> {
        let u = self.edges[e].source;
        let hu = self.height[u];

        // drop entire conflict pairs
        while let Some(&top) = self.stack.last() {
            if self.lowest(&top)? != hu {
                break;
            }
            self.stack.pop();
            if let Some(low) = top.left.low {
                self.edges[low].side = -1;
            }
        }

        // one more conflict pair to consider
        if let Some(mut p) = self.stack.pop() {
            // trim left interval
            while let Some(h) = p.left.high {
                if self.edges[h].target != u {
                    break;
                }
                p.left.high = self.edges[h].reference;
            }
            if p.left.high.is_none() {
                if let Some(low) = p.left.low {
                    // just emptied
                    self.edges[low].reference = p.right.low;
                    self.edges[low].side = -1;
                    p.left.low = None;
                }
            }
            // trim right interval
            while let Some(h) = p.right.high {
                if self.edges[h].target != u {
                    break;
                }
                p.right.high = self.edges[h].reference;
            }
            if p.right.high.is_none() {
                if let Some(low) = p.right.low {
                    // just emptied
                    self.edges[low].reference = p.left.low;
                    self.edges[low].side = -1;
                    p.right.low = None;
                }
            }
            self.stack.push(p);
        }

        // side of e is side of a highest return edge
        if self.edges[e].lowpt < hu {
            let top = *self
                .stack
                .last()
                .ok_or_else(|| PlanarityError::ConstraintStackUnderflow {
                    edge: self.describe(e),
                })?;
            let (hl, hr) = (top.left.high, top.right.high);
            let reference = match (hl, hr) {
                (Some(l), None) => Some(l),
                (Some(l), Some(r)) if self.lowpt(Some(l))? > self.lowpt(Some(r))? => Some(l),
                _ => hr,
            };
            self.edges[e].reference = reference;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::IndexedGraph;
    use crate::graph::fixtures::indexed;

    fn tested(edges: &[(u32, u32)]) -> bool {
        let ig = indexed(edges);
        LrPlanarity::new(&ig, None)
            .with_edge_bound(false)
            .test()
            .unwrap()
    }

    #[test]
    fn interval_and_pair_basics() {
        assert!(Interval::default().is_empty());
        let mut p = ConflictPair::back_edge(3);
        assert!(p.left.is_empty());
        assert_eq!(p.right, Interval { low: Some(3), high: Some(3) });
        p.swap();
        assert!(p.right.is_empty());
        assert!(!p.left.is_empty());
    }

    #[test]
    fn wheel_is_planar() {
        let mut edges: Vec<(u32, u32)> = (1..=6).map(|i| (0, i)).collect();
        edges.extend((1..=6).map(|i| (i, i % 6 + 1)));
        assert!(tested(&edges));
    }

    #[test]
    fn petersen_is_not_planar() {
        let mut edges: Vec<(u32, u32)> = (0..5).map(|i| (i, (i + 1) % 5)).collect();
        edges.extend((0..5).map(|i| (i, i + 5)));
        edges.extend((0..5).map(|i| (i + 5, (i + 2) % 5 + 5)));
        assert!(!tested(&edges));
    }

    #[test]
    fn stack_is_drained_after_planar_component() {
        let ig = indexed(&[(0, 1), (1, 2), (2, 0), (2, 3), (3, 0)]);
        let mut lr = LrPlanarity::new(&ig, None);
        assert!(lr.orient_and_test().unwrap());
        assert!(lr.stack.is_empty());
    }

    /// Triangle 0 -> 1 -> 2 oriented from 0; no testing pass run yet.
    fn oriented_triangle() -> IndexedGraph<u32> {
        indexed(&[(0, 1), (1, 2), (2, 0)])
    }

    #[test]
    fn merging_on_an_empty_stack_underflows() {
        let ig = oriented_triangle();
        let mut lr = LrPlanarity::new(&ig, None);
        lr.height[0] = 0;
        lr.dfs_orientation(0);
        assert!(lr.stack.is_empty());
        assert!(matches!(
            lr.add_constraints(1, 0),
            Err(PlanarityError::ConstraintStackUnderflow { .. })
        ));
    }

    #[test]
    fn returning_tree_edge_needs_a_pair_on_the_stack() {
        let ig = oriented_triangle();
        let mut lr = LrPlanarity::new(&ig, None);
        lr.height[0] = 0;
        lr.dfs_orientation(0);
        // edge {1,2} is the tree edge 1 -> 2 with lowpt 0 below height 1
        let e = ig
            .incident_edges(2)
            .iter()
            .copied()
            .find(|&e| lr.edges[e].source == 1)
            .unwrap();
        assert!(lr.edges[e].lowpt < lr.height[1]);
        assert!(matches!(
            lr.remove_back_edges(e),
            Err(PlanarityError::ConstraintStackUnderflow { .. })
        ));
    }

    #[test]
    fn unoriented_interval_bound_has_no_lowpoint() {
        let ig = oriented_triangle();
        let lr = LrPlanarity::new(&ig, None);
        let bound = Interval { low: Some(0), high: Some(0) };
        assert!(matches!(
            lr.conflicting(bound, 1),
            Err(PlanarityError::MissingLowpoint { .. })
        ));
        let pair = ConflictPair { left: Interval::default(), right: bound };
        assert!(matches!(
            lr.lowest(&pair),
            Err(PlanarityError::MissingLowpoint { .. })
        ));
    }
}

//! Orientation pass: DFS that roots each component and classifies edges.

use std::cmp::Ordering;
use std::fmt::Debug;
use std::hash::Hash;

use super::{EdgeIdx, LrPlanarity, OrientedEdge, UNVISITED, VertexIdx};

struct Frame {
    v: VertexIdx,
    /// Next position in `v`'s incidence list.
    next: usize,
    /// Tree edge whose subtree is being explored.
    pending: Option<EdgeIdx>,
}

impl Frame {
    fn new(v: VertexIdx) -> Self {
        Self {
            v,
            next: 0,
            pending: None,
        }
    }
}

impl<V: Copy + Eq + Hash + Debug> LrPlanarity<'_, V> {
    /// Orient every active edge reachable from `root` (height already set).
    ///
    /// An edge is oriented away from whichever endpoint the DFS reaches it
    /// from first: towards unvisited vertices it becomes a tree edge, towards
    /// visited ones (necessarily ancestors) a back edge.
    pub(super) fn dfs_orientation(&mut self, root: VertexIdx) {
        let graph = self.graph;
        let mut frames = vec![Frame::new(root)];
        while let Some(frame) = frames.last_mut() {
            let v = frame.v;
            if let Some(e) = frame.pending.take() {
                self.finish_edge(v, e);
                frame.next += 1;
            }

            let incident = graph.incident_edges(v);
            let mut descend = None;
            while frame.next < incident.len() {
                let e = incident[frame.next];
                if !self.is_active(e) || self.edges[e].oriented {
                    frame.next += 1;
                    continue;
                }
                let w = graph.other_endpoint(e, v);
                let hv = self.height[v];
                self.edges[e] = OrientedEdge {
                    source: v,
                    target: w,
                    oriented: true,
                    lowpt: hv,
                    lowpt2: hv,
                    ..OrientedEdge::default()
                };
                if self.height[w] == UNVISITED {
                    self.parent_edge[w] = Some(e);
                    self.height[w] = hv + 1;
                    frame.pending = Some(e);
                    descend = Some(w);
                    break;
                }
                self.edges[e].lowpt = self.height[w];
                self.finish_edge(v, e);
                frame.next += 1;
            }

            match descend {
                Some(w) => frames.push(Frame::new(w)),
                None => {
                    frames.pop();
                }
            }
        }
    }

    /// Fix `nesting_depth` of `e = (v, _)` and fold its return points into
    /// the parent edge of `v`, keeping the two smallest distinct heights.
    fn finish_edge(&mut self, v: VertexIdx, e: EdgeIdx) {
        let hv = self.height[v];
        let edge = &mut self.edges[e];
        edge.nesting_depth = 2 * edge.lowpt as isize;
        if edge.lowpt2 < hv {
            // chordal
            edge.nesting_depth += 1;
        }
        let (low, low2) = (edge.lowpt, edge.lowpt2);

        let Some(pe) = self.parent_edge[v] else {
            return;
        };
        let parent = &mut self.edges[pe];
        match low.cmp(&parent.lowpt) {
            Ordering::Less => {
                parent.lowpt2 = parent.lowpt.min(low2);
                parent.lowpt = low;
            }
            Ordering::Greater => parent.lowpt2 = parent.lowpt2.min(low),
            Ordering::Equal => parent.lowpt2 = parent.lowpt2.min(low2),
        }
    }
}

//! Left-Right planarity test on dense indices.
//!
//! Pipeline, in order:
//! 1. [`orientation`]: DFS orienting every edge as tree or back edge and
//!    computing `lowpt`, `lowpt2` and `nesting_depth`.
//! 2. Adjacency sorted by `nesting_depth`.
//! 3. [`constraints`]: DFS testing pass over the conflict-pair stack.
//! 4. [`sides`]: `ref` chains resolved into absolute sides.
//! 5. [`embedding`]: DFS splicing every back edge into its rotation.
//!
//! All three DFS passes use explicit frame stacks, so depth is bounded by
//! heap memory rather than the call stack.
//!
//! Reference: U. Brandes, "The Left-Right Planarity Test" (2009).

mod constraints;
mod embedding;
mod orientation;
mod sides;

use std::fmt::Debug;
use std::hash::Hash;

use itertools::Itertools;

use crate::embedding::rotation::RotationSystem;
use crate::graph::IndexedGraph;
use crate::planarity_error::PlanarityError;
use constraints::ConflictPair;

pub(crate) type VertexIdx = usize;
pub(crate) type EdgeIdx = usize;

/// Height of a vertex not yet reached by the orientation DFS.
const UNVISITED: usize = usize::MAX;

/// Record of one oriented edge, addressed by its undirected edge id.
#[derive(Debug, Clone, Copy)]
struct OrientedEdge {
    source: VertexIdx,
    target: VertexIdx,
    oriented: bool,
    lowpt: usize,
    lowpt2: usize,
    nesting_depth: isize,
    /// ±1; relative to `reference` until resolved.
    side: i8,
    reference: Option<EdgeIdx>,
    lowpt_edge: Option<EdgeIdx>,
    /// Constraint-stack height when testing of this edge began.
    stack_bottom: usize,
}

impl Default for OrientedEdge {
    fn default() -> Self {
        Self {
            source: 0,
            target: 0,
            oriented: false,
            lowpt: 0,
            lowpt2: 0,
            nesting_depth: 0,
            side: 1,
            reference: None,
            lowpt_edge: None,
            stack_bottom: 0,
        }
    }
}

/// State of one Left-Right run. Owned by a single invocation; nothing is
/// shared between runs.
pub(crate) struct LrPlanarity<'g, V> {
    graph: &'g IndexedGraph<V>,
    /// Edge mask; `None` means every edge participates.
    active: Option<&'g [bool]>,
    edge_bound: bool,

    height: Vec<usize>,
    parent_edge: Vec<Option<EdgeIdx>>,
    roots: Vec<VertexIdx>,
    /// Outgoing oriented edges sorted by `nesting_depth`.
    ordered_adjs: Vec<Vec<EdgeIdx>>,
    edges: Vec<OrientedEdge>,

    stack: Vec<ConflictPair>,

    left_ref: Vec<Option<VertexIdx>>,
    right_ref: Vec<Option<VertexIdx>>,
}

impl<'g, V: Copy + Eq + Hash + Debug> LrPlanarity<'g, V> {
    pub(crate) fn new(graph: &'g IndexedGraph<V>, active: Option<&'g [bool]>) -> Self {
        let n = graph.num_vertices();
        let m = graph.num_edges();
        Self {
            graph,
            active,
            edge_bound: true,
            height: vec![UNVISITED; n],
            parent_edge: vec![None; n],
            roots: Vec::new(),
            ordered_adjs: vec![Vec::new(); n],
            edges: vec![OrientedEdge::default(); m],
            stack: Vec::new(),
            left_ref: vec![None; n],
            right_ref: vec![None; n],
        }
    }

    /// Toggle the `|E| > 3|V| - 6` rejection that skips the DFS passes.
    pub(crate) fn with_edge_bound(mut self, enabled: bool) -> Self {
        self.edge_bound = enabled;
        self
    }

    /// Planarity verdict only (orientation + testing).
    pub(crate) fn test(mut self) -> Result<bool, PlanarityError> {
        self.orient_and_test()
    }

    /// Full run. `Ok(None)` means non-planar.
    pub(crate) fn run(mut self) -> Result<Option<RotationSystem>, PlanarityError> {
        if !self.orient_and_test()? {
            return Ok(None);
        }

        let oriented: Vec<EdgeIdx> = (0..self.edges.len())
            .filter(|&e| self.edges[e].oriented)
            .collect();
        for &e in &oriented {
            let side = self.sign(e)?;
            self.edges[e].nesting_depth *= isize::from(side);
        }
        self.sort_adjacency();
        log::debug!("lr: sides resolved for {} oriented edges", oriented.len());

        let mut rotation = RotationSystem::new(self.graph.num_vertices());
        for v in 0..self.graph.num_vertices() {
            let mut previous = None;
            for &e in &self.ordered_adjs[v] {
                let w = self.edges[e].target;
                if !rotation.add_half_edge_cw(v, w, previous) {
                    return Err(self.splice_error(e));
                }
                previous = Some(w);
            }
        }
        for root in self.roots.clone() {
            self.dfs_embedding(root, &mut rotation)?;
        }
        log::debug!("lr: embedding built");
        Ok(Some(rotation))
    }

    fn orient_and_test(&mut self) -> Result<bool, PlanarityError> {
        let n = self.graph.num_vertices();
        let m = self.active_edge_count();
        if self.edge_bound && n > 2 && m > 3 * n - 6 {
            log::debug!("lr: {m} edges exceed 3*{n}-6, rejecting without DFS");
            return Ok(false);
        }

        for v in 0..n {
            if self.height[v] == UNVISITED {
                self.height[v] = 0;
                self.roots.push(v);
                self.dfs_orientation(v);
            }
        }
        self.sort_adjacency();
        log::debug!(
            "lr: oriented {m} edges over {n} vertices in {} component(s)",
            self.roots.len()
        );

        for root in self.roots.clone() {
            if !self.dfs_testing(root)? {
                log::debug!("lr: conflict under root {:?}, graph is not planar", self.graph.key(root));
                return Ok(false);
            }
        }
        Ok(true)
    }

    fn is_active(&self, e: EdgeIdx) -> bool {
        self.active.is_none_or(|mask| mask[e])
    }

    fn active_edge_count(&self) -> usize {
        match self.active {
            Some(mask) => mask.iter().filter(|&&a| a).count(),
            None => self.graph.num_edges(),
        }
    }

    /// Rebuild every vertex's outgoing list ordered by current `nesting_depth`.
    /// Ties keep incidence order.
    fn sort_adjacency(&mut self) {
        let graph = self.graph;
        for v in 0..graph.num_vertices() {
            self.ordered_adjs[v] = graph
                .incident_edges(v)
                .iter()
                .copied()
                .filter(|&e| self.edges[e].oriented && self.edges[e].source == v)
                .sorted_by_key(|&e| self.edges[e].nesting_depth)
                .collect();
        }
    }

    /// `lowpt` of an interval bound, failing on bounds that were never oriented.
    fn lowpt(&self, e: Option<EdgeIdx>) -> Result<usize, PlanarityError> {
        match e {
            Some(e) if self.edges[e].oriented => Ok(self.edges[e].lowpt),
            Some(e) => Err(PlanarityError::MissingLowpoint {
                edge: self.describe(e),
            }),
            None => Err(PlanarityError::MissingLowpoint {
                edge: "<empty bound>".to_string(),
            }),
        }
    }

    fn describe(&self, e: EdgeIdx) -> String {
        let edge = &self.edges[e];
        let (a, b) = if edge.oriented {
            (edge.source, edge.target)
        } else {
            self.graph.endpoints(e)
        };
        format!("#{e} ({:?} -> {:?})", self.graph.key(a), self.graph.key(b))
    }

    fn splice_error(&self, e: EdgeIdx) -> PlanarityError {
        PlanarityError::EmbeddingInvariant(format!(
            "could not splice edge {} into its rotation",
            self.describe(e)
        ))
    }
}

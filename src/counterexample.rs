//! Kuratowski counterexamples for non-planar graphs.
//!
//! Extraction is deliberately brute force: every edge is tentatively removed
//! and the planarity test re-run on what is left. Edges whose removal makes
//! the remainder planar are essential and stay; all others go. One pass over
//! the edges leaves an edge-minimal non-planar subgraph, which by
//! Kuratowski's theorem is a subdivision of K5 or K3,3. Cost is
//! `O(E * (V + E))`; this is a diagnostic path, not the hot path.
//!
//! Each re-run toggles an edge mask over a single [`IndexedGraph`], so no graph is
//! copied.

use std::fmt::Debug;
use std::hash::Hash;

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use crate::debug_invariants::DebugInvariants;
use crate::graph::{IndexedGraph, SimpleGraph};
use crate::lr::LrPlanarity;
use crate::planarity_error::PlanarityError;

/// Which Kuratowski graph a witness subdivides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KuratowskiKind {
    K5Subdivision,
    K33Subdivision,
}

/// A minimal non-planar subgraph of the input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Witness<V> {
    vertices: Vec<V>,
    edges: Vec<(V, V)>,
}

impl<V: Copy + Eq + Hash + Debug> Witness<V> {
    /// Vertices touched by witness edges, in input order.
    pub fn vertices(&self) -> &[V] {
        &self.vertices
    }

    /// Witness edges, in input order.
    pub fn edges(&self) -> &[(V, V)] {
        &self.edges
    }

    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// Whether `{u, v}` is a witness edge (either orientation).
    pub fn contains_edge(&self, u: &V, v: &V) -> bool {
        self.edges
            .iter()
            .any(|(a, b)| (a == u && b == v) || (a == v && b == u))
    }

    pub fn to_graph(&self) -> SimpleGraph<V> {
        self.edges.iter().copied().collect()
    }

    /// Classify by branch vertices: five of degree 4 for K5, six of degree 3
    /// for K3,3, every other vertex of degree 2.
    pub fn kind(&self) -> Result<KuratowskiKind, PlanarityError> {
        let mut degree: HashMap<V, usize> = HashMap::with_capacity(self.vertices.len());
        for &(u, v) in &self.edges {
            *degree.entry(u).or_default() += 1;
            *degree.entry(v).or_default() += 1;
        }
        let mut branch = Vec::new();
        for (&v, &d) in &degree {
            match d {
                2 => {}
                3 | 4 => branch.push(d),
                _ => {
                    return Err(PlanarityError::InvalidWitness(format!(
                        "vertex {v:?} has degree {d}"
                    )));
                }
            }
        }
        match (branch.len(), branch.iter().all(|&d| d == 4), branch.iter().all(|&d| d == 3)) {
            (5, true, _) => Ok(KuratowskiKind::K5Subdivision),
            (6, _, true) => Ok(KuratowskiKind::K33Subdivision),
            _ => Err(PlanarityError::InvalidWitness(format!(
                "branch vertex degrees {branch:?} match neither K5 nor K3,3"
            ))),
        }
    }

    /// Check edge-minimality: the witness is non-planar and deleting any one
    /// of its edges leaves a planar graph.
    ///
    /// A malformed witness (edge outside the vertex set, self-loop, repeated
    /// edge) is an [`PlanarityError::InvalidWitness`] error, not a verdict.
    ///
    /// The single-edge deletions are independent; with the `rayon` feature they run in parallel.
    pub fn verify_minimal(&self) -> Result<bool, PlanarityError> {
        let graph = self.dense()?;
        if LrPlanarity::new(&graph, None).test()? {
            return Ok(false);
        }
        let m = graph.num_edges();
        let planar_without = |e: usize| -> Result<bool, PlanarityError> {
            let mut mask = vec![true; m];
            mask[e] = false;
            LrPlanarity::new(&graph, Some(&mask)).test()
        };

        #[cfg(feature = "rayon")]
        let planar: Vec<bool> = {
            use rayon::prelude::*;
            (0..m).into_par_iter().map(planar_without).collect::<Result<_, _>>()?
        };
        #[cfg(not(feature = "rayon"))]
        let planar: Vec<bool> = (0..m).map(planar_without).collect::<Result<_, _>>()?;

        Ok(planar.into_iter().all(|p| p))
    }

    /// Witness relabelled to `0..n`, so verification never needs `V: Send + Sync`.
    ///
    /// Fails on edges that leave the vertex set, self-loops and repeated
    /// edges.
    fn dense(&self) -> Result<IndexedGraph<usize>, PlanarityError> {
        let pos: HashMap<V, usize> = self
            .vertices
            .iter()
            .enumerate()
            .map(|(i, &v)| (v, i))
            .collect();
        let mut g = SimpleGraph::with_capacity(self.vertices.len(), self.edges.len());
        for i in 0..self.vertices.len() {
            g.add_vertex(i);
        }
        for (u, v) in &self.edges {
            let (Some(&a), Some(&b)) = (pos.get(u), pos.get(v)) else {
                return Err(Self::stray_edge(u, v));
            };
            if !g.add_edge(a, b) {
                return Err(PlanarityError::InvalidWitness(format!(
                    "edge ({u:?}, {v:?}) is a self-loop or repeats an earlier edge"
                )));
            }
        }
        Ok(IndexedGraph::from_view(&g))
    }

    fn stray_edge(u: &V, v: &V) -> PlanarityError {
        PlanarityError::InvalidWitness(format!("edge ({u:?}, {v:?}) leaves the vertex set"))
    }
}

impl<V: Copy + Eq + Hash + Debug> DebugInvariants for Witness<V> {
    fn validate_invariants(&self) -> Result<(), PlanarityError> {
        self.dense()?;
        self.kind().map(|_| ())
    }
}

/// Shrink the non-planar `graph` to an edge-minimal non-planar subgraph.
pub(crate) fn extract_witness<V>(graph: &IndexedGraph<V>) -> Result<Witness<V>, PlanarityError>
where
    V: Copy + Eq + Hash + Debug,
{
    let m = graph.num_edges();
    let mut active = vec![true; m];
    let mut essential = vec![false; m];
    let mut reruns = 0usize;

    for v in 0..graph.num_vertices() {
        for &e in graph.incident_edges(v) {
            if !active[e] || essential[e] {
                continue;
            }
            active[e] = false;
            reruns += 1;
            let planar = LrPlanarity::new(graph, Some(&active))
                .test()
                .inspect_err(|err| log::warn!("counterexample re-run without edge #{e} failed: {err}"))?;
            if planar {
                active[e] = true;
                essential[e] = true;
            }
        }
    }

    let mut touched = vec![false; graph.num_vertices()];
    let mut edges = Vec::new();
    for e in (0..m).filter(|&e| active[e]) {
        let (a, b) = graph.endpoints(e);
        touched[a] = true;
        touched[b] = true;
        edges.push(graph.edge_keys(e));
    }
    let vertices: Vec<V> = (0..graph.num_vertices())
        .filter(|&v| touched[v])
        .map(|v| graph.key(v))
        .collect();
    log::info!(
        "counterexample: {} of {m} edges kept after {reruns} re-runs",
        edges.len()
    );

    let witness = Witness { vertices, edges };
    crate::debug_invariants!(&witness, "extracted witness");
    Ok(witness)
}

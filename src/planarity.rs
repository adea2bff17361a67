//! Public entry points: planarity test, embedding and counterexample.
//!
//! ```
//! use lr_planarity::prelude::*;
//!
//! let k4: SimpleGraph<u8> = [(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)]
//!     .into_iter()
//!     .collect();
//! let embedding = check_planarity(&k4, false)?.into_embedding().unwrap();
//! assert_eq!(embedding.faces()?.len(), 4);
//! # Ok::<(), PlanarityError>(())
//! ```

use std::fmt::Debug;
use std::hash::Hash;

use crate::counterexample::{Witness, extract_witness};
use crate::embedding::Embedding;
use crate::graph::{GraphView, IndexedGraph};
use crate::lr::LrPlanarity;
use crate::planarity_error::PlanarityError;

/// Knobs for [`check_planarity_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlanarityOptions {
    /// Extract a Kuratowski witness when the graph is not planar.
    pub counterexample: bool,
    /// Run [`Embedding::check_structure`] on the result before returning it.
    pub verify_embedding: bool,
    /// Reject graphs with `|E| > 3|V| - 6` before any DFS.
    pub edge_bound_shortcut: bool,
}

impl Default for PlanarityOptions {
    fn default() -> Self {
        Self {
            counterexample: false,
            verify_embedding: cfg!(debug_assertions),
            edge_bound_shortcut: true,
        }
    }
}

/// Outcome of a planarity test.
#[derive(Debug, Clone)]
pub enum Planarity<V> {
    /// The graph is planar; here is a combinatorial embedding of it.
    Planar(Embedding<V>),
    /// The graph is not planar. Carries a witness only if one was requested.
    NonPlanar(Option<Witness<V>>),
}

impl<V> Planarity<V> {
    pub fn is_planar(&self) -> bool {
        matches!(self, Planarity::Planar(_))
    }

    pub fn embedding(&self) -> Option<&Embedding<V>> {
        match self {
            Planarity::Planar(e) => Some(e),
            Planarity::NonPlanar(_) => None,
        }
    }

    pub fn into_embedding(self) -> Option<Embedding<V>> {
        match self {
            Planarity::Planar(e) => Some(e),
            Planarity::NonPlanar(_) => None,
        }
    }

    pub fn witness(&self) -> Option<&Witness<V>> {
        match self {
            Planarity::NonPlanar(w) => w.as_ref(),
            Planarity::Planar(_) => None,
        }
    }

    /// `Ok(embedding)` or `Err(optional witness)`.
    pub fn into_result(self) -> Result<Embedding<V>, Option<Witness<V>>> {
        match self {
            Planarity::Planar(e) => Ok(e),
            Planarity::NonPlanar(w) => Err(w),
        }
    }
}

/// Test `graph` for planarity and embed it if possible.
///
/// Self-loops are ignored and parallel edges collapse to one. With
/// `want_counterexample` a non-planar verdict carries a minimal K5 or K3,3
/// subdivision taken from `graph`.
pub fn check_planarity<G>(graph: &G, want_counterexample: bool) -> Result<Planarity<G::VertexId>, PlanarityError>
where
    G: GraphView + ?Sized,
{
    let opts = PlanarityOptions {
        counterexample: want_counterexample,
        ..PlanarityOptions::default()
    };
    check_planarity_with(graph, &opts)
}

/// [`check_planarity`] with explicit [`PlanarityOptions`].
pub fn check_planarity_with<G>(
    graph: &G,
    opts: &PlanarityOptions,
) -> Result<Planarity<G::VertexId>, PlanarityError>
where
    G: GraphView + ?Sized,
{
    let dense = IndexedGraph::from_view(graph);
    log::debug!(
        "check_planarity: {} vertices, {} edges",
        dense.num_vertices(),
        dense.num_edges()
    );

    let rotation = LrPlanarity::new(&dense, None)
        .with_edge_bound(opts.edge_bound_shortcut)
        .run()?;
    let Some(rotation) = rotation else {
        let witness = if opts.counterexample {
            Some(extract_witness(&dense)?)
        } else {
            None
        };
        return Ok(Planarity::NonPlanar(witness));
    };

    let (keys, index) = dense.into_keys();
    let embedding = Embedding::from_parts(keys, index, rotation);
    if opts.verify_embedding {
        embedding.check_structure()?;
    } else {
        crate::debug_invariants!(&embedding, "check_planarity embedding");
    }
    Ok(Planarity::Planar(embedding))
}

/// Planarity verdict only; skips the embedding pass.
pub fn is_planar<G>(graph: &G) -> Result<bool, PlanarityError>
where
    G: GraphView + ?Sized,
{
    let dense = IndexedGraph::from_view(graph);
    LrPlanarity::new(&dense, None).test()
}

/// Minimal non-planar subgraph of `graph`, or [`PlanarityError::GraphIsPlanar`].
pub fn get_counterexample<G>(graph: &G) -> Result<Witness<G::VertexId>, PlanarityError>
where
    G: GraphView + ?Sized,
{
    let dense = IndexedGraph::from_view(graph);
    if LrPlanarity::new(&dense, None).test()? {
        return Err(PlanarityError::GraphIsPlanar);
    }
    extract_witness(&dense)
}

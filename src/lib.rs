#![cfg_attr(docsrs, feature(doc_cfg))]
//! # lr-planarity
//!
//! lr-planarity decides whether an undirected graph can be drawn in the plane
//! without crossings, using the Left-Right planarity test (Brandes). Planar
//! graphs come back with a combinatorial embedding; non-planar graphs can come
//! back with a Kuratowski witness, a minimal subgraph that subdivides K5 or
//! K3,3.
//!
//! ## Features
//! - Linear-time planarity test with iterative DFS passes (no recursion depth limit)
//! - Half-edge rotation system [`Embedding`] with face traversal and structural checks
//! - Edge-minimal Kuratowski [`Witness`] extraction and verification
//! - Any adjacency structure plugs in through the [`GraphView`] trait
//!
//! ## Usage
//! ```toml
//! [dependencies]
//! lr-planarity = "0.3"
//! # Optional features:
//! # features = ["rayon", "strict-invariants"]
//! ```
//!
//! ```
//! use lr_planarity::prelude::*;
//!
//! let k33: SimpleGraph<u8> = (0..3).flat_map(|a| (3..6).map(move |b| (a, b))).collect();
//! let witness = get_counterexample(&k33)?;
//! assert_eq!(witness.kind()?, KuratowskiKind::K33Subdivision);
//! # Ok::<(), PlanarityError>(())
//! ```
//!
//! ## Determinism
//!
//! Vertex and edge order of the input fixes the DFS order, so repeated runs on
//! the same graph return the same embedding and the same witness.
//!
//! ## Invariant checks
//! Embeddings and witnesses implement [`DebugInvariants`]. Debug builds
//! validate every result before returning it; enable `strict-invariants` or
//! `check-invariants` to keep the checks in release builds.

pub mod counterexample;
pub mod debug_invariants;
pub mod embedding;
pub mod graph;
mod lr;
pub mod planarity;
pub mod planarity_error;

pub use counterexample::{KuratowskiKind, Witness};
pub use debug_invariants::DebugInvariants;
pub use embedding::Embedding;
pub use graph::{GraphView, IndexedGraph, SimpleGraph};
pub use planarity::{
    Planarity, PlanarityOptions, check_planarity, check_planarity_with, get_counterexample,
    is_planar,
};
pub use planarity_error::PlanarityError;

/// A convenient prelude to import the most-used traits & types:
pub mod prelude {
    pub use crate::counterexample::{KuratowskiKind, Witness};
    pub use crate::debug_invariants::DebugInvariants;
    pub use crate::embedding::Embedding;
    pub use crate::graph::{GraphView, SimpleGraph};
    pub use crate::planarity::{
        Planarity, PlanarityOptions, check_planarity, check_planarity_with, get_counterexample,
        is_planar,
    };
    pub use crate::planarity_error::PlanarityError;
}

//! PlanarityError: Unified error type for lr-planarity public APIs
//!
//! A non-planar verdict is never an error; it travels through
//! [`Planarity::NonPlanar`](crate::planarity::Planarity). This type covers
//! caller contract violations and internal invariant breaks of the
//! Left-Right pipeline.

use thiserror::Error;

/// Unified error type for planarity operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PlanarityError {
    /// A vertex was queried that is not part of the graph or embedding.
    #[error("Vertex `{0}` is not present in the graph")]
    VertexNotFound(String),
    /// A half-edge was referenced that does not exist in the embedding.
    #[error("Half-edge `{from}` -> `{to}` is not present in the embedding")]
    HalfEdgeNotFound { from: String, to: String },
    /// A counterexample was requested for a planar graph.
    #[error("Graph is planar: no Kuratowski counterexample exists")]
    GraphIsPlanar,
    /// A witness is not a subdivision of K5 or K3,3.
    #[error("Invalid Kuratowski witness: {0}")]
    InvalidWitness(String),
    /// The conflict-pair stack was empty where a pair was required.
    #[error("Constraint stack underflow while processing edge {edge}")]
    ConstraintStackUnderflow { edge: String },
    /// Side resolution followed a `ref` chain that never terminates.
    #[error("Cyclic side reference chain starting at edge {edge}")]
    CyclicReference { edge: String },
    /// An interval bound referenced an edge that was never oriented.
    #[error("Edge {edge} has no lowpoint (edge was never oriented)")]
    MissingLowpoint { edge: String },
    /// The rotation system violates a structural invariant.
    #[error("Bad embedding: {0}")]
    EmbeddingInvariant(String),
}

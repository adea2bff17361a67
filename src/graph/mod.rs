//! Graph View: read-only adjacency access over simple undirected graphs.
//!
//! - [`GraphView`] is the seam callers implement for their own graph types.
//! - [`SimpleGraph`] is an owned, insertion-ordered simple graph.
//! - [`IndexedGraph`] is the dense pre-pass every algorithm in this crate runs
//!   on: keys are mapped to `0..n`, self-loops dropped, multi-edges collapsed,
//!   and incidences stored in CSR form.

#[cfg(test)]
pub(crate) mod fixtures;
pub mod indexed;
pub mod simple;
pub mod view;

pub use indexed::IndexedGraph;
pub use simple::SimpleGraph;
pub use view::GraphView;

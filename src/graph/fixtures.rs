//! Small graph builders shared by the unit tests.

use crate::graph::{IndexedGraph, SimpleGraph};

/// Edge list of K_n over `0..n`.
pub(crate) fn complete_edges(n: u32) -> Vec<(u32, u32)> {
    (0..n).flat_map(|u| (u + 1..n).map(move |v| (u, v))).collect()
}

pub(crate) fn complete(n: u32) -> SimpleGraph<u32> {
    complete_edges(n).into_iter().collect()
}

/// K_{3,3} with sides `0..3` and `3..6`.
pub(crate) fn k33_edges() -> Vec<(u32, u32)> {
    (0..3).flat_map(|a| (3..6).map(move |b| (a, b))).collect()
}

pub(crate) fn simple(edges: &[(u32, u32)]) -> SimpleGraph<u32> {
    edges.iter().copied().collect()
}

pub(crate) fn indexed(edges: &[(u32, u32)]) -> IndexedGraph<u32> {
    IndexedGraph::from_view(&simple(edges))
}

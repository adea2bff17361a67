// Graph trait abstraction for planarity testing
use std::fmt::Debug;
use std::hash::Hash;

/// Read-only adjacency access to an undirected graph.
///
/// Implementors may report each edge from one or both endpoints; the dense
/// pre-pass ([`IndexedGraph`](crate::graph::IndexedGraph)) collapses repeats
/// and drops self-loops, so neither needs to be filtered here.
pub trait GraphView {
    /// Vertex identifier type (must be copyable, hashable and printable for diagnostics).
    type VertexId: Copy + Hash + Eq + Debug;

    /// Iterator over all vertices, including isolated ones.
    fn vertices(&self) -> impl Iterator<Item = Self::VertexId> + '_;

    /// Iterator over the neighbours of `v`. Unknown vertices yield nothing.
    fn neighbors(&self, v: Self::VertexId) -> impl Iterator<Item = Self::VertexId> + '_;

    /// Degree of a vertex as reported by [`neighbors`](Self::neighbors).
    fn degree(&self, v: Self::VertexId) -> usize {
        self.neighbors(v).count()
    }

    /// Every reported adjacency `(u, v)`; undirected edges may appear twice.
    fn edges(&self) -> impl Iterator<Item = (Self::VertexId, Self::VertexId)> + '_ {
        self.vertices()
            .flat_map(move |u| self.neighbors(u).map(move |v| (u, v)))
    }
}

/// Plain adjacency lists over `0..len`.
impl GraphView for Vec<Vec<usize>> {
    type VertexId = usize;

    fn vertices(&self) -> impl Iterator<Item = usize> + '_ {
        0..self.len()
    }

    fn neighbors(&self, v: usize) -> impl Iterator<Item = usize> + '_ {
        self.get(v).into_iter().flatten().copied()
    }
}

//! Owned simple undirected graph with stable insertion order.
//!
//! Self-loops are silently dropped and repeated edges collapse to one, so a
//! `SimpleGraph` is always a valid input for the planarity test as built.

use std::hash::Hash;

use hashbrown::{HashMap, HashSet};

use crate::graph::view::GraphView;

/// Simple undirected graph keyed by caller vertex ids.
#[derive(Debug, Clone)]
pub struct SimpleGraph<V> {
    /// Vertex keys in insertion order.
    order: Vec<V>,
    /// Map from key to position in `order`.
    index: HashMap<V, usize>,
    /// Neighbour positions, in edge insertion order.
    adj: Vec<Vec<usize>>,
    /// Normalized `(lo, hi)` position pairs.
    edge_set: HashSet<(usize, usize)>,
}

impl<V> Default for SimpleGraph<V> {
    fn default() -> Self {
        Self {
            order: Vec::new(),
            index: HashMap::new(),
            adj: Vec::new(),
            edge_set: HashSet::new(),
        }
    }
}

fn norm(a: usize, b: usize) -> (usize, usize) {
    if a <= b { (a, b) } else { (b, a) }
}

impl<V: Copy + Eq + Hash> SimpleGraph<V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(vertices: usize, edges: usize) -> Self {
        Self {
            order: Vec::with_capacity(vertices),
            index: HashMap::with_capacity(vertices),
            adj: Vec::with_capacity(vertices),
            edge_set: HashSet::with_capacity(edges),
        }
    }

    /// Insert `v` if absent and return its position.
    pub fn add_vertex(&mut self, v: V) -> usize {
        if let Some(&i) = self.index.get(&v) {
            return i;
        }
        let i = self.order.len();
        self.order.push(v);
        self.index.insert(v, i);
        self.adj.push(Vec::new());
        i
    }

    /// Insert the undirected edge `{u, v}`, adding missing endpoints.
    ///
    /// Returns `false` for self-loops and edges already present.
    pub fn add_edge(&mut self, u: V, v: V) -> bool {
        let iu = self.add_vertex(u);
        let iv = self.add_vertex(v);
        if iu == iv || !self.edge_set.insert(norm(iu, iv)) {
            return false;
        }
        self.adj[iu].push(iv);
        self.adj[iv].push(iu);
        true
    }

    /// Remove the undirected edge `{u, v}`; endpoints stay in the graph.
    pub fn remove_edge(&mut self, u: V, v: V) -> bool {
        let (Some(&iu), Some(&iv)) = (self.index.get(&u), self.index.get(&v)) else {
            return false;
        };
        if !self.edge_set.remove(&norm(iu, iv)) {
            return false;
        }
        self.adj[iu].retain(|&x| x != iv);
        self.adj[iv].retain(|&x| x != iu);
        true
    }

    pub fn contains_vertex(&self, v: &V) -> bool {
        self.index.contains_key(v)
    }

    pub fn contains_edge(&self, u: &V, v: &V) -> bool {
        match (self.index.get(u), self.index.get(v)) {
            (Some(&iu), Some(&iv)) => self.edge_set.contains(&norm(iu, iv)),
            _ => false,
        }
    }

    pub fn num_vertices(&self) -> usize {
        self.order.len()
    }

    pub fn num_edges(&self) -> usize {
        self.edge_set.len()
    }

    /// Each undirected edge once, oriented from the earlier-inserted endpoint.
    pub fn edge_list(&self) -> Vec<(V, V)> {
        self.adj
            .iter()
            .enumerate()
            .flat_map(|(i, nbrs)| {
                nbrs.iter()
                    .filter(move |&&j| i < j)
                    .map(move |&j| (self.order[i], self.order[j]))
            })
            .collect()
    }
}

impl<V: Copy + Eq + Hash> FromIterator<(V, V)> for SimpleGraph<V> {
    fn from_iter<I: IntoIterator<Item = (V, V)>>(iter: I) -> Self {
        let mut g = Self::new();
        g.extend(iter);
        g
    }
}

impl<V: Copy + Eq + Hash> Extend<(V, V)> for SimpleGraph<V> {
    fn extend<I: IntoIterator<Item = (V, V)>>(&mut self, iter: I) {
        for (u, v) in iter {
            self.add_edge(u, v);
        }
    }
}

impl<V: Copy + Eq + Hash + std::fmt::Debug> GraphView for SimpleGraph<V> {
    type VertexId = V;

    fn vertices(&self) -> impl Iterator<Item = V> + '_ {
        self.order.iter().copied()
    }

    fn neighbors(&self, v: V) -> impl Iterator<Item = V> + '_ {
        self.index
            .get(&v)
            .into_iter()
            .flat_map(move |&i| self.adj[i].iter().map(move |&j| self.order[j]))
    }

    fn degree(&self, v: V) -> usize {
        self.index.get(&v).map_or(0, |&i| self.adj[i].len())
    }
}

//! Dense vertex/edge indexing over a [`GraphView`].
//!
//! All planarity passes run on parallel arrays indexed by `0..n` vertices and
//! `0..m` undirected edges. The key <-> index mapping lives only here, at
//! the boundary.

use std::fmt::Debug;
use std::hash::Hash;

use hashbrown::HashMap;

use crate::graph::view::GraphView;
use crate::planarity_error::PlanarityError;

/// CSR-style incidence structure with a caller-key mapping.
#[derive(Debug, Clone)]
pub struct IndexedGraph<V> {
    /// Vertex keys; position is the dense index.
    keys: Vec<V>,
    /// Map from key to dense index.
    index: HashMap<V, usize>,
    /// Undirected edges as `(lo, hi)` dense pairs; position is the edge id.
    edges: Vec<(usize, usize)>,
    /// CSR offsets into `incidence` for each vertex.
    xadj: Vec<usize>,
    /// CSR incidence list (edge ids).
    incidence: Vec<usize>,
}

fn intern<V: Copy + Eq + Hash>(keys: &mut Vec<V>, index: &mut HashMap<V, usize>, v: V) -> usize {
    *index.entry(v).or_insert_with(|| {
        keys.push(v);
        keys.len() - 1
    })
}

impl<V: Copy + Eq + Hash + Debug> IndexedGraph<V> {
    /// Build the dense form of `graph`.
    ///
    /// Vertices are numbered in the order the view reports them (neighbours
    /// not listed by [`GraphView::vertices`] are appended). Each vertex keeps
    /// its incident edges in the order its neighbours were reported.
    pub fn from_view<G>(graph: &G) -> Self
    where
        G: GraphView<VertexId = V> + ?Sized,
    {
        let mut keys = Vec::new();
        let mut index = HashMap::new();
        for v in graph.vertices() {
            intern(&mut keys, &mut index, v);
        }

        let mut edges: Vec<(usize, usize)> = Vec::new();
        let mut edge_ids: HashMap<(usize, usize), usize> = HashMap::new();
        // listed[e][0|1]: edge already recorded at its lo|hi endpoint
        let mut listed: Vec<[bool; 2]> = Vec::new();
        let mut incident: Vec<Vec<usize>> = vec![Vec::new(); keys.len()];

        let mut u = 0;
        while u < keys.len() {
            for w in graph.neighbors(keys[u]) {
                let w = intern(&mut keys, &mut index, w);
                if w == u {
                    continue;
                }
                if incident.len() < keys.len() {
                    incident.resize_with(keys.len(), Vec::new);
                }
                let key = if u < w { (u, w) } else { (w, u) };
                let e = *edge_ids.entry(key).or_insert_with(|| {
                    edges.push(key);
                    listed.push([false; 2]);
                    edges.len() - 1
                });
                let side = usize::from(u != key.0);
                if !listed[e][side] {
                    listed[e][side] = true;
                    incident[u].push(e);
                }
            }
            u += 1;
        }
        for (e, &(lo, hi)) in edges.iter().enumerate() {
            if !listed[e][0] {
                incident[lo].push(e);
            }
            if !listed[e][1] {
                incident[hi].push(e);
            }
        }

        let mut xadj = Vec::with_capacity(keys.len() + 1);
        let mut flat = Vec::with_capacity(2 * edges.len());
        xadj.push(0);
        for list in &incident {
            flat.extend_from_slice(list);
            xadj.push(flat.len());
        }

        Self {
            keys,
            index,
            edges,
            xadj,
            incidence: flat,
        }
    }

    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.keys.len()
    }

    #[inline]
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// Caller key of dense vertex `i`.
    #[inline]
    pub fn key(&self, i: usize) -> V {
        self.keys[i]
    }

    /// Dense index of `v`, failing fast for unknown vertices.
    pub fn index_of(&self, v: &V) -> Result<usize, PlanarityError> {
        self.index
            .get(v)
            .copied()
            .ok_or_else(|| PlanarityError::VertexNotFound(format!("{v:?}")))
    }

    /// Endpoints `(lo, hi)` of edge `e`.
    #[inline]
    pub fn endpoints(&self, e: usize) -> (usize, usize) {
        self.edges[e]
    }

    /// The endpoint of `e` that is not `v`.
    #[inline]
    pub fn other_endpoint(&self, e: usize, v: usize) -> usize {
        let (lo, hi) = self.edges[e];
        if lo == v { hi } else { lo }
    }

    /// Return the incident edge-id slice for vertex `v`.
    #[inline]
    pub fn incident_edges(&self, v: usize) -> &[usize] {
        &self.incidence[self.xadj[v]..self.xadj[v + 1]]
    }

    /// Edge `e` as a pair of caller keys.
    pub fn edge_keys(&self, e: usize) -> (V, V) {
        let (lo, hi) = self.edges[e];
        (self.keys[lo], self.keys[hi])
    }

    /// Hand the key mapping to an output structure.
    pub(crate) fn into_keys(self) -> (Vec<V>, HashMap<V, usize>) {
        (self.keys, self.index)
    }
}

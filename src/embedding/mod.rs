//! Combinatorial planar embeddings (rotation systems).
//!
//! An [`Embedding`] stores, for every vertex, the clockwise cyclic order of
//! its neighbours as a doubly linked ring of half-edges. It doubles as an
//! adjacency structure: [`Embedding::next_face_half_edge`] walks faces, and
//! [`Embedding::faces`] recovers all of them in `O(V + E)`.
//!
//! Caller keys are mapped to dense indices at the boundary; every query on an
//! unknown vertex or half-edge fails fast with
//! [`PlanarityError::VertexNotFound`] / [`PlanarityError::HalfEdgeNotFound`].

mod faces;
pub(crate) mod rotation;

use std::fmt::Debug;
use std::hash::Hash;

use hashbrown::HashMap;

use crate::planarity_error::PlanarityError;
use rotation::RotationSystem;

/// A rotation system over caller vertex keys.
#[derive(Debug, Clone)]
pub struct Embedding<V> {
    keys: Vec<V>,
    index: HashMap<V, usize>,
    rotation: RotationSystem,
}

impl<V> Default for Embedding<V> {
    fn default() -> Self {
        Self {
            keys: Vec::new(),
            index: HashMap::new(),
            rotation: RotationSystem::default(),
        }
    }
}

impl<V: Copy + Eq + Hash + Debug> Embedding<V> {
    /// An empty embedding; build it up with the `add_half_edge_*` methods.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn from_parts(keys: Vec<V>, index: HashMap<V, usize>, rotation: RotationSystem) -> Self {
        Self {
            keys,
            index,
            rotation,
        }
    }

    /// Insert an isolated vertex. Returns `false` if it already exists.
    pub fn add_vertex(&mut self, v: V) -> bool {
        let before = self.keys.len();
        self.intern(v);
        self.keys.len() > before
    }

    pub fn num_vertices(&self) -> usize {
        self.keys.len()
    }

    /// Number of undirected edges (half-edge pairs).
    pub fn num_edges(&self) -> usize {
        self.rotation.num_half_edges() / 2
    }

    pub fn vertices(&self) -> impl Iterator<Item = V> + '_ {
        self.keys.iter().copied()
    }

    pub fn contains_vertex(&self, v: &V) -> bool {
        self.index.contains_key(v)
    }

    pub fn contains_half_edge(&self, v: &V, w: &V) -> bool {
        match (self.index.get(v), self.index.get(w)) {
            (Some(&iv), Some(&iw)) => self.rotation.has_half_edge(iv, iw),
            _ => false,
        }
    }

    /// Whether both half-edges of `{v, w}` are present.
    pub fn contains_edge(&self, v: &V, w: &V) -> bool {
        self.contains_half_edge(v, w) && self.contains_half_edge(w, v)
    }

    pub fn degree(&self, v: &V) -> Result<usize, PlanarityError> {
        Ok(self.rotation.degree(self.idx(v)?))
    }

    /// The clockwise rotation of `v`, starting at its first neighbour.
    pub fn neighbors_cw_order(&self, v: &V) -> Result<Vec<V>, PlanarityError> {
        let iv = self.idx(v)?;
        Ok(self.keyed(self.rotation.rotation(iv)))
    }

    /// Each undirected edge once, as `(earlier vertex, later vertex)`.
    pub fn edges(&self) -> Vec<(V, V)> {
        (0..self.keys.len())
            .flat_map(|v| {
                self.rotation
                    .rotation(v)
                    .into_iter()
                    .filter(move |&w| v < w)
                    .map(move |w| (self.keys[v], self.keys[w]))
            })
            .collect()
    }

    /// Insert half-edge `v -> w` clockwise right after `v -> reference`.
    ///
    /// Missing endpoints are added. `reference` may be `None` only while `v`
    /// has no neighbours. On error the embedding is left unchanged.
    pub fn add_half_edge_cw(&mut self, v: V, w: V, reference: Option<V>) -> Result<(), PlanarityError> {
        let ir = self.check_insert(&v, &w, reference.as_ref(), false)?;
        let (iv, iw) = (self.intern(v), self.intern(w));
        let inserted = self.rotation.add_half_edge_cw(iv, iw, ir);
        self.committed(inserted, &v, &w)
    }

    /// Insert half-edge `v -> w` counter-clockwise right before `v -> reference`.
    pub fn add_half_edge_ccw(&mut self, v: V, w: V, reference: Option<V>) -> Result<(), PlanarityError> {
        let ir = self.check_insert(&v, &w, reference.as_ref(), false)?;
        let (iv, iw) = (self.intern(v), self.intern(w));
        let inserted = self.rotation.add_half_edge_ccw(iv, iw, ir);
        self.committed(inserted, &v, &w)
    }

    /// Insert half-edge `v -> w` as the new first neighbour of `v`.
    pub fn add_half_edge_first(&mut self, v: V, w: V) -> Result<(), PlanarityError> {
        self.check_insert(&v, &w, None, true)?;
        let (iv, iw) = (self.intern(v), self.intern(w));
        let inserted = self.rotation.add_half_edge_first(iv, iw);
        self.committed(inserted, &v, &w)
    }

    /// Face-walk successor of half-edge `v -> w`: `(w, x)` with `x` the
    /// neighbour of `w` preceding `v` in `w`'s clockwise rotation.
    pub fn next_face_half_edge(&self, v: &V, w: &V) -> Result<(V, V), PlanarityError> {
        let (iv, iw) = (self.idx(v)?, self.idx(w)?);
        self.rotation
            .next_face_half_edge(iv, iw)
            .map(|(a, b)| (self.keys[a], self.keys[b]))
            .ok_or_else(|| self.half_edge_error(w, v))
    }

    fn idx(&self, v: &V) -> Result<usize, PlanarityError> {
        self.index
            .get(v)
            .copied()
            .ok_or_else(|| PlanarityError::VertexNotFound(format!("{v:?}")))
    }

    fn keyed(&self, idx: Vec<usize>) -> Vec<V> {
        idx.into_iter().map(|i| self.keys[i]).collect()
    }

    /// Index of `v`, inserting it as an isolated vertex if needed.
    fn intern(&mut self, v: V) -> usize {
        if let Some(&i) = self.index.get(&v) {
            return i;
        }
        let i = self.rotation.push_vertex();
        self.keys.push(v);
        self.index.insert(v, i);
        i
    }

    /// Validate inserting `v -> w` before anything is mutated. Returns the
    /// dense index of `reference`.
    fn check_insert(
        &self,
        v: &V,
        w: &V,
        reference: Option<&V>,
        first: bool,
    ) -> Result<Option<usize>, PlanarityError> {
        let ir = reference.map(|r| self.idx(r)).transpose()?;
        if self.contains_half_edge(v, w) {
            return Err(PlanarityError::EmbeddingInvariant(format!(
                "half-edge {v:?} -> {w:?} already present"
            )));
        }
        if first {
            return Ok(ir);
        }
        let iv = self.index.get(v).copied();
        match (reference, ir) {
            (Some(r), Some(ir)) => {
                if !iv.is_some_and(|iv| self.rotation.has_half_edge(iv, ir)) {
                    return Err(self.half_edge_error(v, r));
                }
            }
            _ => {
                if iv.is_some_and(|iv| self.rotation.degree(iv) > 0) {
                    return Err(PlanarityError::EmbeddingInvariant(format!(
                        "vertex {v:?} already has neighbours; a reference half-edge is required"
                    )));
                }
            }
        }
        Ok(ir)
    }

    fn committed(&self, inserted: bool, v: &V, w: &V) -> Result<(), PlanarityError> {
        if inserted {
            Ok(())
        } else {
            Err(PlanarityError::EmbeddingInvariant(format!(
                "rotation of {v:?} rejected half-edge {v:?} -> {w:?}"
            )))
        }
    }

    fn half_edge_error(&self, from: &V, to: &V) -> PlanarityError {
        PlanarityError::HalfEdgeNotFound {
            from: format!("{from:?}"),
            to: format!("{to:?}"),
        }
    }
}

//! Face traversal and structural validation of an [`Embedding`].

use std::fmt::Debug;
use std::hash::Hash;

use hashbrown::HashSet;

use super::Embedding;
use crate::debug_invariants::DebugInvariants;
use crate::planarity_error::PlanarityError;

impl<V: Copy + Eq + Hash + Debug> Embedding<V> {
    /// Vertices of the face that the half-edge `v -> w` bounds, in walk order.
    pub fn traverse_face(&self, v: &V, w: &V) -> Result<Vec<V>, PlanarityError> {
        let (iv, iw) = (self.idx(v)?, self.idx(w)?);
        if !self.rotation.has_half_edge(iv, iw) {
            return Err(self.half_edge_error(v, w));
        }
        let mut marked = HashSet::new();
        let face = self.face_indices(iv, iw, &mut marked)?;
        Ok(self.keyed(face))
    }

    /// Every face exactly once; each half-edge lies on exactly one face.
    pub fn faces(&self) -> Result<Vec<Vec<V>>, PlanarityError> {
        let mut marked = HashSet::with_capacity(self.rotation.num_half_edges());
        let mut out = Vec::new();
        for v in 0..self.keys.len() {
            for w in self.rotation.rotation(v) {
                if !marked.contains(&(v, w)) {
                    let face = self.face_indices(v, w, &mut marked)?;
                    out.push(self.keyed(face));
                }
            }
        }
        Ok(out)
    }

    /// Full structural check: twin half-edges, consistent rings, Euler's
    /// formula per connected component.
    pub fn check_structure(&self) -> Result<(), PlanarityError> {
        self.validate_invariants()
    }

    fn face_indices(
        &self,
        v: usize,
        w: usize,
        marked: &mut HashSet<(usize, usize)>,
    ) -> Result<Vec<usize>, PlanarityError> {
        let limit = self.rotation.num_half_edges();
        let mut face = vec![v];
        marked.insert((v, w));
        let (mut prev, mut cur) = (v, w);
        loop {
            let (a, b) = self
                .rotation
                .next_face_half_edge(prev, cur)
                .ok_or_else(|| self.half_edge_error(&self.keys[cur], &self.keys[prev]))?;
            if (a, b) == (v, w) {
                break;
            }
            if face.len() > limit {
                return Err(PlanarityError::EmbeddingInvariant(format!(
                    "face walk from {:?} -> {:?} does not close",
                    self.keys[v], self.keys[w]
                )));
            }
            face.push(a);
            marked.insert((a, b));
            (prev, cur) = (a, b);
        }
        Ok(face)
    }

    /// Ring integrity of one vertex: the clockwise walk from `first` visits
    /// every half-edge once and `ccw` inverts `cw`.
    fn check_ring(&self, v: usize) -> Result<(), PlanarityError> {
        let bad = |msg: &str| {
            PlanarityError::EmbeddingInvariant(format!("vertex {:?}: {msg}", self.keys[v]))
        };
        let degree = self.rotation.degree(v);
        match self.rotation.first(v) {
            None if degree == 0 => return Ok(()),
            None => return Err(bad("has neighbours but no first half-edge")),
            Some(f) if !self.rotation.has_half_edge(v, f) => {
                return Err(bad("first half-edge is not in the ring"));
            }
            Some(_) => {}
        }
        let ring = self.rotation.rotation(v);
        let distinct: HashSet<usize> = ring.iter().copied().collect();
        if ring.len() != degree || distinct.len() != degree {
            return Err(bad("clockwise walk does not cover the neighbour set"));
        }
        for &w in &ring {
            let links = self.rotation.links(v, w).ok_or_else(|| bad("dangling link"))?;
            let back = self.rotation.links(v, links.cw).ok_or_else(|| bad("dangling link"))?;
            if back.ccw != w {
                return Err(bad("ccw does not invert cw"));
            }
        }
        Ok(())
    }

    /// Connected components (by half-edges) of the non-isolated vertices.
    fn components(&self) -> Vec<Vec<usize>> {
        let n = self.keys.len();
        let mut seen = vec![false; n];
        let mut out = Vec::new();
        for s in 0..n {
            if seen[s] || self.rotation.degree(s) == 0 {
                continue;
            }
            seen[s] = true;
            let mut comp = vec![s];
            let mut i = 0;
            while i < comp.len() {
                let u = comp[i];
                for w in self.rotation.neighbor_set(u) {
                    if !seen[w] {
                        seen[w] = true;
                        comp.push(w);
                    }
                }
                i += 1;
            }
            out.push(comp);
        }
        out
    }
}

impl<V: Copy + Eq + Hash + Debug> DebugInvariants for Embedding<V> {
    fn validate_invariants(&self) -> Result<(), PlanarityError> {
        // 1) every ring is a proper cyclic list
        for v in 0..self.keys.len() {
            self.check_ring(v)?;
        }

        // 2) every half-edge has its twin
        for v in 0..self.keys.len() {
            for w in self.rotation.neighbor_set(v) {
                if !self.rotation.has_half_edge(w, v) {
                    return Err(PlanarityError::EmbeddingInvariant(format!(
                        "opposite half-edge {:?} -> {:?} is missing",
                        self.keys[w], self.keys[v]
                    )));
                }
            }
        }

        // 3) Euler's formula per connected component
        let mut marked = HashSet::with_capacity(self.rotation.num_half_edges());
        for comp in self.components() {
            let mut half_edges = 0;
            let mut faces = 0;
            for &v in &comp {
                for w in self.rotation.rotation(v) {
                    half_edges += 1;
                    if !marked.contains(&(v, w)) {
                        faces += 1;
                        self.face_indices(v, w, &mut marked)?;
                    }
                }
            }
            let (nv, ne) = (comp.len() as isize, (half_edges / 2) as isize);
            if nv - ne + faces != 2 {
                return Err(PlanarityError::EmbeddingInvariant(format!(
                    "component of {:?} breaks Euler's formula: V={nv} E={ne} F={faces}",
                    self.keys[comp[0]]
                )));
            }
        }
        Ok(())
    }
}

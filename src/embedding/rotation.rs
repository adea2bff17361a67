//! Index-space rotation system: one doubly linked cyclic neighbour list per vertex.

use hashbrown::HashMap;

/// Clockwise / counter-clockwise neighbours of one half-edge around its tail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Links {
    pub cw: usize,
    pub ccw: usize,
}

#[derive(Debug, Clone, Default)]
pub(crate) struct RotationSystem {
    /// Start of each vertex's clockwise listing.
    first: Vec<Option<usize>>,
    /// `links[v][w]` is the half-edge `v -> w`.
    links: Vec<HashMap<usize, Links>>,
}

impl RotationSystem {
    pub fn new(num_vertices: usize) -> Self {
        Self {
            first: vec![None; num_vertices],
            links: vec![HashMap::new(); num_vertices],
        }
    }

    pub fn push_vertex(&mut self) -> usize {
        self.first.push(None);
        self.links.push(HashMap::new());
        self.links.len() - 1
    }

    pub fn degree(&self, v: usize) -> usize {
        self.links[v].len()
    }

    pub fn num_half_edges(&self) -> usize {
        self.links.iter().map(HashMap::len).sum()
    }

    pub fn first(&self, v: usize) -> Option<usize> {
        self.first[v]
    }

    pub fn links(&self, v: usize, w: usize) -> Option<Links> {
        self.links[v].get(&w).copied()
    }

    pub fn has_half_edge(&self, v: usize, w: usize) -> bool {
        self.links[v].contains_key(&w)
    }

    /// Neighbour keys of `v` in arbitrary (hash) order.
    pub fn neighbor_set(&self, v: usize) -> impl Iterator<Item = usize> + '_ {
        self.links[v].keys().copied()
    }

    /// Insert `v -> w` clockwise right after `v -> reference`.
    ///
    /// `reference == None` is only valid while `v` has no half-edges. Returns
    /// `false` (and leaves the structure untouched) when the reference is
    /// missing or `v -> w` already exists.
    pub fn add_half_edge_cw(&mut self, v: usize, w: usize, reference: Option<usize>) -> bool {
        if self.links[v].contains_key(&w) {
            return false;
        }
        let Some(r) = reference else {
            if !self.links[v].is_empty() {
                return false;
            }
            self.links[v].insert(w, Links { cw: w, ccw: w });
            self.first[v] = Some(w);
            return true;
        };
        let Some(cw_ref) = self.links[v].get(&r).map(|l| l.cw) else {
            return false;
        };
        let ring = &mut self.links[v];
        if let Some(l) = ring.get_mut(&r) {
            l.cw = w;
        }
        ring.insert(w, Links { cw: cw_ref, ccw: r });
        if let Some(l) = ring.get_mut(&cw_ref) {
            l.ccw = w;
        }
        true
    }

    /// Insert `v -> w` counter-clockwise right before `v -> reference`.
    pub fn add_half_edge_ccw(&mut self, v: usize, w: usize, reference: Option<usize>) -> bool {
        let Some(r) = reference else {
            return self.add_half_edge_cw(v, w, None);
        };
        let Some(ccw_ref) = self.links[v].get(&r).map(|l| l.ccw) else {
            return false;
        };
        if !self.add_half_edge_cw(v, w, Some(ccw_ref)) {
            return false;
        }
        if self.first[v] == Some(r) {
            self.first[v] = Some(w);
        }
        true
    }

    /// Make `v -> w` the first half-edge of `v`.
    pub fn add_half_edge_first(&mut self, v: usize, w: usize) -> bool {
        let reference = self.first[v];
        self.add_half_edge_ccw(v, w, reference)
    }

    /// Clockwise listing of `v` starting at its first neighbour.
    pub fn rotation(&self, v: usize) -> Vec<usize> {
        let mut out = Vec::with_capacity(self.degree(v));
        let Some(start) = self.first[v] else {
            return out;
        };
        let mut cur = start;
        loop {
            out.push(cur);
            match self.links[v].get(&cur) {
                Some(l) if l.cw != start && out.len() <= self.degree(v) => cur = l.cw,
                _ => break,
            }
        }
        out
    }

    /// Successor half-edge along a face: `(v, w)` is followed by `(w, x)`
    /// where `x` is the counter-clockwise neighbour of `v` around `w`.
    pub fn next_face_half_edge(&self, v: usize, w: usize) -> Option<(usize, usize)> {
        self.links[w].get(&v).map(|l| (w, l.ccw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cw_and_ccw_insertions_keep_ring_consistent() {
        let mut r = RotationSystem::new(4);
        assert!(r.add_half_edge_cw(0, 1, None));
        assert!(r.add_half_edge_cw(0, 2, Some(1)));
        assert!(r.add_half_edge_ccw(0, 3, Some(1)));
        // 3 went before 1, and 1 was first, so 3 is now first
        assert_eq!(r.first(0), Some(3));
        assert_eq!(r.rotation(0), vec![3, 1, 2]);
        for w in [1, 2, 3] {
            let l = r.links(0, w).unwrap();
            assert_eq!(r.links(0, l.cw).unwrap().ccw, w);
        }
    }

    #[test]
    fn missing_reference_and_duplicates_are_rejected() {
        let mut r = RotationSystem::new(3);
        assert!(r.add_half_edge_first(0, 1));
        assert!(!r.add_half_edge_cw(0, 2, Some(2)));
        assert!(!r.add_half_edge_cw(0, 2, None));
        assert!(!r.add_half_edge_cw(0, 1, Some(1)));
        assert_eq!(r.rotation(0), vec![1]);
    }

    #[test]
    fn add_first_prepends() {
        let mut r = RotationSystem::new(4);
        r.add_half_edge_first(0, 1);
        r.add_half_edge_first(0, 2);
        r.add_half_edge_first(0, 3);
        assert_eq!(r.rotation(0), vec![3, 2, 1]);
        assert_eq!(r.num_half_edges(), 3);
    }
}

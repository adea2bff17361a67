#![allow(dead_code)]
use lr_planarity::{Embedding, SimpleGraph};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

pub type Graph = SimpleGraph<usize>;

pub fn from_edges(edges: &[(usize, usize)]) -> Graph {
    edges.iter().copied().collect()
}

/// Graph on `0..n` with the given edges; keeps isolated vertices.
pub fn with_vertices(n: usize, edges: &[(usize, usize)]) -> Graph {
    let mut g = Graph::with_capacity(n, edges.len());
    for v in 0..n {
        g.add_vertex(v);
    }
    g.extend(edges.iter().copied());
    g
}

pub fn complete(n: usize) -> Graph {
    (0..n).flat_map(|u| (u + 1..n).map(move |v| (u, v))).collect()
}

/// K_{a,b} with sides `0..a` and `a..a+b`.
pub fn complete_bipartite(a: usize, b: usize) -> Graph {
    (0..a).flat_map(|u| (a..a + b).map(move |v| (u, v))).collect()
}

pub fn path(n: usize) -> Graph {
    with_vertices(n, &(1..n).map(|i| (i - 1, i)).collect::<Vec<_>>())
}

pub fn cycle(n: usize) -> Graph {
    (0..n).map(|i| (i, (i + 1) % n)).collect()
}

/// Hub 0 joined to the rim cycle `1..=n`.
pub fn wheel(n: usize) -> Graph {
    let mut g: Graph = (1..=n).map(|i| (0, i)).collect();
    g.extend((1..=n).map(|i| (i, i % n + 1)));
    g
}

/// `rows x cols` lattice, vertex `r * cols + c`.
pub fn grid(rows: usize, cols: usize) -> Graph {
    let mut g = Graph::with_capacity(rows * cols, 2 * rows * cols);
    for r in 0..rows {
        for c in 0..cols {
            let v = r * cols + c;
            g.add_vertex(v);
            if c + 1 < cols {
                g.add_edge(v, v + 1);
            }
            if r + 1 < rows {
                g.add_edge(v, v + cols);
            }
        }
    }
    g
}

pub fn petersen() -> Graph {
    let mut g: Graph = (0..5).map(|i| (i, (i + 1) % 5)).collect();
    g.extend((0..5).map(|i| (i, i + 5)));
    g.extend((0..5).map(|i| (i + 5, (i + 2) % 5 + 5)));
    g
}

/// Uniform random recursive tree on `0..n`.
pub fn random_tree(n: usize, seed: u64) -> Graph {
    let mut rng = SmallRng::seed_from_u64(seed);
    let edges: Vec<_> = (1..n).map(|v| (rng.gen_range(0..v), v)).collect();
    with_vertices(n, &edges)
}

/// Stacked (Apollonian) triangulation: a maximal planar graph with
/// `3n - 6` edges, grown by dropping each new vertex into a random face.
pub fn stacked_triangulation(n: usize, seed: u64) -> Graph {
    assert!(n >= 3);
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut g = from_edges(&[(0, 1), (1, 2), (2, 0)]);
    let mut faces = vec![[0, 1, 2], [0, 2, 1]];
    for v in 3..n {
        let i = rng.gen_range(0..faces.len());
        let [a, b, c] = faces.swap_remove(i);
        g.add_edge(v, a);
        g.add_edge(v, b);
        g.add_edge(v, c);
        faces.extend([[a, b, v], [b, c, v], [c, a, v]]);
    }
    g
}

/// Random spanning subgraph of a stacked triangulation; always planar.
pub fn random_planar(n: usize, keep: f64, seed: u64) -> Graph {
    let full = stacked_triangulation(n, seed);
    let mut rng = SmallRng::seed_from_u64(seed ^ 0x5eed);
    let edges: Vec<_> = full
        .edge_list()
        .into_iter()
        .filter(|_| rng.r#gen::<f64>() < keep)
        .collect();
    with_vertices(n, &edges)
}

/// Replace every edge by a path with `k` interior vertices (numbered after
/// the existing ones).
pub fn subdivide(g: &Graph, k: usize) -> Graph {
    let mut next = g.num_vertices();
    let mut out = Graph::new();
    for (u, v) in g.edge_list() {
        let mut prev = u;
        for _ in 0..k {
            out.add_edge(prev, next);
            prev = next;
            next += 1;
        }
        out.add_edge(prev, v);
    }
    out
}

/// Number of connected components that contain at least one edge.
pub fn edge_components(emb: &Embedding<usize>) -> usize {
    let n = emb.vertices().max().map_or(0, |m| m + 1);
    let mut parent: Vec<usize> = (0..n).collect();
    fn find(parent: &mut [usize], mut x: usize) -> usize {
        while parent[x] != x {
            parent[x] = parent[parent[x]];
            x = parent[x];
        }
        x
    }
    for (u, v) in emb.edges() {
        let (a, b) = (find(&mut parent, u), find(&mut parent, v));
        parent[a] = b;
    }
    let mut roots: Vec<usize> = emb
        .edges()
        .into_iter()
        .map(|(u, _)| find(&mut parent, u))
        .collect();
    roots.sort_unstable();
    roots.dedup();
    roots.len()
}

/// Euler's formula summed over components: `V' - E + F = 2C`, with `V'`
/// the non-isolated vertices and `C` the components that have edges.
pub fn assert_euler(emb: &Embedding<usize>) {
    let faces = emb.faces().expect("faces").len();
    let v = emb
        .vertices()
        .filter(|v| emb.degree(v).expect("degree") > 0)
        .count();
    let e = emb.num_edges();
    let c = edge_components(emb);
    assert_eq!(
        v as isize - e as isize + faces as isize,
        2 * c as isize,
        "Euler: V={v} E={e} F={faces} C={c}"
    );
}

/// Every graph edge is an embedding edge and vice versa.
pub fn assert_same_edges(g: &Graph, emb: &Embedding<usize>) {
    assert_eq!(g.num_edges(), emb.num_edges());
    for (u, v) in g.edge_list() {
        assert!(emb.contains_edge(&u, &v), "edge ({u}, {v}) missing from embedding");
    }
}

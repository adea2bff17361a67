mod util;

use lr_planarity::prelude::*;
use util::*;

fn embed(g: &Graph) -> Embedding<usize> {
    check_planarity(g, false)
        .unwrap()
        .into_embedding()
        .expect("planar input")
}

/// Adjacency list with string keys, reporting each edge from one side only.
struct Roads(Vec<(&'static str, Vec<&'static str>)>);

impl GraphView for Roads {
    type VertexId = &'static str;

    fn vertices(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.iter().map(|(v, _)| *v)
    }

    fn neighbors(&self, v: &'static str) -> impl Iterator<Item = &'static str> + '_ {
        self.0
            .iter()
            .filter(move |(u, _)| *u == v)
            .flat_map(|(_, ns)| ns.iter().copied())
    }
}

#[test]
fn custom_graph_view_with_one_sided_reports() {
    let roads = Roads(vec![
        ("a", vec!["b", "c", "d"]),
        ("b", vec!["c", "d"]),
        ("c", vec!["d"]),
        ("d", vec![]),
    ]);
    let emb = check_planarity(&roads, false)
        .unwrap()
        .into_embedding()
        .unwrap();
    assert_eq!(emb.num_edges(), 6);
    assert!(emb.contains_edge(&"d", &"a"));
    assert_eq!(emb.faces().unwrap().len(), 4);
}

#[test]
fn rotations_cover_each_neighbourhood() {
    let g = wheel(7);
    let emb = embed(&g);
    for v in 0..=7 {
        let mut rot = emb.neighbors_cw_order(&v).unwrap();
        rot.sort_unstable();
        let mut expected: Vec<usize> = g.edge_list()
            .into_iter()
            .filter_map(|(a, b)| if a == v { Some(b) } else if b == v { Some(a) } else { None })
            .collect();
        expected.sort_unstable();
        assert_eq!(rot, expected, "vertex {v}");
    }
}

#[test]
fn face_walk_returns_to_its_start() {
    let emb = embed(&grid(4, 5));
    for (u, v) in emb.edges() {
        for (a, b) in [(u, v), (v, u)] {
            let face = emb.traverse_face(&a, &b).unwrap();
            let (mut x, mut y) = (a, b);
            for _ in 0..face.len() {
                (x, y) = emb.next_face_half_edge(&x, &y).unwrap();
            }
            assert_eq!((x, y), (a, b));
        }
    }
}

#[test]
fn faces_partition_the_half_edges() {
    let g = stacked_triangulation(50, 9);
    let emb = embed(&g);
    let total: usize = emb.faces().unwrap().iter().map(Vec::len).sum();
    assert_eq!(total, 2 * emb.num_edges());
}

#[test]
fn queries_on_unknown_vertices_fail_fast() {
    let emb = embed(&complete(4));
    assert!(matches!(
        emb.neighbors_cw_order(&9),
        Err(PlanarityError::VertexNotFound(_))
    ));
    assert!(matches!(emb.degree(&9), Err(PlanarityError::VertexNotFound(_))));
    assert!(matches!(
        emb.traverse_face(&0, &9),
        Err(PlanarityError::VertexNotFound(_))
    ));
}

#[test]
fn queries_on_missing_half_edges_fail_fast() {
    let emb = embed(&grid(2, 3));
    // 0 and 4 are diagonal, not adjacent
    assert!(matches!(
        emb.next_face_half_edge(&0, &4),
        Err(PlanarityError::HalfEdgeNotFound { .. })
    ));
    assert!(matches!(
        emb.traverse_face(&0, &4),
        Err(PlanarityError::HalfEdgeNotFound { .. })
    ));
}

#[test]
fn embeddings_are_reproducible() {
    let g = random_planar(120, 0.7, 17);
    let a = embed(&g);
    let b = embed(&g);
    for v in 0..120 {
        assert_eq!(a.neighbors_cw_order(&v).unwrap(), b.neighbors_cw_order(&v).unwrap());
    }
    assert_eq!(a.faces().unwrap().len(), b.faces().unwrap().len());
}

#[test]
fn hand_built_embedding_can_be_extended() {
    let mut emb = embed(&cycle(4));
    // chord 0-2 inside one of the two faces
    let face = emb.traverse_face(&0, &1).unwrap();
    assert_eq!(face.len(), 4);
    let before_0 = emb.next_face_half_edge(&3, &0).unwrap().1;
    let before_2 = emb.next_face_half_edge(&1, &2).unwrap().1;
    assert_eq!((before_0, before_2), (1, 3));
    emb.add_half_edge_ccw(0, 2, Some(1)).unwrap();
    emb.add_half_edge_ccw(2, 0, Some(3)).unwrap();
    assert!(emb.check_structure().is_ok());
    assert_eq!(emb.faces().unwrap().len(), 3);
}

#[test]
fn structure_check_rejects_a_one_sided_edge() {
    let mut emb = embed(&cycle(3));
    emb.add_half_edge_first(0, 7).unwrap();
    assert!(emb.check_structure().is_err());
}

#[test]
fn verify_option_can_be_switched_off() {
    let opts = PlanarityOptions {
        verify_embedding: false,
        ..PlanarityOptions::default()
    };
    let result = check_planarity_with(&grid(8, 8), &opts).unwrap();
    assert!(result.is_planar());
    assert!(result.embedding().unwrap().check_structure().is_ok());
}

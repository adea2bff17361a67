use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use lr_planarity::{PlanarityOptions, SimpleGraph, check_planarity_with, is_planar};

// 1) Square lattice, side x side
fn grid(side: usize) -> SimpleGraph<usize> {
    let mut g = SimpleGraph::with_capacity(side * side, 2 * side * side);
    for r in 0..side {
        for c in 0..side {
            let v = r * side + c;
            g.add_vertex(v);
            if c + 1 < side {
                g.add_edge(v, v + 1);
            }
            if r + 1 < side {
                g.add_edge(v, v + side);
            }
        }
    }
    g
}

// 2) Stacked triangulation: maximal planar, 3n - 6 edges
fn triangulation(n: usize, seed: u64) -> SimpleGraph<usize> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut g: SimpleGraph<usize> = [(0, 1), (1, 2), (2, 0)].into_iter().collect();
    let mut faces = vec![[0, 1, 2], [0, 2, 1]];
    for v in 3..n {
        let [a, b, c] = faces.swap_remove(rng.gen_range(0..faces.len()));
        g.extend([(v, a), (v, b), (v, c)]);
        faces.extend([[a, b, v], [b, c, v], [c, a, v]]);
    }
    g
}

fn bench_grids(c: &mut Criterion) {
    let mut group = c.benchmark_group("lr-grid");
    let opts = PlanarityOptions {
        verify_embedding: false,
        ..PlanarityOptions::default()
    };
    for side in [32, 64, 128, 256] {
        let g = grid(side);
        group.throughput(Throughput::Elements((g.num_vertices() + g.num_edges()) as u64));
        group.bench_with_input(BenchmarkId::new("embed", side), &g, |b, g| {
            b.iter(|| check_planarity_with(g, &opts).map(|p| p.is_planar()))
        });
        group.bench_with_input(BenchmarkId::new("test", side), &g, |b, g| {
            b.iter(|| is_planar(g))
        });
    }
    group.finish();
}

fn bench_triangulations(c: &mut Criterion) {
    let mut group = c.benchmark_group("lr-triangulation");
    let opts = PlanarityOptions {
        verify_embedding: false,
        ..PlanarityOptions::default()
    };
    for n in [1_000, 4_000, 16_000, 64_000] {
        let g = triangulation(n, 42);
        group.throughput(Throughput::Elements((g.num_vertices() + g.num_edges()) as u64));
        group.bench_with_input(BenchmarkId::new("embed", n), &g, |b, g| {
            b.iter(|| check_planarity_with(g, &opts).map(|p| p.is_planar()))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_grids, bench_triangulations);
criterion_main!(benches);

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use hull_convex::{Bitset, ConvexityProperties};
use hull_core::RngHandle;
use hull_graph::{grid_graph, random_connected_graph};

fn cache_bench(c: &mut Criterion) {
    let mut rng = RngHandle::from_seed(11);
    let graph = random_connected_graph(120, 0.04, &mut rng).unwrap();

    c.bench_function("pair_cache_build_120", |b| {
        b.iter(|| black_box(ConvexityProperties::new(&graph).unwrap()));
    });
}

fn closure_bench(c: &mut Criterion) {
    let mut rng = RngHandle::from_seed(11);
    let graph = random_connected_graph(120, 0.04, &mut rng).unwrap();
    let props = ConvexityProperties::new(&graph).unwrap();
    let seeds = Bitset::from_indices(props.order(), [3, 57, 101]);

    c.bench_function("closure_three_seeds_120", |b| {
        b.iter(|| black_box(props.engine().hull_of(&seeds)));
    });
}

fn hull_number_bench(c: &mut Criterion) {
    let props = ConvexityProperties::new(&grid_graph(4, 5).unwrap()).unwrap();

    c.bench_function("hull_number_grid_4x5", |b| {
        b.iter(|| black_box(props.hull_number(true, false).unwrap()));
    });
}

criterion_group!(benches, cache_bench, closure_bench, hull_number_bench);
criterion_main!(benches);

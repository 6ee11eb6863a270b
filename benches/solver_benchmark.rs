use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use parapath::utils_test::gen_utils::generate_random_graph;
use parapath::{ParallelDijkstra, SequentialDijkstra, ShortestPath};

fn bench_engines(c: &mut Criterion) {
    // --- Group 1: Engine comparison on a mid-size random graph ---
    let graph = generate_random_graph(2_000, 5, 20, 42);

    let mut engine_group = c.benchmark_group("Shortest Path Engines");

    engine_group.bench_function("sequential (2k vertices)", |b| {
        b.iter(|| black_box(SequentialDijkstra::new(&graph, 0).run()))
    });

    for threads in [1, 2, 4, 8] {
        engine_group.bench_function(format!("parallel t={threads} (2k vertices)"), |b| {
            b.iter(|| black_box(ParallelDijkstra::new(&graph, 0, threads).run()))
        });
    }
    engine_group.finish();

    // --- Group 2: Scaling with graph size, fixed thread count ---
    let mut scaling_group = c.benchmark_group("Parallel Engine Scaling");
    for size in [500, 1_000, 4_000] {
        let graph = generate_random_graph(size, 5, 20, 42);
        scaling_group.bench_function(format!("parallel t=4 ({size} vertices)"), |b| {
            b.iter(|| black_box(ParallelDijkstra::new(&graph, 0, 4).run()))
        });
    }
    scaling_group.finish();
}

criterion_group!(solver_benches, bench_engines);
criterion_main!(solver_benches);

//! Equivalence of the parallel engine against the sequential oracle on
//! pseudo-random graphs.

use parapath::config::INF;
use parapath::utils_test::gen_utils::generate_random_graph;
use parapath::{
    Graph, GraphView, ParallelDijkstra, SequentialDijkstra, ShortestPath, ShortestPathResult,
};

/// Checks that every reached vertex has a parent chain that terminates at
/// the source and whose edge weights sum to the recorded distance.
fn assert_path_consistent(graph: &Graph, source: usize, result: &ShortestPathResult) {
    assert_eq!(result.dist[source], 0);

    for v in 0..graph.number_vertices() {
        if result.dist[v] >= INF {
            assert_eq!(result.parent[v], -1);
            continue;
        }

        let path = result.path_to(v);
        assert_eq!(path.first(), Some(&source));
        assert_eq!(path.last(), Some(&v));

        for pair in path.windows(2) {
            let step = result.dist[pair[1]] - result.dist[pair[0]];
            // With multi-edges the chain must follow *some* edge whose
            // weight matches the distance delta exactly.
            assert!(
                graph
                    .neighbors(pair[0])
                    .iter()
                    .any(|&(to, w)| to == pair[1] && u64::from(w) == step),
                "no edge {} -> {} with weight {step}",
                pair[0],
                pair[1]
            );
        }
    }
}

#[test]
fn test_random_graph_oracle_equivalence() {
    let graph = generate_random_graph(300, 5, 20, 42);
    let source = 0;

    let oracle = SequentialDijkstra::new(&graph, source).run();
    assert_path_consistent(&graph, source, &oracle);

    for threads in [1, 2, 4] {
        let parallel = ParallelDijkstra::new(&graph, source, threads).run();
        assert_eq!(oracle.dist, parallel.dist, "threads={threads}");
        assert_path_consistent(&graph, source, &parallel);
    }
}

#[test]
fn test_random_graph_oracle_equivalence_more_seeds() {
    for seed in [7, 1234, 987_654] {
        let graph = generate_random_graph(200, 4, 1_000, seed);
        let oracle = SequentialDijkstra::new(&graph, 0).run();

        for threads in [2, 8] {
            let parallel = ParallelDijkstra::new(&graph, 0, threads).run();
            assert_eq!(oracle.dist, parallel.dist, "seed={seed} threads={threads}");
        }
    }
}

#[test]
fn test_parallel_runs_are_idempotent_on_random_graph() {
    let graph = generate_random_graph(300, 5, 20, 42);
    let solver = ParallelDijkstra::new(&graph, 0, 4);

    let first = solver.run();
    let second = solver.run();
    assert_eq!(first.dist, second.dist);
}

#[test]
fn test_sparse_random_graph_has_unreachable_vertices_reported() {
    // Very low out-degree leaves parts of the graph unreached; both
    // engines must agree on exactly which parts.
    let graph = generate_random_graph(150, 1, 9, 5);
    let oracle = SequentialDijkstra::new(&graph, 0).run();
    let parallel = ParallelDijkstra::new(&graph, 0, 4).run();

    for v in 0..graph.number_vertices() {
        assert_eq!(oracle.dist[v] >= INF, parallel.dist[v] >= INF, "vertex {v}");
    }
}

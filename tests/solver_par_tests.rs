use parapath::config::INF;
use parapath::{Graph, GraphMut, GraphView, ParallelDijkstra, ShortestPath};

fn chain_graph() -> Graph {
    Graph::from_dot_str(
        r#"digraph {
A -> B [label=1];
B -> C [weight=2];
C -> D [label=3];
}
"#,
    )
    .unwrap()
}

#[test]
fn test_linear_chain_across_thread_counts() {
    let graph = chain_graph();
    let a = graph.find_vertex("A").unwrap();
    let d = graph.find_vertex("D").unwrap();

    for threads in [1, 2, 4] {
        let result = ParallelDijkstra::new(&graph, a, threads).run();
        assert_eq!(result.dist[a], 0, "threads={threads}");
        assert_eq!(result.dist[d], 6, "threads={threads}");
        assert_eq!(result.path_to(d), vec![0, 1, 2, 3], "threads={threads}");
    }
}

#[test]
fn test_bypass_edge_loses_to_two_hops() {
    let mut graph = Graph::new();
    let a = graph.ensure_vertex("A");
    let b = graph.ensure_vertex("B");
    let c = graph.ensure_vertex("C");
    graph.add_edge(a, b, 3).unwrap();
    graph.add_edge(b, c, 1).unwrap();
    graph.add_edge(a, c, 5).unwrap();

    for threads in [1, 2, 4] {
        let result = ParallelDijkstra::new(&graph, a, threads).run();
        assert_eq!(result.dist[c], 4, "threads={threads}");
        assert_eq!(result.path_to(c), vec![a, b, c], "threads={threads}");
    }
}

#[test]
fn test_disconnected_component_is_unreached() {
    let mut graph = Graph::new();
    let a = graph.ensure_vertex("A");
    let b = graph.ensure_vertex("B");
    let c = graph.ensure_vertex("C");
    let d = graph.ensure_vertex("D");
    graph.add_edge(a, b, 2).unwrap();
    graph.add_edge(c, d, 1).unwrap();

    for threads in [1, 2, 4] {
        let result = ParallelDijkstra::new(&graph, a, threads).run();
        assert!(result.dist[d] >= INF, "threads={threads}");
        assert_eq!(result.parent[d], -1, "threads={threads}");
    }
}

#[test]
fn test_self_loop_does_not_move_the_source() {
    let mut graph = Graph::new();
    let a = graph.ensure_vertex("A");
    graph.add_edge(a, a, 1).unwrap();

    for threads in [1, 2, 4] {
        let result = ParallelDijkstra::new(&graph, a, threads).run();
        assert_eq!(result.dist[a], 0, "threads={threads}");
        assert_eq!(result.path_to(a), vec![a], "threads={threads}");
    }
}

#[test]
fn test_successive_runs_are_equal() {
    let graph = chain_graph();
    let a = graph.find_vertex("A").unwrap();

    let solver = ParallelDijkstra::new(&graph, a, 4);
    let first = solver.run();
    let second = solver.run();
    assert_eq!(first.dist, second.dist);
}

#[test]
fn test_zero_threads_substitutes_the_cpu_count() {
    let graph = chain_graph();
    let a = graph.find_vertex("A").unwrap();
    let d = graph.find_vertex("D").unwrap();

    // 0 means "use the logical core count"; the result must not change.
    let result = ParallelDijkstra::new(&graph, a, 0).run();
    assert_eq!(result.dist[d], 6);
}

#[test]
fn test_set_threads_reconfigures_the_solver() {
    let graph = chain_graph();
    let a = graph.find_vertex("A").unwrap();
    let d = graph.find_vertex("D").unwrap();

    let mut solver = ParallelDijkstra::new(&graph, a, 1);
    let one = solver.run();
    solver.set_threads(4);
    let four = solver.run();

    assert_eq!(one.dist[d], 6);
    assert_eq!(one.dist, four.dist);
}

#[test]
fn test_thread_count_is_clamped_to_the_maximum() {
    let graph = chain_graph();
    let a = graph.find_vertex("A").unwrap();
    let d = graph.find_vertex("D").unwrap();

    // Far above MAX_THREADS; the engine clamps instead of spawning 1000.
    let result = ParallelDijkstra::new(&graph, a, 1_000).run();
    assert_eq!(result.dist[d], 6);
}

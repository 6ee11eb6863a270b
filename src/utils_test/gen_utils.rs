use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::{Graph, GraphMut};

// Helper function to create the five-vertex sample graph shared by the
// test suites: A->B(10), A->C(20), B->D(30), C->D(40), D->E(50).
pub fn create_sample_graph() -> Graph {
    let mut graph = Graph::new();
    let a = graph.ensure_vertex("A");
    let b = graph.ensure_vertex("B");
    let c = graph.ensure_vertex("C");
    let d = graph.ensure_vertex("D");
    let e = graph.ensure_vertex("E");

    graph.add_edge(a, b, 10).unwrap();
    graph.add_edge(a, c, 20).unwrap();
    graph.add_edge(b, d, 30).unwrap();
    graph.add_edge(c, d, 40).unwrap();
    graph.add_edge(d, e, 50).unwrap();

    graph
}

/// Generates a reproducible pseudo-random graph.
///
/// Vertices are named `v0..v{n-1}`; every vertex gets up to
/// `max_out_degree` outgoing edges with uniform targets and weights in
/// `[1, max_weight]`. The same seed always produces the same graph.
pub fn generate_random_graph(n: usize, max_out_degree: usize, max_weight: u32, seed: u64) -> Graph {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut graph = Graph::with_capacity(n);

    for i in 0..n {
        graph.ensure_vertex(&format!("v{i}"));
    }

    for u in 0..n {
        let degree = rng.gen_range(0..=max_out_degree);
        for _ in 0..degree {
            let v = rng.gen_range(0..n);
            let w = rng.gen_range(1..=max_weight);
            graph.add_edge(u, v, w).unwrap();
        }
    }

    graph
}

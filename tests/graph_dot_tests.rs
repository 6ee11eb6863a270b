use parapath::{Error, Graph, GraphView};

#[test]
fn test_parse_chain_with_label_weight_and_default() {
    let graph = Graph::from_dot_str(
        r#"digraph G {
A -> B [label=1];
B -> C [weight=2];
C -> D [label=3];
}
"#,
    )
    .unwrap();

    let a = graph.find_vertex("A").unwrap();
    let b = graph.find_vertex("B").unwrap();
    let c = graph.find_vertex("C").unwrap();
    let d = graph.find_vertex("D").unwrap();

    assert_eq!(graph.neighbors(a), &[(b, 1)]);
    assert_eq!(graph.neighbors(b), &[(c, 2)]);
    assert_eq!(graph.neighbors(c), &[(d, 3)]);
}

#[test]
fn test_parse_default_weight_is_one() {
    let graph = Graph::from_dot_str("digraph { A -> B; }").unwrap();
    let a = graph.find_vertex("A").unwrap();
    let b = graph.find_vertex("B").unwrap();
    assert_eq!(graph.neighbors(a), &[(b, 1)]);
}

#[test]
fn test_parse_label_beats_weight_in_both_orders() {
    let graph = Graph::from_dot_str(
        r#"digraph {
A -> B [label=2, weight=100];
B -> C [weight=100, label=3];
}
"#,
    )
    .unwrap();

    let a = graph.find_vertex("A").unwrap();
    let b = graph.find_vertex("B").unwrap();
    let c = graph.find_vertex("C").unwrap();

    assert_eq!(graph.neighbors(a), &[(b, 2)]);
    assert_eq!(graph.neighbors(b), &[(c, 3)]);
}

#[test]
fn test_parse_quoted_names() {
    let graph = Graph::from_dot_str(
        r#"digraph {
"Node A" -> "Target 1" [weight=7];
}
"#,
    )
    .unwrap();

    let u = graph.find_vertex("Node A").unwrap();
    let v = graph.find_vertex("Target 1").unwrap();
    assert_eq!(graph.neighbors(u), &[(v, 7)]);
}

#[test]
fn test_parse_isolated_vertex_declarations_come_first() {
    let graph = Graph::from_dot_str(
        r#"digraph {
Lonely;
"Spaced Out";
A -> B;
}
"#,
    )
    .unwrap();

    // Bare declarations are indexed before any edge endpoint.
    assert_eq!(graph.find_vertex("Lonely"), Some(0));
    assert_eq!(graph.find_vertex("Spaced Out"), Some(1));
    assert_eq!(graph.find_vertex("A"), Some(2));
    assert_eq!(graph.find_vertex("B"), Some(3));
    assert!(graph.neighbors(0).is_empty());
}

#[test]
fn test_parse_missing_digraph_token() {
    let err = Graph::from_dot_str("graph { A -> B; }").unwrap_err();
    assert!(matches!(err, Error::Parse(_)));
}

#[test]
fn test_parse_unterminated_quote() {
    let err = Graph::from_dot_str("digraph { \"A -> B; }").unwrap_err();
    assert!(matches!(err, Error::Parse(_)));
}

#[test]
fn test_parse_weight_overflow() {
    // One past u32::MAX.
    let err = Graph::from_dot_str("digraph { A -> B [label=4294967296]; }").unwrap_err();
    assert!(matches!(err, Error::WeightOverflow(_)));

    // Too large even for u64.
    let err =
        Graph::from_dot_str("digraph { A -> B [weight=99999999999999999999999]; }").unwrap_err();
    assert!(matches!(err, Error::WeightOverflow(_)));

    // The u32 maximum itself is fine.
    let graph = Graph::from_dot_str("digraph { A -> B [weight=4294967295]; }").unwrap();
    assert_eq!(graph.neighbors(0), &[(1, u32::MAX)]);
}

#[test]
fn test_parse_multi_edges_kept_in_order() {
    let graph = Graph::from_dot_str(
        r#"digraph {
A -> B [weight=5];
A -> B [weight=2];
A -> A [weight=1];
}
"#,
    )
    .unwrap();

    let a = graph.find_vertex("A").unwrap();
    let b = graph.find_vertex("B").unwrap();
    assert_eq!(graph.neighbors(a), &[(b, 5), (b, 2), (a, 1)]);
}

#[test]
fn test_load_from_dot_missing_file() {
    let err = Graph::load_from_dot("/nonexistent/never/graph.dot").unwrap_err();
    assert!(matches!(err, Error::FileOpenFailure { .. }));
}

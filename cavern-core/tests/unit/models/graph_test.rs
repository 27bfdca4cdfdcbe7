use super::*;
use crate::helpers::models::*;

#[test]
fn can_build_cavern_with_sorted_neighbours() {
    let cavern = CavernBuilder::default()
        .add_node(3, 0)
        .add_node(1, 2)
        .add_node(2, 7)
        .add_edge(1, 3, 4)
        .add_edge(2, 1, 1)
        .build()
        .unwrap();

    assert_eq!(cavern.size(), 3);
    assert_eq!(cavern.nodes(), vec![1, 2, 3]);
    assert_eq!(cavern.neighbours(1), &[2, 3]);
    assert_eq!(cavern.neighbours(2), &[1]);
    assert_eq!(cavern.edge_length(3, 1), Some(4));
    assert_eq!(cavern.edge_length(1, 2), Some(1));
    assert_eq!(cavern.edge_length(2, 3), None);
    assert_eq!(cavern.gold(2), 7);
    assert_eq!(cavern.total_gold(), 9);
}

#[test]
fn can_handle_unknown_node_queries() {
    let cavern = create_line_cavern();

    assert!(!cavern.contains(10));
    assert_eq!(cavern.gold(10), 0);
    assert!(cavern.neighbours(10).is_empty());
    assert_eq!(cavern.position(10), None);
}

#[test]
fn can_keep_positions() {
    let cavern = create_dead_end_cavern();

    assert_eq!(cavern.position(1), Some((0, 0)));
    assert_eq!(cavern.position(6), Some((1, 2)));
    assert_eq!(create_line_cavern().position(1), None);
}

#[test]
fn can_ignore_duplicate_edge_with_same_length() {
    let cavern = CavernBuilder::default().add_node(1, 0).add_node(2, 0).add_edge(1, 2, 3).add_edge(2, 1, 3).build().unwrap();

    assert_eq!(cavern.neighbours(1), &[2]);
    assert_eq!(cavern.neighbours(2), &[1]);
}

parameterized_test! {can_reject_invalid_cavern, (builder, expected), {
    let result = builder.build();

    assert_eq!(result.err().map(|err| err.to_string()), Some(expected.to_string()));
}}

can_reject_invalid_cavern! {
    case01_duplicate_node: (CavernBuilder::default().add_node(1, 0).add_node(1, 2), "duplicate node: 1"),
    case02_self_loop: (CavernBuilder::default().add_node(1, 0).add_edge(1, 1, 1), "self-loop edge at node 1"),
    case03_unknown_node: (CavernBuilder::default().add_node(1, 0).add_edge(1, 2, 1), "edge 1-2 refers to unknown node"),
    case04_conflicting_length: (
        CavernBuilder::default().add_node(1, 0).add_node(2, 0).add_edge(1, 2, 1).add_edge(2, 1, 2),
        "edge 2-1 has conflicting lengths: 1 and 2"
    ),
}

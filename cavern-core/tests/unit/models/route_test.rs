use super::*;
use crate::helpers::models::*;

#[test]
fn can_visit_nodes_and_accumulate_distance_and_gold() {
    let cavern = create_diamond_cavern();
    let mut route = Route::default();

    route.visit(&cavern, 1).unwrap();
    assert_eq!(route.distance(), 0);
    assert_eq!(route.gold(), 0);

    route.visit(&cavern, 3).unwrap();
    route.visit(&cavern, 4).unwrap();

    assert_eq!(route.nodes(), &[1, 3, 4]);
    assert_eq!(route.distance(), 4);
    assert_eq!(route.gold(), 10);
    assert_eq!(route.first(), Some(1));
    assert_eq!(route.last(), Some(4));
}

#[test]
fn can_reject_duplicate_node() {
    let cavern = create_line_cavern();
    let mut route = Route::from_nodes(&cavern, [1, 2]).unwrap();

    let result = route.visit(&cavern, 1);

    assert_eq!(result, Err(NavigationError::DuplicateNode { node: 1 }));
    assert_eq!(route.nodes(), &[1, 2]);
    assert_eq!(route.gold(), 5);
}

#[test]
fn can_reject_non_adjacent_node() {
    let cavern = create_line_cavern();
    let mut route = Route::new(&cavern, 1).unwrap();

    let result = route.visit(&cavern, 3);

    assert_eq!(result, Err(NavigationError::InvalidMove { from: 1, to: 3 }));
    assert_eq!(route.size(), 1);
}

#[test]
fn can_reject_unknown_node() {
    let cavern = create_line_cavern();

    let result = Route::new(&cavern, 42);

    assert_eq!(result.err(), Some(NavigationError::UnknownNode { node: 42 }));
}

#[test]
fn can_fork_route_without_affecting_original() {
    let cavern = create_diamond_cavern();
    let route = Route::new(&cavern, 1).unwrap();

    let mut left = route.fork();
    let mut right = route.fork();
    left.visit(&cavern, 2).unwrap();
    right.visit(&cavern, 3).unwrap();

    assert_eq!(route.nodes(), &[1]);
    assert_eq!(left.nodes(), &[1, 2]);
    assert_eq!(right.nodes(), &[1, 3]);
    assert!(!left.contains(3));
    assert!(!right.contains(2));
}

#[test]
fn can_get_frontier() {
    let cavern = create_diamond_cavern();

    assert_eq!(Route::default().frontier(&cavern), Vec::<NodeId>::new());
    assert_eq!(Route::new(&cavern, 1).unwrap().frontier(&cavern), vec![2, 3]);
    assert_eq!(Route::from_nodes(&cavern, [1, 2]).unwrap().frontier(&cavern), vec![4]);
    assert_eq!(Route::from_nodes(&cavern, [1, 2, 4, 3]).unwrap().frontier(&cavern), Vec::<NodeId>::new());
}

parameterized_test! {can_compare_candidates, (left, right, expected), {
    can_compare_candidates_impl(left, right, expected);
}}

can_compare_candidates! {
    case01_more_gold_wins: (vec![1, 3, 4], vec![1, 2, 4], Ordering::Less),
    case02_less_gold_loses: (vec![1, 2, 4], vec![1, 3, 4], Ordering::Greater),
    case03_shorter_wins_on_gold_tie: (vec![1, 2], vec![1, 2, 4], Ordering::Less),
    case04_same_route_is_equal: (vec![1, 2, 4], vec![1, 2, 4], Ordering::Equal),
    case05_lexicographic_on_full_tie: (vec![2, 1], vec![2, 4], Ordering::Less),
}

fn can_compare_candidates_impl(left: Vec<NodeId>, right: Vec<NodeId>, expected: Ordering) {
    let cavern = create_diamond_cavern();
    let left = Route::from_nodes(&cavern, left).unwrap();
    let right = Route::from_nodes(&cavern, right).unwrap();

    assert_eq!(left.compare_candidates(&right), expected);
    assert_eq!(left.is_better_than(&right), expected == Ordering::Less);
}

#[test]
fn can_reject_distance_overflow() {
    let cavern = create_huge_edge_cavern();
    let mut route = Route::from_nodes(&cavern, [1, 2]).unwrap();

    let result = route.visit(&cavern, 3);

    assert_eq!(result, Err(NavigationError::DistanceOverflow { from: 2, to: 3 }));
    assert_eq!(route.nodes(), &[1, 2]);
    assert_eq!(route.distance(), u64::MAX);
    assert!(!route.contains(3));
}

use super::*;
use crate::algorithms::shortest_path;
use crate::helpers::models::*;
use crate::helpers::utils::*;
use crate::models::CavernBuilder;

fn search<G: GraphView>(graph: &G, start: NodeId, exit: NodeId, budget: Distance) -> SearchOutcome {
    RouteBudgetSearch::new(graph, create_test_environment()).search(start, exit, budget)
}

#[test]
fn can_collect_gold_on_line() {
    let cavern = create_line_cavern();

    let outcome = search(&cavern, 1, 3, 2);

    let route = outcome.route.expect("no route");
    assert_eq!(route.nodes(), &[1, 2, 3]);
    assert_eq!(route.gold(), 5);
    assert_eq!(route.distance(), 2);
    assert!(!outcome.is_interrupted);
}

parameterized_test! {can_find_best_route_within_budget, (budget, expected), {
    let cavern = create_diamond_cavern();

    let route = search(&cavern, 1, 4, budget).route;

    assert_eq!(route.as_ref().map(|route| route.nodes().to_vec()), expected);
}}

can_find_best_route_within_budget! {
    case01_below_shortest: (1, None),
    case02_equal_to_shortest: (2, Some(vec![1, 2, 4])),
    case03_not_enough_for_detour: (3, Some(vec![1, 2, 4])),
    case04_enough_for_rich_side: (4, Some(vec![1, 3, 4])),
    case05_plenty: (100, Some(vec![1, 3, 4])),
}

#[test]
fn can_match_shortest_path_when_budget_has_no_slack() {
    let cavern = create_grid_cavern(3, 3, |node| node * 3);
    let shortest = shortest_path(&cavern, 0, 8).expect("no shortest path");

    let route = search(&cavern, 0, 8, shortest.distance()).route.expect("no route");

    assert_eq!(route.distance(), shortest.distance());
    assert!(route.gold() >= shortest.gold());
}

#[test]
fn can_explore_alternatives_instead_of_greedy_choice() {
    let cavern = CavernBuilder::default()
        .add_node(1, 0)
        .add_node(2, 5)
        .add_node(3, 1)
        .add_node(4, 20)
        .add_node(5, 0)
        .add_edge(1, 2, 1)
        .add_edge(2, 5, 1)
        .add_edge(1, 3, 1)
        .add_edge(3, 4, 1)
        .add_edge(4, 5, 1)
        .build()
        .unwrap();

    let route = search(&cavern, 1, 5, 3).route.expect("no route");

    assert_eq!(route.nodes(), &[1, 3, 4, 5]);
    assert_eq!(route.gold(), 21);
}

#[test]
fn can_return_start_when_it_is_exit() {
    let cavern = create_line_cavern();

    let route = search(&cavern, 2, 2, 10).route.expect("no route");

    assert_eq!(route.nodes(), &[2]);
}

#[test]
fn can_report_none_for_unknown_start_or_unreachable_exit() {
    let cavern = CavernBuilder::default().add_node(1, 0).add_node(2, 4).build().unwrap();

    assert!(search(&cavern, 1, 2, 100).route.is_none());
    assert!(search(&cavern, 7, 2, 100).route.is_none());
}

#[test]
fn can_return_candidate_found_before_deadline() {
    let cavern = create_diamond_cavern();
    let quota = Arc::new(CountingQuota::new(3));
    let environment = Arc::new(create_test_environment_with_quota(Some(quota.clone())));

    let outcome = RouteBudgetSearch::new(&cavern, environment).search(1, 4, 4);

    assert!(outcome.is_interrupted);
    assert_eq!(outcome.expansions, 3);
    assert_eq!(outcome.route.map(|route| route.nodes().to_vec()), Some(vec![1, 3, 4]));
    assert_eq!(quota.checks(), 4);
}

#[test]
fn can_return_feasible_route_when_interrupted_on_large_cavern() {
    let cavern = create_grid_cavern(6, 6, |node| node % 7);
    let budget = 20;
    let environment = Arc::new(create_test_environment_with_quota(Some(Arc::new(CountingQuota::new(200)))));

    let outcome = RouteBudgetSearch::new(&cavern, environment).search(0, 35, budget);

    assert!(outcome.is_interrupted);
    let route = outcome.route.expect("no route");
    assert!(route.distance() <= budget);
    assert_eq!(route.first(), Some(0));
    assert_eq!(route.last(), Some(35));
}

#[test]
fn can_return_nothing_when_deadline_is_already_reached() {
    let cavern = create_diamond_cavern();
    let environment = Arc::new(create_test_environment_with_quota(Some(Arc::new(CountingQuota::new(0)))));

    let outcome = RouteBudgetSearch::new(&cavern, environment).search(1, 4, 4);

    assert!(outcome.is_interrupted);
    assert_eq!(outcome.expansions, 0);
    assert!(outcome.route.is_none());
}

#[test]
fn can_get_same_result_in_parallel() {
    let cavern = create_grid_cavern(3, 4, |node| (node * 7) % 5);
    let environment = create_test_environment();

    let sequential = RouteBudgetSearch::new(&cavern, environment.clone()).search(0, 11, 9).route;
    let parallel = RouteBudgetSearch::new(&cavern, environment).with_parallel(true).search(0, 11, 9).route;

    assert!(sequential.is_some());
    assert_eq!(sequential, parallel);
}

parameterized_test! {can_use_incumbent, (budget, incumbent, expected), {
    let cavern = create_diamond_cavern();
    let incumbent = Route::from_nodes(&cavern, incumbent).unwrap();

    let route = RouteBudgetSearch::new(&cavern, create_test_environment())
        .with_incumbent(Some(incumbent))
        .search(1, 4, budget)
        .route;

    assert_eq!(route.map(|route| route.nodes().to_vec()), Some(expected));
}}

can_use_incumbent! {
    case01_improves_incumbent: (4, vec![1, 2, 4], vec![1, 3, 4]),
    case02_keeps_best_incumbent: (4, vec![1, 3, 4], vec![1, 3, 4]),
    case03_ignores_over_budget_incumbent: (2, vec![1, 3, 4], vec![1, 2, 4]),
    case04_ignores_incumbent_with_other_exit: (4, vec![1, 3], vec![1, 3, 4]),
}

#[test]
fn can_update_shared_best_only_with_better_candidate() {
    let cavern = create_diamond_cavern();
    let poor = Route::from_nodes(&cavern, [1, 2, 4]).unwrap();
    let rich = Route::from_nodes(&cavern, [1, 3, 4]).unwrap();
    let best = SharedBest::new(None);

    assert_eq!(best.best_gold(), None);
    assert!(best.try_update(&poor));
    assert_eq!(best.best_gold(), Some(1));
    assert!(best.try_update(&rich));
    assert!(!best.try_update(&poor));
    assert!(!best.try_update(&rich));
    assert_eq!(best.best_gold(), Some(10));
    assert_eq!(best.into_route(), Some(rich));
}

#[test]
fn can_update_shared_best_from_many_threads() {
    let cavern = create_grid_cavern(1, 50, |node| node);
    let best = SharedBest::new(None);
    let routes = (1..50).map(|last| Route::from_nodes(&cavern, 0..=last).unwrap()).collect::<Vec<_>>();

    std::thread::scope(|scope| {
        routes.chunks(7).for_each(|chunk| {
            let best = &best;
            scope.spawn(move || chunk.iter().for_each(|route| {
                best.try_update(route);
            }));
        });
    });

    assert_eq!(best.best_gold(), Some((0..50).sum()));
}

#[test]
fn can_skip_huge_edge_without_overflow() {
    let cavern = create_huge_edge_cavern();

    let sequential = search(&cavern, 1, 3, 10);
    let parallel = RouteBudgetSearch::new(&cavern, create_test_environment()).with_parallel(true).search(1, 3, 10);

    assert_eq!(sequential.route.map(|route| route.nodes().to_vec()), Some(vec![1, 3]));
    assert_eq!(parallel.route.map(|route| route.nodes().to_vec()), Some(vec![1, 3]));
}

#[test]
fn can_reject_overflowing_route_with_maximum_budget() {
    let cavern = create_huge_edge_cavern();

    let route = search(&cavern, 1, 3, u64::MAX).route.expect("no route");

    assert_eq!(route.nodes(), &[1, 3]);
    assert_eq!(route.distance(), 1);
}

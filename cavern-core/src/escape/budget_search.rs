#[cfg(test)]
#[path = "../../tests/unit/escape/budget_search_test.rs"]
mod budget_search_test;

use crate::algorithms::shortest_distances;
use crate::models::{Distance, Gold, GraphView, NodeId, Route};
use crate::utils::{Environment, parallel_into_collect};
use rustc_hash::FxHashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

/// Keeps the best candidate found so far. Updates are done under a single compare-and-update
/// critical section, so racing branches never lose an improvement.
pub struct SharedBest {
    route: Mutex<Option<Route>>,
    // NOTE stores gold + 1, zero means no candidate yet
    gold: AtomicU64,
}

impl SharedBest {
    /// Creates a new instance of `SharedBest` with optional initial candidate.
    pub fn new(initial: Option<Route>) -> Self {
        let gold = initial.as_ref().map_or(0, |route| route.gold().saturating_add(1));
        Self { route: Mutex::new(initial), gold: AtomicU64::new(gold) }
    }

    /// Replaces the best candidate if the given one is strictly better. Returns true if replaced.
    pub fn try_update(&self, candidate: &Route) -> bool {
        let mut best = self.route.lock().unwrap_or_else(|poisoned| poisoned.into_inner());

        if best.as_ref().is_some_and(|best| !candidate.is_better_than(best)) {
            return false;
        }

        self.gold.store(candidate.gold().saturating_add(1), Ordering::Release);
        *best = Some(candidate.clone());

        true
    }

    /// Returns gold of the best candidate, if any, without locking.
    pub fn best_gold(&self) -> Option<Gold> {
        self.gold.load(Ordering::Acquire).checked_sub(1)
    }

    /// Returns the best candidate.
    pub fn into_route(self) -> Option<Route> {
        self.route.into_inner().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// A result of the budgeted search.
#[derive(Clone, Debug)]
pub struct SearchOutcome {
    /// The best route reaching the exit within the budget, if any was found.
    pub route: Option<Route>,
    /// Amount of expanded partial routes.
    pub expansions: usize,
    /// True if the deadline was hit before the search space was exhausted.
    pub is_interrupted: bool,
}

/// A depth-first branch-and-bound search for a simple path from start to exit which maximizes
/// collected gold while its distance stays within the budget.
///
/// This is an anytime algorithm: the deadline (environment quota) is polled at every expansion and
/// the best candidate found so far is returned once it is reached.
pub struct RouteBudgetSearch<'a, G: GraphView + ?Sized> {
    graph: &'a G,
    environment: Arc<Environment>,
    is_parallel: bool,
    incumbent: Option<Route>,
}

impl<'a, G: GraphView + ?Sized> RouteBudgetSearch<'a, G> {
    /// Creates a new instance of `RouteBudgetSearch`.
    pub fn new(graph: &'a G, environment: Arc<Environment>) -> Self {
        Self { graph, environment, is_parallel: false, incumbent: None }
    }

    /// Enables exploration of the root's sibling branches in parallel.
    pub fn with_parallel(mut self, is_parallel: bool) -> Self {
        self.is_parallel = is_parallel;
        self
    }

    /// Sets a known feasible route used as the initial best candidate to tighten the bound.
    pub fn with_incumbent(mut self, incumbent: Option<Route>) -> Self {
        self.incumbent = incumbent;
        self
    }

    /// Searches for the best route from `start` to `exit` with distance not exceeding `budget`.
    /// Reports no route rather than fabricating one when nothing feasible is found in time.
    pub fn search(&self, start: NodeId, exit: NodeId, budget: Distance) -> SearchOutcome {
        let Ok(root) = Route::new(self.graph, start) else {
            return SearchOutcome { route: None, expansions: 0, is_interrupted: false };
        };

        let incumbent = self.incumbent.clone().filter(|route| {
            route.first() == Some(start) && route.last() == Some(exit) && route.distance() <= budget
        });

        let context = BranchContext::new(self.graph, &self.environment, exit, budget, incumbent);

        let expansions = if self.is_parallel && start != exit {
            if context.check_interruption() {
                0
            } else {
                let children = context.expand(root);

                let child_expansions = self.environment.parallelism.execute(|| {
                    parallel_into_collect(children, |child| context.explore_branch(child)).into_iter().sum::<usize>()
                });

                1 + child_expansions
            }
        } else {
            context.explore_branch(root)
        };

        let is_interrupted = context.is_interrupted.load(Ordering::Relaxed);
        let route = context.best.into_route();

        (self.environment.logger)(&format!(
            "budget search finished: {expansions} expansions, best gold: {}, interrupted: {is_interrupted}",
            route.as_ref().map_or_else(|| "none".to_string(), |route| route.gold().to_string())
        ));

        SearchOutcome { route, expansions, is_interrupted }
    }
}

struct BranchContext<'a, G: GraphView + ?Sized> {
    graph: &'a G,
    environment: &'a Environment,
    exit: NodeId,
    budget: Distance,
    /// Shortest distance from each node to the exit: an admissible bound on the remaining cost.
    to_exit: FxHashMap<NodeId, Distance>,
    /// Node gold sorted by the distance to exit with prefix sums: an optimistic gold bound.
    gold_by_reach: Vec<(Distance, Gold)>,
    best: SharedBest,
    is_interrupted: AtomicBool,
}

impl<'a, G: GraphView + ?Sized> BranchContext<'a, G> {
    fn new(graph: &'a G, environment: &'a Environment, exit: NodeId, budget: Distance, incumbent: Option<Route>) -> Self {
        let to_exit = shortest_distances(graph, exit);

        let mut reach = to_exit.iter().map(|(&node, &distance)| (distance, graph.gold(node))).collect::<Vec<_>>();
        reach.sort_unstable();
        let gold_by_reach = reach
            .into_iter()
            .scan(Gold::default(), |total, (distance, gold)| {
                *total = total.saturating_add(gold);
                Some((distance, *total))
            })
            .collect();

        Self {
            graph,
            environment,
            exit,
            budget,
            to_exit,
            gold_by_reach,
            best: SharedBest::new(incumbent),
            is_interrupted: AtomicBool::new(false),
        }
    }

    /// Runs depth-first search from the given partial route, returns amount of expansions.
    fn explore_branch(&self, root: Route) -> usize {
        let mut expansions = 0;
        let mut stack = vec![root];

        while let Some(route) = stack.pop() {
            if self.check_interruption() {
                break;
            }

            expansions += 1;

            if route.last() == Some(self.exit) {
                self.best.try_update(&route);
                continue;
            }

            if !self.can_improve(&route) {
                continue;
            }

            // NOTE children are ordered best first, the stack is LIFO
            stack.extend(self.expand(route).into_iter().rev());
        }

        expansions
    }

    /// Returns feasible extensions of the route ordered by descending gold, then ascending id.
    fn expand(&self, route: Route) -> Vec<Route> {
        let Some(last) = route.last() else { return vec![] };

        let mut candidates = route
            .frontier(self.graph)
            .into_iter()
            .filter(|&next| {
                let length = self.graph.edge_length(last, next);
                let remaining = self.to_exit.get(&next);

                match (length, remaining) {
                    (Some(length), Some(remaining)) => {
                        route.distance().saturating_add(length).saturating_add(*remaining) <= self.budget
                    }
                    _ => false,
                }
            })
            .collect::<Vec<_>>();

        candidates.sort_by(|a, b| self.graph.gold(*b).cmp(&self.graph.gold(*a)).then(a.cmp(b)));

        candidates
            .into_iter()
            .filter_map(|next| {
                let mut fork = route.fork();
                fork.visit(self.graph, next).ok().map(|_| fork)
            })
            .collect()
    }

    /// Checks whether the route can still reach at least the best gold: only nodes which still
    /// can reach the exit within the remaining budget may contribute.
    fn can_improve(&self, route: &Route) -> bool {
        let Some(best_gold) = self.best.best_gold() else { return true };

        let remaining_budget = self.budget.saturating_sub(route.distance());
        let idx = self.gold_by_reach.partition_point(|(distance, _)| *distance <= remaining_budget);
        let reachable_gold = idx.checked_sub(1).map_or(0, |idx| self.gold_by_reach[idx].1);

        route.gold().saturating_add(reachable_gold) >= best_gold
    }

    fn check_interruption(&self) -> bool {
        if self.is_interrupted.load(Ordering::Relaxed) {
            return true;
        }

        if self.environment.is_quota_reached() {
            self.is_interrupted.store(true, Ordering::Relaxed);
            return true;
        }

        false
    }
}

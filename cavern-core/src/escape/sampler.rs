#[cfg(test)]
#[path = "../../tests/unit/escape/sampler_test.rs"]
mod sampler_test;

use crate::models::{Distance, GraphView, NodeId, Route};
use crate::utils::{Environment, parallel_into_collect};
use rand::rngs::SmallRng;
use rand::{Rng, RngCore, SeedableRng};
use rustc_hash::FxHashSet;
use std::sync::Arc;

/// A result of a single randomized walk.
#[derive(Clone, Debug)]
pub enum WalkOutcome {
    /// The walk reached the exit.
    Reached(Route),
    /// All branches reachable from the start were tried, the exit was not found.
    Exhausted,
    /// The walk was stopped by the deadline.
    Stopped,
}

/// A result of sampling.
#[derive(Clone, Debug)]
pub struct SamplerOutcome {
    /// The best qualifying route: reaches the exit within the budget and has maximum gold.
    pub route: Option<Route>,
    /// Amount of walks which reached the exit, regardless of the budget.
    pub completed: usize,
    /// True if at least one walker was stopped by the deadline.
    pub is_interrupted: bool,
}

/// Produces an approximate feasible route by running a pool of independent randomized walkers.
///
/// Walkers do not share any mutable state: each one owns its visited set, path and random
/// generator seeded from the environment's random, so results are reproducible with a fixed seed.
/// The sampler is a best-effort supplement, it reports no route when no walker qualifies.
pub struct ParallelSampler<'a, G: GraphView + ?Sized> {
    graph: &'a G,
    environment: Arc<Environment>,
    walkers: usize,
}

impl<'a, G: GraphView + ?Sized> ParallelSampler<'a, G> {
    /// Creates a new instance of `ParallelSampler` with given amount of walkers.
    pub fn new(graph: &'a G, environment: Arc<Environment>, walkers: usize) -> Self {
        Self { graph, environment, walkers }
    }

    /// Runs all walkers from `start` to `exit` and selects the best one within `budget`.
    pub fn sample(&self, start: NodeId, exit: NodeId, budget: Distance) -> SamplerOutcome {
        let mut rng = self.environment.random.get_rng();
        let seeds = (0..self.walkers).map(|_| rng.next_u64()).collect::<Vec<_>>();

        // NOTE collecting results is the join barrier: selection starts once every walker finished
        let walks = self
            .environment
            .parallelism
            .execute(|| parallel_into_collect(seeds, |seed| self.walk(start, exit, seed)));

        let is_interrupted = walks.iter().any(|walk| matches!(walk, WalkOutcome::Stopped));
        let routes = walks
            .into_iter()
            .filter_map(|walk| match walk {
                WalkOutcome::Reached(route) => Some(route),
                _ => None,
            })
            .collect::<Vec<_>>();
        let completed = routes.len();

        let route = select_best(routes, exit, budget);

        (self.environment.logger)(&format!(
            "sampler finished: {completed} of {} walkers reached exit, qualifying route gold: {}",
            self.walkers,
            route.as_ref().map_or_else(|| "none".to_string(), |route| route.gold().to_string())
        ));

        SamplerOutcome { route, completed, is_interrupted }
    }

    /// Performs a self-avoiding random walk with backtracking.
    pub fn walk(&self, start: NodeId, exit: NodeId, seed: u64) -> WalkOutcome {
        if !self.graph.contains(start) {
            return WalkOutcome::Exhausted;
        }

        let mut rng = SmallRng::seed_from_u64(seed);
        let mut visited = FxHashSet::default();
        let mut path = vec![start];
        visited.insert(start);

        while let Some(&current) = path.last() {
            if current == exit {
                return Route::from_nodes(self.graph, path).map_or(WalkOutcome::Exhausted, WalkOutcome::Reached);
            }

            if self.environment.is_quota_reached() {
                return WalkOutcome::Stopped;
            }

            let options = self
                .graph
                .neighbours(current)
                .iter()
                .filter(|node| !visited.contains(*node))
                .copied()
                .collect::<Vec<_>>();

            if options.is_empty() {
                path.pop();
                continue;
            }

            let next = options[rng.gen_range(0..options.len())];
            visited.insert(next);
            path.push(next);
        }

        WalkOutcome::Exhausted
    }
}

/// Keeps routes which end at the exit within the budget and picks the one with maximum gold, the
/// first one in enumeration order wins among equals.
fn select_best(routes: Vec<Route>, exit: NodeId, budget: Distance) -> Option<Route> {
    routes
        .into_iter()
        .filter(|route| route.last() == Some(exit) && route.distance() <= budget)
        .fold(None, |best: Option<Route>, route| match best {
            Some(best) if best.gold() >= route.gold() => Some(best),
            _ => Some(route),
        })
}

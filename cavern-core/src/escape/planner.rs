#[cfg(test)]
#[path = "../../tests/unit/escape/planner_test.rs"]
mod planner_test;

use super::{EscapeState, ParallelSampler, RouteBudgetSearch};
use crate::algorithms::shortest_path;
use crate::models::{Distance, Gold, GraphView, NodeId, Route};
use crate::utils::{Environment, NavigationError, Timer};
use std::sync::Arc;

/// Specifies which strategy produced the escape route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlanSource {
    /// Branch-and-bound search found the route.
    Search,
    /// A randomized walker found the route and the search did not improve it.
    Sampler,
    /// Nothing better was found in time, the shortest path is used.
    ShortestPath,
}

/// A single replay instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EscapeStep {
    /// Pick up gold on the given (current) node.
    PickUp(NodeId),
    /// Move to the given adjacent node.
    MoveTo(NodeId),
}

/// A computed escape plan.
#[derive(Clone, Debug)]
pub struct EscapePlan {
    /// The route from the start to the exit.
    pub route: Route,
    /// The strategy which produced the route.
    pub source: PlanSource,
    /// Moves and pick up decisions to replay.
    pub steps: Vec<EscapeStep>,
}

/// Escape planner settings.
#[derive(Clone, Debug)]
pub struct PlannerConfig {
    /// Amount of randomized walkers, zero disables sampling.
    pub walkers: usize,
    /// Specifies whether the sampler runs before the search to provide an initial candidate.
    pub use_sampler: bool,
    /// Specifies whether the search explores root branches in parallel.
    pub parallel_search: bool,
}

impl PlannerConfig {
    /// Creates a default config with amount of walkers derived from available parallelism.
    pub fn new(environment: &Environment) -> Self {
        Self { walkers: environment.parallelism.available_cpus() * 4, use_sampler: true, parallel_search: false }
    }
}

/// A summary of the replayed plan.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReplaySummary {
    /// Gold picked up.
    pub gold: Gold,
    /// Distance travelled.
    pub distance: Distance,
}

/// Computes an escape plan: sampling, then budgeted search, then the shortest path fallback.
pub struct EscapePlanner<'a, G: GraphView + ?Sized> {
    graph: &'a G,
    environment: Arc<Environment>,
    config: PlannerConfig,
}

impl<'a, G: GraphView + ?Sized> EscapePlanner<'a, G> {
    /// Creates a new instance of `EscapePlanner`.
    pub fn new(graph: &'a G, environment: Arc<Environment>, config: PlannerConfig) -> Self {
        Self { graph, environment, config }
    }

    /// Plans a route from `start` to `exit` within `budget`. Fails only when even the shortest
    /// path does not fit the budget.
    pub fn plan(&self, start: NodeId, exit: NodeId, budget: Distance) -> Result<EscapePlan, NavigationError> {
        let timer = Timer::start();

        let sampled = if self.config.use_sampler && self.config.walkers > 0 {
            ParallelSampler::new(self.graph, self.environment.clone(), self.config.walkers)
                .sample(start, exit, budget)
                .route
        } else {
            None
        };

        let searched = RouteBudgetSearch::new(self.graph, self.environment.clone())
            .with_parallel(self.config.parallel_search)
            .with_incumbent(sampled.clone())
            .search(start, exit, budget)
            .route;

        let (route, source) = match (searched, sampled) {
            (Some(searched), Some(sampled)) if searched == sampled => (searched, PlanSource::Sampler),
            (Some(searched), _) => (searched, PlanSource::Search),
            (None, Some(sampled)) => (sampled, PlanSource::Sampler),
            (None, None) => {
                (self.environment.logger)("no candidate found in time, falling back to the shortest path");
                (self.shortest_path(start, exit, budget)?, PlanSource::ShortestPath)
            }
        };

        (self.environment.logger)(&format!(
            "escape plan: {source:?}, {} nodes, distance {} of {budget}, gold {}, planned in {}ms",
            route.size(),
            route.distance(),
            route.gold(),
            timer.elapsed_millis()
        ));

        let steps = create_steps(self.graph, &route);

        Ok(EscapePlan { route, source, steps })
    }

    fn shortest_path(&self, start: NodeId, exit: NodeId, budget: Distance) -> Result<Route, NavigationError> {
        match shortest_path(self.graph, start, exit) {
            Some(route) if route.distance() <= budget => Ok(route),
            Some(route) => Err(NavigationError::InfeasibleRoute { budget, shortest: Some(route.distance()) }),
            None => Err(NavigationError::InfeasibleRoute { budget, shortest: None }),
        }
    }
}

/// Creates replay steps: gold is picked up on every node which has it before advancing.
pub fn create_steps<G: GraphView + ?Sized>(graph: &G, route: &Route) -> Vec<EscapeStep> {
    route
        .nodes()
        .iter()
        .enumerate()
        .flat_map(|(idx, &node)| {
            let move_to = (idx > 0).then_some(EscapeStep::MoveTo(node));
            let pick_up = (graph.gold(node) > 0).then_some(EscapeStep::PickUp(node));

            move_to.into_iter().chain(pick_up)
        })
        .collect()
}

/// Replays the plan against the planning protocol. The current tile is checked before picking up,
/// so a tile emptied earlier never causes a failed pick up.
pub fn replay<S: EscapeState + ?Sized>(plan: &EscapePlan, state: &mut S) -> Result<ReplaySummary, NavigationError> {
    let current = state.current_node();
    if plan.route.first() != Some(current) {
        return Err(NavigationError::InvalidMove { from: current, to: plan.route.first().unwrap_or(current) });
    }

    let initial_time = state.time_remaining();

    let gold = plan.steps.iter().try_fold(Gold::default(), |gold, step| match *step {
        EscapeStep::MoveTo(node) => state.move_to(node).map(|_| gold),
        EscapeStep::PickUp(_) if state.tile_gold() > 0 => state.pick_up_gold().map(|picked| gold.saturating_add(picked)),
        EscapeStep::PickUp(_) => Ok(gold),
    })?;

    Ok(ReplaySummary { gold, distance: initial_time.saturating_sub(state.time_remaining()) })
}

/// Plans the escape from the state's current node to its exit within the remaining time and
/// replays it.
pub fn escape<S, G>(
    state: &mut S,
    graph: &G,
    environment: Arc<Environment>,
    config: PlannerConfig,
) -> Result<(EscapePlan, ReplaySummary), NavigationError>
where
    S: EscapeState + ?Sized,
    G: GraphView + ?Sized,
{
    let plan = EscapePlanner::new(graph, environment, config).plan(
        state.current_node(),
        state.exit(),
        state.time_remaining(),
    )?;
    let summary = replay(&plan, state)?;

    Ok((plan, summary))
}

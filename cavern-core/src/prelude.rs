//! This module reimports commonly used types.

pub use crate::escape::{
    EscapePlan, EscapePlanner, EscapeState, EscapeStep, ParallelSampler, PlanSource, PlannerConfig, ReplaySummary,
    RouteBudgetSearch, SamplerOutcome, SearchOutcome, create_steps, escape, replay,
};
pub use crate::exploration::{ExplorationController, ExplorationPhase, ExplorationState, ExplorationStats, NeighbourStatus};
pub use crate::models::{Cavern, CavernBuilder, Distance, Gold, GraphView, NodeId, Position, Route};
pub use crate::simulation::{EscapeSimulation, ExplorationSimulation};

pub use crate::utils::{DefaultRandom, Random};
pub use crate::utils::{Environment, InfoLogger, Parallelism};
pub use crate::utils::{GenericError, GenericResult, NavigationError};
pub use crate::utils::{Quota, TimeQuota};

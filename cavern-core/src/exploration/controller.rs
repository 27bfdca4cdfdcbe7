#[cfg(test)]
#[path = "../../tests/unit/exploration/controller_test.rs"]
mod controller_test;

use super::{ExplorationState, NeighbourStatus};
use crate::models::NodeId;
use crate::utils::{InfoLogger, NavigationError};
use rustc_hash::FxHashSet;

/// Specifies a phase of the exploration state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExplorationPhase {
    /// Standing at a node which still exposes undiscovered neighbours (or was just entered).
    AtNode,
    /// Walking back up the traversal stack to an ancestor with undiscovered neighbours.
    Backtracking,
    /// Standing at the target.
    Done,
}

/// Keeps statistics of a finished exploration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ExplorationStats {
    /// Total amount of physical moves, including backtracking.
    pub moves: usize,
    /// Amount of backtracking moves.
    pub backtracks: usize,
    /// Amount of discovered nodes, including the start.
    pub discovered: usize,
}

/// A depth-first navigator with backtracking guided by a per-step distance heuristic.
///
/// Each node is marked discovered at most once: revisiting a node while backtracking never
/// triggers discovery bookkeeping again.
pub struct ExplorationController {
    discovered: FxHashSet<NodeId>,
    stack: Vec<NodeId>,
    phase: ExplorationPhase,
    stats: ExplorationStats,
    logger: Option<InfoLogger>,
}

impl Default for ExplorationController {
    fn default() -> Self {
        Self {
            discovered: FxHashSet::default(),
            stack: Vec::default(),
            phase: ExplorationPhase::AtNode,
            stats: ExplorationStats::default(),
            logger: None,
        }
    }
}

impl ExplorationController {
    /// Sets logger which receives a summary once exploration is finished.
    pub fn with_logger(mut self, logger: InfoLogger) -> Self {
        self.logger = Some(logger);
        self
    }

    /// Returns current phase.
    pub fn phase(&self) -> ExplorationPhase {
        self.phase
    }

    /// Explores the cavern until the target is reached. Returns immediately when standing at the
    /// target, no further moves are made. Every call starts from scratch at the current location.
    pub fn explore<S: ExplorationState + ?Sized>(&mut self, state: &mut S) -> Result<ExplorationStats, NavigationError> {
        let start = state.current_location();

        self.discovered.clear();
        self.stack.clear();
        self.phase = ExplorationPhase::AtNode;
        self.stats = ExplorationStats::default();

        self.stack.push(start);
        self.discovered.insert(start);

        loop {
            if state.distance_to_target() == 0 {
                self.phase = ExplorationPhase::Done;
                break;
            }

            match self.select_undiscovered(state) {
                Some(next) => {
                    self.discovered.insert(next);
                    state.move_to(next)?;
                    self.stack.push(next);
                    self.phase = ExplorationPhase::AtNode;
                    self.stats.moves += 1;
                }
                None => {
                    self.phase = ExplorationPhase::Backtracking;
                    self.stack.pop();

                    let parent = *self
                        .stack
                        .last()
                        .ok_or(NavigationError::SearchSpaceExhausted { start, moves: self.stats.moves })?;

                    state.move_to(parent)?;
                    self.stats.moves += 1;
                    self.stats.backtracks += 1;
                }
            }
        }

        self.stats.discovered = self.discovered.len();

        if let Some(logger) = self.logger.as_ref() {
            (logger)(&format!(
                "target reached at {} in {} moves ({} backtracks), discovered {} nodes",
                state.current_location(),
                self.stats.moves,
                self.stats.backtracks,
                self.stats.discovered
            ));
        }

        Ok(self.stats)
    }

    /// Picks undiscovered neighbour with the smallest heuristic distance, ties are broken by the
    /// smallest id.
    fn select_undiscovered<S: ExplorationState + ?Sized>(&self, state: &S) -> Option<NodeId> {
        state
            .neighbours()
            .into_iter()
            .filter(|neighbour| !self.discovered.contains(&neighbour.id))
            .min_by_key(|NeighbourStatus { id, distance_to_target }| (*distance_to_target, *id))
            .map(|neighbour| neighbour.id)
    }
}

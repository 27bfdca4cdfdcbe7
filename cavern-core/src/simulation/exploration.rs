#[cfg(test)]
#[path = "../../tests/unit/simulation/exploration_test.rs"]
mod exploration_test;

use crate::exploration::{ExplorationState, NeighbourStatus};
use crate::models::{Cavern, GraphView, NodeId};
use crate::utils::NavigationError;

/// Simulates the discovery protocol: the heuristic distance is the Manhattan distance between grid
/// positions which ignores walls. Nodes without position are estimated as one step away.
pub struct ExplorationSimulation<'a> {
    cavern: &'a Cavern,
    current: NodeId,
    target: NodeId,
    moves: usize,
}

impl<'a> ExplorationSimulation<'a> {
    /// Creates a new instance of `ExplorationSimulation`.
    pub fn new(cavern: &'a Cavern, start: NodeId, target: NodeId) -> Result<Self, NavigationError> {
        for node in [start, target] {
            if !cavern.contains(node) {
                return Err(NavigationError::UnknownNode { node });
            }
        }

        Ok(Self { cavern, current: start, target, moves: 0 })
    }

    /// Returns amount of moves made so far.
    pub fn moves(&self) -> usize {
        self.moves
    }

    fn estimate(&self, node: NodeId) -> u64 {
        if node == self.target {
            return 0;
        }

        match (self.cavern.position(node), self.cavern.position(self.target)) {
            (Some((row, col)), Some((target_row, target_col))) => {
                (row.abs_diff(target_row) + col.abs_diff(target_col)).max(1)
            }
            _ => 1,
        }
    }
}

impl ExplorationState for ExplorationSimulation<'_> {
    fn current_location(&self) -> NodeId {
        self.current
    }

    fn neighbours(&self) -> Vec<NeighbourStatus> {
        self.cavern
            .neighbours(self.current)
            .iter()
            .map(|&id| NeighbourStatus { id, distance_to_target: self.estimate(id) })
            .collect()
    }

    fn distance_to_target(&self) -> u64 {
        self.estimate(self.current)
    }

    fn move_to(&mut self, id: NodeId) -> Result<(), NavigationError> {
        if self.cavern.edge_length(self.current, id).is_none() {
            return Err(NavigationError::InvalidMove { from: self.current, to: id });
        }

        self.current = id;
        self.moves += 1;

        Ok(())
    }
}

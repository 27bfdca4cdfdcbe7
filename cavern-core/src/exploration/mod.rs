//! This module contains the online exploration logic: finding the target node while knowing only
//! the current node, its neighbours and a straight-line distance estimate to the target.

use crate::models::NodeId;
use crate::utils::NavigationError;

mod controller;
pub use self::controller::*;

/// Describes a neighbour as observed from the current node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NeighbourStatus {
    /// Neighbour id.
    pub id: NodeId,
    /// Heuristic straight-line distance from the neighbour to the target, ignores walls.
    pub distance_to_target: u64,
}

/// A discovery protocol: reveals only locally observable information.
pub trait ExplorationState {
    /// Returns id of the current node.
    fn current_location(&self) -> NodeId;

    /// Returns neighbours of the current node.
    fn neighbours(&self) -> Vec<NeighbourStatus>;

    /// Returns distance from the current node to the target, zero signals arrival.
    fn distance_to_target(&self) -> u64;

    /// Moves to an adjacent node, fails if the node is not adjacent.
    fn move_to(&mut self, id: NodeId) -> Result<(), NavigationError>;
}

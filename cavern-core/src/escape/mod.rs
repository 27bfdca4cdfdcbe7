//! This module contains the offline escape logic: with the whole cavern known, find a route to the
//! exit which collects as much gold as possible within the distance budget and the deadline.

use crate::models::{Distance, Gold, NodeId};
use crate::utils::NavigationError;

mod budget_search;
pub use self::budget_search::*;

mod planner;
pub use self::planner::*;

mod sampler;
pub use self::sampler::*;

/// A planning protocol used to replay a computed route.
pub trait EscapeState {
    /// Returns id of the current node.
    fn current_node(&self) -> NodeId;

    /// Returns id of the exit node.
    fn exit(&self) -> NodeId;

    /// Returns ids of all nodes.
    fn nodes(&self) -> Vec<NodeId>;

    /// Returns the remaining distance budget.
    fn time_remaining(&self) -> Distance;

    /// Returns amount of gold currently lying on the current tile.
    fn tile_gold(&self) -> Gold;

    /// Moves to an adjacent node, fails if the node is not adjacent.
    fn move_to(&mut self, node: NodeId) -> Result<(), NavigationError>;

    /// Picks up all gold on the current tile, fails if there is none.
    fn pick_up_gold(&mut self) -> Result<Gold, NavigationError>;
}

#[cfg(test)]
#[path = "../../tests/unit/simulation/escape_test.rs"]
mod escape_test;

use crate::escape::EscapeState;
use crate::models::{Cavern, Distance, Gold, GraphView, NodeId};
use crate::utils::NavigationError;
use rustc_hash::FxHashMap;

/// Simulates the planning protocol: gold is consumed on pick up and every move decrements the
/// remaining time by the edge length.
pub struct EscapeSimulation<'a> {
    cavern: &'a Cavern,
    current: NodeId,
    exit: NodeId,
    time_remaining: Distance,
    tiles: FxHashMap<NodeId, Gold>,
    collected: Gold,
}

impl<'a> EscapeSimulation<'a> {
    /// Creates a new instance of `EscapeSimulation`.
    pub fn new(cavern: &'a Cavern, start: NodeId, exit: NodeId, time_remaining: Distance) -> Result<Self, NavigationError> {
        for node in [start, exit] {
            if !cavern.contains(node) {
                return Err(NavigationError::UnknownNode { node });
            }
        }

        let tiles = cavern.nodes().into_iter().map(|node| (node, cavern.gold(node))).collect();

        Ok(Self { cavern, current: start, exit, time_remaining, tiles, collected: 0 })
    }

    /// Returns total amount of gold picked up so far.
    pub fn collected(&self) -> Gold {
        self.collected
    }

    /// Returns true if standing at the exit.
    pub fn is_escaped(&self) -> bool {
        self.current == self.exit
    }
}

impl EscapeState for EscapeSimulation<'_> {
    fn current_node(&self) -> NodeId {
        self.current
    }

    fn exit(&self) -> NodeId {
        self.exit
    }

    fn nodes(&self) -> Vec<NodeId> {
        self.cavern.nodes()
    }

    fn time_remaining(&self) -> Distance {
        self.time_remaining
    }

    fn tile_gold(&self) -> Gold {
        self.tiles.get(&self.current).copied().unwrap_or_default()
    }

    fn move_to(&mut self, node: NodeId) -> Result<(), NavigationError> {
        let length = self
            .cavern
            .edge_length(self.current, node)
            .ok_or(NavigationError::InvalidMove { from: self.current, to: node })?;

        if length > self.time_remaining {
            return Err(NavigationError::InfeasibleRoute { budget: self.time_remaining, shortest: Some(length) });
        }

        self.time_remaining -= length;
        self.current = node;

        Ok(())
    }

    fn pick_up_gold(&mut self) -> Result<Gold, NavigationError> {
        let node = self.current;
        match self.tiles.get_mut(&node) {
            Some(gold) if *gold > 0 => {
                let picked = std::mem::take(gold);
                self.collected = self.collected.saturating_add(picked);
                Ok(picked)
            }
            _ => Err(NavigationError::EmptyPickup { node }),
        }
    }
}

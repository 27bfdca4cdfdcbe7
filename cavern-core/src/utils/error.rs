#[cfg(test)]
#[path = "../../tests/unit/utils/error_test.rs"]
mod error_test;

use crate::models::{Distance, NodeId};
use std::fmt::{Display, Formatter};

/// A basic error type which, essentially, a wrapper on String type.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct GenericError(String);

/// A type alias for result type with `GenericError`.
pub type GenericResult<T> = Result<T, GenericError>;

impl Display for GenericError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for GenericError {}

impl From<String> for GenericError {
    fn from(msg: String) -> Self {
        Self(msg)
    }
}

impl<'a> From<&'a str> for GenericError {
    fn from(value: &'a str) -> Self {
        Self(value.to_string())
    }
}

impl From<std::io::Error> for GenericError {
    fn from(value: std::io::Error) -> Self {
        Self(value.to_string())
    }
}

impl From<NavigationError> for GenericError {
    fn from(value: NavigationError) -> Self {
        Self(value.to_string())
    }
}

/// Specifies failures which can happen while navigating the cavern.
///
/// Note, an expired deadline is not an error: searches report it via `is_interrupted` flag on
/// their outcomes and return the best result collected so far.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavigationError {
    /// No route fits the distance budget, not even the shortest one.
    InfeasibleRoute {
        /// Available distance budget.
        budget: Distance,
        /// Shortest distance to the exit, if the exit is reachable at all.
        shortest: Option<Distance>,
    },

    /// Two nodes which are expected to be adjacent are not connected by an edge.
    InvalidMove {
        /// Node where the move starts.
        from: NodeId,
        /// Requested destination.
        to: NodeId,
    },

    /// A pick up was requested on a tile without gold.
    EmptyPickup {
        /// Node with the empty tile.
        node: NodeId,
    },

    /// Online exploration has no node left to backtrack to, the target is unreachable.
    SearchSpaceExhausted {
        /// Node where exploration started.
        start: NodeId,
        /// Amount of moves made before giving up.
        moves: usize,
    },

    /// Accumulated route distance does not fit into the distance type.
    DistanceOverflow {
        /// Last node of the route.
        from: NodeId,
        /// Node which was appended.
        to: NodeId,
    },

    /// A node is not known to the graph.
    UnknownNode {
        /// Node id.
        node: NodeId,
    },

    /// A node is appended to a route which already contains it.
    DuplicateNode {
        /// Node id.
        node: NodeId,
    },
}

impl Display for NavigationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InfeasibleRoute { budget, shortest: Some(shortest) } => {
                write!(f, "no route fits the budget of {budget}, shortest route takes {shortest}")
            }
            Self::InfeasibleRoute { budget, shortest: None } => {
                write!(f, "no route fits the budget of {budget}, exit is unreachable")
            }
            Self::InvalidMove { from, to } => write!(f, "cannot move from {from} to {to}: nodes are not adjacent"),
            Self::EmptyPickup { node } => write!(f, "cannot pick up gold at {node}: tile is empty"),
            Self::SearchSpaceExhausted { start, moves } => {
                write!(f, "search space exhausted after {moves} moves from {start}: target is unreachable")
            }
            Self::DistanceOverflow { from, to } => write!(f, "route distance overflows on edge {from}-{to}"),
            Self::UnknownNode { node } => write!(f, "unknown node: {node}"),
            Self::DuplicateNode { node } => write!(f, "node {node} is already present in the route"),
        }
    }
}

impl std::error::Error for NavigationError {}

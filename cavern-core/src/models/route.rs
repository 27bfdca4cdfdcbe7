#[cfg(test)]
#[path = "../../tests/unit/models/route_test.rs"]
mod route_test;

use crate::models::{Distance, Gold, GraphView, NodeId};
use crate::utils::NavigationError;
use rustc_hash::FxHashSet;
use std::cmp::Ordering;

/// An ordered sequence of distinct nodes with cumulative distance and gold.
///
/// A route is extended only by [`Route::visit`] and forked by [`Route::fork`]: every branch
/// owns its copy, so nothing is shared between diverging extensions.
#[derive(Clone, Debug, Default)]
pub struct Route {
    nodes: Vec<NodeId>,
    visited: FxHashSet<NodeId>,
    distance: Distance,
    gold: Gold,
}

impl Route {
    /// Creates a new route which starts at given node.
    pub fn new<G: GraphView + ?Sized>(graph: &G, start: NodeId) -> Result<Self, NavigationError> {
        let mut route = Self::default();
        route.visit(graph, start)?;

        Ok(route)
    }

    /// Creates a new route visiting given nodes in order.
    pub fn from_nodes<G, I>(graph: &G, nodes: I) -> Result<Self, NavigationError>
    where
        G: GraphView + ?Sized,
        I: IntoIterator<Item = NodeId>,
    {
        nodes.into_iter().try_fold(Self::default(), |mut route, node| {
            route.visit(graph, node)?;
            Ok(route)
        })
    }

    /// Appends the node: adds the length of the edge from the last node (if any) and the node's gold.
    pub fn visit<G: GraphView + ?Sized>(&mut self, graph: &G, node: NodeId) -> Result<(), NavigationError> {
        if !graph.contains(node) {
            return Err(NavigationError::UnknownNode { node });
        }

        if self.visited.contains(&node) {
            return Err(NavigationError::DuplicateNode { node });
        }

        if let Some(last) = self.last() {
            let length = graph.edge_length(last, node).ok_or(NavigationError::InvalidMove { from: last, to: node })?;
            self.distance =
                self.distance.checked_add(length).ok_or(NavigationError::DistanceOverflow { from: last, to: node })?;
        }

        self.gold = self.gold.saturating_add(graph.gold(node));
        self.visited.insert(node);
        self.nodes.push(node);

        Ok(())
    }

    /// Returns an independent copy which is safe for divergent extension.
    pub fn fork(&self) -> Self {
        self.clone()
    }

    /// Returns true if the node is already present in the route.
    pub fn contains(&self, node: NodeId) -> bool {
        self.visited.contains(&node)
    }

    /// Returns neighbours of the last node which are not present in the route.
    pub fn frontier<G: GraphView + ?Sized>(&self, graph: &G) -> Vec<NodeId> {
        self.last()
            .map(|last| graph.neighbours(last).iter().filter(|node| !self.contains(**node)).copied().collect())
            .unwrap_or_default()
    }

    /// Returns visited nodes in order.
    pub fn nodes(&self) -> &[NodeId] {
        self.nodes.as_slice()
    }

    /// Returns the first node.
    pub fn first(&self) -> Option<NodeId> {
        self.nodes.first().copied()
    }

    /// Returns the last node.
    pub fn last(&self) -> Option<NodeId> {
        self.nodes.last().copied()
    }

    /// Returns cumulative distance.
    pub fn distance(&self) -> Distance {
        self.distance
    }

    /// Returns cumulative gold.
    pub fn gold(&self) -> Gold {
        self.gold
    }

    /// Returns amount of nodes.
    pub fn size(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if route has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Compares two candidates: more gold is better, then shorter distance, then lexicographically
    /// smaller node sequence.
    pub fn compare_candidates(&self, other: &Route) -> Ordering {
        other
            .gold
            .cmp(&self.gold)
            .then_with(|| self.distance.cmp(&other.distance))
            .then_with(|| self.nodes.cmp(&other.nodes))
    }

    /// Returns true if this route is a strictly better candidate than the other one.
    pub fn is_better_than(&self, other: &Route) -> bool {
        self.compare_candidates(other) == Ordering::Less
    }
}

impl PartialEq for Route {
    fn eq(&self, other: &Self) -> bool {
        self.nodes == other.nodes
    }
}

impl Eq for Route {}

#[cfg(test)]
#[path = "../../tests/unit/models/graph_test.rs"]
mod graph_test;

use crate::utils::{GenericError, GenericResult};
use rustc_hash::FxHashMap;

/// Specifies node identity.
pub type NodeId = u64;

/// Specifies edge length (traversal cost) and accumulated route distance.
pub type Distance = u64;

/// Specifies amount of gold.
pub type Gold = u64;

/// Specifies node position on a grid as (row, column).
pub type Position = (i64, i64);

/// A read-only view on a weighted graph of nodes with gold.
pub trait GraphView: Send + Sync {
    /// Returns true if node is known to the graph.
    fn contains(&self, node: NodeId) -> bool;

    /// Returns original amount of gold on the node's tile, zero for unknown node.
    fn gold(&self, node: NodeId) -> Gold;

    /// Returns neighbours of the node ordered by ascending id, empty for unknown node.
    fn neighbours(&self, node: NodeId) -> &[NodeId];

    /// Returns length of the edge between two adjacent nodes.
    fn edge_length(&self, from: NodeId, to: NodeId) -> Option<Distance>;

    /// Returns all node ids in ascending order.
    fn nodes(&self) -> Vec<NodeId>;

    /// Returns total amount of gold in the graph.
    fn total_gold(&self) -> Gold {
        self.nodes().into_iter().fold(0, |total: Gold, node| total.saturating_add(self.gold(node)))
    }
}

#[derive(Clone, Debug)]
struct NodeData {
    gold: Gold,
    position: Option<Position>,
    neighbours: Vec<NodeId>,
}

/// An in-memory cavern: an undirected weighted graph with gold on nodes.
#[derive(Clone, Debug)]
pub struct Cavern {
    nodes: FxHashMap<NodeId, NodeData>,
    edges: FxHashMap<(NodeId, NodeId), Distance>,
}

impl Cavern {
    /// Returns node's grid position if it is known.
    pub fn position(&self, node: NodeId) -> Option<Position> {
        self.nodes.get(&node).and_then(|data| data.position)
    }

    /// Returns amount of nodes.
    pub fn size(&self) -> usize {
        self.nodes.len()
    }
}

impl GraphView for Cavern {
    fn contains(&self, node: NodeId) -> bool {
        self.nodes.contains_key(&node)
    }

    fn gold(&self, node: NodeId) -> Gold {
        self.nodes.get(&node).map_or(0, |data| data.gold)
    }

    fn neighbours(&self, node: NodeId) -> &[NodeId] {
        self.nodes.get(&node).map(|data| data.neighbours.as_slice()).unwrap_or_default()
    }

    fn edge_length(&self, from: NodeId, to: NodeId) -> Option<Distance> {
        self.edges.get(&edge_key(from, to)).copied()
    }

    fn nodes(&self) -> Vec<NodeId> {
        let mut nodes = self.nodes.keys().copied().collect::<Vec<_>>();
        nodes.sort_unstable();

        nodes
    }
}

/// Provides a way to build a [Cavern] using the builder pattern.
#[derive(Debug, Default)]
pub struct CavernBuilder {
    nodes: Vec<(NodeId, Gold, Option<Position>)>,
    edges: Vec<(NodeId, NodeId, Distance)>,
}

impl CavernBuilder {
    /// Adds a node with given amount of gold.
    pub fn add_node(mut self, id: NodeId, gold: Gold) -> Self {
        self.nodes.push((id, gold, None));
        self
    }

    /// Adds a node with given amount of gold and grid position.
    pub fn add_node_at(mut self, id: NodeId, gold: Gold, position: Position) -> Self {
        self.nodes.push((id, gold, Some(position)));
        self
    }

    /// Adds an undirected edge between two nodes.
    pub fn add_edge(mut self, from: NodeId, to: NodeId, length: Distance) -> Self {
        self.edges.push((from, to, length));
        self
    }

    /// Builds a [Cavern]. Fails on duplicate nodes, self-loops, edges to unknown nodes, or
    /// conflicting lengths of the same edge.
    pub fn build(self) -> GenericResult<Cavern> {
        let mut nodes = FxHashMap::default();
        for (id, gold, position) in self.nodes {
            if nodes.insert(id, NodeData { gold, position, neighbours: vec![] }).is_some() {
                return Err(format!("duplicate node: {id}").into());
            }
        }

        let mut edges = FxHashMap::default();
        for (from, to, length) in self.edges {
            if from == to {
                return Err(format!("self-loop edge at node {from}").into());
            }

            if !nodes.contains_key(&from) || !nodes.contains_key(&to) {
                return Err(format!("edge {from}-{to} refers to unknown node").into());
            }

            match edges.insert(edge_key(from, to), length) {
                Some(existing) if existing != length => {
                    return Err(GenericError::from(format!(
                        "edge {from}-{to} has conflicting lengths: {existing} and {length}"
                    )));
                }
                Some(_) => continue,
                None => {}
            }

            for (node, neighbour) in [(from, to), (to, from)] {
                if let Some(data) = nodes.get_mut(&node) {
                    data.neighbours.push(neighbour);
                }
            }
        }

        nodes.values_mut().for_each(|data| data.neighbours.sort_unstable());

        Ok(Cavern { nodes, edges })
    }
}

fn edge_key(from: NodeId, to: NodeId) -> (NodeId, NodeId) {
    if from < to { (from, to) } else { (to, from) }
}

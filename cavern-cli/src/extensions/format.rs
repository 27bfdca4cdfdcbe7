//! Cavern and result JSON formats.

#[cfg(test)]
#[path = "../../tests/unit/extensions/format_test.rs"]
mod format_test;

use cavern_core::prelude::*;
use serde::{Deserialize, Serialize};
use std::io::{BufReader, BufWriter, Read, Write};

/// A cavern definition together with the task to solve on it.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CavernProblem {
    /// Cavern nodes.
    pub nodes: Vec<NodeDef>,
    /// Undirected weighted edges.
    pub edges: Vec<EdgeDef>,
    /// A node where the escape (and exploration) starts.
    pub start: NodeId,
    /// An exit node.
    pub exit: NodeId,
    /// A node to find during exploration, the exit is used when omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<NodeId>,
    /// Distance budget for the escape.
    pub time_remaining: Distance,
}

/// A cavern node.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct NodeDef {
    /// Node id.
    pub id: NodeId,
    /// Gold lying on the node.
    #[serde(default)]
    pub gold: Gold,
    /// Grid row.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub row: Option<i64>,
    /// Grid column.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub col: Option<i64>,
}

/// An undirected cavern edge.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct EdgeDef {
    /// One end.
    pub from: NodeId,
    /// Another end.
    pub to: NodeId,
    /// Edge length.
    pub length: Distance,
}

/// An exploration result.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ExplorationResult {
    /// Found target.
    pub target: NodeId,
    /// Total amount of moves, including backtracking.
    pub moves: usize,
    /// Amount of backtracking moves.
    pub backtracks: usize,
    /// Amount of discovered nodes.
    pub discovered: usize,
}

/// An escape result.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EscapeResult {
    /// Visited nodes from the start to the exit.
    pub route: Vec<NodeId>,
    /// Collected gold.
    pub gold: Gold,
    /// Travelled distance.
    pub distance: Distance,
    /// Strategy which produced the route: `search`, `sampler` or `shortestPath`.
    pub source: String,
}

impl CavernProblem {
    /// Builds a cavern graph from the definition.
    pub fn to_cavern(&self) -> Result<Cavern, String> {
        let builder = self.nodes.iter().try_fold(CavernBuilder::default(), |builder, node| {
            match (node.row, node.col) {
                (Some(row), Some(col)) => Ok(builder.add_node_at(node.id, node.gold, (row, col))),
                (None, None) => Ok(builder.add_node(node.id, node.gold)),
                _ => Err(format!("node {} has incomplete position: both row and col are expected", node.id)),
            }
        })?;

        self.edges
            .iter()
            .fold(builder, |builder, edge| builder.add_edge(edge.from, edge.to, edge.length))
            .build()
            .map_err(|err| format!("cannot build cavern: '{err}'"))
    }

    /// Returns the node to find during exploration.
    pub fn exploration_target(&self) -> NodeId {
        self.target.unwrap_or(self.exit)
    }
}

impl EscapeResult {
    /// Creates a result from the computed plan and its replay summary.
    pub fn new(plan: &EscapePlan, summary: ReplaySummary) -> Self {
        let source = match plan.source {
            PlanSource::Search => "search",
            PlanSource::Sampler => "sampler",
            PlanSource::ShortestPath => "shortestPath",
        };

        Self { route: plan.route.nodes().to_vec(), gold: summary.gold, distance: summary.distance, source: source.to_string() }
    }
}

impl ExplorationResult {
    /// Creates a result from exploration statistics.
    pub fn new(target: NodeId, stats: ExplorationStats) -> Self {
        Self { target, moves: stats.moves, backtracks: stats.backtracks, discovered: stats.discovered }
    }
}

/// Reads a cavern problem from json.
pub fn read_cavern<R: Read>(reader: BufReader<R>) -> Result<CavernProblem, String> {
    serde_json::from_reader(reader).map_err(|err| format!("cannot deserialize cavern: '{err}'"))
}

/// Writes a serializable value as pretty json.
pub fn write_json<W: Write, T: Serialize>(value: &T, writer: &mut BufWriter<W>) -> Result<(), String> {
    serde_json::to_writer_pretty(&mut *writer, value).map_err(|err| format!("cannot serialize result: '{err}'"))?;
    writer.flush().map_err(|err| err.to_string())
}

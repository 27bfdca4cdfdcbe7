//! This crate contains search algorithms to navigate a cavern represented as a weighted graph.
//!
//! # Exploration
//!
//! Without global knowledge, the [`exploration::ExplorationController`] finds the target node by a
//! depth-first traversal with backtracking. At every step, the undiscovered neighbour with the
//! smallest straight-line distance to the target is selected.
//!
//! # Escape
//!
//! With the full graph known, the escape problem is an orienteering problem: find a path from the
//! start to the exit which maximizes collected gold while its length stays within a budget. It is
//! solved by a time-boxed branch-and-bound [`escape::RouteBudgetSearch`], optionally backed by a
//! randomized [`escape::ParallelSampler`], and the shortest path as the last resort fallback.
//!

#![warn(missing_docs)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

#[cfg(test)]
#[path = "../tests/discovery/mod.rs"]
mod discovery;

pub mod algorithms;
pub mod escape;
pub mod exploration;
pub mod models;
pub mod prelude;
pub mod simulation;
pub mod utils;

//! This module contains generic graph algorithms used by search strategies.

mod dijkstra;
pub use self::dijkstra::*;

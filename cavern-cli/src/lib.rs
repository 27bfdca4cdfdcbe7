//! A command line interface library for cavern exploration and escape planning.
//!
//! It provides the JSON cavern format, the configuration file reader and the interruption
//! handling used by the `cavern-cli` binary.

#![warn(missing_docs)]

#[cfg(test)]
#[path = "../tests/features/mod.rs"]
mod features;

pub mod extensions;

//! Module provides various helper functionality.

pub mod config;
pub mod format;
pub mod interruption;

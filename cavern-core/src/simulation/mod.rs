//! In-memory implementations of the discovery and planning protocols over a [`Cavern`].
//!
//! [`Cavern`]: crate::models::Cavern

mod escape;
pub use self::escape::EscapeSimulation;

mod exploration;
pub use self::exploration::ExplorationSimulation;

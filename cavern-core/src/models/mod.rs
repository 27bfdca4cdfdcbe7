//! Contains models: a read-only graph view of the cavern and a route accumulated over it.

mod graph;
pub use self::graph::*;

mod route;
pub use self::route::*;

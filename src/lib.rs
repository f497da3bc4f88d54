//! Skein Graph Library
//!
//! An undirected graph over a fixed set of dense vertex indices, stored
//! as adjacency lists that preserve edge-insertion order. Provides
//! depth-first and breadth-first traversal, path reconstruction between
//! vertex pairs, and basic introspection.

pub mod error;
pub mod graph;
pub mod logging;

pub use error::{GraphError, Result};
pub use graph::{DegreeEntry, Graph};

//! Core in-memory graph representation.

pub mod graph;
pub mod utils;

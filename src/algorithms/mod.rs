//! Graph algorithms that run on a built [`Graph`](crate::core::graph::Graph).
//!
//! To run an algorithm simply import the module and call the function.
//!
//! # Examples
//!
//! ```rust
//! use denser::algorithms::densest_subgraph::densest_subgraph;
//! use denser::prelude::*;
//!
//! let graph = Graph::from_edge_list([("1", "2"), ("2", "3"), ("3", "1")], None).unwrap();
//! let result = densest_subgraph(&graph);
//! assert_eq!(result.density, 1.0);
//! ```

pub mod densest_subgraph;
pub mod metrics;

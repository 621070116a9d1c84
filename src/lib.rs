//! # denser
//!
//! `denser` finds a near-maximum-density subgraph of a large undirected graph
//! in time linear in the graph size, using Charikar's greedy vertex-peeling
//! algorithm. The returned subgraph is guaranteed to have at least half the
//! density (edges divided by vertices) of the true optimum.
//!
//! Graphs are ingested from delimited edge-list files (plain text, CSV, TSV,
//! optionally gzip/bzip2 compressed) with arbitrary external vertex
//! identifiers, which are remapped to a dense zero-based id space at build
//! time.
//!
//! # Examples
//!
//! ```rust
//! use denser::prelude::*;
//!
//! // a 2-path and a disjoint triangle
//! let edges = [("0", "1"), ("2", "3"), ("3", "4"), ("4", "2")];
//! let graph = Graph::from_edge_list(edges, None).unwrap();
//!
//! let result = densest_subgraph(&graph);
//! assert_eq!(result.num_vertices(), 3); // the triangle
//! assert_eq!(result.density, 1.0);
//! ```

pub mod algorithms;
pub mod core;
pub mod graph_loader;

pub mod prelude {
    pub use crate::{
        algorithms::densest_subgraph::{densest_subgraph, DensestSubgraph},
        core::{graph::Graph, utils::errors::GraphError},
        graph_loader::source::csv_loader::EdgeListLoader,
    };
}

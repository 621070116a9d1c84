//! Degree calculations for the entire graph.
//! The degree of a vertex is the number of edges connected to it.

use crate::core::graph::Graph;

/// The maximum degree of any vertex in the graph.
pub fn max_degree(graph: &Graph) -> usize {
    graph.vertices().map(|v| graph.degree(v)).max().unwrap_or(0)
}

/// The minimum degree of any vertex in the graph.
pub fn min_degree(graph: &Graph) -> usize {
    graph.vertices().map(|v| graph.degree(v)).min().unwrap_or(0)
}

/// The average degree of all vertices in the graph, 0 for an empty graph.
pub fn average_degree(graph: &Graph) -> f64 {
    if graph.num_vertices() == 0 {
        return 0.0;
    }
    let deg_sum: usize = graph.vertices().map(|v| graph.degree(v)).sum();
    deg_sum as f64 / graph.num_vertices() as f64
}

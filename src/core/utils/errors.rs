#[derive(thiserror::Error, Debug)]
pub enum GraphError {
    /// An edge record that does not yield two usable endpoint tokens.
    /// Ingestion is expected to have validated records already; the graph
    /// build re-checks defensively.
    #[error("malformed edge record: endpoints {src:?} -- {dst:?}")]
    MalformedEdge { src: String, dst: String },

    /// The build produced a graph with no vertices. Peeling an empty graph
    /// is well defined (empty result, density 0), so this is only surfaced
    /// where an empty graph indicates bad input, e.g. the CLI.
    #[error("graph has no vertices")]
    EmptyGraph,
}

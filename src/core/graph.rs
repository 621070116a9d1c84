//! An immutable-after-build undirected graph over a dense vertex id space.
//!
//! External vertex identifiers (sparse integers, names, whatever the input
//! file uses) are remapped to contiguous `u32` ids in order of first
//! sighting, so that every downstream structure can be a flat array indexed
//! by vertex id rather than a hash map keyed by external id.
//!
//! The graph is simple: self-loops and duplicate edges are filtered during
//! the build, never inside the algorithms.
//!
//! # Examples
//!
//! ```rust
//! use denser::core::graph::Graph;
//!
//! let graph = Graph::from_edge_list([("a", "b"), ("b", "c"), ("b", "a")], None).unwrap();
//! assert_eq!(graph.num_vertices(), 3);
//! assert_eq!(graph.num_edges(), 2); // "b" -- "a" is a duplicate
//! assert_eq!(graph.degree(graph.vertex("b").unwrap()), 2);
//! ```

use crate::core::utils::errors::GraphError;
use rustc_hash::{FxHashMap, FxHashSet};

/// Mapping between external vertex identifiers and dense zero-based ids.
///
/// Built once during graph construction and immutable afterwards. Dense ids
/// always form the contiguous range `[0, len)`.
#[derive(Debug, Default)]
pub struct IdMap {
    dense: FxHashMap<String, u32>,
    external: Vec<String>,
}

impl IdMap {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            dense: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            external: Vec::with_capacity(capacity),
        }
    }

    /// Dense id for `token`, assigning the next free id on first sighting.
    fn get_or_insert(&mut self, token: &str) -> u32 {
        match self.dense.get(token) {
            Some(&id) => id,
            None => {
                let id = self.external.len() as u32;
                self.dense.insert(token.to_owned(), id);
                self.external.push(token.to_owned());
                id
            }
        }
    }

    pub fn dense(&self, token: &str) -> Option<u32> {
        self.dense.get(token).copied()
    }

    pub fn external(&self, v: u32) -> &str {
        &self.external[v as usize]
    }

    pub fn len(&self) -> usize {
        self.external.len()
    }

    pub fn is_empty(&self) -> bool {
        self.external.is_empty()
    }
}

/// An undirected simple graph with symmetric adjacency lists, read-only once
/// built. Safe to share between threads.
#[derive(Debug)]
pub struct Graph {
    adj: Vec<Vec<u32>>,
    num_edges: usize,
    ids: IdMap,
}

impl Graph {
    /// Builds a graph from a sequence of endpoint token pairs.
    ///
    /// Dense ids are assigned in order of first sighting, self-loops are
    /// dropped and exact duplicate edges are deduplicated, so the resulting
    /// graph is always simple. `vertex_hint` preallocates the id table and
    /// adjacency storage when the caller knows the expected vertex count.
    ///
    /// Returns [`GraphError::MalformedEdge`] if an endpoint token is empty
    /// after trimming.
    pub fn from_edge_list<I, S>(edges: I, vertex_hint: Option<usize>) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = (S, S)>,
        S: AsRef<str>,
    {
        let hint = vertex_hint.unwrap_or(0);
        let mut ids = IdMap::with_capacity(hint);
        let mut adj: Vec<Vec<u32>> = Vec::with_capacity(hint);
        let mut seen: FxHashSet<(u32, u32)> = FxHashSet::default();
        let mut num_edges = 0usize;

        for (src, dst) in edges {
            let (src, dst) = (src.as_ref().trim(), dst.as_ref().trim());
            if src.is_empty() || dst.is_empty() {
                return Err(GraphError::MalformedEdge {
                    src: src.to_owned(),
                    dst: dst.to_owned(),
                });
            }
            let u = ids.get_or_insert(src);
            let v = ids.get_or_insert(dst);
            if adj.len() < ids.len() {
                adj.resize_with(ids.len(), Vec::new);
            }
            // the vertex is kept, the self-loop edge is not
            if u == v {
                continue;
            }
            if !seen.insert((u.min(v), u.max(v))) {
                continue;
            }
            adj[u as usize].push(v);
            adj[v as usize].push(u);
            num_edges += 1;
        }

        tracing::debug!(
            vertices = ids.len(),
            edges = num_edges,
            "built graph from edge list"
        );
        Ok(Self {
            adj,
            num_edges,
            ids,
        })
    }

    pub fn num_vertices(&self) -> usize {
        self.adj.len()
    }

    pub fn num_edges(&self) -> usize {
        self.num_edges
    }

    /// The static degree of `v` as of build time.
    pub fn degree(&self, v: u32) -> usize {
        self.adj[v as usize].len()
    }

    /// Neighbours of `v`, re-iterable on demand.
    pub fn neighbours(&self, v: u32) -> impl Iterator<Item = u32> + '_ {
        self.adj[v as usize].iter().copied()
    }

    /// All dense vertex ids, `0..num_vertices`.
    pub fn vertices(&self) -> impl Iterator<Item = u32> {
        0..self.adj.len() as u32
    }

    /// Average degree density of the whole graph: edges / vertices.
    pub fn density(&self) -> f64 {
        if self.adj.is_empty() {
            0.0
        } else {
            self.num_edges as f64 / self.adj.len() as f64
        }
    }

    /// Dense id of an external vertex identifier, if present.
    pub fn vertex(&self, token: &str) -> Option<u32> {
        self.ids.dense(token)
    }

    /// External identifier of a dense vertex id.
    pub fn external_id(&self, v: u32) -> &str {
        self.ids.external(v)
    }
}

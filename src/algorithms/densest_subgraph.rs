//! Greedy densest-subgraph search (Charikar's peeling algorithm).
//!
//! Repeatedly removes the vertex with the currently smallest degree, tracking
//! the density (edges / vertices) of what remains, and returns the induced
//! subgraph alive at the step where density peaked. The returned density is
//! guaranteed to be at least half the true maximum over all induced
//! subgraphs, and the whole run is O(V + E) time and space.
//!
//! The priority structure is a bucket queue indexed by degree: an array of
//! FIFO intrusive doubly-linked lists over a fixed vertex arena, giving O(1)
//! minimum extraction (amortised) and O(1) degree decrement.
//!
//! # Examples
//!
//! ```rust
//! use denser::algorithms::densest_subgraph::densest_subgraph;
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

use crate::core::graph::Graph;

const NIL: u32 = u32::MAX;

/// Bucket-indexed priority queue over vertices `0..n`, keyed by current
/// degree.
///
/// Each bucket is a FIFO intrusive doubly-linked list threaded through the
/// `next`/`prev` arrays, so a vertex can be unlinked from its bucket in O(1)
/// using its stored neighbours. A vertex is in exactly one bucket while
/// alive and in none once popped.
struct BucketQueue {
    head: Vec<u32>,
    tail: Vec<u32>,
    next: Vec<u32>,
    prev: Vec<u32>,
    degree: Vec<u32>,
    removed: Vec<bool>,
    /// Lowest bucket that can still be non-empty. A removal lowers a
    /// neighbour's bucket by at most one, so the pointer steps back at most
    /// one bucket per pop and the total scan cost stays linear.
    cursor: usize,
    len: usize,
}

impl BucketQueue {
    fn from_degrees(degrees: &[u32]) -> Self {
        let n = degrees.len();
        let max_degree = degrees.iter().copied().max().unwrap_or(0) as usize;
        let mut queue = Self {
            head: vec![NIL; max_degree + 1],
            tail: vec![NIL; max_degree + 1],
            next: vec![NIL; n],
            prev: vec![NIL; n],
            degree: degrees.to_vec(),
            removed: vec![false; n],
            cursor: 0,
            len: n,
        };
        // FIFO tie-break: vertices enter their initial bucket in id order
        for v in 0..n as u32 {
            queue.push_back(v, degrees[v as usize]);
        }
        queue
    }

    fn push_back(&mut self, v: u32, d: u32) {
        let b = d as usize;
        let t = self.tail[b];
        self.prev[v as usize] = t;
        self.next[v as usize] = NIL;
        if t == NIL {
            self.head[b] = v;
        } else {
            self.next[t as usize] = v;
        }
        self.tail[b] = v;
    }

    fn unlink(&mut self, v: u32) {
        let b = self.degree[v as usize] as usize;
        let (p, n) = (self.prev[v as usize], self.next[v as usize]);
        if p == NIL {
            self.head[b] = n;
        } else {
            self.next[p as usize] = n;
        }
        if n == NIL {
            self.tail[b] = p;
        } else {
            self.prev[n as usize] = p;
        }
    }

    /// Pops the earliest-enqueued vertex of the lowest non-empty bucket,
    /// returning it together with its degree at removal time.
    fn pop_min(&mut self) -> Option<(u32, u32)> {
        if self.len == 0 {
            return None;
        }
        while self.head[self.cursor] == NIL {
            self.cursor += 1;
        }
        let v = self.head[self.cursor];
        self.unlink(v);
        self.removed[v as usize] = true;
        self.len -= 1;
        Some((v, self.degree[v as usize]))
    }

    /// Moves an alive vertex down one bucket after it lost a neighbour.
    fn decrement(&mut self, v: u32) {
        debug_assert!(!self.removed[v as usize], "decrement of removed vertex {v}");
        let d = self.degree[v as usize];
        assert!(d > 0, "degree underflow for vertex {v}");
        self.unlink(v);
        self.degree[v as usize] = d - 1;
        self.push_back(v, d - 1);
        if ((d - 1) as usize) < self.cursor {
            self.cursor = (d - 1) as usize;
        }
    }

    fn degree(&self, v: u32) -> u32 {
        self.degree[v as usize]
    }

    fn is_removed(&self, v: u32) -> bool {
        self.removed[v as usize]
    }
}

/// The best induced subgraph found during peeling: its vertex set (ascending
/// dense ids), induced edges (`src < dst`) and density.
#[derive(Debug, Clone, PartialEq)]
pub struct DensestSubgraph {
    pub vertices: Vec<u32>,
    pub edges: Vec<(u32, u32)>,
    pub density: f64,
}

impl DensestSubgraph {
    fn empty() -> Self {
        Self {
            vertices: Vec::new(),
            edges: Vec::new(),
            density: 0.0,
        }
    }

    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }
}

/// Finds an induced subgraph whose density is within a factor 2 of the
/// maximum over all induced subgraphs of `graph`.
///
/// Runs in O(V + E): every edge causes at most two degree decrements and the
/// minimum-bucket scan is amortised linear. Each call owns its bucket
/// structure, so independent calls over a shared `&Graph` are safe from
/// separate threads.
///
/// Degenerate inputs are well defined: an empty graph yields an empty result
/// with density 0, a graph without edges yields a single vertex with
/// density 0.
pub fn densest_subgraph(graph: &Graph) -> DensestSubgraph {
    let n = graph.num_vertices();
    if n == 0 {
        return DensestSubgraph::empty();
    }
    if graph.num_edges() == 0 {
        // every subgraph has density 0, a singleton is the canonical answer
        return DensestSubgraph {
            vertices: vec![0],
            edges: Vec::new(),
            density: 0.0,
        };
    }

    let degrees: Vec<u32> = graph.vertices().map(|v| graph.degree(v) as u32).collect();
    let mut queue = BucketQueue::from_degrees(&degrees);

    let mut vcur = n;
    let mut ecur = graph.num_edges();
    // the full graph is the trivial starting candidate
    let mut best_density = graph.density();
    let mut best_cut = 0usize;
    let mut order: Vec<u32> = Vec::with_capacity(n);

    while let Some((u, degree_u)) = queue.pop_min() {
        let degree_u = degree_u as usize;
        assert!(degree_u <= ecur, "edge bookkeeping underflow at vertex {u}");
        vcur -= 1;
        ecur -= degree_u;
        for w in graph.neighbours(u) {
            if !queue.is_removed(w) {
                queue.decrement(w);
            }
        }
        order.push(u);
        if vcur > 0 {
            let density = ecur as f64 / vcur as f64;
            if density > best_density {
                best_density = density;
                best_cut = order.len();
            }
        }
    }
    assert!(
        vcur == 0 && ecur == 0,
        "peeling terminated with {vcur} vertices and {ecur} edges unaccounted for"
    );
    tracing::debug!(best_density, peeled_before_best = best_cut, "peeling done");

    rebuild(graph, &order, best_cut, best_density)
}

/// Materialises the induced subgraph over the suffix of the removal order,
/// i.e. every vertex still alive at the best peeling step.
fn rebuild(graph: &Graph, order: &[u32], best_cut: usize, best_density: f64) -> DensestSubgraph {
    let mut in_best = vec![true; graph.num_vertices()];
    for &v in &order[..best_cut] {
        in_best[v as usize] = false;
    }

    let vertices: Vec<u32> = graph.vertices().filter(|&v| in_best[v as usize]).collect();
    let mut edges = Vec::new();
    for &v in &vertices {
        for w in graph.neighbours(v) {
            if v < w && in_best[w as usize] {
                edges.push((v, w));
            }
        }
    }

    let density = edges.len() as f64 / vertices.len() as f64;
    debug_assert_eq!(density, best_density, "rebuilt density diverges from peeling");
    DensestSubgraph {
        vertices,
        edges,
        density,
    }
}

#[cfg(test)]
mod densest_subgraph_test {
    use super::*;
    use crate::graph_loader::example::karate_club::karate_club_graph;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn graph_of(edges: &[(u32, u32)]) -> Graph {
        let pairs: Vec<(String, String)> = edges
            .iter()
            .map(|&(a, b)| (a.to_string(), b.to_string()))
            .collect();
        Graph::from_edge_list(pairs, None).unwrap()
    }

    /// Exhaustive maximum density over all non-empty vertex subsets.
    /// Only viable for small graphs, used as ground truth.
    fn brute_force_max_density(graph: &Graph) -> f64 {
        let n = graph.num_vertices();
        assert!(n <= 12, "brute force is exponential in the vertex count");
        let mut best = 0.0f64;
        for mask in 1u32..(1 << n) {
            let mut edges = 0usize;
            for v in graph.vertices().filter(|&v| mask & (1 << v) != 0) {
                edges += graph
                    .neighbours(v)
                    .filter(|&w| v < w && mask & (1 << w) != 0)
                    .count();
            }
            let density = edges as f64 / mask.count_ones() as f64;
            if density > best {
                best = density;
            }
        }
        best
    }

    #[test]
    fn empty_graph_yields_empty_result() {
        let g = Graph::from_edge_list(Vec::<(&str, &str)>::new(), None).unwrap();
        let result = densest_subgraph(&g);
        assert_eq!(result, DensestSubgraph::empty());
    }

    #[test]
    fn single_vertex_without_edges() {
        // only a self-loop, which the build drops, so one vertex and no edges
        let g = Graph::from_edge_list([("a", "a")], None).unwrap();
        let result = densest_subgraph(&g);
        assert_eq!(result.vertices, vec![0]);
        assert_eq!(result.density, 0.0);
    }

    #[test]
    fn path_of_five_keeps_the_whole_path() {
        // removing any vertex of a path only lowers density
        let g = graph_of(&[(1, 2), (2, 3), (3, 4), (4, 5)]);
        let result = densest_subgraph(&g);
        assert_eq!(result.num_vertices(), 5);
        assert_eq!(result.num_edges(), 4);
        assert_eq!(result.density, 0.8);
    }

    #[test]
    fn clique_of_five_is_its_own_densest_subgraph() {
        let mut edges = Vec::new();
        for v in 0..5 {
            for w in (v + 1)..5 {
                edges.push((v, w));
            }
        }
        let g = graph_of(&edges);
        let result = densest_subgraph(&g);
        assert_eq!(result.num_vertices(), 5);
        assert_eq!(result.num_edges(), 10);
        assert_eq!(result.density, 2.0);
    }

    #[test]
    fn disjoint_triangle_wins_over_a_sparse_path() {
        let g = graph_of(&[(0, 1), (2, 3), (3, 4), (4, 2)]);
        let result = densest_subgraph(&g);
        let triangle: Vec<u32> = vec![g.vertex("2").unwrap(), g.vertex("3").unwrap(), g.vertex("4").unwrap()];
        assert_eq!(result.vertices, triangle);
        assert_eq!(result.density, 1.0);
    }

    #[test]
    fn bridged_triangles_keep_the_bridge() {
        // 7 edges over 6 vertices is denser (7/6) than either triangle (1.0),
        // so the whole graph is the best candidate
        let g = graph_of(&[(0, 1), (1, 2), (2, 0), (3, 4), (4, 5), (5, 3), (2, 3)]);
        let result = densest_subgraph(&g);
        assert_eq!(result.num_vertices(), 6);
        assert_eq!(result.num_edges(), 7);
        assert_eq!(result.density, 7.0 / 6.0);
        assert_eq!(result.density, brute_force_max_density(&g));
    }

    #[test]
    fn result_is_an_induced_subgraph() {
        let g = graph_of(&[(0, 1), (1, 2), (2, 0), (2, 3), (3, 4)]);
        let result = densest_subgraph(&g);
        // every original edge with both endpoints in the result must be kept
        let mut expected = Vec::new();
        for &v in &result.vertices {
            for w in g.neighbours(v) {
                if v < w && result.vertices.contains(&w) {
                    expected.push((v, w));
                }
            }
        }
        assert_eq!(result.edges, expected);
    }

    #[test]
    fn repeated_solves_are_deterministic() {
        let g = karate_club_graph();
        let first = densest_subgraph(&g);
        let second = densest_subgraph(&g);
        assert_eq!(first, second);
    }

    #[test]
    fn karate_club_beats_full_graph_density() {
        let g = karate_club_graph();
        let result = densest_subgraph(&g);
        assert!(result.density >= g.density());
        assert!(result.num_vertices() <= g.num_vertices());
        assert_eq!(
            result.density,
            result.num_edges() as f64 / result.num_vertices() as f64
        );
    }

    #[test]
    fn two_approximation_on_small_fixed_graphs() {
        let cases: Vec<Vec<(u32, u32)>> = vec![
            vec![(0, 1)],
            vec![(0, 1), (1, 2), (2, 3), (3, 4)],
            vec![(0, 1), (1, 2), (2, 0), (2, 3), (3, 4), (4, 5), (5, 3)],
            vec![(0, 1), (0, 2), (0, 3), (0, 4), (0, 5)],
            vec![(0, 1), (1, 2), (2, 0), (0, 3), (1, 3), (2, 3), (3, 4)],
        ];
        for edges in cases {
            let g = graph_of(&edges);
            let opt = brute_force_max_density(&g);
            let result = densest_subgraph(&g);
            assert!(
                2.0 * result.density >= opt,
                "density {} below half of optimum {} for {edges:?}",
                result.density,
                opt
            );
        }
    }

    #[test]
    fn bucket_queue_pops_in_fifo_order_within_a_bucket() {
        // four isolated-degree-equal vertices keep their insertion order
        let mut queue = BucketQueue::from_degrees(&[1, 1, 1, 1]);
        let popped: Vec<u32> = std::iter::from_fn(|| queue.pop_min().map(|(v, _)| v)).collect();
        assert_eq!(popped, vec![0, 1, 2, 3]);
    }

    #[test]
    fn bucket_queue_moves_a_decremented_vertex_down_one_bucket() {
        let mut queue = BucketQueue::from_degrees(&[2, 2, 1]);
        queue.decrement(0);
        assert_eq!(queue.degree(0), 1);
        // vertex 0 queues behind vertex 2, which was in bucket 1 first
        assert_eq!(queue.pop_min(), Some((2, 1)));
        assert_eq!(queue.pop_min(), Some((0, 1)));
        assert_eq!(queue.pop_min(), Some((1, 2)));
        assert_eq!(queue.pop_min(), None);
    }

    #[test]
    fn min_bucket_never_drops_by_more_than_one_between_pops() {
        // a star forces the centre below the previous minimum bucket
        let g = graph_of(&[(0, 1), (0, 2), (0, 3)]);
        let degrees: Vec<u32> = g.vertices().map(|v| g.degree(v) as u32).collect();
        let mut queue = BucketQueue::from_degrees(&degrees);
        let mut previous: Option<u32> = None;
        while let Some((u, degree_u)) = queue.pop_min() {
            if let Some(p) = previous {
                assert!(degree_u + 1 >= p, "bucket {degree_u} after bucket {p}");
            }
            previous = Some(degree_u);
            for w in g.neighbours(u) {
                if !queue.is_removed(w) {
                    queue.decrement(w);
                }
            }
        }
    }

    #[test]
    fn alive_degree_sum_is_twice_the_remaining_edges() {
        let g = karate_club_graph();
        let degrees: Vec<u32> = g.vertices().map(|v| g.degree(v) as u32).collect();
        let mut queue = BucketQueue::from_degrees(&degrees);
        let mut ecur = g.num_edges();
        while let Some((u, degree_u)) = queue.pop_min() {
            ecur -= degree_u as usize;
            for w in g.neighbours(u) {
                if !queue.is_removed(w) {
                    queue.decrement(w);
                }
            }
            let degree_sum: usize = g
                .vertices()
                .filter(|&v| !queue.is_removed(v))
                .map(|v| queue.degree(v) as usize)
                .sum();
            assert_eq!(degree_sum, 2 * ecur);
        }
        assert_eq!(ecur, 0);
    }

    proptest! {
        #[test]
        fn two_approximation_on_random_graphs(
            raw_edges in proptest::collection::vec((0u32..9, 0u32..9), 1..24)
        ) {
            let g = graph_of(&raw_edges);
            prop_assume!(g.num_vertices() > 0);
            let opt = brute_force_max_density(&g);
            let result = densest_subgraph(&g);
            prop_assert!(2.0 * result.density >= opt - 1e-9);
            // the reported density must match the materialised subgraph
            if !result.vertices.is_empty() {
                let recomputed = result.num_edges() as f64 / result.num_vertices() as f64;
                prop_assert_eq!(result.density, recomputed);
            }
        }
    }
}

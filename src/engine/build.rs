//! Bulk construction and from-scratch aggregate computation.
//!
//! When the full edge set is known upfront, building the structure first
//! and computing every aggregate in a single pass is asymptotically cheaper
//! than replaying [`Graph::add_edge`] once per edge, which re-derives the
//! local neighborhood's statistics on every call. Both paths must agree:
//! for any edge set the bulk result matches the incremental result within
//! [`TOLERANCE`], and [`Graph::check_consistency`] re-uses the same
//! from-scratch pass to audit a live graph's caches.

use std::cmp::Ordering;

use crate::engine::errors::GraphError;
use crate::engine::graph::{AggregateState, Classification, Graph, VertexId, TOLERANCE};

impl Graph {
    /// Builds a graph from an iterator of vertex-id pairs.
    ///
    /// Repeated pairs (in either order) are deduplicated; vertices are
    /// created on first reference.
    ///
    /// # Errors
    ///
    /// [`GraphError::SelfLoop`] when a pair names the same vertex twice.
    pub fn from_edge_list<I, S>(pairs: I) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = (S, S)>,
        S: AsRef<str>,
    {
        let mut graph = Graph::new();
        for (a, b) in pairs {
            graph.link_dedup(a.as_ref(), b.as_ref())?;
        }
        graph.finish_bulk();
        Ok(graph)
    }

    /// Builds a graph from adjacency lists (`id` → neighbor ids).
    ///
    /// Symmetric listings (each edge appearing under both endpoints) are
    /// deduplicated like repeated pairs. A key listed with no neighbors
    /// creates an addressable degree-0 vertex.
    ///
    /// # Errors
    ///
    /// [`GraphError::SelfLoop`] when a list names its own key.
    pub fn from_adjacency_lists<I, S, N>(lists: I) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = (S, N)>,
        S: AsRef<str>,
        N: IntoIterator,
        N::Item: AsRef<str>,
    {
        let mut graph = Graph::new();
        for (id, neighbors) in lists {
            let id = id.as_ref();
            graph.intern(id);
            for neighbor in neighbors {
                graph.link_dedup(id, neighbor.as_ref())?;
            }
        }
        graph.finish_bulk();
        Ok(graph)
    }

    /// Structure-only insertion for the bulk path: no aggregate updates.
    fn link_dedup(&mut self, id1: &str, id2: &str) -> Result<(), GraphError> {
        if id1 == id2 {
            return Err(GraphError::SelfLoop(id1.to_string()));
        }
        let v1 = self.intern(id1);
        let v2 = self.intern(id2);
        if self.data(v1).neighbors.contains(&v2) {
            return Ok(());
        }
        self.link(v1, v2);
        let record = crate::engine::edge::EdgeRecord::new(id1, v1, id2, v2);
        self.edges.insert(record.id.clone(), record);
        Ok(())
    }

    /// Fills the per-vertex caches and every aggregate from the final
    /// adjacency in one pass each.
    fn finish_bulk(&mut self) {
        for i in 0..self.vertices.len() {
            self.vertices[i].degree = self.vertices[i].neighbors.len();
        }
        for i in 0..self.vertices.len() {
            let sum: i64 = self.vertices[i]
                .neighbors
                .iter()
                .map(|n| self.vertices[n.0 as usize].degree as i64)
                .sum();
            self.vertices[i].neighbor_degree_sum = sum;
            if self.vertices[i].degree > 0 {
                self.active.insert(VertexId(i as u32));
            }
        }
        self.agg = self.recompute_aggregates();
    }

    /// Recomputes every aggregate from the neighbor sets alone, ignoring
    /// all caches. O(V + E).
    pub(crate) fn recompute_aggregates(&self) -> AggregateState {
        let mut agg = AggregateState {
            num_edges: self.edges.len(),
            ..AggregateState::default()
        };
        for vertex in &self.vertices {
            let degree = vertex.neighbors.len();
            if degree == 0 {
                continue;
            }
            let sum: i64 = vertex
                .neighbors
                .iter()
                .map(|&n| self.data(n).neighbors.len() as i64)
                .sum();
            let fi = sum as f64 / (degree * degree) as f64;
            agg.fi_sum += fi;
            let square = (degree as i64) * (degree as i64);
            agg.bucket_add(match square.cmp(&sum) {
                Ordering::Greater => Classification::Happy,
                Ordering::Less => Classification::Sad,
                Ordering::Equal => Classification::Neutral,
            });
            agg.min_fi = agg.min_fi.min(fi);
            agg.max_fi = agg.max_fi.max(fi);
        }
        for record in self.edges.values() {
            let da = self.data(record.a).neighbors.len() as i64;
            let db = self.data(record.b).neighbors.len() as i64;
            agg.degree_product_sum += da * db;
            agg.degree_square_sum += da * da + db * db;
            agg.degree_linear_sum += da + db;
        }
        agg
    }

    /// Verifies that every cache equals a from-scratch recomputation.
    ///
    /// Checks neighbor-set symmetry, the per-vertex degree and
    /// neighbor-degree-sum caches, membership of the positive-degree set,
    /// and each graph-wide scalar (integer sums exactly, Fi-derived values
    /// within [`TOLERANCE`], NaN matching NaN).
    ///
    /// # Errors
    ///
    /// [`GraphError::Numerical`] naming the first drifted quantity.
    pub fn check_consistency(&self) -> Result<(), GraphError> {
        for (i, vertex) in self.vertices.iter().enumerate() {
            let handle = VertexId(i as u32);
            if vertex.degree != vertex.neighbors.len() {
                return Err(GraphError::Numerical(format!(
                    "vertex '{}' caches degree {} but has {} neighbors",
                    vertex.id,
                    vertex.degree,
                    vertex.neighbors.len()
                )));
            }
            for &n in &vertex.neighbors {
                if !self.data(n).neighbors.contains(&handle) {
                    return Err(GraphError::Numerical(format!(
                        "asymmetric adjacency between '{}' and '{}'",
                        vertex.id,
                        self.data(n).id
                    )));
                }
            }
            let derived_sum: i64 = vertex
                .neighbors
                .iter()
                .map(|&n| self.data(n).neighbors.len() as i64)
                .sum();
            if vertex.neighbor_degree_sum != derived_sum {
                return Err(GraphError::Numerical(format!(
                    "vertex '{}' caches neighbor-degree sum {} but recomputation gives {}",
                    vertex.id, vertex.neighbor_degree_sum, derived_sum
                )));
            }
            if self.active.contains(&handle) != !vertex.neighbors.is_empty() {
                return Err(GraphError::Numerical(format!(
                    "vertex '{}' has degree {} but wrong positive-degree membership",
                    vertex.id, vertex.degree
                )));
            }
        }

        let fresh = self.recompute_aggregates();
        let exact: [(&str, i64, i64); 4] = [
            (
                "edge count",
                self.agg.num_edges as i64,
                fresh.num_edges as i64,
            ),
            (
                "degree product sum",
                self.agg.degree_product_sum,
                fresh.degree_product_sum,
            ),
            (
                "degree square sum",
                self.agg.degree_square_sum,
                fresh.degree_square_sum,
            ),
            (
                "degree linear sum",
                self.agg.degree_linear_sum,
                fresh.degree_linear_sum,
            ),
        ];
        for (what, cached, recomputed) in exact {
            if cached != recomputed {
                return Err(GraphError::Numerical(format!(
                    "{what} cached as {cached} but recomputation gives {recomputed}"
                )));
            }
        }
        let tallies = [
            ("happy count", self.agg.happy, fresh.happy),
            ("sad count", self.agg.sad, fresh.sad),
            ("neutral count", self.agg.neutral, fresh.neutral),
        ];
        for (what, cached, recomputed) in tallies {
            if cached != recomputed {
                return Err(GraphError::Numerical(format!(
                    "{what} cached as {cached} but recomputation gives {recomputed}"
                )));
            }
        }
        let floats = [
            ("Fi sum", self.agg.fi_sum, fresh.fi_sum),
            ("minimum Fi", self.agg.min_fi, fresh.min_fi),
            ("maximum Fi", self.agg.max_fi, fresh.max_fi),
        ];
        for (what, cached, recomputed) in floats {
            let matches =
                (cached.is_nan() && recomputed.is_nan()) || (cached - recomputed).abs() <= TOLERANCE;
            if !matches {
                return Err(GraphError::Numerical(format!(
                    "{what} cached as {cached} but recomputation gives {recomputed}"
                )));
            }
        }
        Ok(())
    }
}

impl Clone for Graph {
    /// Deep structural copy by bulk reconstruction from the current edges.
    ///
    /// Only vertices with at least one incident edge survive; degree-0
    /// vertices are not carried over.
    fn clone(&self) -> Self {
        let pairs: Vec<(String, String)> = self
            .edges
            .values()
            .map(|e| {
                (
                    self.vertex_name(e.a).to_string(),
                    self.vertex_name(e.b).to_string(),
                )
            })
            .collect();
        Graph::from_edge_list(pairs).expect("a stored edge cannot be a self-loop")
    }
}

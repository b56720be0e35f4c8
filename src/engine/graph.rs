//! # Degree-Correlation Graph Engine
//!
//! This module implements the core mutable undirected graph together with
//! its incrementally maintained degree-correlation statistics.
//!
//! ## Key Components
//!
//! - **VertexData**: Per-vertex record with the neighbor set and the two
//!   cached quantities every statistic is derived from: the degree and the
//!   sum of the neighbors' degrees
//!
//! - **VertexView**: Read-only capability surface over a vertex (id,
//!   degree, Fi, classification, neighborhood queries); only the graph
//!   engine itself can write the record behind it
//!
//! - **AggregateState**: Every cached graph-wide scalar in one struct,
//!   updated exclusively through the closed-form delta rules in
//!   [`Graph::add_edge`], [`Graph::remove_edge`] and [`Graph::swap_edges`]
//!
//! - **Graph**: Main structure owning the vertex table, the edge table and
//!   the aggregate state
//!
//! ## Design
//!
//! Each mutation touches only the local neighborhood of the edge involved:
//! the affected vertices' Fi contributions are retracted, the degrees and
//! neighbor-degree sums are adjusted by exact deltas, and the contributions
//! are restored. The cached min/max Fi can be invalidated when the vertex
//! holding an extremum is among the affected set; only then does the engine
//! fall back to an O(V) rescan over positive-degree vertices. After every
//! successful mutation each cached scalar equals what a full O(V+E)
//! recomputation would produce, within [`TOLERANCE`];
//! [`Graph::check_consistency`] verifies exactly that.
//!
//! ## Example
//!
//! ```rust,ignore
//! use swapgraph::Graph;
//!
//! let mut g = Graph::new();
//! g.add_edge("1", "2")?;
//! assert_eq!(g.number_of_edges(), 1);
//! assert!((g.afi() - 1.0).abs() < 1e-8);
//! ```

use std::cmp::Ordering;
use std::fmt;

use rustc_hash::{FxHashMap, FxHashSet};

use crate::engine::edge::{canonical_id, EdgeRecord, EdgeView};
use crate::engine::errors::GraphError;

/// Tolerance for comparing Fi-derived floating-point quantities.
///
/// Used both when flagging a vertex as a possible holder of the cached
/// min/max Fi and when [`Graph::check_consistency`] compares caches against
/// a from-scratch recomputation.
pub const TOLERANCE: f64 = 1e-8;

/// A dense internal handle for a vertex.
///
/// Callers identify vertices by their string ids; handles are an
/// implementation detail of the vertex table and the neighbor sets.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub(crate) struct VertexId(pub(crate) u32);

/// Three-way classification of a positive-degree vertex.
///
/// A vertex is compared through the integer product `degree * degree`
/// against its neighbor-degree sum, never through the equivalent
/// floating-point division, so exact ties classify exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    /// `degree² > sum of neighbor degrees`: the vertex out-degrees its
    /// neighborhood.
    Happy,
    /// `degree² < sum of neighbor degrees`.
    Sad,
    /// Exact equality. A vertex of degree 0 also reports neutral, but is
    /// excluded from every per-graph tally.
    Neutral,
}

/// Mutable per-vertex record. Only the graph engine writes these.
#[derive(Debug, Clone)]
pub(crate) struct VertexData {
    pub(crate) id: String,
    pub(crate) neighbors: FxHashSet<VertexId>,
    pub(crate) degree: usize,
    /// Sum of the current neighbors' degrees. Kept signed so swap deltas
    /// can be applied directly.
    pub(crate) neighbor_degree_sum: i64,
}

impl VertexData {
    fn new(id: String) -> Self {
        Self {
            id,
            neighbors: FxHashSet::default(),
            degree: 0,
            neighbor_degree_sum: 0,
        }
    }

    /// Friendship index: `sum of neighbor degrees / degree²`.
    ///
    /// NaN for a vertex of degree 0; callers filter those out.
    pub(crate) fn fi(&self) -> f64 {
        self.neighbor_degree_sum as f64 / (self.degree * self.degree) as f64
    }

    pub(crate) fn classification(&self) -> Classification {
        let square = (self.degree as i64) * (self.degree as i64);
        match square.cmp(&self.neighbor_degree_sum) {
            Ordering::Greater => Classification::Happy,
            Ordering::Less => Classification::Sad,
            Ordering::Equal => Classification::Neutral,
        }
    }
}

/// Read-only view of one vertex.
///
/// Exposes the query capability set without handing out the mutable record:
/// the engine is the only writer, so everything observable through a view
/// is consistent with the graph-wide aggregates.
#[derive(Clone, Copy)]
pub struct VertexView<'g> {
    graph: &'g Graph,
    handle: VertexId,
}

impl<'g> VertexView<'g> {
    fn data(&self) -> &'g VertexData {
        self.graph.data(self.handle)
    }

    /// The caller-supplied identity of this vertex.
    pub fn id(&self) -> &'g str {
        &self.data().id
    }

    /// Number of distinct neighbors.
    pub fn degree(&self) -> usize {
        self.data().degree
    }

    /// Sum of the degrees of the current neighbors.
    pub fn sum_of_neighbor_degrees(&self) -> usize {
        self.data().neighbor_degree_sum as usize
    }

    /// Friendship index `sum_of_neighbor_degrees / degree²`.
    ///
    /// NaN when the vertex has degree 0.
    pub fn fi(&self) -> f64 {
        self.data().fi()
    }

    /// The happy/sad/neutral classification of this vertex.
    pub fn classification(&self) -> Classification {
        self.data().classification()
    }

    pub fn is_happy(&self) -> bool {
        self.classification() == Classification::Happy
    }

    pub fn is_sad(&self) -> bool {
        self.classification() == Classification::Sad
    }

    pub fn is_neutral(&self) -> bool {
        self.classification() == Classification::Neutral
    }

    /// True when `id` names a current neighbor of this vertex.
    pub fn has_neighbor(&self, id: &str) -> bool {
        self.graph
            .lookup(id)
            .map_or(false, |h| self.data().neighbors.contains(&h))
    }

    /// Neighbor ids in ascending order.
    pub fn neighbors(&self) -> impl Iterator<Item = &'g str> {
        let graph = self.graph;
        let mut names: Vec<&'g str> = self
            .data()
            .neighbors
            .iter()
            .map(|&n| graph.vertex_name(n))
            .collect();
        names.sort_unstable();
        names.into_iter()
    }
}

impl fmt::Debug for VertexView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VertexView")
            .field("id", &self.id())
            .field("degree", &self.degree())
            .finish()
    }
}

impl fmt::Display for VertexView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (degree {})", self.id(), self.degree())
    }
}

/// Every cached graph-wide scalar.
///
/// Mutations update these exclusively through the delta rules in
/// [`Graph::add_edge`], [`Graph::remove_edge`] and [`Graph::swap_edges`];
/// the bulk path fills them in one from-scratch pass. Nothing else writes
/// them, which keeps the consistency invariant in one auditable place.
#[derive(Debug, Clone)]
pub(crate) struct AggregateState {
    /// Current edge count (M).
    pub(crate) num_edges: usize,
    /// Sum of Fi over positive-degree vertices.
    pub(crate) fi_sum: f64,
    /// Σ over edges of the product of the endpoint degrees.
    pub(crate) degree_product_sum: i64,
    /// Σ over edges of both endpoint degrees squared.
    pub(crate) degree_square_sum: i64,
    /// Σ over edges of both endpoint degrees.
    pub(crate) degree_linear_sum: i64,
    /// Minimum Fi over positive-degree vertices; NaN when edgeless.
    pub(crate) min_fi: f64,
    /// Maximum Fi over positive-degree vertices; NaN when edgeless.
    pub(crate) max_fi: f64,
    pub(crate) happy: usize,
    pub(crate) sad: usize,
    pub(crate) neutral: usize,
}

impl Default for AggregateState {
    fn default() -> Self {
        Self {
            num_edges: 0,
            fi_sum: 0.0,
            degree_product_sum: 0,
            degree_square_sum: 0,
            degree_linear_sum: 0,
            min_fi: f64::NAN,
            max_fi: f64::NAN,
            happy: 0,
            sad: 0,
            neutral: 0,
        }
    }
}

impl AggregateState {
    pub(crate) fn bucket_add(&mut self, class: Classification) {
        match class {
            Classification::Happy => self.happy += 1,
            Classification::Sad => self.sad += 1,
            Classification::Neutral => self.neutral += 1,
        }
    }

    fn bucket_remove(&mut self, class: Classification) {
        match class {
            Classification::Happy => self.happy -= 1,
            Classification::Sad => self.sad -= 1,
            Classification::Neutral => self.neutral -= 1,
        }
    }
}

/// Whether an affected vertex's old Fi matched a cached extremum, meaning
/// the extremum may no longer be held by anyone after the mutation.
struct ExtremumFlags {
    min_hit: bool,
    max_hit: bool,
}

#[inline]
fn cube(d: i64) -> i64 {
    d * d * d
}

/// A mutable, undirected, simple graph with incrementally maintained
/// degree-correlation statistics.
///
/// Vertices are created lazily the first time an edge references their id
/// and live for the lifetime of the graph; a vertex whose degree drops to 0
/// stays addressable but is excluded from every aggregate. The edge table
/// is keyed by the canonical unordered id of the pair.
///
/// All operations are synchronous, single-threaded, in-memory mutations.
/// Sharing a graph across threads requires an external mutual-exclusion
/// boundary; the engine makes no internal provision for it.
#[derive(Debug)]
pub struct Graph {
    pub(crate) vertices: Vec<VertexData>,
    pub(crate) vertex_index: FxHashMap<String, VertexId>,
    pub(crate) edges: FxHashMap<String, EdgeRecord>,
    /// Vertices with at least one incident edge.
    pub(crate) active: FxHashSet<VertexId>,
    pub(crate) agg: AggregateState,
}

impl Default for Graph {
    fn default() -> Self {
        Self {
            vertices: Vec::new(),
            vertex_index: FxHashMap::default(),
            edges: FxHashMap::default(),
            active: FxHashSet::default(),
            agg: AggregateState::default(),
        }
    }
}

impl Graph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn data(&self, handle: VertexId) -> &VertexData {
        &self.vertices[handle.0 as usize]
    }

    fn data_mut(&mut self, handle: VertexId) -> &mut VertexData {
        &mut self.vertices[handle.0 as usize]
    }

    pub(crate) fn vertex_name(&self, handle: VertexId) -> &str {
        &self.data(handle).id
    }

    fn lookup(&self, id: &str) -> Option<VertexId> {
        self.vertex_index.get(id).copied()
    }

    /// Returns the handle for `id`, creating the vertex if needed.
    pub(crate) fn intern(&mut self, id: &str) -> VertexId {
        if let Some(handle) = self.lookup(id) {
            return handle;
        }
        let handle = VertexId(self.vertices.len() as u32);
        self.vertices.push(VertexData::new(id.to_string()));
        self.vertex_index.insert(id.to_string(), handle);
        handle
    }

    pub(crate) fn link(&mut self, v1: VertexId, v2: VertexId) {
        self.data_mut(v1).neighbors.insert(v2);
        self.data_mut(v2).neighbors.insert(v1);
    }

    fn neighbor_handles(&self, handle: VertexId) -> Vec<VertexId> {
        self.data(handle).neighbors.iter().copied().collect()
    }

    /// Vertices whose Fi changes when the `(v1, v2)` link is created or
    /// cut: the two endpoints and every current neighbor of either.
    fn affected_by(&self, v1: VertexId, v2: VertexId) -> Vec<VertexId> {
        let mut set = FxHashSet::default();
        set.insert(v1);
        set.insert(v2);
        set.extend(self.data(v1).neighbors.iter().copied());
        set.extend(self.data(v2).neighbors.iter().copied());
        set.into_iter().collect()
    }

    /// Removes the affected vertices' current contributions from the Fi
    /// sum and the classification tallies, noting whether any of them held
    /// a cached extremum.
    fn retract(&mut self, affected: &[VertexId]) -> ExtremumFlags {
        let mut flags = ExtremumFlags {
            min_hit: false,
            max_hit: false,
        };
        for &handle in affected {
            let vertex = self.data(handle);
            if vertex.degree == 0 {
                continue;
            }
            let fi = vertex.fi();
            let class = vertex.classification();
            self.agg.fi_sum -= fi;
            self.agg.bucket_remove(class);
            if (fi - self.agg.min_fi).abs() <= TOLERANCE {
                flags.min_hit = true;
            }
            if (fi - self.agg.max_fi).abs() <= TOLERANCE {
                flags.max_hit = true;
            }
        }
        flags
    }

    /// Reinserts the affected vertices' contributions after the structural
    /// update and resolves the cached extrema.
    ///
    /// The new global minimum is the affected subset's minimum whenever
    /// that does not exceed the old one (every unaffected vertex is at or
    /// above the old minimum). Otherwise the old value stands unless its
    /// holder was among the affected vertices, in which case nothing cheap
    /// bounds the answer and the engine rescans. Symmetric for the maximum.
    fn restore(&mut self, affected: &[VertexId], flags: ExtremumFlags) {
        let mut local_min = f64::INFINITY;
        let mut local_max = f64::NEG_INFINITY;
        for &handle in affected {
            let vertex = self.data(handle);
            if vertex.degree == 0 {
                continue;
            }
            let fi = vertex.fi();
            let class = vertex.classification();
            self.agg.fi_sum += fi;
            self.agg.bucket_add(class);
            local_min = local_min.min(fi);
            local_max = local_max.max(fi);
        }

        // `!(a > b)` rather than `a <= b`: a NaN cache (edgeless graph)
        // must also adopt the local extremum.
        if local_min.is_finite() && !(local_min > self.agg.min_fi) {
            self.agg.min_fi = local_min;
        } else if flags.min_hit {
            self.agg.min_fi = self.rescan_min();
        }
        if local_max.is_finite() && !(local_max < self.agg.max_fi) {
            self.agg.max_fi = local_max;
        } else if flags.max_hit {
            self.agg.max_fi = self.rescan_max();
        }
    }

    /// O(V) fallback over positive-degree vertices; NaN when none remain.
    fn rescan_min(&self) -> f64 {
        #[cfg(feature = "tracing")]
        tracing::debug!(
            candidates = self.active.len(),
            "cached minimum Fi invalidated, rescanning"
        );
        self.active
            .iter()
            .map(|&h| self.data(h).fi())
            .fold(f64::NAN, f64::min)
    }

    /// O(V) fallback over positive-degree vertices; NaN when none remain.
    fn rescan_max(&self) -> f64 {
        #[cfg(feature = "tracing")]
        tracing::debug!(
            candidates = self.active.len(),
            "cached maximum Fi invalidated, rescanning"
        );
        self.active
            .iter()
            .map(|&h| self.data(h).fi())
            .fold(f64::NAN, f64::max)
    }

    // ------------------------------------------------------------------
    // Mutations
    // ------------------------------------------------------------------

    /// Adds the undirected edge `(id1, id2)`, creating either vertex on
    /// first reference.
    ///
    /// Returns `Ok(false)` without mutating anything when the edge already
    /// exists; this is idempotence, not an error.
    ///
    /// # Errors
    ///
    /// [`GraphError::SelfLoop`] when `id1 == id2`.
    pub fn add_edge(&mut self, id1: &str, id2: &str) -> Result<bool, GraphError> {
        if id1 == id2 {
            return Err(GraphError::SelfLoop(id1.to_string()));
        }
        let v1 = self.intern(id1);
        let v2 = self.intern(id2);
        if self.data(v1).neighbors.contains(&v2) {
            return Ok(false);
        }

        let d1_old = self.data(v1).degree as i64;
        let d2_old = self.data(v2).degree as i64;
        let d1_new = d1_old + 1;
        let d2_new = d2_old + 1;
        let s1 = self.data(v1).neighbor_degree_sum;
        let s2 = self.data(v2).neighbor_degree_sum;

        // The new edge contributes d1_new * d2_new to the product sum, and
        // every edge already incident to an endpoint gains exactly one
        // degree unit on that side, which totals the endpoint's pre-update
        // neighbor-degree sum.
        self.agg.degree_product_sum += d1_new * d2_new + s1 + s2;
        // Raising a vertex from degree d to d+1 changes its total square
        // contribution, new edge included, by (d+1)³ − d³.
        self.agg.degree_square_sum +=
            cube(d1_new) - cube(d1_old) + cube(d2_new) - cube(d2_old);
        // d_new for the new edge plus 1 for each of the d_old existing ones.
        self.agg.degree_linear_sum += d1_new + d1_old + d2_new + d2_old;

        // Pre-attachment neighborhoods: everyone here changes Fi.
        let affected = self.affected_by(v1, v2);
        let flags = self.retract(&affected);

        {
            let v = self.data_mut(v1);
            v.degree = d1_new as usize;
            v.neighbor_degree_sum += d2_new;
        }
        {
            let v = self.data_mut(v2);
            v.degree = d2_new as usize;
            v.neighbor_degree_sum += d1_new;
        }
        // Every existing neighbor now sees one endpoint a degree higher.
        for n in self.neighbor_handles(v1) {
            self.data_mut(n).neighbor_degree_sum += 1;
        }
        for n in self.neighbor_handles(v2) {
            self.data_mut(n).neighbor_degree_sum += 1;
        }

        self.link(v1, v2);
        if d1_old == 0 {
            self.active.insert(v1);
        }
        if d2_old == 0 {
            self.active.insert(v2);
        }

        self.restore(&affected, flags);

        let record = EdgeRecord::new(id1, v1, id2, v2);
        self.edges.insert(record.id.clone(), record);
        self.agg.num_edges += 1;
        Ok(true)
    }

    /// Removes the undirected edge `(id1, id2)`.
    ///
    /// Returns `false` without mutating anything when either id is unknown
    /// or the vertices are not neighbors. An endpoint whose degree drops to
    /// 0 stays addressable but leaves every aggregate; if the graph becomes
    /// edgeless, [`min_fi`](Graph::min_fi) and [`max_fi`](Graph::max_fi)
    /// become NaN.
    pub fn remove_edge(&mut self, id1: &str, id2: &str) -> bool {
        let (Some(v1), Some(v2)) = (self.lookup(id1), self.lookup(id2)) else {
            return false;
        };
        if !self.data(v1).neighbors.contains(&v2) {
            return false;
        }

        let d1_old = self.data(v1).degree as i64;
        let d2_old = self.data(v2).degree as i64;
        let d1_new = d1_old - 1;
        let d2_new = d2_old - 1;
        let s1 = self.data(v1).neighbor_degree_sum;
        let s2 = self.data(v2).neighbor_degree_sum;

        // Inverse of the add deltas. Each endpoint's neighbor-degree sum
        // still counts the edge being removed, so the doubly counted
        // mutual contribution is taken out before the sums are used.
        self.agg.degree_product_sum -= d1_old * d2_old + (s1 - d1_old) + (s2 - d2_old);
        self.agg.degree_square_sum -=
            cube(d1_old) - cube(d1_new) + cube(d2_old) - cube(d2_new);
        self.agg.degree_linear_sum -= d1_old + d1_new + d2_old + d2_new;

        // Computed while the edge is still present, so each endpoint is in
        // the other's neighborhood.
        let affected = self.affected_by(v1, v2);
        let flags = self.retract(&affected);

        {
            let v = self.data_mut(v1);
            v.degree = d1_new as usize;
            v.neighbor_degree_sum -= d2_old;
        }
        {
            let v = self.data_mut(v2);
            v.degree = d2_new as usize;
            v.neighbor_degree_sum -= d1_old;
        }
        for n in self.neighbor_handles(v1) {
            if n != v2 {
                self.data_mut(n).neighbor_degree_sum -= 1;
            }
        }
        for n in self.neighbor_handles(v2) {
            if n != v1 {
                self.data_mut(n).neighbor_degree_sum -= 1;
            }
        }

        self.data_mut(v1).neighbors.remove(&v2);
        self.data_mut(v2).neighbors.remove(&v1);
        if d1_new == 0 {
            self.active.remove(&v1);
        }
        if d2_new == 0 {
            self.active.remove(&v2);
        }

        self.restore(&affected, flags);

        self.edges.remove(&canonical_id(id1, id2));
        self.agg.num_edges -= 1;
        true
    }

    /// Replaces the edges `(v1, v1_curr)` and `(v2, v2_curr)` with
    /// `(v1, v1_new)` and `(v2, v2_new)`, preserving every vertex's degree.
    ///
    /// This is the elementary rewiring move for search over graphs with a
    /// fixed degree sequence: the six ids must describe a true exchange
    /// (`v1_curr == v2_new` and `v1_new == v2_curr`), so only the four
    /// involved vertices change Fi and only the product term of the
    /// assortativity moves.
    ///
    /// # Errors
    ///
    /// All preconditions are validated before any write; on error the
    /// graph is untouched.
    ///
    /// - [`GraphError::UnknownVertex`] when any of the six ids is absent.
    /// - [`GraphError::SelfLoop`] when a target pair names one vertex twice.
    /// - [`GraphError::IllegalSwap`] when a current pair is not an edge, a
    ///   target pair already is one, or the ids are not a true exchange.
    pub fn swap_edges(
        &mut self,
        v1: &str,
        v1_curr: &str,
        v1_new: &str,
        v2: &str,
        v2_curr: &str,
        v2_new: &str,
    ) -> Result<(), GraphError> {
        let resolve = |id: &str| {
            self.lookup(id)
                .ok_or_else(|| GraphError::UnknownVertex(id.to_string()))
        };
        let h1 = resolve(v1)?;
        let hc1 = resolve(v1_curr)?;
        let hn1 = resolve(v1_new)?;
        let h2 = resolve(v2)?;
        let hc2 = resolve(v2_curr)?;
        let hn2 = resolve(v2_new)?;

        if h1 == hn1 {
            return Err(GraphError::SelfLoop(v1.to_string()));
        }
        if h2 == hn2 {
            return Err(GraphError::SelfLoop(v2.to_string()));
        }
        if !(self.data(h1).neighbors.contains(&hc1)
            && self.data(h2).neighbors.contains(&hc2))
        {
            return Err(GraphError::IllegalSwap(
                "a pair to disconnect is not a current edge".into(),
            ));
        }
        if self.data(h1).neighbors.contains(&hn1) || self.data(h2).neighbors.contains(&hn2) {
            return Err(GraphError::IllegalSwap(
                "a pair to connect is already an edge".into(),
            ));
        }
        if !(hc1 == hn2 && hn1 == hc2) {
            return Err(GraphError::IllegalSwap(
                "the six ids are not an exchange of endpoints".into(),
            ));
        }

        // The preconditions leave exactly four distinct vertices.
        let affected = [h1, h2, hc1, hc2];
        let flags = self.retract(&affected);

        let dv1 = self.data(h1).degree as i64;
        let dv2 = self.data(h2).degree as i64;
        let dc1 = self.data(hc1).degree as i64;
        let dc2 = self.data(hc2).degree as i64;

        // Each of the four loses the degree of its old partner and gains
        // the degree of its new one; no degree itself changes.
        self.data_mut(h1).neighbor_degree_sum += dc2 - dc1;
        self.data_mut(h2).neighbor_degree_sum += dc1 - dc2;
        self.data_mut(hc2).neighbor_degree_sum += dv1 - dv2;
        self.data_mut(hc1).neighbor_degree_sum += dv2 - dv1;

        // Degrees are preserved, so the square and linear sums contribute
        // identically before and after; only the product term moves.
        self.agg.degree_product_sum += dv1 * (dc2 - dc1) + dv2 * (dc1 - dc2);

        self.data_mut(h1).neighbors.remove(&hc1);
        self.data_mut(hc1).neighbors.remove(&h1);
        self.data_mut(h2).neighbors.remove(&hc2);
        self.data_mut(hc2).neighbors.remove(&h2);
        self.link(h1, hc2);
        self.link(h2, hc1);

        self.edges.remove(&canonical_id(v1, v1_curr));
        self.edges.remove(&canonical_id(v2, v2_curr));
        let e1 = EdgeRecord::new(v1, h1, v1_new, hc2);
        self.edges.insert(e1.id.clone(), e1);
        let e2 = EdgeRecord::new(v2, h2, v2_new, hc1);
        self.edges.insert(e2.id.clone(), e2);

        self.restore(&affected, flags);
        Ok(())
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    /// Looks up a vertex by id. Degree-0 vertices remain addressable here
    /// even though they are excluded from [`vertices`](Graph::vertices).
    pub fn vertex(&self, id: &str) -> Option<VertexView<'_>> {
        self.lookup(id).map(|handle| VertexView {
            graph: self,
            handle,
        })
    }

    /// True when `id` has ever been referenced by an edge endpoint.
    pub fn contains_vertex(&self, id: &str) -> bool {
        self.vertex_index.contains_key(id)
    }

    /// True when the unordered pair `(id1, id2)` is a current edge.
    pub fn has_edge(&self, id1: &str, id2: &str) -> bool {
        self.edges.contains_key(&canonical_id(id1, id2))
    }

    /// Positive-degree vertices in ascending id order.
    pub fn vertices(&self) -> impl Iterator<Item = VertexView<'_>> {
        let mut handles: Vec<VertexId> = self.active.iter().copied().collect();
        handles.sort_by(|a, b| self.data(*a).id.cmp(&self.data(*b).id));
        handles.into_iter().map(move |handle| VertexView {
            graph: self,
            handle,
        })
    }

    /// Current edges in ascending canonical-id order.
    pub fn edges(&self) -> impl Iterator<Item = EdgeView<'_>> {
        let mut records: Vec<&EdgeRecord> = self.edges.values().collect();
        records.sort_by(|a, b| a.id.cmp(&b.id));
        records.into_iter().map(move |record| EdgeView {
            graph: self,
            record,
        })
    }

    /// Number of current edges (M).
    pub fn number_of_edges(&self) -> usize {
        self.agg.num_edges
    }

    /// Number of vertices with at least one incident edge.
    pub fn vertex_count(&self) -> usize {
        self.active.len()
    }

    /// Average Fi over positive-degree vertices; NaN when there are none.
    pub fn afi(&self) -> f64 {
        if self.active.is_empty() {
            return f64::NAN;
        }
        self.agg.fi_sum / self.active.len() as f64
    }

    /// Newman degree assortativity over the current edge multiset.
    ///
    /// NaN for an edgeless graph. When the denominator vanishes every edge
    /// endpoint has the same degree, which is reported as perfect
    /// assortativity (1.0) rather than 0/0.
    pub fn assortativity(&self) -> f64 {
        if self.agg.num_edges == 0 {
            return f64::NAN;
        }
        let one_over_m = 1.0 / self.agg.num_edges as f64;
        let half_mean_sq = (one_over_m * 0.5 * self.agg.degree_linear_sum as f64).powi(2);
        let numerator = one_over_m * self.agg.degree_product_sum as f64 - half_mean_sq;
        let denominator =
            one_over_m * 0.5 * self.agg.degree_square_sum as f64 - half_mean_sq;
        if denominator == 0.0 {
            return 1.0;
        }
        numerator / denominator
    }

    /// Minimum Fi over positive-degree vertices; NaN when edgeless.
    pub fn min_fi(&self) -> f64 {
        self.agg.min_fi
    }

    /// Maximum Fi over positive-degree vertices; NaN when edgeless.
    pub fn max_fi(&self) -> f64 {
        self.agg.max_fi
    }

    /// Positive-degree vertices with `degree² > sum of neighbor degrees`.
    pub fn count_happy(&self) -> usize {
        self.agg.happy
    }

    /// Positive-degree vertices with `degree² < sum of neighbor degrees`.
    pub fn count_sad(&self) -> usize {
        self.agg.sad
    }

    /// Positive-degree vertices with `degree²` exactly equal to the sum of
    /// neighbor degrees.
    pub fn count_neutral(&self) -> usize {
        self.agg.neutral
    }
}

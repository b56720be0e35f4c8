//! # Swapgraph - Incremental Degree-Correlation Statistics
//!
//! Swapgraph maintains a mutable, undirected, simple graph together with a
//! family of degree-correlation statistics: a per-vertex friendship index
//! (`Fi`), its graph-wide average (`Afi`), min/max `Fi`, a three-way
//! happy/sad/neutral classification tally, and Newman degree assortativity.
//! All of them are recomputed **incrementally** as edges are added,
//! removed, or swapped rather than from scratch.
//!
//! ## Architecture
//!
//! - **engine::graph**: the graph structure, the three mutations with
//!   their closed-form aggregate deltas, and all read-only queries
//! - **engine::build**: bulk construction for when the edge set is known
//!   upfront, numerically equivalent to the incremental path
//! - **engine::edge**: order-independent edge identity
//! - **engine::errors**: the error taxonomy (fatal invalid input vs.
//!   boolean no-ops)
//!
//! The intended caller is a sequential search or experiment driver that
//! repeatedly rewires a graph with degree-preserving edge swaps and reads
//! the statistics after each move.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use swapgraph::Graph;
//!
//! let mut g = Graph::from_edge_list([("1", "2"), ("2", "3"), ("3", "4")])?;
//! assert!((g.afi() - 1.375).abs() < 1e-8);
//! assert!((g.assortativity() + 0.5).abs() < 1e-8);
//!
//! g.add_edge("4", "1")?;
//! g.remove_edge("2", "3");
//! ```

#![forbid(unsafe_code)]

pub mod engine;

// Re-export commonly used types
pub use engine::edge::EdgeView;
pub use engine::errors::GraphError;
pub use engine::graph::{Classification, Graph, VertexView, TOLERANCE};

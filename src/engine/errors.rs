//! Error types for graph mutations and validation.

use thiserror::Error;

/// Errors raised by graph construction, mutation, or validation.
///
/// This enum is marked `#[non_exhaustive]` to allow adding new error variants
/// in the future without breaking changes.
///
/// Conditions that merely do nothing (adding an edge that already exists,
/// removing one that doesn't) are reported through boolean return values,
/// not through this type. Every variant here is fatal for the operation
/// that raised it, and is raised before any state has been mutated.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum GraphError {
    /// An operation would connect a vertex to itself.
    ///
    /// Self-loops are rejected everywhere: direct adds, bulk construction,
    /// and swaps whose target pair names the same vertex twice.
    #[error("self-loop on vertex '{0}' is not allowed")]
    SelfLoop(String),

    /// A swap referenced a vertex id that is not present in the graph.
    #[error("unknown vertex '{0}'")]
    UnknownVertex(String),

    /// A swap's topology preconditions failed.
    ///
    /// Covers: a pair to disconnect that is not currently an edge, a pair
    /// to connect that already is one, and six ids that do not describe a
    /// true exchange of endpoints.
    #[error("illegal swap: {0}")]
    IllegalSwap(String),

    /// A cached aggregate drifted from its from-scratch recomputation.
    ///
    /// Only produced by [`check_consistency`], which exists to make the
    /// incremental-maintenance invariant testable; seeing this outside a
    /// test indicates a bug in the delta rules.
    ///
    /// [`check_consistency`]: crate::engine::graph::Graph::check_consistency
    #[error("numerical error: {0}")]
    Numerical(String),
}

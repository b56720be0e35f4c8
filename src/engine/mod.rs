//! The graph engine and its incremental statistics machinery.
//!
//! This module provides:
//! - **errors**: Error types for mutation and validation failures
//! - **edge**: Canonical unordered edge identity and edge views
//! - **graph**: Core graph structure with the incremental add/remove/swap
//!   mutations and every derived statistic
//! - **build**: Bulk construction from edge lists or adjacency lists, plus
//!   the from-scratch aggregate pass backing `Clone` and the consistency
//!   check

pub mod errors;
pub mod edge;
pub mod graph;
pub mod build;

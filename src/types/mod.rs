//! Core domain types for the PR description check.
//!
//! This module contains the identifiers and the PR snapshot shared by the
//! validation engine, the reconciliation policy and the orchestrator.

pub mod ids;
pub mod pr;

// Re-export commonly used types at the module level
pub use ids::{CommentId, PrNumber, RepoId, ReviewId};
pub use pr::PrSnapshot;

//! Effects-as-data for GitHub operations.
//!
//! This module defines effect types that describe operations without executing them.
//! This enables:
//! - Pure reconciliation logic that returns effects as data
//! - Testability via mock interpreters
//! - Logging/tracing of intended operations

pub mod github;
pub mod interpreter;

pub use github::{
    CommentData, GitHubEffect, GitHubResponse, ReviewData, ReviewEvent, ReviewState,
};
pub use interpreter::GitHubInterpreter;

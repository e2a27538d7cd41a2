//! Effect interpreter trait.
//!
//! This trait defines how effects are executed. The octocrab-backed
//! implementation lives in `crate::github`; tests use a recording mock.

use std::future::Future;

use super::github::{GitHubEffect, GitHubResponse};

/// Interprets GitHub effects against the GitHub API.
///
/// Implementations are constructed with a `RepoId`, so all effects executed
/// through a single interpreter instance are scoped to that repository.
///
/// # Example (mock for testing)
///
/// ```ignore
/// struct CannedGitHub {
///     reviews: Vec<ReviewData>,
/// }
///
/// impl GitHubInterpreter for CannedGitHub {
///     type Error = String;
///
///     async fn interpret(&self, effect: GitHubEffect) -> Result<GitHubResponse, Self::Error> {
///         match effect {
///             GitHubEffect::ListReviews { .. } => Ok(GitHubResponse::Reviews(self.reviews.clone())),
///             other => Err(format!("unexpected effect: {:?}", other)),
///         }
///     }
/// }
/// ```
pub trait GitHubInterpreter {
    /// The error type returned by this interpreter.
    type Error;

    /// Execute a GitHub effect and return its response.
    fn interpret(
        &self,
        effect: GitHubEffect,
    ) -> impl Future<Output = Result<GitHubResponse, Self::Error>> + Send;
}

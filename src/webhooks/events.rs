//! Typed representation of the inbound pull request event.
//!
//! The check runs on `pull_request` and `pull_request_target` workflow
//! triggers; both deliver the same payload shape.

use serde::{Deserialize, Serialize};

use crate::types::{PrSnapshot, RepoId};

/// Action performed on a pull request.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrAction {
    /// PR was opened.
    Opened,
    /// PR was edited (title, body, or base branch changed).
    Edited,
    /// PR head was updated (new commits pushed).
    Synchronize,
    /// PR was reopened.
    Reopened,
    /// PR was marked ready for review.
    ReadyForReview,
    /// Any other action (labeled, assigned, ...). The check still runs.
    Other(String),
}

impl PrAction {
    pub fn parse(action: &str) -> Self {
        match action {
            "opened" => PrAction::Opened,
            "edited" => PrAction::Edited,
            "synchronize" => PrAction::Synchronize,
            "reopened" => PrAction::Reopened,
            "ready_for_review" => PrAction::ReadyForReview,
            other => PrAction::Other(other.to_string()),
        }
    }
}

/// A pull request event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequestEvent {
    /// The repository, when the payload carries it.
    pub repo: Option<RepoId>,

    /// The action that triggered this event, when the payload carries it.
    pub action: Option<PrAction>,

    /// The pull request as delivered.
    pub pr: PrSnapshot,
}

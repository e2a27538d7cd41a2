//! GitHub API effect types.
//!
//! These types describe GitHub API operations as data, without executing them.
//! The interpreter executes these effects against the actual GitHub API.

use serde::{Deserialize, Serialize};

use crate::types::{CommentId, PrNumber, ReviewId};

/// The event submitted with a new review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReviewEvent {
    /// Block the PR until the review is dismissed or superseded.
    RequestChanges,
    /// Leave a review without blocking.
    Comment,
    /// Approve the PR.
    Approve,
}

impl ReviewEvent {
    /// Returns the GitHub API string for this event.
    pub fn as_api_str(&self) -> &'static str {
        match self {
            ReviewEvent::RequestChanges => "REQUEST_CHANGES",
            ReviewEvent::Comment => "COMMENT",
            ReviewEvent::Approve => "APPROVE",
        }
    }
}

/// State of a pull request review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReviewState {
    /// Review approved the PR.
    Approved,
    /// Review requested changes.
    ChangesRequested,
    /// Review was just a comment (no approval/rejection).
    Commented,
    /// Review was dismissed.
    Dismissed,
    /// Review is pending (not submitted yet).
    Pending,
    /// A state this tool does not know about.
    Unknown,
}

impl ReviewState {
    /// Parses GitHub's SCREAMING_SNAKE_CASE review state.
    ///
    /// Returns `None` for unrecognized states; callers decide how to treat them.
    pub fn from_api_str(state: &str) -> Option<Self> {
        match state.to_uppercase().as_str() {
            "APPROVED" => Some(ReviewState::Approved),
            "CHANGES_REQUESTED" => Some(ReviewState::ChangesRequested),
            "COMMENTED" => Some(ReviewState::Commented),
            "DISMISSED" => Some(ReviewState::Dismissed),
            "PENDING" => Some(ReviewState::Pending),
            _ => None,
        }
    }
}

/// A GitHub API effect.
///
/// Each variant describes one platform-client call. Effects are repo-scoped:
/// the interpreter is constructed with a `RepoId`, so effects don't include it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GitHubEffect {
    // ─── Comments ─────────────────────────────────────────────────────────────
    /// List all comments on a PR's conversation tab.
    ListComments { pr: PrNumber },

    /// Post a new comment on a PR.
    PostComment { pr: PrNumber, body: String },

    /// Replace the body of an existing comment.
    UpdateComment {
        pr: PrNumber,
        comment_id: CommentId,
        body: String,
    },

    // ─── Reviews ──────────────────────────────────────────────────────────────
    /// List all reviews on a PR.
    ListReviews { pr: PrNumber },

    /// Submit a new review.
    CreateReview {
        pr: PrNumber,
        body: String,
        event: ReviewEvent,
    },

    /// Replace the body of an existing review. The review state is unchanged.
    UpdateReview {
        pr: PrNumber,
        review_id: ReviewId,
        body: String,
    },

    /// Dismiss a review, recording `message` as the reason.
    DismissReview {
        pr: PrNumber,
        review_id: ReviewId,
        message: String,
    },
}

impl GitHubEffect {
    /// A short name for logs and error messages.
    pub fn name(&self) -> &'static str {
        match self {
            GitHubEffect::ListComments { .. } => "list_comments",
            GitHubEffect::PostComment { .. } => "post_comment",
            GitHubEffect::UpdateComment { .. } => "update_comment",
            GitHubEffect::ListReviews { .. } => "list_reviews",
            GitHubEffect::CreateReview { .. } => "create_review",
            GitHubEffect::UpdateReview { .. } => "update_review",
            GitHubEffect::DismissReview { .. } => "dismiss_review",
        }
    }

    /// Returns true if this effect changes state on GitHub.
    pub fn is_mutation(&self) -> bool {
        !matches!(
            self,
            GitHubEffect::ListComments { .. } | GitHubEffect::ListReviews { .. }
        )
    }
}

// ─── Response Types ───────────────────────────────────────────────────────────

/// Comment data returned from the GitHub API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentData {
    /// The comment ID.
    pub id: CommentId,
    /// The author's login name (e.g. `github-actions[bot]`).
    pub author_login: String,
    /// The comment body.
    pub body: String,
    /// Link to the comment on github.com.
    pub html_url: String,
}

/// Review data returned from the GitHub API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewData {
    /// The review ID.
    pub id: ReviewId,
    /// The reviewer's login name. Empty for deleted ("ghost") accounts.
    pub author_login: String,
    /// The review body (may be empty).
    pub body: String,
    /// The review state.
    pub state: ReviewState,
}

/// Response from a GitHub effect.
///
/// Each variant corresponds to the response from a particular effect type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum GitHubResponse {
    /// Response to `ListComments`.
    Comments(Vec<CommentData>),

    /// Response to `PostComment`.
    CommentPosted {
        /// The ID of the newly created comment.
        id: CommentId,
        html_url: String,
    },

    /// Response to `UpdateComment`.
    CommentUpdated { html_url: String },

    /// Response to `ListReviews`.
    Reviews(Vec<ReviewData>),

    /// Response to `CreateReview`.
    ReviewCreated {
        /// The ID of the newly submitted review.
        id: ReviewId,
    },

    /// Response to `UpdateReview`.
    ReviewUpdated,

    /// Response to `DismissReview`.
    ReviewDismissed,
}

#[cfg(test)]
mod tests {
    use super::*;

    mod review_state {
        use super::*;

        #[test]
        fn parses_github_states() {
            assert_eq!(
                ReviewState::from_api_str("CHANGES_REQUESTED"),
                Some(ReviewState::ChangesRequested)
            );
            assert_eq!(
                ReviewState::from_api_str("approved"),
                Some(ReviewState::Approved)
            );
            assert_eq!(
                ReviewState::from_api_str("DISMISSED"),
                Some(ReviewState::Dismissed)
            );
            assert_eq!(ReviewState::from_api_str("SOMETHING_NEW"), None);
        }
    }

    mod review_event {
        use super::*;

        #[test]
        fn api_str_matches_serde() {
            for event in [
                ReviewEvent::RequestChanges,
                ReviewEvent::Comment,
                ReviewEvent::Approve,
            ] {
                let json = serde_json::to_string(&event).unwrap();
                assert_eq!(json, format!("\"{}\"", event.as_api_str()));
            }
        }
    }

    mod github_effect {
        use super::*;

        #[test]
        fn listing_is_not_a_mutation() {
            assert!(!GitHubEffect::ListComments { pr: PrNumber(1) }.is_mutation());
            assert!(!GitHubEffect::ListReviews { pr: PrNumber(1) }.is_mutation());
            assert!(
                GitHubEffect::DismissReview {
                    pr: PrNumber(1),
                    review_id: ReviewId(2),
                    message: "ok".to_string(),
                }
                .is_mutation()
            );
        }

        #[test]
        fn serializes_with_type_tag() {
            let effect = GitHubEffect::CreateReview {
                pr: PrNumber(3),
                body: "## PR Check".to_string(),
                event: ReviewEvent::RequestChanges,
            };
            let json = serde_json::to_value(&effect).unwrap();
            assert_eq!(json["type"], "create_review");
            assert_eq!(json["event"], "REQUEST_CHANGES");
            assert_eq!(json["pr"], 3);
        }
    }
}

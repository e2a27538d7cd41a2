//! The reconciliation policy: verdict + existing artifacts -> ordered actions.
//!
//! Pure. The orchestrator fetches comments and reviews, calls [`reconcile`],
//! and executes the returned actions in order.

use serde::{Deserialize, Serialize};

use crate::effects::{CommentData, GitHubEffect, ReviewData, ReviewEvent};
use crate::types::{CommentId, PrNumber, ReviewId};
use crate::validation::ValidationVerdict;

use super::artifact::ArtifactTag;

/// Reason recorded on reviews this tool dismisses.
pub const DISMISS_MESSAGE: &str = "All actions resolved, you're good to go ✅";

/// A side effect on the PR's comments or reviews.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    CreateComment { body: String },
    UpdateComment { comment_id: CommentId, body: String },
    /// Always submitted with request-changes semantics.
    CreateReview { body: String },
    UpdateReview { review_id: ReviewId, body: String },
    DismissReview { review_id: ReviewId, message: String },
}

impl Action {
    /// Returns true for actions that leave the PR blocked.
    pub fn requests_changes(&self) -> bool {
        matches!(
            self,
            Action::CreateReview { .. } | Action::UpdateReview { .. }
        )
    }

    /// Binds the action to a PR, producing the effect to execute.
    pub fn into_effect(self, pr: PrNumber) -> GitHubEffect {
        match self {
            Action::CreateComment { body } => GitHubEffect::PostComment { pr, body },
            Action::UpdateComment { comment_id, body } => GitHubEffect::UpdateComment {
                pr,
                comment_id,
                body,
            },
            Action::CreateReview { body } => GitHubEffect::CreateReview {
                pr,
                body,
                event: ReviewEvent::RequestChanges,
            },
            Action::UpdateReview { review_id, body } => GitHubEffect::UpdateReview {
                pr,
                review_id,
                body,
            },
            Action::DismissReview { review_id, message } => GitHubEffect::DismissReview {
                pr,
                review_id,
                message,
            },
        }
    }
}

/// Decides which comment/review actions bring the PR in line with `verdict`.
///
/// Complete verdicts produce one create-or-update comment followed by a
/// dismissal of every review by the automation identity that is requesting
/// changes. Incomplete verdicts produce exactly one create-or-update
/// request-changes review. The two branches never mix, so a complete verdict
/// never yields a request-changes action.
pub fn reconcile(
    verdict: &ValidationVerdict,
    tag: &ArtifactTag,
    comments: &[CommentData],
    reviews: &[ReviewData],
) -> Vec<Action> {
    let body = tag.wrap(&verdict.message);

    if verdict.is_complete {
        let comment = match tag.find_comment(comments) {
            Some(existing) => Action::UpdateComment {
                comment_id: existing.id,
                body,
            },
            None => Action::CreateComment { body },
        };

        std::iter::once(comment)
            .chain(
                tag.changes_requested_by_bot(reviews)
                    .map(|r| Action::DismissReview {
                        review_id: r.id,
                        message: DISMISS_MESSAGE.to_string(),
                    }),
            )
            .collect()
    } else {
        let review = match tag.find_blocking_review(reviews) {
            Some(existing) => Action::UpdateReview {
                review_id: existing.id,
                body,
            },
            None => Action::CreateReview { body },
        };
        vec![review]
    }
}

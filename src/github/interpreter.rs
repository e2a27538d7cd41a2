//! GitHub effect interpreter using octocrab.
//!
//! This module implements the `GitHubInterpreter` trait, executing GitHub effects
//! against the real GitHub API via octocrab's raw REST helpers. Responses are
//! deserialized into minimal local structs so that only the fields this tool
//! reads have to be present.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::effects::{
    CommentData, GitHubEffect, GitHubInterpreter, GitHubResponse, ReviewData, ReviewEvent,
    ReviewState,
};
use crate::types::{CommentId, PrNumber, ReviewId};

use super::client::OctocrabClient;
use super::error::GitHubApiError;

/// GitHub's maximum page size for list endpoints.
const PAGE_SIZE: usize = 100;

// ─── Raw API Types ────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct PageParams {
    per_page: usize,
    page: u32,
}

#[derive(Debug, Deserialize)]
struct RawUser {
    login: String,
}

#[derive(Debug, Deserialize)]
struct RawComment {
    id: u64,
    /// `null` for comments by deleted accounts.
    user: Option<RawUser>,
    body: Option<String>,
    html_url: String,
}

#[derive(Debug, Deserialize)]
struct RawReview {
    id: u64,
    user: Option<RawUser>,
    body: Option<String>,
    state: String,
}

fn login_of(user: Option<RawUser>) -> String {
    user.map(|u| u.login).unwrap_or_default()
}

impl From<RawComment> for CommentData {
    fn from(raw: RawComment) -> Self {
        CommentData {
            id: CommentId(raw.id),
            author_login: login_of(raw.user),
            body: raw.body.unwrap_or_default(),
            html_url: raw.html_url,
        }
    }
}

/// Converts a raw review, mapping unrecognized states to `Unknown`.
fn review_data(raw: RawReview) -> ReviewData {
    let state = ReviewState::from_api_str(&raw.state).unwrap_or_else(|| {
        warn!(review = raw.id, state = %raw.state, "Unknown review state, treating as Unknown");
        ReviewState::Unknown
    });
    ReviewData {
        id: ReviewId(raw.id),
        author_login: login_of(raw.user),
        body: raw.body.unwrap_or_default(),
        state,
    }
}

// ─── Interpreter Implementation ───────────────────────────────────────────────

impl GitHubInterpreter for OctocrabClient {
    type Error = GitHubApiError;

    async fn interpret(&self, effect: GitHubEffect) -> Result<GitHubResponse, Self::Error> {
        interpret_github_effect(self, effect).await
    }
}

/// Executes a GitHub effect against the GitHub API.
///
/// Failures are returned as-is; a permission failure on a mutation gets a hint
/// about the workflow token appended to its message.
pub async fn interpret_github_effect(
    client: &OctocrabClient,
    effect: GitHubEffect,
) -> Result<GitHubResponse, GitHubApiError> {
    debug!(effect = effect.name(), repo = %client.repo(), "Executing GitHub effect");
    let is_mutation = effect.is_mutation();

    execute_effect(client, effect).await.map_err(|mut e| {
        if is_mutation && e.is_permission_error() {
            e.message.push_str(
                " (the workflow token needs `pull-requests: write` and `issues: write` permissions)",
            );
        }
        e
    })
}

async fn execute_effect(
    client: &OctocrabClient,
    effect: GitHubEffect,
) -> Result<GitHubResponse, GitHubApiError> {
    match effect {
        GitHubEffect::ListComments { pr } => list_comments(client, pr).await,
        GitHubEffect::PostComment { pr, body } => post_comment(client, pr, body).await,
        GitHubEffect::UpdateComment {
            comment_id, body, ..
        } => update_comment(client, comment_id, body).await,
        GitHubEffect::ListReviews { pr } => list_reviews(client, pr).await,
        GitHubEffect::CreateReview { pr, body, event } => {
            create_review(client, pr, body, event).await
        }
        GitHubEffect::UpdateReview {
            pr,
            review_id,
            body,
        } => update_review(client, pr, review_id, body).await,
        GitHubEffect::DismissReview {
            pr,
            review_id,
            message,
        } => dismiss_review(client, pr, review_id, message).await,
    }
}

/// Fetches every page of a list endpoint, stopping at the first short page.
async fn list_all<T>(client: &OctocrabClient, route: &str) -> Result<Vec<T>, GitHubApiError>
where
    T: serde::de::DeserializeOwned,
{
    let mut page = 1u32;
    let mut all = Vec::new();

    loop {
        let params = PageParams {
            per_page: PAGE_SIZE,
            page,
        };
        let items: Vec<T> = client
            .inner()
            .get(route, Some(&params))
            .await
            .map_err(GitHubApiError::from_octocrab)?;

        let is_last_page = items.len() < PAGE_SIZE;
        all.extend(items);

        if is_last_page {
            return Ok(all);
        }
        page += 1;
    }
}

// ─── Comments ─────────────────────────────────────────────────────────────────

#[derive(Serialize)]
struct CommentRequest {
    body: String,
}

async fn list_comments(
    client: &OctocrabClient,
    pr: PrNumber,
) -> Result<GitHubResponse, GitHubApiError> {
    let raw: Vec<RawComment> = list_all(client, &client.issue_comments_route(pr)).await?;
    Ok(GitHubResponse::Comments(
        raw.into_iter().map(CommentData::from).collect(),
    ))
}

async fn post_comment(
    client: &OctocrabClient,
    pr: PrNumber,
    body: String,
) -> Result<GitHubResponse, GitHubApiError> {
    let result: Result<RawComment, _> = client
        .inner()
        .post(client.issue_comments_route(pr), Some(&CommentRequest { body }))
        .await;

    match result {
        Ok(comment) => Ok(GitHubResponse::CommentPosted {
            id: CommentId(comment.id),
            html_url: comment.html_url,
        }),
        Err(e) => Err(GitHubApiError::from_octocrab(e)),
    }
}

async fn update_comment(
    client: &OctocrabClient,
    comment_id: CommentId,
    body: String,
) -> Result<GitHubResponse, GitHubApiError> {
    let result: Result<RawComment, _> = client
        .inner()
        .patch(client.comment_route(comment_id), Some(&CommentRequest { body }))
        .await;

    match result {
        Ok(comment) => Ok(GitHubResponse::CommentUpdated {
            html_url: comment.html_url,
        }),
        Err(e) => Err(GitHubApiError::from_octocrab(e)),
    }
}

// ─── Reviews ──────────────────────────────────────────────────────────────────

async fn list_reviews(
    client: &OctocrabClient,
    pr: PrNumber,
) -> Result<GitHubResponse, GitHubApiError> {
    let raw: Vec<RawReview> = list_all(client, &client.reviews_route(pr)).await?;
    Ok(GitHubResponse::Reviews(
        raw.into_iter().map(review_data).collect(),
    ))
}

async fn create_review(
    client: &OctocrabClient,
    pr: PrNumber,
    body: String,
    event: ReviewEvent,
) -> Result<GitHubResponse, GitHubApiError> {
    #[derive(Serialize)]
    struct CreateReviewRequest {
        body: String,
        event: &'static str,
    }

    let result: Result<RawReview, _> = client
        .inner()
        .post(
            client.reviews_route(pr),
            Some(&CreateReviewRequest {
                body,
                event: event.as_api_str(),
            }),
        )
        .await;

    match result {
        Ok(review) => Ok(GitHubResponse::ReviewCreated {
            id: ReviewId(review.id),
        }),
        Err(e) => Err(GitHubApiError::from_octocrab(e)),
    }
}

async fn update_review(
    client: &OctocrabClient,
    pr: PrNumber,
    review_id: ReviewId,
    body: String,
) -> Result<GitHubResponse, GitHubApiError> {
    let result: Result<serde_json::Value, _> = client
        .inner()
        .put(
            client.review_route(pr, review_id),
            Some(&CommentRequest { body }),
        )
        .await;

    match result {
        Ok(_) => Ok(GitHubResponse::ReviewUpdated),
        Err(e) => Err(GitHubApiError::from_octocrab(e)),
    }
}

async fn dismiss_review(
    client: &OctocrabClient,
    pr: PrNumber,
    review_id: ReviewId,
    message: String,
) -> Result<GitHubResponse, GitHubApiError> {
    #[derive(Serialize)]
    struct DismissRequest {
        message: String,
        event: &'static str,
    }

    let url = format!("{}/dismissals", client.review_route(pr, review_id));
    let result: Result<serde_json::Value, _> = client
        .inner()
        .put(
            url,
            Some(&DismissRequest {
                message,
                event: "DISMISS",
            }),
        )
        .await;

    match result {
        Ok(_) => Ok(GitHubResponse::ReviewDismissed),
        Err(e) => Err(GitHubApiError::from_octocrab(e)),
    }
}

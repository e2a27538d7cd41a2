//! Octocrab client wrapper scoped to a specific repository.
//!
//! Effects don't carry repository coordinates, so the client owns them and
//! builds every REST route from them.

use octocrab::Octocrab;

use crate::types::{CommentId, PrNumber, RepoId, ReviewId};

/// A GitHub API client scoped to a specific repository.
#[derive(Clone)]
pub struct OctocrabClient {
    client: Octocrab,
    repo: RepoId,
}

impl OctocrabClient {
    pub fn new(client: Octocrab, repo: RepoId) -> Self {
        Self { client, repo }
    }

    /// Creates a client authenticated with the workflow's `repo-token`.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn from_token(token: impl Into<String>, repo: RepoId) -> Result<Self, octocrab::Error> {
        let client = Octocrab::builder().personal_token(token.into()).build()?;
        Ok(Self::new(client, repo))
    }

    pub fn inner(&self) -> &Octocrab {
        &self.client
    }

    pub fn repo(&self) -> &RepoId {
        &self.repo
    }

    /// `/repos/{owner}/{repo}/issues/{pr}/comments`
    pub fn issue_comments_route(&self, pr: PrNumber) -> String {
        format!(
            "/repos/{}/{}/issues/{}/comments",
            self.repo.owner, self.repo.repo, pr.0
        )
    }

    /// `/repos/{owner}/{repo}/issues/comments/{id}`
    pub fn comment_route(&self, comment_id: CommentId) -> String {
        format!(
            "/repos/{}/{}/issues/comments/{}",
            self.repo.owner, self.repo.repo, comment_id.0
        )
    }

    /// `/repos/{owner}/{repo}/pulls/{pr}/reviews`
    pub fn reviews_route(&self, pr: PrNumber) -> String {
        format!(
            "/repos/{}/{}/pulls/{}/reviews",
            self.repo.owner, self.repo.repo, pr.0
        )
    }

    /// `/repos/{owner}/{repo}/pulls/{pr}/reviews/{id}`
    pub fn review_route(&self, pr: PrNumber, review_id: ReviewId) -> String {
        format!("{}/{}", self.reviews_route(pr), review_id.0)
    }
}

impl std::fmt::Debug for OctocrabClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OctocrabClient")
            .field("repo", &self.repo)
            .finish_non_exhaustive()
    }
}

//! Shared test utilities: fixture builders, arbitrary generators and a
//! recording mock interpreter.

use std::sync::Mutex;

use proptest::prelude::*;

use crate::effects::{
    CommentData, GitHubEffect, GitHubInterpreter, GitHubResponse, ReviewData, ReviewState,
};
use crate::types::{CommentId, ReviewId};
use crate::validation::ValidationVerdict;

pub fn comment(id: u64, author: &str, body: &str) -> CommentData {
    CommentData {
        id: CommentId(id),
        author_login: author.to_string(),
        body: body.to_string(),
        html_url: format!("https://github.com/o/r/pull/1#issuecomment-{}", id),
    }
}

pub fn review(id: u64, author: &str, body: &str, state: ReviewState) -> ReviewData {
    ReviewData {
        id: ReviewId(id),
        author_login: author.to_string(),
        body: body.to_string(),
        state,
    }
}

pub fn arb_verdict() -> impl Strategy<Value = ValidationVerdict> {
    prop_oneof![
        Just(ValidationVerdict::complete()),
        "[a-z-]{1,20}".prop_map(|login| ValidationVerdict::skipped(&login)),
        Just(ValidationVerdict::empty_body()),
        (1usize..5).prop_map(|n| ValidationVerdict::placeholders_remaining([("<X>", n)])),
        Just(ValidationVerdict::sign_off_incomplete(&[
            "- [x] **Author(s):**".to_string()
        ])),
    ]
}

/// A GitHub interpreter backed by canned comments and reviews.
///
/// Every effect is recorded. Effects return plausible responses unless the
/// mock was told to fail or to answer an effect differently.
#[derive(Debug, Default)]
pub struct MockGitHub {
    comments: Vec<CommentData>,
    reviews: Vec<ReviewData>,
    fail_on: Option<&'static str>,
    answer: Option<(&'static str, GitHubResponse)>,
    log: Mutex<Vec<GitHubEffect>>,
}

impl MockGitHub {
    pub fn new(comments: Vec<CommentData>, reviews: Vec<ReviewData>) -> Self {
        MockGitHub {
            comments,
            reviews,
            ..Default::default()
        }
    }

    pub fn failing_on(mut self, effect_name: &'static str) -> Self {
        self.fail_on = Some(effect_name);
        self
    }

    /// Answers the effect named `effect_name` with `response`.
    pub fn answering(mut self, effect_name: &'static str, response: GitHubResponse) -> Self {
        self.answer = Some((effect_name, response));
        self
    }

    /// All effects interpreted so far, in order.
    pub fn effects(&self) -> Vec<GitHubEffect> {
        self.log.lock().unwrap().clone()
    }

    /// The mutating effects interpreted so far, in order.
    pub fn mutations(&self) -> Vec<GitHubEffect> {
        self.effects()
            .into_iter()
            .filter(GitHubEffect::is_mutation)
            .collect()
    }

    fn respond(&self, effect: &GitHubEffect) -> Result<GitHubResponse, String> {
        if self.fail_on == Some(effect.name()) {
            return Err(format!("HTTP 502 Bad Gateway on {}", effect.name()));
        }
        if let Some((name, response)) = &self.answer
            && *name == effect.name()
        {
            return Ok(response.clone());
        }
        let response = match effect {
            GitHubEffect::ListComments { .. } => GitHubResponse::Comments(self.comments.clone()),
            GitHubEffect::ListReviews { .. } => GitHubResponse::Reviews(self.reviews.clone()),
            GitHubEffect::PostComment { pr, .. } => GitHubResponse::CommentPosted {
                id: CommentId(1000),
                html_url: format!("https://github.com/o/r/pull/{}#issuecomment-1000", pr.0),
            },
            GitHubEffect::UpdateComment { pr, comment_id, .. } => GitHubResponse::CommentUpdated {
                html_url: format!(
                    "https://github.com/o/r/pull/{}#issuecomment-{}",
                    pr.0, comment_id.0
                ),
            },
            GitHubEffect::CreateReview { .. } => GitHubResponse::ReviewCreated {
                id: ReviewId(2000),
            },
            GitHubEffect::UpdateReview { .. } => GitHubResponse::ReviewUpdated,
            GitHubEffect::DismissReview { .. } => GitHubResponse::ReviewDismissed,
        };
        Ok(response)
    }
}

impl GitHubInterpreter for MockGitHub {
    type Error = String;

    fn interpret(
        &self,
        effect: GitHubEffect,
    ) -> impl std::future::Future<Output = Result<GitHubResponse, Self::Error>> + Send {
        let result = self.respond(&effect);
        self.log.lock().unwrap().push(effect);
        async move { result }
    }
}

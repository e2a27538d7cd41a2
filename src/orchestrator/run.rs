//! One check run: validate the description, reconcile, execute.
//!
//! ```text
//! START ──(no PR)──────────────────────────────► FAILED
//!   │
//!   ├─(author whitelisted)─► WHITELISTED ─┐
//!   │                                     ├─► RECONCILING ─► SUCCESS | FAILED
//!   └─────────────────────► VALIDATING ───┘
//! ```

use std::fmt;

use regex::Regex;
use thiserror::Error;
use tracing::{debug, info, instrument, warn};

use crate::config::Config;
use crate::effects::{GitHubEffect, GitHubInterpreter, GitHubResponse};
use crate::reconcile::{Action, ArtifactTag, reconcile};
use crate::types::{PrNumber, PrSnapshot};
use crate::validation::{ValidationVerdict, Validator};

use super::report::RunOutcome;

/// The states a run moves through. Used for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunPhase {
    Start,
    Whitelisted,
    Validating,
    Reconciling,
    Success,
    Failed,
}

impl fmt::Display for RunPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RunPhase::Start => "start",
            RunPhase::Whitelisted => "whitelisted",
            RunPhase::Validating => "validating",
            RunPhase::Reconciling => "reconciling",
            RunPhase::Success => "success",
            RunPhase::Failed => "failed",
        };
        f.write_str(name)
    }
}

/// Errors that end a run before its actions all succeed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RunError {
    /// The triggering event carried no pull request.
    #[error(
        "the event payload has no pull_request. Have the correct event triggers been configured?"
    )]
    MissingPullRequest,

    /// A GitHub call failed. Earlier actions in the run are not rolled back.
    #[error("{effect} failed: {message}")]
    Transport {
        effect: &'static str,
        message: String,
    },

    /// A GitHub call returned a response of the wrong kind.
    #[error("unexpected response to {effect}: {response}")]
    UnexpectedResponse {
        effect: &'static str,
        response: String,
    },
}

impl RunError {
    fn unexpected(effect: &'static str, response: &GitHubResponse) -> Self {
        RunError::UnexpectedResponse {
            effect,
            response: serde_json::to_string(response).unwrap_or_else(|_| format!("{response:?}")),
        }
    }
}

/// What a run checks and how it recognizes its own artifacts.
#[derive(Debug, Clone, Default)]
pub struct CheckSettings {
    pub validator: Validator,
    pub tag: ArtifactTag,
    /// Authors matching this pattern skip validation.
    pub whitelist: Option<Regex>,
}

impl CheckSettings {
    pub fn from_config(config: &Config) -> Self {
        CheckSettings {
            validator: config.validator.clone(),
            tag: config.tag.clone(),
            whitelist: config.whitelist.clone(),
        }
    }

    pub fn is_whitelisted(&self, author_login: &str) -> bool {
        self.whitelist
            .as_ref()
            .is_some_and(|pattern| pattern.is_match(author_login))
    }

    /// Produces the verdict for `pr`, short-circuiting whitelisted authors.
    pub fn verdict_for(&self, pr: &PrSnapshot) -> ValidationVerdict {
        if self.is_whitelisted(&pr.author_login) {
            info!(phase = %RunPhase::Whitelisted, author = %pr.author_login, "Author is whitelisted, skipping validation");
            return ValidationVerdict::skipped(&pr.author_login);
        }
        info!(phase = %RunPhase::Validating, "Validating PR description");
        self.validator.validate(pr.non_empty_body())
    }
}

/// Runs the check for one pull request.
///
/// `pr` is `None` when the event had no pull request; the run then fails
/// without calling GitHub. Otherwise the verdict is reconciled against the
/// PR's existing comments and reviews and the resulting actions are executed
/// in order, stopping at the first failure.
#[instrument(skip_all, fields(pr = ?pr.map(|p| p.number)))]
pub async fn run<G>(github: &G, settings: &CheckSettings, pr: Option<&PrSnapshot>) -> RunOutcome
where
    G: GitHubInterpreter,
    G::Error: fmt::Display,
{
    info!(phase = %RunPhase::Start, "Starting PR description check");

    let Some(pr) = pr else {
        warn!(phase = %RunPhase::Failed, "No pull request in event");
        return RunOutcome::error(None, None, RunError::MissingPullRequest);
    };
    debug!(author = %pr.author_login, body = ?pr.body, "PR snapshot");

    let verdict = settings.verdict_for(pr);
    info!(
        kind = ?verdict.kind,
        complete = verdict.is_complete,
        "Verdict reached"
    );

    match apply_verdict(github, &settings.tag, pr.number, &verdict).await {
        Ok(comment_url) => {
            let outcome = RunOutcome::from_verdict(verdict, comment_url);
            info!(phase = %outcome.phase(), "Run finished");
            outcome
        }
        Err(Aborted { error, comment_url }) => {
            warn!(phase = %RunPhase::Failed, error = %error, "Run aborted");
            RunOutcome::error(Some(verdict), comment_url, error)
        }
    }
}

/// A run that stopped part way. Actions already executed stand, so the URL
/// of a comment written before the failure is still reported.
struct Aborted {
    error: RunError,
    comment_url: Option<String>,
}

impl From<RunError> for Aborted {
    fn from(error: RunError) -> Self {
        Aborted {
            error,
            comment_url: None,
        }
    }
}

/// Reconciles `verdict` with the PR and executes the actions.
///
/// Returns the URL of the recognized comment when one was written.
async fn apply_verdict<G>(
    github: &G,
    tag: &ArtifactTag,
    pr: PrNumber,
    verdict: &ValidationVerdict,
) -> Result<Option<String>, Aborted>
where
    G: GitHubInterpreter,
    G::Error: fmt::Display,
{
    info!(phase = %RunPhase::Reconciling, "Fetching existing comments and reviews");

    let comments = match execute(github, GitHubEffect::ListComments { pr }).await? {
        GitHubResponse::Comments(comments) => comments,
        other => return Err(RunError::unexpected("list_comments", &other).into()),
    };
    let reviews = match execute(github, GitHubEffect::ListReviews { pr }).await? {
        GitHubResponse::Reviews(reviews) => reviews,
        other => return Err(RunError::unexpected("list_reviews", &other).into()),
    };

    let actions = reconcile(verdict, tag, &comments, &reviews);
    debug!(count = actions.len(), "Reconciled actions");

    let mut comment_url = None;
    for action in actions {
        match execute_action(github, pr, action).await {
            Ok(url) => comment_url = url.or(comment_url),
            Err(error) => return Err(Aborted { error, comment_url }),
        }
    }
    Ok(comment_url)
}

/// Executes one action, returning the comment URL if the action wrote one.
async fn execute_action<G>(
    github: &G,
    pr: PrNumber,
    action: Action,
) -> Result<Option<String>, RunError>
where
    G: GitHubInterpreter,
    G::Error: fmt::Display,
{
    let effect = action.clone().into_effect(pr);
    let name = effect.name();
    info!(effect = name, "Executing action");

    match (action, execute(github, effect).await?) {
        (Action::CreateComment { .. }, GitHubResponse::CommentPosted { html_url, .. })
        | (Action::UpdateComment { .. }, GitHubResponse::CommentUpdated { html_url }) => {
            debug!(url = %html_url, "Comment written");
            Ok(Some(html_url))
        }
        (Action::CreateReview { .. }, GitHubResponse::ReviewCreated { id }) => {
            debug!(review = %id, "Review created");
            Ok(None)
        }
        (Action::UpdateReview { .. }, GitHubResponse::ReviewUpdated)
        | (Action::DismissReview { .. }, GitHubResponse::ReviewDismissed) => Ok(None),
        (_, other) => Err(RunError::unexpected(name, &other)),
    }
}

async fn execute<G>(github: &G, effect: GitHubEffect) -> Result<GitHubResponse, RunError>
where
    G: GitHubInterpreter,
    G::Error: fmt::Display,
{
    let name = effect.name();
    github
        .interpret(effect)
        .await
        .map_err(|e| RunError::Transport {
            effect: name,
            message: e.to_string(),
        })
}

//! Event payload parser.
//!
//! This module parses the raw event JSON a workflow run is started with (the
//! file at `GITHUB_EVENT_PATH`) into a typed [`PullRequestEvent`].
//!
//! # Parsing Strategy
//!
//! 1. A payload without a `pull_request` object returns `Ok(None)`: the
//!    workflow was triggered by some other event
//! 2. A `pull_request` object missing required fields returns `Err`
//! 3. Unknown fields are ignored

use serde::Deserialize;
use thiserror::Error;

use crate::types::{PrNumber, PrSnapshot, RepoId};

use super::events::{PrAction, PullRequestEvent};

/// Error type for event payload parsing failures.
#[derive(Debug, Error)]
pub enum ParseError {
    /// JSON deserialization failed (includes missing required fields).
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Field has invalid value.
    #[error("invalid field value for {field}: {value}")]
    InvalidField { field: &'static str, value: String },
}

/// Parses an event payload.
///
/// # Returns
///
/// * `Ok(Some(event))` - The payload carries a pull request
/// * `Ok(None)` - The payload has no `pull_request` object
/// * `Err(e)` - Malformed payload or missing required fields
///
/// # Examples
///
/// ```
/// use pr_body_check::webhooks::parse_event;
///
/// let payload = br#"{
///     "action": "opened",
///     "pull_request": {
///         "number": 42,
///         "body": "{{!!DETAILS GO HERE!!}}",
///         "user": { "login": "octocat" }
///     },
///     "repository": {
///         "owner": { "login": "owner" },
///         "name": "repo"
///     }
/// }"#;
///
/// let event = parse_event(payload).unwrap().unwrap();
/// assert_eq!(event.pr.author_login, "octocat");
/// ```
pub fn parse_event(payload: &[u8]) -> Result<Option<PullRequestEvent>, ParseError> {
    let raw: RawEventPayload = serde_json::from_slice(payload)?;

    let Some(pull_request) = raw.pull_request else {
        return Ok(None);
    };

    if pull_request.number == 0 {
        return Err(ParseError::InvalidField {
            field: "pull_request.number",
            value: "0".to_string(),
        });
    }

    Ok(Some(PullRequestEvent {
        repo: raw
            .repository
            .map(|r| RepoId::new(r.owner.login, r.name)),
        action: raw.action.as_deref().map(PrAction::parse),
        pr: PrSnapshot::new(
            PrNumber(pull_request.number),
            pull_request.user.login,
            pull_request.body,
        ),
    }))
}

// ============================================================================
// Raw payload structures for deserialization
//
// These match GitHub's webhook JSON structure. Only `pull_request` is needed;
// `repository` is optional because `GITHUB_REPOSITORY` also provides it.
// ============================================================================

#[derive(Debug, Deserialize)]
struct RawEventPayload {
    action: Option<String>,
    pull_request: Option<RawPullRequest>,
    repository: Option<RawRepository>,
}

#[derive(Debug, Deserialize)]
struct RawRepository {
    owner: RawOwner,
    name: String,
}

#[derive(Debug, Deserialize)]
struct RawOwner {
    login: String,
}

#[derive(Debug, Deserialize)]
struct RawUser {
    login: String,
}

#[derive(Debug, Deserialize)]
struct RawPullRequest {
    number: u64,
    body: Option<String>,
    user: RawUser,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_pull_request_opened() {
        let payload = r#"{
            "action": "opened",
            "number": 123,
            "pull_request": {
                "number": 123,
                "body": "- [x] **Author(s):**",
                "head": { "sha": "1234567890abcdef1234567890abcdef12345678", "ref": "feature" },
                "user": { "id": 42, "login": "dev" }
            },
            "repository": {
                "owner": { "login": "org" },
                "name": "repo"
            }
        }"#;

        let event = parse_event(payload.as_bytes()).unwrap().expect("should parse");

        assert_eq!(event.repo, Some(RepoId::new("org", "repo")));
        assert_eq!(event.action, Some(PrAction::Opened));
        assert_eq!(event.pr.number, PrNumber(123));
        assert_eq!(event.pr.author_login, "dev");
        assert_eq!(event.pr.body.as_deref(), Some("- [x] **Author(s):**"));
    }

    #[test]
    fn null_body_is_preserved_as_none() {
        let payload = r#"{
            "action": "edited",
            "pull_request": { "number": 5, "body": null, "user": { "login": "dev" } }
        }"#;

        let event = parse_event(payload.as_bytes()).unwrap().expect("should parse");
        assert_eq!(event.pr.body, None);
        assert_eq!(event.repo, None);
        assert_eq!(event.action, Some(PrAction::Edited));
    }

    #[test]
    fn unknown_action_is_kept() {
        let payload = r#"{
            "action": "labeled",
            "pull_request": { "number": 5, "user": { "login": "dev" } }
        }"#;

        let event = parse_event(payload.as_bytes()).unwrap().expect("should parse");
        assert_eq!(event.action, Some(PrAction::Other("labeled".to_string())));
        assert_eq!(event.pr.body, None);
    }

    #[test]
    fn payload_without_pull_request_is_none() {
        let payload = r#"{
            "ref": "refs/heads/main",
            "repository": { "owner": { "login": "org" }, "name": "repo" }
        }"#;

        assert!(parse_event(payload.as_bytes()).unwrap().is_none());
    }

    #[test]
    fn pull_request_missing_user_is_error() {
        let payload = r#"{ "pull_request": { "number": 5, "body": "x" } }"#;

        let err = parse_event(payload.as_bytes()).unwrap_err();
        assert!(matches!(err, ParseError::JsonError(_)));
    }

    #[test]
    fn zero_pr_number_is_invalid() {
        let payload = r#"{ "pull_request": { "number": 0, "user": { "login": "dev" } } }"#;

        let err = parse_event(payload.as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            ParseError::InvalidField {
                field: "pull_request.number",
                ..
            }
        ));
    }

    #[test]
    fn malformed_json_is_error() {
        assert!(parse_event(b"{not json").is_err());
    }
}

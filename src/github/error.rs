//! GitHub API error type.
//!
//! Every platform-client failure (network, authentication, rate limiting,
//! validation) surfaces as a [`GitHubApiError`]. Nothing here is retried: the
//! error is carried to the run's terminal status with its description.

use std::fmt;
use thiserror::Error;

/// A failed GitHub API call.
#[derive(Debug, Error)]
pub struct GitHubApiError {
    /// The HTTP status code, if available.
    pub status_code: Option<u16>,

    /// A human-readable description of the error.
    pub message: String,

    /// The underlying octocrab error, if available.
    #[source]
    pub source: Option<octocrab::Error>,
}

impl fmt::Display for GitHubApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status_code {
            Some(code) => write!(f, "GitHub API error (HTTP {}): {}", code, self.message),
            None => write!(f, "GitHub API error: {}", self.message),
        }
    }
}

impl GitHubApiError {
    /// Wraps an octocrab error.
    pub fn from_octocrab(err: octocrab::Error) -> Self {
        let message = match &err {
            octocrab::Error::GitHub { source, .. } => source.message.clone(),
            other => other.to_string(),
        };
        let status_code = Self::extract_status_code(&err);
        Self {
            status_code,
            message,
            source: Some(err),
        }
    }

    /// Returns true if GitHub rejected the token or its permissions.
    ///
    /// Workflows triggered from forks get a read-only token; surfacing this
    /// distinctly makes the terminal message actionable.
    pub fn is_permission_error(&self) -> bool {
        matches!(self.status_code, Some(401) | Some(403))
            && !self.message.to_lowercase().contains("rate limit")
    }

    /// Extracts the HTTP status code from an octocrab error, if present.
    ///
    /// GitHub-side errors carry the status directly. Other variants only
    /// mention it in their message, so those are matched by pattern, falling
    /// back to `None`.
    fn extract_status_code(err: &octocrab::Error) -> Option<u16> {
        if let octocrab::Error::GitHub { source, .. } = err {
            return Some(source.status_code.as_u16());
        }

        status_code_from_message(&err.to_string())
    }
}

/// Finds an HTTP status code mentioned in an error message.
fn status_code_from_message(err_str: &str) -> Option<u16> {
    if let Some(idx) = err_str.find("status: ") {
        let rest = &err_str[idx + 8..];
        let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
        if let Ok(code) = digits.parse() {
            return Some(code);
        }
    }

    err_str
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter_map(|word| word.parse::<u16>().ok())
        .find(|code| KNOWN_STATUS_CODES.contains(code))
}

/// Status codes recognized when they appear as a word of their own.
const KNOWN_STATUS_CODES: [u16; 8] = [401, 403, 404, 422, 429, 500, 502, 503];

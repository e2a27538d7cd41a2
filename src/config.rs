//! Action inputs and runner environment.
//!
//! GitHub Actions passes inputs as `INPUT_<NAME>` environment variables and
//! describes the run through `GITHUB_*` / `RUNNER_*` variables. Parsing is
//! done against a lookup function so tests never touch the process
//! environment.
//!
//! | Variable | Meaning |
//! |----------|---------|
//! | `INPUT_REPO-TOKEN` | Token for the GitHub API (required) |
//! | `INPUT_WHITELISTED-AUTHORS-PATTERN` | Regex; matching authors skip validation |
//! | `INPUT_PLACEHOLDERS` | Newline-separated placeholder markers |
//! | `INPUT_SIGN-OFF-LINES` | Newline-separated required sign-off lines |
//! | `INPUT_BOT-LOGIN` | Login the tool's comments and reviews appear under |
//! | `INPUT_COMMENT-PREFIX` | First line of every comment and review the tool writes |
//! | `GITHUB_EVENT_PATH` | Event payload file (required) |
//! | `GITHUB_REPOSITORY` | `owner/name`, used when the payload has no repository |
//! | `GITHUB_OUTPUT` | File receiving step outputs |
//! | `RUNNER_DEBUG` | `1` enables debug logging |

use std::path::PathBuf;

use regex::Regex;
use thiserror::Error;

use crate::reconcile::ArtifactTag;
use crate::types::RepoId;
use crate::validation::{EmptyRuleSet, PlaceholderRule, SignOffRule, Validator};

/// Errors raised while reading the run configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("input required and not supplied: {0}")]
    MissingInput(&'static str),

    #[error("environment variable {0} is not set")]
    MissingEnv(&'static str),

    #[error("invalid whitelisted-authors-pattern {pattern:?}: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("input {input} must contain at least one non-blank line")]
    EmptyList {
        input: &'static str,
        #[source]
        source: EmptyRuleSet,
    },

    #[error("GITHUB_REPOSITORY must be owner/name, got {0:?}")]
    InvalidRepository(String),
}

/// Everything a run needs, read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub token: String,
    /// From `GITHUB_REPOSITORY`; the event payload takes precedence.
    pub repo: Option<RepoId>,
    pub event_path: PathBuf,
    pub output_path: Option<PathBuf>,
    pub debug: bool,
    pub whitelist: Option<Regex>,
    pub validator: Validator,
    pub tag: ArtifactTag,
}

impl Config {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads the configuration through `lookup`, which maps a variable name to
    /// its value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let input = |name: &str| {
            lookup(&input_var(name))
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let token = input("repo-token").ok_or(ConfigError::MissingInput("repo-token"))?;

        let whitelist = input("whitelisted-authors-pattern")
            .map(|pattern| {
                Regex::new(&pattern).map_err(|source| ConfigError::InvalidPattern { pattern, source })
            })
            .transpose()?;

        let placeholders = match input("placeholders") {
            Some(raw) => PlaceholderRule::new(lines(&raw)).map_err(|source| {
                ConfigError::EmptyList {
                    input: "placeholders",
                    source,
                }
            })?,
            None => PlaceholderRule::default(),
        };

        let sign_off = match input("sign-off-lines") {
            Some(raw) => {
                SignOffRule::new(lines(&raw)).map_err(|source| ConfigError::EmptyList {
                    input: "sign-off-lines",
                    source,
                })?
            }
            None => SignOffRule::default(),
        };

        let defaults = ArtifactTag::default();
        let tag = ArtifactTag::new(
            input("bot-login").unwrap_or(defaults.bot_login),
            input("comment-prefix").unwrap_or(defaults.prefix),
        );

        let repo = match lookup("GITHUB_REPOSITORY").filter(|v| !v.is_empty()) {
            Some(slug) => Some(RepoId::parse(&slug).ok_or(ConfigError::InvalidRepository(slug))?),
            None => None,
        };

        let event_path = lookup("GITHUB_EVENT_PATH")
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .ok_or(ConfigError::MissingEnv("GITHUB_EVENT_PATH"))?;

        Ok(Config {
            token,
            repo,
            event_path,
            output_path: lookup("GITHUB_OUTPUT")
                .filter(|v| !v.is_empty())
                .map(PathBuf::from),
            debug: lookup("RUNNER_DEBUG").as_deref() == Some("1"),
            whitelist,
            validator: Validator::new(placeholders, sign_off),
            tag,
        })
    }
}

/// `repo-token` -> `INPUT_REPO-TOKEN`, the way the Actions runner names inputs.
fn input_var(name: &str) -> String {
    format!("INPUT_{}", name.replace(' ', "_").to_uppercase())
}

/// Splits a multi-line input, trimming each line and dropping blanks.
fn lines(raw: &str) -> impl Iterator<Item = &str> {
    raw.lines().map(str::trim).filter(|l| !l.is_empty())
}

//! Recognizing this tool's own comments and reviews.
//!
//! A recognized artifact is authored by the automation identity *and* starts
//! with the recognized prefix. Both are injected so tests can use fake
//! identities.

use serde::{Deserialize, Serialize};

use crate::effects::{CommentData, ReviewData, ReviewState};

/// Login of the token GitHub Actions hands to workflows.
pub const DEFAULT_BOT_LOGIN: &str = "github-actions[bot]";

/// Heading that tags every comment and review this tool writes.
pub const DEFAULT_PREFIX: &str = "## PR Check";

/// The identity and prefix that mark an artifact as ours.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactTag {
    /// Login of the automation identity.
    pub bot_login: String,
    /// Literal prefix every artifact body starts with.
    pub prefix: String,
}

impl ArtifactTag {
    pub fn new(bot_login: impl Into<String>, prefix: impl Into<String>) -> Self {
        ArtifactTag {
            bot_login: bot_login.into(),
            prefix: prefix.into(),
        }
    }

    /// Formats a message as an artifact body: the prefix, a blank line, the message.
    pub fn wrap(&self, message: &str) -> String {
        format!("{}\n\n{}", self.prefix, message)
    }

    pub fn is_bot(&self, login: &str) -> bool {
        login == self.bot_login
    }

    fn is_recognized(&self, author_login: &str, body: &str) -> bool {
        self.is_bot(author_login) && body.starts_with(self.prefix.as_str())
    }

    /// Finds the most recent recognized comment.
    pub fn find_comment<'a>(&self, comments: &'a [CommentData]) -> Option<&'a CommentData> {
        comments
            .iter()
            .rev()
            .find(|c| self.is_recognized(&c.author_login, &c.body))
    }

    /// Finds the most recent recognized review that is still requesting changes.
    ///
    /// A dismissed recognized review no longer blocks the PR, so updating its
    /// body would not re-block it; such reviews are not returned.
    pub fn find_blocking_review<'a>(&self, reviews: &'a [ReviewData]) -> Option<&'a ReviewData> {
        reviews.iter().rev().find(|r| {
            r.state == ReviewState::ChangesRequested && self.is_recognized(&r.author_login, &r.body)
        })
    }

    /// Every review by the automation identity that is requesting changes,
    /// with or without the prefix.
    pub fn changes_requested_by_bot<'a>(
        &'a self,
        reviews: &'a [ReviewData],
    ) -> impl Iterator<Item = &'a ReviewData> + 'a {
        reviews
            .iter()
            .filter(|r| r.state == ReviewState::ChangesRequested && self.is_bot(&r.author_login))
    }
}

impl Default for ArtifactTag {
    fn default() -> Self {
        ArtifactTag::new(DEFAULT_BOT_LOGIN, DEFAULT_PREFIX)
    }
}

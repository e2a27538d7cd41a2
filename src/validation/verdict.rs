//! The outcome of validating a PR description, and the messages it carries.

use serde::{Deserialize, Serialize};

/// Message for an absent or zero-length description.
pub const EMPTY_BODY_MESSAGE: &str = "The PR Description is empty - do you have the pull request template setup (docs -> pull_request_template.md)? ❌";

/// Message for a description that passed every check.
pub const COMPLETE_MESSAGE: &str = "Nice work 👍👍👍\n  The PR Description has passed all of the validation checks ✅✅✅.\n  The code can now be merged!";

/// Why a verdict came out the way it did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerdictKind {
    /// Every check passed.
    Complete,
    /// Validation was not performed because the author is whitelisted.
    Skipped,
    /// The description is absent or empty.
    EmptyBody,
    /// Every placeholder marker is still present.
    PlaceholdersRemaining,
    /// At least one sign-off line is missing.
    SignOffIncomplete,
}

/// The result of one validation run.
///
/// `message` is always non-empty and is the only place the reason is spelled
/// out for humans.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationVerdict {
    pub kind: VerdictKind,
    pub is_complete: bool,
    pub message: String,
}

impl ValidationVerdict {
    pub fn complete() -> Self {
        Self::new(VerdictKind::Complete, COMPLETE_MESSAGE.to_string())
    }

    /// The fixed verdict used when a whitelisted author bypasses validation.
    pub fn skipped(author_login: &str) -> Self {
        Self::new(
            VerdictKind::Skipped,
            format!(
                "Validation skipped: author {} matches the whitelisted authors pattern ⏭️",
                author_login
            ),
        )
    }

    pub fn empty_body() -> Self {
        Self::new(VerdictKind::EmptyBody, EMPTY_BODY_MESSAGE.to_string())
    }

    /// Builds the placeholder failure from per-marker occurrence counts.
    ///
    /// Produces `<marker> found <n> time(s)` for each marker, joined with `" | "`.
    pub fn placeholders_remaining<'a>(counts: impl IntoIterator<Item = (&'a str, usize)>) -> Self {
        let report = counts
            .into_iter()
            .map(|(marker, count)| format!("{} found {} time(s)", marker, count))
            .collect::<Vec<_>>()
            .join(" | ");
        Self::new(
            VerdictKind::PlaceholdersRemaining,
            format!("Please complete all placeholders: {} 🚫", report),
        )
    }

    /// Builds the sign-off failure, listing every required line comma-joined.
    pub fn sign_off_incomplete(required: &[String]) -> Self {
        Self::new(
            VerdictKind::SignOffIncomplete,
            format!(
                "Please complete the Sign off section: {} 🚫",
                required.join(",")
            ),
        )
    }

    fn new(kind: VerdictKind, message: String) -> Self {
        let is_complete = matches!(kind, VerdictKind::Complete | VerdictKind::Skipped);
        ValidationVerdict {
            kind,
            is_complete,
            message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completeness_follows_kind() {
        assert!(ValidationVerdict::complete().is_complete);
        assert!(ValidationVerdict::skipped("dependabot[bot]").is_complete);
        assert!(!ValidationVerdict::empty_body().is_complete);
        assert!(!ValidationVerdict::placeholders_remaining([("x", 1)]).is_complete);
        assert!(!ValidationVerdict::sign_off_incomplete(&["- [x] a".to_string()]).is_complete);
    }

    #[test]
    fn placeholder_report_joins_markers() {
        let verdict = ValidationVerdict::placeholders_remaining([("<A>", 2), ("<B>", 1)]);
        assert_eq!(
            verdict.message,
            "Please complete all placeholders: <A> found 2 time(s) | <B> found 1 time(s) 🚫"
        );
    }

    #[test]
    fn sign_off_message_lists_all_required_lines() {
        let verdict = ValidationVerdict::sign_off_incomplete(&[
            "- [x] **Author(s):**".to_string(),
            "- [x] **Reviewer(s):**".to_string(),
        ]);
        assert_eq!(
            verdict.message,
            "Please complete the Sign off section: - [x] **Author(s):**,- [x] **Reviewer(s):** 🚫"
        );
    }

    #[test]
    fn skipped_message_names_author() {
        let verdict = ValidationVerdict::skipped("renovate[bot]");
        assert!(verdict.message.contains("renovate[bot]"));
        assert_eq!(verdict.kind, VerdictKind::Skipped);
    }
}

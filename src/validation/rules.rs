//! Literal rule sets checked against a PR description.
//!
//! Both rule kinds are ordered, non-empty lists of literal strings. Matching is
//! plain substring containment; nothing here is interpreted as a pattern.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The template placeholder shipped in the default pull request template.
pub const DEFAULT_PLACEHOLDER: &str = "{{!!DETAILS GO HERE!!}}";

/// The sign-off checklist lines shipped in the default pull request template,
/// in their checked form.
pub const DEFAULT_SIGN_OFF_LINES: [&str; 2] = ["- [x] **Author(s):**", "- [x] **Reviewer(s):**"];

/// A rule set was constructed with no entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{rule} must contain at least one non-empty entry")]
pub struct EmptyRuleSet {
    pub rule: &'static str,
}

/// Literal markers that must all be replaced before a description is complete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceholderRule {
    markers: Vec<String>,
}

impl PlaceholderRule {
    /// Creates a rule from the given markers, dropping empty strings.
    pub fn new<I, S>(markers: I) -> Result<Self, EmptyRuleSet>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let markers = non_empty_entries(markers);
        if markers.is_empty() {
            return Err(EmptyRuleSet {
                rule: "placeholder rule",
            });
        }
        Ok(PlaceholderRule { markers })
    }

    pub fn markers(&self) -> &[String] {
        &self.markers
    }

    /// Returns true if every marker occurs in `body`.
    ///
    /// The gate is all-or-nothing: a body that still contains only some of
    /// the markers is not rejected by this rule.
    pub fn all_present(&self, body: &str) -> bool {
        self.markers.iter().all(|marker| body.contains(marker.as_str()))
    }

    /// Counts the non-overlapping occurrences of each marker, in rule order.
    pub fn occurrences<'a>(&'a self, body: &str) -> Vec<(&'a str, usize)> {
        self.markers
            .iter()
            .map(|marker| (marker.as_str(), body.matches(marker.as_str()).count()))
            .collect()
    }
}

impl Default for PlaceholderRule {
    fn default() -> Self {
        PlaceholderRule {
            markers: vec![DEFAULT_PLACEHOLDER.to_string()],
        }
    }
}

/// Literal checklist lines that must all appear verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignOffRule {
    lines: Vec<String>,
}

impl SignOffRule {
    /// Creates a rule from the given lines, dropping empty strings.
    pub fn new<I, S>(lines: I) -> Result<Self, EmptyRuleSet>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let lines = non_empty_entries(lines);
        if lines.is_empty() {
            return Err(EmptyRuleSet {
                rule: "sign-off rule",
            });
        }
        Ok(SignOffRule { lines })
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Returns the first required line missing from `body`, if any.
    pub fn first_missing<'a>(&'a self, body: &str) -> Option<&'a str> {
        self.lines
            .iter()
            .map(String::as_str)
            .find(|line| !body.contains(line))
    }
}

impl Default for SignOffRule {
    fn default() -> Self {
        SignOffRule {
            lines: DEFAULT_SIGN_OFF_LINES.iter().map(|l| l.to_string()).collect(),
        }
    }
}

fn non_empty_entries<I, S>(entries: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    entries
        .into_iter()
        .map(Into::into)
        .filter(|entry| !entry.is_empty())
        .collect()
}

//! Pull request snapshot consumed by a single validation run.

use serde::{Deserialize, Serialize};

use super::ids::PrNumber;

/// The parts of a pull request a validation run looks at.
///
/// Built once from the inbound event and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrSnapshot {
    /// The PR number.
    pub number: PrNumber,

    /// The PR author's login name.
    pub author_login: String,

    /// The PR description.
    ///
    /// GitHub sends `null` for a PR that was opened without a description,
    /// which is distinct from an empty string only on the wire; both are
    /// treated as empty by validation.
    pub body: Option<String>,
}

impl PrSnapshot {
    pub fn new(number: PrNumber, author_login: impl Into<String>, body: Option<String>) -> Self {
        PrSnapshot {
            number,
            author_login: author_login.into(),
            body,
        }
    }

    /// Returns the description, or `None` if it is absent or empty.
    pub fn non_empty_body(&self) -> Option<&str> {
        self.body.as_deref().filter(|b| !b.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_empty_body_treats_null_and_empty_alike() {
        let null = PrSnapshot::new(PrNumber(1), "octocat", None);
        let empty = PrSnapshot::new(PrNumber(1), "octocat", Some(String::new()));
        let filled = PrSnapshot::new(PrNumber(1), "octocat", Some("# Summary".to_string()));

        assert_eq!(null.non_empty_body(), None);
        assert_eq!(empty.non_empty_body(), None);
        assert_eq!(filled.non_empty_body(), Some("# Summary"));
    }

    #[test]
    fn deserializes_null_body() {
        let json = r#"{"number": 7, "author_login": "octocat", "body": null}"#;
        let pr: PrSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(pr.number, PrNumber(7));
        assert_eq!(pr.body, None);
    }
}

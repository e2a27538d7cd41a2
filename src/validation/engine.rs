//! The validation engine: a pure function from description text to verdict.

use tracing::debug;

use super::rules::{PlaceholderRule, SignOffRule};
use super::verdict::ValidationVerdict;

/// Checks PR descriptions against a fixed placeholder rule and sign-off rule.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Validator {
    placeholders: PlaceholderRule,
    sign_off: SignOffRule,
}

impl Validator {
    pub fn new(placeholders: PlaceholderRule, sign_off: SignOffRule) -> Self {
        Validator {
            placeholders,
            sign_off,
        }
    }

    pub fn placeholders(&self) -> &PlaceholderRule {
        &self.placeholders
    }

    pub fn sign_off(&self) -> &SignOffRule {
        &self.sign_off
    }

    /// Validates a description. Never fails: every input maps to a verdict.
    ///
    /// Checks run in order and the first failing check decides the message:
    ///
    /// 1. Absent or empty body.
    /// 2. Every placeholder marker still present.
    /// 3. Any sign-off line missing.
    pub fn validate(&self, body: Option<&str>) -> ValidationVerdict {
        debug!(body = ?body, "Validating PR description");

        let body = match body {
            Some(b) if !b.is_empty() => b,
            _ => return ValidationVerdict::empty_body(),
        };

        if self.placeholders.all_present(body) {
            return ValidationVerdict::placeholders_remaining(self.placeholders.occurrences(body));
        }

        if let Some(missing) = self.sign_off.first_missing(body) {
            debug!(missing, "Sign-off line missing");
            return ValidationVerdict::sign_off_incomplete(self.sign_off.lines());
        }

        ValidationVerdict::complete()
    }
}

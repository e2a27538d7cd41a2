//! PR description validation.
//!
//! The engine checks a description in three steps, stopping at the first
//! failure:
//!
//! 1. The description must be present and non-empty.
//! 2. The template placeholders must not *all* still be present.
//! 3. Every sign-off checklist line must appear verbatim.
//!
//! Validation is pure; the only side effect is tracing output.

pub mod engine;
pub mod rules;
pub mod verdict;

pub use engine::Validator;
pub use rules::{DEFAULT_PLACEHOLDER, DEFAULT_SIGN_OFF_LINES, EmptyRuleSet, PlaceholderRule, SignOffRule};
pub use verdict::{COMPLETE_MESSAGE, EMPTY_BODY_MESSAGE, ValidationVerdict, VerdictKind};

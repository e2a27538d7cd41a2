//! PR Body Check - a GitHub Action that gates pull requests on a completed
//! description template.
//!
//! This library provides validation of PR descriptions, reconciliation of the
//! verdict with the comments and reviews already on the pull request, and the
//! GitHub plumbing to apply it.

pub mod config;
pub mod effects;
pub mod github;
pub mod orchestrator;
pub mod reconcile;
pub mod types;
pub mod validation;
pub mod webhooks;

#[cfg(test)]
mod test_utils;

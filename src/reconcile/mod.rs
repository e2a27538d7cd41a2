//! Reconciling the verdict with what is already on the pull request.
//!
//! Rather than posting a fresh comment or review on every run, the policy
//! looks for artifacts this tool wrote earlier and updates them in place.
//! Prior rejections are dismissed once the description passes.

pub mod artifact;
pub mod policy;

pub use artifact::{ArtifactTag, DEFAULT_BOT_LOGIN, DEFAULT_PREFIX};
pub use policy::{Action, DISMISS_MESSAGE, reconcile};

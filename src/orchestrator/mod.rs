//! Wiring an inbound pull request through validation and reconciliation.
//!
//! The orchestrator owns no state. `main` builds the interpreter and the
//! [`CheckSettings`] once and passes them to [`run`], which returns a
//! [`RunOutcome`] for the workflow.

mod report;
mod run;

pub use report::{RunOutcome, RunStatus, error_command};
pub use run::{CheckSettings, RunError, RunPhase, run};

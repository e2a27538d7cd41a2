//! GitHub API client and effect interpreter.
//!
//! This module provides the implementation for executing GitHub effects via the octocrab
//! library. It implements the `GitHubInterpreter` trait defined in the effects module.
//!
//! Calls are made once each: timeouts and retries are left to the transport.

mod client;
mod error;
mod interpreter;

pub use client::OctocrabClient;
pub use error::GitHubApiError;
pub use interpreter::interpret_github_effect;

//! Inbound GitHub event handling.
//!
//! This module provides:
//! - Typed representation of the pull request event
//! - Parsing of the event payload a workflow run receives

pub mod events;
pub mod parser;

pub use events::{PrAction, PullRequestEvent};
pub use parser::{ParseError, parse_event};

//! Terminal outcome of a run and how it is reported to the workflow.
//!
//! Outputs go to the `GITHUB_OUTPUT` file using the multi-line form
//! (`name<<DELIMITER`); failure is signalled with an `::error::` workflow
//! command and a non-zero exit code.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

use serde::Serialize;

use crate::validation::ValidationVerdict;

use super::run::{RunError, RunPhase};

/// Delimiter stem for multi-line outputs.
const DELIMITER: &str = "PR_BODY_CHECK_EOF";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RunStatus {
    Success,
    Failed,
}

/// How a run ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunOutcome {
    pub status: RunStatus,
    /// The verdict message, or the error description when the run errored.
    pub message: String,
    /// URL of the recognized comment written by this run.
    pub comment_url: Option<String>,
    /// `responseMessage` output. Absent when the run failed before a verdict.
    pub response_message: Option<String>,
}

impl RunOutcome {
    /// Outcome of a run whose actions all executed.
    pub fn from_verdict(verdict: ValidationVerdict, comment_url: Option<String>) -> Self {
        let response_message = response_message(&verdict);
        RunOutcome {
            status: if verdict.is_complete {
                RunStatus::Success
            } else {
                RunStatus::Failed
            },
            message: verdict.message,
            comment_url,
            response_message: Some(response_message),
        }
    }

    /// Outcome of a run that hit `error`, after `verdict` if one was reached.
    ///
    /// `comment_url` is the comment written before the failure, if any.
    pub fn error(
        verdict: Option<ValidationVerdict>,
        comment_url: Option<String>,
        error: RunError,
    ) -> Self {
        RunOutcome {
            status: RunStatus::Failed,
            message: error.to_string(),
            comment_url,
            response_message: verdict.as_ref().map(response_message),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == RunStatus::Success
    }

    pub fn phase(&self) -> RunPhase {
        match self.status {
            RunStatus::Success => RunPhase::Success,
            RunStatus::Failed => RunPhase::Failed,
        }
    }

    /// Step outputs as `(name, value)` pairs, in the order they are written.
    pub fn outputs(&self) -> Vec<(&'static str, &str)> {
        let mut outputs = Vec::new();
        if let Some(url) = &self.comment_url {
            outputs.push(("comment-url", url.as_str()));
        }
        if let Some(message) = &self.response_message {
            outputs.push(("responseMessage", message.as_str()));
        }
        outputs
    }

    /// Appends the outputs to the `GITHUB_OUTPUT` file at `path`.
    pub fn write_outputs(&self, path: &Path) -> io::Result<()> {
        let mut file = OpenOptions::new().create(true).append(true).open(path)?;
        for (name, value) in self.outputs() {
            file.write_all(format_output(name, value).as_bytes())?;
        }
        Ok(())
    }

    /// The `::error::` workflow command for a failed run.
    pub fn error_command(&self) -> Option<String> {
        match self.status {
            RunStatus::Success => None,
            RunStatus::Failed => Some(error_command(&self.message)),
        }
    }
}

fn response_message(verdict: &ValidationVerdict) -> String {
    if verdict.is_complete {
        format!("✅ All checks passed: {}", verdict.message)
    } else {
        format!("🚧 PR Body incomplete: {}", verdict.message)
    }
}

/// Formats one output in the multi-line form, picking a delimiter that does
/// not occur in the value.
fn format_output(name: &str, value: &str) -> String {
    let mut delimiter = DELIMITER.to_string();
    while value.contains(&delimiter) {
        delimiter.push('_');
    }
    format!("{name}<<{delimiter}\n{value}\n{delimiter}\n")
}

/// Formats `message` as an `::error::` workflow command.
pub fn error_command(message: &str) -> String {
    format!("::error::{}", escape_data(message))
}

/// Escapes a workflow command's data so newlines survive.
fn escape_data(data: &str) -> String {
    data.replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::COMPLETE_MESSAGE;

    fn complete() -> RunOutcome {
        RunOutcome::from_verdict(
            ValidationVerdict::complete(),
            Some("https://github.com/o/r/pull/1#issuecomment-5".to_string()),
        )
    }

    #[test]
    fn complete_verdict_succeeds() {
        let outcome = complete();
        assert!(outcome.is_success());
        assert_eq!(outcome.phase(), RunPhase::Success);
        assert_eq!(outcome.error_command(), None);
        assert_eq!(
            outcome.response_message,
            Some(format!("✅ All checks passed: {}", COMPLETE_MESSAGE))
        );
    }

    #[test]
    fn incomplete_verdict_fails() {
        let outcome = RunOutcome::from_verdict(ValidationVerdict::empty_body(), None);
        assert_eq!(outcome.status, RunStatus::Failed);
        assert!(
            outcome
                .response_message
                .as_deref()
                .is_some_and(|m| m.starts_with("🚧 PR Body incomplete: The PR Description is empty"))
        );
    }

    #[test]
    fn error_before_verdict_has_no_response_message() {
        let outcome = RunOutcome::error(None, None, RunError::MissingPullRequest);
        assert_eq!(outcome.response_message, None);
        assert!(outcome.outputs().is_empty());
    }

    #[test]
    fn error_after_comment_keeps_its_url() {
        let outcome = RunOutcome::error(
            Some(ValidationVerdict::complete()),
            Some("https://github.com/o/r/pull/1#issuecomment-5".to_string()),
            RunError::Transport {
                effect: "dismiss_review",
                message: "HTTP 502".to_string(),
            },
        );
        assert_eq!(outcome.status, RunStatus::Failed);
        assert_eq!(outcome.outputs()[0].0, "comment-url");
    }

    #[test]
    fn error_command_escapes_percent_and_line_breaks() {
        assert_eq!(
            error_command("reading config: 50%\r\nnext"),
            "::error::reading config: 50%25%0D%0Anext"
        );
    }

    #[test]
    fn outputs_in_order() {
        let outcome = complete();
        let names: Vec<_> = outcome.outputs().into_iter().map(|(n, _)| n).collect();
        assert_eq!(names, ["comment-url", "responseMessage"]);
    }

    #[test]
    fn error_command_escapes_newlines() {
        let outcome = RunOutcome::from_verdict(
            ValidationVerdict::placeholders_remaining([("100%", 1)]),
            None,
        );
        let command = outcome.error_command().unwrap();
        assert!(command.starts_with("::error::Please complete all placeholders: 100%25 found"));
        assert!(!command.contains('\n'));
    }

    #[test]
    fn delimiter_avoids_value_collisions() {
        let value = format!("before\n{}\nafter", DELIMITER);
        let formatted = format_output("responseMessage", &value);
        assert!(formatted.starts_with(&format!("responseMessage<<{}_\n", DELIMITER)));
        assert!(formatted.ends_with(&format!("\n{}_\n", DELIMITER)));
    }

    #[test]
    fn writes_multiline_outputs_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("output");
        std::fs::write(&path, "existing=1\n").unwrap();

        complete().write_outputs(&path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        let expected = format!(
            "existing=1\n\
             comment-url<<{d}\nhttps://github.com/o/r/pull/1#issuecomment-5\n{d}\n\
             responseMessage<<{d}\n✅ All checks passed: {m}\n{d}\n",
            d = DELIMITER,
            m = COMPLETE_MESSAGE
        );
        assert_eq!(written, expected);
    }
}

//! Reporting policy for wrapped commands
//!
//! The policy never changes how a command runs, only whether and how its
//! outcome is reported.

use super::runner::{CommandOutcome, CommandRunner};
use crate::errors::{AppError, AppResult};

/// When a wrapped command's outcome is reported
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportPolicy {
    #[default]
    Always,
    OnlyOnSuccess,
    OnlyOnFailure,
}

impl ReportPolicy {
    /// Build the policy from the two mutually exclusive flags
    pub fn from_flags(only_on_success: bool, only_on_failure: bool) -> AppResult<Self> {
        match (only_on_success, only_on_failure) {
            (true, true) => Err(AppError::invalid_arguments(
                "only one of --only-on-success or --only-on-failure can be provided",
            )),
            (true, false) => Ok(Self::OnlyOnSuccess),
            (false, true) => Ok(Self::OnlyOnFailure),
            (false, false) => Ok(Self::Always),
        }
    }

    pub fn should_report(&self, outcome: &CommandOutcome) -> bool {
        match self {
            Self::Always => true,
            Self::OnlyOnSuccess => outcome.succeeded(),
            Self::OnlyOnFailure => !outcome.succeeded(),
        }
    }
}

/// Up/down status for uptime-kuma, optionally inverted
pub fn monitor_up(outcome: &CommandOutcome, reverse: bool) -> bool {
    outcome.succeeded() != reverse
}

/// Message for ntfy: user message, then output, then the failure reason
///
/// Falls back to a one-line summary so the message is never empty.
pub fn ntfy_message(user_message: &str, outcome: &CommandOutcome, command: &CommandRunner) -> String {
    let message = join_parts(&[
        user_message.trim_end(),
        outcome.output.trim_end(),
        outcome.failure.as_deref().unwrap_or_default(),
    ]);

    if message.is_empty() {
        format!("Command `{command}` succeeded")
    } else {
        message
    }
}

/// Message for uptime-kuma: the user message replaces the output
pub fn monitor_message(user_message: Option<&str>, outcome: &CommandOutcome) -> Option<String> {
    let base = user_message
        .filter(|m| !m.is_empty())
        .unwrap_or(outcome.output.trim_end());
    let message = join_parts(&[base, outcome.failure.as_deref().unwrap_or_default()]);

    if message.is_empty() {
        None
    } else {
        Some(message)
    }
}

fn join_parts(parts: &[&str]) -> String {
    parts
        .iter()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join("\n")
}

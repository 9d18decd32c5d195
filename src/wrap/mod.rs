//! Command wrapping
//!
//! Runs an external command, captures everything it prints and turns the
//! outcome into a report according to a [`ReportPolicy`].

pub mod policy;
pub mod runner;

pub use policy::{monitor_message, monitor_up, ntfy_message, ReportPolicy};
pub use runner::{CommandOutcome, CommandRunner};

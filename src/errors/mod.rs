//! Centralized error handling module
//!
//! Library code returns [`AppResult`]; the CLI layer wraps these in
//! `anyhow::Error` and inspects them again when deciding how to exit.

pub mod types;

pub use types::{AppError, AppResult};

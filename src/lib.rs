//! notify-me library
//!
//! Sends push notifications to ntfy topics and status updates to uptime-kuma
//! push monitors, optionally reporting the outcome of a wrapped command.

pub mod cli;
pub mod clients;
pub mod config;
pub mod errors;
pub mod ntfy;
pub mod uptime_kuma;
pub mod wrap;

// Re-export commonly used types for convenience
pub use clients::{NtfyClient, UptimeKumaClient};
pub use config::{NtfyConfig, UptimeKumaConfig, WrapConfig};
pub use errors::{AppError, AppResult};
pub use ntfy::{Notification, Priority};
pub use uptime_kuma::MonitorStatus;

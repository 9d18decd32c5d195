//! Typed per-invocation configuration
//!
//! Every invocation builds exactly one of these objects from the parsed
//! command line (see `cli::args`). Nothing is read from or written to disk.

use std::fmt;

use crate::ntfy::Notification;
use crate::uptime_kuma::MonitorStatus;
use crate::wrap::ReportPolicy;

/// Instance used when `--instance` is not given for ntfy
pub const DEFAULT_NTFY_INSTANCE: &str = "ntfy.sh";

/// Prefix `https://` unless the instance already starts with a scheme
///
/// ```
/// use notify_me::config::normalize_instance;
///
/// assert_eq!(normalize_instance("example.com"), "https://example.com");
/// assert_eq!(normalize_instance("http://localhost:8080"), "http://localhost:8080");
/// ```
pub fn normalize_instance(instance: &str) -> String {
    let instance = instance.trim();
    let lower = instance.to_ascii_lowercase();
    if lower.starts_with("http://") || lower.starts_with("https://") {
        instance.to_string()
    } else {
        format!("https://{instance}")
    }
}

/// Authentication used against a ntfy instance
#[derive(Clone, PartialEq, Eq)]
pub enum NtfyAuth {
    Anonymous,
    Basic { user: String, pass: String },
    Bearer(String),
}

impl NtfyAuth {
    /// Basic auth wins when both user and password are set, then the token
    pub fn resolve(user: Option<&str>, pass: Option<&str>, token: Option<&str>) -> Self {
        let present = |value: Option<&str>| value.filter(|v| !v.is_empty()).map(str::to_string);

        match (present(user), present(pass), present(token)) {
            (Some(user), Some(pass), _) => Self::Basic { user, pass },
            (_, _, Some(token)) => Self::Bearer(token),
            _ => Self::Anonymous,
        }
    }
}

impl fmt::Debug for NtfyAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Anonymous => f.write_str("Anonymous"),
            Self::Basic { user, .. } => f
                .debug_struct("Basic")
                .field("user", user)
                .field("pass", &"<redacted>")
                .finish(),
            Self::Bearer(_) => f.debug_tuple("Bearer").field(&"<redacted>").finish(),
        }
    }
}

/// Where and how to reach a ntfy instance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NtfyConnection {
    pub instance: String,
    pub auth: NtfyAuth,
}

/// Everything needed for one ntfy invocation
#[derive(Debug, Clone, PartialEq)]
pub struct NtfyConfig {
    pub connection: NtfyConnection,
    pub notification: Notification,
}

/// Where to reach an uptime-kuma push monitor
#[derive(Clone, PartialEq, Eq)]
pub struct UptimeKumaConnection {
    pub instance: String,
    pub token: String,
}

impl fmt::Debug for UptimeKumaConnection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UptimeKumaConnection")
            .field("instance", &self.instance)
            .field("token", &"<redacted>")
            .finish()
    }
}

/// Everything needed for one uptime-kuma invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UptimeKumaConfig {
    pub connection: UptimeKumaConnection,
    pub message: Option<String>,
    pub ping: Option<String>,
}

impl UptimeKumaConfig {
    /// Monitor status carrying the configured message and ping
    pub fn status(&self, up: bool) -> MonitorStatus {
        MonitorStatus {
            up,
            message: self.message.clone(),
            ping: self.ping.clone(),
        }
    }
}

/// The command to wrap and how its outcome is reported
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrapConfig {
    pub program: String,
    pub args: Vec<String>,
    pub policy: ReportPolicy,
    /// Invert the up/down status (uptime-kuma only)
    pub reverse: bool,
}

//! HTTP clients for the supported push services
//!
//! Both clients are blocking and share the same plumbing:
//!
//! - **HTTP client**: one `reqwest::blocking::Client` without a request timeout
//! - **Response check**: only `200 OK` counts as delivered; anything else becomes
//!   an [`AppError::HttpStatus`] carrying the status line and a body snippet
//! - **Preview**: a built request can be rendered as JSON for `--dry-run`
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use notify_me::clients::NtfyClient;
//! use notify_me::config::{NtfyAuth, NtfyConnection};
//! use notify_me::ntfy::Notification;
//!
//! # fn main() -> notify_me::errors::AppResult<()> {
//! let client = NtfyClient::new(NtfyConnection {
//!     instance: "https://ntfy.sh".to_string(),
//!     auth: NtfyAuth::Bearer("tk_example".to_string()),
//! })?;
//!
//! client.send(&Notification::new("alerts", "Backup finished"))?;
//! # Ok(())
//! # }
//! ```

pub mod ntfy;
pub mod uptime_kuma;

pub use ntfy::NtfyClient;
pub use uptime_kuma::UptimeKumaClient;

use std::collections::BTreeMap;
use std::io::Read;
use std::time::Duration;

use reqwest::blocking::{Client, Request, Response};
use reqwest::header::AUTHORIZATION;
use reqwest::StatusCode;
use serde::Serialize;
use tracing::debug;
use url::Url;

use crate::errors::{AppError, AppResult};

/// Bytes of an error response body kept in the error message
pub const ERROR_BODY_LIMIT: u64 = 1024;

const USER_AGENT: &str = concat!("notify-me/", env!("CARGO_PKG_VERSION"));

/// Create the blocking HTTP client shared by both services
pub fn build_http_client() -> AppResult<Client> {
    let client = Client::builder()
        .user_agent(USER_AGENT)
        .timeout(None::<Duration>)
        .build()?;
    Ok(client)
}

/// Parse an instance URL and append path segments to it
///
/// A trailing slash on the instance is dropped first, so `https://host/` and
/// `https://host` produce the same URL.
pub fn instance_url(instance: &str, segments: &[&str]) -> AppResult<Url> {
    let mut url = Url::parse(instance).map_err(|source| AppError::InvalidInstanceUrl {
        url: instance.to_string(),
        source,
    })?;

    url.path_segments_mut()
        .map_err(|_| AppError::InstanceNotABase {
            url: instance.to_string(),
        })?
        .pop_if_empty()
        .extend(segments);

    Ok(url)
}

/// Execute a request and require `200 OK`
pub fn execute(client: &Client, service: &'static str, request: Request) -> AppResult<()> {
    debug!(service, method = %request.method(), url = %request.url(), "Sending request");
    let response = client.execute(request)?;
    ensure_success(service, response)
}

/// Turn a non-200 response into an error with a bounded body snippet
pub fn ensure_success(service: &'static str, response: Response) -> AppResult<()> {
    let status = response.status();
    if status == StatusCode::OK {
        debug!(service, %status, "Request accepted");
        return Ok(());
    }

    let mut body = Vec::new();
    // The snippet is best-effort; a broken body still yields the status error
    let _ = response.take(ERROR_BODY_LIMIT).read_to_end(&mut body);

    Err(AppError::HttpStatus {
        service,
        status: status.to_string(),
        body: String::from_utf8_lossy(&body).into_owned(),
    })
}

/// Printable form of a built request, used by `--dry-run`
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RequestPreview {
    pub method: String,
    pub url: String,
    pub headers: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

impl RequestPreview {
    pub fn to_json(&self) -> AppResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl From<&Request> for RequestPreview {
    fn from(request: &Request) -> Self {
        let headers = request
            .headers()
            .iter()
            .map(|(name, value)| {
                let value = if *name == AUTHORIZATION {
                    "<redacted>".to_string()
                } else {
                    String::from_utf8_lossy(value.as_bytes()).into_owned()
                };
                (name.as_str().to_string(), value)
            })
            .collect();

        let body = request
            .body()
            .and_then(|body| body.as_bytes())
            .map(|bytes| String::from_utf8_lossy(bytes).into_owned());

        Self {
            method: request.method().to_string(),
            url: request.url().to_string(),
            headers,
            body,
        }
    }
}

use reqwest::blocking::{Client, Request};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use tracing::debug;

use super::{build_http_client, execute, instance_url};
use crate::config::{NtfyAuth, NtfyConnection};
use crate::errors::{AppError, AppResult};
use crate::ntfy::Notification;

const SERVICE: &str = "ntfy";

/// Blocking client publishing plain-text messages to a ntfy instance
pub struct NtfyClient {
    client: Client,
    connection: NtfyConnection,
}

impl NtfyClient {
    /// Fails early when the instance is not a usable base URL
    pub fn new(connection: NtfyConnection) -> AppResult<Self> {
        instance_url(&connection.instance, &[])?;
        Ok(Self {
            client: build_http_client()?,
            connection,
        })
    }

    /// Publish a notification; only `200 OK` counts as delivered
    pub fn send(&self, notification: &Notification) -> AppResult<()> {
        let request = self.build_request(notification)?;
        execute(&self.client, SERVICE, request)
    }

    /// Build the `POST {instance}/{topic}` request without sending it
    pub fn build_request(&self, notification: &Notification) -> AppResult<Request> {
        let url = instance_url(&self.connection.instance, &[notification.topic.as_str()])?;
        let headers = build_headers(notification)?;

        let mut builder = self
            .client
            .post(url)
            .headers(headers)
            .body(notification.message.clone());

        builder = match &self.connection.auth {
            NtfyAuth::Basic { user, pass } => builder.basic_auth(user, Some(pass)),
            NtfyAuth::Bearer(token) => builder.header(
                AUTHORIZATION,
                header_value("Authorization", &format!("Bearer {token}"))?,
            ),
            NtfyAuth::Anonymous => builder,
        };

        debug!(auth = ?self.connection.auth, topic = %notification.topic, "Built ntfy request");
        Ok(builder.build()?)
    }
}

/// One header per optional field that is actually set
fn build_headers(notification: &Notification) -> AppResult<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("text/plain; charset=utf-8"));

    let optional = [
        ("Title", notification.title.clone()),
        ("Priority", notification.priority.as_ref().map(|p| p.to_string())),
        ("Tags", notification.tags_header()),
        ("Click", notification.click.clone()),
        ("Actions", notification.actions.clone()),
        ("Delay", notification.delay.clone()),
        ("Icon", notification.icon.clone()),
    ];

    for (name, value) in optional {
        if let Some(value) = value.filter(|v| !v.is_empty()) {
            headers.insert(name, header_value(name, &value)?);
        }
    }

    if notification.markdown {
        headers.insert("Markdown", HeaderValue::from_static("true"));
    }

    Ok(headers)
}

// `from_bytes` keeps UTF-8 titles intact and only rejects control characters
fn header_value(header: &'static str, value: &str) -> AppResult<HeaderValue> {
    HeaderValue::from_bytes(value.as_bytes()).map_err(|source| AppError::InvalidHeader { header, source })
}

use reqwest::blocking::{Client, Request};
use tracing::debug;

use super::{build_http_client, execute, instance_url};
use crate::config::UptimeKumaConnection;
use crate::errors::AppResult;
use crate::uptime_kuma::MonitorStatus;

const SERVICE: &str = "uptime-kuma";

/// Blocking client for uptime-kuma push monitors
pub struct UptimeKumaClient {
    client: Client,
    connection: UptimeKumaConnection,
}

impl UptimeKumaClient {
    pub fn new(connection: UptimeKumaConnection) -> AppResult<Self> {
        instance_url(&connection.instance, &[])?;
        Ok(Self {
            client: build_http_client()?,
            connection,
        })
    }

    /// Push a heartbeat; only `200 OK` counts as delivered
    pub fn send(&self, status: &MonitorStatus) -> AppResult<()> {
        let request = self.build_request(status)?;
        execute(&self.client, SERVICE, request)
    }

    /// Build `GET {instance}/api/push/{token}?status=..&msg=..&ping=..`
    pub fn build_request(&self, status: &MonitorStatus) -> AppResult<Request> {
        let mut url = instance_url(
            &self.connection.instance,
            &["api", "push", self.connection.token.as_str()],
        )?;

        {
            let mut query = url.query_pairs_mut();
            query.append_pair("status", status.status());
            if let Some(message) = status.message.as_deref().filter(|m| !m.is_empty()) {
                query.append_pair("msg", message);
            }
            if let Some(ping) = status.ping.as_deref().filter(|p| !p.is_empty()) {
                query.append_pair("ping", ping);
            }
        }

        debug!(status = status.status(), "Built uptime-kuma request");
        Ok(self.client.get(url).build()?)
    }
}

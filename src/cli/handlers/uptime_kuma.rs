//! uptime-kuma handler

use anyhow::{Context, Result};
use tracing::{debug, info};

use super::super::CliContext;
use super::print_preview;
use crate::clients::UptimeKumaClient;
use crate::config::{UptimeKumaConfig, WrapConfig};
use crate::uptime_kuma::MonitorStatus;
use crate::wrap::{monitor_message, monitor_up, CommandRunner};

/// Handler for uptime-kuma operations
pub struct UptimeKumaHandler<'a> {
    context: &'a CliContext,
}

impl<'a> UptimeKumaHandler<'a> {
    pub fn new(context: &'a CliContext) -> Self {
        Self { context }
    }

    /// Handle `uptime-kuma --up|--down`
    pub fn handle_send(&self, config: UptimeKumaConfig, up: bool) -> Result<()> {
        let status = config.status(up);
        let client = UptimeKumaClient::new(config.connection)?;
        self.dispatch(&client, &status)
    }

    /// Handle `uptime-kuma wrap`
    pub fn handle_wrap(&self, config: UptimeKumaConfig, wrap: WrapConfig) -> Result<()> {
        let client = UptimeKumaClient::new(config.connection)?;
        let runner = CommandRunner::new(wrap.program, wrap.args);
        let outcome = runner.run();

        if !wrap.policy.should_report(&outcome) {
            info!(
                policy = ?wrap.policy,
                succeeded = outcome.succeeded(),
                "Not sending status"
            );
            return Ok(());
        }

        let up = monitor_up(&outcome, wrap.reverse);
        if wrap.reverse {
            debug!(up, "Reverse is set, inverting status");
        }

        let status = MonitorStatus {
            up,
            message: monitor_message(config.message.as_deref(), &outcome),
            ping: config.ping,
        };
        self.dispatch(&client, &status)
    }

    fn dispatch(&self, client: &UptimeKumaClient, status: &MonitorStatus) -> Result<()> {
        if self.context.dry_run {
            return print_preview(&client.build_request(status)?);
        }

        debug!(status = status.status(), "Sending monitor status");
        client
            .send(status)
            .context("Failed to update push monitor")?;
        println!("Sent status to uptime-kuma");
        Ok(())
    }
}

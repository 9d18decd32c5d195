//! ntfy handler
//!
//! Sends a notification directly, or runs a wrapped command first and turns
//! its output into the notification body.

use anyhow::{Context, Result};
use tracing::{debug, info};

use super::super::CliContext;
use super::print_preview;
use crate::clients::NtfyClient;
use crate::config::{NtfyConfig, WrapConfig};
use crate::ntfy::Notification;
use crate::wrap::{ntfy_message, CommandRunner};

/// Handler for ntfy operations
pub struct NtfyHandler<'a> {
    context: &'a CliContext,
}

impl<'a> NtfyHandler<'a> {
    pub fn new(context: &'a CliContext) -> Self {
        Self { context }
    }

    /// Handle `ntfy` without a wrapped command
    pub fn handle_send(&self, config: NtfyConfig) -> Result<()> {
        let client = NtfyClient::new(config.connection)?;
        self.dispatch(&client, &config.notification)
    }

    /// Handle `ntfy wrap`
    pub fn handle_wrap(&self, config: NtfyConfig, wrap: WrapConfig) -> Result<()> {
        // Build the client first so a bad instance fails before the command runs
        let client = NtfyClient::new(config.connection)?;
        let runner = CommandRunner::new(wrap.program, wrap.args);
        let outcome = runner.run();

        if !wrap.policy.should_report(&outcome) {
            info!(
                policy = ?wrap.policy,
                succeeded = outcome.succeeded(),
                "Not sending notification"
            );
            return Ok(());
        }

        let mut notification = config.notification;
        notification.message = ntfy_message(&notification.message, &outcome, &runner);
        self.dispatch(&client, &notification)
    }

    fn dispatch(&self, client: &NtfyClient, notification: &Notification) -> Result<()> {
        if self.context.dry_run {
            return print_preview(&client.build_request(notification)?);
        }

        debug!(topic = %notification.topic, "Sending notification");
        client
            .send(notification)
            .with_context(|| format!("Failed to notify topic '{}'", notification.topic))?;
        println!("Notification sent");
        Ok(())
    }
}

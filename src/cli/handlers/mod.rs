//! Command handlers for all CLI operations
//!
//! This module routes parsed commands through argument validation and on to
//! the service specific handlers.

pub mod ntfy;
pub mod uptime_kuma;

use anyhow::Result;
use tracing::debug;

use super::args::ArgProcessor;
use super::commands::{Commands, NtfyAction, UptimeKumaAction};
use super::CliContext;
use crate::clients::RequestPreview;

pub use ntfy::NtfyHandler;
pub use uptime_kuma::UptimeKumaHandler;

/// Coordinates all command handling operations
pub struct CommandHandler {
    context: CliContext,
    processor: ArgProcessor,
}

impl CommandHandler {
    pub fn new(context: CliContext) -> Self {
        Self {
            context,
            processor: ArgProcessor::new(),
        }
    }

    /// Validate arguments and route commands to their handlers
    pub fn handle_command(&self, command: Commands) -> Result<()> {
        match command {
            Commands::Ntfy(args) => {
                let handler = NtfyHandler::new(&self.context);
                match &args.action {
                    None => handler.handle_send(self.processor.ntfy_send(&args)?),
                    Some(NtfyAction::Wrap(wrap)) => {
                        let (config, wrap) = self.processor.ntfy_wrap(&args, wrap)?;
                        handler.handle_wrap(config, wrap)
                    }
                }
            }
            Commands::UptimeKuma(args) => {
                let handler = UptimeKumaHandler::new(&self.context);
                match &args.action {
                    None => {
                        let (config, up) = self.processor.uptime_kuma_send(&args)?;
                        handler.handle_send(config, up)
                    }
                    Some(UptimeKumaAction::Wrap(wrap)) => {
                        let (config, wrap) = self.processor.uptime_kuma_wrap(&args, wrap)?;
                        handler.handle_wrap(config, wrap)
                    }
                }
            }
        }
    }
}

/// Print a built request instead of sending it
pub(crate) fn print_preview(request: &reqwest::blocking::Request) -> Result<()> {
    debug!("Dry run, not sending request");
    println!("{}", RequestPreview::from(request).to_json()?);
    Ok(())
}

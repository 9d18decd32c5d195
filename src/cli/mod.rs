//! CLI module providing command-line interface functionality
//!
//! This module handles argument parsing, command validation, and routing
//! to appropriate handlers while maintaining separation of concerns.

pub mod args;
pub mod commands;
pub mod context;
pub mod handlers;

use std::process::ExitCode;

use clap::FromArgMatches;
use tracing::debug;

pub use commands::{build_command, Cli, Commands};
pub use context::CliContext;
pub use handlers::CommandHandler;

use crate::errors::AppError;

/// Main CLI application
pub struct CliApp;

impl CliApp {
    /// Parse command line arguments, execute the command and map the result
    /// to an exit code
    pub fn run() -> ExitCode {
        let matches = build_command().get_matches();
        let cli = match Cli::from_arg_matches(&matches) {
            Ok(cli) => cli,
            Err(err) => err.exit(),
        };

        let context = CliContext::new(cli.verbose, cli.dry_run);
        if let Err(err) = context.init_logging() {
            eprintln!("Warning: {err}");
        }

        let help_path = cli.command.help_path();
        let handler = CommandHandler::new(context);

        match handler.handle_command(cli.command) {
            Ok(()) => ExitCode::SUCCESS,
            Err(err) => {
                eprintln!("Error: {err:#}");

                if let Some(app_err) = err.downcast_ref::<AppError>() {
                    debug!(category = app_err.category(), "Command failed");
                    if app_err.is_usage_error() {
                        print_help(&help_path);
                    }
                }

                ExitCode::FAILURE
            }
        }
    }
}

/// Print the help of the (sub)command at `path`
fn print_help(path: &[&str]) {
    let mut command = build_command();
    command.build();
    print_subcommand_help(&mut command, path);
}

fn print_subcommand_help(command: &mut clap::Command, path: &[&str]) {
    if let Some((name, rest)) = path.split_first() {
        if let Some(sub) = command.find_subcommand_mut(name) {
            return print_subcommand_help(sub, rest);
        }
    }

    if let Err(err) = command.print_help() {
        debug!(error = %err, "Failed to print help");
    }
}

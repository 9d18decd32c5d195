//! Command definitions and structures for the CLI
//!
//! This module contains all the clap-based command line argument definitions.
//! Flags are kept close to what the user typed (`Option<String>`, plain bools);
//! turning them into validated configuration is the job of `cli::args`.

use clap::{Args, CommandFactory, Parser, Subcommand};

use crate::config::DEFAULT_NTFY_INSTANCE;

/// Main CLI structure
#[derive(Parser, Debug)]
#[command(name = "notify-me")]
#[command(about = "Send push notifications to ntfy or uptime-kuma, optionally wrapping a command")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Print the request that would be sent instead of sending it
    #[arg(long, global = true)]
    pub dry_run: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Send a push notification to a ntfy instance
    Ntfy(NtfyArgs),

    /// Send a status update to an uptime-kuma push monitor
    #[command(name = "uptime-kuma")]
    UptimeKuma(UptimeKumaArgs),
}

impl Commands {
    /// Subcommand names leading to the command being run, for help output
    pub fn help_path(&self) -> Vec<&'static str> {
        match self {
            Commands::Ntfy(args) => match args.action {
                None => vec!["ntfy"],
                Some(NtfyAction::Wrap(_)) => vec!["ntfy", "wrap"],
            },
            Commands::UptimeKuma(args) => match args.action {
                None => vec!["uptime-kuma"],
                Some(UptimeKumaAction::Wrap(_)) => vec!["uptime-kuma", "wrap"],
            },
        }
    }
}

/// ntfy flags, usable before or after `wrap`
#[derive(Args, Debug)]
pub struct NtfyArgs {
    #[command(subcommand)]
    pub action: Option<NtfyAction>,

    /// ntfy instance
    #[arg(short, long, global = true, env = "NOTIFY_ME_NTFY_INSTANCE", default_value = DEFAULT_NTFY_INSTANCE)]
    pub instance: String,

    /// Username for the ntfy instance
    #[arg(short, long, global = true, env = "NOTIFY_ME_NTFY_USER")]
    pub user: Option<String>,

    /// Password for the ntfy instance
    #[arg(short, long, global = true, env = "NOTIFY_ME_NTFY_PASS", hide_env_values = true)]
    pub pass: Option<String>,

    /// Access token for the ntfy instance (ignored when user and password are set)
    #[arg(long, global = true, env = "NOTIFY_ME_NTFY_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Topic to send the message to
    #[arg(short, long, global = true, env = "NOTIFY_ME_NTFY_TOPIC")]
    pub topic: Option<String>,

    /// Message (with wrap: prepended to the command output)
    #[arg(short, long, global = true)]
    pub message: Option<String>,

    /// Message priority (min, low, default, high, max)
    #[arg(short = 'P', long, global = true)]
    pub priority: Option<String>,

    /// Tags for the message, comma separated or repeated
    #[arg(long, global = true, value_delimiter = ',')]
    pub tags: Vec<String>,

    /// Message title
    #[arg(short = 'T', long, global = true)]
    pub title: Option<String>,

    /// URL to open when the notification is clicked
    #[arg(short = 'U', long, global = true)]
    pub url: Option<String>,

    /// JSON array or short format of user actions
    #[arg(long, global = true)]
    pub actions: Option<String>,

    /// Timestamp or duration for delayed delivery
    #[arg(long, global = true)]
    pub delay: Option<String>,

    /// URL to use as notification icon
    #[arg(long, global = true)]
    pub icon: Option<String>,

    /// Enable Markdown formatting in the notification body
    #[arg(long, global = true)]
    pub markdown: bool,
}

#[derive(Subcommand, Debug)]
pub enum NtfyAction {
    /// Wrap a command and send its output to a ntfy instance
    Wrap(WrapArgs),
}

/// uptime-kuma flags
#[derive(Args, Debug)]
pub struct UptimeKumaArgs {
    #[command(subcommand)]
    pub action: Option<UptimeKumaAction>,

    /// The uptime-kuma instance to send the status to
    #[arg(short, long, global = true, env = "NOTIFY_ME_KUMA_INSTANCE")]
    pub instance: Option<String>,

    /// Token of the push monitor
    #[arg(short, long, global = true, env = "NOTIFY_ME_KUMA_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Message to send to the monitor (with wrap: replaces the command output)
    #[arg(short, long, global = true)]
    pub message: Option<String>,

    /// Measurement number to send to the monitor
    #[arg(short, long, global = true)]
    pub ping: Option<String>,

    /// Set the monitor to up
    #[arg(long)]
    pub up: bool,

    /// Set the monitor to down
    #[arg(long)]
    pub down: bool,
}

#[derive(Subcommand, Debug)]
pub enum UptimeKumaAction {
    /// Wrap a command and report its outcome to an uptime-kuma push monitor
    Wrap(KumaWrapArgs),
}

/// Flags shared by every `wrap` subcommand
#[derive(Args, Debug)]
pub struct WrapArgs {
    /// Send a notification only if the command succeeds
    #[arg(long)]
    pub only_on_success: bool,

    /// Send a notification only if the command fails
    #[arg(long)]
    pub only_on_failure: bool,

    /// Program to run, followed by its arguments
    #[arg(value_name = "COMMAND", trailing_var_arg = true, num_args = 1..)]
    pub command: Vec<String>,
}

#[derive(Args, Debug)]
pub struct KumaWrapArgs {
    /// Report up when the command fails and down when it succeeds
    #[arg(long)]
    pub reverse: bool,

    #[command(flatten)]
    pub wrap: WrapArgs,
}

/// Build the full command tree
pub fn build_command() -> clap::Command {
    Cli::command()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("notify-me").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_command_tree_is_consistent() {
        build_command().debug_assert();
    }

    #[test]
    fn test_ntfy_defaults() {
        let cli = parse(&["ntfy", "-t", "alerts", "-m", "hello"]);
        let Commands::Ntfy(args) = cli.command else {
            panic!("expected ntfy command");
        };

        assert_eq!(args.instance, "ntfy.sh");
        assert_eq!(args.topic.as_deref(), Some("alerts"));
        assert_eq!(args.message.as_deref(), Some("hello"));
        assert!(args.action.is_none());
        assert!(!args.markdown);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_ntfy_tags_comma_and_repeat() {
        let cli = parse(&["ntfy", "-t", "x", "--tags", "a,b", "--tags", "c"]);
        let Commands::Ntfy(args) = cli.command else {
            panic!("expected ntfy command");
        };
        assert_eq!(args.tags, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_ntfy_wrap_captures_command_flags() {
        let cli = parse(&["ntfy", "wrap", "-t", "alerts", "--only-on-failure", "ls", "-la", "--color"]);
        assert_eq!(cli.command.help_path(), vec!["ntfy", "wrap"]);

        let Commands::Ntfy(args) = cli.command else {
            panic!("expected ntfy command");
        };
        assert_eq!(args.topic.as_deref(), Some("alerts"));
        let Some(NtfyAction::Wrap(wrap)) = args.action else {
            panic!("expected wrap");
        };
        assert!(wrap.only_on_failure);
        assert!(!wrap.only_on_success);
        assert_eq!(wrap.command, vec!["ls", "-la", "--color"]);
    }

    #[test]
    fn test_kuma_wrap_reverse() {
        let cli = parse(&["uptime-kuma", "-i", "kuma.local", "-t", "tok", "wrap", "--reverse", "false"]);
        let Commands::UptimeKuma(args) = cli.command else {
            panic!("expected uptime-kuma command");
        };
        assert_eq!(args.instance.as_deref(), Some("kuma.local"));
        let Some(UptimeKumaAction::Wrap(wrap)) = args.action else {
            panic!("expected wrap");
        };
        assert!(wrap.reverse);
        assert_eq!(wrap.wrap.command, vec!["false"]);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = parse(&["uptime-kuma", "--up", "--dry-run", "-v"]);
        assert!(cli.dry_run);
        assert!(cli.verbose);
        assert_eq!(cli.command.help_path(), vec!["uptime-kuma"]);
    }
}

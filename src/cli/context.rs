//! CLI context shared by all handlers
//!
//! Holds the global flags and owns logging setup.

use anyhow::Result;

/// CLI execution context
#[derive(Debug, Clone, Copy, Default)]
pub struct CliContext {
    pub verbose: bool,
    pub dry_run: bool,
}

impl CliContext {
    pub fn new(verbose: bool, dry_run: bool) -> Self {
        Self { verbose, dry_run }
    }

    /// Default log level when `RUST_LOG` does not say otherwise
    pub fn log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "warn"
        }
    }

    /// Initialize logging; output goes to stderr so stdout stays scriptable
    pub fn init_logging(&self) -> Result<()> {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::from_default_env()
                    .add_directive(self.log_level().parse().unwrap_or_else(|_| tracing::Level::WARN.into())),
            )
            .with_writer(std::io::stderr)
            .try_init()
            .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {e}"))?;

        if self.verbose {
            tracing::debug!("Verbose logging enabled");
            tracing::debug!(dry_run = self.dry_run, "CLI context ready");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_creation() {
        let context = CliContext::new(false, true);
        assert!(!context.verbose);
        assert!(context.dry_run);
        assert_eq!(context.log_level(), "warn");
    }

    #[test]
    fn test_context_verbose_mode() {
        let context = CliContext::new(true, false);
        assert_eq!(context.log_level(), "debug");
    }
}

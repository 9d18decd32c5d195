//! Argument processing and validation for CLI commands
//!
//! Turns parsed clap arguments into the typed configuration objects from
//! `crate::config`. All validation happens here, before any process is
//! started or any request is made.

use tracing::warn;

use super::commands::{KumaWrapArgs, NtfyArgs, UptimeKumaArgs, WrapArgs};
use crate::config::{
    normalize_instance, NtfyAuth, NtfyConfig, NtfyConnection, UptimeKumaConfig, UptimeKumaConnection,
    WrapConfig,
};
use crate::errors::{AppError, AppResult};
use crate::ntfy::{Notification, Priority};
use crate::wrap::ReportPolicy;

/// Handles argument processing and validation
pub struct ArgProcessor;

impl ArgProcessor {
    /// Create a new argument processor
    pub fn new() -> Self {
        Self
    }

    /// Configuration for `ntfy` without `wrap`; a message is mandatory
    pub fn ntfy_send(&self, args: &NtfyArgs) -> AppResult<NtfyConfig> {
        let config = self.ntfy_config(args)?;
        if config.notification.message.is_empty() {
            return Err(AppError::invalid_arguments("message must be provided"));
        }
        Ok(config)
    }

    /// Configuration for `ntfy wrap`; the message is optional
    pub fn ntfy_wrap(&self, args: &NtfyArgs, wrap: &WrapArgs) -> AppResult<(NtfyConfig, WrapConfig)> {
        let config = self.ntfy_config(args)?;
        let wrap = self.wrap_config(wrap, false)?;
        Ok((config, wrap))
    }

    /// Configuration and status for `uptime-kuma` without `wrap`
    pub fn uptime_kuma_send(&self, args: &UptimeKumaArgs) -> AppResult<(UptimeKumaConfig, bool)> {
        let config = self.uptime_kuma_config(args)?;

        let up = match (args.up, args.down) {
            (true, true) => return Err(AppError::invalid_arguments("only one of --up or --down can be provided")),
            (false, false) => return Err(AppError::invalid_arguments("one of --up or --down must be provided")),
            (up, _) => up,
        };

        Ok((config, up))
    }

    /// Configuration for `uptime-kuma wrap`; the status comes from the command
    pub fn uptime_kuma_wrap(
        &self,
        args: &UptimeKumaArgs,
        wrap: &KumaWrapArgs,
    ) -> AppResult<(UptimeKumaConfig, WrapConfig)> {
        let config = self.uptime_kuma_config(args)?;

        if args.up || args.down {
            return Err(AppError::invalid_arguments(
                "--up and --down cannot be used with wrap, the status is derived from the command",
            ));
        }

        let wrap = self.wrap_config(&wrap.wrap, wrap.reverse)?;
        Ok((config, wrap))
    }

    fn ntfy_config(&self, args: &NtfyArgs) -> AppResult<NtfyConfig> {
        let user = non_empty(&args.user);
        let pass = non_empty(&args.pass);

        match (&user, &pass) {
            (Some(_), None) => {
                return Err(AppError::invalid_arguments(
                    "password must be provided if username is provided",
                ))
            }
            (None, Some(_)) => {
                return Err(AppError::invalid_arguments(
                    "username must be provided if password is provided",
                ))
            }
            _ => {}
        }

        let topic = non_empty(&args.topic).ok_or_else(|| AppError::invalid_arguments("topic must be provided"))?;

        if args.instance.trim().is_empty() {
            return Err(AppError::invalid_arguments("instance must not be empty"));
        }
        let instance = normalize_instance(&args.instance);

        let priority = non_empty(&args.priority).map(|raw| {
            let priority = Priority::parse(&raw);
            if !priority.is_named() {
                warn!(priority = %raw, "Unknown priority, forwarding it unchanged");
            }
            priority
        });

        let mut notification = Notification::new(topic, non_empty(&args.message).unwrap_or_default())
            .with_tags(&args.tags);
        notification.title = non_empty(&args.title);
        notification.priority = priority;
        notification.click = non_empty(&args.url);
        notification.actions = non_empty(&args.actions);
        notification.delay = non_empty(&args.delay);
        notification.icon = non_empty(&args.icon);
        notification.markdown = args.markdown;

        Ok(NtfyConfig {
            connection: NtfyConnection {
                instance,
                auth: NtfyAuth::resolve(user.as_deref(), pass.as_deref(), args.token.as_deref()),
            },
            notification,
        })
    }

    fn uptime_kuma_config(&self, args: &UptimeKumaArgs) -> AppResult<UptimeKumaConfig> {
        let token = non_empty(&args.token).ok_or_else(|| AppError::invalid_arguments("token must be provided"))?;
        let instance =
            non_empty(&args.instance).ok_or_else(|| AppError::invalid_arguments("instance must be provided"))?;

        Ok(UptimeKumaConfig {
            connection: UptimeKumaConnection {
                instance: normalize_instance(&instance),
                token,
            },
            message: non_empty(&args.message),
            ping: non_empty(&args.ping),
        })
    }

    fn wrap_config(&self, args: &WrapArgs, reverse: bool) -> AppResult<WrapConfig> {
        let policy = ReportPolicy::from_flags(args.only_on_success, args.only_on_failure)?;

        let (program, rest) = args
            .command
            .split_first()
            .filter(|(program, _)| !program.is_empty())
            .ok_or_else(|| AppError::invalid_arguments("command must be provided"))?;

        Ok(WrapConfig {
            program: program.clone(),
            args: rest.to_vec(),
            policy,
            reverse,
        })
    }
}

impl Default for ArgProcessor {
    fn default() -> Self {
        Self::new()
    }
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value.as_ref().filter(|v| !v.trim().is_empty()).cloned()
}

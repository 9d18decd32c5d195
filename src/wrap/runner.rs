//! Child process execution with combined output capture

use std::fmt;
use std::io::{ErrorKind, Read};
use std::process::{Command, Stdio};
use std::sync::Mutex;
use std::thread;
use std::time::{Duration, Instant};

use tracing::{debug, warn};

/// Runs a program and captures stdout and stderr into one buffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandRunner {
    program: String,
    args: Vec<String>,
}

/// What happened when the wrapped command ran
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutcome {
    /// Combined stdout and stderr, lossily decoded
    pub output: String,
    /// Why the command is considered failed, `None` on success
    pub failure: Option<String>,
    pub duration: Duration,
}

impl CommandOutcome {
    pub fn succeeded(&self) -> bool {
        self.failure.is_none()
    }
}

impl CommandRunner {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// Run to completion; launch and exit failures end up in the outcome
    pub fn run(&self) -> CommandOutcome {
        debug!(program = %self.program, args = ?self.args, "Running command");
        let started = Instant::now();

        let mut child = match Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
        {
            Ok(child) => child,
            Err(err) => {
                debug!(error = %err, "Command failed to start");
                return CommandOutcome {
                    output: String::new(),
                    failure: Some(format!("failed to start '{}': {}", self.program, err)),
                    duration: started.elapsed(),
                };
            }
        };

        let combined = Mutex::new(Vec::new());
        let stdout = child.stdout.take();
        let stderr = child.stderr.take();

        thread::scope(|scope| {
            let sink = &combined;
            if let Some(stdout) = stdout {
                scope.spawn(move || drain(stdout, sink));
            }
            if let Some(stderr) = stderr {
                scope.spawn(move || drain(stderr, sink));
            }
        });

        let failure = match child.wait() {
            Ok(status) if status.success() => None,
            Ok(status) => Some(status.to_string()),
            Err(err) => Some(format!("failed to wait for '{}': {}", self.program, err)),
        };

        let bytes = combined.into_inner().unwrap_or_else(|poisoned| poisoned.into_inner());
        let outcome = CommandOutcome {
            output: String::from_utf8_lossy(&bytes).into_owned(),
            failure,
            duration: started.elapsed(),
        };

        match &outcome.failure {
            None => debug!(elapsed_ms = outcome.duration.as_millis() as u64, "Command succeeded"),
            Some(reason) => debug!(
                elapsed_ms = outcome.duration.as_millis() as u64,
                reason = %reason,
                "Command failed"
            ),
        }

        outcome
    }
}

impl fmt::Display for CommandRunner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

fn drain(mut reader: impl Read, sink: &Mutex<Vec<u8>>) {
    let mut buf = [0u8; 8192];
    loop {
        match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => {
                let mut combined = sink.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
                combined.extend_from_slice(&buf[..n]);
            }
            Err(err) if err.kind() == ErrorKind::Interrupted => continue,
            Err(err) => {
                warn!(error = %err, "Failed to read command output");
                break;
            }
        }
    }
}

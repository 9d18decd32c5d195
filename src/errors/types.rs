//! Error types for notify-me
//!
//! Errors are grouped by the stage of an invocation in which they occur:
//! argument validation, request construction, and delivery.

use thiserror::Error;

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    // Argument validation errors
    #[error("{0}")]
    InvalidArguments(String),

    // Request construction errors
    #[error("Invalid instance URL '{url}'")]
    InvalidInstanceUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Instance URL '{url}' cannot carry a path")]
    InstanceNotABase { url: String },

    #[error("Invalid value for header '{header}'")]
    InvalidHeader {
        header: &'static str,
        #[source]
        source: reqwest::header::InvalidHeaderValue,
    },

    // Delivery errors
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    #[error("failed to send request to {service}, status: {status}, body: {body}")]
    HttpStatus {
        service: &'static str,
        status: String,
        body: String,
    },

    // Dry-run preview
    #[error("Failed to serialize request preview")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience type alias for Results using AppError
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Create a new argument validation error
    pub fn invalid_arguments(message: impl Into<String>) -> Self {
        Self::InvalidArguments(message.into())
    }

    /// True for errors caused by the command line rather than the remote side
    pub fn is_usage_error(&self) -> bool {
        matches!(self, Self::InvalidArguments(_))
    }

    /// Get the error category for logging
    pub fn category(&self) -> &'static str {
        match self {
            Self::InvalidArguments(_) => "cli",
            Self::InvalidInstanceUrl { .. } | Self::InstanceNotABase { .. } | Self::InvalidHeader { .. } => "config",
            Self::Transport(_) => "network",
            Self::HttpStatus { .. } => "protocol",
            Self::Serialization(_) => "serialization",
        }
    }
}

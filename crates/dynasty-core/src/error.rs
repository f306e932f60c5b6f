//! Host-level error type.
//!
//! Plugin failures never reach this type while the host is running; they are
//! isolated by the plugin manager. [`AppError`] covers what can stop a CLI
//! command: bad configuration, an unreadable plugin directory, invalid input
//! and misuse of the lifecycle API.

use std::fmt;

use thiserror::Error;

/// Category of an [`AppError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// A named plugin does not exist.
    NotFound,
    /// User input was rejected.
    InvalidInput,
    /// The request contradicts the current lifecycle state.
    Conflict,
    /// A plugin failed to load, activate or deactivate.
    Plugin,
    /// Configuration could not be assembled.
    Configuration,
    /// Filesystem access failed.
    Io,
    /// The interactive prompt failed.
    Interactive,
}

impl ErrorKind {
    /// Short label used in error messages.
    pub fn label(self) -> &'static str {
        match self {
            Self::NotFound => "not found",
            Self::InvalidInput => "invalid input",
            Self::Conflict => "conflict",
            Self::Plugin => "plugin error",
            Self::Configuration => "configuration error",
            Self::Io => "i/o error",
            Self::Interactive => "prompt error",
        }
    }

    /// Process exit code for a command that failed with this kind.
    pub fn exit_code(self) -> i32 {
        match self {
            Self::InvalidInput => 2,
            Self::NotFound | Self::Conflict | Self::Plugin => 3,
            Self::Configuration => 78,
            Self::Io => 74,
            Self::Interactive => 1,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned by host operations and CLI commands.
#[derive(Debug, Error)]
#[error("{kind}: {message}")]
pub struct AppError {
    /// Category.
    pub kind: ErrorKind,
    /// Human-readable description.
    pub message: String,
    /// Underlying cause, if any.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Creates an error without a cause.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Creates an error wrapping `source`.
    pub fn with_source(
        kind: ErrorKind,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidInput, message)
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Configuration, message)
    }

    pub fn interactive(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Interactive, message)
    }

    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        self.kind.exit_code()
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::with_source(ErrorKind::Io, err.to_string(), err)
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::with_source(ErrorKind::Configuration, err.to_string(), err)
    }
}

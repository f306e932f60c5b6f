//! Error type for plugin discovery and lifecycle operations.
//!
//! None of these errors is fatal to the host: each one is isolated to the
//! plugin, manifest or call that produced it. Misuse (`NotFound`,
//! `AlreadyActive`, `NotActive`) leaves all state untouched.

use std::path::PathBuf;

use dynasty_core::error::{AppError, ErrorKind};
use thiserror::Error;

/// Errors reported by the plugin manager and loader.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PluginError {
    // --- Caller misuse ---
    /// No plugin with this name is registered.
    #[error("Plugin '{name}' not found")]
    NotFound {
        /// Discovery name that was looked up.
        name: String,
    },

    /// The plugin is already active.
    #[error("Plugin '{name}' is already active")]
    AlreadyActive {
        /// Discovery name of the plugin.
        name: String,
    },

    /// The plugin is not active.
    #[error("Plugin '{name}' is not active")]
    NotActive {
        /// Discovery name of the plugin.
        name: String,
    },

    // --- Lifecycle failures ---
    /// The activation callback failed; the plugin stays loaded but inactive.
    #[error("Failed to activate plugin '{name}': {reason}")]
    ActivationFailed {
        /// Discovery name of the plugin.
        name: String,
        /// Failure text from the plugin.
        reason: String,
    },

    /// The deactivation callback failed; the plugin was removed anyway.
    #[error("Failed to deactivate plugin '{name}' cleanly: {reason}")]
    DeactivationFailed {
        /// Discovery name of the plugin.
        name: String,
        /// Failure text from the plugin.
        reason: String,
    },

    // --- Load failures ---
    /// The manifest has no `[DynastyPlugin]` entry point.
    #[error("Plugin '{name}' does not contain a DynastyPlugin entry ({path})")]
    MissingEntryPoint {
        /// Plugin name derived from the file.
        name: String,
        /// Manifest path.
        path: PathBuf,
    },

    /// The manifest could not be read, parsed or instantiated.
    #[error("Failed to load plugin '{name}' from {path}: {reason}")]
    LoadFailed {
        /// Plugin name derived from the file.
        name: String,
        /// Manifest path.
        path: PathBuf,
        /// Failure text.
        reason: String,
    },

    /// The manifest names a plugin kind that is not compiled in.
    #[error("Unknown plugin kind '{kind}'")]
    UnknownKind {
        /// Kind named by the manifest.
        kind: String,
    },

    /// The kind's constructor failed or panicked.
    #[error("Constructor for plugin kind '{kind}' failed: {reason}")]
    ConstructionFailed {
        /// Kind being instantiated.
        kind: String,
        /// Failure text.
        reason: String,
    },

    /// The plugin directory itself could not be listed.
    #[error("Cannot read plugin directory {path}: {reason}")]
    Directory {
        /// Directory path.
        path: PathBuf,
        /// Failure text.
        reason: String,
    },
}

impl PluginError {
    /// Returns whether this error is caller misuse rather than a plugin fault.
    pub fn is_misuse(&self) -> bool {
        matches!(
            self,
            Self::NotFound { .. } | Self::AlreadyActive { .. } | Self::NotActive { .. }
        )
    }
}

impl From<PluginError> for AppError {
    fn from(err: PluginError) -> Self {
        let kind = match &err {
            PluginError::NotFound { .. } => ErrorKind::NotFound,
            PluginError::AlreadyActive { .. } | PluginError::NotActive { .. } => {
                ErrorKind::Conflict
            }
            PluginError::Directory { .. } => ErrorKind::Io,
            _ => ErrorKind::Plugin,
        };
        AppError::with_source(kind, err.to_string(), err)
    }
}

/// Result alias for plugin operations.
pub type PluginResult<T> = Result<T, PluginError>;

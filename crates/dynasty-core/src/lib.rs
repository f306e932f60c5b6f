//! # dynasty-core
//!
//! Core crate for the Dynasty plugin host. Contains the configuration
//! schemas and the unified error system shared by the plugin framework,
//! the built-in plugins and the CLI.
//!
//! This crate has **no** internal dependencies on other Dynasty crates.

pub mod config;
pub mod error;
pub mod result;

pub use error::AppError;
pub use result::AppResult;

//! tagwm - configuration tables for a tag-based tiling window manager
//!
//! The window manager core reads the tables exposed here once at startup
//! (rules, key and button bindings, color schemes, layouts and scalar options)
//! and scans them on every input or window-map event. Built-in tables can be
//! overridden by a TOML file loaded once before the event loop starts.

pub mod cli;
pub mod config;
pub mod logging;
pub mod models;
pub mod services;

pub use config::Config;
pub use models::*;
pub use services::*;

/// Result type alias for tagwm operations
pub type Result<T> = anyhow::Result<T>;

/// Error types surfaced by the tagwm binary and core integrations
#[derive(thiserror::Error, Debug)]
pub enum TagwmError {
    #[error("Configuration error: {0}")]
    ConfigurationError(#[from] config::ConfigError),

    #[error("Invalid input: {0}")]
    InvalidInput(#[from] models::input::InputError),

    #[error("Logging error: {0}")]
    LoggingError(#[from] logging::LoggingError),

    #[error("Configuration file not found: {0}")]
    ConfigNotFound(String),
}

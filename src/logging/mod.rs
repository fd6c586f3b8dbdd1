//! Structured logging setup for the tagwm binary

use std::str::FromStr;
use thiserror::Error;
use tracing::debug;
use tracing_subscriber::{
    fmt::{self, time::UtcTime},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Layer,
};

#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("Invalid log {kind}: {value}")]
    InvalidValue { kind: &'static str, value: String },
    #[error("Unable to open log file: {0}")]
    File(#[from] std::io::Error),
    #[error("Logging already initialized: {0}")]
    AlreadyInitialized(String),
}

#[derive(Debug, Clone)]
pub struct LogConfig {
    pub level: LogLevel,
    pub format: LogFormat,
    /// Append to this file instead of writing to stderr
    pub file_path: Option<String>,
    /// Include source file and line numbers
    pub include_source: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    fn as_str(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl FromStr for LogLevel {
    type Err = LoggingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(LoggingError::InvalidValue {
                kind: "level",
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LogFormat {
    Pretty,
    Compact,
    Json,
}

impl FromStr for LogFormat {
    type Err = LoggingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pretty" => Ok(LogFormat::Pretty),
            "compact" => Ok(LogFormat::Compact),
            "json" => Ok(LogFormat::Json),
            _ => Err(LoggingError::InvalidValue {
                kind: "format",
                value: s.to_string(),
            }),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Warn,
            format: LogFormat::Compact,
            file_path: None,
            include_source: false,
        }
    }
}

impl LogConfig {
    /// Read `TAGWM_LOG_LEVEL`, `TAGWM_LOG_FORMAT`, `TAGWM_LOG_FILE` and `TAGWM_LOG_SOURCE`
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(level) = lookup("TAGWM_LOG_LEVEL").and_then(|v| v.parse().ok()) {
            config.level = level;
        }

        if let Some(format) = lookup("TAGWM_LOG_FORMAT").and_then(|v| v.parse().ok()) {
            config.format = format;
        }

        if let Some(file_path) = lookup("TAGWM_LOG_FILE") {
            config.file_path = Some(file_path);
        }

        if let Some(include_source) = lookup("TAGWM_LOG_SOURCE") {
            config.include_source = include_source.to_lowercase() == "true";
        }

        config
    }

    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }
}

/// Install the global subscriber; `RUST_LOG` overrides the configured level
pub fn init_logging(config: &LogConfig) -> Result<(), LoggingError> {
    let filter = create_filter(config);

    let layer = match &config.file_path {
        Some(path) => {
            let file = std::fs::OpenOptions::new().create(true).append(true).open(path)?;
            create_layer(config, std::sync::Mutex::new(file))
        }
        None => create_layer(config, std::io::stderr),
    };

    tracing_subscriber::registry()
        .with(layer.with_filter(filter))
        .try_init()
        .map_err(|e| LoggingError::AlreadyInitialized(e.to_string()))?;

    debug!(?config, "Logging initialized");
    Ok(())
}

fn create_filter(config: &LogConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("tagwm={}", config.level.as_str())))
}

fn create_layer<W>(config: &LogConfig, writer: W) -> Box<dyn Layer<tracing_subscriber::Registry> + Send + Sync>
where
    W: for<'w> fmt::MakeWriter<'w> + Send + Sync + 'static,
{
    let base = fmt::layer()
        .with_writer(writer)
        .with_timer(UtcTime::rfc_3339())
        .with_file(config.include_source)
        .with_line_number(config.include_source);

    match config.format {
        LogFormat::Pretty => Box::new(base.pretty()),
        LogFormat::Compact => Box::new(base.compact()),
        LogFormat::Json => Box::new(base.json()),
    }
}

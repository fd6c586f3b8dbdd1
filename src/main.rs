//! tagwm - inspect and validate the configuration tables of the window manager

use clap::Parser;
use tagwm::{
    cli::{TagwmCli, TagwmCliExecutor},
    logging::{init_logging, LogConfig, LogLevel},
    Result, TagwmError,
};
use tracing::debug;

fn main() {
    if let Err(e) = run() {
        eprintln!("tagwm: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = TagwmCli::parse();

    let mut log_config = LogConfig::from_env();
    if cli.verbose {
        log_config = log_config.with_level(LogLevel::Debug);
    }
    init_logging(&log_config).map_err(TagwmError::from)?;
    debug!("tagwm v{}", env!("CARGO_PKG_VERSION"));

    let executor = TagwmCliExecutor::from_cli(&cli)?;
    executor.execute(&cli.command)
}

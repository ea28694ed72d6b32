//! Assistant Bot - Main entry point
//!
//! Runs the interactive contact manager on stdin/stdout. Logs go to stderr.

use anyhow::Result;
use assistant_bot::{Config, Interpreter};
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration before logging so LOG_LEVEL can seed the filter
    let config = Config::from_env();
    let log_level = config
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| "error".to_string());

    // RUST_LOG wins over LOG_LEVEL
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    info!(
        "Birthday window: {} days, rule: {}",
        config.birthday_window_days, config.birthday_rule
    );

    let mut interpreter = Interpreter::new(&config);
    interpreter.run(io::stdin().lock(), io::stdout().lock())?;

    info!("Assistant bot shutdown complete");
    Ok(())
}

//! Two-player hot-seat tic-tac-toe for the terminal.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

use tictactoe_tui::{AppConfig, Cli, runtime};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load_or_default(&cli.config)?;

    // CLI flags win over the config file.
    let theme = cli.theme.unwrap_or(config.theme);
    let log_path = cli
        .log_file
        .or(config.log_file)
        .unwrap_or_else(|| PathBuf::from("tictactoe_tui.log"));

    init_tracing(&log_path)?;
    info!(theme = theme.label(), "Starting tictactoe_tui");

    runtime::run(theme)
}

/// Logs to a file so tracing output never corrupts the alternate screen.
fn init_tracing(path: &Path) -> Result<()> {
    let log_file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .init();

    Ok(())
}

//! Command-line interface.

use clap::Parser;
use std::path::PathBuf;

use crate::theme::Theme;

/// Two-player hot-seat tic-tac-toe for the terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe_tui")]
#[command(about = "Two-player hot-seat tic-tac-toe for the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the config file (optional; defaults apply when absent)
    #[arg(short, long, default_value = "tictactoe.toml")]
    pub config: PathBuf,

    /// Theme override (takes precedence over the config file)
    #[arg(long, value_enum)]
    pub theme: Option<Theme>,

    /// Log file override (takes precedence over the config file)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

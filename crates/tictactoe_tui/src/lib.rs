//! Terminal front end for two-player hot-seat tic-tac-toe.
//!
//! The game-state machine lives in `tictactoe_core`; this crate renders it
//! and feeds it user actions.
//!
//! # Architecture
//!
//! - **App**: owns the game aggregate plus presentation state (theme,
//!   cursor, field focus) and dispatches key events
//! - **Ui**: stateless projection of the app into ratatui widgets
//! - **Runtime**: terminal setup, the synchronous event loop, teardown
//! - **Cli/Config**: clap arguments layered over an optional TOML file

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod app;
pub mod cli;
pub mod config;
pub mod input;
pub mod runtime;
pub mod theme;
pub mod ui;

pub use app::{App, Signal};
pub use cli::Cli;
pub use config::{AppConfig, ConfigError};
pub use theme::{Palette, Theme};

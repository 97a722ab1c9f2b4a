//! Interactive TUI front-end
//!
//! Draws session snapshots with ratatui and turns key presses into game actions.

mod app;
mod rendering;

pub use app::{App, InputMode, Message, MessageStyle, run_tui};

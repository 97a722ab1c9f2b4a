//! Terminal output formatting
//!
//! Display utilities for line mode and plain-text rendering of snapshots.

pub mod display;
pub mod formatters;

pub use display::{print_game_over, print_snapshot};

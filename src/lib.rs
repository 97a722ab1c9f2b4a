//! Assembly Endgame
//!
//! A hangman-style word game. Every wrong letter eliminates a programming
//! language from the ladder, and when only Assembly is left the game is lost.
//!
//! # Quick Start
//!
//! ```rust
//! use assembly_endgame::core::{GameStatus, Letter, SeverityLadder};
//! use assembly_endgame::selector::{RerollPolicy, WordSelector};
//! use assembly_endgame::session::Session;
//! use assembly_endgame::wordlists::{WORDS, loader::words_from_slice};
//!
//! let mut selector =
//!     WordSelector::seeded(words_from_slice(WORDS), RerollPolicy::Strict, 1).unwrap();
//! let session = Session::start(SeverityLadder::languages(), &mut selector);
//! let session = session.guess(Letter::try_from('e').unwrap());
//!
//! let snapshot = session.snapshot();
//! if snapshot.is_farewell {
//!     println!("{}", snapshot.farewell_message().unwrap());
//! }
//! assert_eq!(snapshot.status, GameStatus::InProgress);
//! ```

// Core domain types
pub mod core;

// Target word selection
pub mod selector;

// Session state and transitions
pub mod session;

// Word corpus
pub mod wordlists;

// Line-based front-end
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Logging setup
pub mod utils;

//! Core domain types for the game
//!
//! Pure, synchronous building blocks: validated letters and words, the guess
//! set, the severity ladder, status evaluation and farewell messages.

mod error;
mod farewell;
mod guesses;
mod ladder;
mod letter;
mod status;
mod word;

pub use error::{ConfigurationError, GameError, InputError, Result, WordError};
pub use farewell::{FAREWELL_TEMPLATES, farewell_for, farewell_text, is_farewell};
pub use guesses::GuessSet;
pub use ladder::{LANGUAGES, SeverityLadder, SeverityLevel};
pub use letter::Letter;
pub use status::{GameStatus, evaluate};
pub use word::Word;

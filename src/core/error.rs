//! Error types for the game core
//!
//! Every error here is recoverable: a failed action leaves the session untouched.

use thiserror::Error;

/// Top-level error returned by core operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    #[error("Invalid input: {0}")]
    InvalidInput(#[from] InputError),

    #[error("Invalid word: {0}")]
    InvalidWord(#[from] WordError),
}

/// Problems with the corpus or ladder that make a game impossible to run
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("word corpus is empty")]
    EmptyCorpus,

    #[error("word corpus has a single entry, a different word cannot be picked")]
    SingleWordCorpus,

    #[error("severity ladder needs at least 2 levels, got {levels}")]
    LadderTooShort { levels: usize },
}

/// A guess that is not a single letter of the alphabet
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("expected a single character, got {0:?}")]
    NotSingleCharacter(String),

    #[error("expected a letter a-z, got {0:?}")]
    NotAlphabetic(char),
}

/// A corpus entry that is not a usable target word
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    #[error("word must not be empty")]
    Empty,

    #[error("word must contain only ASCII letters, got {0:?}")]
    InvalidCharacters(String),
}

pub type Result<T> = std::result::Result<T, GameError>;

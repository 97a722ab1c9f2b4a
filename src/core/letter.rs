//! Single-letter guesses
//!
//! A `Letter` is the only way a guess enters the core, so the guess set can
//! never hold anything outside `a-z`.

use super::error::InputError;
use std::fmt;

/// A lowercase ASCII letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Letter(u8);

impl Letter {
    /// Parse a guess typed by the player
    ///
    /// Surrounding whitespace is ignored and uppercase is normalized.
    ///
    /// # Errors
    /// Returns `InputError` unless the input is exactly one ASCII letter.
    ///
    /// # Examples
    /// ```
    /// use assembly_endgame::core::Letter;
    ///
    /// assert_eq!(Letter::parse("a").unwrap().as_char(), 'a');
    /// assert_eq!(Letter::parse(" Q ").unwrap().as_char(), 'q');
    /// assert!(Letter::parse("ab").is_err());
    /// assert!(Letter::parse("7").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self, InputError> {
        let trimmed = input.trim();
        let mut chars = trimmed.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => Self::try_from(ch),
            _ => Err(InputError::NotSingleCharacter(trimmed.to_string())),
        }
    }

    /// The letter as a byte in `b'a'..=b'z'`
    #[inline]
    #[must_use]
    pub const fn byte(self) -> u8 {
        self.0
    }

    #[inline]
    #[must_use]
    pub const fn as_char(self) -> char {
        self.0 as char
    }

    /// All 26 letters in alphabet order
    pub fn alphabet() -> impl Iterator<Item = Self> {
        (b'a'..=b'z').map(Self)
    }
}

impl TryFrom<char> for Letter {
    type Error = InputError;

    fn try_from(ch: char) -> Result<Self, Self::Error> {
        if ch.is_ascii_alphabetic() {
            Ok(Self(ch.to_ascii_lowercase() as u8))
        } else {
            Err(InputError::NotAlphabetic(ch))
        }
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

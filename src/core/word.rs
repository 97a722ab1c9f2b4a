//! Target word representation
//!
//! A Word stores the lowercase text along with the set of distinct letters it uses.

use super::error::WordError;
use super::letter::Letter;
use rustc_hash::FxHashSet;
use std::fmt;

/// A target word with a distinct-letter index
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
    letters: FxHashSet<u8>,
}

impl Word {
    /// Create a new Word from a string
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The text is empty after trimming
    /// - It contains anything other than ASCII letters
    ///
    /// # Examples
    /// ```
    /// use assembly_endgame::core::Word;
    ///
    /// let word = Word::new("Kettle").unwrap();
    /// assert_eq!(word.text(), "kettle");
    ///
    /// assert!(Word::new("").is_err());
    /// assert!(Word::new("r2d2").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().trim().to_lowercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.bytes().all(|b| b.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters(text));
        }

        let letters = text.bytes().collect();

        Ok(Self { text, letters })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of letters, counting repeats
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Never true for a constructed word
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Check if the word contains a letter
    #[inline]
    #[must_use]
    pub fn contains(&self, letter: Letter) -> bool {
        self.letters.contains(&letter.byte())
    }

    /// Letters of the word in order, repeats included
    pub fn letters(&self) -> impl Iterator<Item = Letter> + '_ {
        // Validated in `new`, every byte is a-z
        self.text
            .chars()
            .filter_map(|ch| Letter::try_from(ch).ok())
    }

    /// Number of distinct letters the player has to find
    #[inline]
    #[must_use]
    pub fn distinct_letters(&self) -> usize {
        self.letters.len()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

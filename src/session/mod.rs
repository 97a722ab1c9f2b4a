//! Game session
//!
//! A `Session` is an immutable value. Player actions are pure transitions that
//! return a new session, and everything the front-ends show is derived from it
//! on demand.

mod snapshot;
mod stats;

pub use snapshot::{KeyState, RevealedLetter, Snapshot};
pub use stats::Statistics;

use crate::core::{
    GameStatus, GuessSet, Letter, Result, SeverityLadder, SeverityLevel, Word, evaluate,
    farewell_for, is_farewell,
};
use crate::selector::WordSelector;
use rand::Rng;
use tracing::{debug, info};

/// One play-through, from word selection to win or loss
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    ladder: SeverityLadder,
    word: Word,
    guesses: GuessSet,
    last_guess: Option<Letter>,
}

impl Session {
    /// Start a session with a freshly picked word
    pub fn start<R: Rng>(ladder: SeverityLadder, selector: &mut WordSelector<R>) -> Self {
        let word = selector.pick_initial();
        debug!(length = word.len(), "session started");
        Self::with_word(ladder, word)
    }

    /// Start a session on a known word
    ///
    /// # Examples
    /// ```
    /// use assembly_endgame::core::{GameStatus, SeverityLadder, Word};
    /// use assembly_endgame::session::Session;
    ///
    /// let session = Session::with_word(SeverityLadder::languages(), Word::new("cat").unwrap());
    /// let session = session.guess_input("c").unwrap().guess_input("a").unwrap();
    /// assert_eq!(session.status(), GameStatus::InProgress);
    /// assert_eq!(session.guess_input("t").unwrap().status(), GameStatus::Won);
    /// ```
    #[must_use]
    pub const fn with_word(ladder: SeverityLadder, word: Word) -> Self {
        Self {
            ladder,
            word,
            guesses: GuessSet::new(),
            last_guess: None,
        }
    }

    /// Start a session on a word given as text
    ///
    /// # Errors
    /// Returns `GameError::InvalidWord` if `text` is not a usable target word.
    pub fn with_text(ladder: SeverityLadder, text: &str) -> Result<Self> {
        Ok(Self::with_word(ladder, Word::new(text)?))
    }

    /// Apply a guess
    ///
    /// Once the game is over this returns an unchanged copy, so the wrong-guess
    /// count can never pass the ladder bound.
    #[must_use]
    pub fn guess(&self, letter: Letter) -> Self {
        if self.status().is_over() {
            debug!(%letter, status = %self.status(), "guess after game over ignored");
            return self.clone();
        }

        let next = Self {
            ladder: self.ladder,
            word: self.word.clone(),
            guesses: self.guesses.record(letter),
            last_guess: Some(letter),
        };

        debug!(
            %letter,
            correct = !next.is_farewell(),
            wrong = next.wrong_guess_count(),
            "guess recorded"
        );

        match next.status() {
            GameStatus::Won => info!(word = %next.word, guesses = next.guesses.len(), "game won"),
            GameStatus::Lost => info!(word = %next.word, "game lost"),
            GameStatus::InProgress => {}
        }

        next
    }

    /// Parse and apply a typed guess
    ///
    /// # Errors
    /// Returns `GameError::InvalidInput` unless `input` is a single letter. The
    /// session is not changed in that case.
    pub fn guess_input(&self, input: &str) -> Result<Self> {
        let letter = Letter::parse(input)?;
        Ok(self.guess(letter))
    }

    /// Start over with an empty guess set and a different word
    ///
    /// Allowed at any point; offering it only after the game is over is up to
    /// the front-end.
    ///
    /// # Errors
    /// Returns `GameError::Configuration` when the selector cannot re-roll.
    pub fn new_game<R: Rng>(&self, selector: &mut WordSelector<R>) -> Result<Self> {
        let word = selector.pick_next(&self.word)?;
        debug!(length = word.len(), "new game");
        Ok(Self::with_word(self.ladder, word))
    }

    #[must_use]
    pub const fn word(&self) -> &Word {
        &self.word
    }

    #[must_use]
    pub const fn guesses(&self) -> &GuessSet {
        &self.guesses
    }

    #[must_use]
    pub const fn ladder(&self) -> &SeverityLadder {
        &self.ladder
    }

    /// The letter chosen by the most recent guess action
    #[must_use]
    pub const fn last_guess(&self) -> Option<Letter> {
        self.last_guess
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        evaluate(&self.word, &self.guesses, self.ladder.len())
    }

    #[must_use]
    pub fn wrong_guess_count(&self) -> usize {
        self.guesses.wrong_count(&self.word)
    }

    /// True when the latest guess missed
    #[must_use]
    pub fn is_farewell(&self) -> bool {
        self.last_guess
            .is_some_and(|letter| is_farewell(letter, &self.word))
    }

    /// Level the latest wrong guess said goodbye to
    #[must_use]
    pub fn farewell_level(&self) -> Option<&'static SeverityLevel> {
        if self.is_farewell() {
            farewell_for(&self.ladder, self.wrong_guess_count())
        } else {
            None
        }
    }

    /// Everything a front-end needs to draw the current state
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::of(self)
    }
}

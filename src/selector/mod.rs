//! Target word selection
//!
//! Owns the closed corpus and the random source. Re-rolls always move to a
//! different word when the corpus allows it.

use crate::core::{ConfigurationError, Word};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rustc_hash::FxHashSet;
use tracing::{debug, warn};

/// What `pick_next` does when the corpus holds a single word
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RerollPolicy {
    /// Hand back the only word again
    #[default]
    AllowRepeat,
    /// Refuse with `ConfigurationError::SingleWordCorpus`
    Strict,
}

/// Uniform random picker over a fixed corpus
pub struct WordSelector<R: Rng = StdRng> {
    corpus: Vec<Word>,
    policy: RerollPolicy,
    rng: R,
}

impl WordSelector<StdRng> {
    /// Create a selector seeded from the operating system
    ///
    /// # Errors
    /// Returns `ConfigurationError::EmptyCorpus` if `corpus` is empty.
    pub fn new(corpus: Vec<Word>, policy: RerollPolicy) -> Result<Self, ConfigurationError> {
        Self::with_rng(corpus, policy, StdRng::from_os_rng())
    }

    /// Create a selector with a fixed seed for reproducible games
    ///
    /// # Errors
    /// Returns `ConfigurationError::EmptyCorpus` if `corpus` is empty.
    ///
    /// # Examples
    /// ```
    /// use assembly_endgame::core::Word;
    /// use assembly_endgame::selector::{RerollPolicy, WordSelector};
    ///
    /// let corpus = vec![Word::new("cat").unwrap(), Word::new("dog").unwrap()];
    /// let mut selector = WordSelector::seeded(corpus, RerollPolicy::Strict, 7).unwrap();
    /// let first = selector.pick_initial();
    /// let next = selector.pick_next(&first).unwrap();
    /// assert_ne!(first, next);
    /// ```
    pub fn seeded(
        corpus: Vec<Word>,
        policy: RerollPolicy,
        seed: u64,
    ) -> Result<Self, ConfigurationError> {
        Self::with_rng(corpus, policy, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> WordSelector<R> {
    /// Create a selector with an explicit random source
    ///
    /// Duplicate entries are dropped, keeping the first occurrence.
    ///
    /// # Errors
    /// Returns `ConfigurationError::EmptyCorpus` if `corpus` is empty.
    pub fn with_rng(
        corpus: Vec<Word>,
        policy: RerollPolicy,
        rng: R,
    ) -> Result<Self, ConfigurationError> {
        let mut seen = FxHashSet::default();
        let corpus: Vec<Word> = corpus
            .into_iter()
            .filter(|word| seen.insert(word.text().to_string()))
            .collect();

        if corpus.is_empty() {
            return Err(ConfigurationError::EmptyCorpus);
        }

        debug!(words = corpus.len(), ?policy, "word selector ready");
        Ok(Self {
            corpus,
            policy,
            rng,
        })
    }

    /// Number of distinct words in the corpus
    #[must_use]
    pub fn len(&self) -> usize {
        self.corpus.len()
    }

    /// Never true; construction rejects empty corpora
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.corpus.is_empty()
    }

    #[must_use]
    pub const fn policy(&self) -> RerollPolicy {
        self.policy
    }

    /// Check at startup that `pick_next` can always succeed
    ///
    /// # Errors
    /// Returns `ConfigurationError::SingleWordCorpus` when the policy is
    /// `RerollPolicy::Strict` and fewer than two distinct words are loaded.
    pub fn ensure_rerollable(&self) -> Result<(), ConfigurationError> {
        if self.policy == RerollPolicy::Strict && self.corpus.len() < 2 {
            return Err(ConfigurationError::SingleWordCorpus);
        }
        Ok(())
    }

    /// Uniformly random word from the corpus
    pub fn pick_initial(&mut self) -> Word {
        let index = self.rng.random_range(0..self.corpus.len());
        self.corpus[index].clone()
    }

    /// Uniformly random word different from `previous`
    ///
    /// Resamples until the pick differs. A single-word corpus is handled before
    /// sampling according to the reroll policy.
    ///
    /// # Errors
    /// Returns `ConfigurationError::SingleWordCorpus` for a single-word corpus
    /// under `RerollPolicy::Strict`.
    pub fn pick_next(&mut self, previous: &Word) -> Result<Word, ConfigurationError> {
        if self.corpus.len() == 1 {
            return match self.policy {
                RerollPolicy::AllowRepeat => {
                    warn!(word = %self.corpus[0], "single-word corpus, repeating target");
                    Ok(self.corpus[0].clone())
                }
                RerollPolicy::Strict => Err(ConfigurationError::SingleWordCorpus),
            };
        }

        // Terminates: at least one other distinct word exists
        loop {
            let candidate = self.pick_initial();
            if candidate != *previous {
                return Ok(candidate);
            }
        }
    }
}

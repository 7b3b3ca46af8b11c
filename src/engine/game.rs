//! Game state for one round of the unscramble game
//!
//! A round picks an original word, shows a scramble of it, and asks the player
//! to find every dictionary word hidden in its letters.

use super::scramble::{rescramble, scramble};
use super::subwords::{DEFAULT_MIN_LENGTH, sub_words};
use crate::core::{Dictionary, has_single_letter, normalize};
use log::debug;
use rand::Rng;
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

/// Shortest original word a round may use
pub const MIN_WORD_LENGTH: usize = 3;

/// Length of the original word used by the game
pub const DEFAULT_WORD_LENGTH: usize = 6;

/// Parameters for creating a round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Length of the original word
    pub length: usize,
    /// Minimum sub-word length; [`DEFAULT_MIN_LENGTH`] when `None`
    pub min_length: Option<usize>,
}

impl GameConfig {
    #[must_use]
    pub const fn new(length: usize, min_length: Option<usize>) -> Self {
        Self { length, min_length }
    }

    /// Check the parameters and resolve the minimum sub-word length
    ///
    /// # Errors
    ///
    /// Returns a configuration [`GameError`] if `length` is below
    /// [`MIN_WORD_LENGTH`], `min_length` is zero, or `min_length` exceeds
    /// `length`.
    pub fn validate(&self) -> Result<usize, GameError> {
        let min_length = self.min_length.unwrap_or(DEFAULT_MIN_LENGTH);
        if min_length == 0 {
            return Err(GameError::InvalidMinLength(min_length));
        }
        if self.length < MIN_WORD_LENGTH {
            return Err(GameError::InvalidLength(self.length));
        }
        if min_length > self.length {
            return Err(GameError::MinLengthExceedsLength {
                min_length,
                length: self.length,
            });
        }
        Ok(min_length)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(DEFAULT_WORD_LENGTH, Some(DEFAULT_MIN_LENGTH))
    }
}

/// Error raised when a round cannot be created
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("Invalid length=[{0}], expect greater than or equals {min}", min = MIN_WORD_LENGTH)]
    InvalidLength(usize),

    #[error("Invalid minLength=[{0}], expect positive integer")]
    InvalidMinLength(usize),

    #[error("Expect minLength=[{min_length}] not greater than length=[{length}]")]
    MinLengthExceedsLength { min_length: usize, length: usize },

    #[error("Cannot find a word of length {0} to create game state")]
    NoWordAvailable(usize),
}

impl GameError {
    /// True for errors caused by invalid parameters rather than the dictionary
    #[must_use]
    pub const fn is_configuration(&self) -> bool {
        !matches!(self, Self::NoWordAvailable(_))
    }
}

/// Result of checking a single guess against a round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// A sub-word found for the first time
    Correct,
    /// A sub-word that was already found; nothing changes
    AlreadyGuessed,
    /// Shorter than the round's minimum sub-word length
    TooShort,
    /// Not one of the round's sub-words
    Incorrect,
}

/// Progress of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Complete,
}

/// State of one round
///
/// `sub_words` maps each hidden word to whether it has been found. Its keys are
/// fixed at creation; guessing only flips flags, so the total never changes
/// and the round can only move from in-progress to complete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    original: String,
    scramble: String,
    min_length: usize,
    sub_words: BTreeMap<String, bool>,
}

impl GameState {
    /// Start a new round
    ///
    /// Picks a random word of `config.length` letters, scrambles it, and
    /// collects its sub-words, none of them found yet. Words of one repeated
    /// letter are never picked.
    ///
    /// # Errors
    ///
    /// Returns a configuration [`GameError`] for invalid parameters (see
    /// [`GameConfig::validate`]) and [`GameError::NoWordAvailable`] when the
    /// dictionary has no usable word of the requested length.
    pub fn create<R: Rng + ?Sized>(
        dict: &Dictionary,
        config: &GameConfig,
        rng: &mut R,
    ) -> Result<Self, GameError> {
        let min_length = config.validate()?;

        // A word of one repeated letter has no scramble distinct from itself
        let original = dict
            .random_word_where(config.length, rng, |word| !has_single_letter(word))
            .ok_or(GameError::NoWordAvailable(config.length))?
            .to_string();
        let scramble = scramble(&original, rng);
        let sub_words: BTreeMap<String, bool> = sub_words(dict, &original, Some(min_length))
            .into_iter()
            .map(|word| (word, false))
            .collect();

        debug!(
            "Created round '{original}' ({scramble}) with {} sub-words",
            sub_words.len()
        );

        Ok(Self {
            original,
            scramble,
            min_length,
            sub_words,
        })
    }

    /// Assemble a round from known parts
    ///
    /// The caller is responsible for `scramble` and `sub_words` being
    /// consistent with `original`.
    pub fn from_parts<I, S>(original: &str, scramble: &str, min_length: usize, sub_words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            original: normalize(original),
            scramble: normalize(scramble),
            min_length,
            sub_words: sub_words
                .into_iter()
                .map(|word| (normalize(word.as_ref()), false))
                .collect(),
        }
    }

    /// The word the round was built from
    #[inline]
    #[must_use]
    pub fn original(&self) -> &str {
        &self.original
    }

    /// The letter ordering currently shown
    #[inline]
    #[must_use]
    pub fn scramble(&self) -> &str {
        &self.scramble
    }

    /// Minimum length of a sub-word in this round
    #[inline]
    #[must_use]
    pub const fn min_length(&self) -> usize {
        self.min_length
    }

    /// All sub-words with their found flag, in alphabetical order
    pub fn sub_words(&self) -> impl Iterator<Item = (&str, bool)> {
        self.sub_words.iter().map(|(word, &found)| (word.as_str(), found))
    }

    /// Number of sub-words in the round
    #[inline]
    #[must_use]
    pub fn total_words(&self) -> usize {
        self.sub_words.len()
    }

    /// Number of sub-words found so far
    #[must_use]
    pub fn guessed_count(&self) -> usize {
        self.sub_words.values().filter(|&&found| found).count()
    }

    /// Number of sub-words still hidden
    #[must_use]
    pub fn remaining_words(&self) -> usize {
        self.total_words() - self.guessed_count()
    }

    /// Sub-words found so far, shortest first, then alphabetically
    #[must_use]
    pub fn guessed_words(&self) -> Vec<&str> {
        let mut words: Vec<&str> = self
            .sub_words
            .iter()
            .filter(|&(_, &found)| found)
            .map(|(word, _)| word.as_str())
            .collect();
        words.sort_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.cmp(b)));
        words
    }

    /// Whether `word` is a sub-word that has already been found
    #[must_use]
    pub fn is_guessed(&self, word: &str) -> bool {
        self.sub_words.get(&normalize(word)).copied().unwrap_or(false)
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        if self.remaining_words() == 0 {
            GameStatus::Complete
        } else {
            GameStatus::InProgress
        }
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.status() == GameStatus::Complete
    }

    /// Check a guess and record it if it is a new sub-word
    ///
    /// The candidate is trimmed and lower-cased first. A repeated correct guess
    /// is reported as [`GuessOutcome::AlreadyGuessed`] and changes nothing.
    pub fn guess(&mut self, candidate: &str) -> GuessOutcome {
        let candidate = normalize(candidate);
        if candidate.len() < self.min_length {
            return GuessOutcome::TooShort;
        }
        match self.sub_words.get_mut(&candidate) {
            Some(found) if *found => GuessOutcome::AlreadyGuessed,
            Some(found) => {
                *found = true;
                GuessOutcome::Correct
            }
            None => GuessOutcome::Incorrect,
        }
    }

    /// Mark `candidate` as found
    ///
    /// Returns `true` only when a sub-word is newly marked; unknown words and
    /// repeats return `false` and leave the round unchanged.
    pub fn update_guess_word(&mut self, candidate: &str) -> bool {
        self.guess(candidate) == GuessOutcome::Correct
    }

    /// Replace the scramble with a fresh one, avoiding the current one if possible
    pub fn rescramble<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.scramble = rescramble(&self.original, &self.scramble, rng);
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "original=[{}], scramble=[{}], guessed=[{}/{}]",
            self.original,
            self.scramble,
            self.guessed_count(),
            self.total_words()
        )
    }
}

//! Session-scoped game board
//!
//! Holds at most one round for a single player, without any session id. The
//! interactive front ends drive it directly: start a round, rescramble, guess,
//! and say goodbye to discard the round.

use super::game::{GameConfig, GameError, GameState, GuessOutcome};
use crate::core::{Dictionary, normalize};
use log::{debug, info};
use rand::rngs::StdRng;
use std::fmt;

/// Feedback for a single guess on the board
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardFeedback {
    /// No round is in progress
    NoGame,
    /// Guess shorter than the round minimum
    TooShort { min_length: usize },
    /// Sub-word was already found
    AlreadyGuessed,
    /// Not a sub-word of the round
    Incorrect,
    /// New sub-word found, more remain
    Correct { remaining: usize },
    /// New sub-word found and it was the last one
    Complete,
}

impl BoardFeedback {
    /// True when the guess found a new sub-word
    #[must_use]
    pub const fn is_correct(&self) -> bool {
        matches!(self, Self::Correct { .. } | Self::Complete)
    }
}

impl fmt::Display for BoardFeedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoGame => write!(f, "No game in progress. Start a new game."),
            Self::TooShort { min_length } => {
                write!(f, "Must be at least {min_length} characters.")
            }
            Self::AlreadyGuessed => write!(f, "You already guessed this word."),
            Self::Incorrect => write!(f, "Guessed incorrectly."),
            Self::Correct { remaining } => {
                write!(f, "Guessed correctly. {remaining} words remaining.")
            }
            Self::Complete => write!(f, "All words guessed."),
        }
    }
}

/// A single player's board
pub struct GameBoard<'a> {
    dict: &'a Dictionary,
    config: GameConfig,
    rng: StdRng,
    state: Option<GameState>,
}

impl<'a> GameBoard<'a> {
    #[must_use]
    pub const fn new(dict: &'a Dictionary, config: GameConfig, rng: StdRng) -> Self {
        Self {
            dict,
            config,
            rng,
            state: None,
        }
    }

    /// The round in progress, if any
    #[inline]
    #[must_use]
    pub const fn state(&self) -> Option<&GameState> {
        self.state.as_ref()
    }

    #[inline]
    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Replace the current round with a new one
    ///
    /// # Errors
    ///
    /// Returns [`GameError`] if the board's configuration is invalid or the
    /// dictionary has no suitable word; the previous round is kept in that case.
    pub fn new_game(&mut self) -> Result<&GameState, GameError> {
        let state = GameState::create(self.dict, &self.config, &mut self.rng)?;
        info!("New round with {} sub-words", state.total_words());
        Ok(self.state.insert(state))
    }

    /// Show a different scramble of the current round
    ///
    /// Returns `false` when there is no round.
    pub fn rescramble(&mut self) -> bool {
        match self.state.as_mut() {
            Some(state) => {
                state.rescramble(&mut self.rng);
                true
            }
            None => false,
        }
    }

    /// Submit a guess
    ///
    /// The scramble is refreshed on every submission, right or wrong.
    pub fn guess(&mut self, word: &str) -> BoardFeedback {
        let Some(state) = self.state.as_mut() else {
            return BoardFeedback::NoGame;
        };
        state.rescramble(&mut self.rng);

        let word = normalize(word);
        debug!("Player guessed word: {word}");

        match state.guess(&word) {
            GuessOutcome::TooShort => BoardFeedback::TooShort {
                min_length: state.min_length(),
            },
            GuessOutcome::AlreadyGuessed => BoardFeedback::AlreadyGuessed,
            GuessOutcome::Incorrect => BoardFeedback::Incorrect,
            GuessOutcome::Correct if state.is_complete() => {
                info!("Player guessed all words.");
                BoardFeedback::Complete
            }
            GuessOutcome::Correct => BoardFeedback::Correct {
                remaining: state.remaining_words(),
            },
        }
    }

    /// Discard the current round
    pub fn goodbye(&mut self) {
        if self.state.take().is_some() {
            debug!("Round discarded");
        }
    }
}

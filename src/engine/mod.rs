//! Word game engine
//!
//! Sub-word generation, scrambling, and the state of a single game round.

mod board;
mod game;
mod scramble;
mod subwords;

pub use board::{BoardFeedback, GameBoard};
pub use game::{
    DEFAULT_WORD_LENGTH, GameConfig, GameError, GameState, GameStatus, GuessOutcome,
    MIN_WORD_LENGTH,
};
pub use scramble::{MAX_SHUFFLE_ATTEMPTS, RESCRAMBLE_ATTEMPTS, rescramble, scramble};
pub use subwords::{
    DEFAULT_MIN_LENGTH, PERMUTATION_LIMIT, distinct_arrangements, sub_words,
    sub_words_by_permutation, sub_words_by_scan,
};

//! Jumble
//!
//! A word-unscramble game engine: a dictionary index, a sub-word generator,
//! a scrambler, game rounds, and a concurrent session store.
//!
//! # Quick Start
//!
//! ```rust
//! use jumble::engine::{GameConfig, GameState, GuessOutcome};
//! use jumble::wordlists::embedded_dictionary;
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let dict = embedded_dictionary();
//! let mut rng = StdRng::seed_from_u64(7);
//! let mut game = GameState::create(&dict, &GameConfig::default(), &mut rng).unwrap();
//!
//! println!("Unscramble: {}", game.scramble());
//! assert_eq!(game.guess("zzzzzz"), GuessOutcome::Incorrect);
//! ```

// Core domain types
pub mod core;

// Sub-words, scrambling and game rounds
pub mod engine;

// Concurrent session store and game service
pub mod session;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

pub mod log;

//! Core domain types for the word engine
//!
//! Word normalization rules and the read-only dictionary index. Everything here
//! is pure and safe to share across threads.

mod dictionary;
mod word;

pub use dictionary::Dictionary;
pub use word::{LetterCounts, has_single_letter, is_letters, normalize};

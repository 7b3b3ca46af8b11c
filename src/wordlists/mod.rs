//! Word lists for the engine
//!
//! Provides the embedded default dictionary and loading of custom word lists.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};
pub use loader::{LoadError, embedded_dictionary, load_dictionary, load_from_file};

/// Logical name of the default word list resource
pub const DEFAULT_SOURCE: &str = "words.txt";

//! Word list loading utilities
//!
//! Builds a [`Dictionary`] from the embedded list or from a newline-delimited
//! file. A dictionary that cannot be loaded is fatal: nothing else in the engine
//! works without one.

use super::embedded::WORDS;
use crate::core::Dictionary;
use log::info;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Source name that selects the embedded dictionary
pub const EMBEDDED: &str = "embedded";

/// Error raised when a word list cannot be turned into a dictionary
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("word list not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read word list {}: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("word list {} contains no usable words", path.display())]
    Empty { path: PathBuf },
}

/// Load a dictionary from a newline-delimited file
///
/// Lines are trimmed and lower-cased; blank lines are skipped.
///
/// # Errors
///
/// Returns [`LoadError::NotFound`] if the file does not exist,
/// [`LoadError::Unreadable`] for any other I/O failure, and
/// [`LoadError::Empty`] if no line holds a usable word.
///
/// # Examples
/// ```no_run
/// use jumble::wordlists::load_from_file;
///
/// let dict = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", dict.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Dictionary, LoadError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            LoadError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            LoadError::Unreadable {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    let dictionary = Dictionary::from_words(content.lines());
    if dictionary.is_empty() {
        return Err(LoadError::Empty {
            path: path.to_path_buf(),
        });
    }

    info!("Loaded {} words from {}", dictionary.len(), path.display());
    Ok(dictionary)
}

/// Build the dictionary compiled into the binary
#[must_use]
pub fn embedded_dictionary() -> Dictionary {
    let dictionary = Dictionary::from_words(WORDS);
    info!(
        "Loaded {} words from embedded {}",
        dictionary.len(),
        super::DEFAULT_SOURCE
    );
    dictionary
}

/// Resolve a dictionary source: `"embedded"` or a file path
///
/// # Errors
///
/// Propagates [`LoadError`] from [`load_from_file`].
pub fn load_dictionary(source: &str) -> Result<Dictionary, LoadError> {
    if source == EMBEDDED {
        Ok(embedded_dictionary())
    } else {
        load_from_file(source)
    }
}

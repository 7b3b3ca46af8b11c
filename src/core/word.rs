//! Word normalization and letter multisets
//!
//! Words in the engine are plain lower-case ASCII strings. This module holds the
//! shared rules for turning raw input into that form.

use std::fmt;

/// Normalize raw input: trim surrounding whitespace and lower-case it
///
/// # Examples
/// ```
/// use jumble::core::normalize;
///
/// assert_eq!(normalize("  Eye "), "eye");
/// ```
#[must_use]
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Check that `word` is non-empty and made only of ASCII letters
///
/// Surrounding whitespace is not trimmed; `" abc"` is rejected.
#[inline]
#[must_use]
pub fn is_letters(word: &str) -> bool {
    !word.is_empty() && word.bytes().all(|b| b.is_ascii_alphabetic())
}

/// Check whether every letter of `word` is the same (`"aaa"`, `"zz"`)
///
/// Such words have exactly one arrangement, so they cannot be scrambled.
#[must_use]
pub fn has_single_letter(word: &str) -> bool {
    let mut chars = word.chars();
    chars
        .next()
        .is_none_or(|first| chars.all(|c| c == first))
}

/// Letter counts of a lower-case word, `a` through `z`
///
/// Used to decide whether one word can be spelled from another's letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LetterCounts([u8; 26]);

impl LetterCounts {
    /// Count the letters of `word`
    ///
    /// Returns `None` if `word` contains anything other than `a`..=`z`.
    #[must_use]
    pub fn of(word: &str) -> Option<Self> {
        let mut counts = [0u8; 26];
        for b in word.bytes() {
            if !b.is_ascii_lowercase() {
                return None;
            }
            let slot = &mut counts[usize::from(b - b'a')];
            *slot = slot.saturating_add(1);
        }
        Some(Self(counts))
    }

    /// True if every letter in `self` is available in `other`
    #[inline]
    #[must_use]
    pub fn fits_within(&self, other: &Self) -> bool {
        self.0.iter().zip(other.0.iter()).all(|(mine, theirs)| mine <= theirs)
    }

    /// Number of occurrences of `letter`
    #[inline]
    #[must_use]
    pub fn count(&self, letter: u8) -> u8 {
        if letter.is_ascii_lowercase() {
            self.0[usize::from(letter - b'a')]
        } else {
            0
        }
    }

    /// Total number of letters
    #[must_use]
    pub fn total(&self) -> usize {
        self.0.iter().map(|&n| usize::from(n)).sum()
    }
}

impl fmt::Display for LetterCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (letter, &n) in (b'a'..=b'z').zip(self.0.iter()) {
            for _ in 0..n {
                write!(f, "{}", char::from(letter))?;
            }
        }
        Ok(())
    }
}

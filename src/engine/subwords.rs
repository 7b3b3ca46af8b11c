//! Sub-word generation
//!
//! Finds every dictionary word that can be spelled from a subset of another
//! word's letters. Two strategies produce the same set:
//!
//! - **Permutation**: enumerate the distinct arrangements of the letters for each
//!   target length and keep those the dictionary confirms. Cost grows
//!   factorially with word length.
//! - **Scan**: walk the dictionary once and keep words whose letter multiset fits
//!   inside the source word's. Cost is linear in dictionary size.
//!
//! [`sub_words`] picks permutation for short words and scan above
//! [`PERMUTATION_LIMIT`], so long inputs never blow up.

use crate::core::{Dictionary, LetterCounts, is_letters};
use rayon::prelude::*;
use std::collections::BTreeSet;

/// Minimum sub-word length when none is given
pub const DEFAULT_MIN_LENGTH: usize = 3;

/// Longest word that is expanded by permutation
pub const PERMUTATION_LIMIT: usize = 8;

/// All dictionary words spelled from a subset of `word`'s letters
///
/// `word` must be non-empty and letters-only; it is compared case-insensitively.
/// `min_length` defaults to [`DEFAULT_MIN_LENGTH`]. The result never contains
/// `word` itself. Invalid input (bad word, `min_length` of zero, or a word
/// shorter than `min_length`) yields an empty set.
///
/// # Examples
/// ```
/// use jumble::core::Dictionary;
/// use jumble::engine::sub_words;
///
/// let dict = Dictionary::from_words(["yellow", "yell", "owl", "lye", "eel"]);
/// let found: Vec<String> = sub_words(&dict, "Yellow", None).into_iter().collect();
/// assert_eq!(found, ["lye", "owl", "yell"]);
/// ```
#[must_use]
pub fn sub_words(dict: &Dictionary, word: &str, min_length: Option<usize>) -> BTreeSet<String> {
    let min_length = min_length.unwrap_or(DEFAULT_MIN_LENGTH);
    if !is_letters(word) || min_length < 1 || word.len() < min_length {
        return BTreeSet::new();
    }

    let word = word.to_ascii_lowercase();
    if word.len() <= PERMUTATION_LIMIT {
        sub_words_by_permutation(dict, &word, min_length)
    } else {
        sub_words_by_scan(dict, &word, min_length)
    }
}

/// Permutation strategy over a lower-case, letters-only `word`
///
/// Each target length is expanded in parallel.
#[must_use]
pub fn sub_words_by_permutation(
    dict: &Dictionary,
    word: &str,
    min_length: usize,
) -> BTreeSet<String> {
    let mut letters = word.as_bytes().to_vec();
    letters.sort_unstable();

    (min_length.max(1)..=letters.len())
        .into_par_iter()
        .flat_map_iter(|len| distinct_arrangements(&letters, len))
        .filter(|candidate| candidate != word && dict.contains_normalized(candidate))
        .collect()
}

/// Scan strategy over a lower-case, letters-only `word`
#[must_use]
pub fn sub_words_by_scan(dict: &Dictionary, word: &str, min_length: usize) -> BTreeSet<String> {
    let Some(pool) = LetterCounts::of(word) else {
        return BTreeSet::new();
    };
    let max_length = word.len();

    dict.as_slice()
        .par_iter()
        .filter(|candidate| (min_length..=max_length).contains(&candidate.len()))
        .filter(|candidate| candidate.as_str() != word)
        .filter(|candidate| LetterCounts::of(candidate).is_some_and(|c| c.fits_within(&pool)))
        .cloned()
        .collect()
}

/// Every distinct arrangement of `length` letters drawn from `letters`
///
/// `letters` must be sorted. Repeated letters never produce repeated
/// arrangements: among equal letters, a later one is only placed once the
/// earlier one is already in use.
#[must_use]
pub fn distinct_arrangements(letters: &[u8], length: usize) -> Vec<String> {
    let mut out = Vec::new();
    if length == 0 || length > letters.len() {
        return out;
    }

    let mut used = vec![false; letters.len()];
    let mut current = Vec::with_capacity(length);
    arrange(letters, &mut used, &mut current, length, &mut out);
    out
}

fn arrange(
    letters: &[u8],
    used: &mut [bool],
    current: &mut Vec<u8>,
    target: usize,
    out: &mut Vec<String>,
) {
    if current.len() == target {
        out.push(current.iter().map(|&b| char::from(b)).collect());
        return;
    }

    for i in 0..letters.len() {
        if used[i] || (i > 0 && letters[i] == letters[i - 1] && !used[i - 1]) {
            continue;
        }

        used[i] = true;
        current.push(letters[i]);
        arrange(letters, used, current, target, out);
        current.pop();
        used[i] = false;
    }
}

//! Dictionary index
//!
//! An immutable, indexed word set built once at startup. Every query is a
//! read-only operation, so a single `Dictionary` can be shared by any number of
//! threads behind an `Arc` (or a plain reference) without locking.

use super::word::{is_letters, normalize};
use log::debug;
use rand::Rng;
use rand::seq::IndexedRandom;
use rayon::prelude::*;
use rustc_hash::{FxHashMap, FxHashSet};

/// Indexed, read-only word list
///
/// Holds three views of the same words:
/// - a hash set for O(1) membership,
/// - a sorted vector so prefix queries are a binary-searched range,
/// - a length index so uniform sampling by length needs no scan.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: FxHashSet<String>,
    sorted: Vec<String>,
    by_length: FxHashMap<usize, Vec<usize>>,
}

impl Dictionary {
    /// Build a dictionary from raw entries
    ///
    /// Each entry is trimmed and lower-cased. Blank entries and entries with
    /// anything other than ASCII letters are discarded; duplicates collapse.
    ///
    /// # Examples
    /// ```
    /// use jumble::core::Dictionary;
    ///
    /// let dict = Dictionary::from_words(["Eye", " level ", "", "eye"]);
    /// assert_eq!(dict.len(), 2);
    /// assert!(dict.exists("EYE"));
    /// ```
    pub fn from_words<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut words = FxHashSet::default();
        let mut rejected = 0usize;

        for entry in entries {
            let word = normalize(entry.as_ref());
            if word.is_empty() {
                continue;
            }
            if is_letters(&word) {
                words.insert(word);
            } else {
                rejected += 1;
            }
        }

        if rejected > 0 {
            debug!("Discarded {rejected} dictionary entries with non-letter characters");
        }

        let mut sorted: Vec<String> = words.iter().cloned().collect();
        sorted.sort_unstable();

        let mut by_length: FxHashMap<usize, Vec<usize>> = FxHashMap::default();
        for (idx, word) in sorted.iter().enumerate() {
            by_length.entry(word.len()).or_default().push(idx);
        }

        Self {
            words,
            sorted,
            by_length,
        }
    }

    /// Number of distinct words
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.sorted.len()
    }

    /// True if the dictionary holds no words
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sorted.is_empty()
    }

    /// All words in ascending order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.sorted.iter().map(String::as_str)
    }

    /// Exact lookup on an already-normalized word
    #[inline]
    pub(crate) fn contains_normalized(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Sorted slice of every word, for parallel scans
    pub(crate) fn as_slice(&self) -> &[String] {
        &self.sorted
    }

    /// Check whether `word` is in the dictionary
    ///
    /// Matching is case-insensitive and ignores surrounding whitespace. Blank
    /// input is simply absent, never an error.
    #[must_use]
    pub fn exists(&self, word: &str) -> bool {
        let word = normalize(word);
        !word.is_empty() && self.words.contains(&word)
    }

    /// All words beginning with `prefix`, case-insensitively
    ///
    /// `prefix` must be non-empty and made only of letters; anything else
    /// yields an empty result.
    #[must_use]
    pub fn words_with_prefix(&self, prefix: &str) -> Vec<&str> {
        if !is_letters(prefix) {
            return Vec::new();
        }
        let prefix = prefix.to_ascii_lowercase();
        self.prefix_range(&prefix).iter().map(String::as_str).collect()
    }

    /// Search by first letter, last letter and length
    ///
    /// Each filter is optional. A letter filter only counts when it is an ASCII
    /// letter, a length filter only when it is positive; invalid filters are
    /// ignored. Accented letters such as `'é'` are invalid here, since the
    /// dictionary holds ASCII words only. If no filter is usable the result is empty. Otherwise a word must
    /// satisfy every usable filter.
    #[must_use]
    pub fn search(
        &self,
        start_char: Option<char>,
        end_char: Option<char>,
        length: Option<usize>,
    ) -> Vec<&str> {
        let start = valid_letter(start_char);
        let end = valid_letter(end_char);
        let length = length.filter(|&len| len > 0);

        if start.is_none() && end.is_none() && length.is_none() {
            return Vec::new();
        }

        let pool = match start {
            Some(first) => self.prefix_range(&first.to_string()),
            None => &self.sorted[..],
        };

        pool.par_iter()
            .filter(|word| end.is_none_or(|last| word.ends_with(last)))
            .filter(|word| length.is_none_or(|len| word.len() == len))
            .map(String::as_str)
            .collect()
    }

    /// Pick a word uniformly at random
    ///
    /// With `Some(length)` the pick is uniform over words of exactly that
    /// length; with `None` it is uniform over the whole dictionary. Returns
    /// `None` when there is nothing to pick from.
    pub fn random_word_of_length<R: Rng + ?Sized>(
        &self,
        length: Option<usize>,
        rng: &mut R,
    ) -> Option<&str> {
        match length {
            Some(len) => self
                .by_length
                .get(&len)
                .and_then(|indices| indices.choose(rng))
                .map(|&idx| self.sorted[idx].as_str()),
            None => self.sorted.choose(rng).map(String::as_str),
        }
    }

    /// Pick a word of exactly `length` letters for which `keep` holds
    ///
    /// Uniform over the matching words; `None` when none match.
    pub fn random_word_where<R, F>(&self, length: usize, rng: &mut R, keep: F) -> Option<&str>
    where
        R: Rng + ?Sized,
        F: Fn(&str) -> bool,
    {
        let candidates: Vec<&str> = self
            .by_length
            .get(&length)?
            .iter()
            .map(|&idx| self.sorted[idx].as_str())
            .filter(|word| keep(word))
            .collect();
        candidates.choose(rng).copied()
    }

    /// Number of words with exactly `length` letters
    #[must_use]
    pub fn count_of_length(&self, length: usize) -> usize {
        self.by_length.get(&length).map_or(0, Vec::len)
    }

    /// Words longer than one letter that read the same reversed
    #[must_use]
    pub fn palindromes(&self) -> Vec<&str> {
        self.sorted
            .par_iter()
            .filter(|word| word.len() > 1 && word.bytes().eq(word.bytes().rev()))
            .map(String::as_str)
            .collect()
    }

    /// Contiguous run of sorted words starting with a lower-case `prefix`
    fn prefix_range(&self, prefix: &str) -> &[String] {
        let start = self.sorted.partition_point(|w| w.as_str() < prefix);
        let len = self.sorted[start..]
            .iter()
            .take_while(|w| w.starts_with(prefix))
            .count();
        &self.sorted[start..start + len]
    }
}

/// Usable search filter letter
///
/// Only ASCII letters count. Anything else, accented letters included, is
/// treated as no filter at all.
fn valid_letter(c: Option<char>) -> Option<char> {
    c.filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn sample() -> Dictionary {
        Dictionary::from_words([
            "eye", "deed", "level", "noon", "a", "yellow", "yell", "yew", "low", "owl", "apple",
            "apply", "ape", "Abacus", "zebra", "exile",
        ])
    }

    #[test]
    fn from_words_normalizes_and_filters() {
        let dict = Dictionary::from_words(["  Hello ", "WORLD", "", "   ", "it's", "x1", "hello"]);
        assert_eq!(dict.len(), 2);
        assert_eq!(dict.iter().collect::<Vec<_>>(), vec!["hello", "world"]);
    }

    #[test]
    fn exists_is_case_insensitive_and_trims() {
        let dict = sample();
        assert!(dict.exists("eye"));
        assert!(dict.exists(" Eye "));
        assert!(dict.exists("ABACUS"));
        assert_eq!(dict.exists(" Eye "), dict.exists("eye"));
        assert!(!dict.exists("eyes"));
    }

    #[test]
    fn exists_blank_is_false() {
        let dict = sample();
        assert!(!dict.exists(""));
        assert!(!dict.exists("   "));
    }

    #[test]
    fn prefix_matches_case_insensitively() {
        let dict = sample();
        assert_eq!(dict.words_with_prefix("ap"), vec!["ape", "apple", "apply"]);
        assert_eq!(dict.words_with_prefix("APP"), vec!["apple", "apply"]);
        assert_eq!(dict.words_with_prefix("yellow"), vec!["yellow"]);
        assert!(dict.words_with_prefix("q").is_empty());
    }

    #[test]
    fn prefix_invalid_is_empty() {
        let dict = sample();
        assert!(dict.words_with_prefix("").is_empty());
        assert!(dict.words_with_prefix("  ").is_empty());
        assert!(dict.words_with_prefix("a1").is_empty());
        assert!(dict.words_with_prefix("a-").is_empty());
    }

    #[test]
    fn prefix_results_start_with_prefix() {
        let dict = sample();
        for prefix in ["a", "Ye", "l", "EX"] {
            let lower = prefix.to_ascii_lowercase();
            for word in dict.words_with_prefix(prefix) {
                assert!(word.starts_with(&lower), "{word} does not start with {lower}");
            }
        }
    }

    #[test]
    fn search_requires_one_valid_filter() {
        let dict = sample();
        assert!(dict.search(None, None, None).is_empty());
        assert!(dict.search(Some('1'), Some(' '), Some(0)).is_empty());
    }

    #[test]
    fn search_ignores_invalid_filters() {
        let dict = sample();
        // Invalid end char is dropped; start char still applies
        assert_eq!(dict.search(Some('Y'), Some('?'), None), vec!["yell", "yellow", "yew"]);
    }

    #[test]
    fn search_combines_filters() {
        let dict = sample();
        assert_eq!(dict.search(Some('a'), Some('e'), None), vec!["ape", "apple"]);
        assert_eq!(dict.search(Some('a'), Some('e'), Some(5)), vec!["apple"]);
        assert_eq!(dict.search(None, Some('l'), None), vec!["level", "owl", "yell"]);
        assert_eq!(dict.search(None, None, Some(4)), vec!["deed", "noon", "yell"]);
    }

    #[test]
    fn search_ignores_non_ascii_letters() {
        let dict = sample();
        assert!(dict.search(Some('é'), None, None).is_empty());
        assert_eq!(
            dict.search(Some('é'), None, Some(3)),
            dict.search(None, None, Some(3))
        );
    }

    #[test]
    fn search_results_satisfy_constraints() {
        let dict = sample();
        for word in dict.search(Some('e'), None, Some(3)) {
            assert!(word.starts_with('e'));
            assert_eq!(word.len(), 3);
        }
    }

    #[test]
    fn search_is_idempotent() {
        let dict = sample();
        let first = dict.search(None, Some('e'), None);
        let second = dict.search(None, Some('e'), None);
        assert_eq!(first, second);
    }

    #[test]
    fn random_word_respects_length() {
        let dict = sample();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let word = dict.random_word_of_length(Some(4), &mut rng).unwrap();
            assert_eq!(word.len(), 4);
        }
        assert!(dict.random_word_of_length(Some(42), &mut rng).is_none());
    }

    #[test]
    fn random_word_with_filter() {
        let dict = Dictionary::from_words(["aaaa", "bbbb", "yell", "owl"]);
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..20 {
            let word = dict.random_word_where(4, &mut rng, |w| !w.starts_with(['a', 'b']));
            assert_eq!(word, Some("yell"));
        }
        assert!(dict.random_word_where(4, &mut rng, |_| false).is_none());
        assert!(dict.random_word_where(9, &mut rng, |_| true).is_none());
    }

    #[test]
    fn random_word_any_length() {
        let dict = sample();
        let mut rng = StdRng::seed_from_u64(11);
        let word = dict.random_word_of_length(None, &mut rng).unwrap();
        assert!(dict.exists(word));

        let empty = Dictionary::default();
        assert!(empty.random_word_of_length(None, &mut rng).is_none());
    }

    #[test]
    fn random_word_covers_all_candidates() {
        let dict = sample();
        let mut rng = StdRng::seed_from_u64(3);
        let mut seen = FxHashSet::default();
        for _ in 0..200 {
            seen.insert(dict.random_word_of_length(Some(4), &mut rng).unwrap());
        }
        assert_eq!(seen.len(), dict.count_of_length(4));
    }

    #[test]
    fn palindromes_excludes_single_letters() {
        let dict = sample();
        assert_eq!(dict.palindromes(), vec!["deed", "eye", "level", "noon"]);
    }
}

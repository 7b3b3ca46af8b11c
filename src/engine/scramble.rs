//! Letter scrambling
//!
//! Produces random reorderings of a word that differ from the word itself.

use crate::core::has_single_letter;
use log::{debug, warn};
use rand::Rng;
use rand::seq::SliceRandom;

/// Shuffles tried before falling back to a rotation
pub const MAX_SHUFFLE_ATTEMPTS: usize = 64;

/// Scrambles tried when the result must also differ from a previous scramble
pub const RESCRAMBLE_ATTEMPTS: usize = 10;

/// Randomly reorder the letters of `word` so the result differs from `word`
///
/// Words shorter than two letters, and words whose letters are all the same,
/// have no distinct arrangement and are returned unchanged. Otherwise the
/// letters are shuffled up to [`MAX_SHUFFLE_ATTEMPTS`] times; if every shuffle
/// reproduces the input, the word is rotated left by one letter instead, which
/// always differs when at least two distinct letters are present.
///
/// # Examples
/// ```
/// use jumble::engine::scramble;
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let scrambled = scramble("elephant", &mut rng);
/// assert_ne!(scrambled, "elephant");
/// assert_eq!(scramble("a", &mut rng), "a");
/// ```
pub fn scramble<R: Rng + ?Sized>(word: &str, rng: &mut R) -> String {
    let mut letters: Vec<char> = word.chars().collect();
    if letters.len() < 2 || has_single_letter(word) {
        return word.to_string();
    }

    for _ in 0..MAX_SHUFFLE_ATTEMPTS {
        letters.shuffle(rng);
        let candidate: String = letters.iter().collect();
        if candidate != word {
            return candidate;
        }
    }

    warn!("Shuffle kept reproducing '{word}', rotating instead");
    let mut rotated: Vec<char> = word.chars().collect();
    rotated.rotate_left(1);
    rotated.into_iter().collect()
}

/// Scramble `original` again, trying to avoid repeating `previous`
///
/// The result always differs from `original` (when possible, see
/// [`scramble`]). Avoiding `previous` is best effort: after
/// [`RESCRAMBLE_ATTEMPTS`] tries the last scramble is accepted even if it
/// matches.
pub fn rescramble<R: Rng + ?Sized>(original: &str, previous: &str, rng: &mut R) -> String {
    let mut candidate = scramble(original, rng);
    for _ in 1..RESCRAMBLE_ATTEMPTS {
        if candidate != previous {
            return candidate;
        }
        candidate = scramble(original, rng);
    }

    if candidate == previous {
        debug!("Could not avoid repeating scramble '{previous}' of '{original}'");
    }
    candidate
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterCounts;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn same_letters(a: &str, b: &str) -> bool {
        LetterCounts::of(a) == LetterCounts::of(b)
    }

    #[test]
    fn scramble_differs_and_keeps_letters() {
        let mut rng = StdRng::seed_from_u64(1);
        for word in ["ab", "elephant", "yellow", "aab", "abab", "titans", "level"] {
            for _ in 0..20 {
                let scrambled = scramble(word, &mut rng);
                assert_ne!(scrambled, word);
                assert!(same_letters(&scrambled, word), "{scrambled} is not a permutation of {word}");
            }
        }
    }

    #[test]
    fn two_letter_word_swaps() {
        let mut rng = StdRng::seed_from_u64(5);
        assert_eq!(scramble("ab", &mut rng), "ba");
    }

    #[test]
    fn short_words_unchanged() {
        let mut rng = StdRng::seed_from_u64(2);
        assert_eq!(scramble("", &mut rng), "");
        assert_eq!(scramble("a", &mut rng), "a");
    }

    #[test]
    fn identical_letters_unchanged() {
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(scramble("aaaa", &mut rng), "aaaa");
        assert_eq!(scramble("zz", &mut rng), "zz");
    }

    #[test]
    fn scramble_is_reproducible_with_seed() {
        let first = scramble("elephant", &mut StdRng::seed_from_u64(99));
        let second = scramble("elephant", &mut StdRng::seed_from_u64(99));
        assert_eq!(first, second);
    }

    #[test]
    fn rescramble_avoids_previous_when_possible() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut previous = scramble("yellow", &mut rng);
        for _ in 0..50 {
            let next = rescramble("yellow", &previous, &mut rng);
            assert_ne!(next, "yellow");
            assert_ne!(next, previous);
            assert!(same_letters(&next, "yellow"));
            previous = next;
        }
    }

    #[test]
    fn rescramble_accepts_repeat_when_forced() {
        // "ab" has a single distinct scramble, so the previous one must repeat
        let mut rng = StdRng::seed_from_u64(6);
        assert_eq!(rescramble("ab", "ba", &mut rng), "ba");
    }
}

//! Benchmark command
//!
//! Times both sub-word strategies over a set of words and checks they agree.
//! Words longer than [`PERMUTATION_LIMIT`] only go through the dictionary scan.

use crate::core::Dictionary;
use crate::engine::{PERMUTATION_LIMIT, sub_words_by_permutation, sub_words_by_scan};
use indicatif::{ProgressBar, ProgressStyle};
use log::warn;
use rand::Rng;
use rand::seq::IndexedRandom;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_words: usize,
    pub total_sub_words: usize,
    pub max_sub_words: usize,
    pub permutation_duration: Duration,
    pub scan_duration: Duration,
    /// Words too long to enumerate, timed with the scan only
    pub permutation_skipped: usize,
    /// Words for which the two strategies disagreed
    pub mismatches: Vec<String>,
}

impl BenchmarkResult {
    #[must_use]
    pub fn average_sub_words(&self) -> f64 {
        if self.total_words == 0 {
            0.0
        } else {
            self.total_sub_words as f64 / self.total_words as f64
        }
    }
}

/// Pick `count` random dictionary words, optionally of a fixed length
///
/// Words are drawn with replacement; an empty result means the dictionary has
/// no word of that length.
pub fn pick_words<R: Rng + ?Sized>(
    dict: &Dictionary,
    count: usize,
    length: Option<usize>,
    rng: &mut R,
) -> Vec<String> {
    let pool: Vec<&str> = match length {
        Some(len) => dict.iter().filter(|w| w.len() == len).collect(),
        None => dict.iter().collect(),
    };
    (0..count)
        .filter_map(|_| pool.choose(rng).map(|w| (*w).to_string()))
        .collect()
}

/// Run both generator strategies on every word
pub fn run_benchmark(dict: &Dictionary, words: &[String], min_length: usize) -> BenchmarkResult {
    let pb = ProgressBar::new(words.len() as u64);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    let mut permutation_duration = Duration::ZERO;
    let mut scan_duration = Duration::ZERO;
    let mut total_sub_words = 0;
    let mut max_sub_words = 0;
    let mut permutation_skipped = 0;
    let mut mismatches = Vec::new();

    for word in words {
        pb.set_message(word.clone());

        let by_permutation = if word.len() <= PERMUTATION_LIMIT {
            let start = Instant::now();
            let found = sub_words_by_permutation(dict, word, min_length);
            permutation_duration += start.elapsed();
            Some(found)
        } else {
            permutation_skipped += 1;
            None
        };

        let start = Instant::now();
        let by_scan = sub_words_by_scan(dict, word, min_length);
        scan_duration += start.elapsed();

        if by_permutation.is_some_and(|found| found != by_scan) {
            warn!("Strategies disagree on '{word}'");
            mismatches.push(word.clone());
        }
        total_sub_words += by_scan.len();
        max_sub_words = max_sub_words.max(by_scan.len());
        pb.inc(1);
    }

    pb.finish_with_message("done");

    BenchmarkResult {
        total_words: words.len(),
        total_sub_words,
        max_sub_words,
        permutation_duration,
        scan_duration,
        permutation_skipped,
        mismatches,
    }
}

//! Benchmark command
//!
//! Scores every answer/guess pair of a word list in parallel.

use crate::core::{Feedback, Word};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// How many of the most frequent feedback patterns to keep
pub const TOP_PATTERNS: usize = 5;

/// Result of a benchmark run
#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    pub words: usize,
    pub pairs: usize,
    /// Pairs whose feedback was all exact
    pub solved_pairs: usize,
    pub distinct_patterns: usize,
    /// Most frequent patterns, most common first
    pub top_patterns: Vec<(Feedback, usize)>,
    pub duration: Duration,
    pub pairs_per_second: f64,
}

/// Score every word against every other word in `words`
///
/// Each answer is scored on its own rayon task; per-task pattern counts are
/// merged at the end.
///
/// # Panics
///
/// Panics if the progress bar template is invalid.
#[must_use]
pub fn run_benchmark(words: &[Word], show_progress: bool) -> BenchmarkResult {
    let start = Instant::now();

    let pb = if show_progress {
        ProgressBar::new(words.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap()
            .progress_chars("█▓▒░"),
    );
    pb.set_message("scoring");

    let counts = words
        .par_iter()
        .map(|answer| {
            let mut local: FxHashMap<Feedback, usize> = FxHashMap::default();
            for guess in words {
                *local.entry(Feedback::calculate(guess, answer)).or_insert(0) += 1;
            }
            pb.inc(1);
            local
        })
        .reduce(FxHashMap::default, |mut acc, local| {
            for (feedback, count) in local {
                *acc.entry(feedback).or_insert(0) += count;
            }
            acc
        });

    pb.finish_with_message("Complete!");

    let duration = start.elapsed();
    let pairs = words.len() * words.len();
    let solved_pairs: usize = counts
        .iter()
        .filter(|(feedback, _)| feedback.is_solved())
        .map(|(_, &count)| count)
        .sum();
    let distinct_patterns = counts.len();

    let mut top_patterns: Vec<(Feedback, usize)> = counts.into_iter().collect();
    top_patterns.sort_by(|(fa, ca), (fb, cb)| cb.cmp(ca).then_with(|| fa.cmp(fb)));
    top_patterns.truncate(TOP_PATTERNS);

    tracing::info!(
        words = words.len(),
        pairs,
        distinct_patterns,
        elapsed_ms = duration.as_millis(),
        "benchmark finished"
    );

    BenchmarkResult {
        words: words.len(),
        pairs,
        solved_pairs,
        distinct_patterns,
        top_patterns,
        duration,
        pairs_per_second: pairs as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::ANSWERS;
    use crate::wordlists::loader::words_from_slice;

    #[test]
    fn benchmark_counts_every_pair() {
        let words = words_from_slice(&["water", "otter", "earth"]);
        let result = run_benchmark(&words, false);

        assert_eq!(result.words, 3);
        assert_eq!(result.pairs, 9);
        assert_eq!(result.solved_pairs, 3);
        assert!(result.distinct_patterns <= 9);
    }

    #[test]
    fn top_patterns_sorted_by_frequency() {
        let words = words_from_slice(&ANSWERS[..40]);
        let result = run_benchmark(&words, false);

        assert!(result.top_patterns.len() <= TOP_PATTERNS);
        assert!(
            result
                .top_patterns
                .windows(2)
                .all(|pair| pair[0].1 >= pair[1].1)
        );
        let top_total: usize = result.top_patterns.iter().map(|(_, count)| count).sum();
        assert!(top_total <= result.pairs);
    }

    #[test]
    fn parallel_scoring_matches_sequential() {
        let words = words_from_slice(&ANSWERS[..30]);
        let result = run_benchmark(&words, false);

        let mut expected: FxHashMap<Feedback, usize> = FxHashMap::default();
        for answer in &words {
            for guess in &words {
                *expected.entry(Feedback::calculate(guess, answer)).or_insert(0) += 1;
            }
        }

        assert_eq!(result.distinct_patterns, expected.len());
        for (feedback, count) in &result.top_patterns {
            assert_eq!(expected.get(feedback), Some(count));
        }
    }

    #[test]
    fn benchmark_empty_word_list() {
        let result = run_benchmark(&[], false);

        assert_eq!(result.pairs, 0);
        assert_eq!(result.distinct_patterns, 0);
        assert!(result.top_patterns.is_empty());
    }
}

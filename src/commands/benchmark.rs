//! Benchmark command
//!
//! Measures scoring throughput over a random sample of dictionary words.

use crate::engine::{score, sync_tiles};
use rand::prelude::IndexedRandom;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_words: usize,
    pub total_points: u64,
    pub average_points: f64,
    /// Highest-scoring sampled word and its points
    pub best: Option<(String, u32)>,
    /// Word count per 10-point score bucket
    pub distribution: HashMap<u32, usize>,
    pub duration: Duration,
    pub words_per_second: f64,
}

/// Score a random sample of `count` words from the given pool
///
/// Sampling is without replacement; asking for more words than the pool
/// holds just scores the whole pool.
#[must_use]
pub fn run_benchmark(pool: &[&str], count: usize) -> BenchmarkResult {
    let sample: Vec<&&str> = pool.choose_multiple(&mut rand::rng(), count).collect();

    let start = Instant::now();
    let mut total_points = 0u64;
    let mut best: Option<(String, u32)> = None;
    let mut distribution: HashMap<u32, usize> = HashMap::new();

    for &&word in &sample {
        let tiles = sync_tiles(word, &[]);
        let points = score(&tiles, 1, false);

        total_points += u64::from(points);
        *distribution.entry(points / 10).or_insert(0) += 1;

        let beats = best.as_ref().is_none_or(|(_, top)| points > *top);
        if beats {
            best = Some((word.to_uppercase(), points));
        }
    }

    let duration = start.elapsed();
    let total_words = sample.len();

    BenchmarkResult {
        total_words,
        total_points,
        average_points: total_points as f64 / (total_words as f64).max(1.0),
        best,
        distribution,
        duration,
        words_per_second: total_words as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const POOL: &[&str] = &["cat", "quartz", "jazz", "to", "puzzled"];

    #[test]
    fn benchmark_scores_the_sample() {
        let result = run_benchmark(POOL, 3);

        assert_eq!(result.total_words, 3);
        assert!(result.total_points > 0);
        assert!(result.average_points > 0.0);
        assert!(result.best.is_some());
    }

    #[test]
    fn oversized_count_scores_the_whole_pool() {
        let result = run_benchmark(POOL, 100);
        assert_eq!(result.total_words, POOL.len());
    }

    #[test]
    fn best_word_has_the_top_score() {
        let result = run_benchmark(POOL, POOL.len());
        let (word, top) = result.best.unwrap();

        // J8 + A1 + Z10 + Z10 beats everything else in the pool
        assert_eq!(word, "JAZZ");
        assert_eq!(top, 29);
    }

    #[test]
    fn distribution_sums_to_total() {
        let result = run_benchmark(POOL, POOL.len());
        let sum: usize = result.distribution.values().sum();
        assert_eq!(sum, result.total_words);
    }

    #[test]
    fn empty_pool_is_harmless() {
        let result = run_benchmark(&[], 10);
        assert_eq!(result.total_words, 0);
        assert!(result.best.is_none());
    }
}

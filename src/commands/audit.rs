//! Word-list audit command
//!
//! Classifies every entry of a word-list file against a region and reports
//! how much of it survives validation.

use crate::engine::{Verdict, classify};
use crate::wordlists::WordList;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::{Duration, Instant};

/// How many dictionary misses to keep as examples in the report
const MISS_SAMPLE_LIMIT: usize = 10;

/// Statistics from auditing a word list
#[derive(Debug)]
pub struct AuditStatistics {
    pub total: usize,
    pub valid: usize,
    pub not_found: usize,
    pub invalid_characters: usize,
    pub too_short: usize,
    pub missed_samples: Vec<String>,
    pub duration: Duration,
    pub words_per_second: f64,
}

/// Classify every word against the given list
///
/// Shows a progress bar while walking the input; large community lists run
/// to tens of thousands of entries.
#[must_use]
pub fn run_audit(words: &[String], list: &WordList) -> AuditStatistics {
    let pb = ProgressBar::new(words.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();
    let mut valid = 0;
    let mut not_found = 0;
    let mut invalid_characters = 0;
    let mut too_short = 0;
    let mut missed_samples = Vec::new();

    for word in words {
        match classify(word, list) {
            Verdict::Valid => valid += 1,
            Verdict::NotFound => {
                not_found += 1;
                if missed_samples.len() < MISS_SAMPLE_LIMIT {
                    missed_samples.push(word.trim().to_lowercase());
                }
            }
            Verdict::InvalidCharacters => invalid_characters += 1,
            Verdict::TooShort => too_short += 1,
        }

        pb.inc(1);
        pb.set_message(format!("{valid} valid"));
    }

    pb.finish_and_clear();

    let duration = start.elapsed();
    AuditStatistics {
        total: words.len(),
        valid,
        not_found,
        invalid_characters,
        too_short,
        missed_samples,
        duration,
        words_per_second: words.len() as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}

/// Print the audit report
pub fn print_audit_statistics(stats: &AuditStatistics) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "WORD LIST AUDIT".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Coverage:".bright_cyan().bold());
    println!("   Words checked:    {}", stats.total);
    println!(
        "   Valid:            {}",
        stats.valid.to_string().green().bold()
    );
    println!(
        "   Not in list:      {}",
        stats.not_found.to_string().yellow()
    );
    println!("   Invalid chars:    {}", stats.invalid_characters);
    println!("   Too short:        {}", stats.too_short);
    println!("   Time taken:       {:.2}s", stats.duration.as_secs_f64());
    println!("   Words/second:     {:.0}", stats.words_per_second);

    if stats.total > 0 {
        let coverage = stats.valid as f64 / stats.total as f64 * 100.0;
        println!(
            "   Coverage:         {}",
            format!("{coverage:.1}%").bright_yellow().bold()
        );
    }

    if !stats.missed_samples.is_empty() {
        println!("\nSample misses:");
        for word in &stats.missed_samples {
            println!("  • {word}");
        }
    }
    println!();
}

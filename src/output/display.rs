//! Display functions for command results

use super::formatters::{create_progress_bar, format_tile, format_tiles};
use crate::commands::{BenchmarkResult, CheckResult, ScoreResult};
use crate::engine::Verdict;
use crate::game::GameSession;
use colored::Colorize;

/// Print the result of scoring a word
pub fn print_score_result(result: &ScoreResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Scoring: {}   ({} list)",
        result.word.bright_yellow().bold(),
        result.region
    );
    println!("{}", "─".repeat(60).cyan());

    if verbose {
        println!();
        for (i, tile) in result.tiles.iter().enumerate() {
            println!("  {}. {}", i + 1, format_tile(tile));
        }
    } else {
        println!("\n  {}", format_tiles(&result.tiles));
    }

    println!("\n  Letter total:   {}", result.letter_total);
    println!("  Word bonus:     ×{}", result.word_multiplier);
    if result.has_bingo {
        println!("  Bingo:          +50");
    }
    println!(
        "  Total:          {}",
        result.total.to_string().bright_yellow().bold()
    );

    println!("\n  {}", verdict_line(result.verdict));
}

/// Print the result of checking a word
pub fn print_check_result(result: &CheckResult) {
    println!(
        "\n{}  [{}]  {}",
        result.word.bright_white().bold(),
        result.region,
        verdict_line(result.verdict)
    );

    for (region, verdict) in &result.elsewhere {
        if *verdict != result.verdict {
            println!("  but {} in the {} list", verdict, region);
        }
    }
    println!();
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SCORING BENCHMARK".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Throughput:".bright_cyan().bold());
    println!("   Words scored:     {}", result.total_words);
    println!(
        "   Average points:   {}",
        format!("{:.1}", result.average_points).bright_yellow().bold()
    );
    if let Some((word, points)) = &result.best {
        println!(
            "   Best word:        {} ({} pts)",
            word.bright_white().bold(),
            points.to_string().green()
        );
    }
    println!("   Time taken:       {:.3}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.0}", result.words_per_second);

    if !result.distribution.is_empty() {
        println!("\n📊 {}", "Point distribution:".bright_cyan().bold());
        let peak = result.distribution.values().copied().max().unwrap_or(1);
        let mut buckets: Vec<_> = result.distribution.iter().collect();
        buckets.sort_by_key(|(bucket, _)| **bucket);

        for (bucket, count) in buckets {
            let bar = create_progress_bar(*count as f64, peak as f64, 30);
            println!(
                "   {:>3}-{:<3} [{}] {}",
                bucket * 10,
                bucket * 10 + 9,
                bar.green(),
                count
            );
        }
    }
    println!();
}

/// Print the current standings of a game session
pub fn print_standings(session: &GameSession) {
    println!("{}", "─".repeat(40).cyan());
    println!(" {}", "STANDINGS".bright_cyan().bold());
    println!("{}", "─".repeat(40).cyan());

    for (rank, seat) in session.standings().iter().enumerate() {
        let line = format!("{}. {:<16} {:>5} pts", rank + 1, seat.name, seat.total);
        if rank == 0 && seat.total > 0 {
            println!(" {}", line.green().bold());
        } else {
            println!(" {line}");
        }
    }
    println!();
}

fn verdict_line(verdict: Verdict) -> String {
    match verdict {
        Verdict::Valid => format!("{}", "✓ valid word".green().bold()),
        Verdict::NotFound => format!("{}", "✗ not in word list".yellow().bold()),
        Verdict::TooShort => format!("{}", "✗ too short".red()),
        Verdict::InvalidCharacters => format!("{}", "✗ invalid characters".red()),
    }
}

//! Scrabble Scorer - CLI
//!
//! Score-keeping companion for Scrabble with word scoring, regional
//! dictionary validation and an interactive multiplayer session.

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use scrabble_scorer::{
    commands::{
        ScoreConfig, check_word, print_audit_statistics, run_audit, run_benchmark, run_play,
        score_word,
    },
    output::{print_benchmark_result, print_check_result, print_score_result},
    wordlists::{Dictionary, INTL_EXTRA, Region, TWL_BASE, loader},
};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "scrabble_scorer",
    about = "Scrabble score keeper with regional dictionary validation",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Region: 'na' (North-American, default) or 'intl' (international)
    #[arg(short, long, global = true, default_value = "na")]
    region: String,

    /// Wordlist: 'embedded' (default) or path to a custom file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive score-keeping session (default)
    Play,

    /// Score a word with optional bonuses
    Score {
        /// The word to score
        word: String,

        /// Word multiplier (1-3)
        #[arg(short = 'm', long, default_value = "1")]
        word_multiplier: u8,

        /// Letter bonus as POS=MULT with 1-based position, repeatable
        #[arg(short, long = "letter", value_name = "POS=MULT")]
        letter: Vec<String>,

        /// Blank tile at 1-based position, repeatable
        #[arg(short, long = "blank", value_name = "POS")]
        blank: Vec<usize>,

        /// Force the bingo bonus on or off (default: automatic at 7 tiles)
        #[arg(long)]
        bingo: Option<bool>,

        /// Show the per-tile breakdown
        #[arg(short, long)]
        verbose: bool,
    },

    /// Check whether a word is in the regional list
    Check {
        /// Word to classify
        word: String,
    },

    /// Validate every word of a file against the regional list
    Audit {
        /// One word per line
        file: PathBuf,

        /// Limit number of words to check
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Benchmark scoring throughput on random dictionary words
    Benchmark {
        /// Number of random words to score
        #[arg(short = 'n', long, default_value = "1000")]
        count: usize,
    },
}

/// Load the dictionary based on the -w flag
///
/// "embedded" uses the built-in regional lists; anything else is treated as
/// a path to a custom list, applied uniformly to every region and falling
/// back to the built-in minimal table if it cannot be read.
fn load_dictionary(wordlist_mode: &str) -> Dictionary {
    match wordlist_mode {
        "embedded" => Dictionary::embedded(),
        path => Dictionary::uniform(loader::load_or_fallback(path)),
    }
}

fn parse_region(name: &str) -> Result<Region> {
    Region::from_name(name)
        .ok_or_else(|| anyhow!("Unknown region '{name}' (use 'na' or 'intl')"))
}

/// Parse a `POS=MULT` letter bonus into a zero-based position
fn parse_letter_bonus(spec: &str) -> Result<(usize, u8)> {
    let (pos, mult) = spec
        .split_once('=')
        .ok_or_else(|| anyhow!("Letter bonus must be POS=MULT, got '{spec}'"))?;

    let pos: usize = pos
        .trim()
        .parse()
        .with_context(|| format!("Invalid position in '{spec}'"))?;
    let mult: u8 = mult
        .trim()
        .parse()
        .with_context(|| format!("Invalid multiplier in '{spec}'"))?;

    if pos < 1 {
        return Err(anyhow!("Positions are 1-based, got '{spec}'"));
    }
    if !(1..=3).contains(&mult) {
        return Err(anyhow!("Letter multiplier must be 1-3, got '{spec}'"));
    }

    Ok((pos - 1, mult))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let region = parse_region(&cli.region)?;
    let dictionary = load_dictionary(&cli.wordlist);

    // Default to the interactive session if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play(&dictionary, region).map_err(|e| anyhow!(e)),
        Commands::Score {
            word,
            word_multiplier,
            letter,
            blank,
            bingo,
            verbose,
        } => {
            run_score_command(
                &dictionary,
                region,
                word,
                word_multiplier,
                &letter,
                &blank,
                bingo,
                verbose,
            )
        }
        Commands::Check { word } => {
            let result = check_word(&word, &dictionary, region);
            print_check_result(&result);
            Ok(())
        }
        Commands::Audit { file, limit } => run_audit_command(&dictionary, region, &file, limit),
        Commands::Benchmark { count } => {
            run_benchmark_command(region, count);
            Ok(())
        }
    }
}

#[allow(clippy::too_many_arguments)] // One slot per CLI flag
fn run_score_command(
    dictionary: &Dictionary,
    region: Region,
    word: String,
    word_multiplier: u8,
    letter: &[String],
    blank: &[usize],
    bingo: Option<bool>,
    verbose: bool,
) -> Result<()> {
    let letter_multipliers = letter
        .iter()
        .map(|spec| parse_letter_bonus(spec))
        .collect::<Result<Vec<_>>>()?;

    let blanks = blank
        .iter()
        .filter(|&&pos| pos >= 1)
        .map(|&pos| pos - 1)
        .collect();

    let config = ScoreConfig {
        raw: word,
        word_multiplier,
        letter_multipliers,
        blanks,
        bingo,
    };

    let result = score_word(&config, dictionary, region);
    print_score_result(&result, verbose);
    Ok(())
}

fn run_audit_command(
    dictionary: &Dictionary,
    region: Region,
    file: &Path,
    limit: Option<usize>,
) -> Result<()> {
    let content = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read word list {}", file.display()))?;

    let words: Vec<String> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .take(limit.unwrap_or(usize::MAX))
        .map(ToString::to_string)
        .collect();

    println!(
        "Auditing {} words against the {} list...",
        words.len(),
        region
    );

    let stats = run_audit(&words, dictionary.list(region));
    print_audit_statistics(&stats);
    Ok(())
}

fn run_benchmark_command(region: Region, count: usize) {
    println!("Scoring {count} random {region} words...");

    let result = match region {
        Region::NorthAmerican => run_benchmark(TWL_BASE, count),
        Region::International => {
            let pool: Vec<&str> = TWL_BASE.iter().chain(INTL_EXTRA).copied().collect();
            run_benchmark(&pool, count)
        }
    };

    print_benchmark_result(&result);
}

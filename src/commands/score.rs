//! Word scoring command
//!
//! Builds a candidate word from raw input, applies the requested bonuses
//! and produces the full breakdown alongside a validation verdict.

use crate::core::{CandidateWord, Tile};
use crate::engine::{Verdict, classify, score_candidate, sync_input};
use crate::wordlists::{Dictionary, Region};

/// Bonus configuration for scoring a single word
pub struct ScoreConfig {
    pub raw: String,
    /// Word multiplier, 1..=3
    pub word_multiplier: u8,
    /// Zero-based tile position → letter multiplier
    pub letter_multipliers: Vec<(usize, u8)>,
    /// Zero-based positions played as blanks
    pub blanks: Vec<usize>,
    /// Explicit bingo override; `None` leaves the automatic full-rack rule
    pub bingo: Option<bool>,
}

impl ScoreConfig {
    /// Plain scoring of a word with no bonuses
    #[must_use]
    pub const fn new(raw: String) -> Self {
        Self {
            raw,
            word_multiplier: 1,
            letter_multipliers: Vec::new(),
            blanks: Vec::new(),
            bingo: None,
        }
    }
}

/// Result of scoring a word
pub struct ScoreResult {
    pub word: String,
    pub tiles: Vec<Tile>,
    pub region: Region,
    pub verdict: Verdict,
    pub letter_total: u32,
    pub word_multiplier: u8,
    pub has_bingo: bool,
    pub total: u32,
}

/// Score a word under the given bonus configuration
///
/// Out-of-range positions in the configuration are ignored, matching the
/// tile-level no-op rule. The verdict never blocks scoring: an unknown
/// word still gets its number, the caller decides what to do with the miss.
#[must_use]
pub fn score_word(config: &ScoreConfig, dictionary: &Dictionary, region: Region) -> ScoreResult {
    let mut candidate = CandidateWord::new();
    sync_input(&mut candidate, &config.raw);

    // Blanks first: marking blank resets the letter multiplier, so an
    // explicit multiplier on the same position must land afterwards.
    for &index in &config.blanks {
        candidate.set_blank_at(index, true);
    }
    for &(index, multiplier) in &config.letter_multipliers {
        candidate.set_multiplier_at(index, multiplier);
    }

    candidate.set_word_multiplier(config.word_multiplier);
    if let Some(bingo) = config.bingo {
        candidate.set_bingo(bingo);
    }

    let verdict = classify(&config.raw, dictionary.list(region));
    let letter_total: u32 = candidate.tiles().iter().map(Tile::points).sum();
    let total = score_candidate(&candidate);

    ScoreResult {
        word: candidate.word(),
        tiles: candidate.tiles().to_vec(),
        region,
        verdict,
        letter_total,
        word_multiplier: candidate.word_multiplier(),
        has_bingo: candidate.has_bingo(),
        total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::WordList;

    fn dictionary() -> Dictionary {
        Dictionary::uniform(WordList::from_words(["quartz", "puzzled", "cat"]))
    }

    #[test]
    fn plain_word_scores_its_letter_total() {
        let config = ScoreConfig::new("quartz".to_string());
        let result = score_word(&config, &dictionary(), Region::NorthAmerican);

        assert_eq!(result.word, "QUARTZ");
        assert_eq!(result.letter_total, 24);
        assert_eq!(result.total, 24);
        assert_eq!(result.verdict, Verdict::Valid);
        assert!(!result.has_bingo);
    }

    #[test]
    fn bonuses_fold_into_the_total() {
        let mut config = ScoreConfig::new("cat".to_string());
        config.letter_multipliers = vec![(0, 2)];
        config.word_multiplier = 3;

        let result = score_word(&config, &dictionary(), Region::NorthAmerican);

        // (C3×2 + A1 + T1) × 3
        assert_eq!(result.letter_total, 8);
        assert_eq!(result.total, 24);
    }

    #[test]
    fn blank_zeroes_a_tile_even_with_a_multiplier_request() {
        let mut config = ScoreConfig::new("cat".to_string());
        config.blanks = vec![0];
        config.letter_multipliers = vec![(0, 3)];

        let result = score_word(&config, &dictionary(), Region::NorthAmerican);

        assert!(result.tiles[0].is_blank());
        assert_eq!(result.tiles[0].points(), 0);
        assert_eq!(result.letter_total, 2);
    }

    #[test]
    fn seven_letters_get_the_automatic_bingo() {
        let config = ScoreConfig::new("puzzled".to_string());
        let result = score_word(&config, &dictionary(), Region::NorthAmerican);

        assert!(result.has_bingo);
        assert_eq!(result.total, 78);
    }

    #[test]
    fn explicit_bingo_override_wins() {
        let mut config = ScoreConfig::new("puzzled".to_string());
        config.bingo = Some(false);

        let result = score_word(&config, &dictionary(), Region::NorthAmerican);

        assert!(!result.has_bingo);
        assert_eq!(result.total, 28);
    }

    #[test]
    fn out_of_range_bonus_positions_are_ignored() {
        let mut config = ScoreConfig::new("cat".to_string());
        config.letter_multipliers = vec![(9, 3)];
        config.blanks = vec![7];

        let result = score_word(&config, &dictionary(), Region::NorthAmerican);
        assert_eq!(result.total, 5);
    }

    #[test]
    fn unknown_word_still_scores() {
        let config = ScoreConfig::new("zyzzyva".to_string());
        let result = score_word(&config, &dictionary(), Region::NorthAmerican);

        assert_eq!(result.verdict, Verdict::NotFound);
        assert!(result.total > 0);
    }
}

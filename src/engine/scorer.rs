//! Word score calculation
//!
//! Pure arithmetic over a tile sequence: each tile contributes its own
//! points (letter value × letter multiplier, zero while blank), the sum is
//! scaled by the word multiplier, and a full-rack bingo adds a flat bonus.

use crate::core::{CandidateWord, Tile};

/// Flat bonus for playing a full rack in one turn
pub const BINGO_BONUS: u32 = 50;

/// Total score for a tile sequence under the given word-level bonuses
///
/// Deterministic and side-effect free. An empty tile slice scores 0 no
/// matter the multiplier; a word of nothing but blanks scores 0 plus any
/// bingo bonus.
///
/// # Examples
/// ```
/// use scrabble_scorer::engine::{score, sync_tiles};
///
/// let tiles = sync_tiles("quartz", &[]);
/// assert_eq!(score(&tiles, 1, false), 24);
/// assert_eq!(score(&tiles, 2, false), 48);
/// ```
#[must_use]
pub fn score(tiles: &[Tile], word_multiplier: u32, has_bingo: bool) -> u32 {
    let letter_total: u32 = tiles.iter().map(Tile::points).sum();
    let word_score = letter_total * word_multiplier;

    word_score + if has_bingo { BINGO_BONUS } else { 0 }
}

/// Score a candidate word using its own word multiplier and bingo flag
#[must_use]
pub fn score_candidate(word: &CandidateWord) -> u32 {
    score(
        word.tiles(),
        u32::from(word.word_multiplier()),
        word.has_bingo(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::sync_tiles;

    #[test]
    fn empty_tiles_score_zero_for_any_multiplier() {
        for multiplier in 1..=3 {
            assert_eq!(score(&[], multiplier, false), 0);
        }
    }

    #[test]
    fn base_score_is_sum_of_tile_points() {
        let tiles = sync_tiles("cat", &[]);
        let expected: u32 = tiles.iter().map(Tile::points).sum();
        assert_eq!(score(&tiles, 1, false), expected);
        assert_eq!(expected, 5); // C3 + A1 + T1
    }

    #[test]
    fn word_multiplier_is_linear() {
        let tiles = sync_tiles("quartz", &[]);
        let base = score(&tiles, 1, false);

        for k in 1..=3 {
            assert_eq!(score(&tiles, k, false), k * base);
        }
    }

    #[test]
    fn bingo_adds_exactly_fifty() {
        let tiles = sync_tiles("puzzled", &[]);
        for multiplier in 1..=3 {
            assert_eq!(
                score(&tiles, multiplier, true),
                score(&tiles, multiplier, false) + BINGO_BONUS
            );
        }
    }

    #[test]
    fn quartz_scores_twenty_four() {
        // Q10 + U1 + A1 + R1 + T1 + Z10
        let tiles = sync_tiles("quartz", &[]);
        assert_eq!(score(&tiles, 1, false), 24);
        assert_eq!(score(&tiles, 2, false), 48);
    }

    #[test]
    fn puzzled_with_bingo_scores_seventy_eight() {
        // P3 + U1 + Z10 + Z10 + L1 + E1 + D2 = 28
        let tiles = sync_tiles("puzzled", &[]);
        assert_eq!(score(&tiles, 1, false), 28);
        assert_eq!(score(&tiles, 1, true), 78);
    }

    #[test]
    fn letter_multipliers_fold_into_tile_points() {
        let mut tiles = sync_tiles("cat", &[]);
        tiles[0].cycle_multiplier(); // C ×2

        assert_eq!(score(&tiles, 1, false), 8); // 6 + 1 + 1
        assert_eq!(score(&tiles, 3, false), 24);
    }

    #[test]
    fn all_blank_word_scores_zero() {
        let mut tiles = sync_tiles("cat", &[]);
        for tile in &mut tiles {
            tile.set_blank(true);
        }

        assert_eq!(score(&tiles, 3, false), 0);
        assert_eq!(score(&tiles, 3, true), BINGO_BONUS);
    }

    #[test]
    fn score_candidate_uses_its_own_bonuses() {
        let mut word = CandidateWord::new();
        crate::engine::sync_input(&mut word, "puzzled");
        word.set_word_multiplier(2);

        // 28 × 2 + 50 (auto-bingo at 7 tiles)
        assert_eq!(score_candidate(&word), 106);
    }
}

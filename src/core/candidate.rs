//! Candidate word state
//!
//! The word currently being scored: an ordered tile sequence plus the
//! word-level bonuses (double/triple word score and the full-rack bingo).

use super::tile::Tile;

/// Tile count at which a word uses the full rack and earns the bingo bonus
pub const BINGO_SIZE: usize = 7;

/// The in-progress word being scored, with word-level bonus state
///
/// Owned by a single editing session. Tile bonus state is mutated in place
/// through the `*_at` methods; the tile sequence itself is replaced through
/// [`CandidateWord::apply_sync`], which also maintains the bingo flag:
/// arriving at exactly [`BINGO_SIZE`] tiles sets it, dropping below clears
/// it, and at 8+ tiles it stays wherever the user last put it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateWord {
    tiles: Vec<Tile>,
    word_multiplier: u8,
    has_bingo: bool,
}

impl Default for CandidateWord {
    fn default() -> Self {
        Self::new()
    }
}

impl CandidateWord {
    /// Create an empty candidate word with no bonuses
    #[must_use]
    pub const fn new() -> Self {
        Self {
            tiles: Vec::new(),
            word_multiplier: 1,
            has_bingo: false,
        }
    }

    /// Current tile sequence
    #[inline]
    #[must_use]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Number of tiles
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Whether there are no tiles
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// The current letters as an uppercase string
    #[must_use]
    pub fn word(&self) -> String {
        self.tiles.iter().map(Tile::letter).collect()
    }

    /// Current word multiplier (1, 2 or 3)
    #[inline]
    #[must_use]
    pub const fn word_multiplier(&self) -> u8 {
        self.word_multiplier
    }

    /// Whether the bingo bonus is active
    #[inline]
    #[must_use]
    pub const fn has_bingo(&self) -> bool {
        self.has_bingo
    }

    /// Replace the tile sequence with a freshly synchronized one
    ///
    /// Applies the automatic bingo rule against the previous length:
    /// transitioning onto exactly [`BINGO_SIZE`] tiles sets the flag,
    /// shrinking below force-clears it, and otherwise (staying at 7, or any
    /// length of 8+) the flag is left under user control.
    pub fn apply_sync(&mut self, tiles: Vec<Tile>) {
        let previous_len = self.tiles.len();
        self.tiles = tiles;

        let len = self.tiles.len();
        if len < BINGO_SIZE {
            self.has_bingo = false;
        } else if len == BINGO_SIZE && previous_len != BINGO_SIZE {
            self.has_bingo = true;
        }
    }

    /// Cycle the letter multiplier of the tile at `index`
    ///
    /// Out-of-range indices are a no-op.
    pub fn cycle_multiplier_at(&mut self, index: usize) {
        if let Some(tile) = self.tiles.get_mut(index) {
            tile.cycle_multiplier();
        }
    }

    /// Set the letter multiplier of the tile at `index`
    ///
    /// Out-of-range indices and multipliers outside 1..=3 are a no-op.
    pub fn set_multiplier_at(&mut self, index: usize, multiplier: u8) {
        if let Some(tile) = self.tiles.get_mut(index) {
            tile.set_multiplier(multiplier);
        }
    }

    /// Toggle the blank flag of the tile at `index`
    ///
    /// Out-of-range indices are a no-op.
    pub fn toggle_blank_at(&mut self, index: usize) {
        if let Some(tile) = self.tiles.get_mut(index) {
            tile.toggle_blank();
        }
    }

    /// Set the blank flag of the tile at `index`
    ///
    /// Out-of-range indices are a no-op.
    pub fn set_blank_at(&mut self, index: usize, blank: bool) {
        if let Some(tile) = self.tiles.get_mut(index) {
            tile.set_blank(blank);
        }
    }

    /// Set the word multiplier; values outside 1..=3 are ignored
    pub const fn set_word_multiplier(&mut self, multiplier: u8) {
        if matches!(multiplier, 1..=3) {
            self.word_multiplier = multiplier;
        }
    }

    /// Advance the word multiplier 1 → 2 → 3 → 1
    pub const fn cycle_word_multiplier(&mut self) {
        self.word_multiplier = match self.word_multiplier {
            1 => 2,
            2 => 3,
            _ => 1,
        };
    }

    /// Set the bingo flag by hand
    ///
    /// Only honored with a full rack (7+ tiles); below that the flag is
    /// pinned to false.
    pub fn set_bingo(&mut self, bingo: bool) {
        self.has_bingo = bingo && self.tiles.len() >= BINGO_SIZE;
    }

    /// Drop all tiles and reset every bonus to its default
    pub fn clear(&mut self) {
        self.tiles.clear();
        self.word_multiplier = 1;
        self.has_bingo = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiles_for(word: &str) -> Vec<Tile> {
        word.chars().map(Tile::new).collect()
    }

    #[test]
    fn new_word_is_empty() {
        let word = CandidateWord::new();
        assert!(word.is_empty());
        assert_eq!(word.word_multiplier(), 1);
        assert!(!word.has_bingo());
    }

    #[test]
    fn word_collects_letters() {
        let mut word = CandidateWord::new();
        word.apply_sync(tiles_for("cat"));
        assert_eq!(word.word(), "CAT");
        assert_eq!(word.len(), 3);
    }

    #[test]
    fn reaching_seven_tiles_sets_bingo() {
        let mut word = CandidateWord::new();
        word.apply_sync(tiles_for("puzzle"));
        assert!(!word.has_bingo());

        word.apply_sync(tiles_for("puzzled"));
        assert!(word.has_bingo());
    }

    #[test]
    fn shrinking_below_seven_clears_bingo() {
        let mut word = CandidateWord::new();
        word.apply_sync(tiles_for("puzzled"));
        assert!(word.has_bingo());

        word.apply_sync(tiles_for("puzzle"));
        assert!(!word.has_bingo());
    }

    #[test]
    fn growing_past_seven_keeps_user_choice() {
        let mut word = CandidateWord::new();
        word.apply_sync(tiles_for("puzzled"));
        word.set_bingo(false);

        word.apply_sync(tiles_for("puzzledx"));
        assert!(!word.has_bingo());

        let mut other = CandidateWord::new();
        other.apply_sync(tiles_for("puzzled"));
        other.apply_sync(tiles_for("puzzledx"));
        assert!(other.has_bingo());
    }

    #[test]
    fn shrinking_onto_seven_sets_bingo() {
        let mut word = CandidateWord::new();
        word.apply_sync(tiles_for("puzzledx"));
        word.set_bingo(false);

        word.apply_sync(tiles_for("puzzled"));
        assert!(word.has_bingo());
    }

    #[test]
    fn staying_at_seven_keeps_user_choice() {
        let mut word = CandidateWord::new();
        word.apply_sync(tiles_for("puzzled"));
        word.set_bingo(false);

        word.apply_sync(tiles_for("puzzles"));
        assert!(!word.has_bingo());
    }

    #[test]
    fn set_bingo_pinned_false_below_seven() {
        let mut word = CandidateWord::new();
        word.apply_sync(tiles_for("cat"));
        word.set_bingo(true);
        assert!(!word.has_bingo());
    }

    #[test]
    fn bonus_edits_out_of_range_are_no_ops() {
        let mut word = CandidateWord::new();
        word.apply_sync(tiles_for("cat"));

        word.cycle_multiplier_at(10);
        word.toggle_blank_at(3);

        assert!(word.tiles().iter().all(|t| t.multiplier() == 1));
        assert!(word.tiles().iter().all(|t| !t.is_blank()));
    }

    #[test]
    fn bonus_edits_in_range_mutate_the_tile() {
        let mut word = CandidateWord::new();
        word.apply_sync(tiles_for("cat"));

        word.cycle_multiplier_at(0);
        word.toggle_blank_at(2);

        assert_eq!(word.tiles()[0].multiplier(), 2);
        assert!(word.tiles()[2].is_blank());
    }

    #[test]
    fn word_multiplier_rejects_out_of_range() {
        let mut word = CandidateWord::new();
        word.set_word_multiplier(2);
        assert_eq!(word.word_multiplier(), 2);

        word.set_word_multiplier(0);
        assert_eq!(word.word_multiplier(), 2);
        word.set_word_multiplier(4);
        assert_eq!(word.word_multiplier(), 2);
    }

    #[test]
    fn word_multiplier_cycle_wraps() {
        let mut word = CandidateWord::new();
        word.cycle_word_multiplier();
        word.cycle_word_multiplier();
        word.cycle_word_multiplier();
        assert_eq!(word.word_multiplier(), 1);
    }

    #[test]
    fn clear_resets_everything() {
        let mut word = CandidateWord::new();
        word.apply_sync(tiles_for("puzzled"));
        word.cycle_word_multiplier();
        word.cycle_multiplier_at(0);

        word.clear();

        assert!(word.is_empty());
        assert_eq!(word.word_multiplier(), 1);
        assert!(!word.has_bingo());
    }
}

//! Tile synchronization from raw text input
//!
//! Turns whatever the user typed into an ordered tile sequence while keeping
//! per-position bonus state alive across edits. The diff is position-keyed:
//! a position keeps its old tile only while the letter at that position is
//! unchanged. There is no realignment after an insert or delete: from the
//! first mismatch onward every tile is fresh. That reset is the intended
//! behavior, not an accident of implementation.

use crate::core::{CandidateWord, Tile};

/// Build the tile sequence for `raw`, reusing matching tiles from `previous`
///
/// The input is ASCII-uppercased and every non-alphabetic character is
/// silently dropped. Position `i` reuses `previous[i]` (multiplier and blank
/// state intact) iff that tile shows the same letter; otherwise it gets a
/// fresh tile with default bonus state.
///
/// # Examples
/// ```
/// use scrabble_scorer::engine::sync_tiles;
///
/// let mut tiles = sync_tiles("cat", &[]);
/// tiles[0].cycle_multiplier();
///
/// let extended = sync_tiles("cats", &tiles);
/// assert_eq!(extended[0].multiplier(), 2);
/// assert_eq!(extended[3].multiplier(), 1);
/// ```
#[must_use]
pub fn sync_tiles(raw: &str, previous: &[Tile]) -> Vec<Tile> {
    raw.chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_uppercase())
        .enumerate()
        .map(|(i, letter)| match previous.get(i) {
            Some(tile) if tile.letter() == letter => tile.clone(),
            _ => Tile::new(letter),
        })
        .collect()
}

/// Synchronize a candidate word against raw input
///
/// Runs [`sync_tiles`] against the word's current tiles and hands the result
/// to [`CandidateWord::apply_sync`], which maintains the automatic bingo
/// rule.
pub fn sync_input(word: &mut CandidateWord, raw: &str) {
    let tiles = sync_tiles(raw, word.tiles());
    word.apply_sync(tiles);
}

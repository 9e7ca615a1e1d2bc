//! Formatting utilities for terminal output

use crate::core::Tile;

/// Format a single tile as `Q=10`, `Q×2=20`, or `Q*=0` for a blank
#[must_use]
pub fn format_tile(tile: &Tile) -> String {
    if tile.is_blank() {
        format!("{}*=0", tile.letter())
    } else if tile.multiplier() > 1 {
        format!("{}×{}={}", tile.letter(), tile.multiplier(), tile.points())
    } else {
        format!("{}={}", tile.letter(), tile.points())
    }
}

/// Format a tile sequence as a space-separated row
#[must_use]
pub fn format_tiles(tiles: &[Tile]) -> String {
    tiles
        .iter()
        .map(format_tile)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

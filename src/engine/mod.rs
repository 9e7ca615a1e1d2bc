//! Scoring and validation algorithms
//!
//! The synchronous, allocation-light heart of the crate: tile
//! synchronization, score calculation and word validation. Everything here
//! is a total function over its input domain: no panics, no error types.

mod classifier;
mod scorer;
mod synchronizer;

pub use classifier::{MIN_WORD_LEN, Verdict, classify};
pub use scorer::{BINGO_BONUS, score, score_candidate};
pub use synchronizer::{sync_input, sync_tiles};

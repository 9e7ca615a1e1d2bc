//! Word list loading utilities
//!
//! Loads user-supplied word-list files, with a built-in minimal table as a
//! fallback. Validation must never vacuously reject every word because a
//! data source went missing.

use super::dictionary::WordList;
use std::fs;
use std::io;
use std::path::Path;

/// Built-in minimal word table used when a word-list file cannot be read
const FALLBACK: &[&str] = &[
    "aa", "ab", "ad", "ae", "ah", "am", "an", "as", "at", "ax", "be", "by", "do", "go", "he",
    "hi", "if", "in", "is", "it", "me", "my", "no", "of", "on", "or", "ox", "pi", "qi", "so",
    "to", "up", "us", "we", "and", "are", "bat", "cat", "dog", "for", "not", "one", "the",
    "two", "was", "you", "word", "game", "play", "tile", "score",
];

/// The built-in minimal word table
#[must_use]
pub const fn fallback_words() -> &'static [&'static str] {
    FALLBACK
}

/// Load a word list from a file, one word per line
///
/// Entries are trimmed and lowercased; empty lines are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use scrabble_scorer::wordlists::loader::load_from_file;
///
/// let list = load_from_file("data/twl_base.txt").unwrap();
/// println!("Loaded {} words", list.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<WordList> {
    let content = fs::read_to_string(path)?;
    Ok(WordList::from_words(content.lines()))
}

/// Load a word list from a file, falling back to the built-in table
///
/// A read failure is recovered locally: it prints a warning and returns the
/// minimal table, so callers always get a usable, non-empty list.
#[must_use]
pub fn load_or_fallback<P: AsRef<Path>>(path: P) -> WordList {
    let path = path.as_ref();
    match load_from_file(path) {
        Ok(list) if !list.is_empty() => list,
        Ok(_) => {
            eprintln!(
                "Warning: word list {} is empty, using built-in minimal table",
                path.display()
            );
            WordList::from_words(FALLBACK.iter().copied())
        }
        Err(e) => {
            eprintln!(
                "Warning: could not read word list {} ({e}), using built-in minimal table",
                path.display()
            );
            WordList::from_words(FALLBACK.iter().copied())
        }
    }
}

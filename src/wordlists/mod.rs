//! Regional word lists
//!
//! Provides embedded per-region word lists compiled into the binary, plus
//! loading of user-supplied lists with a built-in fallback table.

mod dictionary;
mod embedded;
pub mod loader;

pub use dictionary::{Dictionary, Region, WordList};
pub use embedded::{INTL_EXTRA, INTL_EXTRA_COUNT, TWL_BASE, TWL_BASE_COUNT};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_count_matches_const() {
        assert_eq!(TWL_BASE.len(), TWL_BASE_COUNT);
    }

    #[test]
    fn extra_count_matches_const() {
        assert_eq!(INTL_EXTRA.len(), INTL_EXTRA_COUNT);
    }

    #[test]
    fn base_words_are_lowercase_ascii() {
        for &word in TWL_BASE {
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn extra_words_are_lowercase_ascii() {
        for &word in INTL_EXTRA {
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn base_words_are_playable_length() {
        for &word in TWL_BASE {
            assert!(word.len() >= 2, "Word '{word}' is below playable length");
        }
    }

    #[test]
    fn extras_are_disjoint_from_base() {
        let base: std::collections::HashSet<_> = TWL_BASE.iter().collect();
        for extra in INTL_EXTRA {
            assert!(
                !base.contains(extra),
                "Extra '{extra}' duplicates a baseline word"
            );
        }
    }

    #[test]
    fn baseline_has_common_short_words() {
        let base: std::collections::HashSet<_> = TWL_BASE.iter().collect();
        for word in ["to", "qi", "za", "cat"] {
            assert!(base.contains(&word), "Baseline missing '{word}'");
        }
    }

    #[test]
    fn extras_carry_regional_spellings() {
        let extras: std::collections::HashSet<_> = INTL_EXTRA.iter().collect();
        for word in ["colour", "realise", "centre"] {
            assert!(extras.contains(&word), "Extras missing '{word}'");
        }
    }
}

//! Word validation command
//!
//! Classifies a single word against the selected region, and reports how
//! the other regions see it so regional spelling differences show up.

use crate::engine::{Verdict, classify};
use crate::wordlists::{Dictionary, Region};

/// Result of checking one word
pub struct CheckResult {
    pub word: String,
    pub region: Region,
    pub verdict: Verdict,
    /// Verdicts for the regions other than the selected one
    pub elsewhere: Vec<(Region, Verdict)>,
}

/// Classify a word against a region, noting how other regions differ
#[must_use]
pub fn check_word(raw: &str, dictionary: &Dictionary, region: Region) -> CheckResult {
    let verdict = classify(raw, dictionary.list(region));

    let elsewhere = Region::ALL
        .into_iter()
        .filter(|&other| other != region)
        .map(|other| (other, classify(raw, dictionary.list(other))))
        .collect();

    CheckResult {
        word: raw.trim().to_uppercase(),
        region,
        verdict,
        elsewhere,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::WordList;

    fn dictionary() -> Dictionary {
        Dictionary::from_lists(
            WordList::from_words(["color", "to"]),
            WordList::from_words(["color", "to", "colour"]),
        )
    }

    #[test]
    fn check_reports_the_selected_region() {
        let result = check_word("to", &dictionary(), Region::NorthAmerican);
        assert_eq!(result.verdict, Verdict::Valid);
        assert_eq!(result.region, Region::NorthAmerican);
        assert_eq!(result.word, "TO");
    }

    #[test]
    fn regional_spelling_shows_up_elsewhere() {
        let result = check_word("colour", &dictionary(), Region::NorthAmerican);

        assert_eq!(result.verdict, Verdict::NotFound);
        assert_eq!(
            result.elsewhere,
            vec![(Region::International, Verdict::Valid)]
        );
    }

    #[test]
    fn malformed_input_is_malformed_everywhere() {
        let result = check_word("a7", &dictionary(), Region::International);
        assert_eq!(result.verdict, Verdict::InvalidCharacters);
        assert!(
            result
                .elsewhere
                .iter()
                .all(|(_, v)| *v == Verdict::InvalidCharacters)
        );
    }
}

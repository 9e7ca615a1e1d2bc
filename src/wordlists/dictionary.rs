//! Regional dictionaries
//!
//! A `WordList` is an immutable membership set of lowercase words; a
//! `Dictionary` holds one list per region. The international list is built
//! as a strict superset of the North-American baseline: every baseline word
//! plus a fixed set of alternate regional spellings.

use super::embedded::{INTL_EXTRA, TWL_BASE};
use rustc_hash::FxHashSet;
use std::fmt;

/// A named word-list variant selecting which dictionary to validate against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    /// North-American baseline list
    NorthAmerican,
    /// International list: the baseline plus alternate regional spellings
    International,
}

impl Region {
    /// All supported regions
    pub const ALL: [Self; 2] = [Self::NorthAmerican, Self::International];

    /// Parse a region from a CLI-friendly name
    ///
    /// Accepts `na`, `twl`, `north-american` for the baseline and `intl`,
    /// `sowpods`, `international` for the superset list.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "na" | "twl" | "north-american" | "northamerican" => Some(Self::NorthAmerican),
            "intl" | "sowpods" | "international" => Some(Self::International),
            _ => None,
        }
    }

    /// Canonical name for display and persistence
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NorthAmerican => "north-american",
            Self::International => "international",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An immutable set of accepted lowercase words
#[derive(Debug, Clone, Default)]
pub struct WordList {
    words: FxHashSet<String>,
}

impl WordList {
    /// Build a list from an iterator of words, normalizing to lowercase
    ///
    /// # Examples
    /// ```
    /// use scrabble_scorer::wordlists::WordList;
    ///
    /// let list = WordList::from_words(["To", "CAT"]);
    /// assert!(list.contains("to"));
    /// assert!(list.contains("cat"));
    /// ```
    #[must_use]
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }

    /// Consume the list and add more words to it
    #[must_use]
    pub fn union_with<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.words
            .extend(words.into_iter().map(|w| w.as_ref().trim().to_lowercase()));
        self
    }

    /// Membership test, case- and whitespace-insensitive
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.trim().to_lowercase())
    }

    /// Number of words in the list
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the list is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Per-region word lists, loaded once and read-only afterwards
///
/// Constructed explicitly and passed to whoever validates; there is no
/// process-wide shared instance.
#[derive(Debug, Clone)]
pub struct Dictionary {
    north_american: WordList,
    international: WordList,
}

impl Dictionary {
    /// Build the dictionary from the embedded regional lists
    #[must_use]
    pub fn embedded() -> Self {
        let north_american = WordList::from_words(TWL_BASE.iter().copied());
        let international = north_american.clone().union_with(INTL_EXTRA.iter().copied());
        Self {
            north_american,
            international,
        }
    }

    /// Build a dictionary from explicit per-region lists
    #[must_use]
    pub const fn from_lists(north_american: WordList, international: WordList) -> Self {
        Self {
            north_american,
            international,
        }
    }

    /// Use one custom list for every region
    ///
    /// Used when the caller supplies their own word-list file and regional
    /// variants no longer apply.
    #[must_use]
    pub fn uniform(list: WordList) -> Self {
        Self {
            north_american: list.clone(),
            international: list,
        }
    }

    /// The word list for a region
    #[must_use]
    pub const fn list(&self, region: Region) -> &WordList {
        match region {
            Region::NorthAmerican => &self.north_american,
            Region::International => &self.international,
        }
    }

    /// Membership test against a region's list
    #[must_use]
    pub fn contains(&self, word: &str, region: Region) -> bool {
        self.list(region).contains(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn region_parses_cli_names() {
        assert_eq!(Region::from_name("na"), Some(Region::NorthAmerican));
        assert_eq!(Region::from_name("TWL"), Some(Region::NorthAmerican));
        assert_eq!(Region::from_name("intl"), Some(Region::International));
        assert_eq!(Region::from_name(" international "), Some(Region::International));
        assert_eq!(Region::from_name("klingon"), None);
    }

    #[test]
    fn region_display_round_trips() {
        for region in Region::ALL {
            assert_eq!(Region::from_name(region.as_str()), Some(region));
        }
    }

    #[test]
    fn word_list_normalizes_on_ingest() {
        let list = WordList::from_words(["  CaT ", "to", ""]);
        assert_eq!(list.len(), 2);
        assert!(list.contains("cat"));
        assert!(list.contains("TO"));
    }

    #[test]
    fn word_list_lookup_normalizes() {
        let list = WordList::from_words(["cat"]);
        assert!(list.contains(" CAT "));
        assert!(!list.contains("dog"));
    }

    #[test]
    fn union_extends_the_list() {
        let list = WordList::from_words(["cat"]).union_with(["Colour"]);
        assert!(list.contains("cat"));
        assert!(list.contains("colour"));
    }

    #[test]
    fn dictionary_selects_list_by_region() {
        let dict = Dictionary::from_lists(
            WordList::from_words(["color"]),
            WordList::from_words(["color", "colour"]),
        );

        assert!(dict.contains("color", Region::NorthAmerican));
        assert!(!dict.contains("colour", Region::NorthAmerican));
        assert!(dict.contains("colour", Region::International));
    }

    #[test]
    fn embedded_international_is_superset_of_baseline() {
        let dict = Dictionary::embedded();

        assert!(dict.contains("to", Region::NorthAmerican));
        assert!(dict.contains("to", Region::International));
        assert!(dict.contains("colour", Region::International));
        assert!(!dict.contains("colour", Region::NorthAmerican));

        assert!(
            dict.list(Region::International).len() > dict.list(Region::NorthAmerican).len(),
            "International list must strictly extend the baseline"
        );
    }

    #[test]
    fn uniform_dictionary_ignores_region() {
        let dict = Dictionary::uniform(WordList::from_words(["cat"]));
        for region in Region::ALL {
            assert!(dict.contains("cat", region));
            assert!(!dict.contains("colour", region));
        }
    }
}

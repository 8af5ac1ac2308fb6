//! Official/primary share estimation.
//!
//! When a language is mentioned without a number, its share is guessed from
//! two boolean signals:
//!
//! * **official** – the word "official" follows the name inside the same
//!   clause (no `;` and no sentence-ending `.` in between);
//! * **primary** – the name first appears before a fixed character offset.
//!
//! The guess is a lookup in a [`ShareTable`]. Two presets exist, one for each
//! path that estimates: [`ShareTable::ALIAS_MATCH`] for target matching in
//! coverage estimation and [`ShareTable::EXTRACTION`] for the known-language
//! fallback during extraction.

use regex::Regex;
use serde::Serialize;

/// Character offset before which a first mention counts as primary.
pub const DEFAULT_PRIMARY_OFFSET: usize = 20;

/// Signals observed for one language name in one text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Signals {
    pub official: bool,
    pub primary: bool,
}

/// Estimated share for each combination of [`Signals`], most specific first.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ShareTable {
    pub official_primary: f64,
    pub official: f64,
    pub primary: f64,
    pub neither: f64,
}

impl ShareTable {
    /// Target matching: official ⇒ 90, anything else ⇒ 10. Position is ignored.
    pub const ALIAS_MATCH: ShareTable = ShareTable {
        official_primary: 90.0,
        official: 90.0,
        primary: 10.0,
        neither: 10.0,
    };

    /// Known-language fallback: 85 / 50 / 30 / 15.
    pub const EXTRACTION: ShareTable = ShareTable {
        official_primary: 85.0,
        official: 50.0,
        primary: 30.0,
        neither: 15.0,
    };

    #[inline]
    pub fn lookup(&self, signals: Signals) -> f64 {
        match (signals.official, signals.primary) {
            (true, true) => self.official_primary,
            (true, false) => self.official,
            (false, true) => self.primary,
            (false, false) => self.neither,
        }
    }

    pub(crate) fn cells(&self) -> [(&'static str, f64); 4] {
        [
            ("official_primary", self.official_primary),
            ("official", self.official),
            ("primary", self.primary),
            ("neither", self.neither),
        ]
    }
}

impl Default for ShareTable {
    fn default() -> Self {
        Self::ALIAS_MATCH
    }
}

/// `<term>` followed by "official" within the same clause.
///
/// Decimal points (`60.5`) do not end a clause.
pub(crate) fn official_pattern(term: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!(
        r"{}(?:[^;.]|\.\d)*\bofficial",
        regex::escape(term)
    ))
}

/// Like [`official_pattern`], but `term` must stand as a whole word.
pub(crate) fn official_word_pattern(term: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!(
        r"\b{}\b(?:[^;.]|\.\d)*\bofficial",
        regex::escape(term)
    ))
}

/// Compute both signals for an already-lowercased `term` in lowercased `text`.
pub(crate) fn signals(
    text: &str,
    term: &str,
    official: &Regex,
    primary_offset: usize,
) -> Signals {
    let primary = crate::text::char_offset(text, term).is_some_and(|at| at < primary_offset);
    Signals {
        official: official.is_match(text),
        primary,
    }
}

/// Both signals for a name whose first mention starts at byte `first`.
pub(crate) fn signals_at(
    text: &str,
    first: usize,
    official: &Regex,
    primary_offset: usize,
) -> Signals {
    Signals {
        official: official.is_match(text),
        primary: crate::text::byte_to_char(text, first) < primary_offset,
    }
}

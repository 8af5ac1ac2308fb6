//! Coverage estimation against a set of target languages.

use crate::{
    estimator::{Estimator, TermPatterns},
    text::{self, capitalize_first, fuzzy_match},
};
use regex::Regex;
use serde::Serialize;
use smallvec::SmallVec;
use std::sync::LazyLock;

/// Whole text is one word, optionally followed by `(official)`.
static SINGLE_LANGUAGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\p{L}+(?:\s*\(official\))?$").expect("static single-language pattern is valid")
});

/// Estimated share for one matched target language.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageShare {
    /// Target name as supplied by the caller.
    pub language: String,
    /// Unrounded estimate; use [`rounded`](Self::rounded) for display.
    pub percent: f64,
}

impl LanguageShare {
    #[inline]
    pub fn rounded(&self) -> u8 {
        self.percent.clamp(0.0, 100.0).round() as u8
    }
}

/// A material language of the country that no target covers.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MissingLanguage {
    pub language: String,
    pub percent: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverageResult {
    /// `round(clamp(sum(breakdown), 0, 100))`.
    pub total_percent: u8,
    pub breakdown: Vec<LanguageShare>,
    /// Sorted by descending share; ties keep discovery order.
    pub missing: Vec<MissingLanguage>,
}

impl CoverageResult {
    /// No target matched and nothing is missing.
    pub fn is_empty(&self) -> bool {
        self.total_percent == 0 && self.breakdown.is_empty() && self.missing.is_empty()
    }

    #[inline]
    pub fn not_reached(&self) -> u8 {
        100 - self.total_percent.min(100)
    }

    /// One-line listing of missing languages, e.g. `"Creole 20%, Wolof 8%"`.
    pub fn missing_summary(&self) -> String {
        self.missing
            .iter()
            .map(|m| format!("{} {}%", m.language, m.percent.round()))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl Estimator {
    /// Estimate how much of a country `details` describes is reached by
    /// `targets`.
    ///
    /// Never fails: blank details give [`CoverageResult::default`].
    pub fn estimate_coverage<S: AsRef<str>>(&self, details: &str, targets: &[S]) -> CoverageResult {
        if text::is_blank(details) {
            return CoverageResult::default();
        }

        let lowered = details.to_lowercase();
        let single = SINGLE_LANGUAGE.is_match(lowered.trim());

        let mut seen: SmallVec<[String; 4]> = SmallVec::new();
        let mut breakdown = Vec::new();

        for target in targets {
            let target = target.as_ref().trim();
            let key = target.to_lowercase();
            if key.is_empty() || seen.contains(&key) {
                continue;
            }
            seen.push(key);

            if let Some(percent) = self.match_target(&lowered, target, single) {
                breakdown.push(LanguageShare {
                    language: target.to_string(),
                    percent,
                });
            }
        }

        let sum: f64 = breakdown.iter().map(|b| b.percent).sum();
        let total_percent = sum.clamp(0.0, 100.0).round() as u8;
        let missing = self.missing_languages(&lowered, &breakdown);

        tracing::debug!(
            total_percent,
            matched = breakdown.len(),
            missing = missing.len(),
            "coverage estimated"
        );

        CoverageResult {
            total_percent,
            breakdown,
            missing,
        }
    }

    /// First alias of `target` found in `text` decides its share.
    fn match_target(&self, text: &str, target: &str, single: bool) -> Option<f64> {
        for term in self.ctx.search_terms(target) {
            let compiled;
            let patterns = match self.terms.get(&*term) {
                Some(p) => p,
                None => match TermPatterns::new(&term) {
                    Ok(p) => {
                        compiled = p;
                        &compiled
                    }
                    Err(err) => {
                        tracing::warn!(%term, %err, "skipping unsearchable term");
                        continue;
                    }
                },
            };

            if let Some(caps) = patterns.percent.captures(text)
                && let Ok(percent) = caps[1].parse::<f64>()
            {
                tracing::trace!(language = target, %term, percent, "explicit share");
                return Some(percent);
            }

            if text::contains(text, &term) {
                let percent = if single {
                    100.0
                } else {
                    let signals = crate::estimate::signals(
                        text,
                        &term,
                        &patterns.official,
                        self.config.primary_offset,
                    );
                    self.config.alias_table.lookup(signals)
                };
                tracing::trace!(language = target, %term, percent, single, "estimated share");
                return Some(percent);
            }
        }
        None
    }

    fn missing_languages(&self, text: &str, breakdown: &[LanguageShare]) -> Vec<MissingLanguage> {
        let mut missing: Vec<MissingLanguage> = self
            .extraction
            .run(text, &self.ctx)
            .into_iter()
            .filter(|l| l.share >= self.config.materiality)
            .filter(|l| !breakdown.iter().any(|b| fuzzy_match(&b.language, &l.name)))
            .map(|l| MissingLanguage {
                language: capitalize_first(&l.name),
                percent: l.share,
            })
            .collect();

        // stable: ties keep discovery order
        missing.sort_by(|a, b| b.percent.total_cmp(&a.percent));
        missing
    }
}

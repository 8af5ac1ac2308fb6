//! Language extraction from free-text details.
//!
//! Extraction runs an ordered list of [`Matcher`]s and keeps the output of the
//! first one that finds anything:
//!
//! 1. [`PercentMatcher`] – `<word or two words> [(parenthetical)...] <number>%`.
//!    Any number of parentheticals may sit between the name and the number.
//! 2. [`KnownNameMatcher`] – scans for known language names as whole words and
//!    estimates a share from the official/primary signals. A text that is nothing but one
//!    language name (optionally tagged official) short-circuits to that
//!    language at 100%.

use crate::{
    context::Context,
    estimate::{self, ShareTable},
};
use regex::Regex;
use serde::Serialize;
use std::sync::{Arc, LazyLock};

/// One language found in details text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExtractedLanguage {
    /// Lowercased, exactly as found (synonyms are not merged).
    pub name: String,
    /// Share of the population, `0 < share <= 100`.
    pub share: f64,
}

impl ExtractedLanguage {
    pub fn new(name: impl Into<String>, share: f64) -> Self {
        Self {
            name: name.into(),
            share,
        }
    }
}

/// A single extraction strategy.
pub trait Matcher: Send + Sync {
    /// Human-readable name – used in logs and test failures.
    fn name(&self) -> &'static str;

    /// Extract languages from lowercased, non-blank `text`.
    ///
    /// Must never return two entries with the same `name`.
    fn extract(&self, text: &str, ctx: &Context) -> Vec<ExtractedLanguage>;
}

// ─────────────────────────────────────────────────────────────────────────────
//  Percentage pattern
// ─────────────────────────────────────────────────────────────────────────────

static PERCENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(\p{L}+(?:\s+\p{L}+)?)\s*(?:\([^)]*\)\s*)*(\d+(?:\.\d+)?)%")
        .expect("static percentage pattern is valid")
});

/// Records every `<name> <number>%` pair, left to right.
pub struct PercentMatcher;

impl Matcher for PercentMatcher {
    fn name(&self) -> &'static str {
        "percent"
    }

    fn extract(&self, text: &str, ctx: &Context) -> Vec<ExtractedLanguage> {
        let mut found: Vec<ExtractedLanguage> = Vec::new();

        for caps in PERCENT.captures_iter(text) {
            let raw = caps[1]
                .split_whitespace()
                .collect::<Vec<_>>()
                .join(" ")
                .to_lowercase();
            let name = raw.strip_suffix(" only").unwrap_or(&raw);
            if ctx.is_stopword(name) {
                continue;
            }
            let Ok(share) = caps[2].parse::<f64>() else {
                continue;
            };
            if share <= 0.0 {
                continue;
            }
            if found.iter().any(|l| l.name == name) {
                continue;
            }
            found.push(ExtractedLanguage::new(name, share.min(100.0)));
        }

        found
    }
}

// ─────────────────────────────────────────────────────────────────────────────
//  Known-language fallback
// ─────────────────────────────────────────────────────────────────────────────

/// Compiled patterns for one known language name.
#[derive(Debug)]
pub(crate) struct KnownPattern {
    name: &'static str,
    word: Regex,
    official: Regex,
    single: Regex,
}

impl KnownPattern {
    pub(crate) fn new(name: &'static str) -> Result<Self, regex::Error> {
        let escaped = regex::escape(name);
        Ok(Self {
            name,
            word: Regex::new(&format!(r"\b{escaped}\b"))?,
            official: estimate::official_word_pattern(name)?,
            single: Regex::new(&format!(
                r"^{escaped}(?:\s*[(\[]?\s*official\s*[)\]]?)?$"
            ))?,
        })
    }
}

/// Looks for known language names and guesses their shares.
pub struct KnownNameMatcher {
    patterns: Vec<KnownPattern>,
    table: ShareTable,
    primary_offset: usize,
}

impl KnownNameMatcher {
    pub(crate) fn new(patterns: Vec<KnownPattern>, table: ShareTable, primary_offset: usize) -> Self {
        Self {
            patterns,
            table,
            primary_offset,
        }
    }

    /// Compile patterns for every name in `ctx.known`.
    pub fn from_context(
        ctx: &Context,
        table: ShareTable,
        primary_offset: usize,
    ) -> Result<Self, regex::Error> {
        let patterns = ctx
            .known
            .iter()
            .map(|&name| KnownPattern::new(name))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(patterns, table, primary_offset))
    }
}

impl Matcher for KnownNameMatcher {
    fn name(&self) -> &'static str {
        "known-name"
    }

    fn extract(&self, text: &str, _ctx: &Context) -> Vec<ExtractedLanguage> {
        let trimmed = text.trim();
        let mut found: Vec<ExtractedLanguage> = Vec::new();

        for p in &self.patterns {
            // "dari" inside "mandarin" is not a mention
            let Some(hit) = p.word.find(text) else {
                continue;
            };
            if p.single.is_match(trimmed) {
                tracing::trace!(language = p.name, "single-language text");
                return vec![ExtractedLanguage::new(p.name, 100.0)];
            }
            if found.iter().any(|l| l.name == p.name) {
                continue;
            }
            let signals = estimate::signals_at(text, hit.start(), &p.official, self.primary_offset);
            found.push(ExtractedLanguage::new(p.name, self.table.lookup(signals)));
        }

        found
    }
}

// ─────────────────────────────────────────────────────────────────────────────
//  Pipeline
// ─────────────────────────────────────────────────────────────────────────────

/// Ordered matchers; the first non-empty result wins.
#[derive(Clone)]
pub struct Extraction {
    matchers: Vec<Arc<dyn Matcher>>,
}

impl Extraction {
    pub fn new(matchers: Vec<Arc<dyn Matcher>>) -> Self {
        Self { matchers }
    }

    /// `text` must already be lowercased.
    pub fn run(&self, text: &str, ctx: &Context) -> Vec<ExtractedLanguage> {
        if crate::text::is_blank(text) {
            return Vec::new();
        }

        for matcher in &self.matchers {
            let found = matcher.extract(text, ctx);
            if !found.is_empty() {
                tracing::debug!(
                    matcher = matcher.name(),
                    count = found.len(),
                    "extracted languages"
                );
                return found;
            }
        }

        Vec::new()
    }
}

impl std::fmt::Debug for Extraction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.matchers.iter().map(|m| m.name()))
            .finish()
    }
}

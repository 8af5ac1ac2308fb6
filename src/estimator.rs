use crate::{
    context::Context,
    estimate::{DEFAULT_PRIMARY_OFFSET, ShareTable, official_pattern},
    extract::{ExtractedLanguage, Extraction, KnownNameMatcher, Matcher, PercentMatcher},
};
use regex::Regex;
use serde::Serialize;
use std::{collections::HashMap, sync::Arc};
use thiserror::Error;

/// Smallest share a language needs to be reported as missing.
pub const DEFAULT_MATERIALITY: f64 = 5.0;

#[derive(Debug, Error)]
pub enum EstimatorError {
    #[error("invalid configuration `{0}`: {1}")]
    InvalidConfig(&'static str, String),
    #[error("pattern compilation failed: {0}")]
    Pattern(#[from] regex::Error),
}

/// Tunable numbers of an [`Estimator`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    pub materiality: f64,
    pub primary_offset: usize,
    pub alias_table: ShareTable,
    pub extraction_table: ShareTable,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            materiality: DEFAULT_MATERIALITY,
            primary_offset: DEFAULT_PRIMARY_OFFSET,
            alias_table: ShareTable::ALIAS_MATCH,
            extraction_table: ShareTable::EXTRACTION,
        }
    }
}

impl Config {
    fn validate(&self) -> Result<(), EstimatorError> {
        if !(0.0..=100.0).contains(&self.materiality) {
            return Err(EstimatorError::InvalidConfig(
                "materiality",
                format!("{} is outside 0..=100", self.materiality),
            ));
        }
        for (which, table) in [
            ("alias_table", &self.alias_table),
            ("extraction_table", &self.extraction_table),
        ] {
            for (cell, share) in table.cells() {
                if !(0.0..=100.0).contains(&share) {
                    return Err(EstimatorError::InvalidConfig(
                        which,
                        format!("{cell} = {share} is outside 0..=100"),
                    ));
                }
            }
        }
        Ok(())
    }
}

/// Compiled search patterns for one alias term.
#[derive(Debug)]
pub(crate) struct TermPatterns {
    /// `term … <number>%`, number in group 1.
    pub(crate) percent: Regex,
    pub(crate) official: Regex,
}

impl TermPatterns {
    pub(crate) fn new(term: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            percent: Regex::new(&format!(
                r"{}[^0-9]*([0-9]+\.?[0-9]*)%",
                regex::escape(term)
            ))?,
            official: official_pattern(term)?,
        })
    }
}

/// Language-coverage estimator.
///
/// Immutable once built; share one instance across threads freely.
pub struct Estimator {
    pub(crate) ctx: Context,
    pub(crate) config: Config,
    pub(crate) terms: HashMap<&'static str, TermPatterns>,
    pub(crate) extraction: Extraction,
}

impl Estimator {
    pub fn builder() -> EstimatorBuilder {
        EstimatorBuilder::default()
    }

    #[inline]
    pub fn config(&self) -> &Config {
        &self.config
    }

    #[inline]
    pub fn context(&self) -> &Context {
        &self.ctx
    }

    /// Every language mentioned in `text` with its (possibly estimated) share.
    pub fn extract_languages(&self, text: &str) -> Vec<ExtractedLanguage> {
        if crate::text::is_blank(text) {
            return Vec::new();
        }
        self.extraction.run(&text.to_lowercase(), &self.ctx)
    }
}

impl Default for Estimator {
    fn default() -> Self {
        Self::builder()
            .build()
            .expect("built-in language tables failed to compile – this is a bug")
    }
}

impl std::fmt::Debug for Estimator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Estimator")
            .field("config", &self.config)
            .field("terms", &self.terms.len())
            .field("extraction", &self.extraction)
            .finish()
    }
}

pub struct EstimatorBuilder {
    ctx: Context,
    config: Config,
    extra: Vec<Arc<dyn Matcher>>,
}

impl Default for EstimatorBuilder {
    fn default() -> Self {
        Self {
            ctx: Context::default(),
            config: Config::default(),
            extra: Vec::new(),
        }
    }
}

impl EstimatorBuilder {
    pub fn context(mut self, ctx: Context) -> Self {
        self.ctx = ctx;
        self
    }

    pub fn config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    pub fn materiality(mut self, percent: f64) -> Self {
        self.config.materiality = percent;
        self
    }

    pub fn primary_offset(mut self, chars: usize) -> Self {
        self.config.primary_offset = chars;
        self
    }

    pub fn alias_table(mut self, table: ShareTable) -> Self {
        self.config.alias_table = table;
        self
    }

    pub fn extraction_table(mut self, table: ShareTable) -> Self {
        self.config.extraction_table = table;
        self
    }

    /// Use one table for both target matching and the known-name fallback.
    pub fn uniform_table(self, table: ShareTable) -> Self {
        self.alias_table(table).extraction_table(table)
    }

    /// Append a matcher after the built-in ones. It only runs when every
    /// earlier matcher came back empty.
    pub fn add_matcher<M: Matcher + 'static>(mut self, matcher: M) -> Self {
        self.extra.push(Arc::new(matcher));
        self
    }

    pub fn build(self) -> Result<Estimator, EstimatorError> {
        self.config.validate()?;

        let mut terms = HashMap::new();
        for aliases in self.ctx.aliases.values() {
            for &term in aliases.iter() {
                if !terms.contains_key(term) {
                    terms.insert(term, TermPatterns::new(term)?);
                }
            }
        }

        let known = KnownNameMatcher::from_context(
            &self.ctx,
            self.config.extraction_table,
            self.config.primary_offset,
        )?;
        let mut matchers: Vec<Arc<dyn Matcher>> = vec![Arc::new(PercentMatcher), Arc::new(known)];
        matchers.extend(self.extra);

        tracing::debug!(
            terms = terms.len(),
            known = self.ctx.known.len(),
            matchers = matchers.len(),
            "estimator built"
        );

        Ok(Estimator {
            ctx: self.ctx,
            config: self.config,
            terms,
            extraction: Extraction::new(matchers),
        })
    }
}

pub mod audience;
pub mod context;
pub mod coverage;
pub mod dataset;
pub mod error;
pub mod estimate;
pub mod estimator;
pub mod extract;
pub mod lang;
pub mod text;

#[cfg(test)]
pub mod testing;

use std::sync::LazyLock;

pub use audience::{AudienceReport, CountryCoverage};
pub use context::Context;
pub use coverage::{CoverageResult, LanguageShare, MissingLanguage};
pub use dataset::{CountryRecord, CountryTable, DatasetError};
pub use error::{LangcovError, Result};
pub use estimate::{ShareTable, Signals};
pub use estimator::{Config, Estimator, EstimatorBuilder, EstimatorError};
pub use extract::{ExtractedLanguage, Matcher};
pub use lang::{DEFAULT_TARGETS, Lang, default_target_names};
pub use lang::data::{
    ARABIC, BENGALI, CHINESE, DUTCH, ENGLISH, FRENCH, GERMAN, HINDI, INDONESIAN, ITALIAN,
    JAPANESE, KOREAN, POLISH, PORTUGUESE, RUSSIAN, SPANISH, SWEDISH, THAI, TURKISH, URDU,
    VIETNAMESE,
};

static DEFAULT_ESTIMATOR: LazyLock<Estimator> = LazyLock::new(Estimator::default);

/// Shared estimator with the built-in tables and default configuration.
pub fn default_estimator() -> &'static Estimator {
    &DEFAULT_ESTIMATOR
}

/// [`Estimator::extract_languages`] on the default estimator.
pub fn extract_languages(text: &str) -> Vec<ExtractedLanguage> {
    DEFAULT_ESTIMATOR.extract_languages(text)
}

/// [`Estimator::estimate_coverage`] on the default estimator.
pub fn estimate_coverage<S: AsRef<str>>(details: &str, targets: &[S]) -> CoverageResult {
    DEFAULT_ESTIMATOR.estimate_coverage(details, targets)
}

//! Per-country audience coverage.

use crate::{
    coverage::{CoverageResult, LanguageShare, MissingLanguage},
    dataset::CountryTable,
    estimator::Estimator,
};
use serde::Serialize;

/// Coverage of one audience country.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryCoverage {
    pub code: String,
    pub name: String,
    pub population: u64,
    pub reached: u8,
    pub not_reached: u8,
    pub breakdown: Vec<LanguageShare>,
    pub missing: Vec<MissingLanguage>,
}

impl CountryCoverage {
    fn new(code: &str, name: String, population: u64, coverage: CoverageResult) -> Self {
        Self {
            code: code.trim().to_uppercase(),
            name,
            population,
            reached: coverage.total_percent,
            not_reached: coverage.not_reached(),
            breakdown: coverage.breakdown,
            missing: coverage.missing,
        }
    }

    /// Estimated number of people reached.
    pub fn reached_population(&self) -> u64 {
        (self.population as f64 * f64::from(self.reached) / 100.0).round() as u64
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AudienceReport {
    pub languages: Vec<String>,
    /// Sum of the populations of every known country in the report.
    pub total_audience: u64,
    /// Sum of [`CountryCoverage::reached_population`].
    pub audience_reached: u64,
    pub audience_not_reached: u64,
    /// Share of `total_audience` not reached, 0–100. Zero for an empty audience.
    pub not_reached_percent: f64,
    pub countries: Vec<CountryCoverage>,
}

impl AudienceReport {
    fn new(languages: Vec<String>, countries: Vec<CountryCoverage>) -> Self {
        let total_audience: u64 = countries.iter().map(|c| c.population).sum();
        let audience_reached: u64 = countries.iter().map(CountryCoverage::reached_population).sum();
        let audience_not_reached = total_audience.saturating_sub(audience_reached);

        Self {
            languages,
            total_audience,
            audience_reached,
            audience_not_reached,
            not_reached_percent: percent_of(audience_not_reached, total_audience),
            countries,
        }
    }

    /// Population-weighted share of the audience reached, 0–100.
    pub fn reached_percent(&self) -> f64 {
        percent_of(self.audience_reached, self.total_audience)
    }
}

fn percent_of(part: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (part as f64 / total as f64 * 100.0).min(100.0)
}

impl Estimator {
    /// Coverage row for one country. Unknown codes give a zero row.
    pub fn country_coverage<S: AsRef<str>>(
        &self,
        table: &CountryTable,
        code: &str,
        targets: &[S],
    ) -> CountryCoverage {
        match table.get(code) {
            Some(record) => {
                let coverage = self.estimate_coverage(&record.details, targets);
                CountryCoverage::new(code, record.name.clone(), record.population, coverage)
            }
            None => {
                tracing::debug!(code, "no dataset entry for country");
                CountryCoverage::new(code, String::new(), 0, CoverageResult::default())
            }
        }
    }

    /// Coverage rows for `codes`, in the order given.
    pub fn audience_report<C: AsRef<str>, S: AsRef<str>>(
        &self,
        table: &CountryTable,
        codes: &[C],
        targets: &[S],
    ) -> AudienceReport {
        let countries = codes
            .iter()
            .map(|code| self.country_coverage(table, code.as_ref(), targets))
            .collect();
        let languages = targets.iter().map(|t| t.as_ref().to_string()).collect();

        AudienceReport::new(languages, countries)
    }
}

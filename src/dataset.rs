//! Country details dataset.
//!
//! Reads the CSV written by the Factbook fetch script:
//!
//! ```text
//! "Code","Name","Languages","Population","Language_Details"
//! "FR","France","French",68170228,"French (official) 100%, ..."
//! ```
//!
//! One record per line. Fields may be double-quoted; `""` inside a quoted
//! field is a literal quote. Malformed rows are skipped with a warning.

use serde::Serialize;
use std::{
    collections::HashMap,
    fs::File,
    io::{self, BufRead, BufReader},
    mem::take,
    path::Path,
};
use thiserror::Error;

const FIELDS: usize = 5;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("dataset `{0}` has no header line")]
    MissingHeader(String),
}

/// One country row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountryRecord {
    pub code: String,
    pub name: String,
    /// Short language list, e.g. `"French"`.
    pub languages: String,
    pub population: u64,
    /// Free-text language demographics fed to the estimator.
    pub details: String,
}

/// Country records keyed by upper-cased code, in file order.
#[derive(Debug, Clone, Default)]
pub struct CountryTable {
    records: Vec<CountryRecord>,
    index: HashMap<String, usize>,
}

impl CountryTable {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let table = Self::parse(BufReader::new(file), &path.display().to_string())?;
        tracing::info!(path = %path.display(), countries = table.len(), "loaded country dataset");
        Ok(table)
    }

    pub fn from_reader(reader: impl BufRead) -> Result<Self, DatasetError> {
        Self::parse(reader, "<reader>")
    }

    fn parse(reader: impl BufRead, source: &str) -> Result<Self, DatasetError> {
        let mut lines = reader.lines();
        match lines.next() {
            Some(header) => {
                header?;
            }
            None => return Err(DatasetError::MissingHeader(source.to_string())),
        }

        let mut table = Self::default();
        for (n, line) in lines.enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            match parse_record(&line) {
                Some(record) => table.insert(record),
                // header is line 1
                None => tracing::warn!(source, line = n + 2, "skipping malformed row"),
            }
        }
        Ok(table)
    }

    /// Later rows with the same code replace earlier ones.
    pub fn insert(&mut self, record: CountryRecord) {
        let key = record.code.to_uppercase();
        match self.index.get(&key) {
            Some(&i) => self.records[i] = record,
            None => {
                self.index.insert(key, self.records.len());
                self.records.push(record);
            }
        }
    }

    /// Case-insensitive lookup by country code.
    pub fn get(&self, code: &str) -> Option<&CountryRecord> {
        self.index
            .get(&code.trim().to_uppercase())
            .map(|&i| &self.records[i])
    }

    pub fn iter(&self) -> impl Iterator<Item = &CountryRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl FromIterator<CountryRecord> for CountryTable {
    fn from_iter<I: IntoIterator<Item = CountryRecord>>(iter: I) -> Self {
        let mut table = Self::default();
        for record in iter {
            table.insert(record);
        }
        table
    }
}

fn parse_record(line: &str) -> Option<CountryRecord> {
    let fields = split_fields(line);
    if fields.len() < FIELDS {
        return None;
    }
    let mut fields = fields.into_iter();
    let mut next = || fields.next().unwrap_or_default();

    let code = next();
    if code.trim().is_empty() {
        return None;
    }
    let name = next();
    let languages = next();
    let population = next().trim().parse().unwrap_or(0);
    let details = next();

    Some(CountryRecord {
        code: code.trim().to_string(),
        name,
        languages,
        population,
        details,
    })
}

/// Split one CSV line on commas outside quotes.
pub(crate) fn split_fields(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = line.trim_end_matches(['\r', '\n']).chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    field.push('"');
                } else {
                    in_quotes = false;
                }
            }
            '"' => in_quotes = true,
            ',' if !in_quotes => fields.push(take(&mut field)),
            c => field.push(c),
        }
    }
    fields.push(field);
    fields
}

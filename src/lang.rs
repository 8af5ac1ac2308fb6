pub mod data;

use phf::{Map, Set};

pub use data::{ALIAS_TABLE, KNOWN_LANGUAGES, STOPLIST, all_langs, from_name};

/// Alias map: lowercased canonical name → textual variants searched for.
pub type AliasTable = Map<&'static str, &'static [&'static str]>;

/// Names the percentage pass never records.
pub type Stoplist = Set<&'static str>;

/// A canonical target language with a known alias set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Lang {
    pub key: &'static str,
    pub name: &'static str,
}

impl Lang {
    /// Lowercased lookup key, e.g. `"chinese"`.
    #[inline(always)]
    pub const fn key(&self) -> &'static str {
        self.key
    }

    /// Display name, e.g. `"Chinese"`.
    #[inline(always)]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Variants searched for in details text. Always contains at least the key.
    pub fn aliases(&self) -> &'static [&'static str] {
        ALIAS_TABLE.get(self.key).copied().unwrap_or(&[])
    }
}

impl std::fmt::Display for Lang {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name)
    }
}

pub const DEFAULT_TARGETS: [Lang; 2] = [data::ENGLISH, data::CHINESE];

/// Display names of [`DEFAULT_TARGETS`], in order.
pub fn default_target_names() -> Vec<&'static str> {
    DEFAULT_TARGETS.iter().map(Lang::name).collect()
}

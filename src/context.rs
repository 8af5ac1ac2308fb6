//! Read-only language tables handed to the estimator.

use crate::lang::{ALIAS_TABLE, AliasTable, KNOWN_LANGUAGES, STOPLIST, Stoplist};
use smallvec::{SmallVec, smallvec};
use std::borrow::Cow;

/// Static tables every estimation reads from.
///
/// The defaults are the built-in tables from [`crate::lang::data`]. Tests and
/// callers with their own dataset conventions can swap any of them before
/// building an [`Estimator`](crate::Estimator).
#[derive(Debug, Clone, Copy)]
pub struct Context {
    pub aliases: &'static AliasTable,
    pub known: &'static [&'static str],
    pub stoplist: &'static Stoplist,
}

impl Default for Context {
    #[inline(always)]
    fn default() -> Self {
        Self {
            aliases: &ALIAS_TABLE,
            known: KNOWN_LANGUAGES,
            stoplist: &STOPLIST,
        }
    }
}

impl Context {
    /// Start from the built-in tables and let the caller replace fields.
    #[inline(always)]
    pub fn with_modified(f: impl FnOnce(&mut Context)) -> Self {
        let mut ctx = Self::default();
        f(&mut ctx);
        ctx
    }

    /// Search terms for a target, lowercased. Unknown targets search for
    /// themselves.
    pub fn search_terms(&self, target: &str) -> SmallVec<[Cow<'static, str>; 4]> {
        let lower = target.trim().to_lowercase();
        match self.aliases.get(lower.as_str()) {
            Some(aliases) if !aliases.is_empty() => {
                aliases.iter().map(|a| Cow::Borrowed(*a)).collect()
            }
            _ => smallvec![Cow::Owned(lower)],
        }
    }

    #[inline]
    pub fn is_stopword(&self, name: &str) -> bool {
        self.stoplist.contains(name)
    }
}

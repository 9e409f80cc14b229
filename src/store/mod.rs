//! Translation storage.
//!
//! The resolver only needs two things from a backend: the set of registered
//! locales and a per-locale key lookup. [`MemoryStore`] is the in-process
//! implementation fed by the [`loader`].

use std::{
    collections::{BTreeMap, BTreeSet},
    ops::Bound,
    sync::Arc,
};

use crate::core::Locale;

pub mod loader;

pub use loader::{LoadSummary, load, load_file};

/// Result of looking up one fully-qualified key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup<'a> {
    /// A translation leaf.
    Text(&'a str),
    /// An internal node: other keys are nested below this one.
    Branch,
}

/// A key/value backend queried per locale.
pub trait TranslationStore {
    /// Locales with at least one loaded entry.
    fn available_locales(&self) -> BTreeSet<Locale>;

    /// Whether `locale` has at least one loaded entry.
    fn is_available(&self, locale: &str) -> bool {
        self.available_locales().contains(locale)
    }

    fn lookup(&self, locale: &str, key: &str) -> Option<Lookup<'_>>;
}

/// A store handle that call contexts can hold on to.
pub type SharedStore = Arc<dyn TranslationStore + Send + Sync>;

impl<T: TranslationStore + ?Sized> TranslationStore for &T {
    fn available_locales(&self) -> BTreeSet<Locale> {
        (**self).available_locales()
    }

    fn is_available(&self, locale: &str) -> bool {
        (**self).is_available(locale)
    }

    fn lookup(&self, locale: &str, key: &str) -> Option<Lookup<'_>> {
        (**self).lookup(locale, key)
    }
}

impl<T: TranslationStore + ?Sized> TranslationStore for Arc<T> {
    fn available_locales(&self) -> BTreeSet<Locale> {
        (**self).available_locales()
    }

    fn is_available(&self, locale: &str) -> bool {
        (**self).is_available(locale)
    }

    fn lookup(&self, locale: &str, key: &str) -> Option<Lookup<'_>> {
        (**self).lookup(locale, key)
    }
}

/// Flat dotted-key maps, one per locale.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    locales: BTreeMap<Locale, BTreeMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, locale: &str, key: impl Into<String>, value: impl Into<String>) {
        self.locales
            .entry(locale.to_string())
            .or_default()
            .insert(key.into(), value.into());
    }

    /// Merge entries into `locale`; later values replace existing ones.
    pub fn merge<I, K, V>(&mut self, locale: &str, entries: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let map = self.locales.entry(locale.to_string()).or_default();
        map.extend(entries.into_iter().map(|(k, v)| (k.into(), v.into())));
    }

    /// Number of entries in `locale`.
    pub fn len(&self, locale: &str) -> usize {
        self.locales.get(locale).map_or(0, BTreeMap::len)
    }

    pub fn is_empty(&self) -> bool {
        self.locales.values().all(BTreeMap::is_empty)
    }
}

impl TranslationStore for MemoryStore {
    fn available_locales(&self) -> BTreeSet<Locale> {
        self.locales
            .iter()
            .filter(|(_, entries)| !entries.is_empty())
            .map(|(locale, _)| locale.clone())
            .collect()
    }

    fn is_available(&self, locale: &str) -> bool {
        self.locales
            .get(locale)
            .is_some_and(|entries| !entries.is_empty())
    }

    fn lookup(&self, locale: &str, key: &str) -> Option<Lookup<'_>> {
        let entries = self.locales.get(locale)?;
        if let Some(value) = entries.get(key) {
            return Some(Lookup::Text(value));
        }

        // Keys are ordered, so the first key after `key.` tells whether
        // anything is nested below it.
        let prefix = format!("{}.", key);
        let nested = entries
            .range::<str, _>((Bound::Included(prefix.as_str()), Bound::Unbounded))
            .next()
            .is_some_and(|(candidate, _)| candidate.starts_with(&prefix));
        nested.then_some(Lookup::Branch)
    }
}

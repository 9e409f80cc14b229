//! Message resolution.
//!
//! Resolution walks the locale chain `[current, base]` and, for each locale,
//! every scope candidate from the most specific to the bare key. The first
//! non-empty text value wins and is converted into the context's format.
//!
//! With scopes `["outer", "inner"]`, current locale `de` and base `en`, the
//! key `msg` is tried as:
//!
//! 1. `de: outer.inner.msg`
//! 2. `de: outer.msg`
//! 3. `de: msg`
//! 4. `en: outer.inner.msg`
//! 5. `en: outer.msg`
//! 6. `en: msg`
//!
//! A candidate that lands on an internal node (a prefix of other keys) is a
//! miss. When every candidate misses, the miss is logged once per
//! `(locale, key)` and either reported as [`MissingTranslation`] or swallowed,
//! depending on the caller's policy.

use std::{
    collections::BTreeSet,
    sync::{Arc, Mutex, PoisonError},
};

use tracing::warn;

use super::{Context, Format, Locale, MessageKey, convert, escape_html, interpolate};
use crate::store::{Lookup, SharedStore, TranslationStore};

/// What to do when a key cannot be resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnMiss {
    Raise,
    ReturnNone,
}

/// No translation exists for a key in any locale of the fallback chain.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Missing translation: [{locale}] {key:?}")]
pub struct MissingTranslation {
    /// The locale that was active when the lookup failed.
    pub locale: Locale,
    /// The key as requested, without scope prefixes.
    pub key: String,
    /// The dotted scope path at the time of the lookup.
    pub scope: String,
}

pub struct Resolver<S> {
    store: Arc<S>,
    base_locale: Locale,
    default_format: Format,
    missing: Mutex<BTreeSet<(Locale, String)>>,
}

impl<S: TranslationStore> Resolver<S> {
    pub fn new(store: S, base_locale: impl Into<Locale>) -> Self {
        Self {
            store: Arc::new(store),
            base_locale: base_locale.into(),
            default_format: Format::Text,
            missing: Mutex::new(BTreeSet::new()),
        }
    }

    /// Set the format of contexts created by [`Resolver::context`].
    pub fn with_default_format(mut self, format: Format) -> Self {
        self.default_format = format;
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn base_locale(&self) -> &str {
        &self.base_locale
    }

    /// Resolve `key` in `ctx`.
    ///
    /// Returns `Ok(None)` on a miss with [`OnMiss::ReturnNone`], and
    /// `Err(MissingTranslation)` on a miss with [`OnMiss::Raise`].
    pub fn resolve(
        &self,
        ctx: &Context,
        key: &str,
        on_miss: OnMiss,
    ) -> Result<Option<String>, MissingTranslation> {
        if let Some(value) = self.lookup(ctx, key) {
            return Ok(Some(convert(ctx.current_format(), value).into_owned()));
        }

        let missing = self.record_missing(ctx, key);
        match on_miss {
            OnMiss::Raise => Err(missing),
            OnMiss::ReturnNone => Ok(None),
        }
    }

    /// Translate a message key and interpolate `params`.
    ///
    /// A lenient key that cannot be resolved renders as its own text; a strict
    /// key fails with [`MissingTranslation`].
    pub fn t(
        &self,
        ctx: &Context,
        key: &MessageKey<'_>,
        params: &[(&str, &str)],
    ) -> Result<String, MissingTranslation> {
        let format = ctx.current_format();
        let text = match self.resolve(ctx, key.as_str(), OnMiss::ReturnNone)? {
            Some(text) => text,
            None if key.is_strict() => return Err(self.missing_error(ctx, key.as_str())),
            // The key is literal text: authoring tags in it are not interpreted.
            None => match format {
                Format::Text => key.as_str().to_string(),
                Format::Html => escape_html(key.as_str()).into_owned(),
            },
        };
        Ok(interpolate(&text, params, format).into_owned())
    }

    /// Like [`Resolver::t`], but a strict miss yields `None`.
    pub fn t_opt(
        &self,
        ctx: &Context,
        key: &MessageKey<'_>,
        params: &[(&str, &str)],
    ) -> Option<String> {
        self.t(ctx, key, params).ok()
    }

    /// Every `(locale, key)` pair that missed so far, sorted.
    pub fn missing(&self) -> Vec<(Locale, String)> {
        self.missing
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .cloned()
            .collect()
    }

    fn lookup(&self, ctx: &Context, key: &str) -> Option<&str> {
        let current = ctx.current_locale();
        let base = ctx.base_locale();
        let chain = if current == base {
            vec![current]
        } else {
            vec![current, base]
        };

        for locale in chain {
            for candidate in ctx.scopes().candidates(key) {
                match self.store.lookup(locale, &candidate) {
                    Some(Lookup::Text(value)) if !value.is_empty() => return Some(value),
                    Some(Lookup::Text(_)) | Some(Lookup::Branch) | None => {}
                }
            }
        }
        None
    }

    fn record_missing(&self, ctx: &Context, key: &str) -> MissingTranslation {
        let missing = self.missing_error(ctx, key);
        let first_time = self
            .missing
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert((missing.locale.clone(), missing.key.clone()));

        if first_time {
            warn!(
                locale = %missing.locale,
                key = %missing.key,
                candidate = %ctx.scopes().first(key),
                "missing translation"
            );
        }
        missing
    }

    fn missing_error(&self, ctx: &Context, key: &str) -> MissingTranslation {
        MissingTranslation {
            locale: ctx.current_locale().to_string(),
            key: key.to_string(),
            scope: ctx.scope_path().to_string(),
        }
    }
}

impl<S: TranslationStore + Send + Sync + 'static> Resolver<S> {
    /// A fresh call context over this resolver's store.
    pub fn context(&self) -> Context {
        let store: SharedStore = self.store.clone();
        Context::new(store, self.base_locale.clone()).with_default_format(self.default_format)
    }
}

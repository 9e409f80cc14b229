//! Call-local translation context: locale, output format, and scope stack.
//!
//! A `Context` belongs to exactly one logical execution unit (a request, a
//! task, a test) and is passed by `&mut` through the call chain. Nested
//! overrides are applied through [`ScopeGuard`], which restores the previous
//! state when dropped, so early returns and panics inside a scoped body never
//! leak a partial change.
//!
//! ```
//! use std::sync::Arc;
//!
//! use locus::core::{Context, Format, ScopeOptions};
//! use locus::store::MemoryStore;
//!
//! let mut store = MemoryStore::new();
//! store.insert("de", "title", "Hallo");
//!
//! let mut ctx = Context::new(Arc::new(store), "en");
//! ctx.with_scope(
//!     ScopeOptions::new().locale("de").format(Format::Html).scope("outer"),
//!     |ctx| {
//!         assert_eq!(ctx.current_locale(), "de");
//!         assert_eq!(ctx.scope_path(), "outer");
//!     },
//! );
//! assert_eq!(ctx.current_locale(), "en");
//! assert_eq!(ctx.current_format(), Format::Text);
//! ```

use std::{
    fmt, mem,
    ops::{Deref, DerefMut},
};

use super::{Format, Locale, ScopeStack};
use crate::store::SharedStore;

/// Overrides applied by [`Context::with_scope`].
#[derive(Debug, Clone, Default)]
pub struct ScopeOptions {
    pub locale: Option<Locale>,
    pub format: Option<Format>,
    pub segments: Vec<String>,
}

impl ScopeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn locale(mut self, locale: impl Into<Locale>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    pub fn format(mut self, format: Format) -> Self {
        self.format = Some(format);
        self
    }

    pub fn scope(mut self, segment: impl Into<String>) -> Self {
        self.segments.push(segment.into());
        self
    }

    pub fn scopes<I, S>(mut self, segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.segments.extend(segments.into_iter().map(Into::into));
        self
    }
}

#[derive(Clone)]
pub struct Context {
    store: SharedStore,
    base_locale: Locale,
    locale: Option<Locale>,
    format: Option<Format>,
    default_format: Format,
    scopes: ScopeStack,
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context")
            .field("base_locale", &self.base_locale)
            .field("locale", &self.locale)
            .field("format", &self.format)
            .field("default_format", &self.default_format)
            .field("scopes", &self.scopes)
            .finish_non_exhaustive()
    }
}

impl Context {
    /// A context over `store`. Locale overrides are checked against the
    /// store's locales at the time they are applied.
    pub fn new(store: SharedStore, base_locale: impl Into<Locale>) -> Self {
        Self {
            store,
            base_locale: base_locale.into(),
            locale: None,
            format: None,
            default_format: Format::Text,
            scopes: ScopeStack::new(),
        }
    }

    /// Set the format used when no override is active.
    pub fn with_default_format(mut self, format: Format) -> Self {
        self.default_format = format;
        self
    }

    pub fn base_locale(&self) -> &str {
        &self.base_locale
    }

    /// The active locale, falling back to the base locale.
    pub fn current_locale(&self) -> &str {
        self.locale.as_deref().unwrap_or(&self.base_locale)
    }

    /// The active format, falling back to the default format (`text`).
    pub fn current_format(&self) -> Format {
        self.format.unwrap_or(self.default_format)
    }

    /// The base locale, or any locale the store has entries for.
    pub fn available(&self, locale: &str) -> bool {
        locale == self.base_locale || self.store.is_available(locale)
    }

    pub fn scopes(&self) -> &ScopeStack {
        &self.scopes
    }

    /// The dotted path of the active scopes.
    pub fn scope_path(&self) -> &str {
        self.scopes.path()
    }

    /// Apply `options` until the returned guard is dropped.
    ///
    /// An unavailable locale is replaced by the base locale. On drop the
    /// pushed segments are popped first, then locale and format are restored.
    pub fn enter(&mut self, options: ScopeOptions) -> ScopeGuard<'_> {
        let saved_locale = self.locale.clone();
        let saved_format = self.format;

        if let Some(locale) = options.locale {
            let locale = if self.available(&locale) {
                locale
            } else {
                self.base_locale.clone()
            };
            self.locale = Some(locale);
        }
        if let Some(format) = options.format {
            self.format = Some(format);
        }

        let pushed = options.segments.len();
        for segment in options.segments {
            self.scopes.push(segment);
        }

        ScopeGuard {
            ctx: self,
            pushed,
            saved_locale,
            saved_format,
            saved_scopes: None,
        }
    }

    /// Run `body` with `options` applied, restoring the previous state afterwards.
    pub fn with_scope<R>(
        &mut self,
        options: ScopeOptions,
        body: impl FnOnce(&mut Context) -> R,
    ) -> R {
        let mut guard = self.enter(options);
        body(&mut *guard)
    }

    /// Run `body` in `locale`.
    pub fn locale<R>(
        &mut self,
        locale: impl Into<Locale>,
        body: impl FnOnce(&mut Context) -> R,
    ) -> R {
        self.with_scope(ScopeOptions::new().locale(locale), body)
    }

    /// Run `body` in `format`.
    pub fn format<R>(&mut self, format: Format, body: impl FnOnce(&mut Context) -> R) -> R {
        self.with_scope(ScopeOptions::new().format(format), body)
    }

    /// Run `body` with `segments` pushed onto the scope stack.
    pub fn scope<I, S, R>(&mut self, segments: I, body: impl FnOnce(&mut Context) -> R) -> R
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.with_scope(ScopeOptions::new().scopes(segments), body)
    }

    /// Run `body` with a fresh scope stack made of `segments` only.
    ///
    /// The enclosing scopes are hidden from lookups in `body` and come back
    /// afterwards.
    pub fn root_scope<I, S, R>(&mut self, segments: I, body: impl FnOnce(&mut Context) -> R) -> R
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut root = ScopeStack::new();
        for segment in segments {
            root.push(segment);
        }

        let saved_scopes = mem::replace(&mut self.scopes, root);
        let mut guard = ScopeGuard {
            saved_locale: self.locale.clone(),
            saved_format: self.format,
            ctx: self,
            pushed: 0,
            saved_scopes: Some(saved_scopes),
        };
        body(&mut *guard)
    }
}

/// Restores a [`Context`] when dropped, see [`Context::enter`].
#[derive(Debug)]
pub struct ScopeGuard<'a> {
    ctx: &'a mut Context,
    pushed: usize,
    saved_locale: Option<Locale>,
    saved_format: Option<Format>,
    saved_scopes: Option<ScopeStack>,
}

impl Deref for ScopeGuard<'_> {
    type Target = Context;

    fn deref(&self) -> &Context {
        self.ctx
    }
}

impl DerefMut for ScopeGuard<'_> {
    fn deref_mut(&mut self) -> &mut Context {
        self.ctx
    }
}

impl Drop for ScopeGuard<'_> {
    fn drop(&mut self) {
        match self.saved_scopes.take() {
            Some(scopes) => self.ctx.scopes = scopes,
            None => {
                for _ in 0..self.pushed {
                    self.ctx.scopes.pop();
                }
            }
        }
        self.ctx.locale = self.saved_locale.take();
        self.ctx.format = self.saved_format;
    }
}

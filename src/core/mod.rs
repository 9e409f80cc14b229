//! Scoped message resolution.
//!
//! ## Module Structure
//!
//! - `scope`: ScopeStack and candidate key generation
//! - `context`: Call-local locale/format/scope state with guarded overrides
//! - `format`: Output formats and stored-value conversion
//! - `key`: Lenient and strict message keys
//! - `resolve`: Resolver orchestrating lookup, fallback, and miss handling
//! - `template`: `{* name *}` parameter interpolation

pub mod context;
pub mod format;
pub mod key;
pub mod resolve;
pub mod scope;
pub mod template;

pub use context::{Context, ScopeGuard, ScopeOptions};
pub use format::{Format, convert, escape_html};
pub use key::MessageKey;
pub use resolve::{MissingTranslation, OnMiss, Resolver};
pub use scope::{Candidates, ScopeStack};
pub use template::interpolate;

/// Locale identifier (e.g. `"en"`, `"de"`).
pub type Locale = String;

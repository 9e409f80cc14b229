//! Locus - scoped message resolution for localized applications
//!
//! Locus resolves translation keys against nested scopes with locale
//! fallback, and reads translations from indentation-based TR sources and
//! nested JSON files.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (`check`, `keys`, `lookup`, `init`)
//! - `config`: Configuration file loading and parsing
//! - `core`: Scope stack, call context, formats and the resolver
//! - `issues`: Issue types reported by `locus check`
//! - `parsers`: TR and JSON source parsers
//! - `store`: Translation store interface, in-memory store and source loading

pub mod cli;
pub mod config;
pub mod core;
pub mod issues;
pub mod parsers;
pub mod store;

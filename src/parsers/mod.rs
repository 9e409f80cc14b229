//! Translation source parsers.
//!
//! - `tr`: the indentation-structured TR format
//! - `json`: nested JSON objects flattened to dotted keys

pub mod json;
pub mod tr;

pub use json::parse_json;
pub use tr::{DuplicateEntry, ParseError, TrDocument, TrEntry, TrParser};

use std::collections::BTreeMap;

use anyhow::{Context, Result};
use serde_json::Value;

/// Parse JSON translation source into a flat dotted-key map.
///
/// Only string leaves produce entries; numbers, booleans, nulls and arrays
/// are skipped.
pub fn parse_json(content: &str) -> Result<BTreeMap<String, String>> {
    let json: Value = serde_json::from_str(content).context("Invalid JSON translation source")?;

    let mut entries = BTreeMap::new();
    flatten_json(&json, String::new(), &mut entries);
    Ok(entries)
}

fn flatten_json(value: &Value, prefix: String, result: &mut BTreeMap<String, String>) {
    match value {
        Value::Object(map) => {
            for (key, val) in map {
                let new_prefix = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{}.{}", prefix, key)
                };
                flatten_json(val, new_prefix, result);
            }
        }
        Value::String(s) if !prefix.is_empty() => {
            result.insert(prefix, s.clone());
        }
        _ => {}
    }
}

//! Loading translation sources into a [`MemoryStore`].
//!
//! A source file named after a two-letter locale (`de.tr`, `en.json`) holds
//! that locale's keys. Any other file (`messages.tr`) must use locale ids as
//! its top-level keys:
//!
//! ```text
//! en:
//!   title: Hello
//! de:
//!   title: Hallo
//! ```

use std::{
    collections::{BTreeMap, BTreeSet},
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use tracing::{debug, warn};
use walkdir::WalkDir;

use super::MemoryStore;
use crate::{
    core::Locale,
    parsers::{TrParser, parse_json},
};

/// Supported source formats, by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Tr,
    Json,
}

impl SourceFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("tr") => Some(SourceFormat::Tr),
            Some("json") => Some(SourceFormat::Json),
            _ => None,
        }
    }
}

/// What a [`load`] call merged into the store.
#[derive(Debug, Default)]
pub struct LoadSummary {
    pub files: Vec<PathBuf>,
    pub locales: BTreeSet<Locale>,
    pub entries: usize,
}

impl LoadSummary {
    fn absorb(&mut self, path: PathBuf, loaded: BTreeMap<Locale, usize>) {
        self.files.push(path);
        for (locale, count) in loaded {
            self.entries += count;
            self.locales.insert(locale);
        }
    }
}

/// Load every source matching `pattern` (a glob, a file, or a directory).
pub fn load(store: &mut MemoryStore, pattern: &str) -> Result<LoadSummary> {
    let mut summary = LoadSummary::default();
    for path in expand_sources(pattern)? {
        let loaded = load_file(store, &path)?;
        summary.absorb(path, loaded);
    }
    Ok(summary)
}

/// Load one source file. Returns the number of entries merged per locale.
pub fn load_file(store: &mut MemoryStore, path: &Path) -> Result<BTreeMap<Locale, usize>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read translation source: {}", path.display()))?;
    let entries = parse_source(path, &content)?;

    let mut loaded = BTreeMap::new();
    match file_locale(path) {
        Some(locale) => {
            loaded.insert(locale.clone(), entries.len());
            store.merge(&locale, entries);
        }
        None => {
            for (locale, entries) in split_by_locale(path, entries) {
                loaded.insert(locale.clone(), entries.len());
                store.merge(&locale, entries);
            }
        }
    }

    debug!(path = %path.display(), locales = ?loaded, "loaded translation source");
    Ok(loaded)
}

/// Parse a source according to its extension.
pub fn parse_source(path: &Path, content: &str) -> Result<BTreeMap<String, String>> {
    match SourceFormat::from_path(path) {
        Some(SourceFormat::Tr) => Ok(TrParser::named(content, path.display().to_string())
            .parse()?
            .into_map()),
        Some(SourceFormat::Json) => parse_json(content)
            .with_context(|| format!("Failed to parse JSON file: {}", path.display())),
        None => bail!(
            "Unsupported translation source format: {} (expected .tr or .json)",
            path.display()
        ),
    }
}

/// Expand a source pattern into the files it names, sorted.
///
/// A directory is walked recursively for `.tr` and `.json` files.
pub fn expand_sources(pattern: &str) -> Result<Vec<PathBuf>> {
    let root = Path::new(pattern);
    let mut files = Vec::new();

    if root.is_dir() {
        for entry in WalkDir::new(root) {
            let entry = entry.with_context(|| format!("Cannot access path under {}", pattern))?;
            let path = entry.path();
            if entry.file_type().is_file() && SourceFormat::from_path(path).is_some() {
                files.push(path.to_path_buf());
            }
        }
    } else {
        let paths = glob::glob(pattern)
            .with_context(|| format!("Invalid source pattern: \"{}\"", pattern))?;
        for path in paths {
            let path = path.with_context(|| format!("Cannot access path matched by {}", pattern))?;
            if path.is_file() {
                files.push(path);
            }
        }
    }

    files.sort();
    Ok(files)
}

/// The locale a file is named after, if its stem is two characters long.
fn file_locale(path: &Path) -> Option<Locale> {
    let stem = path.file_stem()?.to_str()?;
    (stem.chars().count() == 2).then(|| stem.to_string())
}

/// Split `locale.key` entries into per-locale maps.
fn split_by_locale(
    path: &Path,
    entries: BTreeMap<String, String>,
) -> BTreeMap<Locale, BTreeMap<String, String>> {
    let mut by_locale: BTreeMap<Locale, BTreeMap<String, String>> = BTreeMap::new();
    for (key, value) in entries {
        match key.split_once('.') {
            Some((locale, rest)) => {
                by_locale
                    .entry(locale.to_string())
                    .or_default()
                    .insert(rest.to_string(), value);
            }
            None => warn!(
                path = %path.display(),
                key = %key,
                "top-level entry outside a locale ignored"
            ),
        }
    }
    by_locale
}

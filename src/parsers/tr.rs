//! Parser for the TR translation source format.
//!
//! TR is an indentation-structured, line-oriented format:
//!
//! ```text
//! # comment
//! outer:
//!   inner:
//!     x1: "en/outer/inner/x1"
//! info: |
//!   first line
//!   second line
//! ```
//!
//! Indentation opens scopes; the fully-qualified key of a line is the dot-join
//! of every scope still open at a smaller or equal indentation. A scope can be
//! reopened later in the file to add more leaves. `key: |` starts a multi-line
//! value made of every following line that is indented deeper than the key.
//!
//! Parsing produces a flat map from dotted key to value. Internal nodes such as
//! `outer.inner` never appear in the map.

use std::{
    borrow::Cow,
    collections::{BTreeMap, btree_map::Entry},
    sync::LazyLock,
};

use regex::Regex;
use tracing::warn;

/// `<indent><key>:<rest>`. The key runs up to the first colon.
static ENTRY_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\s*)([^:]+):(.*)$").unwrap());

/// A malformed TR line. Parsing stops at the first one.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{}: format error in {content:?}", location(.name, .line))]
pub struct ParseError {
    /// Source name (usually the file path), if known.
    pub name: Option<String>,
    /// 1-based line number.
    pub line: usize,
    /// The offending line.
    pub content: String,
}

fn location(name: &Option<String>, line: &usize) -> String {
    match name {
        Some(name) => format!("{}({})", name, line),
        None => format!("Line {}", line),
    }
}

/// One emitted key/value pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrEntry {
    pub key: String,
    pub value: String,
    /// Line of the key that produced this entry.
    pub line: usize,
}

/// A key emitted more than once; the later value won.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateEntry {
    pub key: String,
    pub line: usize,
    pub first_line: usize,
}

/// Parsed TR source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrDocument {
    pub entries: BTreeMap<String, String>,
    pub duplicates: Vec<DuplicateEntry>,
}

impl TrDocument {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn into_map(self) -> BTreeMap<String, String> {
        self.entries
    }
}

/// Parse `source` into a flat dotted-key map.
pub fn parse(source: &str) -> Result<BTreeMap<String, String>, ParseError> {
    TrParser::new(source).parse().map(TrDocument::into_map)
}

pub struct TrParser<'a> {
    source: &'a str,
    name: Option<String>,
}

impl<'a> TrParser<'a> {
    pub fn new(source: &'a str) -> Self {
        Self { source, name: None }
    }

    /// A parser whose errors and diagnostics mention `name`.
    pub fn named(source: &'a str, name: impl Into<String>) -> Self {
        Self {
            source,
            name: Some(name.into()),
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Parse into a map. Repeated keys keep the last value and are reported
    /// in [`TrDocument::duplicates`].
    pub fn parse(&self) -> Result<TrDocument, ParseError> {
        let mut document = TrDocument::default();
        let mut lines_seen: BTreeMap<String, usize> = BTreeMap::new();

        self.for_each_entry(|entry| {
            match lines_seen.entry(entry.key.clone()) {
                Entry::Occupied(mut seen) => {
                    warn!(
                        source = self.name().unwrap_or("<input>"),
                        key = %entry.key,
                        line = entry.line,
                        "duplicate entry"
                    );
                    document.duplicates.push(DuplicateEntry {
                        key: entry.key.clone(),
                        line: entry.line,
                        first_line: *seen.get(),
                    });
                    seen.insert(entry.line);
                }
                Entry::Vacant(slot) => {
                    slot.insert(entry.line);
                }
            }
            document.entries.insert(entry.key, entry.value);
        })?;

        Ok(document)
    }

    /// All keys, sorted and de-duplicated.
    pub fn keys(&self) -> Result<Vec<String>, ParseError> {
        let mut keys = Vec::new();
        self.for_each_entry(|entry| keys.push(entry.key))?;
        keys.sort();
        keys.dedup();
        Ok(keys)
    }

    /// Run the parser, handing every entry to `emit` in source order.
    pub fn for_each_entry(&self, mut emit: impl FnMut(TrEntry)) -> Result<(), ParseError> {
        let mut lines = LineReader::new(self.source);
        let mut scopes = ScopeTracker::default();

        while let Some(line) = lines.next_line() {
            let trimmed = line.trim_start();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            let lineno = lines.lineno();
            let Some(caps) = ENTRY_REGEX.captures(line) else {
                return Err(self.error(lineno, line));
            };
            let indent = caps[1].chars().count();
            let key = &caps[2];
            let rest = caps[3].trim();

            // Whitespace-only keys are rejected on purpose: they would name an empty scope segment.
            if key.trim().is_empty() {
                return Err(self.error(lineno, line));
            }

            match rest.strip_prefix('|') {
                Some(after_pipe) if after_pipe.trim().is_empty() => {
                    scopes.register(indent, evaluate(key).into_owned());
                    let value = read_block(&mut lines, indent);
                    emit(TrEntry {
                        key: scopes.current_key(),
                        value,
                        line: lineno,
                    });
                }
                Some(_) => return Err(self.error(lineno, line)),
                None => {
                    scopes.register(indent, evaluate(key).into_owned());
                    if !rest.is_empty() {
                        emit(TrEntry {
                            key: scopes.current_key(),
                            value: evaluate(rest).into_owned(),
                            line: lineno,
                        });
                    }
                }
            }
        }

        Ok(())
    }

    fn error(&self, line: usize, content: &str) -> ParseError {
        ParseError {
            name: self.name.clone(),
            line,
            content: content.to_string(),
        }
    }
}

/// Collect the body of a multi-line value opened at `indent`.
///
/// Blank lines are kept as empty lines. The first non-blank line at or below
/// `indent` ends the block and is pushed back for the main loop.
fn read_block<'a>(lines: &mut LineReader<'a>, indent: usize) -> String {
    let mut value: Vec<&'a str> = Vec::new();

    while let Some(line) = lines.next_line() {
        let content = line.trim_start();
        if content.is_empty() {
            value.push("");
            continue;
        }

        let line_indent = line.chars().count() - content.chars().count();
        if line_indent <= indent {
            lines.push_back(line);
            break;
        }
        value.push(content.trim_end());
    }

    value.join("\n")
}

/// Scope segments keyed by indentation width, shallowest first.
#[derive(Debug, Default)]
struct ScopeTracker {
    segments: Vec<(usize, String)>,
}

impl ScopeTracker {
    /// Register `name` at `indent`, closing every scope at the same or a deeper width.
    fn register(&mut self, indent: usize, name: String) {
        let keep = self
            .segments
            .iter()
            .take_while(|(width, _)| *width < indent)
            .count();
        self.segments.truncate(keep);
        self.segments.push((indent, name));
    }

    fn current_key(&self) -> String {
        self.segments
            .iter()
            .map(|(_, name)| name.as_str())
            .collect::<Vec<_>>()
            .join(".")
    }
}

/// Line reader with a one-line pushback buffer.
struct LineReader<'a> {
    lines: std::str::Lines<'a>,
    lineno: usize,
    pushed_back: Option<&'a str>,
}

impl<'a> LineReader<'a> {
    fn new(source: &'a str) -> Self {
        Self {
            lines: source.lines(),
            lineno: 0,
            pushed_back: None,
        }
    }

    fn next_line(&mut self) -> Option<&'a str> {
        if let Some(line) = self.pushed_back.take() {
            return Some(line);
        }
        let line = self.lines.next()?;
        self.lineno += 1;
        Some(line)
    }

    fn push_back(&mut self, line: &'a str) {
        self.pushed_back = Some(line);
    }

    /// Line number of the line most recently returned.
    fn lineno(&self) -> usize {
        self.lineno
    }
}

/// Strip matching outer quotes and resolve backslash escapes.
///
/// Unquoted input is returned as is.
fn evaluate(s: &str) -> Cow<'_, str> {
    let mut chars = s.chars();
    let (Some(first), Some(last)) = (chars.next(), chars.next_back()) else {
        return Cow::Borrowed(s);
    };
    if first != last || !matches!(first, '"' | '\'') {
        return Cow::Borrowed(s);
    }

    let inner = chars.as_str();
    let mut out = String::with_capacity(inner.len());
    let mut iter = inner.chars();
    while let Some(c) = iter.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match iter.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }
    Cow::Owned(out)
}

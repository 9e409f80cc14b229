//! Issue types reported by `locus check`.
//!
//! Each issue carries everything the reporter needs: the file, the line, the
//! offending source line when available, and a message.

use std::cmp::Ordering;

/// Severity level of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Rule identifier for each issue type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rule {
    ParseError,
    LoadError,
    DuplicateKey,
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rule::ParseError => write!(f, "parse-error"),
            Rule::LoadError => write!(f, "load-error"),
            Rule::DuplicateKey => write!(f, "duplicate-key"),
        }
    }
}

/// A malformed line in a TR source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseErrorIssue {
    pub file_path: String,
    pub line: usize,
    pub source_line: String,
}

/// A source that could not be read or decoded at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadErrorIssue {
    pub file_path: String,
    pub error: String,
}

/// A key defined more than once in the same source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateKeyIssue {
    pub file_path: String,
    pub key: String,
    pub line: usize,
    pub first_line: usize,
    pub source_line: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    ParseError(ParseErrorIssue),
    LoadError(LoadErrorIssue),
    DuplicateKey(DuplicateKeyIssue),
}

impl Issue {
    pub fn severity(&self) -> Severity {
        match self {
            Issue::ParseError(_) | Issue::LoadError(_) => Severity::Error,
            Issue::DuplicateKey(_) => Severity::Warning,
        }
    }

    pub fn rule(&self) -> Rule {
        match self {
            Issue::ParseError(_) => Rule::ParseError,
            Issue::LoadError(_) => Rule::LoadError,
            Issue::DuplicateKey(_) => Rule::DuplicateKey,
        }
    }

    pub fn file_path(&self) -> &str {
        match self {
            Issue::ParseError(i) => &i.file_path,
            Issue::LoadError(i) => &i.file_path,
            Issue::DuplicateKey(i) => &i.file_path,
        }
    }

    /// 1-based line, or 0 for whole-file issues.
    pub fn line(&self) -> usize {
        match self {
            Issue::ParseError(i) => i.line,
            Issue::LoadError(_) => 0,
            Issue::DuplicateKey(i) => i.line,
        }
    }

    pub fn source_line(&self) -> Option<&str> {
        match self {
            Issue::ParseError(i) => Some(&i.source_line),
            Issue::LoadError(_) => None,
            Issue::DuplicateKey(i) => i.source_line.as_deref(),
        }
    }

    pub fn message(&self) -> String {
        match self {
            Issue::ParseError(_) => "format error".to_string(),
            Issue::LoadError(i) => i.error.clone(),
            Issue::DuplicateKey(i) => format!("duplicate entry \"{}\"", i.key),
        }
    }

    pub fn details(&self) -> Option<String> {
        match self {
            Issue::DuplicateKey(i) => Some(format!(
                "first defined at line {}; the later value wins",
                i.first_line
            )),
            Issue::ParseError(_) => {
                Some("expected `key: value`, `key: |`, a comment, or a blank line".to_string())
            }
            Issue::LoadError(_) => None,
        }
    }
}

impl PartialOrd for Issue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Issue {
    fn cmp(&self, other: &Self) -> Ordering {
        self.file_path()
            .cmp(other.file_path())
            .then(self.line().cmp(&other.line()))
            .then(self.rule().cmp(&other.rule()))
            .then_with(|| self.message().cmp(&other.message()))
    }
}

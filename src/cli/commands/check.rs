use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Result;
use colored::Colorize;
use rayon::prelude::*;

use super::super::{
    args::CheckCommand,
    exit_status::ExitStatus,
    report::{print_success, report},
};
use super::helper::Settings;
use crate::{
    issues::{DuplicateKeyIssue, Issue, LoadErrorIssue, ParseErrorIssue, Severity},
    parsers::{TrParser, parse_json},
    store::loader::{SourceFormat, expand_sources},
};

/// Outcome of checking one source file.
#[derive(Debug, Default)]
pub struct FileCheck {
    pub keys: usize,
    pub issues: Vec<Issue>,
}

pub fn check(cmd: CheckCommand) -> Result<ExitStatus> {
    let settings = Settings::load(&cmd.common)?;

    let mut files: Vec<PathBuf> = Vec::new();
    for pattern in settings.source_patterns(&cmd.sources) {
        files.extend(expand_sources(&pattern)?);
    }
    files.sort();
    files.dedup();

    if files.is_empty() {
        eprintln!(
            "{} no translation sources matched",
            "warning:".bold().yellow()
        );
        return Ok(ExitStatus::Success);
    }

    let results: Vec<FileCheck> = files
        .par_iter()
        .map(|path| {
            let display = path.strip_prefix(&settings.root_dir).unwrap_or(path);
            check_file(path, &display.display().to_string())
        })
        .collect();

    let keys: usize = results.iter().map(|r| r.keys).sum();
    let issues: Vec<Issue> = results.into_iter().flat_map(|r| r.issues).collect();

    if issues.is_empty() {
        print_success(files.len(), keys);
        return Ok(ExitStatus::Success);
    }

    report(&issues);
    if issues.iter().any(|i| i.severity() == Severity::Error) {
        Ok(ExitStatus::Failure)
    } else {
        Ok(ExitStatus::Success)
    }
}

/// Parse one source and collect its issues. `display` is the path shown in reports.
pub fn check_file(path: &Path, display: &str) -> FileCheck {
    let load_error = |error: String| FileCheck {
        keys: 0,
        issues: vec![Issue::LoadError(LoadErrorIssue {
            file_path: display.to_string(),
            error,
        })],
    };

    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) => return load_error(format!("cannot read file: {}", err)),
    };

    match SourceFormat::from_path(path) {
        Some(SourceFormat::Tr) => check_tr(&content, display),
        Some(SourceFormat::Json) => match parse_json(&content) {
            Ok(entries) => FileCheck {
                keys: entries.len(),
                issues: Vec::new(),
            },
            Err(err) => load_error(format!("{:#}", err)),
        },
        None => load_error("unsupported source format (expected .tr or .json)".to_string()),
    }
}

fn check_tr(content: &str, display: &str) -> FileCheck {
    let source_line = |line: usize| content.lines().nth(line.saturating_sub(1)).map(str::to_string);

    match TrParser::named(content, display).parse() {
        Ok(document) => FileCheck {
            keys: document.entries.len(),
            issues: document
                .duplicates
                .into_iter()
                .map(|dup| {
                    Issue::DuplicateKey(DuplicateKeyIssue {
                        file_path: display.to_string(),
                        source_line: source_line(dup.line),
                        key: dup.key,
                        line: dup.line,
                        first_line: dup.first_line,
                    })
                })
                .collect(),
        },
        Err(err) => FileCheck {
            keys: 0,
            issues: vec![Issue::ParseError(ParseErrorIssue {
                file_path: display.to_string(),
                line: err.line,
                source_line: err.content,
            })],
        },
    }
}

//! Report formatting and printing utilities.
//!
//! Displays issues in cargo-style format. Kept out of the core so `locus`
//! can be used as a library without pulling in terminal output.

use std::io::{self, Write};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use crate::issues::{Issue, Severity};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print issues in cargo-style format to stdout.
pub fn report(issues: &[Issue]) {
    report_to(issues, &mut io::stdout().lock());
}

/// Print issues to a custom writer.
pub fn report_to<W: Write>(issues: &[Issue], writer: &mut W) {
    if issues.is_empty() {
        return;
    }

    let mut sorted = issues.to_vec();
    sorted.sort();

    let max_line_width = calculate_max_line_width(&sorted);

    for issue in &sorted {
        print_issue(issue, writer, max_line_width);
    }

    print_summary(&sorted, writer);
}

/// Print a success message when no issues are found.
pub fn print_success(files: usize, keys: usize) {
    print_success_to(files, keys, &mut io::stdout().lock());
}

pub fn print_success_to<W: Write>(files: usize, keys: usize, writer: &mut W) {
    let msg = format!(
        "Checked {} translation {}, {} {} - no issues found",
        files,
        if files == 1 { "file" } else { "files" },
        keys,
        if keys == 1 { "key" } else { "keys" }
    );
    let _ = writeln!(writer, "{} {}", SUCCESS_MARK.green(), msg.green());
}

fn print_issue<W: Write>(issue: &Issue, writer: &mut W, max_line_width: usize) {
    let severity = issue.severity();
    let severity_str = match severity {
        Severity::Error => "error".bold().red(),
        Severity::Warning => "warning".bold().yellow(),
    };

    let _ = writeln!(
        writer,
        "{}: {}  {}",
        severity_str,
        issue.message(),
        issue.rule().to_string().dimmed().cyan()
    );

    let line = issue.line();
    if line == 0 {
        let _ = writeln!(writer, "  {} {}", "-->".blue(), issue.file_path());
    } else {
        let _ = writeln!(
            writer,
            "  {} {}:{}",
            "-->".blue(),
            issue.file_path(),
            line
        );
    }

    if let Some(source_line) = issue.source_line() {
        let caret_char = match severity {
            Severity::Error => "^".red(),
            Severity::Warning => "^".yellow(),
        };

        let _ = writeln!(
            writer,
            "{:>width$} {}",
            "",
            "|".blue(),
            width = max_line_width
        );
        let _ = writeln!(
            writer,
            "{:>width$} {} {}",
            line.to_string().blue(),
            "|".blue(),
            source_line,
            width = max_line_width
        );

        // Underline the line's content, skipping its indentation.
        let trimmed = source_line.trim_start();
        let indent = &source_line[..source_line.len() - trimmed.len()];
        let padding = UnicodeWidthStr::width(indent);
        let carets = caret_char.to_string().repeat(UnicodeWidthStr::width(trimmed).max(1));
        let _ = writeln!(
            writer,
            "{:>width$} {} {:>padding$}{}",
            "",
            "|".blue(),
            "",
            carets,
            width = max_line_width,
            padding = padding
        );
    }

    if let Some(details) = issue.details() {
        let _ = writeln!(
            writer,
            "{:>width$} {} {} {}",
            "",
            "=".blue(),
            "note:".bold(),
            details,
            width = max_line_width
        );
    }

    let _ = writeln!(writer);
}

fn print_summary<W: Write>(issues: &[Issue], writer: &mut W) {
    let error_count = issues
        .iter()
        .filter(|i| i.severity() == Severity::Error)
        .count();
    let warning_count = issues.len() - error_count;

    let _ = writeln!(
        writer,
        "{} {} ({} {}, {} {})",
        FAILURE_MARK.red(),
        format!(
            "{} {}",
            issues.len(),
            if issues.len() == 1 { "problem" } else { "problems" }
        )
        .red()
        .bold(),
        error_count,
        if error_count == 1 { "error" } else { "errors" },
        warning_count,
        if warning_count == 1 {
            "warning"
        } else {
            "warnings"
        }
    );
}

fn calculate_max_line_width(issues: &[Issue]) -> usize {
    issues
        .iter()
        .filter(|i| i.source_line().is_some())
        .map(|i| i.line().to_string().len())
        .max()
        .unwrap_or(1)
}

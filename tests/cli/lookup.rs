use std::process::Command;

use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;

use crate::CliTest;

const EN: &str = "\
title: a < b
x1: en/x1
outer:
  inner:
    x1: en/outer/inner/x1
  y1: en/outer/y1
greeting: Hello {* name *}
markup: html:<b>bold</b>
";

const DE: &str = "\
title: Hallo
x1: de/x1
";

fn project() -> Result<CliTest> {
    let test = CliTest::with_file("i18n/en.tr", EN)?;
    test.write_file("i18n/de.tr", DE)?;
    Ok(test)
}

fn lookup(test: &CliTest, key: &str, args: &[&str]) -> Command {
    let mut cmd = test.lookup_command(key);
    cmd.args(args);
    cmd
}

#[test]
fn test_lookup_base_locale() -> Result<()> {
    let test = project()?;

    assert_cmd_snapshot!(lookup(&test, "title", &[]), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    a < b

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_lookup_locale() -> Result<()> {
    let test = project()?;

    assert_cmd_snapshot!(lookup(&test, "title", &["--locale", "de"]), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Hallo

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_lookup_unavailable_locale_uses_base() -> Result<()> {
    let test = project()?;

    assert_cmd_snapshot!(lookup(&test, "x1", &["--locale", "fr"]), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    en/x1

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_lookup_through_scopes() -> Result<()> {
    let test = project()?;

    let scoped = ["--scope", "outer", "--scope", "inner"];
    assert_cmd_snapshot!(lookup(&test, "x1", &scoped), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    en/outer/inner/x1

    ----- stderr -----
    ");
    assert_cmd_snapshot!(lookup(&test, "y1", &scoped), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    en/outer/y1

    ----- stderr -----
    ");

    // Locale is the outer loop: the German root entry wins over the English scoped one.
    let german = ["--scope", "outer", "--scope", "inner", "--locale", "de"];
    assert_cmd_snapshot!(lookup(&test, "x1", &german), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    de/x1

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_lookup_html_format() -> Result<()> {
    let test = project()?;

    assert_cmd_snapshot!(lookup(&test, "title", &["--format", "html"]), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    a &lt; b

    ----- stderr -----
    ");
    assert_cmd_snapshot!(lookup(&test, "markup", &["--format", "html"]), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    <b>bold</b>

    ----- stderr -----
    ");
    assert_cmd_snapshot!(lookup(&test, "markup", &[]), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    <b>bold</b>

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_lookup_default_format_from_config() -> Result<()> {
    let test = project()?;
    test.write_file(".locusrc.json", r#"{ "defaultFormat": "html" }"#)?;

    assert_cmd_snapshot!(lookup(&test, "title", &[]), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    a &lt; b

    ----- stderr -----
    ");
    assert_cmd_snapshot!(lookup(&test, "title", &["--format", "text"]), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    a < b

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_lookup_params() -> Result<()> {
    let test = project()?;

    assert_cmd_snapshot!(lookup(&test, "greeting", &["--param", "name=<Ada>"]), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Hello <Ada>

    ----- stderr -----
    ");
    assert_cmd_snapshot!(
        lookup(&test, "greeting", &["--param", "name=<Ada>", "--format", "html"]),
        @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Hello &lt;Ada&gt;

    ----- stderr -----
    "
    );

    Ok(())
}

#[test]
fn test_lenient_miss_prints_key() -> Result<()> {
    let test = project()?;

    assert_cmd_snapshot!(lookup(&test, "Some plain text", &[]), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Some plain text

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_lenient_miss_keeps_format_tag() -> Result<()> {
    let test = project()?;

    assert_cmd_snapshot!(lookup(&test, "text: see below", &[]), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    text: see below

    ----- stderr -----
    ");
    assert_cmd_snapshot!(lookup(&test, "html:<i>x</i>", &["--format", "html"]), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    html:&lt;i&gt;x&lt;/i&gt;

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_strict_miss_fails() -> Result<()> {
    let test = project()?;

    assert_cmd_snapshot!(lookup(&test, "nope", &["--strict", "--scope", "outer"]), @r#"
    success: false
    exit_code: 1
    ----- stdout -----

    ----- stderr -----
    error: Missing translation: [en] "nope"
      = scope: outer
    "#);

    Ok(())
}

#[test]
fn test_base_locale_override() -> Result<()> {
    let test = project()?;

    assert_cmd_snapshot!(lookup(&test, "title", &["--base-locale", "de"]), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Hallo

    ----- stderr -----
    ");

    Ok(())
}

use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;

use crate::CliTest;

const EN: &str = "\
# greetings
title: Hello
outer:
  inner:
    x1: en/outer/inner/x1
  y1: en/outer/y1
body: |
  first line
  second line
";

#[test]
fn test_clean_sources() -> Result<()> {
    let test = CliTest::with_file("i18n/en.tr", EN)?;
    test.write_file("i18n/de.json", r#"{"title": "Hallo", "outer": {"y1": "de/outer/y1"}}"#)?;

    assert_cmd_snapshot!(test.check_command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Checked 2 translation files, 6 keys - no issues found

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_parse_error() -> Result<()> {
    let test = CliTest::with_file("i18n/en.tr", "title: Hello\nml: | av\n")?;

    assert_cmd_snapshot!(test.check_command(), @r"
    success: false
    exit_code: 1
    ----- stdout -----
    error: format error  parse-error
      --> i18n/en.tr:2
      |
    2 | ml: | av
      | ^^^^^^^^
      = note: expected `key: value`, `key: |`, a comment, or a blank line

    ✘ 1 problem (1 error, 0 warnings)

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_duplicate_keys_are_warnings() -> Result<()> {
    let test = CliTest::with_file("i18n/en.tr", "t: one\nouter:\n  a: 1\nt: two\n")?;

    assert_cmd_snapshot!(test.check_command(), @r#"
    success: true
    exit_code: 0
    ----- stdout -----
    warning: duplicate entry "t"  duplicate-key
      --> i18n/en.tr:4
      |
    4 | t: two
      | ^^^^^^
      = note: first defined at line 1; the later value wins

    ✘ 1 problem (0 errors, 1 warning)

    ----- stderr -----
    "#);

    Ok(())
}

#[test]
fn test_invalid_json() -> Result<()> {
    let test = CliTest::with_file("i18n/de.json", "{ not json")?;

    insta::with_settings!({filters => vec![
        (r"Invalid JSON translation source: .*  load-error", "Invalid JSON translation source: [DETAIL]  load-error"),
    ]}, {
        assert_cmd_snapshot!(test.check_command(), @r"
        success: false
        exit_code: 1
        ----- stdout -----
        error: Invalid JSON translation source: [DETAIL]  load-error
          --> i18n/de.json

        ✘ 1 problem (1 error, 0 warnings)

        ----- stderr -----
        ");
    });

    Ok(())
}

#[test]
fn test_explicit_sources() -> Result<()> {
    let test = CliTest::with_file("i18n/en.tr", "broken line\n")?;
    test.write_file("locales/de.tr", "t: x\n")?;

    // Only locales/ is checked, so the broken file under i18n/ goes unnoticed.
    assert_cmd_snapshot!(test.check_command().arg("locales"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Checked 1 translation file, 1 key - no issues found

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_sources_from_config() -> Result<()> {
    let test = CliTest::with_file(".locusrc.json", r#"{ "sources": ["translations/**/*.tr"] }"#)?;
    test.write_file("translations/app/en.tr", "a: 1\nb: 2\n")?;
    test.write_file("i18n/en.tr", "broken line\n")?;

    assert_cmd_snapshot!(test.check_command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Checked 1 translation file, 2 keys - no issues found

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_no_sources_matched() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.check_command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----

    ----- stderr -----
    warning: no translation sources matched
    ");

    Ok(())
}

#[test]
fn test_invalid_pattern_is_an_error() -> Result<()> {
    let test = CliTest::new()?;

    insta::with_settings!({filters => vec![(r"Pattern syntax error.*", "[GLOB ERROR]")]}, {
        assert_cmd_snapshot!(test.check_command().arg("i18n/[bad"), @r#"
        success: false
        exit_code: 2
        ----- stdout -----

        ----- stderr -----
        Error: Invalid source pattern: "i18n/[bad": [GLOB ERROR]
        "#);
    });

    Ok(())
}

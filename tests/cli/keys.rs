use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;

use crate::CliTest;

#[test]
fn test_keys_sorted_and_deduplicated() -> Result<()> {
    let test = CliTest::with_file(
        "en.tr",
        "\
zeta: z
outer:
  inner:
    x1: 1
  y1: 2
alpha: a
zeta: again
\"quoted key\": q
",
    )?;

    assert_cmd_snapshot!(test.command().args(["keys", "en.tr"]), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    alpha
    outer.inner.x1
    outer.y1
    quoted key
    zeta

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_keys_of_json_source() -> Result<()> {
    let test = CliTest::with_file("de.json", r#"{"b": "1", "a": {"c": "2"}}"#)?;

    assert_cmd_snapshot!(test.command().args(["keys", "de.json"]), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    a.c
    b

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_keys_reports_format_error() -> Result<()> {
    let test = CliTest::with_file("en.tr", "ok: 1\n\nno colon here\n")?;

    assert_cmd_snapshot!(test.command().args(["keys", "en.tr"]), @r#"
    success: false
    exit_code: 1
    ----- stdout -----

    ----- stderr -----
    error: en.tr(3): format error in "no colon here"
    "#);

    Ok(())
}

#[test]
fn test_keys_missing_file() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.command().args(["keys", "missing.tr"]), @r"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Error: Failed to read translation source: missing.tr: No such file or directory (os error 2)
    ");

    Ok(())
}

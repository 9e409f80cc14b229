use anyhow::{Context, Result};
use insta_cmd::assert_cmd_snapshot;
use serde_json::Value;

use crate::CliTest;

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.command().arg("init"), @r#"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Created .locusrc.json (base locale "en", sources i18n/*.tr, i18n/*.json)

    ----- stderr -----
    "#);

    let content = test.read_file(".locusrc.json")?;
    let parsed: Value = serde_json::from_str(&content).context("Config should be valid JSON")?;
    assert_eq!(parsed["baseLocale"], "en");
    insta::assert_snapshot!(content, @r#"
    {
      "baseLocale": "en",
      "sources": [
        "i18n/*.tr",
        "i18n/*.json"
      ],
      "defaultFormat": "text"
    }
    "#);

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::with_file(".locusrc.json", "{}")?;

    assert_cmd_snapshot!(test.command().arg("init"), @r"
    success: false
    exit_code: 1
    ----- stdout -----

    ----- stderr -----
    error: .locusrc.json already exists
    ");
    assert_eq!(test.read_file(".locusrc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;

    test.command().arg("init").output()?;
    test.write_file("i18n/en.tr", "title: Hello\n")?;

    assert_cmd_snapshot!(test.check_command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Checked 1 translation file, 1 key - no issues found

    ----- stderr -----
    ");
    assert!(test.root().join(".locusrc.json").exists());

    Ok(())
}

use std::{
    fs,
    path::{Path, PathBuf},
    process::Command,
};

use anyhow::{Context, Result};
use insta_cmd::{assert_cmd_snapshot, get_cargo_bin};
use tempfile::TempDir;

mod check;
mod init;
mod keys;
mod lookup;

const BIN_NAME: &str = "locus";

pub struct CliTest {
    _temp_dir: TempDir,
    project_dir: PathBuf,
}

impl CliTest {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let project_dir = temp_dir.path().canonicalize()?;
        // Stop the upward config search at the project root.
        fs::create_dir(project_dir.join(".git"))?;
        Ok(Self {
            _temp_dir: temp_dir,
            project_dir,
        })
    }

    pub fn with_file(path: &str, content: &str) -> Result<Self> {
        let test = Self::new()?;
        test.write_file(path, content)?;
        Ok(test)
    }

    pub fn write_file(&self, path: &str, content: &str) -> Result<()> {
        let file_path = self.project_dir.join(path);

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory:{}", parent.display()))?;
        }

        fs::write(&file_path, content)
            .with_context(|| format!("Failed to write file: {}", file_path.display()))?;

        Ok(())
    }

    pub fn root(&self) -> &Path {
        &self.project_dir
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::new(get_cargo_bin(BIN_NAME));
        cmd.current_dir(&self.project_dir);
        cmd.env_clear();
        cmd.env("NO_COLOR", "1"); // Disable colors for consistent test output
        cmd.env("RUST_LOG", "off"); // Keep library diagnostics out of snapshots
        cmd
    }

    pub fn check_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("check");
        cmd
    }

    pub fn lookup_command(&self, key: &str) -> Command {
        let mut cmd = self.command();
        cmd.arg("lookup").arg(key);
        cmd
    }

    pub fn read_file(&self, path: &str) -> Result<String> {
        let file_path = self.project_dir.join(path);
        fs::read_to_string(&file_path)
            .with_context(|| format!("Failed to read file: {}", file_path.display()))
    }
}

#[test]
fn test_help() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.command().arg("--help"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Scoped message key resolution with locale fallback and the TR translation source format

    Usage: locus [COMMAND]

    Commands:
      check   Check translation sources for format errors and duplicate keys
      keys    List the keys defined by a translation source
      lookup  Resolve a translation key
      init    Initialize a new .locusrc.json configuration file
      help    Print this message or the help of the given subcommand(s)

    Options:
      -h, --help     Print help
      -V, --version  Print version

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_no_command_prints_help() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Scoped message key resolution with locale fallback and the TR translation source format

    Usage: locus [COMMAND]

    Commands:
      check   Check translation sources for format errors and duplicate keys
      keys    List the keys defined by a translation source
      lookup  Resolve a translation key
      init    Initialize a new .locusrc.json configuration file
      help    Print this message or the help of the given subcommand(s)

    Options:
      -h, --help     Print help
      -V, --version  Print version

    ----- stderr -----
    ");

    Ok(())
}

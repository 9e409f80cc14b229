use std::{fs, path::Path};

use anyhow::{Context, Result};
use colored::Colorize;

use super::super::{exit_status::ExitStatus, report::SUCCESS_MARK};
use crate::config::{CONFIG_FILE_NAME, Config, default_config_json};

/// Write a default `.locusrc.json` into the working directory.
pub fn init() -> Result<ExitStatus> {
    let config_path = Path::new(CONFIG_FILE_NAME);
    if config_path.exists() {
        eprintln!(
            "{} {} already exists",
            "error:".bold().red(),
            CONFIG_FILE_NAME
        );
        return Ok(ExitStatus::Failure);
    }

    let mut json = default_config_json()?;
    json.push('\n');
    fs::write(config_path, json)
        .with_context(|| format!("Failed to write {}", CONFIG_FILE_NAME))?;

    let defaults = Config::default();
    println!(
        "{} {} (base locale \"{}\", sources {})",
        SUCCESS_MARK.green(),
        format!("Created {}", CONFIG_FILE_NAME).green(),
        defaults.base_locale,
        defaults.sources.join(", ")
    );
    Ok(ExitStatus::Success)
}

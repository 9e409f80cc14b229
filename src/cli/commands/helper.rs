use std::{env, path::PathBuf};

use anyhow::{Context, Result};
use colored::Colorize;

use super::super::args::CommonArgs;
use crate::config::{CONFIG_FILE_NAME, Config, ConfigLoadResult, load_config};

/// Configuration with command-line overrides applied.
pub struct Settings {
    pub config: Config,
    /// Directory the configured source patterns are relative to.
    pub root_dir: PathBuf,
}

impl Settings {
    pub fn load(common: &CommonArgs) -> Result<Self> {
        let cwd = env::current_dir().context("Cannot determine working directory")?;
        let ConfigLoadResult {
            mut config,
            from_file,
            root_dir,
        } = load_config(&cwd)?;

        if !from_file && common.verbose {
            eprintln!(
                "{} No {} found, using default configuration",
                "note:".bold(),
                CONFIG_FILE_NAME
            );
        }

        if let Some(base_locale) = &common.base_locale {
            config.base_locale = base_locale.clone();
        }
        config.validate()?;

        Ok(Self { config, root_dir })
    }

    /// Source patterns to read: `explicit` when given, otherwise the configured
    /// ones resolved against the config directory.
    pub fn source_patterns(&self, explicit: &[String]) -> Vec<String> {
        if !explicit.is_empty() {
            return explicit.to_vec();
        }
        self.config
            .sources
            .iter()
            .map(|pattern| self.root_dir.join(pattern).to_string_lossy().into_owned())
            .collect()
    }
}

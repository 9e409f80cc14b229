use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result};
use glob::Pattern;
use serde::{Deserialize, Serialize};

use crate::core::{Format, Locale};

pub const CONFIG_FILE_NAME: &str = ".locusrc.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_base_locale")]
    pub base_locale: Locale,
    #[serde(default = "default_sources")]
    pub sources: Vec<String>,
    #[serde(default)]
    pub default_format: Format,
}

fn default_base_locale() -> Locale {
    "en".to_string()
}

fn default_sources() -> Vec<String> {
    ["i18n/*.tr", "i18n/*.json"].map(String::from).to_vec()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_locale: default_base_locale(),
            sources: default_sources(),
            default_format: Format::default(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if the base locale is empty or any source pattern is
    /// not a valid glob.
    pub fn validate(&self) -> Result<()> {
        if self.base_locale.trim().is_empty() {
            anyhow::bail!("'baseLocale' must not be empty");
        }

        for pattern in &self.sources {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'sources': \"{}\"", pattern))?;
        }

        Ok(())
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
    /// Directory relative source patterns are resolved against.
    pub root_dir: PathBuf,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            let root_dir = path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| start_dir.to_path_buf());
            Ok(ConfigLoadResult {
                config,
                from_file: true,
                root_dir,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
            root_dir: start_dir.to_path_buf(),
        }),
    }
}

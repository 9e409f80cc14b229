//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `check`: Parse translation sources and report malformed lines and duplicate keys
//! - `keys`: List the dotted keys defined by one source file
//! - `lookup`: Resolve a key through scopes and locale fallback
//! - `init`: Initialize a `.locusrc.json` configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use crate::core::Format;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Command> {
        if self.command.is_none() {
            Self::command().print_help().ok();
        }
        self.command
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Check(cmd)) => cmd.common.verbose,
            Some(Command::Keys(cmd)) => cmd.common.verbose,
            Some(Command::Lookup(cmd)) => cmd.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by commands that read translation sources.
#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    /// Base locale (overrides config file)
    #[arg(long)]
    pub base_locale: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    /// Source files, directories or glob patterns (default: `sources` from config)
    pub sources: Vec<String>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct KeysCommand {
    /// Translation source to list
    pub file: PathBuf,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct LookupCommand {
    /// Key to resolve, relative to the pushed scopes
    pub key: String,

    /// Locale to resolve in (falls back to the base locale)
    #[arg(long)]
    pub locale: Option<String>,

    /// Output format: text or html
    #[arg(long)]
    pub format: Option<Format>,

    /// Scope segment to push; repeat to nest
    #[arg(long = "scope", value_name = "SEGMENT")]
    pub scopes: Vec<String>,

    /// Fail instead of returning the key when no translation exists
    #[arg(long)]
    pub strict: bool,

    /// Interpolation parameter for `{* name *}` placeholders
    #[arg(long = "param", value_name = "NAME=VALUE", value_parser = parse_param)]
    pub params: Vec<(String, String)>,

    /// Source patterns to load (default: `sources` from config)
    #[arg(long = "source", value_name = "PATTERN")]
    pub sources: Vec<String>,

    #[command(flatten)]
    pub common: CommonArgs,
}

fn parse_param(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((name, value)) if !name.trim().is_empty() => {
            Ok((name.trim().to_string(), value.to_string()))
        }
        _ => Err(format!("expected NAME=VALUE, got \"{}\"", raw)),
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check translation sources for format errors and duplicate keys
    Check(CheckCommand),
    /// List the keys defined by a translation source
    Keys(KeysCommand),
    /// Resolve a translation key
    Lookup(LookupCommand),
    /// Initialize a new .locusrc.json configuration file
    Init,
}

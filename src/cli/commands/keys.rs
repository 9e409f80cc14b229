use std::fs;

use anyhow::{Context, Result};
use colored::Colorize;

use super::super::{args::KeysCommand, exit_status::ExitStatus};
use crate::{
    parsers::TrParser,
    store::loader::{SourceFormat, parse_source},
};

pub fn keys(cmd: KeysCommand) -> Result<ExitStatus> {
    let path = &cmd.file;
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read translation source: {}", path.display()))?;

    let keys = match SourceFormat::from_path(path) {
        Some(SourceFormat::Tr) => {
            let parser = TrParser::named(&content, path.display().to_string());
            match parser.keys() {
                Ok(keys) => keys,
                Err(err) => {
                    eprintln!("{} {}", "error:".bold().red(), err);
                    return Ok(ExitStatus::Failure);
                }
            }
        }
        // JSON keys come out of an ordered map already.
        _ => parse_source(path, &content)?.into_keys().collect(),
    };

    for key in keys {
        println!("{}", key);
    }
    Ok(ExitStatus::Success)
}

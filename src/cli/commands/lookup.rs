use anyhow::Result;
use colored::Colorize;
use tracing::debug;

use super::super::{args::LookupCommand, exit_status::ExitStatus};
use super::helper::Settings;
use crate::{
    core::{MessageKey, Resolver, ScopeOptions},
    store::{MemoryStore, load},
};

pub fn lookup(cmd: LookupCommand) -> Result<ExitStatus> {
    let settings = Settings::load(&cmd.common)?;

    let mut store = MemoryStore::new();
    for pattern in settings.source_patterns(&cmd.sources) {
        let summary = load(&mut store, &pattern)?;
        debug!(
            pattern = %pattern,
            files = summary.files.len(),
            entries = summary.entries,
            "loaded sources"
        );
    }

    let resolver = Resolver::new(store, settings.config.base_locale.clone())
        .with_default_format(settings.config.default_format);

    let mut options = ScopeOptions::new().scopes(cmd.scopes.iter().cloned());
    if let Some(locale) = &cmd.locale {
        options = options.locale(locale.clone());
    }
    if let Some(format) = cmd.format {
        options = options.format(format);
    }

    let key = if cmd.strict {
        MessageKey::strict(cmd.key.as_str())
    } else {
        MessageKey::lenient(cmd.key.as_str())
    };
    let params: Vec<(&str, &str)> = cmd
        .params
        .iter()
        .map(|(name, value)| (name.as_str(), value.as_str()))
        .collect();

    let mut ctx = resolver.context();
    match ctx.with_scope(options, |ctx| resolver.t(ctx, &key, &params)) {
        Ok(text) => {
            println!("{}", text);
            Ok(ExitStatus::Success)
        }
        Err(missing) => {
            eprintln!("{} {}", "error:".bold().red(), missing);
            if !missing.scope.is_empty() {
                eprintln!("  {} {} {}", "=".blue(), "scope:".bold(), missing.scope);
            }
            Ok(ExitStatus::Failure)
        }
    }
}

//! Subcommand implementations. Each returns the text to print on stdout.

use std::path::PathBuf;

use breeze_common::{BreezeError, Result};
use breeze_config::schema::{Configuration, DarkModeStrategy};
use breeze_config::source::{create_default_config, default_config_path, find_config};
use breeze_config::writer::render_config;
use breeze_config::{load_from_path, resolve_theme, LoadOptions, PluginRegistry};
use tracing::info;

use crate::cli::{Command, SourceArgs};

pub fn run(command: &Command) -> Result<String> {
    match command {
        Command::Check { source, production } => {
            let options = if *production {
                LoadOptions::production()
            } else {
                LoadOptions::default()
            };
            check(source, &options)
        }
        Command::Print { source, format } => {
            let config = load(source, &LoadOptions::default())?;
            Ok(render_config(&config, (*format).into())?)
        }
        Command::Theme { source, category } => theme(source, category.as_deref()),
        Command::Init { root, force } => init(root, *force),
    }
}

fn config_path(source: &SourceArgs) -> Result<PathBuf> {
    match source.config {
        Some(ref path) => Ok(path.clone()),
        None => Ok(find_config(&source.root)?),
    }
}

fn load(source: &SourceArgs, options: &LoadOptions) -> Result<Configuration> {
    Ok(load_from_path(&config_path(source)?, options)?)
}

fn check(source: &SourceArgs, options: &LoadOptions) -> Result<String> {
    let path = config_path(source)?;
    let config = load_from_path(&path, options)?;

    let dark_mode = match config.dark_mode {
        DarkModeStrategy::MediaQuery => "media".to_string(),
        DarkModeStrategy::ClassToggle { ref selector } => format!("class ({selector})"),
    };
    Ok(format!(
        "{}: ok ({} content patterns, {} plugins, dark mode: {dark_mode})",
        path.display(),
        config.content.files.len(),
        config.plugins.len(),
    ))
}

fn theme(source: &SourceArgs, category: Option<&str>) -> Result<String> {
    let config = load(source, &LoadOptions::default())?;
    let tokens = resolve_theme(&config, &PluginRegistry::with_builtins())?;

    let rendered = match category {
        Some(name) => {
            let tokens = tokens
                .get(name)
                .ok_or_else(|| BreezeError::Other(format!("unknown theme category '{name}'")))?;
            serde_json::to_string_pretty(tokens)
        }
        None => serde_json::to_string_pretty(&tokens),
    };
    rendered.map_err(|e| BreezeError::Other(format!("failed to serialize theme: {e}")))
}

fn init(root: &std::path::Path, force: bool) -> Result<String> {
    std::fs::create_dir_all(root)?;

    if !force {
        if let Ok(existing) = find_config(root) {
            return Err(BreezeError::Other(format!(
                "{} already exists (use --force to overwrite)",
                existing.display()
            )));
        }
    }

    let path = default_config_path(root);
    create_default_config(&path)?;
    info!("initialized {}", path.display());
    Ok(format!("created {}", path.display()))
}

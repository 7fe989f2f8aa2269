use crate::app::cli::Cli;
use crate::app::models::{LintConfig, RuntimeConfig};
use anyhow::{Context, Result};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Reads the lint configuration. A missing or malformed file aborts the run.
pub fn load_config(config_path: &Path) -> Result<LintConfig> {
    let content = fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config at {:?}", config_path))?;

    let is_toml = config_path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

    let config: LintConfig = if is_toml {
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse TOML config {:?}", config_path))?
    } else {
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse JSON config {:?}", config_path))?
    };

    log::debug!(
        "Loaded {:?}: {} files, {} ignore patterns, max {}",
        config_path,
        config.files.len(),
        config.ignore.len(),
        config.max
    );

    Ok(config)
}

/// Appends CLI items after the configured ones. The configured items stay as
/// given; a CLI item already present is not added again.
fn merge_vecs(config_vec: Vec<String>, cli_vec: Option<Vec<String>>) -> Vec<String> {
    let mut combined = config_vec;
    if let Some(cli_items) = cli_vec {
        let mut seen: HashSet<String> = combined.iter().cloned().collect();
        for item in cli_items {
            if seen.insert(item.clone()) {
                combined.push(item);
            }
        }
    }
    combined
}

pub fn resolve_config(cli: Cli) -> Result<RuntimeConfig> {
    let lint = load_config(&cli.config)?;

    let cli_files = (!cli.files.is_empty()).then_some(cli.files);

    Ok(RuntimeConfig {
        files: merge_vecs(lint.files, cli_files),
        ignore: merge_vecs(lint.ignore, cli.ignore),
        max: cli.max.unwrap_or(lint.max),
        analyzer: cli.analyzer,
        rcfile: cli.rcfile,
        gitignore: cli.gitignore,
        root: cli.root,
        extensions: cli.extensions,
        max_depth: cli.max_depth,
    })
}

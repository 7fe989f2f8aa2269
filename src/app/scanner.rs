use crate::app::models::RuntimeConfig;
use anyhow::{Context, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};

pub struct Scanner {
    root: PathBuf,
    source_set: GlobSet,
    max_depth: usize,
}

impl Scanner {
    pub fn new(config: &RuntimeConfig) -> Result<Self> {
        let patterns: Vec<String> = config
            .extensions
            .iter()
            .map(|ext| format!("*.{}", ext.trim_start_matches('.')))
            .collect();

        Ok(Self {
            root: config.root.clone(),
            source_set: build_globset(&patterns)?,
            max_depth: config.max_depth,
        })
    }

    /// Every source file under the root, depth-first with siblings sorted by name.
    pub fn scan(&self) -> Vec<String> {
        let mut files = Vec::new();

        // Filtering is done by the caller, so the walker's own ignore rules stay off.
        let walker = WalkBuilder::new(&self.root)
            .standard_filters(false)
            .follow_links(false)
            .max_depth(Some(self.max_depth))
            .sort_by_file_name(|a, b| a.cmp(b))
            .filter_entry(|entry| entry.file_name() != ".git")
            .build();

        for result in walker {
            match result {
                Ok(entry) => {
                    let is_file = entry.file_type().is_some_and(|ft| ft.is_file());
                    if !is_file || !self.is_source(entry.path()) {
                        continue;
                    }
                    match display_path(entry.path()) {
                        Some(path) => files.push(path),
                        None => log::warn!("Skipping non UTF-8 path: {:?}", entry.path()),
                    }
                }
                Err(err) => log::warn!("Error walking entry: {}", err),
            }
        }

        files
    }

    fn is_source(&self, path: &Path) -> bool {
        path.file_name()
            .is_some_and(|name| self.source_set.is_match(Path::new(name)))
    }
}

/// Lists the files to lint: the configured ones verbatim, or a scan of the root.
pub fn collect_candidates(config: &RuntimeConfig) -> Result<Vec<String>> {
    if !config.files.is_empty() {
        return Ok(config.files.clone());
    }
    let scanner = Scanner::new(config)?;
    Ok(scanner.scan())
}

/// Path as handed to the analyzer, without a leading `./`.
/// `None` when it is not valid UTF-8.
fn display_path(path: &Path) -> Option<String> {
    let trimmed = path.strip_prefix(".").unwrap_or(path);
    trimmed.to_str().map(str::to_string)
}

fn build_globset(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pat in patterns {
        builder.add(Glob::new(pat).with_context(|| format!("Invalid glob pattern: {}", pat))?);
    }
    Ok(builder.build()?)
}

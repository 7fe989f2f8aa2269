// Declare modules
pub mod analyzer;
pub mod cli;
pub mod config;
pub mod filter;
pub mod models;
pub mod patterns;
pub mod scanner;

use anyhow::Result;
use clap::Parser;
use std::io;

use self::analyzer::Analyzer;
use self::cli::Cli;
use self::config::resolve_config;
use self::filter::{filter_files, IgnoreSet};
use self::patterns::load_ignore_file;
use self::scanner::collect_candidates;

/// Initializes components and orchestrates data flow.
pub fn run() -> Result<()> {
    execute(Cli::parse())
}

fn execute(args: Cli) -> Result<()> {
    // 1. Resolve Configuration
    let config = resolve_config(args)?;

    // 2. Ignore rules: explicit ones first, then the ignore file
    let derived = load_ignore_file(&config.gitignore)?;
    let ignore_set = IgnoreSet::new(&config.ignore, &derived)?;
    log::debug!("{} ignore patterns active", ignore_set.len());

    // 3. Collect, filter and cap
    let candidates = collect_candidates(&config)?;
    log::debug!("{} candidate files", candidates.len());

    let files = filter_files(candidates, &ignore_set, config.max);

    if files.is_empty() {
        println!("No files to lint.");
        return Ok(());
    }

    // 4. Analyze and relay. Findings do not fail the run.
    let analyzer = Analyzer::new(config.analyzer, config.rcfile);
    let output = analyzer.run(&files)?;

    if !output.success() {
        log::warn!("Analyzer exited with {}", output.status);
    }

    output.relay(&mut io::stdout().lock())
}

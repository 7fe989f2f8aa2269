use serde::Deserialize;
use std::path::PathBuf;

/// Directory depth the scan never goes beyond unless told otherwise.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Contents of the lint configuration file.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct LintConfig {
    /// Files to lint. Empty means "scan the root instead".
    pub files: Vec<String>,
    /// Regular expressions, matched from the start of each path.
    pub ignore: Vec<String>,
    /// Upper bound on the number of linted files; zero or below is unbounded.
    pub max: i64,
}

/// Represents the final configuration after merging the config file and CLI args.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub files: Vec<String>,
    pub ignore: Vec<String>,
    pub max: i64,
    pub analyzer: String,
    pub rcfile: PathBuf,
    pub gitignore: PathBuf,
    pub root: PathBuf,
    pub extensions: Vec<String>,
    pub max_depth: usize,
}

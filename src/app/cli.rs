use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Run pylint over the project's Python files, honoring ignore rules"
)]
pub struct Cli {
    /// Lint configuration file (JSON, or TOML when it ends in .toml)
    #[arg(long, default_value = ".github/autograding/lint.json")]
    pub config: PathBuf,

    /// Rules file handed to the analyzer via --rcfile
    #[arg(long, default_value = ".github/autograding/pylintrc")]
    pub rcfile: PathBuf,

    /// Gitignore-style file with extra ignore patterns
    #[arg(long, default_value = ".gitignore")]
    pub gitignore: PathBuf,

    /// Analyzer executable
    #[arg(long, default_value = "pylint")]
    pub analyzer: String,

    /// Directory scanned when no files are listed
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// File extensions picked up by the directory scan
    #[arg(long = "extension", default_values_t = vec!["py".to_string()])]
    pub extensions: Vec<String>,

    /// Maximum directory depth for the scan
    #[arg(long, default_value_t = crate::app::models::DEFAULT_MAX_DEPTH)]
    pub max_depth: usize,

    /// Extra ignore patterns (regular expressions, prefix-matched)
    #[arg(long, num_args = 1..)]
    pub ignore: Option<Vec<String>>,

    /// Override the configured maximum number of files (0 = unbounded)
    #[arg(long)]
    pub max: Option<i64>,

    /// Extra files to lint, appended to the configured list
    pub files: Vec<String>,
}

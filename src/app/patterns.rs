//! Gitignore-style patterns turned into prefix-anchored regular expressions.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Converts one gitignore-style pattern into a regular expression.
///
/// `*` matches any run of characters, `?` exactly one, and a trailing `/`
/// covers everything beneath the directory. Characters that are plain text in
/// a file name but special in a regex are escaped first, so `a.py` only
/// matches a literal dot. Bracket classes are left as they are.
pub fn convert_ignore_pattern(pattern: &str) -> String {
    let mut regex = String::with_capacity(pattern.len() * 2);
    for ch in pattern.chars() {
        match ch {
            '*' => regex.push_str(".*"),
            '?' => regex.push('.'),
            '.' | '+' | '(' | ')' | '{' | '}' | '^' | '$' | '|' => {
                regex.push('\\');
                regex.push(ch);
            }
            _ => regex.push(ch),
        }
    }
    if pattern.ends_with('/') {
        regex.push_str(".*");
    }
    regex
}

/// Reads and converts the patterns of a gitignore-style file.
///
/// A missing file yields no patterns. Blank lines and `#` comments are skipped.
pub fn load_ignore_file(path: &Path) -> Result<Vec<String>> {
    if !path.exists() {
        log::debug!("No ignore file at {:?}", path);
        return Ok(Vec::new());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read ignore file {:?}", path))?;

    let patterns: Vec<String> = content
        .lines()
        .filter(|line| !line.starts_with('#'))
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(convert_ignore_pattern)
        .collect();

    log::debug!("Loaded {} patterns from {:?}", patterns.len(), path);
    Ok(patterns)
}

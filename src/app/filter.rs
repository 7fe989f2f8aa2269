use anyhow::{Context, Result};
use regex::Regex;

/// Compiled ignore patterns, each anchored at the start of the path only.
pub struct IgnoreSet {
    patterns: Vec<Regex>,
}

impl IgnoreSet {
    /// Explicit patterns come from the configuration and must compile.
    /// Derived patterns come from the ignore file; broken ones are skipped.
    pub fn new(explicit: &[String], derived: &[String]) -> Result<Self> {
        let mut patterns = Vec::with_capacity(explicit.len() + derived.len());

        for pat in explicit {
            patterns.push(
                anchored(pat).with_context(|| format!("Invalid ignore pattern: {}", pat))?,
            );
        }

        for pat in derived {
            match anchored(pat) {
                Ok(regex) => patterns.push(regex),
                Err(err) => log::warn!("Skipping ignore-file pattern {:?}: {}", pat, err),
            }
        }

        Ok(Self { patterns })
    }

    pub fn is_ignored(&self, path: &str) -> bool {
        self.patterns.iter().any(|re| re.is_match(path))
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }
}

fn anchored(pattern: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!("^(?:{})", pattern))
}

/// Drops ignored candidates, keeps the rest in order, then caps at `max`
/// when it is positive.
pub fn filter_files(candidates: Vec<String>, ignore: &IgnoreSet, max: i64) -> Vec<String> {
    let mut kept: Vec<String> = candidates
        .into_iter()
        .filter(|file| !ignore.is_ignored(file))
        .collect();

    if let Ok(limit) = usize::try_from(max) {
        if limit > 0 {
            kept.truncate(limit);
        }
    }

    kept
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::patterns::convert_ignore_pattern;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn explicit_pattern_excludes_match() -> Result<()> {
        let set = IgnoreSet::new(&strings(&["b.*"]), &[])?;
        let kept = filter_files(strings(&["a.py", "b.py"]), &set, 0);
        assert_eq!(kept, vec!["a.py"]);
        Ok(())
    }

    #[test]
    fn matching_is_prefix_not_full_string() -> Result<()> {
        let set = IgnoreSet::new(&strings(&["tests"]), &[])?;
        assert!(set.is_ignored("tests/test_app.py"));
        assert!(set.is_ignored("tests_old.py"));
        assert!(!set.is_ignored("src/tests/test_app.py"));
        Ok(())
    }

    #[test]
    fn derived_directory_pattern_excludes_subtree() -> Result<()> {
        let derived = vec![convert_ignore_pattern("build/")];
        let set = IgnoreSet::new(&[], &derived)?;
        let kept = filter_files(
            strings(&["build/gen.py", "main.py", "build/sub/x.py", "lib/build.py"]),
            &set,
            0,
        );
        assert_eq!(kept, vec!["main.py", "lib/build.py"]);
        Ok(())
    }

    #[test]
    fn survivors_keep_their_order() -> Result<()> {
        let set = IgnoreSet::new(&strings(&["skip"]), &[])?;
        let kept = filter_files(
            strings(&["z.py", "skip_me.py", "a.py", "m.py", "skip/x.py", "b.py"]),
            &set,
            0,
        );
        assert_eq!(kept, vec!["z.py", "a.py", "m.py", "b.py"]);
        Ok(())
    }

    #[test]
    fn max_truncates_after_filtering() -> Result<()> {
        let set = IgnoreSet::new(&strings(&["a"]), &[])?;
        let candidates = strings(&["a.py", "b.py", "c.py", "d.py"]);

        assert_eq!(filter_files(candidates.clone(), &set, 2), vec!["b.py", "c.py"]);
        assert_eq!(filter_files(candidates.clone(), &set, 0).len(), 3);
        assert_eq!(filter_files(candidates.clone(), &set, -1).len(), 3);
        assert_eq!(filter_files(candidates, &set, 10).len(), 3);
        Ok(())
    }

    #[test]
    fn invalid_explicit_pattern_is_an_error() {
        let err = IgnoreSet::new(&strings(&["(unclosed"]), &[]).err().unwrap();
        assert!(err.to_string().contains("Invalid ignore pattern"));
    }

    #[test]
    fn invalid_derived_pattern_is_skipped() -> Result<()> {
        let set = IgnoreSet::new(&[], &strings(&["[z-a]", "venv"]))?;
        assert_eq!(set.len(), 1);
        assert!(set.is_ignored("venv/lib.py"));
        Ok(())
    }
}

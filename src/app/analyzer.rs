//! Runs the external analyzer and relays what it printed.

use anyhow::{Context, Result};
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, ExitStatus};

pub struct Analyzer {
    program: String,
    rcfile: PathBuf,
}

/// Captured result of one analyzer run.
#[derive(Debug)]
pub struct AnalyzerOutput {
    pub status: ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl Analyzer {
    pub fn new(program: impl Into<String>, rcfile: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            rcfile: rcfile.into(),
        }
    }

    /// Runs `<program> --rcfile <rcfile> <files...>` and waits for it.
    ///
    /// A non-zero exit is reported through [`AnalyzerOutput::status`], not as
    /// an error. Only a failure to launch the program is an error.
    pub fn run(&self, files: &[String]) -> Result<AnalyzerOutput> {
        log::debug!("Running {} on {} files", self.program, files.len());

        let output = Command::new(&self.program)
            .arg("--rcfile")
            .arg(&self.rcfile)
            .args(files)
            .output()
            .with_context(|| format!("Failed to launch analyzer `{}`", self.program))?;

        Ok(AnalyzerOutput {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

impl AnalyzerOutput {
    pub fn success(&self) -> bool {
        self.status.success()
    }

    /// Writes the captured output. Stderr is only shown when the run failed.
    pub fn relay<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "{}", self.stdout)?;
        if !self.success() {
            writeln!(out, "{}", self.stderr)?;
        }
        out.flush()?;
        Ok(())
    }
}

//! Process execution seam
//!
//! The client talks to the operating system through the [`CommandRunner`]
//! trait so tests can substitute a recording implementation instead of
//! spawning real processes. [`OsRunner`] is the production implementation.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::{DnfError, Result};

/// Process-executor and PATH-lookup capability injected into the client.
pub trait CommandRunner: Send + Sync {
    /// Run `program` with `args`, wait for it to exit, and return its
    /// captured stdout. When `sink` is supplied, stdout and stderr are
    /// additionally copied into it; the captured stdout is unaffected.
    fn run(
        &self,
        program: &Path,
        args: &[String],
        sink: Option<&mut dyn Write>,
    ) -> Result<String>;

    /// Resolve a bare program name against the process's search path.
    fn look_path(&self, name: &str) -> Result<PathBuf>;
}

/// Real OS-backed [`CommandRunner`].
#[derive(Debug, Default)]
pub struct OsRunner;

impl OsRunner {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl CommandRunner for OsRunner {
    fn run(
        &self,
        program: &Path,
        args: &[String],
        sink: Option<&mut dyn Write>,
    ) -> Result<String> {
        tracing::debug!("running {} {:?}", program.display(), args);
        let output = Command::new(program).args(args).output()?;
        if let Some(sink) = sink {
            sink.write_all(&output.stdout)?;
            sink.write_all(&output.stderr)?;
        }
        if !output.status.success() {
            return Err(DnfError::CommandFailed {
                program: program.display().to_string(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    fn look_path(&self, name: &str) -> Result<PathBuf> {
        Ok(which::which(name)?)
    }
}

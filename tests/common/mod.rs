//! Shared test fixtures
//!
//! `RecordingRunner` stands in for the OS process executor: it records
//! every invocation, serves canned output, and never spawns anything.

#![allow(dead_code)]

use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use dnf_client::{CommandRunner, DnfError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: PathBuf,
    pub args: Vec<String>,
}

/// Shared handles to a runner's invocation and PATH-lookup logs.
pub type Logs = (Arc<Mutex<Vec<Invocation>>>, Arc<Mutex<Vec<String>>>);

#[derive(Default)]
pub struct RecordingRunner {
    pub calls: Arc<Mutex<Vec<Invocation>>>,
    pub lookups: Arc<Mutex<Vec<String>>>,
    pub stdout: String,
    pub stderr: String,
    pub exit_failure: bool,
    pub lookup_result: Option<PathBuf>,
}

impl RecordingRunner {
    pub fn with_stdout(stdout: &str) -> Self {
        RecordingRunner {
            stdout: stdout.to_string(),
            ..RecordingRunner::default()
        }
    }

    pub fn resolving_to(path: &str) -> Self {
        RecordingRunner {
            lookup_result: Some(PathBuf::from(path)),
            ..RecordingRunner::default()
        }
    }

    pub fn calls(&self) -> Vec<Invocation> {
        self.calls.lock().unwrap().clone()
    }

    pub fn lookups(&self) -> Vec<String> {
        self.lookups.lock().unwrap().clone()
    }

    /// Handles to the shared call logs, usable after the runner has been
    /// boxed and moved into a client.
    pub fn logs(&self) -> Logs {
        (Arc::clone(&self.calls), Arc::clone(&self.lookups))
    }
}

impl CommandRunner for RecordingRunner {
    fn run(
        &self,
        program: &Path,
        args: &[String],
        sink: Option<&mut dyn Write>,
    ) -> Result<String> {
        self.calls.lock().unwrap().push(Invocation {
            program: program.to_path_buf(),
            args: args.to_vec(),
        });
        if let Some(sink) = sink {
            sink.write_all(self.stdout.as_bytes())?;
            sink.write_all(self.stderr.as_bytes())?;
        }
        if self.exit_failure {
            return Err(DnfError::CommandFailed {
                program: program.display().to_string(),
                status: failed_status(),
                stderr: self.stderr.clone(),
            });
        }
        Ok(self.stdout.clone())
    }

    fn look_path(&self, name: &str) -> Result<PathBuf> {
        self.lookups.lock().unwrap().push(name.to_string());
        self.lookup_result.clone().ok_or_else(|| {
            DnfError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("{name} not on PATH"),
            ))
        })
    }
}

#[cfg(unix)]
fn failed_status() -> std::process::ExitStatus {
    use std::os::unix::process::ExitStatusExt;
    std::process::ExitStatus::from_raw(1 << 8)
}

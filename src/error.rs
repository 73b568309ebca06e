//! Error types for dnf-client

use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

/// Convenience Result type for dnf-client operations
pub type Result<T> = std::result::Result<T, DnfError>;

#[derive(Error, Debug)]
pub enum DnfError {
    #[error("{operation}: package name was not specified")]
    PackageNameMissing { operation: &'static str },

    #[error("dnf binary not found on PATH: {0}")]
    BinaryNotFound(#[from] which::Error),

    #[error("no dnf found in {}", .0.display())]
    NoBinaryIn(PathBuf),

    #[error("{program} exited with {status}: {stderr}")]
    CommandFailed {
        program: String,
        status: ExitStatus,
        stderr: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl DnfError {
    /// True for failures reported before any process was spawned.
    #[must_use]
    pub fn is_argument_error(&self) -> bool {
        matches!(self, Self::PackageNameMissing { .. })
    }
}

//! Binary discovery

use std::fs::Metadata;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{DnfError, Result};
use crate::exec::CommandRunner;

const DNF: &str = "dnf";

/// Filename convention for directory scans. Inherited verbatim from the
/// sibling pip wrapper and kept for behavioral parity, even though the
/// PATH lookup below searches for `dnf`.
static DNF_FILE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    // The pattern is a literal constant and always compiles
    #[allow(clippy::expect_used)]
    Regex::new(r"^pip3(\.\d\d?)?\.?(\.\d\d?)?$").expect("valid regex")
});

/// Find the dnf binary on the process's search path.
pub fn detect_binary(runner: &dyn CommandRunner) -> Result<PathBuf> {
    runner.look_path(DNF)
}

/// Scan `directory` and return the first executable file whose name
/// matches the dnf filename convention, in enumeration order.
pub fn binary_from(directory: impl AsRef<Path>) -> Result<PathBuf> {
    let directory = directory.as_ref();
    for entry in std::fs::read_dir(directory)? {
        let entry = entry?;
        let Ok(name) = entry.file_name().into_string() else {
            continue;
        };
        if !looks_like_dnf(&name) {
            continue;
        }
        if entry.metadata().is_ok_and(|md| is_executable(&md)) {
            return Ok(entry.path());
        }
    }
    tracing::debug!("no matching executable under {}", directory.display());
    Err(DnfError::NoBinaryIn(directory.to_path_buf()))
}

/// True if the given filename looks like a dnf executable.
fn looks_like_dnf(name: &str) -> bool {
    DNF_FILE_REGEX.is_match(name)
}

#[cfg(unix)]
fn is_executable(md: &Metadata) -> bool {
    use std::os::unix::fs::PermissionsExt;
    md.is_file() && md.permissions().mode() & 0o111 != 0
}

#[cfg(not(unix))]
fn is_executable(md: &Metadata) -> bool {
    md.is_file()
}

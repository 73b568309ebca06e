//! Command facade for the dnf binary
//!
//! Each operation follows the same template: build the operation argv,
//! append flags derived from [`Options`], hand the vector to the injected
//! [`CommandRunner`], then parse the captured stdout where the operation
//! produces one.

use std::path::{Path, PathBuf};

use crate::error::{DnfError, Result};
use crate::exec::{CommandRunner, OsRunner};
use crate::locate::detect_binary;
use crate::types::{Options, Package};

/// A dnf client bound to one resolved binary path.
///
/// Calls are synchronous; each one spawns and fully waits on a single
/// external process. The handle itself holds no mutable state.
pub struct Dnf {
    binary_path: PathBuf,
    runner: Box<dyn CommandRunner>,
}

impl Dnf {
    /// Create a client for `binary_path`, or auto-detect the binary on the
    /// search path when `None` is given. An explicit path is trusted as-is
    /// with no existence check; a failed detection is propagated rather
    /// than swallowed.
    pub fn new(binary_path: Option<PathBuf>) -> Result<Self> {
        Self::with_runner(binary_path, Box::new(OsRunner::new()))
    }

    /// Like [`Dnf::new`] but with an injected process executor. This is the
    /// substitution point for tests.
    pub fn with_runner(
        binary_path: Option<PathBuf>,
        runner: Box<dyn CommandRunner>,
    ) -> Result<Self> {
        let binary_path = match binary_path {
            Some(path) => path,
            None => detect_binary(runner.as_ref())?,
        };
        Ok(Self {
            binary_path,
            runner,
        })
    }

    /// The resolved binary path this client invokes.
    #[must_use]
    pub fn binary_path(&self) -> &Path {
        &self.binary_path
    }

    /// Install a package by name.
    pub fn install(&self, package_name: &str, opt: Options<'_>) -> Result<()> {
        require_package_name("install", package_name)?;
        self.invoke(vec!["install".into(), package_name.into()], opt)?;
        Ok(())
    }

    /// Update a package by name, or every installed package when the name
    /// is empty or whitespace.
    pub fn update(&self, package_name: &str, opt: Options<'_>) -> Result<()> {
        let args = if package_name.trim().is_empty() {
            vec!["update".into()]
        } else {
            vec!["update".into(), package_name.into()]
        };
        self.invoke(args, opt)?;
        Ok(())
    }

    /// Remove a package by name.
    pub fn remove(&self, package_name: &str, opt: Options<'_>) -> Result<()> {
        require_package_name("remove", package_name)?;
        self.invoke(vec!["remove".into(), package_name.into()], opt)?;
        Ok(())
    }

    /// Search for a package by name.
    ///
    /// Known defect carried over from the original implementation: the
    /// name is validated but never placed in the argument vector, so the
    /// executed command carries only the option flags.
    pub fn search(&self, package_name: &str, opt: Options<'_>) -> Result<()> {
        require_package_name("search", package_name)?;
        self.invoke(Vec::new(), opt)?;
        Ok(())
    }

    /// List all installed packages.
    pub fn list(&self, opt: Options<'_>) -> Result<()> {
        self.invoke(vec!["list".into(), "installed".into()], opt)?;
        Ok(())
    }

    /// Query the dependencies of a package by name.
    pub fn depends(&self, package_name: &str, opt: Options<'_>) -> Result<Vec<Package>> {
        require_package_name("depends", package_name)?;
        let stdout = self.invoke(
            vec!["repoquery".into(), "--deplist".into(), package_name.into()],
            opt,
        )?;
        Ok(parse_deplist(&stdout))
    }

    /// Append option flags to the operation args and run the command,
    /// returning its captured stdout.
    fn invoke(&self, mut args: Vec<String>, opt: Options<'_>) -> Result<String> {
        args.extend(option_args(&opt));
        self.runner.run(&self.binary_path, &args, opt.output)
    }
}

/// Validate that a package name is neither empty nor all whitespace.
fn require_package_name(operation: &'static str, package_name: &str) -> Result<()> {
    if package_name.trim().is_empty() {
        return Err(DnfError::PackageNameMissing { operation });
    }
    Ok(())
}

/// Translate [`Options`] into command-line flags, in fixed order:
/// dry-run, verbose, assume-yes, dest-dir.
fn option_args(opt: &Options<'_>) -> Vec<String> {
    let mut args = Vec::new();
    if opt.dry_run {
        args.push("--setopt".to_string());
        args.push("tsflags=test".to_string());
    }
    if opt.verbose {
        args.push("--verbose".to_string());
    }
    if !opt.not_assume_yes {
        args.push("--assumeyes".to_string());
    }
    if !opt.dest_dir.is_empty() {
        args.push("--destdir".to_string());
        args.push(opt.dest_dir.clone());
    }
    args
}

/// Parse `repoquery --deplist` output into provider packages.
///
/// Parsing stops at the first blank line: repoquery prints one block per
/// available version of the queried package, separated by blank lines,
/// and only the first block is kept.
fn parse_deplist(output: &str) -> Vec<Package> {
    let mut dependencies = Vec::new();
    for line in output.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            break;
        }
        if trimmed.starts_with("provider:") {
            // `provider: name` splits into exactly two parts; anything
            // else is ignored.
            let parts: Vec<&str> = trimmed.split(": ").collect();
            if parts.len() == 2 {
                dependencies.push(Package::named(parts[1]));
            }
        }
    }
    dependencies
}

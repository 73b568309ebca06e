//! Shared client types

use std::io::Write;

/// A package entry produced by output parsing.
///
/// Only `name` is populated today; `version` and `path` are reserved for
/// richer queries and stay empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Package {
    pub name: String,
    pub version: String,
    pub path: String,
}

impl Package {
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Package {
            name: name.into(),
            ..Package::default()
        }
    }
}

/// Configuration options for a single command invocation.
///
/// Each field independently toggles one command-line flag; no invariants
/// link them. Note the confirmation default: unless `not_assume_yes` is
/// set, `--assumeyes` is passed to dnf.
#[derive(Default)]
pub struct Options<'a> {
    /// Adds `--verbose`.
    pub verbose: bool,
    /// Adds `--setopt tsflags=test` so the transaction is only simulated.
    pub dry_run: bool,
    /// Optional sink that additionally receives a copy of the child's
    /// stdout and stderr.
    pub output: Option<&'a mut dyn Write>,
    /// Suppresses the default `--assumeyes`.
    pub not_assume_yes: bool,
    /// Adds `--destdir <dir>` when non-empty.
    pub dest_dir: String,
}

//! dnf-client - programmatic access to the dnf package manager
//!
//! A thin client around the `dnf` command-line tool: it locates the
//! binary, builds argument vectors for the supported operations, runs the
//! external process, and parses its stdout into package lists. Dependency
//! resolution, the package database, and transaction semantics all live
//! inside dnf itself.

// Production-ready clippy configuration
#![warn(clippy::pedantic)]
#![warn(clippy::perf)]
#![warn(clippy::suspicious)]
// Allow documentation lints - internal code, not public API
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::module_name_repetitions)]

pub mod client;
mod error;
pub mod exec;
pub mod locate;
mod types;

pub use client::Dnf;
pub use error::{DnfError, Result};
pub use exec::{CommandRunner, OsRunner};
pub use locate::{binary_from, detect_binary};
pub use types::{Options, Package};

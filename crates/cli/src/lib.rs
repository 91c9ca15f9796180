#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `cli` is the command-line front-end of `dirmirror`. It parses
//!
//! ```text
//! dirmirror [--once] [--skip-unchanged] [-q] <source_folder> <replica_folder> <interval_seconds> <log_file>
//! ```
//!
//! builds the log sink (log file plus console), installs signal handlers and
//! hands control to [`scheduler::Scheduler`].
//!
//! # Design
//!
//! [`run`] accepts an iterator of arguments together with handles for
//! standard output and error, so tests drive the whole front-end in-process.
//! The `dirmirror` binary wires it into `main` and converts the status with
//! [`exit_code_from`].
//!
//! # Invariants
//!
//! - `run` never panics; failures surface as non-zero exit codes with a
//!   diagnostic on the error handle.
//! - The log file is opened in append mode and never truncated.
//! - Every log line reaches the log file; `--quiet` only silences the console
//!   copy.
//!
//! # Errors
//!
//! Invalid configuration is rejected before the first pass. See [`ExitCode`]
//! for the statuses produced.
//!
//! # Examples
//!
//! ```
//! use cli::run;
//!
//! let mut stdout = Vec::new();
//! let mut stderr = Vec::new();
//! let status = run(["dirmirror", "src", "dst", "zero", "sync.log"], &mut stdout, &mut stderr);
//!
//! assert_eq!(status, 1);
//! assert!(String::from_utf8(stderr).unwrap().contains("invalid interval 'zero'"));
//! ```

mod command;
mod config;
mod diagnostics;
mod exit_code;
mod frontend;

#[cfg(test)]
mod tests;

pub use config::{Config, ConfigError};
pub use diagnostics::{LOG_FILTER_ENV, init_diagnostics};
pub use exit_code::ExitCode;
pub use frontend::{exit_code_from, run};

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/scheduler/src/lib.rs
//!
//! # Overview
//!
//! `scheduler` keeps a replica mirrored by running a pass of the
//! [`engine::Reconciler`] at a fixed interval. Each iteration:
//!
//! 1. creates the source root when it is missing and logs
//!    `Created source folder: <path>`;
//! 2. creates the replica root when it is missing and logs
//!    `Created replica folder: <path>`;
//! 3. runs propagate, then prune;
//! 4. logs [`COMPLETION_MESSAGE`];
//! 5. sleeps for the configured interval.
//!
//! # Design
//!
//! The loop is single-threaded. A slow pass delays the next tick and passes
//! never overlap. [`engine::StopSignal`] ends the loop: it is checked before
//! each iteration, between entries of a pass, and while sleeping.
//! [`install_signal_handlers`] connects it to SIGINT, SIGTERM and SIGHUP.
//!
//! # Errors
//!
//! A root that cannot be created or is not a directory yields a
//! [`SchedulerError`]. [`Scheduler::run`] logs it and tries again on the next
//! tick; [`Scheduler::run_once`] returns it to the caller.
//!
//! # Examples
//!
//! ```
//! use logging_sink::MemorySink;
//! use scheduler::{COMPLETION_MESSAGE, Scheduler, SchedulerConfig};
//! use std::time::Duration;
//!
//! let temp = tempfile::tempdir().unwrap();
//! let config = SchedulerConfig::new(
//!     temp.path().join("source"),
//!     temp.path().join("replica"),
//!     Duration::from_millis(10),
//! )
//! .max_passes(Some(2));
//!
//! let mut sink = MemorySink::new();
//! let report = Scheduler::new(config).unwrap().run(&mut sink);
//!
//! assert_eq!(report.passes(), 2);
//! assert_eq!(sink.messages().last(), Some(&COMPLETION_MESSAGE));
//! ```

mod config;
mod error;
mod scheduler;
mod signal;


pub use config::SchedulerConfig;
pub use engine::{CopyPolicy, MetadataOptions, PassSummary, StopSignal};
pub use error::{RootRole, SchedulerError};
pub use scheduler::{COMPLETION_MESSAGE, INTERRUPTED_MESSAGE, RunReport, Scheduler};
pub use signal::{SIGNAL_EXIT_CODE, SignalHandlers, install_signal_handlers};

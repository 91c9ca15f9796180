#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/engine/src/lib.rs
//!
//! # Overview
//!
//! `engine` makes a replica directory tree match a source directory tree. A
//! pass has two phases that always run in this order:
//!
//! 1. **Propagate** walks the source tree top-down. Missing replica
//!    directories are created and every source file is copied onto its replica
//!    counterpart together with its permission bits and timestamps.
//! 2. **Prune** walks the replica tree top-down and removes every entry whose
//!    source counterpart no longer exists. A removed directory is never
//!    descended into.
//!
//! Every change is reported to a [`logging_sink::Sink`] as soon as it is made
//! and counted in a [`PassSummary`].
//!
//! # Design
//!
//! - [`Roots`] and [`PathPair`] derive every replica path from a
//!   source-relative path, so both sides of a pass agree on layout.
//! - [`Reconciler`] holds the configuration of a pass: the roots, the
//!   [`CopyPolicy`], which metadata to preserve and the [`StopSignal`].
//! - Files are written to a hidden staging sibling and renamed over the
//!   destination, so a replica never exposes half-written content.
//! - The source walk follows symbolic links; the replica walk does not.
//!
//! # Invariants
//!
//! - A failure on one entry is logged as an [`EntryError`] and never aborts
//!   the pass.
//! - The stop signal is checked before every filesystem operation and never
//!   in the middle of a copy. Prune does not run after an interrupted
//!   propagate.
//! - Nothing is cached between passes.
//!
//! # Examples
//!
//! ```
//! use engine::{Reconciler, Roots};
//! use logging_sink::MemorySink;
//! use std::fs;
//!
//! let temp = tempfile::tempdir().unwrap();
//! let source = temp.path().join("source");
//! let replica = temp.path().join("replica");
//! fs::create_dir_all(source.join("sub")).unwrap();
//! fs::write(source.join("sub/b.txt"), b"beta").unwrap();
//! fs::create_dir(&replica).unwrap();
//!
//! let mut sink = MemorySink::new();
//! let summary = Reconciler::new(Roots::new(&source, &replica)).run_pass(&mut sink);
//!
//! assert_eq!(summary.files_copied(), 1);
//! assert_eq!(fs::read(replica.join("sub/b.txt")).unwrap(), b"beta");
//! ```

mod error;
mod event;
mod paths;
mod policy;
mod reconciler;
mod stop;
mod summary;

pub use error::EntryError;
pub use event::SyncEvent;
pub use metadata::MetadataOptions;
pub use paths::{PathPair, Roots};
pub use policy::CopyPolicy;
pub use reconciler::Reconciler;
pub use stop::StopSignal;
pub use summary::PassSummary;

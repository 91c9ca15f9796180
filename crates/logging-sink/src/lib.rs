#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/logging-sink/src/lib.rs
//!
//! # Overview
//!
//! `logging-sink` provides the explicit log handle that the mirror engine and
//! scheduler report through. Every observable mutation and every pass
//! boundary becomes a [`Record`]: a timestamp, a [`Severity`], and a
//! free-text message. Records are rendered as
//! `YYYY-MM-DD HH:MM:SS,mmm [LEVEL]: message` lines.
//!
//! # Design
//!
//! - [`Sink`] is the object-safe trait the engine depends on. It only knows how
//!   to accept a record; the `info`/`warn`/`error` helpers build records on
//!   top of [`Sink::emit`].
//! - [`MessageSink`] streams rendered lines into any [`std::io::Write`]
//!   target and flushes after every line so a crash never loses reported
//!   events. [`MessageSink::append_to_file`] opens a log file in append mode.
//! - [`TeeSink`] duplicates every record to two sinks, which is how the binary
//!   writes both to its log file and to the console.
//! - [`MemorySink`] keeps records in memory for tests.
//!
//! Nothing here installs process-wide state: callers construct a sink at
//! start-up and pass it by `&mut` to whoever needs to report.
//!
//! # Errors
//!
//! [`Sink::emit`] surfaces [`std::io::Error`] values from the underlying
//! writer. The convenience helpers never fail; a write error is reported as a
//! `tracing` warning so that a full disk does not abort a synchronization
//! pass.
//!
//! # Examples
//!
//! ```
//! use logging_sink::{MessageSink, Severity, Sink};
//!
//! let mut sink = MessageSink::new(Vec::new());
//! sink.info("Created folder: /replica/sub");
//! sink.warn("Removed file: /replica/stale.txt");
//!
//! let output = String::from_utf8(sink.into_inner()).unwrap();
//! let lines: Vec<&str> = output.lines().collect();
//! assert!(lines[0].ends_with("[INFO]: Created folder: /replica/sub"));
//! assert!(lines[1].contains(Severity::Warning.label()));
//! ```

mod record;
mod severity;
mod sink;

pub use record::{Record, TIMESTAMP_FORMAT};
pub use severity::Severity;
pub use sink::{MemorySink, MessageSink, Sink, TeeSink};

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `metadata` carries the per-file metadata helpers used while mirroring:
//! applying a source file's permission bits and timestamps onto its replica,
//! and the size/modification-time quick check used to decide whether a
//! replica file already matches its source.
//!
//! # Errors
//!
//! Failures surface as [`MetadataError`], which records the attempted action
//! and the path it was attempted on.
//!
//! # Examples
//!
//! ```
//! use metadata::{apply_file_metadata, quick_check_matches};
//! use std::fs;
//!
//! # fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let temp = tempfile::tempdir()?;
//! let source = temp.path().join("source.txt");
//! let replica = temp.path().join("replica.txt");
//! fs::write(&source, b"same")?;
//! fs::write(&replica, b"same")?;
//!
//! apply_file_metadata(&replica, &fs::metadata(&source)?)?;
//! assert!(quick_check_matches(&fs::metadata(&source)?, &fs::metadata(&replica)?));
//! # Ok(())
//! # }
//! # demo().unwrap();
//! ```

mod apply;
mod compare;
mod error;
mod options;

pub use apply::{apply_file_metadata, apply_file_metadata_with_options};
pub use compare::quick_check_matches;
pub use error::MetadataError;
pub use options::MetadataOptions;

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `walk` enumerates a directory tree one directory at a time. Every step of
//! the traversal yields a [`DirectoryListing`]: the directory itself together
//! with the names of its immediate subdirectories, regular files, and other
//! entries. Consumers such as the mirror engine inspect each listing, act on
//! the children, and may tell the walker not to descend into a subdirectory
//! they have just removed.
//!
//! # Design
//!
//! - [`WalkBuilder`] configures traversal options such as whether directory
//!   symlinks are followed.
//! - [`Walker`] implements [`Iterator`] and yields listings top-down: a parent
//!   is always yielded before any of its descendants. Directory contents are
//!   read lazily when a directory is reached, so changes made by the consumer
//!   while processing a parent are visible when its children are read.
//! - [`Walker::skip_subdirectory`] drops a pending subdirectory so the walker
//!   never reads it.
//! - [`WalkError`] describes I/O failures encountered while reading a
//!   directory. A failure affects only the directory that could not be read;
//!   the walker continues with the remaining pending directories.
//!
//! # Invariants
//!
//! - Relative paths never contain `..` segments and are always joined from
//!   names returned by the operating system.
//! - Names inside a listing are sorted so traversal is deterministic, although
//!   callers should not depend on sibling order.
//! - With symlink following enabled, a directory that is already on the
//!   current ancestor chain is listed but never descended into, so link cycles
//!   terminate.
//!
//! # Examples
//!
//! ```
//! use walk::WalkBuilder;
//! use std::fs;
//!
//! # fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let temp = tempfile::tempdir()?;
//! let root = temp.path().join("src");
//! fs::create_dir_all(root.join("nested"))?;
//! fs::write(root.join("file.txt"), b"data")?;
//!
//! let mut walker = WalkBuilder::new(&root).build()?;
//! let top = walker.next().expect("root listing")?;
//! assert!(top.is_root());
//! assert_eq!(top.subdirectories(), ["nested"]);
//! assert_eq!(top.files(), ["file.txt"]);
//! # Ok(())
//! # }
//! # demo().unwrap();
//! ```

mod builder;
mod error;
mod listing;
mod walker;

pub use builder::WalkBuilder;
pub use error::{WalkError, WalkErrorKind};
pub use listing::DirectoryListing;
pub use walker::Walker;

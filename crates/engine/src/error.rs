//! Errors raised while reconciling a single entry.

use metadata::MetadataError;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walk::WalkError;

/// Failure affecting one entry of a pass.
///
/// The reconciler never aborts a pass because of an [`EntryError`]; it logs
/// the error at error severity and moves on to the next entry.
#[derive(Debug, Error)]
pub enum EntryError {
    /// A filesystem call on `path` failed.
    #[error("failed to {action} '{}': {source}", path.display())]
    Io {
        /// Action being performed.
        action: &'static str,
        /// Path involved in the failure.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: io::Error,
    },
    /// A directory could not be listed.
    #[error(transparent)]
    Walk(#[from] WalkError),
    /// Permissions or timestamps could not be applied to a copied file.
    #[error(transparent)]
    Metadata(#[from] MetadataError),
}

impl EntryError {
    /// Constructs an I/O error with action context.
    #[must_use]
    pub fn io(action: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            action,
            path: path.into(),
            source,
        }
    }

    /// Returns the path the failure relates to.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::Io { path, .. } => path,
            Self::Walk(error) => error.path(),
            Self::Metadata(error) => error.path(),
        }
    }
}

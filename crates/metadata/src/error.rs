use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failure raised while reading or applying metadata.
///
/// The error keeps the action that was attempted and the path it was
/// attempted on so callers can render diagnostics without extra context.
#[derive(Debug, Error)]
#[error("failed to {context} '{}': {source}", path.display())]
pub struct MetadataError {
    context: &'static str,
    path: PathBuf,
    #[source]
    source: io::Error,
}

impl MetadataError {
    /// Creates a new error for `context` on `path`.
    pub fn new(context: &'static str, path: &Path, source: io::Error) -> Self {
        Self {
            context,
            path: path.to_path_buf(),
            source,
        }
    }

    /// The action that failed, phrased as a verb ("preserve timestamps").
    #[must_use]
    pub const fn context(&self) -> &'static str {
        self.context
    }

    /// Path the action was applied to.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Splits the error into its parts.
    #[must_use]
    pub fn into_parts(self) -> (&'static str, PathBuf, io::Error) {
        (self.context, self.path, self.source)
    }
}

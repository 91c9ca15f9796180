use crate::error::WalkError;
use crate::walker::Walker;
use std::path::PathBuf;

/// Configures a directory traversal rooted at a specific path.
#[derive(Clone, Debug)]
pub struct WalkBuilder {
    root: PathBuf,
    follow_symlinks: bool,
}

impl WalkBuilder {
    /// Creates a new builder that will traverse the provided root path.
    #[must_use]
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self {
            root: root.into(),
            follow_symlinks: false,
        }
    }

    /// Configures whether symlinks are classified by their target.
    ///
    /// When enabled, a link to a directory is listed as a subdirectory and
    /// descended into, and a link to a regular file is listed as a file.
    /// Dangling links land in [`crate::DirectoryListing::other_entries`].
    /// When disabled every symlink is an "other" entry.
    #[must_use]
    pub const fn follow_symlinks(mut self, follow: bool) -> Self {
        self.follow_symlinks = follow;
        self
    }

    /// Builds a [`Walker`] using the configured options.
    ///
    /// Fails when the root cannot be inspected or is not a directory.
    pub fn build(self) -> Result<Walker, WalkError> {
        Walker::new(self.root, self.follow_symlinks)
    }
}

use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// One directory reached by the walker together with its immediate children.
#[derive(Clone, Debug)]
pub struct DirectoryListing {
    pub(crate) full_path: PathBuf,
    pub(crate) relative_path: PathBuf,
    pub(crate) depth: usize,
    pub(crate) subdirectories: Vec<OsString>,
    pub(crate) files: Vec<OsString>,
    pub(crate) other_entries: Vec<OsString>,
    pub(crate) cyclic_links: Vec<OsString>,
}

impl DirectoryListing {
    /// Returns the absolute path of the directory.
    #[must_use]
    pub fn full_path(&self) -> &Path {
        &self.full_path
    }

    /// Returns the directory path relative to the traversal root.
    ///
    /// The root listing has an empty relative path.
    #[must_use]
    pub fn relative_path(&self) -> &Path {
        &self.relative_path
    }

    /// Reports the depth of the directory relative to the root (root depth is `0`).
    #[must_use]
    pub const fn depth(&self) -> usize {
        self.depth
    }

    /// Indicates whether this listing describes the traversal root.
    #[must_use]
    pub const fn is_root(&self) -> bool {
        self.depth == 0
    }

    /// Names of the immediate subdirectories.
    #[must_use]
    pub fn subdirectories(&self) -> &[OsString] {
        &self.subdirectories
    }

    /// Names of the immediate regular files.
    #[must_use]
    pub fn files(&self) -> &[OsString] {
        &self.files
    }

    /// Names of entries that are neither directories nor regular files.
    ///
    /// FIFOs, sockets, device nodes and symlinks that were not resolved
    /// (either because following is disabled or because the link dangles).
    /// Links back to an ancestor are listed by
    /// [`cyclic_links`](Self::cyclic_links) instead.
    #[must_use]
    pub fn other_entries(&self) -> &[OsString] {
        &self.other_entries
    }

    /// Names of symlinks that resolve to this directory or one of its
    /// ancestors. Only populated when following symlinks.
    #[must_use]
    pub fn cyclic_links(&self) -> &[OsString] {
        &self.cyclic_links
    }

    /// Joins `name` onto the directory's relative path.
    #[must_use]
    pub fn child_relative_path(&self, name: &OsString) -> PathBuf {
        self.relative_path.join(name)
    }

    /// Joins `name` onto the directory's absolute path.
    #[must_use]
    pub fn child_full_path(&self, name: &OsString) -> PathBuf {
        self.full_path.join(name)
    }

    /// Total number of immediate children across all categories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.subdirectories.len()
            + self.files.len()
            + self.other_entries.len()
            + self.cyclic_links.len()
    }

    /// Returns `true` when the directory has no children.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

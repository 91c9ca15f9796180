#![deny(unsafe_code)]
#![deny(missing_docs)]

//! Shared helpers for building and comparing scratch directory trees in
//! tests.
//!
//! Trees are described as `(relative path, contents)` pairs. A path ending in
//! `/` denotes a directory; anything else is a regular file whose parent
//! directories are created on demand.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// One entry in a [`snapshot`] of a tree.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TreeEntry {
    /// A directory.
    Directory,
    /// A regular file with its contents.
    File(Vec<u8>),
    /// Anything else (symlink, FIFO, socket, device).
    Other,
}

/// Scratch workspace holding a `source` and a `replica` directory.
pub struct MirrorFixture {
    temp: TempDir,
    source: PathBuf,
    replica: PathBuf,
}

impl MirrorFixture {
    /// Creates empty `source` and `replica` directories in a fresh tempdir.
    #[must_use]
    pub fn new() -> Self {
        let temp = tempfile::tempdir().expect("tempdir");
        let source = temp.path().join("source");
        let replica = temp.path().join("replica");
        fs::create_dir(&source).expect("create source");
        fs::create_dir(&replica).expect("create replica");
        Self {
            temp,
            source,
            replica,
        }
    }

    /// Returns the scratch directory containing both roots.
    #[must_use]
    pub fn base(&self) -> &Path {
        self.temp.path()
    }

    /// Returns the source root.
    #[must_use]
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Returns the replica root.
    #[must_use]
    pub fn replica(&self) -> &Path {
        &self.replica
    }

    /// Populates the source root.
    pub fn write_source(&self, entries: &[(&str, &str)]) {
        write_tree(&self.source, entries);
    }

    /// Populates the replica root.
    pub fn write_replica(&self, entries: &[(&str, &str)]) {
        write_tree(&self.replica, entries);
    }

    /// Panics unless the replica is an exact copy of the source.
    pub fn assert_mirrored(&self) {
        assert_same_tree(&self.source, &self.replica);
    }
}

impl Default for MirrorFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Writes `entries` below `root`.
pub fn write_tree(root: &Path, entries: &[(&str, &str)]) {
    for (relative, contents) in entries {
        let path = root.join(relative.trim_end_matches('/'));
        if relative.ends_with('/') {
            fs::create_dir_all(&path).expect("create directory");
        } else {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).expect("create parent directory");
            }
            fs::write(&path, contents).expect("write file");
        }
    }
}

/// Captures every entry below `root`, keyed by relative path.
///
/// Symbolic links are recorded as [`TreeEntry::Other`] and never followed.
#[must_use]
pub fn snapshot(root: &Path) -> BTreeMap<PathBuf, TreeEntry> {
    let mut entries = BTreeMap::new();
    collect(root, Path::new(""), &mut entries);
    entries
}

fn collect(root: &Path, relative: &Path, entries: &mut BTreeMap<PathBuf, TreeEntry>) {
    let directory = root.join(relative);
    for entry in fs::read_dir(&directory).expect("read_dir") {
        let entry = entry.expect("dir entry");
        let child = relative.join(entry.file_name());
        let file_type = entry.file_type().expect("file type");
        if file_type.is_dir() {
            entries.insert(child.clone(), TreeEntry::Directory);
            collect(root, &child, entries);
        } else if file_type.is_file() {
            let contents = fs::read(entry.path()).expect("read file");
            entries.insert(child, TreeEntry::File(contents));
        } else {
            entries.insert(child, TreeEntry::Other);
        }
    }
}

/// Lists the relative paths below `root` in sorted order.
#[must_use]
pub fn relative_paths(root: &Path) -> Vec<PathBuf> {
    snapshot(root).into_keys().collect()
}

/// Panics unless both trees hold the same paths, kinds and file contents.
pub fn assert_same_tree(expected: &Path, actual: &Path) {
    let expected_tree = snapshot(expected);
    let actual_tree = snapshot(actual);
    assert_eq!(
        expected_tree.keys().collect::<Vec<_>>(),
        actual_tree.keys().collect::<Vec<_>>(),
        "trees under {} and {} list different paths",
        expected.display(),
        actual.display()
    );
    for (path, entry) in &expected_tree {
        assert_eq!(
            Some(entry),
            actual_tree.get(path),
            "entry {} differs",
            path.display()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_tree_creates_directories_and_files() {
        let fixture = MirrorFixture::new();
        fixture.write_source(&[("empty/", ""), ("sub/deep/file.txt", "data")]);

        let tree = snapshot(fixture.source());
        assert_eq!(tree.get(Path::new("empty")), Some(&TreeEntry::Directory));
        assert_eq!(tree.get(Path::new("sub/deep")), Some(&TreeEntry::Directory));
        assert_eq!(
            tree.get(Path::new("sub/deep/file.txt")),
            Some(&TreeEntry::File(b"data".to_vec()))
        );
    }

    #[test]
    #[should_panic(expected = "differs")]
    fn assert_same_tree_compares_contents() {
        let fixture = MirrorFixture::new();
        fixture.write_source(&[("a.txt", "one")]);
        fixture.write_replica(&[("a.txt", "two")]);
        fixture.assert_mirrored();
    }
}

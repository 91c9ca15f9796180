//! Mapping between source and replica paths.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// A source path together with its replica counterpart.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PathPair {
    source: PathBuf,
    replica: PathBuf,
}

impl PathPair {
    /// Pairs `source` with `replica`.
    #[must_use]
    pub fn new(source: impl Into<PathBuf>, replica: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            replica: replica.into(),
        }
    }

    /// Path on the source side.
    #[must_use]
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Path on the replica side.
    #[must_use]
    pub fn replica(&self) -> &Path {
        &self.replica
    }

    /// Pair for the entry `name` inside this pair's directories.
    #[must_use]
    pub fn child(&self, name: impl AsRef<OsStr>) -> Self {
        let name = name.as_ref();
        Self {
            source: self.source.join(name),
            replica: self.replica.join(name),
        }
    }
}

/// The two roots of a mirror.
///
/// Every replica path is derived from a source-relative path through
/// [`Roots::pair_for`], so both sides always agree on the relative layout.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Roots {
    pair: PathPair,
}

impl Roots {
    /// Creates roots for mirroring `source` onto `replica`.
    #[must_use]
    pub fn new(source: impl Into<PathBuf>, replica: impl Into<PathBuf>) -> Self {
        Self {
            pair: PathPair::new(source, replica),
        }
    }

    /// Source root.
    #[must_use]
    pub fn source(&self) -> &Path {
        self.pair.source()
    }

    /// Replica root.
    #[must_use]
    pub fn replica(&self) -> &Path {
        self.pair.replica()
    }

    /// Root directories as a pair.
    #[must_use]
    pub const fn root_pair(&self) -> &PathPair {
        &self.pair
    }

    /// Pair for `relative`, a path relative to either root.
    ///
    /// An empty `relative` yields the roots themselves.
    #[must_use]
    pub fn pair_for(&self, relative: &Path) -> PathPair {
        if relative.as_os_str().is_empty() {
            return self.pair.clone();
        }
        PathPair {
            source: self.pair.source.join(relative),
            replica: self.pair.replica.join(relative),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pair_for_substitutes_the_root() {
        let roots = Roots::new("/data/source", "/backup/replica");
        let pair = roots.pair_for(Path::new("sub/b.txt"));
        assert_eq!(pair.source(), Path::new("/data/source/sub/b.txt"));
        assert_eq!(pair.replica(), Path::new("/backup/replica/sub/b.txt"));
    }

    #[test]
    fn empty_relative_path_is_the_root() {
        let roots = Roots::new("src", "dst");
        assert_eq!(&roots.pair_for(Path::new("")), roots.root_pair());
    }

    #[test]
    fn child_extends_both_sides() {
        let pair = PathPair::new("/s/sub", "/r/sub").child("c.txt");
        assert_eq!(pair, PathPair::new("/s/sub/c.txt", "/r/sub/c.txt"));
    }
}

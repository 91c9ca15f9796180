use crate::error::WalkError;
use crate::listing::DirectoryListing;
use std::env;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

/// Top-down iterator over the directories of a tree.
///
/// Each item is the listing of one directory. A directory that cannot be read
/// yields an error item and the walk carries on with the next pending
/// directory.
pub struct Walker {
    follow_symlinks: bool,
    stack: Vec<PendingDirectory>,
}

impl Walker {
    pub(crate) fn new(root: PathBuf, follow_symlinks: bool) -> Result<Self, WalkError> {
        let root = absolutize(root)?;
        debug!(target: "dirmirror::walk", root = %root.display(), "starting walk");

        // The root itself is resolved through symlinks regardless of
        // `follow_symlinks`; the flag only governs children.
        let metadata =
            fs::metadata(&root).map_err(|error| WalkError::root_metadata(root.clone(), error))?;
        if !metadata.is_dir() {
            return Err(WalkError::root_not_directory(root));
        }

        let chain = if follow_symlinks {
            let canonical = fs::canonicalize(&root)
                .map_err(|error| WalkError::root_metadata(root.clone(), error))?;
            vec![canonical]
        } else {
            Vec::new()
        };

        Ok(Self {
            stack: vec![PendingDirectory {
                full_path: root,
                relative_path: PathBuf::new(),
                depth: 0,
                chain,
            }],
            follow_symlinks,
        })
    }

    /// Drops a pending subdirectory so it is never read.
    ///
    /// `relative_path` is relative to the traversal root. Returns `true` when a
    /// pending directory was removed. Descendants of a skipped directory are
    /// never queued because a directory's children are only discovered when
    /// the directory itself is read.
    pub fn skip_subdirectory(&mut self, relative_path: &Path) -> bool {
        match self
            .stack
            .iter()
            .rposition(|pending| pending.relative_path == relative_path)
        {
            Some(index) => {
                self.stack.remove(index);
                trace!(target: "dirmirror::walk", path = %relative_path.display(), "skipping subdirectory");
                true
            }
            None => false,
        }
    }

    fn read(
        &self,
        pending: &PendingDirectory,
    ) -> Result<(DirectoryListing, Vec<PendingDirectory>), WalkError> {
        let read_dir = fs::read_dir(&pending.full_path)
            .map_err(|error| WalkError::read_dir(pending.full_path.clone(), error))?;

        let mut subdirectories: Vec<(OsString, Option<PathBuf>)> = Vec::new();
        let mut files = Vec::new();
        let mut other_entries = Vec::new();
        let mut cyclic_links = Vec::new();

        for entry in read_dir {
            let entry = entry
                .map_err(|error| WalkError::read_dir_entry(pending.full_path.clone(), error))?;
            let name = entry.file_name();
            let file_type = entry
                .file_type()
                .map_err(|error| WalkError::read_dir_entry(pending.full_path.clone(), error))?;

            if file_type.is_dir() {
                subdirectories.push((name, None));
            } else if file_type.is_file() {
                files.push(name);
            } else if file_type.is_symlink() && self.follow_symlinks {
                let full_path = entry.path();
                match fs::metadata(&full_path) {
                    Ok(target) if target.is_dir() => match fs::canonicalize(&full_path) {
                        Ok(canonical) if pending.chain.contains(&canonical) => {
                            debug!(
                                target: "dirmirror::walk",
                                path = %full_path.display(),
                                "symlink points at an ancestor directory; not descending"
                            );
                            cyclic_links.push(name);
                        }
                        Ok(canonical) => subdirectories.push((name, Some(canonical))),
                        Err(_) => other_entries.push(name),
                    },
                    Ok(target) if target.is_file() => files.push(name),
                    _ => other_entries.push(name),
                }
            } else {
                other_entries.push(name);
            }
        }

        subdirectories.sort_by(|a, b| a.0.cmp(&b.0));
        files.sort();
        other_entries.sort();
        cyclic_links.sort();

        trace!(
            target: "dirmirror::walk",
            path = %pending.full_path.display(),
            subdirectories = subdirectories.len(),
            files = files.len(),
            other = other_entries.len(),
            cyclic = cyclic_links.len(),
            "read directory"
        );

        let children = subdirectories
            .iter()
            .rev()
            .map(|(name, canonical)| {
                let chain = if self.follow_symlinks {
                    let mut chain = pending.chain.clone();
                    let resolved = canonical.clone().or_else(|| {
                        chain.last().map(|parent| parent.join(name))
                    });
                    chain.extend(resolved);
                    chain
                } else {
                    Vec::new()
                };
                PendingDirectory {
                    full_path: pending.full_path.join(name),
                    relative_path: pending.relative_path.join(name),
                    depth: pending.depth + 1,
                    chain,
                }
            })
            .collect();

        let listing = DirectoryListing {
            full_path: pending.full_path.clone(),
            relative_path: pending.relative_path.clone(),
            depth: pending.depth,
            subdirectories: subdirectories.into_iter().map(|(name, _)| name).collect(),
            files,
            other_entries,
            cyclic_links,
        };

        Ok((listing, children))
    }
}

impl Iterator for Walker {
    type Item = Result<DirectoryListing, WalkError>;

    fn next(&mut self) -> Option<Self::Item> {
        let pending = self.stack.pop()?;
        match self.read(&pending) {
            Ok((listing, children)) => {
                self.stack.extend(children);
                Some(Ok(listing))
            }
            Err(error) => Some(Err(error)),
        }
    }
}

#[derive(Clone, Debug)]
struct PendingDirectory {
    full_path: PathBuf,
    relative_path: PathBuf,
    depth: usize,
    // Canonical paths of this directory and its ancestors; empty unless
    // symlinks are followed.
    chain: Vec<PathBuf>,
}

fn absolutize(path: PathBuf) -> Result<PathBuf, WalkError> {
    if path.is_absolute() {
        Ok(path)
    } else {
        let cwd = env::current_dir().map_err(WalkError::current_dir)?;
        Ok(cwd.join(path))
    }
}

use super::PassContext;
use super::staging::StagedFile;
use crate::error::EntryError;
use crate::event::SyncEvent;
use crate::paths::PathPair;
use logging_sink::Sink;
use metadata::{apply_file_metadata_with_options, quick_check_matches};
use std::fs;
use std::io;
use tracing::{debug, trace};
use walk::WalkBuilder;

pub(super) fn run<S: Sink + ?Sized>(pass: &mut PassContext<'_, S>) {
    let roots = pass.reconciler().roots().clone();
    debug!(target: "dirmirror::copy", source = %roots.source().display(), "propagating");

    let mut walker = match WalkBuilder::new(roots.source()).follow_symlinks(true).build() {
        Ok(walker) => walker,
        Err(error) => {
            pass.fail(error.into());
            return;
        }
    };

    while let Some(item) = walker.next() {
        if pass.should_stop() {
            return;
        }
        let listing = match item {
            Ok(listing) => listing,
            Err(error) => {
                pass.fail(error.into());
                continue;
            }
        };
        let directory = roots.pair_for(listing.relative_path());

        for name in listing.subdirectories() {
            if pass.should_stop() {
                return;
            }
            if !ensure_directory(pass, &directory.child(name)) {
                walker.skip_subdirectory(&listing.child_relative_path(name));
            }
        }

        for name in listing.files() {
            if pass.should_stop() {
                return;
            }
            mirror_file(pass, &directory.child(name));
        }

        for name in listing.other_entries() {
            pass.report(SyncEvent::SkippedEntry {
                source: listing.child_full_path(name),
            });
        }

        for name in listing.cyclic_links() {
            pass.report(SyncEvent::SkippedCycle {
                source: listing.child_full_path(name),
            });
        }
    }
}

/// Makes sure the replica side of `pair` is a directory.
///
/// Returns `false` when it could not be made one, in which case nothing
/// below it can be mirrored during this pass.
fn ensure_directory<S: Sink + ?Sized>(pass: &mut PassContext<'_, S>, pair: &PathPair) -> bool {
    let replica = pair.replica();
    match fs::symlink_metadata(replica) {
        Ok(existing) if existing.is_dir() => return true,
        Ok(_) => {
            if let Err(error) = fs::remove_file(replica) {
                pass.fail(EntryError::io("remove file", replica, error));
                return false;
            }
            pass.report(SyncEvent::RemovedFile {
                replica: replica.to_path_buf(),
            });
        }
        Err(error) if error.kind() == io::ErrorKind::NotFound => {}
        Err(error) => {
            pass.fail(EntryError::io("inspect", replica, error));
            return false;
        }
    }

    match fs::create_dir_all(replica) {
        Ok(()) => {
            pass.report(SyncEvent::CreatedFolder {
                replica: replica.to_path_buf(),
            });
            true
        }
        Err(error) => {
            pass.fail(EntryError::io("create directory", replica, error));
            false
        }
    }
}

fn mirror_file<S: Sink + ?Sized>(pass: &mut PassContext<'_, S>, pair: &PathPair) {
    let source_metadata = match fs::metadata(pair.source()) {
        Ok(metadata) => metadata,
        Err(error) => {
            pass.fail(EntryError::io("inspect", pair.source(), error));
            return;
        }
    };

    let replica = pair.replica();
    let existing = match fs::symlink_metadata(replica) {
        Ok(existing) if existing.is_dir() => {
            if let Err(error) = fs::remove_dir_all(replica) {
                pass.fail(EntryError::io("remove directory", replica, error));
                return;
            }
            pass.report(SyncEvent::RemovedFolder {
                replica: replica.to_path_buf(),
            });
            None
        }
        Ok(existing) => Some(existing),
        Err(error) if error.kind() == io::ErrorKind::NotFound => None,
        Err(error) => {
            pass.fail(EntryError::io("inspect", replica, error));
            return;
        }
    };

    if pass.reconciler().copy_policy.skips_unchanged()
        && existing
            .as_ref()
            .is_some_and(|existing| quick_check_matches(&source_metadata, existing))
    {
        trace!(target: "dirmirror::copy", path = %replica.display(), "unchanged");
        pass.unchanged();
        return;
    }

    match copy_file(pass, pair, &source_metadata) {
        Ok(()) => pass.report(SyncEvent::CopiedFile {
            source: pair.source().to_path_buf(),
            replica: replica.to_path_buf(),
        }),
        Err(error) => pass.fail(error),
    }
}

fn copy_file<S: Sink + ?Sized>(
    pass: &PassContext<'_, S>,
    pair: &PathPair,
    source_metadata: &fs::Metadata,
) -> Result<(), EntryError> {
    let mut reader = fs::File::open(pair.source())
        .map_err(|error| EntryError::io("open", pair.source(), error))?;
    let (staged, mut writer) = StagedFile::create(pair.replica())?;

    let copied = io::copy(&mut reader, &mut writer)
        .map_err(|error| EntryError::io("copy", pair.source(), error))?;
    writer
        .sync_data()
        .map_err(|error| EntryError::io("flush", staged.staging_path(), error))?;
    drop(writer);

    apply_file_metadata_with_options(
        staged.staging_path(),
        source_metadata,
        &pass.reconciler().metadata,
    )?;
    staged.commit()?;

    trace!(target: "dirmirror::copy", path = %pair.replica().display(), bytes = copied, "copied");
    Ok(())
}

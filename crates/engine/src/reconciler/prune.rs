use super::PassContext;
use crate::error::EntryError;
use crate::event::SyncEvent;
use crate::paths::PathPair;
use logging_sink::Sink;
use std::fs;
use tracing::debug;
use walk::WalkBuilder;

pub(super) fn run<S: Sink + ?Sized>(pass: &mut PassContext<'_, S>) {
    let roots = pass.reconciler().roots().clone();
    debug!(target: "dirmirror::del", replica = %roots.replica().display(), "pruning");

    let mut walker = match WalkBuilder::new(roots.replica()).build() {
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
            let pair = directory.child(name);
            if source_missing(pass, &pair) && remove_directory(pass, &pair) {
                walker.skip_subdirectory(&listing.child_relative_path(name));
            }
        }

        for name in listing.files().iter().chain(listing.other_entries()) {
            if pass.should_stop() {
                return;
            }
            let pair = directory.child(name);
            if source_missing(pass, &pair) {
                remove_file(pass, &pair);
            }
        }
    }
}

/// Reports whether the source side of `pair` is gone.
///
/// An entry whose existence cannot be established is kept.
fn source_missing<S: Sink + ?Sized>(pass: &mut PassContext<'_, S>, pair: &PathPair) -> bool {
    match pair.source().try_exists() {
        Ok(exists) => !exists,
        Err(error) => {
            pass.fail(EntryError::io("inspect", pair.source(), error));
            false
        }
    }
}

fn remove_directory<S: Sink + ?Sized>(pass: &mut PassContext<'_, S>, pair: &PathPair) -> bool {
    let replica = pair.replica();
    match fs::remove_dir_all(replica) {
        Ok(()) => {
            pass.report(SyncEvent::RemovedFolder {
                replica: replica.to_path_buf(),
            });
            true
        }
        Err(error) => {
            pass.fail(EntryError::io("remove directory", replica, error));
            false
        }
    }
}

fn remove_file<S: Sink + ?Sized>(pass: &mut PassContext<'_, S>, pair: &PathPair) {
    let replica = pair.replica();
    match fs::remove_file(replica) {
        Ok(()) => pass.report(SyncEvent::RemovedFile {
            replica: replica.to_path_buf(),
        }),
        Err(error) => pass.fail(EntryError::io("remove file", replica, error)),
    }
}

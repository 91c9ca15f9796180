use crate::event::SyncEvent;
use std::fmt;

/// Counters collected over one pass.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct PassSummary {
    folders_created: u64,
    files_copied: u64,
    files_unchanged: u64,
    folders_removed: u64,
    files_removed: u64,
    entries_skipped: u64,
    failures: u64,
    interrupted: bool,
}

impl PassSummary {
    /// Creates an empty summary.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            folders_created: 0,
            files_copied: 0,
            files_unchanged: 0,
            folders_removed: 0,
            files_removed: 0,
            entries_skipped: 0,
            failures: 0,
            interrupted: false,
        }
    }

    pub(crate) const fn record(&mut self, event: &SyncEvent) {
        match event {
            SyncEvent::CreatedFolder { .. } => self.folders_created += 1,
            SyncEvent::CopiedFile { .. } => self.files_copied += 1,
            SyncEvent::RemovedFolder { .. } => self.folders_removed += 1,
            SyncEvent::RemovedFile { .. } => self.files_removed += 1,
            SyncEvent::SkippedEntry { .. } | SyncEvent::SkippedCycle { .. } => {
                self.entries_skipped += 1;
            }
        }
    }

    pub(crate) const fn record_unchanged(&mut self) {
        self.files_unchanged += 1;
    }

    pub(crate) const fn record_failure(&mut self) {
        self.failures += 1;
    }

    pub(crate) const fn mark_interrupted(&mut self) {
        self.interrupted = true;
    }

    /// Directories created on the replica.
    #[must_use]
    pub const fn folders_created(&self) -> u64 {
        self.folders_created
    }

    /// Files copied onto the replica.
    #[must_use]
    pub const fn files_copied(&self) -> u64 {
        self.files_copied
    }

    /// Files left alone because the quick check matched.
    #[must_use]
    pub const fn files_unchanged(&self) -> u64 {
        self.files_unchanged
    }

    /// Directory trees removed from the replica.
    #[must_use]
    pub const fn folders_removed(&self) -> u64 {
        self.folders_removed
    }

    /// Non-directory entries removed from the replica.
    #[must_use]
    pub const fn files_removed(&self) -> u64 {
        self.files_removed
    }

    /// Source entries that were neither files nor directories.
    #[must_use]
    pub const fn entries_skipped(&self) -> u64 {
        self.entries_skipped
    }

    /// Entries whose reconciliation failed.
    #[must_use]
    pub const fn failures(&self) -> u64 {
        self.failures
    }

    /// Reports whether the pass stopped early because of the stop signal.
    #[must_use]
    pub const fn interrupted(&self) -> bool {
        self.interrupted
    }

    /// Reports whether the replica was changed during the pass.
    #[must_use]
    pub const fn changed_anything(&self) -> bool {
        self.folders_created
            + self.files_copied
            + self.folders_removed
            + self.files_removed
            > 0
    }
}

impl fmt::Display for PassSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} folders created, {} files copied, {} unchanged, {} folders removed, \
             {} files removed, {} skipped, {} failed",
            self.folders_created,
            self.files_copied,
            self.files_unchanged,
            self.folders_removed,
            self.files_removed,
            self.entries_skipped,
            self.failures
        )?;
        if self.interrupted {
            f.write_str(" (interrupted)")?;
        }
        Ok(())
    }
}

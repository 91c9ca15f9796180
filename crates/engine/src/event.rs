//! Observable filesystem mutations.

use logging_sink::Severity;
use std::fmt;
use std::path::PathBuf;

/// One change applied to the replica, or one source entry left alone.
///
/// Events are reported to the sink as soon as the change is made. Their
/// [`Display`](fmt::Display) form is the message written to the log.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SyncEvent {
    /// A replica directory was created.
    CreatedFolder {
        /// Created directory.
        replica: PathBuf,
    },
    /// A source file was copied over its replica counterpart.
    CopiedFile {
        /// File that was read.
        source: PathBuf,
        /// File that was written.
        replica: PathBuf,
    },
    /// A replica directory and everything below it was removed.
    RemovedFolder {
        /// Removed directory.
        replica: PathBuf,
    },
    /// A replica file (or other non-directory entry) was removed.
    RemovedFile {
        /// Removed entry.
        replica: PathBuf,
    },
    /// A source entry that is neither a directory nor a regular file was not
    /// mirrored.
    SkippedEntry {
        /// Offending source entry.
        source: PathBuf,
    },
    /// A source symlink resolving to one of its own ancestor directories was
    /// not mirrored.
    SkippedCycle {
        /// Offending source link.
        source: PathBuf,
    },
}

impl SyncEvent {
    /// Severity the event is logged at.
    #[must_use]
    pub const fn severity(&self) -> Severity {
        match self {
            Self::CreatedFolder { .. } | Self::CopiedFile { .. } => Severity::Info,
            Self::RemovedFolder { .. }
            | Self::RemovedFile { .. }
            | Self::SkippedEntry { .. }
            | Self::SkippedCycle { .. } => Severity::Warning,
        }
    }
}

impl fmt::Display for SyncEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CreatedFolder { replica } => write!(f, "Created folder: {}", replica.display()),
            Self::CopiedFile { source, replica } => {
                write!(f, "Copied: {} to {}", source.display(), replica.display())
            }
            Self::RemovedFolder { replica } => write!(f, "Removed folder: {}", replica.display()),
            Self::RemovedFile { replica } => write!(f, "Removed file: {}", replica.display()),
            Self::SkippedEntry { source } => write!(
                f,
                "Skipped: {} is not a regular file or directory",
                source.display()
            ),
            Self::SkippedCycle { source } => write!(
                f,
                "Skipped: {} links to a folder that contains it",
                source.display()
            ),
        }
    }
}

use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Which of the two roots an error concerns.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RootRole {
    /// The authoritative tree.
    Source,
    /// The mirrored tree.
    Replica,
}

impl RootRole {
    /// Lower-case name used in messages.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Source => "source",
            Self::Replica => "replica",
        }
    }
}

impl fmt::Display for RootRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors raised by the scheduler itself rather than by individual entries.
#[derive(Debug, Error)]
pub enum SchedulerError {
    /// The configured interval was zero.
    #[error("synchronization interval must be greater than zero")]
    ZeroInterval,
    /// A root could not be inspected.
    #[error("failed to inspect {role} folder '{}': {source}", path.display())]
    InspectRoot {
        /// Root concerned.
        role: RootRole,
        /// Root path.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: io::Error,
    },
    /// A missing root could not be created.
    #[error("failed to create {role} folder '{}': {source}", path.display())]
    CreateRoot {
        /// Root concerned.
        role: RootRole,
        /// Root path.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: io::Error,
    },
    /// A root exists but is not a directory.
    #[error("{role} path '{}' is not a directory", path.display())]
    RootNotDirectory {
        /// Root concerned.
        role: RootRole,
        /// Root path.
        path: PathBuf,
    },
    /// Signal handlers could not be installed.
    #[error("failed to install signal handlers: {0}")]
    Signal(#[source] io::Error),
}

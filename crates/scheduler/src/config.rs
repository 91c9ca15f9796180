use engine::{CopyPolicy, MetadataOptions};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Everything the scheduler needs to run.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SchedulerConfig {
    source: PathBuf,
    replica: PathBuf,
    interval: Duration,
    copy_policy: CopyPolicy,
    metadata: MetadataOptions,
    max_passes: Option<u64>,
}

impl SchedulerConfig {
    /// Creates a configuration mirroring `source` onto `replica` every
    /// `interval`.
    #[must_use]
    pub fn new(source: impl Into<PathBuf>, replica: impl Into<PathBuf>, interval: Duration) -> Self {
        Self {
            source: source.into(),
            replica: replica.into(),
            interval,
            copy_policy: CopyPolicy::default(),
            metadata: MetadataOptions::default(),
            max_passes: None,
        }
    }

    /// Selects the copy policy handed to the reconciler.
    #[must_use]
    pub const fn copy_policy(mut self, policy: CopyPolicy) -> Self {
        self.copy_policy = policy;
        self
    }

    /// Selects which metadata is carried onto copied files.
    #[must_use]
    pub const fn metadata_options(mut self, options: MetadataOptions) -> Self {
        self.metadata = options;
        self
    }

    /// Stops the loop after `passes` passes. `None` runs until stopped.
    #[must_use]
    pub const fn max_passes(mut self, passes: Option<u64>) -> Self {
        self.max_passes = passes;
        self
    }

    /// Source root.
    #[must_use]
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Replica root.
    #[must_use]
    pub fn replica(&self) -> &Path {
        &self.replica
    }

    /// Time slept between passes.
    #[must_use]
    pub const fn interval(&self) -> Duration {
        self.interval
    }

    /// Copy policy used for every pass.
    #[must_use]
    pub const fn policy(&self) -> CopyPolicy {
        self.copy_policy
    }

    /// Metadata preserved on copied files.
    #[must_use]
    pub const fn metadata(&self) -> MetadataOptions {
        self.metadata
    }

    /// Pass limit, if any.
    #[must_use]
    pub const fn pass_limit(&self) -> Option<u64> {
        self.max_passes
    }
}

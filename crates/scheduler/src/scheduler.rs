use crate::config::SchedulerConfig;
use crate::error::{RootRole, SchedulerError};
use engine::{PassSummary, Reconciler, Roots, StopSignal};
use logging_sink::Sink;
use std::fs;
use std::io;
use std::path::Path;
use tracing::{debug, info};

/// Message logged after every completed pass.
pub const COMPLETION_MESSAGE: &str = "Synchronization complete.";

/// Message logged when a pass was cut short by the stop signal.
pub const INTERRUPTED_MESSAGE: &str = "Synchronization interrupted.";

/// What [`Scheduler::run`] did before returning.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct RunReport {
    passes: u64,
    failed_passes: u64,
    stopped: bool,
}

impl RunReport {
    /// Iterations started, including ones whose roots could not be prepared.
    #[must_use]
    pub const fn passes(&self) -> u64 {
        self.passes
    }

    /// Iterations that reported at least one failure.
    #[must_use]
    pub const fn failed_passes(&self) -> u64 {
        self.failed_passes
    }

    /// Reports whether the loop ended because the stop signal was raised.
    #[must_use]
    pub const fn stopped(&self) -> bool {
        self.stopped
    }
}

/// Repeats synchronization passes at a fixed interval.
#[derive(Debug)]
pub struct Scheduler {
    config: SchedulerConfig,
    reconciler: Reconciler,
    stop: StopSignal,
}

impl Scheduler {
    /// Creates a scheduler with its own stop signal.
    pub fn new(config: SchedulerConfig) -> Result<Self, SchedulerError> {
        Self::with_stop_signal(config, StopSignal::new())
    }

    /// Creates a scheduler that watches `stop`.
    pub fn with_stop_signal(
        config: SchedulerConfig,
        stop: StopSignal,
    ) -> Result<Self, SchedulerError> {
        if config.interval().is_zero() {
            return Err(SchedulerError::ZeroInterval);
        }
        let reconciler = Reconciler::new(Roots::new(config.source(), config.replica()))
            .copy_policy(config.policy())
            .metadata_options(config.metadata())
            .stop_signal(stop.clone());
        Ok(Self {
            config,
            reconciler,
            stop,
        })
    }

    /// Configuration in use.
    #[must_use]
    pub const fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    /// Signal that ends [`run`](Self::run) and interrupts passes.
    #[must_use]
    pub const fn stop_signal(&self) -> &StopSignal {
        &self.stop
    }

    /// Runs passes until the stop signal is raised or the pass limit is
    /// reached, sleeping for the configured interval between passes.
    ///
    /// Failures to prepare the roots are logged and retried on the next tick.
    pub fn run<S: Sink + ?Sized>(&self, sink: &mut S) -> RunReport {
        let mut report = RunReport::default();
        loop {
            if self.stop.is_requested() {
                report.stopped = true;
                break;
            }

            report.passes += 1;
            match self.run_once(sink) {
                Ok(summary) if summary.failures() == 0 => {}
                Ok(_) => report.failed_passes += 1,
                Err(error) => {
                    sink.error(&error.to_string());
                    report.failed_passes += 1;
                }
            }

            if self
                .config
                .pass_limit()
                .is_some_and(|limit| report.passes >= limit)
            {
                break;
            }
            debug!(
                target: "dirmirror::scheduler",
                seconds = self.config.interval().as_secs_f64(),
                "sleeping until next pass"
            );
            if self.stop.sleep(self.config.interval()) {
                report.stopped = true;
                break;
            }
        }
        debug!(target: "dirmirror::scheduler", passes = report.passes, "scheduler stopped");
        report
    }

    /// Prepares both roots and runs a single pass without sleeping.
    ///
    /// Returns an error, without logging it, when a root is unusable.
    pub fn run_once<S: Sink + ?Sized>(&self, sink: &mut S) -> Result<PassSummary, SchedulerError> {
        ensure_root(RootRole::Source, self.config.source(), sink)?;
        ensure_root(RootRole::Replica, self.config.replica(), sink)?;

        let summary = self.reconciler.run_pass(sink);
        if summary.interrupted() {
            sink.warn(INTERRUPTED_MESSAGE);
        } else {
            sink.info(COMPLETION_MESSAGE);
        }
        info!(
            target: "dirmirror::scheduler",
            %summary,
            changed = summary.changed_anything(),
            "pass finished"
        );
        Ok(summary)
    }
}

fn ensure_root<S: Sink + ?Sized>(
    role: RootRole,
    path: &Path,
    sink: &mut S,
) -> Result<(), SchedulerError> {
    match fs::metadata(path) {
        Ok(metadata) if metadata.is_dir() => Ok(()),
        Ok(_) => Err(SchedulerError::RootNotDirectory {
            role,
            path: path.to_path_buf(),
        }),
        Err(error) if error.kind() == io::ErrorKind::NotFound => {
            fs::create_dir_all(path).map_err(|source| SchedulerError::CreateRoot {
                role,
                path: path.to_path_buf(),
                source,
            })?;
            sink.info(&format!("Created {role} folder: {}", path.display()));
            Ok(())
        }
        Err(source) => Err(SchedulerError::InspectRoot {
            role,
            path: path.to_path_buf(),
            source,
        }),
    }
}

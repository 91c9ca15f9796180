//! One synchronization pass: propagate, then prune.

mod propagate;
mod prune;
mod staging;


use crate::error::EntryError;
use crate::event::SyncEvent;
use crate::paths::Roots;
use crate::policy::CopyPolicy;
use crate::stop::StopSignal;
use crate::summary::PassSummary;
use logging_sink::Sink;
use metadata::MetadataOptions;
use tracing::debug;

/// Makes a replica tree match its source tree.
///
/// The reconciler holds no state between passes; every pass re-reads both
/// trees from disk.
#[derive(Clone, Debug)]
pub struct Reconciler {
    roots: Roots,
    copy_policy: CopyPolicy,
    metadata: MetadataOptions,
    stop: StopSignal,
}

impl Reconciler {
    /// Creates a reconciler for `roots` with unconditional copying.
    #[must_use]
    pub fn new(roots: Roots) -> Self {
        Self {
            roots,
            copy_policy: CopyPolicy::default(),
            metadata: MetadataOptions::default(),
            stop: StopSignal::new(),
        }
    }

    /// Selects when existing replica files are overwritten.
    #[must_use]
    pub fn copy_policy(mut self, policy: CopyPolicy) -> Self {
        self.copy_policy = policy;
        self
    }

    /// Selects which metadata is carried onto copied files.
    #[must_use]
    pub fn metadata_options(mut self, options: MetadataOptions) -> Self {
        self.metadata = options;
        self
    }

    /// Installs the signal checked between filesystem operations.
    #[must_use]
    pub fn stop_signal(mut self, stop: StopSignal) -> Self {
        self.stop = stop;
        self
    }

    /// Roots being mirrored.
    #[must_use]
    pub const fn roots(&self) -> &Roots {
        &self.roots
    }

    /// Runs a full pass: [`propagate`](Self::propagate) followed by
    /// [`prune`](Self::prune).
    ///
    /// Pruning is skipped when propagation was interrupted.
    pub fn run_pass<S: Sink + ?Sized>(&self, sink: &mut S) -> PassSummary {
        let mut summary = PassSummary::new();
        self.propagate(sink, &mut summary);
        if !summary.interrupted() {
            self.prune(sink, &mut summary);
        }
        debug!(target: "dirmirror::engine", %summary, "pass finished");
        summary
    }

    /// Creates missing replica directories and copies every source file onto
    /// its replica counterpart.
    pub fn propagate<S: Sink + ?Sized>(&self, sink: &mut S, summary: &mut PassSummary) {
        let mut pass = PassContext::new(self, sink, summary);
        propagate::run(&mut pass);
    }

    /// Removes replica entries that have no source counterpart.
    pub fn prune<S: Sink + ?Sized>(&self, sink: &mut S, summary: &mut PassSummary) {
        let mut pass = PassContext::new(self, sink, summary);
        prune::run(&mut pass);
    }
}

/// Per-phase state threaded through the propagate and prune walks.
pub(crate) struct PassContext<'a, S: ?Sized> {
    reconciler: &'a Reconciler,
    sink: &'a mut S,
    summary: &'a mut PassSummary,
}

impl<'a, S: Sink + ?Sized> PassContext<'a, S> {
    fn new(reconciler: &'a Reconciler, sink: &'a mut S, summary: &'a mut PassSummary) -> Self {
        Self {
            reconciler,
            sink,
            summary,
        }
    }

    pub(crate) const fn reconciler(&self) -> &Reconciler {
        self.reconciler
    }

    /// Checks the stop signal, marking the summary when it is raised.
    pub(crate) fn should_stop(&mut self) -> bool {
        if self.reconciler.stop.is_requested() {
            if !self.summary.interrupted() {
                debug!(target: "dirmirror::engine", "stop requested; abandoning pass");
            }
            self.summary.mark_interrupted();
            true
        } else {
            false
        }
    }

    pub(crate) fn report(&mut self, event: SyncEvent) {
        self.summary.record(&event);
        self.sink.log(event.severity(), &event.to_string());
    }

    pub(crate) fn fail(&mut self, error: EntryError) {
        self.summary.record_failure();
        self.sink.error(&error.to_string());
    }

    pub(crate) fn unchanged(&mut self) {
        self.summary.record_unchanged();
    }
}

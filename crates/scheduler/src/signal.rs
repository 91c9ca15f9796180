//! Termination signal handling.
//!
//! The first SIGINT, SIGTERM or SIGHUP raises the scheduler's
//! [`StopSignal`]; the loop then finishes the current filesystem operation,
//! logs, and returns. A second signal exits the process immediately with
//! [`SIGNAL_EXIT_CODE`].
//!
//! Handlers only touch atomics, so they are async-signal-safe.

use crate::error::SchedulerError;
use engine::StopSignal;
use signal_hook::SigId;
use signal_hook::flag;
use tracing::debug;

/// Exit status used when a second signal forces termination.
pub const SIGNAL_EXIT_CODE: i32 = 20;

#[cfg(unix)]
const HANDLED_SIGNALS: &[i32] = &[
    signal_hook::consts::SIGINT,
    signal_hook::consts::SIGTERM,
    signal_hook::consts::SIGHUP,
];

#[cfg(not(unix))]
const HANDLED_SIGNALS: &[i32] = &[signal_hook::consts::SIGINT, signal_hook::consts::SIGTERM];

/// Registered handlers. Dropping the value leaves them installed; call
/// [`SignalHandlers::uninstall`] to remove them.
#[derive(Debug)]
pub struct SignalHandlers {
    ids: Vec<SigId>,
}

impl SignalHandlers {
    /// Number of registered handler actions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Reports whether no handler was registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Removes every handler registered by [`install_signal_handlers`].
    pub fn uninstall(self) {
        for id in self.ids {
            signal_hook::low_level::unregister(id);
        }
    }
}

/// Routes termination signals to `stop`.
pub fn install_signal_handlers(stop: &StopSignal) -> Result<SignalHandlers, SchedulerError> {
    let mut ids = Vec::with_capacity(HANDLED_SIGNALS.len() * 2);
    for &signal in HANDLED_SIGNALS {
        // The conditional exit must be registered first so that it sees the
        // flag as it was before this delivery.
        ids.push(
            flag::register_conditional_shutdown(signal, SIGNAL_EXIT_CODE, stop.flag())
                .map_err(SchedulerError::Signal)?,
        );
        ids.push(flag::register(signal, stop.flag()).map_err(SchedulerError::Signal)?);
    }
    debug!(target: "dirmirror::signal", signals = HANDLED_SIGNALS.len(), "signal handlers installed");
    Ok(SignalHandlers { ids })
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn first_signal_raises_the_stop_flag() {
        let stop = StopSignal::new();
        let handlers = install_signal_handlers(&stop).expect("install handlers");
        assert_eq!(handlers.len(), HANDLED_SIGNALS.len() * 2);
        assert!(!stop.is_requested());

        signal_hook::low_level::raise(signal_hook::consts::SIGHUP).expect("raise SIGHUP");
        assert!(stop.is_requested());

        handlers.uninstall();
    }
}

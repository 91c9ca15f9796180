//! Cooperative cancellation shared between the scheduler, the reconciler and
//! signal handlers.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Condvar, Mutex, PoisonError};
use std::time::{Duration, Instant};

// Signal handlers can only flip the atomic flag, so sleepers re-check it at
// least this often.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Shared flag requesting that work stops at the next safe point.
///
/// Clones observe the same flag. [`StopSignal::flag`] exposes the raw
/// [`AtomicBool`] so it can be registered with `signal_hook::flag`.
#[derive(Clone, Debug, Default)]
pub struct StopSignal {
    requested: Arc<AtomicBool>,
    wake: Arc<(Mutex<()>, Condvar)>,
}

impl StopSignal {
    /// Creates a signal that has not been raised.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the underlying flag.
    #[must_use]
    pub fn flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.requested)
    }

    /// Raises the signal and wakes every sleeper.
    pub fn request_stop(&self) {
        let (lock, condvar) = &*self.wake;
        let _guard = lock.lock().unwrap_or_else(PoisonError::into_inner);
        self.requested.store(true, Ordering::SeqCst);
        condvar.notify_all();
    }

    /// Reports whether the signal has been raised.
    #[must_use]
    pub fn is_requested(&self) -> bool {
        self.requested.load(Ordering::SeqCst)
    }

    /// Sleeps for `duration` or until the signal is raised.
    ///
    /// Returns `true` when the sleep ended because of the signal. A duration
    /// too large to be represented as an [`Instant`] sleeps until the signal
    /// is raised.
    pub fn sleep(&self, duration: Duration) -> bool {
        let deadline = Instant::now().checked_add(duration);
        let (lock, condvar) = &*self.wake;
        let mut guard = lock.lock().unwrap_or_else(PoisonError::into_inner);
        loop {
            if self.is_requested() {
                return true;
            }
            let wait = match deadline {
                Some(deadline) => {
                    let now = Instant::now();
                    if now >= deadline {
                        return false;
                    }
                    (deadline - now).min(POLL_INTERVAL)
                }
                None => POLL_INTERVAL,
            };
            guard = match condvar.wait_timeout(guard, wait) {
                Ok((guard, _)) => guard,
                Err(poisoned) => poisoned.into_inner().0,
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn clones_share_the_flag() {
        let signal = StopSignal::new();
        let clone = signal.clone();
        assert!(!clone.is_requested());
        signal.request_stop();
        assert!(clone.is_requested());
    }

    #[test]
    fn sleep_runs_to_completion_without_signal() {
        let signal = StopSignal::new();
        let started = Instant::now();
        assert!(!signal.sleep(Duration::from_millis(50)));
        assert!(started.elapsed() >= Duration::from_millis(50));
    }

    #[test]
    fn request_stop_wakes_a_sleeper() {
        let signal = StopSignal::new();
        let sleeper = signal.clone();
        let handle = thread::spawn(move || {
            let started = Instant::now();
            let stopped = sleeper.sleep(Duration::from_secs(30));
            (stopped, started.elapsed())
        });
        thread::sleep(Duration::from_millis(50));
        signal.request_stop();
        let (stopped, elapsed) = handle.join().expect("sleeper thread");
        assert!(stopped);
        assert!(elapsed < Duration::from_secs(5));
    }

    #[test]
    fn raw_flag_is_noticed_while_sleeping() {
        let signal = StopSignal::new();
        let flag = signal.flag();
        let handle = thread::spawn(move || {
            thread::sleep(Duration::from_millis(50));
            flag.store(true, Ordering::SeqCst);
        });
        assert!(signal.sleep(Duration::from_secs(30)));
        handle.join().expect("setter thread");
    }

    #[test]
    fn unrepresentable_duration_returns_once_raised() {
        let signal = StopSignal::new();
        signal.request_stop();
        assert!(signal.sleep(Duration::from_secs(u64::MAX)));
        assert!(signal.sleep(Duration::MAX));
    }

    #[test]
    fn unrepresentable_duration_waits_for_the_signal() {
        let signal = StopSignal::new();
        let sleeper = signal.clone();
        let handle = thread::spawn(move || sleeper.sleep(Duration::from_secs(u64::MAX)));
        thread::sleep(Duration::from_millis(50));
        signal.request_stop();
        assert!(handle.join().expect("sleeper thread"));
    }
}

//! Cancelable deferred actions.
//!
//! The haptic reset must not block sample processing, so it runs as a
//! scheduled callback rather than a sleep on the delivery path. The guard
//! makes teardown safe: a canceled action never fires.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;

/// Handle to a scheduled action; canceling turns the action into a no-op.
#[derive(Debug, Clone, Default)]
pub struct TimerGuard {
    canceled: Arc<AtomicBool>,
}

impl TimerGuard {
    /// Create a fresh, un-canceled guard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Prevent the scheduled action from running if it has not fired yet.
    pub fn cancel(&self) {
        self.canceled.store(true, Ordering::SeqCst);
    }

    /// Whether the action was canceled.
    pub fn is_canceled(&self) -> bool {
        self.canceled.load(Ordering::SeqCst)
    }
}

/// Schedules a callback to run once after a delay.
pub trait Scheduler: Send + Sync {
    /// Run `action` after `delay` unless the returned guard is canceled
    /// first. Must not block the caller.
    fn after(&self, delay: Duration, action: Box<dyn FnOnce() + Send>) -> TimerGuard;
}

/// Scheduler backed by a short-lived thread per deferred action.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadScheduler;

impl Scheduler for ThreadScheduler {
    fn after(&self, delay: Duration, action: Box<dyn FnOnce() + Send>) -> TimerGuard {
        let guard = TimerGuard::new();
        let handle = guard.clone();
        thread::spawn(move || {
            thread::sleep(delay);
            if !handle.is_canceled() {
                action();
            }
        });
        guard
    }
}

//! The shake detector state machine.
//!
//! Two concerns run side by side: event detection (per-axis deltas against
//! the previous sample, debounced against the last detected shake) and
//! haptic suppression (`Idle → Vibrating → Idle`, where a redundant pulse
//! request during the vibrating window is dropped, never queued). Sample
//! delivery and the deferred haptic reset may run on different threads, so
//! all mutable state sits behind one mutex.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use crate::config::ShakeConfig;
use crate::sample::MotionSample;
use crate::timer::{Scheduler, TimerGuard};

/// Receives samples from a motion source subscription.
pub type SampleListener = Box<dyn FnMut(MotionSample) + Send>;

/// Callback invoked synchronously on every confirmed shake.
pub type ShakeCallback = Box<dyn Fn() + Send + Sync>;

/// The motion-sensing collaborator a detector subscribes to.
///
/// The source is the sole producer: it delivers samples one at a time, in
/// arrival order, at whatever cadence the sensor subsystem provides.
pub trait MotionSource {
    /// Begin delivering samples to `listener`.
    ///
    /// Returns `false` when no motion hardware is available; the detector
    /// then stays dormant instead of failing, since shake-to-roll is an
    /// optional enhancement over the manual trigger.
    fn subscribe(&mut self, listener: SampleListener) -> bool;

    /// Stop delivering samples.
    fn unsubscribe(&mut self);
}

/// The haptic-output collaborator.
pub trait Haptics: Send + Sync {
    /// Request a single pulse of the given duration at default intensity.
    fn pulse(&self, duration: Duration);
}

struct DetectorState {
    /// Previous sample for delta computation; zero right after subscription.
    last: MotionSample,
    /// Timestamp of the last detected shake, if any this active period.
    last_shake_ms: Option<u64>,
    /// Whether a haptic pulse window is currently open.
    haptic_active: bool,
    /// Guard for the scheduled haptic reset, canceled on teardown.
    pending_reset: Option<TimerGuard>,
}

impl DetectorState {
    fn fresh() -> Self {
        Self {
            last: MotionSample::ZERO,
            last_shake_ms: None,
            haptic_active: false,
            pending_reset: None,
        }
    }
}

struct DetectorInner {
    config: ShakeConfig,
    on_shake: ShakeCallback,
    haptics: Box<dyn Haptics>,
    scheduler: Box<dyn Scheduler>,
    state: Mutex<DetectorState>,
}

impl DetectorInner {
    fn lock_state(&self) -> MutexGuard<'_, DetectorState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Process one incoming sample. Invoked on the source's delivery thread.
    fn process(inner: &Arc<Self>, sample: MotionSample) {
        let schedule_pulse;
        {
            let mut state = inner.lock_state();

            // Debounce window against the last detected shake. Discarded
            // samples do not become the stored previous sample.
            if let Some(last_shake) = state.last_shake_ms {
                if sample.timestamp_ms.saturating_sub(last_shake) < inner.config.cooldown_ms {
                    return;
                }
            }

            let shaken = sample.max_axis_delta(&state.last) > inner.config.threshold;
            // Store unconditionally, shake or not.
            state.last = sample;
            if !shaken {
                return;
            }

            state.last_shake_ms = Some(sample.timestamp_ms);
            schedule_pulse = !state.haptic_active;
            if schedule_pulse {
                state.haptic_active = true;
            }
        }

        // Lock released: callbacks must not be able to deadlock delivery.
        (inner.on_shake)();

        if schedule_pulse {
            let duration = Duration::from_millis(inner.config.pulse_ms);
            inner.haptics.pulse(duration);
            let reset_target = Arc::clone(inner);
            let guard = inner.scheduler.after(
                duration,
                Box::new(move || {
                    let mut state = reset_target.lock_state();
                    state.haptic_active = false;
                    state.pending_reset = None;
                }),
            );
            inner.lock_state().pending_reset = Some(guard);
        }
    }
}

/// Turns noisy accelerometer samples into debounced shake events.
///
/// The detector owns the sensor subscription: [`ShakeDetector::activate`]
/// when the host surface comes to the foreground, [`deactivate`] when it
/// leaves, [`shutdown`] (or drop) on permanent teardown. Detection state is
/// reset on every (re)subscription so deltas never span a backgrounded gap.
///
/// [`deactivate`]: ShakeDetector::deactivate
/// [`shutdown`]: ShakeDetector::shutdown
pub struct ShakeDetector<S: MotionSource> {
    source: S,
    inner: Arc<DetectorInner>,
    subscribed: bool,
}

impl<S: MotionSource> ShakeDetector<S> {
    /// Create an inactive detector over the given collaborators.
    pub fn new(
        source: S,
        config: ShakeConfig,
        haptics: Box<dyn Haptics>,
        scheduler: Box<dyn Scheduler>,
        on_shake: ShakeCallback,
    ) -> Self {
        Self {
            source,
            inner: Arc::new(DetectorInner {
                config,
                on_shake,
                haptics,
                scheduler,
                state: Mutex::new(DetectorState::fresh()),
            }),
            subscribed: false,
        }
    }

    /// Subscribe to the motion source; returns whether samples will flow.
    ///
    /// The first sample afterwards is compared against an all-zero previous
    /// sample, which may produce one spurious detection — an accepted
    /// tolerance of the algorithm.
    pub fn activate(&mut self) -> bool {
        if self.subscribed {
            return true;
        }
        {
            let mut state = self.inner.lock_state();
            state.last = MotionSample::ZERO;
            state.last_shake_ms = None;
        }
        let inner = Arc::clone(&self.inner);
        self.subscribed = self
            .source
            .subscribe(Box::new(move |sample| DetectorInner::process(&inner, sample)));
        self.subscribed
    }

    /// Unsubscribe from the motion source; samples stop flowing.
    pub fn deactivate(&mut self) {
        if self.subscribed {
            self.source.unsubscribe();
            self.subscribed = false;
        }
    }

    /// Permanent teardown: unsubscribe and cancel any pending haptic reset
    /// so it cannot fire after the owning context is gone.
    pub fn shutdown(&mut self) {
        self.deactivate();
        let mut state = self.inner.lock_state();
        if let Some(guard) = state.pending_reset.take() {
            guard.cancel();
        }
        state.haptic_active = false;
    }

    /// Whether the detector currently receives samples.
    pub fn is_active(&self) -> bool {
        self.subscribed
    }
}

impl<S: MotionSource> Drop for ShakeDetector<S> {
    fn drop(&mut self) {
        self.shutdown();
    }
}

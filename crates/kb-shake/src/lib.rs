//! Shake-gesture detection for Knobelbecher.
//!
//! A [`ShakeDetector`] subscribes to a [`MotionSource`], filters the raw
//! sample stream into debounced shake events, invokes a caller-supplied
//! callback on each confirmed shake, and requests a single haptic pulse per
//! 200 ms window. Sensor, haptic output, and deferred timing are trait seams
//! so hosts and tests supply their own collaborators.

pub mod config;
pub mod detector;
pub mod sample;
pub mod timer;

pub use config::ShakeConfig;
pub use detector::{Haptics, MotionSource, SampleListener, ShakeCallback, ShakeDetector};
pub use sample::MotionSample;
pub use timer::{Scheduler, ThreadScheduler, TimerGuard};

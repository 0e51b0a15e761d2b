use std::fs;
use std::path::Path;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use colored::Colorize;

use kb_dice::{RollBounds, roll};
use kb_shake::{
    Haptics, MotionSample, MotionSource, SampleListener, ShakeConfig, ShakeDetector,
    ThreadScheduler,
};

type SharedListener = Arc<Mutex<Option<SampleListener>>>;

/// Sensor stand-in that replays a recorded sample log.
#[derive(Clone, Default)]
struct ReplaySource {
    listener: SharedListener,
}

impl ReplaySource {
    fn deliver(&self, sample: MotionSample) {
        let mut listener = self.listener.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(listener) = listener.as_mut() {
            listener(sample);
        }
    }
}

impl MotionSource for ReplaySource {
    fn subscribe(&mut self, listener: SampleListener) -> bool {
        *self.listener.lock().unwrap_or_else(PoisonError::into_inner) = Some(listener);
        true
    }

    fn unsubscribe(&mut self) {
        self.listener
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
    }
}

/// Haptic stand-in: a terminal has no vibration motor, so it buzzes in text.
struct TerminalHaptics;

impl Haptics for TerminalHaptics {
    fn pulse(&self, duration: Duration) {
        println!("{}", format!("~ bzzt ({} ms) ~", duration.as_millis()).dimmed());
    }
}

pub fn run(log: &Path, seed: Option<u64>) -> Result<(), String> {
    let raw = fs::read_to_string(log).map_err(|e| format!("cannot read {}: {e}", log.display()))?;
    let samples: Vec<MotionSample> =
        serde_json::from_str(&raw).map_err(|e| format!("invalid sample log: {e}"))?;
    let total = samples.len();

    let bounds = RollBounds::default();
    let rng = Arc::new(Mutex::new(super::make_rng(seed)));
    let shakes = Arc::new(AtomicU32::new(0));

    let source = ReplaySource::default();
    let feed = source.clone();
    let counter = Arc::clone(&shakes);

    // Wired exactly like the manual roll button: every confirmed shake rolls.
    let mut detector = ShakeDetector::new(
        source,
        ShakeConfig::default(),
        Box::new(TerminalHaptics),
        Box::new(ThreadScheduler),
        Box::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            let mut rng = rng.lock().unwrap_or_else(PoisonError::into_inner);
            let result = roll(1, 20, &bounds, &mut rng);
            println!("{} 1d20: {result}", "Shake!".bold());
        }),
    );

    if !detector.activate() {
        return Err("motion source unavailable".into());
    }
    for sample in samples {
        feed.deliver(sample);
    }
    detector.shutdown();

    println!(
        "{} {} samples, {} shakes",
        "Replayed".bold(),
        total,
        shakes.load(Ordering::SeqCst)
    );
    Ok(())
}

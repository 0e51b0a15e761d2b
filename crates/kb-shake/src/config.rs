//! Detector tuning.

use serde::{Deserialize, Serialize};

/// Tuning constants for the shake detector.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShakeConfig {
    /// Per-axis delta a sample must exceed to count as a shake, in the
    /// sensor's native units.
    pub threshold: f32,
    /// Debounce window after a detected shake, in milliseconds. Samples
    /// arriving inside the window are discarded outright — this is a
    /// debounce, not a sampling-rate throttle.
    pub cooldown_ms: u64,
    /// Duration of the haptic pulse, in milliseconds.
    pub pulse_ms: u64,
}

impl Default for ShakeConfig {
    fn default() -> Self {
        Self {
            threshold: 12.0,
            cooldown_ms: 12,
            pulse_ms: 200,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = ShakeConfig::default();
        assert_eq!(config.threshold, 12.0);
        assert_eq!(config.cooldown_ms, 12);
        assert_eq!(config.pulse_ms, 200);
    }

    #[test]
    fn serde_round_trip() {
        let config = ShakeConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: ShakeConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}

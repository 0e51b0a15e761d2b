//! Accelerometer samples.

use serde::{Deserialize, Serialize};

/// One instantaneous accelerometer reading.
///
/// Ephemeral: the detector keeps only the previous sample needed for delta
/// computation. Serializable so sample logs can be recorded and replayed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MotionSample {
    /// Acceleration along the x axis, in the sensor's native units.
    pub x: f32,
    /// Acceleration along the y axis, in the sensor's native units.
    pub y: f32,
    /// Acceleration along the z axis, in the sensor's native units.
    pub z: f32,
    /// Sample timestamp in milliseconds.
    pub timestamp_ms: u64,
}

impl MotionSample {
    /// The all-zero sample, used as the implicit previous sample right after
    /// (re)subscription.
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
        timestamp_ms: 0,
    };

    /// The largest per-axis absolute delta between two samples.
    pub fn max_axis_delta(&self, other: &Self) -> f32 {
        let dx = (self.x - other.x).abs();
        let dy = (self.y - other.y).abs();
        let dz = (self.z - other.z).abs();
        dx.max(dy).max(dz)
    }

    /// Shorthand constructor for a sample at a given timestamp.
    pub fn at(timestamp_ms: u64, x: f32, y: f32, z: f32) -> Self {
        Self {
            x,
            y,
            z,
            timestamp_ms,
        }
    }
}

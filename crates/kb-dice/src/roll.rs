//! Rolling and roll results.

use rand::Rng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::bounds::RollBounds;

/// The result of one roll: an ordered value per die, each in `[1, sides]`.
///
/// Recomputed fresh on every roll; no identity persists across rolls.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollResult {
    /// Individual die values in roll order.
    pub values: Vec<u32>,
}

impl RollResult {
    /// Sum of all die values.
    pub fn total(&self) -> u32 {
        self.values.iter().sum()
    }

    /// The highest single die value, or 0 if empty.
    pub fn highest(&self) -> u32 {
        self.values.iter().copied().max().unwrap_or(0)
    }

    /// The lowest single die value, or 0 if empty.
    pub fn lowest(&self) -> u32 {
        self.values.iter().copied().min().unwrap_or(0)
    }

    /// Number of dice in the result.
    pub fn count(&self) -> usize {
        self.values.len()
    }

    /// Returns true if the roll produced no values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl std::fmt::Display for RollResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let values: Vec<String> = self.values.iter().map(|v| v.to_string()).collect();
        write!(f, "[{}] = {}", values.join(", "), self.total())
    }
}

/// Roll `dice` dice with `sides` sides each, clamping both into `bounds`.
///
/// Each die is an independent uniform draw. A clamped sides count of zero
/// (possible only with a degenerate bounds configuration) yields an empty
/// result rather than an error — callers must treat "empty" as displayable.
pub fn roll(dice: u32, sides: u32, bounds: &RollBounds, rng: &mut StdRng) -> RollResult {
    let dice = bounds.clamp_dice(dice);
    let sides = bounds.clamp_sides(sides);
    if sides < 1 {
        return RollResult::default();
    }
    let values = (0..dice).map(|_| rng.random_range(1..=sides)).collect();
    RollResult { values }
}

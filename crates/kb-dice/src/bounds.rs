//! Inclusive bounds for roll requests.

use rand::Rng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

/// Inclusive bounds a roll request is clamped into before use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollBounds {
    /// Minimum number of dice per roll.
    pub min_dice: u32,
    /// Maximum number of dice per roll.
    pub max_dice: u32,
    /// Minimum sides per die.
    pub min_sides: u32,
    /// Maximum sides per die.
    pub max_sides: u32,
}

impl Default for RollBounds {
    fn default() -> Self {
        Self {
            min_dice: 1,
            max_dice: 10,
            min_sides: 2,
            max_sides: 100,
        }
    }
}

impl RollBounds {
    /// Clamp a requested dice count into `[min_dice, max_dice]`.
    pub fn clamp_dice(&self, count: u32) -> u32 {
        count.clamp(self.min_dice, self.max_dice)
    }

    /// Clamp a requested sides count into `[min_sides, max_sides]`.
    pub fn clamp_sides(&self, sides: u32) -> u32 {
        sides.clamp(self.min_sides, self.max_sides)
    }

    /// Pick a uniformly random in-bounds (dice, sides) request.
    ///
    /// Used by the "random dice" mode, where each roll first randomizes its
    /// own shape.
    pub fn random_request(&self, rng: &mut StdRng) -> (u32, u32) {
        let dice = rng.random_range(self.min_dice..=self.max_dice);
        let sides = rng.random_range(self.min_sides..=self.max_sides);
        (dice, sides)
    }
}

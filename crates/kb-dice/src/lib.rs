//! Bounded dice rolling for Knobelbecher.
//!
//! A roll request is a (dice count, sides count) pair. Both values are
//! clamped into configured inclusive bounds before rolling — out-of-range
//! requests are corrected, never rejected, because the typical caller is an
//! interactive control that can transiently produce boundary values.

pub mod bounds;
pub mod preset;
pub mod roll;

pub use bounds::RollBounds;
pub use preset::{STANDARD_DICE, parse_sides};
pub use roll::{RollResult, roll};

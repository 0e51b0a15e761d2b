//! Standard-die presets and die-tag parsing.

/// Sides counts for the standard polyhedral quick picks.
pub const STANDARD_DICE: &[u32] = &[4, 6, 8, 10, 12, 20];

/// Parse a sides count from a die tag like "d20" or a bare number like "20".
///
/// Tags and numbers below 2 sides are rejected; clamping against the
/// configured bounds happens later, at roll time.
pub fn parse_sides(s: &str) -> Option<u32> {
    let s = s.trim().to_lowercase();
    let digits = s.strip_prefix('d').unwrap_or(&s);
    let sides = digits.parse::<u32>().ok()?;
    (sides >= 2).then_some(sides)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_die_tags() {
        assert_eq!(parse_sides("d4"), Some(4));
        assert_eq!(parse_sides("D20"), Some(20));
        assert_eq!(parse_sides(" d100 "), Some(100));
        assert_eq!(parse_sides("d30"), Some(30));
    }

    #[test]
    fn parses_bare_numbers() {
        assert_eq!(parse_sides("6"), Some(6));
        assert_eq!(parse_sides("137"), Some(137));
    }

    #[test]
    fn rejects_degenerate_and_malformed_tags() {
        assert_eq!(parse_sides("d1"), None);
        assert_eq!(parse_sides("0"), None);
        assert_eq!(parse_sides("dd6"), None);
        assert_eq!(parse_sides("coin"), None);
        assert_eq!(parse_sides(""), None);
    }

    #[test]
    fn standard_dice_are_valid_tags() {
        for sides in STANDARD_DICE {
            assert_eq!(parse_sides(&format!("d{sides}")), Some(*sides));
        }
    }
}

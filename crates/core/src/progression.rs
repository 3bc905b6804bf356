//! Player leveling math, mirrored from the backend.
//!
//! The backend owns the real progression state; these helpers exist so the
//! dashboard can render progress bars and level-up previews without another
//! round trip. The curve is linear: reaching the next level always costs
//! `level * 100` XP, and surplus XP carries over.

use serde::Serialize;

/// XP required to go from `level` to `level + 1`.
pub const XP_PER_LEVEL: i64 = 100;

/// Coins granted by the backend on every level-up.
pub const LEVEL_UP_COIN_BONUS: i64 = 50;

/// XP needed to clear the given level.
pub fn xp_to_next(level: i64) -> i64 {
    level.max(1) * XP_PER_LEVEL
}

/// A player's position within the current level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LevelProgress {
    pub level: i64,
    pub xp: i64,
    pub xp_to_next: i64,
}

impl LevelProgress {
    pub fn new(level: i64, xp: i64) -> Self {
        Self {
            level,
            xp,
            xp_to_next: xp_to_next(level),
        }
    }

    /// Fill fraction for a progress bar, clamped to `0.0..=1.0`.
    ///
    /// XP can momentarily exceed the threshold between a reward landing and
    /// the backend applying the level-up, hence the clamp.
    pub fn fraction(&self) -> f32 {
        (self.xp as f32 / self.xp_to_next as f32).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_curve() {
        assert_eq!(xp_to_next(1), 100);
        assert_eq!(xp_to_next(7), 700);
    }

    #[test]
    fn degenerate_levels_cost_one_level() {
        // The backend never stores a level below 1; treat bad input as 1.
        assert_eq!(xp_to_next(0), 100);
        assert_eq!(xp_to_next(-3), 100);
    }

    #[test]
    fn fraction_midway() {
        let progress = LevelProgress::new(2, 50);
        assert_eq!(progress.xp_to_next, 200);
        assert!((progress.fraction() - 0.25).abs() < f32::EPSILON);
    }

    #[test]
    fn fraction_clamps_overflow() {
        let progress = LevelProgress::new(1, 250);
        assert_eq!(progress.fraction(), 1.0);
    }

    #[test]
    fn fraction_clamps_negative() {
        let progress = LevelProgress::new(1, -10);
        assert_eq!(progress.fraction(), 0.0);
    }
}

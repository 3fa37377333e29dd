//! Board rotation planning
//!
//! Each round the pattern preview and the input board may rotate by a
//! quarter or half turn, with odds that scale with difficulty. Only the
//! target angles are decided here; animating toward them belongs to the
//! presentation layer.

use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

/// Rotation targets for one round, in degrees (multiples of 90)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RotationPlan {
    /// Where the pattern preview pointed last round (animation start)
    pub prev_pattern_deg: i32,
    /// Pattern preview target
    pub pattern_deg: i32,
    /// Input board target
    pub input_deg: i32,
}

/// Rotation state accumulated across rounds.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BoardRotation {
    pattern_deg: i32,
    prev_pattern_deg: i32,
    input_deg: i32,
}

impl BoardRotation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Roll the next round's targets.
    ///
    /// Difficulty 1 never rotates, and a reset (after a non-flawless round)
    /// snaps both targets back to the nearest full revolution. Otherwise:
    ///
    /// - Pattern preview, difficulty 2..=5: P(180) = 0.05*d,
    ///   P(90) = 0.2 + 0.05*d (exclusive bounds).
    /// - Input board joins from difficulty 3: P(180) = 0.1*d - 0.2,
    ///   P(90) = 0.15 + 0.05*d (inclusive bounds).
    ///
    /// Turn direction is a coin flip, and each target independently has a
    /// 30% chance of snapping back upright regardless of the roll.
    pub fn next_round(
        &mut self,
        rng: &mut Pcg32,
        effective_difficulty: u32,
        reset: bool,
    ) -> RotationPlan {
        if reset || effective_difficulty <= 1 {
            self.snap_to_rest();
            return self.plan();
        }

        let d = effective_difficulty as f32;

        let roll: f32 = rng.random();
        let half_turn_at = 1.0 - 0.05 * d;
        let quarter_turn_at = half_turn_at - 0.2 - 0.05 * d;
        let turns = if roll > half_turn_at {
            2
        } else if roll > quarter_turn_at {
            1
        } else {
            0
        };
        self.rotate_pattern(rng, turns);

        if effective_difficulty >= 3 {
            let roll: f32 = rng.random();
            let half_turn_at = 1.2 - 0.1 * d;
            let quarter_turn_at = half_turn_at - 0.15 - 0.05 * d;
            let turns = if roll >= half_turn_at {
                2
            } else if roll >= quarter_turn_at {
                1
            } else {
                0
            };
            self.rotate_input(rng, turns);
        }

        self.plan()
    }

    fn rotate_pattern(&mut self, rng: &mut Pcg32, turns: i32) {
        let sign = if rng.random::<f32>() > 0.5 { 1 } else { -1 };
        self.prev_pattern_deg = self.pattern_deg;
        self.pattern_deg += sign * turns * 90;
        if rng.random::<f32>() >= 0.7 {
            self.pattern_deg = 0;
        }
    }

    fn rotate_input(&mut self, rng: &mut Pcg32, turns: i32) {
        let sign = if rng.random::<f32>() > 0.5 { 1 } else { -1 };
        self.input_deg += sign * turns * 90;
        if rng.random::<f32>() >= 0.7 {
            self.input_deg = 0;
        }
    }

    /// Snap both targets to the nearest full revolution (truncating toward
    /// zero, so a 270 target rests at 0 and a 450 target rests at 360).
    fn snap_to_rest(&mut self) {
        self.prev_pattern_deg = self.pattern_deg;
        self.pattern_deg = (self.pattern_deg / 360) * 360;
        self.input_deg = (self.input_deg / 360) * 360;
    }

    fn plan(&self) -> RotationPlan {
        RotationPlan {
            prev_pattern_deg: self.prev_pattern_deg,
            pattern_deg: self.pattern_deg,
            input_deg: self.input_deg,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;

    #[test]
    fn test_difficulty_one_never_rotates() {
        let mut rotation = BoardRotation::new();
        let mut rng = Pcg32::seed_from_u64(7);
        for _ in 0..50 {
            let plan = rotation.next_round(&mut rng, 1, false);
            assert_eq!(plan.pattern_deg, 0);
            assert_eq!(plan.input_deg, 0);
        }
    }

    #[test]
    fn test_difficulty_two_leaves_input_alone() {
        let mut rotation = BoardRotation::new();
        let mut rng = Pcg32::seed_from_u64(11);
        for _ in 0..100 {
            let plan = rotation.next_round(&mut rng, 2, false);
            assert_eq!(plan.input_deg, 0);
        }
    }

    #[test]
    fn test_reset_snaps_to_rest() {
        let mut rotation = BoardRotation::new();
        let mut rng = Pcg32::seed_from_u64(13);
        for _ in 0..20 {
            rotation.next_round(&mut rng, 5, false);
        }
        let plan = rotation.next_round(&mut rng, 5, true);
        assert_eq!(plan.pattern_deg % 360, 0);
        assert_eq!(plan.input_deg % 360, 0);
    }

    #[test]
    fn test_deterministic_under_seed() {
        let mut a = BoardRotation::new();
        let mut b = BoardRotation::new();
        let mut rng_a = Pcg32::seed_from_u64(99);
        let mut rng_b = Pcg32::seed_from_u64(99);
        for _ in 0..30 {
            assert_eq!(
                a.next_round(&mut rng_a, 4, false),
                b.next_round(&mut rng_b, 4, false)
            );
        }
    }

    proptest! {
        /// Targets are always quarter-turn aligned.
        #[test]
        fn prop_targets_quarter_aligned(seed in any::<u64>(), difficulty in 1u32..=5) {
            let mut rotation = BoardRotation::new();
            let mut rng = Pcg32::seed_from_u64(seed);
            for round in 0..40u32 {
                let reset = round % 7 == 6;
                let plan = rotation.next_round(&mut rng, difficulty, reset);
                prop_assert_eq!(plan.pattern_deg % 90, 0);
                prop_assert_eq!(plan.input_deg % 90, 0);
                prop_assert_eq!(plan.prev_pattern_deg % 90, 0);
            }
        }
    }
}

//! Score-driven difficulty progression
//!
//! Cumulative score buckets into tiers 1..=10. The tier drives the board
//! layout, the per-round time bonus, the score multiplier, and the bounds
//! the multiplier gauge displays.

use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// Board layout for a difficulty tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSpec {
    /// Tokens per side of the square board
    pub side: usize,
    /// Total token count (`side * side`)
    pub token_count: usize,
    /// Difficulty within the board-size bracket (1..=5); drives pattern
    /// size and rotation odds
    pub effective_difficulty: u32,
}

/// Maps cumulative score to tier, time bonus, and gauge bounds.
#[derive(Debug, Clone)]
pub struct DifficultyLadder {
    thresholds: Vec<i64>,
    time_bonus_base: f32,
    time_bonus_step: f32,
}

impl DifficultyLadder {
    /// Build from validated tuning.
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            thresholds: tuning.tier_thresholds.clone(),
            time_bonus_base: tuning.time_bonus_base,
            time_bonus_step: tuning.time_bonus_step,
        }
    }

    /// Tier is the index of the first threshold the score has not reached;
    /// a score past the whole table lands on tier == table length. Never
    /// returns 0: the first threshold is 0, and the clamp keeps `tier - 1`
    /// indexing safe even against a misconfigured table.
    pub fn tier_for_score(&self, score: i64) -> u32 {
        let tier = self
            .thresholds
            .iter()
            .position(|&t| score < t)
            .unwrap_or(self.thresholds.len());
        (tier as u32).max(1)
    }

    /// Seconds granted on round completion at this tier.
    pub fn time_bonus(&self, tier: u32) -> f32 {
        self.time_bonus_base + self.time_bonus_step * tier as f32
    }

    /// Score range the multiplier gauge spans at this tier. The top tier
    /// has no upper bound, so its range saturates on the last threshold
    /// pair and the gauge pins at full.
    pub fn tier_bounds(&self, tier: u32) -> (i64, i64) {
        let len = self.thresholds.len();
        let tier = (tier as usize).clamp(1, len);
        if tier < len {
            (self.thresholds[tier - 1], self.thresholds[tier])
        } else {
            (self.thresholds[len - 2], self.thresholds[len - 1])
        }
    }

    /// Tiers 1-5 play on a 3x3 board; tiers 6-10 move to 4x4 and restart
    /// the in-bracket difficulty at 1.
    pub fn board_for_tier(&self, tier: u32) -> BoardSpec {
        if tier <= 5 {
            BoardSpec {
                side: 3,
                token_count: 9,
                effective_difficulty: tier.max(1),
            }
        } else {
            BoardSpec {
                side: 4,
                token_count: 16,
                effective_difficulty: (tier - 5).min(5),
            }
        }
    }

    pub fn max_tier(&self) -> u32 {
        self.thresholds.len() as u32
    }
}

//! Data-driven game balance
//!
//! Every tunable rule constant lives here so balance iteration happens in
//! one place instead of scattered magic numbers. A `Tuning` is validated
//! once, before a session is constructed; a malformed table never reaches
//! the simulation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::TIER_TABLE_LEN;

/// Rejected balance configuration
#[derive(Debug, Error, PartialEq)]
pub enum TuningError {
    #[error("tier threshold table must have 10 entries, got {0}")]
    TableLength(usize),

    #[error("tier threshold table must start at 0, got {0}")]
    TableStart(i64),

    #[error("tier thresholds must be strictly increasing at index {0}")]
    TableOrder(usize),

    #[error("max_time must be positive, got {0}")]
    MaxTime(f32),

    #[error("start_time must be in (0, max_time], got {0}")]
    StartTime(f32),

    #[error("mistake_penalty must be positive, got {0}")]
    MistakePenalty(f32),

    #[error("max_combo_multiplier must be at least 1, got {0}")]
    ComboCap(u32),
}

/// Game balance knobs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tuning {
    /// Timer ceiling; round bonuses never push the clock past this
    pub max_time: f32,
    /// Timer value when a session begins
    pub start_time: f32,
    /// Seconds removed when a token outside the pattern is tapped
    pub mistake_penalty: f32,
    /// Combo bonus points per tier point at 1x multiplier
    pub base_combo_bonus: i64,
    /// Cap on the combo bonus multiplier
    pub max_combo_multiplier: u32,
    /// Time granted per completed round is `base + step * tier`
    pub time_bonus_base: f32,
    pub time_bonus_step: f32,
    /// Scores at which the difficulty tier goes up (strictly increasing,
    /// first entry 0)
    pub tier_thresholds: Vec<i64>,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            max_time: 15.0,
            start_time: 10.0,
            mistake_penalty: 0.2,
            base_combo_bonus: 200,
            max_combo_multiplier: 10,
            time_bonus_base: 1.0,
            time_bonus_step: 0.2,
            tier_thresholds: vec![
                0, 1500, 8000, 16000, 26000, 42000, 50000, 60000, 75000, 100000,
            ],
        }
    }
}

impl Tuning {
    /// Check every structural invariant the simulation relies on.
    pub fn validate(&self) -> Result<(), TuningError> {
        if self.tier_thresholds.len() != TIER_TABLE_LEN {
            return Err(TuningError::TableLength(self.tier_thresholds.len()));
        }
        if self.tier_thresholds[0] != 0 {
            return Err(TuningError::TableStart(self.tier_thresholds[0]));
        }
        for (i, pair) in self.tier_thresholds.windows(2).enumerate() {
            if pair[1] <= pair[0] {
                return Err(TuningError::TableOrder(i + 1));
            }
        }
        if self.max_time <= 0.0 {
            return Err(TuningError::MaxTime(self.max_time));
        }
        if self.start_time <= 0.0 || self.start_time > self.max_time {
            return Err(TuningError::StartTime(self.start_time));
        }
        if self.mistake_penalty <= 0.0 {
            return Err(TuningError::MistakePenalty(self.mistake_penalty));
        }
        if self.max_combo_multiplier < 1 {
            return Err(TuningError::ComboCap(self.max_combo_multiplier));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tuning_is_valid() {
        assert_eq!(Tuning::default().validate(), Ok(()));
    }

    #[test]
    fn test_rejects_wrong_table_length() {
        let mut tuning = Tuning::default();
        tuning.tier_thresholds.pop();
        assert_eq!(tuning.validate(), Err(TuningError::TableLength(9)));
    }

    #[test]
    fn test_rejects_nonzero_first_threshold() {
        let mut tuning = Tuning::default();
        tuning.tier_thresholds[0] = 100;
        assert_eq!(tuning.validate(), Err(TuningError::TableStart(100)));
    }

    #[test]
    fn test_rejects_non_increasing_thresholds() {
        let mut tuning = Tuning::default();
        tuning.tier_thresholds[3] = tuning.tier_thresholds[2];
        assert_eq!(tuning.validate(), Err(TuningError::TableOrder(3)));
    }

    #[test]
    fn test_rejects_bad_times() {
        let mut tuning = Tuning::default();
        tuning.start_time = 20.0; // above max_time
        assert!(matches!(tuning.validate(), Err(TuningError::StartTime(_))));

        let mut tuning = Tuning::default();
        tuning.max_time = 0.0;
        assert!(matches!(tuning.validate(), Err(TuningError::MaxTime(_))));
    }

    #[test]
    fn test_rejects_zero_combo_cap() {
        let mut tuning = Tuning::default();
        tuning.max_combo_multiplier = 0;
        assert_eq!(tuning.validate(), Err(TuningError::ComboCap(0)));
    }

    #[test]
    fn test_tuning_json_round_trip() {
        let tuning = Tuning::default();
        let json = serde_json::to_string(&tuning).unwrap();
        let back: Tuning = serde_json::from_str(&json).unwrap();
        assert_eq!(back.tier_thresholds, tuning.tier_thresholds);
        assert_eq!(back.max_combo_multiplier, tuning.max_combo_multiplier);
    }
}

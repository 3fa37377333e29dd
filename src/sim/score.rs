//! Round score arithmetic
//!
//! Pure functions over the round's inputs; no hidden state.

/// Breakdown of a completed round's score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundScore {
    /// Speed-scaled base award for matching the pattern
    pub pattern_score: i64,
    /// Combo payout, nonzero only on the round that resolves a streak
    pub combo_score: i64,
}

impl RoundScore {
    pub fn total(&self) -> i64 {
        self.pattern_score + self.combo_score
    }
}

/// Scores a completed round.
///
/// The pattern term pays `100 - 10 * seconds_taken` (truncated) per tier
/// point and is not floored at zero: a slow-but-correct round at a high
/// tier can cost points.
///
/// `combo_multiplier` is 0 unless the flawless streak resolved this round.
pub fn score_round(
    tier: u32,
    prev_timer: f32,
    timer: f32,
    base_combo_bonus: i64,
    combo_multiplier: u32,
) -> RoundScore {
    let elapsed_tenths = ((prev_timer - timer) * 10.0) as i64;
    RoundScore {
        pattern_score: i64::from(tier) * (100 - elapsed_tenths),
        combo_score: i64::from(tier) * base_combo_bonus * i64::from(combo_multiplier),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instant_completion_pays_full() {
        let score = score_round(2, 11.0, 11.0, 200, 0);
        assert_eq!(score.pattern_score, 200);
        assert_eq!(score.combo_score, 0);
        assert_eq!(score.total(), 200);
    }

    #[test]
    fn test_elapsed_time_erodes_pattern_score() {
        // 4.0 seconds taken at tier 3: 3 * (100 - 40)
        let score = score_round(3, 11.0, 7.0, 200, 0);
        assert_eq!(score.pattern_score, 180);
    }

    #[test]
    fn test_slow_round_goes_negative() {
        // 12 seconds taken: 100 - 120 = -20 per tier point, not floored
        let score = score_round(5, 15.0, 3.0, 200, 0);
        assert_eq!(score.pattern_score, -100);
        assert_eq!(score.total(), -100);
    }

    #[test]
    fn test_combo_payout_scales_with_tier_and_multiplier() {
        let score = score_round(2, 10.0, 10.0, 200, 1);
        assert_eq!(score.combo_score, 400);

        let score = score_round(4, 10.0, 10.0, 200, 3);
        assert_eq!(score.combo_score, 2400);
    }

    #[test]
    fn test_deterministic() {
        let a = score_round(7, 12.5, 9.25, 200, 2);
        let b = score_round(7, 12.5, 9.25, 200, 2);
        assert_eq!(a, b);
    }
}

//! Flawless-streak combo tracking

use serde::{Deserialize, Serialize};

use crate::consts::COMBO_STREAK;

/// Tracks consecutive flawless rounds and the bonus multiplier they feed.
///
/// The index walks 0..3 across flawless rounds. Every third round resolves
/// the combo: the current multiplier is paid out, then grows by one (capped)
/// for the next streak. A mistake forfeits both the streak and the grown
/// multiplier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComboTracker {
    index: u32,
    multiplier: u32,
    max_multiplier: u32,
}

impl ComboTracker {
    pub fn new(max_multiplier: u32) -> Self {
        Self {
            index: 0,
            multiplier: 1,
            max_multiplier,
        }
    }

    /// Advance the streak by one flawless round. Returns the new index and
    /// the current multiplier; at index 3 the caller must `resolve`.
    pub fn advance(&mut self) -> (u32, u32) {
        self.index += 1;
        (self.index, self.multiplier)
    }

    /// Whether the streak has filled and must be resolved this round.
    pub fn ready_to_resolve(&self) -> bool {
        self.index >= COMBO_STREAK
    }

    /// Pay out the filled streak: returns the multiplier to score with,
    /// then grows it (capped) and empties the bar.
    pub fn resolve(&mut self) -> u32 {
        let payout = self.multiplier;
        self.multiplier = (self.multiplier + 1).min(self.max_multiplier);
        self.index = 0;
        payout
    }

    /// A mistake forfeits the whole combo, not just the current bar fill.
    pub fn reset_on_mistake(&mut self) {
        self.index = 0;
        self.multiplier = 1;
    }

    pub fn index(&self) -> u32 {
        self.index
    }

    pub fn multiplier(&self) -> u32 {
        self.multiplier
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_resolve_pays_pre_increment_multiplier() {
        let mut combo = ComboTracker::new(10);

        for expected in 1..=2 {
            let (index, mult) = combo.advance();
            assert_eq!(index, expected);
            assert_eq!(mult, 1);
            assert!(!combo.ready_to_resolve());
        }

        let (index, _) = combo.advance();
        assert_eq!(index, 3);
        assert!(combo.ready_to_resolve());

        // Payout is the multiplier held before the increment
        assert_eq!(combo.resolve(), 1);
        assert_eq!(combo.multiplier(), 2);
        assert_eq!(combo.index(), 0);
    }

    #[test]
    fn test_multiplier_caps() {
        let mut combo = ComboTracker::new(3);
        for _ in 0..10 {
            combo.advance();
            combo.advance();
            combo.advance();
            combo.resolve();
        }
        assert_eq!(combo.multiplier(), 3);
        // Payout also stays at the cap
        combo.advance();
        combo.advance();
        combo.advance();
        assert_eq!(combo.resolve(), 3);
    }

    #[test]
    fn test_mistake_forfeits_everything() {
        let mut combo = ComboTracker::new(10);
        combo.advance();
        combo.advance();
        combo.advance();
        combo.resolve(); // multiplier now 2
        combo.advance();

        combo.reset_on_mistake();
        assert_eq!(combo.index(), 0);
        assert_eq!(combo.multiplier(), 1);
    }

    proptest! {
        /// Multiplier stays in [1, max] and index in [0, 3) no matter what
        /// order the operations arrive in.
        #[test]
        fn prop_invariants_hold(ops in proptest::collection::vec(0u8..3, 0..60), max in 1u32..20) {
            let mut combo = ComboTracker::new(max);
            for op in ops {
                match op {
                    0 => {
                        combo.advance();
                        if combo.ready_to_resolve() {
                            combo.resolve();
                        }
                    }
                    1 => combo.reset_on_mistake(),
                    _ => {
                        if combo.ready_to_resolve() {
                            combo.resolve();
                        }
                    }
                }
                prop_assert!(combo.multiplier() >= 1);
                prop_assert!(combo.multiplier() <= max);
                prop_assert!(combo.index() < COMBO_STREAK);
            }
        }
    }
}

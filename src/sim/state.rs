//! Session phase and collaborator-facing events

use serde::{Deserialize, Serialize};

use super::difficulty::BoardSpec;
use super::rotation::RotationPlan;

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Round in progress, timer running
    Active,
    /// Timer ran out; terminal until an external restart
    Lost,
}

/// Events emitted toward the board and display layers.
///
/// Buffered inside the session and drained by the caller after each tick;
/// the core never calls out.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    /// A pattern was matched and the next round has been set up.
    RoundCompleted {
        score: i64,
        score_delta: i64,
        patterns_completed: u32,
        tier: u32,
        /// Score range of the current tier, for the multiplier gauge
        tier_bounds: (i64, i64),
        /// Target pattern for the new round
        pattern: Vec<usize>,
        board: BoardSpec,
        rotation: RotationPlan,
        /// Rotation state was reset because the finished round had a mistake
        reset_cosmetics: bool,
    },
    /// Timer hit zero. Emitted exactly once per session; the input layer
    /// disables the board on receipt.
    GameOver {
        score: i64,
        patterns_completed: u32,
    },
}

//! Pattern Rush - deterministic core for a grid reaction/memory game
//!
//! The player reproduces a highlighted token pattern on a square board
//! before a countdown expires, earning score, combo, and difficulty
//! bonuses. This crate is the rules engine only: no rendering, no input
//! capture, no scene management. A presentation layer drives it through
//! plain numeric getters and drained events.
//!
//! Core modules:
//! - `sim`: Deterministic simulation (round lifecycle, scoring, difficulty)
//! - `tuning`: Data-driven game balance
//! - `highscores`: Leaderboard with JSON persistence

pub mod highscores;
pub mod sim;
pub mod tuning;

pub use highscores::HighScores;
pub use tuning::{Tuning, TuningError};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz, matching the mobile frame cap)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Flawless rounds needed to fill the combo bar and resolve a bonus
    pub const COMBO_STREAK: u32 = 3;
    /// Required length of the difficulty threshold table
    pub const TIER_TABLE_LEN: usize = 10;
}

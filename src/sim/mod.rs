//! Deterministic game core
//!
//! All gameplay rules live here. This module must stay pure and
//! deterministic:
//! - Tick-driven only, no wall-clock reads
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod combo;
pub mod difficulty;
pub mod pattern;
pub mod rotation;
pub mod score;
pub mod session;
pub mod state;

pub use combo::ComboTracker;
pub use difficulty::{BoardSpec, DifficultyLadder};
pub use pattern::{generate_pattern, multiset_equals, pattern_size};
pub use rotation::{BoardRotation, RotationPlan};
pub use score::{RoundScore, score_round};
pub use session::GameSession;
pub use state::{GamePhase, SessionEvent};

//! Round lifecycle state machine
//!
//! Owns all mutable session state and composes the other sim components.
//! The embedding game loop calls `tick` once per frame with elapsed time,
//! feeds player taps through `add_input`/`incorrect_click`, and drains
//! `SessionEvent`s for the board and display layers.
//!
//! Ordering rule: within one tick the pattern-match check runs before the
//! timer decrement, so the tick that completes a pattern never also
//! consumes time from it.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::combo::ComboTracker;
use super::difficulty::{BoardSpec, DifficultyLadder};
use super::pattern::{generate_pattern, multiset_equals};
use super::rotation::{BoardRotation, RotationPlan};
use super::score::score_round;
use super::state::{GamePhase, SessionEvent};
use crate::tuning::{Tuning, TuningError};

/// A single run of the game, from start until the timer runs out.
pub struct GameSession {
    tuning: Tuning,
    ladder: DifficultyLadder,
    combo: ComboTracker,
    rotation: BoardRotation,
    rng: Pcg32,
    seed: u64,

    phase: GamePhase,
    timer: f32,
    /// Timer value at the start of the current round, for speed scoring
    prev_timer: f32,
    tier: u32,
    board: BoardSpec,
    pattern: Vec<usize>,
    inputs: Vec<usize>,
    rotation_plan: RotationPlan,
    score: i64,
    patterns_completed: u32,
    flawless: bool,
    events: Vec<SessionEvent>,
}

impl GameSession {
    /// Start a fresh session. Malformed tuning is rejected before any game
    /// state exists.
    pub fn new(tuning: Tuning, seed: u64) -> Result<Self, TuningError> {
        tuning.validate()?;

        let ladder = DifficultyLadder::new(&tuning);
        let mut rng = Pcg32::seed_from_u64(seed);
        let mut rotation = BoardRotation::new();

        let tier = ladder.tier_for_score(0);
        let board = ladder.board_for_tier(tier);
        let pattern = generate_pattern(&mut rng, board.token_count, board.effective_difficulty);
        let rotation_plan = rotation.next_round(&mut rng, board.effective_difficulty, false);
        let combo = ComboTracker::new(tuning.max_combo_multiplier);

        log::info!(
            "session started: seed={seed} tier={tier} board={}x{} pattern={pattern:?}",
            board.side,
            board.side
        );

        Ok(Self {
            timer: tuning.start_time,
            prev_timer: tuning.start_time,
            tuning,
            ladder,
            combo,
            rotation,
            rng,
            seed,
            phase: GamePhase::Active,
            tier,
            board,
            pattern,
            inputs: Vec::new(),
            rotation_plan,
            score: 0,
            patterns_completed: 0,
            flawless: true,
            events: Vec::new(),
        })
    }

    /// Advance the session by one frame.
    pub fn tick(&mut self, dt: f32) {
        if self.phase == GamePhase::Lost {
            return;
        }

        // A penalty may have drained the clock between ticks
        if self.timer <= 0.0 {
            self.lose();
            return;
        }

        if multiset_equals(&self.inputs, &self.pattern) {
            self.next_pattern();
            return;
        }

        self.timer -= dt;
        if self.timer <= 0.0 {
            self.timer = 0.0;
            self.lose();
        }
    }

    /// Record a tap on a pattern token. Appends without deduplication;
    /// multiset equality decides completion.
    pub fn add_input(&mut self, index: usize) {
        if self.phase != GamePhase::Active {
            return;
        }
        self.inputs.push(index);
    }

    /// A token outside the pattern was tapped: the clock takes a penalty,
    /// the round is no longer flawless, and the combo is forfeited.
    pub fn incorrect_click(&mut self) {
        if self.phase != GamePhase::Active {
            return;
        }
        self.timer = (self.timer - self.tuning.mistake_penalty).max(0.0);
        self.flawless = false;
        self.combo.reset_on_mistake();
    }

    pub fn is_in_pattern(&self, index: usize) -> bool {
        self.pattern.contains(&index)
    }

    /// Take the events buffered since the last drain.
    pub fn drain_events(&mut self) -> Vec<SessionEvent> {
        std::mem::take(&mut self.events)
    }

    // --- Display getters ---

    /// Fraction of the timer remaining, for the radial gauge.
    pub fn timer_percent(&self) -> f32 {
        (self.timer / self.tuning.max_time).clamp(0.0, 1.0)
    }

    /// Whole seconds remaining, rounded up.
    pub fn timer_seconds(&self) -> u32 {
        self.timer.max(0.0).ceil() as u32
    }

    pub fn score(&self) -> i64 {
        self.score
    }

    pub fn patterns_completed(&self) -> u32 {
        self.patterns_completed
    }

    pub fn tier(&self) -> u32 {
        self.tier
    }

    /// Score range of the current tier plus the current score, for the
    /// multiplier gauge.
    pub fn tier_bounds(&self) -> (i64, i64, i64) {
        let (low, high) = self.ladder.tier_bounds(self.tier);
        (low, high, self.score)
    }

    pub fn in_play(&self) -> bool {
        self.phase == GamePhase::Active && self.timer > 0.0
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn board(&self) -> BoardSpec {
        self.board
    }

    pub fn pattern(&self) -> &[usize] {
        &self.pattern
    }

    pub fn inputs(&self) -> &[usize] {
        &self.inputs
    }

    pub fn rotation_plan(&self) -> RotationPlan {
        self.rotation_plan
    }

    pub fn combo_index(&self) -> u32 {
        self.combo.index()
    }

    pub fn combo_multiplier(&self) -> u32 {
        self.combo.multiplier()
    }

    // --- Round transition ---

    /// The inputs matched the pattern: score the finished round and set up
    /// the next one.
    fn next_pattern(&mut self) {
        self.inputs.clear();

        let reset_cosmetics = !self.flawless;
        self.tier = self.ladder.tier_for_score(self.score);

        // Only a flawless round advances the streak; the round that fills
        // the bar resolves it and scores with the paid-out multiplier.
        let combo_multiplier = if self.flawless {
            self.combo.advance();
            if self.combo.ready_to_resolve() {
                self.combo.resolve()
            } else {
                0
            }
        } else {
            self.flawless = true;
            0
        };

        let round = score_round(
            self.tier,
            self.prev_timer,
            self.timer,
            self.tuning.base_combo_bonus,
            combo_multiplier,
        );
        self.score += round.total();
        self.patterns_completed += 1;

        self.timer = (self.timer + self.ladder.time_bonus(self.tier)).min(self.tuning.max_time);
        self.prev_timer = self.timer;

        self.board = self.ladder.board_for_tier(self.tier);
        self.pattern = generate_pattern(
            &mut self.rng,
            self.board.token_count,
            self.board.effective_difficulty,
        );
        self.rotation_plan =
            self.rotation
                .next_round(&mut self.rng, self.board.effective_difficulty, reset_cosmetics);

        log::debug!(
            "round {} complete: delta={} score={} tier={} pattern={:?}",
            self.patterns_completed,
            round.total(),
            self.score,
            self.tier,
            self.pattern
        );

        self.events.push(SessionEvent::RoundCompleted {
            score: self.score,
            score_delta: round.total(),
            patterns_completed: self.patterns_completed,
            tier: self.tier,
            tier_bounds: self.ladder.tier_bounds(self.tier),
            pattern: self.pattern.clone(),
            board: self.board,
            rotation: self.rotation_plan,
            reset_cosmetics,
        });
    }

    /// Active -> Lost edge. Runs at most once per session.
    fn lose(&mut self) {
        self.phase = GamePhase::Lost;
        self.timer = 0.0;
        log::info!(
            "game over: score={} patterns={}",
            self.score,
            self.patterns_completed
        );
        self.events.push(SessionEvent::GameOver {
            score: self.score,
            patterns_completed: self.patterns_completed,
        });
    }
}

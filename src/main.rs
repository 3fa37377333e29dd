//! Pattern Rush demo entry point
//!
//! Runs a headless autoplay session: a simulated player taps out patterns
//! with difficulty-scaled reaction times and the occasional mis-tap,
//! exercising the full round lifecycle. Useful for balance tuning without
//! a UI. Usage: `pattern-rush [seed]`.

use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use pattern_rush::consts::SIM_DT;
use pattern_rush::highscores::HighScoreEntry;
use pattern_rush::sim::{GamePhase, GameSession, SessionEvent};
use pattern_rush::{HighScores, Tuning};

/// Where the demo keeps its leaderboard
const SCORES_PATH: &str = "pattern_rush_scores.json";

/// Safety cap so a hot streak can't run forever (30 sim-minutes)
const MAX_TICKS: u64 = 30 * 60 * 60;

/// Chance that any given tap lands outside the pattern
const MISTAP_CHANCE: f32 = 0.04;

/// Simulated player: taps one pattern token per reaction interval.
struct AutoPlayer {
    rng: Pcg32,
    since_tap: f32,
}

impl AutoPlayer {
    fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            since_tap: 0.0,
        }
    }

    /// Reaction time per tap, slowing with tier and fatigue so every run
    /// eventually ends.
    fn reaction(&self, session: &GameSession) -> f32 {
        0.25 + 0.1 * session.tier() as f32 + 0.01 * session.patterns_completed() as f32
    }

    fn step(&mut self, session: &mut GameSession, dt: f32) {
        self.since_tap += dt;
        if self.since_tap < self.reaction(session) {
            return;
        }
        self.since_tap = 0.0;

        if self.rng.random::<f32>() < MISTAP_CHANCE {
            session.incorrect_click();
            return;
        }

        // Tap the first pattern token not selected yet
        let next = session
            .pattern()
            .iter()
            .copied()
            .find(|index| !session.inputs().contains(index));
        if let Some(index) = next {
            session.add_input(index);
        }
    }
}

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(0xC0FFEE);

    let mut session = match GameSession::new(Tuning::default(), seed) {
        Ok(session) => session,
        Err(err) => {
            eprintln!("bad tuning: {err}");
            std::process::exit(1);
        }
    };
    let mut player = AutoPlayer::new(seed ^ 0x9E3779B97F4A7C15);

    println!("autoplay run, seed {seed}");

    let mut ticks = 0u64;
    while session.phase() == GamePhase::Active && ticks < MAX_TICKS {
        player.step(&mut session, SIM_DT);
        session.tick(SIM_DT);
        ticks += 1;

        for event in session.drain_events() {
            match event {
                SessionEvent::RoundCompleted {
                    score,
                    score_delta,
                    patterns_completed,
                    tier,
                    board,
                    ..
                } => {
                    println!(
                        "round {patterns_completed:>3}  +{score_delta:<5} score {score:<7} tier {tier:>2}  board {}x{}",
                        board.side, board.side
                    );
                }
                SessionEvent::GameOver {
                    score,
                    patterns_completed,
                } => {
                    println!("game over: {score} points, {patterns_completed} patterns");
                }
            }
        }
    }

    if session.phase() == GamePhase::Active {
        println!("run capped at {MAX_TICKS} ticks with score {}", session.score());
    }

    record_run(&session);
}

/// Fold the finished run into the on-disk leaderboard.
fn record_run(session: &GameSession) {
    let path = Path::new(SCORES_PATH);
    let mut scores = match HighScores::load(path) {
        Ok(scores) => scores,
        Err(err) => {
            log::warn!("could not load high scores: {err}");
            HighScores::new()
        }
    };

    let timestamp_ms = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);

    let rank = scores.add_score(HighScoreEntry {
        score: session.score().max(0) as u64,
        patterns_completed: session.patterns_completed(),
        tier: session.tier(),
        timestamp_ms,
    });

    match rank {
        Some(rank) => println!("new high score, rank {rank}"),
        None => println!("did not make the leaderboard"),
    }

    if let Err(err) = scores.save(path) {
        log::warn!("could not save high scores: {err}");
    }
    if let Some(top) = scores.top_score() {
        println!("best run so far: {top}");
    }
}

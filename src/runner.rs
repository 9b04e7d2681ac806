//! Headless autopilot runs
//!
//! Drives a full session without a presentation layer: start, let the
//! autopilot steer, tick until game over or the tick budget runs out.

use serde::Serialize;
use thiserror::Error;

use crate::sim::{GameEvent, GameState, InvariantViolation, autopilot, tick};
use crate::tuning::{Tuning, TuningError};

/// Why a headless session could not complete
#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Tuning(#[from] TuningError),
    #[error("invariant broken: {0}")]
    Invariant(#[from] InvariantViolation),
}

/// Outcome of one autopilot run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunSummary {
    pub seed: u64,
    pub run: u32,
    pub ticks: u64,
    pub score: u64,
    pub distance_meters: u64,
    pub final_speed: f32,
    pub good_hits: u32,
    pub bad_hits: u32,
    pub lane_changes: u32,
    pub game_over: bool,
}

/// Play one run on an existing session. Invariants are checked every tick.
pub fn play_run(state: &mut GameState, max_ticks: u64) -> Result<RunSummary, InvariantViolation> {
    state.start();

    let mut good_hits = 0;
    let mut bad_hits = 0;
    let mut lane_changes = 0;

    while state.is_playing() && state.tick_count < max_ticks {
        if let Some(command) = autopilot::choose_command(state) {
            if state.apply(command) {
                lane_changes += 1;
            }
        }

        tick(state);
        state.check_invariants()?;

        for event in &state.events {
            match event {
                GameEvent::GoodHit { .. } => good_hits += 1,
                GameEvent::BadHit { .. } => bad_hits += 1,
                _ => {}
            }
        }
    }

    Ok(RunSummary {
        seed: state.seed,
        run: state.runs,
        ticks: state.tick_count,
        score: state.resources.score,
        distance_meters: state.resources.distance_meters(),
        final_speed: state.speed,
        good_hits,
        bad_hits,
        lane_changes,
        game_over: !state.is_playing(),
    })
}

/// Play `runs` consecutive runs of one seeded session
pub fn run_autopilot(
    seed: u64,
    tuning: Tuning,
    runs: u32,
    max_ticks: u64,
) -> Result<Vec<RunSummary>, RunError> {
    let mut state = GameState::with_tuning(seed, tuning)?;
    let summaries = (0..runs)
        .map(|_| play_run(&mut state, max_ticks))
        .collect::<Result<_, _>>()?;
    Ok(summaries)
}

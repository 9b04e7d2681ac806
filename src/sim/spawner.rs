//! Timed item spawns and difficulty ramp

use super::state::{GameEvent, GameState};
use crate::tuning::Tuning;

#[inline]
pub fn spawn_due(tick_count: u64, tuning: &Tuning) -> bool {
    tick_count.checked_rem(tuning.spawn_interval_ticks) == Some(0)
}

#[inline]
pub fn ramp_due(tick_count: u64, tuning: &Tuning) -> bool {
    tick_count.checked_rem(tuning.ramp_interval_ticks) == Some(0)
}

/// Run spawn and ramp checks for the current (already incremented) tick.
/// Both may fire on the same tick.
pub fn run(state: &mut GameState) {
    let tick_count = state.tick_count;

    if spawn_due(tick_count, &state.tuning) {
        state.spawn_item();
    }

    if ramp_due(tick_count, &state.tuning) {
        state.speed += state.tuning.ramp_increment;
        state.events.push(GameEvent::SpeedIncreased { speed: state.speed });
        log::debug!("Tick {}: speed up to {}", tick_count, state.speed);
    }
}

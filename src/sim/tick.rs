//! Per-frame simulation tick
//!
//! Core game loop that advances the run by exactly one frame.

use super::collision::resolve_item;
use super::spawner;
use super::state::{GamePhase, GameState};
use crate::consts::SCROLL_PERIOD;

/// Advance the game state by one frame. No-op unless a run is in progress.
pub fn tick(state: &mut GameState) {
    if state.phase != GamePhase::Playing {
        return;
    }

    state.events.clear();

    // Player glide and mood settle against last tick's meter
    state.player.update(state.resources.meter, &state.tuning);

    state.resources.add_distance(state.speed, &state.tuning);
    state.scroll_offset = (state.scroll_offset + state.speed) % SCROLL_PERIOD;

    state.tick_count += 1;

    spawner::run(state);

    // Fall, then hit-test each item in spawn order
    let tuning = &state.tuning;
    for item in &mut state.items {
        item.advance(state.speed, tuning);
        if let Some(event) = resolve_item(item, &mut state.player, &mut state.resources, tuning) {
            state.events.push(event);
        }
    }

    state.items.retain(|item| item.is_live());

    if state.resources.apply_decay(&state.tuning) {
        state.end_run();
    }
}

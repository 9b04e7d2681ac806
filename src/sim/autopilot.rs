//! Idle/demo mode - AI plays the game
//!
//! Steers toward healthy food and away from junk by scoring each lane on the
//! items still approaching the player.

use super::input::Command;
use super::item::ItemKind;
use super::state::GameState;

/// How far above the player the autopilot looks
pub const LOOKAHEAD: f32 = 450.0;

const GOOD_WEIGHT: f32 = 1.0;
const BAD_WEIGHT: f32 = -2.5;

/// Attractiveness of every lane; nearer items weigh more
pub fn lane_scores(state: &GameState) -> Vec<f32> {
    let tuning = &state.tuning;
    let player_y = state.player.y;
    let mut scores = vec![0.0; tuning.lane_count as usize];

    for item in state.items.iter().filter(|i| i.is_live()) {
        // Items already below the hit zone can't be reached any more
        let gap = player_y - item.pos.y;
        if gap < -tuning.collision_radius || gap > LOOKAHEAD {
            continue;
        }
        let urgency = 1.0 - gap.max(0.0) / LOOKAHEAD;
        let weight = match item.kind {
            ItemKind::Good => GOOD_WEIGHT,
            ItemKind::Bad => BAD_WEIGHT,
        };
        scores[item.lane as usize] += weight * (0.25 + urgency);
    }

    scores
}

/// Best lane; ties keep the current lane, then prefer the nearer one
pub fn best_lane(state: &GameState) -> u8 {
    let current = state.player.lane;
    let scores = lane_scores(state);

    let mut best = current;
    let mut best_score = scores[current as usize];
    for (lane, &score) in scores.iter().enumerate() {
        let lane = lane as u8;
        let closer = lane.abs_diff(current) < best.abs_diff(current);
        if score > best_score || (score == best_score && closer) {
            best = lane;
            best_score = score;
        }
    }
    best
}

/// Next command for the autopilot, if any
pub fn choose_command(state: &GameState) -> Option<Command> {
    if !state.is_playing() {
        return None;
    }
    let target = best_lane(state);
    let current = state.player.lane;
    if target < current {
        Some(Command::MoveLeft)
    } else if target > current {
        Some(Command::MoveRight)
    } else {
        None
    }
}

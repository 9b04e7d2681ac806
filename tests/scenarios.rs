//! End-to-end runs through the public API

use balance_dash::sim::{
    Command, GameEvent, GamePhase, GameState, Item, ItemIcon, ItemKind, MeterBand, Mood, tick,
};
use balance_dash::{Tuning, run_autopilot};
use glam::Vec2;

fn started(seed: u64) -> GameState {
    let mut state = GameState::new(seed);
    state.apply(Command::Start);
    state
}

fn drop_on_player(state: &mut GameState, kind: ItemKind, icon: ItemIcon) {
    let id = state.next_entity_id();
    let lane = state.player.lane;
    let pos = Vec2::new(state.tuning.lane_center(lane), state.player.y - state.speed);
    state.items.push(Item::new(id, lane, kind, icon, pos));
}

#[test]
fn one_quiet_tick() {
    let mut state = started(1);
    tick(&mut state);
    let snap = state.snapshot();
    assert!((snap.meter - 49.95).abs() < 1e-4);
    assert!((snap.distance - 0.3).abs() < 1e-6);
    assert_eq!(snap.tick_count, 1);
    assert!(snap.items.is_empty());
}

#[test]
fn healthy_catch_then_junk_catch() {
    let mut state = started(2);
    drop_on_player(&mut state, ItemKind::Good, ItemIcon::Salad);
    tick(&mut state);
    let snap = state.snapshot();
    assert_eq!(snap.score, 10);
    assert_eq!(snap.player.mood, Mood::Happy);
    assert!(snap.items.is_empty());
    assert_eq!(state.player.mood_timer, 30);

    drop_on_player(&mut state, ItemKind::Bad, ItemIcon::Lollipop);
    tick(&mut state);
    let snap = state.snapshot();
    assert_eq!(snap.score, 10);
    assert!((snap.meter - 39.9).abs() < 1e-3);
    assert_eq!(snap.player.mood, Mood::Sick);
    assert_eq!(snap.player.mood_icon, "🤢");
    assert!(snap.player.unwell);
    assert_eq!(state.player.mood_timer, 40);
    assert_eq!(snap.meter_band, MeterBand::Mid);
}

#[test]
fn sick_mood_wears_off() {
    let mut state = started(3);
    state.resources.meter = 80.0;
    drop_on_player(&mut state, ItemKind::Bad, ItemIcon::Soda);
    tick(&mut state);
    for _ in 0..40 {
        tick(&mut state);
        state.items.clear();
    }
    assert_eq!(state.player.mood, Mood::Sick);
    assert_eq!(state.player.mood_timer, 0);
    tick(&mut state);
    // Meter is still above 30 here
    assert_eq!(state.player.mood, Mood::Happy);
}

#[test]
fn junk_streak_ends_the_run() {
    let mut state = started(4);
    let mut ticks = 0;
    while state.phase == GamePhase::Playing {
        drop_on_player(&mut state, ItemKind::Bad, ItemIcon::Fries);
        tick(&mut state);
        ticks += 1;
        assert!(ticks <= 3);
    }
    // 50 -> 29.95 -> 9.9 -> 0
    assert_eq!(ticks, 3);
    assert_eq!(state.resources.meter, 0.0);
    assert!(matches!(
        state.events.last(),
        Some(GameEvent::GameOver { score: 0, .. })
    ));

    let frozen = state.snapshot();
    drop_on_player(&mut state, ItemKind::Good, ItemIcon::Apple);
    let with_item = state.snapshot();
    tick(&mut state);
    assert_eq!(state.snapshot(), with_item);
    assert_eq!(frozen.score, with_item.score);
}

#[test]
fn restart_after_game_over() {
    let mut state = started(5);
    state.apply(Command::MoveRight);
    for _ in 0..100 {
        tick(&mut state);
    }
    state.resources.meter = 0.2;
    for _ in 0..10 {
        tick(&mut state);
    }
    assert_eq!(state.phase, GamePhase::GameOver);
    assert!(!state.apply(Command::MoveLeft));

    state.apply(Command::Start);
    let snap = state.snapshot();
    assert_eq!(snap.phase, GamePhase::Playing);
    assert_eq!(snap.score, 0);
    assert_eq!(snap.distance, 0.0);
    assert_eq!(snap.tick_count, 0);
    assert_eq!(snap.speed, 6.0);
    assert_eq!(snap.meter, 50.0);
    assert!(snap.items.is_empty());
    assert_eq!(snap.player.lane, 1);
    assert_eq!(snap.player.x, 240.0);
    assert_eq!(state.runs, 2);
}

#[test]
fn tick_600_ramps_and_spawns() {
    let mut state = started(6);
    for _ in 0..599 {
        tick(&mut state);
        state.items.clear();
    }
    let speed = state.speed;
    tick(&mut state);
    assert_eq!(state.speed - speed, 0.5);
    assert_eq!(state.items.len(), 1);
}

#[test]
fn custom_tuning_changes_pace() {
    let tuning = Tuning::from_json(
        r#"{ "initial_speed": 10.0, "spawn_interval_ticks": 10, "decay_per_tick": 0.0 }"#,
    )
    .unwrap();
    let mut state = GameState::with_tuning(9, tuning).unwrap();
    state.start();
    for _ in 0..10 {
        tick(&mut state);
    }
    assert_eq!(state.speed, 10.0);
    assert!((state.resources.distance - 5.0).abs() < 1e-4);
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.resources.meter, 50.0);
}

#[test]
fn autopilot_session_is_sane() {
    let summaries = run_autopilot(99, Tuning::default(), 2, 10_000).unwrap();
    assert_eq!(summaries.len(), 2);
    for summary in &summaries {
        assert!(summary.ticks > 0);
        assert_eq!(summary.score, 10 * summary.good_hits as u64);
        assert!(summary.final_speed >= 6.0);
    }
}

//! Read-only view of the state for the presentation layer

use serde::Serialize;

use super::item::{ItemIcon, ItemKind};
use super::player::Mood;
use super::resources::MeterBand;
use super::state::{GameEvent, GamePhase, GameState};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerView {
    pub lane: u8,
    pub x: f32,
    pub y: f32,
    pub target_x: f32,
    pub displacement: f32,
    pub tilt_degrees: f32,
    pub mood: Mood,
    pub mood_icon: &'static str,
    /// Draw the frowning face
    pub unwell: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemView {
    pub id: u32,
    pub lane: u8,
    pub x: f32,
    pub y: f32,
    pub kind: ItemKind,
    pub icon: ItemIcon,
    pub glyph: &'static str,
}

/// Everything the HUD and renderer need after a tick
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub phase: GamePhase,
    pub score: u64,
    pub distance: f32,
    pub distance_meters: u64,
    pub meter: f32,
    pub meter_band: MeterBand,
    pub speed: f32,
    pub tick_count: u64,
    pub scroll_offset: f32,
    pub player: PlayerView,
    pub items: Vec<ItemView>,
    pub events: Vec<GameEvent>,
}

impl GameState {
    pub fn snapshot(&self) -> Snapshot {
        let player = &self.player;
        Snapshot {
            phase: self.phase,
            score: self.resources.score,
            distance: self.resources.distance,
            distance_meters: self.resources.distance_meters(),
            meter: self.resources.meter,
            meter_band: self.resources.meter_band(),
            speed: self.speed,
            tick_count: self.tick_count,
            scroll_offset: self.scroll_offset,
            player: PlayerView {
                lane: player.lane,
                x: player.x,
                y: player.y,
                target_x: player.target_x,
                displacement: player.displacement(),
                tilt_degrees: player.tilt_degrees(),
                mood: player.mood,
                mood_icon: player.mood.icon(),
                unwell: player.mood.is_unwell(),
            },
            items: self
                .items
                .iter()
                .map(|item| ItemView {
                    id: item.id,
                    lane: item.lane,
                    x: item.pos.x,
                    y: item.pos.y,
                    kind: item.kind,
                    icon: item.icon,
                    glyph: item.icon.glyph(),
                })
                .collect(),
            events: self.events.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::tick;

    #[test]
    fn test_snapshot_reflects_state() {
        let mut state = GameState::new(77);
        state.start();
        for _ in 0..60 {
            tick(&mut state);
        }
        let snap = state.snapshot();
        assert_eq!(snap.phase, GamePhase::Playing);
        assert_eq!(snap.tick_count, 60);
        assert!((snap.distance - 18.0).abs() < 1e-3);
        assert_eq!(snap.distance_meters, snap.distance.floor() as u64);
        assert_eq!(snap.meter_band, MeterBand::Mid);
        assert_eq!(snap.player.lane, 1);
        assert_eq!(snap.player.mood_icon, "😊");
        assert!(!snap.player.unwell);
        assert_eq!(snap.items.len(), 1);
        assert_eq!(snap.items[0].glyph, snap.items[0].icon.glyph());
    }

    #[test]
    fn test_snapshot_serializes() {
        let mut state = GameState::new(77);
        state.start();
        tick(&mut state);
        let json = serde_json::to_value(state.snapshot()).unwrap();
        assert_eq!(json["phase"], "Playing");
        assert_eq!(json["tick_count"], 1);
        assert_eq!(json["player"]["mood"], "Happy");
        assert!(json["items"].as_array().unwrap().is_empty());
    }
}

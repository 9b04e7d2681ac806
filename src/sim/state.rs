//! Game state and run lifecycle
//!
//! A single owned aggregate: the frame driver ticks it, the input layer sends
//! it commands, the presentation layer reads snapshots of it.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::item::{Item, ItemKind};
use super::player::Player;
use super::resources::Resources;
use crate::tuning::{Tuning, TuningError};

/// Current phase of the run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen, waiting for the first start command
    Start,
    /// Active gameplay
    Playing,
    /// Balance ran out; waiting for restart
    GameOver,
}

/// Something that happened during the most recent tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    ItemSpawned { id: u32, lane: u8, kind: ItemKind },
    SpeedIncreased { speed: f32 },
    GoodHit { id: u32, lane: u8 },
    BadHit { id: u32, lane: u8 },
    GameOver { score: u64, distance: f32 },
}

/// Broken state invariant
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvariantViolation {
    #[error("meter {meter} outside [0, {max}]")]
    MeterRange { meter: f32, max: f32 },
    #[error("player lane {lane} outside 0..{lanes}")]
    LaneRange { lane: u8, lanes: u8 },
    #[error("game over with meter {0} above zero")]
    GameOverMeter(f32),
    #[error("consumed item {0} survived the tick")]
    ConsumedItem(u32),
    #[error("speed {0} is not positive")]
    Speed(f32),
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Session seed for reproducibility
    pub seed: u64,
    pub tuning: Tuning,
    /// Shared by every run of the session
    rng: Pcg32,
    pub phase: GamePhase,
    pub resources: Resources,
    /// Fall speed of items, units per tick
    pub speed: f32,
    /// Ticks simulated in this run
    pub tick_count: u64,
    pub player: Player,
    /// Active items (spawn order)
    pub items: Vec<Item>,
    /// Events raised by the last tick
    pub events: Vec<GameEvent>,
    /// Road stripe scroll (cosmetic)
    pub scroll_offset: f32,
    /// Runs started this session
    pub runs: u32,
    next_id: u32,
}

impl GameState {
    /// New session with default tuning, on the title screen
    pub fn new(seed: u64) -> Self {
        Self::build(seed, Tuning::default())
    }

    /// New session with custom tuning, rejected if it fails validation
    pub fn with_tuning(seed: u64, tuning: Tuning) -> Result<Self, TuningError> {
        tuning.validate()?;
        Ok(Self::build(seed, tuning))
    }

    fn build(seed: u64, tuning: Tuning) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Start,
            resources: Resources::new(&tuning),
            speed: tuning.initial_speed,
            tick_count: 0,
            player: Player::new(&tuning),
            items: Vec::new(),
            events: Vec::new(),
            scroll_offset: 0.0,
            runs: 0,
            next_id: 1,
            tuning,
        }
    }

    /// Begin a fresh run from any phase
    pub fn start(&mut self) {
        self.resources = Resources::new(&self.tuning);
        self.speed = self.tuning.initial_speed;
        self.tick_count = 0;
        self.player = Player::new(&self.tuning);
        self.items.clear();
        self.events.clear();
        self.scroll_offset = 0.0;
        self.next_id = 1;
        self.runs += 1;
        self.phase = GamePhase::Playing;
        log::info!("Run {} started (seed {})", self.runs, self.seed);
    }

    pub fn move_left(&mut self) -> bool {
        self.phase == GamePhase::Playing && self.player.move_left()
    }

    pub fn move_right(&mut self) -> bool {
        self.phase == GamePhase::Playing && self.player.move_right(&self.tuning)
    }

    #[inline]
    pub fn is_playing(&self) -> bool {
        self.phase == GamePhase::Playing
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Spawn a random item at the top of the field
    pub fn spawn_item(&mut self) -> &Item {
        let id = self.next_entity_id();
        let item = Item::spawn(id, &mut self.rng, &self.tuning);
        self.events.push(GameEvent::ItemSpawned {
            id,
            lane: item.lane,
            kind: item.kind,
        });
        self.items.push(item);
        &self.items[self.items.len() - 1]
    }

    /// Enter game over: meter pinned to zero
    pub(crate) fn end_run(&mut self) {
        self.resources.meter = 0.0;
        self.phase = GamePhase::GameOver;
        self.events.push(GameEvent::GameOver {
            score: self.resources.score,
            distance: self.resources.distance,
        });
        log::info!(
            "Game over: score {}, distance {}m after {} ticks",
            self.resources.score,
            self.resources.distance_meters(),
            self.tick_count
        );
    }

    /// Check the state invariants that must hold between ticks
    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        let meter = self.resources.meter;
        if !(0.0..=self.tuning.meter_max).contains(&meter) {
            return Err(InvariantViolation::MeterRange {
                meter,
                max: self.tuning.meter_max,
            });
        }
        if self.player.lane >= self.tuning.lane_count {
            return Err(InvariantViolation::LaneRange {
                lane: self.player.lane,
                lanes: self.tuning.lane_count,
            });
        }
        if self.phase == GamePhase::GameOver && meter != 0.0 {
            return Err(InvariantViolation::GameOverMeter(meter));
        }
        if let Some(item) = self.items.iter().find(|i| i.consumed) {
            return Err(InvariantViolation::ConsumedItem(item.id));
        }
        if !(self.speed > 0.0) {
            return Err(InvariantViolation::Speed(self.speed));
        }
        Ok(())
    }
}

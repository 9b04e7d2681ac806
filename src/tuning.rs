//! Game balance tuning
//!
//! Every number the simulation uses lives here. Loaded from JSON so runs can be
//! rebalanced without a rebuild; missing fields fall back to [`crate::consts`].

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Why a tuning file was rejected
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("failed to read tuning file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid tuning JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("lane_count must be at least 1")]
    NoLanes,
    #[error("{field} must be greater than zero (got {value})")]
    NotPositive { field: &'static str, value: f64 },
    #[error("{field} must not be negative (got {value})")]
    Negative { field: &'static str, value: f64 },
    #[error("good_chance must be within [0, 1] (got {0})")]
    Probability(f64),
    #[error("player_smoothing must be within (0, 1] (got {0})")]
    Smoothing(f32),
    #[error("initial_meter must be within (0, {max}] (got {value})")]
    InitialMeter { value: f32, max: f32 },
}

/// Balance constants consumed by every simulation component
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Playfield ===
    pub field_width: f32,
    pub field_height: f32,
    pub lane_count: u8,
    /// Distance of the player anchor above the bottom edge
    pub player_offset: f32,
    pub player_smoothing: f32,

    // === Pace ===
    pub initial_speed: f32,
    pub ramp_interval_ticks: u64,
    pub ramp_increment: f32,
    pub distance_divisor: f32,

    // === Balance meter ===
    pub meter_max: f32,
    pub initial_meter: f32,
    pub decay_per_tick: f32,
    pub good_meter_bonus: f32,
    pub good_score: u64,
    pub bad_meter_penalty: f32,

    // === Items ===
    pub spawn_interval_ticks: u64,
    pub good_chance: f64,
    pub item_spawn_y: f32,
    pub offscreen_margin: f32,
    pub collision_radius: f32,

    // === Mood ===
    pub happy_threshold: f32,
    pub good_mood_ticks: u32,
    pub bad_mood_ticks: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,
            lane_count: LANE_COUNT,
            player_offset: PLAYER_OFFSET,
            player_smoothing: PLAYER_SMOOTHING,

            initial_speed: INITIAL_SPEED,
            ramp_interval_ticks: RAMP_INTERVAL_TICKS,
            ramp_increment: RAMP_INCREMENT,
            distance_divisor: DISTANCE_DIVISOR,

            meter_max: METER_MAX,
            initial_meter: INITIAL_METER,
            decay_per_tick: DECAY_PER_TICK,
            good_meter_bonus: GOOD_METER_BONUS,
            good_score: GOOD_SCORE,
            bad_meter_penalty: BAD_METER_PENALTY,

            spawn_interval_ticks: SPAWN_INTERVAL_TICKS,
            good_chance: GOOD_CHANCE,
            item_spawn_y: ITEM_SPAWN_Y,
            offscreen_margin: OFFSCREEN_MARGIN,
            collision_radius: COLLISION_RADIUS,

            happy_threshold: HAPPY_THRESHOLD,
            good_mood_ticks: GOOD_MOOD_TICKS,
            bad_mood_ticks: BAD_MOOD_TICKS,
        }
    }
}

impl Tuning {
    /// Parse and validate tuning from a JSON document
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load and validate tuning from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning from {}", path.as_ref().display());
        Ok(tuning)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), TuningError> {
        if self.lane_count == 0 {
            return Err(TuningError::NoLanes);
        }

        let positive = [
            ("field_width", self.field_width),
            ("field_height", self.field_height),
            ("initial_speed", self.initial_speed),
            ("distance_divisor", self.distance_divisor),
            ("meter_max", self.meter_max),
            ("collision_radius", self.collision_radius),
        ];
        for (field, value) in positive {
            if !(value > 0.0) {
                return Err(TuningError::NotPositive {
                    field,
                    value: value as f64,
                });
            }
        }

        // Intervals are used as modulo divisors
        for (field, value) in [
            ("spawn_interval_ticks", self.spawn_interval_ticks),
            ("ramp_interval_ticks", self.ramp_interval_ticks),
        ] {
            if value == 0 {
                return Err(TuningError::NotPositive { field, value: 0.0 });
            }
        }

        let non_negative = [
            ("player_offset", self.player_offset),
            ("ramp_increment", self.ramp_increment),
            ("decay_per_tick", self.decay_per_tick),
            ("good_meter_bonus", self.good_meter_bonus),
            ("bad_meter_penalty", self.bad_meter_penalty),
            ("offscreen_margin", self.offscreen_margin),
        ];
        for (field, value) in non_negative {
            if !(value >= 0.0) {
                return Err(TuningError::Negative {
                    field,
                    value: value as f64,
                });
            }
        }

        if !(0.0..=1.0).contains(&self.good_chance) {
            return Err(TuningError::Probability(self.good_chance));
        }
        if !(self.player_smoothing > 0.0 && self.player_smoothing <= 1.0) {
            return Err(TuningError::Smoothing(self.player_smoothing));
        }
        if !(self.initial_meter > 0.0 && self.initial_meter <= self.meter_max) {
            return Err(TuningError::InitialMeter {
                value: self.initial_meter,
                max: self.meter_max,
            });
        }

        Ok(())
    }

    #[inline]
    pub fn lane_width(&self) -> f32 {
        self.field_width / self.lane_count as f32
    }

    /// Horizontal center of a lane
    #[inline]
    pub fn lane_center(&self, lane: u8) -> f32 {
        lane as f32 * self.lane_width() + self.lane_width() / 2.0
    }

    /// Fixed vertical anchor of the player
    #[inline]
    pub fn player_y(&self) -> f32 {
        self.field_height - self.player_offset
    }

    /// Middle lane (lane 1 with three lanes)
    #[inline]
    pub fn start_lane(&self) -> u8 {
        self.lane_count / 2
    }

    #[inline]
    pub fn last_lane(&self) -> u8 {
        self.lane_count.saturating_sub(1)
    }

    /// Items past this y are gone for good
    #[inline]
    pub fn despawn_y(&self) -> f32 {
        self.field_height + self.offscreen_margin
    }
}

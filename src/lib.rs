//! Balance Dash - a three-lane arcade runner
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, game state)
//! - `tuning`: Data-driven game balance
//! - `runner`: Headless autopilot runs (CLI demo, soak tests)
//! - `web`: Browser binding for the presentation layer (wasm32 only)

pub mod runner;
pub mod sim;
pub mod tuning;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use runner::{RunError, RunSummary, run_autopilot};
pub use tuning::{Tuning, TuningError};

/// Game configuration constants (defaults for [`Tuning`])
pub mod consts {
    /// Nominal simulation rate; one tick per display frame
    pub const TICKS_PER_SECOND: u32 = 60;

    /// Logical playfield, portrait phone proportions
    pub const FIELD_WIDTH: f32 = 480.0;
    pub const FIELD_HEIGHT: f32 = 800.0;
    pub const LANE_COUNT: u8 = 3;
    /// Player anchor sits this far above the bottom edge
    pub const PLAYER_OFFSET: f32 = 150.0;
    /// Fraction of the remaining lane-change distance covered per tick
    pub const PLAYER_SMOOTHING: f32 = 0.2;

    /// Speed in units per tick
    pub const INITIAL_SPEED: f32 = 6.0;
    pub const RAMP_INTERVAL_TICKS: u64 = 600;
    pub const RAMP_INCREMENT: f32 = 0.5;
    /// Distance gained per tick is speed / this
    pub const DISTANCE_DIVISOR: f32 = 20.0;

    /// Balance meter
    pub const METER_MAX: f32 = 100.0;
    pub const INITIAL_METER: f32 = 50.0;
    pub const DECAY_PER_TICK: f32 = 0.05;
    pub const GOOD_METER_BONUS: f32 = 10.0;
    pub const GOOD_SCORE: u64 = 10;
    pub const BAD_METER_PENALTY: f32 = 20.0;

    /// Items
    pub const SPAWN_INTERVAL_TICKS: u64 = 60;
    pub const GOOD_CHANCE: f64 = 0.6;
    pub const ITEM_SPAWN_Y: f32 = -50.0;
    pub const OFFSCREEN_MARGIN: f32 = 50.0;
    pub const COLLISION_RADIUS: f32 = 50.0;

    /// Mood
    pub const HAPPY_THRESHOLD: f32 = 30.0;
    pub const GOOD_MOOD_TICKS: u32 = 30;
    pub const BAD_MOOD_TICKS: u32 = 40;

    /// Road stripe dash period (cosmetic scroll)
    pub const SCROLL_PERIOD: f32 = 40.0;
    /// Degrees of lean per unit of lane-change displacement
    pub const TILT_PER_UNIT: f32 = 0.05;
}

//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per frame, fixed order within a tick
//! - Seeded RNG only
//! - Stable iteration order (items in spawn order)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod input;
pub mod item;
pub mod player;
pub mod resources;
pub mod snapshot;
pub mod spawner;
pub mod state;
pub mod tick;

pub use collision::{resolve_item, within_reach};
pub use input::Command;
pub use item::{Item, ItemIcon, ItemKind};
pub use player::{Mood, Player};
pub use resources::{MeterBand, Resources};
pub use snapshot::{ItemView, PlayerView, Snapshot};
pub use state::{GameEvent, GamePhase, GameState, InvariantViolation};
pub use tick::tick;

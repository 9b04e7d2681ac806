//! Input commands
//!
//! The input layer never touches state directly; keys and taps become
//! [`Command`]s applied between ticks.

use serde::{Deserialize, Serialize};

use super::state::GameState;

/// A discrete player intent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    MoveLeft,
    MoveRight,
    /// Start or restart a run
    Start,
}

impl Command {
    /// Keyboard mapping (`KeyboardEvent.key` names)
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" | "a" => Some(Command::MoveLeft),
            "ArrowRight" | "d" => Some(Command::MoveRight),
            _ => None,
        }
    }
}

impl GameState {
    /// Apply a command. Returns true if it changed anything.
    pub fn apply(&mut self, command: Command) -> bool {
        match command {
            Command::MoveLeft => self.move_left(),
            Command::MoveRight => self.move_right(),
            Command::Start => {
                self.start();
                true
            }
        }
    }

    /// Touch/click: left half of the field steps left, right half steps right
    pub fn tap(&mut self, x: f32) -> bool {
        if x < self.tuning.field_width / 2.0 {
            self.move_left()
        } else {
            self.move_right()
        }
    }
}

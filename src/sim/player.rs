//! The lane-hopping player character

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::TILT_PER_UNIT;
use crate::tuning::Tuning;

/// Player mood (cosmetic). Collisions override it for a while.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mood {
    Happy,
    Neutral,
    Sad,
    Sick,
}

impl Mood {
    /// HUD glyph
    pub fn icon(&self) -> &'static str {
        match self {
            Mood::Happy => "😊",
            Mood::Neutral => "🙂",
            Mood::Sad => "😟",
            Mood::Sick => "🤢",
        }
    }

    /// Frowning face variants
    pub fn is_unwell(&self) -> bool {
        matches!(self, Mood::Sad | Mood::Sick)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Current lane, `0..lane_count`
    pub lane: u8,
    /// Smoothed horizontal position
    pub x: f32,
    /// Center of the current lane (recomputed each update)
    pub target_x: f32,
    /// Fixed vertical anchor
    pub y: f32,
    pub mood: Mood,
    /// Ticks left on a mood override
    pub mood_timer: u32,
}

impl Player {
    /// Player standing still in the middle lane
    pub fn new(tuning: &Tuning) -> Self {
        let lane = tuning.start_lane();
        let x = tuning.lane_center(lane);
        Self {
            lane,
            x,
            target_x: x,
            y: tuning.player_y(),
            mood: Mood::Happy,
            mood_timer: 0,
        }
    }

    /// Glide toward the lane center and settle the mood
    pub fn update(&mut self, meter: f32, tuning: &Tuning) {
        self.target_x = tuning.lane_center(self.lane);
        self.x += (self.target_x - self.x) * tuning.player_smoothing;

        if self.mood_timer > 0 {
            self.mood_timer -= 1;
        } else {
            self.mood = if meter > tuning.happy_threshold {
                Mood::Happy
            } else {
                Mood::Neutral
            };
        }
    }

    /// Returns true if the lane changed
    pub fn move_left(&mut self) -> bool {
        if self.lane > 0 {
            self.lane -= 1;
            true
        } else {
            false
        }
    }

    /// Returns true if the lane changed
    pub fn move_right(&mut self, tuning: &Tuning) -> bool {
        if self.lane < tuning.last_lane() {
            self.lane += 1;
            true
        } else {
            false
        }
    }

    /// Hold a mood for a number of ticks
    pub fn set_mood_override(&mut self, mood: Mood, ticks: u32) {
        self.mood = mood;
        self.mood_timer = ticks;
    }

    /// Hit-test point: the lane target, not the smoothed position
    #[inline]
    pub fn anchor(&self) -> Vec2 {
        Vec2::new(self.target_x, self.y)
    }

    /// Signed lag behind the lane target
    #[inline]
    pub fn displacement(&self) -> f32 {
        self.x - self.target_x
    }

    /// Lean angle in degrees for drawing
    #[inline]
    pub fn tilt_degrees(&self) -> f32 {
        self.displacement() * TILT_PER_UNIT
    }
}

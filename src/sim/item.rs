//! Falling food items

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// Whether an item helps or hurts the balance meter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemKind {
    Good,
    Bad,
}

/// Cosmetic sub-type; no effect on gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemIcon {
    Salad,
    Water,
    Apple,
    Avocado,
    Donut,
    Soda,
    Fries,
    Lollipop,
}

const GOOD_ICONS: [ItemIcon; 4] = [
    ItemIcon::Salad,
    ItemIcon::Water,
    ItemIcon::Apple,
    ItemIcon::Avocado,
];
const BAD_ICONS: [ItemIcon; 4] = [
    ItemIcon::Donut,
    ItemIcon::Soda,
    ItemIcon::Fries,
    ItemIcon::Lollipop,
];

impl ItemIcon {
    /// Uniform pick among the kind's icons
    pub fn random(kind: ItemKind, rng: &mut impl Rng) -> Self {
        let icons = match kind {
            ItemKind::Good => &GOOD_ICONS,
            ItemKind::Bad => &BAD_ICONS,
        };
        icons[rng.random_range(0..icons.len())]
    }

    #[cfg(test)]
    fn kind(&self) -> ItemKind {
        if GOOD_ICONS.contains(self) {
            ItemKind::Good
        } else {
            ItemKind::Bad
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            ItemIcon::Salad => "🥗",
            ItemIcon::Water => "💧",
            ItemIcon::Apple => "🍎",
            ItemIcon::Avocado => "🥑",
            ItemIcon::Donut => "🍩",
            ItemIcon::Soda => "🥤",
            ItemIcon::Fries => "🍟",
            ItemIcon::Lollipop => "🍭",
        }
    }
}

/// An item entity falling down one lane
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    pub id: u32,
    pub lane: u8,
    pub pos: Vec2,
    pub kind: ItemKind,
    pub icon: ItemIcon,
    /// Collided with the player; removed at the end of the tick
    pub consumed: bool,
    /// Fell past the bottom edge; removed at the end of the tick
    pub expired: bool,
}

impl Item {
    /// Item at a given position (tests and scripted waves)
    pub fn new(id: u32, lane: u8, kind: ItemKind, icon: ItemIcon, pos: Vec2) -> Self {
        Self {
            id,
            lane,
            pos,
            kind,
            icon,
            consumed: false,
            expired: false,
        }
    }

    /// Random item just above the top of a random lane
    pub fn spawn(id: u32, rng: &mut impl Rng, tuning: &Tuning) -> Self {
        let lane = rng.random_range(0..tuning.lane_count.max(1));
        let kind = if rng.random_bool(tuning.good_chance) {
            ItemKind::Good
        } else {
            ItemKind::Bad
        };
        let icon = ItemIcon::random(kind, rng);
        let pos = Vec2::new(tuning.lane_center(lane), tuning.item_spawn_y);
        Self::new(id, lane, kind, icon, pos)
    }

    /// Fall by the current speed
    pub fn advance(&mut self, speed: f32, tuning: &Tuning) {
        self.pos.y += speed;
        if self.pos.y > tuning.despawn_y() {
            self.expired = true;
        }
    }

    /// Still able to collide
    #[inline]
    pub fn is_live(&self) -> bool {
        !self.consumed && !self.expired
    }
}

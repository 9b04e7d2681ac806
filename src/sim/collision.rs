//! Player/item collision and its effects
//!
//! Hit-testing is lane based: items are measured against the player's lane
//! target, so a hit registers the moment the player commits to a lane even
//! while the sprite is still gliding.

use glam::Vec2;

use super::item::{Item, ItemKind};
use super::player::{Mood, Player};
use super::resources::Resources;
use super::state::GameEvent;
use crate::tuning::Tuning;

/// Strict proximity test between an item and the player anchor
#[inline]
pub fn within_reach(item_pos: Vec2, anchor: Vec2, radius: f32) -> bool {
    item_pos.distance(anchor) < radius
}

/// Check a live item against the player. On a hit the item is marked
/// consumed and its effect applied; the resulting event is returned.
pub fn resolve_item(
    item: &mut Item,
    player: &mut Player,
    resources: &mut Resources,
    tuning: &Tuning,
) -> Option<GameEvent> {
    if !item.is_live() || !within_reach(item.pos, player.anchor(), tuning.collision_radius) {
        return None;
    }

    item.consumed = true;
    let event = match item.kind {
        ItemKind::Good => {
            resources.apply_good_hit(tuning);
            player.set_mood_override(Mood::Happy, tuning.good_mood_ticks);
            GameEvent::GoodHit {
                id: item.id,
                lane: item.lane,
            }
        }
        ItemKind::Bad => {
            resources.apply_bad_hit(tuning);
            player.set_mood_override(Mood::Sick, tuning.bad_mood_ticks);
            GameEvent::BadHit {
                id: item.id,
                lane: item.lane,
            }
        }
    };
    Some(event)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::item::ItemIcon;

    fn setup() -> (Tuning, Player, Resources) {
        let tuning = Tuning::default();
        let player = Player::new(&tuning);
        let resources = Resources::new(&tuning);
        (tuning, player, resources)
    }

    #[test]
    fn test_within_reach_is_strict() {
        let anchor = Vec2::new(240.0, 650.0);
        assert!(within_reach(Vec2::new(240.0, 601.0), anchor, 50.0));
        assert!(!within_reach(Vec2::new(240.0, 600.0), anchor, 50.0));
        // Diagonal: 30-40-50 triangle sits exactly on the boundary
        assert!(!within_reach(Vec2::new(270.0, 610.0), anchor, 50.0));
        assert!(within_reach(Vec2::new(270.0, 611.0), anchor, 50.0));
    }

    #[test]
    fn test_good_hit() {
        let (tuning, mut player, mut res) = setup();
        let mut item = Item::new(4, 1, ItemKind::Good, ItemIcon::Salad, player.anchor());
        let event = resolve_item(&mut item, &mut player, &mut res, &tuning);
        assert_eq!(event, Some(GameEvent::GoodHit { id: 4, lane: 1 }));
        assert!(item.consumed);
        assert_eq!(res.score, 10);
        assert_eq!(res.meter, 60.0);
        assert_eq!(player.mood, Mood::Happy);
        assert_eq!(player.mood_timer, 30);

        // Consumed items never hit twice
        assert_eq!(resolve_item(&mut item, &mut player, &mut res, &tuning), None);
        assert_eq!(res.score, 10);
    }

    #[test]
    fn test_bad_hit() {
        let (tuning, mut player, mut res) = setup();
        let mut item = Item::new(2, 1, ItemKind::Bad, ItemIcon::Donut, player.anchor());
        let event = resolve_item(&mut item, &mut player, &mut res, &tuning);
        assert_eq!(event, Some(GameEvent::BadHit { id: 2, lane: 1 }));
        assert_eq!(res.meter, 30.0);
        assert_eq!(res.score, 0);
        assert_eq!(player.mood, Mood::Sick);
        assert_eq!(player.mood_timer, 40);
    }

    #[test]
    fn test_uses_lane_target_not_glide_position() {
        let (tuning, mut player, mut res) = setup();
        // Committed to lane 2 but still drawn near lane 1
        player.lane = 2;
        player.target_x = tuning.lane_center(2);
        player.x = tuning.lane_center(1);

        let mut in_old_lane =
            Item::new(1, 1, ItemKind::Bad, ItemIcon::Soda, Vec2::new(player.x, player.y));
        assert_eq!(resolve_item(&mut in_old_lane, &mut player, &mut res, &tuning), None);

        let mut in_new_lane =
            Item::new(2, 2, ItemKind::Good, ItemIcon::Apple, Vec2::new(player.target_x, player.y));
        assert!(resolve_item(&mut in_new_lane, &mut player, &mut res, &tuning).is_some());
    }

    #[test]
    fn test_expired_items_ignored() {
        let (tuning, mut player, mut res) = setup();
        let mut item = Item::new(1, 1, ItemKind::Good, ItemIcon::Water, player.anchor());
        item.expired = true;
        assert_eq!(resolve_item(&mut item, &mut player, &mut res, &tuning), None);
        assert!(!item.consumed);
    }
}

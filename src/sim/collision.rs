//! Axis-aligned bounding boxes
//!
//! Collision in this game is plain AABB overlap between the player's
//! square and each hurdle's rectangle. The test is strict: boxes that
//! merely share an edge do not intersect.

use glam::Vec2;

use super::state::{Hurdle, Player};

/// An axis-aligned box, y axis pointing down
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Top-left corner
    pub min: Vec2,
    /// Bottom-right corner
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Build from a top-left corner and a size
    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self {
            min: pos,
            max: pos + size,
        }
    }

    /// Strict overlap test
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }
}

/// Player vs hurdle overlap
pub fn player_hits_hurdle(player: &Player, hurdle: &Hurdle) -> bool {
    player.bounds().intersects(&hurdle.bounds())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::state::HurdleKind;
    use proptest::prelude::*;

    #[test]
    fn test_overlapping_boxes_intersect() {
        let a = Aabb::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        let b = Aabb::new(Vec2::new(5.0, 5.0), Vec2::new(15.0, 15.0));
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn test_disjoint_boxes_do_not_intersect() {
        let a = Aabb::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        let b = Aabb::new(Vec2::new(20.0, 0.0), Vec2::new(30.0, 10.0));
        assert!(!a.intersects(&b));

        // Overlap on x alone is not enough
        let c = Aabb::new(Vec2::new(5.0, 20.0), Vec2::new(15.0, 30.0));
        assert!(!a.intersects(&c));
    }

    #[test]
    fn test_shared_edge_is_not_a_hit() {
        let a = Aabb::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        let b = Aabb::new(Vec2::new(10.0, 0.0), Vec2::new(20.0, 10.0));
        assert!(!a.intersects(&b));
        assert!(!b.intersects(&a));
    }

    #[test]
    fn test_hurdle_at_player_column_hits_grounded_player() {
        let player = Player::new();
        let hurdle = Hurdle::new(HurdleKind::Low, PLAYER_X + 10.0);
        assert!(player_hits_hurdle(&player, &hurdle));
    }

    #[test]
    fn test_distant_hurdle_misses() {
        let player = Player::new();
        let hurdle = Hurdle::new(HurdleKind::Low, ARENA_WIDTH);
        assert!(!player_hits_hurdle(&player, &hurdle));
    }

    #[test]
    fn test_airborne_player_clears_low_hurdle() {
        let mut player = Player::new();
        // Partway up a jump: bottom edge at 270, above the low hurdle's
        // top (290) but still inside the tall hurdle's span (260..350)
        player.pos.y = 230.0;
        let hurdle = Hurdle::new(HurdleKind::Low, PLAYER_X);
        assert!(!player_hits_hurdle(&player, &hurdle));

        let tall = Hurdle::new(HurdleKind::Tall, PLAYER_X);
        assert!(player_hits_hurdle(&player, &tall));
    }

    proptest! {
        #[test]
        fn intersection_is_symmetric(
            ax in -100.0f32..100.0, ay in -100.0f32..100.0,
            aw in 0.1f32..50.0, ah in 0.1f32..50.0,
            bx in -100.0f32..100.0, by in -100.0f32..100.0,
            bw in 0.1f32..50.0, bh in 0.1f32..50.0,
        ) {
            let a = Aabb::from_pos_size(Vec2::new(ax, ay), Vec2::new(aw, ah));
            let b = Aabb::from_pos_size(Vec2::new(bx, by), Vec2::new(bw, bh));
            prop_assert_eq!(a.intersects(&b), b.intersects(&a));
        }

        #[test]
        fn box_shifted_past_its_width_never_intersects(
            x in -100.0f32..100.0, y in -100.0f32..100.0,
            w in 0.1f32..50.0, h in 0.1f32..50.0,
            gap in 0.0f32..100.0,
        ) {
            let a = Aabb::from_pos_size(Vec2::new(x, y), Vec2::new(w, h));
            let b = Aabb::from_pos_size(Vec2::new(x + w + gap, y), Vec2::new(w, h));
            prop_assert!(!a.intersects(&b));
        }
    }
}

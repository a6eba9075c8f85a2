//! Padded AABB collision detection
//!
//! Hitboxes are axis-aligned rectangles in world units (y-up, ground at 0).
//! Both boxes are shrunk inward by a forgiveness padding before the standard
//! separating-axis test, so near misses read as misses.

use glam::Vec2;

/// An axis-aligned bounding box: `min` is the bottom-left corner, `max` the
/// top-right.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Build from edge coordinates
    pub fn from_edges(left: f32, right: f32, bottom: f32, top: f32) -> Self {
        Self {
            min: Vec2::new(left, bottom),
            max: Vec2::new(right, top),
        }
    }

    /// Shrink every edge inward by `padding`
    pub fn shrink(&self, padding: f32) -> Self {
        Self {
            min: self.min + Vec2::splat(padding),
            max: self.max - Vec2::splat(padding),
        }
    }

    /// Strict overlap on both axes. Boxes that merely touch edges do not
    /// overlap.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }
}

/// Test the player hitbox against every obstacle hitbox, in the order given.
///
/// Returns on the first overlap found, so callers relying on "which obstacle
/// hit" semantics must pass obstacles in spawn order.
pub fn check_collision<'a>(
    player: &Aabb,
    obstacles: impl IntoIterator<Item = &'a Aabb>,
    padding: f32,
) -> bool {
    let padded_player = player.shrink(padding);
    for obstacle in obstacles {
        if padded_player.overlaps(&obstacle.shrink(padding)) {
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlapping_boxes_collide() {
        let player = Aabb::from_edges(100.0, 190.0, 0.0, 110.0);
        let obstacle = Aabb::from_edges(150.0, 270.0, 0.0, 80.0);
        assert!(check_collision(&player, [&obstacle], 0.0));
    }

    #[test]
    fn test_separated_boxes_miss() {
        let player = Aabb::from_edges(100.0, 190.0, 0.0, 110.0);
        let obstacle = Aabb::from_edges(400.0, 520.0, 0.0, 80.0);
        assert!(!check_collision(&player, [&obstacle], 0.0));
    }

    #[test]
    fn test_padding_forgives_shallow_overlap() {
        // 20 units of horizontal overlap, erased by 30 of padding per side
        let player = Aabb::from_edges(100.0, 190.0, 0.0, 110.0);
        let obstacle = Aabb::from_edges(170.0, 290.0, 0.0, 80.0);
        assert!(check_collision(&player, [&obstacle], 0.0));
        assert!(!check_collision(&player, [&obstacle], 30.0));
    }

    #[test]
    fn test_adjacent_edges_do_not_collide() {
        // player right edge exactly on obstacle left edge
        let player = Aabb::from_edges(100.0, 200.0, 0.0, 110.0);
        let obstacle = Aabb::from_edges(200.0, 320.0, 0.0, 80.0);
        assert!(!check_collision(&player, [&obstacle], 0.0));

        // adjacency after padding: player right 200-20 meets obstacle left 160+20
        let padded_adjacent = Aabb::from_edges(160.0, 280.0, 0.0, 80.0);
        assert!(!check_collision(&player, [&padded_adjacent], 20.0));
    }

    #[test]
    fn test_vertical_separation_misses() {
        // Player above the obstacle: overlapping in x, clear in y
        let player = Aabb::from_edges(100.0, 190.0, 120.0, 230.0);
        let obstacle = Aabb::from_edges(120.0, 240.0, 0.0, 80.0);
        assert!(!check_collision(&player, [&obstacle], 0.0));
    }

    #[test]
    fn test_first_overlap_wins() {
        let player = Aabb::from_edges(100.0, 190.0, 0.0, 110.0);
        let hit = Aabb::from_edges(120.0, 240.0, 0.0, 80.0);
        let far = Aabb::from_edges(900.0, 1020.0, 0.0, 80.0);
        assert!(check_collision(&player, [&far, &hit], 0.0));
        assert!(check_collision(&player, [&hit, &far], 0.0));
    }
}

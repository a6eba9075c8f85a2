//! Player vertical physics and multi-jump state
//!
//! The player only moves vertically; the world scrolls past. Position is the
//! offset above ground level (ground = 0), so the invariant `bottom >= 0`
//! holds after every advance.

use crate::consts::*;

/// Vertical position/velocity and the chained-jump counter
#[derive(Debug, Clone)]
pub struct Player {
    /// Height above ground in world units (0 = standing on ground)
    pub bottom: f32,
    /// Vertical velocity in world units per frame (positive = rising)
    pub velocity_y: f32,
    /// Jumps used since last ground contact (0..=MAX_JUMPS)
    pub jump_count: u32,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            bottom: 0.0,
            velocity_y: 0.0,
            jump_count: 0,
        }
    }
}

impl Player {
    pub fn new() -> Self {
        Self::default()
    }

    /// Back to standing on the ground (session start)
    pub fn reset(&mut self) {
        self.bottom = 0.0;
        self.velocity_y = 0.0;
        self.jump_count = 0;
    }

    /// Advance ballistic flight by `delta` frame-units.
    ///
    /// Ground contact clamps position and velocity to zero and re-arms the
    /// jump counter.
    pub fn advance(&mut self, delta: f32) {
        self.velocity_y += GRAVITY * delta;
        self.bottom += self.velocity_y * delta;

        if self.bottom <= 0.0 {
            self.bottom = 0.0;
            self.velocity_y = 0.0;
            self.jump_count = 0;
        }
    }

    /// Attempt a jump. Silently ignored once the chain limit is reached.
    ///
    /// The first jump of a chain is stronger than the follow-ups, which gives
    /// the double/triple jump a slightly weaker feel each time.
    pub fn jump(&mut self) {
        if self.jump_count >= MAX_JUMPS {
            return;
        }
        self.jump_count += 1;
        self.velocity_y = if self.jump_count == 1 {
            JUMP_FORCE_FIRST
        } else {
            JUMP_FORCE_LATER
        };
    }

    /// Whether the player is standing on the ground
    pub fn grounded(&self) -> bool {
        self.bottom == 0.0 && self.velocity_y == 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_jump_sets_first_force() {
        let mut player = Player::new();
        player.jump();
        assert_eq!(player.jump_count, 1);
        assert_eq!(player.velocity_y, JUMP_FORCE_FIRST);
    }

    #[test]
    fn test_later_jumps_are_weaker() {
        let mut player = Player::new();
        player.jump();
        player.jump();
        assert_eq!(player.velocity_y, JUMP_FORCE_LATER);
        player.jump();
        assert_eq!(player.jump_count, 3);
        assert_eq!(player.velocity_y, JUMP_FORCE_LATER);
    }

    #[test]
    fn test_fourth_jump_is_noop() {
        let mut player = Player::new();
        for _ in 0..3 {
            player.jump();
        }
        player.advance(1.0);
        let velocity_before = player.velocity_y;
        player.jump();
        assert_eq!(player.jump_count, 3);
        assert_eq!(player.velocity_y, velocity_before);
    }

    #[test]
    fn test_landing_rearms_jumps() {
        let mut player = Player::new();
        player.jump();
        // Full ballistic arc at unit deltas
        let mut ticks = 0;
        while !player.grounded() {
            player.advance(1.0);
            ticks += 1;
            assert!(ticks < 1000, "player never landed");
        }
        assert_eq!(player.jump_count, 0);
        assert_eq!(player.bottom, 0.0);
        assert_eq!(player.velocity_y, 0.0);
    }

    #[test]
    fn test_advance_while_grounded_is_stable() {
        let mut player = Player::new();
        player.advance(1.0);
        player.advance(2.5);
        assert!(player.grounded());
    }

    proptest! {
        /// bottom never goes negative, whatever the delta sequence
        #[test]
        fn prop_bottom_never_negative(deltas in proptest::collection::vec(0.0f32..4.0, 1..200)) {
            let mut player = Player::new();
            player.jump();
            for delta in deltas {
                player.advance(delta);
                prop_assert!(player.bottom >= 0.0);
            }
        }

        /// one jump followed by enough unit ticks always returns to ground
        #[test]
        fn prop_ballistic_flight_lands(extra_jumps in 0u32..4) {
            let mut player = Player::new();
            player.jump();
            for _ in 0..extra_jumps {
                player.jump();
            }
            for _ in 0..1000 {
                player.advance(1.0);
                if player.grounded() {
                    break;
                }
            }
            prop_assert!(player.grounded());
            prop_assert_eq!(player.jump_count, 0);
        }

        /// jump_count never exceeds the cap regardless of call frequency
        #[test]
        fn prop_jump_count_capped(calls in 1usize..20) {
            let mut player = Player::new();
            for _ in 0..calls {
                player.jump();
                prop_assert!(player.jump_count <= MAX_JUMPS);
            }
        }
    }
}

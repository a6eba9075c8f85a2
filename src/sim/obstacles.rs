//! Obstacle spawn/move/score/cull pipeline
//!
//! The field owns an ordered set of live obstacles. Each tick runs, in order:
//! spawn countdown, horizontal advance, scoring, and off-screen culling.
//! That ordering is load-bearing: scoring and culling must see post-movement
//! positions.

use rand::Rng;

use super::collision::Aabb;
use crate::consts::*;

/// Obstacle height class, chosen 50/50 at spawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeightClass {
    Low,
    High,
}

impl HeightClass {
    /// Logical hitbox height for this class
    pub fn hitbox_height(&self) -> f32 {
        match self {
            HeightClass::Low => OBSTACLE_LOW_HEIGHT,
            HeightClass::High => OBSTACLE_HIGH_HEIGHT,
        }
    }
}

/// A live obstacle
#[derive(Debug, Clone)]
pub struct Obstacle {
    /// Identity for visual-layer correlation (monotone per field)
    pub id: u32,
    /// Right-edge x position in world units, decreasing as the world scrolls
    pub x: f32,
    /// Logical width, independent of rendered size
    pub width: f32,
    pub height_class: HeightClass,
    /// Set exactly once when the obstacle passes the scoring boundary
    pub scored: bool,
}

impl Obstacle {
    /// Logical hitbox, sitting on the ground
    pub fn bounds(&self) -> Aabb {
        Aabb::from_edges(
            self.x - self.width,
            self.x,
            0.0,
            self.height_class.hitbox_height(),
        )
    }
}

/// Points awarded for clearing one obstacle
#[derive(Debug, Clone)]
pub struct ScoreAward {
    pub id: u32,
    pub points: u32,
    /// Obstacle position at the moment of scoring, for the floating indicator
    pub x: f32,
}

/// What happened during one field tick
#[derive(Debug, Clone, Default)]
pub struct FieldEvents {
    /// Id of the obstacle spawned this tick, if any
    pub spawned: Option<u32>,
    pub scored: Vec<ScoreAward>,
    /// Ids culled past the trailing edge; their visuals should be destroyed
    pub removed: Vec<u32>,
}

/// Ordered collection of live obstacles plus the spawn countdown
#[derive(Debug, Clone)]
pub struct ObstacleField {
    pub(crate) obstacles: Vec<Obstacle>,
    /// Frame-units until the next spawn; <= 0 means spawn now
    spawn_timer: f32,
    field_width: f32,
    next_id: u32,
}

impl ObstacleField {
    pub fn new(field_width: f32) -> Self {
        Self {
            obstacles: Vec::new(),
            spawn_timer: 0.0,
            field_width,
            next_id: 1,
        }
    }

    /// Clear all live obstacles and re-arm the spawn timer for a new session.
    /// Ids stay monotone across sessions so stale visuals can never collide
    /// with fresh ones.
    pub fn reset(&mut self) {
        self.obstacles.clear();
        self.spawn_timer = 0.0;
    }

    /// Live obstacles in spawn order
    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn field_width(&self) -> f32 {
        self.field_width
    }

    /// Track the window if the host resizes; affects future spawns only
    pub fn set_field_width(&mut self, width: f32) {
        self.field_width = width;
    }

    /// Advance the field by `delta` frame-units.
    pub fn tick<R: Rng>(&mut self, delta: f32, rng: &mut R) -> FieldEvents {
        let mut events = FieldEvents::default();

        // 1. Spawn countdown
        self.spawn_timer -= delta;
        if self.spawn_timer <= 0.0 {
            let height_class = if rng.random_bool(0.5) {
                HeightClass::High
            } else {
                HeightClass::Low
            };
            let id = self.next_id;
            self.next_id += 1;
            self.obstacles.push(Obstacle {
                id,
                x: self.field_width,
                width: OBSTACLE_WIDTH,
                height_class,
                scored: false,
            });
            self.spawn_timer = SPAWN_DELAY_MIN + rng.random_range(0.0..SPAWN_DELAY_RANGE);
            events.spawned = Some(id);
        }

        // 2. Advance every live obstacle
        for obstacle in &mut self.obstacles {
            obstacle.x -= OBSTACLE_SPEED * delta;
        }

        // 3. Score obstacles that crossed the player's column this tick
        for obstacle in &mut self.obstacles {
            if !obstacle.scored && obstacle.x < PLAYER_X {
                obstacle.scored = true;
                let points = match obstacle.height_class {
                    HeightClass::High => rng.random_range(HIGH_AWARD_MIN..=HIGH_AWARD_MAX),
                    HeightClass::Low => LOW_AWARD,
                };
                events.scored.push(ScoreAward {
                    id: obstacle.id,
                    points,
                    x: obstacle.x,
                });
            }
        }

        // 4. Cull obstacles fully past the trailing visual margin
        self.obstacles.retain(|obstacle| {
            if obstacle.x <= -OVERSHOOT_MARGIN {
                events.removed.push(obstacle.id);
                false
            } else {
                true
            }
        });

        events
    }
}

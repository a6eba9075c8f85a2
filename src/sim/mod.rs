//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Frame-normalized deltas from injected timestamps
//! - Seeded RNG only
//! - Stable iteration order (obstacles in spawn order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod obstacles;
pub mod player;
pub mod score;
pub mod session;
pub mod timestep;

pub use collision::{Aabb, check_collision};
pub use obstacles::{FieldEvents, HeightClass, Obstacle, ObstacleField, ScoreAward};
pub use player::Player;
pub use score::ScoreTracker;
pub use session::{GameEvent, GamePhase, GameSession};
pub use timestep::TimeStep;

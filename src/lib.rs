//! Hana Run - a single-screen endless runner
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, obstacles, collision, game state)
//! - `highscores`: Best-score persistence (LocalStorage on web)
//! - `tuning`: Data-driven game balance

pub mod highscores;
pub mod sim;
pub mod tuning;

pub use highscores::BestScore;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Reference frame duration in milliseconds. A delta of 1.0 means one
    /// frame at ~60 fps elapsed between timestamps.
    pub const BASELINE_FRAME_MS: f64 = 16.67;

    /// Gravity in frame-units (applied to vertical velocity each frame)
    pub const GRAVITY: f32 = -1.1;
    /// Vertical velocity granted by the first jump of a sequence
    pub const JUMP_FORCE_FIRST: f32 = 20.0;
    /// Vertical velocity for the second and third jumps (slightly weaker)
    pub const JUMP_FORCE_LATER: f32 = 18.0;
    /// Maximum chained jumps before the player must touch ground again
    pub const MAX_JUMPS: u32 = 3;

    /// Player hitbox position and extents in world units
    pub const PLAYER_X: f32 = 100.0;
    pub const PLAYER_WIDTH: f32 = 90.0;
    pub const PLAYER_HEIGHT: f32 = 110.0;

    /// Obstacle horizontal speed in world units per frame
    pub const OBSTACLE_SPEED: f32 = 6.0;
    /// Logical obstacle width (independent of rendered size)
    pub const OBSTACLE_WIDTH: f32 = 120.0;
    /// Obstacle hitbox heights per class
    pub const OBSTACLE_LOW_HEIGHT: f32 = 80.0;
    pub const OBSTACLE_HIGH_HEIGHT: f32 = 150.0;
    /// Obstacles are culled once they pass this far beyond the left edge
    pub const OVERSHOOT_MARGIN: f32 = 200.0;

    /// Spawn countdown range in frame-units: min + rand * range
    pub const SPAWN_DELAY_MIN: f32 = 120.0;
    pub const SPAWN_DELAY_RANGE: f32 = 80.0;

    /// Score awards per obstacle class
    pub const LOW_AWARD: u32 = 10;
    pub const HIGH_AWARD_MIN: u32 = 25;
    pub const HIGH_AWARD_MAX: u32 = 40;

    /// Default logical field width (overridden from the window at startup)
    pub const DEFAULT_FIELD_WIDTH: f32 = 960.0;
}

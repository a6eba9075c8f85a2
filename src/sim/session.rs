//! Game session orchestration and phase machine
//!
//! One `GameSession` owns the player, the obstacle field, the score tracker,
//! the timestep and the run RNG, and drives the per-tick update order:
//! player physics, then obstacle advancement, then collision. That order is
//! load-bearing — collision must see post-movement positions of both actors.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::collision::{Aabb, check_collision};
use super::obstacles::{HeightClass, ObstacleField};
use super::player::Player;
use super::score::ScoreTracker;
use super::timestep::TimeStep;
use crate::consts::*;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Start screen, waiting for input
    Menu,
    /// Active run
    Playing,
    /// Run ended; returns to Menu automatically after a fixed delay
    GameOver,
}

/// Events emitted by a tick, consumed by the render collaborator
#[derive(Debug, Clone)]
pub enum GameEvent {
    /// A new obstacle entered at the right edge; create its visual
    Spawned { id: u32, class: HeightClass },
    /// An obstacle was cleared; show a "+points" indicator near `x`
    Scored { id: u32, points: u32, x: f32 },
    /// An obstacle left the field; destroy its visual
    Removed { id: u32 },
    /// The run ended. `new_best` asks the storage collaborator to persist.
    GameOver { score: u32, new_best: bool },
    /// The post-game-over delay elapsed; show the start screen again
    BackToMenu,
}

/// The whole game: phase machine plus all simulation state
#[derive(Debug, Clone)]
pub struct GameSession {
    phase: GamePhase,
    player: Player,
    field: ObstacleField,
    tracker: ScoreTracker,
    timestep: TimeStep,
    rng: Pcg32,
    tuning: Tuning,
    /// Timestamp of the tick that ended the run (wall-clock ms)
    game_over_at: f64,
}

impl GameSession {
    /// `best` comes from the one-time persistence load at startup.
    pub fn new(seed: u64, best: u32, field_width: f32, tuning: Tuning) -> Self {
        Self {
            phase: GamePhase::Menu,
            player: Player::new(),
            field: ObstacleField::new(field_width),
            tracker: ScoreTracker::new(best),
            timestep: TimeStep::new(),
            rng: Pcg32::seed_from_u64(seed),
            tuning,
            game_over_at: 0.0,
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn field(&self) -> &ObstacleField {
        &self.field
    }

    pub fn score(&self) -> &ScoreTracker {
        &self.tracker
    }

    pub fn set_field_width(&mut self, width: f32) {
        self.field.set_field_width(width);
    }

    /// The player's logical hitbox at its current height
    pub fn player_bounds(&self) -> Aabb {
        Aabb::from_edges(
            PLAYER_X,
            PLAYER_X + PLAYER_WIDTH,
            self.player.bottom,
            self.player.bottom + PLAYER_HEIGHT,
        )
    }

    /// Menu → Playing. Resets the player, the field, the running score and
    /// the timestamp baseline. Ignored in any other phase: the game-over
    /// delay is not skippable.
    pub fn start(&mut self) {
        if self.phase != GamePhase::Menu {
            return;
        }
        self.player.reset();
        self.field.reset();
        self.tracker.reset();
        self.timestep.reset();
        self.phase = GamePhase::Playing;
        log::info!("run started (best {})", self.tracker.best());
    }

    /// Jump input. In Playing this jumps; in Menu it starts a run instead
    /// (input cross-wiring, so any mapped button doubles as "start").
    /// Ignored during GameOver.
    pub fn jump(&mut self) {
        match self.phase {
            GamePhase::Playing => self.player.jump(),
            GamePhase::Menu => self.start(),
            GamePhase::GameOver => {}
        }
    }

    /// Advance the session to the animation-frame timestamp `now_ms`.
    ///
    /// No-op in Menu. In GameOver only the wall-clock return-to-menu timer
    /// advances; the simulation stays frozen for the overlay.
    pub fn tick(&mut self, now_ms: f64) -> Vec<GameEvent> {
        match self.phase {
            GamePhase::Menu => Vec::new(),
            GamePhase::GameOver => {
                if now_ms - self.game_over_at >= self.tuning.game_over_delay_ms {
                    self.phase = GamePhase::Menu;
                    log::info!("back to menu");
                    vec![GameEvent::BackToMenu]
                } else {
                    Vec::new()
                }
            }
            GamePhase::Playing => self.tick_playing(now_ms),
        }
    }

    fn tick_playing(&mut self, now_ms: f64) -> Vec<GameEvent> {
        let delta = self.timestep.advance(now_ms, self.tuning.max_delta);
        let mut events = Vec::new();

        self.player.advance(delta);

        let field_events = self.field.tick(delta, &mut self.rng);
        if let Some(id) = field_events.spawned {
            // The spawned obstacle is still live, so the class lookup cannot miss
            if let Some(obstacle) = self.field.obstacles().iter().find(|o| o.id == id) {
                events.push(GameEvent::Spawned {
                    id,
                    class: obstacle.height_class,
                });
            }
        }
        for award in field_events.scored {
            self.tracker.award(award.points);
            events.push(GameEvent::Scored {
                id: award.id,
                points: award.points,
                x: award.x,
            });
        }
        for id in field_events.removed {
            events.push(GameEvent::Removed { id });
        }

        let boxes: Vec<Aabb> = self.field.obstacles().iter().map(|o| o.bounds()).collect();
        if check_collision(
            &self.player_bounds(),
            boxes.iter(),
            self.tuning.collision_padding,
        ) {
            let new_best = self.tracker.finalize_session();
            self.phase = GamePhase::GameOver;
            self.game_over_at = now_ms;
            log::info!(
                "game over: score {} (best {}{})",
                self.tracker.current(),
                self.tracker.best(),
                if new_best { ", new!" } else { "" }
            );
            events.push(GameEvent::GameOver {
                score: self.tracker.current(),
                new_best,
            });
        }

        events
    }
}

//! Game state and core simulation types
//!
//! Everything the frontend observes lives here. The state mutates only
//! through `tick::advance` and the guarded input methods below; inputs are
//! applied between ticks, never during one.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

use super::collision::Aabb;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the start trigger; no ticks are processed
    Idle,
    /// Active gameplay
    Running,
    /// Run ended by a collision
    GameOver,
}

/// Hurdle variants - the tall one takes a better-timed jump to clear
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HurdleKind {
    Low,
    Tall,
}

impl HurdleKind {
    /// Hurdle height in world units
    pub fn height(self) -> f32 {
        match self {
            HurdleKind::Low => HURDLE_HEIGHT,
            HurdleKind::Tall => HURDLE_HEIGHT * 1.5,
        }
    }
}

/// The player-controlled shape
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner of the bounding box; `pos.x` never changes
    pub pos: Vec2,
    /// Vertical velocity (positive = falling, y axis points down)
    pub vel_y: f32,
    /// Set from jump until landing; gravity only acts while this is set
    pub jumping: bool,
}

impl Player {
    pub fn new() -> Self {
        Self {
            pos: Vec2::new(PLAYER_X, PLAYER_FLOOR_Y),
            vel_y: 0.0,
            jumping: false,
        }
    }

    /// Bounding box for collision checks
    pub fn bounds(&self) -> Aabb {
        Aabb::from_pos_size(self.pos, Vec2::splat(PLAYER_SIZE))
    }

    /// Back on the floor, at rest
    pub fn reset(&mut self) {
        self.pos.y = PLAYER_FLOOR_Y;
        self.vel_y = 0.0;
        self.jumping = false;
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

/// A hurdle entity
///
/// Hurdles are created once and recycled forever: after exiting the left
/// edge they re-enter from the right instead of being destroyed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Hurdle {
    pub kind: HurdleKind,
    /// Top-left corner; only `pos.x` moves. `pos.y` derives from the
    /// kind's height and the floor line at construction.
    pub pos: Vec2,
}

impl Hurdle {
    pub fn new(kind: HurdleKind, x: f32) -> Self {
        Self {
            kind,
            pos: Vec2::new(x, FLOOR_Y - kind.height()),
        }
    }

    /// Bounding box for collision checks
    pub fn bounds(&self) -> Aabb {
        Aabb::from_pos_size(self.pos, Vec2::new(HURDLE_WIDTH, self.kind.height()))
    }

    /// Fully past the left edge, ready to recycle
    pub fn off_screen(&self) -> bool {
        self.pos.x < -HURDLE_WIDTH
    }

    /// Re-enter from the right edge
    pub fn recycle(&mut self) {
        self.pos.x = ARENA_WIDTH;
    }
}

/// Complete game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Hurdles cleared this run
    pub score: u32,
    /// Horizontal hurdle speed, world units per tick. Never decreases
    /// within a run; frozen at 0 on game over.
    pub speed: f32,
    /// Current phase
    pub phase: GamePhase,
    /// Ticks processed this run
    pub time_ticks: u64,
    /// The player
    pub player: Player,
    /// Fixed pool of hurdles, recycled instead of respawned
    pub hurdles: Vec<Hurdle>,
}

impl GameState {
    /// Create a fresh game in the `Idle` phase
    pub fn new() -> Self {
        Self {
            score: 0,
            speed: START_SPEED,
            phase: GamePhase::Idle,
            time_ticks: 0,
            player: Player::new(),
            hurdles: initial_hurdles(),
        }
    }

    /// Begin the run. Only effective in `Idle`.
    pub fn start(&mut self) {
        if self.phase == GamePhase::Idle {
            self.phase = GamePhase::Running;
            log::debug!("run started");
        }
    }

    /// Launch the player upward. Ignored while airborne or after game over.
    pub fn jump(&mut self) {
        if self.player.jumping || self.phase == GamePhase::GameOver {
            return;
        }
        self.player.jumping = true;
        self.player.vel_y = JUMP_VELOCITY;
    }

    /// Reset everything and resume play. Only effective in `GameOver`.
    pub fn restart(&mut self) {
        if self.phase != GamePhase::GameOver {
            return;
        }
        self.score = 0;
        self.speed = START_SPEED;
        self.time_ticks = 0;
        self.player.reset();
        // Same pool, back at the staggered starting positions
        for (i, hurdle) in self.hurdles.iter_mut().enumerate() {
            hurdle.pos.x = ARENA_WIDTH + i as f32 * HURDLE_SPACING;
        }
        self.phase = GamePhase::Running;
        log::debug!("run restarted");
    }

    /// Status line for the frontend HUD
    pub fn status_text(&self) -> String {
        match self.phase {
            GamePhase::Idle => "Press Enter to start".to_string(),
            GamePhase::Running => format!("Score: {}", self.score),
            GamePhase::GameOver => {
                format!("Game Over! Final Score: {} (press R to restart)", self.score)
            }
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// The staggered starting layout: both hurdles off screen to the right
fn initial_hurdles() -> Vec<Hurdle> {
    vec![
        Hurdle::new(HurdleKind::Low, ARENA_WIDTH),
        Hurdle::new(HurdleKind::Tall, ARENA_WIDTH + HURDLE_SPACING),
    ]
}

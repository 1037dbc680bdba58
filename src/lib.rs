//! Hurdle Rush - a side-scrolling hurdle-jumping arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, game state)
//! - `highscores`: Session leaderboard
//!
//! The terminal frontend lives in the binary and owns every crossterm
//! object; the simulation is headless and reads nothing from the UI.

pub mod highscores;
pub mod sim;

pub use highscores::HighScores;

/// Game configuration constants
///
/// All positions are in world units on an 800x400 playfield, y axis
/// pointing down. Motion constants are per tick; the frontend drives one
/// tick per rendered frame (nominally 60 Hz).
pub mod consts {
    /// Playfield dimensions
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 400.0;

    /// Height of the ground strip at the bottom of the playfield
    pub const FLOOR_HEIGHT: f32 = 50.0;

    /// Player bounding box is a square of this size
    pub const PLAYER_SIZE: f32 = 40.0;
    /// Fixed horizontal position of the player's left edge
    pub const PLAYER_X: f32 = 100.0;

    /// Hurdle defaults
    pub const HURDLE_WIDTH: f32 = 20.0;
    pub const HURDLE_HEIGHT: f32 = 60.0;
    /// Gap between the staggered starting positions
    pub const HURDLE_SPACING: f32 = 300.0;

    /// Downward acceleration per tick while airborne
    pub const GRAVITY: f32 = 0.5;
    /// Velocity applied on jump (negative = up)
    pub const JUMP_VELOCITY: f32 = -10.0;

    /// Hurdle speed at the start of a run (world units per tick)
    pub const START_SPEED: f32 = 5.0;
    /// Speed gain applied by the difficulty ramp
    pub const SPEED_INCREMENT: f32 = 0.01;

    /// Y coordinate of the floor line
    pub const FLOOR_Y: f32 = ARENA_HEIGHT - FLOOR_HEIGHT;
    /// Resting y for the player's top edge (standing on the floor)
    pub const PLAYER_FLOOR_Y: f32 = FLOOR_Y - PLAYER_SIZE;
}

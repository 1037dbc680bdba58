//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Per-tick constants only (the frontend supplies the frame cadence)
//! - Stable iteration order (fixed two-hurdle pool)
//! - No rendering or terminal dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{Aabb, player_hits_hurdle};
pub use state::{GamePhase, GameState, Hurdle, HurdleKind, Player};
pub use tick::advance;

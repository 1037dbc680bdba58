//! Per-frame simulation update
//!
//! One `advance` call is one tick; the frontend's frame clock drives it
//! once per rendered frame. All motion constants are per tick.

use super::collision::player_hits_hurdle;
use super::state::{GamePhase, GameState};
use crate::consts::*;

/// Advance the game state by one tick
///
/// Update order is observable: player physics, then hurdle motion and
/// scoring, then collision, and only a surviving tick applies the
/// difficulty ramp.
pub fn advance(state: &mut GameState) {
    // No tick processing before start or after game over
    match state.phase {
        GamePhase::Idle | GamePhase::GameOver => return,
        GamePhase::Running => {}
    }

    state.time_ticks += 1;

    // Gravity only acts while airborne; a grounded player does not move
    if state.player.jumping {
        state.player.vel_y += GRAVITY;
        state.player.pos.y += state.player.vel_y;

        if state.player.pos.y >= PLAYER_FLOOR_Y {
            state.player.pos.y = PLAYER_FLOOR_Y;
            state.player.vel_y = 0.0;
            state.player.jumping = false;
        }
    }

    // Hurdles march left; one that fully exits re-enters from the right
    // edge and scores, independently of the other
    for hurdle in &mut state.hurdles {
        hurdle.pos.x -= state.speed;
        if hurdle.off_screen() {
            hurdle.recycle();
            state.score += 1;
            log::debug!("hurdle cleared, score {}", state.score);
        }
    }

    // Any overlap ends the run; hurdles freeze where they are and the
    // tick performs no further updates
    let hit = state
        .hurdles
        .iter()
        .any(|hurdle| player_hits_hurdle(&state.player, hurdle));
    if hit {
        state.phase = GamePhase::GameOver;
        state.speed = 0.0;
        log::debug!("collision, final score {}", state.score);
        return;
    }

    // Difficulty ramp. The check re-fires on every tick the score sits on
    // a multiple of 5, so the speed keeps climbing until the next hurdle
    // is cleared.
    if state.score > 0 && state.score % 5 == 0 {
        state.speed += SPEED_INCREMENT;
    }
}

//! Fixed timestep simulation tick
//!
//! Advances one constant-dt step: countdown, acceleration, friction,
//! speed clamp, integration, wall clamp, pickups, win check — in that
//! order. Pure function of state and input; safe to drive from tests
//! without any rendering surface.

use crate::consts::*;

use super::state::{GamePhase, GameState};

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    /// Start/restart trigger (restart key edge or pointer click).
    /// Ignored while a round is in progress.
    pub activate: bool,
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    if input.activate && state.phase != GamePhase::Playing {
        state.start_round();
        return;
    }
    if state.phase != GamePhase::Playing {
        return;
    }

    state.time_ticks += 1;

    // Countdown runs before movement and pickups: a step that would
    // both time out and win ends as a loss.
    state.time_left -= dt;
    if state.time_left <= 0.0 {
        state.time_left = 0.0;
        state.finish(GamePhase::GameOver);
        return;
    }

    let player = &mut state.player;

    // Opposing keys cancel by summation, not mutual exclusion
    if input.left {
        player.vel.x -= PLAYER_ACCEL * dt;
    }
    if input.right {
        player.vel.x += PLAYER_ACCEL * dt;
    }
    if input.up {
        player.vel.y -= PLAYER_ACCEL * dt;
    }
    if input.down {
        player.vel.y += PLAYER_ACCEL * dt;
    }

    // Per-step decay; tied to the 60 Hz step, never scaled by dt
    player.vel *= FRICTION;

    let speed = player.vel.length();
    if speed > PLAYER_MAX_SPEED {
        player.vel *= PLAYER_MAX_SPEED / speed;
    }

    player.pos += player.vel * dt;

    // Keep the bounding box inside the field; a clamped axis stops dead.
    // Dimensions are read fresh so host resizes apply immediately.
    let half = player.half_size();
    if player.pos.x < half {
        player.pos.x = half;
        player.vel.x = 0.0;
    } else if player.pos.x > state.field_width - half {
        player.pos.x = state.field_width - half;
        player.vel.x = 0.0;
    }
    if player.pos.y < half {
        player.pos.y = half;
        player.vel.y = 0.0;
    } else if player.pos.y > state.field_height - half {
        player.pos.y = state.field_height - half;
        player.vel.y = 0.0;
    }

    // Pickups: every orb inside reach this step counts
    let player_pos = state.player.pos;
    let reach = state.player.half_size();
    let mut picked = 0u32;
    for orb in state.collectibles.iter_mut().filter(|c| !c.collected) {
        if orb.pos.distance(player_pos) < orb.radius + reach {
            orb.collected = true;
            picked += 1;
        }
    }
    state.score += picked * PICKUP_BONUS;

    if state.orbs_remaining() == 0 {
        state.score += state.time_left.ceil() as u32 * TIME_BONUS_PER_SEC;
        state.finish(GamePhase::Won);
    }
}

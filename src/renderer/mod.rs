//! Render contract
//!
//! The renderer reads state and draws it, nothing more: it never
//! mutates the world and runs at most once per scheduler frame, no
//! matter how many simulation steps that frame paid out. [`Scene`]
//! borrows everything read-only, so the contract is enforced by the
//! type system rather than by convention.

use crate::sim::{Collectible, GamePhase, GameState, Player};

/// One frame's view of the world
#[derive(Debug, Clone, Copy)]
pub struct Scene<'a> {
    pub phase: GamePhase,
    pub player: &'a Player,
    pub collectibles: &'a [Collectible],
    pub score: u32,
    pub time_left: f32,
    pub high_score: u32,
}

impl<'a> Scene<'a> {
    /// Snapshot the renderable slice of the game state
    pub fn from_state(state: &'a GameState) -> Self {
        Self {
            phase: state.phase,
            player: &state.player,
            collectibles: &state.collectibles,
            score: state.score,
            time_left: state.time_left,
            high_score: state.high_score,
        }
    }

    /// Uncollected orbs left in the scene
    pub fn orbs_remaining(&self) -> usize {
        self.collectibles.iter().filter(|c| !c.collected).count()
    }
}

/// A drawing backend
pub trait Renderer {
    /// Draw one frame. Called at most once per scheduler frame.
    fn render(&mut self, scene: &Scene<'_>);
}

/// Debug renderer: logs phase transitions and a once-per-second HUD
/// line. Lets the binary and tests drive the full loop headlessly.
#[derive(Debug, Default)]
pub struct LogRenderer {
    last_phase: Option<GamePhase>,
    last_second: Option<u32>,
}

impl LogRenderer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Renderer for LogRenderer {
    fn render(&mut self, scene: &Scene<'_>) {
        if self.last_phase != Some(scene.phase) {
            self.last_phase = Some(scene.phase);
            self.last_second = None;
            log::info!(
                "phase {:?} | score {} | high {}",
                scene.phase,
                scene.score,
                scene.high_score
            );
        }

        if scene.phase != GamePhase::Playing {
            return;
        }
        let second = scene.time_left.ceil() as u32;
        if self.last_second != Some(second) {
            self.last_second = Some(second);
            log::debug!(
                "t={:>2}s score={} orbs_left={} player=({:.0},{:.0})",
                second,
                scene.score,
                scene.orbs_remaining(),
                scene.player.pos.x,
                scene.player.pos.y,
            );
        }
    }
}

//! Game state and core simulation types
//!
//! One mutable [`GameState`] owns everything a round needs. It is only
//! ever mutated inside `tick`; the renderer sees it through shared
//! references.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::spawn;
use crate::consts::*;

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Attract screen, waiting for the first activate
    Idle,
    /// Round in progress, countdown running
    Playing,
    /// All orbs collected before the timer ran out
    Won,
    /// Timer expired with orbs remaining
    GameOver,
}

impl GamePhase {
    /// Terminal states exit only through an explicit activate trigger
    pub fn is_terminal(self) -> bool {
        matches!(self, GamePhase::Won | GamePhase::GameOver)
    }
}

/// The player square
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Center of the square
    pub pos: Vec2,
    pub vel: Vec2,
    /// Edge length of the bounding square
    pub size: f32,
}

impl Player {
    /// Player centered on the field with zero velocity
    pub fn spawn(field_width: f32, field_height: f32) -> Self {
        Self {
            pos: Vec2::new(field_width / 2.0, field_height / 2.0),
            vel: Vec2::ZERO,
            size: PLAYER_SIZE,
        }
    }

    /// Half the edge length; boundary and pickup checks use this
    pub fn half_size(&self) -> f32 {
        self.size / 2.0
    }
}

/// A collectible orb
///
/// Orbs are never removed during a round, only flagged, so render and
/// iteration order stay stable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Collectible {
    pub pos: Vec2,
    pub radius: f32,
    pub collected: bool,
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Process seed for reproducibility
    pub seed: u64,
    /// Rounds started since process start; salts the placement RNG
    pub round: u32,
    /// Current phase
    pub phase: GamePhase,
    /// Score for the current round
    pub score: u32,
    /// Countdown in seconds; within [0, TIME_LIMIT], non-increasing
    /// while playing
    pub time_left: f32,
    /// Best final score of any round this process
    pub high_score: u32,
    /// Current drawing surface dimensions. Boundary clamps read these
    /// fresh every step, so the host may update them at any frame.
    pub field_width: f32,
    pub field_height: f32,
    /// Exactly one player per session, recreated on round reset
    pub player: Player,
    /// The round's orbs; fixed length once spawned
    pub collectibles: Vec<Collectible>,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl GameState {
    /// Create a session in the idle phase
    pub fn new(seed: u64, field_width: f32, field_height: f32) -> Self {
        Self {
            seed,
            round: 0,
            phase: GamePhase::Idle,
            score: 0,
            time_left: TIME_LIMIT,
            high_score: 0,
            field_width,
            field_height,
            player: Player::spawn(field_width, field_height),
            collectibles: Vec::new(),
            time_ticks: 0,
        }
    }

    /// `Idle | Won | GameOver -> Playing`
    ///
    /// One atomic reset: recenter the player with zero velocity, respawn
    /// the orbs, zero the score, rewind the countdown. Ignored while a
    /// round is in progress; the high score is left untouched.
    pub fn start_round(&mut self) {
        if self.phase == GamePhase::Playing {
            return;
        }
        self.round += 1;
        self.player = Player::spawn(self.field_width, self.field_height);
        self.collectibles = spawn::spawn_collectibles(
            self.round_seed(),
            self.player.pos,
            self.field_width,
            self.field_height,
        );
        self.score = 0;
        self.time_left = TIME_LIMIT;
        self.phase = GamePhase::Playing;
    }

    /// `Playing -> Won | GameOver`
    ///
    /// Folds the final score into the high score, exactly once per
    /// terminal transition.
    pub(crate) fn finish(&mut self, outcome: GamePhase) {
        debug_assert!(outcome.is_terminal());
        self.phase = outcome;
        self.high_score = self.high_score.max(self.score);
    }

    /// Per-round placement seed; same seed and round, same layout
    fn round_seed(&self) -> u64 {
        (self.round as u64)
            .wrapping_mul(0x9E37_79B9_7F4A_7C15)
            .wrapping_add(self.seed)
    }

    /// Uncollected orbs remaining this round
    pub fn orbs_remaining(&self) -> usize {
        self.collectibles.iter().filter(|c| !c.collected).count()
    }

    /// Orbs collected so far this round
    pub fn orbs_collected(&self) -> usize {
        self.collectibles.iter().filter(|c| c.collected).count()
    }

    /// Adopt new surface dimensions. Nothing moves here; the next
    /// step's boundary clamp picks them up.
    pub fn set_field_size(&mut self, width: f32, height: f32) {
        self.field_width = width;
        self.field_height = height;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_is_idle() {
        let state = GameState::new(1, 800.0, 600.0);
        assert_eq!(state.phase, GamePhase::Idle);
        assert_eq!(state.score, 0);
        assert_eq!(state.high_score, 0);
        assert!(state.collectibles.is_empty());
        assert_eq!(state.player.pos, Vec2::new(400.0, 300.0));
    }

    #[test]
    fn test_start_round_resets_session() {
        let mut state = GameState::new(1, 800.0, 600.0);
        state.start_round();

        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score, 0);
        assert_eq!(state.time_left, TIME_LIMIT);
        assert_eq!(state.collectibles.len(), COLLECTIBLE_COUNT);
        for orb in &state.collectibles {
            assert!(!orb.collected);
            assert!(orb.pos.distance(state.player.pos) > MIN_SPAWN_DIST);
        }
    }

    #[test]
    fn test_start_round_ignored_while_playing() {
        let mut state = GameState::new(1, 800.0, 600.0);
        state.start_round();
        state.score = 40;
        state.time_left = 3.0;
        let round = state.round;

        state.start_round();
        assert_eq!(state.round, round);
        assert_eq!(state.score, 40);
        assert_eq!(state.time_left, 3.0);
    }

    #[test]
    fn test_finish_keeps_best_score() {
        let mut state = GameState::new(1, 800.0, 600.0);
        state.start_round();
        state.score = 120;
        state.finish(GamePhase::Won);
        assert_eq!(state.high_score, 120);

        state.start_round();
        state.score = 50;
        state.finish(GamePhase::GameOver);
        assert_eq!(state.high_score, 120);
    }

    #[test]
    fn test_high_score_survives_reset() {
        let mut state = GameState::new(1, 800.0, 600.0);
        state.start_round();
        state.score = 90;
        state.finish(GamePhase::GameOver);

        state.start_round();
        assert_eq!(state.score, 0);
        assert_eq!(state.high_score, 90);
    }

    #[test]
    fn test_placement_deterministic_per_seed() {
        let mut a = GameState::new(777, 800.0, 600.0);
        let mut b = GameState::new(777, 800.0, 600.0);
        a.start_round();
        b.start_round();

        for (x, y) in a.collectibles.iter().zip(&b.collectibles) {
            assert_eq!(x.pos, y.pos);
            assert_eq!(x.radius, y.radius);
        }
    }

    #[test]
    fn test_set_field_size_only_updates_dims() {
        let mut state = GameState::new(1, 800.0, 600.0);
        state.start_round();
        let pos = state.player.pos;

        state.set_field_size(1024.0, 768.0);
        assert_eq!(state.field_width, 1024.0);
        assert_eq!(state.field_height, 768.0);
        assert_eq!(state.player.pos, pos);
    }
}

//! Orb Rush - a timed orb-collecting arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, pickups, game state)
//! - `timestep`: Fixed-timestep scheduler (frame time -> whole sim steps)
//! - `platform`: Clock and keyboard abstraction
//! - `renderer`: Read-only render contract

pub mod highscores;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod timestep;

pub use highscores::HighScores;
pub use settings::Settings;
pub use timestep::FixedTimestep;

/// Game configuration constants
pub mod consts {
    /// Simulation rate in steps per second
    pub const SIM_RATE: f32 = 60.0;
    /// Fixed simulation timestep
    pub const SIM_DT: f32 = 1.0 / SIM_RATE;
    /// Upper bound on a single frame's wall-clock delta. Anything longer
    /// (tab suspend, debugger stop) is treated as a 250 ms frame instead
    /// of being paid back as a burst of catch-up steps.
    pub const MAX_FRAME_TIME: f32 = 0.25;

    /// Default field dimensions (pixels)
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 600.0;

    /// Player square edge length
    pub const PLAYER_SIZE: f32 = 28.0;
    /// Acceleration per held direction key (units/s^2)
    pub const PLAYER_ACCEL: f32 = 900.0;
    /// Speed cap on the velocity magnitude (units/s)
    pub const PLAYER_MAX_SPEED: f32 = 320.0;
    /// Velocity damping factor, applied once per fixed step. Tuned
    /// against SIM_DT; this is per-step decay, not per-second.
    pub const FRICTION: f32 = 0.92;

    /// Orbs spawned per round
    pub const COLLECTIBLE_COUNT: usize = 5;
    /// Orb radius range (units)
    pub const ORB_MIN_RADIUS: f32 = 7.0;
    pub const ORB_MAX_RADIUS: f32 = 12.0;
    /// Minimum spawn distance between an orb and the player start
    pub const MIN_SPAWN_DIST: f32 = 100.0;

    /// Round duration in seconds
    pub const TIME_LIMIT: f32 = 15.0;
    /// Points per collected orb
    pub const PICKUP_BONUS: u32 = 10;
    /// Points per full second remaining on a win
    pub const TIME_BONUS_PER_SEC: u32 = 10;
}

//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (orbs are flagged, never removed)
//! - No rendering or platform dependencies

pub mod spawn;
pub mod state;
pub mod tick;

pub use spawn::spawn_collectibles;
pub use state::{Collectible, GamePhase, GameState, Player};
pub use tick::{TickInput, tick};

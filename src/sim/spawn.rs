//! Seeded collectible placement
//!
//! Orb layout must be reproducible from a seed, so placement goes
//! through a dedicated `Pcg32` rather than thread-local randomness.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::state::Collectible;
use crate::consts::*;

/// Spawn a round's worth of orbs inside the field.
///
/// Each orb keeps a clearance of at least [`MIN_SPAWN_DIST`] from the
/// player's start position; positions that land closer are re-rolled.
pub fn spawn_collectibles(
    seed: u64,
    player_pos: Vec2,
    field_width: f32,
    field_height: f32,
) -> Vec<Collectible> {
    let mut rng = Pcg32::seed_from_u64(seed);
    (0..COLLECTIBLE_COUNT)
        .map(|_| roll_orb(&mut rng, player_pos, field_width, field_height))
        .collect()
}

/// Roll one orb, re-rolling the position until it clears the player.
fn roll_orb(rng: &mut Pcg32, player_pos: Vec2, width: f32, height: f32) -> Collectible {
    let radius = rng.random_range(ORB_MIN_RADIUS..=ORB_MAX_RADIUS);
    loop {
        let pos = Vec2::new(
            rng.random_range(radius..width - radius),
            rng.random_range(radius..height - radius),
        );
        if pos.distance(player_pos) > MIN_SPAWN_DIST {
            return Collectible {
                pos,
                radius,
                collected: false,
            };
        }
    }
}

//! World state and generation
//!
//! A `World` is the complete simulation state: one player square and a wall
//! field that is fixed for the session. Generation is seeded, so a world is
//! fully reproducible from `(seed, tuning)`.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::geom::{polygons_intersect, square};
use crate::settings::Tuning;

/// A static obstacle: an open line segment between two endpoints
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Wall {
    pub start: Vec2,
    pub end: Vec2,
}

impl Wall {
    pub fn new(start: Vec2, end: Vec2) -> Self {
        Self { start, end }
    }

    /// Direction vector from start to end
    pub fn delta(&self) -> Vec2 {
        self.end - self.start
    }
}

/// The player: center of an axis-aligned square of tunable half-extent
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
}

impl Player {
    /// Square hitbox at the current position (derived, never stored)
    pub fn hitbox(&self, half_extent: f32) -> [Vec2; 4] {
        square(self.pos, half_extent)
    }
}

/// Complete simulation state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct World {
    /// Generation seed for reproducibility
    pub seed: u64,
    /// Tuning parameters the world was built with
    pub tuning: Tuning,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// The player square
    pub player: Player,
    /// Static wall field, immutable after generation
    pub walls: Vec<Wall>,
}

impl World {
    /// Build a world: player at the origin, walls rolled from the seed.
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        let player = Player { pos: Vec2::ZERO };
        let walls = generate_walls(seed, &tuning, player.pos);
        log::info!("World seed {seed}: {} walls", walls.len());
        Self {
            seed,
            tuning,
            time_ticks: 0,
            player,
            walls,
        }
    }
}

/// Roll the wall field from a seeded PCG32 stream.
///
/// Each candidate gets a uniform start in [-1, 1]² and a per-axis delta in
/// [-max_wall_length, +max_wall_length]. Candidates whose segment crosses
/// the spawn square are discarded outright (not rerolled), so the player
/// never starts wedged against a wall.
pub fn generate_walls(seed: u64, tuning: &Tuning, spawn: Vec2) -> Vec<Wall> {
    let mut rng = Pcg32::seed_from_u64(seed);
    let spawn_square = square(spawn, tuning.player_size);
    let len = tuning.max_wall_length;

    let mut walls = Vec::with_capacity(tuning.wall_count);
    for _ in 0..tuning.wall_count {
        let start = Vec2::new(rng.random_range(-1.0..1.0), rng.random_range(-1.0..1.0));
        let delta = Vec2::new(rng.random_range(-len..len), rng.random_range(-len..len));
        let wall = Wall::new(start, start + delta);
        if !polygons_intersect(&spawn_square, &[wall.start, wall.end]) {
            walls.push(wall);
        }
    }
    walls
}

//! Line-list generation from world state
//!
//! Builders emit endpoint pairs suitable for a line-list draw call; the host
//! owns the actual graphics device and pipeline. Positions are already in
//! the normalized [-1, 1] device range, so no transform is applied.

use glam::Vec2;

use super::vertex::{Vertex, colors};
use crate::sim::World;
use crate::sim::geom::square;

/// Two vertices for a single line segment
pub fn line(a: Vec2, b: Vec2, color: [f32; 4]) -> [Vertex; 2] {
    [
        Vertex::new(a.x, a.y, color),
        Vertex::new(b.x, b.y, color),
    ]
}

/// One line per wall
pub fn wall_lines(world: &World) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(world.walls.len() * 2);
    for wall in &world.walls {
        vertices.extend(line(wall.start, wall.end, colors::WALL));
    }
    vertices
}

/// The player square as a 4-edge outline
pub fn player_outline(world: &World) -> Vec<Vertex> {
    let corners = square(world.player.pos, world.tuning.player_size);
    let mut vertices = Vec::with_capacity(8);
    for i in 0..corners.len() {
        let next = corners[(i + 1) % corners.len()];
        vertices.extend(line(corners[i], next, colors::PLAYER));
    }
    vertices
}

//! Collision detection and slide response
//!
//! The tricky part of wallwalk: deciding whether a proposed move crosses a
//! wall, and if exactly one wall is in the way, sliding along it by removing
//! the velocity component in the direction of the wall's normal.

use glam::Vec2;

use super::geom::{polygons_intersect, square};
use super::state::Wall;

/// Walls whose segment crosses the player square centered at `center`.
pub fn hits<'w>(center: Vec2, half_extent: f32, walls: &'w [Wall]) -> Vec<&'w Wall> {
    let hitbox = square(center, half_extent);
    walls
        .iter()
        .filter(|wall| polygons_intersect(&hitbox, &[wall.start, wall.end]))
        .collect()
}

/// Resolve one frame of movement and return the accepted position.
///
/// - No wall in the way: take the full move.
/// - Exactly one wall: drop the velocity component along the wall's normal
///   and retry with the tangential remainder; if that still collides
///   (a second wall, or the same one at a sharp angle), stay put.
/// - Two or more walls: stay put. A combined corner slide is deliberately
///   not attempted.
///
/// Pure function over its inputs; the caller owns the position.
pub fn step(position: Vec2, velocity: Vec2, half_extent: f32, walls: &[Wall]) -> Vec2 {
    let proposed = position + velocity;
    let blocking = hits(proposed, half_extent, walls);

    match blocking.as_slice() {
        [] => proposed,
        [wall] => {
            // Either perpendicular works here: only the normal component of
            // velocity is removed, so which side the player approaches from
            // never matters.
            let d = wall.delta();
            let normal = Vec2::new(d.y, -d.x).normalize_or_zero();
            if normal == Vec2::ZERO {
                // Zero-length wall has no slide direction. It can't actually
                // pass the intersection test, but never let a non-finite
                // normal near the position.
                return position;
            }
            let slid = velocity - normal * velocity.dot(normal);
            let retry = position + slid;
            if hits(retry, half_extent, walls).is_empty() {
                retry
            } else {
                position
            }
        }
        _ => position,
    }
}

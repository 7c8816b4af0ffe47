//! Geometric primitives for segment-based collision
//!
//! Everything is exact parametric math over `glam::Vec2`; the 2D cross
//! product is `Vec2::perp_dot`.

use glam::Vec2;

/// Test whether two open segments properly cross.
///
/// Solves the parametric system with cross products: `t` locates the
/// intersection on segment `a`, `u` on segment `b`. Only strict interior
/// crossings count (`0 < t < 1 && 0 < u < 1`): touching at an endpoint or
/// grazing along a shared line is non-blocking. Parallel, collinear and
/// zero-length cases make the denominator zero; the non-finite `t`/`u`
/// then fail the strict range check, so no explicit branch is needed.
pub fn segments_intersect(a_start: Vec2, a_end: Vec2, b_start: Vec2, b_end: Vec2) -> bool {
    let a_delta = a_end - a_start;
    let b_delta = b_end - b_start;
    let w = b_start - a_start;
    let denom = a_delta.perp_dot(b_delta);
    let t = w.perp_dot(b_delta) / denom;
    let u = w.perp_dot(a_delta) / denom;
    0.0 < t && t < 1.0 && 0.0 < u && u < 1.0
}

/// Corners of an axis-aligned square, counter-clockwise from bottom-left.
pub fn square(center: Vec2, half_extent: f32) -> [Vec2; 4] {
    [
        center + Vec2::new(-half_extent, -half_extent),
        center + Vec2::new(half_extent, -half_extent),
        center + Vec2::new(half_extent, half_extent),
        center + Vec2::new(-half_extent, half_extent),
    ]
}

/// Cyclic edges of a polygon. A 2-vertex polygon has a single edge (both
/// cyclic traversals are the same segment reversed, so one suffices).
fn edges(poly: &[Vec2]) -> impl Iterator<Item = (Vec2, Vec2)> + '_ {
    let n = poly.len();
    let count = if n == 2 { 1 } else { n };
    (0..count).map(move |i| (poly[i], poly[(i + 1) % n]))
}

/// Test whether any edge of one polygon crosses any edge of the other.
///
/// Both polygons are treated as closed loops of edges; winding order is
/// irrelevant. Note this is an outline test: a polygon entirely inside
/// the other crosses no edges and does not intersect.
pub fn polygons_intersect(a: &[Vec2], b: &[Vec2]) -> bool {
    edges(a).any(|(a0, a1)| edges(b).any(|(b0, b1)| segments_intersect(a0, a1, b0, b1)))
}

//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only (world generation)
//! - One state mutation per tick, by the tick function alone
//! - No rendering or platform dependencies

pub mod collision;
pub mod geom;
pub mod input;
pub mod state;
pub mod tick;

pub use collision::{hits, step};
pub use geom::{polygons_intersect, segments_intersect, square};
pub use input::InputState;
pub use state::{Player, Wall, World};
pub use tick::tick;

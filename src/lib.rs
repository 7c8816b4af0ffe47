//! Wallwalk - a 2D wall-sliding movement sandbox
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, collision, world state)
//! - `renderer`: API-agnostic line-list vertex generation
//! - `settings`: Data-driven tuning parameters

pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::Tuning;
pub use sim::{InputState, Wall, World, tick};

/// Default tuning constants
///
/// Coordinates live in the normalized device range [-1, 1] on both axes;
/// speeds are per-frame displacements in that space.
pub mod consts {
    /// Number of wall candidates rolled at world generation
    pub const WALL_COUNT: usize = 30;
    /// Maximum per-axis extent of a generated wall segment
    pub const MAX_WALL_LENGTH: f32 = 0.4;
    /// Player square half-extent
    pub const PLAYER_SIZE: f32 = 0.1;
    /// Per-frame displacement while walking
    pub const SPEED_WALKING: f32 = 0.01;
    /// Per-frame displacement while sprinting
    pub const SPEED_RUNNING: f32 = 0.02;
}

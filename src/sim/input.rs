//! Input state and direction resolution
//!
//! The platform layer flips these flags on key events; the simulation reads
//! a frame-stable snapshot once per tick and only ever sees the resulting
//! velocity.

use glam::Vec2;

use crate::settings::Tuning;

/// Held directional keys for one frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    pub sprint: bool,
}

impl InputState {
    /// Unit direction from the held keys, or zero if they cancel out.
    ///
    /// Normalizing keeps diagonal movement at single-key speed;
    /// `normalize_or_zero` guards the zero-direction case.
    pub fn direction(&self) -> Vec2 {
        let mut dir = Vec2::ZERO;
        if self.left {
            dir += Vec2::new(-1.0, 0.0);
        }
        if self.right {
            dir += Vec2::new(1.0, 0.0);
        }
        if self.up {
            dir += Vec2::new(0.0, 1.0);
        }
        if self.down {
            dir += Vec2::new(0.0, -1.0);
        }
        dir.normalize_or_zero()
    }

    /// Per-frame velocity: unit direction scaled by walk or sprint speed.
    pub fn velocity(&self, tuning: &Tuning) -> Vec2 {
        let speed = if self.sprint {
            tuning.speed_running
        } else {
            tuning.speed_walking
        };
        self.direction() * speed
    }
}

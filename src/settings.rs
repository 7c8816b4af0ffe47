//! Data-driven tuning parameters
//!
//! Everything gameplay-visible that a host might want to adjust lives here,
//! so nothing in `sim` hardcodes a magic number.

use serde::{Deserialize, Serialize};

use crate::consts;

/// Movement and world-generation tuning
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Number of wall candidates rolled at world generation (candidates
    /// overlapping the spawn square are discarded, so the final count may
    /// be lower)
    pub wall_count: usize,
    /// Maximum per-axis extent of a generated wall segment
    pub max_wall_length: f32,
    /// Player square half-extent
    pub player_size: f32,
    /// Per-frame displacement while walking
    pub speed_walking: f32,
    /// Per-frame displacement while sprinting
    pub speed_running: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            wall_count: consts::WALL_COUNT,
            max_wall_length: consts::MAX_WALL_LENGTH,
            player_size: consts::PLAYER_SIZE,
            speed_walking: consts::SPEED_WALKING,
            speed_running: consts::SPEED_RUNNING,
        }
    }
}

impl Tuning {
    /// Parse tuning from JSON; missing fields fall back to defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize tuning to JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Parse tuning from JSON, falling back to defaults on error
    pub fn load_or_default(json: &str) -> Self {
        match Self::from_json(json) {
            Ok(tuning) => tuning,
            Err(e) => {
                log::warn!("Invalid tuning JSON ({e}), using defaults");
                Self::default()
            }
        }
    }
}

//! Gameplay configuration and presets
//!
//! One core, several tunings: the presets differ only in gap height and the
//! visible-obstacle cap, everything else is shared. A config can also be
//! loaded from JSON by the demo driver.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Named gameplay presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Preset {
    /// Wide 300-unit gap, up to 6 obstacles rendered
    #[default]
    Classic,
    /// Tighter 240-unit gap, up to 4 obstacles rendered
    Narrow,
}

impl Preset {
    pub fn as_str(&self) -> &'static str {
        match self {
            Preset::Classic => "Classic",
            Preset::Narrow => "Narrow",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "classic" => Some(Preset::Classic),
            "narrow" => Some(Preset::Narrow),
            _ => None,
        }
    }

    /// Vertical opening between the top and bottom barrier
    pub fn gap_height(&self) -> f32 {
        match self {
            Preset::Classic => 300.0,
            Preset::Narrow => 240.0,
        }
    }

    /// Maximum obstacles exposed to the renderer per frame
    pub fn max_visible(&self) -> usize {
        match self {
            Preset::Classic => 6,
            Preset::Narrow => 4,
        }
    }
}

/// Complete gameplay tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    // === Physics ===
    /// Downward acceleration per tick
    pub gravity: f32,
    /// Velocity override on flap (negative = upward)
    pub impulse: f32,
    /// Degrees of visual tilt per unit of velocity
    pub tilt_factor: f32,

    // === Obstacles ===
    /// Horizontal barrier width
    pub obstacle_width: f32,
    /// Leftward travel per tick
    pub obstacle_speed: f32,
    /// Ticks between spawns
    pub spawn_interval: u64,
    /// Vertical opening size
    pub gap_height: f32,
    /// Lowest allowed gap-top offset
    pub min_gap_top: f32,

    // === Collision ===
    /// AABB shrink applied to the avatar on all sides
    pub collision_padding: f32,

    // === Render-facing ===
    /// Cap on the visible-obstacle sequence
    pub max_visible: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::from_preset(Preset::Classic)
    }
}

impl GameConfig {
    /// Build a config from a named preset
    pub fn from_preset(preset: Preset) -> Self {
        Self {
            gravity: GRAVITY,
            impulse: IMPULSE,
            tilt_factor: TILT_FACTOR,
            obstacle_width: OBSTACLE_WIDTH,
            obstacle_speed: OBSTACLE_SPEED,
            spawn_interval: SPAWN_INTERVAL,
            gap_height: preset.gap_height(),
            min_gap_top: MIN_GAP_TOP,
            collision_padding: COLLISION_PADDING,
            max_visible: preset.max_visible(),
        }
    }

    /// Parse a config from JSON, logging and falling back to defaults on error
    pub fn from_json_or_default(json: &str) -> Self {
        match serde_json::from_str(json) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Invalid config JSON ({e}), using defaults");
                Self::default()
            }
        }
    }
}

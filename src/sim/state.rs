//! Game state and core simulation types

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    /// Waiting on the start screen
    Start,
    /// Active gameplay
    Playing,
    /// Round ended (collision or out of bounds)
    GameOver,
}

/// World dimensions, supplied by the rendering collaborator
///
/// Late-bound on purpose: re-read on every spawn and bounds computation so a
/// viewport resize takes effect immediately.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Y coordinate of the ground line (everything below is fatal)
    pub fn ground_line(&self) -> f32 {
        self.height * GROUND_FRACTION
    }
}

/// The player-controlled falling body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Avatar {
    /// Position of the top-left corner; x never changes
    pub pos: Vec2,
    /// Constant bounding-box size
    pub size: Vec2,
    /// Vertical velocity, units per tick
    pub velocity: f32,
    /// Visual tilt in degrees, derived from velocity and clamped
    pub tilt_deg: f32,
}

impl Avatar {
    pub fn new(y: f32) -> Self {
        Self {
            pos: Vec2::new(AVATAR_X, y),
            size: Vec2::new(AVATAR_WIDTH, AVATAR_HEIGHT),
            velocity: 0.0,
            tilt_deg: 0.0,
        }
    }

    /// Apply gravity and move; call exactly once per playing tick, after the
    /// queued impulse and before any bounds or collision check.
    pub fn integrate(&mut self, gravity: f32, tilt_factor: f32) {
        self.velocity += gravity;
        self.pos.y += self.velocity;
        self.tilt_deg = (self.velocity * tilt_factor).clamp(TILT_MIN_DEG, TILT_MAX_DEG);
    }

    /// Instantaneous upward kick: overwrites velocity, never adds to it
    pub fn apply_impulse(&mut self, impulse: f32) {
        self.velocity = impulse;
    }
}

/// A paired top/bottom barrier with a vertical gap between
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    /// Left edge; decreases every tick
    pub x: f32,
    /// Bottom of the top barrier
    pub gap_top: f32,
    /// Top of the bottom barrier (`gap_top + gap_height`)
    pub gap_bottom: f32,
    /// Set once the avatar has cleared this obstacle, so score is awarded once
    pub passed: bool,
}

impl Obstacle {
    pub fn new(x: f32, gap_top: f32, gap_height: f32) -> Self {
        Self {
            x,
            gap_top,
            gap_bottom: gap_top + gap_height,
            passed: false,
        }
    }

    /// Right edge given the configured barrier width
    pub fn right(&self, width: f32) -> f32 {
        self.x + width
    }
}

/// Signals emitted for rendering/UI/audio collaborators
///
/// Not part of core state: the session queues these and collaborators drain
/// them after each command or tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    /// A flap was accepted (audio cue)
    ImpulseApplied,
    /// The round ended; carries the final score for the overlay
    SessionEnded { score: u32 },
    /// A fresh round began (dismiss overlays)
    SessionReset,
}

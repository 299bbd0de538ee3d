//! Flappy Dash - a gravity-and-gaps arcade game core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, obstacles, collisions, session)
//! - `config`: Data-driven gameplay presets
//!
//! Rendering, UI wiring and audio are external collaborators: they read the
//! session snapshot accessors, forward input commands, and react to drained
//! [`sim::GameEvent`]s. The core never self-schedules; whatever drives the
//! display loop calls [`sim::Session::tick`] once per frame.

pub mod config;
pub mod sim;

pub use config::{GameConfig, Preset};
pub use sim::{GameEvent, Session, SessionPhase, Viewport};

/// Gameplay tuning constants
///
/// These are implicitly tuned to a ~60 Hz driver; the simulation applies them
/// per tick with no timestep correction.
pub mod consts {
    /// Downward acceleration per tick
    pub const GRAVITY: f32 = 0.6;
    /// Velocity override applied on a flap (negative = upward)
    pub const IMPULSE: f32 = -11.0;
    /// Velocity-to-tilt conversion factor (degrees per unit velocity)
    pub const TILT_FACTOR: f32 = 3.0;
    /// Tilt clamp range in degrees
    pub const TILT_MIN_DEG: f32 = -25.0;
    pub const TILT_MAX_DEG: f32 = 90.0;

    /// Avatar geometry - x never changes, only y
    pub const AVATAR_X: f32 = 100.0;
    pub const AVATAR_WIDTH: f32 = 40.0;
    pub const AVATAR_HEIGHT: f32 = 28.0;

    /// Obstacle geometry and motion
    pub const OBSTACLE_WIDTH: f32 = 80.0;
    pub const OBSTACLE_SPEED: f32 = 3.0;
    /// Ticks between spawns
    pub const SPAWN_INTERVAL: u64 = 120;
    /// Lowest allowed gap-top offset
    pub const MIN_GAP_TOP: f32 = 100.0;

    /// Fraction of viewport height occupied by sky (the rest is ground)
    pub const GROUND_FRACTION: f32 = 0.85;
    /// Fraction of viewport height reserved below the gap when spawning
    pub const SPAWN_BOTTOM_MARGIN: f32 = 0.25;

    /// AABB shrink applied to the avatar before collision tests
    pub const COLLISION_PADDING: f32 = 2.0;
    /// World units per reported distance unit
    pub const DISTANCE_DIVISOR: f32 = 10.0;
}

//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per driver callback, no self-scheduling
//! - Seeded RNG only
//! - Stable obstacle order (spawn order = screen order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod obstacles;
pub mod session;
pub mod state;

pub use collision::{collides, out_of_bounds};
pub use obstacles::ObstacleStream;
pub use session::Session;
pub use state::{Avatar, GameEvent, Obstacle, SessionPhase, Viewport};

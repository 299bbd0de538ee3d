//! Session state machine and per-tick simulation step
//!
//! The [`Session`] owns everything a round needs: the avatar, the obstacle
//! stream, score, frame counter, seeded RNG and the event queue. An external
//! driver calls [`Session::tick`] once per display refresh; the session never
//! schedules itself. Outside the `Playing` phase a tick is a no-op.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::config::GameConfig;
use super::collision::{collides, out_of_bounds};
use super::obstacles::ObstacleStream;
use super::state::{Avatar, GameEvent, Obstacle, SessionPhase, Viewport};

/// One game session: start → playing → game-over, restartable
#[derive(Debug, Clone)]
pub struct Session {
    config: GameConfig,
    viewport: Viewport,
    phase: SessionPhase,
    avatar: Avatar,
    stream: ObstacleStream,
    score: u32,
    frame: u64,
    /// Bumped on every entry into `Playing`; drivers tag their tick
    /// registration with this and stop once it goes stale, so at most one
    /// tick stream survives a restart.
    round: u64,
    /// Edge-triggered flap, consumed at the start of the next tick
    impulse_queued: bool,
    rng: Pcg32,
    events: Vec<GameEvent>,
}

impl Session {
    /// Create a session on the start screen
    pub fn new(config: GameConfig, viewport: Viewport, seed: u64) -> Self {
        let avatar = Avatar::new(viewport.height / 2.0);
        Self {
            config,
            viewport,
            phase: SessionPhase::Start,
            avatar,
            stream: ObstacleStream::new(),
            score: 0,
            frame: 0,
            round: 0,
            impulse_queued: false,
            rng: Pcg32::seed_from_u64(seed),
            events: Vec::new(),
        }
    }

    // === Commands ===

    /// Begin the first round; no-op unless on the start screen
    pub fn start(&mut self) {
        if self.phase == SessionPhase::Start {
            self.enter_playing();
        }
    }

    /// Begin a fresh round after a game over; no-op otherwise
    pub fn restart(&mut self) {
        if self.phase == SessionPhase::GameOver {
            self.enter_playing();
        }
    }

    /// Queue a flap for the next tick; no-op outside `Playing`.
    ///
    /// Presses never accumulate: the impulse overwrites velocity, and a
    /// second press before the next tick is absorbed by the same edge.
    pub fn apply_impulse(&mut self) {
        if self.phase == SessionPhase::Playing {
            self.impulse_queued = true;
            self.events.push(GameEvent::ImpulseApplied);
        }
    }

    /// Viewport dimensions are late-bound: re-read on every spawn and bounds
    /// computation, so a resize takes effect immediately
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.viewport = Viewport::new(width, height);
    }

    /// Reposition the avatar and wipe all round state
    pub fn reset(&mut self) {
        self.avatar = Avatar::new(self.viewport.height / 2.0);
        self.stream.clear();
        self.score = 0;
        self.frame = 0;
        self.impulse_queued = false;
    }

    /// Advance the simulation by one frame; no-op unless `Playing`
    pub fn tick(&mut self) {
        if self.phase != SessionPhase::Playing {
            return;
        }

        // Input is consumed before integration so a press always lands on
        // the very next tick, exactly once
        if std::mem::take(&mut self.impulse_queued) {
            self.avatar.apply_impulse(self.config.impulse);
        }
        self.avatar.integrate(self.config.gravity, self.config.tilt_factor);

        if out_of_bounds(&self.avatar, self.viewport) {
            self.end_round();
            return;
        }

        self.stream
            .maybe_spawn(self.frame, self.viewport, &self.config, &mut self.rng);
        self.stream.advance(self.config.obstacle_speed);

        let width = self.config.obstacle_width;
        let padding = self.config.collision_padding;
        let hit = self
            .stream
            .iter()
            .any(|o| collides(&self.avatar, o, width, padding));
        if hit {
            self.end_round();
            return;
        }

        self.score += self.stream.award_passes(self.avatar.pos.x, width);
        self.stream.reap(width);
        self.frame += 1;
    }

    // === Snapshot accessors ===

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn avatar(&self) -> &Avatar {
        &self.avatar
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn round(&self) -> u64 {
        self.round
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Distance to the next obstacle in abstract units, `None` when unknown
    pub fn distance_to_next(&self) -> Option<u32> {
        self.stream
            .distance_to_next(&self.avatar, self.config.obstacle_width)
    }

    /// Obstacles still ahead of the avatar, capped for rendering
    pub fn visible_obstacles(&self) -> impl Iterator<Item = &Obstacle> {
        self.stream.visible(
            self.avatar.pos.x,
            self.config.obstacle_width,
            self.config.max_visible,
        )
    }

    /// Drain queued events for rendering/UI/audio collaborators
    pub fn drain_events(&mut self) -> impl Iterator<Item = GameEvent> + '_ {
        self.events.drain(..)
    }

    // === Internals ===

    fn enter_playing(&mut self) {
        self.reset();
        self.phase = SessionPhase::Playing;
        self.round += 1;
        self.events.push(GameEvent::SessionReset);
        log::info!("round {} started", self.round);
    }

    fn end_round(&mut self) {
        self.phase = SessionPhase::GameOver;
        self.events.push(GameEvent::SessionEnded { score: self.score });
        log::info!(
            "round {} over: score {} after {} frames",
            self.round,
            self.score,
            self.frame
        );
    }
}

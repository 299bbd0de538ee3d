//! Obstacle stream: spawning, advancement, recycling
//!
//! Obstacles spawn just off the right edge at a fixed tick cadence, march
//! left at constant speed, and are reaped once fully past the left edge.
//! The vector stays in spawn order, which is also screen order.

use rand::Rng;

use crate::config::GameConfig;
use super::state::{Avatar, Obstacle, Viewport};

/// Ordered collection of live obstacles, leftmost first
#[derive(Debug, Clone, Default)]
pub struct ObstacleStream {
    obstacles: Vec<Obstacle>,
}

impl ObstacleStream {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.obstacles.clear();
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Obstacle> {
        self.obstacles.iter()
    }

    #[cfg(test)]
    pub(crate) fn push(&mut self, obstacle: Obstacle) {
        self.obstacles.push(obstacle);
    }

    /// Spawn one obstacle when the frame counter hits the spawn cadence.
    ///
    /// The gap-top offset is drawn uniformly from
    /// `[min_gap_top, height - gap_height - height * bottom_margin]`. A
    /// viewport too small for the configured gap would make that range
    /// degenerate, so the upper bound is clamped to the lower rather than
    /// letting the draw panic.
    pub fn maybe_spawn(
        &mut self,
        frame: u64,
        viewport: Viewport,
        config: &GameConfig,
        rng: &mut impl Rng,
    ) {
        if frame % config.spawn_interval != 0 {
            return;
        }

        let min_top = config.min_gap_top;
        let max_top = (viewport.height
            - config.gap_height
            - viewport.height * crate::consts::SPAWN_BOTTOM_MARGIN)
            .max(min_top);

        let gap_top = rng.random_range(min_top..=max_top);
        log::debug!("spawn obstacle at x={} gap_top={gap_top:.1}", viewport.width);
        self.obstacles
            .push(Obstacle::new(viewport.width, gap_top, config.gap_height));
    }

    /// Move every obstacle left by `speed`
    pub fn advance(&mut self, speed: f32) {
        for obstacle in &mut self.obstacles {
            obstacle.x -= speed;
        }
    }

    /// Drop obstacles fully past the left world boundary, preserving order
    pub fn reap(&mut self, width: f32) {
        let before = self.obstacles.len();
        self.obstacles.retain(|o| o.right(width) >= 0.0);
        let reaped = before - self.obstacles.len();
        if reaped > 0 {
            log::debug!("reaped {reaped} off-screen obstacle(s)");
        }
    }

    /// Mark newly-cleared obstacles as passed and return how many were new.
    ///
    /// Idempotent: the `passed` flag guarantees each obstacle scores once.
    pub fn award_passes(&mut self, avatar_x: f32, width: f32) -> u32 {
        let mut newly_passed = 0;
        for obstacle in &mut self.obstacles {
            if !obstacle.passed && obstacle.right(width) < avatar_x {
                obstacle.passed = true;
                newly_passed += 1;
            }
        }
        newly_passed
    }

    /// Abstract distance to the first obstacle still ahead of the avatar,
    /// `None` when the stream holds no such obstacle
    pub fn distance_to_next(&self, avatar: &Avatar, width: f32) -> Option<u32> {
        self.obstacles
            .iter()
            .find(|o| o.right(width) > avatar.pos.x)
            .map(|o| {
                let units = (o.x - avatar.pos.x - avatar.size.x) / crate::consts::DISTANCE_DIVISOR;
                units.floor().max(0.0) as u32
            })
    }

    /// At most `max_count` obstacles still ahead of `avatar_x`, stream order.
    ///
    /// Rendering concern only: lazy, read-only, restartable per call.
    pub fn visible(
        &self,
        avatar_x: f32,
        width: f32,
        max_count: usize,
    ) -> impl Iterator<Item = &Obstacle> {
        self.obstacles
            .iter()
            .filter(move |o| o.right(width) > avatar_x)
            .take(max_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn test_config() -> GameConfig {
        GameConfig::default()
    }

    fn test_viewport() -> Viewport {
        Viewport::new(1280.0, 800.0)
    }

    #[test]
    fn spawns_exactly_twice_over_240_frames() {
        let mut stream = ObstacleStream::new();
        let config = test_config();
        let mut rng = Pcg32::seed_from_u64(7);

        for frame in 0..240 {
            stream.maybe_spawn(frame, test_viewport(), &config, &mut rng);
        }
        // Cadence 120: frames 0 and 120
        assert_eq!(stream.len(), 2);
    }

    #[test]
    fn spawned_gap_stays_within_bounds() {
        let mut stream = ObstacleStream::new();
        let config = test_config();
        let viewport = test_viewport();
        let mut rng = Pcg32::seed_from_u64(42);

        for i in 0..50 {
            stream.maybe_spawn(i * config.spawn_interval, viewport, &config, &mut rng);
        }

        let max_top = viewport.height - config.gap_height - viewport.height * 0.25;
        for obstacle in stream.iter() {
            assert!(obstacle.gap_top >= config.min_gap_top);
            assert!(obstacle.gap_top <= max_top);
            assert_eq!(obstacle.gap_bottom, obstacle.gap_top + config.gap_height);
            assert_eq!(obstacle.x, viewport.width);
        }
    }

    #[test]
    fn tiny_viewport_clamps_range_instead_of_panicking() {
        let mut stream = ObstacleStream::new();
        let config = test_config();
        // height - gap - margin is far below min_gap_top here
        let viewport = Viewport::new(320.0, 200.0);
        let mut rng = Pcg32::seed_from_u64(0);

        stream.maybe_spawn(0, viewport, &config, &mut rng);

        assert_eq!(stream.len(), 1);
        let obstacle = stream.iter().next().unwrap();
        assert_eq!(obstacle.gap_top, config.min_gap_top);
    }

    #[test]
    fn advance_moves_all_and_reap_preserves_order() {
        let mut stream = ObstacleStream::new();
        stream.obstacles.push(Obstacle::new(-100.0, 150.0, 300.0));
        stream.obstacles.push(Obstacle::new(200.0, 200.0, 300.0));
        stream.obstacles.push(Obstacle::new(500.0, 250.0, 300.0));

        stream.advance(3.0);
        assert_eq!(stream.obstacles[1].x, 197.0);

        // First obstacle's right edge (-103 + 80) is past the left boundary
        stream.reap(80.0);
        assert_eq!(stream.len(), 2);
        assert!(stream.obstacles[0].x < stream.obstacles[1].x);
    }

    #[test]
    fn award_passes_is_idempotent() {
        let mut stream = ObstacleStream::new();
        stream.obstacles.push(Obstacle::new(10.0, 150.0, 300.0));

        // Right edge 90 < avatar_x 100: newly passed
        assert_eq!(stream.award_passes(100.0, 80.0), 1);
        // Same obstacle never scores again
        for _ in 0..10 {
            assert_eq!(stream.award_passes(100.0, 80.0), 0);
        }
    }

    #[test]
    fn distance_to_next_matches_display_formula() {
        let mut stream = ObstacleStream::new();
        let avatar = Avatar::new(300.0); // x = 100, width = 40

        assert_eq!(stream.distance_to_next(&avatar, 80.0), None);

        // Already behind the avatar: ignored
        stream.obstacles.push(Obstacle::new(-60.0, 150.0, 300.0));
        // Next one ahead: (400 - 100 - 40) / 10 = 26
        stream.obstacles.push(Obstacle::new(400.0, 150.0, 300.0));
        assert_eq!(stream.distance_to_next(&avatar, 80.0), Some(26));

        // An obstacle overlapping the avatar floors at zero
        stream.obstacles.insert(1, Obstacle::new(90.0, 150.0, 300.0));
        assert_eq!(stream.distance_to_next(&avatar, 80.0), Some(0));
    }

    #[test]
    fn visible_caps_count_and_skips_passed_geometry() {
        let mut stream = ObstacleStream::new();
        for i in 0..8 {
            stream
                .obstacles
                .push(Obstacle::new(-200.0 + i as f32 * 300.0, 150.0, 300.0));
        }

        let visible: Vec<_> = stream.visible(100.0, 80.0, 6).collect();
        // The first obstacle (right edge -120) is behind the avatar
        assert_eq!(visible.len(), 6);
        assert!(visible.iter().all(|o| o.right(80.0) > 100.0));
        // Stream order preserved
        assert!(visible.windows(2).all(|w| w[0].x < w[1].x));
    }
}

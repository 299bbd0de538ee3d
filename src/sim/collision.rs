//! Collision detection for the avatar against obstacle gaps and world bounds
//!
//! Pure axis-aligned tests with no side effects. The avatar's box is shrunk
//! by a small padding before testing so near-misses stay forgiving; the
//! padding is applied identically for every obstacle.

use super::state::{Avatar, Obstacle, Viewport};

/// Does the avatar hit this obstacle's top or bottom barrier?
///
/// The avatar box is shrunk by `padding` on all sides, then tested for
/// horizontal overlap with the barrier column and vertical escape from the
/// gap: overlapping the column while poking above `gap_top` or below
/// `gap_bottom` is a hit.
pub fn collides(avatar: &Avatar, obstacle: &Obstacle, width: f32, padding: f32) -> bool {
    let left = avatar.pos.x + padding;
    let right = avatar.pos.x + avatar.size.x - padding;
    let top = avatar.pos.y + padding;
    let bottom = avatar.pos.y + avatar.size.y - padding;

    let obstacle_left = obstacle.x;
    let obstacle_right = obstacle.x + width;

    if right > obstacle_left && left < obstacle_right {
        if top < obstacle.gap_top || bottom > obstacle.gap_bottom {
            return true;
        }
    }
    false
}

/// Has the avatar left the playable vertical band?
///
/// Fatal above the ceiling (`y < 0`) or once its bottom edge crosses the
/// ground line. Uses the full unpadded box, matching the visual contact.
pub fn out_of_bounds(avatar: &Avatar, viewport: Viewport) -> bool {
    avatar.pos.y < 0.0 || avatar.pos.y + avatar.size.y > viewport.ground_line()
}

#[cfg(test)]
mod tests {
    use super::*;

    const WIDTH: f32 = 80.0;
    const PADDING: f32 = 2.0;

    fn avatar_at(y: f32) -> Avatar {
        Avatar::new(y) // x = 100, 40x28
    }

    fn obstacle_over_avatar(gap_top: f32) -> Obstacle {
        // x = 90 overlaps the avatar's x range [100, 140]
        Obstacle::new(90.0, gap_top, 300.0)
    }

    #[test]
    fn inside_gap_is_a_miss() {
        // Gap spans [150, 450]; avatar at y=200 occupies [200, 228]
        let avatar = avatar_at(200.0);
        let obstacle = obstacle_over_avatar(150.0);
        assert!(!collides(&avatar, &obstacle, WIDTH, PADDING));
    }

    #[test]
    fn top_strip_is_a_hit() {
        // Avatar at y=0 pokes above gap_top=150
        let avatar = avatar_at(0.0);
        let obstacle = obstacle_over_avatar(150.0);
        assert!(collides(&avatar, &obstacle, WIDTH, PADDING));
    }

    #[test]
    fn bottom_barrier_is_a_hit() {
        // Padded bottom = 500 + 28 - 2 = 526 > gap_bottom 450
        let avatar = avatar_at(500.0);
        let obstacle = obstacle_over_avatar(150.0);
        assert!(collides(&avatar, &obstacle, WIDTH, PADDING));
    }

    #[test]
    fn padding_forgives_exact_touch_but_not_one_unit_more() {
        let obstacle = obstacle_over_avatar(150.0);

        // Padded top exactly at gap_top: y + padding == 150 is not < 150
        let touching = avatar_at(150.0 - PADDING);
        assert!(!collides(&touching, &obstacle, WIDTH, PADDING));

        // One unit further up crosses the padded boundary
        let over = avatar_at(150.0 - PADDING - 1.0);
        assert!(collides(&over, &obstacle, WIDTH, PADDING));

        // Same law on the bottom edge: padded bottom == gap_bottom
        let touching = avatar_at(450.0 - 28.0 + PADDING);
        assert!(!collides(&touching, &obstacle, WIDTH, PADDING));
        let over = avatar_at(450.0 - 28.0 + PADDING + 1.0);
        assert!(collides(&over, &obstacle, WIDTH, PADDING));
    }

    #[test]
    fn no_horizontal_overlap_is_a_miss() {
        // Obstacle far to the right of the avatar, avatar in the fatal strip
        let avatar = avatar_at(0.0);
        let obstacle = Obstacle::new(600.0, 150.0, 300.0);
        assert!(!collides(&avatar, &obstacle, WIDTH, PADDING));
    }

    #[test]
    fn padding_shrinks_horizontal_extent_too() {
        let avatar = avatar_at(0.0);
        // Obstacle right edge exactly at the padded left: 102 is not < 102
        let obstacle = Obstacle::new(102.0 - WIDTH, 150.0, 300.0);
        assert!(!collides(&avatar, &obstacle, WIDTH, PADDING));
        let obstacle = Obstacle::new(103.0 - WIDTH, 150.0, 300.0);
        assert!(collides(&avatar, &obstacle, WIDTH, PADDING));
    }

    #[test]
    fn bounds_check_uses_ground_line() {
        let viewport = Viewport::new(1280.0, 800.0); // ground at 680

        assert!(!out_of_bounds(&avatar_at(300.0), viewport));
        assert!(out_of_bounds(&avatar_at(-0.1), viewport));
        // Bottom edge at 680 exactly is still in bounds
        assert!(!out_of_bounds(&avatar_at(680.0 - 28.0), viewport));
        assert!(out_of_bounds(&avatar_at(680.0 - 28.0 + 0.5), viewport));
    }
}

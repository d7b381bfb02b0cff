//! Predictive paddle steering
//!
//! The paddle extrapolates the ball in a straight line to the paddle's depth
//! and picks the y velocity that arrives there at the same time.

use glam::IVec2;

/// Vertical velocity that puts the paddle's center on the ball's path
///
/// All inputs are centers (not corners). Returns 0 when the ball cannot
/// be reached: it has no x velocity, it is moving away, or it is already
/// level with the paddle.
///
/// The extrapolation runs in `i64` so any court size fits; the result is
/// capped to `max_speed` before narrowing back.
pub fn intercept_velocity(
    paddle_center: IVec2,
    ball_center: IVec2,
    ball_vel: IVec2,
    max_speed: i32,
) -> i32 {
    // The paddle can't move in x, so a purely vertical ball is out of its hands
    if ball_vel.x == 0 {
        return 0;
    }

    let depth = paddle_center.x - ball_center.x;
    let ticks_to_arrival = depth / ball_vel.x;
    if ticks_to_arrival <= 0 {
        return 0;
    }

    let rise = i64::from(ball_center.y) - i64::from(paddle_center.y);
    let depth = i64::from(depth);
    let numerator = rise * i64::from(ball_vel.x) + depth * i64::from(ball_vel.y);
    let Some(vy) = numerator.checked_div(depth) else {
        return 0;
    };

    // Overshooting the cap falls back to half speed, not the cap itself
    if vy.abs() > i64::from(max_speed) {
        vy.signum() as i32 * (max_speed / 2)
    } else {
        vy as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_without_horizontal_motion() {
        let v = intercept_velocity(IVec2::new(153, 170), IVec2::new(10, 10), IVec2::new(0, 4), 5);
        assert_eq!(v, 0);
    }

    #[test]
    fn test_idle_when_ball_moves_away() {
        // Ball left of paddle, moving left
        let v = intercept_velocity(IVec2::new(153, 170), IVec2::new(50, 10), IVec2::new(-2, 1), 5);
        assert_eq!(v, 0);
        // Ball right of paddle, moving right
        let v = intercept_velocity(IVec2::new(153, 170), IVec2::new(250, 10), IVec2::new(2, 1), 5);
        assert_eq!(v, 0);
    }

    #[test]
    fn test_idle_when_level_with_paddle() {
        let v = intercept_velocity(IVec2::new(153, 170), IVec2::new(153, 10), IVec2::new(3, 1), 5);
        assert_eq!(v, 0);
    }

    #[test]
    fn test_idle_when_less_than_one_tick_away() {
        // depth 2, vx 3 -> 0 ticks
        let v = intercept_velocity(IVec2::new(153, 170), IVec2::new(151, 10), IVec2::new(3, 1), 5);
        assert_eq!(v, 0);
    }

    #[test]
    fn test_tracks_within_cap() {
        // 100 px away, 40 px above, moving (2, 2): (-40 * 2 + 100 * 2) / 100 = 1
        let v = intercept_velocity(IVec2::new(153, 170), IVec2::new(53, 130), IVec2::new(2, 2), 5);
        assert_eq!(v, 1);

        // Level with the paddle, moving (1, 3): (0 + 100 * 3) / 100 = 3
        let v = intercept_velocity(IVec2::new(153, 170), IVec2::new(53, 170), IVec2::new(1, 3), 5);
        assert_eq!(v, 3);
    }

    #[test]
    fn test_overshoot_falls_back_to_half_speed() {
        // ((10 - 170) * 4 + 20 * 1) / 20 = -31, beyond 5 -> -(5 / 2)
        let v = intercept_velocity(IVec2::new(153, 170), IVec2::new(133, 10), IVec2::new(4, 1), 5);
        assert_eq!(v, -2);

        let v = intercept_velocity(IVec2::new(153, 10), IVec2::new(133, 200), IVec2::new(4, 1), 7);
        assert_eq!(v, 3);
    }

    #[test]
    fn test_huge_court_does_not_overflow() {
        let half = i32::MAX / 2;
        // Ball far left near the bottom, paddle far right at the top
        let v = intercept_velocity(
            IVec2::new(half - 3, 20),
            IVec2::new(10, half - 10),
            IVec2::new(10, 10),
            5,
        );
        assert_eq!(v, 5 / 2);

        // Same path with no effective cap: (20 * depth - 170) / depth
        let v = intercept_velocity(
            IVec2::new(half - 3, 20),
            IVec2::new(10, half - 10),
            IVec2::new(10, 10),
            i32::MAX,
        );
        assert_eq!(v, 19);
    }
}

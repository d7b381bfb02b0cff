//! Fixed tick simulation
//!
//! One call to [`Court::advance`] moves the ball, then steers the paddle.
//! The order matters: the paddle aims at where the ball is after this tick.

use glam::IVec2;
use rand::Rng;

use super::collision::{boxes_overlap, clamp_to_bounds, touches_wall, wall_bounce};
use super::intercept::intercept_velocity;
use super::state::{Axis, Ball, Bounds, Court, CourtEvent, Paddle};

impl Ball {
    /// Advance the ball by one tick
    ///
    /// Moves, clips into the court, then resolves paddle contact or wall
    /// bounces. A paddle hit bumps the paddle's score.
    pub fn update<R: Rng>(
        &mut self,
        bounds: Bounds,
        paddle: Option<&mut Paddle>,
        rng: &mut R,
        events: &mut Vec<CourtEvent>,
    ) {
        // A resting ball gets a diagonal kick
        if self.vel == IVec2::ZERO {
            self.vel = IVec2::ONE;
        }

        self.pos += self.vel;
        self.pos = clamp_to_bounds(self.pos, Self::SIZE, bounds);

        if let Some(paddle) = paddle {
            if boxes_overlap(self.pos, Self::SIZE, paddle.pos, Paddle::SIZE) {
                // Still overlapping from last tick's hit: don't reflect again
                if !self.in_contact {
                    if self.vel.x != 0 {
                        self.vel.x = -self.vel.x;
                    } else {
                        // Came straight down (or up) onto the paddle's end
                        self.vel.y = -self.vel.y;
                    }
                    let score = paddle.increment_score();
                    self.in_contact = true;
                    log::debug!("Paddle hit at {:?}, score {}", self.pos, score);
                    events.push(CourtEvent::PaddleHit { score });
                }
                return;
            }
        }

        self.in_contact = false;

        let max = bounds.max_position(Self::SIZE);
        if touches_wall(self.pos.x, max.x) {
            self.vel.x = wall_bounce(self.vel.x, rng);
            log::trace!("Wall bounce x at {:?}, vel {:?}", self.pos, self.vel);
            events.push(CourtEvent::WallBounce { axis: Axis::X });
        }
        if touches_wall(self.pos.y, max.y) {
            self.vel.y = wall_bounce(self.vel.y, rng);
            log::trace!("Wall bounce y at {:?}, vel {:?}", self.pos, self.vel);
            events.push(CourtEvent::WallBounce { axis: Axis::Y });
        }
    }
}

impl Paddle {
    /// Advance the paddle by one tick and pick next tick's velocity
    pub fn update(&mut self, bounds: Bounds, ball: Option<&Ball>) {
        self.pos.y = self.pos.y.saturating_add(self.vel.y);

        // Reflect off the top and bottom walls
        if self.pos.y < 0 {
            self.pos.y = 0;
            self.vel.y = -self.vel.y;
        }
        let max_y = bounds.max_position(Self::SIZE).y;
        if self.pos.y > max_y {
            self.pos.y = max_y;
            self.vel.y = -self.vel.y;
        }

        self.vel = IVec2::ZERO;
        if let Some(ball) = ball {
            self.vel.y = intercept_velocity(self.center(), ball.center(), ball.vel, self.max_speed);
        }
    }
}

impl Court {
    /// Run one tick: ball first, then paddle
    pub fn advance(&mut self) -> Vec<CourtEvent> {
        let mut events = Vec::new();
        let Self {
            bounds,
            ball,
            player,
            rng,
            ..
        } = self;

        if let Some(ball) = ball.as_mut() {
            ball.update(*bounds, player.as_mut(), rng, &mut events);
        }
        if let Some(player) = player.as_mut() {
            player.update(*bounds, ball.as_ref());
        }

        self.ticks += 1;
        if let (Some(ball), Some(player)) = (&self.ball, &self.player) {
            log::trace!(
                "Tick {}: ball {:?} vel {:?}, paddle y {} vy {}",
                self.ticks,
                ball.pos,
                ball.vel,
                player.pos.y,
                player.vel.y
            );
        }
        events
    }
}

//! Court state and core simulation types
//!
//! All state that must survive a snapshot for determinism lives here,
//! including the RNG stream.

use glam::IVec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Rectangular court extent; positions are measured from its top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bounds {
    pub width: i32,
    pub height: i32,
}

impl Bounds {
    pub fn new(width: i32, height: i32) -> Result<Self, ConfigError> {
        if width <= 0 || height <= 0 {
            return Err(ConfigError::NonPositiveDimensions { width, height });
        }
        let bounds = Self { width, height };
        bounds.check_fits("ball", Ball::SIZE)?;
        bounds.check_fits("paddle", Paddle::SIZE)?;
        Ok(bounds)
    }

    /// Largest top-left coordinate a box of `size` may occupy
    #[inline]
    pub fn max_position(&self, size: IVec2) -> IVec2 {
        IVec2::new(self.width - size.x, self.height - size.y)
    }

    fn check_fits(&self, entity: &'static str, size: IVec2) -> Result<(), ConfigError> {
        if size.x > self.width || size.y > self.height {
            return Err(ConfigError::CourtTooSmall {
                width: self.width,
                height: self.height,
                entity,
                extent_w: size.x,
                extent_h: size.y,
            });
        }
        Ok(())
    }

    pub(crate) fn check_placement(
        &self,
        entity: &'static str,
        pos: IVec2,
        size: IVec2,
    ) -> Result<(), ConfigError> {
        let max = self.max_position(size);
        if pos.x < 0 || pos.y < 0 || pos.x > max.x || pos.y > max.y {
            return Err(ConfigError::StartOutOfBounds {
                entity,
                x: pos.x,
                y: pos.y,
                max_x: max.x,
                max_y: max.y,
            });
        }
        Ok(())
    }
}

/// Velocity axis, used to tag wall bounces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
}

/// Things that happened during one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CourtEvent {
    /// Fresh ball/paddle contact; carries the paddle's new score
    PaddleHit { score: u32 },
    /// Ball reflected off a wall on this axis
    WallBounce { axis: Axis },
}

/// The ball
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ball {
    /// Top-left corner of the bounding box
    pub(crate) pos: IVec2,
    /// Displacement per tick
    pub(crate) vel: IVec2,
    /// Set for the ticks the ball keeps overlapping the paddle after a hit
    pub(crate) in_contact: bool,
}

impl Ball {
    pub const SIZE: IVec2 = IVec2::splat(BALL_DIAMETER);

    /// A resting ball; it starts moving on its first update
    pub fn new(start_x: i32, start_y: i32) -> Self {
        Self {
            pos: IVec2::new(start_x, start_y),
            vel: IVec2::ZERO,
            in_contact: false,
        }
    }

    /// Give the ball an initial velocity instead of the default kick
    pub fn with_velocity(mut self, vx: i32, vy: i32) -> Result<Self, ConfigError> {
        self.vel = IVec2::new(vx, vy);
        self.check_speed()?;
        Ok(self)
    }

    fn check_speed(&self) -> Result<(), ConfigError> {
        if self.vel.x.abs() > BALL_MAX_SPEED || self.vel.y.abs() > BALL_MAX_SPEED {
            return Err(ConfigError::SpeedOutOfRange {
                entity: "ball",
                vx: self.vel.x,
                vy: self.vel.y,
            });
        }
        Ok(())
    }

    pub fn pos(&self) -> IVec2 {
        self.pos
    }

    pub fn vel(&self) -> IVec2 {
        self.vel
    }

    pub fn in_contact(&self) -> bool {
        self.in_contact
    }

    pub fn center(&self) -> IVec2 {
        self.pos + Self::SIZE / 2
    }
}

/// The autonomously steered paddle; only moves along y
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paddle {
    pub(crate) pos: IVec2,
    /// x component stays 0
    pub(crate) vel: IVec2,
    pub(crate) max_speed: i32,
    /// Number of times the paddle has hit the ball
    pub(crate) score: u32,
}

impl Paddle {
    pub const SIZE: IVec2 = IVec2::new(PADDLE_WIDTH, PADDLE_HEIGHT);

    pub fn new(start_x: i32, start_y: i32, max_speed: i32) -> Result<Self, ConfigError> {
        if max_speed <= 0 {
            return Err(ConfigError::NonPositiveMaxSpeed(max_speed));
        }
        Ok(Self {
            pos: IVec2::new(start_x, start_y),
            vel: IVec2::ZERO,
            max_speed,
            score: 0,
        })
    }

    pub fn pos(&self) -> IVec2 {
        self.pos
    }

    pub fn vel(&self) -> IVec2 {
        self.vel
    }

    pub fn max_speed(&self) -> i32 {
        self.max_speed
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn center(&self) -> IVec2 {
        self.pos + Self::SIZE / 2
    }

    /// Velocity must be vertical and within the paddle's own cap
    fn check_speed(&self) -> Result<(), ConfigError> {
        if self.max_speed <= 0 {
            return Err(ConfigError::NonPositiveMaxSpeed(self.max_speed));
        }
        if self.vel.x != 0 || self.vel.y.abs() > self.max_speed {
            return Err(ConfigError::SpeedOutOfRange {
                entity: "paddle",
                vx: self.vel.x,
                vy: self.vel.y,
            });
        }
        Ok(())
    }

    pub(crate) fn increment_score(&mut self) -> u32 {
        self.score += 1;
        self.score
    }
}

/// Complete court state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Court {
    pub(crate) bounds: Bounds,
    pub(crate) ball: Option<Ball>,
    pub(crate) player: Option<Paddle>,
    /// Seed the RNG was created from
    pub(crate) seed: u64,
    /// Wall-bounce jitter stream
    pub(crate) rng: Pcg32,
    /// Completed ticks
    pub(crate) ticks: u64,
}

impl Court {
    /// Create an empty court with the given seed
    pub fn new(width: i32, height: i32, seed: u64) -> Result<Self, ConfigError> {
        Ok(Self {
            bounds: Bounds::new(width, height)?,
            ball: None,
            player: None,
            seed,
            rng: Pcg32::seed_from_u64(seed),
            ticks: 0,
        })
    }

    /// Put the court's only ball in play
    pub fn add_ball(&mut self, ball: Ball) -> Result<(), ConfigError> {
        if self.ball.is_some() {
            return Err(ConfigError::AlreadyRegistered("ball"));
        }
        self.bounds.check_placement("ball", ball.pos, Ball::SIZE)?;
        ball.check_speed()?;
        self.ball = Some(ball);
        Ok(())
    }

    /// Put the court's only paddle in play
    pub fn add_player(&mut self, paddle: Paddle) -> Result<(), ConfigError> {
        if self.player.is_some() {
            return Err(ConfigError::AlreadyRegistered("paddle"));
        }
        self.bounds.check_placement("paddle", paddle.pos, Paddle::SIZE)?;
        paddle.check_speed()?;
        self.player = Some(paddle);
        Ok(())
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn width(&self) -> i32 {
        self.bounds.width
    }

    pub fn height(&self) -> i32 {
        self.bounds.height
    }

    pub fn ball(&self) -> Option<&Ball> {
        self.ball.as_ref()
    }

    pub fn player(&self) -> Option<&Paddle> {
        self.player.as_ref()
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Re-check geometry and speeds of a court that did not come from `new`
    pub fn validate(&self) -> Result<(), ConfigError> {
        let bounds = Bounds::new(self.bounds.width, self.bounds.height)?;
        if let Some(ball) = &self.ball {
            bounds.check_placement("ball", ball.pos, Ball::SIZE)?;
            ball.check_speed()?;
        }
        if let Some(paddle) = &self.player {
            paddle.check_speed()?;
            bounds.check_placement("paddle", paddle.pos, Paddle::SIZE)?;
        }
        Ok(())
    }
}

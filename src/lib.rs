//! Ball Court - a bounded 2D arena with one ball and one self-steering paddle
//!
//! Core modules:
//! - `sim`: Deterministic simulation (integer kinematics, collisions, interception)
//! - `settings`: Court configuration with defaults and validation
//! - `persistence`: Versioned snapshots of a running court
//! - `slots`: Headless registry for several independent courts

pub mod error;
pub mod persistence;
pub mod settings;
pub mod sim;
pub mod slots;

pub use error::{ConfigError, PersistenceError, SlotError};
pub use persistence::Snapshot;
pub use settings::CourtConfig;
pub use sim::{Axis, Ball, Bounds, Court, CourtEvent, Paddle};
pub use slots::CourtSlots;

/// Game configuration constants
pub mod consts {
    /// Ball bounding box edge (pixels)
    pub const BALL_DIAMETER: i32 = 20;
    /// Maximum magnitude of either ball velocity component (pixels/tick)
    pub const BALL_MAX_SPEED: i32 = 10;
    /// Modulus applied to raw RNG output for wall-bounce jitter; yields [-2, 2]
    pub const BOUNCE_JITTER_MODULUS: i32 = 3;

    /// Paddle box
    pub const PADDLE_WIDTH: i32 = 6;
    pub const PADDLE_HEIGHT: i32 = 40;

    /// Default court setup
    pub const DEFAULT_COURT_WIDTH: i32 = 300;
    pub const DEFAULT_COURT_HEIGHT: i32 = 300;
    pub const DEFAULT_BALL_START: (i32, i32) = (0, 0);
    pub const DEFAULT_PADDLE_START: (i32, i32) = (150, 150);
    pub const DEFAULT_PADDLE_MAX_SPEED: i32 = 5;
    pub const DEFAULT_SEED: u64 = 0x0BA1_1C0C;
}

//! Deterministic simulation module
//!
//! All court logic lives here. This module must be pure and deterministic:
//! - Integer arithmetic only
//! - Seeded RNG only
//! - Fixed update order (ball, then paddle)
//! - No timing, I/O, or platform dependencies

pub mod collision;
pub mod intercept;
pub mod state;
pub mod tick;

pub use collision::{boxes_overlap, cap_speed, clamp_to_bounds, wall_bounce};
pub use intercept::intercept_velocity;
pub use state::{Axis, Ball, Bounds, Court, CourtEvent, Paddle};

//! Collision detection and response for axis-aligned boxes
//!
//! Everything is integer arithmetic on top-left corners. Overlap is inclusive:
//! boxes that merely share an edge count as touching.

use glam::IVec2;
use rand::Rng;

use super::state::Bounds;
use crate::consts::{BALL_MAX_SPEED, BOUNCE_JITTER_MODULUS};

/// Check whether two boxes touch or overlap
#[inline]
pub fn boxes_overlap(a_pos: IVec2, a_size: IVec2, b_pos: IVec2, b_size: IVec2) -> bool {
    a_pos.x <= b_pos.x + b_size.x
        && b_pos.x <= a_pos.x + a_size.x
        && a_pos.y <= b_pos.y + b_size.y
        && b_pos.y <= a_pos.y + a_size.y
}

/// Hard-clip a box's top-left corner so the box stays inside the court
#[inline]
pub fn clamp_to_bounds(pos: IVec2, size: IVec2, bounds: Bounds) -> IVec2 {
    pos.min(bounds.max_position(size)).max(IVec2::ZERO)
}

/// True when a coordinate sits on (or past) either wall of its axis
#[inline]
pub fn touches_wall(coord: i32, max: i32) -> bool {
    coord <= 0 || coord >= max
}

/// Limit a velocity component's magnitude, keeping its sign
#[inline]
pub fn cap_speed(v: i32, max: i32) -> i32 {
    if v.abs() > max { v.signum() * max } else { v }
}

/// Add jitter to an already reflected component unless it would flip the sign
#[inline]
pub fn apply_jitter(v: i32, jitter: i32) -> i32 {
    if (v + jitter).signum() == v.signum() {
        v + jitter
    } else {
        v
    }
}

/// Draw a jitter value in [-2, 2]
///
/// The remainder of a signed draw keeps its sign, so both directions occur.
pub fn draw_jitter<R: Rng>(rng: &mut R) -> i32 {
    rng.random::<i32>() % BOUNCE_JITTER_MODULUS
}

/// Reflect one velocity component off a wall, jitter it, and cap it
pub fn wall_bounce<R: Rng>(v: i32, rng: &mut R) -> i32 {
    let reflected = -v;
    let jittered = apply_jitter(reflected, draw_jitter(rng));
    cap_speed(jittered, BALL_MAX_SPEED)
}

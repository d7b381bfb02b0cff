//! Error types
//!
//! The per-tick simulation is total; everything that can go wrong is
//! rejected while a court is being built, restored, or stored.

use std::path::PathBuf;

use thiserror::Error;

/// Malformed court geometry or entity registration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("court dimensions must be positive, got {width}x{height}")]
    NonPositiveDimensions { width: i32, height: i32 },

    #[error("court {width}x{height} is too small for a {entity} of {extent_w}x{extent_h}")]
    CourtTooSmall {
        width: i32,
        height: i32,
        entity: &'static str,
        extent_w: i32,
        extent_h: i32,
    },

    #[error("{entity} start ({x}, {y}) lies outside the court (allowed 0..={max_x}, 0..={max_y})")]
    StartOutOfBounds {
        entity: &'static str,
        x: i32,
        y: i32,
        max_x: i32,
        max_y: i32,
    },

    #[error("{entity} velocity ({vx}, {vy}) exceeds its speed limit")]
    SpeedOutOfRange {
        entity: &'static str,
        vx: i32,
        vy: i32,
    },

    #[error("paddle max speed must be positive, got {0}")]
    NonPositiveMaxSpeed(i32),

    #[error("court already has a {0}")]
    AlreadyRegistered(&'static str),
}

/// Snapshot storage and restore failures
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("snapshot I/O failed for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("snapshot JSON is malformed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported snapshot version {found} (expected {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },

    #[error("snapshot holds an invalid court: {0}")]
    InvalidState(#[from] ConfigError),
}

/// Rejected operations on the court slot registry
#[derive(Debug, Error)]
pub enum SlotError {
    #[error("slot {index} does not exist (have {max})")]
    OutOfRange { index: usize, max: usize },

    #[error("no slot is selected")]
    NoneSelected,

    #[error("slot {0} is empty")]
    Empty(usize),

    #[error("slot {0} is already occupied")]
    Occupied(usize),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Persistence(#[from] PersistenceError),
}

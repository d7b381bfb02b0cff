//! Save/load of a running court
//!
//! Features:
//! - Versioned JSON envelope
//! - RNG stream stored alongside entity state, so a restored court ticks
//!   exactly like the original would have
//! - Write to a tmp file, then rename over the target
//! - Geometry re-validated on restore

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::PersistenceError;
use crate::sim::Court;

/// Current snapshot format version
pub const SNAPSHOT_VERSION: u32 = 1;

/// Serialized court with a format version
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub version: u32,
    pub court: Court,
}

impl Snapshot {
    /// Copy a court's full state
    pub fn capture(court: &Court) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            court: court.clone(),
        }
    }

    /// Turn the snapshot back into a court, checking version and geometry
    pub fn restore(self) -> Result<Court, PersistenceError> {
        if self.version != SNAPSHOT_VERSION {
            return Err(PersistenceError::UnsupportedVersion {
                found: self.version,
                expected: SNAPSHOT_VERSION,
            });
        }
        self.court.validate()?;
        Ok(self.court)
    }

    pub fn to_json(&self) -> Result<String, PersistenceError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, PersistenceError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Write the snapshot to `path`
    pub fn save(&self, path: &Path) -> Result<(), PersistenceError> {
        let json = self.to_json()?;
        let tmp = tmp_path(path);
        fs::write(&tmp, json).map_err(|source| PersistenceError::Io {
            path: tmp.clone(),
            source,
        })?;
        fs::rename(&tmp, path).map_err(|source| PersistenceError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!(
            "Snapshot saved to {} at tick {}",
            path.display(),
            self.court.ticks()
        );
        Ok(())
    }

    /// Read a snapshot from `path` (does not restore it)
    pub fn load(path: &Path) -> Result<Self, PersistenceError> {
        let json = fs::read_to_string(path).map_err(|source| PersistenceError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let snapshot = Self::from_json(&json)?;
        log::debug!(
            "Snapshot loaded from {} (version {}, tick {})",
            path.display(),
            snapshot.version,
            snapshot.court.ticks()
        );
        Ok(snapshot)
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

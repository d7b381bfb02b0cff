//! Court configuration
//!
//! Persisted separately from snapshots as plain JSON. Missing fields fall
//! back to the classic 300x300 setup.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{ConfigError, PersistenceError};
use crate::sim::{Ball, Court, Paddle};

/// Everything needed to set up a fresh court
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CourtConfig {
    pub width: i32,
    pub height: i32,
    /// Ball top-left corner
    pub ball_start: (i32, i32),
    /// Paddle top-left corner; x never changes
    pub paddle_start: (i32, i32),
    pub paddle_max_speed: i32,
    /// Seed for wall-bounce jitter
    pub seed: u64,
}

impl Default for CourtConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_COURT_WIDTH,
            height: DEFAULT_COURT_HEIGHT,
            ball_start: DEFAULT_BALL_START,
            paddle_start: DEFAULT_PADDLE_START,
            paddle_max_speed: DEFAULT_PADDLE_MAX_SPEED,
            seed: DEFAULT_SEED,
        }
    }
}

impl CourtConfig {
    /// Default setup with a different seed
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }

    /// Check geometry without building anything
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.build().map(|_| ())
    }

    /// Build a court with its ball and paddle registered
    pub fn build(&self) -> Result<Court, ConfigError> {
        let mut court = Court::new(self.width, self.height, self.seed)?;
        court.add_ball(Ball::new(self.ball_start.0, self.ball_start.1))?;
        court.add_player(Paddle::new(
            self.paddle_start.0,
            self.paddle_start.1,
            self.paddle_max_speed,
        )?)?;
        Ok(court)
    }

    /// Read a config from a JSON file
    pub fn load(path: &Path) -> Result<Self, PersistenceError> {
        let json = fs::read_to_string(path).map_err(|source| PersistenceError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&json)?;
        log::info!("Loaded court config from {}", path.display());
        Ok(config)
    }

    /// Write a config as pretty JSON
    pub fn save(&self, path: &Path) -> Result<(), PersistenceError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json).map_err(|source| PersistenceError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_builds_classic_court() {
        let court = CourtConfig::default().build().unwrap();
        assert_eq!((court.width(), court.height()), (300, 300));
        assert_eq!(court.ball().unwrap().pos().to_array(), [0, 0]);
        let paddle = court.player().unwrap();
        assert_eq!(paddle.pos().to_array(), [150, 150]);
        assert_eq!(paddle.max_speed(), 5);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: CourtConfig = serde_json::from_str(r#"{"seed": 9, "width": 400}"#).unwrap();
        assert_eq!(config.seed, 9);
        assert_eq!(config.width, 400);
        assert_eq!(config.height, DEFAULT_COURT_HEIGHT);
        assert_eq!(config.paddle_start, DEFAULT_PADDLE_START);
    }

    #[test]
    fn test_validate_reports_bad_geometry() {
        let config = CourtConfig {
            height: -5,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositiveDimensions { .. })
        ));

        let config = CourtConfig {
            paddle_start: (298, 0),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::StartOutOfBounds { entity: "paddle", .. })
        ));

        let config = CourtConfig {
            paddle_max_speed: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::NonPositiveMaxSpeed(0)));
    }

    #[test]
    fn test_file_round_trip() {
        let path = std::env::temp_dir().join(format!("ball_court_config_{}.json", std::process::id()));
        let config = CourtConfig::with_seed(77);
        config.save(&path).unwrap();
        assert_eq!(CourtConfig::load(&path).unwrap(), config);
        let _ = fs::remove_file(&path);
    }
}

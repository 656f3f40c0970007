//! Session configuration
//!
//! Screen geometry and timing, read once at startup. Every field has a
//! default, so a partial (or missing) JSON file still yields a usable config.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Static game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub screen_width: f32,
    pub screen_height: f32,
    /// Height of the ground sprite; the ground line sits this far above the bottom edge
    pub ground_height: f32,
    /// Fixed simulation rate
    pub ticks_per_second: u32,
    /// Cap on ticks run for one wall-clock frame
    pub max_substeps: u32,
    /// Pipe RNG seed; a fresh seed is drawn per run when unset
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            ground_height: GROUND_HEIGHT,
            ticks_per_second: TICKS_PER_SECOND,
            max_substeps: MAX_SUBSTEPS,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Y coordinate of the ground line
    pub fn ground_y(&self) -> f32 {
        self.screen_height - self.ground_height
    }

    /// Seconds per simulation tick
    pub fn tick_dt(&self) -> f32 {
        1.0 / self.ticks_per_second.max(1) as f32
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load config from a JSON file, falling back to defaults
    pub fn load(path: &Path) -> Self {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) => {
                log::info!("No config at {} ({}), using defaults", path.display(), e);
                return Self::default();
            }
        };

        match Self::from_json(&json) {
            Ok(config) => {
                log::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                log::warn!("Invalid config {}: {}, using defaults", path.display(), e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_ground_line() {
        let config = GameConfig::default();
        assert_eq!(config.ground_y(), 400.0);
        assert!((config.tick_dt() - 1.0 / 60.0).abs() < 1e-6);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = GameConfig::from_json(r#"{ "ticks_per_second": 120, "seed": 7 }"#).unwrap();
        assert_eq!(config.ticks_per_second, 120);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.screen_width, SCREEN_WIDTH);
        assert_eq!(config.ground_height, GROUND_HEIGHT);
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let config = GameConfig::load(Path::new("/nonexistent/flappy/config.json"));
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_zero_tick_rate_does_not_divide_by_zero() {
        let config = GameConfig {
            ticks_per_second: 0,
            ..Default::default()
        };
        assert_eq!(config.tick_dt(), 1.0);
    }
}

//! Session configuration
//!
//! The only tunables outside `consts`: the level tables and the seed used for
//! coin/spike scatter. Defaults carry the built-in levels; a JSON file with the
//! same shape can replace them.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::SCROLL_LEFT_EDGE;
use crate::error::SimError;
use crate::sim::layout::{LevelLayout, builtin_levels};

/// Session settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Seed for coin/spike placement
    #[serde(default)]
    pub seed: u64,
    /// Player x after reaching a level's limit
    #[serde(default = "default_restart_margin")]
    pub restart_margin: i32,
    /// Levels in play order
    #[serde(default = "builtin_levels")]
    pub levels: Vec<LevelLayout>,
}

fn default_restart_margin() -> i32 {
    SCROLL_LEFT_EDGE
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: 0,
            restart_margin: default_restart_margin(),
            levels: builtin_levels(),
        }
    }
}

impl Settings {
    /// Built-in levels with a specific seed
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }

    /// Parse settings from JSON and validate them
    pub fn from_json(json: &str) -> Result<Self, SimError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SimError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let settings = Self::from_json(&json)?;
        log::info!(
            "Loaded {} level(s) from {}",
            settings.levels.len(),
            path.as_ref().display()
        );
        Ok(settings)
    }

    /// Reject configurations a session cannot be built from
    pub fn validate(&self) -> Result<(), SimError> {
        if self.levels.is_empty() {
            return Err(SimError::NoLevels);
        }
        self.levels
            .iter()
            .enumerate()
            .try_for_each(|(i, layout)| layout.validate(i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let s = Settings::default();
        assert_eq!(s.restart_margin, 120);
        assert_eq!(s.levels.len(), 3);
        assert!(s.validate().is_ok());
    }

    #[test]
    fn test_from_json_fills_defaults() {
        let s = Settings::from_json(r#"{"seed": 7}"#).unwrap();
        assert_eq!(s.seed, 7);
        assert_eq!(s.restart_margin, 120);
        assert_eq!(s.levels, builtin_levels());
    }

    #[test]
    fn test_from_json_custom_level() {
        let json = r#"{
            "seed": 3,
            "levels": [{
                "platforms": [{"width": 210, "height": 70, "x": 500, "y": 500}],
                "level_limit": -1500,
                "coins": "random",
                "spikes": "none",
                "lava": {"x": 3000, "width": 400, "height": 20}
            }]
        }"#;
        let s = Settings::from_json(json).unwrap();
        assert_eq!(s.levels.len(), 1);
        assert_eq!(s.levels[0].level_limit, -1500);
    }

    #[test]
    fn test_rejects_no_levels() {
        assert!(matches!(
            Settings::from_json(r#"{"levels": []}"#),
            Err(SimError::NoLevels)
        ));
    }

    #[test]
    fn test_rejects_empty_layout() {
        let json = r#"{"levels": [{
            "platforms": [],
            "level_limit": -1500,
            "lava": {"x": 3000, "width": 400, "height": 20}
        }]}"#;
        assert!(matches!(
            Settings::from_json(json),
            Err(SimError::EmptyLayout { level: 0 })
        ));
    }

    #[test]
    fn test_rejects_negative_platform_width() {
        let json = r#"{"levels": [{
            "platforms": [
                {"width": 210, "height": 70, "x": 500, "y": 500},
                {"width": -50, "height": 70, "x": 800, "y": 400}
            ],
            "level_limit": -1500,
            "lava": {"x": 3000, "width": 400, "height": 20}
        }]}"#;
        assert!(matches!(
            Settings::from_json(json),
            Err(SimError::InvalidExtent {
                level: 0,
                width: -50,
                height: 70
            })
        ));
    }

    #[test]
    fn test_rejects_negative_lava_height() {
        let mut s = Settings::default();
        s.levels[2].lava.height = -20;
        assert!(matches!(
            s.validate(),
            Err(SimError::InvalidExtent { level: 2, .. })
        ));
        // Sessions refuse the same settings instead of building a broken level
        assert!(matches!(
            crate::sim::Session::new(s),
            Err(SimError::InvalidExtent { level: 2, .. })
        ));
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(matches!(
            Settings::from_json("{ not json"),
            Err(SimError::Config(_))
        ));
    }

    #[test]
    fn test_load_missing_file() {
        assert!(matches!(
            Settings::load("/nonexistent/levels.json"),
            Err(SimError::Io(_))
        ));
    }
}

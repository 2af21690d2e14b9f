//! Movement Configuration
//!
//! Tuning for the movement controller. `Default` returns the stock tuning;
//! JSON files only need to name the fields they override.
//!
//! ```json
//! { "walk_speed": 25.0, "ground_layers": 5 }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::physics::collision::{LAYER_COUNT, LayerMask};

/// Errors that can occur while loading or validating a [`MovementConfig`].
#[derive(Debug)]
pub enum ConfigError {
    /// Reading the file failed
    IoError(std::io::Error),
    /// The file is not valid JSON for this config
    JsonError(serde_json::Error),
    /// A field is out of range
    Invalid { field: &'static str, reason: &'static str },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "IO error: {e}"),
            ConfigError::JsonError(e) => write!(f, "JSON error: {e}"),
            ConfigError::Invalid { field, reason } => write!(f, "invalid {field}: {reason}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::IoError(e) => Some(e),
            ConfigError::JsonError(e) => Some(e),
            ConfigError::Invalid { .. } => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::IoError(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::JsonError(e)
    }
}

/// Read-only tuning for one controller.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovementConfig {
    /// Scale of every drive and counter-movement force
    pub move_force: f32,
    /// Horizontal speed cap while grounded (m/s)
    pub walk_speed: f32,
    /// Base jump force
    pub jump_force: f32,
    /// Seconds between a jump and the next allowed jump
    pub jump_cooldown: f32,
    /// Scale of the upward sustain force while wall-running
    pub wall_run_gravity: f32,
    /// Steepest walkable slope in degrees
    pub max_slope_angle: f32,
    /// Look degrees per unit of delta per second
    pub look_sensitivity: f32,
    /// Fixed physics step in seconds (also scales look input)
    pub fixed_timestep: f32,
    /// Layers whose contacts count at all
    pub ground_layers: LayerMask,
    /// Layer that walls must be on to be run along
    pub ground_layer: u8,
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            move_force: 4500.0,
            walk_speed: 20.0,
            jump_force: 550.0,
            jump_cooldown: 0.25,
            wall_run_gravity: 1.0,
            max_slope_angle: 35.0,
            look_sensitivity: 75.0,
            fixed_timestep: 0.02,
            ground_layers: LayerMask::from_layer(0),
            ground_layer: 0,
        }
    }
}

impl MovementConfig {
    /// Parse and validate a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: MovementConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&json)?;
        log::debug!("Loaded movement config from {}", path.display());
        Ok(config)
    }

    /// Serialize to indented JSON.
    pub fn to_json_pretty(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check every field is in range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        fn invalid(field: &'static str, reason: &'static str) -> Result<(), ConfigError> {
            Err(ConfigError::Invalid { field, reason })
        }

        if !(self.move_force.is_finite() && self.move_force > 0.0) {
            return invalid("move_force", "must be positive");
        }
        if !(self.walk_speed.is_finite() && self.walk_speed > 0.0) {
            return invalid("walk_speed", "must be positive");
        }
        if !(self.jump_force.is_finite() && self.jump_force >= 0.0) {
            return invalid("jump_force", "must not be negative");
        }
        if !(self.jump_cooldown.is_finite() && self.jump_cooldown >= 0.0) {
            return invalid("jump_cooldown", "must not be negative");
        }
        if !(self.wall_run_gravity.is_finite() && self.wall_run_gravity >= 0.0) {
            return invalid("wall_run_gravity", "must not be negative");
        }
        if !(self.max_slope_angle > 0.0 && self.max_slope_angle <= 90.0) {
            return invalid("max_slope_angle", "must be in (0, 90] degrees");
        }
        if !self.look_sensitivity.is_finite() {
            return invalid("look_sensitivity", "must be finite");
        }
        if !(self.fixed_timestep.is_finite() && self.fixed_timestep > 0.0) {
            return invalid("fixed_timestep", "must be positive");
        }
        if self.ground_layer >= LAYER_COUNT {
            return invalid("ground_layer", "must be below 32");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = MovementConfig::default();
        assert_eq!(config.move_force, 4500.0);
        assert_eq!(config.walk_speed, 20.0);
        assert_eq!(config.jump_force, 550.0);
        assert!((config.jump_cooldown - 0.25).abs() < 1e-6);
        assert_eq!(config.max_slope_angle, 35.0);
        assert_eq!(config.look_sensitivity, 75.0);
        assert!((config.fixed_timestep - 0.02).abs() < 1e-6);
        assert!(config.ground_layers.contains(0));
        assert_eq!(config.ground_layer, 0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_overrides() {
        let config = MovementConfig::from_json_str(r#"{ "walk_speed": 25.0, "ground_layers": 5 }"#).unwrap();
        assert_eq!(config.walk_speed, 25.0);
        assert!(config.ground_layers.contains(0));
        assert!(config.ground_layers.contains(2));
        assert_eq!(config.move_force, 4500.0);
    }

    #[test]
    fn test_json_roundtrip() {
        let config = MovementConfig {
            jump_force: 700.0,
            ..Default::default()
        };
        let json = config.to_json_pretty().unwrap();
        let parsed = MovementConfig::from_json_str(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let result = MovementConfig::from_json_str(r#"{ "walk_speed": 0.0 }"#);
        assert!(matches!(result, Err(ConfigError::Invalid { field: "walk_speed", .. })));

        let config = MovementConfig {
            max_slope_angle: 120.0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid { field: "max_slope_angle", .. })));

        let config = MovementConfig {
            ground_layer: 32,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_malformed_json() {
        let result = MovementConfig::from_json_str("{ not json");
        assert!(matches!(result, Err(ConfigError::JsonError(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = MovementConfig::load(Path::new("/nonexistent/movement.json"));
        match result {
            Err(ConfigError::IoError(_)) => {}
            other => panic!("expected IoError, got {other:?}"),
        }
    }

    #[test]
    fn test_error_display() {
        let err = ConfigError::Invalid {
            field: "walk_speed",
            reason: "must be positive",
        };
        assert_eq!(err.to_string(), "invalid walk_speed: must be positive");
    }
}

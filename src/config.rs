//! Joystick configuration
//!
//! Handles parsing and validation of the per-mount joystick configuration.
//! Configuration is supplied as a struct or as YAML text; the joystick never
//! reads files itself.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::Shape;

/// Configuration failures
#[derive(Debug, Error)]
pub enum ConfigError {
    /// YAML text could not be parsed into a configuration
    #[error("failed to parse joystick config: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// A field holds a value the joystick cannot work with
    #[error("invalid joystick config field '{field}': {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Fixed stick position supplied by the consumer, in normalized units
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize, Serialize)]
pub struct StickPosition {
    pub x: f32,
    pub y: f32,
}

/// Per-mount joystick configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct JoystickConfig {
    /// Width and height of the base in pixels
    #[serde(default = "default_size")]
    pub size: f32,
    /// Width and height of the stick in pixels, 0 means `size / 1.5`
    #[serde(default = "default_stick_size")]
    pub stick_size: f32,
    #[serde(default)]
    pub base_shape: Shape,
    #[serde(default)]
    pub stick_shape: Shape,
    /// Shape bounding the stick movement, independent of `base_shape`
    #[serde(default)]
    pub control_plane_shape: Shape,
    /// Minimum interval between move callbacks in milliseconds
    #[serde(default = "default_throttle_ms")]
    pub throttle_ms: u64,
    /// Distance percentage below which move callbacks are suppressed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_distance: Option<f32>,
    /// Keep the stick at its last position after release
    #[serde(default)]
    pub sticky: bool,
    /// Track the pointer without press-and-hold
    #[serde(default)]
    pub follow_cursor: bool,
    #[serde(default)]
    pub disabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pos: Option<StickPosition>,
}

fn default_size() -> f32 {
    100.0
}

fn default_stick_size() -> f32 {
    50.0
}

fn default_throttle_ms() -> u64 {
    500
}

impl Default for JoystickConfig {
    fn default() -> Self {
        Self {
            size: default_size(),
            stick_size: default_stick_size(),
            base_shape: Shape::default(),
            stick_shape: Shape::default(),
            control_plane_shape: Shape::Circle,
            throttle_ms: default_throttle_ms(),
            min_distance: None,
            sticky: false,
            follow_cursor: false,
            disabled: false,
            pos: None,
        }
    }
}

impl JoystickConfig {
    /// Parse and validate a YAML configuration
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: JoystickConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that sizes and thresholds are usable
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.size.is_finite() || self.size <= 0.0 {
            return Err(invalid("size", format!("must be a positive number, got {}", self.size)));
        }
        if !self.stick_size.is_finite() || self.stick_size < 0.0 {
            return Err(invalid(
                "stick_size",
                format!("must be zero or positive, got {}", self.stick_size),
            ));
        }
        if let Some(min) = self.min_distance {
            if !min.is_finite() || min < 0.0 {
                return Err(invalid(
                    "min_distance",
                    format!("must be zero or positive, got {}", min),
                ));
            }
        }
        if let Some(pos) = self.pos {
            if !pos.x.is_finite() || !pos.y.is_finite() {
                return Err(invalid("pos", format!("must be finite, got ({}, {})", pos.x, pos.y)));
            }
        }
        Ok(())
    }

    /// Radius of the base in pixels
    pub fn radius(&self) -> f32 {
        self.size / 2.0
    }
}

fn invalid(field: &'static str, reason: String) -> ConfigError {
    ConfigError::Invalid { field, reason }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_yaml_uses_defaults() {
        let config = JoystickConfig::from_yaml_str("{}").unwrap();
        assert_eq!(config, JoystickConfig::default());
        assert_eq!(config.size, 100.0);
        assert_eq!(config.stick_size, 50.0);
        assert_eq!(config.throttle_ms, 500);
        assert_eq!(config.control_plane_shape, Shape::Circle);
    }

    #[test]
    fn test_full_yaml() {
        let yaml = r#"
size: 150
stick_size: 60
base_shape: square
stick_shape: circle
control_plane_shape: axisY
throttle_ms: 100
min_distance: 20
sticky: true
follow_cursor: false
disabled: false
pos:
  x: 0.5
  y: -0.25
"#;
        let config = JoystickConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.size, 150.0);
        assert_eq!(config.base_shape, Shape::Square);
        assert_eq!(config.control_plane_shape, Shape::AxisY);
        assert_eq!(config.throttle_ms, 100);
        assert_eq!(config.min_distance, Some(20.0));
        assert!(config.sticky);
        assert_eq!(config.pos, Some(StickPosition { x: 0.5, y: -0.25 }));
    }

    #[test]
    fn test_control_plane_ignores_base_shape() {
        let config = JoystickConfig::from_yaml_str("base_shape: square").unwrap();
        assert_eq!(config.base_shape, Shape::Square);
        assert_eq!(config.control_plane_shape, Shape::Circle);
    }

    #[test]
    fn test_rejects_non_positive_size() {
        let err = JoystickConfig::from_yaml_str("size: 0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "size", .. }));

        let err = JoystickConfig::from_yaml_str("size: -10").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "size", .. }));
    }

    #[test]
    fn test_rejects_negative_min_distance() {
        let err = JoystickConfig::from_yaml_str("min_distance: -1").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "min_distance", .. }));
    }

    #[test]
    fn test_parse_error() {
        let err = JoystickConfig::from_yaml_str("size: [1, 2]").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().starts_with("failed to parse joystick config"));
    }
}

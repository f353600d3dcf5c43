//! Positional outputs for the rendering layer
//!
//! Sizes, corner radii and the stick translate offset. Colors and images are
//! left to the renderer.

use crate::config::JoystickConfig;
use crate::types::{JoystickCoordinates, Shape};

/// Geometry of the base element
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BaseLayout {
    pub size: f32,
    pub corner_radius: f32,
}

/// Geometry of the stick element
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StickLayout {
    pub size: f32,
    pub corner_radius: f32,
    /// Translate offset from the base center in pixels (y down).
    /// `None` keeps the stick centered in normal flow.
    pub offset: Option<(f32, f32)>,
}

fn corner_radius(shape: Shape, size: f32) -> f32 {
    match shape {
        Shape::Circle => size / 2.0,
        Shape::Square | Shape::AxisX | Shape::AxisY => 0.0,
    }
}

pub fn base_layout(config: &JoystickConfig) -> BaseLayout {
    BaseLayout {
        size: config.size,
        corner_radius: corner_radius(config.base_shape, config.size),
    }
}

/// Stick geometry for the committed `coordinates`
///
/// Live coordinates win over the fixed `pos` override.
pub fn stick_layout(config: &JoystickConfig, coordinates: Option<&JoystickCoordinates>) -> StickLayout {
    let size = if config.stick_size > 0.0 {
        config.stick_size
    } else {
        config.size / 1.5
    };

    let offset = match (coordinates, config.pos) {
        (Some(c), _) => Some((c.relative_x, c.relative_y)),
        (None, Some(pos)) => Some(((pos.x * config.size) / 2.0, -(pos.y * config.size) / 2.0)),
        (None, None) => None,
    };

    StickLayout {
        size,
        corner_radius: corner_radius(config.stick_shape, size),
        offset,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StickPosition;
    use crate::types::Direction;

    #[test]
    fn test_default_layout() {
        let config = JoystickConfig::default();
        assert_eq!(base_layout(&config), BaseLayout { size: 100.0, corner_radius: 50.0 });

        let stick = stick_layout(&config, None);
        assert_eq!(stick.size, 50.0);
        assert_eq!(stick.offset, None);
    }

    #[test]
    fn test_zero_stick_size_derives_from_base() {
        let config = JoystickConfig {
            size: 150.0,
            stick_size: 0.0,
            stick_shape: Shape::Square,
            ..JoystickConfig::default()
        };
        let stick = stick_layout(&config, None);
        assert_eq!(stick.size, 100.0);
        assert_eq!(stick.corner_radius, 0.0);
    }

    #[test]
    fn test_pos_override_is_flipped_on_y() {
        let config = JoystickConfig {
            pos: Some(StickPosition { x: 0.5, y: 1.0 }),
            ..JoystickConfig::default()
        };
        assert_eq!(stick_layout(&config, None).offset, Some((25.0, -50.0)));
    }

    #[test]
    fn test_coordinates_win_over_pos() {
        let config = JoystickConfig {
            pos: Some(StickPosition { x: 1.0, y: 1.0 }),
            ..JoystickConfig::default()
        };
        let coords = JoystickCoordinates {
            relative_x: -10.0,
            relative_y: 20.0,
            axis_x: 40.0,
            axis_y: 70.0,
            direction: Direction::Backward,
            distance: 44.7,
        };
        assert_eq!(stick_layout(&config, Some(&coords)).offset, Some((-10.0, 20.0)));
    }
}

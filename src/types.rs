//! Core joystick type definitions
//!
//! Shapes, directions, pointer events and the update events handed to
//! consumer callbacks.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::warn;

/// Geometric constraint of the base, the stick or the control plane
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Shape {
    /// Round plane, the stick is projected back onto the radius
    #[default]
    Circle,
    /// Square plane, each axis clamped independently
    Square,
    /// Horizontal slider, y is always 0
    AxisX,
    /// Vertical slider, x is always 0
    AxisY,
}

impl Shape {
    /// Configuration name of the shape
    pub fn as_str(&self) -> &'static str {
        match self {
            Shape::Circle => "circle",
            Shape::Square => "square",
            Shape::AxisX => "axisX",
            Shape::AxisY => "axisY",
        }
    }

    /// Resolve a shape name, falling back to [`Shape::Circle`] for anything unknown
    pub fn from_name(name: &str) -> Self {
        match name {
            "circle" => Shape::Circle,
            "square" => Shape::Square,
            "axisX" => Shape::AxisX,
            "axisY" => Shape::AxisY,
            other => {
                warn!("Unknown joystick shape '{}', using circle", other);
                Shape::Circle
            }
        }
    }
}

impl std::fmt::Display for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Shape {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Shape {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(Shape::from_name(&name))
    }
}

/// Coarse 4-way direction of the stick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    Forward,
    Right,
    Left,
    Backward,
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Forward => write!(f, "FORWARD"),
            Direction::Right => write!(f, "RIGHT"),
            Direction::Left => write!(f, "LEFT"),
            Direction::Backward => write!(f, "BACKWARD"),
        }
    }
}

/// Identifier of a pointer as reported by the platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PointerId(pub i32);

impl std::fmt::Display for PointerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Pointer event in client (viewport) coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub pointer_id: PointerId,
    pub client_x: f32,
    pub client_y: f32,
}

impl PointerEvent {
    pub fn new(pointer_id: i32, client_x: f32, client_y: f32) -> Self {
        Self {
            pointer_id: PointerId(pointer_id),
            client_x,
            client_y,
        }
    }
}

/// Axis-aligned bounding rectangle of the base element
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }
}

/// Stick position computed from the last accepted move
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct JoystickCoordinates {
    /// Offset of the stick from the base center in pixels (y grows downwards)
    pub relative_x: f32,
    pub relative_y: f32,
    /// Pointer offset from the base's top-left corner in pixels
    pub axis_x: f32,
    pub axis_y: f32,
    pub direction: Direction,
    /// Distance from center as a percentage of the radius (0-100)
    pub distance: f32,
}

impl JoystickCoordinates {
    /// Normalized `(x, y)` in [-1, 1] for a base of `size` pixels, y pointing up
    pub fn normalized(&self, size: f32) -> (f32, f32) {
        (
            (self.relative_x * 2.0) / size,
            -((self.relative_y * 2.0) / size),
        )
    }
}

/// Kind of update delivered to consumer callbacks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    Start,
    Move,
    Stop,
}

/// Update handed to the start/move/stop callbacks
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UpdateEvent {
    #[serde(rename = "type")]
    pub event_type: EventType,
    pub x: Option<f32>,
    pub y: Option<f32>,
    pub direction: Option<Direction>,
    pub distance: Option<f32>,
}

impl UpdateEvent {
    /// Event with every payload field empty
    pub fn empty(event_type: EventType) -> Self {
        Self {
            event_type,
            x: None,
            y: None,
            direction: None,
            distance: None,
        }
    }

    /// Event carrying `coordinates` normalized against a base of `size` pixels
    pub fn from_coordinates(event_type: EventType, coordinates: &JoystickCoordinates, size: f32) -> Self {
        let (x, y) = coordinates.normalized(size);
        Self {
            event_type,
            x: Some(x),
            y: Some(y),
            direction: Some(coordinates.direction),
            distance: Some(coordinates.distance),
        }
    }

    /// Sticky `stop` payload for `coordinates`
    ///
    /// Unlike [`UpdateEvent::from_coordinates`] the y axis is not flipped,
    /// stop keeps screen orientation (y grows downwards).
    pub fn stop_from_coordinates(coordinates: &JoystickCoordinates, size: f32) -> Self {
        Self {
            event_type: EventType::Stop,
            x: Some((coordinates.relative_x * 2.0) / size),
            y: Some((coordinates.relative_y * 2.0) / size),
            direction: Some(coordinates.direction),
            distance: Some(coordinates.distance),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_none() && self.y.is_none() && self.direction.is_none() && self.distance.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_names_round_trip_through_yaml() {
        let shapes: Vec<Shape> = serde_yaml::from_str("[circle, square, axisX, axisY]").unwrap();
        assert_eq!(shapes, vec![Shape::Circle, Shape::Square, Shape::AxisX, Shape::AxisY]);

        let yaml = serde_yaml::to_string(&Shape::AxisY).unwrap();
        assert_eq!(yaml.trim(), "axisY");
    }

    #[test]
    fn test_unknown_shape_falls_back_to_circle() {
        let shape: Shape = serde_yaml::from_str("hexagon").unwrap();
        assert_eq!(shape, Shape::Circle);
    }

    #[test]
    fn test_update_event_json_shape() {
        let coords = JoystickCoordinates {
            relative_x: 25.0,
            relative_y: -50.0,
            axis_x: 75.0,
            axis_y: 0.0,
            direction: Direction::Forward,
            distance: 100.0,
        };
        let event = UpdateEvent::from_coordinates(EventType::Move, &coords, 100.0);
        let json = serde_json::to_value(event).unwrap();

        assert_eq!(json["type"], "move");
        assert_eq!(json["direction"], "FORWARD");
        assert_eq!(json["x"], 0.5);
        assert_eq!(json["y"], 1.0);
        assert_eq!(json["distance"], 100.0);
    }

    #[test]
    fn test_stop_payload_keeps_screen_y() {
        let coords = JoystickCoordinates {
            relative_x: 25.0,
            relative_y: -50.0,
            axis_x: 75.0,
            axis_y: 0.0,
            direction: Direction::Forward,
            distance: 100.0,
        };
        let moved = UpdateEvent::from_coordinates(EventType::Move, &coords, 100.0);
        let stopped = UpdateEvent::stop_from_coordinates(&coords, 100.0);

        assert_eq!(stopped.event_type, EventType::Stop);
        assert_eq!(stopped.x, moved.x);
        assert_eq!(moved.y, Some(1.0));
        assert_eq!(stopped.y, Some(-1.0));
    }

    #[test]
    fn test_empty_event_has_null_payload() {
        let event = UpdateEvent::empty(EventType::Start);
        assert!(event.is_empty());

        let json = serde_json::to_value(event).unwrap();
        assert!(json["x"].is_null());
        assert!(json["direction"].is_null());
    }
}

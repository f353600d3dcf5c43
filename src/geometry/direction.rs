//! Direction classification and distance normalization
//!
//! The angle fed to [`classify_direction`] is `atan2(relative_x, relative_y)`
//! with x as the first argument, so 0 rad points down (towards the player)
//! and ±π points up.

use crate::types::Direction;

/// Upper quadrant boundary (135°)
pub const QUADRANT_TOP_RIGHT: f32 = 2.35619449;
/// Mirror of [`QUADRANT_TOP_RIGHT`] (-135°)
pub const QUADRANT_TOP_LEFT: f32 = -2.35619449;
/// Lower quadrant boundary (45°)
pub const QUADRANT_BOTTOM_RIGHT: f32 = 0.785398163;
/// Mirror of [`QUADRANT_BOTTOM_RIGHT`] (-45°)
pub const QUADRANT_BOTTOM_LEFT: f32 = -0.785398163;

/// Classify an `atan2(relative_x, relative_y)` angle into a direction
///
/// The comparisons run in a fixed order and the first match wins, which makes
/// the boundaries asymmetric: exactly +135° is BACKWARD while exactly -135°
/// is LEFT. Consumers rely on this, keep the order.
pub fn classify_direction(atan2: f32) -> Direction {
    if atan2 > QUADRANT_TOP_RIGHT || atan2 < QUADRANT_TOP_LEFT {
        Direction::Forward
    } else if atan2 < QUADRANT_TOP_RIGHT && atan2 > QUADRANT_BOTTOM_RIGHT {
        Direction::Right
    } else if atan2 < QUADRANT_BOTTOM_LEFT {
        Direction::Left
    } else {
        Direction::Backward
    }
}

/// Hypotenuse of the offset
pub fn distance(x: f32, y: f32) -> f32 {
    x.hypot(y)
}

/// Distance as a percentage of the radius of a `size` pixel base, capped at 100
///
/// There is no lower clamp; a geometric distance is never negative.
pub fn distance_to_percentile(distance: f32, size: f32) -> f32 {
    let percentage = (distance / (size / 2.0)) * 100.0;
    if percentage > 100.0 {
        return 100.0;
    }
    percentage
}

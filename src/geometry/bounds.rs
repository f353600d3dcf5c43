//! Shape-constrained clamping of the stick offset
//!
//! # Shapes
//!
//! - [`Shape::Square`]: per-axis clamp to half the base size
//! - [`Shape::AxisX`] / [`Shape::AxisY`]: per-axis clamp on one axis, the other forced to 0
//! - [`Shape::Circle`]: radial clamp, points outside the radius are projected back onto it
//!
//! Square and axis shapes recompute each axis from the absolute pointer
//! position relative to the base center instead of trusting the incoming
//! relative value, so the clamp is consistent with the captured rectangle.

use crate::types::{Rect, Shape};

/// Everything [`shape_bounds`] needs to clamp one pointer sample
#[derive(Debug, Clone, Copy)]
pub struct BoundsInput {
    pub shape: Shape,
    /// Pointer position in client coordinates
    pub absolute_x: f32,
    pub absolute_y: f32,
    /// Raw offset from the base center
    pub relative_x: f32,
    pub relative_y: f32,
    /// Euclidean length of the raw offset
    pub distance: f32,
    pub radius: f32,
    pub base_size: f32,
    pub parent_rect: Rect,
}

/// Clamp the raw relative offset to the control plane of `input.shape`
///
/// # Returns
/// * `(relative_x, relative_y)` - Offset from the base center, inside the plane
///
/// # Example
/// ```
/// use touch_joystick::geometry::{shape_bounds, BoundsInput};
/// use touch_joystick::types::{Rect, Shape};
///
/// // 80px right of center on a 100px circle is pulled back to the radius
/// let (x, y) = shape_bounds(&BoundsInput {
///     shape: Shape::Circle,
///     absolute_x: 130.0,
///     absolute_y: 50.0,
///     relative_x: 80.0,
///     relative_y: 0.0,
///     distance: 80.0,
///     radius: 50.0,
///     base_size: 100.0,
///     parent_rect: Rect::new(0.0, 0.0, 100.0, 100.0),
/// });
/// assert_eq!((x, y), (50.0, 0.0));
/// ```
pub fn shape_bounds(input: &BoundsInput) -> (f32, f32) {
    let half = input.base_size / 2.0;
    let centered_x = input.absolute_x - input.parent_rect.left - half;
    let centered_y = input.absolute_y - input.parent_rect.top - half;

    match input.shape {
        Shape::Square => (
            within_bounds(centered_x, input.base_size),
            within_bounds(centered_y, input.base_size),
        ),
        Shape::AxisX => (within_bounds(centered_x, input.base_size), 0.0),
        Shape::AxisY => (0.0, within_bounds(centered_y, input.base_size)),
        Shape::Circle => {
            // Only scale outside the radius; a zero distance never gets here
            if input.distance > input.radius {
                let scale = input.radius / input.distance;
                (input.relative_x * scale, input.relative_y * scale)
            } else {
                (input.relative_x, input.relative_y)
            }
        }
    }
}

/// Clamp `value` to `[-base_size / 2, base_size / 2]`
pub fn within_bounds(value: f32, base_size: f32) -> f32 {
    let half = base_size / 2.0;
    if value > half {
        return half;
    }
    if value < -half {
        return -half;
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::f32::consts::PI;

    const SIZE: f32 = 100.0;

    /// Build an input for a base whose top-left corner sits at (10, 20)
    fn sample(shape: Shape, rel_x: f32, rel_y: f32) -> BoundsInput {
        let rect = Rect::new(10.0, 20.0, SIZE, SIZE);
        BoundsInput {
            shape,
            absolute_x: rect.left + SIZE / 2.0 + rel_x,
            absolute_y: rect.top + SIZE / 2.0 + rel_y,
            relative_x: rel_x,
            relative_y: rel_y,
            distance: rel_x.hypot(rel_y),
            radius: SIZE / 2.0,
            base_size: SIZE,
            parent_rect: rect,
        }
    }

    #[test]
    fn test_within_bounds() {
        assert_eq!(within_bounds(0.0, SIZE), 0.0);
        assert_eq!(within_bounds(49.0, SIZE), 49.0);
        assert_eq!(within_bounds(51.0, SIZE), 50.0);
        assert_eq!(within_bounds(-80.0, SIZE), -50.0);
    }

    #[test]
    fn test_square_clamps_each_axis() {
        let (x, y) = shape_bounds(&sample(Shape::Square, 70.0, -20.0));
        assert_eq!(x, 50.0);
        assert_eq!(y, -20.0);

        // Corners stay reachable on a square plane
        let (x, y) = shape_bounds(&sample(Shape::Square, 90.0, 90.0));
        assert_eq!((x, y), (50.0, 50.0));
    }

    #[test]
    fn test_square_uses_absolute_position() {
        // A stale relative value must not leak into the result
        let mut input = sample(Shape::Square, 10.0, 10.0);
        input.relative_x = 999.0;
        input.relative_y = -999.0;
        assert_eq!(shape_bounds(&input), (10.0, 10.0));
    }

    #[test]
    fn test_axis_shapes_zero_the_other_axis() {
        assert_eq!(shape_bounds(&sample(Shape::AxisX, 30.0, 40.0)), (30.0, 0.0));
        assert_eq!(shape_bounds(&sample(Shape::AxisY, 30.0, -70.0)), (0.0, -50.0));
    }

    #[test]
    fn test_circle_projects_onto_radius() {
        let (x, y) = shape_bounds(&sample(Shape::Circle, 60.0, 80.0));
        assert!((x - 30.0).abs() < 1e-4);
        assert!((y - 40.0).abs() < 1e-4);
    }

    #[test]
    fn test_circle_center_is_untouched() {
        assert_eq!(shape_bounds(&sample(Shape::Circle, 0.0, 0.0)), (0.0, 0.0));
    }

    proptest! {
        #[test]
        fn prop_circle_stays_inside_radius(x in -500.0f32..500.0, y in -500.0f32..500.0) {
            let (bx, by) = shape_bounds(&sample(Shape::Circle, x, y));
            prop_assert!(bx.hypot(by) <= SIZE / 2.0 + 1e-3);
        }

        #[test]
        fn prop_circle_is_identity_inside_radius(angle in -PI..PI, len in 0.0f32..50.0) {
            let (x, y) = (len * angle.cos(), len * angle.sin());
            let input = sample(Shape::Circle, x, y);
            prop_assume!(input.distance <= input.radius);
            prop_assert_eq!(shape_bounds(&input), (x, y));
        }

        #[test]
        fn prop_axis_shapes_force_zero(x in -500.0f32..500.0, y in -500.0f32..500.0) {
            let (_, ay) = shape_bounds(&sample(Shape::AxisX, x, y));
            let (ax, _) = shape_bounds(&sample(Shape::AxisY, x, y));
            prop_assert_eq!(ay, 0.0);
            prop_assert_eq!(ax, 0.0);
        }

        #[test]
        fn prop_square_stays_within_half_size(x in -500.0f32..500.0, y in -500.0f32..500.0) {
            let (bx, by) = shape_bounds(&sample(Shape::Square, x, y));
            prop_assert!(bx.abs() <= SIZE / 2.0);
            prop_assert!(by.abs() <= SIZE / 2.0);
        }
    }
}

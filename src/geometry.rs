//! Stick geometry: shape bounding, direction and distance
//!
//! Pure functions shared by the pointer lifecycle controller.

pub mod bounds;
pub mod direction;

pub use bounds::{shape_bounds, within_bounds, BoundsInput};
pub use direction::{classify_direction, distance, distance_to_percentile};

pub mod arc_2d;
pub mod intersect_2d;
pub mod polygon_2d;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// A crossing closer than this (on either axis) to an endpoint of the wall
/// being split is treated as the endpoint itself.
pub const ENDPOINT_TOLERANCE: f64 = 1e-4;

/// Maximum squared distance between a crossing point and the wall being split.
pub const ON_SEGMENT_TOLERANCE_SQ: f64 = 1e-7;

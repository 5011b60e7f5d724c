pub mod line_2d;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Global geometric tolerance for floating-point comparisons.
///
/// A slope whose magnitude falls below this value is treated as flat.
pub const TOLERANCE: f64 = 1e-10;

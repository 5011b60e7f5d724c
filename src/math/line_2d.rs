use super::{Point2, TOLERANCE};

/// Returns the Euclidean distance between two points.
#[must_use]
pub fn distance(a: &Point2, b: &Point2) -> f64 {
    nalgebra::distance(a, b)
}

/// Returns the point halfway between `a` and `b`.
#[must_use]
pub fn midpoint(a: &Point2, b: &Point2) -> Point2 {
    nalgebra::center(a, b)
}

/// Slope of the line through `a` and `b`.
///
/// Returns `f64::INFINITY` when the horizontal difference is below
/// [`TOLERANCE`], so that vertically stacked points yield a vertical line.
#[must_use]
pub fn slope_between(a: &Point2, b: &Point2) -> f64 {
    let dx = b.x - a.x;
    if dx.abs() < TOLERANCE {
        return f64::INFINITY;
    }
    (b.y - a.y) / dx
}

/// Slope of a line perpendicular to one with the given `slope`.
///
/// Flat lines map to vertical (`f64::INFINITY`) and vertical lines map to flat.
#[must_use]
pub fn perpendicular_slope(slope: f64) -> f64 {
    if slope.is_infinite() {
        return 0.0;
    }
    if slope.abs() < TOLERANCE {
        return f64::INFINITY;
    }
    -1.0 / slope
}

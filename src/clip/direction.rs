use crate::error::Result;
use crate::geometry::Point;
use crate::math::TOLERANCE;

/// Orientation of a line, derived solely from its slope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Flat,
    Vertical,
    Upward,
    Downward,
}

impl Direction {
    /// Classifies a slope. Every non-NaN slope maps to exactly one direction.
    #[must_use]
    pub fn from_slope(slope: f64) -> Self {
        if slope.is_infinite() {
            Self::Vertical
        } else if slope.abs() < TOLERANCE {
            Self::Flat
        } else if slope > 0.0 {
            Self::Upward
        } else {
            Self::Downward
        }
    }

    /// Whether the line rises or falls across the plot.
    #[must_use]
    pub fn is_sloped(self) -> bool {
        matches!(self, Self::Upward | Self::Downward)
    }
}

/// Computes `c` in `y = m·x + c`, or `None` for a vertical line.
///
/// # Errors
///
/// Returns [`GeometryError::InvalidPoint`](crate::error::GeometryError::InvalidPoint)
/// if `point` lacks the coordinates the computation needs.
pub fn intercept(direction: Direction, point: &Point, slope: f64) -> Result<Option<f64>> {
    let (x, y) = (point.x()?, point.y()?);
    Ok(match direction {
        Direction::Vertical => None,
        Direction::Flat => Some(y),
        Direction::Upward | Direction::Downward => Some(y - slope * x),
    })
}

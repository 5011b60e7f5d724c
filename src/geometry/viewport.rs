use crate::error::{GeometryError, Result};
use crate::math::TOLERANCE;

use super::Point;

/// Smallest half-extent a plot is given when its points cluster near the origin.
pub const DEFAULT_MINIMUM_PLOT_SIZE: f64 = 1.0;

/// Fraction of the plot half-extent used as the label offset.
const LABEL_OFFSET_FRACTION: f64 = 0.03;

/// An axis-aligned plot rectangle.
///
/// Invariant: `hor_min < hor_max` and `vert_min < vert_max`, all finite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    hor_max: f64,
    hor_min: f64,
    vert_max: f64,
    vert_min: f64,
    offset: f64,
}

impl Viewport {
    /// Creates a viewport from its four bounds and a label offset.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidViewport`] if a bound is not finite or
    /// either axis range is empty.
    pub fn new(
        hor_max: f64,
        hor_min: f64,
        vert_max: f64,
        vert_min: f64,
        offset: f64,
    ) -> Result<Self> {
        if ![hor_max, hor_min, vert_max, vert_min, offset]
            .iter()
            .all(|v| v.is_finite())
        {
            return Err(GeometryError::InvalidViewport("bounds must be finite".to_owned()).into());
        }
        if hor_min >= hor_max {
            return Err(GeometryError::InvalidViewport(format!(
                "hor_min {hor_min} must be below hor_max {hor_max}"
            ))
            .into());
        }
        if vert_min >= vert_max {
            return Err(GeometryError::InvalidViewport(format!(
                "vert_min {vert_min} must be below vert_max {vert_max}"
            ))
            .into());
        }
        Ok(Self {
            hor_max,
            hor_min,
            vert_max,
            vert_min,
            offset,
        })
    }

    /// Symmetric viewport spanning `[-plot_max, plot_max]` on both axes.
    ///
    /// # Errors
    ///
    /// Returns an error if `plot_max` is not a positive finite number.
    pub fn square(plot_max: f64) -> Result<Self> {
        Self::new(
            plot_max,
            -plot_max,
            plot_max,
            -plot_max,
            LABEL_OFFSET_FRACTION * plot_max,
        )
    }

    /// Symmetric viewport large enough to show every point.
    ///
    /// The half-extent is the largest absolute first or second coordinate,
    /// rounded up to a whole number and never below `minimum_size`.
    ///
    /// # Errors
    ///
    /// Returns an error if a point has fewer than two coordinates or
    /// `minimum_size` is not positive.
    pub fn enclosing<'a>(
        points: impl IntoIterator<Item = &'a Point>,
        minimum_size: f64,
    ) -> Result<Self> {
        let mut largest: f64 = 0.0;
        for p in points {
            largest = largest.max(p.x()?.abs()).max(p.y()?.abs());
        }
        let plot_max = if largest < minimum_size {
            minimum_size
        } else {
            largest.ceil()
        };
        Self::square(plot_max)
    }

    #[must_use]
    pub fn hor_max(&self) -> f64 {
        self.hor_max
    }

    #[must_use]
    pub fn hor_min(&self) -> f64 {
        self.hor_min
    }

    #[must_use]
    pub fn vert_max(&self) -> f64 {
        self.vert_max
    }

    #[must_use]
    pub fn vert_min(&self) -> f64 {
        self.vert_min
    }

    /// Offset applied when placing labels next to plotted items.
    #[must_use]
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Comparison tolerance scaled to the magnitude of the bounds.
    #[must_use]
    pub fn tolerance(&self) -> f64 {
        let scale = [self.hor_max, self.hor_min, self.vert_max, self.vert_min]
            .iter()
            .fold(1.0_f64, |acc, v| acc.max(v.abs()));
        TOLERANCE * scale
    }

    /// Whether `(x, y)` lies inside or on the rectangle, within tolerance.
    #[must_use]
    pub fn contains(&self, x: f64, y: f64) -> bool {
        let tol = self.tolerance();
        x >= self.hor_min - tol
            && x <= self.hor_max + tol
            && y >= self.vert_min - tol
            && y <= self.vert_max + tol
    }

    /// Whether `(x, y)` lies on one of the four edges, within tolerance.
    #[must_use]
    pub fn on_boundary(&self, x: f64, y: f64) -> bool {
        let tol = self.tolerance();
        let near = |value: f64, bound: f64| (value - bound).abs() <= tol;
        let on_vertical_edge = near(x, self.hor_min) || near(x, self.hor_max);
        let on_horizontal_edge = near(y, self.vert_min) || near(y, self.vert_max);
        self.contains(x, y) && (on_vertical_edge || on_horizontal_edge)
    }
}

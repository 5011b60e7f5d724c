use crate::geometry::Viewport;
use crate::math::TOLERANCE;

use super::Direction;

/// Where an unbounded line meets the four lines extending the viewport edges.
///
/// Equality treats two NaN projections as equal, so the extremes of a
/// vertical line compare equal to themselves.
#[derive(Debug, Clone, Copy)]
pub struct TheoreticalExtremes {
    pub y_at_hor_max: f64,
    pub y_at_hor_min: f64,
    pub x_at_vert_max: f64,
    pub x_at_vert_min: f64,
}

impl TheoreticalExtremes {
    /// Projects the line onto each viewport edge.
    ///
    /// For a vertical line `intercept` is ignored, both `x_at_vert_*` equal
    /// `x` and the `y_at_hor_*` values are NaN. A line too flat to reach a
    /// finite `x` at another height takes the horizontal bounds instead.
    #[must_use]
    pub fn compute(slope: f64, intercept: Option<f64>, x: f64, viewport: &Viewport) -> Self {
        let Some(c) = intercept.filter(|_| slope.is_finite()) else {
            return Self {
                y_at_hor_max: f64::NAN,
                y_at_hor_min: f64::NAN,
                x_at_vert_max: x,
                x_at_vert_min: x,
            };
        };

        let y_at_hor_max = slope * viewport.hor_max() + c;
        let y_at_hor_min = slope * viewport.hor_min() + c;

        let (x_at_vert_max, x_at_vert_min) = if slope.abs() < TOLERANCE {
            (viewport.hor_max(), viewport.hor_min())
        } else {
            (
                (viewport.vert_max() - c) / slope,
                (viewport.vert_min() - c) / slope,
            )
        };

        Self {
            y_at_hor_max,
            y_at_hor_min,
            x_at_vert_max,
            x_at_vert_min,
        }
    }

    /// Snaps a flat line's overshooting projections back onto the boundary.
    ///
    /// Other directions are returned unchanged.
    #[must_use]
    pub fn clamped_for(self, direction: Direction, viewport: &Viewport) -> Self {
        if direction == Direction::Flat {
            self.clamped(viewport)
        } else {
            self
        }
    }

    /// Clamps every projection into the viewport bounds. NaN stays NaN.
    ///
    /// Projections of edges that passed the tolerance-widened edge tests
    /// move by at most the viewport tolerance.
    #[must_use]
    pub fn clamped(self, viewport: &Viewport) -> Self {
        let vert = |v: f64| v.clamp(viewport.vert_min(), viewport.vert_max());
        let hor = |v: f64| v.clamp(viewport.hor_min(), viewport.hor_max());
        Self {
            y_at_hor_max: vert(self.y_at_hor_max),
            y_at_hor_min: vert(self.y_at_hor_min),
            x_at_vert_max: hor(self.x_at_vert_max),
            x_at_vert_min: hor(self.x_at_vert_min),
        }
    }
}

impl PartialEq for TheoreticalExtremes {
    #[allow(clippy::float_cmp)]
    fn eq(&self, other: &Self) -> bool {
        let same = |a: f64, b: f64| a == b || (a.is_nan() && b.is_nan());
        same(self.y_at_hor_max, other.y_at_hor_max)
            && same(self.y_at_hor_min, other.y_at_hor_min)
            && same(self.x_at_vert_max, other.x_at_vert_max)
            && same(self.x_at_vert_min, other.x_at_vert_min)
    }
}

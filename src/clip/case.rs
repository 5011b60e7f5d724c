use std::fmt;

use crate::error::{ClipError, Result};
use crate::geometry::Viewport;
use crate::math::Point2;

use super::{Direction, Sides, TheoreticalExtremes};

/// Which pair of viewport edges a clipped line runs between.
///
/// Upward cases end in `a`, downward cases in `b`; `0a` and `0b` are flat
/// and vertical lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Case {
    /// Flat: left edge to right edge.
    ZeroA,
    /// Vertical: top edge to bottom edge.
    ZeroB,
    /// Upward, left to right.
    Ia,
    /// Upward, left to top.
    IIa,
    /// Upward, bottom to right.
    IIIa,
    /// Upward, bottom to top.
    IVa,
    /// Downward, left to right.
    Ib,
    /// Downward, left to bottom.
    IIb,
    /// Downward, top to right.
    IIIb,
    /// Downward, top to bottom.
    IVb,
}

impl Case {
    pub const ALL: [Self; 10] = [
        Self::ZeroA,
        Self::ZeroB,
        Self::Ia,
        Self::IIa,
        Self::IIIa,
        Self::IVa,
        Self::Ib,
        Self::IIb,
        Self::IIIb,
        Self::IVb,
    ];

    /// Looks up the case for a direction and its resolved sides.
    ///
    /// # Errors
    ///
    /// Returns [`ClipError::LineCase`] for a combination outside the table.
    pub fn resolve(direction: Direction, sides: Sides) -> Result<Self> {
        let Sides {
            left,
            right,
            top,
            bottom,
        } = sides;
        let case = match (direction, left, right, top, bottom) {
            (Direction::Flat, ..) => Self::ZeroA,
            (Direction::Vertical, ..) => Self::ZeroB,
            (Direction::Upward, true, true, false, false) => Self::Ia,
            (Direction::Upward, true, false, true, false) => Self::IIa,
            (Direction::Upward, false, true, false, true) => Self::IIIa,
            (Direction::Upward, false, false, true, true) => Self::IVa,
            (Direction::Downward, true, true, false, false) => Self::Ib,
            (Direction::Downward, true, false, false, true) => Self::IIb,
            (Direction::Downward, false, true, true, false) => Self::IIIb,
            (Direction::Downward, false, false, true, true) => Self::IVb,
            _ => {
                return Err(ClipError::LineCase {
                    direction,
                    left,
                    right,
                    top,
                    bottom,
                }
                .into())
            }
        };
        Ok(case)
    }

    /// Short code used in plot annotations.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::ZeroA => "0a",
            Self::ZeroB => "0b",
            Self::Ia => "Ia",
            Self::IIa => "IIa",
            Self::IIIa => "IIIa",
            Self::IVa => "IVa",
            Self::Ib => "Ib",
            Self::IIb => "IIb",
            Self::IIIb => "IIIb",
            Self::IVb => "IVb",
        }
    }

    /// Start and end of the visible segment.
    ///
    /// `x` and `y` are the point the line was defined through; only flat
    /// (`y`) and vertical (`x`) lines read them.
    #[must_use]
    pub fn endpoints(
        self,
        x: f64,
        y: f64,
        e: &TheoreticalExtremes,
        vp: &Viewport,
    ) -> (Point2, Point2) {
        let left = Point2::new(vp.hor_min(), e.y_at_hor_min);
        let right = Point2::new(vp.hor_max(), e.y_at_hor_max);
        let top = Point2::new(e.x_at_vert_max, vp.vert_max());
        let bottom = Point2::new(e.x_at_vert_min, vp.vert_min());

        match self {
            Self::ZeroA => (Point2::new(vp.hor_min(), y), Point2::new(vp.hor_max(), y)),
            Self::ZeroB => (Point2::new(x, vp.vert_max()), Point2::new(x, vp.vert_min())),
            Self::Ia | Self::Ib => (left, right),
            Self::IIa => (left, top),
            Self::IIIa => (bottom, right),
            Self::IVa => (bottom, top),
            Self::IIb => (left, bottom),
            Self::IIIb => (top, right),
            Self::IVb => (top, bottom),
        }
    }
}

impl fmt::Display for Case {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

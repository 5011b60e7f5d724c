//! Clipping of unbounded lines against a plot viewport.
//!
//! The pipeline runs in one pass:
//!
//! 1. classify the slope into a [`Direction`] and find the intercept,
//! 2. project the line onto the four edges ([`TheoreticalExtremes`]),
//! 3. flag the edges it crosses ([`Sides`]) and reduce them to one entry
//!    and one exit, resolving corner hits with a [`TieBreakPolicy`],
//! 4. look up the [`Case`] and read the endpoints off its formula, with the
//!    projections clamped into the viewport.

mod case;
mod direction;
mod extremes;
mod sides;
mod tie_break;

pub use case::Case;
pub use direction::{intercept, Direction};
pub use extremes::TheoreticalExtremes;
pub use sides::Sides;
pub use tie_break::{
    Alternating, Corner, CornerChoice, PreferLeftRight, PreferTopBottom, TieBreakPolicy,
};

use tracing::trace;

use crate::error::{ClipError, Result};
use crate::geometry::{LineSpec, LineStyle, Viewport};
use crate::math::{line_2d, Point2};

/// Position of a point relative to a clipped line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineSide {
    Above,
    Below,
    Left,
    Right,
    On,
}

/// The visible part of a line, with the classification that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct ClippedLine {
    through: Point2,
    slope: f64,
    direction: Direction,
    intercept: Option<f64>,
    theoretical: TheoreticalExtremes,
    potential: TheoreticalExtremes,
    goes_through: Sides,
    intersects: Sides,
    case: Case,
    start: Point2,
    end: Point2,
    style: LineStyle,
    tolerance: f64,
}

/// Clips `line` to `viewport`, consulting `policy` at corners.
///
/// # Errors
///
/// - [`GeometryError::InvalidPoint`](crate::error::GeometryError::InvalidPoint)
///   if the line's point lacks a first or second coordinate.
/// - [`ClipError::OutsideViewport`] if a sloped line misses the viewport.
/// - [`ClipError::LineCase`] if the resolved sides match no case. Edge
///   resolution always leaves a valid pair, so this signals a broken
///   invariant.
pub fn clip_line<P>(line: &LineSpec, viewport: &Viewport, policy: &P) -> Result<ClippedLine>
where
    P: TieBreakPolicy + ?Sized,
{
    let slope = line.slope();
    let direction = Direction::from_slope(slope);
    let intercept = direction::intercept(direction, line.point(), slope)?;
    let through = line.point().to_point2()?;

    let theoretical = TheoreticalExtremes::compute(slope, intercept, through.x, viewport);
    let potential = theoretical.clamped_for(direction, viewport);
    trace!(?direction, ?intercept, ?potential, "projected line onto viewport edges");

    let goes_through = Sides::edge_tests(direction, &potential, viewport);
    if direction.is_sloped() && goes_through.count() == 0 {
        return Err(ClipError::OutsideViewport { slope }.into());
    }
    let intersects = goes_through.resolve_corners(direction, policy);
    trace!(?goes_through, ?intersects, "resolved crossed edges");

    let case = Case::resolve(direction, intersects)?;
    let (start, end) = case.endpoints(through.x, through.y, &potential.clamped(viewport), viewport);

    Ok(ClippedLine {
        through,
        slope,
        direction,
        intercept,
        theoretical,
        potential,
        goes_through,
        intersects,
        case,
        start,
        end,
        style: line.style().clone(),
        tolerance: viewport.tolerance(),
    })
}

/// Clips `line` with the [`PreferLeftRight`] corner policy.
///
/// # Errors
///
/// See [`clip_line`].
pub fn clip_line_default(line: &LineSpec, viewport: &Viewport) -> Result<ClippedLine> {
    clip_line(line, viewport, &PreferLeftRight)
}

impl ClippedLine {
    /// The point the line was defined through.
    #[must_use]
    pub fn through(&self) -> Point2 {
        self.through
    }

    #[must_use]
    pub fn slope(&self) -> f64 {
        self.slope
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// `c` in `y = m·x + c`; `None` for vertical lines.
    #[must_use]
    pub fn intercept(&self) -> Option<f64> {
        self.intercept
    }

    /// Edge projections before the flat-line clamp.
    #[must_use]
    pub fn theoretical_extremes(&self) -> &TheoreticalExtremes {
        &self.theoretical
    }

    /// Edge projections the edge tests ran against.
    #[must_use]
    pub fn potential_extremes(&self) -> &TheoreticalExtremes {
        &self.potential
    }

    /// Edges flagged by the edge tests, before corner resolution.
    #[must_use]
    pub fn goes_through(&self) -> Sides {
        self.goes_through
    }

    /// Edges the line is considered to cross.
    #[must_use]
    pub fn sides(&self) -> Sides {
        self.intersects
    }

    #[must_use]
    pub fn case(&self) -> Case {
        self.case
    }

    #[must_use]
    pub fn start(&self) -> Point2 {
        self.start
    }

    #[must_use]
    pub fn end(&self) -> Point2 {
        self.end
    }

    /// Start and end as a pair, ready for a renderer.
    #[must_use]
    pub fn segment(&self) -> (Point2, Point2) {
        (self.start, self.end)
    }

    #[must_use]
    pub fn style(&self) -> &LineStyle {
        &self.style
    }

    /// Length of the visible segment.
    #[must_use]
    pub fn visible_length(&self) -> f64 {
        line_2d::distance(&self.start, &self.end)
    }

    /// Height of the line at `x`; `None` for vertical lines.
    #[must_use]
    pub fn y_at(&self, x: f64) -> Option<f64> {
        match self.direction {
            Direction::Vertical => None,
            Direction::Flat => self.intercept,
            Direction::Upward | Direction::Downward => self.intercept.map(|c| self.slope * x + c),
        }
    }

    /// Horizontal position of the line at `y`; `None` for flat lines.
    #[must_use]
    pub fn x_at(&self, y: f64) -> Option<f64> {
        match self.direction {
            Direction::Flat => None,
            Direction::Vertical => Some(self.through.x),
            Direction::Upward | Direction::Downward => self.intercept.map(|c| (y - c) / self.slope),
        }
    }

    /// Where `point` lies relative to the unbounded line.
    ///
    /// Vertical lines report [`LineSide::Left`] or [`LineSide::Right`];
    /// all others report [`LineSide::Above`] or [`LineSide::Below`].
    #[must_use]
    pub fn relation(&self, point: &Point2) -> LineSide {
        match self.y_at(point.x) {
            None => {
                let dx = point.x - self.through.x;
                if dx.abs() <= self.tolerance {
                    LineSide::On
                } else if dx < 0.0 {
                    LineSide::Left
                } else {
                    LineSide::Right
                }
            }
            Some(line_y) => {
                let dy = point.y - line_y;
                if dy.abs() <= self.tolerance {
                    LineSide::On
                } else if dy > 0.0 {
                    LineSide::Above
                } else {
                    LineSide::Below
                }
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::error::{GeometryError, PlotclipError};
    use crate::geometry::{Dash, Point};

    fn viewport() -> Viewport {
        Viewport::square(10.0).unwrap()
    }

    fn clip(x: f64, y: f64, slope: f64) -> ClippedLine {
        let line = LineSpec::new(Point::xy(x, y), slope).unwrap();
        clip_line_default(&line, &viewport()).unwrap()
    }

    #[test]
    fn diagonal_runs_corner_to_corner() {
        let c = clip(0.0, 0.0, 1.0);
        assert_eq!(c.direction(), Direction::Upward);
        assert_eq!(c.case(), Case::Ia);
        assert_relative_eq!(c.start(), Point2::new(-10.0, -10.0));
        assert_relative_eq!(c.end(), Point2::new(10.0, 10.0));
        assert_eq!(c.goes_through().count(), 4);
    }

    #[test]
    fn flat_line_spans_width() {
        let c = clip(2.0, 5.0, 0.0);
        assert_eq!(c.direction(), Direction::Flat);
        assert_eq!(c.case(), Case::ZeroA);
        assert_relative_eq!(c.start(), Point2::new(-10.0, 5.0));
        assert_relative_eq!(c.end(), Point2::new(10.0, 5.0));
    }

    #[test]
    fn vertical_line_spans_height() {
        let c = clip(3.0, 5.0, f64::INFINITY);
        assert_eq!(c.direction(), Direction::Vertical);
        assert_eq!(c.case(), Case::ZeroB);
        assert_relative_eq!(c.start(), Point2::new(3.0, 10.0));
        assert_relative_eq!(c.end(), Point2::new(3.0, -10.0));
        assert!(c.intercept().is_none());
    }

    #[test]
    fn downward_line_top_to_right() {
        let c = clip(0.0, 5.0, -1.0);
        assert_relative_eq!(c.intercept().unwrap(), 5.0);
        assert_eq!(c.sides(), Sides::new(false, true, true, false));
        assert_eq!(c.case(), Case::IIIb);
        assert_relative_eq!(c.start(), Point2::new(-5.0, 10.0));
        assert_relative_eq!(c.end(), Point2::new(10.0, -5.0));
    }

    #[test]
    fn upward_cases_by_entry_and_exit() {
        assert_eq!(clip(0.0, 5.0, 1.0).case(), Case::IIa);
        assert_eq!(clip(0.0, -5.0, 1.0).case(), Case::IIIa);
        assert_eq!(clip(0.0, 0.0, 4.0).case(), Case::IVa);
        assert_eq!(clip(0.0, 0.0, 0.25).case(), Case::Ia);
    }

    #[test]
    fn downward_cases_by_entry_and_exit() {
        assert_eq!(clip(0.0, 0.0, -0.25).case(), Case::Ib);
        assert_eq!(clip(0.0, -5.0, -1.0).case(), Case::IIb);
        assert_eq!(clip(0.0, 0.0, -4.0).case(), Case::IVb);
    }

    #[test]
    fn line_outside_viewport_is_reported() {
        let line = LineSpec::new(Point::xy(0.0, 50.0), 1.0).unwrap();
        let err = clip_line_default(&line, &viewport()).unwrap_err();
        assert!(matches!(
            err,
            PlotclipError::Clip(ClipError::OutsideViewport { .. })
        ));
    }

    #[test]
    fn one_dimensional_point_is_invalid() {
        let line = LineSpec::new(Point::new(&[1.0]), 1.0).unwrap();
        let err = clip_line_default(&line, &viewport()).unwrap_err();
        assert!(matches!(
            err,
            PlotclipError::Geometry(GeometryError::InvalidPoint { requested: 2, .. })
        ));
    }

    #[test]
    fn style_is_carried_through() {
        let style = LineStyle {
            color: "red".to_owned(),
            thickness: 3,
            dash: Dash::Dashed,
        };
        let line = LineSpec::with_style(Point::xy(0.0, 0.0), 2.0, style.clone()).unwrap();
        let c = clip_line_default(&line, &viewport()).unwrap();
        assert_eq!(c.style(), &style);
    }

    #[test]
    fn relation_above_and_below() {
        let c = clip(0.0, 0.0, 1.0);
        assert_eq!(c.relation(&Point2::new(0.0, 3.0)), LineSide::Above);
        assert_eq!(c.relation(&Point2::new(2.0, -3.0)), LineSide::Below);
        assert_eq!(c.relation(&Point2::new(4.0, 4.0)), LineSide::On);
    }

    #[test]
    fn relation_left_and_right_of_vertical() {
        let c = clip(3.0, 0.0, f64::NEG_INFINITY);
        assert_eq!(c.relation(&Point2::new(1.0, 9.0)), LineSide::Left);
        assert_eq!(c.relation(&Point2::new(5.0, -9.0)), LineSide::Right);
        assert_eq!(c.relation(&Point2::new(3.0, 2.0)), LineSide::On);
    }

    #[test]
    fn x_and_y_lookups() {
        let c = clip(0.0, 5.0, -1.0);
        assert_relative_eq!(c.y_at(2.0).unwrap(), 3.0);
        assert_relative_eq!(c.x_at(0.0).unwrap(), 5.0);
        assert!(clip(0.0, 1.0, 0.0).x_at(1.0).is_none());
        assert!(clip(1.0, 0.0, f64::INFINITY).y_at(1.0).is_none());
    }

    #[test]
    fn visible_length_of_diagonal() {
        let c = clip(0.0, 0.0, 1.0);
        assert_relative_eq!(c.visible_length(), 20.0 * std::f64::consts::SQRT_2, epsilon = 1e-9);
    }

    #[test]
    fn steep_line_just_outside_corner_resolves() {
        let line = LineSpec::new(Point::xy(10.0 + 5e-10, 10.0), 1000.0).unwrap();
        let vp = viewport();
        let lr = clip_line(&line, &vp, &PreferLeftRight).unwrap();
        assert_eq!(lr.goes_through(), Sides::new(false, true, true, true));
        assert_eq!(lr.case(), Case::IIIa);
        assert_relative_eq!(lr.end().y, 9.999_999_5, epsilon = 1e-9);
        let tb = clip_line(&line, &vp, &PreferTopBottom).unwrap();
        assert_eq!(tb.case(), Case::IVa);
        assert_relative_eq!(tb.end(), Point2::new(10.0, 10.0));
    }

    #[test]
    fn lone_top_edge_becomes_zero_length_at_corner() {
        let line = LineSpec::new(Point::xy(-10.0 - 5e-10, 10.0), 1000.0).unwrap();
        let c = clip_line_default(&line, &viewport()).unwrap();
        assert_eq!(c.goes_through(), Sides::new(false, false, true, false));
        assert_eq!(c.case(), Case::IIa);
        assert_relative_eq!(c.start(), Point2::new(-10.0, 10.0));
        assert_relative_eq!(c.end(), Point2::new(-10.0, 10.0));
        assert_relative_eq!(c.visible_length(), 0.0);
    }

    #[test]
    fn shallow_line_through_corner_resolves() {
        let c = clip(10.0, 10.0, 1.37e-10);
        assert_eq!(c.direction(), Direction::Upward);
        assert_eq!(c.case(), Case::Ia);
        assert_relative_eq!(c.end(), Point2::new(10.0, 10.0), epsilon = 1e-9);
        assert_relative_eq!(c.start().x, -10.0);
    }

    #[test]
    fn vertical_line_equals_itself() {
        let c = clip(3.0, 5.0, f64::INFINITY);
        assert_eq!(c, c.clone());
        assert_ne!(c, clip(4.0, 5.0, f64::INFINITY));
    }
}

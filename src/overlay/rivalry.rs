use crate::clip::{clip_line, ClippedLine, TieBreakPolicy};
use crate::error::Result;
use crate::geometry::{LineSpec, LineStyle, Point, Viewport};
use crate::math::{line_2d, Point2, Vector2};

use super::Connector;

/// Per-dimension midpoints separating two reference points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dividers {
    pub first: f64,
    pub second: f64,
}

/// Overlay lines describing the contest between two reference points.
///
/// The bisector is perpendicular to the connector through its midpoint.
/// `west` and `east` run parallel to it on either side, bounding the
/// battleground band.
#[derive(Debug, Clone, PartialEq)]
pub struct RivalryLines {
    pub connector: Connector,
    pub bisector: ClippedLine,
    pub west: ClippedLine,
    pub east: ClippedLine,
    pub dividers: Dividers,
}

impl RivalryLines {
    /// Builds the overlay for reference points `a` and `b`.
    ///
    /// `battleground_percent` is the share of the connector covered by the
    /// band between `west` and `east`, centred on the midpoint.
    ///
    /// # Errors
    ///
    /// Returns an error if a reference point lacks two coordinates or any
    /// of the lines cannot be clipped to `viewport`.
    pub fn build<P>(
        a: &Point,
        b: &Point,
        battleground_percent: f64,
        viewport: &Viewport,
        policy: &P,
    ) -> Result<Self>
    where
        P: TieBreakPolicy + ?Sized,
    {
        let (pa, pb) = (a.to_point2()?, b.to_point2()?);
        let mid = line_2d::midpoint(&pa, &pb);
        let bisector_slope = line_2d::perpendicular_slope(line_2d::slope_between(&pa, &pb));

        let connector = Connector::new(a, b, LineStyle::default(), viewport, policy)?;
        let bisector = clip_through(mid, bisector_slope, viewport, policy)?;

        let (west_cross, east_cross) = band_crossings(&pa, &pb, &mid, battleground_percent / 2.0);
        let west = clip_through(west_cross, bisector_slope, viewport, policy)?;
        let east = clip_through(east_cross, bisector_slope, viewport, policy)?;

        Ok(Self {
            connector,
            bisector,
            west,
            east,
            dividers: Dividers {
                first: mid.x,
                second: mid.y,
            },
        })
    }
}

/// Points on the connector `threshold` of its length either side of `mid`,
/// ordered so the first has the smaller `x`.
fn band_crossings(a: &Point2, b: &Point2, mid: &Point2, threshold: f64) -> (Point2, Point2) {
    let shift: Vector2 = (b - a) * threshold;
    let (p1, p2) = (*mid - shift, *mid + shift);
    if p1.x < p2.x {
        (p1, p2)
    } else {
        (p2, p1)
    }
}

fn clip_through<P>(
    point: Point2,
    slope: f64,
    viewport: &Viewport,
    policy: &P,
) -> Result<ClippedLine>
where
    P: TieBreakPolicy + ?Sized,
{
    clip_line(&LineSpec::new(Point::from(point), slope)?, viewport, policy)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::clip::{Case, Direction, LineSide, PreferLeftRight};

    fn viewport() -> Viewport {
        Viewport::square(10.0).unwrap()
    }

    #[test]
    fn horizontal_rivals_get_vertical_bisector() {
        let lines = RivalryLines::build(
            &Point::xy(-4.0, 1.0),
            &Point::xy(4.0, 1.0),
            0.5,
            &viewport(),
            &PreferLeftRight,
        )
        .unwrap();
        assert_eq!(lines.connector.line().direction(), Direction::Flat);
        assert_eq!(lines.bisector.case(), Case::ZeroB);
        assert_relative_eq!(lines.bisector.start().x, 0.0);
        // Band covers a quarter of the connector either side of the midpoint.
        assert_relative_eq!(lines.west.start().x, -2.0);
        assert_relative_eq!(lines.east.start().x, 2.0);
        assert_relative_eq!(lines.connector.length(), 8.0);
    }

    #[test]
    fn diagonal_rivals_get_downward_bisector() {
        let lines = RivalryLines::build(
            &Point::xy(-2.0, -2.0),
            &Point::xy(4.0, 4.0),
            0.2,
            &viewport(),
            &PreferLeftRight,
        )
        .unwrap();
        assert_eq!(lines.bisector.direction(), Direction::Downward);
        assert_relative_eq!(lines.bisector.slope(), -1.0);
        assert_relative_eq!(lines.dividers.first, 1.0);
        assert_relative_eq!(lines.dividers.second, 1.0);
        assert_eq!(lines.bisector.relation(&Point2::new(4.0, 4.0)), LineSide::Above);
        assert_eq!(lines.bisector.relation(&Point2::new(-2.0, -2.0)), LineSide::Below);
        // West sits on the side of the smaller first coordinate.
        assert!(lines.west.intercept().unwrap() < lines.east.intercept().unwrap());
    }

    #[test]
    fn band_crossings_order_by_x() {
        let a = Point2::new(4.0, 0.0);
        let b = Point2::new(0.0, 0.0);
        let mid = line_2d::midpoint(&a, &b);
        let (west, east) = band_crossings(&a, &b, &mid, 0.25);
        assert_relative_eq!(west.x, 1.0);
        assert_relative_eq!(east.x, 3.0);
    }

    #[test]
    fn vertical_rivals_get_flat_bisector() {
        let lines = RivalryLines::build(
            &Point::xy(1.0, -6.0),
            &Point::xy(1.0, 2.0),
            0.5,
            &viewport(),
            &PreferLeftRight,
        )
        .unwrap();
        assert_eq!(lines.bisector.direction(), Direction::Flat);
        assert_relative_eq!(lines.bisector.start().y, -2.0);
    }
}

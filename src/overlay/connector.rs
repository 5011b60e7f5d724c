use crate::clip::{clip_line, ClippedLine, TieBreakPolicy};
use crate::error::Result;
use crate::geometry::{LineSpec, LineStyle, Point, Viewport};
use crate::math::line_2d;

/// The line joining two reference points, clipped to the plot.
#[derive(Debug, Clone, PartialEq)]
pub struct Connector {
    line: ClippedLine,
    length: f64,
}

impl Connector {
    /// Builds the connector through `a` and `b`, passing through their midpoint.
    ///
    /// # Errors
    ///
    /// Returns an error if either point lacks two coordinates or clipping fails.
    pub fn new<P>(
        a: &Point,
        b: &Point,
        style: LineStyle,
        viewport: &Viewport,
        policy: &P,
    ) -> Result<Self>
    where
        P: TieBreakPolicy + ?Sized,
    {
        let (pa, pb) = (a.to_point2()?, b.to_point2()?);
        let slope = line_2d::slope_between(&pa, &pb);
        let mid = Point::from(line_2d::midpoint(&pa, &pb));
        let line = clip_line(&LineSpec::with_style(mid, slope, style)?, viewport, policy)?;
        Ok(Self {
            line,
            length: line_2d::distance(&pa, &pb),
        })
    }

    /// The clipped line.
    #[must_use]
    pub fn line(&self) -> &ClippedLine {
        &self.line
    }

    /// Distance between the two reference points.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.length
    }
}

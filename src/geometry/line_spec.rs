use crate::error::{GeometryError, Result};

use super::Point;

/// Dash pattern of a drawn line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Dash {
    #[default]
    Solid,
    Dashed,
    Dotted,
}

/// Display attributes carried through clipping unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct LineStyle {
    pub color: String,
    pub thickness: u32,
    pub dash: Dash,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            color: "black".to_owned(),
            thickness: 1,
            dash: Dash::Solid,
        }
    }
}

/// An unbounded line given by one point on it and its slope.
///
/// The slope may be zero, any finite value, or `±∞` for a vertical line.
#[derive(Debug, Clone, PartialEq)]
pub struct LineSpec {
    point: Point,
    slope: f64,
    style: LineStyle,
}

impl LineSpec {
    /// Creates a line with the default style.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidSlope`] if `slope` is NaN.
    pub fn new(point: Point, slope: f64) -> Result<Self> {
        Self::with_style(point, slope, LineStyle::default())
    }

    /// Creates a line with explicit display attributes.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidSlope`] if `slope` is NaN.
    pub fn with_style(point: Point, slope: f64, style: LineStyle) -> Result<Self> {
        if slope.is_nan() {
            return Err(GeometryError::InvalidSlope(slope).into());
        }
        Ok(Self { point, slope, style })
    }

    #[must_use]
    pub fn point(&self) -> &Point {
        &self.point
    }

    #[must_use]
    pub fn slope(&self) -> f64 {
        self.slope
    }

    #[must_use]
    pub fn style(&self) -> &LineStyle {
        &self.style
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn nan_slope_is_rejected() {
        assert!(LineSpec::new(Point::xy(0.0, 0.0), f64::NAN).is_err());
    }

    #[test]
    fn infinite_slopes_are_accepted() {
        assert!(LineSpec::new(Point::xy(0.0, 0.0), f64::INFINITY).is_ok());
        assert!(LineSpec::new(Point::xy(0.0, 0.0), f64::NEG_INFINITY).is_ok());
    }

    #[test]
    fn style_defaults() {
        let line = LineSpec::new(Point::xy(1.0, 1.0), 2.0).unwrap();
        assert_eq!(line.style().color, "black");
        assert_eq!(line.style().thickness, 1);
        assert_eq!(line.style().dash, Dash::Solid);
    }
}

use thiserror::Error;

use crate::clip::Direction;

/// Top-level error type for the plotclip crate.
#[derive(Debug, Error)]
pub enum PlotclipError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Clip(#[from] ClipError),
}

/// Errors raised while validating input geometry.
#[derive(Debug, Error, PartialEq)]
pub enum GeometryError {
    #[error("point has {available} coordinate(s) but coordinate {requested} was needed")]
    InvalidPoint { requested: usize, available: usize },

    #[error("slope must be a number, got {0}")]
    InvalidSlope(f64),

    #[error("invalid viewport: {0}")]
    InvalidViewport(String),
}

/// Errors raised by the clipping pipeline.
#[derive(Debug, Error, PartialEq)]
pub enum ClipError {
    /// The edge-test stage produced a side combination with no case.
    ///
    /// Reaching this indicates a defect upstream of the case table.
    #[error(
        "no line case for direction {direction:?} with sides \
         left={left} right={right} top={top} bottom={bottom}"
    )]
    LineCase {
        direction: Direction,
        left: bool,
        right: bool,
        top: bool,
        bottom: bool,
    },

    #[error("line with slope {slope} misses the viewport")]
    OutsideViewport { slope: f64 },
}

/// Convenience type alias for results using [`PlotclipError`].
pub type Result<T> = std::result::Result<T, PlotclipError>;

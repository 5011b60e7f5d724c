pub mod clip;
pub mod error;
pub mod geometry;
pub mod math;
pub mod overlay;

pub use clip::{clip_line, clip_line_default, Case, ClippedLine, Direction, TieBreakPolicy};
pub use error::{PlotclipError, Result};

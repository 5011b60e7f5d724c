pub mod line_spec;
pub mod point;
pub mod viewport;

pub use line_spec::{Dash, LineSpec, LineStyle};
pub use point::{Coordinate, Point};
pub use viewport::{Viewport, DEFAULT_MINIMUM_PLOT_SIZE};

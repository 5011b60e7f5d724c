use tracing::debug;

use crate::geometry::Viewport;

use super::tie_break::{Corner, CornerChoice, TieBreakPolicy};
use super::{Direction, TheoreticalExtremes};

/// Which viewport edges a line is considered to cross.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Sides {
    pub left: bool,
    pub right: bool,
    pub top: bool,
    pub bottom: bool,
}

impl Sides {
    #[must_use]
    pub fn new(left: bool, right: bool, top: bool, bottom: bool) -> Self {
        Self {
            left,
            right,
            top,
            bottom,
        }
    }

    /// Number of edges flagged as crossed.
    #[must_use]
    pub fn count(self) -> usize {
        [self.left, self.right, self.top, self.bottom]
            .into_iter()
            .filter(|&s| s)
            .count()
    }

    /// Runs the four edge tests against the (clamped) extremes.
    ///
    /// Flat lines always cross left and right and never top or bottom.
    /// Vertical lines have NaN heights, so left and right come out false.
    #[must_use]
    pub fn edge_tests(
        direction: Direction,
        extremes: &TheoreticalExtremes,
        viewport: &Viewport,
    ) -> Self {
        let tol = viewport.tolerance();
        let within_vert =
            |y: f64| viewport.vert_min() - tol <= y && y <= viewport.vert_max() + tol;
        let within_hor =
            |x: f64| viewport.hor_min() - tol <= x && x <= viewport.hor_max() + tol;
        let flat = direction == Direction::Flat;

        Self {
            left: flat || within_vert(extremes.y_at_hor_min),
            right: flat || within_vert(extremes.y_at_hor_max),
            top: !flat && within_hor(extremes.x_at_vert_max),
            bottom: !flat && within_hor(extremes.x_at_vert_min),
        }
    }

    /// Reduces the flagged edges of a sloped line to one entry and one exit.
    ///
    /// An upward line enters through left or bottom and leaves through
    /// right or top; a downward line enters through left or top and leaves
    /// through right or bottom. Two entry edges (or two exit edges) can only
    /// both be flagged next to the corner where they meet, so the policy
    /// picks one of them. A single remaining edge means the line touches
    /// the viewport at a corner, and the edge across that corner is added
    /// so the segment has zero length there.
    ///
    /// Flat and vertical lines, and lines with no flagged edge, are
    /// returned unchanged.
    #[must_use]
    pub fn resolve_corners<P>(self, direction: Direction, policy: &P) -> Self
    where
        P: TieBreakPolicy + ?Sized,
    {
        let (crossing, touching) = match direction {
            Direction::Upward => (
                [Corner::UpperRight, Corner::LowerLeft],
                [Corner::UpperLeft, Corner::LowerRight],
            ),
            Direction::Downward => (
                [Corner::UpperLeft, Corner::LowerRight],
                [Corner::UpperRight, Corner::LowerLeft],
            ),
            Direction::Flat | Direction::Vertical => return self,
        };

        let mut sides = self;
        for corner in crossing {
            let (horizontal_edge, vertical_edge) = sides.edges_at(corner);
            if !(horizontal_edge && vertical_edge) {
                continue;
            }
            let choice = policy.choose(corner);
            debug!(?corner, ?choice, "line passes through viewport corner");
            let keep_top_bottom = choice == CornerChoice::KeepTopBottom;
            sides.set_edges_at(corner, keep_top_bottom, !keep_top_bottom);
        }

        if sides.count() == 1 {
            if let Some(corner) = touching.into_iter().find(|&corner| {
                let (horizontal_edge, vertical_edge) = sides.edges_at(corner);
                horizontal_edge || vertical_edge
            }) {
                debug!(?corner, "line touches viewport only at a corner");
                sides.set_edges_at(corner, true, true);
            }
        }
        sides
    }

    /// The (top or bottom, left or right) flags meeting at `corner`.
    fn edges_at(self, corner: Corner) -> (bool, bool) {
        match corner {
            Corner::UpperRight => (self.top, self.right),
            Corner::UpperLeft => (self.top, self.left),
            Corner::LowerRight => (self.bottom, self.right),
            Corner::LowerLeft => (self.bottom, self.left),
        }
    }

    fn set_edges_at(&mut self, corner: Corner, horizontal_edge: bool, vertical_edge: bool) {
        match corner {
            Corner::UpperRight => {
                self.top = horizontal_edge;
                self.right = vertical_edge;
            }
            Corner::UpperLeft => {
                self.top = horizontal_edge;
                self.left = vertical_edge;
            }
            Corner::LowerRight => {
                self.bottom = horizontal_edge;
                self.right = vertical_edge;
            }
            Corner::LowerLeft => {
                self.bottom = horizontal_edge;
                self.left = vertical_edge;
            }
        }
    }
}

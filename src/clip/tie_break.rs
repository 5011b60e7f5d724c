use std::sync::atomic::{AtomicBool, Ordering};

/// A viewport corner where two edges meet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Corner {
    UpperRight,
    UpperLeft,
    LowerRight,
    LowerLeft,
}

/// Which of the two edges meeting at a corner a line is considered to cross.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CornerChoice {
    /// Keep the left or right edge; drop the top or bottom one.
    KeepLeftRight,
    /// Keep the top or bottom edge; drop the left or right one.
    KeepTopBottom,
}

/// Decides which edge a line passing exactly through a corner crosses.
///
/// Implementations must be deterministic and total: every call returns a
/// choice, and a stateless policy returns the same choice for the same corner.
pub trait TieBreakPolicy {
    fn choose(&self, corner: Corner) -> CornerChoice;
}

impl<F> TieBreakPolicy for F
where
    F: Fn(Corner) -> CornerChoice,
{
    fn choose(&self, corner: Corner) -> CornerChoice {
        self(corner)
    }
}

/// Always keeps the left or right edge. The default policy.
#[derive(Debug, Clone, Copy, Default)]
pub struct PreferLeftRight;

impl TieBreakPolicy for PreferLeftRight {
    fn choose(&self, _corner: Corner) -> CornerChoice {
        CornerChoice::KeepLeftRight
    }
}

/// Always keeps the top or bottom edge.
#[derive(Debug, Clone, Copy, Default)]
pub struct PreferTopBottom;

impl TieBreakPolicy for PreferTopBottom {
    fn choose(&self, _corner: Corner) -> CornerChoice {
        CornerChoice::KeepTopBottom
    }
}

/// Alternates between the two choices on every call, starting with
/// [`CornerChoice::KeepLeftRight`].
///
/// The toggle is atomic, so one instance may be shared across threads.
#[derive(Debug, Default)]
pub struct Alternating {
    next_top_bottom: AtomicBool,
}

impl Alternating {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl TieBreakPolicy for Alternating {
    fn choose(&self, _corner: Corner) -> CornerChoice {
        if self.next_top_bottom.fetch_xor(true, Ordering::Relaxed) {
            CornerChoice::KeepTopBottom
        } else {
            CornerChoice::KeepLeftRight
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_policies_ignore_corner() {
        for corner in [
            Corner::UpperRight,
            Corner::UpperLeft,
            Corner::LowerRight,
            Corner::LowerLeft,
        ] {
            assert_eq!(PreferLeftRight.choose(corner), CornerChoice::KeepLeftRight);
            assert_eq!(PreferTopBottom.choose(corner), CornerChoice::KeepTopBottom);
        }
    }

    #[test]
    fn alternating_toggles() {
        let policy = Alternating::new();
        assert_eq!(policy.choose(Corner::UpperRight), CornerChoice::KeepLeftRight);
        assert_eq!(policy.choose(Corner::UpperRight), CornerChoice::KeepTopBottom);
        assert_eq!(policy.choose(Corner::LowerLeft), CornerChoice::KeepLeftRight);
    }

    #[test]
    fn closures_are_policies() {
        let by_corner = |corner: Corner| match corner {
            Corner::UpperRight | Corner::LowerLeft => CornerChoice::KeepTopBottom,
            Corner::UpperLeft | Corner::LowerRight => CornerChoice::KeepLeftRight,
        };
        assert_eq!(by_corner.choose(Corner::LowerLeft), CornerChoice::KeepTopBottom);
        assert_eq!(by_corner.choose(Corner::UpperLeft), CornerChoice::KeepLeftRight);
    }

    #[test]
    fn alternating_is_sync() {
        fn assert_sync<T: Sync>() {}
        assert_sync::<Alternating>();
    }
}

//! Clips a handful of overlay lines and prints the resulting segments.
//!
//! Usage:
//! ```text
//! cargo run --example clip
//! RUST_LOG=plotclip=trace cargo run --example clip
//! ```

use plotclip::clip::{clip_line, Alternating};
use plotclip::geometry::{LineSpec, Point, Viewport, DEFAULT_MINIMUM_PLOT_SIZE};
use plotclip::overlay::RivalryLines;
use plotclip::Result;

fn main() -> Result<()> {
    // Default: WARN for everything, INFO for plotclip.
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("plotclip=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let rivals = [
        Point::named([("Economic", -3.4), ("Social", 1.2)]).with_name("Kerry"),
        Point::named([("Economic", 4.1), ("Social", -2.7)]).with_name("Bush"),
    ];
    let viewport = Viewport::enclosing(&rivals, DEFAULT_MINIMUM_PLOT_SIZE)?;
    let policy = Alternating::new();

    let lines = [
        (0.0, 0.0, 1.0),
        (2.0, 1.0, 0.0),
        (1.0, 0.0, f64::INFINITY),
        (0.0, 2.0, -0.5),
    ];
    for (x, y, slope) in lines {
        let clipped = clip_line(&LineSpec::new(Point::xy(x, y), slope)?, &viewport, &policy)?;
        println!(
            "slope {slope:>5}: case {:<4} {:?} -> {:?}",
            clipped.case(),
            clipped.start(),
            clipped.end()
        );
    }

    let lines = RivalryLines::build(&rivals[0], &rivals[1], 0.1, &viewport, &policy)?;
    println!(
        "{} vs {}: connector length {:.3}, bisector case {}",
        rivals[0].name,
        rivals[1].name,
        lines.connector.length(),
        lines.bisector.case()
    );
    Ok(())
}

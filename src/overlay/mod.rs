//! Analytic overlay lines built on top of [`clip_line`](crate::clip::clip_line).

mod connector;
mod rivalry;

pub use connector::Connector;
pub use rivalry::{Dividers, RivalryLines};

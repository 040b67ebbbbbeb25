//! Pure geometry for recycler-gesture
//!
//! Points, sizes, rectangles and the main/cross axis helpers every gesture
//! decision is expressed in.

mod axis;
mod geometry;

pub use axis::*;
pub use geometry::*;

pub mod prelude {
    pub use crate::axis::Axis;
    pub use crate::geometry::{Point, Rect, Size};
}

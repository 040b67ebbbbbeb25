use crate::{Point, Rect, Size};

/// The single dimension along which a gesture moves and compares positions.
///
/// A vertical list reorders along [`Axis::Vertical`]; its items are swiped
/// away along the cross axis, and the reverse for horizontal lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Axis {
    /// Main axis: left to right
    Horizontal,

    /// Main axis: top to bottom
    #[default]
    Vertical,
}

impl Axis {
    /// Returns the opposite axis.
    #[inline]
    pub fn cross_axis(self) -> Self {
        match self {
            Axis::Horizontal => Axis::Vertical,
            Axis::Vertical => Axis::Horizontal,
        }
    }

    /// Returns true if this is the horizontal axis.
    #[inline]
    pub fn is_horizontal(self) -> bool {
        matches!(self, Axis::Horizontal)
    }

    /// Returns true if this is the vertical axis.
    #[inline]
    pub fn is_vertical(self) -> bool {
        matches!(self, Axis::Vertical)
    }

    /// Component of `point` along this axis.
    #[inline]
    pub fn main(self, point: Point) -> f32 {
        match self {
            Axis::Horizontal => point.x,
            Axis::Vertical => point.y,
        }
    }

    /// Extent of `size` along this axis.
    #[inline]
    pub fn extent(self, size: Size) -> f32 {
        match self {
            Axis::Horizontal => size.width,
            Axis::Vertical => size.height,
        }
    }

    /// Leading edge of `rect` along this axis.
    #[inline]
    pub fn start(self, rect: &Rect) -> f32 {
        match self {
            Axis::Horizontal => rect.x,
            Axis::Vertical => rect.y,
        }
    }

    /// Trailing edge of `rect` along this axis.
    #[inline]
    pub fn end(self, rect: &Rect) -> f32 {
        match self {
            Axis::Horizontal => rect.right(),
            Axis::Vertical => rect.bottom(),
        }
    }

    /// `point` with its component along this axis replaced by `value`.
    #[inline]
    pub fn with_main(self, point: Point, value: f32) -> Point {
        match self {
            Axis::Horizontal => Point::new(value, point.y),
            Axis::Vertical => Point::new(point.x, value),
        }
    }

    /// A point carrying `value` on this axis and zero on the cross axis.
    #[inline]
    pub fn point(self, value: f32) -> Point {
        match self {
            Axis::Horizontal => Point::new(value, 0.0),
            Axis::Vertical => Point::new(0.0, value),
        }
    }
}

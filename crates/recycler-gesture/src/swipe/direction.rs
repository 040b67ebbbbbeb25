use recycler_gesture_geometry::Axis;

/// Directions a swipe may dismiss an item in.
///
/// `Horizontal` and `Vertical` allow both signs on their axis; the four
/// single-sign variants allow one. Movement in a disallowed sign clamps to
/// zero, so the item stops at its resting position like a wall.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SwipeDirection {
    /// Swipe disabled.
    #[default]
    None,
    Horizontal,
    Vertical,
    Left,
    Right,
    Up,
    Down,
}

impl SwipeDirection {
    /// Axis the swipe moves along, `None` when disabled.
    pub fn axis(self) -> Option<Axis> {
        match self {
            SwipeDirection::None => Option::None,
            SwipeDirection::Horizontal | SwipeDirection::Left | SwipeDirection::Right => {
                Some(Axis::Horizontal)
            }
            SwipeDirection::Vertical | SwipeDirection::Up | SwipeDirection::Down => {
                Some(Axis::Vertical)
            }
        }
    }

    pub fn is_enabled(self) -> bool {
        self != SwipeDirection::None
    }

    /// Rightwards or downwards movement allowed.
    pub fn allows_positive(self) -> bool {
        matches!(
            self,
            SwipeDirection::Horizontal
                | SwipeDirection::Vertical
                | SwipeDirection::Right
                | SwipeDirection::Down
        )
    }

    /// Leftwards or upwards movement allowed.
    pub fn allows_negative(self) -> bool {
        matches!(
            self,
            SwipeDirection::Horizontal
                | SwipeDirection::Vertical
                | SwipeDirection::Left
                | SwipeDirection::Up
        )
    }

    /// `offset` along the swipe axis with disallowed signs clamped to zero.
    pub fn clamp(self, offset: f32) -> f32 {
        if (offset > 0.0 && !self.allows_positive()) || (offset < 0.0 && !self.allows_negative())
        {
            0.0
        } else {
            offset
        }
    }

    /// Whether a swipe that ended at `offset` went in an allowed direction.
    pub fn allows(self, offset: f32) -> bool {
        offset != 0.0 && self.clamp(offset) == offset
    }

    /// Intersection of `self` with `configured`.
    ///
    /// Directions on different axes have nothing in common and resolve to
    /// [`SwipeDirection::None`].
    pub fn restrict_to(self, configured: SwipeDirection) -> SwipeDirection {
        match (self.axis(), configured.axis()) {
            (Some(axis), Some(configured_axis)) if axis == configured_axis => Self::from_signs(
                axis,
                self.allows_positive() && configured.allows_positive(),
                self.allows_negative() && configured.allows_negative(),
            ),
            _ => SwipeDirection::None,
        }
    }

    /// Single-sign direction of a movement by `offset` along `axis`.
    pub fn from_offset(axis: Axis, offset: f32) -> SwipeDirection {
        Self::from_signs(axis, offset > 0.0, offset < 0.0)
    }

    fn from_signs(axis: Axis, positive: bool, negative: bool) -> SwipeDirection {
        match (axis, positive, negative) {
            (_, false, false) => SwipeDirection::None,
            (Axis::Horizontal, true, true) => SwipeDirection::Horizontal,
            (Axis::Horizontal, true, false) => SwipeDirection::Right,
            (Axis::Horizontal, false, true) => SwipeDirection::Left,
            (Axis::Vertical, true, true) => SwipeDirection::Vertical,
            (Axis::Vertical, true, false) => SwipeDirection::Down,
            (Axis::Vertical, false, true) => SwipeDirection::Up,
        }
    }
}

#[cfg(test)]
#[path = "../tests/direction_tests.rs"]
mod tests;

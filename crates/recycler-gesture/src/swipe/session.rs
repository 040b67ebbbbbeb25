use recycler_gesture_animation::TweenAnimation;
use recycler_gesture_geometry::Point;

use super::SwipeDirection;
use crate::input::PointerId;

/// Where a swipe gesture is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SwipePhase {
    #[default]
    Idle,
    /// Pointer down on a swipeable item, still within touch slop.
    Pressed,
    Swiping,
    /// Animating off screen; the item is removed when it finishes.
    Committing,
    /// Animating back to rest.
    Cancelling,
}

/// State of one swipe, from press to the end of its terminal animation.
#[derive(Debug, Clone)]
pub struct SwipeSession {
    pub(crate) pointer: PointerId,
    pub(crate) target_position: usize,
    /// Resolved direction for the target item.
    pub(crate) direction: SwipeDirection,
    pub(crate) down_position: Point,
    pub(crate) axis_offset: f32,
    pub(crate) committed_direction: SwipeDirection,
    pub(crate) item_count: usize,
    pub(crate) animation: Option<TweenAnimation<f32>>,
}

impl SwipeSession {
    pub(crate) fn new(
        pointer: PointerId,
        target_position: usize,
        direction: SwipeDirection,
        down_position: Point,
        item_count: usize,
    ) -> Self {
        Self {
            pointer,
            target_position,
            direction,
            down_position,
            axis_offset: 0.0,
            committed_direction: SwipeDirection::None,
            item_count,
            animation: None,
        }
    }

    pub fn pointer(&self) -> PointerId {
        self.pointer
    }

    pub fn target_position(&self) -> usize {
        self.target_position
    }

    pub fn direction(&self) -> SwipeDirection {
        self.direction
    }

    /// Offset along the swipe axis, already clamped to the allowed signs.
    pub fn axis_offset(&self) -> f32 {
        self.axis_offset
    }

    /// Sign the item is being dismissed in; `None` until committed.
    pub fn committed_direction(&self) -> SwipeDirection {
        self.committed_direction
    }
}

use recycler_gesture_animation::TweenAnimation;
use recycler_gesture_geometry::Point;

use crate::input::PointerId;

/// Where a drag gesture is in its lifecycle.
///
/// Swaps happen inside `Dragging` and leave the phase unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragPhase {
    #[default]
    Idle,
    /// Pointer down on a draggable item; waiting for the host's long press.
    Pressed,
    Dragging,
    /// Drop animation running; the order is already final.
    Dropping,
}

/// State of one drag, from press to the end of its drop animation.
#[derive(Debug, Clone)]
pub struct DragSession {
    pub(crate) pointer: PointerId,
    pub(crate) origin_position: usize,
    pub(crate) current_position: usize,
    /// Pointer position relative to the dragged view's origin at press time.
    pub(crate) pointer_offset: Point,
    pub(crate) last_pointer: Point,
    pub(crate) autoscroll_velocity: f32,
    /// Adapter item count when the session started.
    pub(crate) item_count: usize,
    pub(crate) drop_animation: Option<TweenAnimation<Point>>,
}

impl DragSession {
    pub(crate) fn new(
        pointer: PointerId,
        position: usize,
        pointer_offset: Point,
        last_pointer: Point,
        item_count: usize,
    ) -> Self {
        Self {
            pointer,
            origin_position: position,
            current_position: position,
            pointer_offset,
            last_pointer,
            autoscroll_velocity: 0.0,
            item_count,
            drop_animation: None,
        }
    }

    pub fn pointer(&self) -> PointerId {
        self.pointer
    }

    /// Position the dragged item was picked up from.
    pub fn origin_position(&self) -> usize {
        self.origin_position
    }

    /// Position the dragged item occupies now; every swap so far is already
    /// applied to the adapter.
    pub fn current_position(&self) -> usize {
        self.current_position
    }

    pub fn pointer_offset(&self) -> Point {
        self.pointer_offset
    }

    /// Signed autoscroll step per frame, zero when not at an edge.
    pub fn autoscroll_velocity(&self) -> f32 {
        self.autoscroll_velocity
    }
}

use recycler_gesture_geometry::Point;
use std::cell::Cell;
use std::rc::Rc;

pub type PointerId = u64;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    Move,
    /// Emitted by the host's own long-press detection for the pressed pointer.
    LongPress,
    Up,
    Cancel,
}

/// Pointer event in list-container coordinates.
///
/// Consumption is shared between copies so that the drag and swipe gestures
/// attached to one host can see which of them claimed an event.
#[derive(Clone, Debug)]
pub struct PointerEvent {
    pub id: PointerId,
    pub kind: PointerEventKind,
    pub position: Point,
    consumed: Rc<Cell<bool>>,
}

impl PointerEvent {
    pub fn new(kind: PointerEventKind, position: Point) -> Self {
        Self {
            id: 0,
            kind,
            position,
            consumed: Rc::new(Cell::new(false)),
        }
    }

    pub fn with_id(mut self, id: PointerId) -> Self {
        self.id = id;
        self
    }

    /// Mark this event as consumed, preventing other handlers from processing it.
    pub fn consume(&self) {
        self.consumed.set(true);
    }

    pub fn is_consumed(&self) -> bool {
        self.consumed.get()
    }

    /// Creates a copy of this event with a new local position, sharing the consumption state.
    pub fn copy_with_local_position(&self, position: Point) -> Self {
        Self {
            id: self.id,
            kind: self.kind,
            position,
            consumed: self.consumed.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn consumption_is_shared_between_copies() {
        let event = PointerEvent::new(PointerEventKind::Move, Point::new(1.0, 2.0)).with_id(3);
        let local = event.copy_with_local_position(Point::new(0.0, 0.0));
        assert!(!event.is_consumed());
        local.consume();
        assert!(event.is_consumed());
        assert_eq!(local.id, 3);
    }
}

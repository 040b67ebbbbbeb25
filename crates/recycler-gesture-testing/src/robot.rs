//! Robot-style driver for gesture tests
//!
//! The robot plays the host's part: it owns the [`GestureHost`], feeds
//! pointer events to every attached gesture in attachment order, emits the
//! long-press signal on request, and pumps frames at a fixed 60 Hz clock.
//!
//! # Example
//!
//! ```
//! use std::rc::Rc;
//! use recycler_gesture::{DefaultDragStrategy, DragDropGesture, Size};
//! use recycler_gesture_testing::{FakeList, GestureRobot, RecordingAdapter};
//!
//! let adapter = Rc::new(RecordingAdapter::new(vec![0, 1, 2, 3, 4]));
//! let list = FakeList::vertical(Size::new(300.0, 600.0), 100.0, adapter.clone());
//! let mut robot = GestureRobot::new(list);
//! let drag = DragDropGesture::builder()
//!     .on(robot.host())
//!     .adapter(adapter.clone())
//!     .apply(DefaultDragStrategy)
//!     .build()
//!     .unwrap();
//! robot.attach_drag(drag);
//!
//! robot.press(50.0, 50.0);
//! robot.long_press();
//! robot.move_in_steps(50.0, 170.0, 6);
//! robot.release();
//! robot.wait_for_idle();
//!
//! assert_eq!(adapter.items(), vec![1, 0, 2, 3, 4]);
//! ```

use std::rc::Rc;

use recycler_gesture::{
    DragDropGesture, GestureHost, ItemTransform, Point, PointerEvent, PointerEventKind,
    PointerId, SwipeToDismissGesture,
};

use crate::fake_list::FakeList;

/// One frame at 60 Hz.
pub const FRAME_NANOS: u64 = 16_666_667;

/// Upper bound on frames pumped by [`GestureRobot::wait_for_idle`].
const MAX_IDLE_FRAMES: usize = 600;

pub struct GestureRobot {
    list: Rc<FakeList>,
    host: GestureHost,
    drag: Option<DragDropGesture>,
    swipe: Option<SwipeToDismissGesture>,
    pointer: PointerId,
    pointer_position: Point,
    frame_time_nanos: u64,
}

impl GestureRobot {
    pub fn new(list: Rc<FakeList>) -> Self {
        let host = GestureHost::new(list.clone());
        Self {
            list,
            host,
            drag: None,
            swipe: None,
            pointer: 0,
            pointer_position: Point::ZERO,
            frame_time_nanos: 0,
        }
    }

    pub fn host(&self) -> &GestureHost {
        &self.host
    }

    pub fn list(&self) -> &FakeList {
        &self.list
    }

    pub fn attach_drag(&mut self, gesture: DragDropGesture) {
        self.drag = Some(gesture);
    }

    pub fn attach_swipe(&mut self, gesture: SwipeToDismissGesture) {
        self.swipe = Some(gesture);
    }

    /// The attached drag gesture.
    ///
    /// # Panics
    ///
    /// Panics if no drag gesture is attached.
    pub fn drag(&self) -> &DragDropGesture {
        self.drag.as_ref().expect("no drag gesture attached")
    }

    pub fn drag_mut(&mut self) -> &mut DragDropGesture {
        self.drag.as_mut().expect("no drag gesture attached")
    }

    /// The attached swipe gesture.
    ///
    /// # Panics
    ///
    /// Panics if no swipe gesture is attached.
    pub fn swipe(&self) -> &SwipeToDismissGesture {
        self.swipe.as_ref().expect("no swipe gesture attached")
    }

    pub fn swipe_mut(&mut self) -> &mut SwipeToDismissGesture {
        self.swipe.as_mut().expect("no swipe gesture attached")
    }

    /// Pointer id used by the convenience methods below.
    pub fn use_pointer(&mut self, pointer: PointerId) {
        self.pointer = pointer;
    }

    pub fn pointer_position(&self) -> Point {
        self.pointer_position
    }

    /// Delivers `event` to the drag gesture, then the swipe gesture.
    ///
    /// Returns true if either consumed it.
    pub fn dispatch(&mut self, event: PointerEvent) -> bool {
        let mut consumed = false;
        if let Some(drag) = self.drag.as_mut() {
            consumed |= drag.on_pointer_event(&event);
        }
        if let Some(swipe) = self.swipe.as_mut() {
            consumed |= swipe.on_pointer_event(&event);
        }
        consumed || event.is_consumed()
    }

    fn send(&mut self, kind: PointerEventKind, position: Point) -> bool {
        let event = PointerEvent::new(kind, position).with_id(self.pointer);
        self.dispatch(event)
    }

    pub fn press(&mut self, x: f32, y: f32) -> bool {
        self.pointer_position = Point::new(x, y);
        self.send(PointerEventKind::Down, self.pointer_position)
    }

    /// Presses at the center of `position`.
    pub fn press_item(&mut self, position: usize) -> bool {
        let center = self.list.item_center(position);
        self.press(center.x, center.y)
    }

    /// Emits the host's long-press signal at the current pointer position.
    pub fn long_press(&mut self) -> bool {
        self.send(PointerEventKind::LongPress, self.pointer_position)
    }

    pub fn move_to(&mut self, x: f32, y: f32) -> bool {
        self.pointer_position = Point::new(x, y);
        self.send(PointerEventKind::Move, self.pointer_position)
    }

    pub fn move_by(&mut self, dx: f32, dy: f32) -> bool {
        let target = self.pointer_position + Point::new(dx, dy);
        self.move_to(target.x, target.y)
    }

    /// Moves to `(x, y)` in `steps` evenly spaced move events.
    pub fn move_in_steps(&mut self, x: f32, y: f32, steps: usize) {
        let from = self.pointer_position;
        let steps = steps.max(1);
        for i in 1..=steps {
            let t = i as f32 / steps as f32;
            self.move_to(from.x + (x - from.x) * t, from.y + (y - from.y) * t);
        }
    }

    pub fn release(&mut self) -> bool {
        self.send(PointerEventKind::Up, self.pointer_position)
    }

    /// Sends a pointer cancel, as when a parent intercepts the stream.
    pub fn cancel_pointer(&mut self) -> bool {
        self.send(PointerEventKind::Cancel, self.pointer_position)
    }

    pub fn frame_time_nanos(&self) -> u64 {
        self.frame_time_nanos
    }

    pub fn needs_frame(&self) -> bool {
        self.drag.as_ref().is_some_and(DragDropGesture::needs_frame)
            || self
                .swipe
                .as_ref()
                .is_some_and(SwipeToDismissGesture::needs_frame)
    }

    /// Advances the clock by one frame and ticks every gesture.
    pub fn pump_frame(&mut self) {
        self.frame_time_nanos += FRAME_NANOS;
        let now = self.frame_time_nanos;
        if let Some(drag) = self.drag.as_mut() {
            drag.on_frame(now);
        }
        if let Some(swipe) = self.swipe.as_mut() {
            swipe.on_frame(now);
        }
    }

    pub fn pump_frames(&mut self, count: usize) {
        for _ in 0..count {
            self.pump_frame();
        }
    }

    /// Pumps frames until no gesture asks for one.
    ///
    /// An autoscrolling drag asks for frames for as long as it is held at an
    /// edge, so release the pointer first.
    pub fn wait_for_idle(&mut self) {
        for _ in 0..MAX_IDLE_FRAMES {
            if !self.needs_frame() {
                return;
            }
            self.pump_frame();
        }
        log::warn!("robot: gestures still animating after {MAX_IDLE_FRAMES} frames");
    }

    /// Transform currently published for `position`.
    pub fn transform(&self, position: usize) -> ItemTransform {
        self.host.views().transform(position)
    }
}

//! Drag-to-reorder and swipe-to-dismiss for scrollable lists
//!
//! The crate is a decoration layer over a host list widget. The host feeds
//! pointer events and frame ticks into a [`DragDropGesture`] and/or a
//! [`SwipeToDismissGesture`]; the gestures move items through the index-based
//! [`SwappableAdapter`] contract and publish per-item transforms through the
//! [`ViewTable`] the host draws from.
//!
//! ```no_run
//! use std::rc::Rc;
//! use recycler_gesture::prelude::*;
//! # fn widget() -> Rc<dyn ListWidget> { unimplemented!() }
//!
//! let adapter = Rc::new(VecAdapter::new(vec!["a", "b", "c"]));
//! let host = GestureHost::new(widget());
//!
//! let mut drag = DragDropGesture::builder()
//!     .on(&host)
//!     .adapter(adapter.clone())
//!     .apply(DefaultDragStrategy)
//!     .build()
//!     .expect("drag gesture");
//!
//! let mut swipe = SwipeToDismissGesture::builder(SwipeDirection::Horizontal)
//!     .on(&host)
//!     .adapter(adapter)
//!     .apply(DefaultSwipeStrategy)
//!     .build()
//!     .expect("swipe gesture");
//!
//! let down = PointerEvent::new(PointerEventKind::Down, Point::new(10.0, 10.0));
//! drag.on_pointer_event(&down);
//! swipe.on_pointer_event(&down);
//! ```

pub mod adapter;
pub mod behavior;
pub mod drag;
mod error;
pub mod gesture_constants;
pub mod host;
pub mod input;
pub mod swipe;

pub use adapter::{AdapterChange, AdapterError, SwappableAdapter, VecAdapter};
pub use behavior::{behavior_for, AxisBehavior, HorizontalBehavior, VerticalBehavior};
pub use drag::{
    drag_strategy_fn, AutoscrollConfig, DefaultDragStrategy, DragConfig, DragDropGesture,
    DragDropGestureBuilder, DragPhase, DragSession, DragStrategy,
};
pub use error::GestureError;
pub use host::{
    Geometry, GestureHost, ItemTransform, ItemView, ListWidget, ViewHandle, ViewTable,
};
pub use input::{PointerEvent, PointerEventKind, PointerId};
pub use recycler_gesture_animation::{AnimationSpec, Easing, TweenAnimation};
pub use recycler_gesture_geometry::{Axis, Point, Rect, Size};
pub use swipe::{
    swipe_strategy_fn, DefaultSwipeStrategy, SwipeConfig, SwipeDirection, SwipePhase,
    SwipeSession, SwipeStrategy, SwipeToDismissGesture, SwipeToDismissGestureBuilder,
};

pub mod prelude {
    pub use crate::adapter::{SwappableAdapter, VecAdapter};
    pub use crate::drag::{DefaultDragStrategy, DragDropGesture, DragStrategy};
    pub use crate::host::{Geometry, GestureHost, ListWidget, ViewTable};
    pub use crate::input::{PointerEvent, PointerEventKind};
    pub use crate::swipe::{
        DefaultSwipeStrategy, SwipeDirection, SwipeStrategy, SwipeToDismissGesture,
    };
    pub use recycler_gesture_geometry::{Axis, Point, Rect, Size};
}

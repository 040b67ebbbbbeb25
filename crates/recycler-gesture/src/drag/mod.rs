//! Long-press drag to reorder.

mod autoscroll;
mod gesture;
mod session;
mod strategy;

pub use autoscroll::AutoscrollConfig;
pub use gesture::{DragConfig, DragDropGesture, DragDropGestureBuilder};
pub use session::{DragPhase, DragSession};
pub use strategy::{drag_strategy_fn, DefaultDragStrategy, DragStrategy, FnDragStrategy};

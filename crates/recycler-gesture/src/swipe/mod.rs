//! Directional swipe to dismiss.

mod direction;
mod gesture;
mod session;
mod strategy;

pub use direction::SwipeDirection;
pub use gesture::{SwipeConfig, SwipeToDismissGesture, SwipeToDismissGestureBuilder};
pub use session::{SwipePhase, SwipeSession};
pub use strategy::{swipe_strategy_fn, DefaultSwipeStrategy, FnSwipeStrategy, SwipeStrategy};

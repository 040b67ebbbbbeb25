use thiserror::Error;

use crate::swipe::SwipeDirection;

/// Configuration errors reported by the gesture builders.
///
/// Runtime problems (unmeasured views, adapter rejections) never surface as
/// errors; they end the session as if the gesture had not happened.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GestureError {
    #[error("gesture is not attached to a host; call `on(host)` before `build()`")]
    MissingHost,
    #[error("gesture has no adapter; call `adapter(..)` before `build()`")]
    MissingAdapter,
    #[error("gesture has no strategy; call `apply(..)` before `build()`")]
    MissingStrategy,
    #[error("dismiss threshold must be in (0, 1], got {0}")]
    InvalidDismissThreshold(f32),
    #[error("swipe gesture needs an enabled direction, got {0:?}")]
    DisabledDirection(SwipeDirection),
    #[error("invalid autoscroll velocities: min {min}, max {max}")]
    InvalidAutoscroll { min: f32, max: f32 },
}

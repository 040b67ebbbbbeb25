//! Shared gesture constants.
//!
//! All distances are logical pixels. Autoscroll velocities are pixels per
//! frame, since autoscroll advances once per frame tick.

/// Touch slop: distance the pointer travels before a swipe claims the stream.
///
/// Matches Android's ViewConfiguration.TOUCH_SLOP (~8dp).
pub const DRAG_THRESHOLD: f32 = 8.0;

/// Fraction of an item's extent a swipe must cover to dismiss it.
pub const DEFAULT_DISMISS_THRESHOLD: f32 = 1.0 / 3.0;

/// Autoscroll step when the dragged item just touches a list edge.
pub const DEFAULT_AUTOSCROLL_MIN_VELOCITY: f32 = 4.0;

/// Autoscroll step once the dragged item is `DEFAULT_AUTOSCROLL_RAMP` past an edge.
///
/// Kept below typical item extents so a single swap per frame keeps up.
pub const DEFAULT_AUTOSCROLL_MAX_VELOCITY: f32 = 24.0;

/// Penetration depth over which autoscroll ramps from min to max velocity.
pub const DEFAULT_AUTOSCROLL_RAMP: f32 = 64.0;

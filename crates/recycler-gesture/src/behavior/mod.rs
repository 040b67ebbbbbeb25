//! Orientation-specific geometry for drag and swipe decisions.
//!
//! Behaviors are stateless. Every method is a pure decision over view
//! snapshots from the [`ViewTable`](crate::host::ViewTable), except `scroll`,
//! which forwards to the host. Views that are absent or not yet measured
//! never trigger a decision.

mod horizontal;
mod vertical;

pub use horizontal::HorizontalBehavior;
pub use vertical::VerticalBehavior;

use recycler_gesture_animation::{AnimationSpec, TweenAnimation};
use recycler_gesture_geometry::{Axis, Point, Size};

use crate::host::{GestureHost, ItemView};

pub trait AxisBehavior {
    fn axis(&self) -> Axis;

    /// Translates `dragged` by the active-axis component of the delta. The
    /// cross-axis translation is never written: drags keep it at zero, and
    /// a translation set by someone else survives the drag untouched.
    fn move_view(&self, delta_x: f32, delta_y: f32, dragged: &mut ItemView);

    /// Whether the dragged view's leading edge has passed `previous`.
    fn should_switch_with_previous(&self, dragged: &ItemView, previous: Option<&ItemView>) -> bool;

    /// Whether the dragged view's leading edge has passed `next`.
    fn should_switch_with_next(&self, dragged: &ItemView, next: Option<&ItemView>) -> bool;

    /// Animation of `view`'s translation that lands it on `destination`'s
    /// laid-out position. `None` while either view is unmeasured.
    fn drop_animation(
        &self,
        view: &ItemView,
        destination: &ItemView,
        spec: AnimationSpec,
    ) -> Option<TweenAnimation<Point>>;

    fn should_start_scrolling_to_start(&self, container: Size, dragged: &ItemView) -> bool;

    fn should_start_scrolling_to_end(&self, container: Size, dragged: &ItemView) -> bool;

    /// Scrolls the host by `velocity` along the active axis and returns the
    /// consumed amount.
    fn scroll(&self, host: &GestureHost, velocity: f32) -> f32;

    /// Whether a dragged view whose origin moves to `projected` would pass
    /// the non-hoverable `previous` view.
    fn will_hover_previous_divider(&self, previous: &ItemView, projected: Point) -> bool;

    /// Whether a dragged view whose origin moves to `projected` would pass
    /// the non-hoverable `next` view.
    fn will_hover_next_divider(&self, next: &ItemView, projected: Point) -> bool;
}

static VERTICAL: VerticalBehavior = VerticalBehavior;
static HORIZONTAL: HorizontalBehavior = HorizontalBehavior;

/// The behavior that compares and moves along `axis`.
pub fn behavior_for(axis: Axis) -> &'static dyn AxisBehavior {
    match axis {
        Axis::Vertical => &VERTICAL,
        Axis::Horizontal => &HORIZONTAL,
    }
}

#[cfg(test)]
#[path = "../tests/behavior_tests.rs"]
mod tests;

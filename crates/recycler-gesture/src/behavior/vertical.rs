use recycler_gesture_animation::{AnimationSpec, TweenAnimation};
use recycler_gesture_geometry::{Axis, Point, Size};

use super::AxisBehavior;
use crate::host::{GestureHost, ItemView};

/// Drag along the y axis only.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct VerticalBehavior;

impl AxisBehavior for VerticalBehavior {
    fn axis(&self) -> Axis {
        Axis::Vertical
    }

    fn move_view(&self, _delta_x: f32, delta_y: f32, dragged: &mut ItemView) {
        dragged.transform.translation.y = delta_y;
    }

    fn should_switch_with_previous(&self, dragged: &ItemView, previous: Option<&ItemView>) -> bool {
        let (Some(dragged), Some(previous)) = (
            dragged.visual_bounds(),
            previous.and_then(ItemView::visual_bounds),
        ) else {
            return false;
        };
        dragged.y < previous.y
    }

    fn should_switch_with_next(&self, dragged: &ItemView, next: Option<&ItemView>) -> bool {
        let (Some(dragged), Some(next)) = (
            dragged.visual_bounds(),
            next.and_then(ItemView::visual_bounds),
        ) else {
            return false;
        };
        dragged.y > next.y
    }

    fn drop_animation(
        &self,
        view: &ItemView,
        destination: &ItemView,
        spec: AnimationSpec,
    ) -> Option<TweenAnimation<Point>> {
        let layout = view.layout_bounds()?;
        let target = destination.layout_bounds()?;
        let from = view.transform.translation;
        let to = Point::new(from.x, target.y - layout.y);
        Some(TweenAnimation::new(from, to, spec))
    }

    fn should_start_scrolling_to_start(&self, _container: Size, dragged: &ItemView) -> bool {
        dragged.visual_bounds().is_some_and(|bounds| bounds.y <= 0.0)
    }

    fn should_start_scrolling_to_end(&self, container: Size, dragged: &ItemView) -> bool {
        dragged
            .visual_bounds()
            .is_some_and(|bounds| bounds.bottom() >= container.height)
    }

    fn scroll(&self, host: &GestureHost, velocity: f32) -> f32 {
        host.scroll_by(Point::new(0.0, velocity)).y
    }

    fn will_hover_previous_divider(&self, previous: &ItemView, projected: Point) -> bool {
        previous
            .visual_bounds()
            .is_some_and(|bounds| projected.y < bounds.y)
    }

    fn will_hover_next_divider(&self, next: &ItemView, projected: Point) -> bool {
        next.visual_bounds()
            .is_some_and(|bounds| projected.y > bounds.y)
    }
}

use recycler_gesture_geometry::Size;

use crate::behavior::AxisBehavior;
use crate::error::GestureError;
use crate::gesture_constants::{
    DEFAULT_AUTOSCROLL_MAX_VELOCITY, DEFAULT_AUTOSCROLL_MIN_VELOCITY, DEFAULT_AUTOSCROLL_RAMP,
};
use crate::host::ItemView;

/// Velocity curve for scrolling while a dragged item sits at a list edge.
///
/// The step per frame grows linearly with how far the dragged item has
/// pushed past the edge, from `min_velocity` at the edge to `max_velocity`
/// at `ramp_distance` and beyond.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AutoscrollConfig {
    pub min_velocity: f32,
    pub max_velocity: f32,
    pub ramp_distance: f32,
}

impl Default for AutoscrollConfig {
    fn default() -> Self {
        Self {
            min_velocity: DEFAULT_AUTOSCROLL_MIN_VELOCITY,
            max_velocity: DEFAULT_AUTOSCROLL_MAX_VELOCITY,
            ramp_distance: DEFAULT_AUTOSCROLL_RAMP,
        }
    }
}

impl AutoscrollConfig {
    /// A constant step, regardless of penetration.
    pub fn constant(velocity: f32) -> Self {
        Self {
            min_velocity: velocity,
            max_velocity: velocity,
            ramp_distance: DEFAULT_AUTOSCROLL_RAMP,
        }
    }

    /// Scroll step for an item `penetration` pixels past the edge.
    pub fn velocity_for(&self, penetration: f32) -> f32 {
        let penetration = penetration.max(0.0);
        if self.ramp_distance <= 0.0 {
            return self.max_velocity;
        }
        let fraction = (penetration / self.ramp_distance).min(1.0);
        self.min_velocity + (self.max_velocity - self.min_velocity) * fraction
    }

    pub(crate) fn validate(&self) -> Result<(), GestureError> {
        let valid = self.min_velocity > 0.0
            && self.max_velocity >= self.min_velocity
            && self.max_velocity.is_finite();
        if valid {
            Ok(())
        } else {
            Err(GestureError::InvalidAutoscroll {
                min: self.min_velocity,
                max: self.max_velocity,
            })
        }
    }
}

/// Signed autoscroll step for the dragged view: negative towards the start of
/// the list, positive towards the end, zero away from both edges.
pub(crate) fn autoscroll_velocity(
    behavior: &dyn AxisBehavior,
    config: &AutoscrollConfig,
    container: Size,
    dragged: &ItemView,
) -> f32 {
    let Some(bounds) = dragged.visual_bounds() else {
        return 0.0;
    };
    let axis = behavior.axis();
    if behavior.should_start_scrolling_to_start(container, dragged) {
        -config.velocity_for(-axis.start(&bounds))
    } else if behavior.should_start_scrolling_to_end(container, dragged) {
        config.velocity_for(axis.end(&bounds) - axis.extent(container))
    } else {
        0.0
    }
}

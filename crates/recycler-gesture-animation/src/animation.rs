//! Time-based tweens with easing curves.
//!
//! A tween never owns a clock. It latches the first frame time it is given and
//! computes progress from there, so hosts can drive it from whatever frame
//! source they have.

use recycler_gesture_geometry::Point;

/// Trait for types that can be linearly interpolated.
pub trait Lerp {
    fn lerp(&self, target: &Self, fraction: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        self + (target - self) * fraction
    }
}

impl Lerp for f64 {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        self + (target - self) * fraction as f64
    }
}

impl Lerp for Point {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        Point::new(
            self.x.lerp(&target.x, fraction),
            self.y.lerp(&target.y, fraction),
        )
    }
}

/// Easing functions for animations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    /// Linear interpolation (no easing).
    LinearEasing,
    /// Ease in using cubic curve.
    EaseIn,
    /// Ease out using cubic curve.
    EaseOut,
    /// Ease in and out using cubic curve.
    EaseInOut,
    /// Fast out, slow in (material design standard).
    FastOutSlowInEasing,
    /// Linear out, slow in (material design).
    LinearOutSlowInEasing,
    /// Fast out, linear in (material design).
    FastOutLinearEasing,
}

impl Easing {
    /// Apply the easing function to a linear fraction [0, 1].
    pub fn transform(&self, fraction: f32) -> f32 {
        match self {
            Easing::LinearEasing => fraction,
            Easing::EaseIn => cubic_bezier(0.42, 0.0, 1.0, 1.0, fraction),
            Easing::EaseOut => cubic_bezier(0.0, 0.0, 0.58, 1.0, fraction),
            Easing::EaseInOut => cubic_bezier(0.42, 0.0, 0.58, 1.0, fraction),
            Easing::FastOutSlowInEasing => cubic_bezier(0.4, 0.0, 0.2, 1.0, fraction),
            Easing::LinearOutSlowInEasing => cubic_bezier(0.0, 0.0, 0.2, 1.0, fraction),
            Easing::FastOutLinearEasing => cubic_bezier(0.4, 0.0, 1.0, 1.0, fraction),
        }
    }
}

/// Cubic bezier curve approximation for easing.
fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, fraction: f32) -> f32 {
    if fraction <= 0.0 {
        return 0.0;
    }
    if fraction >= 1.0 {
        return 1.0;
    }

    let cx = 3.0 * x1;
    let bx = 3.0 * (x2 - x1) - cx;
    let ax = 1.0 - cx - bx;

    let cy = 3.0 * y1;
    let by = 3.0 * (y2 - y1) - cy;
    let ay = 1.0 - cy - by;

    fn sample_curve(a: f32, b: f32, c: f32, t: f32) -> f32 {
        ((a * t + b) * t + c) * t
    }

    fn sample_derivative(a: f32, b: f32, c: f32, t: f32) -> f32 {
        (3.0 * a * t + 2.0 * b) * t + c
    }

    // Newton-Raphson for the parametric `t` matching the x fraction, clamped
    // to [0, 1].
    let mut t = fraction;
    let mut newton_success = false;
    for _ in 0..8 {
        let x = sample_curve(ax, bx, cx, t) - fraction;
        if x.abs() < 1e-6 {
            newton_success = true;
            break;
        }
        let dx = sample_derivative(ax, bx, cx, t);
        if dx.abs() < 1e-6 {
            break;
        }
        t = (t - x / dx).clamp(0.0, 1.0);
    }

    if !newton_success {
        // Binary subdivision fallback.
        let mut t0 = 0.0;
        let mut t1 = 1.0;
        t = fraction;
        for _ in 0..16 {
            let x = sample_curve(ax, bx, cx, t);
            let delta = x - fraction;
            if delta.abs() < 1e-6 {
                break;
            }
            if delta > 0.0 {
                t1 = t;
            } else {
                t0 = t;
            }
            t = 0.5 * (t0 + t1);
        }
    }

    sample_curve(ay, by, cy, t)
}

/// Animation specification combining duration and easing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationSpec {
    /// Duration in milliseconds.
    pub duration_millis: u64,
    /// Easing function to apply.
    pub easing: Easing,
    /// Delay before starting animation in milliseconds.
    pub delay_millis: u64,
}

impl AnimationSpec {
    /// Create a tween animation with duration and easing.
    pub fn tween(duration_millis: u64, easing: Easing) -> Self {
        Self {
            duration_millis,
            easing,
            delay_millis: 0,
        }
    }

    /// Create a linear tween animation.
    pub fn linear(duration_millis: u64) -> Self {
        Self::tween(duration_millis, Easing::LinearEasing)
    }

    /// Add a delay before the animation starts.
    pub fn with_delay(mut self, delay_millis: u64) -> Self {
        self.delay_millis = delay_millis;
        self
    }
}

impl Default for AnimationSpec {
    fn default() -> Self {
        Self::tween(300, Easing::FastOutSlowInEasing)
    }
}

/// Value produced by one animation frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationFrame<T> {
    pub value: T,
    pub finished: bool,
}

/// A tween from `start` to `target`, advanced by frame timestamps.
///
/// Once started it always runs to its target; there is no way to retarget or
/// interrupt it. Callers that need a different destination start a new tween
/// from [`TweenAnimation::value`].
#[derive(Debug, Clone)]
pub struct TweenAnimation<T: Lerp + Clone> {
    start: T,
    target: T,
    current: T,
    spec: AnimationSpec,
    start_time_nanos: Option<u64>,
    finished: bool,
}

impl<T: Lerp + Clone> TweenAnimation<T> {
    pub fn new(start: T, target: T, spec: AnimationSpec) -> Self {
        Self {
            current: start.clone(),
            start,
            target,
            spec,
            start_time_nanos: None,
            finished: false,
        }
    }

    pub fn value(&self) -> T {
        self.current.clone()
    }

    pub fn target(&self) -> T {
        self.target.clone()
    }

    pub fn spec(&self) -> AnimationSpec {
        self.spec
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Advance to `frame_time_nanos`.
    ///
    /// The first call latches the start time, so it yields the start value
    /// unless the tween has zero duration.
    pub fn on_frame(&mut self, frame_time_nanos: u64) -> AnimationFrame<T> {
        if self.finished {
            return AnimationFrame {
                value: self.current.clone(),
                finished: true,
            };
        }

        let start_time = *self.start_time_nanos.get_or_insert(frame_time_nanos);
        let elapsed_nanos = frame_time_nanos.saturating_sub(start_time);
        let delay_nanos = self.spec.delay_millis * 1_000_000;
        let duration_nanos = self.spec.duration_millis * 1_000_000;

        if duration_nanos == 0 && elapsed_nanos >= delay_nanos {
            self.finish();
        } else if elapsed_nanos >= delay_nanos {
            let animation_elapsed = elapsed_nanos - delay_nanos;
            let linear_progress =
                (animation_elapsed as f32 / duration_nanos as f32).clamp(0.0, 1.0);
            if linear_progress >= 1.0 {
                self.finish();
            } else {
                let progress = self.spec.easing.transform(linear_progress);
                self.current = self.start.lerp(&self.target, progress);
            }
        }

        AnimationFrame {
            value: self.current.clone(),
            finished: self.finished,
        }
    }

    fn finish(&mut self) {
        self.current = self.target.clone();
        self.finished = true;
    }
}

#[cfg(test)]
#[path = "tests/animation_tests.rs"]
mod tests;

//! Swipe-to-dismiss attachment and its builder.

use std::fmt;
use std::rc::Rc;

use log::{debug, trace, warn};
use recycler_gesture_animation::{AnimationSpec, Easing, TweenAnimation};
use recycler_gesture_geometry::{Axis, Point};

use super::direction::SwipeDirection;
use super::session::{SwipePhase, SwipeSession};
use super::strategy::SwipeStrategy;
use crate::adapter::SwappableAdapter;
use crate::behavior::behavior_for;
use crate::error::GestureError;
use crate::gesture_constants::{DEFAULT_DISMISS_THRESHOLD, DRAG_THRESHOLD};
use crate::host::{AttachmentId, GestureHost, LockOwner};
use crate::input::{PointerEvent, PointerEventKind, PointerId};

/// Immutable swipe configuration, fixed at `build()`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeConfig {
    pub direction: SwipeDirection,
    /// Fraction of the item's extent along the swipe axis that commits a
    /// dismissal on release.
    pub dismiss_threshold: f32,
    /// Fade the item out as it moves away.
    pub fade_out: bool,
    pub commit_animation: AnimationSpec,
    pub cancel_animation: AnimationSpec,
    /// Movement along the swipe axis before the swipe claims the pointer.
    pub touch_slop: f32,
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            direction: SwipeDirection::Horizontal,
            dismiss_threshold: DEFAULT_DISMISS_THRESHOLD,
            fade_out: true,
            commit_animation: AnimationSpec::tween(200, Easing::FastOutLinearEasing),
            cancel_animation: AnimationSpec::tween(200, Easing::FastOutSlowInEasing),
            touch_slop: DRAG_THRESHOLD,
        }
    }
}

type DismissCallback = Box<dyn Fn(usize)>;

pub struct SwipeToDismissGestureBuilder {
    host: Option<GestureHost>,
    adapter: Option<Rc<dyn SwappableAdapter>>,
    strategy: Option<Box<dyn SwipeStrategy>>,
    config: SwipeConfig,
    on_dismiss: Option<DismissCallback>,
}

impl SwipeToDismissGestureBuilder {
    fn new(direction: SwipeDirection) -> Self {
        Self {
            host: None,
            adapter: None,
            strategy: None,
            config: SwipeConfig {
                direction,
                ..SwipeConfig::default()
            },
            on_dismiss: None,
        }
    }

    pub fn on(mut self, host: &GestureHost) -> Self {
        self.host = Some(host.clone());
        self
    }

    pub fn adapter<A: SwappableAdapter + 'static>(mut self, adapter: Rc<A>) -> Self {
        self.adapter = Some(adapter as Rc<dyn SwappableAdapter>);
        self
    }

    pub fn apply(mut self, strategy: impl SwipeStrategy + 'static) -> Self {
        self.strategy = Some(Box::new(strategy));
        self
    }

    pub fn dismiss_threshold(mut self, threshold: f32) -> Self {
        self.config.dismiss_threshold = threshold;
        self
    }

    pub fn fade_out(mut self, fade_out: bool) -> Self {
        self.config.fade_out = fade_out;
        self
    }

    pub fn commit_animation(mut self, spec: AnimationSpec) -> Self {
        self.config.commit_animation = spec;
        self
    }

    pub fn cancel_animation(mut self, spec: AnimationSpec) -> Self {
        self.config.cancel_animation = spec;
        self
    }

    pub fn touch_slop(mut self, touch_slop: f32) -> Self {
        self.config.touch_slop = touch_slop;
        self
    }

    /// Called with the removed position after a committed dismissal.
    pub fn on_dismiss(mut self, callback: impl Fn(usize) + 'static) -> Self {
        self.on_dismiss = Some(Box::new(callback));
        self
    }

    pub fn build(self) -> Result<SwipeToDismissGesture, GestureError> {
        if !self.config.direction.is_enabled() {
            return Err(GestureError::DisabledDirection(self.config.direction));
        }
        let threshold = self.config.dismiss_threshold;
        if !(threshold > 0.0 && threshold <= 1.0) {
            return Err(GestureError::InvalidDismissThreshold(threshold));
        }
        let host = self.host.ok_or(GestureError::MissingHost)?;
        let adapter = self.adapter.ok_or(GestureError::MissingAdapter)?;
        let strategy = self.strategy.ok_or(GestureError::MissingStrategy)?;

        Ok(SwipeToDismissGesture {
            id: host.next_attachment_id(),
            host,
            adapter,
            strategy,
            config: self.config,
            on_dismiss: self.on_dismiss,
            phase: SwipePhase::Idle,
            session: None,
        })
    }
}

/// Directional swipe-to-dismiss on one host list.
pub struct SwipeToDismissGesture {
    id: AttachmentId,
    host: GestureHost,
    adapter: Rc<dyn SwappableAdapter>,
    strategy: Box<dyn SwipeStrategy>,
    config: SwipeConfig,
    on_dismiss: Option<DismissCallback>,
    phase: SwipePhase,
    session: Option<SwipeSession>,
}

impl SwipeToDismissGesture {
    pub fn builder(direction: SwipeDirection) -> SwipeToDismissGestureBuilder {
        SwipeToDismissGestureBuilder::new(direction)
    }

    pub fn config(&self) -> &SwipeConfig {
        &self.config
    }

    pub fn host(&self) -> &GestureHost {
        &self.host
    }

    pub fn phase(&self) -> SwipePhase {
        self.phase
    }

    pub fn session(&self) -> Option<&SwipeSession> {
        self.session.as_ref()
    }

    pub fn needs_frame(&self) -> bool {
        matches!(self.phase, SwipePhase::Committing | SwipePhase::Cancelling)
    }

    /// Feeds one pointer event. Returns true when the gesture consumed it.
    pub fn on_pointer_event(&mut self, event: &PointerEvent) -> bool {
        match event.kind {
            PointerEventKind::Down => self.on_down(event),
            PointerEventKind::Move => self.on_move(event),
            PointerEventKind::Up => self.on_up(event),
            PointerEventKind::Cancel => {
                if !self.is_tracked(event) {
                    return false;
                }
                let swiping = self.phase == SwipePhase::Swiping;
                self.cancel();
                if swiping {
                    event.consume();
                }
                swiping
            }
            PointerEventKind::LongPress => {
                if self.is_tracked(event)
                    && event.is_consumed()
                    && self.phase == SwipePhase::Pressed
                {
                    self.finish("pointer claimed by another gesture");
                }
                false
            }
        }
    }

    /// Advances the commit or cancel animation.
    pub fn on_frame(&mut self, frame_time_nanos: u64) {
        if !self.needs_frame() {
            return;
        }
        let Some(session) = self.session.as_mut() else {
            self.phase = SwipePhase::Idle;
            return;
        };
        let Some(animation) = session.animation.as_mut() else {
            return;
        };
        let frame = animation.on_frame(frame_time_nanos);
        session.axis_offset = frame.value;
        self.apply_offset(frame.value);

        if frame.finished {
            match self.phase {
                SwipePhase::Committing => self.finish_commit(),
                _ => self.finish("cancel animation finished"),
            }
        }
    }

    /// Cancels the swipe from outside the pointer stream. A running commit
    /// or cancel animation is left to finish.
    pub fn cancel(&mut self) {
        match self.phase {
            SwipePhase::Pressed => self.finish("cancelled before swiping"),
            SwipePhase::Swiping => self.begin_cancel("cancelled"),
            SwipePhase::Idle | SwipePhase::Committing | SwipePhase::Cancelling => {}
        }
    }

    fn owner(&self, pointer: PointerId) -> LockOwner {
        LockOwner {
            attachment: self.id,
            pointer,
        }
    }

    fn is_tracked(&self, event: &PointerEvent) -> bool {
        self.session
            .as_ref()
            .is_some_and(|session| session.pointer == event.id)
    }

    fn swipe_axis(&self) -> Option<Axis> {
        self.session
            .as_ref()
            .and_then(|session| session.direction.axis())
    }

    fn on_down(&mut self, event: &PointerEvent) -> bool {
        if self.phase != SwipePhase::Idle || self.host.is_gesture_active() || event.is_consumed()
        {
            return false;
        }
        let Some(position) = self.host.position_at(event.position) else {
            return false;
        };
        if !self.adapter.is_position_valid(position) {
            return false;
        }
        let direction = self
            .strategy
            .dismiss_direction(position, self.config.direction)
            .restrict_to(self.config.direction);
        if !direction.is_enabled() {
            trace!("swipe: position {position} is not swipeable");
            return false;
        }
        if self
            .host
            .view(position)
            .and_then(|view| view.layout_bounds())
            .is_none()
        {
            return false;
        }

        self.session = Some(SwipeSession::new(
            event.id,
            position,
            direction,
            event.position,
            self.adapter.item_count(),
        ));
        self.phase = SwipePhase::Pressed;
        debug!("swipe: pressed position {position} ({direction:?})");
        false
    }

    fn on_move(&mut self, event: &PointerEvent) -> bool {
        if !self.is_tracked(event) {
            return false;
        }
        match self.phase {
            SwipePhase::Pressed => self.on_move_pressed(event),
            SwipePhase::Swiping => {
                event.consume();
                self.swipe_to(event.position);
                true
            }
            SwipePhase::Idle | SwipePhase::Committing | SwipePhase::Cancelling => false,
        }
    }

    fn on_move_pressed(&mut self, event: &PointerEvent) -> bool {
        let (Some(axis), Some(session)) = (self.swipe_axis(), self.session.as_ref()) else {
            return false;
        };
        let delta = event.position - session.down_position;
        let along = axis.main(delta).abs();
        let across = axis.cross_axis().main(delta).abs();
        let pointer = session.pointer;

        if across > self.config.touch_slop && across > along {
            self.finish("pointer moved across the swipe axis");
            return false;
        }
        if along <= self.config.touch_slop {
            return false;
        }
        if !self.host.try_lock(self.owner(pointer)) {
            self.finish("another gesture is active");
            return false;
        }

        self.phase = SwipePhase::Swiping;
        debug!("swipe: started");
        event.consume();
        self.swipe_to(event.position);
        true
    }

    fn on_up(&mut self, event: &PointerEvent) -> bool {
        if !self.is_tracked(event) {
            return false;
        }
        match self.phase {
            SwipePhase::Pressed => {
                self.finish("pointer up before swiping");
                false
            }
            SwipePhase::Swiping => {
                event.consume();
                self.resolve();
                true
            }
            SwipePhase::Idle | SwipePhase::Committing | SwipePhase::Cancelling => false,
        }
    }

    fn swipe_to(&mut self, pointer: Point) {
        let Some(axis) = self.swipe_axis() else {
            return;
        };
        let item_count = self.adapter.item_count();
        let Some(session) = self.session.as_mut() else {
            return;
        };
        if session.item_count != item_count {
            warn!(
                "swipe: item count changed from {} to {item_count} during swipe",
                session.item_count
            );
            self.begin_cancel("item count changed");
            return;
        }

        let offset = session
            .direction
            .clamp(axis.main(pointer - session.down_position));
        trace!("swipe: offset {offset}");
        session.axis_offset = offset;
        self.apply_offset(offset);
    }

    /// Publishes `offset` as the target view's transform.
    fn apply_offset(&self, offset: f32) {
        let (Some(axis), Some(session)) = (self.swipe_axis(), self.session.as_ref()) else {
            return;
        };
        let position = session.target_position;
        let Some(mut view) = self.host.view(position) else {
            return;
        };
        let Some(layout) = view.layout_bounds() else {
            return;
        };

        let delta = axis.point(offset);
        behavior_for(axis).move_view(delta.x, delta.y, &mut view);
        if self.config.fade_out {
            view.transform.alpha = fade_alpha(offset, axis.extent(layout.size()));
        }
        self.host.set_transform(position, view.transform);
    }

    /// Commits or cancels a released swipe.
    fn resolve(&mut self) {
        let (Some(axis), Some(session)) = (self.swipe_axis(), self.session.as_ref()) else {
            return;
        };
        let offset = session.axis_offset;
        let Some(layout) = self
            .host
            .view(session.target_position)
            .and_then(|view| view.layout_bounds())
        else {
            self.begin_cancel("target view is not measured");
            return;
        };
        let extent = axis.extent(layout.size());
        let fraction = if extent > 0.0 {
            offset.abs() / extent
        } else {
            0.0
        };

        if fraction < self.config.dismiss_threshold || !session.direction.allows(offset) {
            self.begin_cancel("released below threshold");
            return;
        }

        let container = axis.extent(self.host.viewport_size());
        let target = if offset > 0.0 {
            container - axis.start(&layout)
        } else {
            -axis.end(&layout)
        };
        let spec = self.config.commit_animation;
        if let Some(session) = self.session.as_mut() {
            session.committed_direction = SwipeDirection::from_offset(axis, offset);
            session.animation = Some(TweenAnimation::new(offset, target, spec));
            debug!(
                "swipe: committing position {} ({:?})",
                session.target_position, session.committed_direction
            );
        }
        self.phase = SwipePhase::Committing;
    }

    fn begin_cancel(&mut self, reason: &'static str) {
        let spec = self.config.cancel_animation;
        let Some(session) = self.session.as_mut() else {
            self.phase = SwipePhase::Idle;
            return;
        };
        debug!(
            "swipe: cancelling position {} ({reason})",
            session.target_position
        );
        session.committed_direction = SwipeDirection::None;
        session.animation = Some(TweenAnimation::new(session.axis_offset, 0.0, spec));
        self.phase = SwipePhase::Cancelling;
    }

    fn finish_commit(&mut self) {
        let Some((position, pointer, expected)) = self
            .session
            .as_ref()
            .map(|session| (session.target_position, session.pointer, session.item_count))
        else {
            self.phase = SwipePhase::Idle;
            return;
        };
        let item_count = self.adapter.item_count();
        if expected != item_count {
            warn!(
                "swipe: item count changed from {expected} to {item_count}; \
                 not removing {position}"
            );
            self.finish("item count changed");
            return;
        }

        match self.adapter.remove(position) {
            Ok(()) => {
                self.host.with_views_mut(|views| views.remove(position));
                self.session = None;
                self.phase = SwipePhase::Idle;
                self.host.unlock(self.owner(pointer));
                self.host.rebind(position..self.adapter.item_count());
                debug!("swipe: dismissed position {position}");
                if let Some(on_dismiss) = &self.on_dismiss {
                    on_dismiss(position);
                }
            }
            Err(err) => {
                warn!("swipe: remove({position}) rejected: {err}");
                self.finish("adapter rejected removal");
            }
        }
    }

    /// Ends the session with the target back at rest.
    fn finish(&mut self, reason: &'static str) {
        if let Some(session) = self.session.take() {
            // A pressed swipe has not moved the view; another gesture may own it.
            if self.phase != SwipePhase::Pressed {
                self.host.reset_transform(session.target_position);
            }
            self.host.unlock(self.owner(session.pointer));
            debug!(
                "swipe: released position {} ({reason})",
                session.target_position
            );
        }
        self.phase = SwipePhase::Idle;
    }
}

/// Opacity for an item moved `offset` along an axis where it spans `extent`.
fn fade_alpha(offset: f32, extent: f32) -> f32 {
    if extent <= 0.0 {
        return 1.0;
    }
    1.0 - (offset.abs() / extent).min(1.0)
}

impl fmt::Debug for SwipeToDismissGesture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SwipeToDismissGesture")
            .field("id", &self.id)
            .field("config", &self.config)
            .field("phase", &self.phase)
            .field("session", &self.session)
            .finish()
    }
}

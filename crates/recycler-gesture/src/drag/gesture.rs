//! Drag-to-reorder attachment and its builder.

use std::fmt;
use std::rc::Rc;

use log::{debug, trace, warn};
use recycler_gesture_animation::{AnimationSpec, Easing};
use recycler_gesture_geometry::{Axis, Rect};

use super::autoscroll::{autoscroll_velocity, AutoscrollConfig};
use super::session::{DragPhase, DragSession};
use super::strategy::DragStrategy;
use crate::adapter::SwappableAdapter;
use crate::behavior::{behavior_for, AxisBehavior};
use crate::error::GestureError;
use crate::host::{AttachmentId, GestureHost, LockOwner};
use crate::input::{PointerEvent, PointerEventKind, PointerId};

/// Immutable drag configuration, fixed at `build()`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragConfig {
    /// Axis items are reordered along.
    pub orientation: Axis,
    pub autoscroll: AutoscrollConfig,
    pub drop_animation: AnimationSpec,
}

impl Default for DragConfig {
    fn default() -> Self {
        Self {
            orientation: Axis::Vertical,
            autoscroll: AutoscrollConfig::default(),
            drop_animation: AnimationSpec::tween(250, Easing::FastOutSlowInEasing),
        }
    }
}

type DropCallback = Box<dyn Fn(usize, usize)>;

pub struct DragDropGestureBuilder {
    host: Option<GestureHost>,
    adapter: Option<Rc<dyn SwappableAdapter>>,
    strategy: Option<Box<dyn DragStrategy>>,
    config: DragConfig,
    on_drop: Option<DropCallback>,
}

impl Default for DragDropGestureBuilder {
    fn default() -> Self {
        Self {
            host: None,
            adapter: None,
            strategy: None,
            config: DragConfig::default(),
            on_drop: None,
        }
    }
}

impl DragDropGestureBuilder {
    /// The list the gesture decorates.
    pub fn on(mut self, host: &GestureHost) -> Self {
        self.host = Some(host.clone());
        self
    }

    pub fn adapter<A: SwappableAdapter + 'static>(mut self, adapter: Rc<A>) -> Self {
        self.adapter = Some(adapter as Rc<dyn SwappableAdapter>);
        self
    }

    pub fn apply(mut self, strategy: impl DragStrategy + 'static) -> Self {
        self.strategy = Some(Box::new(strategy));
        self
    }

    pub fn horizontal(self) -> Self {
        self.orientation(Axis::Horizontal)
    }

    pub fn vertical(self) -> Self {
        self.orientation(Axis::Vertical)
    }

    pub fn orientation(mut self, orientation: Axis) -> Self {
        self.config.orientation = orientation;
        self
    }

    pub fn autoscroll(mut self, autoscroll: AutoscrollConfig) -> Self {
        self.config.autoscroll = autoscroll;
        self
    }

    pub fn drop_animation(mut self, spec: AnimationSpec) -> Self {
        self.config.drop_animation = spec;
        self
    }

    /// Called with `(origin, destination)` once a drag has settled.
    pub fn on_drop(mut self, callback: impl Fn(usize, usize) + 'static) -> Self {
        self.on_drop = Some(Box::new(callback));
        self
    }

    pub fn build(self) -> Result<DragDropGesture, GestureError> {
        let host = self.host.ok_or(GestureError::MissingHost)?;
        let adapter = self.adapter.ok_or(GestureError::MissingAdapter)?;
        let strategy = self.strategy.ok_or(GestureError::MissingStrategy)?;
        self.config.autoscroll.validate()?;

        Ok(DragDropGesture {
            id: host.next_attachment_id(),
            host,
            adapter,
            strategy,
            behavior: behavior_for(self.config.orientation),
            config: self.config,
            on_drop: self.on_drop,
            phase: DragPhase::Idle,
            session: None,
        })
    }
}

/// Long-press drag-to-reorder on one host list.
///
/// Swaps are applied to the adapter as the item crosses its neighbors, one
/// swap per pointer move at most, so the adapter order is final by the time
/// the pointer lifts. The drop only animates the item into its slot.
pub struct DragDropGesture {
    id: AttachmentId,
    host: GestureHost,
    adapter: Rc<dyn SwappableAdapter>,
    strategy: Box<dyn DragStrategy>,
    behavior: &'static dyn AxisBehavior,
    config: DragConfig,
    on_drop: Option<DropCallback>,
    phase: DragPhase,
    session: Option<DragSession>,
}

impl DragDropGesture {
    pub fn builder() -> DragDropGestureBuilder {
        DragDropGestureBuilder::default()
    }

    pub fn config(&self) -> &DragConfig {
        &self.config
    }

    pub fn host(&self) -> &GestureHost {
        &self.host
    }

    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    /// Whether the host should keep delivering `on_frame`.
    pub fn needs_frame(&self) -> bool {
        match self.phase {
            DragPhase::Dragging => self
                .session
                .as_ref()
                .is_some_and(|session| session.autoscroll_velocity != 0.0),
            DragPhase::Dropping => true,
            DragPhase::Idle | DragPhase::Pressed => false,
        }
    }

    /// Feeds one pointer event. Returns true when the gesture consumed it.
    pub fn on_pointer_event(&mut self, event: &PointerEvent) -> bool {
        match event.kind {
            PointerEventKind::Down => self.on_down(event),
            PointerEventKind::LongPress => self.on_long_press(event),
            PointerEventKind::Move => self.on_move(event),
            PointerEventKind::Up => self.on_release(event, "pointer up"),
            PointerEventKind::Cancel => self.on_release(event, "pointer cancelled"),
        }
    }

    /// Advances autoscroll or the drop animation.
    pub fn on_frame(&mut self, frame_time_nanos: u64) {
        match self.phase {
            DragPhase::Dragging => self.autoscroll_step(),
            DragPhase::Dropping => self.advance_drop(frame_time_nanos),
            DragPhase::Idle | DragPhase::Pressed => {}
        }
    }

    /// Cancels the drag from outside the pointer stream, e.g. when a parent
    /// intercepts it. A running drop animation is left to finish.
    pub fn cancel(&mut self) {
        match self.phase {
            DragPhase::Pressed => self.reset("cancelled before long press"),
            DragPhase::Dragging => self.begin_drop("cancelled"),
            DragPhase::Idle | DragPhase::Dropping => {}
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

    fn on_down(&mut self, event: &PointerEvent) -> bool {
        if self.phase != DragPhase::Idle || self.host.is_gesture_active() || event.is_consumed() {
            return false;
        }
        let Some(position) = self.host.position_at(event.position) else {
            return false;
        };
        if !self.adapter.is_position_valid(position) || !self.strategy.is_item_draggable(position)
        {
            return false;
        }
        let Some(bounds) = self.host.view(position).and_then(|view| view.visual_bounds()) else {
            return false;
        };

        self.session = Some(DragSession::new(
            event.id,
            position,
            event.position - bounds.origin(),
            event.position,
            self.adapter.item_count(),
        ));
        self.phase = DragPhase::Pressed;
        debug!("drag: pressed position {position}");
        // Down stays unconsumed; until the long press the host may still scroll.
        false
    }

    fn on_long_press(&mut self, event: &PointerEvent) -> bool {
        if self.phase != DragPhase::Pressed || !self.is_tracked(event) {
            return false;
        }
        let Some(session) = self.session.as_ref() else {
            return false;
        };
        let position = session.current_position;
        let pointer = session.pointer;

        if session.item_count != self.adapter.item_count()
            || !self.strategy.is_item_draggable(position)
        {
            self.reset("item no longer draggable");
            return false;
        }
        if !self.host.try_lock(self.owner(pointer)) {
            self.reset("another gesture is active");
            return false;
        }

        self.phase = DragPhase::Dragging;
        let mut transform = self.host.views().transform(position);
        transform.elevated = true;
        self.host.set_transform(position, transform);
        event.consume();
        debug!("drag: started at position {position}");
        true
    }

    fn on_move(&mut self, event: &PointerEvent) -> bool {
        if !self.is_tracked(event) {
            return false;
        }
        match self.phase {
            DragPhase::Pressed => {
                if let Some(session) = self.session.as_mut() {
                    session.last_pointer = event.position;
                }
                false
            }
            DragPhase::Dragging => {
                event.consume();
                self.drag_to(event);
                true
            }
            DragPhase::Idle | DragPhase::Dropping => false,
        }
    }

    fn on_release(&mut self, event: &PointerEvent, reason: &'static str) -> bool {
        if !self.is_tracked(event) {
            return false;
        }
        match self.phase {
            DragPhase::Pressed => {
                self.reset(reason);
                false
            }
            DragPhase::Dragging => {
                event.consume();
                self.begin_drop(reason);
                true
            }
            DragPhase::Idle | DragPhase::Dropping => false,
        }
    }

    fn drag_to(&mut self, event: &PointerEvent) {
        if let Some(session) = self.session.as_mut() {
            session.last_pointer = event.position;
        }
        if let Err(reason) = self.check_session() {
            self.begin_drop(reason);
            return;
        }
        let container = Rect::from_size(self.host.viewport_size());
        if !container.contains(event.position.x, event.position.y) {
            self.begin_drop("pointer left the list");
            return;
        }

        self.position_dragged_view();
        if self.try_swap() {
            self.position_dragged_view();
        }
        self.update_autoscroll();
    }

    /// Session is still backed by the adapter and the strategy.
    fn check_session(&self) -> Result<(), &'static str> {
        let session = self.session.as_ref().ok_or("no session")?;
        if self.adapter.item_count() != session.item_count {
            warn!(
                "drag: item count changed from {} to {} during drag",
                session.item_count,
                self.adapter.item_count()
            );
            return Err("item count changed");
        }
        let position = session.current_position;
        // Swaps may land on hoverable slots that are not draggable themselves.
        if !self.strategy.is_item_draggable(position) && !self.strategy.is_item_hoverable(position)
        {
            return Err("item no longer draggable");
        }
        Ok(())
    }

    /// Translates the dragged view under the pointer, stopping at dividers.
    fn position_dragged_view(&self) {
        let Some(session) = self.session.as_ref() else {
            return;
        };
        let position = session.current_position;
        let Some(mut dragged) = self.host.view(position) else {
            return;
        };
        let Some(layout) = dragged.layout_bounds() else {
            return;
        };
        let axis = self.behavior.axis();
        let mut projected = session.last_pointer - session.pointer_offset;

        if position > 0 && !self.strategy.is_item_hoverable(position - 1) {
            if let Some(previous) = self.host.view(position - 1) {
                if self.behavior.will_hover_previous_divider(&previous, projected) {
                    if let Some(bounds) = previous.visual_bounds() {
                        trace!("drag: divider at {} blocks", position - 1);
                        projected = axis.with_main(projected, axis.start(&bounds));
                    }
                }
            }
        }
        if position + 1 < session.item_count && !self.strategy.is_item_hoverable(position + 1) {
            if let Some(next) = self.host.view(position + 1) {
                if self.behavior.will_hover_next_divider(&next, projected) {
                    if let Some(bounds) = next.visual_bounds() {
                        trace!("drag: divider at {} blocks", position + 1);
                        projected = axis.with_main(projected, axis.start(&bounds));
                    }
                }
            }
        }

        let delta = projected - layout.origin();
        self.behavior.move_view(delta.x, delta.y, &mut dragged);
        self.host.set_transform(position, dragged.transform);
    }

    /// Swaps with at most one neighbor. Returns true if a swap was applied.
    fn try_swap(&mut self) -> bool {
        let Some(session) = self.session.as_ref() else {
            return false;
        };
        let position = session.current_position;
        let Some(dragged) = self.host.view(position) else {
            return false;
        };
        let previous = position
            .checked_sub(1)
            .and_then(|previous| self.host.view(previous));
        let next = if position + 1 < session.item_count {
            self.host.view(position + 1)
        } else {
            None
        };

        let target = if self
            .behavior
            .should_switch_with_previous(&dragged, previous.as_ref())
            && self.strategy.is_item_hoverable(position - 1)
        {
            position - 1
        } else if self.behavior.should_switch_with_next(&dragged, next.as_ref())
            && self.strategy.is_item_hoverable(position + 1)
        {
            position + 1
        } else {
            return false;
        };

        if let Err(err) = self.adapter.swap(position, target) {
            warn!("drag: swap {position} <-> {target} rejected: {err}");
            self.begin_drop("adapter rejected swap");
            return false;
        }
        self.host.with_views_mut(|views| views.swap(position, target));
        if let Some(session) = self.session.as_mut() {
            session.current_position = target;
        }
        self.host
            .rebind(position.min(target)..position.max(target) + 1);
        debug!("drag: swapped {position} -> {target}");
        true
    }

    fn update_autoscroll(&mut self) {
        if self.phase != DragPhase::Dragging {
            return;
        }
        let Some(position) = self.session.as_ref().map(|session| session.current_position) else {
            return;
        };
        let container = self.host.viewport_size();
        let velocity = self
            .host
            .view(position)
            .map(|dragged| {
                autoscroll_velocity(self.behavior, &self.config.autoscroll, container, &dragged)
            })
            .unwrap_or(0.0);
        if let Some(session) = self.session.as_mut() {
            if session.autoscroll_velocity != velocity {
                trace!("drag: autoscroll velocity {velocity}");
            }
            session.autoscroll_velocity = velocity;
        }
    }

    fn autoscroll_step(&mut self) {
        let velocity = self
            .session
            .as_ref()
            .map_or(0.0, |session| session.autoscroll_velocity);
        if velocity == 0.0 {
            return;
        }
        if let Err(reason) = self.check_session() {
            self.begin_drop(reason);
            return;
        }

        let consumed = self.behavior.scroll(&self.host, velocity);
        if consumed != 0.0 {
            self.position_dragged_view();
            if self.try_swap() {
                self.position_dragged_view();
            }
        }
        self.update_autoscroll();
    }

    fn begin_drop(&mut self, reason: &'static str) {
        let Some(position) = self.session.as_ref().map(|session| session.current_position) else {
            self.phase = DragPhase::Idle;
            return;
        };
        let animation = self.host.view(position).and_then(|view| {
            self.behavior
                .drop_animation(&view, &view, self.config.drop_animation)
        });
        debug!("drag: dropping at position {position} ({reason})");
        self.phase = DragPhase::Dropping;

        let Some(animation) = animation else {
            self.finish_drop();
            return;
        };
        if let Some(session) = self.session.as_mut() {
            session.autoscroll_velocity = 0.0;
            session.drop_animation = Some(animation);
        }
    }

    fn advance_drop(&mut self, frame_time_nanos: u64) {
        let Some(session) = self.session.as_mut() else {
            self.phase = DragPhase::Idle;
            return;
        };
        let position = session.current_position;
        let Some(animation) = session.drop_animation.as_mut() else {
            self.finish_drop();
            return;
        };
        let frame = animation.on_frame(frame_time_nanos);

        let mut transform = self.host.views().transform(position);
        transform.translation = frame.value;
        self.host.set_transform(position, transform);
        if frame.finished {
            self.finish_drop();
        }
    }

    fn finish_drop(&mut self) {
        self.phase = DragPhase::Idle;
        let Some(session) = self.session.take() else {
            return;
        };
        self.host.reset_transform(session.current_position);
        self.host.unlock(self.owner(session.pointer));
        debug!(
            "drag: dropped item from {} at {}",
            session.origin_position, session.current_position
        );
        if let Some(on_drop) = &self.on_drop {
            on_drop(session.origin_position, session.current_position);
        }
    }

    fn reset(&mut self, reason: &'static str) {
        if let Some(session) = self.session.take() {
            self.host.unlock(self.owner(session.pointer));
            debug!(
                "drag: released position {} ({reason})",
                session.current_position
            );
        }
        self.phase = DragPhase::Idle;
    }
}

impl fmt::Debug for DragDropGesture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DragDropGesture")
            .field("id", &self.id)
            .field("config", &self.config)
            .field("phase", &self.phase)
            .field("session", &self.session)
            .finish()
    }
}

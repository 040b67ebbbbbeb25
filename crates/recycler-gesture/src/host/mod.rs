//! Binding between gestures and the host list widget.

mod view_table;

pub use view_table::{Geometry, ItemTransform, ItemView, ViewHandle, ViewTable};

use std::cell::{Cell, Ref, RefCell};
use std::ops::Range;
use std::rc::Rc;

use recycler_gesture_geometry::{Point, Size};

use crate::input::PointerId;

/// The scrollable list widget gestures decorate.
///
/// All calls happen on the UI thread, synchronously, from within pointer or
/// frame callbacks.
pub trait ListWidget {
    /// Size of the list container.
    fn viewport_size(&self) -> Size;

    /// Publishes the current item layout: call [`ViewTable::begin_layout`]
    /// with the adapter's item count, then [`ViewTable::bind`] every position
    /// that has a view.
    fn layout_items(&self, table: &mut ViewTable);

    /// Scrolls the content by `delta` and returns the part actually consumed.
    fn scroll_by(&self, delta: Point) -> Point;

    /// Requests that views for `positions` be rebound to their items.
    fn rebind(&self, positions: Range<usize>);

    /// Requests a redraw; transforms in the view table changed.
    fn invalidate(&self);
}

/// Identifies one attached gesture on a host.
pub(crate) type AttachmentId = u64;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct LockOwner {
    pub attachment: AttachmentId,
    pub pointer: PointerId,
}

struct GestureHostInner {
    widget: Rc<dyn ListWidget>,
    views: RefCell<ViewTable>,
    lock: Cell<Option<LockOwner>>,
    next_attachment_id: Cell<AttachmentId>,
}

/// A host list widget prepared for gestures.
///
/// Cloning is cheap and every clone refers to the same widget, view table and
/// gesture lock. All gestures built on one host share the lock, so at most one
/// of them runs a session at a time.
#[derive(Clone)]
pub struct GestureHost {
    inner: Rc<GestureHostInner>,
}

impl GestureHost {
    pub fn new(widget: Rc<dyn ListWidget>) -> Self {
        let host = Self {
            inner: Rc::new(GestureHostInner {
                widget,
                views: RefCell::new(ViewTable::new()),
                lock: Cell::new(None),
                next_attachment_id: Cell::new(1),
            }),
        };
        host.refresh_layout();
        host
    }

    /// Re-reads item layout from the widget.
    ///
    /// Hosts call this after their own layout passes; gestures call it after
    /// every scroll or adapter mutation they cause.
    pub fn refresh_layout(&self) {
        let mut views = self.inner.views.borrow_mut();
        self.inner.widget.layout_items(&mut views);
    }

    /// The view table, for drawing. Do not hold the borrow across calls into
    /// a gesture.
    pub fn views(&self) -> Ref<'_, ViewTable> {
        self.inner.views.borrow()
    }

    pub fn view(&self, position: usize) -> Option<ItemView> {
        self.inner.views.borrow().view(position)
    }

    pub fn position_at(&self, point: Point) -> Option<usize> {
        self.inner.views.borrow().position_at(point)
    }

    pub fn viewport_size(&self) -> Size {
        self.inner.widget.viewport_size()
    }

    /// Whether some gesture on this host currently runs a session.
    pub fn is_gesture_active(&self) -> bool {
        self.inner.lock.get().is_some()
    }

    pub(crate) fn with_views_mut<R>(&self, f: impl FnOnce(&mut ViewTable) -> R) -> R {
        f(&mut self.inner.views.borrow_mut())
    }

    pub(crate) fn set_transform(&self, position: usize, transform: ItemTransform) {
        self.with_views_mut(|views| views.set_transform(position, transform));
        self.inner.widget.invalidate();
    }

    pub(crate) fn reset_transform(&self, position: usize) {
        self.set_transform(position, ItemTransform::IDENTITY);
    }

    pub(crate) fn scroll_by(&self, delta: Point) -> Point {
        let consumed = self.inner.widget.scroll_by(delta);
        self.refresh_layout();
        consumed
    }

    pub(crate) fn rebind(&self, positions: Range<usize>) {
        self.inner.widget.rebind(positions);
        self.refresh_layout();
    }

    pub(crate) fn next_attachment_id(&self) -> AttachmentId {
        let id = self.inner.next_attachment_id.get();
        self.inner.next_attachment_id.set(id + 1);
        id
    }

    /// Takes the gesture lock. Succeeds if it is free or already held by `owner`.
    pub(crate) fn try_lock(&self, owner: LockOwner) -> bool {
        match self.inner.lock.get() {
            None => {
                self.inner.lock.set(Some(owner));
                true
            }
            Some(current) => current == owner,
        }
    }

    pub(crate) fn unlock(&self, owner: LockOwner) {
        if self.inner.lock.get() == Some(owner) {
            self.inner.lock.set(None);
        }
    }
}

#[cfg(test)]
#[path = "../tests/view_table_tests.rs"]
mod tests;

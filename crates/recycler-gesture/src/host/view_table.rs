//! Position-indexed table of bound item views.
//!
//! The host fills the table during layout; gestures read geometry from it and
//! write per-item transforms back, which the host applies when drawing. This
//! keeps every per-frame geometry query a table lookup instead of a walk over
//! the host's view tree.

use recycler_gesture_geometry::{Point, Rect};

/// Opaque identifier of the host view currently bound to a position.
pub type ViewHandle = u64;

/// Layout state of a bound view.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Geometry {
    /// Bound but not laid out yet; gestures make no decision against it.
    Pending,
    /// Untransformed bounds in container coordinates.
    Measured(Rect),
}

impl Geometry {
    pub fn measured(&self) -> Option<Rect> {
        match self {
            Geometry::Measured(rect) => Some(*rect),
            Geometry::Pending => None,
        }
    }
}

/// Visual override a gesture applies on top of layout.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ItemTransform {
    pub translation: Point,
    pub alpha: f32,
    pub elevated: bool,
}

impl ItemTransform {
    pub const IDENTITY: ItemTransform = ItemTransform {
        translation: Point::ZERO,
        alpha: 1.0,
        elevated: false,
    };

    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }
}

impl Default for ItemTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Snapshot of one bound position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ItemView {
    pub position: usize,
    pub handle: ViewHandle,
    pub geometry: Geometry,
    pub transform: ItemTransform,
}

impl ItemView {
    /// Bounds from layout, ignoring the transform.
    pub fn layout_bounds(&self) -> Option<Rect> {
        self.geometry.measured()
    }

    /// Bounds as drawn, with the translation applied.
    pub fn visual_bounds(&self) -> Option<Rect> {
        let translation = self.transform.translation;
        self.layout_bounds()
            .map(|rect| rect.translate(translation.x, translation.y))
    }
}

#[derive(Clone, Copy, Debug, Default)]
struct ViewSlot {
    handle: Option<ViewHandle>,
    geometry: Option<Geometry>,
    transform: ItemTransform,
}

#[derive(Debug, Default)]
pub struct ViewTable {
    slots: Vec<ViewSlot>,
}

impl ViewTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of positions the table tracks (the adapter's item count at the
    /// last layout).
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Starts a layout pass over `item_count` positions.
    ///
    /// Every binding is dropped; transforms stay with their positions.
    pub fn begin_layout(&mut self, item_count: usize) {
        self.slots.resize_with(item_count, ViewSlot::default);
        for slot in &mut self.slots {
            slot.handle = None;
            slot.geometry = None;
        }
    }

    /// Binds `handle` to `position`. Positions beyond the current length are
    /// ignored; call [`ViewTable::begin_layout`] first.
    pub fn bind(&mut self, position: usize, handle: ViewHandle, geometry: Geometry) {
        if let Some(slot) = self.slots.get_mut(position) {
            slot.handle = Some(handle);
            slot.geometry = Some(geometry);
        }
    }

    /// The view bound to `position`, or `None` when nothing is bound there.
    pub fn view(&self, position: usize) -> Option<ItemView> {
        let slot = self.slots.get(position)?;
        Some(ItemView {
            position,
            handle: slot.handle?,
            geometry: slot.geometry?,
            transform: slot.transform,
        })
    }

    pub fn transform(&self, position: usize) -> ItemTransform {
        self.slots
            .get(position)
            .map(|slot| slot.transform)
            .unwrap_or_default()
    }

    /// Transform to draw for `handle`, if it is bound.
    pub fn transform_for_handle(&self, handle: ViewHandle) -> Option<ItemTransform> {
        self.slots
            .iter()
            .find(|slot| slot.handle == Some(handle))
            .map(|slot| slot.transform)
    }

    pub fn set_transform(&mut self, position: usize, transform: ItemTransform) {
        if let Some(slot) = self.slots.get_mut(position) {
            slot.transform = transform;
        }
    }

    pub fn reset_transform(&mut self, position: usize) {
        self.set_transform(position, ItemTransform::IDENTITY);
    }

    /// Exchanges the transforms of `a` and `b`, following an adapter swap.
    pub fn swap(&mut self, a: usize, b: usize) {
        if a < self.slots.len() && b < self.slots.len() {
            let ta = self.slots[a].transform;
            self.slots[a].transform = self.slots[b].transform;
            self.slots[b].transform = ta;
        }
    }

    /// Drops `position`, following an adapter removal. Later transforms shift
    /// down one slot; all geometry is stale until the next layout pass.
    pub fn remove(&mut self, position: usize) {
        if position < self.slots.len() {
            self.slots.remove(position);
            for slot in &mut self.slots {
                slot.geometry = None;
            }
        }
    }

    /// Position whose laid-out bounds contain `point`.
    pub fn position_at(&self, point: Point) -> Option<usize> {
        self.slots.iter().enumerate().find_map(|(position, slot)| {
            match slot.geometry {
                Some(Geometry::Measured(rect)) if rect.contains(point.x, point.y) => {
                    Some(position)
                }
                _ => None,
            }
        })
    }

    /// Positions that currently carry a non-identity transform.
    pub fn transformed_positions(&self) -> impl Iterator<Item = usize> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, slot)| !slot.transform.is_identity())
            .map(|(position, _)| position)
    }
}

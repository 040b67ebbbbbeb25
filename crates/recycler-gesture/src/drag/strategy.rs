/// Caller policy deciding which positions take part in drag-to-reorder.
///
/// A position that is draggable but not hoverable can be picked up but never
/// receives another dragged item; a position that is neither acts as a
/// divider the dragged item cannot pass.
pub trait DragStrategy {
    fn is_item_draggable(&self, position: usize) -> bool {
        let _ = position;
        true
    }

    /// Whether a dragged item may be swapped into `position`.
    fn is_item_hoverable(&self, position: usize) -> bool {
        let _ = position;
        true
    }
}

/// Every position is draggable and hoverable.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultDragStrategy;

impl DragStrategy for DefaultDragStrategy {}

/// [`DragStrategy`] backed by two closures.
pub struct FnDragStrategy<D, H> {
    draggable: D,
    hoverable: H,
}

impl<D, H> DragStrategy for FnDragStrategy<D, H>
where
    D: Fn(usize) -> bool,
    H: Fn(usize) -> bool,
{
    fn is_item_draggable(&self, position: usize) -> bool {
        (self.draggable)(position)
    }

    fn is_item_hoverable(&self, position: usize) -> bool {
        (self.hoverable)(position)
    }
}

pub fn drag_strategy_fn<D, H>(draggable: D, hoverable: H) -> FnDragStrategy<D, H>
where
    D: Fn(usize) -> bool,
    H: Fn(usize) -> bool,
{
    FnDragStrategy {
        draggable,
        hoverable,
    }
}

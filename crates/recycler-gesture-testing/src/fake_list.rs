//! Headless list host with uniformly sized items.

use std::cell::{Cell, RefCell};
use std::collections::BTreeSet;
use std::ops::Range;
use std::rc::Rc;

use recycler_gesture::{Axis, Geometry, ListWidget, Point, Rect, Size, SwappableAdapter, ViewTable};

/// A scrolling list that lays out `item_extent`-sized items along `axis`.
///
/// Every visible position is bound, with the position itself as the view
/// handle. Scrolling is clamped to the content. Rebind requests and
/// invalidations are recorded for assertions.
pub struct FakeList {
    axis: Axis,
    viewport: Size,
    item_extent: f32,
    adapter: Rc<dyn SwappableAdapter>,
    scroll_offset: Cell<f32>,
    unmeasured: RefCell<BTreeSet<usize>>,
    rebinds: RefCell<Vec<Range<usize>>>,
    invalidations: Cell<usize>,
}

impl FakeList {
    pub fn new<A: SwappableAdapter + 'static>(
        axis: Axis,
        viewport: Size,
        item_extent: f32,
        adapter: Rc<A>,
    ) -> Rc<Self> {
        Rc::new(Self {
            axis,
            viewport,
            item_extent,
            adapter,
            scroll_offset: Cell::new(0.0),
            unmeasured: RefCell::new(BTreeSet::new()),
            rebinds: RefCell::new(Vec::new()),
            invalidations: Cell::new(0),
        })
    }

    pub fn vertical<A: SwappableAdapter + 'static>(
        viewport: Size,
        item_extent: f32,
        adapter: Rc<A>,
    ) -> Rc<Self> {
        Self::new(Axis::Vertical, viewport, item_extent, adapter)
    }

    pub fn horizontal<A: SwappableAdapter + 'static>(
        viewport: Size,
        item_extent: f32,
        adapter: Rc<A>,
    ) -> Rc<Self> {
        Self::new(Axis::Horizontal, viewport, item_extent, adapter)
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn item_extent(&self) -> f32 {
        self.item_extent
    }

    pub fn scroll_offset(&self) -> f32 {
        self.scroll_offset.get()
    }

    /// Laid-out bounds of `position` at the current scroll offset.
    pub fn item_bounds(&self, position: usize) -> Rect {
        let start = position as f32 * self.item_extent - self.scroll_offset.get();
        match self.axis {
            Axis::Vertical => Rect::new(0.0, start, self.viewport.width, self.item_extent),
            Axis::Horizontal => Rect::new(start, 0.0, self.item_extent, self.viewport.height),
        }
    }

    /// Center of `position`, for aiming pointer events.
    pub fn item_center(&self, position: usize) -> Point {
        let bounds = self.item_bounds(position);
        Point::new(
            bounds.x + bounds.width / 2.0,
            bounds.y + bounds.height / 2.0,
        )
    }

    /// Binds `position` without geometry on the next layout passes, as if
    /// its view had not been measured yet.
    pub fn set_unmeasured(&self, position: usize, unmeasured: bool) {
        let mut set = self.unmeasured.borrow_mut();
        if unmeasured {
            set.insert(position);
        } else {
            set.remove(&position);
        }
    }

    pub fn rebinds(&self) -> Vec<Range<usize>> {
        self.rebinds.borrow().clone()
    }

    pub fn invalidation_count(&self) -> usize {
        self.invalidations.get()
    }

    fn max_scroll(&self) -> f32 {
        let content = self.adapter.item_count() as f32 * self.item_extent;
        (content - self.axis.extent(self.viewport)).max(0.0)
    }
}

impl ListWidget for FakeList {
    fn viewport_size(&self) -> Size {
        self.viewport
    }

    fn layout_items(&self, table: &mut ViewTable) {
        let item_count = self.adapter.item_count();
        let viewport_extent = self.axis.extent(self.viewport);
        let unmeasured = self.unmeasured.borrow();
        table.begin_layout(item_count);

        for position in 0..item_count {
            let bounds = self.item_bounds(position);
            let start = self.axis.start(&bounds);
            let end = self.axis.end(&bounds);
            if end <= 0.0 || start >= viewport_extent {
                continue;
            }
            let geometry = if unmeasured.contains(&position) {
                Geometry::Pending
            } else {
                Geometry::Measured(bounds)
            };
            table.bind(position, position as u64, geometry);
        }
    }

    fn scroll_by(&self, delta: Point) -> Point {
        let previous = self.scroll_offset.get();
        let next = (previous + self.axis.main(delta)).clamp(0.0, self.max_scroll());
        self.scroll_offset.set(next);
        self.axis.point(next - previous)
    }

    fn rebind(&self, positions: Range<usize>) {
        log::trace!("fake list: rebind {positions:?}");
        self.rebinds.borrow_mut().push(positions);
    }

    fn invalidate(&self) {
        self.invalidations.set(self.invalidations.get() + 1);
    }
}

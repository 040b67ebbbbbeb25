//! Adapter wrapper that records every mutation request.

use std::cell::{Cell, RefCell};

use recycler_gesture::{AdapterError, SwappableAdapter, VecAdapter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdapterCall {
    Swap(usize, usize),
    Remove(usize),
}

/// [`VecAdapter`] that logs calls and can be told to reject them.
pub struct RecordingAdapter<T> {
    inner: VecAdapter<T>,
    calls: RefCell<Vec<AdapterCall>>,
    reject_swaps: Cell<bool>,
    reject_removes: Cell<bool>,
}

impl<T> RecordingAdapter<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self {
            inner: VecAdapter::new(items),
            calls: RefCell::new(Vec::new()),
            reject_swaps: Cell::new(false),
            reject_removes: Cell::new(false),
        }
    }

    /// The wrapped adapter. Mutations made through it are not recorded,
    /// which simulates changes from outside the gestures.
    pub fn inner(&self) -> &VecAdapter<T> {
        &self.inner
    }

    pub fn calls(&self) -> Vec<AdapterCall> {
        self.calls.borrow().clone()
    }

    pub fn swap_count(&self) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|call| matches!(call, AdapterCall::Swap(..)))
            .count()
    }

    pub fn removed_positions(&self) -> Vec<usize> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|call| match call {
                AdapterCall::Remove(position) => Some(*position),
                AdapterCall::Swap(..) => None,
            })
            .collect()
    }

    pub fn reject_swaps(&self, reject: bool) {
        self.reject_swaps.set(reject);
    }

    pub fn reject_removes(&self, reject: bool) {
        self.reject_removes.set(reject);
    }
}

impl<T: Clone> RecordingAdapter<T> {
    pub fn items(&self) -> Vec<T> {
        self.inner.items()
    }
}

impl<T> SwappableAdapter for RecordingAdapter<T> {
    fn item_count(&self) -> usize {
        self.inner.item_count()
    }

    fn swap(&self, a: usize, b: usize) -> Result<(), AdapterError> {
        self.calls.borrow_mut().push(AdapterCall::Swap(a, b));
        if self.reject_swaps.get() {
            return Err(AdapterError::OutOfRange {
                position: a.max(b),
                item_count: self.item_count(),
            });
        }
        self.inner.swap(a, b)
    }

    fn remove(&self, position: usize) -> Result<(), AdapterError> {
        self.calls.borrow_mut().push(AdapterCall::Remove(position));
        if self.reject_removes.get() {
            return Err(AdapterError::OutOfRange {
                position,
                item_count: self.item_count(),
            });
        }
        self.inner.remove(position)
    }
}

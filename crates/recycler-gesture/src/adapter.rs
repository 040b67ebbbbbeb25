//! The mutation contract gestures use to reorder and remove items.
//!
//! Gestures never own the item sequence. They address items by position and
//! ask the adapter to mutate; the adapter keeps its own view layer in sync.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AdapterError {
    #[error("position {position} out of range for {item_count} items")]
    OutOfRange { position: usize, item_count: usize },
}

/// Index-based mutation interface backing a gesture-enabled list.
///
/// Methods take `&self`: adapters are shared between the host's view layer
/// and the gestures, and are mutated synchronously from inside pointer
/// callbacks on the UI thread.
pub trait SwappableAdapter {
    /// The number of items currently in the list.
    fn item_count(&self) -> usize;

    /// Exchanges the items at `a` and `b`.
    fn swap(&self, a: usize, b: usize) -> Result<(), AdapterError>;

    /// Removes the item at `position`; later items shift down by one.
    fn remove(&self, position: usize) -> Result<(), AdapterError>;

    /// Whether `position` currently addresses an item.
    fn is_position_valid(&self, position: usize) -> bool {
        position < self.item_count()
    }
}

/// A mutation applied through [`VecAdapter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdapterChange {
    Moved { from: usize, to: usize },
    Removed { position: usize },
}

type ChangeListener = Rc<dyn Fn(AdapterChange)>;

/// [`SwappableAdapter`] over an owned `Vec<T>`.
///
/// Listeners run after each mutation, once the item borrow is released, so
/// they may read the adapter back.
pub struct VecAdapter<T> {
    items: RefCell<Vec<T>>,
    listeners: RefCell<Vec<ChangeListener>>,
}

impl<T> VecAdapter<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items: RefCell::new(items),
            listeners: RefCell::new(Vec::new()),
        }
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }

    pub fn push(&self, item: T) {
        self.items.borrow_mut().push(item);
    }

    /// Runs `f` against the item at `position`, if any.
    pub fn with_item<R>(&self, position: usize, f: impl FnOnce(&T) -> R) -> Option<R> {
        self.items.borrow().get(position).map(f)
    }

    /// Registers a listener notified after every swap or removal.
    pub fn add_listener(&self, listener: impl Fn(AdapterChange) + 'static) {
        self.listeners.borrow_mut().push(Rc::new(listener));
    }

    // Listeners registered while notifying hear the next change, not this one.
    fn notify(&self, change: AdapterChange) {
        let listeners = self.listeners.borrow().clone();
        for listener in listeners {
            listener(change);
        }
    }

    fn check(&self, position: usize) -> Result<(), AdapterError> {
        let item_count = self.len();
        if position < item_count {
            Ok(())
        } else {
            Err(AdapterError::OutOfRange {
                position,
                item_count,
            })
        }
    }
}

impl<T: Clone> VecAdapter<T> {
    pub fn get(&self, position: usize) -> Option<T> {
        self.items.borrow().get(position).cloned()
    }

    /// Snapshot of the current item order.
    pub fn items(&self) -> Vec<T> {
        self.items.borrow().clone()
    }
}

impl<T> SwappableAdapter for VecAdapter<T> {
    fn item_count(&self) -> usize {
        self.len()
    }

    fn swap(&self, a: usize, b: usize) -> Result<(), AdapterError> {
        self.check(a)?;
        self.check(b)?;
        self.items.borrow_mut().swap(a, b);
        self.notify(AdapterChange::Moved { from: a, to: b });
        Ok(())
    }

    fn remove(&self, position: usize) -> Result<(), AdapterError> {
        self.check(position)?;
        self.items.borrow_mut().remove(position);
        self.notify(AdapterChange::Removed { position });
        Ok(())
    }
}

impl<T: fmt::Debug> fmt::Debug for VecAdapter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VecAdapter")
            .field("items", &self.items.borrow())
            .field("listeners", &self.listeners.borrow().len())
            .finish()
    }
}

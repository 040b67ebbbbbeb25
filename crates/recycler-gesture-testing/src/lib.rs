//! Testing utilities for recycler-gesture
//!
//! A headless [`FakeList`] host with uniform items, an adapter that records
//! every mutation, and a [`GestureRobot`] that drives pointer sequences and
//! frames through the attached gestures.

pub mod fake_list;
pub mod recording_adapter;
pub mod robot;
pub mod robot_assertions;

pub use fake_list::FakeList;
pub use recording_adapter::{AdapterCall, RecordingAdapter};
pub use robot::{GestureRobot, FRAME_NANOS};

pub mod prelude {
    pub use crate::fake_list::FakeList;
    pub use crate::recording_adapter::{AdapterCall, RecordingAdapter};
    pub use crate::robot::*;
    pub use crate::robot_assertions;
}

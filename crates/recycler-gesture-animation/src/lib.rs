//! Frame-driven tween animations for recycler-gesture
//!
//! Gesture sessions never block: every terminal animation (drop, commit,
//! cancel) is a [`TweenAnimation`] that the host advances from its frame loop.

mod animation;

pub use animation::*;

use super::SwipeDirection;

/// Caller policy deciding how each position may be swiped.
pub trait SwipeStrategy {
    /// Direction the item at `position` may be dismissed in.
    ///
    /// `configured` is the attachment's direction; the answer is intersected
    /// with it, so returning something wider has no effect. Return
    /// [`SwipeDirection::None`] to make the item inert, e.g. for dividers.
    fn dismiss_direction(&self, position: usize, configured: SwipeDirection) -> SwipeDirection {
        let _ = position;
        configured
    }
}

/// Every position swipes in the configured direction.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultSwipeStrategy;

impl SwipeStrategy for DefaultSwipeStrategy {}

/// [`SwipeStrategy`] backed by a closure.
pub struct FnSwipeStrategy<F> {
    direction: F,
}

impl<F> SwipeStrategy for FnSwipeStrategy<F>
where
    F: Fn(usize, SwipeDirection) -> SwipeDirection,
{
    fn dismiss_direction(&self, position: usize, configured: SwipeDirection) -> SwipeDirection {
        (self.direction)(position, configured)
    }
}

pub fn swipe_strategy_fn<F>(direction: F) -> FnSwipeStrategy<F>
where
    F: Fn(usize, SwipeDirection) -> SwipeDirection,
{
    FnSwipeStrategy { direction }
}

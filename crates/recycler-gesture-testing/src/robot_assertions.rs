//! Assertion helpers for gesture tests.

use recycler_gesture::{GestureHost, Rect};

/// Assert that a value is within `tolerance` of `expected`.
pub fn assert_approx_eq(actual: f32, expected: f32, tolerance: f32, msg: &str) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "{}: expected {} (±{}), got {} (diff: {})",
        msg,
        expected,
        tolerance,
        actual,
        diff
    );
}

pub fn assert_rect_approx_eq(actual: Rect, expected: Rect, tolerance: f32, msg: &str) {
    assert_approx_eq(actual.x, expected.x, tolerance, &format!("{} - x", msg));
    assert_approx_eq(actual.y, expected.y, tolerance, &format!("{} - y", msg));
    assert_approx_eq(
        actual.width,
        expected.width,
        tolerance,
        &format!("{} - width", msg),
    );
    assert_approx_eq(
        actual.height,
        expected.height,
        tolerance,
        &format!("{} - height", msg),
    );
}

/// Assert that no position carries a gesture transform any more.
pub fn assert_at_rest(host: &GestureHost, msg: &str) {
    let transformed: Vec<usize> = host.views().transformed_positions().collect();
    assert!(
        transformed.is_empty(),
        "{}: positions {:?} still transformed",
        msg,
        transformed
    );
}

/// Assert that `actual` is a reordering of `expected`.
pub fn assert_permutation<T: Ord + Clone + std::fmt::Debug>(actual: &[T], expected: &[T], msg: &str) {
    let mut actual_sorted = actual.to_vec();
    let mut expected_sorted = expected.to_vec();
    actual_sorted.sort();
    expected_sorted.sort();
    assert_eq!(
        actual_sorted, expected_sorted,
        "{}: {:?} is not a permutation of {:?}",
        msg, actual, expected
    );
}

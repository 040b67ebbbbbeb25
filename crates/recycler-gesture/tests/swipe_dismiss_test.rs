use std::cell::RefCell;
use std::rc::Rc;

use recycler_gesture::{
    swipe_strategy_fn, DefaultSwipeStrategy, SwipeDirection, SwipePhase, SwipeToDismissGesture,
    Size, SwappableAdapter,
};
use recycler_gesture_testing::robot_assertions::{assert_approx_eq, assert_at_rest};
use recycler_gesture_testing::{FakeList, GestureRobot, RecordingAdapter};

const ITEM: f32 = 100.0;

fn vertical_robot(items: usize) -> (GestureRobot, Rc<RecordingAdapter<usize>>) {
    let adapter = Rc::new(RecordingAdapter::new((0..items).collect()));
    let list = FakeList::vertical(Size::new(400.0, 600.0), ITEM, adapter.clone());
    (GestureRobot::new(list), adapter)
}

fn attach_swipe(
    robot: &mut GestureRobot,
    adapter: &Rc<RecordingAdapter<usize>>,
    direction: SwipeDirection,
) {
    let swipe = SwipeToDismissGesture::builder(direction)
        .on(robot.host())
        .adapter(adapter.clone())
        .apply(DefaultSwipeStrategy)
        .build()
        .expect("swipe gesture");
    robot.attach_swipe(swipe);
}

fn offset(robot: &GestureRobot) -> f32 {
    robot
        .swipe()
        .session()
        .map_or(0.0, |session| session.axis_offset())
}

#[test]
fn swiping_past_the_threshold_removes_the_item() {
    let (mut robot, adapter) = vertical_robot(5);
    let dismissed = Rc::new(RefCell::new(Vec::new()));
    let swipe = SwipeToDismissGesture::builder(SwipeDirection::Right)
        .on(robot.host())
        .adapter(adapter.clone())
        .apply(DefaultSwipeStrategy)
        .dismiss_threshold(1.0 / 3.0)
        .on_dismiss({
            let dismissed = Rc::clone(&dismissed);
            move |position| dismissed.borrow_mut().push(position)
        })
        .build()
        .expect("swipe gesture");
    robot.attach_swipe(swipe);

    robot.press(100.0, 250.0);
    assert_eq!(robot.swipe().phase(), SwipePhase::Pressed);
    // 40% of the item's width.
    robot.move_in_steps(260.0, 250.0, 8);
    assert_eq!(robot.swipe().phase(), SwipePhase::Swiping);
    assert_approx_eq(offset(&robot), 160.0, 0.001, "offset follows pointer");

    assert!(robot.release());
    assert_eq!(robot.swipe().phase(), SwipePhase::Committing);
    assert_eq!(
        robot.swipe().session().expect("session").committed_direction(),
        SwipeDirection::Right
    );
    robot.wait_for_idle();

    assert_eq!(adapter.removed_positions(), vec![2]);
    assert_eq!(adapter.items(), vec![0, 1, 3, 4]);
    assert_eq!(*dismissed.borrow(), vec![2]);
    assert_eq!(robot.list().rebinds(), vec![2..4]);
    assert_eq!(robot.host().views().len(), 4);
    assert_eq!(robot.swipe().phase(), SwipePhase::Idle);
    assert!(!robot.host().is_gesture_active());
    assert_at_rest(robot.host(), "after dismissal");
}

#[test]
fn commit_animation_moves_off_screen_and_fades() {
    let (mut robot, adapter) = vertical_robot(5);
    attach_swipe(&mut robot, &adapter, SwipeDirection::Horizontal);

    robot.press(200.0, 150.0);
    robot.move_in_steps(0.0, 150.0, 10);
    assert_approx_eq(robot.transform(1).alpha, 0.5, 0.001, "half faded");
    robot.release();

    let mut last = offset(&robot);
    while robot.swipe().phase() == SwipePhase::Committing {
        robot.pump_frame();
        if robot.swipe().phase() != SwipePhase::Committing {
            break;
        }
        let current = offset(&robot);
        assert!(current <= last + 0.001, "leftward commit keeps moving left");
        assert_eq!(robot.transform(1).translation.x, current);
        last = current;
    }
    assert_eq!(adapter.removed_positions(), vec![1]);
}

#[test]
fn short_swipe_cancels_back_to_rest() {
    let (mut robot, adapter) = vertical_robot(5);
    attach_swipe(&mut robot, &adapter, SwipeDirection::Right);

    robot.press(100.0, 250.0);
    robot.move_in_steps(220.0, 250.0, 6);
    robot.release();

    assert_eq!(robot.swipe().phase(), SwipePhase::Cancelling);
    robot.wait_for_idle();
    assert!(adapter.calls().is_empty());
    assert_at_rest(robot.host(), "after cancel");
}

#[test]
fn moving_against_a_single_direction_hits_a_wall() {
    let (mut robot, adapter) = vertical_robot(5);
    attach_swipe(&mut robot, &adapter, SwipeDirection::Left);

    robot.press(100.0, 250.0);
    for step in 1..=10 {
        robot.move_to(100.0 + step as f32 * 20.0, 250.0);
        assert_eq!(offset(&robot), 0.0);
        assert_eq!(robot.transform(2).translation.x, 0.0);
    }
    assert_eq!(robot.swipe().phase(), SwipePhase::Swiping);

    robot.release();
    assert_eq!(robot.swipe().phase(), SwipePhase::Cancelling);
    robot.wait_for_idle();
    assert!(adapter.removed_positions().is_empty());
}

#[test]
fn strategy_can_disable_positions() {
    let (mut robot, adapter) = vertical_robot(5);
    let swipe = SwipeToDismissGesture::builder(SwipeDirection::Horizontal)
        .on(robot.host())
        .adapter(adapter.clone())
        .apply(swipe_strategy_fn(|position, configured| match position {
            0 => SwipeDirection::None,
            // Not on the configured axis.
            1 => SwipeDirection::Up,
            _ => configured,
        }))
        .build()
        .expect("swipe gesture");
    robot.attach_swipe(swipe);

    robot.press(100.0, 50.0);
    assert_eq!(robot.swipe().phase(), SwipePhase::Idle);
    robot.release();

    robot.press(100.0, 150.0);
    assert_eq!(robot.swipe().phase(), SwipePhase::Idle);
    robot.release();

    robot.press(100.0, 250.0);
    assert_eq!(robot.swipe().phase(), SwipePhase::Pressed);
    assert_eq!(
        robot.swipe().session().expect("session").direction(),
        SwipeDirection::Horizontal
    );
}

#[test]
fn strategy_narrows_the_configured_direction() {
    let (mut robot, adapter) = vertical_robot(5);
    let swipe = SwipeToDismissGesture::builder(SwipeDirection::Horizontal)
        .on(robot.host())
        .adapter(adapter.clone())
        .apply(swipe_strategy_fn(|_, _| SwipeDirection::Right))
        .build()
        .expect("swipe gesture");
    robot.attach_swipe(swipe);

    robot.press(300.0, 250.0);
    robot.move_in_steps(100.0, 250.0, 10);
    assert_eq!(offset(&robot), 0.0);
}

#[test]
fn movement_across_the_swipe_axis_abandons_the_swipe() {
    let (mut robot, adapter) = vertical_robot(5);
    attach_swipe(&mut robot, &adapter, SwipeDirection::Horizontal);

    robot.press(100.0, 250.0);
    assert!(!robot.move_to(104.0, 290.0));
    assert_eq!(robot.swipe().phase(), SwipePhase::Idle);
    assert!(!robot.move_to(250.0, 290.0));
    assert_eq!(robot.swipe().phase(), SwipePhase::Idle);
}

#[test]
fn movement_within_touch_slop_is_not_claimed() {
    let (mut robot, adapter) = vertical_robot(5);
    attach_swipe(&mut robot, &adapter, SwipeDirection::Horizontal);

    robot.press(100.0, 250.0);
    assert!(!robot.move_to(106.0, 251.0));
    assert_eq!(robot.swipe().phase(), SwipePhase::Pressed);
    assert!(!robot.host().is_gesture_active());
    assert!(robot.move_to(120.0, 251.0));
    assert!(robot.host().is_gesture_active());
}

#[test]
fn fade_can_be_disabled() {
    let (mut robot, adapter) = vertical_robot(5);
    let swipe = SwipeToDismissGesture::builder(SwipeDirection::Right)
        .on(robot.host())
        .adapter(adapter.clone())
        .apply(DefaultSwipeStrategy)
        .fade_out(false)
        .build()
        .expect("swipe gesture");
    robot.attach_swipe(swipe);

    robot.press(100.0, 250.0);
    robot.move_in_steps(200.0, 250.0, 5);
    assert_eq!(robot.transform(2).alpha, 1.0);
    assert_eq!(robot.transform(2).translation.x, 100.0);
}

#[test]
fn rejected_removal_leaves_the_item_in_place() {
    let (mut robot, adapter) = vertical_robot(5);
    attach_swipe(&mut robot, &adapter, SwipeDirection::Right);
    adapter.reject_removes(true);

    robot.press(100.0, 250.0);
    robot.move_in_steps(300.0, 250.0, 10);
    robot.release();
    robot.wait_for_idle();

    assert_eq!(adapter.removed_positions(), vec![2]);
    assert_eq!(adapter.items(), vec![0, 1, 2, 3, 4]);
    assert_eq!(robot.swipe().phase(), SwipePhase::Idle);
    assert_at_rest(robot.host(), "after rejected removal");
}

#[test]
fn external_removal_cancels_the_swipe() {
    let (mut robot, adapter) = vertical_robot(5);
    attach_swipe(&mut robot, &adapter, SwipeDirection::Right);

    robot.press(100.0, 250.0);
    robot.move_in_steps(200.0, 250.0, 5);
    adapter.inner().remove(0).expect("external removal");
    robot.move_by(20.0, 0.0);

    assert_eq!(robot.swipe().phase(), SwipePhase::Cancelling);
    robot.wait_for_idle();
    assert!(adapter.removed_positions().is_empty());
}

#[test]
fn removal_during_commit_skips_the_dismissal() {
    let (mut robot, adapter) = vertical_robot(5);
    attach_swipe(&mut robot, &adapter, SwipeDirection::Right);

    robot.press(100.0, 250.0);
    robot.move_in_steps(300.0, 250.0, 10);
    robot.release();
    assert_eq!(robot.swipe().phase(), SwipePhase::Committing);
    adapter.inner().remove(4).expect("external removal");
    robot.wait_for_idle();

    assert!(adapter.removed_positions().is_empty());
    assert_eq!(adapter.items(), vec![0, 1, 2, 3]);
}

#[test]
fn cancel_does_not_interrupt_a_commit() {
    let (mut robot, adapter) = vertical_robot(5);
    attach_swipe(&mut robot, &adapter, SwipeDirection::Right);

    robot.press(100.0, 250.0);
    robot.move_in_steps(200.0, 250.0, 5);
    robot.swipe_mut().cancel();
    assert_eq!(robot.swipe().phase(), SwipePhase::Cancelling);
    robot.wait_for_idle();

    robot.press(100.0, 250.0);
    robot.move_in_steps(300.0, 250.0, 10);
    robot.release();
    robot.swipe_mut().cancel();
    assert_eq!(robot.swipe().phase(), SwipePhase::Committing);
    robot.wait_for_idle();
    assert_eq!(adapter.removed_positions(), vec![2]);
}

#[test]
fn pointer_cancel_while_swiping_animates_back() {
    let (mut robot, adapter) = vertical_robot(5);
    attach_swipe(&mut robot, &adapter, SwipeDirection::Right);

    robot.press(100.0, 250.0);
    robot.move_in_steps(300.0, 250.0, 10);
    assert!(robot.cancel_pointer());
    assert_eq!(robot.swipe().phase(), SwipePhase::Cancelling);
    robot.wait_for_idle();
    assert!(adapter.calls().is_empty());
}

#[test]
fn vertical_swipe_on_a_horizontal_list() {
    let adapter = Rc::new(RecordingAdapter::new(vec![0, 1, 2, 3]));
    let list = FakeList::horizontal(Size::new(600.0, 400.0), ITEM, adapter.clone());
    let mut robot = GestureRobot::new(list);
    let swipe = SwipeToDismissGesture::builder(SwipeDirection::Up)
        .on(robot.host())
        .adapter(adapter.clone())
        .apply(DefaultSwipeStrategy)
        .build()
        .expect("swipe gesture");
    robot.attach_swipe(swipe);

    robot.press(250.0, 300.0);
    robot.move_in_steps(250.0, 140.0, 8);
    assert_approx_eq(offset(&robot), -160.0, 0.001, "upward offset");
    assert_eq!(robot.transform(2).translation.x, 0.0);
    robot.release();
    assert_eq!(robot.swipe().phase(), SwipePhase::Committing);
    robot.wait_for_idle();

    assert_eq!(adapter.items(), vec![0, 1, 3]);
}

use std::cell::RefCell;
use std::rc::Rc;

use recycler_gesture::{
    drag_strategy_fn, AutoscrollConfig, DefaultDragStrategy, DragDropGesture, DragPhase,
    PointerEvent, PointerEventKind, Point, Size, SwappableAdapter,
};
use recycler_gesture_testing::robot_assertions::{assert_approx_eq, assert_at_rest};
use recycler_gesture_testing::{AdapterCall, FakeList, GestureRobot, RecordingAdapter};

const ITEM: f32 = 100.0;

fn vertical_robot(items: usize, viewport: Size) -> (GestureRobot, Rc<RecordingAdapter<usize>>) {
    let adapter = Rc::new(RecordingAdapter::new((0..items).collect()));
    let list = FakeList::vertical(viewport, ITEM, adapter.clone());
    (GestureRobot::new(list), adapter)
}

fn attach_default_drag(robot: &mut GestureRobot, adapter: &Rc<RecordingAdapter<usize>>) {
    let drag = DragDropGesture::builder()
        .on(robot.host())
        .adapter(adapter.clone())
        .apply(DefaultDragStrategy)
        .build()
        .expect("drag gesture");
    robot.attach_drag(drag);
}

#[test]
fn dragging_past_two_neighbors_swaps_twice() {
    let (mut robot, adapter) = vertical_robot(5, Size::new(300.0, 800.0));
    attach_default_drag(&mut robot, &adapter);

    robot.press(50.0, 150.0);
    assert_eq!(robot.drag().phase(), DragPhase::Pressed);
    assert!(robot.long_press());
    assert_eq!(robot.drag().phase(), DragPhase::Dragging);
    assert!(robot.transform(1).elevated);

    // Past index 3's midpoint.
    robot.move_in_steps(50.0, 410.0, 13);
    assert_eq!(
        adapter.calls(),
        vec![AdapterCall::Swap(1, 2), AdapterCall::Swap(2, 3)]
    );
    let session = robot.drag().session().expect("active session");
    assert_eq!(session.origin_position(), 1);
    assert_eq!(session.current_position(), 3);

    assert!(robot.release());
    assert_eq!(robot.drag().phase(), DragPhase::Dropping);
    robot.wait_for_idle();

    assert_eq!(robot.drag().phase(), DragPhase::Idle);
    assert_eq!(adapter.items(), vec![0, 2, 3, 1, 4]);
    assert_eq!(adapter.swap_count(), 2);
    assert!(adapter.removed_positions().is_empty());
    assert_at_rest(robot.host(), "after drop");
    assert!(!robot.host().is_gesture_active());
}

#[test]
fn swaps_rebind_both_positions() {
    let (mut robot, adapter) = vertical_robot(5, Size::new(300.0, 800.0));
    attach_default_drag(&mut robot, &adapter);

    robot.press(50.0, 150.0);
    robot.long_press();
    robot.move_in_steps(50.0, 270.0, 6);

    assert_eq!(robot.list().rebinds(), vec![1..3]);
}

#[test]
fn dragged_view_follows_pointer_on_the_main_axis_only() {
    let (mut robot, adapter) = vertical_robot(5, Size::new(300.0, 800.0));
    attach_default_drag(&mut robot, &adapter);

    robot.press(50.0, 150.0);
    robot.long_press();
    robot.move_to(90.0, 170.0);

    let transform = robot.transform(1);
    assert_eq!(transform.translation.x, 0.0);
    assert_approx_eq(transform.translation.y, 20.0, 0.001, "translation follows pointer");
}

#[test]
fn moving_back_and_forth_restores_order() {
    let (mut robot, adapter) = vertical_robot(5, Size::new(300.0, 800.0));
    attach_default_drag(&mut robot, &adapter);

    robot.press(50.0, 150.0);
    robot.long_press();
    robot.move_in_steps(50.0, 370.0, 11);
    assert_eq!(adapter.swap_count(), 2);
    robot.move_in_steps(50.0, 130.0, 12);
    robot.release();
    robot.wait_for_idle();

    assert_eq!(adapter.items(), vec![0, 1, 2, 3, 4]);
}

#[test]
fn release_before_long_press_does_nothing() {
    let (mut robot, adapter) = vertical_robot(5, Size::new(300.0, 800.0));
    attach_default_drag(&mut robot, &adapter);

    robot.press(50.0, 150.0);
    assert!(!robot.move_to(50.0, 300.0));
    assert!(!robot.release());

    assert_eq!(robot.drag().phase(), DragPhase::Idle);
    assert!(adapter.calls().is_empty());
}

#[test]
fn divider_is_never_entered() {
    let (mut robot, adapter) = vertical_robot(5, Size::new(300.0, 800.0));
    let dropped = Rc::new(RefCell::new(None));
    let drag = DragDropGesture::builder()
        .on(robot.host())
        .adapter(adapter.clone())
        .apply(drag_strategy_fn(|position| position != 3, |position| position != 3))
        .on_drop({
            let dropped = Rc::clone(&dropped);
            move |from, to| *dropped.borrow_mut() = Some((from, to))
        })
        .build()
        .expect("drag gesture");
    robot.attach_drag(drag);

    robot.press(50.0, 150.0);
    robot.long_press();
    robot.move_in_steps(50.0, 550.0, 20);

    assert_eq!(adapter.calls(), vec![AdapterCall::Swap(1, 2)]);
    // Held against the divider's leading edge.
    let dragged = robot.host().view(2).expect("dragged view bound");
    let bounds = dragged.visual_bounds().expect("measured");
    assert_approx_eq(bounds.y, 300.0, 0.001, "dragged view stops at divider");

    robot.release();
    robot.wait_for_idle();
    assert_eq!(adapter.items(), vec![0, 2, 1, 3, 4]);
    assert_eq!(*dropped.borrow(), Some((1, 2)));
}

#[test]
fn non_draggable_items_ignore_long_press() {
    let (mut robot, adapter) = vertical_robot(5, Size::new(300.0, 800.0));
    let drag = DragDropGesture::builder()
        .on(robot.host())
        .adapter(adapter.clone())
        .apply(drag_strategy_fn(|position| position != 0, |_| true))
        .build()
        .expect("drag gesture");
    robot.attach_drag(drag);

    robot.press(50.0, 50.0);
    assert_eq!(robot.drag().phase(), DragPhase::Idle);
    assert!(!robot.long_press());
    assert_eq!(robot.drag().phase(), DragPhase::Idle);
}

#[test]
fn unmeasured_items_cannot_be_picked_up() {
    let (mut robot, adapter) = vertical_robot(5, Size::new(300.0, 800.0));
    attach_default_drag(&mut robot, &adapter);
    robot.list().set_unmeasured(1, true);
    robot.host().refresh_layout();

    robot.press(50.0, 150.0);
    assert_eq!(robot.drag().phase(), DragPhase::Idle);
}

#[test]
fn unmeasured_neighbor_blocks_swaps_until_laid_out() {
    let (mut robot, adapter) = vertical_robot(5, Size::new(300.0, 800.0));
    attach_default_drag(&mut robot, &adapter);

    robot.press(50.0, 150.0);
    robot.long_press();
    robot.list().set_unmeasured(2, true);
    robot.host().refresh_layout();
    robot.move_in_steps(50.0, 290.0, 7);
    assert_eq!(adapter.swap_count(), 0);

    robot.list().set_unmeasured(2, false);
    robot.host().refresh_layout();
    robot.move_by(0.0, 1.0);
    assert_eq!(adapter.calls(), vec![AdapterCall::Swap(1, 2)]);
}

#[test]
fn horizontal_list_reorders_along_x() {
    let adapter = Rc::new(RecordingAdapter::new(vec!['a', 'b', 'c', 'd']));
    let list = FakeList::horizontal(Size::new(800.0, 120.0), ITEM, adapter.clone());
    let mut robot = GestureRobot::new(list);
    let drag = DragDropGesture::builder()
        .on(robot.host())
        .adapter(adapter.clone())
        .apply(DefaultDragStrategy)
        .horizontal()
        .build()
        .expect("drag gesture");
    robot.attach_drag(drag);

    robot.press(50.0, 60.0);
    robot.long_press();
    robot.move_in_steps(170.0, 90.0, 6);

    assert_eq!(robot.transform(1).translation.y, 0.0);
    robot.release();
    robot.wait_for_idle();
    assert_eq!(adapter.items(), vec!['b', 'a', 'c', 'd']);
}

#[test]
fn holding_at_the_bottom_edge_autoscrolls_and_keeps_swapping() {
    let (mut robot, adapter) = vertical_robot(20, Size::new(300.0, 300.0));
    let drag = DragDropGesture::builder()
        .on(robot.host())
        .adapter(adapter.clone())
        .apply(DefaultDragStrategy)
        .autoscroll(AutoscrollConfig::constant(10.0))
        .build()
        .expect("drag gesture");
    robot.attach_drag(drag);

    robot.press(50.0, 150.0);
    robot.long_press();
    robot.move_in_steps(50.0, 280.0, 13);
    let before = robot.drag().session().expect("session").current_position();
    assert!(robot.needs_frame());
    assert_eq!(
        robot.drag().session().expect("session").autoscroll_velocity(),
        10.0
    );

    robot.pump_frames(30);
    assert_approx_eq(robot.list().scroll_offset(), 300.0, 0.01, "scrolled 30 steps");
    let after = robot.drag().session().expect("session").current_position();
    assert!(after > before, "{after} should be past {before}");

    robot.release();
    robot.wait_for_idle();
    assert_eq!(adapter.items().len(), 20);
    assert_eq!(adapter.items()[after], 1);
}

#[test]
fn autoscroll_stops_at_the_end_of_the_content() {
    let (mut robot, adapter) = vertical_robot(4, Size::new(300.0, 300.0));
    attach_default_drag(&mut robot, &adapter);

    robot.press(50.0, 150.0);
    robot.long_press();
    robot.move_in_steps(50.0, 290.0, 14);
    robot.pump_frames(100);

    assert_approx_eq(robot.list().scroll_offset(), 100.0, 0.01, "clamped to content");
    robot.release();
    robot.wait_for_idle();
    assert_eq!(robot.drag().phase(), DragPhase::Idle);
    assert_eq!(adapter.items()[3], 1);
}

#[test]
fn external_removal_aborts_the_drag_in_place() {
    let (mut robot, adapter) = vertical_robot(5, Size::new(300.0, 800.0));
    let dropped = Rc::new(RefCell::new(None));
    let drag = DragDropGesture::builder()
        .on(robot.host())
        .adapter(adapter.clone())
        .apply(DefaultDragStrategy)
        .on_drop({
            let dropped = Rc::clone(&dropped);
            move |from, to| *dropped.borrow_mut() = Some((from, to))
        })
        .build()
        .expect("drag gesture");
    robot.attach_drag(drag);

    robot.press(50.0, 150.0);
    robot.long_press();
    adapter.inner().remove(4).expect("external removal");
    robot.host().refresh_layout();

    robot.move_to(50.0, 300.0);
    assert_eq!(robot.drag().phase(), DragPhase::Dropping);
    robot.wait_for_idle();

    assert_eq!(adapter.swap_count(), 0);
    assert_eq!(*dropped.borrow(), Some((1, 1)));
    assert!(!robot.host().is_gesture_active());
}

#[test]
fn rejected_swap_drops_in_place() {
    let (mut robot, adapter) = vertical_robot(5, Size::new(300.0, 800.0));
    attach_default_drag(&mut robot, &adapter);
    adapter.reject_swaps(true);

    robot.press(50.0, 150.0);
    robot.long_press();
    robot.move_in_steps(50.0, 270.0, 6);

    assert_eq!(robot.drag().phase(), DragPhase::Dropping);
    robot.wait_for_idle();
    assert_eq!(adapter.items(), vec![0, 1, 2, 3, 4]);
    assert_at_rest(robot.host(), "after rejected swap");
}

#[test]
fn leaving_the_list_settles_the_drag() {
    let (mut robot, adapter) = vertical_robot(5, Size::new(300.0, 800.0));
    attach_default_drag(&mut robot, &adapter);

    robot.press(50.0, 150.0);
    robot.long_press();
    robot.move_to(-20.0, 150.0);

    assert_eq!(robot.drag().phase(), DragPhase::Dropping);
}

#[test]
fn pointer_cancel_and_explicit_cancel_drop_in_place() {
    let (mut robot, adapter) = vertical_robot(5, Size::new(300.0, 800.0));
    attach_default_drag(&mut robot, &adapter);

    robot.press(50.0, 150.0);
    robot.long_press();
    robot.move_in_steps(50.0, 270.0, 6);
    assert!(robot.cancel_pointer());
    assert_eq!(robot.drag().phase(), DragPhase::Dropping);
    robot.wait_for_idle();
    assert_eq!(adapter.items(), vec![0, 2, 1, 3, 4]);

    robot.press(50.0, 50.0);
    robot.long_press();
    robot.drag_mut().cancel();
    assert_eq!(robot.drag().phase(), DragPhase::Dropping);
    // A running drop is not interrupted.
    robot.drag_mut().cancel();
    assert_eq!(robot.drag().phase(), DragPhase::Dropping);
    robot.wait_for_idle();
    assert_eq!(robot.drag().phase(), DragPhase::Idle);
}

#[test]
fn drop_animation_lands_on_the_slot() {
    let (mut robot, adapter) = vertical_robot(5, Size::new(300.0, 800.0));
    attach_default_drag(&mut robot, &adapter);

    robot.press(50.0, 150.0);
    robot.long_press();
    robot.move_to(50.0, 190.0);
    robot.release();

    let mut last = robot.transform(1).translation.y;
    assert_approx_eq(last, 40.0, 0.001, "starts where the pointer left it");
    while robot.needs_frame() {
        robot.pump_frame();
        let y = robot.transform(1).translation.y;
        assert!(y <= last + 0.001, "drop moves towards the slot");
        last = y;
    }
    assert_at_rest(robot.host(), "after drop");
}

#[test]
fn events_from_other_pointers_are_ignored() {
    let (mut robot, adapter) = vertical_robot(5, Size::new(300.0, 800.0));
    attach_default_drag(&mut robot, &adapter);

    robot.use_pointer(1);
    robot.press(50.0, 150.0);
    robot.long_press();

    let stray = PointerEvent::new(PointerEventKind::Move, Point::new(50.0, 450.0)).with_id(2);
    assert!(!robot.dispatch(stray));
    let stray_up = PointerEvent::new(PointerEventKind::Up, Point::new(50.0, 450.0)).with_id(2);
    assert!(!robot.dispatch(stray_up));

    assert_eq!(robot.drag().phase(), DragPhase::Dragging);
    assert_eq!(adapter.swap_count(), 0);
}

//! Press, drag and release through pointer and legacy mouse events.

use crate::helpers::{TestSliderBuilder, click, mouse, ms, pointer};
use imgslider::host::{ListenerKind, ListenerScope, PointerId};
use imgslider::{Disposition, Phase};

#[test]
fn test_press_jumps_without_animation() {
    let mut slider = TestSliderBuilder::new().ready();
    let writes = slider.host().writes();

    let d = slider.handle_event(&pointer(Phase::Down, 100.0, 150.0), ms(1000));
    assert_eq!(d, Disposition::Handled);
    assert_eq!(slider.percentage(), 25.0);
    assert_eq!(slider.host().last_percentage(), Some(25.0));
    assert!(slider.input_state().is_dragging());

    slider.handle_event(&pointer(Phase::Up, 100.0, 150.0), ms(1010));
    assert!(slider.input_state().is_idle());
    assert!(!slider.animator().is_running());
    assert_eq!(slider.animator().started_count(), 0);
    assert_eq!(slider.host().frames_requested, 0);
    assert_eq!(slider.percentage(), 25.0);
    assert_eq!(slider.host().writes(), writes + 1);
}

#[test]
fn test_drag_follows_pointer_and_clamps() {
    let mut slider = TestSliderBuilder::new().ready();

    slider.handle_event(&pointer(Phase::Down, 200.0, 150.0), ms(0));
    let d = slider.handle_event(&pointer(Phase::Move, 300.0, 150.0), ms(16));
    assert_eq!(d, Disposition::PreventDefault);
    assert_eq!(slider.percentage(), 75.0);

    // Outside the container on either side
    slider.handle_event(&pointer(Phase::Move, 520.0, 150.0), ms(32));
    assert_eq!(slider.percentage(), 100.0);
    slider.handle_event(&pointer(Phase::Move, -80.0, 150.0), ms(48));
    assert_eq!(slider.percentage(), 0.0);

    slider.handle_event(&pointer(Phase::Up, -80.0, 150.0), ms(64));
    assert_eq!(slider.percentage(), 0.0);
    assert!(slider
        .host()
        .projections
        .iter()
        .all(|p| (0.0..=100.0).contains(&p.percentage)));
}

#[test]
fn test_pointer_capture_held_for_gesture() {
    let mut slider = TestSliderBuilder::new().ready();

    slider.handle_event(&pointer(Phase::Down, 200.0, 150.0), ms(0));
    assert_eq!(slider.host().captured, vec![PointerId(1)]);
    assert!(!slider.host().has_listener(ListenerScope::Document, ListenerKind::MouseMove));

    slider.handle_event(&pointer(Phase::Cancel, 200.0, 150.0), ms(10));
    assert!(slider.host().captured.is_empty());
    assert_eq!(slider.host().capture_released, 1);
    assert!(slider.input_state().is_idle());
}

#[test]
fn test_other_pointer_ignored_while_dragging() {
    let mut slider = TestSliderBuilder::new().ready();
    slider.handle_event(&pointer(Phase::Down, 200.0, 150.0), ms(0));

    let stray = imgslider::HostEvent::Pointer {
        phase: Phase::Move,
        pointer_id: 9,
        kind: imgslider::PointerKind::Pen,
        x: 40.0,
        y: 150.0,
    };
    assert_eq!(slider.handle_event(&stray, ms(5)), Disposition::Ignored);
    assert_eq!(slider.percentage(), 50.0);
}

#[test]
fn test_legacy_mouse_subscribes_document_for_gesture() {
    let mut slider = TestSliderBuilder::new().legacy_events().ready();
    assert!(slider.host().has_listener(ListenerScope::Element, ListenerKind::MouseDown));
    assert!(!slider.host().has_listener(ListenerScope::Element, ListenerKind::PointerDown));
    assert!(!slider.host().has_listener(ListenerScope::Document, ListenerKind::MouseUp));

    slider.handle_event(&mouse(Phase::Down, 100.0, 150.0), ms(0));
    assert!(slider.host().has_listener(ListenerScope::Document, ListenerKind::MouseMove));
    assert!(slider.host().has_listener(ListenerScope::Document, ListenerKind::MouseUp));
    assert!(slider.host().captured.is_empty());

    slider.handle_event(&mouse(Phase::Move, 300.0, 150.0), ms(16));
    assert_eq!(slider.percentage(), 75.0);

    slider.handle_event(&mouse(Phase::Up, 300.0, 150.0), ms(32));
    assert!(!slider.host().has_listener(ListenerScope::Document, ListenerKind::MouseMove));
    assert!(!slider.host().has_listener(ListenerScope::Document, ListenerKind::MouseUp));
    assert!(slider.host().has_listener(ListenerScope::Element, ListenerKind::MouseDown));
}

#[test]
fn test_click_after_drag_is_swallowed() {
    let mut slider = TestSliderBuilder::new().ready();

    slider.handle_event(&pointer(Phase::Down, 100.0, 150.0), ms(0));
    slider.handle_event(&pointer(Phase::Move, 200.0, 150.0), ms(16));
    slider.handle_event(&pointer(Phase::Up, 200.0, 150.0), ms(32));
    let writes = slider.host().writes();

    assert_eq!(slider.handle_event(&click(200.0, 150.0), ms(33)), Disposition::Handled);
    assert_eq!(slider.animator().started_count(), 0);
    assert_eq!(slider.host().writes(), writes);

    // The next click is a real one
    slider.handle_event(&click(100.0, 150.0), ms(500));
    assert_eq!(slider.animator().started_count(), 1);
    assert_eq!(slider.animator().target(), Some(25.0));
}

#[test]
fn test_hover_sets_resize_cursor() {
    let mut slider = TestSliderBuilder::new().ready();
    let writes = slider.host().writes();

    assert!(slider.is_over_divider(200.0, 150.0));
    let d = slider.handle_event(&pointer(Phase::Move, 200.0, 150.0), ms(0));
    assert_eq!(d, Disposition::Handled);
    assert!(slider.host().resize_cursor);

    // Same state, no repeated host call
    let d = slider.handle_event(&pointer(Phase::Move, 210.0, 150.0), ms(16));
    assert_eq!(d, Disposition::Ignored);

    slider.handle_event(&pointer(Phase::Move, 20.0, 150.0), ms(32));
    assert!(!slider.host().resize_cursor);
    assert_eq!(slider.host().writes(), writes);
}

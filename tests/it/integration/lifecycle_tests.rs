//! Readiness gating and teardown.

use crate::helpers::{TestSliderBuilder, click, decoded, failed, ms, pointer, touch};
use imgslider::host::{ListenerKind, ListenerScope};
use imgslider::subscriptions::ListenerGroup;
use imgslider::{Disposition, HostEvent, ImageRole, Phase, Size, SliderStatus};

#[test]
fn test_ready_swaps_readiness_for_input_listeners() {
    let mut slider = TestSliderBuilder::new().mounted();
    assert_eq!(slider.status(), SliderStatus::Loading);
    assert!(slider.host().has_listener(ListenerScope::Image(ImageRole::After), ListenerKind::Load));
    assert!(!slider.subscriptions().has_group(ListenerGroup::Input));

    slider.on_image_load(ImageRole::After, decoded(800.0, 400.0));
    assert_eq!(slider.status(), SliderStatus::Loading);
    slider.on_image_load(ImageRole::Before, decoded(800.0, 400.0));

    assert_eq!(slider.status(), SliderStatus::Interactive);
    assert!(!slider.subscriptions().has_group(ListenerGroup::Readiness));
    assert!(slider.host().has_listener(ListenerScope::Element, ListenerKind::PointerDown));
    assert!(slider.host().has_listener(ListenerScope::Window, ListenerKind::Resize));
    assert!(slider.host().has_listener(ListenerScope::Window, ListenerKind::OrientationChange));
    assert_eq!(slider.host().listeners.len(), 7);

    // Initial layout and projection at the configured start position
    assert_eq!(slider.layout(), Some(Size::new(400.0, 200.0)));
    assert_eq!(slider.host().last_percentage(), Some(50.0));
    assert_eq!(
        slider.host().projections[0].clip_path(),
        "inset(0 50% 0 0)".to_string()
    );
}

#[test]
fn test_events_ignored_while_loading() {
    let mut slider = TestSliderBuilder::new().mounted();
    slider.on_image_load(ImageRole::Before, decoded(800.0, 400.0));

    let d = slider.handle_event(&pointer(Phase::Down, 100.0, 150.0), ms(0));
    assert_eq!(d, Disposition::Ignored);
    assert_eq!(slider.handle_event(&click(100.0, 150.0), ms(5)), Disposition::Ignored);
    assert_eq!(slider.host().writes(), 0);
    assert_eq!(slider.percentage(), 50.0);
}

#[test]
fn test_failed_image_disables_input() {
    let mut slider = TestSliderBuilder::new().mounted();
    slider.on_image_load(ImageRole::Before, decoded(800.0, 400.0));
    slider.on_image_load(ImageRole::After, failed("decode error"));

    assert_eq!(slider.status(), SliderStatus::Failed);
    assert!(slider.readiness().is_failed());
    assert_eq!(slider.host().errors.len(), 1);
    assert!(slider.host().errors[0].contains("after"));
    assert!(slider.host().errors[0].contains("decode error"));
    assert!(!slider.subscriptions().has_group(ListenerGroup::Input));
    assert!(slider.host().listeners.is_empty());

    for event in [
        pointer(Phase::Down, 100.0, 150.0),
        pointer(Phase::Move, 300.0, 150.0),
        pointer(Phase::Up, 300.0, 150.0),
        touch(Phase::Down, 100.0, 150.0),
        click(100.0, 150.0),
        HostEvent::Resize,
    ] {
        assert_eq!(slider.handle_event(&event, ms(10)), Disposition::Ignored);
    }
    assert_eq!(slider.host().writes(), 0);
    assert_eq!(slider.animator().started_count(), 0);

    // A late success does not revive the gate
    slider.on_image_load(ImageRole::After, decoded(800.0, 400.0));
    assert_eq!(slider.status(), SliderStatus::Failed);
    assert_eq!(slider.host().errors.len(), 1);
}

#[test]
fn test_zero_natural_size_is_failure() {
    let mut slider = TestSliderBuilder::new().mounted();
    slider.on_image_load(ImageRole::Before, decoded(0.0, 0.0));
    assert_eq!(slider.status(), SliderStatus::Failed);
    assert!(slider.readiness().error().is_some());
}

#[test]
fn test_destroy_releases_everything() {
    let mut slider = TestSliderBuilder::new().ready();

    slider.handle_event(&pointer(Phase::Move, 200.0, 150.0), ms(0));
    slider.handle_event(&HostEvent::Resize, ms(5));
    slider.handle_event(&pointer(Phase::Down, 200.0, 150.0), ms(10));
    slider.animate_to(90.0, ms(200), ms(20));
    assert!(slider.host().resize_cursor);
    assert_eq!(slider.host().pending_callbacks(), 2);
    assert_eq!(slider.host().captured.len(), 1);

    slider.destroy();

    assert_eq!(slider.status(), SliderStatus::Destroyed);
    assert!(slider.host().listeners.is_empty());
    assert!(slider.subscriptions().is_empty());
    assert_eq!(slider.host().pending_callbacks(), 0);
    assert!(slider.host().captured.is_empty());
    assert!(!slider.host().resize_cursor);
    assert!(slider.input_state().is_idle());
    assert!(!slider.animator().is_running());
}

#[test]
fn test_destroyed_instance_is_inert() {
    let mut slider = TestSliderBuilder::new().ready();
    slider.animate_to(90.0, ms(200), ms(0));
    let frame = slider.animator().pending_frame().unwrap();
    slider.destroy();

    let writes = slider.host().writes();
    let frames = slider.host().frames_requested;
    let released = slider.host().capture_released;

    for event in [
        pointer(Phase::Down, 100.0, 150.0),
        pointer(Phase::Move, 300.0, 150.0),
        pointer(Phase::Up, 300.0, 150.0),
        touch(Phase::Down, 100.0, 150.0),
        touch(Phase::Move, 300.0, 155.0),
        touch(Phase::Up, 300.0, 155.0),
        click(100.0, 150.0),
        HostEvent::Resize,
        HostEvent::OrientationChange,
    ] {
        assert_eq!(slider.handle_event(&event, ms(30)), Disposition::Ignored);
    }
    slider.on_frame(frame, ms(40));
    slider.animate_to(10.0, ms(200), ms(50));
    slider.set_percentage(5.0);

    assert_eq!(slider.host().writes(), writes);
    assert_eq!(slider.host().frames_requested, frames);
    assert_eq!(slider.animator().started_count(), 1);
    assert!(slider.host().timers.is_empty());

    // Idempotent
    slider.destroy();
    assert_eq!(slider.host().capture_released, released);
    assert_eq!(slider.status(), SliderStatus::Destroyed);
}

#[test]
fn test_destroy_while_loading() {
    let mut slider = TestSliderBuilder::new().mounted();
    slider.destroy();
    assert!(slider.host().listeners.is_empty());

    slider.on_image_load(ImageRole::Before, decoded(800.0, 400.0));
    slider.on_image_load(ImageRole::After, decoded(800.0, 400.0));
    assert_eq!(slider.status(), SliderStatus::Destroyed);
    assert!(slider.host().listeners.is_empty());
    assert!(slider.host().layouts.is_empty());
}

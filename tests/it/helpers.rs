//! Test helpers and builders for reducing boilerplate in tests.
//!
//! This module provides:
//! - `RecordingHost` - A `HostSurface` double that records every call
//! - `TestSliderBuilder` - Builder for mounted (and optionally ready) sliders
//! - Event shorthands like `pointer()`, `touch()`, `click()`
//! - `fire_frames()` / `fire_timers()` to drive host callbacks

use imgslider::host::{
    FrameHandle, HostSurface, ListenerId, ListenerKind, ListenerScope, PointerId, TimerHandle,
    VisualSink,
};
use imgslider::{
    HostEvent, ImageLoad, ImagePair, ImageRole, Phase, PointerKind, Projection, Rect, SliderConfig,
    SliderInstance, Size, TouchPoint,
};
use std::collections::HashMap;
use std::time::Duration;

// ============================================================================
// RecordingHost - HostSurface double
// ============================================================================

#[derive(Debug)]
pub struct RecordingHost {
    pub bounds: Rect,
    pub pointer_events: bool,
    pub projections: Vec<Projection>,
    pub listeners: HashMap<ListenerId, (ListenerScope, ListenerKind)>,
    pub frames: Vec<FrameHandle>,
    pub frames_requested: usize,
    pub frames_cancelled: usize,
    pub timers: Vec<(TimerHandle, Duration)>,
    pub timers_cancelled: usize,
    pub captured: Vec<PointerId>,
    pub capture_released: usize,
    pub resize_cursor: bool,
    pub layouts: Vec<Size>,
    pub errors: Vec<String>,
    next_id: u64,
}

impl RecordingHost {
    pub fn new(bounds: Rect) -> Self {
        Self {
            bounds,
            pointer_events: true,
            projections: Vec::new(),
            listeners: HashMap::new(),
            frames: Vec::new(),
            frames_requested: 0,
            frames_cancelled: 0,
            timers: Vec::new(),
            timers_cancelled: 0,
            captured: Vec::new(),
            capture_released: 0,
            resize_cursor: false,
            layouts: Vec::new(),
            errors: Vec::new(),
            next_id: 0,
        }
    }

    fn next(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    /// Number of position writes projected so far
    pub fn writes(&self) -> usize {
        self.projections.len()
    }

    pub fn last_percentage(&self) -> Option<f32> {
        self.projections.last().map(|p| p.percentage)
    }

    pub fn has_listener(&self, scope: ListenerScope, kind: ListenerKind) -> bool {
        self.listeners.values().any(|&(s, k)| s == scope && k == kind)
    }

    /// Number of host callbacks (frames and timers) still pending
    pub fn pending_callbacks(&self) -> usize {
        self.frames.len() + self.timers.len()
    }
}

impl VisualSink for RecordingHost {
    fn project(&mut self, projection: Projection) {
        self.projections.push(projection);
    }
}

impl HostSurface for RecordingHost {
    fn container_bounds(&self) -> Rect {
        self.bounds
    }

    fn supports_pointer_events(&self) -> bool {
        self.pointer_events
    }

    fn add_listener(&mut self, scope: ListenerScope, kind: ListenerKind) -> ListenerId {
        let id = ListenerId(self.next());
        self.listeners.insert(id, (scope, kind));
        id
    }

    fn remove_listener(&mut self, id: ListenerId) {
        self.listeners.remove(&id);
    }

    fn request_animation_frame(&mut self) -> FrameHandle {
        let handle = FrameHandle(self.next());
        self.frames.push(handle);
        self.frames_requested += 1;
        handle
    }

    fn cancel_animation_frame(&mut self, handle: FrameHandle) {
        let before = self.frames.len();
        self.frames.retain(|h| *h != handle);
        if self.frames.len() != before {
            self.frames_cancelled += 1;
        }
    }

    fn set_timeout(&mut self, delay: Duration) -> TimerHandle {
        let handle = TimerHandle(self.next());
        self.timers.push((handle, delay));
        handle
    }

    fn clear_timeout(&mut self, handle: TimerHandle) {
        let before = self.timers.len();
        self.timers.retain(|(h, _)| *h != handle);
        if self.timers.len() != before {
            self.timers_cancelled += 1;
        }
    }

    fn set_pointer_capture(&mut self, id: PointerId) {
        self.captured.push(id);
    }

    fn release_pointer_capture(&mut self, id: PointerId) {
        self.captured.retain(|c| *c != id);
        self.capture_released += 1;
    }

    fn set_resize_cursor(&mut self, active: bool) {
        self.resize_cursor = active;
    }

    fn apply_layout(&mut self, size: Size) {
        self.layouts.push(size);
    }

    fn show_error(&mut self, message: &str) {
        self.errors.push(message.to_string());
    }
}

// ============================================================================
// TestSliderBuilder
// ============================================================================

/// Builder for sliders mounted on a `RecordingHost`.
///
/// # Example
/// ```ignore
/// let mut slider = TestSliderBuilder::new()
///     .with_bounds(Rect::new(0.0, 0.0, 400.0, 300.0))
///     .with_initial(20.0)
///     .ready();
/// ```
pub struct TestSliderBuilder {
    bounds: Rect,
    config: SliderConfig,
    pointer_events: bool,
}

impl Default for TestSliderBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestSliderBuilder {
    /// 400x300 container at the origin, default config.
    pub fn new() -> Self {
        Self {
            bounds: Rect::new(0.0, 0.0, 400.0, 300.0),
            config: SliderConfig::default(),
            pointer_events: true,
        }
    }

    pub fn with_bounds(mut self, bounds: Rect) -> Self {
        self.bounds = bounds;
        self
    }

    pub fn with_config(mut self, config: SliderConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_initial(mut self, percentage: f32) -> Self {
        self.config.initial_percentage = percentage;
        self
    }

    /// Host without pointer events (mouse + touch listeners)
    pub fn legacy_events(mut self) -> Self {
        self.pointer_events = false;
        self
    }

    /// Mounted, images still loading.
    pub fn mounted(self) -> SliderInstance<RecordingHost> {
        let mut host = RecordingHost::new(self.bounds);
        host.pointer_events = self.pointer_events;
        SliderInstance::create(host, test_pair(), self.config)
    }

    /// Mounted with both images decoded at 800x400.
    pub fn ready(self) -> SliderInstance<RecordingHost> {
        let mut slider = self.mounted();
        slider.on_image_load(ImageRole::Before, decoded(800.0, 400.0));
        slider.on_image_load(ImageRole::After, decoded(800.0, 400.0));
        slider
    }
}

pub fn test_pair() -> ImagePair {
    ImagePair::new("imgSlider/bridge_a.jpg", "imgSlider/bridge_b.jpg")
}

pub fn decoded(w: f32, h: f32) -> ImageLoad {
    ImageLoad::Decoded {
        natural_width: w,
        natural_height: h,
    }
}

pub fn failed(reason: &str) -> ImageLoad {
    ImageLoad::Failed {
        reason: reason.to_string(),
    }
}

// ============================================================================
// Event shorthands
// ============================================================================

pub fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}

/// Mouse-type pointer event with pointer id 1
pub fn pointer(phase: Phase, x: f32, y: f32) -> HostEvent {
    HostEvent::Pointer {
        phase,
        pointer_id: 1,
        kind: PointerKind::Mouse,
        x,
        y,
    }
}

pub fn mouse(phase: Phase, x: f32, y: f32) -> HostEvent {
    HostEvent::Mouse { phase, x, y }
}

/// Single-finger touch event with touch id 5
pub fn touch(phase: Phase, x: f32, y: f32) -> HostEvent {
    HostEvent::Touch {
        phase,
        touches: vec![TouchPoint::new(5, x, y)],
    }
}

pub fn two_finger_touch(phase: Phase, x: f32, y: f32) -> HostEvent {
    HostEvent::Touch {
        phase,
        touches: vec![TouchPoint::new(5, x, y), TouchPoint::new(6, x + 50.0, y)],
    }
}

pub fn click(x: f32, y: f32) -> HostEvent {
    HostEvent::Click { x, y }
}

// ============================================================================
// Host callback drivers
// ============================================================================

/// Fire the oldest pending animation frame at `now`. Returns false if none.
pub fn fire_frame(slider: &mut SliderInstance<RecordingHost>, now: Duration) -> bool {
    let host = slider.host_mut();
    if host.frames.is_empty() {
        return false;
    }
    let handle = host.frames.remove(0);
    slider.on_frame(handle, now);
    true
}

/// Fire frames every 16ms starting at `start` until none are pending.
/// Returns the number of frames fired.
pub fn run_animation(slider: &mut SliderInstance<RecordingHost>, start: Duration) -> usize {
    let mut now = start;
    let mut fired = 0;
    while fire_frame(slider, now) {
        fired += 1;
        now += ms(16);
        assert!(fired < 1000, "animation never settled");
    }
    fired
}

/// Fire every pending timer.
pub fn fire_timers(slider: &mut SliderInstance<RecordingHost>) -> usize {
    let timers: Vec<TimerHandle> = slider
        .host_mut()
        .timers
        .drain(..)
        .map(|(h, _)| h)
        .collect();
    let count = timers.len();
    for handle in timers {
        slider.on_timer(handle);
    }
    count
}

//! Host contract - everything the slider core needs from its surroundings.
//!
//! The core never talks to a DOM or a window system directly. A host binds
//! one [`HostSurface`] per mounted slider, forwards events to
//! `SliderInstance::handle_event`, and calls back `on_frame`, `on_timer`
//! and `on_image_load` when the handles it gave out fire.

use crate::geometry::{Rect, Size};
use crate::position::Projection;
use std::fmt;

/// Identifier of a pointer, touch point or the mouse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PointerId(pub u32);

impl PointerId {
    /// The mouse has no pointer id of its own
    pub const MOUSE: PointerId = PointerId(0);
}

/// Handle for a requested animation frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameHandle(pub u64);

/// Handle for a pending timeout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(pub u64);

/// Handle for a registered event listener
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(pub u64);

/// Where a listener is attached
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListenerScope {
    /// The slider container itself
    Element,
    /// Document-level, used to follow a drag outside the element
    Document,
    /// Window-level (resize, orientation)
    Window,
    /// One of the two images of the pair
    Image(crate::readiness::ImageRole),
}

/// Event family a listener receives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListenerKind {
    MouseDown,
    MouseMove,
    MouseUp,
    TouchStart,
    TouchMove,
    TouchEnd,
    TouchCancel,
    PointerDown,
    PointerMove,
    PointerUp,
    PointerCancel,
    Click,
    Resize,
    OrientationChange,
    Load,
    Error,
}

impl fmt::Display for ListenerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::MouseDown => "mousedown",
            Self::MouseMove => "mousemove",
            Self::MouseUp => "mouseup",
            Self::TouchStart => "touchstart",
            Self::TouchMove => "touchmove",
            Self::TouchEnd => "touchend",
            Self::TouchCancel => "touchcancel",
            Self::PointerDown => "pointerdown",
            Self::PointerMove => "pointermove",
            Self::PointerUp => "pointerup",
            Self::PointerCancel => "pointercancel",
            Self::Click => "click",
            Self::Resize => "resize",
            Self::OrientationChange => "orientationchange",
            Self::Load => "load",
            Self::Error => "error",
        };
        f.write_str(name)
    }
}

/// Receives the visual projection of every position write.
pub trait VisualSink {
    fn project(&mut self, projection: Projection);
}

/// The mounted slider as seen from the core.
pub trait HostSurface: VisualSink {
    /// Current bounding rect of the slider container
    fn container_bounds(&self) -> Rect;

    /// Whether the host delivers pointer events; otherwise mouse and touch
    /// listeners are registered instead.
    fn supports_pointer_events(&self) -> bool {
        true
    }

    fn add_listener(&mut self, scope: ListenerScope, kind: ListenerKind) -> ListenerId;
    fn remove_listener(&mut self, id: ListenerId);

    /// Schedule one callback for the next display refresh
    fn request_animation_frame(&mut self) -> FrameHandle;
    fn cancel_animation_frame(&mut self, handle: FrameHandle);

    fn set_timeout(&mut self, delay: std::time::Duration) -> TimerHandle;
    fn clear_timeout(&mut self, handle: TimerHandle);

    fn set_pointer_capture(&mut self, id: PointerId);
    fn release_pointer_capture(&mut self, id: PointerId);

    /// Toggle the resize-cursor hint over the divider
    fn set_resize_cursor(&mut self, active: bool);

    /// Apply the fitted image size computed by the geometry resolver
    fn apply_layout(&mut self, size: Size);

    /// Show the inline error indicator for this instance
    fn show_error(&mut self, message: &str);
}

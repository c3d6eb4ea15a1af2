//! Host events and their normalised form.
//!
//! Mouse, touch and pointer events arrive in different shapes. They are
//! converted here, once, into a [`PointerIntent`]; nothing past this module
//! branches on the event family.

use crate::host::PointerId;

/// Phase of a press gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Down,
    Move,
    Up,
    Cancel,
}

/// Physical device behind an intent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    Mouse,
    Touch,
    Pen,
}

impl PointerKind {
    /// Parse a DOM `pointerType` string; unknown types are treated as mouse
    pub fn from_pointer_type(pointer_type: &str) -> Self {
        match pointer_type {
            "touch" => Self::Touch,
            "pen" => Self::Pen,
            _ => Self::Mouse,
        }
    }
}

/// One touch point in client coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchPoint {
    pub id: u32,
    pub x: f32,
    pub y: f32,
}

impl TouchPoint {
    pub fn new(id: u32, x: f32, y: f32) -> Self {
        Self { id, x, y }
    }
}

/// Raw event as delivered by the host.
///
/// For `Touch` with `Phase::Up`/`Phase::Cancel`, `touches` holds the
/// changed (lifted) touches, since the active list is empty by then.
#[derive(Debug, Clone, PartialEq)]
pub enum HostEvent {
    Mouse {
        phase: Phase,
        x: f32,
        y: f32,
    },
    Touch {
        phase: Phase,
        touches: Vec<TouchPoint>,
    },
    Pointer {
        phase: Phase,
        pointer_id: u32,
        kind: PointerKind,
        x: f32,
        y: f32,
    },
    Click {
        x: f32,
        y: f32,
    },
    Resize,
    OrientationChange,
}

/// Normalised press/move/release
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerIntent {
    pub x: f32,
    pub y: f32,
    pub id: PointerId,
    pub phase: Phase,
    pub kind: PointerKind,
    /// Number of simultaneous touch points (1 for mouse and pointer events)
    pub touch_count: usize,
    /// Came from the pointer-events family, which supports capture
    pub capturable: bool,
}

impl PointerIntent {
    pub fn is_multi_touch(&self) -> bool {
        self.touch_count > 1
    }
}

impl HostEvent {
    /// Normalise a press/move/release event. `None` for everything else
    /// (clicks, resize, orientation) and for touch events without points.
    pub fn intent(&self) -> Option<PointerIntent> {
        match self {
            Self::Mouse { phase, x, y } => Some(PointerIntent {
                x: *x,
                y: *y,
                id: PointerId::MOUSE,
                phase: *phase,
                kind: PointerKind::Mouse,
                touch_count: 1,
                capturable: false,
            }),
            Self::Touch { phase, touches } => {
                let first = touches.first()?;
                Some(PointerIntent {
                    x: first.x,
                    y: first.y,
                    id: PointerId(first.id),
                    phase: *phase,
                    kind: PointerKind::Touch,
                    touch_count: touches.len(),
                    capturable: false,
                })
            }
            Self::Pointer {
                phase,
                pointer_id,
                kind,
                x,
                y,
            } => Some(PointerIntent {
                x: *x,
                y: *y,
                id: PointerId(*pointer_id),
                phase: *phase,
                kind: *kind,
                touch_count: 1,
                capturable: true,
            }),
            Self::Click { .. } | Self::Resize | Self::OrientationChange => None,
        }
    }
}

/// What the host should do with the native event after the core saw it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// Not relevant to the slider
    Ignored,
    /// Consumed; default behaviour may proceed
    Handled,
    /// Consumed; the host must call `preventDefault()` (no native scroll)
    PreventDefault,
    /// Gesture handed back to the browser (native scrolling)
    Passthrough,
}

//! Input state machine - one explicit state for the whole press gesture.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Dragging                  (press; single pointer/touch)
//! Dragging -> Dragging              (move; writes when the session is active)
//! Dragging -> ScrollDisambiguating  (first touch move is mostly vertical)
//!
//! Dragging/ScrollDisambiguating -> Idle   (release or cancel)
//! ```

use super::event::{PointerIntent, PointerKind};
use crate::host::PointerId;
use std::time::Duration;

/// Bookkeeping for one press gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    /// Press landed where dragging is allowed; inactive sessions never write
    pub active: bool,
    pub pointer_id: PointerId,
    pub kind: PointerKind,
    pub origin_x: f32,
    pub origin_y: f32,
    pub origin_time: Duration,
    /// A move was processed after the press
    pub moved: bool,
    /// Pointer capture was taken for this session
    pub captured: bool,
}

impl DragSession {
    pub fn begin(intent: &PointerIntent, now: Duration, active: bool) -> Self {
        Self {
            active,
            pointer_id: intent.id,
            kind: intent.kind,
            origin_x: intent.x,
            origin_y: intent.y,
            origin_time: now,
            moved: false,
            captured: false,
        }
    }

    /// Straight-line distance from the press position
    pub fn displacement(&self, x: f32, y: f32) -> f32 {
        let dx = x - self.origin_x;
        let dy = y - self.origin_y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Time since the press
    pub fn elapsed(&self, now: Duration) -> Duration {
        now.saturating_sub(self.origin_time)
    }

    /// True if the first move from the press reads as a vertical scroll
    pub fn is_vertical_scroll(&self, x: f32, y: f32) -> bool {
        (y - self.origin_y).abs() > (x - self.origin_x).abs()
    }
}

#[derive(Debug, Clone, Default)]
pub enum InputState {
    /// No press in progress
    #[default]
    Idle,

    /// A press is in progress
    Dragging(DragSession),

    /// Touch gesture handed to native scrolling until release
    ScrollDisambiguating {
        pointer_id: PointerId,
        captured: bool,
    },
}

impl InputState {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging(_))
    }

    pub fn is_scroll_disambiguating(&self) -> bool {
        matches!(self, Self::ScrollDisambiguating { .. })
    }

    pub fn session(&self) -> Option<&DragSession> {
        match self {
            Self::Dragging(session) => Some(session),
            _ => None,
        }
    }

    pub fn session_mut(&mut self) -> Option<&mut DragSession> {
        match self {
            Self::Dragging(session) => Some(session),
            _ => None,
        }
    }

    /// Pointer that owns the current gesture, if any
    pub fn pointer_id(&self) -> Option<PointerId> {
        match self {
            Self::Idle => None,
            Self::Dragging(session) => Some(session.pointer_id),
            Self::ScrollDisambiguating { pointer_id, .. } => Some(*pointer_id),
        }
    }

    /// Pointer whose capture must be released when the gesture ends
    pub fn captured_pointer(&self) -> Option<PointerId> {
        match self {
            Self::Dragging(session) if session.captured => Some(session.pointer_id),
            Self::ScrollDisambiguating {
                pointer_id,
                captured: true,
            } => Some(*pointer_id),
            _ => None,
        }
    }

    pub fn start_dragging(&mut self, session: DragSession) {
        *self = Self::Dragging(session);
    }

    /// Abandon the drag and let the browser scroll
    pub fn start_scroll_passthrough(&mut self) {
        if let Self::Dragging(session) = self {
            *self = Self::ScrollDisambiguating {
                pointer_id: session.pointer_id,
                captured: session.captured,
            };
        }
    }

    /// Reset to Idle, returning the state that was left
    pub fn reset(&mut self) -> InputState {
        std::mem::take(self)
    }
}

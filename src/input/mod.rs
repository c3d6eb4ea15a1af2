//! Pointer, mouse and touch input handling for the slider.
//!
//! ## Architecture
//!
//! Host events are normalised at the boundary (`event`) into a single
//! intent shape, then driven through an explicit state machine
//! (`InputState`) so a gesture is always exactly one of idle, dragging, or
//! handed over to native scrolling.
//!
//! ## Modules
//!
//! - `event` - Host event shapes, normalisation, dispositions
//! - `state` - Input state machine enum and drag session
//! - `pointer_down` - Press handling (drag start, animation cancel)
//! - `drag` - Move handling (drag writes, scroll disambiguation)
//! - `pointer_up` - Release handling (tap and click intents)
//! - `hover` - Divider hit testing for the resize-cursor hint

pub mod event;
mod state;
mod pointer_down;
mod drag;
mod pointer_up;
mod hover;

pub use event::{Disposition, HostEvent, Phase, PointerIntent, PointerKind, TouchPoint};
pub use state::{DragSession, InputState};

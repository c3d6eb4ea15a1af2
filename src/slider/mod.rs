//! Slider instance - the unit a host mounts.
//!
//! This module is organized into several submodules:
//! - `state` - The SliderInstance struct, accessors and write paths
//! - `lifecycle` - Mount, readiness callbacks and teardown
//! - `events` - Event and animation-frame dispatch
//! - `layout` - Debounced resize handling and geometry passes
//!
//! Input handlers live in `crate::input` as further `impl` blocks.

mod state;
mod lifecycle;
mod events;
mod layout;

pub use state::{SliderInstance, SliderStatus};

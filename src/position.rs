//! Position state - the single source of truth for the reveal percentage.
//!
//! Every write is clamped and projected to the visual sink synchronously,
//! so the host never shows a value the state does not hold.

use crate::constants::DEFAULT_PERCENTAGE;
use crate::geometry::clamp_percentage;
use crate::host::VisualSink;
use serde::Serialize;

/// What the host must render for a given percentage.
///
/// The "after" image is masked so only its left `percentage`% shows;
/// the divider sits at `handle_left`% from the left edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Projection {
    pub percentage: f32,
    /// Right inset of the "after" image mask, in percent
    pub clip_inset_right: f32,
    /// Divider offset from the left edge, in percent
    pub handle_left: f32,
}

impl Projection {
    pub fn at(percentage: f32) -> Self {
        let percentage = clamp_percentage(percentage);
        Self {
            percentage,
            clip_inset_right: 100.0 - percentage,
            handle_left: percentage,
        }
    }

    /// CSS `clip-path` value for the "after" image
    pub fn clip_path(&self) -> String {
        format!("inset(0 {}% 0 0)", self.clip_inset_right)
    }
}

/// Clamped reveal percentage for one slider instance.
#[derive(Debug, Clone)]
pub struct PositionState {
    value: f32,
}

impl Default for PositionState {
    fn default() -> Self {
        Self::new(DEFAULT_PERCENTAGE)
    }
}

impl PositionState {
    pub fn new(initial: f32) -> Self {
        let value = if initial.is_nan() {
            DEFAULT_PERCENTAGE
        } else {
            clamp_percentage(initial)
        };
        Self { value }
    }

    /// Current percentage in [0, 100]
    #[inline]
    pub fn get(&self) -> f32 {
        self.value
    }

    /// Clamp, store and project `p`. Returns the stored value.
    ///
    /// NaN is dropped: the stored value and the sink are left untouched.
    pub fn set(&mut self, p: f32, sink: &mut impl VisualSink) -> f32 {
        if p.is_nan() {
            tracing::trace!("Dropping NaN percentage write");
            return self.value;
        }
        self.value = clamp_percentage(p);
        sink.project(Projection::at(self.value));
        self.value
    }

    /// Re-emit the current value without changing it (after a relayout).
    pub fn reproject(&self, sink: &mut impl VisualSink) {
        sink.project(Projection::at(self.value));
    }
}

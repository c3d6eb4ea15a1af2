//! The SliderInstance struct and its two write paths.

use crate::animation::Animator;
use crate::config::{JumpMode, SliderConfig};
use crate::debounce::Debouncer;
use crate::geometry::{Size, clamp_percentage};
use crate::host::HostSurface;
use crate::input::InputState;
use crate::perf::FrameStats;
use crate::position::PositionState;
use crate::readiness::{GateState, ImagePair, ReadinessGate};
use crate::subscriptions::Subscriptions;
use std::time::Duration;

/// Coarse lifecycle status of an instance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SliderStatus {
    /// Waiting for both images to decode
    Loading,
    /// Ready and accepting input
    Interactive,
    /// An image failed; input is disabled and the error indicator shown
    Failed,
    /// `destroy()` has run
    Destroyed,
}

/// One mounted before/after slider.
///
/// Owns all of its mutable state; the host is reached only through `H`.
pub struct SliderInstance<H: HostSurface> {
    pub(crate) host: H,
    pub(crate) pair: ImagePair,
    pub(crate) config: SliderConfig,
    pub(crate) position: PositionState,
    pub(crate) input: InputState,
    pub(crate) animator: Animator,
    pub(crate) gate: ReadinessGate,
    pub(crate) subscriptions: Subscriptions,
    pub(crate) relayout: Debouncer,
    pub(crate) frame_stats: FrameStats,
    /// Fitted image size from the last successful geometry pass
    pub(crate) layout: Option<Size>,
    /// Resize-cursor hint currently shown
    pub(crate) cursor_hint: bool,
    /// Swallow the click the browser synthesises after a real drag
    pub(crate) suppress_click: bool,
    /// Host time the last touch gesture ended
    pub(crate) last_touch_end: Option<Duration>,
    pub(crate) destroyed: bool,
}

impl<H: HostSurface> SliderInstance<H> {
    pub fn status(&self) -> SliderStatus {
        if self.destroyed {
            return SliderStatus::Destroyed;
        }
        match self.gate.state() {
            GateState::Pending => SliderStatus::Loading,
            GateState::Ready => SliderStatus::Interactive,
            GateState::Failed => SliderStatus::Failed,
        }
    }

    pub fn is_interactive(&self) -> bool {
        self.status() == SliderStatus::Interactive
    }

    /// Current reveal percentage
    pub fn percentage(&self) -> f32 {
        self.position.get()
    }

    pub fn pair(&self) -> &ImagePair {
        &self.pair
    }

    pub fn config(&self) -> &SliderConfig {
        &self.config
    }

    pub fn readiness(&self) -> &ReadinessGate {
        &self.gate
    }

    pub fn input_state(&self) -> &InputState {
        &self.input
    }

    pub fn animator(&self) -> &Animator {
        &self.animator
    }

    pub fn subscriptions(&self) -> &Subscriptions {
        &self.subscriptions
    }

    pub fn frame_stats(&self) -> &FrameStats {
        &self.frame_stats
    }

    /// Fitted image size from the last geometry pass
    pub fn layout(&self) -> Option<Size> {
        self.layout
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// The only write path for the position: clamp, store, project.
    ///
    /// No-op once the instance is destroyed.
    pub fn set_percentage(&mut self, p: f32) -> f32 {
        if self.destroyed {
            return self.position.get();
        }
        self.position.set(p, &mut self.host)
    }

    /// Animate toward `target` over `duration`, replacing any live job.
    ///
    /// No-op once the instance is destroyed.
    pub fn animate_to(&mut self, target: f32, duration: Duration, now: Duration) {
        if self.destroyed || target.is_nan() {
            return;
        }
        let from = self.position.get();
        let target = clamp_percentage(target);
        self.frame_stats.break_sequence();
        self.animator
            .start(&mut self.host, from, target, duration, now);
    }

    /// Move to `target` the way the config says taps and clicks should.
    pub(crate) fn jump_to(&mut self, target: f32, now: Duration) {
        match self.config.jump_mode {
            JumpMode::Animated => {
                let duration = self.config.animation_duration();
                self.animate_to(target, duration, now);
            }
            JumpMode::Instant => {
                self.animator.cancel(&mut self.host);
                self.set_percentage(target);
            }
        }
    }
}

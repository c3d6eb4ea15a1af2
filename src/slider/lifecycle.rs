//! Instance lifecycle - mount, readiness, teardown.

use super::state::SliderInstance;
use crate::animation::Animator;
use crate::config::SliderConfig;
use crate::debounce::Debouncer;
use crate::host::{HostSurface, ListenerKind, ListenerScope};
use crate::input::InputState;
use crate::perf::FrameStats;
use crate::position::PositionState;
use crate::readiness::{GateOutcome, ImageLoad, ImagePair, ImageRole, ReadinessGate};
use crate::subscriptions::{ListenerGroup, Subscriptions};

/// Element-level listeners when the host delivers pointer events
const POINTER_LISTENERS: &[ListenerKind] = &[
    ListenerKind::PointerDown,
    ListenerKind::PointerMove,
    ListenerKind::PointerUp,
    ListenerKind::PointerCancel,
    ListenerKind::Click,
];

/// Element-level listeners for hosts with only mouse and touch events
const LEGACY_LISTENERS: &[ListenerKind] = &[
    ListenerKind::MouseDown,
    ListenerKind::MouseMove,
    ListenerKind::TouchStart,
    ListenerKind::TouchMove,
    ListenerKind::TouchEnd,
    ListenerKind::TouchCancel,
    ListenerKind::Click,
];

impl<H: HostSurface> SliderInstance<H> {
    /// Mount a slider on `host` and start waiting for both images.
    pub fn create(mut host: H, pair: ImagePair, config: SliderConfig) -> Self {
        let config = config.normalized();
        let mut subscriptions = Subscriptions::new();
        for role in [ImageRole::Before, ImageRole::After] {
            for kind in [ListenerKind::Load, ListenerKind::Error] {
                subscriptions.add(
                    &mut host,
                    ListenerGroup::Readiness,
                    ListenerScope::Image(role),
                    kind,
                );
            }
        }

        tracing::info!(before = %pair.before, after = %pair.after, "Slider mounted, awaiting images");

        Self {
            host,
            pair,
            position: PositionState::new(config.initial_percentage),
            relayout: Debouncer::new(config.resize_debounce()),
            config,
            input: InputState::default(),
            animator: Animator::new(),
            gate: ReadinessGate::new(),
            subscriptions,
            frame_stats: FrameStats::new(),
            layout: None,
            cursor_hint: false,
            suppress_click: false,
            last_touch_end: None,
            destroyed: false,
        }
    }

    /// Host callback: one image of the pair finished loading or failed.
    pub fn on_image_load(&mut self, role: ImageRole, load: ImageLoad) {
        if self.destroyed {
            return;
        }
        let Some(outcome) = self.gate.report(role, load) else {
            return;
        };
        self.subscriptions
            .remove_group(&mut self.host, ListenerGroup::Readiness);

        match outcome {
            GateOutcome::Ready { natural_size } => {
                tracing::info!(
                    natural_width = natural_size.width,
                    natural_height = natural_size.height,
                    "Image pair ready"
                );
                self.attach_input();
                self.relayout_now();
                self.position.reproject(&mut self.host);
            }
            GateOutcome::Failed(err) => {
                tracing::error!(before = %self.pair.before, after = %self.pair.after, "{}", err);
                self.host.show_error(&err.to_string());
            }
        }
    }

    fn attach_input(&mut self) {
        let kinds = if self.host.supports_pointer_events() {
            POINTER_LISTENERS
        } else {
            LEGACY_LISTENERS
        };
        for kind in kinds {
            self.subscriptions.add(
                &mut self.host,
                ListenerGroup::Input,
                ListenerScope::Element,
                *kind,
            );
        }
        for kind in [ListenerKind::Resize, ListenerKind::OrientationChange] {
            self.subscriptions.add(
                &mut self.host,
                ListenerGroup::Layout,
                ListenerScope::Window,
                kind,
            );
        }
    }

    /// Tear the instance down: listeners, frames, timers, capture, session.
    ///
    /// Idempotent. Afterwards no host callback is pending and no further
    /// position writes happen.
    pub fn destroy(&mut self) {
        if self.destroyed {
            return;
        }
        self.animator.cancel(&mut self.host);
        self.relayout.cancel(&mut self.host);
        self.end_gesture();
        if self.cursor_hint {
            self.cursor_hint = false;
            self.host.set_resize_cursor(false);
        }
        let removed = self.subscriptions.clear(&mut self.host);
        self.destroyed = true;
        tracing::info!(listeners = removed, "Slider destroyed");
    }
}

impl<H: HostSurface> Drop for SliderInstance<H> {
    fn drop(&mut self) {
        self.destroy();
    }
}

//! Release handling - end the gesture, classify taps and clicks.

use super::event::{Disposition, PointerIntent, PointerKind};
use super::state::{DragSession, InputState};
use crate::geometry::percentage_from_x;
use crate::host::HostSurface;
use crate::slider::SliderInstance;
use crate::subscriptions::ListenerGroup;
use std::time::Duration;

impl<H: HostSurface> SliderInstance<H> {
    pub(crate) fn handle_release(
        &mut self,
        intent: PointerIntent,
        now: Duration,
        cancelled: bool,
    ) -> Disposition {
        if self.input.pointer_id() != Some(intent.id) {
            return Disposition::Ignored;
        }

        let previous = self.end_gesture();
        match previous {
            InputState::Dragging(session) => {
                if session.moved && session.active {
                    self.suppress_click = true;
                }
                tracing::debug!(pointer = intent.id.0, cancelled, moved = session.moved, "Drag ended");

                if session.kind != PointerKind::Touch {
                    return Disposition::Handled;
                }

                // A touch gesture gets exactly one chance to jump, here. The
                // click and emulated mouse events that may follow are dropped.
                self.suppress_click = true;
                self.last_touch_end = Some(now);
                if !cancelled && self.is_tap(&session, intent.x, intent.y, now) {
                    self.handle_tap(intent.x, now);
                }
                Disposition::PreventDefault
            }
            InputState::ScrollDisambiguating { .. } => Disposition::Passthrough,
            InputState::Idle => Disposition::Ignored,
        }
    }

    /// Click on the slider body while not dragging behaves like a tap.
    pub(crate) fn handle_click(&mut self, x: f32, now: Duration) -> Disposition {
        if !self.input.is_idle() {
            return Disposition::Ignored;
        }
        if std::mem::take(&mut self.suppress_click) {
            tracing::trace!("Swallowing click that ended a gesture");
            return Disposition::Handled;
        }
        if !self.config.tap_to_jump {
            return Disposition::Ignored;
        }
        let bounds = self.host.container_bounds();
        if !bounds.is_valid() {
            return Disposition::Ignored;
        }
        let target = percentage_from_x(x, &bounds);
        tracing::debug!(x, target, "Click jump");
        self.jump_to(target, now);
        Disposition::Handled
    }

    /// Reset to Idle and release everything the gesture held.
    pub(crate) fn end_gesture(&mut self) -> InputState {
        if let Some(id) = self.input.captured_pointer() {
            self.host.release_pointer_capture(id);
        }
        self.subscriptions
            .remove_group(&mut self.host, ListenerGroup::Gesture);
        self.input.reset()
    }

    fn is_tap(&self, session: &DragSession, x: f32, y: f32, now: Duration) -> bool {
        session.kind == PointerKind::Touch
            && !session.moved
            && session.displacement(x, y) < self.config.tap_max_distance
            && session.elapsed(now) < self.config.tap_max_duration()
    }

    fn handle_tap(&mut self, x: f32, now: Duration) {
        if !self.config.tap_to_jump {
            return;
        }
        let bounds = self.host.container_bounds();
        if !bounds.is_valid() {
            return;
        }
        let target = percentage_from_x(x, &bounds);
        tracing::debug!(x, target, "Tap jump");
        self.jump_to(target, now);
    }
}

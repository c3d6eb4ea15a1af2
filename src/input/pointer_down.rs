//! Press handling - drag start.

use super::event::{Disposition, PointerIntent, PointerKind};
use super::state::DragSession;
use crate::config::DragRegion;
use crate::constants::TOUCH_MOUSE_EMULATION_WINDOW;
use crate::geometry::{divider_hit_zone, percentage_from_x};
use crate::host::{HostSurface, ListenerKind, ListenerScope};
use crate::slider::SliderInstance;
use crate::subscriptions::ListenerGroup;
use std::time::Duration;

impl<H: HostSurface> SliderInstance<H> {
    pub(crate) fn handle_press(&mut self, intent: PointerIntent, now: Duration) -> Disposition {
        // Pinch and two-finger gestures are not ours
        if intent.is_multi_touch() {
            tracing::trace!(touches = intent.touch_count, "Ignoring multi-touch press");
            return Disposition::Ignored;
        }
        if !self.input.is_idle() {
            return Disposition::Ignored;
        }
        if self.is_emulated_mouse(&intent, now) {
            tracing::trace!("Ignoring mouse press emulated from touch");
            return Disposition::Ignored;
        }

        let bounds = self.host.container_bounds();
        if !bounds.is_valid() {
            tracing::warn!(width = bounds.width, height = bounds.height, "Press on zero-size slider");
            return Disposition::Ignored;
        }

        // Manual input always wins over a running animation
        self.animator.cancel(&mut self.host);

        let active = match self.config.drag_region {
            DragRegion::Anywhere => true,
            DragRegion::Handle => {
                divider_hit_zone(&bounds, self.position.get(), self.config.handle_width)
                    .contains(intent.x, intent.y)
            }
        };

        let mut session = DragSession::begin(&intent, now, active);
        if intent.capturable {
            self.host.set_pointer_capture(intent.id);
            session.captured = true;
        } else {
            self.subscribe_gesture(intent.kind);
        }

        self.suppress_click = false;
        self.input.start_dragging(session);
        tracing::debug!(
            pointer = intent.id.0,
            kind = ?intent.kind,
            active,
            x = intent.x,
            "Drag started"
        );

        if active {
            self.set_percentage(percentage_from_x(intent.x, &bounds));
        }
        Disposition::Handled
    }

    /// Legacy mouse press arriving right after a touch gesture ended.
    fn is_emulated_mouse(&self, intent: &PointerIntent, now: Duration) -> bool {
        if intent.kind != PointerKind::Mouse || intent.capturable {
            return false;
        }
        self.last_touch_end
            .is_some_and(|end| now.saturating_sub(end) < TOUCH_MOUSE_EMULATION_WINDOW)
    }

    /// Follow the gesture outside the element until release.
    fn subscribe_gesture(&mut self, kind: PointerKind) {
        let kinds: &[ListenerKind] = match kind {
            PointerKind::Touch => &[
                ListenerKind::TouchMove,
                ListenerKind::TouchEnd,
                ListenerKind::TouchCancel,
            ],
            PointerKind::Mouse | PointerKind::Pen => {
                &[ListenerKind::MouseMove, ListenerKind::MouseUp]
            }
        };
        for kind in kinds {
            self.subscriptions.add(
                &mut self.host,
                ListenerGroup::Gesture,
                ListenerScope::Document,
                *kind,
            );
        }
    }
}

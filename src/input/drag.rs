//! Move handling - drag writes and touch scroll disambiguation.
//!
//! Moves arrive at display rate during a drag, so the non-drag paths exit
//! before touching geometry.

use super::event::{Disposition, PointerIntent, PointerKind};
use crate::geometry::percentage_from_x;
use crate::host::HostSurface;
use crate::slider::SliderInstance;

impl<H: HostSurface> SliderInstance<H> {
    pub(crate) fn handle_move(&mut self, intent: PointerIntent) -> Disposition {
        if intent.is_multi_touch() {
            return Disposition::Ignored;
        }

        match self.input.pointer_id() {
            None => {
                if intent.kind == PointerKind::Touch {
                    return Disposition::Ignored;
                }
                return self.update_hover(intent.x, intent.y);
            }
            Some(owner) if owner != intent.id => return Disposition::Ignored,
            Some(_) => {}
        }

        if self.input.is_scroll_disambiguating() {
            return Disposition::Passthrough;
        }

        let Some(session) = self.input.session_mut() else {
            return Disposition::Ignored;
        };

        // First touch move decides between dragging and page scrolling
        if session.kind == PointerKind::Touch
            && !session.moved
            && session.is_vertical_scroll(intent.x, intent.y)
        {
            self.input.start_scroll_passthrough();
            tracing::debug!(pointer = intent.id.0, "Vertical touch, yielding to scroll");
            return Disposition::Passthrough;
        }

        session.moved = true;
        if !session.active {
            return Disposition::Handled;
        }

        let bounds = self.host.container_bounds();
        if !bounds.is_valid() {
            return Disposition::Handled;
        }
        let p = percentage_from_x(intent.x, &bounds);
        tracing::trace!(x = intent.x, percentage = p, "Drag move");
        self.set_percentage(p);
        Disposition::PreventDefault
    }
}

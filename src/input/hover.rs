//! Divider hover hint. Advisory only; never writes the position.

use super::event::Disposition;
use crate::geometry::divider_hit_zone;
use crate::host::HostSurface;
use crate::slider::SliderInstance;

impl<H: HostSurface> SliderInstance<H> {
    /// True if (x, y) lies in the hit zone around the divider.
    pub fn is_over_divider(&self, x: f32, y: f32) -> bool {
        let bounds = self.host.container_bounds();
        if !bounds.is_valid() {
            return false;
        }
        divider_hit_zone(&bounds, self.position.get(), self.config.handle_width).contains(x, y)
    }

    pub(crate) fn update_hover(&mut self, x: f32, y: f32) -> Disposition {
        if !self.config.hover_cursor {
            return Disposition::Ignored;
        }
        let over = self.is_over_divider(x, y);
        if over == self.cursor_hint {
            return Disposition::Ignored;
        }
        self.cursor_hint = over;
        self.host.set_resize_cursor(over);
        Disposition::Handled
    }
}

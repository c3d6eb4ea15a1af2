//! Resize-driven relayout.
//!
//! Resize and orientation events only restart the debouncer; the geometry
//! pass runs once when the trailing-edge timer fires. A relayout never
//! changes the position value, it only re-projects it.

use super::state::SliderInstance;
use crate::geometry::{Orientation, fit_dimensions};
use crate::host::{HostSurface, TimerHandle};

impl<H: HostSurface> SliderInstance<H> {
    pub(crate) fn schedule_relayout(&mut self) {
        self.relayout.trigger(&mut self.host);
    }

    /// Host callback: a timeout handed out by this instance fired.
    pub fn on_timer(&mut self, handle: TimerHandle) {
        if self.destroyed || !self.relayout.fire(handle) {
            return;
        }
        if self.relayout_now() {
            self.position.reproject(&mut self.host);
        }
    }

    /// Run one geometry pass. Returns false when the geometry is unusable;
    /// the next resize or orientation event retries.
    pub(crate) fn relayout_now(&mut self) -> bool {
        let Some(natural) = self.gate.natural_size() else {
            return false;
        };
        let bounds = self.host.container_bounds();
        match fit_dimensions(
            &bounds,
            natural.width,
            natural.height,
            Orientation::of(&bounds),
        ) {
            Ok(size) => {
                tracing::debug!(width = size.width, height = size.height, "Relayout");
                self.layout = Some(size);
                self.host.apply_layout(size);
                true
            }
            Err(e) => {
                tracing::warn!("Skipping relayout: {}", e);
                false
            }
        }
    }
}

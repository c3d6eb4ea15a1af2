//! Event and frame dispatch.

use super::state::SliderInstance;
use crate::host::{FrameHandle, HostSurface};
use crate::input::{Disposition, HostEvent, Phase};
use crate::profile_scope;
use std::time::Duration;

impl<H: HostSurface> SliderInstance<H> {
    /// Host callback for every DOM-level event the instance listens to.
    ///
    /// `now` is the host timestamp of the event. Until the image pair is
    /// ready, and after `destroy()`, every event is ignored.
    pub fn handle_event(&mut self, event: &HostEvent, now: Duration) -> Disposition {
        profile_scope!("handle_event");

        if self.destroyed || !self.gate.is_ready() {
            return Disposition::Ignored;
        }

        match event {
            HostEvent::Resize | HostEvent::OrientationChange => {
                self.schedule_relayout();
                Disposition::Handled
            }
            HostEvent::Click { x, .. } => self.handle_click(*x, now),
            _ => {
                let Some(intent) = event.intent() else {
                    return Disposition::Ignored;
                };
                match intent.phase {
                    Phase::Down => self.handle_press(intent, now),
                    Phase::Move => self.handle_move(intent),
                    Phase::Up => self.handle_release(intent, now, false),
                    Phase::Cancel => self.handle_release(intent, now, true),
                }
            }
        }
    }

    /// Host callback: an animation frame requested by this instance fired.
    pub fn on_frame(&mut self, handle: FrameHandle, now: Duration) {
        profile_scope!("on_frame");

        if self.destroyed {
            return;
        }
        let Some(step) = self.animator.step(handle, now) else {
            return;
        };
        self.frame_stats.record(now);
        self.set_percentage(step.value);
        if !step.finished {
            self.animator.schedule_next(&mut self.host);
        }
    }
}

//! Trailing-edge debouncer on top of host timers.
//!
//! Each trigger replaces the pending timeout, so a burst of resize or
//! orientation events collapses into one callback `delay` after the last
//! event. Only the handle of the latest timeout is honoured.

use crate::host::{HostSurface, TimerHandle};
use std::time::Duration;

#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    pending: Option<TimerHandle>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Restart the trailing-edge timer.
    pub fn trigger(&mut self, host: &mut impl HostSurface) {
        if let Some(previous) = self.pending.take() {
            host.clear_timeout(previous);
        }
        self.pending = Some(host.set_timeout(self.delay));
    }

    /// Called when a host timer fires. Returns true if it is ours and
    /// still current; the pending slot is cleared in that case.
    pub fn fire(&mut self, handle: TimerHandle) -> bool {
        if self.pending == Some(handle) {
            self.pending = None;
            true
        } else {
            false
        }
    }

    pub fn cancel(&mut self, host: &mut impl HostSurface) {
        if let Some(handle) = self.pending.take() {
            host.clear_timeout(handle);
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

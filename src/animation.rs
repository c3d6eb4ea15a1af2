//! Animation engine - cancellable ease-out-cubic interpolation.
//!
//! ## Invariants
//!
//! - At most one job is live. Starting a new one cancels the old job's
//!   pending frame; the old target is forgotten, never blended.
//! - A frame callback is honoured only if its handle belongs to the live
//!   job. Stale callbacks from cancelled jobs produce no writes.
//! - Progress is computed from host timestamps, so a late frame catches up
//!   instead of slowing the animation down.
//!
//! The engine never writes the position itself: [`Animator::step`] returns
//! the interpolated value and the instance writes it through its single
//! write path.

use crate::host::{FrameHandle, HostSurface};
use std::time::Duration;

/// Ease-out-cubic: fast start, decelerating to rest.
#[inline]
pub fn ease_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// Fraction of `duration` covered by `elapsed`, clamped to [0, 1].
/// A zero duration is always complete.
pub fn progress(elapsed: Duration, duration: Duration) -> f64 {
    if duration.is_zero() {
        return 1.0;
    }
    (elapsed.as_nanos() as f64 / duration.as_nanos() as f64).clamp(0.0, 1.0)
}

/// One animated transition toward a target percentage.
#[derive(Debug, Clone)]
pub struct AnimationJob {
    pub id: u64,
    pub start_percentage: f32,
    pub target_percentage: f32,
    pub start_time: Duration,
    pub duration: Duration,
    /// Frame requested for the next step, if any
    frame: Option<FrameHandle>,
}

impl AnimationJob {
    /// Interpolated percentage at host time `now`, plus whether the job is done.
    pub fn sample(&self, now: Duration) -> (f32, bool) {
        let elapsed = now.saturating_sub(self.start_time);
        let t = progress(elapsed, self.duration);
        let eased = ease_out_cubic(t);
        let start = f64::from(self.start_percentage);
        let target = f64::from(self.target_percentage);
        let value = start + (target - start) * eased;
        (value as f32, t >= 1.0)
    }
}

/// Result of honouring a frame callback
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step {
    pub value: f32,
    pub finished: bool,
}

/// Owns the (at most one) live animation job of an instance.
#[derive(Debug, Default)]
pub struct Animator {
    job: Option<AnimationJob>,
    next_id: u64,
    /// Number of jobs ever started
    started: u64,
}

impl Animator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a job from `from` to `target`, replacing any live job.
    /// Returns the new job id.
    pub fn start(
        &mut self,
        host: &mut impl HostSurface,
        from: f32,
        target: f32,
        duration: Duration,
        now: Duration,
    ) -> u64 {
        if self.cancel(host) {
            tracing::debug!("Superseding in-flight animation");
        }

        self.next_id += 1;
        self.started += 1;
        let frame = host.request_animation_frame();
        self.job = Some(AnimationJob {
            id: self.next_id,
            start_percentage: from,
            target_percentage: target,
            start_time: now,
            duration,
            frame: Some(frame),
        });
        tracing::debug!(
            job = self.next_id,
            from,
            target,
            duration_ms = duration.as_millis() as u64,
            "Animation started"
        );
        self.next_id
    }

    /// Honour a frame callback. Returns `None` for stale handles.
    ///
    /// When the returned step is finished the job is already cleared;
    /// otherwise the caller must write the value and then call
    /// [`Animator::schedule_next`].
    pub fn step(&mut self, handle: FrameHandle, now: Duration) -> Option<Step> {
        let job = self.job.as_mut()?;
        if job.frame != Some(handle) {
            tracing::trace!(frame = handle.0, "Ignoring stale animation frame");
            return None;
        }
        job.frame = None;

        let (value, finished) = job.sample(now);
        if finished {
            tracing::debug!(job = job.id, value, "Animation complete");
            self.job = None;
        }
        Some(Step { value, finished })
    }

    /// Request the frame for the next step of the live job.
    pub fn schedule_next(&mut self, host: &mut impl HostSurface) {
        if let Some(job) = self.job.as_mut() {
            if job.frame.is_none() {
                job.frame = Some(host.request_animation_frame());
            }
        }
    }

    /// Cancel the live job and its pending frame. Returns true if one existed.
    pub fn cancel(&mut self, host: &mut impl HostSurface) -> bool {
        match self.job.take() {
            Some(job) => {
                if let Some(frame) = job.frame {
                    host.cancel_animation_frame(frame);
                }
                tracing::trace!(job = job.id, "Animation cancelled");
                true
            }
            None => false,
        }
    }

    pub fn is_running(&self) -> bool {
        self.job.is_some()
    }

    pub fn job(&self) -> Option<&AnimationJob> {
        self.job.as_ref()
    }

    /// Target of the live job, if any
    pub fn target(&self) -> Option<f32> {
        self.job.as_ref().map(|j| j.target_percentage)
    }

    /// Frame the live job is waiting on, if any
    pub fn pending_frame(&self) -> Option<FrameHandle> {
        self.job.as_ref().and_then(|j| j.frame)
    }

    /// Total number of jobs started over the instance's life
    pub fn started_count(&self) -> u64 {
        self.started
    }
}

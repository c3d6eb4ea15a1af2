//! Frame timing utilities.
//!
//! Tracks the interval between animation frames actually delivered by the
//! host, so dropped frames during a jump animation show up in the logs.
//!
//! Use the profiling macro for zero-cost instrumentation of hot paths:
//! ```ignore
//! fn handle_event(&mut self) {
//!     profile_scope!("handle_event");
//!     // ...
//! }
//! ```
//! It only records anything with the `profiling` feature enabled.

use std::collections::VecDeque;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// Target frame time for 60 FPS
pub const TARGET_FRAME_MS: f64 = 16.67;

/// Number of intervals kept for the rolling average
const SAMPLE_COUNT: usize = 60;

/// Warn when an interval exceeds the target by this factor
const WARN_THRESHOLD: f64 = 2.0;

/// Profile a scope with the given name. Zero-cost when profiling is disabled.
#[macro_export]
macro_rules! profile_scope {
    ($name:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::new($name, $crate::perf::TARGET_FRAME_MS);
        #[cfg(not(feature = "profiling"))]
        let _ = $name;
    };
}

pub use crate::profile_scope;

/// Rolling statistics over host frame intervals for one instance.
#[derive(Debug, Clone, Default)]
pub struct FrameStats {
    intervals: VecDeque<f64>,
    last_frame: Option<Duration>,
    slow_frames: u64,
    total_frames: u64,
}

impl FrameStats {
    pub fn new() -> Self {
        Self {
            intervals: VecDeque::with_capacity(SAMPLE_COUNT),
            ..Self::default()
        }
    }

    /// Record a frame delivered at host time `now`.
    /// Returns the interval since the previous frame in milliseconds.
    pub fn record(&mut self, now: Duration) -> Option<f64> {
        self.total_frames += 1;
        let previous = self.last_frame.replace(now)?;
        let ms = now.saturating_sub(previous).as_secs_f64() * 1000.0;

        if self.intervals.len() >= SAMPLE_COUNT {
            self.intervals.pop_front();
        }
        self.intervals.push_back(ms);

        if ms > TARGET_FRAME_MS * WARN_THRESHOLD {
            self.slow_frames += 1;
            warn!(
                frame_interval_ms = format!("{:.2}", ms),
                target_ms = format!("{:.2}", TARGET_FRAME_MS),
                "Slow animation frame"
            );
        }
        Some(ms)
    }

    /// Forget the previous frame so the gap between two animations is not
    /// counted as a slow frame.
    pub fn break_sequence(&mut self) {
        self.last_frame = None;
    }

    pub fn average_interval(&self) -> f64 {
        if self.intervals.is_empty() {
            return 0.0;
        }
        self.intervals.iter().sum::<f64>() / self.intervals.len() as f64
    }

    pub fn max_interval(&self) -> f64 {
        self.intervals.iter().copied().fold(0.0, f64::max)
    }

    pub fn slow_frames(&self) -> u64 {
        self.slow_frames
    }

    pub fn total_frames(&self) -> u64 {
        self.total_frames
    }
}

/// RAII timer that logs scopes exceeding a threshold.
pub struct ScopedTimer {
    name: &'static str,
    start: Instant,
    threshold_ms: f64,
}

impl ScopedTimer {
    pub fn new(name: &'static str, threshold_ms: f64) -> Self {
        Self {
            name,
            start: Instant::now(),
            threshold_ms,
        }
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        let ms = self.elapsed_ms();
        if ms > self.threshold_ms {
            warn!(
                operation = self.name,
                elapsed_ms = format!("{:.2}", ms),
                "Slow operation"
            );
        } else {
            debug!(operation = self.name, elapsed_ms = format!("{:.3}", ms));
        }
    }
}

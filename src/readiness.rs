//! Readiness gate - defers interactivity until both images have decoded.
//!
//! ## State Transitions
//!
//! ```text
//! Pending -> Ready     (both images decoded with a nonzero natural size)
//! Pending -> Failed    (either image failed, or decoded to zero size)
//! ```
//!
//! Both outcomes are terminal; reports arriving afterwards are ignored.

use crate::error::SliderError;
use crate::geometry::Size;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which half of the pair an image is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageRole {
    Before,
    After,
}

impl fmt::Display for ImageRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Before => f.write_str("before"),
            Self::After => f.write_str("after"),
        }
    }
}

/// The two image URIs of one slider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImagePair {
    pub before: String,
    pub after: String,
}

impl ImagePair {
    pub fn new(before: impl Into<String>, after: impl Into<String>) -> Self {
        Self {
            before: before.into(),
            after: after.into(),
        }
    }

    pub fn uri(&self, role: ImageRole) -> &str {
        match role {
            ImageRole::Before => &self.before,
            ImageRole::After => &self.after,
        }
    }
}

/// What the host reports once an image settles
#[derive(Debug, Clone, PartialEq)]
pub enum ImageLoad {
    Decoded { natural_width: f32, natural_height: f32 },
    Failed { reason: String },
}

/// Terminal-once readiness of a pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GateState {
    #[default]
    Pending,
    Ready,
    Failed,
}

/// Outcome reported when the gate settles
#[derive(Debug)]
pub enum GateOutcome {
    Ready { natural_size: Size },
    Failed(SliderError),
}

#[derive(Debug, Default)]
pub struct ReadinessGate {
    before: Option<Size>,
    after: Option<Size>,
    state: GateState,
    error: Option<String>,
}

impl ReadinessGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> GateState {
        self.state
    }

    pub fn is_ready(&self) -> bool {
        self.state == GateState::Ready
    }

    pub fn is_failed(&self) -> bool {
        self.state == GateState::Failed
    }

    pub fn is_settled(&self) -> bool {
        self.state != GateState::Pending
    }

    pub fn before_loaded(&self) -> bool {
        self.before.is_some()
    }

    pub fn after_loaded(&self) -> bool {
        self.after.is_some()
    }

    /// Error message of a failed pair
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Natural size used for layout; both images share their framing,
    /// so the "before" image is authoritative.
    pub fn natural_size(&self) -> Option<Size> {
        self.before.or(self.after)
    }

    /// Record a load report. Returns the outcome if this report settled the gate.
    pub fn report(&mut self, role: ImageRole, load: ImageLoad) -> Option<GateOutcome> {
        if self.is_settled() {
            tracing::trace!(%role, "Ignoring image report for settled gate");
            return None;
        }

        match load {
            ImageLoad::Decoded {
                natural_width,
                natural_height,
            } if natural_width > 0.0 && natural_height > 0.0 => {
                let size = Size::new(natural_width, natural_height);
                match role {
                    ImageRole::Before => self.before = Some(size),
                    ImageRole::After => self.after = Some(size),
                }
                tracing::debug!(%role, natural_width, natural_height, "Image decoded");

                if let (Some(before), Some(_)) = (self.before, self.after) {
                    self.state = GateState::Ready;
                    return Some(GateOutcome::Ready {
                        natural_size: before,
                    });
                }
                None
            }
            ImageLoad::Decoded { .. } => self.fail(role, "decoded with zero natural size".into()),
            ImageLoad::Failed { reason } => self.fail(role, reason),
        }
    }

    fn fail(&mut self, role: ImageRole, reason: String) -> Option<GateOutcome> {
        self.state = GateState::Failed;
        let err = SliderError::ImageLoad { role, reason };
        self.error = Some(err.to_string());
        Some(GateOutcome::Failed(err))
    }
}

/// Aggregate view over many gates, for an external loading overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ReadinessSummary {
    pub total: usize,
    pub ready: usize,
    pub failed: usize,
    pub pending: usize,
}

impl ReadinessSummary {
    pub fn collect<'a>(gates: impl IntoIterator<Item = &'a ReadinessGate>) -> Self {
        let mut summary = Self::default();
        for gate in gates {
            summary.total += 1;
            match gate.state() {
                GateState::Ready => summary.ready += 1,
                GateState::Failed => summary.failed += 1,
                GateState::Pending => summary.pending += 1,
            }
        }
        summary
    }

    /// Every gate resolved, successfully or not
    pub fn all_settled(&self) -> bool {
        self.pending == 0
    }

    /// Every gate resolved successfully
    pub fn all_ready(&self) -> bool {
        self.ready == self.total
    }
}

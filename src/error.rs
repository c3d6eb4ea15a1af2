//! Error types for the slider core and its companion tooling.
//!
//! Failures never escape an instance's event surface: image and geometry
//! errors are recorded on the owning instance and logged. The variants
//! below are what the fallible constructors and I/O helpers return.

use crate::readiness::ImageRole;
use thiserror::Error;

/// Errors that can occur in the slider core, config and manifest handling
#[derive(Error, Debug)]
pub enum SliderError {
    /// One image of a pair failed to decode
    #[error("{role} image failed to load: {reason}")]
    ImageLoad { role: ImageRole, reason: String },

    /// Container or image reported a zero (or non-finite) dimension
    #[error("Invalid geometry: {width}x{height}")]
    InvalidGeometry { width: f32, height: f32 },

    /// IO error from std::io
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error from serde_json
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Manifest content that cannot be turned into image pairs
    #[error("Invalid manifest: {0}")]
    InvalidManifest(String),
}

/// Result type alias for slider operations
pub type SliderResult<T> = Result<T, SliderError>;

impl SliderError {
    /// Returns true for errors the widget recovers from on its own
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::InvalidGeometry { .. })
    }
}

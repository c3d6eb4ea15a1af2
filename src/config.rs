//! Slider configuration.
//!
//! The behavioural differences between slider variants (tap-to-jump,
//! instant vs eased jumps, handle-only dragging, hover hints) are options
//! on one engine rather than separate engines. Configuration is plain JSON
//! with every field optional.

use crate::constants::{
    DEFAULT_ANIMATION_MS, DEFAULT_HANDLE_WIDTH, DEFAULT_PERCENTAGE, DEFAULT_RESIZE_DEBOUNCE_MS,
    MAX_ANIMATION_MS, MAX_RESIZE_DEBOUNCE_MS, MIN_ANIMATION_MS, MIN_RESIZE_DEBOUNCE_MS,
    TAP_MAX_DISTANCE, TAP_MAX_DURATION_MS,
};
use crate::error::SliderResult;
use crate::geometry::clamp_percentage;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Where a press may start a drag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DragRegion {
    /// Anywhere on the slider body
    #[default]
    Anywhere,
    /// Only inside the divider hit zone
    Handle,
}

/// How a tap or click moves the divider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JumpMode {
    #[default]
    Animated,
    Instant,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SliderConfig {
    pub initial_percentage: f32,
    pub drag_region: DragRegion,
    pub tap_to_jump: bool,
    pub jump_mode: JumpMode,
    pub hover_cursor: bool,
    pub animation_ms: u64,
    pub resize_debounce_ms: u64,
    pub handle_width: f32,
    pub tap_max_distance: f32,
    pub tap_max_duration_ms: u64,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            initial_percentage: DEFAULT_PERCENTAGE,
            drag_region: DragRegion::default(),
            tap_to_jump: true,
            jump_mode: JumpMode::default(),
            hover_cursor: true,
            animation_ms: DEFAULT_ANIMATION_MS,
            resize_debounce_ms: DEFAULT_RESIZE_DEBOUNCE_MS,
            handle_width: DEFAULT_HANDLE_WIDTH,
            tap_max_distance: TAP_MAX_DISTANCE,
            tap_max_duration_ms: TAP_MAX_DURATION_MS,
        }
    }
}

impl SliderConfig {
    /// Parse a JSON document. Missing fields take their defaults.
    pub fn from_json(json: &str) -> SliderResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        Ok(config.normalized())
    }

    /// Load from a JSON file.
    pub fn load_from(path: &Path) -> SliderResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Load from the default location, falling back to defaults on any error.
    pub fn load() -> Self {
        let Some(path) = default_config_path() else {
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from(&path) {
            Ok(config) => config,
            Err(e) => {
                tracing::error!("Failed to load config from {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Clamp every field into its supported range.
    pub fn normalized(mut self) -> Self {
        let initial = if self.initial_percentage.is_nan() {
            DEFAULT_PERCENTAGE
        } else {
            clamp_percentage(self.initial_percentage)
        };
        if initial != self.initial_percentage {
            tracing::warn!(value = self.initial_percentage, "initial_percentage out of range, clamped");
            self.initial_percentage = initial;
        }

        let animation_ms = self.animation_ms.clamp(MIN_ANIMATION_MS, MAX_ANIMATION_MS);
        if animation_ms != self.animation_ms {
            tracing::warn!(value = self.animation_ms, "animation_ms out of range, clamped");
            self.animation_ms = animation_ms;
        }

        let debounce_ms = self
            .resize_debounce_ms
            .clamp(MIN_RESIZE_DEBOUNCE_MS, MAX_RESIZE_DEBOUNCE_MS);
        if debounce_ms != self.resize_debounce_ms {
            tracing::warn!(value = self.resize_debounce_ms, "resize_debounce_ms out of range, clamped");
            self.resize_debounce_ms = debounce_ms;
        }

        if !(self.handle_width.is_finite() && self.handle_width >= 0.0) {
            self.handle_width = DEFAULT_HANDLE_WIDTH;
        }
        if !(self.tap_max_distance.is_finite() && self.tap_max_distance >= 0.0) {
            self.tap_max_distance = TAP_MAX_DISTANCE;
        }
        self
    }

    pub fn animation_duration(&self) -> Duration {
        Duration::from_millis(self.animation_ms)
    }

    pub fn resize_debounce(&self) -> Duration {
        Duration::from_millis(self.resize_debounce_ms)
    }

    pub fn tap_max_duration(&self) -> Duration {
        Duration::from_millis(self.tap_max_duration_ms)
    }
}

/// `<config dir>/imgslider/config.json`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("imgslider").join("config.json"))
}

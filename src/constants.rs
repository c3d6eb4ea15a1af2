//! Slider-wide constants.
//!
//! Centralizes thresholds and timing values so the input, animation and
//! layout code share one source of truth.

use std::time::Duration;

// ============================================================================
// Position
// ============================================================================

/// Lowest reveal percentage (fully "before" image)
pub const MIN_PERCENTAGE: f32 = 0.0;

/// Highest reveal percentage (fully "after" image)
pub const MAX_PERCENTAGE: f32 = 100.0;

/// Divider position on mount
pub const DEFAULT_PERCENTAGE: f32 = 50.0;

// ============================================================================
// Animation & Timing
// ============================================================================

/// Default duration of a tap/click jump in milliseconds
pub const DEFAULT_ANIMATION_MS: u64 = 200;

/// Shortest allowed jump animation
pub const MIN_ANIMATION_MS: u64 = 150;

/// Longest allowed jump animation
pub const MAX_ANIMATION_MS: u64 = 300;

/// Trailing-edge delay for coalescing resize/orientation bursts
pub const DEFAULT_RESIZE_DEBOUNCE_MS: u64 = 150;

/// Shortest allowed resize debounce
pub const MIN_RESIZE_DEBOUNCE_MS: u64 = 100;

/// Longest allowed resize debounce
pub const MAX_RESIZE_DEBOUNCE_MS: u64 = 250;

// ============================================================================
// Input Handling
// ============================================================================

/// Maximum displacement in pixels for a touch gesture to count as a tap
pub const TAP_MAX_DISTANCE: f32 = 10.0;

/// Maximum duration in milliseconds for a touch gesture to count as a tap
pub const TAP_MAX_DURATION_MS: u64 = 200;

/// Mouse presses this soon after a touch gesture are browser emulation
pub const TOUCH_MOUSE_EMULATION_WINDOW: Duration = Duration::from_millis(500);

/// Width of the visible handle knob in pixels
pub const DEFAULT_HANDLE_WIDTH: f32 = 40.0;

/// Hit zone padding on each side of the handle, as a fraction of slider width
pub const HANDLE_HIT_ZONE_FRACTION: f32 = 0.10;

// ============================================================================
// Asset Manifest
// ============================================================================

/// Image extensions picked up when scanning an asset directory
pub const SUPPORTED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif"];

/// File stem suffix marking the "before" image of a pair
pub const BEFORE_SUFFIX: &str = "_a";

/// File stem suffix marking the "after" image of a pair
pub const AFTER_SUFFIX: &str = "_b";

/// Manifest file written next to the scanned images
pub const MANIFEST_FILE_NAME: &str = "image_list.json";

/// Path prefix prepended to every image in the manifest
pub const DEFAULT_ASSET_PREFIX: &str = "imgSlider";

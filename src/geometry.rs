//! Geometry resolver - pure functions over container bounds.
//!
//! Maps pointer coordinates to a reveal percentage, sizes the image pair to
//! its container, and computes the divider hit zone used for hover hints
//! and handle-only dragging. Nothing here touches instance state.

use crate::constants::{HANDLE_HIT_ZONE_FRACTION, MAX_PERCENTAGE, MIN_PERCENTAGE};
use crate::error::{SliderError, SliderResult};
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in client (viewport) pixels
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    /// True when both dimensions are positive and finite
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    #[inline]
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.left && x <= self.right() && y >= self.top && y <= self.bottom()
    }

    /// Grow the rect horizontally by `amount` on each side
    pub fn expand_x(&self, amount: f32) -> Self {
        Self {
            left: self.left - amount,
            width: self.width + amount * 2.0,
            ..*self
        }
    }
}

/// Width/height pair in pixels
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Which axis is fitted first when sizing the images
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    Landscape,
    Portrait,
}

impl Orientation {
    /// Landscape when the container is at least as wide as it is tall
    pub fn of(rect: &Rect) -> Self {
        if rect.width >= rect.height {
            Self::Landscape
        } else {
            Self::Portrait
        }
    }
}

/// Clamp a percentage into the valid reveal range.
#[inline]
pub fn clamp_percentage(p: f32) -> f32 {
    p.clamp(MIN_PERCENTAGE, MAX_PERCENTAGE)
}

/// Convert a client x coordinate into a reveal percentage of `rect`.
///
/// Monotonic non-decreasing in `client_x`. A rect without a usable width
/// maps everything to 0.
pub fn percentage_from_x(client_x: f32, rect: &Rect) -> f32 {
    if !(rect.width.is_finite() && rect.width > 0.0) {
        return MIN_PERCENTAGE;
    }
    let raw = ((client_x - rect.left) / rect.width) * 100.0;
    if raw.is_nan() {
        return MIN_PERCENTAGE;
    }
    clamp_percentage(raw)
}

/// Client x coordinate of the divider at `percentage`.
#[inline]
pub fn x_from_percentage(percentage: f32, rect: &Rect) -> f32 {
    rect.left + rect.width * clamp_percentage(percentage) / 100.0
}

/// Size the image pair inside `container`, preserving the natural aspect ratio.
///
/// Landscape fits the height first and shrinks to the width if it overflows;
/// portrait fits the width first and shrinks to the height if it overflows.
pub fn fit_dimensions(
    container: &Rect,
    natural_width: f32,
    natural_height: f32,
    orientation: Orientation,
) -> SliderResult<Size> {
    if !container.is_valid() {
        return Err(SliderError::InvalidGeometry {
            width: container.width,
            height: container.height,
        });
    }
    let natural_ok = |v: f32| v.is_finite() && v > 0.0;
    if !natural_ok(natural_width) || !natural_ok(natural_height) {
        return Err(SliderError::InvalidGeometry {
            width: natural_width,
            height: natural_height,
        });
    }

    let aspect = natural_width / natural_height;

    let size = match orientation {
        Orientation::Landscape => {
            let height = container.height;
            let width = height * aspect;
            if width > container.width {
                Size::new(container.width, container.width / aspect)
            } else {
                Size::new(width, height)
            }
        }
        Orientation::Portrait => {
            let width = container.width;
            let height = width / aspect;
            if height > container.height {
                Size::new(container.height * aspect, container.height)
            } else {
                Size::new(width, height)
            }
        }
    };

    Ok(size)
}

/// Hit zone around the divider: the handle rect centred on the divider,
/// expanded by a fraction of the slider width on each side, full height.
pub fn divider_hit_zone(rect: &Rect, percentage: f32, handle_width: f32) -> Rect {
    let center = x_from_percentage(percentage, rect);
    let handle_width = handle_width.max(0.0);
    let handle = Rect::new(center - handle_width / 2.0, rect.top, handle_width, rect.height);
    handle.expand_x(rect.width * HANDLE_HIT_ZONE_FRACTION)
}

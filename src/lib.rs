//! Before/after image comparison slider core.
//!
//! Two images of identical framing are stacked and a draggable divider
//! reveals one beneath the other. This crate holds the parts with real
//! state: input handling, eased animation, geometry and readiness gating.
//! Rendering, decoding and event delivery belong to the host, reached
//! through [`host::HostSurface`].
//!
//! ```ignore
//! let mut slider = SliderInstance::create(host, ImagePair::new(before, after), SliderConfig::load());
//! slider.on_image_load(ImageRole::Before, ImageLoad::Decoded { natural_width: 1600.0, natural_height: 900.0 });
//! slider.on_image_load(ImageRole::After, ImageLoad::Decoded { natural_width: 1600.0, natural_height: 900.0 });
//! let disposition = slider.handle_event(&event, now);
//! ```

pub mod animation;
pub mod config;
pub mod constants;
pub mod debounce;
pub mod error;
pub mod geometry;
pub mod host;
pub mod input;
pub mod manifest;
pub mod perf;
pub mod position;
pub mod readiness;
pub mod slider;
pub mod subscriptions;

pub use config::{DragRegion, JumpMode, SliderConfig};
pub use error::{SliderError, SliderResult};
pub use geometry::{Orientation, Rect, Size};
pub use host::{HostSurface, VisualSink};
pub use input::{Disposition, HostEvent, Phase, PointerKind, TouchPoint};
pub use position::Projection;
pub use readiness::{ImageLoad, ImagePair, ImageRole, ReadinessSummary};
pub use slider::{SliderInstance, SliderStatus};

/// Aggregate readiness over many instances, for a page-level loading overlay.
pub fn summarize<'a, H, I>(instances: I) -> ReadinessSummary
where
    H: HostSurface + 'a,
    I: IntoIterator<Item = &'a SliderInstance<H>>,
{
    ReadinessSummary::collect(instances.into_iter().map(|s| s.readiness()))
}

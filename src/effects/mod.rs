//! Visual feedback effects
//!
//! The effect presenter mounts centered, pointer-transparent overlays on an
//! [`OverlaySurface`]: the image matching the last played sound when there is
//! one, a random image of the category otherwise, and a ✓/✗ glyph when the
//! category has no images. Every overlay removes itself after its lifetime.

pub mod effect_image;
pub mod overlay;
pub mod presenter;

pub use effect_image::EffectImage;
pub use overlay::{LogSurface, MemorySurface, Overlay, OverlayContent, OverlayId, OverlaySurface};
pub use presenter::EffectPresenter;

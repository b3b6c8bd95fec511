/// Overlays and the surfaces that display them
///
/// An overlay is centered on screen, above everything else, and lets pointer
/// events through. Surfaces only mount and remove; lifetimes are handled by the
/// presenter.
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;

use super::effect_image::EffectImage;
use crate::category::Category;
use crate::error::OverlayError;

/// Glyph font size in pixels
pub const GLYPH_FONT_SIZE: u32 = 80;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OverlayId(pub u64);

impl fmt::Display for OverlayId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "overlay#{}", self.0)
    }
}

#[derive(Debug, Clone)]
pub enum OverlayContent {
    /// A loaded image, drawn at `display_width x display_height`
    Image {
        name: String,
        image: Arc<EffectImage>,
        display_width: u32,
        display_height: u32,
    },

    /// The fallback ✓ / ✗
    Glyph {
        symbol: char,
        color: &'static str,
        font_size: u32,
    },
}

#[derive(Debug, Clone)]
pub struct Overlay {
    pub id: OverlayId,
    pub category: Category,
    pub content: OverlayContent,
    pub lifetime: Duration,
}

impl Overlay {
    /// Image name, or `None` for a glyph
    pub fn image_name(&self) -> Option<&str> {
        match &self.content {
            OverlayContent::Image { name, .. } => Some(name.as_str()),
            OverlayContent::Glyph { .. } => None,
        }
    }

    pub fn is_glyph(&self) -> bool {
        matches!(self.content, OverlayContent::Glyph { .. })
    }

    pub fn description(&self) -> String {
        match &self.content {
            OverlayContent::Image {
                name,
                display_width,
                display_height,
                ..
            } => format!(
                "{} {}/{} ({}x{})",
                self.id, self.category, name, display_width, display_height
            ),
            OverlayContent::Glyph { symbol, color, .. } => {
                format!("{} {} {} {}", self.id, self.category, symbol, color)
            }
        }
    }
}

/// Where overlays are displayed
pub trait OverlaySurface: Send + Sync {
    fn mount(&self, overlay: &Overlay) -> Result<(), OverlayError>;

    /// Remove an overlay. Removing an unknown id does nothing.
    fn remove(&self, id: OverlayId);
}

/// Keeps mounted overlays in memory, for hosts that draw them each frame
#[derive(Default)]
pub struct MemorySurface {
    active: Mutex<Vec<Overlay>>,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently mounted overlays, oldest first
    pub fn active(&self) -> Vec<Overlay> {
        self.active.lock().clone()
    }

    pub fn active_count(&self) -> usize {
        self.active.lock().len()
    }
}

impl OverlaySurface for MemorySurface {
    fn mount(&self, overlay: &Overlay) -> Result<(), OverlayError> {
        self.active.lock().push(overlay.clone());
        Ok(())
    }

    fn remove(&self, id: OverlayId) {
        self.active.lock().retain(|o| o.id != id);
    }
}

/// Only logs overlays; used by the command-line host
#[derive(Debug, Default)]
pub struct LogSurface;

impl OverlaySurface for LogSurface {
    fn mount(&self, overlay: &Overlay) -> Result<(), OverlayError> {
        tracing::info!("Showing effect: {}", overlay.description());
        Ok(())
    }

    fn remove(&self, id: OverlayId) {
        tracing::debug!("Removed {}", id);
    }
}

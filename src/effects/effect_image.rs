/// Effect images
///
/// Raster formats decode through `image`; SVG is rasterized at its intrinsic
/// size with resvg.
use std::path::Path;

use image::{Rgba, RgbaImage};
use resvg::{tiny_skia, usvg};

use crate::error::AssetError;

/// A decoded overlay image
#[derive(Debug, Clone)]
pub struct EffectImage {
    pub pixels: RgbaImage,
}

impl EffectImage {
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// Display size inside a `max x max` box, aspect ratio preserved, never upscaled
    pub fn fit_within(&self, max: u32) -> (u32, u32) {
        let (w, h) = (self.width(), self.height());
        if w <= max && h <= max {
            return (w, h);
        }

        let scale = (max as f64 / w as f64).min(max as f64 / h as f64);
        let scaled = |v: u32| ((v as f64 * scale).round() as u32).clamp(1, max);
        (scaled(w), scaled(h))
    }

    /// Decode png/jpg/jpeg/gif/svg bytes; `location` picks SVG by extension
    pub fn decode(location: &str, bytes: &[u8]) -> Result<Self, AssetError> {
        let is_svg = Path::new(location)
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("svg"))
            .unwrap_or(false);

        let decode_failed = |source: Box<dyn std::error::Error + Send + Sync>| {
            AssetError::DecodeFailed {
                location: location.to_string(),
                source,
            }
        };

        if is_svg {
            return rasterize_svg(bytes).map_err(decode_failed);
        }

        let pixels = image::load_from_memory(bytes)
            .map_err(|e| decode_failed(Box::new(e)))?
            .to_rgba8();
        Ok(Self { pixels })
    }
}

fn rasterize_svg(data: &[u8]) -> Result<EffectImage, Box<dyn std::error::Error + Send + Sync>> {
    let tree = usvg::Tree::from_data(data, &usvg::Options::default())
        .map_err(|e| format!("usvg parse error: {e:?}"))?;

    let size = tree.size().to_int_size();
    let mut pixmap =
        tiny_skia::Pixmap::new(size.width(), size.height()).ok_or("Failed to create Pixmap")?;

    // Render at original size
    resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());

    let mut pixels = RgbaImage::new(size.width(), size.height());
    for (dst, src) in pixels.pixels_mut().zip(pixmap.pixels()) {
        let color = src.demultiply();
        *dst = Rgba([color.red(), color.green(), color.blue(), color.alpha()]);
    }

    Ok(EffectImage { pixels })
}

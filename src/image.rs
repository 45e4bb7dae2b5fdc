use egui::{ColorImage, TextureHandle, Vec2};
use glam::DVec2;

use crate::error::ViewerResult;
use crate::geometry::to_physical;

/// A decoded image ready to be uploaded as a texture
pub struct LoadedImage {
    name: String,
    pixels: ColorImage,
}

impl LoadedImage {
    /// Decode any format the `image` crate recognises
    pub fn decode(name: impl Into<String>, bytes: &[u8]) -> ViewerResult<Self> {
        let decoded = image::load_from_memory(bytes)?;
        let rgba = decoded.to_rgba8();
        let size = [rgba.width() as usize, rgba.height() as usize];
        log::debug!("Decoded image: {}x{}", size[0], size[1]);
        Ok(Self {
            name: name.into(),
            pixels: ColorImage::from_rgba_unmultiplied(size, rgba.as_raw()),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Width and height in image pixels
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.pixels.size[0] as f32, self.pixels.size[1] as f32)
    }

    /// Upload to the GPU, displayed at `rescale_factor` device pixels per image pixel
    pub fn into_background(self, ctx: &egui::Context, rescale_factor: DVec2) -> Background {
        let size = self.size();
        let display_size = Vec2::new(
            (f64::from(size.x) * rescale_factor.x) as f32,
            (f64::from(size.y) * rescale_factor.y) as f32,
        );
        let texture = ctx.load_texture(&self.name, self.pixels, egui::TextureOptions::LINEAR);
        Background {
            name: self.name,
            texture,
            display_size,
            rescale_factor,
        }
    }
}

/// The image annotations are drawn over
pub struct Background {
    pub name: String,
    pub texture: TextureHandle,
    /// Size on screen in device pixels
    pub display_size: Vec2,
    /// Device pixels per image pixel
    pub rescale_factor: DVec2,
}

/// Uniform scale that makes `image_size` fit inside `available`.
///
/// Falls back to 1:1 when either size is empty or unbounded.
pub fn fit_rescale(image_size: Vec2, available: Vec2) -> DVec2 {
    let usable = |v: Vec2| v.x > 0.0 && v.y > 0.0 && v.is_finite();
    if !usable(image_size) || !usable(available) {
        return DVec2::ONE;
    }
    let ratio = to_physical(available) / to_physical(image_size);
    DVec2::splat(ratio.min_element())
}

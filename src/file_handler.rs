use eframe::egui;

use crate::error::{ViewerError, ViewerResult};
use crate::image::LoadedImage;

/// Picks up image files dropped onto the window
#[derive(Default)]
pub struct FileHandler {
    dropped_files: Vec<egui::DroppedFile>,
}

impl FileHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check for newly dropped files.
    /// Returns true if any were dropped this frame.
    pub fn check_for_dropped_files(&mut self, ctx: &egui::Context) -> bool {
        ctx.input(|i| {
            if i.raw.dropped_files.is_empty() {
                false
            } else {
                self.dropped_files = i.raw.dropped_files.clone();
                true
            }
        })
    }

    /// Decode the last dropped image file.
    ///
    /// Only one image is shown at a time, so earlier files in the same drop are skipped.
    pub fn take_image(&mut self) -> Option<ViewerResult<LoadedImage>> {
        let files = std::mem::take(&mut self.dropped_files);
        let file = files.iter().rev().find(|file| {
            let supported = is_image_file(file);
            if !supported {
                log::warn!("Dropped file is not a supported type: {}", file_name(file));
            }
            supported
        })?;
        Some(load_image(file))
    }

    /// Overlay shown while files are dragged over the window
    pub fn preview_files_being_dropped(&self, ctx: &egui::Context) {
        use egui::{Align2, Color32, Id, LayerId, Order};

        if ctx.input(|i| i.raw.hovered_files.is_empty()) {
            return;
        }

        let text = ctx.input(|i| {
            let mut text = "Open image:\n".to_owned();
            for file in &i.raw.hovered_files {
                if let Some(path) = &file.path {
                    text += &format!("\n{}", path.display());
                } else {
                    text += "\n(Path not available)";
                }
            }
            text
        });

        let painter =
            ctx.layer_painter(LayerId::new(Order::Foreground, Id::new("file_drop_target")));
        let screen_rect = ctx.screen_rect();
        painter.rect_filled(screen_rect, 0.0, Color32::from_black_alpha(192));
        painter.text(
            screen_rect.center(),
            Align2::CENTER_CENTER,
            text,
            egui::TextStyle::Heading.resolve(&ctx.style()),
            Color32::WHITE,
        );
    }
}

fn file_name(file: &egui::DroppedFile) -> String {
    if let Some(path) = &file.path {
        path.display().to_string()
    } else if !file.name.is_empty() {
        file.name.clone()
    } else {
        "unknown".to_owned()
    }
}

/// Check if a file is an image based on MIME type or extension
fn is_image_file(file: &egui::DroppedFile) -> bool {
    if !file.mime.is_empty() {
        file.mime.starts_with("image/")
    } else if let Some(ext) = file.path.as_ref().and_then(|path| path.extension()) {
        let ext = ext.to_string_lossy().to_lowercase();
        matches!(
            ext.as_str(),
            "png" | "jpg" | "jpeg" | "gif" | "webp" | "bmp" | "tif" | "tiff"
        )
    } else {
        false
    }
}

fn load_image(file: &egui::DroppedFile) -> ViewerResult<LoadedImage> {
    let name = file_name(file);
    if let Some(bytes) = &file.bytes {
        log::info!("Loading image from memory: {} ({} bytes)", name, bytes.len());
        LoadedImage::decode(name, bytes)
    } else if let Some(path) = &file.path {
        log::info!("Loading image from path: {}", path.display());
        let bytes = std::fs::read(path)?;
        LoadedImage::decode(name, &bytes)
    } else {
        Err(ViewerError::EmptyFile(name))
    }
}

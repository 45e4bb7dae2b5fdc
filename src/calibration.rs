use egui::Vec2;
use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::error::{ViewerError, ViewerResult};
use crate::geometry::to_physical;

/// Physical calibration of the displayed image.
///
/// Axis 0 (`x`) is horizontal, axis 1 (`y`) is vertical. Factors are kept in
/// `f64` so measurements of large regions still resolve to hundredths.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Calibration {
    /// Physical units (millimetres) per source-image pixel
    pub pixel_spacing: DVec2,
    /// Device pixels per source-image pixel
    pub rescale_factor: DVec2,
}

impl Default for Calibration {
    fn default() -> Self {
        Self {
            pixel_spacing: DVec2::ONE,
            rescale_factor: DVec2::ONE,
        }
    }
}

impl Calibration {
    /// Create a calibration, rejecting zero, negative and non-finite factors.
    pub fn new(pixel_spacing: DVec2, rescale_factor: DVec2) -> ViewerResult<Self> {
        check("pixel spacing", pixel_spacing)?;
        check("rescale factor", rescale_factor)?;
        Ok(Self {
            pixel_spacing,
            rescale_factor,
        })
    }

    /// Map a device-pixel delta to physical units.
    pub fn scale(&self, delta: Vec2) -> DVec2 {
        to_physical(delta) * self.pixel_spacing / self.rescale_factor
    }
}

fn check(field: &'static str, factor: DVec2) -> ViewerResult<()> {
    for (axis, value) in [("horizontal", factor.x), ("vertical", factor.y)] {
        if !value.is_finite() || value <= 0.0 {
            return Err(ViewerError::InvalidCalibration { field, axis, value });
        }
    }
    Ok(())
}

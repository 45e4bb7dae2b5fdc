use egui::Color32;
use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::calibration::Calibration;
use crate::drawer::Drawer;
use crate::error::ViewerResult;
use crate::tools::ToolMode;

/// User preferences restored on startup.
///
/// Annotations themselves are never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
pub struct ViewerSettings {
    /// Colour of new annotations
    pub color: Color32,
    /// Label finished shapes with their measurement
    pub measure: bool,
    /// Tool selected when the viewer starts
    pub tool: ToolMode,
    /// Millimetres per image pixel, used until an image says otherwise
    pub pixel_spacing: DVec2,
}

impl Default for ViewerSettings {
    fn default() -> Self {
        Self {
            color: Color32::RED,
            measure: true,
            tool: ToolMode::default(),
            pixel_spacing: DVec2::ONE,
        }
    }
}

impl ViewerSettings {
    /// Calibration for an image displayed at `rescale_factor` device pixels per image pixel
    pub fn calibration(&self, rescale_factor: DVec2) -> ViewerResult<Calibration> {
        Calibration::new(self.pixel_spacing, rescale_factor)
    }

    /// A drawer configured from these settings
    pub fn drawer(&self, calibration: Calibration) -> Drawer {
        Drawer::new(self.tool, self.color, calibration, self.measure)
    }
}

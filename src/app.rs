use egui::{Color32, Painter, Rect, Vec2};
use glam::DVec2;

use crate::calibration::Calibration;
use crate::canvas::{Canvas, ShapeStore};
use crate::command::CommandExecutor;
use crate::drawer::Drawer;
use crate::file_handler::FileHandler;
use crate::image::{Background, LoadedImage, fit_rescale};
use crate::input::PointerEvent;
use crate::panels::{central_panel, tools_panel};
use crate::renderer::Renderer;
use crate::settings::ViewerSettings;
use crate::tools::ToolMode;

/// Image viewer with measurement annotations.
///
/// Only [`ViewerSettings`] survive a restart; annotations belong to the
/// image they were drawn on.
#[derive(Default)]
pub struct ViewerApp {
    settings: ViewerSettings,
    canvas: ShapeStore,
    executor: CommandExecutor,
    drawer: Drawer,
    renderer: Renderer,
    background: Option<Background>,
    file_handler: FileHandler,
    load_error: Option<String>,
}

impl ViewerApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let settings: ViewerSettings = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY))
            .unwrap_or_default();
        Self::with_settings(settings)
    }

    pub fn with_settings(settings: ViewerSettings) -> Self {
        let calibration = settings.calibration(DVec2::ONE).unwrap_or_else(|err| {
            log::warn!("Ignoring stored pixel spacing: {}", err);
            Calibration::default()
        });
        let drawer = settings.drawer(calibration);
        Self {
            settings,
            drawer,
            ..Default::default()
        }
    }

    pub fn settings(&self) -> &ViewerSettings {
        &self.settings
    }

    pub fn canvas(&self) -> &ShapeStore {
        &self.canvas
    }

    pub fn executor(&self) -> &CommandExecutor {
        &self.executor
    }

    pub fn drawer(&self) -> &Drawer {
        &self.drawer
    }

    pub fn background(&self) -> Option<&Background> {
        self.background.as_ref()
    }

    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    pub fn set_tool(&mut self, mode: ToolMode) {
        self.drawer.set_mode(&mut self.canvas, mode);
        self.settings.tool = mode;
    }

    pub fn set_color(&mut self, color: Color32) {
        self.drawer.set_color(color);
        self.settings.color = color;
    }

    pub fn set_measure(&mut self, measure: bool) {
        self.drawer.set_measure(measure);
        self.settings.measure = measure;
    }

    /// Returns false and keeps the old spacing if `spacing` is not positive.
    pub fn set_pixel_spacing(&mut self, spacing: DVec2) -> bool {
        match Calibration::new(spacing, self.rescale_factor()) {
            Ok(calibration) => {
                self.settings.pixel_spacing = spacing;
                self.drawer.set_calibration(calibration);
                true
            }
            Err(err) => {
                log::warn!("Rejected pixel spacing: {}", err);
                false
            }
        }
    }

    fn rescale_factor(&self) -> DVec2 {
        self.background
            .as_ref()
            .map_or(DVec2::ONE, |background| background.rescale_factor)
    }

    pub fn undo(&mut self) -> bool {
        self.drawer.reset(&mut self.canvas);
        self.executor.undo(&mut self.canvas)
    }

    pub fn redo(&mut self) -> bool {
        self.drawer.reset(&mut self.canvas);
        self.executor.redo(&mut self.canvas)
    }

    /// Remove every annotation and forget the history
    pub fn clear_annotations(&mut self) {
        self.drawer.reset(&mut self.canvas);
        self.executor.undo_all(&mut self.canvas);
        self.executor.clear();
        log::info!("Annotations cleared");
    }

    /// Feed canvas pointer events to the active tool
    pub fn handle_pointer(&mut self, events: &[PointerEvent]) {
        for event in events {
            self.drawer.handle(event, &mut self.canvas, &mut self.executor);
        }
    }

    pub fn set_canvas_size(&mut self, size: Vec2) {
        self.canvas.set_bounds(Rect::from_min_size(egui::Pos2::ZERO, size));
    }

    pub fn paint(&self, painter: &Painter, rect: Rect) {
        self.renderer.render(painter, rect, &self.canvas, self.background.as_ref());
    }

    /// Replace the background, dropping the annotations of the previous image
    pub fn show_image(&mut self, ctx: &egui::Context, image: LoadedImage) {
        self.clear_annotations();

        let rescale_factor = fit_rescale(image.size(), self.canvas.bounds().size());
        log::info!(
            "Showing {} ({}x{}) at scale {:.3}",
            image.name(),
            image.size().x,
            image.size().y,
            rescale_factor.x
        );
        self.background = Some(image.into_background(ctx, rescale_factor));
        self.load_error = None;

        let spacing = self.settings.pixel_spacing;
        if !self.set_pixel_spacing(spacing) {
            self.drawer.set_calibration(Calibration::default());
        }
    }

    fn handle_dropped_files(&mut self, ctx: &egui::Context) {
        if !self.file_handler.check_for_dropped_files(ctx) {
            return;
        }
        match self.file_handler.take_image() {
            Some(Ok(image)) => self.show_image(ctx, image),
            Some(Err(err)) => {
                log::error!("Failed to open image: {}", err);
                self.load_error = Some(err.to_string());
            }
            None => {}
        }
    }

    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        let redo = egui::KeyboardShortcut::new(
            egui::Modifiers::COMMAND | egui::Modifiers::SHIFT,
            egui::Key::Z,
        );
        let undo = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Z);

        // The more specific shortcut must be consumed first
        if ctx.input_mut(|i| i.consume_shortcut(&redo)) {
            self.redo();
        } else if ctx.input_mut(|i| i.consume_shortcut(&undo)) {
            self.undo();
        }
    }
}

impl eframe::App for ViewerApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, &self.settings);
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_dropped_files(ctx);
        self.handle_shortcuts(ctx);

        tools_panel(self, ctx);
        central_panel(self, ctx);

        self.file_handler.preview_files_being_dropped(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    fn drag(app: &mut ViewerApp, from: egui::Pos2, to: egui::Pos2) {
        app.handle_pointer(&[
            PointerEvent::press(from),
            PointerEvent::moved(to),
            PointerEvent::release(to),
        ]);
    }

    #[test]
    fn test_settings_drive_the_drawer() {
        let settings = ViewerSettings {
            tool: ToolMode::Line,
            color: Color32::GREEN,
            ..Default::default()
        };
        let app = ViewerApp::with_settings(settings);
        assert_eq!(app.drawer().mode(), ToolMode::Line);
        assert_eq!(app.drawer().color(), Color32::GREEN);
    }

    #[test]
    fn test_bad_stored_spacing_falls_back_to_default() {
        let settings = ViewerSettings {
            pixel_spacing: DVec2::new(0.0, 1.0),
            ..Default::default()
        };
        let app = ViewerApp::with_settings(settings);
        assert_eq!(*app.drawer().calibration(), Calibration::default());
    }

    #[test]
    fn test_rejected_spacing_keeps_previous() {
        let mut app = ViewerApp::default();
        assert!(app.set_pixel_spacing(DVec2::splat(0.5)));
        assert!(!app.set_pixel_spacing(DVec2::new(-1.0, 0.5)));
        assert_eq!(app.settings().pixel_spacing, DVec2::splat(0.5));
        assert_eq!(app.drawer().calibration().pixel_spacing, DVec2::splat(0.5));
    }

    #[test]
    fn test_undo_redo_and_clear() {
        let mut app = ViewerApp::with_settings(ViewerSettings {
            tool: ToolMode::Rectangle,
            measure: false,
            ..Default::default()
        });
        drag(&mut app, pos2(0.0, 0.0), pos2(10.0, 10.0));
        drag(&mut app, pos2(20.0, 20.0), pos2(30.0, 40.0));
        assert_eq!(app.canvas().len(), 2);

        assert!(app.undo());
        assert_eq!(app.canvas().len(), 1);
        assert!(app.redo());
        assert_eq!(app.canvas().len(), 2);

        app.clear_annotations();
        assert!(app.canvas().is_empty());
        assert!(!app.executor().can_undo());
        assert!(!app.executor().can_redo());
    }

    #[test]
    fn test_tool_change_is_remembered() {
        let mut app = ViewerApp::default();
        app.set_tool(ToolMode::Ellipse);
        assert_eq!(app.settings().tool, ToolMode::Ellipse);
        assert_eq!(app.drawer().mode(), ToolMode::Ellipse);
    }
}

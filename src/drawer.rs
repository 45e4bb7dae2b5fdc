use egui::Color32;

use crate::calibration::Calibration;
use crate::canvas::Canvas;
use crate::command::{CommandExecutor, CommandStatus};
use crate::input::PointerEvent;
use crate::tools::{ShapeBuilder, ToolMode};

/// Routes pointer input into the shape builder of the active tool and
/// commits or discards the result.
///
/// At most one builder is in flight. Finished shapes go to the
/// [`CommandExecutor`]; failed or abandoned ones are removed from the canvas.
#[derive(Debug)]
pub struct Drawer {
    mode: ToolMode,
    color: Color32,
    calibration: Calibration,
    measure: bool,
    active: Option<ShapeBuilder>,
}

impl Default for Drawer {
    fn default() -> Self {
        Self::new(ToolMode::default(), Color32::RED, Calibration::default(), false)
    }
}

impl Drawer {
    pub fn new(mode: ToolMode, color: Color32, calibration: Calibration, measure: bool) -> Self {
        Self {
            mode,
            color,
            calibration,
            measure,
            active: None,
        }
    }

    pub fn mode(&self) -> ToolMode {
        self.mode
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn calibration(&self) -> &Calibration {
        &self.calibration
    }

    pub fn measure(&self) -> bool {
        self.measure
    }

    /// The shape currently being drawn, if any
    pub fn active(&self) -> Option<&ShapeBuilder> {
        self.active.as_ref()
    }

    pub fn is_drawing(&self) -> bool {
        self.active.is_some()
    }

    /// Applies to shapes started after the call
    pub fn set_color(&mut self, color: Color32) {
        self.color = color;
    }

    /// Applies to shapes started after the call
    pub fn set_measure(&mut self, measure: bool) {
        self.measure = measure;
    }

    /// Applies to shapes started after the call
    pub fn set_calibration(&mut self, calibration: Calibration) {
        self.calibration = calibration;
    }

    /// Switch tool, abandoning any shape in progress
    pub fn set_mode(&mut self, canvas: &mut dyn Canvas, mode: ToolMode) {
        if mode != self.mode {
            log::info!("Tool changed: {} -> {}", self.mode.name(), mode.name());
            self.reset(canvas);
            self.mode = mode;
        }
    }

    /// Abandon the shape in progress and remove what it has drawn
    pub fn reset(&mut self, canvas: &mut dyn Canvas) {
        if let Some(mut builder) = self.active.take() {
            log::debug!("Abandoning unfinished {}", builder.mode().name());
            builder.undo(canvas);
        }
    }

    /// Feed an event to the builder of the current tool mode
    pub fn handle(
        &mut self,
        event: &PointerEvent,
        canvas: &mut dyn Canvas,
        executor: &mut CommandExecutor,
    ) -> Option<CommandStatus> {
        match self.mode {
            ToolMode::Curve => self.draw_curve(event, canvas, executor),
            ToolMode::Angle => self.draw_angle(event, canvas, executor),
            ToolMode::Rectangle => self.draw_rectangle(event, canvas, executor),
            ToolMode::Ellipse => self.draw_ellipse(event, canvas, executor),
            ToolMode::Line => self.draw_line(event, canvas, executor),
        }
    }

    /// Freehand curve: press starts, moves extend, release finishes
    pub fn draw_curve(
        &mut self,
        event: &PointerEvent,
        canvas: &mut dyn Canvas,
        executor: &mut CommandExecutor,
    ) -> Option<CommandStatus> {
        self.drive(ToolMode::Curve, event, event.is_release(), canvas, executor)
    }

    /// Angle: three clicks, the second one is the vertex
    pub fn draw_angle(
        &mut self,
        event: &PointerEvent,
        canvas: &mut dyn Canvas,
        executor: &mut CommandExecutor,
    ) -> Option<CommandStatus> {
        self.drive(ToolMode::Angle, event, event.is_press(), canvas, executor)
    }

    /// Rectangle: drag from one corner to the opposite one
    pub fn draw_rectangle(
        &mut self,
        event: &PointerEvent,
        canvas: &mut dyn Canvas,
        executor: &mut CommandExecutor,
    ) -> Option<CommandStatus> {
        self.drive(ToolMode::Rectangle, event, event.is_release(), canvas, executor)
    }

    /// Ellipse: drag across its bounding box
    pub fn draw_ellipse(
        &mut self,
        event: &PointerEvent,
        canvas: &mut dyn Canvas,
        executor: &mut CommandExecutor,
    ) -> Option<CommandStatus> {
        self.drive(ToolMode::Ellipse, event, event.is_release(), canvas, executor)
    }

    /// Distance line: drag from start to end
    pub fn draw_line(
        &mut self,
        event: &PointerEvent,
        canvas: &mut dyn Canvas,
        executor: &mut CommandExecutor,
    ) -> Option<CommandStatus> {
        self.drive(ToolMode::Line, event, event.is_release(), canvas, executor)
    }

    /// Returns the builder status, or `None` if the event was ignored.
    fn drive(
        &mut self,
        mode: ToolMode,
        event: &PointerEvent,
        is_final: bool,
        canvas: &mut dyn Canvas,
        executor: &mut CommandExecutor,
    ) -> Option<CommandStatus> {
        if self.active.as_ref().is_some_and(|builder| builder.mode() != mode) {
            self.reset(canvas);
        }

        let status = if let Some(builder) = self.active.as_mut() {
            builder.add_point(canvas, event.pos, is_final)
        } else if event.is_press() {
            let mut builder = ShapeBuilder::new(mode, self.color, self.calibration, self.measure);
            let status = match mode {
                ToolMode::Curve => builder.add_point(canvas, event.pos, false),
                _ => {
                    // Confirmed first point plus a preview that follows the pointer
                    builder.add_point(canvas, event.pos, true);
                    builder.add_point(canvas, event.pos, false)
                }
            };
            log::debug!("Started {}", mode.name());
            self.active = Some(builder);
            status
        } else {
            return None;
        };

        match status {
            CommandStatus::Success => {
                if let Some(builder) = self.active.take() {
                    match builder.measurement() {
                        Some(measurement) => log::info!(
                            "{} committed: {}",
                            mode.name(),
                            measurement.to_string().replace('\n', ", ")
                        ),
                        None => log::info!("{} committed", mode.name()),
                    }
                    executor.add(builder.into_command());
                }
            }
            CommandStatus::Fail => {
                log::debug!("Discarding degenerate {}", mode.name());
                self.reset(canvas);
            }
            CommandStatus::InProgress => {}
        }
        Some(status)
    }
}

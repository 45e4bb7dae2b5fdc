use egui::{Color32, Pos2, Rect, Vec2};
use glam::DVec2;

use super::Measurement;
use crate::calibration::Calibration;
use crate::canvas::Canvas;
use crate::command::{Command, CompositeCommand};

/// State shared by all shape builders: the composite being built, the
/// points fed so far and the calibration used for measurements.
///
/// The last point may be a preview that the next call replaces. Only
/// `confirmed` points are final.
#[derive(Debug)]
pub struct ShapeCommand {
    composite: CompositeCommand,
    points: Vec<Pos2>,
    confirmed: usize,
    /// Whether the preview point drew the most recent child
    preview_drawn: bool,
    color: Color32,
    calibration: Calibration,
    measure: bool,
}

impl ShapeCommand {
    pub fn new(
        name: &'static str,
        color: Color32,
        calibration: Calibration,
        measure: bool,
    ) -> Self {
        Self {
            composite: CompositeCommand::new(name),
            points: Vec::new(),
            confirmed: 0,
            preview_drawn: false,
            color,
            calibration,
            measure,
        }
    }

    pub fn points(&self) -> &[Pos2] {
        &self.points
    }

    pub fn confirmed(&self) -> usize {
        self.confirmed
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn calibration(&self) -> &Calibration {
        &self.calibration
    }

    pub fn composite(&self) -> &CompositeCommand {
        &self.composite
    }

    /// Calibrated vector from `from` to `to`
    pub fn scaled(&self, from: Pos2, to: Pos2) -> DVec2 {
        self.calibration.scale(to - from)
    }

    /// Replace any preview point with `point` and return the new point count.
    ///
    /// The child drawn for the replaced preview is undone and dropped.
    pub(crate) fn place_point(
        &mut self,
        canvas: &mut dyn Canvas,
        point: Pos2,
        is_final: bool,
    ) -> usize {
        if self.points.len() > self.confirmed {
            self.points.pop();
            if self.preview_drawn {
                if let Some(mut preview) = self.composite.pop_command() {
                    preview.undo(canvas);
                }
            }
        }
        self.preview_drawn = false;

        self.points.push(point);
        if is_final {
            self.confirmed += 1;
        }
        self.points.len()
    }

    /// Append a point that is never replaced, as freehand curves do
    pub(crate) fn push_confirmed(&mut self, point: Pos2) -> usize {
        self.points.push(point);
        self.confirmed = self.points.len();
        self.points.len()
    }

    /// Draw a child for the segment completed by the last point
    pub(crate) fn draw(&mut self, canvas: &mut dyn Canvas, command: Command) {
        self.composite.add_command(canvas, command, true);
        self.preview_drawn = self.points.len() > self.confirmed;
    }

    /// Add the measurement label, if measuring is enabled
    pub(crate) fn label(&mut self, canvas: &mut dyn Canvas, pos: Pos2, measurement: &Measurement) {
        if self.measure {
            let text = measurement.to_string();
            log::debug!("{} measured: {}", self.composite.name(), text.replace('\n', ", "));
            self.composite
                .add_command(canvas, Command::text(pos, text, self.color), true);
        }
    }

    pub fn undo(&mut self, canvas: &mut dyn Canvas) {
        self.composite.undo(canvas);
    }

    pub fn into_command(self) -> Command {
        Command::Composite(self.composite)
    }
}

/// Label position for rectangles and ellipses: under the lower right corner
/// of the bounding box, kept inside the canvas.
pub(crate) fn box_label_position(corner: Pos2, opposite: Pos2, bounds: Rect) -> Pos2 {
    let rect = Rect::from_two_pos(corner, opposite);
    let pos = rect.right_bottom() + Vec2::new(0.0, 20.0);
    if bounds.is_positive() {
        bounds.clamp(pos)
    } else {
        pos
    }
}

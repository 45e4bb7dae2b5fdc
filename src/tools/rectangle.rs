use egui::{Color32, Pos2};

use super::shape::box_label_position;
use super::{Measurement, ShapeCommand};
use crate::calibration::Calibration;
use crate::canvas::Canvas;
use crate::command::{Command, CommandStatus};

/// Builds an axis-aligned rectangle from two opposite corners.
#[derive(Debug)]
pub struct RectangleBuilder {
    shape: ShapeCommand,
}

impl RectangleBuilder {
    pub const POINTS: usize = 2;

    pub fn new(color: Color32, calibration: Calibration, measure: bool) -> Self {
        Self {
            shape: ShapeCommand::new("Rectangle", color, calibration, measure),
        }
    }

    pub fn shape(&self) -> &ShapeCommand {
        &self.shape
    }

    pub fn add_point(
        &mut self,
        canvas: &mut dyn Canvas,
        point: Pos2,
        is_final: bool,
    ) -> CommandStatus {
        if self.shape.confirmed() >= Self::POINTS {
            log::debug!("Rectangle already complete, ignoring point");
            return self.status();
        }

        if self.shape.place_point(canvas, point, is_final) == Self::POINTS {
            let points = self.shape.points();
            let rectangle = Command::rectangle(points[0], points[1], self.shape.color());
            self.shape.draw(canvas, rectangle);
        }

        let status = self.status();
        if status == CommandStatus::Success {
            if let Some(measurement) = self.measurement() {
                let points = self.shape.points();
                let pos = box_label_position(points[0], points[1], canvas.bounds());
                self.shape.label(canvas, pos, &measurement);
            }
        }
        status
    }

    pub fn status(&self) -> CommandStatus {
        if self.shape.confirmed() < Self::POINTS {
            return CommandStatus::InProgress;
        }
        box_status(self.shape.points())
    }

    /// Calibrated area and perimeter
    pub fn measurement(&self) -> Option<Measurement> {
        let (width, height) = box_extent(&self.shape)?;
        Some(Measurement::region(width * height, 2.0 * (width + height)))
    }

    pub fn undo(&mut self, canvas: &mut dyn Canvas) {
        self.shape.undo(canvas);
    }

    pub fn into_command(self) -> Command {
        self.shape.into_command()
    }
}

/// A box is valid when it has extent along both axes
pub(crate) fn box_status(points: &[Pos2]) -> CommandStatus {
    match points {
        [corner, opposite, ..] if corner.x != opposite.x && corner.y != opposite.y => {
            CommandStatus::Success
        }
        _ => CommandStatus::Fail,
    }
}

/// Calibrated width and height of the box spanned by the first two points
pub(crate) fn box_extent(shape: &ShapeCommand) -> Option<(f64, f64)> {
    match shape.points() {
        [corner, opposite, ..] => {
            let size = shape.scaled(*corner, *opposite);
            Some((size.x.abs(), size.y.abs()))
        }
        _ => None,
    }
}

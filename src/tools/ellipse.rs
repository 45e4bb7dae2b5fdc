use std::f64::consts::PI;

use egui::{Color32, Pos2};

use super::rectangle::{box_extent, box_status};
use super::shape::box_label_position;
use super::{Measurement, ShapeCommand};
use crate::calibration::Calibration;
use crate::canvas::Canvas;
use crate::command::{Command, CommandStatus};

/// Builds an ellipse inscribed in the box spanned by two points.
#[derive(Debug)]
pub struct EllipseBuilder {
    shape: ShapeCommand,
}

impl EllipseBuilder {
    pub const POINTS: usize = 2;

    pub fn new(color: Color32, calibration: Calibration, measure: bool) -> Self {
        Self {
            shape: ShapeCommand::new("Ellipse", color, calibration, measure),
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
            log::debug!("Ellipse already complete, ignoring point");
            return self.status();
        }

        if self.shape.place_point(canvas, point, is_final) == Self::POINTS {
            let points = self.shape.points();
            let oval = Command::oval(points[0], points[1], self.shape.color());
            self.shape.draw(canvas, oval);
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

    /// Calibrated area and perimeter (Ramanujan's approximation)
    pub fn measurement(&self) -> Option<Measurement> {
        let (width, height) = box_extent(&self.shape)?;
        let (a, b) = (width / 2.0, height / 2.0);
        Some(Measurement::region(PI * a * b, ellipse_perimeter(a, b)))
    }

    pub fn undo(&mut self, canvas: &mut dyn Canvas) {
        self.shape.undo(canvas);
    }

    pub fn into_command(self) -> Command {
        self.shape.into_command()
    }
}

/// Ramanujan's second approximation of the perimeter for semi-axes `a` and `b`
pub fn ellipse_perimeter(a: f64, b: f64) -> f64 {
    if a + b <= 0.0 {
        return 0.0;
    }
    let h = ((a - b) / (a + b)).powi(2);
    PI * (a + b) * (1.0 + 3.0 * h / (10.0 + (4.0 - 3.0 * h).sqrt()))
}

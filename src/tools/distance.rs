use egui::{Color32, Pos2, Vec2};

use super::{Measurement, ShapeCommand};
use crate::calibration::Calibration;
use crate::canvas::Canvas;
use crate::command::{Command, CommandStatus};
use crate::geometry::{points_to_vector, vector_length};

/// Shortest distance in device pixels that counts as a line rather than a click
pub const MIN_LENGTH: f32 = 1.0;

/// Builds a two point distance line with an optional length label.
#[derive(Debug)]
pub struct DistanceBuilder {
    shape: ShapeCommand,
}

impl DistanceBuilder {
    pub const POINTS: usize = 2;

    pub fn new(color: Color32, calibration: Calibration, measure: bool) -> Self {
        Self {
            shape: ShapeCommand::new("Distance", color, calibration, measure),
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
            log::debug!("Distance already complete, ignoring point");
            return self.status();
        }

        if self.shape.place_point(canvas, point, is_final) == Self::POINTS {
            let points = self.shape.points();
            let line = Command::line(points[0], points[1], self.shape.color());
            self.shape.draw(canvas, line);
        }

        let status = self.status();
        if status == CommandStatus::Success {
            if let (Some(measurement), Some(pos)) = (self.measurement(), self.label_position()) {
                self.shape.label(canvas, pos, &measurement);
            }
        }
        status
    }

    pub fn status(&self) -> CommandStatus {
        if self.shape.confirmed() < Self::POINTS {
            return CommandStatus::InProgress;
        }
        let points = self.shape.points();
        if vector_length(points_to_vector(points[1], points[0])) > MIN_LENGTH {
            CommandStatus::Success
        } else {
            CommandStatus::Fail
        }
    }

    /// Calibrated length, available once both points exist
    pub fn measurement(&self) -> Option<Measurement> {
        match self.shape.points() {
            [start, end, ..] => Some(Measurement::length(self.shape.scaled(*start, *end).length())),
            _ => None,
        }
    }

    /// The label sits next to the rightmost end, shifted so it does not
    /// cover the line.
    fn label_position(&self) -> Option<Pos2> {
        let [a, b] = match self.shape.points() {
            [a, b, ..] => [*a, *b],
            _ => return None,
        };
        let (left, right) = if a.x <= b.x { (a, b) } else { (b, a) };
        let dx = right.x - left.x;
        let dy = right.y - left.y;

        let offset = if dx == 0.0 || dy / dx < -0.5 {
            Vec2::new(45.0, 10.0)
        } else if dy / dx > 0.0 {
            Vec2::new(0.0, 10.0)
        } else {
            Vec2::new(0.0, -10.0)
        };
        Some(right + offset)
    }

    pub fn undo(&mut self, canvas: &mut dyn Canvas) {
        self.shape.undo(canvas);
    }

    pub fn into_command(self) -> Command {
        self.shape.into_command()
    }
}

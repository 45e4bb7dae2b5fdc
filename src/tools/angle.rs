use egui::{Color32, Pos2, Vec2};

use super::{Measurement, ShapeCommand};
use crate::calibration::Calibration;
use crate::canvas::Canvas;
use crate::command::{Command, CommandStatus};
use crate::geometry::{
    normalize_vector, points_to_vector, radians_to_degrees, sum_vectors, vectors_angle,
    vectors_differ,
};

/// Distance of the label from the vertex, along the bisector
const LABEL_DISTANCE: f32 = 10.0;

/// Builds an angle from three points; the second point is the vertex.
#[derive(Debug)]
pub struct AngleBuilder {
    shape: ShapeCommand,
}

impl AngleBuilder {
    pub const POINTS: usize = 3;

    pub fn new(color: Color32, calibration: Calibration, measure: bool) -> Self {
        Self {
            shape: ShapeCommand::new("Angle", color, calibration, measure),
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
            log::debug!("Angle already complete, ignoring point");
            return self.status();
        }

        let count = self.shape.place_point(canvas, point, is_final);
        if count >= 2 {
            // Leg ending at the newest point: p1-p2 or p2-p3
            let points = self.shape.points();
            let leg = Command::line(points[count - 2], points[count - 1], self.shape.color());
            self.shape.draw(canvas, leg);
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
        match self.shape.points() {
            [p1, vertex, p3, ..]
                if vectors_differ(*p1, *vertex) && vectors_differ(*vertex, *p3) =>
            {
                CommandStatus::Success
            }
            _ => CommandStatus::Fail,
        }
    }

    /// Calibrated angle at the vertex in degrees, once all three points exist
    pub fn measurement(&self) -> Option<Measurement> {
        let [p1, vertex, p3] = self.legs()?;
        let v1 = self.shape.scaled(vertex, p1);
        let v2 = self.shape.scaled(vertex, p3);
        vectors_angle(v1, v2).map(|radians| Measurement::angle(radians_to_degrees(radians)))
    }

    /// Along the bisector of the legs. Anti-parallel legs have no bisector,
    /// the diagonal is used then.
    fn label_position(&self) -> Option<Pos2> {
        let [p1, vertex, p3] = self.legs()?;
        let u1 = normalize_vector(points_to_vector(p1, vertex))?;
        let u2 = normalize_vector(points_to_vector(p3, vertex))?;
        let direction = normalize_vector(sum_vectors(u1, u2))
            .unwrap_or(Vec2::splat(std::f32::consts::FRAC_1_SQRT_2));
        Some(vertex + direction * LABEL_DISTANCE)
    }

    fn legs(&self) -> Option<[Pos2; 3]> {
        match self.shape.points() {
            [p1, vertex, p3, ..] => Some([*p1, *vertex, *p3]),
            _ => None,
        }
    }

    pub fn undo(&mut self, canvas: &mut dyn Canvas) {
        self.shape.undo(canvas);
    }

    pub fn into_command(self) -> Command {
        self.shape.into_command()
    }
}

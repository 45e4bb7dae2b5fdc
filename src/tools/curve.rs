use egui::{Color32, Pos2};

use super::ShapeCommand;
use crate::calibration::Calibration;
use crate::canvas::Canvas;
use crate::command::{Command, CommandStatus};
use crate::geometry::vectors_differ;

/// Freehand curve: every new point is joined to the previous one.
///
/// There is no preview point and no validity check; the curve is complete
/// as soon as a final point arrives.
#[derive(Debug)]
pub struct CurveBuilder {
    shape: ShapeCommand,
}

impl CurveBuilder {
    pub fn new(color: Color32) -> Self {
        Self {
            shape: ShapeCommand::new("Curve", color, Calibration::default(), false),
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
        // Repeated positions would only add invisible zero-length segments
        let previous = self.shape.points().last().copied();
        if previous.is_none_or(|previous| vectors_differ(previous, point)) {
            self.shape.push_confirmed(point);
            if let Some(previous) = previous {
                let segment = Command::line(previous, point, self.shape.color());
                self.shape.draw(canvas, segment);
            }
        }

        if is_final {
            CommandStatus::Success
        } else {
            CommandStatus::InProgress
        }
    }

    pub fn undo(&mut self, canvas: &mut dyn Canvas) {
        self.shape.undo(canvas);
    }

    pub fn into_command(self) -> Command {
        self.shape.into_command()
    }
}

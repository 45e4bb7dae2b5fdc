use egui::{Color32, Pos2};
use serde::{Deserialize, Serialize};

use crate::calibration::Calibration;
use crate::canvas::Canvas;
use crate::command::{Command, CommandStatus};

// Shape builders
mod angle;
mod curve;
mod distance;
mod ellipse;
mod measurement;
mod rectangle;
mod shape;

pub use angle::AngleBuilder;
pub use curve::CurveBuilder;
pub use distance::{DistanceBuilder, MIN_LENGTH};
pub use ellipse::{EllipseBuilder, ellipse_perimeter};
pub use measurement::{LENGTH_UNIT, Measurement};
pub use rectangle::RectangleBuilder;
pub use shape::ShapeCommand;

/// Annotation tool selected in the tools panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ToolMode {
    #[default]
    Curve,
    Angle,
    Rectangle,
    Ellipse,
    Line,
}

impl ToolMode {
    pub const ALL: [ToolMode; 5] = [
        ToolMode::Curve,
        ToolMode::Angle,
        ToolMode::Rectangle,
        ToolMode::Ellipse,
        ToolMode::Line,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Curve => "Curve",
            Self::Angle => "Angle",
            Self::Rectangle => "Rectangle",
            Self::Ellipse => "Ellipse",
            Self::Line => "Line",
        }
    }
}

/// The shape under construction, one variant per tool
#[derive(Debug)]
pub enum ShapeBuilder {
    Curve(CurveBuilder),
    Angle(AngleBuilder),
    Rectangle(RectangleBuilder),
    Ellipse(EllipseBuilder),
    Line(DistanceBuilder),
}

impl ShapeBuilder {
    pub fn new(mode: ToolMode, color: Color32, calibration: Calibration, measure: bool) -> Self {
        match mode {
            ToolMode::Curve => Self::Curve(CurveBuilder::new(color)),
            ToolMode::Angle => Self::Angle(AngleBuilder::new(color, calibration, measure)),
            ToolMode::Rectangle => {
                Self::Rectangle(RectangleBuilder::new(color, calibration, measure))
            }
            ToolMode::Ellipse => Self::Ellipse(EllipseBuilder::new(color, calibration, measure)),
            ToolMode::Line => Self::Line(DistanceBuilder::new(color, calibration, measure)),
        }
    }

    pub fn mode(&self) -> ToolMode {
        match self {
            Self::Curve(_) => ToolMode::Curve,
            Self::Angle(_) => ToolMode::Angle,
            Self::Rectangle(_) => ToolMode::Rectangle,
            Self::Ellipse(_) => ToolMode::Ellipse,
            Self::Line(_) => ToolMode::Line,
        }
    }

    pub fn shape(&self) -> &ShapeCommand {
        match self {
            Self::Curve(builder) => builder.shape(),
            Self::Angle(builder) => builder.shape(),
            Self::Rectangle(builder) => builder.shape(),
            Self::Ellipse(builder) => builder.shape(),
            Self::Line(builder) => builder.shape(),
        }
    }

    pub fn add_point(
        &mut self,
        canvas: &mut dyn Canvas,
        point: Pos2,
        is_final: bool,
    ) -> CommandStatus {
        match self {
            Self::Curve(builder) => builder.add_point(canvas, point, is_final),
            Self::Angle(builder) => builder.add_point(canvas, point, is_final),
            Self::Rectangle(builder) => builder.add_point(canvas, point, is_final),
            Self::Ellipse(builder) => builder.add_point(canvas, point, is_final),
            Self::Line(builder) => builder.add_point(canvas, point, is_final),
        }
    }

    /// Measurement of the current geometry; curves have none
    pub fn measurement(&self) -> Option<Measurement> {
        match self {
            Self::Curve(_) => None,
            Self::Angle(builder) => builder.measurement(),
            Self::Rectangle(builder) => builder.measurement(),
            Self::Ellipse(builder) => builder.measurement(),
            Self::Line(builder) => builder.measurement(),
        }
    }

    /// Remove everything the builder has drawn so far
    pub fn undo(&mut self, canvas: &mut dyn Canvas) {
        match self {
            Self::Curve(builder) => builder.undo(canvas),
            Self::Angle(builder) => builder.undo(canvas),
            Self::Rectangle(builder) => builder.undo(canvas),
            Self::Ellipse(builder) => builder.undo(canvas),
            Self::Line(builder) => builder.undo(canvas),
        }
    }

    pub fn into_command(self) -> Command {
        match self {
            Self::Curve(builder) => builder.into_command(),
            Self::Angle(builder) => builder.into_command(),
            Self::Rectangle(builder) => builder.into_command(),
            Self::Ellipse(builder) => builder.into_command(),
            Self::Line(builder) => builder.into_command(),
        }
    }
}

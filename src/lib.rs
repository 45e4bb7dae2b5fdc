#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod calibration;
pub mod canvas;
pub mod command;
pub mod drawer;
pub mod error;
pub mod file_handler;
pub mod geometry;
pub mod image;
pub mod input;
pub mod panels;
pub mod renderer;
pub mod settings;
pub mod tools;

pub use app::ViewerApp;
pub use calibration::Calibration;
pub use canvas::{Canvas, CanvasShape, ShapeId, ShapeStore};
pub use command::{
    Command, CommandExecutor, CommandStatus, CompositeCommand, DrawCommand, Primitive,
};
pub use drawer::Drawer;
pub use error::{ViewerError, ViewerResult};
pub use input::{PointerEvent, PointerEventKind};
pub use renderer::Renderer;
pub use settings::ViewerSettings;
pub use tools::{Measurement, ShapeBuilder, ToolMode};

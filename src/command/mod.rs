mod commands;
mod history;
mod status;

pub use commands::{Command, CompositeCommand, DrawCommand, Primitive};
pub use history::CommandExecutor;
pub use status::CommandStatus;

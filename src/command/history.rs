use super::Command;
use crate::canvas::Canvas;

/// Linear undo/redo history of committed commands.
///
/// Commands in `done` are currently drawn, commands in `undone` are not.
#[derive(Debug, Default)]
pub struct CommandExecutor {
    /// Commands that can be undone, most recent last
    done: Vec<Command>,
    /// Commands that can be redone
    undone: Vec<Command>,
}

impl CommandExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Execute a command and record it
    pub fn execute(&mut self, canvas: &mut dyn Canvas, mut command: Command) {
        command.execute(canvas);
        self.add(command);
    }

    /// Record a command that has already been executed.
    ///
    /// Any redo history is discarded.
    pub fn add(&mut self, command: Command) {
        log::debug!("Command added: {}", command.name());
        self.done.push(command);
        self.undone.clear();
    }

    /// Undo the most recent command. Returns false if there was nothing to undo.
    pub fn undo(&mut self, canvas: &mut dyn Canvas) -> bool {
        let Some(mut command) = self.done.pop() else {
            return false;
        };
        log::debug!("Undo: {}", command.name());
        command.undo(canvas);
        self.undone.push(command);
        true
    }

    /// Redo the most recently undone command. Returns false if there was nothing to redo.
    pub fn redo(&mut self, canvas: &mut dyn Canvas) -> bool {
        let Some(mut command) = self.undone.pop() else {
            return false;
        };
        log::debug!("Redo: {}", command.name());
        command.execute(canvas);
        self.done.push(command);
        true
    }

    /// Undo everything that is currently drawn
    pub fn undo_all(&mut self, canvas: &mut dyn Canvas) {
        while self.undo(canvas) {}
    }

    /// Forget the whole history without touching the canvas
    pub fn clear(&mut self) {
        self.done.clear();
        self.undone.clear();
    }

    pub fn can_undo(&self) -> bool {
        !self.done.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.undone.is_empty()
    }

    pub fn done(&self) -> &[Command] {
        &self.done
    }

    pub fn undone(&self) -> &[Command] {
        &self.undone
    }
}

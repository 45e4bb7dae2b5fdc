use egui::{Color32, Pos2};

use crate::canvas::{Canvas, ShapeId};

/// Geometry of a single drawable primitive
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Line { from: Pos2, to: Pos2 },
    Rectangle { corner: Pos2, opposite: Pos2 },
    Oval { corner: Pos2, opposite: Pos2 },
    Text { pos: Pos2, text: String },
}

impl Primitive {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Line { .. } => "Line",
            Self::Rectangle { .. } => "Rectangle",
            Self::Oval { .. } => "Oval",
            Self::Text { .. } => "Text",
        }
    }
}

/// Draws one primitive and remembers the handle so it can be removed again.
#[derive(Debug)]
pub struct DrawCommand {
    primitive: Primitive,
    color: Color32,
    id: Option<ShapeId>,
}

impl DrawCommand {
    pub fn new(primitive: Primitive, color: Color32) -> Self {
        Self {
            primitive,
            color,
            id: None,
        }
    }

    pub fn primitive(&self) -> &Primitive {
        &self.primitive
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    /// Handle of the live primitive, if currently materialised
    pub fn shape_id(&self) -> Option<ShapeId> {
        self.id
    }

    pub fn execute(&mut self, canvas: &mut dyn Canvas) {
        let color = self.color;
        let id = match &self.primitive {
            Primitive::Line { from, to } => canvas.create_line(*from, *to, color),
            Primitive::Rectangle { corner, opposite } => {
                canvas.create_rectangle(*corner, *opposite, color)
            }
            Primitive::Oval { corner, opposite } => canvas.create_oval(*corner, *opposite, color),
            Primitive::Text { pos, text } => canvas.create_text(*pos, text, color),
        };
        self.id = Some(id);
    }

    pub fn undo(&mut self, canvas: &mut dyn Canvas) {
        match self.id.take() {
            Some(id) => canvas.delete(id),
            None => log::debug!("Undo of {} that was never drawn", self.primitive.name()),
        }
    }

    /// Replace the text of a label, in place if it is on the canvas.
    ///
    /// Does nothing for non-text primitives.
    pub fn update_text(&mut self, canvas: &mut dyn Canvas, new_text: &str) {
        if let Primitive::Text { text, .. } = &mut self.primitive {
            *text = new_text.to_owned();
            if let Some(id) = self.id {
                canvas.update_text(id, new_text, self.color);
            }
        }
    }
}

/// Ordered group of commands that is done and undone as one unit.
#[derive(Debug, Default)]
pub struct CompositeCommand {
    name: &'static str,
    commands: Vec<Command>,
}

impl CompositeCommand {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            commands: Vec::new(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Append a child, drawing it right away when `run` is set.
    pub fn add_command(&mut self, canvas: &mut dyn Canvas, mut command: Command, run: bool) {
        if run {
            command.execute(canvas);
        }
        self.commands.push(command);
    }

    /// Detach the most recently added child without touching the canvas
    pub fn pop_command(&mut self) -> Option<Command> {
        self.commands.pop()
    }

    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn execute(&mut self, canvas: &mut dyn Canvas) {
        for command in &mut self.commands {
            command.execute(canvas);
        }
    }

    pub fn undo(&mut self, canvas: &mut dyn Canvas) {
        for command in self.commands.iter_mut().rev() {
            command.undo(canvas);
        }
    }
}

/// A reversible drawing action
#[derive(Debug)]
pub enum Command {
    /// Draw a single primitive
    Draw(DrawCommand),
    /// Replay a group of commands
    Composite(CompositeCommand),
}

impl Command {
    pub fn line(from: Pos2, to: Pos2, color: Color32) -> Self {
        Self::Draw(DrawCommand::new(Primitive::Line { from, to }, color))
    }

    pub fn rectangle(corner: Pos2, opposite: Pos2, color: Color32) -> Self {
        Self::Draw(DrawCommand::new(
            Primitive::Rectangle { corner, opposite },
            color,
        ))
    }

    pub fn oval(corner: Pos2, opposite: Pos2, color: Color32) -> Self {
        Self::Draw(DrawCommand::new(Primitive::Oval { corner, opposite }, color))
    }

    pub fn text(pos: Pos2, text: impl Into<String>, color: Color32) -> Self {
        Self::Draw(DrawCommand::new(
            Primitive::Text {
                pos,
                text: text.into(),
            },
            color,
        ))
    }

    /// Short human readable name, shown in the history panel
    pub fn name(&self) -> &'static str {
        match self {
            Self::Draw(draw) => draw.primitive().name(),
            Self::Composite(composite) => composite.name(),
        }
    }

    /// Number of primitives this command draws when executed
    pub fn primitive_count(&self) -> usize {
        match self {
            Self::Draw(_) => 1,
            Self::Composite(composite) => composite
                .commands()
                .iter()
                .map(Command::primitive_count)
                .sum(),
        }
    }

    pub fn execute(&mut self, canvas: &mut dyn Canvas) {
        match self {
            Self::Draw(draw) => draw.execute(canvas),
            Self::Composite(composite) => composite.execute(canvas),
        }
    }

    pub fn undo(&mut self, canvas: &mut dyn Canvas) {
        match self {
            Self::Draw(draw) => draw.undo(canvas),
            Self::Composite(composite) => composite.undo(canvas),
        }
    }
}

impl From<CompositeCommand> for Command {
    fn from(composite: CompositeCommand) -> Self {
        Self::Composite(composite)
    }
}

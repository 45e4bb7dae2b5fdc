use egui::{Pos2, Rect};

/// What the primary pointer button did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEventKind {
    Press,
    Move,
    Release,
}

/// Pointer input in canvas coordinates (relative to the canvas origin)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerEventKind,
    pub pos: Pos2,
}

impl PointerEvent {
    pub fn press(pos: Pos2) -> Self {
        Self {
            kind: PointerEventKind::Press,
            pos,
        }
    }

    pub fn moved(pos: Pos2) -> Self {
        Self {
            kind: PointerEventKind::Move,
            pos,
        }
    }

    pub fn release(pos: Pos2) -> Self {
        Self {
            kind: PointerEventKind::Release,
            pos,
        }
    }

    pub fn is_press(&self) -> bool {
        self.kind == PointerEventKind::Press
    }

    pub fn is_release(&self) -> bool {
        self.kind == PointerEventKind::Release
    }

    /// Translate a raw egui event on a canvas occupying `canvas_rect`.
    ///
    /// Presses outside the canvas are dropped so that clicks on panels never
    /// start a shape. Moves and releases are kept so a drag can end outside.
    pub fn from_egui(event: &egui::Event, canvas_rect: Rect) -> Option<Self> {
        let to_canvas = |pos: Pos2| Pos2::new(pos.x - canvas_rect.min.x, pos.y - canvas_rect.min.y);
        match event {
            egui::Event::PointerMoved(pos) => Some(Self::moved(to_canvas(*pos))),
            egui::Event::PointerButton {
                pos,
                button: egui::PointerButton::Primary,
                pressed: true,
                ..
            } if canvas_rect.contains(*pos) => Some(Self::press(to_canvas(*pos))),
            egui::Event::PointerButton {
                pos,
                button: egui::PointerButton::Primary,
                pressed: false,
                ..
            } => Some(Self::release(to_canvas(*pos))),
            _ => None,
        }
    }
}

/// Collect this frame's pointer events for the canvas, in arrival order
pub fn collect_events(ctx: &egui::Context, canvas_rect: Rect) -> Vec<PointerEvent> {
    ctx.input(|i| {
        i.events
            .iter()
            .filter_map(|event| PointerEvent::from_egui(event, canvas_rect))
            .collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{Modifiers, PointerButton, pos2, vec2};

    fn canvas() -> Rect {
        Rect::from_min_size(pos2(100.0, 50.0), vec2(200.0, 200.0))
    }

    fn button(pos: Pos2, pressed: bool) -> egui::Event {
        egui::Event::PointerButton {
            pos,
            button: PointerButton::Primary,
            pressed,
            modifiers: Modifiers::default(),
        }
    }

    #[test]
    fn test_press_inside_canvas() {
        let event = PointerEvent::from_egui(&button(pos2(110.0, 60.0), true), canvas());
        assert_eq!(event, Some(PointerEvent::press(pos2(10.0, 10.0))));
    }

    #[test]
    fn test_press_outside_canvas_is_ignored() {
        assert_eq!(PointerEvent::from_egui(&button(pos2(10.0, 10.0), true), canvas()), None);
    }

    #[test]
    fn test_release_outside_canvas_is_kept() {
        let event = PointerEvent::from_egui(&button(pos2(400.0, 60.0), false), canvas());
        assert_eq!(event, Some(PointerEvent::release(pos2(300.0, 10.0))));
    }

    #[test]
    fn test_secondary_button_is_ignored() {
        let event = egui::Event::PointerButton {
            pos: pos2(110.0, 60.0),
            button: PointerButton::Secondary,
            pressed: true,
            modifiers: Modifiers::default(),
        };
        assert_eq!(PointerEvent::from_egui(&event, canvas()), None);
    }

    #[test]
    fn test_move() {
        let moved = egui::Event::PointerMoved(pos2(150.0, 150.0));
        let event = PointerEvent::from_egui(&moved, canvas());
        assert_eq!(event, Some(PointerEvent::moved(pos2(50.0, 100.0))));
    }
}

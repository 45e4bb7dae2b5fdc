use egui::{Color32, Pos2};
use medview::calibration::Calibration;
use medview::canvas::{CanvasShape, ShapeStore};
use medview::command::{CommandExecutor, CommandStatus};
use medview::drawer::Drawer;
use medview::input::PointerEvent;
use medview::tools::ToolMode;

fn p(x: f32, y: f32) -> Pos2 {
    Pos2::new(x, y)
}

struct Session {
    canvas: ShapeStore,
    executor: CommandExecutor,
    drawer: Drawer,
}

impl Session {
    fn new(mode: ToolMode, measure: bool) -> Self {
        Self {
            canvas: ShapeStore::default(),
            executor: CommandExecutor::new(),
            drawer: Drawer::new(mode, Color32::RED, Calibration::default(), measure),
        }
    }

    fn send(&mut self, event: PointerEvent) -> Option<CommandStatus> {
        self.drawer.handle(&event, &mut self.canvas, &mut self.executor)
    }

    fn drag(&mut self, from: Pos2, to: Pos2) -> Option<CommandStatus> {
        self.send(PointerEvent::press(from));
        self.send(PointerEvent::moved(p((from.x + to.x) / 2.0, (from.y + to.y) / 2.0)));
        self.send(PointerEvent::moved(to));
        self.send(PointerEvent::release(to))
    }
}

#[test]
fn test_curve_flow() {
    let mut session = Session::new(ToolMode::Curve, true);

    assert_eq!(session.send(PointerEvent::press(p(0.0, 0.0))), Some(CommandStatus::InProgress));
    assert!(session.canvas.is_empty());
    session.send(PointerEvent::moved(p(5.0, 0.0)));
    session.send(PointerEvent::moved(p(5.0, 5.0)));
    assert_eq!(session.send(PointerEvent::release(p(10.0, 5.0))), Some(CommandStatus::Success));

    // Curves never carry a label
    assert_eq!(session.canvas.len(), 3);
    assert_eq!(session.canvas.texts().count(), 0);
    assert_eq!(session.executor.done().len(), 1);
    assert!(!session.drawer.is_drawing());
}

#[test]
fn test_line_flow_commits_with_label() {
    let mut session = Session::new(ToolMode::Line, true);

    assert_eq!(session.drag(p(0.0, 0.0), p(30.0, 40.0)), Some(CommandStatus::Success));
    assert_eq!(session.canvas.len(), 2);
    assert_eq!(session.canvas.texts().collect::<Vec<_>>(), vec!["50.00 mm"]);
    assert_eq!(session.executor.done().len(), 1);
}

#[test]
fn test_rectangle_flow_keeps_one_preview() {
    let mut session = Session::new(ToolMode::Rectangle, false);

    session.send(PointerEvent::press(p(10.0, 10.0)));
    for i in 1..10 {
        let status = session.send(PointerEvent::moved(p(10.0 + i as f32, 10.0 + i as f32)));
        assert_eq!(status, Some(CommandStatus::InProgress));
        assert_eq!(session.canvas.len(), 1);
    }
    assert_eq!(session.send(PointerEvent::release(p(30.0, 20.0))), Some(CommandStatus::Success));

    let shapes = session.canvas.snapshot();
    assert_eq!(shapes.len(), 1);
    match &shapes[0] {
        CanvasShape::Rectangle { rect, .. } => {
            assert_eq!(rect.min, p(10.0, 10.0));
            assert_eq!(rect.max, p(30.0, 20.0));
        }
        other => panic!("unexpected shape: {:?}", other),
    }
}

#[test]
fn test_line_drag_keeps_one_preview() {
    let mut session = Session::new(ToolMode::Line, true);

    session.send(PointerEvent::press(p(0.0, 0.0)));
    for i in 1..10 {
        let status = session.send(PointerEvent::moved(p(i as f32 * 4.0, i as f32)));
        assert_eq!(status, Some(CommandStatus::InProgress));
        assert_eq!(session.canvas.len(), 1);
    }
    let shapes = session.canvas.snapshot();
    assert_eq!(
        shapes[0],
        CanvasShape::Line {
            from: p(0.0, 0.0),
            to: p(36.0, 9.0),
            color: Color32::RED
        }
    );
}

#[test]
fn test_angle_second_leg_keeps_one_preview() {
    let mut session = Session::new(ToolMode::Angle, true);
    session.send(PointerEvent::press(p(10.0, 0.0)));
    session.send(PointerEvent::press(p(0.0, 0.0)));

    for i in 1..10 {
        let status = session.send(PointerEvent::moved(p(i as f32, 10.0)));
        assert_eq!(status, Some(CommandStatus::InProgress));
        let lines = session
            .canvas
            .snapshot()
            .into_iter()
            .filter(|shape| matches!(shape, CanvasShape::Line { .. }))
            .count();
        assert_eq!(lines, 2);
        assert_eq!(session.canvas.len(), 2);
    }
}

#[test]
fn test_ellipse_flow() {
    let mut session = Session::new(ToolMode::Ellipse, true);
    assert_eq!(session.drag(p(0.0, 0.0), p(20.0, 10.0)), Some(CommandStatus::Success));
    assert_eq!(session.canvas.len(), 2);
    assert_eq!(
        session.canvas.texts().collect::<Vec<_>>(),
        vec!["A: 157.08 mm²\nP: 48.44 mm"]
    );
}

#[test]
fn test_angle_takes_three_clicks() {
    let mut session = Session::new(ToolMode::Angle, true);

    assert_eq!(session.send(PointerEvent::press(p(10.0, 0.0))), Some(CommandStatus::InProgress));
    session.send(PointerEvent::moved(p(5.0, 0.0)));
    // Releases do not confirm angle points
    assert_eq!(session.send(PointerEvent::release(p(5.0, 0.0))), Some(CommandStatus::InProgress));
    assert_eq!(session.send(PointerEvent::press(p(0.0, 0.0))), Some(CommandStatus::InProgress));
    session.send(PointerEvent::moved(p(0.0, 5.0)));
    assert_eq!(session.send(PointerEvent::press(p(0.0, 10.0))), Some(CommandStatus::Success));

    assert_eq!(session.canvas.len(), 3);
    assert_eq!(session.canvas.texts().collect::<Vec<_>>(), vec!["90.00°"]);
    assert_eq!(session.executor.done().len(), 1);
}

#[test]
fn test_click_without_drag_fails_and_leaves_nothing() {
    for mode in [ToolMode::Line, ToolMode::Rectangle, ToolMode::Ellipse] {
        let mut session = Session::new(mode, true);
        session.send(PointerEvent::press(p(7.0, 7.0)));
        let status = session.send(PointerEvent::release(p(7.0, 7.0)));

        assert_eq!(status, Some(CommandStatus::Fail), "{}", mode.name());
        assert!(session.canvas.is_empty(), "{}", mode.name());
        assert!(!session.executor.can_undo());
        assert!(!session.drawer.is_drawing());
    }
}

#[test]
fn test_reset_discards_shape_in_progress() {
    let mut session = Session::new(ToolMode::Ellipse, true);
    session.send(PointerEvent::press(p(0.0, 0.0)));
    session.send(PointerEvent::moved(p(20.0, 20.0)));
    assert_eq!(session.canvas.len(), 1);

    session.drawer.reset(&mut session.canvas);
    assert!(session.canvas.is_empty());
    assert!(!session.drawer.is_drawing());

    // A release after the reset has nothing to finish
    assert_eq!(session.send(PointerEvent::release(p(20.0, 20.0))), None);
}

#[test]
fn test_color_applies_to_next_shape() {
    let mut session = Session::new(ToolMode::Line, false);
    session.drag(p(0.0, 0.0), p(10.0, 0.0));
    session.drawer.set_color(Color32::BLUE);
    session.drag(p(0.0, 10.0), p(10.0, 10.0));

    let colors: Vec<Color32> = session
        .canvas
        .snapshot()
        .into_iter()
        .map(|shape| match shape {
            CanvasShape::Line { color, .. } => color,
            other => panic!("unexpected shape: {:?}", other),
        })
        .collect();
    assert_eq!(colors, vec![Color32::RED, Color32::BLUE]);
}

#[test]
fn test_committed_shapes_undo_and_redo() {
    let mut session = Session::new(ToolMode::Line, true);
    session.drag(p(0.0, 0.0), p(10.0, 0.0));
    session.drag(p(0.0, 10.0), p(10.0, 10.0));
    let full = session.canvas.snapshot();
    assert_eq!(full.len(), 4);

    assert!(session.executor.undo(&mut session.canvas));
    assert_eq!(session.canvas.len(), 2);
    assert!(session.executor.redo(&mut session.canvas));
    assert_eq!(session.canvas.snapshot(), full);
}

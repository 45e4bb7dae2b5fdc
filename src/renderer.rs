use egui::{Align2, Color32, FontId, Painter, Pos2, Rect, Shape, Stroke, Vec2};

use crate::canvas::{CanvasShape, ShapeStore};
use crate::image::Background;

/// Segments used to approximate an oval outline
const OVAL_SEGMENTS: usize = 64;

/// Paints the background image and the primitives on a [`ShapeStore`].
#[derive(Debug, Clone)]
pub struct Renderer {
    line_width: f32,
    font: FontId,
    background_fill: Color32,
}

impl Default for Renderer {
    fn default() -> Self {
        Self {
            line_width: 3.0,
            font: FontId::proportional(14.0),
            background_fill: Color32::BLACK,
        }
    }
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn line_width(&self) -> f32 {
        self.line_width
    }

    /// Renders the current frame
    ///
    /// Args:
    ///     painter (egui::Painter): The painter to draw with
    ///     rect (egui::Rect): The canvas area; shapes are offset by its origin
    pub fn render(
        &self,
        painter: &Painter,
        rect: Rect,
        store: &ShapeStore,
        background: Option<&Background>,
    ) {
        painter.rect_filled(rect, 0.0, self.background_fill);

        if let Some(background) = background {
            let image_rect = Rect::from_min_size(rect.min, background.display_size);
            painter.image(
                background.texture.id(),
                image_rect,
                Rect::from_min_max(Pos2::ZERO, Pos2::new(1.0, 1.0)),
                Color32::WHITE,
            );
        }

        let offset = rect.min.to_vec2();
        for (_, shape) in store.shapes() {
            self.paint_shape(painter, shape, offset);
        }
    }

    fn paint_shape(&self, painter: &Painter, shape: &CanvasShape, offset: Vec2) {
        match shape {
            CanvasShape::Line { from, to, color } => {
                painter.add(Shape::line_segment(
                    [*from + offset, *to + offset],
                    Stroke::new(self.line_width, *color),
                ));
            }
            CanvasShape::Rectangle { rect, color } => {
                painter.add(Shape::rect_stroke(
                    rect.translate(offset),
                    0.0,
                    Stroke::new(self.line_width, *color),
                ));
            }
            CanvasShape::Oval { rect, color } => {
                painter.add(Shape::closed_line(
                    oval_points(rect.translate(offset)),
                    Stroke::new(self.line_width, *color),
                ));
            }
            CanvasShape::Text { pos, text, color } => {
                painter.text(*pos + offset, Align2::CENTER_CENTER, text, self.font.clone(), *color);
            }
        }
    }
}

/// Outline of the ellipse inscribed in `rect`
pub fn oval_points(rect: Rect) -> Vec<Pos2> {
    let center = rect.center();
    let radius = rect.size() / 2.0;
    (0..OVAL_SEGMENTS)
        .map(|i| {
            let t = i as f32 / OVAL_SEGMENTS as f32 * std::f32::consts::TAU;
            Pos2::new(center.x + radius.x * t.cos(), center.y + radius.y * t.sin())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::Canvas;
    use egui::{pos2, vec2};

    #[test]
    fn test_oval_points_lie_on_ellipse() {
        let rect = Rect::from_min_size(pos2(0.0, 0.0), vec2(20.0, 10.0));
        for p in oval_points(rect) {
            let x = (p.x - 10.0) / 10.0;
            let y = (p.y - 5.0) / 5.0;
            assert!((x * x + y * y - 1.0).abs() < 1e-4);
        }
    }

    // No text here: an unrun Context has no fonts
    #[test]
    fn test_render_basics() {
        let renderer = Renderer::new();
        let ctx = egui::Context::default();
        let rect = Rect::from_min_size(pos2(0.0, 0.0), vec2(100.0, 100.0));
        let painter = Painter::new(ctx.clone(), egui::LayerId::background(), rect);

        let mut store = ShapeStore::new(rect);
        store.create_line(pos2(0.0, 0.0), pos2(10.0, 10.0), Color32::RED);
        store.create_oval(pos2(0.0, 0.0), pos2(10.0, 10.0), Color32::RED);
        store.create_rectangle(pos2(0.0, 0.0), pos2(10.0, 10.0), Color32::RED);

        renderer.render(&painter, rect, &store, None);
        assert_eq!(renderer.line_width(), 3.0);
    }
}

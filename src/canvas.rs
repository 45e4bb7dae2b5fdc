use std::collections::BTreeMap;

use egui::{Color32, Pos2, Rect};

/// Handle to a primitive materialised on a [`Canvas`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ShapeId(u64);

/// Rendering surface that commands draw on.
///
/// Coordinates are in surface space (device pixels relative to the canvas
/// origin). Every `create_*` returns a fresh handle that stays valid until it
/// is passed to [`Canvas::delete`].
pub trait Canvas {
    fn create_line(&mut self, from: Pos2, to: Pos2, color: Color32) -> ShapeId;

    fn create_text(&mut self, pos: Pos2, text: &str, color: Color32) -> ShapeId;

    /// Axis-aligned rectangle spanned by two opposite corners
    fn create_rectangle(&mut self, corner: Pos2, opposite: Pos2, color: Color32) -> ShapeId;

    /// Ellipse inscribed in the box spanned by two opposite corners
    fn create_oval(&mut self, corner: Pos2, opposite: Pos2, color: Color32) -> ShapeId;

    fn update_text(&mut self, id: ShapeId, text: &str, color: Color32);

    fn delete(&mut self, id: ShapeId);

    /// Visible extent of the surface, used to keep labels on screen
    fn bounds(&self) -> Rect;
}

/// A primitive stored on a [`ShapeStore`]
#[derive(Debug, Clone, PartialEq)]
pub enum CanvasShape {
    Line { from: Pos2, to: Pos2, color: Color32 },
    Rectangle { rect: Rect, color: Color32 },
    Oval { rect: Rect, color: Color32 },
    Text { pos: Pos2, text: String, color: Color32 },
}

/// Retained-mode surface: keeps every live primitive keyed by its handle.
///
/// The app paints from it each frame; tests use it to inspect what is on screen.
/// Primitives iterate in creation order.
#[derive(Debug, Clone)]
pub struct ShapeStore {
    shapes: BTreeMap<ShapeId, CanvasShape>,
    next_id: u64,
    bounds: Rect,
}

impl Default for ShapeStore {
    fn default() -> Self {
        Self::new(Rect::EVERYTHING)
    }
}

impl ShapeStore {
    pub fn new(bounds: Rect) -> Self {
        Self {
            shapes: BTreeMap::new(),
            next_id: 1,
            bounds,
        }
    }

    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    pub fn get(&self, id: ShapeId) -> Option<&CanvasShape> {
        self.shapes.get(&id)
    }

    pub fn shapes(&self) -> impl Iterator<Item = (ShapeId, &CanvasShape)> {
        self.shapes.iter().map(|(id, shape)| (*id, shape))
    }

    /// Visible geometry without handles, in creation order
    pub fn snapshot(&self) -> Vec<CanvasShape> {
        self.shapes.values().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.shapes.values().filter_map(|shape| match shape {
            CanvasShape::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    fn insert(&mut self, shape: CanvasShape) -> ShapeId {
        let id = ShapeId(self.next_id);
        self.next_id += 1;
        self.shapes.insert(id, shape);
        id
    }
}

impl Canvas for ShapeStore {
    fn create_line(&mut self, from: Pos2, to: Pos2, color: Color32) -> ShapeId {
        self.insert(CanvasShape::Line { from, to, color })
    }

    fn create_text(&mut self, pos: Pos2, text: &str, color: Color32) -> ShapeId {
        self.insert(CanvasShape::Text {
            pos,
            text: text.to_owned(),
            color,
        })
    }

    fn create_rectangle(&mut self, corner: Pos2, opposite: Pos2, color: Color32) -> ShapeId {
        self.insert(CanvasShape::Rectangle {
            rect: Rect::from_two_pos(corner, opposite),
            color,
        })
    }

    fn create_oval(&mut self, corner: Pos2, opposite: Pos2, color: Color32) -> ShapeId {
        self.insert(CanvasShape::Oval {
            rect: Rect::from_two_pos(corner, opposite),
            color,
        })
    }

    fn update_text(&mut self, id: ShapeId, new_text: &str, new_color: Color32) {
        match self.shapes.get_mut(&id) {
            Some(CanvasShape::Text { text, color, .. }) => {
                *text = new_text.to_owned();
                *color = new_color;
            }
            _ => log::warn!("update_text on {:?} which is not a live text label", id),
        }
    }

    fn delete(&mut self, id: ShapeId) {
        if self.shapes.remove(&id).is_none() {
            log::debug!("Deleting unknown shape {:?}", id);
        }
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    #[test]
    fn test_handles_are_unique_and_ordered() {
        let mut store = ShapeStore::default();
        let a = store.create_line(pos2(0.0, 0.0), pos2(1.0, 1.0), Color32::RED);
        let b = store.create_text(pos2(5.0, 5.0), "label", Color32::RED);
        assert!(a < b);
        assert_eq!(store.len(), 2);

        let ids: Vec<_> = store.shapes().map(|(id, _)| id).collect();
        assert_eq!(ids, vec![a, b]);
    }

    #[test]
    fn test_delete_removes_shape() {
        let mut store = ShapeStore::default();
        let id = store.create_oval(pos2(0.0, 0.0), pos2(4.0, 2.0), Color32::GREEN);
        store.delete(id);
        assert!(store.is_empty());

        // Deleting twice is harmless
        store.delete(id);
        assert!(store.is_empty());
    }

    #[test]
    fn test_rectangle_is_normalised() {
        let mut store = ShapeStore::default();
        let id = store.create_rectangle(pos2(10.0, 4.0), pos2(0.0, 0.0), Color32::RED);
        match store.get(id) {
            Some(CanvasShape::Rectangle { rect, .. }) => {
                assert_eq!(rect.min, pos2(0.0, 0.0));
                assert_eq!(rect.max, pos2(10.0, 4.0));
            }
            other => panic!("unexpected shape {:?}", other),
        }
    }

    #[test]
    fn test_update_text() {
        let mut store = ShapeStore::default();
        let id = store.create_text(pos2(0.0, 0.0), "1.00 mm", Color32::RED);
        store.update_text(id, "2.00 mm", Color32::BLUE);
        assert_eq!(
            store.get(id),
            Some(&CanvasShape::Text {
                pos: pos2(0.0, 0.0),
                text: "2.00 mm".to_owned(),
                color: Color32::BLUE,
            })
        );
    }
}

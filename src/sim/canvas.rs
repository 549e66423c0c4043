//! Retained playfield
//!
//! The canvas owns every drawable shape in the game: ovals, rectangles and
//! text. Entities hold a `ShapeId` and ask the canvas for their box; the
//! renderer walks the same store to draw a frame. Shapes are kept in
//! creation order, which is also the stacking order.

use std::collections::BTreeMap;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::Bounds;

/// Stable identifier of a shape on the canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ShapeId(pub u32);

/// RGB colour packed as `0xRRGGBB`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color(pub u32);

impl Color {
    pub const WHITE: Color = Color(0xFFFFFF);
    pub const BLACK: Color = Color(0x000000);

    /// CSS hex string, e.g. `#FFB643`
    pub fn css(&self) -> String {
        format!("#{:06X}", self.0 & 0xFF_FFFF)
    }
}

/// What kind of primitive a shape is
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ShapeKind {
    Oval,
    Rect,
    /// Text anchored at the center of its (zero-sized) box
    Text { text: String, size: u32 },
}

/// A shape on the canvas
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    pub kind: ShapeKind,
    pub bounds: Bounds,
    pub fill: Color,
    /// Border colour; `None` draws no border
    pub outline: Option<Color>,
}

/// The playfield: a fixed-size area holding shapes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Canvas {
    width: f32,
    height: f32,
    background: Color,
    shapes: BTreeMap<ShapeId, Shape>,
    next_id: u32,
}

impl Canvas {
    pub fn new(width: f32, height: f32, background: Color) -> Self {
        Self {
            width,
            height,
            background,
            shapes: BTreeMap::new(),
            next_id: 1,
        }
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn background(&self) -> Color {
        self.background
    }

    pub fn set_background(&mut self, color: Color) {
        self.background = color;
    }

    fn insert(&mut self, shape: Shape) -> ShapeId {
        let id = ShapeId(self.next_id);
        self.next_id += 1;
        self.shapes.insert(id, shape);
        id
    }

    pub fn create_oval(&mut self, bounds: Bounds, fill: Color) -> ShapeId {
        self.insert(Shape {
            kind: ShapeKind::Oval,
            bounds,
            fill,
            outline: Some(Color::BLACK),
        })
    }

    pub fn create_rect(&mut self, bounds: Bounds, fill: Color) -> ShapeId {
        self.insert(Shape {
            kind: ShapeKind::Rect,
            bounds,
            fill,
            outline: Some(Color::BLACK),
        })
    }

    pub fn create_text(&mut self, pos: Vec2, text: impl Into<String>, size: u32) -> ShapeId {
        self.insert(Shape {
            kind: ShapeKind::Text {
                text: text.into(),
                size,
            },
            bounds: Bounds { min: pos, max: pos },
            fill: Color::BLACK,
            outline: None,
        })
    }

    /// Box of a shape, `None` once it has been deleted
    pub fn bounds(&self, id: ShapeId) -> Option<Bounds> {
        self.shapes.get(&id).map(|s| s.bounds)
    }

    pub fn get(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.get(&id)
    }

    pub fn contains(&self, id: ShapeId) -> bool {
        self.shapes.contains_key(&id)
    }

    /// Translate a shape; unknown ids are ignored
    pub fn move_shape(&mut self, id: ShapeId, offset: Vec2) {
        if let Some(shape) = self.shapes.get_mut(&id) {
            shape.bounds = shape.bounds.translated(offset);
        }
    }

    /// Remove a shape, returning whether it existed
    pub fn delete(&mut self, id: ShapeId) -> bool {
        self.shapes.remove(&id).is_some()
    }

    pub fn set_fill(&mut self, id: ShapeId, fill: Color) {
        if let Some(shape) = self.shapes.get_mut(&id) {
            shape.fill = fill;
        }
    }

    pub fn set_outline(&mut self, id: ShapeId, outline: Option<Color>) {
        if let Some(shape) = self.shapes.get_mut(&id) {
            shape.outline = outline;
        }
    }

    /// Replace the contents of a text shape
    pub fn set_text(&mut self, id: ShapeId, new_text: impl Into<String>) {
        if let Some(Shape {
            kind: ShapeKind::Text { text, .. },
            ..
        }) = self.shapes.get_mut(&id)
        {
            *text = new_text.into();
        }
    }

    /// Text of a text shape
    pub fn text(&self, id: ShapeId) -> Option<&str> {
        match self.shapes.get(&id) {
            Some(Shape {
                kind: ShapeKind::Text { text, .. },
                ..
            }) => Some(text.as_str()),
            _ => None,
        }
    }

    /// All shapes whose box overlaps or touches `area`, in stacking order
    pub fn find_overlapping(&self, area: &Bounds) -> Vec<ShapeId> {
        self.shapes
            .iter()
            .filter(|(_, shape)| shape.bounds.intersects(area))
            .map(|(id, _)| *id)
            .collect()
    }

    /// Shapes in stacking order (first drawn first)
    pub fn shapes(&self) -> impl Iterator<Item = (ShapeId, &Shape)> {
        self.shapes.iter().map(|(id, shape)| (*id, shape))
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canvas() -> Canvas {
        Canvas::new(610.0, 400.0, Color::WHITE)
    }

    #[test]
    fn test_color_css() {
        assert_eq!(Color(0xFFB643).css(), "#FFB643");
        assert_eq!(Color(0x00000A).css(), "#00000A");
        assert_eq!(Color(0x1_4535AA).css(), "#4535AA");
    }

    #[test]
    fn test_ids_are_stable_and_increasing() {
        let mut c = canvas();
        let a = c.create_rect(Bounds::new(0.0, 0.0, 10.0, 10.0), Color::BLACK);
        let b = c.create_oval(Bounds::new(0.0, 0.0, 10.0, 10.0), Color::BLACK);
        assert!(a < b);

        c.delete(a);
        let d = c.create_rect(Bounds::new(0.0, 0.0, 10.0, 10.0), Color::BLACK);
        assert!(d > b, "deleted ids are never reused");
    }

    #[test]
    fn test_move_and_delete() {
        let mut c = canvas();
        let id = c.create_rect(Bounds::new(0.0, 0.0, 10.0, 10.0), Color::BLACK);
        c.move_shape(id, Vec2::new(5.0, 2.0));
        assert_eq!(c.bounds(id), Some(Bounds::new(5.0, 2.0, 15.0, 12.0)));

        assert!(c.delete(id));
        assert!(!c.delete(id));
        assert_eq!(c.bounds(id), None);
        // Moving a deleted shape is a no-op
        c.move_shape(id, Vec2::ONE);
        assert!(c.is_empty());
    }

    #[test]
    fn test_find_overlapping_in_stacking_order() {
        let mut c = canvas();
        let left = c.create_rect(Bounds::new(0.0, 0.0, 10.0, 10.0), Color::BLACK);
        let right = c.create_rect(Bounds::new(10.0, 0.0, 20.0, 10.0), Color::BLACK);
        let far = c.create_rect(Bounds::new(100.0, 0.0, 110.0, 10.0), Color::BLACK);

        let hits = c.find_overlapping(&Bounds::new(5.0, 5.0, 12.0, 6.0));
        assert_eq!(hits, vec![left, right]);
        assert!(!hits.contains(&far));
    }

    #[test]
    fn test_text_update() {
        let mut c = canvas();
        let id = c.create_text(Vec2::new(300.0, 20.0), "Lives: 3  Score: 0", 15);
        c.set_text(id, "Lives: 2  Score: 10");
        assert_eq!(c.text(id), Some("Lives: 2  Score: 10"));

        // set_text on a non-text shape is ignored
        let rect = c.create_rect(Bounds::new(0.0, 0.0, 1.0, 1.0), Color::BLACK);
        c.set_text(rect, "nope");
        assert_eq!(c.text(rect), None);
    }

    #[test]
    fn test_recolor() {
        let mut c = canvas();
        let id = c.create_rect(Bounds::new(0.0, 0.0, 1.0, 1.0), Color(0x8FE1A2));
        c.set_fill(id, Color(0xED639E));
        assert_eq!(c.get(id).map(|s| s.fill), Some(Color(0xED639E)));
    }
}

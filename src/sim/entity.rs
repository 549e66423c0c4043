//! Drawable entity: a handle to one shape on the canvas

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::canvas::{Canvas, ShapeId};
use super::geometry::Bounds;

/// A game object backed by a single canvas shape
///
/// The entity never caches coordinates; the canvas is the source of truth,
/// so its box always reflects the last applied move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    shape: ShapeId,
}

impl Entity {
    pub fn new(shape: ShapeId) -> Self {
        Self { shape }
    }

    pub fn shape(&self) -> ShapeId {
        self.shape
    }

    /// Current box, `None` after `destroy`
    pub fn position(&self, canvas: &Canvas) -> Option<Bounds> {
        canvas.bounds(self.shape)
    }

    /// Translate by `offset` with no bounds checking
    pub fn move_by(&self, canvas: &mut Canvas, offset: Vec2) {
        canvas.move_shape(self.shape, offset);
    }

    /// Remove the shape from the playfield
    pub fn destroy(&self, canvas: &mut Canvas) {
        canvas.delete(self.shape);
    }
}

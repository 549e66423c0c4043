//! Overlap collection between the ball and the other entities
//!
//! The set of things a ball can hit is small and closed, so the collider
//! kind is a plain enum instead of runtime type inspection.

use super::canvas::{Canvas, ShapeId};
use super::geometry::Bounds;

/// Kind of entity the ball overlapped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColliderKind {
    Paddle,
    Brick,
}

/// One entity overlapping the ball this tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Collider {
    pub shape: ShapeId,
    pub kind: ColliderKind,
    /// Box of the entity at the time of the overlap query
    pub bounds: Bounds,
}

impl Collider {
    pub fn is_paddle(&self) -> bool {
        self.kind == ColliderKind::Paddle
    }

    /// Shape id of the brick, if this collider is one
    pub fn as_brick(&self) -> Option<ShapeId> {
        match self.kind {
            ColliderKind::Brick => Some(self.shape),
            ColliderKind::Paddle => None,
        }
    }
}

/// Collect every known entity overlapping `area`
///
/// `classify` maps a shape to its entity kind; shapes it does not know
/// (the ball itself, text, effect sparks) are skipped.
pub fn overlapping_colliders<F>(canvas: &Canvas, area: &Bounds, classify: F) -> Vec<Collider>
where
    F: Fn(ShapeId) -> Option<ColliderKind>,
{
    canvas
        .find_overlapping(area)
        .into_iter()
        .filter_map(|shape| {
            let kind = classify(shape)?;
            let bounds = canvas.bounds(shape)?;
            Some(Collider {
                shape,
                kind,
                bounds,
            })
        })
        .collect()
}

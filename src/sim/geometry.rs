//! Axis-aligned bounding boxes
//!
//! Every shape on the playfield is described by its box: `(x0, y0)` is the
//! top-left corner and `(x1, y1)` the bottom-right, in canvas coordinates
//! (y grows downward).

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned box in canvas coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: Vec2,
    pub max: Vec2,
}

impl Bounds {
    pub fn new(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        Self {
            min: Vec2::new(x0, y0),
            max: Vec2::new(x1, y1),
        }
    }

    /// Box of the given size centered on `center`
    pub fn centered(center: Vec2, size: Vec2) -> Self {
        let half = size / 2.0;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.min.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.min.y
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.max.x
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.max.y
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    /// Same box shifted by `offset`
    pub fn translated(&self, offset: Vec2) -> Self {
        Self {
            min: self.min + offset,
            max: self.max + offset,
        }
    }

    /// True if the boxes overlap or touch
    ///
    /// Touching edges count, matching how a canvas overlap query reports
    /// items whose outline meets the query rectangle.
    pub fn intersects(&self, other: &Bounds) -> bool {
        self.min.x <= other.max.x
            && other.min.x <= self.max.x
            && self.min.y <= other.max.y
            && other.min.y <= self.max.y
    }

    /// Coordinates as `(x0, y0, x1, y1)`
    pub fn as_tuple(&self) -> (f32, f32, f32, f32) {
        (self.min.x, self.min.y, self.max.x, self.max.y)
    }
}

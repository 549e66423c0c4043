//! Bricks: rectangles that take one to three hits

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::canvas::{Canvas, Color, ShapeId};
use super::entity::Entity;
use super::geometry::Bounds;
use crate::consts::{BRICK_HEIGHT, BRICK_WIDTH};
use crate::error::{GameError, Result};

/// Fill colour for a brick with the given remaining hits
pub fn brick_color(hits: u8) -> Option<Color> {
    match hits {
        1 => Some(Color(0x4535AA)),
        2 => Some(Color(0xED639E)),
        3 => Some(Color(0x8FE1A2)),
        _ => None,
    }
}

/// Outcome of hitting a brick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrickHit {
    /// Still standing with this many hits left
    Damaged(u8),
    Destroyed,
}

/// A brick entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Brick {
    pub entity: Entity,
    hits: u8,
}

impl Brick {
    /// Place a brick centered at `center`
    ///
    /// Fails if `hits` has no palette colour (outside `1..=BRICK_MAX_HITS`);
    /// nothing is added to the canvas in that case.
    pub fn spawn(canvas: &mut Canvas, center: Vec2, hits: u8) -> Result<Self> {
        let color = brick_color(hits).ok_or(GameError::InvalidHitCount(hits))?;
        let shape = canvas.create_rect(
            Bounds::centered(center, Vec2::new(BRICK_WIDTH, BRICK_HEIGHT)),
            color,
        );
        Ok(Self {
            entity: Entity::new(shape),
            hits,
        })
    }

    pub fn shape(&self) -> ShapeId {
        self.entity.shape()
    }

    pub fn hits(&self) -> u8 {
        self.hits
    }

    /// Take one hit: destroyed at zero, recoloured otherwise
    pub fn hit(&mut self, canvas: &mut Canvas) -> BrickHit {
        self.hits = self.hits.saturating_sub(1);
        match brick_color(self.hits) {
            Some(color) => {
                canvas.set_fill(self.entity.shape(), color);
                BrickHit::Damaged(self.hits)
            }
            _ => {
                self.entity.destroy(canvas);
                BrickHit::Destroyed
            }
        }
    }
}

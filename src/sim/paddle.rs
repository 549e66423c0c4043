//! The player's paddle

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::canvas::{Canvas, Color, ShapeId};
use super::entity::Entity;
use super::geometry::Bounds;
use crate::consts::{PADDLE_COLOR, PADDLE_HEIGHT, PADDLE_WIDTH};

/// Horizontally constrained paddle that carries the ball before launch
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    pub entity: Entity,
    pub width: f32,
    pub height: f32,
    /// Shape of the ball resting on the paddle, if not yet launched
    held_ball: Option<ShapeId>,
}

impl Paddle {
    pub fn spawn(canvas: &mut Canvas, center: Vec2) -> Self {
        let size = Vec2::new(PADDLE_WIDTH, PADDLE_HEIGHT);
        let shape = canvas.create_rect(Bounds::centered(center, size), Color(PADDLE_COLOR));
        Self {
            entity: Entity::new(shape),
            width: size.x,
            height: size.y,
            held_ball: None,
        }
    }

    pub fn shape(&self) -> ShapeId {
        self.entity.shape()
    }

    pub fn position(&self, canvas: &Canvas) -> Option<Bounds> {
        self.entity.position(canvas)
    }

    /// Attach (or release with `None`) the ball that follows the paddle
    pub fn set_ball(&mut self, ball: Option<ShapeId>) {
        self.held_ball = ball;
    }

    pub fn held_ball(&self) -> Option<ShapeId> {
        self.held_ball
    }

    /// Slide horizontally by `offset`
    ///
    /// Does nothing if the paddle would leave `[0, width]`. A held ball
    /// moves along with it. Returns whether the move was applied.
    pub fn move_by(&self, canvas: &mut Canvas, offset: f32) -> bool {
        let Some(bounds) = self.entity.position(canvas) else {
            return false;
        };
        if bounds.left() + offset < 0.0 || bounds.right() + offset > canvas.width() {
            return false;
        }

        let delta = Vec2::new(offset, 0.0);
        self.entity.move_by(canvas, delta);
        if let Some(ball) = self.held_ball {
            canvas.move_shape(ball, delta);
        }
        true
    }
}

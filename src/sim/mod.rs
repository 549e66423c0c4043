//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed tick only, driven by the host
//! - Seeded RNG only (cosmetic effects)
//! - Stable iteration order (by shape ID)
//! - No rendering or platform dependencies

pub mod ball;
pub mod brick;
pub mod canvas;
pub mod collision;
pub mod entity;
pub mod geometry;
pub mod paddle;
pub mod state;
pub mod tick;

pub use ball::{Ball, BallEffect, Spark};
pub use brick::{Brick, BrickHit, brick_color};
pub use canvas::{Canvas, Color, Shape, ShapeId, ShapeKind};
pub use collision::{Collider, ColliderKind, overlapping_colliders};
pub use entity::Entity;
pub use geometry::Bounds;
pub use paddle::Paddle;
pub use state::{
    Game, GameEvent, GamePhase, Hud, InputEvent, Signal, generate_level, level_color,
};
pub use tick::{TickInput, tick};

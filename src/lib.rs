//! Brick Breaker - A classic brick-breaking arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (playfield, entities, collisions, game state)
//! - `renderer`: Draw list generation and 2D canvas painting
//! - `settings`: Data-driven game configuration
//! - `error`: Construction/configuration errors

pub mod error;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::{GameError, Result};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Scheduler tick period while the ball is in play (~20 Hz)
    pub const TICK_MS: u32 = 50;
    /// Pause after losing a life before the next serve
    pub const LIFE_LOST_DELAY_MS: u32 = 1000;

    /// Play area dimensions
    pub const PLAY_WIDTH: f32 = 610.0;
    pub const PLAY_HEIGHT: f32 = 400.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 80.0;
    pub const PADDLE_HEIGHT: f32 = 10.0;
    pub const PADDLE_Y: f32 = 326.0;
    /// Horizontal distance per move-left/move-right event
    pub const PADDLE_STEP: f32 = 10.0;
    pub const PADDLE_COLOR: u32 = 0xFFB643;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    pub const BALL_SPAWN_Y: f32 = 310.0;
    pub const BALL_START_SPEED: f32 = 5.0;
    /// Speed added to the ball on every level up
    pub const BALL_SPEED_INCREMENT: f32 = 1.0;
    pub const BALL_COLOR: u32 = 0xFFFFFF;

    /// Brick layout
    pub const BRICK_WIDTH: f32 = 75.0;
    pub const BRICK_HEIGHT: f32 = 20.0;
    pub const BRICK_TOP: f32 = 50.0;
    pub const BRICK_MARGIN: f32 = 5.0;
    /// Highest hit count a brick can be built with
    pub const BRICK_MAX_HITS: u8 = 3;

    /// Rules
    pub const START_LIVES: i32 = 3;
    pub const SCORE_PER_BRICK: u64 = 10;

    /// Background colour per level, indexed by `level % LEVEL_COLORS.len()`
    pub const LEVEL_COLORS: [u32; 5] = [0xD6D1F5, 0xB9E3F6, 0xF3CAB9, 0xF3EDB9, 0xC2F3B9];

    /// Text placement
    pub const HUD_POS: (f32, f32) = (300.0, 20.0);
    pub const HUD_FONT_SIZE: u32 = 15;
    pub const BANNER_POS: (f32, f32) = (300.0, 200.0);
    pub const BANNER_FONT_SIZE: u32 = 40;
}

/// Number of whole scheduler ticks covering `ms` (at least one)
#[inline]
pub fn ms_to_ticks(ms: u32, tick_ms: u32) -> u32 {
    if tick_ms == 0 {
        return 1;
    }
    ms.div_ceil(tick_ms).max(1)
}

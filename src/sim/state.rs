//! Game state and phase machine
//!
//! `Game` owns the canvas and every entity on it. Bricks are looked up by
//! the id of their shape; entities never reach back into the game.

use std::collections::BTreeMap;

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::ball::{Ball, Spark};
use super::brick::{Brick, brick_color};
use super::canvas::{Canvas, Color, ShapeId};
use super::paddle::Paddle;
use crate::consts::*;
use crate::error::{GameError, Result};
use crate::settings::Settings;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Ball resting on the paddle, waiting for launch input
    Setup,
    /// Ball in play, ticking every `tick_ms`
    Running,
    /// All bricks cleared; the next tick levels up and serves again
    LevelTransition,
    /// Ball fell past the bottom; waiting out the delay before serving
    LifeLost,
    /// Out of lives
    GameOver,
}

/// Something that happened which may move the game to another phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    Launch,
    /// Ball tick finished with bricks and ball still in play
    Continue,
    LevelCleared,
    /// Ball fell; carries the lives remaining after the loss
    BallLost { lives: i32 },
    /// Level-up work done, ready to serve
    SetupDone,
    /// Life-lost pause is over
    DelayElapsed,
}

impl GamePhase {
    /// Phase after `signal`; signals that do not apply leave the phase as is
    pub fn next(self, signal: Signal) -> GamePhase {
        use GamePhase::*;
        match (self, signal) {
            (Setup, Signal::Launch) => Running,
            (Running, Signal::LevelCleared) => LevelTransition,
            (Running, Signal::BallLost { lives }) if lives < 0 => GameOver,
            (Running, Signal::BallLost { .. }) => LifeLost,
            (LevelTransition, Signal::SetupDone) => Setup,
            (LifeLost, Signal::DelayElapsed) => Setup,
            (phase, _) => phase,
        }
    }

    /// Whether the paddle accepts move input
    pub fn accepts_movement(self) -> bool {
        matches!(self, GamePhase::Setup | GamePhase::Running)
    }
}

/// Discrete input events from the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    MoveLeft,
    MoveRight,
    Launch,
}

/// Things that happened during a tick, drained by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    BrickDamaged { hits_left: u8 },
    BrickDestroyed,
    LevelCleared { level: u32 },
    LifeLost { lives: i32 },
    GameOver { score: u64 },
}

/// Values shown in the heads-up display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hud {
    pub lives: i32,
    pub score: u64,
    pub level: u32,
}

/// Background colour for a level
pub fn level_color(level: u32) -> Color {
    Color(LEVEL_COLORS[level as usize % LEVEL_COLORS.len()])
}

/// Brick centers and hit counts for a level
///
/// `level + 2` rows of bricks spanning the width; the top row takes three
/// hits, the next two, then one, repeating.
pub fn generate_level(level: u32, width: f32) -> Vec<(Vec2, u8)> {
    let rows = level + 2;
    let columns = ((width - 2.0 * BRICK_MARGIN) / BRICK_WIDTH).ceil().max(0.0) as u32;

    let mut layout = Vec::with_capacity((rows * columns) as usize);
    for row in 0..rows {
        let hits = 3 - (row % 3) as u8;
        let y = BRICK_TOP + row as f32 * BRICK_HEIGHT;
        for col in 0..columns {
            let x = BRICK_MARGIN + col as f32 * BRICK_WIDTH;
            layout.push((Vec2::new(x + BRICK_WIDTH / 2.0, y), hits));
        }
    }
    layout
}

fn format_hud(lives: i32, score: u64) -> String {
    format!("Lives: {}  Score: {}", lives, score)
}

/// Complete game state
#[derive(Debug)]
pub struct Game {
    pub settings: Settings,
    pub canvas: Canvas,
    pub paddle: Paddle,
    pub ball: Ball,
    /// Active bricks keyed by their shape
    pub bricks: BTreeMap<ShapeId, Brick>,
    pub sparks: Vec<Spark>,
    pub lives: i32,
    pub score: u64,
    pub level: u32,
    /// Speed given to every new ball; only grows
    pub ball_speed: f32,
    pub phase: GamePhase,
    /// Ticks left in the life-lost pause
    pub delay_ticks: u32,
    /// Scheduler ticks processed
    pub time_ticks: u64,
    pub(crate) events: Vec<GameEvent>,
    pub(crate) rng: Pcg32,
    hud_text: ShapeId,
    banner_text: Option<ShapeId>,
}

impl Game {
    /// Build the playfield and the first level, waiting for launch
    pub fn new(settings: Settings) -> Result<Self> {
        settings.validate()?;

        let level = 1;
        let mut canvas = Canvas::new(settings.play_width, settings.play_height, level_color(level));
        let paddle = Paddle::spawn(&mut canvas, Vec2::new(settings.play_width / 2.0, PADDLE_Y));
        let ball = Ball::spawn(
            &mut canvas,
            Vec2::new(settings.play_width / 2.0, BALL_SPAWN_Y),
            settings.ball_start_speed,
            settings.effect,
        );
        let hud_text = canvas.create_text(
            Vec2::new(HUD_POS.0, HUD_POS.1),
            format_hud(settings.start_lives, 0),
            HUD_FONT_SIZE,
        );

        let mut game = Self {
            canvas,
            paddle,
            ball,
            bricks: BTreeMap::new(),
            sparks: Vec::new(),
            lives: settings.start_lives,
            score: 0,
            level,
            ball_speed: settings.ball_start_speed,
            phase: GamePhase::Setup,
            delay_ticks: 0,
            time_ticks: 0,
            events: Vec::new(),
            rng: Pcg32::seed_from_u64(settings.seed),
            hud_text,
            banner_text: None,
            settings,
        };

        game.paddle.set_ball(Some(game.ball.entity.shape()));
        game.show_banner(format!("Level {} - Press Space to start", game.level));
        let layout = generate_level(game.level, game.settings.play_width);
        game.add_bricks(&layout)?;

        log::info!(
            "New game: {} bricks, {} lives",
            game.bricks.len(),
            game.lives
        );
        Ok(game)
    }

    pub fn hud(&self) -> Hud {
        Hud {
            lives: self.lives,
            score: self.score,
            level: self.level,
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    pub fn background(&self) -> Color {
        self.canvas.background()
    }

    /// Text currently shown in the middle of the playfield
    pub fn banner(&self) -> Option<&str> {
        self.banner_text.and_then(|id| self.canvas.text(id))
    }

    pub fn brick_count(&self) -> usize {
        self.bricks.len()
    }

    /// Take the events recorded since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Apply a key event immediately
    ///
    /// Moves only work while serving or playing; launch only while serving.
    /// Returns whether the event changed anything.
    pub fn handle_input(&mut self, event: InputEvent) -> bool {
        match event {
            InputEvent::MoveLeft | InputEvent::MoveRight if self.phase.accepts_movement() => {
                let step = if event == InputEvent::MoveLeft {
                    -self.settings.paddle_step
                } else {
                    self.settings.paddle_step
                };
                self.paddle.move_by(&mut self.canvas, step)
            }
            InputEvent::Launch if self.phase == GamePhase::Setup => {
                self.clear_banner();
                self.paddle.set_ball(None);
                self.phase = self.phase.next(Signal::Launch);
                log::info!("Level {} launched", self.level);
                true
            }
            _ => false,
        }
    }

    /// Place a fresh ball on the paddle and show the serve prompt
    ///
    /// Bricks are left alone; a new level adds its layout separately.
    pub(crate) fn enter_setup(&mut self) {
        for spark in self.sparks.drain(..) {
            spark.entity.destroy(&mut self.canvas);
        }

        self.ball.destroy(&mut self.canvas);
        let paddle_x = self
            .paddle
            .position(&self.canvas)
            .map(|b| b.center().x)
            .unwrap_or(self.settings.play_width / 2.0);
        self.ball = Ball::spawn(
            &mut self.canvas,
            Vec2::new(paddle_x, BALL_SPAWN_Y),
            self.ball_speed,
            self.settings.effect,
        );
        self.paddle.set_ball(Some(self.ball.entity.shape()));

        self.update_hud();
        self.show_banner(format!("Level {} - Press Space to start", self.level));
    }

    /// Add a brick layout to the playfield
    ///
    /// The whole layout is checked first; on error no brick is added.
    pub(crate) fn add_bricks(&mut self, layout: &[(Vec2, u8)]) -> Result<()> {
        if let Some(&(_, hits)) = layout.iter().find(|(_, hits)| brick_color(*hits).is_none()) {
            return Err(GameError::InvalidHitCount(hits));
        }
        for &(center, hits) in layout {
            let brick = Brick::spawn(&mut self.canvas, center, hits)?;
            self.bricks.insert(brick.shape(), brick);
        }
        Ok(())
    }

    pub(crate) fn update_hud(&mut self) {
        self.canvas
            .set_text(self.hud_text, format_hud(self.lives, self.score));
    }

    pub(crate) fn show_banner(&mut self, text: String) {
        self.clear_banner();
        let id = self.canvas.create_text(
            Vec2::new(BANNER_POS.0, BANNER_POS.1),
            text,
            BANNER_FONT_SIZE,
        );
        self.banner_text = Some(id);
    }

    fn clear_banner(&mut self) {
        if let Some(id) = self.banner_text.take() {
            self.canvas.delete(id);
        }
    }
}

//! Fixed-interval scheduler tick
//!
//! The host calls `tick` once every `tick_ms`. What a tick does depends only
//! on the current phase, so nothing reschedules itself: game over is simply
//! a phase where ticks do nothing.

use super::brick::BrickHit;
use super::collision::{Collider, ColliderKind, overlapping_colliders};
use super::state::{Game, GameEvent, GamePhase, InputEvent, Signal, generate_level, level_color};
use crate::consts::SCORE_PER_BRICK;
use crate::error::Result;
use crate::ms_to_ticks;

/// Input state sampled for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Move-left key held
    pub left: bool,
    /// Move-right key held
    pub right: bool,
    /// Launch the ball (space)
    pub launch: bool,
    /// Idle/demo mode - autopilot plays the game
    pub idle_mode: bool,
}

/// Advance the game by one scheduler tick
pub fn tick(game: &mut Game, input: &TickInput) {
    if game.phase == GamePhase::GameOver {
        return;
    }

    let mut input = input.clone();
    if input.idle_mode {
        autopilot(game, &mut input);
    }
    if input.left {
        game.handle_input(InputEvent::MoveLeft);
    }
    if input.right {
        game.handle_input(InputEvent::MoveRight);
    }
    if input.launch {
        game.handle_input(InputEvent::Launch);
    }

    game.time_ticks += 1;

    match game.phase {
        GamePhase::Setup | GamePhase::GameOver => {}
        GamePhase::Running => run_ball(game),
        GamePhase::LevelTransition => {
            if let Err(e) = level_up(game) {
                log::error!("Level {} could not be built: {}", game.level, e);
                game.phase = GamePhase::GameOver;
            }
        }
        GamePhase::LifeLost => {
            game.delay_ticks = game.delay_ticks.saturating_sub(1);
            if game.delay_ticks == 0 {
                game.phase = game.phase.next(Signal::DelayElapsed);
                game.enter_setup();
            }
        }
    }
}

/// One step of live play: collide, check for level clear or a miss, move
fn run_ball(game: &mut Game) {
    game.sparks.retain_mut(|spark| spark.age(&mut game.canvas));

    check_collisions(game);

    let signal = if game.bricks.is_empty() {
        Signal::LevelCleared
    } else if game
        .ball
        .position(&game.canvas)
        .is_some_and(|b| b.bottom() >= game.canvas.height())
    {
        game.lives -= 1;
        game.update_hud();
        Signal::BallLost { lives: game.lives }
    } else {
        Signal::Continue
    };

    game.phase = game.phase.next(signal);

    match signal {
        Signal::LevelCleared => {
            log::info!("Level {} cleared (score {})", game.level, game.score);
            game.events.push(GameEvent::LevelCleared { level: game.level });
        }
        Signal::BallLost { lives } if game.phase == GamePhase::GameOver => {
            log::info!("Game over at level {} with score {}", game.level, game.score);
            game.events.push(GameEvent::LifeLost { lives });
            game.events.push(GameEvent::GameOver { score: game.score });
            game.show_banner("You Lose! Game Over!".to_string());
        }
        Signal::BallLost { lives } => {
            log::info!("Ball lost, {} lives left", lives);
            game.events.push(GameEvent::LifeLost { lives });
            game.delay_ticks = ms_to_ticks(game.settings.life_lost_delay_ms, game.settings.tick_ms);
        }
        _ => {
            if let Some(center) = game.ball.update(&mut game.canvas) {
                let effect = game.ball.effect;
                let ttl = ms_to_ticks(effect.spark_lifetime_ms(), game.settings.tick_ms);
                let spark = effect.spawn_spark(&mut game.canvas, center, ttl, &mut game.rng);
                game.sparks.push(spark);
            }
        }
    }
}

/// Bounce the ball off whatever it overlaps and damage the bricks involved
///
/// Every brick in the overlap set takes one hit and scores once, so a ball
/// bridging two bricks damages both.
fn check_collisions(game: &mut Game) {
    let Some(area) = game.ball.position(&game.canvas) else {
        return;
    };

    let paddle = game.paddle.shape();
    let bricks = &game.bricks;
    let colliders = overlapping_colliders(&game.canvas, &area, |shape| {
        if shape == paddle {
            Some(ColliderKind::Paddle)
        } else if bricks.contains_key(&shape) {
            Some(ColliderKind::Brick)
        } else {
            None
        }
    });

    game.ball.collide(&game.canvas, &colliders);

    let mut scored = false;
    for shape in colliders.iter().filter_map(Collider::as_brick) {
        let Some(brick) = game.bricks.get_mut(&shape) else {
            continue;
        };
        game.score += SCORE_PER_BRICK;
        scored = true;

        match brick.hit(&mut game.canvas) {
            BrickHit::Damaged(hits_left) => {
                game.events.push(GameEvent::BrickDamaged { hits_left });
            }
            BrickHit::Destroyed => {
                game.bricks.remove(&shape);
                log::debug!("Brick destroyed, {} left", game.bricks.len());
                game.events.push(GameEvent::BrickDestroyed);
            }
        }
    }

    if scored {
        game.update_hud();
    }
}

/// Next level: faster ball, new background, new bricks
fn level_up(game: &mut Game) -> Result<()> {
    game.level += 1;
    game.ball_speed += game.settings.ball_speed_increment;
    game.canvas.set_background(level_color(game.level));
    let layout = generate_level(game.level, game.settings.play_width);
    game.add_bricks(&layout)?;
    game.enter_setup();
    game.phase = game.phase.next(Signal::SetupDone);

    log::info!(
        "Level {}: {} bricks, ball speed {}",
        game.level,
        game.bricks.len(),
        game.ball_speed
    );
    Ok(())
}

/// Steer the paddle under the ball and serve automatically
fn autopilot(game: &Game, input: &mut TickInput) {
    match game.phase {
        GamePhase::Setup => input.launch = true,
        GamePhase::Running => {
            let (Some(ball), Some(paddle)) = (
                game.ball.position(&game.canvas),
                game.paddle.position(&game.canvas),
            ) else {
                return;
            };

            // Drift the aim point across the paddle so the rally does not
            // settle into a loop
            let offset = ((game.time_ticks / 40) % 3) as f32 * 25.0 - 25.0;
            let target = ball.center().x + offset;
            let center = paddle.center().x;
            let dead_zone = game.settings.paddle_step / 2.0;

            input.left = target < center - dead_zone;
            input.right = target > center + dead_zone;
        }
        _ => {}
    }
}

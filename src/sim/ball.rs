//! The ball: fixed-speed, axis-aligned bounces

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::canvas::{Canvas, Color};
use super::collision::Collider;
use super::entity::Entity;
use super::geometry::Bounds;
use crate::consts::{BALL_COLOR, BALL_RADIUS};

/// Cosmetic trail left behind the ball (no gameplay effect)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BallEffect {
    #[default]
    Fire,
    Snow,
}

impl BallEffect {
    pub fn spark_radius(&self) -> f32 {
        match self {
            BallEffect::Fire => 2.0,
            BallEffect::Snow => 3.0,
        }
    }

    pub fn spark_color(&self) -> Color {
        match self {
            BallEffect::Fire => Color(0xFFA500),  // orange
            BallEffect::Snow => Color(0xADD8E6), // light blue
        }
    }

    /// How long a spark stays on the playfield
    pub fn spark_lifetime_ms(&self) -> u32 {
        match self {
            BallEffect::Fire => 50,
            BallEffect::Snow => 100,
        }
    }

    /// Drop a spark near `center`, jittered by up to half a pixel
    pub fn spawn_spark<R: Rng>(
        &self,
        canvas: &mut Canvas,
        center: Vec2,
        ttl_ticks: u32,
        rng: &mut R,
    ) -> Spark {
        let jitter = Vec2::new(rng.random_range(-0.5..=0.5), rng.random_range(-0.5..=0.5));
        let size = Vec2::splat(self.spark_radius() * 2.0);
        let shape = canvas.create_oval(
            Bounds::centered(center + jitter, size),
            self.spark_color(),
        );
        canvas.set_outline(shape, None);
        Spark {
            entity: Entity::new(shape),
            ttl_ticks,
        }
    }
}

/// A short-lived effect shape
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Spark {
    pub entity: Entity,
    pub ttl_ticks: u32,
}

impl Spark {
    /// Count down one tick; returns false (and deletes the shape) once expired
    pub fn age(&mut self, canvas: &mut Canvas) -> bool {
        self.ttl_ticks = self.ttl_ticks.saturating_sub(1);
        if self.ttl_ticks == 0 {
            self.entity.destroy(canvas);
            false
        } else {
            true
        }
    }
}

/// A ball entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub entity: Entity,
    /// Per-axis sign, each component is +1 or -1
    pub direction: Vec2,
    pub speed: f32,
    pub radius: f32,
    pub effect: BallEffect,
}

impl Ball {
    /// Create a ball centered at `center`, heading up and to the right
    pub fn spawn(canvas: &mut Canvas, center: Vec2, speed: f32, effect: BallEffect) -> Self {
        let radius = BALL_RADIUS;
        let shape = canvas.create_oval(
            Bounds::centered(center, Vec2::splat(radius * 2.0)),
            Color(BALL_COLOR),
        );
        Self {
            entity: Entity::new(shape),
            direction: Vec2::new(1.0, -1.0),
            speed,
            radius,
            effect,
        }
    }

    pub fn position(&self, canvas: &Canvas) -> Option<Bounds> {
        self.entity.position(canvas)
    }

    /// Bounce off the left, right and top walls, then advance one step
    ///
    /// The bottom edge is not a wall; falling through it is handled by the
    /// game. Returns the center before the move (where the effect spark
    /// goes), or `None` if the ball has no shape.
    pub fn update(&mut self, canvas: &mut Canvas) -> Option<Vec2> {
        let bounds = self.entity.position(canvas)?;
        let width = canvas.width();

        if bounds.left() <= 0.0 || bounds.right() >= width {
            self.direction.x *= -1.0;
        }
        if bounds.top() <= 0.0 {
            self.direction.y *= -1.0;
        }

        self.entity.move_by(canvas, self.direction * self.speed);
        Some(bounds.center())
    }

    /// Resolve the bounce direction from everything overlapping the ball
    ///
    /// More than one overlap reflects vertically. A lone paddle pushes the
    /// ball sideways when the ball's midpoint is past one of its edges and
    /// reflects vertically otherwise. A lone brick reflects vertically.
    /// Brick damage is applied separately by the caller.
    pub fn collide(&mut self, canvas: &Canvas, colliders: &[Collider]) {
        let Some(bounds) = self.entity.position(canvas) else {
            return;
        };
        let x = bounds.center().x;

        match colliders {
            [] => {}
            [only] if only.is_paddle() => {
                if x > only.bounds.right() {
                    self.direction.x = 1.0;
                } else if x < only.bounds.left() {
                    self.direction.x = -1.0;
                } else {
                    self.direction.y *= -1.0;
                }
            }
            _ => self.direction.y *= -1.0,
        }
    }

    /// Remove the ball from the playfield
    pub fn destroy(&self, canvas: &mut Canvas) {
        self.entity.destroy(canvas);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{PLAY_HEIGHT, PLAY_WIDTH};
    use crate::sim::canvas::ShapeId;
    use crate::sim::collision::ColliderKind;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn canvas() -> Canvas {
        Canvas::new(PLAY_WIDTH, PLAY_HEIGHT, Color::WHITE)
    }

    fn collider(kind: ColliderKind, bounds: Bounds) -> Collider {
        Collider {
            shape: ShapeId(999),
            kind,
            bounds,
        }
    }

    #[test]
    fn test_left_wall_bounce() {
        let mut canvas = canvas();
        // Box touching x = 0, moving left and up
        let mut ball = Ball::spawn(&mut canvas, Vec2::new(10.0, 200.0), 5.0, BallEffect::Fire);
        ball.direction = Vec2::new(-1.0, -1.0);

        let center = ball.update(&mut canvas);
        assert_eq!(center, Some(Vec2::new(10.0, 200.0)));
        assert_eq!(ball.direction, Vec2::new(1.0, -1.0));
        assert_eq!(
            ball.position(&canvas),
            Some(Bounds::new(5.0, 185.0, 25.0, 205.0))
        );
    }

    #[test]
    fn test_right_wall_and_ceiling_bounce() {
        let mut canvas = canvas();
        let mut ball = Ball::spawn(&mut canvas, Vec2::new(600.0, 10.0), 5.0, BallEffect::Fire);
        ball.direction = Vec2::new(1.0, -1.0);

        ball.update(&mut canvas);
        assert_eq!(ball.direction, Vec2::new(-1.0, 1.0));
        assert_eq!(ball.position(&canvas).map(|b| b.center()), Some(Vec2::new(595.0, 15.0)));
    }

    #[test]
    fn test_bottom_is_not_a_wall() {
        let mut canvas = canvas();
        let mut ball = Ball::spawn(&mut canvas, Vec2::new(300.0, 395.0), 5.0, BallEffect::Fire);
        ball.direction = Vec2::new(1.0, 1.0);

        ball.update(&mut canvas);
        assert_eq!(ball.direction, Vec2::new(1.0, 1.0));
        assert!(ball.position(&canvas).unwrap().bottom() >= PLAY_HEIGHT);
    }

    #[test]
    fn test_paddle_center_hit_flips_vertical() {
        let mut canvas = canvas();
        // Ball midpoint x = 400, paddle spans 350..420
        let mut ball = Ball::spawn(&mut canvas, Vec2::new(400.0, 315.0), 5.0, BallEffect::Fire);
        ball.direction = Vec2::new(-1.0, 1.0);
        let paddle = collider(ColliderKind::Paddle, Bounds::new(350.0, 321.0, 420.0, 331.0));

        ball.collide(&canvas, &[paddle]);
        assert_eq!(ball.direction, Vec2::new(-1.0, -1.0));
    }

    #[test]
    fn test_paddle_right_edge_forces_right() {
        let mut canvas = canvas();
        // Ball midpoint x = 430, paddle right edge = 420
        let mut ball = Ball::spawn(&mut canvas, Vec2::new(430.0, 320.0), 5.0, BallEffect::Fire);
        ball.direction = Vec2::new(-1.0, 1.0);
        let paddle = collider(ColliderKind::Paddle, Bounds::new(350.0, 321.0, 420.0, 331.0));

        ball.collide(&canvas, &[paddle]);
        assert_eq!(ball.direction, Vec2::new(1.0, 1.0));
    }

    #[test]
    fn test_paddle_left_edge_forces_left() {
        let mut canvas = canvas();
        let mut ball = Ball::spawn(&mut canvas, Vec2::new(345.0, 320.0), 5.0, BallEffect::Fire);
        ball.direction = Vec2::new(1.0, 1.0);
        let paddle = collider(ColliderKind::Paddle, Bounds::new(350.0, 321.0, 420.0, 331.0));

        ball.collide(&canvas, &[paddle]);
        assert_eq!(ball.direction, Vec2::new(-1.0, 1.0));
    }

    #[test]
    fn test_lone_brick_flips_vertical_even_off_center() {
        let mut canvas = canvas();
        // Midpoint right of the brick's right edge still reflects vertically
        let mut ball = Ball::spawn(&mut canvas, Vec2::new(130.0, 75.0), 5.0, BallEffect::Fire);
        ball.direction = Vec2::new(-1.0, -1.0);
        let brick = collider(ColliderKind::Brick, Bounds::new(42.5, 60.0, 117.5, 80.0));

        ball.collide(&canvas, &[brick]);
        assert_eq!(ball.direction, Vec2::new(-1.0, 1.0));
    }

    #[test]
    fn test_multiple_overlaps_flip_vertical() {
        let mut canvas = canvas();
        let mut ball = Ball::spawn(&mut canvas, Vec2::new(117.5, 90.0), 5.0, BallEffect::Fire);
        ball.direction = Vec2::new(1.0, -1.0);
        let a = collider(ColliderKind::Brick, Bounds::new(42.5, 60.0, 117.5, 80.0));
        let b = collider(ColliderKind::Brick, Bounds::new(117.5, 60.0, 192.5, 80.0));

        ball.collide(&canvas, &[a, b]);
        assert_eq!(ball.direction, Vec2::new(1.0, 1.0));
    }

    #[test]
    fn test_no_overlap_keeps_direction() {
        let mut canvas = canvas();
        let mut ball = Ball::spawn(&mut canvas, Vec2::new(300.0, 200.0), 5.0, BallEffect::Fire);
        ball.collide(&canvas, &[]);
        assert_eq!(ball.direction, Vec2::new(1.0, -1.0));
    }

    #[test]
    fn test_spark_lifetime() {
        let mut canvas = canvas();
        let mut rng = Pcg32::seed_from_u64(7);
        let mut spark =
            BallEffect::Snow.spawn_spark(&mut canvas, Vec2::new(50.0, 50.0), 2, &mut rng);
        let shape = spark.entity.shape();
        assert_eq!(canvas.get(shape).map(|s| s.fill), Some(Color(0xADD8E6)));
        assert_eq!(canvas.get(shape).and_then(|s| s.outline), None);

        assert!(spark.age(&mut canvas));
        assert!(canvas.contains(shape));
        assert!(!spark.age(&mut canvas));
        assert!(!canvas.contains(shape));
    }

    proptest! {
        #[test]
        fn prop_wall_bounces_keep_ball_in_play_area(
            x in BALL_RADIUS..(PLAY_WIDTH - BALL_RADIUS),
            y in BALL_RADIUS..PLAY_HEIGHT,
            dx in prop::bool::ANY,
            speed in 1u32..10,
            steps in 1usize..400,
        ) {
            let mut canvas = canvas();
            let mut ball = Ball::spawn(&mut canvas, Vec2::new(x, y), speed as f32, BallEffect::Fire);
            ball.direction.x = if dx { 1.0 } else { -1.0 };

            for _ in 0..steps {
                ball.update(&mut canvas);
                let center = ball.position(&canvas).unwrap().center();
                prop_assert!(center.x >= 0.0 && center.x <= PLAY_WIDTH);
                prop_assert!(center.y >= 0.0);
                prop_assert!(ball.direction.x.abs() == 1.0 && ball.direction.y.abs() == 1.0);
            }
        }
    }
}

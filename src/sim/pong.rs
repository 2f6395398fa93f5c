//! Pong entities: ball, paddles, walls
//!
//! Positions are in screen pixels and everything moves a fixed amount per
//! tick. There is no dt; frame pacing is the host loop's job.

use glam::Vec2;
use rand::Rng;

use crate::geometry::Rect;
use crate::renderer::{Color, RenderTarget};

/// Largest bounce angle off a paddle (radians)
pub const MAX_BOUNCE_ANGLE: f32 = 1.2;

pub const BALL_SPEED: f32 = 15.0;
pub const BALL_SIZE: f32 = 10.0;

pub const PADDLE_SPEED: f32 = 10.0;
pub const PADDLE_WIDTH: f32 = 10.0;
pub const PADDLE_HEIGHT: f32 = 70.0;

pub const WALL_THICKNESS: f32 = 5.0;

/// Which side of the court
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
        }
    }
}

/// Bounce angle for a ball touching a paddle.
///
/// Linear in the offset between the contact point and the paddle center,
/// clamped to ±`MAX_BOUNCE_ANGLE`. The right paddle's angle is mirrored
/// (π − angle) so the ball heads back left.
pub fn bounce_angle(contact_y: f32, paddle_top: f32, paddle_height: f32, side: Side) -> f32 {
    let half = paddle_height / 2.0;
    let offset = contact_y - paddle_top - half;
    let mut angle = (MAX_BOUNCE_ANGLE * offset / half).clamp(-MAX_BOUNCE_ANGLE, MAX_BOUNCE_ANGLE);
    if angle.is_nan() {
        angle = 0.0;
    }
    match side {
        Side::Left => angle,
        Side::Right => std::f32::consts::PI - angle,
    }
}

/// The ball
#[derive(Debug, Clone)]
pub struct Ball {
    /// Center position
    pub pos: Vec2,
    /// Displacement per tick
    pub vel: Vec2,
    pub speed: f32,
    pub size: f32,
    pub color: Color,
    /// Court center the ball is served from
    home: Vec2,
}

impl Ball {
    pub fn new(home: Vec2, color: Color) -> Self {
        Self {
            pos: home,
            vel: Vec2::ZERO,
            speed: BALL_SPEED,
            size: BALL_SIZE,
            color,
            home,
        }
    }

    /// Return to the court center and serve horizontally toward `toward`
    pub fn serve(&mut self, toward: Side) {
        self.pos = self.home;
        self.vel = match toward {
            Side::Left => Vec2::new(-self.speed, 0.0),
            Side::Right => Vec2::new(self.speed, 0.0),
        };
    }

    /// Serve toward a random side
    pub fn serve_random(&mut self, rng: &mut impl Rng) {
        let side = if rng.random_bool(0.5) {
            Side::Left
        } else {
            Side::Right
        };
        self.serve(side);
    }

    pub fn advance(&mut self) {
        self.pos += self.vel;
    }

    pub fn rect(&self) -> Rect {
        Rect::from_center(self.pos, Vec2::splat(self.size))
    }

    /// Place the ball at `x` and send it off at `angle`
    pub fn redirect(&mut self, x: f32, angle: f32) {
        self.pos.x = x;
        self.vel = Vec2::new(angle.cos(), angle.sin()) * self.speed;
    }

    pub fn draw(&self, target: &mut dyn RenderTarget) {
        target.draw_circle(self.color, self.pos.round(), self.size / 2.0);
    }
}

/// A player paddle
#[derive(Debug, Clone)]
pub struct Paddle {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    pub speed: f32,
    pub color: Color,
    /// y of the top edge when centered vertically
    rest_y: f32,
}

impl Paddle {
    /// Paddle at horizontal position `x`, vertically centered in a court of
    /// height `court_height`
    pub fn new(x: f32, court_height: f32, color: Color) -> Self {
        let rest_y = (court_height / 2.0 - PADDLE_HEIGHT / 2.0).floor();
        Self {
            pos: Vec2::new(x, rest_y),
            size: Vec2::new(PADDLE_WIDTH, PADDLE_HEIGHT),
            speed: PADDLE_SPEED,
            color,
            rest_y,
        }
    }

    pub fn reset(&mut self) {
        self.pos.y = self.rest_y;
    }

    pub fn up(&mut self) {
        self.pos.y -= self.speed;
    }

    pub fn down(&mut self) {
        self.pos.y += self.speed;
    }

    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.size)
    }

    /// Where the ball leaves from and at which angle after touching this
    /// paddle. The ball is pushed just outside the paddle face.
    pub fn bounce(&self, ball: &Ball, side: Side) -> (f32, f32) {
        let angle = bounce_angle(ball.pos.y, self.pos.y, self.size.y, side);
        let x = match side {
            Side::Left => self.rect().right() + ball.size / 2.0 + 1.0,
            Side::Right => self.rect().left() - ball.size / 2.0 - 1.0,
        };
        (x, angle)
    }

    pub fn draw(&self, target: &mut dyn RenderTarget) {
        target.fill_rect(self.color, self.rect());
    }
}

/// Horizontal wall spanning the court
#[derive(Debug, Clone)]
pub struct Wall {
    pub y: f32,
    pub width: f32,
    pub color: Color,
}

impl Wall {
    pub fn new(y: f32, width: f32, color: Color) -> Self {
        Self { y, width, color }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(0.0, self.y, self.width, WALL_THICKNESS)
    }

    pub fn draw(&self, target: &mut dyn RenderTarget) {
        target.fill_rect(self.color, self.rect());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::palette;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;
    use std::f32::consts::PI;

    #[test]
    fn test_bounce_angle_center_is_flat() {
        assert_eq!(bounce_angle(135.0, 100.0, 70.0, Side::Left), 0.0);
        assert!((bounce_angle(135.0, 100.0, 70.0, Side::Right) - PI).abs() < 1e-6);
    }

    #[test]
    fn test_bounce_angle_edges_clamped() {
        // Bottom edge of the paddle
        assert!((bounce_angle(170.0, 100.0, 70.0, Side::Left) - MAX_BOUNCE_ANGLE).abs() < 1e-6);
        // Far above the paddle still clamps
        assert_eq!(bounce_angle(-500.0, 100.0, 70.0, Side::Left), -MAX_BOUNCE_ANGLE);
        // Right side is mirrored
        let right = bounce_angle(-500.0, 100.0, 70.0, Side::Right);
        assert!((right - (PI + MAX_BOUNCE_ANGLE)).abs() < 1e-6);
    }

    #[test]
    fn test_redirect_keeps_speed() {
        let mut ball = Ball::new(Vec2::new(100.0, 100.0), palette::RED);
        ball.redirect(50.0, 0.7);
        assert_eq!(ball.pos.x, 50.0);
        assert!((ball.vel.length() - BALL_SPEED).abs() < 1e-4);
    }

    #[test]
    fn test_serve_direction() {
        let mut ball = Ball::new(Vec2::new(100.0, 100.0), palette::RED);
        ball.pos = Vec2::new(3.0, 4.0);
        ball.serve(Side::Left);
        assert_eq!(ball.pos, Vec2::new(100.0, 100.0));
        assert_eq!(ball.vel, Vec2::new(-BALL_SPEED, 0.0));

        let mut rng = Pcg32::seed_from_u64(1);
        ball.serve_random(&mut rng);
        assert_eq!(ball.vel.y, 0.0);
        assert_eq!(ball.vel.x.abs(), BALL_SPEED);
    }

    #[test]
    fn test_paddle_moves_and_resets() {
        let mut paddle = Paddle::new(8.0, 800.0, palette::GREEN);
        assert_eq!(paddle.pos.y, 365.0);
        paddle.up();
        paddle.up();
        assert_eq!(paddle.pos.y, 345.0);
        paddle.down();
        assert_eq!(paddle.pos.y, 355.0);
        paddle.reset();
        assert_eq!(paddle.pos.y, 365.0);
    }

    #[test]
    fn test_bounce_pushes_ball_outside() {
        let paddle = Paddle::new(500.0, 800.0, palette::GREEN);
        let mut ball = Ball::new(Vec2::new(498.0, 400.0), palette::RED);
        let (x, angle) = paddle.bounce(&ball, Side::Right);
        ball.redirect(x, angle);
        assert!(!ball.rect().intersects(&paddle.rect()));
        assert!(ball.vel.x < 0.0);
    }
}

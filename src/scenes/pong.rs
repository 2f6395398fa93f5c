//! Two-player Pong match
//!
//! Left player: W/S. Right player: Up/Down. First to the win score takes the
//! match; every other point goes through a short countdown over a freeze
//! frame of the point that just ended.

use glam::Vec2;
use log::{debug, info};
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::platform::{FrameInput, Key};
use crate::renderer::{RenderTarget, palette};
use crate::scene::{
    CountdownSpec, Scene, SceneContext, SceneKind, SceneSpec, TickResult, Transition, capture,
    names,
};
use crate::sim::{Ball, Paddle, Side, Wall};
use crate::sim::pong::PADDLE_WIDTH;
use crate::ui::GameText;

/// Gap between a paddle and its side of the screen
const X_BUFFER: f32 = 8.0;
/// Space above the top wall reserved for the scores
const SCORE_BAND: f32 = 40.0;
const WALL_MARGIN: f32 = 10.0;
const SCORE_FONT_SIZE: f32 = 40.0;
const SCORE_Y: f32 = 5.0;

/// Lines shown between points
pub const POINT_COUNTDOWN: [&str; 3] = ["3", "2", "1"];

pub struct PongMatch {
    left: Paddle,
    right: Paddle,
    ball: Ball,
    top: Wall,
    bottom: Wall,
    left_text: GameText,
    right_text: GameText,
    score_left: u32,
    score_right: u32,
    win_score: u32,
    countdown_frames: u32,
    viewport: Vec2,
}

impl PongMatch {
    pub fn new(ctx: &mut SceneContext) -> Self {
        let viewport = ctx.viewport;
        let (width, height) = (viewport.x, viewport.y);
        let mut rng = Pcg32::seed_from_u64(ctx.next_seed());

        let mut ball = Ball::new((viewport / 2.0).floor(), palette::RED);
        ball.serve_random(&mut rng);

        Self {
            left: Paddle::new(X_BUFFER, height, palette::GREEN),
            right: Paddle::new(width - X_BUFFER - PADDLE_WIDTH, height, palette::GREEN),
            ball,
            top: Wall::new(WALL_MARGIN + SCORE_BAND, width, palette::WHITE),
            bottom: Wall::new(height - WALL_MARGIN, width, palette::WHITE),
            left_text: GameText::new(
                "0",
                Vec2::new(X_BUFFER, SCORE_Y),
                palette::GREEN,
                SCORE_FONT_SIZE,
            ),
            right_text: GameText::new(
                "0",
                Vec2::new(width - SCORE_FONT_SIZE * 2.0, SCORE_Y),
                palette::GREEN,
                SCORE_FONT_SIZE,
            ),
            score_left: 0,
            score_right: 0,
            win_score: ctx.settings.pong_win_score,
            countdown_frames: ctx.settings.countdown_frames_per_line,
            viewport,
        }
    }

    pub fn scores(&self) -> (u32, u32) {
        (self.score_left, self.score_right)
    }

    /// Move a paddle from its up/down keys; up wins if both are held
    fn steer(paddle: &mut Paddle, input: &FrameInput, up: Key, down: Key) {
        if input.is_down(up) {
            paddle.up();
        } else if input.is_down(down) {
            paddle.down();
        }
    }

    /// End the rally in `scorer`'s favor
    fn point_scored(&mut self, scorer: Side) -> Transition {
        match scorer {
            Side::Left => {
                self.score_left += 1;
                self.left_text.set_text(self.score_left.to_string());
            }
            Side::Right => {
                self.score_right += 1;
                self.right_text.set_text(self.score_right.to_string());
            }
        }
        debug!("Point to {} ({} - {})", scorer.as_str(), self.score_left, self.score_right);

        let freeze_frame = capture(&*self, self.viewport);
        self.ball.serve(scorer);
        self.left.reset();
        self.right.reset();

        if self.score_left >= self.win_score || self.score_right >= self.win_score {
            info!("Pong match over: {} - {}", self.score_left, self.score_right);
            return Transition::to(
                names::PONG_END,
                SceneSpec::PongEnd {
                    left: self.score_left,
                    right: self.score_right,
                },
            )
            .deleting_current();
        }

        let countdown = CountdownSpec {
            background: freeze_frame,
            lines: POINT_COUNTDOWN.iter().map(|s| s.to_string()).collect(),
            frames_per_line: self.countdown_frames,
            next: Box::new(Transition::resume(names::PONG_MATCH).deleting_current()),
        };
        Transition::fresh(names::COUNTDOWN, SceneSpec::Countdown(countdown))
    }
}

impl Scene for PongMatch {
    fn kind(&self) -> SceneKind {
        SceneKind::PongMatch
    }

    fn tick(&mut self, input: &FrameInput) -> TickResult {
        input.check_quit()?;

        Self::steer(&mut self.left, input, Key::W, Key::S);
        Self::steer(&mut self.right, input, Key::Up, Key::Down);

        self.ball.advance();
        if self.ball.pos.x < 0.0 {
            return Ok(Some(self.point_scored(Side::Right)));
        } else if self.ball.pos.x > self.viewport.x {
            return Ok(Some(self.point_scored(Side::Left)));
        }

        if self.ball.pos.y < self.top.y {
            self.ball.pos.y = self.top.y + 1.0;
            self.ball.vel.y = -self.ball.vel.y;
        } else if self.ball.pos.y > self.bottom.y {
            self.ball.pos.y = self.bottom.y - 1.0;
            self.ball.vel.y = -self.ball.vel.y;
        }

        let ball_rect = self.ball.rect();
        if ball_rect.intersects(&self.left.rect()) {
            let (x, angle) = self.left.bounce(&self.ball, Side::Left);
            self.ball.redirect(x, angle);
        } else if ball_rect.intersects(&self.right.rect()) {
            let (x, angle) = self.right.bounce(&self.ball, Side::Right);
            self.ball.redirect(x, angle);
        }

        Ok(None)
    }

    fn draw(&self, target: &mut dyn RenderTarget) {
        self.top.draw(target);
        self.bottom.draw(target);
        self.left.draw(target);
        self.right.draw(target);
        self.ball.draw(target);
        self.left_text.draw(target);
        self.right_text.draw(target);
    }
}

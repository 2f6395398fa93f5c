//! Snake matches
//!
//! Single: W/A/S/D or arrows, play until you crash.
//! Versus: player one on W/A/S/D, player two on the arrows, rounds until one
//! player has enough wins. Every versus frame is recorded so the end of a
//! round can be shown again as an instant replay.

use glam::{IVec2, Vec2};
use log::{debug, info};
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::platform::{FrameInput, Key};
use crate::renderer::{RenderTarget, palette};
use crate::scene::{
    CountdownSpec, ReplaySpec, Scene, SceneContext, SceneKind, SceneSpec, TickResult, Transition,
    capture, names,
};
use crate::settings::SnakeSpeed;
use crate::sim::{BLOCK_SIZE, Food, Grid, Heading, ReplayBuffer, Snake};
use crate::ui::GameText;

const HUD_FONT_SIZE: f32 = 40.0;

/// Steering keys, highest priority first
type Controls = [(Key, Heading)];

const WASD: &Controls = &[
    (Key::W, Heading::Up),
    (Key::S, Heading::Down),
    (Key::A, Heading::Left),
    (Key::D, Heading::Right),
];

const ARROWS: &Controls = &[
    (Key::Up, Heading::Up),
    (Key::Down, Heading::Down),
    (Key::Left, Heading::Left),
    (Key::Right, Heading::Right),
];

/// Single player accepts either key set
const EITHER: &Controls = &[
    (Key::W, Heading::Up),
    (Key::Up, Heading::Up),
    (Key::S, Heading::Down),
    (Key::Down, Heading::Down),
    (Key::A, Heading::Left),
    (Key::Left, Heading::Left),
    (Key::D, Heading::Right),
    (Key::Right, Heading::Right),
];

/// Heading requested by the first held key in priority order
fn requested_heading(input: &FrameInput, controls: &Controls) -> Option<Heading> {
    controls
        .iter()
        .find(|(key, _)| input.is_down(*key))
        .map(|(_, heading)| *heading)
}

/// Food at a random free cell, never where the last pellet was
fn spawn_food(grid: &Grid, rng: &mut Pcg32, snakes: &[&Snake], consumed: Option<IVec2>) -> Food {
    let cell = grid.random_cell(rng, |c| {
        Some(c) == consumed || snakes.iter().any(|s| s.occupies(c))
    });
    Food::new(cell, palette::RED)
}

// ---------------------------------------------------------------------------
// Single player
// ---------------------------------------------------------------------------

pub struct SnakeSingle {
    grid: Grid,
    snake: Snake,
    food: Food,
    score: u32,
    score_text: GameText,
    speed: SnakeSpeed,
    rng: Pcg32,
}

impl SnakeSingle {
    pub fn new(speed: SnakeSpeed, ctx: &mut SceneContext) -> Self {
        let grid = Grid::fit(ctx.viewport, BLOCK_SIZE);
        let mut rng = Pcg32::seed_from_u64(ctx.next_seed());
        let snake = Snake::new(grid.center(), None, palette::GREEN);
        let food = spawn_food(&grid, &mut rng, &[&snake], None);

        Self {
            grid,
            snake,
            food,
            score: 0,
            score_text: GameText::new("0", Vec2::new(8.0, 5.0), palette::WHITE, HUD_FONT_SIZE),
            speed,
            rng,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> &Food {
        &self.food
    }

    fn lose(&self) -> Transition {
        info!("Snake over with score {}", self.score);
        Transition::to(names::SNAKE_END, SceneSpec::SnakeEnd { score: self.score })
            .deleting_current()
    }
}

impl Scene for SnakeSingle {
    fn kind(&self) -> SceneKind {
        SceneKind::SnakeSingle
    }

    fn tick(&mut self, input: &FrameInput) -> TickResult {
        input.check_quit()?;

        if let Some(heading) = requested_heading(input, EITHER) {
            self.snake.steer(heading);
        }

        // Stationary until the first key press
        let Some(next) = self.snake.next_head() else {
            return Ok(None);
        };
        let grow = next == self.food.cell;
        self.snake.advance(grow);

        if !self.grid.contains(self.snake.head) || self.snake.bites_itself() {
            return Ok(Some(self.lose()));
        }

        if grow {
            self.score += 1;
            self.score_text.set_text(self.score.to_string());
            self.food = spawn_food(&self.grid, &mut self.rng, &[&self.snake], Some(next));
        }
        Ok(None)
    }

    fn draw(&self, target: &mut dyn RenderTarget) {
        self.food.draw(&self.grid, target);
        self.snake.draw(&self.grid, target);
        self.score_text.draw(target);
    }

    fn frame_rate(&self) -> u32 {
        self.speed.frame_rate()
    }
}

// ---------------------------------------------------------------------------
// Versus
// ---------------------------------------------------------------------------

pub struct SnakeDouble {
    grid: Grid,
    players: [Snake; 2],
    food: Food,
    /// Rounds won per player
    wins: [u32; 2],
    win_texts: [GameText; 2],
    replay: ReplayBuffer,
    speed: SnakeSpeed,
    win_rounds: u32,
    countdown_frames: u32,
    viewport: Vec2,
    rng: Pcg32,
}

impl SnakeDouble {
    pub fn new(speed: SnakeSpeed, ctx: &mut SceneContext) -> Self {
        let viewport = ctx.viewport;
        let grid = Grid::fit(viewport, BLOCK_SIZE);
        let mut rng = Pcg32::seed_from_u64(ctx.next_seed());
        let players = Self::starting_players(&grid);
        let food = spawn_food(&grid, &mut rng, &[&players[0], &players[1]], None);

        let mut scene = Self {
            grid,
            players,
            food,
            wins: [0, 0],
            win_texts: [
                GameText::new("", Vec2::new(8.0, 5.0), palette::GREEN, HUD_FONT_SIZE),
                GameText::new(
                    "",
                    Vec2::new(viewport.x - HUD_FONT_SIZE * 4.0, 5.0),
                    palette::BLUE,
                    HUD_FONT_SIZE,
                ),
            ],
            replay: ReplayBuffer::default(),
            speed,
            win_rounds: ctx.settings.snake_win_rounds.max(1),
            countdown_frames: ctx.settings.countdown_frames_per_line,
            viewport,
            rng,
        };
        scene.update_win_texts();
        scene
    }

    /// Player one upper left heading right, player two lower right heading left
    fn starting_players(grid: &Grid) -> [Snake; 2] {
        [
            Snake::new(
                IVec2::new(grid.cols / 4, grid.rows / 3),
                Some(Heading::Right),
                palette::GREEN,
            ),
            Snake::new(
                IVec2::new(grid.cols * 3 / 4, grid.rows * 2 / 3),
                Some(Heading::Left),
                palette::BLUE,
            ),
        ]
    }

    pub fn wins(&self) -> [u32; 2] {
        self.wins
    }

    pub fn players(&self) -> &[Snake; 2] {
        &self.players
    }

    /// Frames recorded in the current round
    pub fn recorded_frames(&self) -> usize {
        self.replay.len()
    }

    fn update_win_texts(&mut self) {
        for (i, text) in self.win_texts.iter_mut().enumerate() {
            text.set_text(format!("P{}: {}", i + 1, self.wins[i]));
        }
    }

    /// True if player `i` crashed this tick: out of bounds, into its own
    /// tail, or into the other player's tail
    fn crashed(&self, i: usize) -> bool {
        let me = &self.players[i];
        let other = &self.players[1 - i];
        !self.grid.contains(me.head) || me.bites_itself() || other.tail_contains(me.head)
    }

    fn reset_round(&mut self) {
        self.players = Self::starting_players(&self.grid);
        self.food = spawn_food(
            &self.grid,
            &mut self.rng,
            &[&self.players[0], &self.players[1]],
            None,
        );
        self.update_win_texts();
    }

    /// Hand the round's recording to a replay and line up what follows it
    fn round_over(&mut self, winner: usize) -> Transition {
        self.wins[winner] += 1;
        let round = self.wins[0] + self.wins[1];
        info!(
            "Player {} takes round {} ({} - {})",
            winner + 1,
            round,
            self.wins[0],
            self.wins[1]
        );

        let buffer = std::mem::take(&mut self.replay);
        let frame_rate = self.speed.frame_rate();

        if self.wins[winner] >= self.win_rounds {
            let summary = Transition::to(
                names::SNAKE_DOUBLE_END,
                SceneSpec::SnakeDoubleEnd { wins: self.wins },
            )
            .deleting_current();
            let replay = ReplaySpec {
                buffer,
                frame_rate,
                next: Box::new(summary),
            };
            return Transition::fresh(names::REPLAY, SceneSpec::Replay(replay)).deleting_current();
        }

        self.reset_round();
        let countdown = CountdownSpec {
            background: capture(&*self, self.viewport),
            lines: vec![format!("Round {}", round + 1), "Go!".to_string()],
            frames_per_line: self.countdown_frames,
            next: Box::new(Transition::resume(names::SNAKE_DOUBLE).deleting_current()),
        };
        let replay = ReplaySpec {
            buffer,
            frame_rate,
            next: Box::new(
                Transition::fresh(names::COUNTDOWN, SceneSpec::Countdown(countdown))
                    .deleting_current(),
            ),
        };
        Transition::fresh(names::REPLAY, SceneSpec::Replay(replay))
    }
}

impl Scene for SnakeDouble {
    fn kind(&self) -> SceneKind {
        SceneKind::SnakeDouble
    }

    fn tick(&mut self, input: &FrameInput) -> TickResult {
        input.check_quit()?;

        for (snake, controls) in self.players.iter_mut().zip([WASD, ARROWS]) {
            if let Some(heading) = requested_heading(input, controls) {
                snake.steer(heading);
            }
        }

        // Player one gets the pellet if both heads reach it together
        let mut eaten = None;
        for snake in &mut self.players {
            let grow = eaten.is_none() && snake.next_head() == Some(self.food.cell);
            if grow {
                eaten = Some(self.food.cell);
            }
            snake.advance(grow);
        }
        if let Some(cell) = eaten {
            self.food = spawn_food(
                &self.grid,
                &mut self.rng,
                &[&self.players[0], &self.players[1]],
                Some(cell),
            );
        }

        let frame = capture(&*self, self.viewport);
        self.replay.record(frame);

        // First crash found decides the round; simultaneous crashes go
        // against player one
        if let Some(loser) = (0..2).find(|&i| self.crashed(i)) {
            debug!("Player {} crashed", loser + 1);
            return Ok(Some(self.round_over(1 - loser)));
        }
        Ok(None)
    }

    fn draw(&self, target: &mut dyn RenderTarget) {
        self.food.draw(&self.grid, target);
        for snake in &self.players {
            snake.draw(&self.grid, target);
        }
        for text in &self.win_texts {
            text.draw(target);
        }
    }

    fn frame_rate(&self) -> u32 {
        self.speed.frame_rate()
    }
}

//! Menus and end screens
//!
//! A menu is a centered text block plus buttons. Each button carries a
//! `MenuAction`; the menu resolves it against its own state (the versus speed
//! selector) into a transition.

use glam::Vec2;
use log::debug;

use crate::platform::{FrameInput, InputEvent, Key};
use crate::renderer::{RenderTarget, palette};
use crate::scene::{Scene, SceneKind, SceneSpec, TickResult, Transition, names};
use crate::settings::SnakeSpeed;
use crate::sim::Side;
use crate::ui::{Button, TextBlock};

/// What pressing a menu button (or Enter on an end screen) does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    OpenPongMenu,
    OpenSnakeMenu,
    StartPong,
    StartSnake(SnakeSpeed),
    /// Step the versus speed selector; stays on the menu
    CycleVersusSpeed,
    StartVersus,
    /// Back to a fresh main menu, dropping every other scene
    BackToMainMenu,
    BackToPongMenu,
    BackToSnakeMenu,
}

/// Menu or end screen
pub struct Menu {
    kind: SceneKind,
    text: TextBlock,
    buttons: Vec<(Button, MenuAction)>,
    /// Action bound to Enter (end screens)
    on_enter: Option<MenuAction>,
    versus_speed: SnakeSpeed,
}

impl Menu {
    fn new(kind: SceneKind, text: TextBlock) -> Self {
        Self {
            kind,
            text,
            buttons: Vec::new(),
            on_enter: None,
            versus_speed: SnakeSpeed::default(),
        }
    }

    fn with_button(mut self, button: Button, action: MenuAction) -> Self {
        self.buttons.push((button, action));
        self
    }

    fn on_enter(mut self, action: MenuAction) -> Self {
        self.on_enter = Some(action);
        self
    }

    pub fn main(viewport: Vec2) -> Self {
        Self::new(SceneKind::MainMenu, TextBlock::new(["DARKADE"], palette::GREEN))
            .with_button(
                Button::new("PyPong").align(2, 0, 6, 5, viewport),
                MenuAction::OpenPongMenu,
            )
            .with_button(
                Button::new("Snake").align(2, 1, 6, 5, viewport),
                MenuAction::OpenSnakeMenu,
            )
    }

    pub fn pong(viewport: Vec2) -> Self {
        Self::new(SceneKind::PongMenu, TextBlock::new(["PyPong"], palette::GREEN))
            .with_button(
                Button::new("play").align(2, 0, 6, 5, viewport),
                MenuAction::StartPong,
            )
            .with_button(
                Button::new("back").align(2, 1, 6, 5, viewport),
                MenuAction::BackToMainMenu,
            )
    }

    pub fn snake(viewport: Vec2) -> Self {
        let speed = SnakeSpeed::default();
        Self::new(SceneKind::SnakeMenu, TextBlock::new(["SNAKE"], palette::GREEN))
            .with_button(
                Button::new("Slow").align(3, 0, 6, 4, viewport),
                MenuAction::StartSnake(SnakeSpeed::Slow),
            )
            .with_button(
                Button::new("Medium").align(3, 1, 6, 4, viewport),
                MenuAction::StartSnake(SnakeSpeed::Medium),
            )
            .with_button(
                Button::new("Fast").align(3, 2, 6, 4, viewport),
                MenuAction::StartSnake(SnakeSpeed::Fast),
            )
            .with_button(
                Button::new(speed_label(speed)).align(3, 0, 6, 5, viewport),
                MenuAction::CycleVersusSpeed,
            )
            .with_button(
                Button::new("Versus").align(3, 1, 6, 5, viewport),
                MenuAction::StartVersus,
            )
            .with_button(
                Button::new("Back").align(3, 2, 6, 5, viewport),
                MenuAction::BackToMainMenu,
            )
    }

    pub fn pong_end(left: u32, right: u32) -> Self {
        let winner = if left > right { Side::Left } else { Side::Right };
        let lines = [
            format!("{} side sucked less than the other side", winner.as_str()),
            format!("Final score: {} - {}", left, right),
            "press enter to continue".to_string(),
        ];
        Self::new(SceneKind::PongEnd, TextBlock::new(lines, palette::WHITE))
            .on_enter(MenuAction::BackToPongMenu)
    }

    pub fn snake_end(score: u32) -> Self {
        let lines = [
            "LOSER!".to_string(),
            format!("Score: {}", score),
            "Press ENTER to continue".to_string(),
        ];
        Self::new(SceneKind::SnakeEnd, TextBlock::new(lines, palette::WHITE))
            .on_enter(MenuAction::BackToSnakeMenu)
    }

    pub fn snake_versus_end(wins: [u32; 2]) -> Self {
        let winner = if wins[0] >= wins[1] { 1 } else { 2 };
        let lines = [
            format!("Player {} wins!", winner),
            format!("Rounds: {} - {}", wins[0], wins[1]),
            "Press ENTER to continue".to_string(),
        ];
        Self::new(SceneKind::SnakeDoubleEnd, TextBlock::new(lines, palette::WHITE))
            .on_enter(MenuAction::BackToSnakeMenu)
    }

    /// Speed the Versus button will start with
    pub fn versus_speed(&self) -> SnakeSpeed {
        self.versus_speed
    }

    pub fn buttons(&self) -> impl Iterator<Item = &Button> {
        self.buttons.iter().map(|(b, _)| b)
    }

    /// Action picked by one input event, if any
    fn select(&self, event: &InputEvent) -> Option<MenuAction> {
        match *event {
            InputEvent::KeyUp(Key::Enter) if self.on_enter.is_some() => self.on_enter,
            InputEvent::KeyUp(key) => key
                .menu_index()
                .and_then(|i| self.buttons.get(i))
                .map(|(_, action)| *action),
            InputEvent::MouseUp(pos) => self
                .buttons
                .iter()
                .find(|(b, _)| b.contains(pos))
                .map(|(_, action)| *action),
            InputEvent::Quit => None,
        }
    }

    fn resolve(&mut self, action: MenuAction) -> Option<Transition> {
        match action {
            MenuAction::OpenPongMenu => Some(Transition::to(names::PONG_MENU, SceneSpec::PongMenu)),
            MenuAction::OpenSnakeMenu => {
                Some(Transition::to(names::SNAKE_MENU, SceneSpec::SnakeMenu))
            }
            MenuAction::StartPong => {
                Some(Transition::fresh(names::PONG_MATCH, SceneSpec::PongMatch))
            }
            MenuAction::StartSnake(speed) => Some(Transition::fresh(
                names::SNAKE_SINGLE,
                SceneSpec::SnakeSingle { speed },
            )),
            MenuAction::CycleVersusSpeed => {
                self.versus_speed = self.versus_speed.next();
                let label = speed_label(self.versus_speed);
                if let Some((button, _)) = self
                    .buttons
                    .iter_mut()
                    .find(|(_, a)| *a == MenuAction::CycleVersusSpeed)
                {
                    button.set_label(label);
                }
                None
            }
            MenuAction::StartVersus => Some(Transition::fresh(
                names::SNAKE_DOUBLE,
                SceneSpec::SnakeDouble {
                    speed: self.versus_speed,
                },
            )),
            MenuAction::BackToMainMenu => {
                Some(Transition::fresh(names::MAIN_MENU, SceneSpec::MainMenu).clearing_all())
            }
            MenuAction::BackToPongMenu => {
                Some(Transition::to(names::PONG_MENU, SceneSpec::PongMenu).deleting_current())
            }
            MenuAction::BackToSnakeMenu => {
                Some(Transition::to(names::SNAKE_MENU, SceneSpec::SnakeMenu).deleting_current())
            }
        }
    }
}

fn speed_label(speed: SnakeSpeed) -> String {
    format!("Speed: {}", speed.as_str())
}

impl Scene for Menu {
    fn kind(&self) -> SceneKind {
        self.kind
    }

    fn tick(&mut self, input: &FrameInput) -> TickResult {
        input.check_quit()?;

        // One selection per frame: the first event that picks something
        let Some(action) = input.events.iter().find_map(|e| self.select(e)) else {
            return Ok(None);
        };
        debug!("{:?} selected {:?}", self.kind, action);
        Ok(self.resolve(action))
    }

    fn draw(&self, target: &mut dyn RenderTarget) {
        self.text.draw(target);
        for button in self.buttons() {
            button.draw(target);
        }
    }
}

//! Instant replay
//!
//! Plays back a moved-in `ReplayBuffer` oldest frame first with a flashing
//! label on top, then hands back the transition it was built with.

use glam::Vec2;
use log::debug;

use crate::platform::FrameInput;
use crate::renderer::{RenderTarget, palette};
use crate::scene::{ReplaySpec, Scene, SceneKind, TickResult, Transition};
use crate::sim::ReplayBuffer;
use crate::ui::GameText;

pub const REPLAY_LABEL: &str = "REPLAY";
/// Label frames on, then the same number off
pub const LABEL_FLASH_FRAMES: u32 = 15;
const LABEL_FONT_SIZE: f32 = 40.0;

pub struct Replay {
    buffer: ReplayBuffer,
    order: Vec<usize>,
    /// Index into `order` of the frame on screen
    position: usize,
    frame_rate: u32,
    label: GameText,
    next: Box<Transition>,
}

impl Replay {
    pub fn new(spec: ReplaySpec) -> Self {
        let ReplaySpec {
            buffer,
            frame_rate,
            next,
        } = spec;
        let order = buffer.playback_order();
        if order.is_empty() {
            debug!("Empty replay buffer, passing through to '{}'", next.target);
        } else {
            debug!("Replaying {} frames at {} fps", order.len(), frame_rate);
        }

        Self {
            buffer,
            order,
            position: 0,
            frame_rate,
            label: GameText::new(
                REPLAY_LABEL,
                Vec2::new(8.0, 5.0),
                palette::RED,
                LABEL_FONT_SIZE,
            )
            .flashing(LABEL_FLASH_FRAMES),
            next,
        }
    }

    /// Buffer slot on screen, None once playback is exhausted
    pub fn current_slot(&self) -> Option<usize> {
        self.order.get(self.position).copied()
    }

    pub fn remaining(&self) -> usize {
        self.order.len().saturating_sub(self.position)
    }
}

impl Scene for Replay {
    fn kind(&self) -> SceneKind {
        SceneKind::Replay
    }

    fn tick(&mut self, input: &FrameInput) -> TickResult {
        input.check_quit()?;

        self.label.tick();
        self.position += 1;
        if self.position >= self.order.len() {
            return Ok(Some((*self.next).clone()));
        }
        Ok(None)
    }

    fn draw(&self, target: &mut dyn RenderTarget) {
        if let Some(image) = self.current_slot().and_then(|slot| self.buffer.frame(slot)) {
            target.blit(image);
        }
        self.label.draw(target);
    }

    fn frame_rate(&self) -> u32 {
        self.frame_rate
    }
}

//! Timed text over a frozen frame

use log::debug;

use crate::platform::FrameInput;
use crate::renderer::{Image, RenderTarget, palette};
use crate::scene::{CountdownSpec, Scene, SceneKind, TickResult, Transition};
use crate::ui::TextBlock;

/// Shows `lines` one after another over `background`, then hands back `next`.
///
/// The first line gets one extra line budget of lead-in.
pub struct Countdown {
    background: Image,
    lines: Vec<String>,
    frames_per_line: u32,
    /// Ticks until `next` is emitted
    total: u32,
    elapsed: u32,
    text: TextBlock,
    next: Box<Transition>,
}

impl Countdown {
    pub fn new(spec: CountdownSpec) -> Self {
        let CountdownSpec {
            background,
            lines,
            frames_per_line,
            next,
        } = spec;

        // Saturates: a huge per-line budget from settings means a long
        // countdown, not an overflow
        let lead_in = if lines.is_empty() { 0 } else { frames_per_line };
        let line_count = u32::try_from(lines.len()).unwrap_or(u32::MAX);
        let total = frames_per_line
            .saturating_mul(line_count)
            .saturating_add(lead_in);
        debug!(
            "Countdown of {} lines, {} ticks, then '{}'",
            lines.len(),
            total,
            next.target
        );

        let text = TextBlock::new(lines.first().cloned(), palette::WHITE);
        Self {
            background,
            lines,
            frames_per_line,
            total,
            elapsed: 0,
            text,
            next,
        }
    }

    /// Line on screen right now
    pub fn current_line(&self) -> Option<&str> {
        let lead_in = self.frames_per_line;
        let index = self.elapsed.saturating_sub(lead_in) / self.frames_per_line.max(1);
        let index = (index as usize).min(self.lines.len().saturating_sub(1));
        self.lines.get(index).map(String::as_str)
    }

    pub fn elapsed(&self) -> u32 {
        self.elapsed
    }
}

impl Scene for Countdown {
    fn kind(&self) -> SceneKind {
        SceneKind::Countdown
    }

    fn tick(&mut self, input: &FrameInput) -> TickResult {
        input.check_quit()?;

        self.elapsed = self.elapsed.saturating_add(1);
        if self.elapsed >= self.total {
            return Ok(Some((*self.next).clone()));
        }
        let line = self.current_line().map(str::to_owned);
        self.text.lines = line.into_iter().collect();
        Ok(None)
    }

    fn draw(&self, target: &mut dyn RenderTarget) {
        target.blit(&self.background);
        self.text.draw(target);
    }
}

//! UI widgets: buttons, centered text blocks, in-game text

use glam::Vec2;

use crate::geometry::Rect;
use crate::renderer::{Color, RenderTarget, palette, text_size};

pub const TEXT_SIZE: f32 = 90.0;
pub const TEXT_LINE_GAP: f32 = 10.0;
pub const BUTTON_TEXT_SIZE: f32 = 70.0;
pub const BUTTON_PADDING: Vec2 = Vec2::new(15.0, 10.0);
pub const BUTTON_LINE_WIDTH: f32 = 5.0;

/// Clickable labelled box
#[derive(Debug, Clone)]
pub struct Button {
    pub label: String,
    pub rect: Rect,
    pub font_size: f32,
    pub text_color: Color,
    pub border_color: Color,
}

impl Button {
    /// Button sized to its label, placed at the origin until aligned
    pub fn new(label: impl Into<String>) -> Self {
        let label = label.into();
        let size = text_size(&label, BUTTON_TEXT_SIZE) + BUTTON_PADDING;
        Self {
            label,
            rect: Rect::from_pos_size(Vec2::ZERO, size),
            font_size: BUTTON_TEXT_SIZE,
            text_color: palette::GREEN,
            border_color: palette::WHITE,
        }
    }

    /// Center the button in cell (`x`, `y`) of a `x_divs` × `y_divs` layout
    /// grid over `viewport`
    pub fn align(mut self, x_divs: u32, x: u32, y_divs: u32, y: u32, viewport: Vec2) -> Self {
        let cell = Vec2::new(viewport.x / x_divs as f32, viewport.y / y_divs as f32);
        let center = Vec2::new(
            cell.x * x as f32 + (cell.x / 2.0).floor(),
            cell.y * y as f32 + (cell.y / 2.0).floor(),
        );
        self.rect = Rect::from_center(center, self.rect.size());
        self
    }

    /// Replace the label, keeping the button centered where it was
    pub fn set_label(&mut self, label: impl Into<String>) {
        let center = self.rect.center();
        self.label = label.into();
        let size = text_size(&self.label, self.font_size) + BUTTON_PADDING;
        self.rect = Rect::from_center(center, size);
    }

    pub fn contains(&self, point: Vec2) -> bool {
        self.rect.contains(point)
    }

    pub fn draw(&self, target: &mut dyn RenderTarget) {
        let text_pos = self.rect.pos() + BUTTON_PADDING / 2.0;
        target.draw_text(&self.label, text_pos, self.text_color, self.font_size);
        target.stroke_rect(self.border_color, self.rect, BUTTON_LINE_WIDTH);
    }
}

/// Lines of text centered on the target
#[derive(Debug, Clone)]
pub struct TextBlock {
    pub lines: Vec<String>,
    pub color: Color,
    pub font_size: f32,
}

impl TextBlock {
    pub fn new(lines: impl IntoIterator<Item = impl Into<String>>, color: Color) -> Self {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            color,
            font_size: TEXT_SIZE,
        }
    }

    pub fn draw(&self, target: &mut dyn RenderTarget) {
        if self.lines.is_empty() {
            return;
        }
        let sizes: Vec<Vec2> = self
            .lines
            .iter()
            .map(|l| text_size(l, self.font_size))
            .collect();
        let height = sizes.iter().map(|s| s.y).sum::<f32>()
            + TEXT_LINE_GAP * (self.lines.len() - 1) as f32;

        let screen = target.size();
        let mut y = (screen.y / 2.0 - height / 2.0).floor();
        for (line, size) in self.lines.iter().zip(&sizes) {
            let x = (screen.x / 2.0 - size.x / 2.0).floor();
            target.draw_text(line, Vec2::new(x, y), self.color, self.font_size);
            y += size.y + TEXT_LINE_GAP;
        }
    }
}

/// Text at a fixed position, optionally flashing on and off
#[derive(Debug, Clone)]
pub struct GameText {
    pub text: String,
    pub pos: Vec2,
    pub color: Color,
    pub font_size: f32,
    /// Frames visible, then the same number hidden
    flash_frames: Option<u32>,
    frame: u32,
}

impl GameText {
    pub fn new(text: impl Into<String>, pos: Vec2, color: Color, font_size: f32) -> Self {
        Self {
            text: text.into(),
            pos,
            color,
            font_size,
            flash_frames: None,
            frame: 0,
        }
    }

    /// Blink with `frames` on, `frames` off
    pub fn flashing(mut self, frames: u32) -> Self {
        self.flash_frames = Some(frames.max(1));
        self
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Advance the flash cadence by one frame
    pub fn tick(&mut self) {
        self.frame = self.frame.wrapping_add(1);
    }

    pub fn is_visible(&self) -> bool {
        match self.flash_frames {
            Some(n) => (self.frame / n) % 2 == 0,
            None => true,
        }
    }

    pub fn draw(&self, target: &mut dyn RenderTarget) {
        if self.is_visible() {
            target.draw_text(&self.text, self.pos, self.color, self.font_size);
        }
    }
}

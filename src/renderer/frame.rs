//! In-memory display list
//!
//! `Frame` records draw commands instead of rasterizing them. It serves as the
//! off-screen target for scene captures and as the surface behind the
//! headless display.

use glam::Vec2;

use super::{Color, DrawCommand, Image, RenderTarget, Renderer, palette};

/// Recorded frame of draw commands
#[derive(Debug, Clone)]
pub struct Frame {
    size: Vec2,
    background: Color,
    commands: Vec<DrawCommand>,
    presented: u64,
}

impl Frame {
    pub fn new(size: Vec2) -> Self {
        Self {
            size,
            background: palette::BLACK,
            commands: Vec::new(),
            presented: 0,
        }
    }

    /// Commands recorded since the last clear
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Number of frames presented so far
    pub fn presented(&self) -> u64 {
        self.presented
    }

    /// Consume the frame, keeping its contents as an image
    pub fn into_image(self) -> Image {
        Image::new(self.size, self.background, self.commands)
    }
}

impl RenderTarget for Frame {
    fn size(&self) -> Vec2 {
        self.size
    }

    fn submit(&mut self, cmd: DrawCommand) {
        self.commands.push(cmd);
    }
}

impl Renderer for Frame {
    fn clear(&mut self, color: Color) {
        self.background = color;
        self.commands.clear();
    }

    fn present(&mut self) {
        self.presented += 1;
    }

    fn snapshot(&self) -> Image {
        Image::new(self.size, self.background, self.commands.clone())
    }
}

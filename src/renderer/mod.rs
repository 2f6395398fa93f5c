//! Rendering contract
//!
//! Scenes never talk to a window. They draw onto whatever `RenderTarget` they
//! are handed: the live display during `SceneManager::render`, or an
//! off-screen `Frame` when a scene captures itself for replay or a countdown
//! background. Everything is recorded as `DrawCommand`s, so a snapshot is just
//! a copy of the command list.

pub mod frame;

pub use frame::Frame;

use glam::Vec2;

use crate::geometry::Rect;

/// RGBA color, components in 0-1
pub type Color = [f32; 4];

/// Fixed launcher palette
pub mod palette {
    use super::Color;

    pub const BLACK: Color = [0.0, 0.0, 0.0, 1.0];
    pub const WHITE: Color = [1.0, 1.0, 1.0, 1.0];
    pub const GREEN: Color = [0.0, 1.0, 0.0, 1.0];
    pub const RED: Color = [1.0, 0.0, 0.0, 1.0];
    pub const BLUE: Color = [0.2, 0.4, 1.0, 1.0];
}

/// A single primitive draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Rectangle; `line_width: None` fills it
    Rect {
        rect: Rect,
        color: Color,
        line_width: Option<f32>,
    },
    Circle {
        center: Vec2,
        radius: f32,
        color: Color,
    },
    /// Text with its top-left corner at `pos`
    Text {
        text: String,
        pos: Vec2,
        color: Color,
        size: f32,
    },
}

/// Captured frame contents (display-list snapshot)
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    size: Vec2,
    background: Color,
    commands: Vec<DrawCommand>,
}

impl Image {
    pub fn new(size: Vec2, background: Color, commands: Vec<DrawCommand>) -> Self {
        Self {
            size,
            background,
            commands,
        }
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn background(&self) -> Color {
        self.background
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Text strings drawn in this image, in draw order
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

/// Anything scenes can draw onto
pub trait RenderTarget {
    /// Drawable area in pixels
    fn size(&self) -> Vec2;

    /// Record one primitive
    fn submit(&mut self, cmd: DrawCommand);

    fn fill_rect(&mut self, color: Color, rect: Rect) {
        self.submit(DrawCommand::Rect {
            rect,
            color,
            line_width: None,
        });
    }

    fn stroke_rect(&mut self, color: Color, rect: Rect, line_width: f32) {
        self.submit(DrawCommand::Rect {
            rect,
            color,
            line_width: Some(line_width),
        });
    }

    fn draw_circle(&mut self, color: Color, center: Vec2, radius: f32) {
        self.submit(DrawCommand::Circle {
            center,
            radius,
            color,
        });
    }

    fn draw_text(&mut self, text: &str, pos: Vec2, color: Color, size: f32) {
        self.submit(DrawCommand::Text {
            text: text.to_owned(),
            pos,
            color,
            size,
        });
    }

    /// Paint a captured image over the whole target
    fn blit(&mut self, image: &Image) {
        self.fill_rect(
            image.background(),
            Rect::from_pos_size(Vec2::ZERO, image.size()),
        );
        for cmd in image.commands() {
            self.submit(cmd.clone());
        }
    }
}

/// The live display
pub trait Renderer: RenderTarget {
    /// Start a new frame filled with `color`
    fn clear(&mut self, color: Color);

    /// Show the finished frame
    fn present(&mut self);

    /// Copy of what has been drawn since the last clear
    fn snapshot(&self) -> Image;
}

/// Glyph advance as a fraction of the font size
const GLYPH_ADVANCE: f32 = 0.5;
/// Line height as a fraction of the font size
const LINE_HEIGHT: f32 = 0.7;

/// Approximate rendered size of a single line of text.
///
/// Fixed-advance metrics; real font backends only need to stay close enough
/// for button hit rectangles to cover their labels.
pub fn text_size(text: &str, font_size: f32) -> Vec2 {
    let chars = text.chars().count() as f32;
    Vec2::new(
        (chars * font_size * GLYPH_ADVANCE).round(),
        (font_size * LINE_HEIGHT).round(),
    )
}

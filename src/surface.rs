//! Drawing surface the simulation renders onto.
//!
//! Coordinates are logical viewport units: the origin is the top-left corner
//! of an 800x600 viewport and y grows downward.

pub const VIEWPORT_WIDTH: f64 = 800.0;
pub const VIEWPORT_HEIGHT: f64 = 600.0;

/// Fill colors used by the game entities
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Red,
    Blue,
    Green,
}

/// The primitives the game needs from whatever is displaying it.
pub trait Surface {
    /// Clears the rectangle with its top-left corner at `(x, y)`.
    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64);

    /// Draws a filled circle centered on `(x, y)`.
    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Color);

    /// Draws `text` with its baseline anchored at `(x, y)`.
    fn fill_text(&mut self, text: &str, x: f64, y: f64, font: &str);
}

/// A single recorded drawing primitive
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    ClearRect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
    FillCircle {
        x: f64,
        y: f64,
        radius: f64,
        color: Color,
    },
    FillText {
        text: String,
        x: f64,
        y: f64,
        font: String,
    },
}

/// Surface that records every primitive so a frame can be replayed later.
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Commands still visible on screen, i.e. everything issued after the
    /// most recent `ClearRect`.
    pub fn visible(&self) -> &[DrawCommand] {
        let start = self
            .commands
            .iter()
            .rposition(|command| matches!(command, DrawCommand::ClearRect { .. }))
            .map_or(0, |idx| idx + 1);
        &self.commands[start..]
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::FillText { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn circles(&self, color: Color) -> usize {
        self.commands
            .iter()
            .filter(|command| matches!(command, DrawCommand::FillCircle { color: c, .. } if *c == color))
            .count()
    }
}

impl Surface for DrawList {
    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.commands.push(DrawCommand::ClearRect {
            x,
            y,
            width,
            height,
        });
    }

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Color) {
        self.commands.push(DrawCommand::FillCircle {
            x,
            y,
            radius,
            color,
        });
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64, font: &str) {
        self.commands.push(DrawCommand::FillText {
            text: text.to_string(),
            x,
            y,
            font: font.to_string(),
        });
    }
}

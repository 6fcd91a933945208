// filepath: src/canvas.rs
//! Canvas abstraction the face draws through
//!
//! The renderer only ever sees a [`Canvas`]: rectangle fills, text
//! measurement, text draws and the begin/end pair that brackets a frame.
//! [`RecordingCanvas`] captures the resulting command stream.

use std::ops::{Deref, DerefMut};

use crate::palette::Rgb;

/// The two fonts the face uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontId {
    /// Time digits
    Big,
    /// Labels, date row and seconds
    Label,
}

/// Drawing backend capability set
///
/// Coordinates are canvas pixels with the origin at the top-left. Text is
/// positioned by the top-left corner of its line box, so a run drawn at `y`
/// occupies `y..y + font_height(font)`. Rects with a non-positive size draw
/// nothing.
pub trait Canvas {
    fn width(&self) -> i32;
    fn height(&self) -> i32;

    /// Line height of `font` in pixels
    fn font_height(&self, font: FontId) -> i32;

    fn begin_frame(&mut self);

    /// Finish the frame and present it
    fn end_frame(&mut self);

    fn fill_rect(&mut self, color: Rgb, x: i32, y: i32, w: i32, h: i32);
    fn measure_text(&self, text: &str, font: FontId) -> i32;
    fn draw_text(&mut self, text: &str, font: FontId, color: Rgb, x: i32, y: i32);
}

/// Scoped frame: `begin_frame` on construction, `end_frame` on drop
pub struct Frame<'c, C: Canvas + ?Sized> {
    canvas: &'c mut C,
}

impl<'c, C: Canvas + ?Sized> Frame<'c, C> {
    pub fn begin(canvas: &'c mut C) -> Self {
        canvas.begin_frame();
        Self { canvas }
    }
}

impl<C: Canvas + ?Sized> Deref for Frame<'_, C> {
    type Target = C;

    fn deref(&self) -> &C {
        self.canvas
    }
}

impl<C: Canvas + ?Sized> DerefMut for Frame<'_, C> {
    fn deref_mut(&mut self) -> &mut C {
        self.canvas
    }
}

impl<C: Canvas + ?Sized> Drop for Frame<'_, C> {
    fn drop(&mut self) {
        self.canvas.end_frame();
    }
}

/// One recorded canvas call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawCommand {
    BeginFrame,
    EndFrame,
    FillRect {
        color: Rgb,
        x: i32,
        y: i32,
        w: i32,
        h: i32,
    },
    Text {
        text: String,
        font: FontId,
        color: Rgb,
        x: i32,
        y: i32,
    },
}

/// Monospaced stand-in metrics: every character of a font has the same advance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedMetrics {
    pub big_advance: i32,
    pub big_height: i32,
    pub label_advance: i32,
    pub label_height: i32,
}

impl FixedMetrics {
    pub fn advance(&self, font: FontId) -> i32 {
        match font {
            FontId::Big => self.big_advance,
            FontId::Label => self.label_advance,
        }
    }

    pub fn height(&self, font: FontId) -> i32 {
        match font {
            FontId::Big => self.big_height,
            FontId::Label => self.label_height,
        }
    }
}

impl Default for FixedMetrics {
    fn default() -> Self {
        Self {
            big_advance: 20,
            big_height: 42,
            label_advance: 8,
            label_height: 18,
        }
    }
}

/// Canvas that records every call instead of rasterizing
#[derive(Debug, Clone)]
pub struct RecordingCanvas {
    width: i32,
    height: i32,
    metrics: FixedMetrics,
    commands: Vec<DrawCommand>,
}

impl RecordingCanvas {
    pub fn new(width: i32, height: i32, metrics: FixedMetrics) -> Self {
        Self {
            width,
            height,
            metrics,
            commands: Vec::new(),
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Hand back the recorded commands and start over
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// First text command drawing exactly `text`
    pub fn find_text(&self, text: &str) -> Option<&DrawCommand> {
        self.commands
            .iter()
            .find(|c| matches!(c, DrawCommand::Text { text: t, .. } if t == text))
    }
}

impl Canvas for RecordingCanvas {
    fn width(&self) -> i32 {
        self.width
    }

    fn height(&self) -> i32 {
        self.height
    }

    fn font_height(&self, font: FontId) -> i32 {
        self.metrics.height(font)
    }

    fn begin_frame(&mut self) {
        self.commands.push(DrawCommand::BeginFrame);
    }

    fn end_frame(&mut self) {
        self.commands.push(DrawCommand::EndFrame);
    }

    fn fill_rect(&mut self, color: Rgb, x: i32, y: i32, w: i32, h: i32) {
        self.commands.push(DrawCommand::FillRect { color, x, y, w, h });
    }

    fn measure_text(&self, text: &str, font: FontId) -> i32 {
        text.chars().count() as i32 * self.metrics.advance(font)
    }

    fn draw_text(&mut self, text: &str, font: FontId, color: Rgb, x: i32, y: i32) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            font,
            color,
            x,
            y,
        });
    }
}

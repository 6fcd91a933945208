// filepath: src/draw.rs
//! Drawing into ARGB8888 pixel buffers
//!
//! This file contains the software rasterizer behind the face: clipped
//! rectangle fills, coverage blending for glyphs, and [`PixelCanvas`],
//! which implements [`Canvas`] over a raw shm-style buffer.

use log::trace;

use crate::canvas::{Canvas, FontId};
use crate::fonts::FontSet;
use crate::palette::Rgb;

/// Fill a rectangle, clipped to the buffer bounds
#[allow(clippy::too_many_arguments)]
pub fn fill_rect(
    buffer: &mut [u8],
    width: u32,
    height: u32,
    x: i32,
    y: i32,
    w: i32,
    h: i32,
    color: [u8; 4],
) {
    let x_start = x.max(0);
    let y_start = y.max(0);
    let x_end = x.saturating_add(w).min(width as i32);
    let y_end = y.saturating_add(h).min(height as i32);

    if x_end <= x_start || y_end <= y_start {
        return; // Nothing to draw
    }

    for py in y_start..y_end {
        let row = (py as u32 * width) as usize * 4;
        for px in x_start..x_end {
            let idx = row + px as usize * 4;
            if idx + 3 < buffer.len() {
                buffer[idx..idx + 4].copy_from_slice(&color);
            }
        }
    }
}

/// Blend `color` over the pixel at `(x, y)` with `alpha` coverage
#[allow(clippy::too_many_arguments)]
pub fn blend_pixel(
    buffer: &mut [u8],
    width: u32,
    height: u32,
    x: i32,
    y: i32,
    color: [u8; 4],
    alpha: u8,
) {
    if x < 0 || y < 0 || x >= width as i32 || y >= height as i32 {
        return;
    }
    let idx = (y as u32 * width + x as u32) as usize * 4;
    if idx + 3 >= buffer.len() {
        return;
    }

    let a = alpha as u32;
    for channel in 0..3 {
        let dst = buffer[idx + channel] as u32;
        let src = color[channel] as u32;
        buffer[idx + channel] = ((src * a + dst * (255 - a) + 127) / 255) as u8;
    }
    buffer[idx + 3] = 0xff;
}

/// Canvas over a little-endian ARGB8888 buffer
pub struct PixelCanvas<'a> {
    buffer: &'a mut [u8],
    width: u32,
    height: u32,
    fonts: &'a FontSet,
}

impl<'a> PixelCanvas<'a> {
    /// Create a new canvas from a raw buffer
    pub fn new(buffer: &'a mut [u8], width: u32, height: u32, fonts: &'a FontSet) -> Self {
        Self {
            buffer,
            width,
            height,
            fonts,
        }
    }
}

impl Canvas for PixelCanvas<'_> {
    fn width(&self) -> i32 {
        self.width as i32
    }

    fn height(&self) -> i32 {
        self.height as i32
    }

    fn font_height(&self, font: FontId) -> i32 {
        self.fonts.get(font).height()
    }

    fn begin_frame(&mut self) {
        trace!("PixelCanvas: begin frame {}x{}", self.width, self.height);
    }

    fn end_frame(&mut self) {
        trace!("PixelCanvas: end frame");
    }

    fn fill_rect(&mut self, color: Rgb, x: i32, y: i32, w: i32, h: i32) {
        fill_rect(
            self.buffer,
            self.width,
            self.height,
            x,
            y,
            w,
            h,
            color.to_argb8888(),
        );
    }

    fn measure_text(&self, text: &str, font: FontId) -> i32 {
        self.fonts.get(font).measure(text)
    }

    fn draw_text(&mut self, text: &str, font: FontId, color: Rgb, x: i32, y: i32) {
        let (buffer, width, height) = (&mut *self.buffer, self.width, self.height);
        let bytes = color.to_argb8888();
        self.fonts.get(font).rasterize(text, x, y, |px, py, alpha| {
            blend_pixel(buffer, width, height, px, py, bytes, alpha);
        });
    }
}

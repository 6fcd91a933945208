// filepath: src/segment.rs
//! Seven-segment LCD glyphs drawn with nothing but `fill_rect`
//!
//! Segment bits follow the usual labelling: `a` top, `b` upper right,
//! `c` lower right, `d` bottom, `e` lower left, `f` upper left, `g` middle.

use crate::canvas::Canvas;
use crate::palette::Rgb;

const SEG_A: u8 = 0x01;
const SEG_B: u8 = 0x02;
const SEG_C: u8 = 0x04;
const SEG_D: u8 = 0x08;
const SEG_E: u8 = 0x10;
const SEG_F: u8 = 0x20;
const SEG_G: u8 = 0x40;

/// Every segment lit; drawn in the ghost colour behind each cell
pub const ALL_SEGMENTS: u8 = 0x7F;

/// Segment patterns for `0`..=`9`
pub const SEG_DIGITS: [u8; 10] = [0x3F, 0x06, 0x5B, 0x4F, 0x66, 0x6D, 0x7D, 0x07, 0x7F, 0x6F];

/// Cell size, stroke thickness and inter-cell gap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentSize {
    pub width: i32,
    pub height: i32,
    pub stroke: i32,
    pub gap: i32,
}

impl SegmentSize {
    pub const TIME: SegmentSize = SegmentSize::new(24, 42, 5, 2);
    pub const SECONDS: SegmentSize = SegmentSize::new(14, 24, 3, 1);
    pub const ROW: SegmentSize = SegmentSize::new(10, 17, 2, 1);
    /// Fallback pair for narrow panels
    pub const TIME_COMPACT: SegmentSize = SegmentSize::new(18, 32, 4, 2);
    pub const SECONDS_COMPACT: SegmentSize = SegmentSize::new(10, 17, 2, 1);

    pub const fn new(width: i32, height: i32, stroke: i32, gap: i32) -> Self {
        Self {
            width,
            height,
            stroke,
            gap,
        }
    }

    fn cell_width(&self, c: char) -> i32 {
        if c == ':' {
            self.stroke
        } else {
            self.width
        }
    }
}

/// Pattern for `c`, or `None` if it has no seven-segment form
pub fn glyph_segments(c: char) -> Option<u8> {
    let segs = match c.to_ascii_uppercase() {
        d @ '0'..='9' => SEG_DIGITS[d as usize - '0' as usize],
        'A' => 0x77,
        'E' => 0x79,
        'F' => 0x71,
        'H' => 0x76,
        'M' => 0x37,
        'O' => 0x3F,
        'P' => 0x73,
        'R' => 0x50,
        'S' => 0x6D,
        'T' => 0x78,
        'U' => 0x3E,
        'W' => 0x1C,
        '-' => SEG_G,
        ' ' => 0,
        _ => return None,
    };
    Some(segs)
}

/// Width of `text` laid out as cells `size.gap` apart
pub fn segment_width(text: &str, size: SegmentSize) -> i32 {
    let cells: i32 = text.chars().map(|c| size.cell_width(c)).sum();
    let n = text.chars().count() as i32;
    if n == 0 {
        0
    } else {
        cells + (n - 1) * size.gap
    }
}

/// Draw one cell's lit segments with its top-left corner at `(x, y)`
pub fn draw_pattern<C: Canvas + ?Sized>(
    canvas: &mut C,
    color: Rgb,
    segs: u8,
    x: i32,
    y: i32,
    size: SegmentSize,
) {
    let SegmentSize {
        width: sw,
        height: sh,
        stroke: st,
        ..
    } = size;
    // 1px notch where horizontal and vertical strokes meet
    let g = 1;
    let vl = (sh - 3 * st) / 2;
    let mid_y = y + st + vl;
    let bottom_y = y + sh - st;

    let horizontal = [(SEG_A, y), (SEG_G, mid_y), (SEG_D, bottom_y)];
    for (bit, hy) in horizontal {
        if segs & bit != 0 {
            canvas.fill_rect(color, x + g, hy, sw - 2 * g, st);
        }
    }

    let vertical = [
        (SEG_F, x, y + st + g),
        (SEG_B, x + sw - st, y + st + g),
        (SEG_E, x, mid_y + st + g),
        (SEG_C, x + sw - st, mid_y + st + g),
    ];
    for (bit, vx, vy) in vertical {
        if segs & bit != 0 {
            canvas.fill_rect(color, vx, vy, st, vl - 2 * g);
        }
    }
}

fn draw_colon<C: Canvas + ?Sized>(canvas: &mut C, color: Rgb, x: i32, y: i32, size: SegmentSize) {
    let st = size.stroke;
    let q = size.height / 4;
    canvas.fill_rect(color, x, y + q, st, st);
    canvas.fill_rect(color, x, y + 3 * q - st, st, st);
}

/// Draw `text` left to right from `(x, y)`. With a `ghost` colour every cell
/// first shows all of its segments faintly, like an unlit LCD.
pub fn draw_segments<C: Canvas + ?Sized>(
    canvas: &mut C,
    color: Rgb,
    ghost: Option<Rgb>,
    text: &str,
    x: i32,
    y: i32,
    size: SegmentSize,
) {
    let mut pen = x;
    for c in text.chars() {
        if c == ':' {
            draw_colon(canvas, color, pen, y, size);
        } else {
            if let Some(ghost) = ghost {
                draw_pattern(canvas, ghost, ALL_SEGMENTS, pen, y, size);
            }
            // Unknown characters leave a blank cell
            let segs = glyph_segments(c).unwrap_or(0);
            draw_pattern(canvas, color, segs, pen, y, size);
        }
        pen += size.cell_width(c) + size.gap;
    }
}

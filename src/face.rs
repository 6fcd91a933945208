// filepath: src/face.rs
//! F-91W face composition
//!
//! `FaceRenderer::draw` turns a [`TimeSnapshot`] into one full repaint. The
//! order of the draw calls matters: later fills overlay earlier ones.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::canvas::{Canvas, FontId, Frame};
use crate::config::FaceConfig;
use crate::error::FaceError;
use crate::geometry::DisplayGeometry;
use crate::palette::{Palette, Rgb};
use crate::segment::{draw_segments, segment_width, SegmentSize};
use crate::snapshot::TimeSnapshot;

/// Bezel body inset from the canvas edge
const BEZEL_INSET: i32 = 4;
/// Inset of the bevel highlight lines
const HIGHLIGHT_INSET: i32 = 6;
const TOP_LABEL_Y: i32 = 8;
const TOP_LABEL_MARGIN: i32 = 10;
const CAPTION_Y: i32 = 34;
/// Padding between the LCD edges and the day/date row
const ROW_PAD: i32 = 8;
const DIVIDER_INSET: i32 = 3;
const TIME_GAP: i32 = 4;
const BOTTOM_MARGIN: i32 = 14;
/// Offset of the WR pair from the canvas centre line
const ACCENT_OFFSET: i32 = 12;

// Full decoration
const STRIPE_Y: i32 = 30;
const STRIPE_H: i32 = 4;
/// Indicator row sits this far below the LCD ring
const INDICATOR_GAP: i32 = 3;
const INDICATOR_ROW_H: i32 = 17;
const STRIPE_GAP: i32 = 3;
const PLATE_W: i32 = 28;
const PLATE_H: i32 = 16;
/// Room reserved for the bottom label row
const BOTTOM_ROW_H: i32 = 20;

/// How the LCD contents are drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LcdStyle {
    /// Text runs in the big and label fonts
    #[default]
    Text,
    /// Seven-segment cells built from rectangles
    Segment,
}

/// How much of the printed case is drawn around the LCD
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Decoration {
    #[default]
    Classic,
    /// Adds the blue stripes, the MODE/ALARM indicator row and the WR plate
    Full,
}

impl Decoration {
    /// `y` of the bottom label row
    fn bottom_row_y(self, geo: &DisplayGeometry) -> i32 {
        let below = geo.lcd_y + geo.lcd_h + geo.bp;
        match self {
            Decoration::Classic => below + 10,
            Decoration::Full => below + INDICATOR_GAP + INDICATOR_ROW_H + STRIPE_H + STRIPE_GAP,
        }
    }

    /// Smallest canvas height this decoration lays out on. The classic rows
    /// fit any canvas the geometry accepts.
    pub fn min_height(self, geo: &DisplayGeometry) -> i32 {
        match self {
            Decoration::Classic => geo.lcd_y + geo.lcd_h + geo.bp,
            Decoration::Full => self.bottom_row_y(geo) + BOTTOM_ROW_H,
        }
    }
}

/// The three kinds of text shown on the LCD
#[derive(Debug, Clone, Copy)]
enum LcdText {
    Row,
    Time,
    Seconds,
}

impl LcdText {
    fn font(self) -> FontId {
        match self {
            LcdText::Time => FontId::Big,
            LcdText::Row | LcdText::Seconds => FontId::Label,
        }
    }
}

/// Fixed strings printed on the bezel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FaceLabels {
    pub brand: String,
    pub secondary: String,
    pub model: String,
    pub caption: String,
    /// Left label of the indicator row in the full decoration
    pub mode: String,
    /// Right label of the indicator row in the full decoration
    pub alarm_hint: String,
    pub bottom_left: String,
    pub accent_left: String,
    pub accent_right: String,
    pub bottom_right: String,
}

impl Default for FaceLabels {
    fn default() -> Self {
        Self {
            brand: "CASIO".to_string(),
            secondary: "LIGHT".to_string(),
            model: "F-91W".to_string(),
            caption: "ALARM CHRONOGRAPH".to_string(),
            mode: "MODE".to_string(),
            alarm_hint: "ALARM ON\u{b7}OFF/24HR".to_string(),
            bottom_left: "WATER".to_string(),
            accent_left: "W".to_string(),
            accent_right: "R".to_string(),
            bottom_right: "RESIST".to_string(),
        }
    }
}

/// `x` that centres `text_w` inside a container starting at `origin`
pub fn centered(origin: i32, container_w: i32, text_w: i32) -> i32 {
    origin + (container_w - text_w) / 2
}

/// `x` that leaves `margin` between the text's right edge and the container's
pub fn right_aligned(origin: i32, container_w: i32, margin: i32, text_w: i32) -> i32 {
    origin + container_w - margin - text_w
}

/// Placement of the `HH:MM` + `SS` group inside the LCD
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeGroupLayout {
    pub start_x: i32,
    pub total_w: i32,
    pub time_w: i32,
    pub time_y: i32,
    pub sec_x: i32,
    pub sec_y: i32,
}

impl TimeGroupLayout {
    /// Centre time and seconds as one unit and bottom-align the seconds with the time
    pub fn compute(
        geo: &DisplayGeometry,
        divider_y: i32,
        time_w: i32,
        sec_w: i32,
        big_height: i32,
        label_height: i32,
    ) -> Self {
        let total_w = time_w + TIME_GAP + sec_w;
        let start_x = centered(geo.lcd_x, geo.lcd_w, total_w);
        let time_y = divider_y + 8;
        Self {
            start_x,
            total_w,
            time_w,
            time_y,
            sec_x: start_x + time_w + TIME_GAP,
            sec_y: time_y + big_height - label_height,
        }
    }
}

/// Small downward marker next to a case button
fn draw_indicator<C: Canvas + ?Sized>(canvas: &mut C, color: Rgb, x: i32, y: i32) {
    canvas.fill_rect(color, x, y + 6, 5, 3);
    canvas.fill_rect(color, x + 1, y + 5, 3, 5);
    canvas.fill_rect(color, x + 2, y + 4, 1, 7);
}

/// Stateless renderer for the watch face
#[derive(Debug, Clone)]
pub struct FaceRenderer {
    geometry: DisplayGeometry,
    palette: Palette,
    labels: FaceLabels,
    lcd_style: LcdStyle,
    decoration: Decoration,
}

impl FaceRenderer {
    /// Text LCD with the classic decoration
    pub fn new(geometry: DisplayGeometry, palette: Palette, labels: FaceLabels) -> Self {
        Self {
            geometry,
            palette,
            labels,
            lcd_style: LcdStyle::default(),
            decoration: Decoration::default(),
        }
    }

    pub fn with_style(mut self, lcd_style: LcdStyle, decoration: Decoration) -> Self {
        self.lcd_style = lcd_style;
        self.decoration = decoration;
        self
    }

    /// Build the renderer a config file asks for, checking the decoration
    /// fits the canvas
    pub fn from_config(geometry: DisplayGeometry, config: &FaceConfig) -> Result<Self, FaceError> {
        let min_height = config.decoration.min_height(&geometry);
        if geometry.height < min_height {
            return Err(FaceError::CanvasTooSmall {
                width: geometry.width,
                height: geometry.height,
                min_width: geometry.width,
                min_height,
            });
        }
        Ok(Self::new(geometry, config.palette.clone(), config.labels.clone())
            .with_style(config.lcd_style, config.decoration))
    }

    pub fn geometry(&self) -> &DisplayGeometry {
        &self.geometry
    }

    /// Repaint the whole face for `snapshot`
    pub fn draw<C: Canvas + ?Sized>(&self, canvas: &mut C, snapshot: &TimeSnapshot) {
        debug!(
            "FaceRenderer::draw: {} {} {}:{}",
            snapshot.day_code(),
            snapshot.date_str(),
            snapshot.time_str(),
            snapshot.sec_str()
        );
        let mut frame = Frame::begin(canvas);

        self.draw_bezel(&mut *frame);
        self.draw_bezel_labels(&mut *frame);
        if self.decoration == Decoration::Full {
            self.draw_stripe(&mut *frame, STRIPE_Y);
        }
        self.draw_lcd(&mut *frame);
        let divider_y = self.draw_date_row(&mut *frame, snapshot);
        self.draw_time(&mut *frame, snapshot, divider_y);
        if self.decoration == Decoration::Full {
            self.draw_indicator_row(&mut *frame);
        }
        self.draw_bottom_row(&mut *frame);
    }

    /// Segment cells for `text`; the time pair shrinks when the LCD is too
    /// narrow for the widest group
    fn segment_size(&self, text: LcdText) -> SegmentSize {
        let full = segment_width("88:88", SegmentSize::TIME)
            + TIME_GAP
            + segment_width("88", SegmentSize::SECONDS);
        let compact = full > self.geometry.lcd_w;
        match (text, compact) {
            (LcdText::Row, _) => SegmentSize::ROW,
            (LcdText::Time, false) => SegmentSize::TIME,
            (LcdText::Time, true) => SegmentSize::TIME_COMPACT,
            (LcdText::Seconds, false) => SegmentSize::SECONDS,
            (LcdText::Seconds, true) => SegmentSize::SECONDS_COMPACT,
        }
    }

    fn lcd_measure<C: Canvas + ?Sized>(&self, canvas: &C, s: &str, text: LcdText) -> i32 {
        match self.lcd_style {
            LcdStyle::Text => canvas.measure_text(s, text.font()),
            LcdStyle::Segment => segment_width(s, self.segment_size(text)),
        }
    }

    fn lcd_height<C: Canvas + ?Sized>(&self, canvas: &C, text: LcdText) -> i32 {
        match self.lcd_style {
            LcdStyle::Text => canvas.font_height(text.font()),
            LcdStyle::Segment => self.segment_size(text).height,
        }
    }

    fn lcd_draw<C: Canvas + ?Sized>(&self, canvas: &mut C, s: &str, text: LcdText, x: i32, y: i32) {
        let fg = self.palette.lcd_foreground;
        match self.lcd_style {
            LcdStyle::Text => canvas.draw_text(s, text.font(), fg, x, y),
            LcdStyle::Segment => {
                let ghost = Some(self.palette.lcd_ghost);
                draw_segments(canvas, fg, ghost, s, x, y, self.segment_size(text));
            }
        }
    }

    fn draw_bezel<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        let geo = &self.geometry;
        let p = &self.palette;

        canvas.fill_rect(p.black, 0, 0, geo.width, geo.height);
        canvas.fill_rect(
            p.bezel_body,
            BEZEL_INSET,
            BEZEL_INSET,
            geo.width - 2 * BEZEL_INSET,
            geo.height - 2 * BEZEL_INSET,
        );
        // Bevel: top and left edges only
        canvas.fill_rect(
            p.bezel_highlight,
            HIGHLIGHT_INSET,
            HIGHLIGHT_INSET,
            geo.width - 2 * HIGHLIGHT_INSET,
            1,
        );
        canvas.fill_rect(
            p.bezel_highlight,
            HIGHLIGHT_INSET,
            HIGHLIGHT_INSET,
            1,
            geo.height - 2 * HIGHLIGHT_INSET,
        );
    }

    fn draw_bezel_labels<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        let width = self.geometry.width;
        let p = &self.palette;
        let l = &self.labels;

        let w = canvas.measure_text(&l.brand, FontId::Label);
        let x = centered(0, width, w);
        canvas.draw_text(&l.brand, FontId::Label, p.white, x, TOP_LABEL_Y);

        let x = TOP_LABEL_MARGIN;
        canvas.draw_text(&l.secondary, FontId::Label, p.dim_gray, x, TOP_LABEL_Y);

        let w = canvas.measure_text(&l.model, FontId::Label);
        let x = right_aligned(0, width, TOP_LABEL_MARGIN, w);
        canvas.draw_text(&l.model, FontId::Label, p.dim_gray, x, TOP_LABEL_Y);

        let w = canvas.measure_text(&l.caption, FontId::Label);
        let x = centered(0, width, w);
        canvas.draw_text(&l.caption, FontId::Label, p.dim_gray, x, CAPTION_Y);
    }

    fn draw_lcd<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        let border = self.geometry.border();
        let lcd = self.geometry.lcd();

        canvas.fill_rect(
            self.palette.blue_border,
            border.x,
            border.y,
            border.w,
            border.h,
        );
        canvas.fill_rect(self.palette.lcd_background, lcd.x, lcd.y, lcd.w, lcd.h);
    }

    /// Draws day code, date and divider; returns the divider's `y`
    fn draw_date_row<C: Canvas + ?Sized>(
        &self,
        canvas: &mut C,
        snapshot: &TimeSnapshot,
    ) -> i32 {
        let geo = &self.geometry;
        let top_y = geo.lcd_y + 6;

        self.lcd_draw(canvas, snapshot.day_code(), LcdText::Row, geo.lcd_x + ROW_PAD, top_y);

        let date = snapshot.date_str();
        let w = self.lcd_measure(canvas, &date, LcdText::Row);
        let x = right_aligned(geo.lcd_x, geo.lcd_w, ROW_PAD, w);
        self.lcd_draw(canvas, &date, LcdText::Row, x, top_y);

        let divider_y = top_y + self.lcd_height(canvas, LcdText::Row) + 4;
        canvas.fill_rect(
            self.palette.lcd_foreground,
            geo.lcd_x + DIVIDER_INSET,
            divider_y,
            geo.lcd_w - 2 * DIVIDER_INSET,
            1,
        );
        divider_y
    }

    fn draw_time<C: Canvas + ?Sized>(
        &self,
        canvas: &mut C,
        snapshot: &TimeSnapshot,
        divider_y: i32,
    ) {
        let time = snapshot.time_str();
        let secs = snapshot.sec_str();

        let layout = TimeGroupLayout::compute(
            &self.geometry,
            divider_y,
            self.lcd_measure(canvas, &time, LcdText::Time),
            self.lcd_measure(canvas, &secs, LcdText::Seconds),
            self.lcd_height(canvas, LcdText::Time),
            self.lcd_height(canvas, LcdText::Seconds),
        );

        self.lcd_draw(canvas, &time, LcdText::Time, layout.start_x, layout.time_y);
        self.lcd_draw(canvas, &secs, LcdText::Seconds, layout.sec_x, layout.sec_y);
    }

    /// Blue band as wide as the LCD ring
    fn draw_stripe<C: Canvas + ?Sized>(&self, canvas: &mut C, y: i32) {
        let border = self.geometry.border();
        canvas.fill_rect(self.palette.blue_border, border.x, y, border.w, STRIPE_H);
    }

    /// MODE and ALARM labels with their red button markers, then a stripe
    fn draw_indicator_row<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        let geo = &self.geometry;
        let p = &self.palette;
        let l = &self.labels;
        let y = geo.lcd_y + geo.lcd_h + geo.bp + INDICATOR_GAP;

        draw_indicator(canvas, p.accent_red, geo.lcd_x, y);
        canvas.draw_text(&l.mode, FontId::Label, p.white, geo.lcd_x + ROW_PAD, y);

        let w = canvas.measure_text(&l.alarm_hint, FontId::Label);
        let x = right_aligned(geo.lcd_x, geo.lcd_w, ROW_PAD, w);
        canvas.draw_text(&l.alarm_hint, FontId::Label, p.white, x, y);
        draw_indicator(canvas, p.accent_red, geo.lcd_x + geo.lcd_w - 5, y);

        self.draw_stripe(canvas, y + INDICATOR_ROW_H);
    }

    fn draw_bottom_row<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        let geo = &self.geometry;
        let p = &self.palette;
        let l = &self.labels;
        let y = self.decoration.bottom_row_y(geo);

        canvas.draw_text(&l.bottom_left, FontId::Label, p.dim_gray, BOTTOM_MARGIN, y);

        // On the plate both letters are printed red
        let right_color = match self.decoration {
            Decoration::Classic => p.accent_blue,
            Decoration::Full => {
                let plate_x = centered(0, geo.width, PLATE_W);
                canvas.fill_rect(p.blue_border, plate_x, y + 1, PLATE_W, PLATE_H);
                p.accent_red
            }
        };
        let wr_x = geo.center_x() - ACCENT_OFFSET;
        canvas.draw_text(&l.accent_left, FontId::Label, p.accent_red, wr_x, y);
        let r_x = wr_x + canvas.measure_text(&l.accent_left, FontId::Label) + 1;
        canvas.draw_text(&l.accent_right, FontId::Label, right_color, r_x, y);

        let w = canvas.measure_text(&l.bottom_right, FontId::Label);
        let x = right_aligned(0, geo.width, BOTTOM_MARGIN, w);
        canvas.draw_text(&l.bottom_right, FontId::Label, p.dim_gray, x, y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{DrawCommand, FixedMetrics, RecordingCanvas};
    use chrono::Weekday;
    use proptest::prelude::*;

    fn snapshot() -> TimeSnapshot {
        TimeSnapshot::new(Weekday::Sun, 3, 8, 5, 9).unwrap()
    }

    fn fills(canvas: &RecordingCanvas, color: Rgb) -> Vec<(i32, i32, i32, i32)> {
        canvas
            .commands()
            .iter()
            .filter_map(|c| match c {
                DrawCommand::FillRect { color: c, x, y, w, h } if *c == color => {
                    Some((*x, *y, *w, *h))
                }
                _ => None,
            })
            .collect()
    }

    #[test]
    fn alignment_helpers() {
        assert_eq!(centered(0, 240, 40), 100);
        assert_eq!(centered(18, 204, 120), 60);
        assert_eq!(right_aligned(0, 240, 10, 40), 190);
        assert_eq!(right_aligned(18, 204, 8, 16), 198);
    }

    proptest! {
        #[test]
        fn seconds_bottom_aligned_with_time(
            label in 1..64i32,
            extra in 0..64i32,
            divider_y in 60..120i32,
            time_w in 0..200i32,
            sec_w in 0..60i32,
        ) {
            let geo = DisplayGeometry::new(240, 240);
            let big = label + extra;
            let layout = TimeGroupLayout::compute(&geo, divider_y, time_w, sec_w, big, label);
            prop_assert_eq!(layout.time_y, divider_y + 8);
            prop_assert_eq!(layout.sec_y + label, layout.time_y + big);
            prop_assert!(layout.sec_y >= layout.time_y);
        }
    }

    #[test]
    fn group_is_centred_within_one_pixel() {
        let geo = DisplayGeometry::new(240, 240);
        for time_w in 60..=180 {
            for sec_w in [10, 15, 16, 21] {
                let layout = TimeGroupLayout::compute(&geo, 84, time_w, sec_w, 42, 18);
                let group_mid2 = 2 * layout.start_x + layout.total_w;
                let lcd_mid2 = 2 * geo.lcd_x + geo.lcd_w;
                assert!((group_mid2 - lcd_mid2).abs() <= 2, "{time_w} {sec_w}");
                assert_eq!(layout.sec_x, layout.start_x + time_w + TIME_GAP);
            }
        }
    }

    #[test]
    fn full_decoration_adds_stripes_indicators_and_plate() {
        let p = Palette::default();
        let renderer = FaceRenderer::new(DisplayGeometry::new(240, 240), p.clone(), FaceLabels::default())
            .with_style(LcdStyle::Text, Decoration::Full);
        let mut canvas = RecordingCanvas::new(240, 240, FixedMetrics::default());
        renderer.draw(&mut canvas, &snapshot());

        let blue = fills(&canvas, p.blue_border);
        assert_eq!(
            blue,
            vec![
                (16, 30, 208, 4),
                (16, 54, 208, 124),
                (16, 198, 208, 4),
                (106, 206, 28, 16),
            ]
        );
        let red = fills(&canvas, p.accent_red);
        assert_eq!(red.len(), 6);
        assert_eq!(red[0], (18, 187, 5, 3));
        assert_eq!(red[3], (217, 187, 5, 3));

        let mode = canvas.find_text("MODE");
        assert!(matches!(mode, Some(DrawCommand::Text { x: 26, y: 181, .. })));
        // 17 characters at 8px, right edge 8px inside the LCD
        let hint = canvas.find_text("ALARM ON\u{b7}OFF/24HR");
        assert!(matches!(hint, Some(DrawCommand::Text { x: 78, y: 181, .. })));
        let resist = canvas.find_text("RESIST");
        assert!(matches!(resist, Some(DrawCommand::Text { y: 205, .. })));
        let r = canvas.find_text("R");
        assert!(matches!(r, Some(DrawCommand::Text { color, .. }) if *color == p.accent_red));
    }

    #[test]
    fn full_decoration_needs_room_below_the_lcd() {
        let mut config = FaceConfig {
            decoration: Decoration::Full,
            ..FaceConfig::default()
        };
        let short = DisplayGeometry::validated(240, 220).unwrap();
        assert!(matches!(
            FaceRenderer::from_config(short, &config),
            Err(FaceError::CanvasTooSmall { min_height: 225, .. })
        ));
        assert!(FaceRenderer::from_config(DisplayGeometry::new(240, 225), &config).is_ok());

        config.decoration = Decoration::Classic;
        assert!(FaceRenderer::from_config(DisplayGeometry::new(60, 200), &config).is_ok());
    }

    #[test]
    fn segment_lcd_draws_only_rectangles_inside_the_panel() {
        let geo = DisplayGeometry::new(240, 240);
        let p = Palette::default();
        let renderer = FaceRenderer::new(geo, p.clone(), FaceLabels::default())
            .with_style(LcdStyle::Segment, Decoration::Classic);
        let mut canvas = RecordingCanvas::new(240, 240, FixedMetrics::default());
        renderer.draw(&mut canvas, &TimeSnapshot::new(Weekday::Sat, 31, 23, 59, 59).unwrap());

        for text in ["SA", "31", "23:59", "59"] {
            assert!(canvas.find_text(text).is_none(), "{text} drawn as a font run");
        }
        let lcd = geo.lcd();
        let segments: Vec<_> = fills(&canvas, p.lcd_foreground)
            .into_iter()
            .chain(fills(&canvas, p.lcd_ghost))
            .collect();
        assert!(!segments.is_empty());
        for (x, y, w, h) in segments {
            let rect = crate::geometry::Rect::new(x, y, w, h);
            assert!(lcd.contains(&rect), "{rect:?} leaves the LCD");
        }
    }

    #[test]
    fn segment_time_group_is_centred_and_bottom_aligned() {
        let geo = DisplayGeometry::new(240, 240);
        let renderer = FaceRenderer::new(geo, Palette::default(), FaceLabels::default())
            .with_style(LcdStyle::Segment, Decoration::Classic);

        // "08:05" is 109 wide, "09" 29, so the group of 142 starts at 18 + 31
        assert_eq!(renderer.segment_size(LcdText::Time), SegmentSize::TIME);
        let canvas = RecordingCanvas::new(240, 240, FixedMetrics::default());
        let time_w = renderer.lcd_measure(&canvas, "08:05", LcdText::Time);
        let sec_w = renderer.lcd_measure(&canvas, "09", LcdText::Seconds);
        let divider_y = geo.lcd_y + 6 + SegmentSize::ROW.height + 4;
        let layout = TimeGroupLayout::compute(&geo, divider_y, time_w, sec_w, 42, 24);
        assert_eq!(layout.start_x, 49);
        assert_eq!(layout.sec_y + 24, layout.time_y + 42);

        // Divider sits under the segment date row
        let mut canvas = canvas;
        renderer.draw(&mut canvas, &snapshot());
        let divider = fills(&canvas, Palette::default().lcd_foreground)
            .into_iter()
            .find(|&(_, _, w, h)| h == 1 && w == geo.lcd_w - 6);
        assert_eq!(divider, Some((21, divider_y, 198, 1)));
    }

    #[test]
    fn narrow_panels_switch_to_compact_segments() {
        let geo = DisplayGeometry::with_layout(180, 200, crate::geometry::PanelLayout::Round);
        let renderer = FaceRenderer::new(geo, Palette::default(), FaceLabels::default())
            .with_style(LcdStyle::Segment, Decoration::Classic);
        assert_eq!(renderer.segment_size(LcdText::Time), SegmentSize::TIME_COMPACT);

        let canvas = RecordingCanvas::new(180, 200, FixedMetrics::default());
        let group = renderer.lcd_measure(&canvas, "88:88", LcdText::Time)
            + TIME_GAP
            + renderer.lcd_measure(&canvas, "88", LcdText::Seconds);
        assert!(group <= geo.lcd_w);
    }
}

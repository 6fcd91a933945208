// filepath: src/geometry.rs
//! Display geometry for the watch face
//!
//! The bezel covers the whole canvas and the LCD panel sits at a fixed
//! offset inside it. Everything is derived once from the canvas size.

use serde::{Deserialize, Serialize};

use crate::error::FaceError;

/// Left edge of the LCD panel
pub const LCD_X: i32 = 18;
/// Top edge of the LCD panel
pub const LCD_Y: i32 = 56;
/// Height of the LCD panel
pub const LCD_H: i32 = 120;
/// Thickness of the coloured ring around the LCD
pub const BORDER: i32 = 2;

/// Smallest canvas the standard panel lays out on without overlapping itself
pub const MIN_WIDTH: i32 = 60;
pub const MIN_HEIGHT: i32 = 200;
/// Largest canvas accepted on either axis
pub const MAX_DIMENSION: i32 = 8192;

/// Narrowest LCD the time group still fits in
const MIN_LCD_W: i32 = 24;
/// Room kept under the LCD for the bottom caption row
const BELOW_LCD: i32 = 24;

/// Where the LCD panel sits; the round and large variants suit those screen shapes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PanelLayout {
    #[default]
    Standard,
    Round,
    Large,
}

impl PanelLayout {
    /// `(lcd_x, lcd_y, lcd_h)`; the width is always `W - 2 * lcd_x`
    const fn placement(self) -> (i32, i32, i32) {
        match self {
            PanelLayout::Standard => (LCD_X, LCD_Y, LCD_H),
            PanelLayout::Round => (30, 56, 110),
            PanelLayout::Large => (22, 64, 130),
        }
    }

    pub const fn min_width(self) -> i32 {
        2 * self.placement().0 + MIN_LCD_W
    }

    pub const fn min_height(self) -> i32 {
        let (_, y, h) = self.placement();
        y + h + BELOW_LCD
    }
}

/// Axis-aligned rectangle in canvas pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    /// True if `other` lies entirely within `self`
    pub fn contains(&self, other: &Rect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayGeometry {
    pub width: i32,
    pub height: i32,
    pub lcd_x: i32,
    pub lcd_y: i32,
    pub lcd_w: i32,
    pub lcd_h: i32,
    pub bp: i32,
}

impl DisplayGeometry {
    /// Apply the fixed layout formulas. Inputs below `MIN_WIDTH`/`MIN_HEIGHT`
    /// produce a degenerate panel; use [`DisplayGeometry::validated`] at startup.
    pub const fn new(width: i32, height: i32) -> Self {
        Self::with_layout(width, height, PanelLayout::Standard)
    }

    pub const fn with_layout(width: i32, height: i32, layout: PanelLayout) -> Self {
        let (lcd_x, lcd_y, lcd_h) = layout.placement();
        Self {
            width,
            height,
            lcd_x,
            lcd_y,
            lcd_w: width - 2 * lcd_x,
            lcd_h,
            bp: BORDER,
        }
    }

    pub fn validated(width: i32, height: i32) -> Result<Self, FaceError> {
        Self::validated_with_layout(width, height, PanelLayout::Standard)
    }

    pub fn validated_with_layout(
        width: i32,
        height: i32,
        layout: PanelLayout,
    ) -> Result<Self, FaceError> {
        if width > MAX_DIMENSION || height > MAX_DIMENSION {
            return Err(FaceError::CanvasTooLarge { width, height });
        }
        if width < layout.min_width() || height < layout.min_height() {
            return Err(FaceError::CanvasTooSmall {
                width,
                height,
                min_width: layout.min_width(),
                min_height: layout.min_height(),
            });
        }
        Ok(Self::with_layout(width, height, layout))
    }

    /// Bytes needed for one ARGB8888 frame of this canvas
    pub fn frame_bytes(&self) -> usize {
        self.width as usize * self.height as usize * 4
    }

    pub fn bezel(&self) -> Rect {
        Rect::new(0, 0, self.width, self.height)
    }

    pub fn lcd(&self) -> Rect {
        Rect::new(self.lcd_x, self.lcd_y, self.lcd_w, self.lcd_h)
    }

    /// The LCD rect grown by `bp` on every side
    pub fn border(&self) -> Rect {
        Rect::new(
            self.lcd_x - self.bp,
            self.lcd_y - self.bp,
            self.lcd_w + 2 * self.bp,
            self.lcd_h + 2 * self.bp,
        )
    }

    pub fn center_x(&self) -> i32 {
        self.width / 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn any_layout() -> impl Strategy<Value = PanelLayout> {
        prop_oneof![
            Just(PanelLayout::Standard),
            Just(PanelLayout::Round),
            Just(PanelLayout::Large),
        ]
    }

    proptest! {
        #[test]
        fn lcd_ring_is_uniform(
            width in MIN_WIDTH..=MAX_DIMENSION,
            height in MIN_HEIGHT..=MAX_DIMENSION,
        ) {
            let geo = DisplayGeometry::validated(width, height).unwrap();
            let (lcd, border, bezel) = (geo.lcd(), geo.border(), geo.bezel());

            prop_assert!(bezel.contains(&border));
            prop_assert!(border.contains(&lcd));
            prop_assert!(border.x > bezel.x && border.y > bezel.y);
            prop_assert!(border.right() < bezel.right() && border.bottom() < bezel.bottom());
            prop_assert!(lcd.w > 0 && lcd.h > 0);

            prop_assert_eq!(lcd.x - border.x, geo.bp);
            prop_assert_eq!(lcd.y - border.y, geo.bp);
            prop_assert_eq!(border.right() - lcd.right(), geo.bp);
            prop_assert_eq!(border.bottom() - lcd.bottom(), geo.bp);
        }

        #[test]
        fn every_layout_keeps_the_lcd_inside(
            layout in any_layout(),
            extra_w in 0..2000i32,
            extra_h in 0..2000i32,
        ) {
            let width = layout.min_width() + extra_w;
            let height = layout.min_height() + extra_h;
            let geo = DisplayGeometry::validated_with_layout(width, height, layout).unwrap();

            prop_assert!(geo.bezel().contains(&geo.border()));
            prop_assert!(geo.lcd().w >= MIN_LCD_W);
            prop_assert_eq!(geo.lcd().x - geo.bezel().x, geo.bezel().right() - geo.lcd().right());
        }
    }

    #[test]
    fn fixed_formulas() {
        let geo = DisplayGeometry::new(240, 240);
        assert_eq!(geo.lcd(), Rect::new(18, 56, 204, 120));
        assert_eq!(geo.border(), Rect::new(16, 54, 208, 124));
        assert_eq!(geo.center_x(), 120);
        assert_eq!(geo.frame_bytes(), 240 * 240 * 4);
    }

    #[test]
    fn layout_variants() {
        let round = DisplayGeometry::with_layout(180, 180, PanelLayout::Round);
        assert_eq!(round.lcd(), Rect::new(30, 56, 120, 110));
        let large = DisplayGeometry::with_layout(228, 228, PanelLayout::Large);
        assert_eq!(large.lcd(), Rect::new(22, 64, 184, 130));
    }

    #[test]
    fn rejects_small_canvas() {
        assert!(matches!(
            DisplayGeometry::validated(35, 240),
            Err(FaceError::CanvasTooSmall { width: 35, height: 240, .. })
        ));
        assert!(DisplayGeometry::validated(240, 199).is_err());
        assert!(DisplayGeometry::validated(60, 200).is_ok());
        assert!(DisplayGeometry::validated_with_layout(80, 240, PanelLayout::Round).is_err());
    }

    #[test]
    fn rejects_huge_canvas() {
        assert!(matches!(
            DisplayGeometry::validated(40_000, 40_000),
            Err(FaceError::CanvasTooLarge { .. })
        ));
        let geo = DisplayGeometry::validated(MAX_DIMENSION, MAX_DIMENSION).unwrap();
        assert_eq!(geo.frame_bytes(), 8192 * 8192 * 4);
    }
}

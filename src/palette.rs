// filepath: src/palette.rs
//! Colours of the F-91W skin

use serde::{Deserialize, Serialize};

/// Opaque RGB colour, stored in config files as `[r, g, b]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "[u8; 3]", into = "[u8; 3]")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Bytes of one opaque pixel in a little-endian ARGB8888 buffer
    pub fn to_argb8888(self) -> [u8; 4] {
        [self.b, self.g, self.r, 0xff]
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self { r, g, b }
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(c: Rgb) -> Self {
        [c.r, c.g, c.b]
    }
}

/// Semantic colour names used by the face renderer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub lcd_background: Rgb,
    pub lcd_foreground: Rgb,
    pub bezel_body: Rgb,
    pub bezel_highlight: Rgb,
    pub black: Rgb,
    pub white: Rgb,
    pub dim_gray: Rgb,
    pub blue_border: Rgb,
    pub accent_red: Rgb,
    pub accent_blue: Rgb,
    /// Unlit segments in the seven-segment LCD style
    pub lcd_ghost: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            lcd_background: Rgb::new(182, 192, 140),
            lcd_foreground: Rgb::new(24, 28, 18),
            bezel_body: Rgb::new(48, 50, 54),
            bezel_highlight: Rgb::new(72, 76, 82),
            black: Rgb::new(0, 0, 0),
            white: Rgb::new(220, 220, 220),
            dim_gray: Rgb::new(90, 92, 96),
            blue_border: Rgb::new(20, 50, 140),
            accent_red: Rgb::new(170, 35, 30),
            accent_blue: Rgb::new(25, 55, 135),
            lcd_ghost: Rgb::new(170, 182, 130),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn argb_bytes_are_bgra_in_memory() {
        assert_eq!(Rgb::new(1, 2, 3).to_argb8888(), [3, 2, 1, 255]);
    }

    #[test]
    fn partial_palette_keeps_defaults() {
        let palette: Palette = toml::from_str("accent_red = [255, 0, 0]").unwrap();
        assert_eq!(palette.accent_red, Rgb::new(255, 0, 0));
        assert_eq!(palette.lcd_background, Palette::default().lcd_background);
    }
}

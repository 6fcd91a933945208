// filepath: src/fonts.rs
//! Font loading and text metrics
//!
//! Both faces are loaded once at startup with `fontdue` and are read-only
//! afterwards.

use std::{fs, path::Path};

use fontdue::{Font, FontSettings};
use log::info;

use crate::canvas::FontId;
use crate::config::FontConfig;
use crate::error::FaceError;

/// A font at one fixed pixel size
pub struct FaceFont {
    font: Font,
    px: f32,
    ascent: i32,
    height: i32,
}

impl FaceFont {
    pub fn from_bytes(bytes: &[u8], px: f32, path: &Path) -> Result<Self, FaceError> {
        if px.is_nan() || px <= 0.0 {
            return Err(FaceError::InvalidFontSize(px));
        }
        let font = Font::from_bytes(bytes, FontSettings::default()).map_err(|reason| {
            FaceError::FontParse {
                path: path.to_path_buf(),
                reason,
            }
        })?;

        // Fonts without horizontal metrics fall back to the em size
        let (ascent, descent) = font
            .horizontal_line_metrics(px)
            .map(|m| (m.ascent, m.descent))
            .unwrap_or((px, 0.0));

        Ok(Self {
            font,
            px,
            ascent: ascent.ceil() as i32,
            height: (ascent - descent).ceil() as i32,
        })
    }

    pub fn load(config: &FontConfig) -> Result<Self, FaceError> {
        let bytes = fs::read(&config.path).map_err(|source| FaceError::FontRead {
            path: config.path.clone(),
            source,
        })?;
        let font = Self::from_bytes(&bytes, config.size, &config.path)?;
        info!(
            "Loaded font {} at {}px (line height {})",
            config.path.display(),
            config.size,
            font.height
        );
        Ok(font)
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Distance from the top of the line box to the baseline
    pub fn ascent(&self) -> i32 {
        self.ascent
    }

    /// Sum of advance widths, rounded to whole pixels
    pub fn measure(&self, text: &str) -> i32 {
        text.chars()
            .map(|c| self.font.metrics(c, self.px).advance_width)
            .sum::<f32>()
            .round() as i32
    }

    /// Rasterize `text` with its line box at `(x, y)`, calling `plot` with
    /// each covered pixel and its coverage
    pub fn rasterize(&self, text: &str, x: i32, y: i32, mut plot: impl FnMut(i32, i32, u8)) {
        let baseline = y + self.ascent;
        let mut pen = x as f32;

        for c in text.chars() {
            let (metrics, coverage) = self.font.rasterize(c, self.px);
            let left = pen.round() as i32 + metrics.xmin;
            let top = baseline - metrics.ymin - metrics.height as i32;

            for row in 0..metrics.height {
                for col in 0..metrics.width {
                    let alpha = coverage[row * metrics.width + col];
                    if alpha > 0 {
                        plot(left + col as i32, top + row as i32, alpha);
                    }
                }
            }
            pen += metrics.advance_width;
        }
    }
}

/// The big and label fonts
pub struct FontSet {
    big: FaceFont,
    label: FaceFont,
}

impl FontSet {
    pub fn new(big: FaceFont, label: FaceFont) -> Self {
        Self { big, label }
    }

    pub fn load(big: &FontConfig, label: &FontConfig) -> Result<Self, FaceError> {
        Ok(Self::new(FaceFont::load(big)?, FaceFont::load(label)?))
    }

    pub fn get(&self, id: FontId) -> &FaceFont {
        match id {
            FontId::Big => &self.big,
            FontId::Label => &self.label,
        }
    }
}

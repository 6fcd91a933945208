// filepath: src/config.rs
//! Configuration handling for f91w-face
//!
//! This file defines the configuration structure and provides
//! functionality to load and save configuration from/to files.
//! Everything here is read once at startup and never changes afterwards.

use serde::{Deserialize, Serialize};
use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use crate::cadence::RedrawCadence;
use crate::error::FaceError;
use crate::face::{Decoration, FaceLabels, LcdStyle};
use crate::geometry::PanelLayout;
use crate::palette::Palette;

/// A font file and the pixel size to render it at
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontConfig {
    pub path: PathBuf,
    pub size: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontsConfig {
    pub big: FontConfig,
    pub label: FontConfig,
}

impl Default for FontsConfig {
    fn default() -> Self {
        Self {
            big: FontConfig {
                path: PathBuf::from("/usr/share/fonts/TTF/DejaVuSans-Bold.ttf"),
                size: 42.0,
            },
            label: FontConfig {
                path: PathBuf::from("/usr/share/fonts/TTF/DejaVuSansCondensed-Bold.ttf"),
                size: 18.0,
            },
        }
    }
}

/// Configuration for the face surface and skin
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FaceConfig {
    /// Surface width in pixels
    pub width: u32,
    /// Surface height in pixels
    pub height: u32,
    /// LCD placement: `standard`, `round` or `large`
    pub layout: PanelLayout,
    pub lcd_style: LcdStyle,
    pub decoration: Decoration,
    pub cadence: RedrawCadence,
    pub fonts: FontsConfig,
    pub palette: Palette,
    pub labels: FaceLabels,
}

impl Default for FaceConfig {
    fn default() -> Self {
        Self {
            width: 240,
            height: 240,
            layout: PanelLayout::default(),
            lcd_style: LcdStyle::default(),
            decoration: Decoration::default(),
            cadence: RedrawCadence::default(),
            fonts: FontsConfig::default(),
            palette: Palette::default(),
            labels: FaceLabels::default(),
        }
    }
}

impl FaceConfig {
    /// Get the path to the configuration file
    pub fn get_config_path() -> PathBuf {
        let config_dir = if let Some(config_dir) = dirs::config_dir() {
            config_dir.join("f91w-face")
        } else {
            PathBuf::from(".config/f91w-face")
        };

        config_dir.join("config.toml")
    }

    /// Load configuration from the default path, writing defaults there if
    /// no file exists yet
    pub fn load_from_file() -> Result<Self, FaceError> {
        Self::load_from(&Self::get_config_path())
    }

    pub fn load_from(config_path: &Path) -> Result<Self, FaceError> {
        match fs::read_to_string(config_path) {
            Ok(content) => Self::parse(&content),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                let default_config = Self::default();
                default_config.save_to(config_path)?;
                Ok(default_config)
            }
            Err(e) => Err(FaceError::ConfigRead(e)),
        }
    }

    pub fn parse(content: &str) -> Result<Self, FaceError> {
        Ok(toml::from_str(content)?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<(), FaceError> {
        // Create the directory if it doesn't exist
        if let Some(parent) = config_path.parent() {
            if !Path::exists(parent) {
                fs::create_dir_all(parent).map_err(FaceError::ConfigWrite)?;
            }
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(config_path, content).map_err(FaceError::ConfigWrite)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::Rgb;

    #[test]
    fn empty_file_is_all_defaults() {
        assert_eq!(FaceConfig::parse("").unwrap(), FaceConfig::default());
    }

    #[test]
    fn partial_overrides() {
        let config = FaceConfig::parse(
            r#"
            width = 200
            cadence = "second"
            lcd_style = "segment"
            layout = "large"

            [fonts.big]
            path = "/tmp/big.ttf"
            size = 36.0

            [palette]
            lcd_background = [150, 160, 120]

            [labels]
            brand = "CASIO"
            model = "A158W"
            "#,
        )
        .unwrap();

        assert_eq!(config.width, 200);
        assert_eq!(config.height, 240);
        assert_eq!(config.cadence, RedrawCadence::Second);
        assert_eq!(config.lcd_style, LcdStyle::Segment);
        assert_eq!(config.layout, PanelLayout::Large);
        assert_eq!(config.decoration, Decoration::Classic);
        assert_eq!(config.fonts.big.size, 36.0);
        assert_eq!(config.fonts.label, FontsConfig::default().label);
        assert_eq!(config.palette.lcd_background, Rgb::new(150, 160, 120));
        assert_eq!(config.labels.model, "A158W");
        assert_eq!(config.labels.caption, "ALARM CHRONOGRAPH");
    }

    #[test]
    fn rejects_bad_toml() {
        assert!(matches!(
            FaceConfig::parse("width = \"wide\""),
            Err(FaceError::ConfigParse(_))
        ));
    }

    #[test]
    fn missing_file_is_created_with_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = FaceConfig::load_from(&path).unwrap();
        assert_eq!(config, FaceConfig::default());
        assert!(path.exists());
        assert_eq!(FaceConfig::load_from(&path).unwrap(), config);
    }

    #[test]
    fn saved_config_reads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let config = FaceConfig {
            width: 180,
            layout: PanelLayout::Round,
            lcd_style: LcdStyle::Segment,
            decoration: Decoration::Full,
            ..FaceConfig::default()
        };

        config.save_to(&path).unwrap();
        assert_eq!(FaceConfig::load_from(&path).unwrap(), config);
    }

    #[test]
    fn unreadable_path_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            FaceConfig::load_from(dir.path()),
            Err(FaceError::ConfigRead(_))
        ));
    }
}

// filepath: src/error.rs
//! Error types for f91w-face
//!
//! Everything here is a startup-time failure. Drawing a frame has no
//! error path once geometry, fonts and palette have been set up.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum FaceError {
    #[error("canvas {width}x{height} is too small for the watch face (need at least {min_width}x{min_height})")]
    CanvasTooSmall {
        width: i32,
        height: i32,
        min_width: i32,
        min_height: i32,
    },

    #[error("canvas {width}x{height} exceeds the largest supported surface")]
    CanvasTooLarge { width: i32, height: i32 },

    #[error("snapshot field {field} out of range: {value}")]
    InvalidSnapshot { field: &'static str, value: u32 },

    #[error("failed to read font {}", .path.display())]
    FontRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse font {}: {reason}", .path.display())]
    FontParse { path: PathBuf, reason: &'static str },

    #[error("font size must be positive, got {0}")]
    InvalidFontSize(f32),

    #[error("failed to read configuration")]
    ConfigRead(#[source] std::io::Error),

    #[error("failed to parse configuration")]
    ConfigParse(#[from] toml::de::Error),

    #[error("failed to write configuration")]
    ConfigWrite(#[source] std::io::Error),

    #[error("failed to serialize configuration")]
    ConfigSerialize(#[from] toml::ser::Error),
}

pub mod cadence;
pub mod canvas;
pub mod config;
pub mod draw;
pub mod error;
pub mod face;
pub mod fonts;
pub mod geometry;
pub mod palette;
pub mod segment;
pub mod snapshot;

pub use crate::canvas::{Canvas, DrawCommand, FixedMetrics, FontId, Frame, RecordingCanvas};
pub use crate::error::FaceError;
pub use crate::face::{Decoration, FaceLabels, FaceRenderer, LcdStyle, TimeGroupLayout};
pub use crate::geometry::{DisplayGeometry, PanelLayout};
pub use crate::palette::{Palette, Rgb};
pub use crate::snapshot::TimeSnapshot;

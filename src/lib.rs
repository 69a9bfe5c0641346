//! Shotframe renders app-store style promotional screenshots.
//!
//! Each slide is a caption over a solid or gradient background with an optional photo fitted
//! into the space below the caption. The public API is session-oriented:
//!
//! - Build a [`SlideDeck`] in code or load a [`Project`] from JSON
//! - Create an [`ExportSession`] for a [`Style`] and [`OutputSpec`]
//! - Export one slide, or stream the whole deck into an [`ExportSink`]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod assets;
mod foundation;

/// PNG encoding and export sinks.
pub mod encode;
/// Single and batch export.
pub mod export;
/// CPU slide compositor.
pub mod render;
/// Slides, styles, and project files.
pub mod scene;
/// Caption layout and shaping.
pub mod text;

#[cfg(test)]
#[path = "../tests/unit/support.rs"]
pub(crate) mod test_support;

pub use crate::assets::color::Color;
pub use crate::assets::source::{FetchFuture, ImageFetch, ImageSource};
pub use crate::foundation::core::{
    MAX_DIMENSION, MIN_DIMENSION, OutputSpec, PRESETS, Point, Preset, Rect, Vec2,
};
pub use crate::foundation::error::{ShotframeError, ShotframeResult};
pub use crate::foundation::math::gradient_endpoints;

pub use crate::encode::png::{archive_file_name, encode_png, file_name};
pub use crate::encode::sink::{DirectorySink, ExportSink, ExportedFile, InMemorySink, SinkConfig};
pub use crate::export::session::{ExportSession, ExportStats, SlideFailure};
pub use crate::render::compositor::{
    image_area, layout_caption, render_slide, render_slide_blocking,
};
pub use crate::render::image::cover_fit;
pub use crate::render::surface::{ImageStatus, RenderedSlide};
pub use crate::scene::model::{Background, FontWeight, Slide, SlideDeck, SlideId, Style, WordColors};
pub use crate::scene::project::Project;
pub use crate::scene::reconcile::reconcile;
pub use crate::text::layout::{TextBlock, TextMetrics, layout_words};
pub use crate::text::shaper::{FontSet, FontSpec, ParleyShaper, TextShaper};

//! Freehand annotation engine for marking skin conditions on a face photo.
//!
//! Raw pointer samples become smoothed quadratic paths, grouped by skin
//! condition category and severity, and painted with per-category
//! transparency layers. Nothing here touches the ECS; the editor hosts an
//! [`AnnotationCanvas`] as a resource and forwards input to it.
//!
//! ## Module Structure
//!
//! - [`category`] - Category and Severity enums with palette/opacity mapping
//! - [`stroke`] - Stroke, StrokeId, QuadSegment, BrushSettings
//! - [`builder`] - Incremental midpoint smoothing (StrokeBuilder)
//! - [`store`] - Strokes bucketed by (category, severity)
//! - [`canvas`] - AnnotationCanvas facade and Redraw requests
//! - [`render`] - PaintSurface trait and paint-order driver
//! - [`raster`] - tiny-skia backed PixmapSurface
//! - [`export`] - JSON export format

mod builder;
mod canvas;
mod category;
mod export;
mod raster;
mod render;
mod store;
mod stroke;

#[cfg(test)]
mod tests;

// Re-exports - Model
pub use category::{Category, Severity};
pub use stroke::{BrushSettings, QuadSegment, Stroke, StrokeId};

// Re-exports - Engine
pub use builder::StrokeBuilder;
pub use canvas::{AnnotationCanvas, Redraw};
pub use store::{Bucket, StrokeStore};

// Re-exports - Rendering
pub use raster::PixmapSurface;
pub use render::{render, PaintSurface, RenderStats};

// Re-exports - Export
pub use export::ExportedAnnotations;

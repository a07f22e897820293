//! Centralized constants used across the application.
//!
//! This module contains magic numbers and configuration values that are used
//! in multiple places or would benefit from being named constants.

/// Default window width in pixels
pub const DEFAULT_WINDOW_WIDTH: f32 = 1280.0;

/// Default window height in pixels
pub const DEFAULT_WINDOW_HEIGHT: f32 = 900.0;

/// Annotation canvas width in canvas units (one unit per texture pixel)
pub const CANVAS_WIDTH: u32 = 600;

/// Annotation canvas height in canvas units
pub const CANVAS_HEIGHT: u32 = 800;

/// Thinnest brush the width slider allows
pub const MIN_BRUSH_WIDTH: f32 = 5.0;

/// Thickest brush the width slider allows
pub const MAX_BRUSH_WIDTH: f32 = 50.0;

/// Brush width used before the user touches the slider
pub const DEFAULT_BRUSH_WIDTH: f32 = 10.0;

/// Z position of the background photo sprite
pub const PHOTO_Z: f32 = 0.0;

/// Z position of the annotation overlay sprite (above the photo)
pub const ANNOTATION_Z: f32 = 10.0;

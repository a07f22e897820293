//! Stroke data model: one continuous drawn gesture.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::{DEFAULT_BRUSH_WIDTH, MAX_BRUSH_WIDTH, MIN_BRUSH_WIDTH};

use super::category::{Category, Severity};

/// Opaque identity of a stroke. Used for equality and removal, never ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StrokeId(Uuid);

impl StrokeId {
    pub fn new_random() -> Self {
        Self(Uuid::new_v4())
    }
}

impl std::fmt::Display for StrokeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Brush configuration snapshot, frozen into a stroke when it begins.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrushSettings {
    pub category: Category,
    pub severity: Severity,
    pub width: f32,
    pub drawing_enabled: bool,
}

impl Default for BrushSettings {
    fn default() -> Self {
        Self {
            category: Category::default(),
            severity: Severity::default(),
            width: DEFAULT_BRUSH_WIDTH,
            drawing_enabled: true,
        }
    }
}

impl BrushSettings {
    /// Clamp a requested width into the supported brush range
    pub fn clamp_width(width: f32) -> f32 {
        if width.is_finite() {
            width.clamp(MIN_BRUSH_WIDTH, MAX_BRUSH_WIDTH)
        } else {
            DEFAULT_BRUSH_WIDTH
        }
    }
}

/// A quadratic curve segment from `from` to `to` bent toward `ctrl`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuadSegment {
    pub from: Vec2,
    pub ctrl: Vec2,
    pub to: Vec2,
}

impl QuadSegment {
    /// Bounding box of the control polygon. Always contains the curve.
    pub fn bounds(&self) -> Rect {
        Rect::from_corners(self.from, self.to).union_point(self.ctrl)
    }

    /// True when all three points coincide
    #[cfg(test)]
    pub fn is_degenerate(&self) -> bool {
        self.from == self.ctrl && self.ctrl == self.to
    }
}

#[derive(Debug, Clone)]
pub struct Stroke {
    id: StrokeId,
    category: Category,
    severity: Severity,
    width: f32,
    opacity: f32,
    color: Color,
    segments: Vec<QuadSegment>,
}

impl PartialEq for Stroke {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Stroke {}

impl Stroke {
    /// Create an empty stroke from the brush snapshot
    pub fn new(brush: &BrushSettings) -> Self {
        Self {
            id: StrokeId::new_random(),
            category: brush.category,
            severity: brush.severity,
            width: BrushSettings::clamp_width(brush.width),
            opacity: brush.severity.opacity(),
            color: brush.category.color(brush.severity),
            segments: Vec::new(),
        }
    }

    pub fn id(&self) -> StrokeId {
        self.id
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn segments(&self) -> &[QuadSegment] {
        &self.segments
    }

    /// Union of all segment bounds, unpadded
    #[cfg(test)]
    pub fn bounds(&self) -> Option<Rect> {
        self.segments
            .iter()
            .map(QuadSegment::bounds)
            .reduce(|acc, r| acc.union(r))
    }

    /// Only the stroke builder appends, and only while the stroke is active.
    pub(super) fn push_segment(&mut self, segment: QuadSegment) {
        self.segments.push(segment);
    }
}

//! JSON export of the annotation canvas.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use super::category::{Category, Severity};
use super::store::StrokeStore;
use super::stroke::{QuadSegment, Stroke, StrokeId};

pub const EXPORT_FORMAT_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportedAnnotations {
    pub version: u32,
    /// Strokes in draw order
    pub strokes: Vec<ExportedStroke>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportedStroke {
    pub id: StrokeId,
    pub category: Category,
    pub severity: Severity,
    pub width: f32,
    pub opacity: f32,
    pub color: [f32; 4],
    pub segments: Vec<QuadSegment>,
}

pub fn color_to_array(color: Color) -> [f32; 4] {
    let srgba = color.to_srgba();
    [srgba.red, srgba.green, srgba.blue, srgba.alpha]
}

impl From<&Stroke> for ExportedStroke {
    fn from(stroke: &Stroke) -> Self {
        Self {
            id: stroke.id(),
            category: stroke.category(),
            severity: stroke.severity(),
            width: stroke.width(),
            opacity: stroke.opacity(),
            color: color_to_array(stroke.color()),
            segments: stroke.segments().to_vec(),
        }
    }
}

impl From<&StrokeStore> for ExportedAnnotations {
    fn from(store: &StrokeStore) -> Self {
        Self {
            version: EXPORT_FORMAT_VERSION,
            strokes: store.iter().map(ExportedStroke::from).collect(),
        }
    }
}

impl ExportedAnnotations {
    pub fn to_json(&self) -> Result<String, String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize annotations: {}", e))
    }
}

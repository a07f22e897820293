//! The annotation canvas: brush configuration, stroke builder and stroke store
//! behind the entry points the host calls from pointer callbacks.

use bevy::prelude::*;

use super::builder::StrokeBuilder;
use super::category::{Category, Severity};
use super::render::{render, PaintSurface, RenderStats};
use super::store::StrokeStore;
use super::stroke::{BrushSettings, Stroke, StrokeId};

/// What the host has to repaint after an operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Redraw {
    /// Only this canvas-space region changed
    Region(Rect),
    /// Repaint everything
    Full,
}

impl Redraw {
    /// Merge two pending redraw requests
    pub fn merge(self, other: Redraw) -> Redraw {
        match (self, other) {
            (Redraw::Region(a), Redraw::Region(b)) => Redraw::Region(a.union(b)),
            _ => Redraw::Full,
        }
    }
}

#[derive(Debug, Default)]
pub struct AnnotationCanvas {
    brush: BrushSettings,
    builder: StrokeBuilder,
    store: StrokeStore,
}

impl AnnotationCanvas {
    #[allow(dead_code)]
    pub fn new(brush: BrushSettings) -> Self {
        Self {
            brush: BrushSettings {
                width: BrushSettings::clamp_width(brush.width),
                ..brush
            },
            ..default()
        }
    }

    pub fn brush(&self) -> &BrushSettings {
        &self.brush
    }

    /// Replace the brush. Applies from the next `begin`.
    pub fn set_brush(&mut self, brush: BrushSettings) {
        self.brush = BrushSettings {
            width: BrushSettings::clamp_width(brush.width),
            ..brush
        };
    }

    pub fn set_category(&mut self, category: Category) {
        self.brush.category = category;
    }

    pub fn set_severity(&mut self, severity: Severity) {
        self.brush.severity = severity;
    }

    pub fn set_width(&mut self, width: f32) {
        self.brush.width = BrushSettings::clamp_width(width);
    }

    pub fn set_drawing_enabled(&mut self, enabled: bool) {
        self.brush.drawing_enabled = enabled;
    }

    /// Pointer down. Starts a stroke unless drawing is disabled.
    pub fn begin(&mut self, point: Vec2) -> Option<Redraw> {
        if !self.brush.drawing_enabled {
            return None;
        }
        let brush = self.brush;
        Some(Redraw::Region(self.builder.begin(point, &brush)))
    }

    /// Pointer move. Extends the active stroke unless drawing is disabled.
    pub fn extend(&mut self, point: Vec2) -> Option<Redraw> {
        if !self.brush.drawing_enabled {
            return None;
        }
        self.builder.extend(point).map(Redraw::Region)
    }

    /// Pointer up. Moves the active stroke into the store.
    pub fn end(&mut self) -> Option<StrokeId> {
        let stroke = self.builder.end()?;
        let id = stroke.id();
        self.store.add(stroke).then_some(id)
    }

    /// Pointer cancelled. The active stroke never reaches the store.
    pub fn cancel(&mut self) -> bool {
        self.builder.cancel()
    }

    /// Remove the newest stroke in the currently selected category/severity bucket.
    pub fn undo_last(&mut self) -> Option<Stroke> {
        let removed = self
            .store
            .remove_last(self.brush.category, self.brush.severity)?;
        debug!(
            "Undid stroke {} from {} / {}",
            removed.id(),
            removed.category().display_name(),
            removed.severity().display_name()
        );
        Some(removed)
    }

    /// True when the current brush's bucket holds a stroke for `undo_last` to remove.
    pub fn can_undo(&self) -> bool {
        !self
            .store
            .bucket(self.brush.category, self.brush.severity)
            .is_empty()
    }

    /// Remove one stored stroke by id, wherever it sits in its bucket.
    #[allow(dead_code)]
    pub fn remove(&mut self, id: StrokeId) -> Option<Stroke> {
        let stroke = self.store.get(id)?.clone();
        self.store.remove(&stroke)
    }

    /// Drop every stored stroke and any stroke in progress.
    pub fn clear_all(&mut self) -> usize {
        self.builder.cancel();
        let removed = self.store.clear();
        debug!("Cleared {} strokes", removed);
        removed
    }

    pub fn store(&self) -> &StrokeStore {
        &self.store
    }

    #[allow(dead_code)]
    pub fn active_stroke(&self) -> Option<&Stroke> {
        self.builder.active()
    }

    #[allow(dead_code)]
    pub fn is_drawing(&self) -> bool {
        self.builder.is_active()
    }

    pub fn stroke_count(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty() && !self.builder.is_active()
    }

    /// Paint stored strokes and the stroke in progress onto `surface`
    pub fn paint<S: PaintSurface + ?Sized>(&self, surface: &mut S) -> RenderStats {
        render(&self.store, self.builder.active(), surface)
    }
}

//! Incremental quadratic-midpoint smoothing of raw pointer samples.
//!
//! Each new sample produces one curve segment running from the midpoint of the
//! two previous samples to the midpoint of the latest two, with the middle
//! sample as control point. Consecutive segments share endpoints, so the path
//! stays continuous while jitter between samples is rounded off. Work per
//! sample is constant.

use bevy::prelude::*;

use super::stroke::{BrushSettings, QuadSegment, Stroke};

/// The three most recent raw samples of the active stroke.
#[derive(Debug, Clone, Copy, PartialEq)]
struct SampleWindow {
    current: Vec2,
    previous: Vec2,
    previous_previous: Vec2,
}

impl SampleWindow {
    fn starting_at(point: Vec2) -> Self {
        Self {
            current: point,
            previous: point,
            previous_previous: point,
        }
    }

    fn shift(&mut self, point: Vec2) {
        self.previous_previous = self.previous;
        self.previous = self.current;
        self.current = point;
    }

    fn segment(&self) -> QuadSegment {
        QuadSegment {
            from: midpoint(self.previous, self.previous_previous),
            ctrl: self.previous,
            to: midpoint(self.current, self.previous),
        }
    }
}

fn midpoint(a: Vec2, b: Vec2) -> Vec2 {
    (a + b) * 0.5
}

/// Region a freshly appended segment touches, padded for the stroke width
pub fn dirty_region(segment: &QuadSegment, width: f32) -> Rect {
    segment.bounds().inflate(2.0 * width)
}

/// Builds the single active stroke from a pointer sample stream.
///
/// Callers gate on the drawing-enabled flag; the builder only tracks sequencing.
#[derive(Debug, Default)]
pub struct StrokeBuilder {
    window: Option<SampleWindow>,
    active: Option<Stroke>,
}

impl StrokeBuilder {
    /// Start a new stroke at `point`, replacing any stroke still active.
    ///
    /// Returns the region needing redraw.
    pub fn begin(&mut self, point: Vec2, brush: &BrushSettings) -> Rect {
        if let Some(abandoned) = self.active.take() {
            warn!("Stroke {} was still active at begin; discarding it", abandoned.id());
        }

        let window = SampleWindow::starting_at(point);
        let mut stroke = Stroke::new(brush);
        let segment = window.segment();
        stroke.push_segment(segment);
        let region = dirty_region(&segment, stroke.width());

        debug!(
            "Began stroke {} ({} / {}, width {})",
            stroke.id(),
            stroke.category().display_name(),
            stroke.severity().display_name(),
            stroke.width()
        );

        self.window = Some(window);
        self.active = Some(stroke);
        region
    }

    /// Append one smoothed segment toward `point`. No-op without an active stroke.
    pub fn extend(&mut self, point: Vec2) -> Option<Rect> {
        let (Some(window), Some(stroke)) = (self.window.as_mut(), self.active.as_mut()) else {
            return None;
        };

        window.shift(point);
        let segment = window.segment();
        stroke.push_segment(segment);
        Some(dirty_region(&segment, stroke.width()))
    }

    /// Finalize the active stroke and hand it back.
    pub fn end(&mut self) -> Option<Stroke> {
        self.window = None;
        let stroke = self.active.take()?;
        debug!(
            "Finished stroke {} with {} segments",
            stroke.id(),
            stroke.segments().len()
        );
        Some(stroke)
    }

    /// Discard the active stroke. Returns true if one was active.
    pub fn cancel(&mut self) -> bool {
        self.window = None;
        match self.active.take() {
            Some(stroke) => {
                debug!("Cancelled stroke {}", stroke.id());
                true
            }
            None => false,
        }
    }

    pub fn active(&self) -> Option<&Stroke> {
        self.active.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }
}

//! Paint-order driver for annotation strokes.
//!
//! Each category is painted inside its own transparency layer so overlapping
//! strokes of one category blend with each other but never with another
//! category's strokes. Within a layer strokes go intense, moderate, light,
//! and in insertion order inside each severity.

use super::category::Category;
use super::store::StrokeStore;
use super::stroke::Stroke;

/// A 2D target that supports isolated compositing layers.
pub trait PaintSurface {
    /// Open a transparency layer. Paint goes into it until the matching `end_layer`.
    fn begin_layer(&mut self);

    /// Composite the innermost open layer onto whatever lies beneath it.
    fn end_layer(&mut self);

    /// Stroke the full geometry of one stroke with its own width, color and opacity.
    fn stroke_path(&mut self, stroke: &Stroke);
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RenderStats {
    pub layers: usize,
    pub strokes_painted: usize,
}

/// Paint the store, plus the in-progress stroke on top of its own category.
pub fn render<S: PaintSurface + ?Sized>(
    store: &StrokeStore,
    active: Option<&Stroke>,
    surface: &mut S,
) -> RenderStats {
    let mut stats = RenderStats::default();
    let mut buckets = store.buckets_in_draw_order().peekable();

    for category in Category::ALL {
        surface.begin_layer();
        stats.layers += 1;

        while let Some(bucket) = buckets.next_if(|b| b.category == category) {
            for stroke in bucket.strokes {
                surface.stroke_path(stroke);
                stats.strokes_painted += 1;
            }
        }

        if let Some(stroke) = active.filter(|s| s.category() == category) {
            surface.stroke_path(stroke);
            stats.strokes_painted += 1;
        }

        surface.end_layer();
    }

    stats
}

#[cfg(test)]
mod tests {
    use bevy::prelude::*;

    use super::*;
    use crate::annotations::{BrushSettings, Severity, StrokeBuilder, StrokeId};

    #[derive(Debug, PartialEq)]
    enum Op {
        Begin,
        End,
        Stroke(StrokeId),
    }

    #[derive(Default)]
    struct Recorder {
        ops: Vec<Op>,
    }

    impl PaintSurface for Recorder {
        fn begin_layer(&mut self) {
            self.ops.push(Op::Begin);
        }

        fn end_layer(&mut self) {
            self.ops.push(Op::End);
        }

        fn stroke_path(&mut self, stroke: &Stroke) {
            self.ops.push(Op::Stroke(stroke.id()));
        }
    }

    fn finished(category: Category, severity: Severity) -> Stroke {
        let mut builder = StrokeBuilder::default();
        builder.begin(
            Vec2::ZERO,
            &BrushSettings {
                category,
                severity,
                ..default()
            },
        );
        builder.extend(Vec2::new(10.0, 10.0));
        builder.end().unwrap()
    }

    #[test]
    fn test_empty_store_paints_nothing() {
        let store = StrokeStore::default();
        let mut recorder = Recorder::default();
        let stats = render(&store, None, &mut recorder);

        assert_eq!(stats.strokes_painted, 0);
        assert_eq!(stats.layers, 6);
        assert!(!recorder.ops.iter().any(|op| matches!(op, Op::Stroke(_))));
    }

    #[test]
    fn test_layers_are_balanced() {
        let mut store = StrokeStore::default();
        store.add(finished(Category::Redness, Severity::Light));
        let mut recorder = Recorder::default();
        render(&store, None, &mut recorder);

        let mut depth = 0i32;
        for op in &recorder.ops {
            match op {
                Op::Begin => depth += 1,
                Op::End => depth -= 1,
                Op::Stroke(_) => assert_eq!(depth, 1),
            }
            assert!((0..=1).contains(&depth));
        }
        assert_eq!(depth, 0);
    }

    #[test]
    fn test_paint_order_within_category() {
        let light = finished(Category::Acne, Severity::Light);
        let intense = finished(Category::Acne, Severity::Intense);
        let moderate_a = finished(Category::Acne, Severity::Moderate);
        let moderate_b = finished(Category::Acne, Severity::Moderate);

        let mut store = StrokeStore::default();
        for s in [&light, &intense, &moderate_a, &moderate_b] {
            store.add((*s).clone());
        }

        let mut recorder = Recorder::default();
        render(&store, None, &mut recorder);

        assert_eq!(
            &recorder.ops[..6],
            &[
                Op::Begin,
                Op::Stroke(intense.id()),
                Op::Stroke(moderate_a.id()),
                Op::Stroke(moderate_b.id()),
                Op::Stroke(light.id()),
                Op::End,
            ]
        );
    }

    #[test]
    fn test_categories_get_separate_layers() {
        let acne = finished(Category::Acne, Severity::Moderate);
        let dryness = finished(Category::Dryness, Severity::Moderate);
        let mut store = StrokeStore::default();
        store.add(dryness.clone());
        store.add(acne.clone());

        let mut recorder = Recorder::default();
        render(&store, None, &mut recorder);

        let acne_at = recorder
            .ops
            .iter()
            .position(|op| *op == Op::Stroke(acne.id()))
            .unwrap();
        let dryness_at = recorder
            .ops
            .iter()
            .position(|op| *op == Op::Stroke(dryness.id()))
            .unwrap();
        assert!(acne_at < dryness_at);
        let layer_breaks = recorder.ops[acne_at..dryness_at]
            .iter()
            .filter(|op| **op == Op::End)
            .count();
        assert_eq!(layer_breaks, 5);
    }

    #[test]
    fn test_active_stroke_painted_last_in_its_layer() {
        let stored = finished(Category::Scarring, Severity::Light);
        let active = finished(Category::Scarring, Severity::Intense);
        let mut store = StrokeStore::default();
        store.add(stored.clone());

        let mut recorder = Recorder::default();
        let stats = render(&store, Some(&active), &mut recorder);
        assert_eq!(stats.strokes_painted, 2);

        // Acne layer, then scarring layer with stored before active
        assert_eq!(
            &recorder.ops[2..6],
            &[
                Op::Begin,
                Op::Stroke(stored.id()),
                Op::Stroke(active.id()),
                Op::End,
            ]
        );
    }
}

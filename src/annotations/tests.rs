//! Behavioural tests for the annotation canvas.

use bevy::prelude::*;

use super::*;

fn canvas_with(category: Category, severity: Severity, width: f32) -> AnnotationCanvas {
    AnnotationCanvas::new(BrushSettings {
        category,
        severity,
        width,
        drawing_enabled: true,
    })
}

fn draw(canvas: &mut AnnotationCanvas, points: &[(f32, f32)]) -> Option<StrokeId> {
    let (first, rest) = points.split_first()?;
    canvas.begin(Vec2::new(first.0, first.1));
    for p in rest {
        canvas.extend(Vec2::new(p.0, p.1));
    }
    canvas.end()
}

#[test]
fn test_acne_moderate_scenario() {
    let mut canvas = canvas_with(Category::Acne, Severity::Moderate, 10.0);
    draw(&mut canvas, &[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0)]);

    assert_eq!(canvas.stroke_count(), 1);
    let bucket = canvas.store().bucket(Category::Acne, Severity::Moderate);
    assert_eq!(bucket.len(), 1);

    let stroke = &bucket[0];
    assert_eq!(stroke.segments().len(), 3);
    assert_eq!(stroke.color(), Category::Acne.color(Severity::Moderate));
    assert_eq!(stroke.opacity(), 0.5);
    assert_eq!(stroke.width(), 10.0);
}

#[test]
fn test_begin_end_without_extend_scenario() {
    let mut canvas = canvas_with(Category::Scarring, Severity::Light, 10.0);
    canvas.begin(Vec2::new(20.0, 20.0));
    canvas.end();

    let bucket = canvas.store().bucket(Category::Scarring, Severity::Light);
    assert_eq!(bucket.len(), 1);
    assert_eq!(bucket[0].segments().len(), 1);
    assert!(bucket[0].segments()[0].is_degenerate());
}

#[test]
fn test_segment_count_is_samples() {
    for n in [0usize, 1, 5, 40] {
        let mut canvas = AnnotationCanvas::default();
        canvas.begin(Vec2::ZERO);
        for i in 0..n {
            canvas.extend(Vec2::new(i as f32, (i * 2) as f32));
        }
        let id = canvas.end().unwrap();
        assert_eq!(canvas.store().get(id).unwrap().segments().len(), n + 1);
    }
}

#[test]
fn test_configuration_change_mid_stroke_does_not_move_stroke() {
    let mut canvas = canvas_with(Category::Redness, Severity::Intense, 12.0);
    canvas.begin(Vec2::ZERO);
    canvas.set_category(Category::Oiliness);
    canvas.set_severity(Severity::Light);
    canvas.set_width(40.0);
    canvas.extend(Vec2::new(5.0, 5.0));
    let id = canvas.end().unwrap();

    let bucket = canvas.store().bucket(Category::Redness, Severity::Intense);
    assert_eq!(bucket.len(), 1);
    assert_eq!(bucket[0].id(), id);
    assert_eq!(bucket[0].width(), 12.0);
    assert_eq!(canvas.store().category_len(Category::Oiliness), 0);
}

#[test]
fn test_cancel_adds_nothing() {
    let mut canvas = AnnotationCanvas::default();
    canvas.begin(Vec2::ZERO);
    assert!(canvas.cancel());
    assert!(canvas.store().is_empty());

    canvas.begin(Vec2::ZERO);
    canvas.extend(Vec2::new(3.0, 3.0));
    canvas.extend(Vec2::new(6.0, 3.0));
    assert!(canvas.cancel());
    assert!(canvas.store().is_empty());
    assert!(canvas.end().is_none());
}

#[test]
fn test_stroke_not_stored_until_end() {
    let mut canvas = AnnotationCanvas::default();
    canvas.begin(Vec2::ZERO);
    assert_eq!(canvas.stroke_count(), 0);
    assert!(canvas.is_drawing());
    assert!(!canvas.is_empty());
    canvas.end();
    assert_eq!(canvas.stroke_count(), 1);
    assert!(!canvas.is_drawing());
}

#[test]
fn test_disabled_drawing_is_noop() {
    let mut canvas = AnnotationCanvas::default();
    canvas.set_drawing_enabled(false);

    assert!(canvas.begin(Vec2::ZERO).is_none());
    assert!(canvas.extend(Vec2::ONE).is_none());
    assert!(canvas.end().is_none());
    assert!(canvas.is_empty());
}

#[test]
fn test_disabling_mid_stroke_freezes_geometry() {
    let mut canvas = AnnotationCanvas::default();
    canvas.begin(Vec2::ZERO);
    canvas.extend(Vec2::new(1.0, 0.0));
    canvas.set_drawing_enabled(false);
    assert!(canvas.extend(Vec2::new(2.0, 0.0)).is_none());

    let id = canvas.end().unwrap();
    assert_eq!(canvas.store().get(id).unwrap().segments().len(), 2);
}

#[test]
fn test_extend_without_begin_is_noop() {
    let mut canvas = AnnotationCanvas::default();
    assert!(canvas.extend(Vec2::new(4.0, 4.0)).is_none());
    assert!(canvas.end().is_none());
    assert!(!canvas.cancel());
}

#[test]
fn test_extend_reports_padded_region() {
    let mut canvas = canvas_with(Category::Acne, Severity::Moderate, 10.0);
    canvas.begin(Vec2::ZERO);
    let redraw = canvas.extend(Vec2::new(10.0, 0.0)).unwrap();

    // Segment (0,0)..(5,0), padded by 20
    assert_eq!(
        redraw,
        Redraw::Region(Rect::from_corners(
            Vec2::new(-20.0, -20.0),
            Vec2::new(25.0, 20.0)
        ))
    );
}

#[test]
fn test_undo_is_bucket_scoped() {
    let mut canvas = canvas_with(Category::Acne, Severity::Intense, 10.0);
    let a = draw(&mut canvas, &[(0.0, 0.0), (5.0, 5.0)]).unwrap();
    canvas.set_severity(Severity::Light);
    let b = draw(&mut canvas, &[(0.0, 0.0), (5.0, 5.0)]).unwrap();
    let before = canvas.stroke_count();

    canvas.set_severity(Severity::Intense);
    let removed = canvas.undo_last().unwrap();
    assert_eq!(removed.id(), a);
    assert!(canvas.store().contains(b));
    assert_eq!(canvas.stroke_count(), before - 1);
}

#[test]
fn test_undo_on_empty_bucket_is_noop() {
    let mut canvas = canvas_with(Category::Acne, Severity::Moderate, 10.0);
    draw(&mut canvas, &[(0.0, 0.0)]);
    canvas.set_category(Category::Dryness);

    assert!(canvas.undo_last().is_none());
    assert_eq!(canvas.stroke_count(), 1);
}

#[test]
fn test_undo_removes_newest_first() {
    let mut canvas = AnnotationCanvas::default();
    let first = draw(&mut canvas, &[(0.0, 0.0)]).unwrap();
    let second = draw(&mut canvas, &[(1.0, 1.0)]).unwrap();

    assert_eq!(canvas.undo_last().unwrap().id(), second);
    assert_eq!(canvas.undo_last().unwrap().id(), first);
    assert!(canvas.undo_last().is_none());
}

#[test]
fn test_clear_all_empties_every_bucket() {
    let mut canvas = AnnotationCanvas::default();
    for category in Category::ALL {
        canvas.set_category(category);
        for severity in Severity::ALL {
            canvas.set_severity(severity);
            draw(&mut canvas, &[(0.0, 0.0), (2.0, 2.0)]);
        }
    }
    canvas.begin(Vec2::ZERO);

    assert_eq!(canvas.clear_all(), 18);
    assert!(canvas.is_empty());
    for bucket in canvas.store().buckets_in_draw_order() {
        assert!(bucket.strokes.is_empty());
    }
}

#[test]
fn test_remove_by_id() {
    let mut canvas = AnnotationCanvas::default();
    let id = draw(&mut canvas, &[(0.0, 0.0)]).unwrap();
    assert!(canvas.remove(id).is_some());
    assert!(canvas.remove(id).is_none());
}

#[test]
fn test_remove_from_middle_keeps_bucket_order() {
    let mut canvas = canvas_with(Category::Irritation, Severity::Intense, 10.0);
    let first = draw(&mut canvas, &[(0.0, 0.0)]).unwrap();
    let middle = draw(&mut canvas, &[(1.0, 1.0)]).unwrap();
    let last = draw(&mut canvas, &[(2.0, 2.0)]).unwrap();

    let removed = canvas.remove(middle).unwrap();
    assert_eq!(removed.id(), middle);

    let remaining: Vec<_> = canvas
        .store()
        .bucket(Category::Irritation, Severity::Intense)
        .iter()
        .map(Stroke::id)
        .collect();
    assert_eq!(remaining, vec![first, last]);
}

#[test]
fn test_can_undo_tracks_current_bucket() {
    let mut canvas = canvas_with(Category::Acne, Severity::Intense, 10.0);
    assert!(!canvas.can_undo());

    draw(&mut canvas, &[(0.0, 0.0)]);
    assert!(canvas.can_undo());

    // Strokes elsewhere do not make undo available
    canvas.set_severity(Severity::Light);
    assert!(!canvas.can_undo());
    assert!(canvas.undo_last().is_none());
    assert_eq!(canvas.stroke_count(), 1);

    canvas.set_severity(Severity::Intense);
    canvas.undo_last();
    assert!(!canvas.can_undo());
}

#[test]
fn test_identical_brush_gives_identical_appearance() {
    let mut canvas = canvas_with(Category::Oiliness, Severity::Intense, 15.0);
    let a = draw(&mut canvas, &[(0.0, 0.0)]).unwrap();
    let b = draw(&mut canvas, &[(9.0, 9.0)]).unwrap();

    let a = canvas.store().get(a).unwrap();
    let b = canvas.store().get(b).unwrap();
    assert_ne!(a.id(), b.id());
    assert_eq!(a.color(), b.color());
    assert_eq!(a.opacity(), b.opacity());
}

#[test]
fn test_width_setter_clamps() {
    let mut canvas = AnnotationCanvas::default();
    canvas.set_width(0.5);
    assert_eq!(canvas.brush().width, crate::constants::MIN_BRUSH_WIDTH);
    canvas.set_width(1000.0);
    assert_eq!(canvas.brush().width, crate::constants::MAX_BRUSH_WIDTH);
}

#[test]
fn test_paint_includes_active_stroke() {
    let mut canvas = AnnotationCanvas::default();
    draw(&mut canvas, &[(0.0, 0.0)]);
    canvas.begin(Vec2::new(10.0, 10.0));

    let mut surface = PixmapSurface::new(32, 32).unwrap();
    let stats = canvas.paint(&mut surface);
    assert_eq!(stats.strokes_painted, 2);
    assert_eq!(stats.layers, Category::ALL.len());
}

#[test]
fn test_redraw_merge() {
    let a = Redraw::Region(Rect::new(0.0, 0.0, 1.0, 1.0));
    let b = Redraw::Region(Rect::new(5.0, 5.0, 6.0, 6.0));
    assert_eq!(a.merge(b), Redraw::Region(Rect::new(0.0, 0.0, 6.0, 6.0)));
    assert_eq!(a.merge(Redraw::Full), Redraw::Full);
}

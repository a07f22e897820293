//! Stroke storage partitioned by (category, severity).

use bevy::prelude::*;

use super::category::{Category, Severity};
use super::stroke::{Stroke, StrokeId};

/// One (category, severity) partition, in insertion order.
#[derive(Debug, Clone, Copy)]
pub struct Bucket<'a> {
    pub category: Category,
    pub severity: Severity,
    pub strokes: &'a [Stroke],
}

/// Owns every finished stroke, 6 x 3 buckets indexed by category then severity.
#[derive(Debug, Default)]
pub struct StrokeStore {
    buckets: [[Vec<Stroke>; 3]; 6],
}

impl StrokeStore {
    /// Append to the stroke's bucket. Returns false if its id is already stored.
    pub fn add(&mut self, stroke: Stroke) -> bool {
        if self.contains(stroke.id()) {
            warn!("Stroke {} is already stored", stroke.id());
            return false;
        }
        self.bucket_mut(stroke.category(), stroke.severity())
            .push(stroke);
        true
    }

    /// Remove the most recently added stroke of one bucket.
    pub fn remove_last(&mut self, category: Category, severity: Severity) -> Option<Stroke> {
        self.bucket_mut(category, severity).pop()
    }

    /// Remove a specific stroke from its bucket, wherever it sits.
    pub fn remove(&mut self, stroke: &Stroke) -> Option<Stroke> {
        let bucket = self.bucket_mut(stroke.category(), stroke.severity());
        let index = bucket.iter().position(|s| s.id() == stroke.id())?;
        Some(bucket.remove(index))
    }

    /// Empty every bucket. Returns how many strokes were dropped.
    pub fn clear(&mut self) -> usize {
        let removed = self.len();
        for bucket in self.buckets.iter_mut().flatten() {
            bucket.clear();
        }
        removed
    }

    pub fn bucket(&self, category: Category, severity: Severity) -> &[Stroke] {
        &self.buckets[category.index()][severity.index()]
    }

    fn bucket_mut(&mut self, category: Category, severity: Severity) -> &mut Vec<Stroke> {
        &mut self.buckets[category.index()][severity.index()]
    }

    /// Buckets grouped by category in enumeration order, then by
    /// severity intense, moderate, light. Call again to restart.
    pub fn buckets_in_draw_order(&self) -> impl Iterator<Item = Bucket<'_>> + '_ {
        Category::ALL.into_iter().flat_map(move |category| {
            Severity::DRAW_ORDER
                .into_iter()
                .map(move |severity| Bucket {
                    category,
                    severity,
                    strokes: self.bucket(category, severity),
                })
        })
    }

    /// Every stored stroke in draw order
    pub fn iter(&self) -> impl Iterator<Item = &Stroke> + '_ {
        self.buckets_in_draw_order()
            .flat_map(|bucket| bucket.strokes.iter())
    }

    pub fn get(&self, id: StrokeId) -> Option<&Stroke> {
        self.buckets
            .iter()
            .flatten()
            .flatten()
            .find(|s| s.id() == id)
    }

    pub fn contains(&self, id: StrokeId) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.buckets.iter().flatten().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.iter().flatten().all(Vec::is_empty)
    }

    /// Number of strokes in one category across all severities
    #[cfg(test)]
    pub fn category_len(&self, category: Category) -> usize {
        self.buckets[category.index()].iter().map(Vec::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotations::BrushSettings;

    fn stroke(category: Category, severity: Severity) -> Stroke {
        Stroke::new(&BrushSettings {
            category,
            severity,
            ..default()
        })
    }

    #[test]
    fn test_new_store_is_empty() {
        let store = StrokeStore::default();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
        assert_eq!(store.buckets_in_draw_order().count(), 18);
    }

    #[test]
    fn test_add_places_stroke_in_its_bucket() {
        let mut store = StrokeStore::default();
        let s = stroke(Category::Oiliness, Severity::Light);
        let id = s.id();
        assert!(store.add(s));

        assert_eq!(store.bucket(Category::Oiliness, Severity::Light).len(), 1);
        assert_eq!(store.bucket(Category::Oiliness, Severity::Light)[0].id(), id);
        assert_eq!(store.category_len(Category::Oiliness), 1);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_add_rejects_duplicate_id() {
        let mut store = StrokeStore::default();
        let s = stroke(Category::Acne, Severity::Light);
        assert!(store.add(s.clone()));
        assert!(!store.add(s));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_bucket_preserves_insertion_order() {
        let mut store = StrokeStore::default();
        let ids: Vec<_> = (0..4)
            .map(|_| {
                let s = stroke(Category::Redness, Severity::Moderate);
                let id = s.id();
                store.add(s);
                id
            })
            .collect();

        let stored: Vec<_> = store
            .bucket(Category::Redness, Severity::Moderate)
            .iter()
            .map(Stroke::id)
            .collect();
        assert_eq!(stored, ids);
    }

    #[test]
    fn test_remove_last_only_touches_one_bucket() {
        let mut store = StrokeStore::default();
        let a = stroke(Category::Acne, Severity::Intense);
        let b = stroke(Category::Acne, Severity::Light);
        let (a_id, b_id) = (a.id(), b.id());
        store.add(a);
        store.add(b);

        let removed = store.remove_last(Category::Acne, Severity::Intense).unwrap();
        assert_eq!(removed.id(), a_id);
        assert!(store.contains(b_id));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_remove_last_on_empty_bucket_is_noop() {
        let mut store = StrokeStore::default();
        store.add(stroke(Category::Dryness, Severity::Light));
        assert!(store.remove_last(Category::Dryness, Severity::Intense).is_none());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_remove_specific_stroke_from_middle() {
        let mut store = StrokeStore::default();
        let strokes: Vec<_> = (0..3)
            .map(|_| stroke(Category::Scarring, Severity::Moderate))
            .collect();
        for s in &strokes {
            store.add(s.clone());
        }

        assert_eq!(store.remove(&strokes[1]), Some(strokes[1].clone()));
        assert!(store.remove(&strokes[1]).is_none());

        let remaining = store.bucket(Category::Scarring, Severity::Moderate);
        assert_eq!(remaining, &[strokes[0].clone(), strokes[2].clone()]);
    }

    #[test]
    fn test_clear_empties_every_bucket() {
        let mut store = StrokeStore::default();
        for category in Category::ALL {
            for severity in Severity::ALL {
                store.add(stroke(category, severity));
            }
        }
        assert_eq!(store.len(), 18);

        assert_eq!(store.clear(), 18);
        assert!(store.is_empty());
        assert!(store.buckets_in_draw_order().all(|b| b.strokes.is_empty()));
    }

    #[test]
    fn test_draw_order_groups_category_then_severity() {
        let store = StrokeStore::default();
        let order: Vec<_> = store
            .buckets_in_draw_order()
            .map(|b| (b.category, b.severity))
            .collect();

        assert_eq!(order[0], (Category::Acne, Severity::Intense));
        assert_eq!(order[1], (Category::Acne, Severity::Moderate));
        assert_eq!(order[2], (Category::Acne, Severity::Light));
        assert_eq!(order[3], (Category::Scarring, Severity::Intense));
        assert_eq!(order[17], (Category::Dryness, Severity::Light));
    }

    #[test]
    fn test_draw_order_is_restartable() {
        let mut store = StrokeStore::default();
        store.add(stroke(Category::Acne, Severity::Light));
        store.add(stroke(Category::Dryness, Severity::Intense));

        let first: Vec<_> = store.iter().map(Stroke::id).collect();
        let second: Vec<_> = store.iter().map(Stroke::id).collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), 2);
    }
}

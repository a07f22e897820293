//! Resources wrapping the annotation canvas for the ECS.

use bevy::prelude::*;

use crate::annotations::{AnnotationCanvas, Redraw};

/// The single annotation canvas, owned by the world.
#[derive(Resource, Default, Deref, DerefMut)]
pub struct Canvas(pub AnnotationCanvas);

/// Pending repaint request, merged across a frame's input events.
#[derive(Resource, Default)]
pub struct CanvasDirty {
    pending: Option<Redraw>,
}

impl CanvasDirty {
    pub fn mark(&mut self, redraw: Redraw) {
        self.pending = Some(match self.pending {
            Some(existing) => existing.merge(redraw),
            None => redraw,
        });
    }

    pub fn mark_full(&mut self) {
        self.mark(Redraw::Full);
    }

    pub fn take(&mut self) -> Option<Redraw> {
        self.pending.take()
    }

    pub fn is_dirty(&self) -> bool {
        self.pending.is_some()
    }
}

/// Which pointer is driving the active stroke
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerSource {
    Mouse,
    Touch(u64),
}

#[derive(Resource, Default)]
pub struct PointerState {
    pub source: Option<PointerSource>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dirty_merges_regions() {
        let mut dirty = CanvasDirty::default();
        assert!(!dirty.is_dirty());

        dirty.mark(Redraw::Region(Rect::new(0.0, 0.0, 2.0, 2.0)));
        dirty.mark(Redraw::Region(Rect::new(4.0, 4.0, 8.0, 8.0)));
        assert_eq!(
            dirty.take(),
            Some(Redraw::Region(Rect::new(0.0, 0.0, 8.0, 8.0)))
        );
        assert!(dirty.take().is_none());
    }

    #[test]
    fn test_full_redraw_wins() {
        let mut dirty = CanvasDirty::default();
        dirty.mark(Redraw::Region(Rect::new(0.0, 0.0, 2.0, 2.0)));
        dirty.mark_full();
        dirty.mark(Redraw::Region(Rect::new(1.0, 1.0, 2.0, 2.0)));
        assert_eq!(dirty.take(), Some(Redraw::Full));
    }

    #[test]
    fn test_no_pointer_by_default() {
        assert!(PointerState::default().source.is_none());
    }
}

//! Common SystemParam bundles and coordinate helpers for canvas input.
//!
//! The annotation sprite is centered on the world origin. Canvas space has
//! its origin at the sprite's top-left corner with y pointing down, matching
//! the texture row order.

use bevy::ecs::system::SystemParam;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use bevy_egui::EguiContexts;

use crate::constants::{CANVAS_HEIGHT, CANVAS_WIDTH};

use super::EditorCamera;

/// Canvas size in canvas units
pub fn canvas_size() -> Vec2 {
    Vec2::new(CANVAS_WIDTH as f32, CANVAS_HEIGHT as f32)
}

/// Convert a world position to canvas space
pub fn world_to_canvas(world: Vec2) -> Vec2 {
    let half = canvas_size() / 2.0;
    Vec2::new(world.x + half.x, half.y - world.y)
}

/// True if the point lies on the canvas (edges inclusive)
pub fn canvas_contains(point: Vec2) -> bool {
    Rect::from_corners(Vec2::ZERO, canvas_size()).contains(point)
}

/// Bundled camera and window queries for viewport-to-canvas conversion
#[derive(SystemParam)]
pub struct CanvasParams<'w, 's> {
    pub window: Query<'w, 's, &'static Window, With<PrimaryWindow>>,
    pub camera: Query<'w, 's, (&'static Camera, &'static GlobalTransform), With<EditorCamera>>,
}

impl CanvasParams<'_, '_> {
    /// Convert a window/viewport position (mouse or touch) to canvas space
    pub fn viewport_to_canvas(&self, viewport_pos: Vec2) -> Option<Vec2> {
        let (camera, transform) = self.camera.single().ok()?;
        let world = camera.viewport_to_world_2d(transform, viewport_pos).ok()?;
        Some(world_to_canvas(world))
    }

    /// Get the canvas position of the mouse cursor, if available
    pub fn cursor_canvas_pos(&self) -> Option<Vec2> {
        let window = self.window.single().ok()?;
        let cursor_pos = window.cursor_position()?;
        self.viewport_to_canvas(cursor_pos)
    }
}

/// Check if the cursor is over egui UI
pub fn is_cursor_over_ui(contexts: &mut EguiContexts) -> bool {
    contexts
        .ctx_mut()
        .map(|ctx| ctx.is_pointer_over_area())
        .unwrap_or(false)
}

/// Check if egui is consuming keyboard input (e.g. a focused text field)
pub fn ui_wants_keyboard(contexts: &mut EguiContexts) -> bool {
    contexts
        .ctx_mut()
        .map(|ctx| ctx.wants_keyboard_input())
        .unwrap_or(false)
}

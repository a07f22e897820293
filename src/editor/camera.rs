//! View over the photo and its annotation overlay: pan, zoom toward the
//! cursor, and fit-to-window.

use bevy::input::mouse::{MouseMotion, MouseScrollUnit, MouseWheel};
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use super::params::canvas_size;

const MIN_SCALE: f32 = 0.25;
const MAX_SCALE: f32 = 4.0;

/// Screen space left around the canvas when fitting it to the window
const FIT_MARGIN: f32 = 0.9;

#[derive(Component)]
pub struct EditorCamera;

/// World units per screen pixel. Larger means zoomed out.
#[derive(Component)]
pub struct CanvasView {
    pub scale: f32,
}

impl Default for CanvasView {
    fn default() -> Self {
        Self { scale: 1.0 }
    }
}

/// Scale at which the whole canvas fits inside a window of the given size
pub fn fit_scale(window_size: Vec2) -> f32 {
    if window_size.x <= 0.0 || window_size.y <= 0.0 {
        return 1.0;
    }
    let canvas = canvas_size();
    let scale = (canvas.x / window_size.x).max(canvas.y / window_size.y) / FIT_MARGIN;
    scale.clamp(MIN_SCALE, MAX_SCALE)
}

/// Keep at least part of the canvas on screen
fn clamp_to_canvas(translation: Vec2) -> Vec2 {
    let half = canvas_size() / 2.0;
    translation.clamp(-half, half)
}

pub fn spawn_camera(mut commands: Commands, window: Query<&Window, With<PrimaryWindow>>) {
    let scale = window
        .single()
        .map(|w| fit_scale(w.size()))
        .unwrap_or(1.0);

    commands.spawn((
        Camera2d,
        EditorCamera,
        CanvasView { scale },
        Transform::from_translation(Vec3::new(0.0, 0.0, 1000.0)),
    ));
}

/// Middle-drag pans the view
pub fn camera_pan(
    mouse_button: Res<ButtonInput<MouseButton>>,
    mut mouse_motion: MessageReader<MouseMotion>,
    mut camera_query: Query<(&mut Transform, &CanvasView), With<EditorCamera>>,
) {
    if !mouse_button.pressed(MouseButton::Middle) {
        mouse_motion.clear();
        return;
    }

    let Ok((mut transform, view)) = camera_query.single_mut() else {
        return;
    };

    let delta: Vec2 = mouse_motion.read().map(|event| event.delta).sum();
    let moved = transform.translation.truncate() + Vec2::new(-delta.x, delta.y) * view.scale;
    let clamped = clamp_to_canvas(moved);
    transform.translation.x = clamped.x;
    transform.translation.y = clamped.y;
}

/// Scroll zooms, keeping the point under the cursor fixed
pub fn camera_zoom(
    mut scroll_events: MessageReader<MouseWheel>,
    window: Query<&Window, With<PrimaryWindow>>,
    mut camera_query: Query<(&mut Transform, &mut CanvasView), With<EditorCamera>>,
) {
    let Ok((mut transform, mut view)) = camera_query.single_mut() else {
        return;
    };

    let amount: f32 = scroll_events
        .read()
        .map(|event| match event.unit {
            MouseScrollUnit::Line => event.y * 0.1,
            MouseScrollUnit::Pixel => event.y * 0.001,
        })
        .sum();
    if amount == 0.0 {
        return;
    }

    let old_scale = view.scale;
    let new_scale = (old_scale * (1.0 - amount)).clamp(MIN_SCALE, MAX_SCALE);
    if new_scale == old_scale {
        return;
    }

    if let Ok(window) = window.single()
        && let Some(cursor) = window.cursor_position()
    {
        let offset = cursor - window.size() / 2.0;
        let offset = Vec2::new(offset.x, -offset.y);
        let anchored = transform.translation.truncate() + offset * (old_scale - new_scale);
        let clamped = clamp_to_canvas(anchored);
        transform.translation.x = clamped.x;
        transform.translation.y = clamped.y;
    }

    view.scale = new_scale;
}

/// Home re-centers the canvas and fits it to the window
pub fn reset_view(
    keyboard: Res<ButtonInput<KeyCode>>,
    window: Query<&Window, With<PrimaryWindow>>,
    mut camera_query: Query<(&mut Transform, &mut CanvasView), With<EditorCamera>>,
) {
    if !keyboard.just_pressed(KeyCode::Home) {
        return;
    }
    let Ok((mut transform, mut view)) = camera_query.single_mut() else {
        return;
    };

    view.scale = window.single().map(|w| fit_scale(w.size())).unwrap_or(1.0);
    transform.translation.x = 0.0;
    transform.translation.y = 0.0;
}

pub fn apply_camera_zoom(
    mut camera_query: Query<(&CanvasView, &mut Projection), (With<EditorCamera>, Changed<CanvasView>)>,
) {
    for (view, mut projection) in camera_query.iter_mut() {
        if let Projection::Orthographic(ref mut ortho) = *projection {
            ortho.scale = view.scale;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_scale_shows_whole_canvas() {
        let window = Vec2::new(1280.0, 900.0);
        let scale = fit_scale(window);
        let visible = window * scale;
        assert!(visible.x >= canvas_size().x);
        assert!(visible.y >= canvas_size().y);
    }

    #[test]
    fn test_fit_scale_handles_empty_window() {
        assert_eq!(fit_scale(Vec2::ZERO), 1.0);
    }

    #[test]
    fn test_pan_is_clamped_to_canvas() {
        let far = clamp_to_canvas(Vec2::new(10_000.0, -10_000.0));
        assert_eq!(far, Vec2::new(canvas_size().x / 2.0, -canvas_size().y / 2.0));
    }
}

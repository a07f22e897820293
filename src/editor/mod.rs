mod camera;
mod conditions;
mod display;
pub mod export;
mod input;
pub mod params;
pub mod photo;
pub mod shortcuts;
pub mod state;

pub use camera::EditorCamera;
pub use export::{ExportRequest, ExportStatus};
pub use photo::{OpenPhotoRequest, PhotoState};
pub use shortcuts::{ClearAnnotationsRequest, UndoStrokeRequest};
pub use state::Canvas;

use bevy::prelude::*;

use crate::annotations::BrushSettings;
use crate::config::{AppConfig, ConfigLoaded, UpdateBrushPreferencesRequest};

use state::{CanvasDirty, PointerState};

/// Apply the persisted brush once the config has loaded
fn init_canvas_from_config(config: Res<AppConfig>, mut canvas: ResMut<Canvas>) {
    let brush = config.data.initial_brush();
    debug!(
        "Initial brush: {} / {} at {}px",
        brush.category.display_name(),
        brush.severity.display_name(),
        brush.width
    );
    canvas.set_brush(brush);
}

/// Persist brush changes once the pointer is released, so slider drags save once.
fn sync_brush_preferences(
    canvas: Res<Canvas>,
    mouse_button: Res<ButtonInput<MouseButton>>,
    mut last_saved: Local<Option<BrushSettings>>,
    mut events: MessageWriter<UpdateBrushPreferencesRequest>,
) {
    if mouse_button.get_pressed().next().is_some() {
        return;
    }

    let brush = *canvas.brush();
    match *last_saved {
        None => *last_saved = Some(brush),
        Some(previous) if previous != brush => {
            *last_saved = Some(brush);
            events.write(UpdateBrushPreferencesRequest { brush });
        }
        Some(_) => {}
    }
}

pub struct EditorPlugin;

impl Plugin for EditorPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Canvas>()
            .init_resource::<CanvasDirty>()
            .init_resource::<PointerState>()
            .init_resource::<PhotoState>()
            .init_resource::<ExportStatus>()
            .add_message::<OpenPhotoRequest>()
            .add_message::<ExportRequest>()
            .add_message::<UndoStrokeRequest>()
            .add_message::<ClearAnnotationsRequest>()
            .add_systems(
                Startup,
                (
                    camera::spawn_camera,
                    photo::spawn_photo_backdrop,
                    display::setup_canvas_display,
                    init_canvas_from_config.after(ConfigLoaded),
                ),
            )
            .add_systems(
                Update,
                (
                    camera::camera_pan,
                    camera::camera_zoom,
                    camera::reset_view,
                    camera::apply_camera_zoom,
                )
                    .chain(),
            )
            .add_systems(
                Update,
                (
                    shortcuts::handle_brush_shortcuts.run_if(conditions::no_dialog_open),
                    shortcuts::handle_action_shortcuts.run_if(conditions::no_dialog_open),
                    input::cancel_on_focus_loss,
                    input::handle_mouse_draw,
                    input::handle_touch_draw,
                    shortcuts::handle_undo,
                    shortcuts::handle_clear,
                    display::redraw_canvas.run_if(conditions::canvas_is_dirty),
                )
                    .chain(),
            )
            .add_systems(
                Update,
                (
                    sync_brush_preferences,
                    photo::request_photo_dialog,
                    photo::poll_photo_task,
                    export::request_export,
                    export::poll_export_task,
                ),
            );
    }
}

mod dialogs;
mod toolbar;

use bevy::prelude::*;
use bevy_egui::EguiPrimaryContextPass;

use crate::config::ConfigResetNotification;
use crate::editor::{ExportStatus, PhotoState};

/// Resource that tracks whether any modal dialog is currently open.
/// Editor input handlers check this so clicks on a dialog never start a stroke.
#[derive(Resource, Default)]
pub struct DialogState {
    pub any_modal_open: bool,
}

/// System to aggregate all dialog open states into a single resource.
/// Runs in First schedule before input handlers.
fn update_dialog_state(
    config_reset: Res<ConfigResetNotification>,
    photo: Res<PhotoState>,
    export: Res<ExportStatus>,
    mut dialog_state: ResMut<DialogState>,
) {
    dialog_state.any_modal_open = config_reset.show
        || photo.error.is_some()
        || export.error.is_some()
        || photo.is_loading()
        || export.is_exporting();
}

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DialogState>()
            .add_systems(
                EguiPrimaryContextPass,
                (
                    toolbar::toolbar_ui,
                    toolbar::brush_settings_ui,
                    dialogs::status_bar_ui,
                )
                    .chain(),
            )
            .add_systems(
                EguiPrimaryContextPass,
                (
                    dialogs::config_reset_notification_ui,
                    dialogs::error_dialog_ui,
                )
                    .after(dialogs::status_bar_ui),
            )
            .add_systems(First, update_dialog_state);
    }
}

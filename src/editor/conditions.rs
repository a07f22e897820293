//! Run conditions for controlling when editor systems execute.

use bevy::prelude::*;

use crate::ui::DialogState;

use super::state::CanvasDirty;

/// Run condition: returns true when no modal dialog is open.
///
/// Usage: `.run_if(no_dialog_open)`
pub fn no_dialog_open(dialog_state: Res<DialogState>) -> bool {
    !dialog_state.any_modal_open
}

/// Run condition: returns true when the canvas has a pending repaint.
pub fn canvas_is_dirty(dirty: Res<CanvasDirty>) -> bool {
    dirty.is_dirty()
}

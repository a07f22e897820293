//! Pointer input: mouse and touch samples drive the canvas stroke lifecycle.
//!
//! Only one pointer draws at a time. A press that lands on the UI or off the
//! canvas does not start a stroke; once a stroke runs, samples outside the
//! canvas are still forwarded so the path follows the pointer to the edge.

use bevy::input::touch::Touches;
use bevy::prelude::*;
use bevy::window::WindowFocused;
use bevy_egui::EguiContexts;

use crate::ui::DialogState;

use super::params::{canvas_contains, is_cursor_over_ui, CanvasParams};
use super::state::{Canvas, CanvasDirty, PointerSource, PointerState};

pub fn handle_mouse_draw(
    mouse_button: Res<ButtonInput<MouseButton>>,
    camera: CanvasParams,
    mut canvas: ResMut<Canvas>,
    mut dirty: ResMut<CanvasDirty>,
    mut pointer: ResMut<PointerState>,
    mut contexts: EguiContexts,
    dialog_state: Res<DialogState>,
) {
    let drawing_with_mouse = pointer.source == Some(PointerSource::Mouse);

    if mouse_button.just_released(MouseButton::Left) && drawing_with_mouse {
        pointer.source = None;
        // Paint order changes once the stroke joins its bucket
        if canvas.end().is_some() {
            dirty.mark_full();
        }
        return;
    }

    let Some(pos) = camera.cursor_canvas_pos() else {
        return;
    };

    if mouse_button.just_pressed(MouseButton::Left) && pointer.source.is_none() {
        if dialog_state.any_modal_open || is_cursor_over_ui(&mut contexts) || !canvas_contains(pos)
        {
            return;
        }
        if let Some(redraw) = canvas.begin(pos) {
            pointer.source = Some(PointerSource::Mouse);
            dirty.mark(redraw);
        }
    } else if mouse_button.pressed(MouseButton::Left) && drawing_with_mouse {
        if let Some(redraw) = canvas.extend(pos) {
            dirty.mark(redraw);
        }
    }
}

pub fn handle_touch_draw(
    touches: Res<Touches>,
    camera: CanvasParams,
    mut canvas: ResMut<Canvas>,
    mut dirty: ResMut<CanvasDirty>,
    mut pointer: ResMut<PointerState>,
    mut contexts: EguiContexts,
    dialog_state: Res<DialogState>,
) {
    if let Some(PointerSource::Touch(id)) = pointer.source {
        if touches.just_canceled(id) {
            pointer.source = None;
            if canvas.cancel() {
                dirty.mark_full();
            }
            return;
        }
        if touches.just_released(id) {
            pointer.source = None;
            if canvas.end().is_some() {
                dirty.mark_full();
            }
            return;
        }
        if let Some(touch) = touches.get_pressed(id)
            && let Some(pos) = camera.viewport_to_canvas(touch.position())
            && let Some(redraw) = canvas.extend(pos)
        {
            dirty.mark(redraw);
        }
        return;
    }

    if pointer.source.is_some() || dialog_state.any_modal_open || is_cursor_over_ui(&mut contexts)
    {
        return;
    }

    let Some(touch) = touches.iter_just_pressed().next() else {
        return;
    };
    let Some(pos) = camera.viewport_to_canvas(touch.position()) else {
        return;
    };
    if !canvas_contains(pos) {
        return;
    }
    if let Some(redraw) = canvas.begin(pos) {
        pointer.source = Some(PointerSource::Touch(touch.id()));
        dirty.mark(redraw);
    }
}

/// Losing window focus mid-gesture cancels the stroke, like a system touch cancellation.
pub fn cancel_on_focus_loss(
    mut focus_events: MessageReader<WindowFocused>,
    mut canvas: ResMut<Canvas>,
    mut dirty: ResMut<CanvasDirty>,
    mut pointer: ResMut<PointerState>,
) {
    let lost_focus = focus_events.read().any(|event| !event.focused);
    if lost_focus && pointer.source.take().is_some() && canvas.cancel() {
        info!("Window lost focus; cancelled active stroke");
        dirty.mark_full();
    }
}

//! Keyboard shortcuts and the undo/clear actions they share with the toolbar.

use bevy::prelude::*;
use bevy_egui::EguiContexts;

use crate::annotations::{Category, Severity};

use super::params::ui_wants_keyboard;
use super::state::{Canvas, CanvasDirty};

/// Message to undo the last stroke of the current brush bucket
#[derive(Message)]
pub struct UndoStrokeRequest;

/// Message to remove every stroke
#[derive(Message)]
pub struct ClearAnnotationsRequest;

const CATEGORY_KEYS: [KeyCode; 6] = [
    KeyCode::Digit1,
    KeyCode::Digit2,
    KeyCode::Digit3,
    KeyCode::Digit4,
    KeyCode::Digit5,
    KeyCode::Digit6,
];

const SEVERITY_KEYS: [KeyCode; 3] = [KeyCode::KeyQ, KeyCode::KeyW, KeyCode::KeyE];

pub fn category_for_key(key: KeyCode) -> Option<Category> {
    CATEGORY_KEYS
        .iter()
        .position(|k| *k == key)
        .map(|i| Category::ALL[i])
}

pub fn severity_for_key(key: KeyCode) -> Option<Severity> {
    SEVERITY_KEYS
        .iter()
        .position(|k| *k == key)
        .map(|i| Severity::ALL[i])
}

pub fn handle_brush_shortcuts(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut canvas: ResMut<Canvas>,
    mut contexts: EguiContexts,
) {
    if ui_wants_keyboard(&mut contexts) {
        return;
    }

    let ctrl = keyboard.pressed(KeyCode::ControlLeft) || keyboard.pressed(KeyCode::ControlRight);
    if ctrl {
        return;
    }

    for key in keyboard.get_just_pressed() {
        if let Some(category) = category_for_key(*key) {
            canvas.set_category(category);
        } else if let Some(severity) = severity_for_key(*key) {
            canvas.set_severity(severity);
        } else if *key == KeyCode::KeyD {
            let enabled = !canvas.brush().drawing_enabled;
            canvas.set_drawing_enabled(enabled);
            debug!("Drawing {}", if enabled { "enabled" } else { "disabled" });
        }
    }
}

pub fn handle_action_shortcuts(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut contexts: EguiContexts,
    mut undo_events: MessageWriter<UndoStrokeRequest>,
    mut clear_events: MessageWriter<ClearAnnotationsRequest>,
) {
    if ui_wants_keyboard(&mut contexts) {
        return;
    }

    let ctrl = keyboard.pressed(KeyCode::ControlLeft) || keyboard.pressed(KeyCode::ControlRight);
    let shift = keyboard.pressed(KeyCode::ShiftLeft) || keyboard.pressed(KeyCode::ShiftRight);
    if !ctrl {
        return;
    }

    if !shift && keyboard.just_pressed(KeyCode::KeyZ) {
        undo_events.write(UndoStrokeRequest);
    } else if shift && keyboard.just_pressed(KeyCode::Backspace) {
        clear_events.write(ClearAnnotationsRequest);
    }
}

pub fn handle_undo(
    mut events: MessageReader<UndoStrokeRequest>,
    mut canvas: ResMut<Canvas>,
    mut dirty: ResMut<CanvasDirty>,
) {
    for _ in events.read() {
        if canvas.undo_last().is_some() {
            dirty.mark_full();
        }
    }
}

pub fn handle_clear(
    mut events: MessageReader<ClearAnnotationsRequest>,
    mut canvas: ResMut<Canvas>,
    mut dirty: ResMut<CanvasDirty>,
) {
    if events.read().count() == 0 {
        return;
    }
    let removed = canvas.clear_all();
    info!("Cleared {} strokes", removed);
    dirty.mark_full();
}

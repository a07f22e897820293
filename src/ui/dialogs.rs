use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::config::ConfigResetNotification;
use crate::editor::{ExportStatus, PhotoState};
use crate::theme::ui as colors;

/// Shorten long paths from the left so the file name stays visible
fn display_path(path: &std::path::Path) -> String {
    let path_str = path.to_string_lossy();
    let chars: Vec<char> = path_str.chars().collect();
    if chars.len() > 50 {
        let tail: String = chars[chars.len() - 47..].iter().collect();
        format!("...{}", tail)
    } else {
        path_str.to_string()
    }
}

/// Renders the notification shown when a corrupted config was replaced with defaults
pub fn config_reset_notification_ui(
    mut contexts: EguiContexts,
    mut notification: ResMut<ConfigResetNotification>,
) -> Result {
    if !notification.show {
        return Ok(());
    }

    egui::Window::new("Settings Reset")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(contexts.ctx_mut()?, |ui| {
            ui.label("Your settings could not be read and were reset to defaults.");
            if let Some(ref reason) = notification.reason {
                ui.add_space(5.0);
                ui.label(egui::RichText::new(reason).weak());
            }
            ui.add_space(10.0);
            if ui.button("OK").clicked() {
                notification.show = false;
                notification.reason = None;
            }
        });

    Ok(())
}

/// Renders photo and export failures
pub fn error_dialog_ui(
    mut contexts: EguiContexts,
    mut photo: ResMut<PhotoState>,
    mut export: ResMut<ExportStatus>,
) -> Result {
    let (title, message) = if let Some(ref message) = photo.error {
        ("Photo Error", message.clone())
    } else if let Some(ref message) = export.error {
        ("Export Error", message.clone())
    } else {
        return Ok(());
    };

    egui::Window::new(title)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(contexts.ctx_mut()?, |ui| {
            ui.colored_label(colors::ERROR_TEXT, message);
            ui.add_space(10.0);
            if ui.button("OK").clicked() {
                if photo.error.is_some() {
                    photo.error = None;
                } else {
                    export.error = None;
                }
            }
        });

    Ok(())
}

/// Bottom status line for background work and the last export
pub fn status_bar_ui(
    mut contexts: EguiContexts,
    photo: Res<PhotoState>,
    export: Res<ExportStatus>,
) -> Result {
    egui::TopBottomPanel::bottom("status_bar").show(contexts.ctx_mut()?, |ui| {
        ui.horizontal(|ui| {
            if export.is_exporting() {
                ui.spinner();
                ui.label("Exporting...");
            } else if photo.is_loading() {
                ui.spinner();
                ui.label("Loading photo...");
            } else if let Some(ref files) = export.last_export {
                ui.colored_label(
                    colors::SUCCESS_TEXT,
                    format!("Exported {}", display_path(&files.json)),
                )
                .on_hover_text(files.png.to_string_lossy().to_string());
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let photo_label = photo
                    .loaded_path
                    .as_deref()
                    .map(display_path)
                    .unwrap_or_else(|| "No photo".to_string());
                ui.label(egui::RichText::new(photo_label).color(colors::HINT_TEXT));
            });
        });
    });
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_display_path_keeps_short_paths() {
        assert_eq!(display_path(Path::new("/tmp/face.png")), "/tmp/face.png");
    }

    #[test]
    fn test_display_path_truncates_from_left() {
        let long = format!("/{}/face.png", "a".repeat(80));
        let shown = display_path(Path::new(&long));
        assert!(shown.starts_with("..."));
        assert!(shown.ends_with("face.png"));
        assert_eq!(shown.chars().count(), 50);
    }
}

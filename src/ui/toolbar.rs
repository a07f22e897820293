use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::annotations::{Category, Severity};
use crate::constants::{MAX_BRUSH_WIDTH, MIN_BRUSH_WIDTH};
use crate::editor::{
    Canvas, ClearAnnotationsRequest, ExportRequest, ExportStatus, OpenPhotoRequest, PhotoState,
    UndoStrokeRequest,
};
use crate::theme::{self, ui as colors};

/// Main toolbar: category and severity pickers plus canvas actions
#[allow(clippy::too_many_arguments)]
pub fn toolbar_ui(
    mut contexts: EguiContexts,
    mut canvas: ResMut<Canvas>,
    photo: Res<PhotoState>,
    export: Res<ExportStatus>,
    mut undo_events: MessageWriter<UndoStrokeRequest>,
    mut clear_events: MessageWriter<ClearAnnotationsRequest>,
    mut photo_events: MessageWriter<OpenPhotoRequest>,
    mut export_events: MessageWriter<ExportRequest>,
) -> Result {
    egui::TopBottomPanel::top("main_toolbar")
        .frame(
            egui::Frame::side_top_panel(&contexts.ctx_mut()?.style())
                .inner_margin(egui::Margin::symmetric(12, 8)),
        )
        .show(contexts.ctx_mut()?, |ui| {
            ui.horizontal(|ui| {
                ui.spacing_mut().item_spacing.x = 4.0;

                let brush = *canvas.brush();
                for (index, category) in Category::ALL.iter().enumerate() {
                    let selected = brush.category == *category;
                    let button = egui::Button::new(
                        egui::RichText::new(format!("{} [{}]", category.display_name(), index + 1))
                            .size(14.0)
                            .strong()
                            .color(egui::Color32::BLACK),
                    )
                    .fill(theme::to_egui_opaque(category.base_color()))
                    .min_size(egui::vec2(0.0, 28.0))
                    .stroke(if selected {
                        egui::Stroke::new(2.0, colors::MAIN_ORANGE)
                    } else {
                        egui::Stroke::new(1.0, colors::UNSELECTED_BORDER)
                    });

                    if ui.add(button).clicked() {
                        canvas.set_category(*category);
                    }
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let busy = photo.is_loading() || export.is_exporting();

                    if ui
                        .add_enabled(
                            !busy && !canvas.is_empty(),
                            egui::Button::new("Export").min_size(egui::vec2(0.0, 24.0)),
                        )
                        .on_hover_text("Save annotations as JSON and PNG")
                        .clicked()
                    {
                        export_events.write(ExportRequest);
                    }

                    if ui
                        .add_enabled(
                            !busy,
                            egui::Button::new("Open Photo").min_size(egui::vec2(0.0, 24.0)),
                        )
                        .clicked()
                    {
                        photo_events.write(OpenPhotoRequest);
                    }

                    ui.separator();

                    if ui
                        .add_enabled(!canvas.is_empty(), egui::Button::new("Clear"))
                        .on_hover_text("Ctrl+Shift+Backspace")
                        .clicked()
                    {
                        clear_events.write(ClearAnnotationsRequest);
                    }

                    if ui
                        .add_enabled(canvas.can_undo(), egui::Button::new("Undo"))
                        .on_hover_text("Undo the last stroke of this category and severity (Ctrl+Z)")
                        .clicked()
                    {
                        undo_events.write(UndoStrokeRequest);
                    }
                });
            });
        });
    Ok(())
}

/// Secondary bar with severity, width and the drawing toggle
pub fn brush_settings_ui(mut contexts: EguiContexts, mut canvas: ResMut<Canvas>) -> Result {
    egui::TopBottomPanel::top("brush_settings")
        .frame(
            egui::Frame::side_top_panel(&contexts.ctx_mut()?.style())
                .inner_margin(egui::Margin::symmetric(12, 6))
                .fill(colors::PANEL_BACKGROUND),
        )
        .show(contexts.ctx_mut()?, |ui| {
            ui.horizontal(|ui| {
                ui.spacing_mut().item_spacing.x = 6.0;

                let brush = *canvas.brush();

                ui.label(egui::RichText::new("Severity:").color(colors::LABEL_TEXT));
                for severity in Severity::ALL {
                    let selected = brush.severity == severity;
                    let swatch = egui::Button::new("")
                        .fill(theme::swatch(brush.category, severity))
                        .min_size(egui::vec2(18.0, 18.0))
                        .stroke(if selected {
                            egui::Stroke::new(2.0, colors::SELECTED_BORDER)
                        } else {
                            egui::Stroke::new(1.0, colors::UNSELECTED_BORDER)
                        });
                    let swatch_clicked = ui.add(swatch).clicked();
                    let label_clicked = ui
                        .selectable_label(
                            selected,
                            format!("{} [{}]", severity.display_name(), severity_key(severity)),
                        )
                        .clicked();
                    if swatch_clicked || label_clicked {
                        canvas.set_severity(severity);
                    }
                }

                ui.add_space(12.0);
                ui.separator();
                ui.add_space(12.0);

                ui.label(egui::RichText::new("Width:").color(colors::LABEL_TEXT));
                let mut width = brush.width;
                if ui
                    .add(
                        egui::Slider::new(&mut width, MIN_BRUSH_WIDTH..=MAX_BRUSH_WIDTH)
                            .fixed_decimals(0)
                            .suffix(" px"),
                    )
                    .changed()
                {
                    canvas.set_width(width);
                }

                ui.add_space(12.0);
                ui.separator();
                ui.add_space(12.0);

                let mut enabled = brush.drawing_enabled;
                if ui.checkbox(&mut enabled, "Drawing [D]").changed() {
                    canvas.set_drawing_enabled(enabled);
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new(format!("{} strokes", canvas.stroke_count()))
                            .color(colors::LABEL_TEXT),
                    );
                    ui.label(
                        egui::RichText::new("Middle-drag: Pan  Scroll: Zoom  Home: Fit")
                            .color(colors::HINT_TEXT)
                            .size(11.0),
                    );
                });
            });
        });
    Ok(())
}

fn severity_key(severity: Severity) -> &'static str {
    match severity {
        Severity::Light => "Q",
        Severity::Moderate => "W",
        Severity::Intense => "E",
    }
}

//! Palette for annotation categories, the canvas backdrop and the egui panels.

use bevy::prelude::{Alpha, Color, ColorToPacked};
use bevy_egui::egui;

use crate::annotations::{Category, Severity};

// ============================================================================
// Category Palette
// ============================================================================

/// Acne
pub const INDIGO: Color = Color::srgb(109.0 / 255.0, 111.0 / 255.0, 225.0 / 255.0);

/// Scarring
pub const LILAC: Color = Color::srgb(225.0 / 255.0, 208.0 / 255.0, 237.0 / 255.0);

/// Irritation
pub const YELLOW: Color = Color::srgb(248.0 / 255.0, 218.0 / 255.0, 104.0 / 255.0);

/// Redness
pub const PEACH: Color = Color::srgb(249.0 / 255.0, 206.0 / 255.0, 200.0 / 255.0);

/// Oiliness
pub const AQUAMARINE: Color = Color::srgb(0.0, 159.0 / 255.0, 146.0 / 255.0);

/// Dryness
pub const SEAFOAM: Color = Color::srgb(175.0 / 255.0, 236.0 / 255.0, 208.0 / 255.0);

// ============================================================================
// Canvas Colors
// ============================================================================

/// Window clear color behind the canvas
pub const BACKGROUND_GREY: Color = Color::srgb(251.0 / 255.0, 249.0 / 255.0, 250.0 / 255.0);

/// Backdrop shown when no photo is loaded
pub const EMPTY_PHOTO: Color = Color::srgb(0.85, 0.84, 0.85);

// ============================================================================
// UI Colors (egui)
// ============================================================================

pub mod ui {
    use bevy_egui::egui;

    /// Border of the selected category button
    pub const MAIN_ORANGE: egui::Color32 = egui::Color32::from_rgb(245, 117, 95);

    /// Brush settings bar background
    pub const PANEL_BACKGROUND: egui::Color32 = egui::Color32::from_rgb(45, 45, 48);

    /// Light grey for label text
    pub const LABEL_TEXT: egui::Color32 = egui::Color32::LIGHT_GRAY;

    /// Grey for help/hint text
    pub const HINT_TEXT: egui::Color32 = egui::Color32::GRAY;

    /// White for selected button borders
    pub const SELECTED_BORDER: egui::Color32 = egui::Color32::WHITE;

    /// Dark grey for unselected button borders
    pub const UNSELECTED_BORDER: egui::Color32 = egui::Color32::DARK_GRAY;

    /// Red for error messages
    pub const ERROR_TEXT: egui::Color32 = egui::Color32::RED;

    /// Green for success messages
    pub const SUCCESS_TEXT: egui::Color32 = egui::Color32::from_rgb(100, 200, 100);
}

// ============================================================================
// Color Conversion Utilities
// ============================================================================

/// Convert a Bevy Color to egui Color32, keeping its alpha
pub fn to_egui(color: Color) -> egui::Color32 {
    let [r, g, b, a] = color.to_srgba().to_u8_array();
    egui::Color32::from_rgba_unmultiplied(r, g, b, a)
}

/// Convert a Bevy Color to egui Color32 with alpha forced to 255
pub fn to_egui_opaque(color: Color) -> egui::Color32 {
    to_egui(color.with_alpha(1.0))
}

/// Swatch color for a brush picker button
pub fn swatch(category: Category, severity: Severity) -> egui::Color32 {
    to_egui(category.color(severity))
}

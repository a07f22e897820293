//! Skin-condition categories and severity levels for annotation strokes.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::theme;

/// Semantic label attached to a stroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    Acne,
    Scarring,
    Irritation,
    Redness,
    Oiliness,
    Dryness,
}

impl Category {
    /// Fixed enumeration order. Rendering layers follow this order.
    pub const ALL: [Category; 6] = [
        Category::Acne,
        Category::Scarring,
        Category::Irritation,
        Category::Redness,
        Category::Oiliness,
        Category::Dryness,
    ];

    pub fn index(&self) -> usize {
        match self {
            Category::Acne => 0,
            Category::Scarring => 1,
            Category::Irritation => 2,
            Category::Redness => 3,
            Category::Oiliness => 4,
            Category::Dryness => 5,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Acne => "acne",
            Category::Scarring => "scarring",
            Category::Irritation => "irritation",
            Category::Redness => "redness",
            Category::Oiliness => "oiliness",
            Category::Dryness => "dryness",
        }
    }

    /// Opaque palette color for this category
    pub fn base_color(&self) -> Color {
        match self {
            Category::Acne => theme::INDIGO,
            Category::Scarring => theme::LILAC,
            Category::Irritation => theme::YELLOW,
            Category::Redness => theme::PEACH,
            Category::Oiliness => theme::AQUAMARINE,
            Category::Dryness => theme::SEAFOAM,
        }
    }

    /// Color a stroke of this category receives at the given severity.
    pub fn color(&self, severity: Severity) -> Color {
        self.base_color().with_alpha(severity.opacity())
    }
}

/// Intensity level of a stroke. Controls its opacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Light,
    #[default]
    Moderate,
    Intense,
}

impl Severity {
    /// Ascending intensity.
    pub const ALL: [Severity; 3] = [Severity::Light, Severity::Moderate, Severity::Intense];

    /// Paint order within a category layer.
    pub const DRAW_ORDER: [Severity; 3] = [Severity::Intense, Severity::Moderate, Severity::Light];

    pub fn index(&self) -> usize {
        match self {
            Severity::Light => 0,
            Severity::Moderate => 1,
            Severity::Intense => 2,
        }
    }

    pub fn opacity(&self) -> f32 {
        match self {
            Severity::Light => 0.2,
            Severity::Moderate => 0.5,
            Severity::Intense => 0.75,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Severity::Light => "light",
            Severity::Moderate => "moderate",
            Severity::Intense => "intense",
        }
    }
}

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::annotations::{BrushSettings, Category, Severity};
use crate::constants::DEFAULT_BRUSH_WIDTH;

/// System set for config loading (other plugins can run after this)
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConfigLoaded;

fn default_brush_width() -> f32 {
    DEFAULT_BRUSH_WIDTH
}

/// Application configuration persisted to disk
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfigData {
    /// Brush width restored on startup
    #[serde(default = "default_brush_width")]
    pub brush_width: f32,

    /// Category selected when the app was last closed
    #[serde(default)]
    pub last_category: Category,

    /// Severity selected when the app was last closed
    #[serde(default)]
    pub last_severity: Severity,

    /// Directory of the most recent annotation export
    #[serde(default)]
    pub last_export_dir: Option<PathBuf>,

    /// Last background photo (not auto-loaded, just remembered for the open dialog)
    #[serde(default)]
    pub last_photo_path: Option<PathBuf>,
}

impl Default for AppConfigData {
    fn default() -> Self {
        Self {
            brush_width: DEFAULT_BRUSH_WIDTH,
            last_category: Category::default(),
            last_severity: Severity::default(),
            last_export_dir: None,
            last_photo_path: None,
        }
    }
}

impl AppConfigData {
    /// Brush the canvas starts with. Drawing starts enabled.
    pub fn initial_brush(&self) -> BrushSettings {
        BrushSettings {
            category: self.last_category,
            severity: self.last_severity,
            width: BrushSettings::clamp_width(self.brush_width),
            drawing_enabled: true,
        }
    }
}

/// Runtime configuration resource
#[derive(Resource)]
pub struct AppConfig {
    /// The persisted configuration data
    pub data: AppConfigData,
    /// Path to the config file
    pub config_path: PathBuf,
    /// Whether config needs to be saved (dirty flag)
    pub dirty: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data: AppConfigData::default(),
            config_path: get_config_path(),
            dirty: false,
        }
    }
}

/// Resource to notify user when config was reset to defaults
#[derive(Resource, Default)]
pub struct ConfigResetNotification {
    /// Whether to show the notification dialog
    pub show: bool,
    /// The reason for the reset (parse error, read error, etc.)
    pub reason: Option<String>,
}

/// Message to trigger config save
#[derive(Message)]
pub struct SaveConfigRequest;

/// Message to remember the current brush selection
#[derive(Message)]
pub struct UpdateBrushPreferencesRequest {
    pub brush: BrushSettings,
}

/// Message to remember where the last export went
#[derive(Message)]
pub struct UpdateLastExportDirRequest {
    pub path: PathBuf,
}

/// Message to remember the last background photo
#[derive(Message)]
pub struct UpdateLastPhotoPathRequest {
    pub path: PathBuf,
}

/// Get the path to the config file (platform-appropriate location)
fn get_config_path() -> PathBuf {
    crate::paths::config_file()
}

/// Result of parsing config text
struct ParsedConfig {
    data: AppConfigData,
    /// Error message if config was reset to defaults due to an error
    reset_reason: Option<String>,
}

fn parse_config(json: &str) -> ParsedConfig {
    match serde_json::from_str(json) {
        Ok(data) => ParsedConfig {
            data,
            reset_reason: None,
        },
        Err(e) => {
            warn!("Failed to parse config file: {}", e);
            ParsedConfig {
                data: AppConfigData::default(),
                reset_reason: Some(format!("Configuration file was corrupted: {}", e)),
            }
        }
    }
}

/// Load configuration from disk
fn load_config() -> (AppConfig, Option<String>) {
    let config_path = get_config_path();

    let parsed = if config_path.exists() {
        match std::fs::read_to_string(&config_path) {
            Ok(json) => {
                let parsed = parse_config(&json);
                if parsed.reset_reason.is_none() {
                    info!("Loaded config from {:?}", config_path);
                }
                parsed
            }
            Err(e) => {
                warn!("Failed to read config file: {}", e);
                ParsedConfig {
                    data: AppConfigData::default(),
                    reset_reason: Some(format!("Could not read configuration file: {}", e)),
                }
            }
        }
    } else {
        info!("No config file found, using defaults");
        ParsedConfig {
            data: AppConfigData::default(),
            reset_reason: None,
        }
    };

    (
        AppConfig {
            data: parsed.data,
            config_path,
            dirty: false,
        },
        parsed.reset_reason,
    )
}

/// Save configuration to disk
fn save_config(config: &AppConfig) {
    match serde_json::to_string_pretty(&config.data) {
        Ok(json) => {
            if let Err(e) = std::fs::write(&config.config_path, json) {
                error!("Failed to save config: {}", e);
            } else {
                info!("Config saved to {:?}", config.config_path);
            }
        }
        Err(e) => {
            error!("Failed to serialize config: {}", e);
        }
    }
}

/// Startup system to load config from disk into the existing resource
fn load_config_system(
    mut config: ResMut<AppConfig>,
    mut reset_notification: ResMut<ConfigResetNotification>,
) {
    let (loaded, reset_reason) = load_config();
    *config = loaded;

    // Set notification if config was reset due to an error
    if let Some(reason) = reset_reason {
        reset_notification.show = true;
        reset_notification.reason = Some(reason);
    }
}

/// System to save config when requested
fn save_config_system(
    mut events: MessageReader<SaveConfigRequest>,
    mut config: ResMut<AppConfig>,
) {
    for _ in events.read() {
        if config.dirty {
            save_config(&config);
            config.dirty = false;
        }
    }
}

/// Apply a brush selection to the persisted preferences. Returns true if anything changed.
fn apply_brush_preferences(data: &mut AppConfigData, brush: &BrushSettings) -> bool {
    let changed = data.last_category != brush.category
        || data.last_severity != brush.severity
        || data.brush_width != brush.width;
    data.last_category = brush.category;
    data.last_severity = brush.severity;
    data.brush_width = brush.width;
    changed
}

/// System to remember the brush selection
fn update_brush_preferences_system(
    mut events: MessageReader<UpdateBrushPreferencesRequest>,
    mut config: ResMut<AppConfig>,
    mut save_events: MessageWriter<SaveConfigRequest>,
) {
    for event in events.read() {
        if apply_brush_preferences(&mut config.data, &event.brush) {
            config.dirty = true;
            save_events.write(SaveConfigRequest);
        }
    }
}

/// System to update the last export directory
fn update_last_export_dir_system(
    mut events: MessageReader<UpdateLastExportDirRequest>,
    mut config: ResMut<AppConfig>,
    mut save_events: MessageWriter<SaveConfigRequest>,
) {
    for event in events.read() {
        config.data.last_export_dir = Some(event.path.clone());
        config.dirty = true;
        save_events.write(SaveConfigRequest);
    }
}

/// System to update the last photo path
fn update_last_photo_path_system(
    mut events: MessageReader<UpdateLastPhotoPathRequest>,
    mut config: ResMut<AppConfig>,
    mut save_events: MessageWriter<SaveConfigRequest>,
) {
    for event in events.read() {
        config.data.last_photo_path = Some(event.path.clone());
        config.dirty = true;
        save_events.write(SaveConfigRequest);
    }
}

pub struct ConfigPlugin;

impl Plugin for ConfigPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<AppConfig>()
            .init_resource::<ConfigResetNotification>()
            .add_message::<SaveConfigRequest>()
            .add_message::<UpdateBrushPreferencesRequest>()
            .add_message::<UpdateLastExportDirRequest>()
            .add_message::<UpdateLastPhotoPathRequest>()
            .add_systems(Startup, load_config_system.in_set(ConfigLoaded))
            .add_systems(
                Update,
                (
                    update_brush_preferences_system
                        .run_if(on_message::<UpdateBrushPreferencesRequest>),
                    update_last_export_dir_system.run_if(on_message::<UpdateLastExportDirRequest>),
                    update_last_photo_path_system.run_if(on_message::<UpdateLastPhotoPathRequest>),
                    save_config_system.run_if(on_message::<SaveConfigRequest>),
                )
                    .chain(),
            );
    }
}

//! Where skinmark keeps its config, logs and exports.
//!
//! Development runs (cargo run, debug builds) keep everything next to the
//! working directory. Installed builds use the platform directories from
//! `dirs`, under a `skinmark` subfolder.

use std::path::{Path, PathBuf};

const APP_DIR: &str = "skinmark";

/// Returns true when running from cargo or a debug build.
pub fn is_dev_mode() -> bool {
    std::env::var("CARGO").is_ok() || cfg!(debug_assertions)
}

/// Resolved application directories
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppDirs {
    pub config: PathBuf,
    pub logs: PathBuf,
    /// Starting folder for the first export dialog
    pub exports: PathBuf,
}

impl AppDirs {
    pub fn local() -> Self {
        Self {
            config: PathBuf::from("."),
            logs: PathBuf::from("logs"),
            exports: PathBuf::from("exports"),
        }
    }

    /// Platform locations. Linux splits config from data; elsewhere both live
    /// in the data directory.
    pub fn installed() -> Self {
        let data = dirs::data_dir()
            .map(|p| p.join(APP_DIR))
            .unwrap_or_else(|| PathBuf::from("."));

        #[cfg(target_os = "linux")]
        let config = dirs::config_dir()
            .map(|p| p.join(APP_DIR))
            .unwrap_or_else(|| data.clone());
        #[cfg(not(target_os = "linux"))]
        let config = data.clone();

        let exports = dirs::document_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."));

        Self {
            config,
            logs: data.join("logs"),
            exports,
        }
    }

    pub fn current() -> Self {
        if is_dev_mode() {
            Self::local()
        } else {
            Self::installed()
        }
    }

    /// Create the directories skinmark writes into. Exports are only created
    /// in dev mode; installed builds use an existing documents folder.
    pub fn ensure(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(&self.config)?;
        std::fs::create_dir_all(&self.logs)?;
        if is_dev_mode() {
            std::fs::create_dir_all(&self.exports)?;
        }
        Ok(())
    }
}

pub fn config_file() -> PathBuf {
    AppDirs::current().config.join("config.json")
}

pub fn logs_dir() -> PathBuf {
    AppDirs::current().logs
}

pub fn default_export_dir() -> PathBuf {
    AppDirs::current().exports
}

pub fn ensure_directories() -> std::io::Result<()> {
    AppDirs::current().ensure()
}

/// File name offered by the export dialog: named after the photo when one
/// is loaded, otherwise timestamped.
pub fn suggested_export_name(photo: Option<&Path>) -> String {
    match photo.and_then(Path::file_stem).and_then(|s| s.to_str()) {
        Some(stem) if !stem.is_empty() => format!("{}-annotations.json", stem),
        _ => format!(
            "annotations-{}.json",
            chrono::Local::now().format("%Y%m%d-%H%M%S")
        ),
    }
}

//! Export of the committed annotations as JSON plus a transparent PNG.

use bevy::prelude::*;
use bevy::tasks::{IoTaskPool, Task};
use futures_lite::future;
use std::path::{Path, PathBuf};

use crate::annotations::{render, ExportedAnnotations, PixmapSurface};
use crate::config::{AppConfig, UpdateLastExportDirRequest};
use crate::constants::{CANVAS_HEIGHT, CANVAS_WIDTH};
use crate::paths;

use super::photo::PhotoState;
use super::state::Canvas;

/// Message to start an export
#[derive(Message)]
pub struct ExportRequest;

/// Files written by a successful export
#[derive(Debug, Clone)]
pub struct ExportedFiles {
    pub json: PathBuf,
    pub png: PathBuf,
}

type ExportResult = Option<Result<ExportedFiles, String>>;

#[derive(Resource, Default)]
pub struct ExportStatus {
    pub last_export: Option<ExportedFiles>,
    pub error: Option<String>,
    pending: Option<Task<ExportResult>>,
}

impl ExportStatus {
    pub fn is_exporting(&self) -> bool {
        self.pending.is_some()
    }
}

/// Write the JSON document and the PNG next to it, sharing a file stem.
pub fn write_export(json_path: &Path, json: &str, png: &[u8]) -> Result<ExportedFiles, String> {
    let json_path = json_path.with_extension("json");
    let png_path = json_path.with_extension("png");

    std::fs::write(&json_path, json)
        .map_err(|e| format!("Failed to write {}: {}", json_path.display(), e))?;
    std::fs::write(&png_path, png)
        .map_err(|e| format!("Failed to write {}: {}", png_path.display(), e))?;

    Ok(ExportedFiles {
        json: json_path,
        png: png_path,
    })
}

/// Snapshot the committed strokes. The stroke in progress is not exported.
fn snapshot(canvas: &Canvas) -> Result<(String, Vec<u8>), String> {
    let json = ExportedAnnotations::from(canvas.store()).to_json()?;
    let mut surface = PixmapSurface::new(CANVAS_WIDTH, CANVAS_HEIGHT)
        .ok_or_else(|| "Failed to allocate export surface".to_string())?;
    render(canvas.store(), None, &mut surface);
    let png = surface.encode_png()?;
    Ok((json, png))
}

pub fn request_export(
    mut events: MessageReader<ExportRequest>,
    mut status: ResMut<ExportStatus>,
    canvas: Res<Canvas>,
    config: Res<AppConfig>,
    photo: Res<PhotoState>,
) {
    if events.read().count() == 0 || status.pending.is_some() {
        return;
    }

    let (json, png) = match snapshot(&canvas) {
        Ok(snapshot) => snapshot,
        Err(e) => {
            error!("{}", e);
            status.error = Some(e);
            return;
        }
    };

    let start_dir = config
        .data
        .last_export_dir
        .clone()
        .unwrap_or_else(paths::default_export_dir);

    let file_name = paths::suggested_export_name(photo.loaded_path.as_deref());

    info!("Exporting {} strokes", canvas.stroke_count());

    let task_pool = IoTaskPool::get();
    status.pending = Some(task_pool.spawn(async move {
        let handle = rfd::AsyncFileDialog::new()
            .set_title("Export Annotations")
            .set_directory(&start_dir)
            .set_file_name(file_name)
            .add_filter("Annotations", &["json"])
            .save_file()
            .await?;
        Some(write_export(handle.path(), &json, &png))
    }));
}

pub fn poll_export_task(
    mut status: ResMut<ExportStatus>,
    mut config_events: MessageWriter<UpdateLastExportDirRequest>,
) {
    let Some(task) = status.pending.as_mut() else {
        return;
    };
    let Some(result) = future::block_on(future::poll_once(task)) else {
        return;
    };
    status.pending = None;

    match result {
        None => debug!("Export cancelled"),
        Some(Ok(files)) => {
            info!("Exported annotations to {:?} and {:?}", files.json, files.png);
            if let Some(dir) = files.json.parent() {
                config_events.write(UpdateLastExportDirRequest {
                    path: dir.to_path_buf(),
                });
            }
            status.last_export = Some(files);
            status.error = None;
        }
        Some(Err(e)) => {
            error!("{}", e);
            status.error = Some(e);
        }
    }
}

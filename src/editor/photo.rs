//! Optional background photo behind the annotation overlay.

use bevy::prelude::*;
use bevy::render::render_resource::{Extent3d, TextureDimension, TextureFormat};
use bevy::tasks::{AsyncComputeTaskPool, Task};
use futures_lite::future;
use std::path::{Path, PathBuf};

use crate::config::{AppConfig, UpdateLastPhotoPathRequest};
use crate::constants::PHOTO_Z;
use crate::theme;

use super::params::canvas_size;

/// Message to open the photo picker
#[derive(Message)]
pub struct OpenPhotoRequest;

/// Marker for the backdrop sprite
#[derive(Component)]
pub struct PhotoBackdrop;

/// A decoded photo ready to upload as a texture
pub struct DecodedPhoto {
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

type PhotoResult = Option<Result<DecodedPhoto, String>>;

#[derive(Resource, Default)]
pub struct PhotoState {
    pub loaded_path: Option<PathBuf>,
    pub error: Option<String>,
    pending: Option<Task<PhotoResult>>,
}

impl PhotoState {
    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }
}

pub fn decode_photo(path: &Path) -> Result<DecodedPhoto, String> {
    let rgba = image::open(path)
        .map_err(|e| format!("Failed to open {}: {}", path.display(), e))?
        .to_rgba8();
    let (width, height) = rgba.dimensions();
    if width == 0 || height == 0 {
        return Err(format!("{} has no pixels", path.display()));
    }
    Ok(DecodedPhoto {
        path: path.to_path_buf(),
        width,
        height,
        rgba: rgba.into_raw(),
    })
}

pub fn spawn_photo_backdrop(mut commands: Commands) {
    commands.spawn((
        Sprite {
            color: theme::EMPTY_PHOTO,
            custom_size: Some(canvas_size()),
            ..default()
        },
        Transform::from_translation(Vec3::new(0.0, 0.0, PHOTO_Z)),
        PhotoBackdrop,
    ));
}

pub fn request_photo_dialog(
    mut events: MessageReader<OpenPhotoRequest>,
    mut state: ResMut<PhotoState>,
    config: Res<AppConfig>,
) {
    if events.read().count() == 0 || state.pending.is_some() {
        return;
    }

    let start_dir = config
        .data
        .last_photo_path
        .as_ref()
        .and_then(|p| p.parent())
        .map(Path::to_path_buf);

    let task_pool = AsyncComputeTaskPool::get();
    state.pending = Some(task_pool.spawn(async move {
        let mut dialog = rfd::AsyncFileDialog::new()
            .set_title("Open Skin Photo")
            .add_filter("Images", &["png", "jpg", "jpeg", "webp", "bmp", "tiff", "gif"]);
        if let Some(dir) = start_dir {
            dialog = dialog.set_directory(dir);
        }
        let handle = dialog.pick_file().await?;
        Some(decode_photo(handle.path()))
    }));
}

pub fn poll_photo_task(
    mut state: ResMut<PhotoState>,
    mut images: ResMut<Assets<Image>>,
    mut backdrop: Query<&mut Sprite, With<PhotoBackdrop>>,
    mut config_events: MessageWriter<UpdateLastPhotoPathRequest>,
) {
    let Some(task) = state.pending.as_mut() else {
        return;
    };
    let Some(result) = future::block_on(future::poll_once(task)) else {
        return;
    };
    state.pending = None;

    let photo = match result {
        None => return,
        Some(Err(e)) => {
            warn!("{}", e);
            state.error = Some(e);
            return;
        }
        Some(Ok(photo)) => photo,
    };

    let image = Image::new(
        Extent3d {
            width: photo.width,
            height: photo.height,
            depth_or_array_layers: 1,
        },
        TextureDimension::D2,
        photo.rgba,
        TextureFormat::Rgba8UnormSrgb,
        default(),
    );
    let handle = images.add(image);

    for mut sprite in backdrop.iter_mut() {
        sprite.image = handle.clone();
        sprite.color = Color::WHITE;
        sprite.custom_size = Some(canvas_size());
    }

    info!(
        "Loaded photo {:?} ({}x{})",
        photo.path, photo.width, photo.height
    );
    config_events.write(UpdateLastPhotoPathRequest {
        path: photo.path.clone(),
    });
    state.loaded_path = Some(photo.path);
    state.error = None;
}

//! Shows the annotation canvas as a sprite, re-rasterizing when it changes.

use bevy::prelude::*;
use bevy::render::render_resource::{Extent3d, TextureDimension, TextureFormat};

use crate::annotations::{PixmapSurface, Redraw};
use crate::constants::{ANNOTATION_Z, CANVAS_HEIGHT, CANVAS_WIDTH};

use super::state::{Canvas, CanvasDirty};

/// Texture and CPU surface backing the annotation sprite.
#[derive(Resource)]
pub struct CanvasDisplay {
    pub image: Handle<Image>,
    surface: PixmapSurface,
}

/// Marker for the annotation overlay sprite
#[derive(Component)]
pub struct AnnotationOverlay;

fn blank_image(width: u32, height: u32) -> Image {
    Image::new(
        Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        },
        TextureDimension::D2,
        vec![0u8; (width * height * 4) as usize],
        TextureFormat::Rgba8UnormSrgb,
        default(),
    )
}

pub fn setup_canvas_display(
    mut commands: Commands,
    mut images: ResMut<Assets<Image>>,
    mut dirty: ResMut<CanvasDirty>,
) {
    let Some(surface) = PixmapSurface::new(CANVAS_WIDTH, CANVAS_HEIGHT) else {
        error!(
            "Could not allocate a {}x{} annotation surface",
            CANVAS_WIDTH, CANVAS_HEIGHT
        );
        return;
    };

    let image = images.add(blank_image(CANVAS_WIDTH, CANVAS_HEIGHT));
    commands.spawn((
        Sprite::from_image(image.clone()),
        Transform::from_translation(Vec3::new(0.0, 0.0, ANNOTATION_Z)),
        AnnotationOverlay,
    ));
    commands.insert_resource(CanvasDisplay { image, surface });
    dirty.mark_full();
}

/// Repaint once per frame at most, however many samples arrived.
pub fn redraw_canvas(
    canvas: Res<Canvas>,
    mut dirty: ResMut<CanvasDirty>,
    display: Option<ResMut<CanvasDisplay>>,
    mut images: ResMut<Assets<Image>>,
) {
    let Some(mut display) = display else {
        return;
    };
    let Some(redraw) = dirty.take() else {
        return;
    };

    if let Redraw::Region(region) = redraw {
        trace!("Canvas region changed: {:?}", region);
    }

    // Any region falls back to a full repaint of the CPU surface.
    display.surface.clear();
    let stats = canvas.paint(&mut display.surface);
    trace!(
        "Painted {} strokes in {} layers",
        stats.strokes_painted,
        stats.layers
    );

    let data = display.surface.to_rgba8();
    if let Some(mut image) = images.get_mut(&display.image) {
        image.data = Some(data);
    }
}

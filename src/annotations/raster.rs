//! Software rasterizer for annotation strokes, backed by tiny-skia.

use bevy::prelude::*;
use tiny_skia::{
    LineCap, LineJoin, Paint, PathBuilder, Pixmap, PixmapPaint, Transform as SkiaTransform,
};

use super::render::PaintSurface;
use super::stroke::Stroke;

/// RGBA pixel surface with a stack of transparency layers.
///
/// Each layer starts fully transparent. Closing a layer composites it
/// source-over onto the layer (or base) beneath at full opacity.
pub struct PixmapSurface {
    base: Pixmap,
    layers: Vec<Pixmap>,
}

impl PixmapSurface {
    /// Returns None for a zero-sized surface
    pub fn new(width: u32, height: u32) -> Option<Self> {
        Some(Self {
            base: Pixmap::new(width, height)?,
            layers: Vec::new(),
        })
    }

    /// Erase everything, dropping any layer left open.
    pub fn clear(&mut self) {
        self.layers.clear();
        self.base.fill(tiny_skia::Color::TRANSPARENT);
    }

    /// Straight (non-premultiplied) alpha of one pixel, 0..=255
    #[cfg(test)]
    pub fn alpha_at(&self, x: u32, y: u32) -> Option<u8> {
        self.base.pixel(x, y).map(|p| p.alpha())
    }

    /// Straight-alpha RGBA bytes of one pixel
    #[cfg(test)]
    pub fn pixel_at(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        self.base.pixel(x, y).map(|p| {
            let c = p.demultiply();
            [c.red(), c.green(), c.blue(), c.alpha()]
        })
    }

    /// Straight-alpha RGBA8 rows, top row first, for texture upload.
    pub fn to_rgba8(&self) -> Vec<u8> {
        let mut data = Vec::with_capacity(self.base.data().len());
        for pixel in self.base.pixels() {
            let c = pixel.demultiply();
            data.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
        }
        data
    }

    pub fn encode_png(&self) -> Result<Vec<u8>, String> {
        self.base
            .encode_png()
            .map_err(|e| format!("Failed to encode PNG: {}", e))
    }

    fn target(&mut self) -> &mut Pixmap {
        self.layers.last_mut().unwrap_or(&mut self.base)
    }
}

/// Build the tiny-skia path for a stroke's accumulated segments
fn stroke_to_path(stroke: &Stroke) -> Option<tiny_skia::Path> {
    let mut builder = PathBuilder::new();
    for segment in stroke.segments() {
        builder.move_to(segment.from.x, segment.from.y);
        builder.quad_to(segment.ctrl.x, segment.ctrl.y, segment.to.x, segment.to.y);
    }
    builder.finish()
}

fn stroke_paint(stroke: &Stroke) -> Paint<'static> {
    let srgba = stroke.color().to_srgba();
    let mut paint = Paint::default();
    paint.anti_alias = true;
    // The color's own alpha already encodes the severity; apply opacity once.
    paint.set_color_rgba8(
        (srgba.red * 255.0).round() as u8,
        (srgba.green * 255.0).round() as u8,
        (srgba.blue * 255.0).round() as u8,
        (stroke.opacity().clamp(0.0, 1.0) * 255.0).round() as u8,
    );
    paint
}

impl PaintSurface for PixmapSurface {
    fn begin_layer(&mut self) {
        // Same size as the base, so allocation cannot fail
        let Some(layer) = Pixmap::new(self.base.width(), self.base.height()) else {
            return;
        };
        self.layers.push(layer);
    }

    fn end_layer(&mut self) {
        let Some(layer) = self.layers.pop() else {
            warn!("end_layer called with no open layer");
            return;
        };
        self.target().draw_pixmap(
            0,
            0,
            layer.as_ref(),
            &PixmapPaint::default(),
            SkiaTransform::identity(),
            None,
        );
    }

    fn stroke_path(&mut self, stroke: &Stroke) {
        let Some(path) = stroke_to_path(stroke) else {
            trace!("Stroke {} produced no paintable path", stroke.id());
            return;
        };
        let paint = stroke_paint(stroke);
        let outline = tiny_skia::Stroke {
            width: stroke.width(),
            line_cap: LineCap::Round,
            line_join: LineJoin::Round,
            ..Default::default()
        };
        self.target()
            .stroke_path(&path, &paint, &outline, SkiaTransform::identity(), None);
    }
}

//! Rasterization of rendered SVG documents.
//!
//! The SVG is parsed with `usvg`, drawn onto a `tiny-skia` pixmap by
//! `resvg`, then converted from premultiplied to straight alpha so it can be
//! handed to [`crate::png`].

use heatmap_common::{HeatmapError, HeatmapResult};
use rayon::prelude::*;
use tracing::debug;

use crate::png::encode_png;

/// Straight-alpha RGBA image.
#[derive(Debug, Clone)]
pub struct RasterImage {
    pub width: usize,
    pub height: usize,
    /// 4 bytes per pixel, row-major.
    pub pixels: Vec<u8>,
}

impl RasterImage {
    /// RGBA at `(x, y)`, `None` outside the image.
    pub fn pixel(&self, x: usize, y: usize) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y * self.width + x) * 4;
        Some([
            self.pixels[i],
            self.pixels[i + 1],
            self.pixels[i + 2],
            self.pixels[i + 3],
        ])
    }
}

/// Draw an SVG document at `scale` times its intrinsic size.
pub fn rasterize_svg(svg: &str, scale: f32) -> HeatmapResult<RasterImage> {
    if !(scale > 0.0 && scale.is_finite()) {
        return Err(HeatmapError::RenderError(format!(
            "raster scale must be positive, got {}",
            scale
        )));
    }

    let mut opt = usvg::Options::default();
    opt.fontdb_mut().load_system_fonts();

    let tree = usvg::Tree::from_str(svg, &opt)
        .map_err(|e| HeatmapError::RenderError(format!("SVG parse failed: {}", e)))?;

    let size = tree.size();
    let width = (size.width() * scale).ceil() as u32;
    let height = (size.height() * scale).ceil() as u32;

    let mut pixmap = tiny_skia::Pixmap::new(width, height).ok_or_else(|| {
        HeatmapError::RenderError(format!("cannot allocate {}x{} pixmap", width, height))
    })?;

    resvg::render(
        &tree,
        tiny_skia::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );

    let pixels: Vec<u8> = pixmap
        .pixels()
        .par_iter()
        .flat_map_iter(|p| {
            let c = p.demultiply();
            [c.red(), c.green(), c.blue(), c.alpha()]
        })
        .collect();

    debug!(width, height, "Rasterized SVG");

    Ok(RasterImage {
        width: width as usize,
        height: height as usize,
        pixels,
    })
}

/// Rasterize and encode an SVG document as PNG.
pub fn svg_to_png(svg: &str, scale: f32) -> HeatmapResult<Vec<u8>> {
    let image = rasterize_svg(svg, scale)?;
    encode_png(&image.pixels, image.width, image.height)
}

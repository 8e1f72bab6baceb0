//! Writing rendered artifacts to disk.

use std::path::{Path, PathBuf};

use heatmap_common::{HeatmapError, HeatmapResult};
use renderer::raster::svg_to_png;
use renderer::RenderedHeatmap;
use tokio::fs;
use tracing::{info, instrument};

use crate::config::OutputConfig;

pub const HEATMAP_SVG: &str = "heatmap.svg";
pub const LEGEND_SVG: &str = "legend.svg";
pub const HEATMAP_HTML: &str = "heatmap.html";
pub const HEATMAP_PNG: &str = "heatmap.png";

/// Paths produced by [`write_outputs`].
#[derive(Debug, Clone, PartialEq)]
pub struct WrittenFiles {
    pub svg: PathBuf,
    pub legend: PathBuf,
    pub html: PathBuf,
    pub png: Option<PathBuf>,
}

impl WrittenFiles {
    pub fn iter(&self) -> impl Iterator<Item = &PathBuf> {
        [&self.svg, &self.legend, &self.html]
            .into_iter()
            .chain(self.png.as_ref())
    }
}

/// Write the SVG, legend and HTML documents, plus the PNG when enabled.
#[instrument(skip(rendered, output), fields(dir = %output.directory.display()))]
pub async fn write_outputs(
    rendered: &RenderedHeatmap,
    output: &OutputConfig,
) -> HeatmapResult<WrittenFiles> {
    let dir = &output.directory;
    fs::create_dir_all(dir).await?;

    let svg = write_file(dir, HEATMAP_SVG, rendered.svg.as_bytes()).await?;
    let legend = write_file(dir, LEGEND_SVG, rendered.legend_svg.as_bytes()).await?;
    let html = write_file(dir, HEATMAP_HTML, rendered.html.as_bytes()).await?;

    let png = if output.png {
        let bytes = rasterize(rendered.svg.clone(), output.png_scale).await?;
        Some(write_file(dir, HEATMAP_PNG, &bytes).await?)
    } else {
        None
    };

    Ok(WrittenFiles {
        svg,
        legend,
        html,
        png,
    })
}

/// Rasterize off the async executor.
pub async fn rasterize(svg: String, scale: f32) -> HeatmapResult<Vec<u8>> {
    tokio::task::spawn_blocking(move || svg_to_png(&svg, scale))
        .await
        .map_err(|e| HeatmapError::RenderError(format!("rasterization task failed: {}", e)))?
}

async fn write_file(dir: &Path, name: &str, contents: &[u8]) -> HeatmapResult<PathBuf> {
    let path = dir.join(name);
    fs::write(&path, contents).await?;
    info!(path = %path.display(), bytes = contents.len(), "Wrote output file");
    Ok(path)
}

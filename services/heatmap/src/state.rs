//! Application state for the heatmap server.

use bytes::Bytes;
use heatmap_common::{Dataset, HeatmapError, HeatmapResult};
use tracing::info;

use crate::config::HeatmapConfig;
use crate::output::rasterize;
use crate::pipeline::render_dataset;

/// Artifacts rendered once at startup and served as-is.
pub struct AppState {
    pub dataset: Dataset,
    pub html: Bytes,
    pub svg: Bytes,
    pub legend_svg: Bytes,
    pub png: Bytes,
    /// Dataset re-serialized in its wire format.
    pub data_json: Bytes,
}

impl AppState {
    /// Render every artifact for `dataset`. Rasterization runs on the
    /// blocking pool.
    pub async fn new(dataset: Dataset, config: &HeatmapConfig) -> HeatmapResult<Self> {
        let rendered = render_dataset(&dataset, config);
        let png = rasterize(rendered.svg.clone(), config.output.png_scale).await?;
        let data_json = serde_json::to_vec(&dataset)
            .map_err(|e| HeatmapError::EncodeError(format!("dataset JSON: {}", e)))?;

        info!(
            cells = rendered.cell_count(),
            png_bytes = png.len(),
            "Application state ready"
        );

        Ok(Self {
            dataset,
            html: Bytes::from(rendered.html),
            svg: Bytes::from(rendered.svg),
            legend_svg: Bytes::from(rendered.legend_svg),
            png: Bytes::from(png),
            data_json: Bytes::from(data_json),
        })
    }
}

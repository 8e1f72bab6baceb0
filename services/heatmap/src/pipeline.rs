//! Render step shared by the `render` and `serve` commands.

use std::time::Instant;

use heatmap_common::Dataset;
use metrics::histogram;
use renderer::{render_heatmap, RenderedHeatmap};
use tracing::info;

use crate::config::HeatmapConfig;

/// Render `dataset` with the configured geometry and palette, recording the
/// elapsed time.
pub fn render_dataset(dataset: &Dataset, config: &HeatmapConfig) -> RenderedHeatmap {
    let start = Instant::now();
    let rendered = render_heatmap(dataset, &config.render_options());
    let elapsed = start.elapsed();

    histogram!("heatmap_render_seconds").record(elapsed.as_secs_f64());
    info!(
        cells = rendered.cell_count(),
        elapsed_ms = elapsed.as_millis() as u64,
        "Render complete"
    );
    rendered
}

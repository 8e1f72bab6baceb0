//! End-to-end render of a dataset into its output documents.

use heatmap_common::{CanvasSpec, Dataset, HeatmapResult, LegendSpec};
use tracing::{info, instrument, warn};

use crate::axis::{render_axes, Axes};
use crate::band::Palette;
use crate::context::{Cell, RenderContext};
use crate::html::{render_page, PageText};
use crate::legend::{layout_legend, Legend};
use crate::raster::svg_to_png;
use crate::svg::{render_heatmap_svg, render_legend_svg, SvgOptions};

/// Everything that shapes the output besides the data itself.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderOptions {
    pub canvas: CanvasSpec,
    pub legend: LegendSpec,
    pub palette: Palette,
    pub svg: SvgOptions,
}

/// Output of one render pass.
#[derive(Debug, Clone)]
pub struct RenderedHeatmap {
    pub context: RenderContext,
    pub cells: Vec<Cell>,
    pub axes: Axes,
    pub legend: Legend,
    /// Standalone heatmap canvas document.
    pub svg: String,
    /// Standalone legend document.
    pub legend_svg: String,
    /// Page embedding both documents plus the hover tooltip.
    pub html: String,
}

impl RenderedHeatmap {
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Rasterize the heatmap canvas.
    pub fn to_png(&self, scale: f32) -> HeatmapResult<Vec<u8>> {
        svg_to_png(&self.svg, scale)
    }
}

/// Compute scales, lay out every record, build axes and legend, and
/// serialize the results.
#[instrument(skip_all, fields(records = dataset.len()))]
pub fn render_heatmap(dataset: &Dataset, options: &RenderOptions) -> RenderedHeatmap {
    let context = RenderContext::new(dataset, options.canvas);
    if context.year_bounds.is_none() {
        warn!("Dataset is empty; scales are degenerate");
    }

    let cells = context.layout_cells(dataset, &options.palette);
    let axes = render_axes(&context);
    let legend = layout_legend(options.legend, &options.palette, dataset.base_temperature);

    let svg = render_heatmap_svg(&context, &cells, &axes, &options.svg);
    let legend_svg = render_legend_svg(&legend, &options.svg);
    let page = PageText::for_dataset(context.year_bounds, dataset.base_temperature);
    let html = render_page(&page, &svg, &legend_svg);

    info!(
        cells = cells.len(),
        min_year = ?context.min_year(),
        max_year = ?context.max_year(),
        svg_bytes = svg.len(),
        "Rendered heatmap"
    );

    RenderedHeatmap {
        context,
        cells,
        axes,
        legend,
        svg,
        legend_svg,
        html,
    }
}

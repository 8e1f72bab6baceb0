//! Render context and cell layout.
//!
//! [`RenderContext`] is derived once from the loaded dataset and the canvas
//! geometry. Every drawing step borrows it; nothing is kept in globals.

use heatmap_common::{CanvasSpec, Color, Dataset, MonthlyVariance};

use crate::band::{classify, Band, Palette};
use crate::scale::{LinearScale, MonthScale};
use crate::tooltip::tooltip_text;

/// Scales and cell geometry for one dataset on one canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderContext {
    pub canvas: CanvasSpec,
    pub base_temperature: f64,
    /// `None` for an empty dataset.
    pub year_bounds: Option<(i32, i32)>,
    pub year_scale: LinearScale,
    pub month_scale_left: MonthScale,
    pub month_scale_right: MonthScale,
    pub cell_width: f64,
    pub cell_height: f64,
}

impl RenderContext {
    /// Derive the year and month scales for `dataset`.
    ///
    /// The year domain is `[minYear, maxYear + 1]` so the last column ends
    /// at the right padding. An empty dataset leaves the domain at NaN and
    /// a single-year dataset gives an infinite cell width; both render
    /// degenerately rather than failing.
    pub fn new(dataset: &Dataset, canvas: CanvasSpec) -> Self {
        let year_bounds = dataset.year_bounds();
        let (min_year, max_year) = match year_bounds {
            Some((min, max)) => (min as f64, max as f64),
            None => (f64::NAN, f64::NAN),
        };

        let year_scale = LinearScale::new(
            (min_year, max_year + 1.0),
            (canvas.padding, canvas.width - canvas.padding),
        );

        let month_range = (canvas.padding, canvas.height - canvas.padding);

        Self {
            canvas,
            base_temperature: dataset.base_temperature,
            year_bounds,
            year_scale,
            month_scale_left: MonthScale::new(month_range),
            month_scale_right: MonthScale::new(month_range),
            cell_width: canvas.plot_width() / (max_year - min_year),
            cell_height: canvas.plot_height() / 12.0,
        }
    }

    pub fn min_year(&self) -> Option<i32> {
        self.year_bounds.map(|(min, _)| min)
    }

    pub fn max_year(&self) -> Option<i32> {
        self.year_bounds.map(|(_, max)| max)
    }

    /// Position, size and fill for one record.
    pub fn layout_cell(&self, record: &MonthlyVariance, palette: &Palette) -> Cell {
        let band = classify(record.variance);
        Cell {
            year: record.year,
            month: record.month_index(),
            variance: record.variance,
            temperature: self.base_temperature + record.variance,
            x: self.year_scale.scale(record.year as f64),
            y: self.month_scale_left.scale_month(record.month),
            width: self.cell_width,
            height: self.cell_height,
            band,
            fill: palette.fill(band),
            tooltip: tooltip_text(record, self.base_temperature),
        }
    }

    /// One cell per record, in dataset order.
    pub fn layout_cells(&self, dataset: &Dataset, palette: &Palette) -> Vec<Cell> {
        dataset
            .records()
            .iter()
            .map(|record| self.layout_cell(record, palette))
            .collect()
    }
}

/// A positioned, colored rectangle for one record.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    pub year: i32,
    /// Zero-based month.
    pub month: u32,
    pub variance: f64,
    pub temperature: f64,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub band: Band,
    pub fill: Color,
    pub tooltip: String,
}

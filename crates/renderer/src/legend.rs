//! Legend layout: one swatch per band with its variance interval.

use heatmap_common::{Color, LegendSpec};

use crate::band::{Band, Palette};
use crate::tooltip::format_number;

const MARGIN: f64 = 10.0;
const TITLE_HEIGHT: f64 = 22.0;
const SWATCH_SIZE: f64 = 20.0;
const ROW_GAP: f64 = 8.0;

/// A colored square and its caption.
#[derive(Debug, Clone, PartialEq)]
pub struct Swatch {
    pub band: Band,
    pub fill: Color,
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub label: String,
}

/// Legend surface contents.
#[derive(Debug, Clone, PartialEq)]
pub struct Legend {
    pub spec: LegendSpec,
    pub title: String,
    pub swatches: Vec<Swatch>,
}

/// Lay out the legend, stacking the bands coldest first.
///
/// Rows are spaced evenly in the space under the title; with the default
/// 300x155 surface that is 20px swatches on a 28px pitch.
pub fn layout_legend(spec: LegendSpec, palette: &Palette, base_temperature: f64) -> Legend {
    let available = (spec.height - TITLE_HEIGHT - MARGIN).max(0.0);
    let rows = Band::ALL.len() as f64;
    let pitch = (available / rows).min(SWATCH_SIZE + ROW_GAP);
    let size = (pitch - ROW_GAP).clamp(0.0, SWATCH_SIZE);

    let swatches = Band::ALL
        .iter()
        .enumerate()
        .map(|(i, &band)| Swatch {
            band,
            fill: palette.fill(band),
            x: MARGIN,
            y: TITLE_HEIGHT + i as f64 * pitch,
            size,
            label: band.range_label().to_string(),
        })
        .collect();

    Legend {
        spec,
        title: format!("Variance from {}℃", format_number(base_temperature)),
        swatches,
    }
}

//! SVG serialization of the heatmap and its legend.
//!
//! Markup is assembled with `push_str`/`write!` into a single string; text
//! and attribute values go through `quick_xml::escape::escape`.

use std::fmt::Write;

use heatmap_common::Color;
use quick_xml::escape::escape;

use crate::axis::{Axes, Axis, AxisOrient};
use crate::context::{Cell, RenderContext};
use crate::legend::Legend;
use crate::tooltip::format_number;

const SVG_NS: &str = "http://www.w3.org/2000/svg";
const TICK_SIZE: f64 = 6.0;
const TICK_PADDING: f64 = 3.0;

/// Presentation options shared by the heatmap and legend documents.
#[derive(Debug, Clone, PartialEq)]
pub struct SvgOptions {
    /// Painted behind everything; `None` leaves the surface transparent.
    pub background: Option<Color>,
    pub font_family: String,
    pub font_size: f64,
    /// Emit a `<title>` inside each cell so standalone SVG viewers show the
    /// tooltip text natively.
    pub cell_titles: bool,
    /// Caption the year and month axes.
    pub axis_labels: bool,
}

impl Default for SvgOptions {
    fn default() -> Self {
        Self {
            background: Some(Color::rgb(255, 255, 255)),
            font_family: "sans-serif".to_string(),
            font_size: 10.0,
            cell_titles: true,
            axis_labels: false,
        }
    }
}

/// Serialize the heatmap canvas: cells followed by the three axis groups.
pub fn render_heatmap_svg(
    ctx: &RenderContext,
    cells: &[Cell],
    axes: &Axes,
    options: &SvgOptions,
) -> String {
    let canvas = ctx.canvas;
    let mut svg = String::with_capacity(256 + cells.len() * 220);

    open_svg(&mut svg, "canvas", canvas.width, canvas.height, options);

    svg.push_str("  <g id=\"cells\">\n");
    for cell in cells {
        push_cell(&mut svg, cell, options.cell_titles);
    }
    svg.push_str("  </g>\n");

    for axis in axes.iter() {
        push_axis(&mut svg, axis);
    }

    if options.axis_labels {
        push_axis_labels(&mut svg, ctx);
    }

    svg.push_str("</svg>\n");
    svg
}

/// Serialize the legend surface.
pub fn render_legend_svg(legend: &Legend, options: &SvgOptions) -> String {
    let mut svg = String::with_capacity(1024);
    open_svg(&mut svg, "legend", legend.spec.width, legend.spec.height, options);

    let _ = writeln!(
        svg,
        "  <text class=\"legend-title\" x=\"10\" y=\"15\" font-weight=\"bold\">{}</text>",
        escape(legend.title.as_str())
    );

    for swatch in &legend.swatches {
        let _ = writeln!(
            svg,
            "  <g class=\"legend-item\" data-band=\"{band}\">\
<rect x=\"{x}\" y=\"{y}\" width=\"{s}\" height=\"{s}\" fill=\"{fill}\" stroke=\"#333333\" stroke-width=\"0.5\"/>\
<text x=\"{tx}\" y=\"{ty}\" dy=\"0.32em\">{label}</text></g>",
            band = swatch.band.name(),
            x = num(swatch.x),
            y = num(swatch.y),
            s = num(swatch.size),
            fill = swatch.fill,
            tx = num(swatch.x + swatch.size + 8.0),
            ty = num(swatch.y + swatch.size / 2.0),
            label = escape(swatch.label.as_str()),
        );
    }

    svg.push_str("</svg>\n");
    svg
}

fn open_svg(svg: &mut String, id: &str, width: f64, height: f64, options: &SvgOptions) {
    let _ = writeln!(
        svg,
        "<svg xmlns=\"{ns}\" id=\"{id}\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\" \
font-family=\"{font}\" font-size=\"{size}\">",
        ns = SVG_NS,
        id = id,
        w = num(width),
        h = num(height),
        font = escape(options.font_family.as_str()),
        size = num(options.font_size),
    );
    if let Some(background) = options.background {
        let _ = writeln!(
            svg,
            "  <rect class=\"background\" width=\"100%\" height=\"100%\" fill=\"{}\"/>",
            background
        );
    }
}

fn push_cell(svg: &mut String, cell: &Cell, with_title: bool) {
    let tooltip = escape(cell.tooltip.as_str());
    let _ = write!(
        svg,
        "    <rect class=\"cell\" fill=\"{fill}\" data-year=\"{year}\" data-month=\"{month}\" \
data-temp=\"{temp}\" data-band=\"{band}\" data-tooltip=\"{tooltip}\" \
x=\"{x}\" y=\"{y}\" width=\"{w}\" height=\"{h}\"",
        fill = cell.fill,
        year = cell.year,
        month = cell.month,
        temp = format_number(cell.temperature),
        band = cell.band.name(),
        tooltip = tooltip,
        x = num(cell.x),
        y = num(cell.y),
        w = num(cell.width),
        h = num(cell.height),
    );
    if with_title {
        let _ = writeln!(svg, "><title>{}</title></rect>", tooltip);
    } else {
        svg.push_str("/>\n");
    }
}

fn push_axis(svg: &mut String, axis: &Axis) {
    let (tx, ty) = axis.translate;
    let _ = writeln!(
        svg,
        "  <g id=\"{}\" class=\"axis\" transform=\"translate({}, {})\" fill=\"none\" text-anchor=\"{}\">",
        axis.id,
        num(tx),
        num(ty),
        text_anchor(axis.orient),
    );

    let (e0, e1) = axis.extent;
    let domain = match axis.orient {
        AxisOrient::Bottom => format!(
            "M{},{}V0H{}V{}",
            num(e0),
            num(TICK_SIZE),
            num(e1),
            num(TICK_SIZE)
        ),
        AxisOrient::Left => format!(
            "M{},{}H0V{}H{}",
            num(-TICK_SIZE),
            num(e0),
            num(e1),
            num(-TICK_SIZE)
        ),
        AxisOrient::Right => format!(
            "M{},{}H0V{}H{}",
            num(TICK_SIZE),
            num(e0),
            num(e1),
            num(TICK_SIZE)
        ),
    };
    let _ = writeln!(
        svg,
        "    <path class=\"domain\" stroke=\"currentColor\" d=\"{}\"/>",
        domain
    );

    for tick in &axis.ticks {
        let label = escape(tick.label.as_str());
        let p = num(tick.position);
        let markup = match axis.orient {
            AxisOrient::Bottom => format!(
                "    <g class=\"tick\" transform=\"translate({p},0)\">\
<line stroke=\"currentColor\" y2=\"{size}\"/>\
<text fill=\"currentColor\" y=\"{offset}\" dy=\"0.71em\">{label}</text></g>",
                size = num(TICK_SIZE),
                offset = num(TICK_SIZE + TICK_PADDING),
            ),
            AxisOrient::Left => format!(
                "    <g class=\"tick\" transform=\"translate(0,{p})\">\
<line stroke=\"currentColor\" x2=\"{size}\"/>\
<text fill=\"currentColor\" x=\"{offset}\" dy=\"0.32em\">{label}</text></g>",
                size = num(-TICK_SIZE),
                offset = num(-(TICK_SIZE + TICK_PADDING)),
            ),
            AxisOrient::Right => format!(
                "    <g class=\"tick\" transform=\"translate(0,{p})\">\
<line stroke=\"currentColor\" x2=\"{size}\"/>\
<text fill=\"currentColor\" x=\"{offset}\" dy=\"0.32em\">{label}</text></g>",
                size = num(TICK_SIZE),
                offset = num(TICK_SIZE + TICK_PADDING),
            ),
        };
        svg.push_str(&markup);
        svg.push('\n');
    }

    svg.push_str("  </g>\n");
}

fn push_axis_labels(svg: &mut String, ctx: &RenderContext) {
    let canvas = ctx.canvas;
    let _ = writeln!(
        svg,
        "  <text class=\"axis-label\" id=\"x-axis-label\" x=\"{}\" y=\"{}\" text-anchor=\"middle\">Year</text>",
        num(canvas.width / 2.0),
        num(canvas.height - canvas.padding / 4.0),
    );
    let _ = writeln!(
        svg,
        "  <text class=\"axis-label\" id=\"y-axis-label\" transform=\"translate({}, {}) rotate(-90)\" text-anchor=\"middle\">Month</text>",
        num(canvas.padding / 4.0),
        num(canvas.height / 2.0),
    );
}

fn text_anchor(orient: AxisOrient) -> &'static str {
    match orient {
        AxisOrient::Bottom => "middle",
        AxisOrient::Left => "end",
        AxisOrient::Right => "start",
    }
}

/// Attribute number: shortest form, `NaN`/`Infinity` passed through.
fn num(value: f64) -> String {
    format_number(value)
}

//! Axis tick generation.
//!
//! Three axes are produced from a [`RenderContext`]:
//! - `x-axis`: bottom, integer year labels from the year scale
//! - `y-axis`: left, month names from the left month scale
//! - `y-axis-right`: right, month names from the right month scale

use heatmap_common::MONTH_NAMES;

use crate::context::RenderContext;
use crate::scale::{month0_of, LinearScale, MonthScale};

/// Tick count requested from the year scale.
pub const YEAR_TICK_COUNT: usize = 10;

/// Which side of the plot an axis is drawn on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisOrient {
    Bottom,
    Left,
    Right,
}

/// A labelled position along an axis.
#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    /// Pixel offset along the axis.
    pub position: f64,
    pub label: String,
}

/// A positioned axis with its ticks.
#[derive(Debug, Clone, PartialEq)]
pub struct Axis {
    pub id: &'static str,
    pub orient: AxisOrient,
    /// Translation applied to the axis group.
    pub translate: (f64, f64),
    /// Start and end of the axis line in axis coordinates.
    pub extent: (f64, f64),
    pub ticks: Vec<Tick>,
}

/// All three axes of the heatmap.
#[derive(Debug, Clone, PartialEq)]
pub struct Axes {
    pub bottom: Axis,
    pub left: Axis,
    pub right: Axis,
}

impl Axes {
    pub fn iter(&self) -> impl Iterator<Item = &Axis> {
        [&self.bottom, &self.left, &self.right].into_iter()
    }
}

/// Build the bottom year axis and the mirrored month axes.
pub fn render_axes(ctx: &RenderContext) -> Axes {
    let canvas = ctx.canvas;
    Axes {
        bottom: Axis {
            id: "x-axis",
            orient: AxisOrient::Bottom,
            translate: (0.0, canvas.height - canvas.padding),
            extent: ctx.year_scale.range(),
            ticks: year_ticks(&ctx.year_scale),
        },
        left: Axis {
            id: "y-axis",
            orient: AxisOrient::Left,
            translate: (canvas.padding, 0.0),
            extent: ctx.month_scale_left.range(),
            ticks: month_ticks(&ctx.month_scale_left),
        },
        right: Axis {
            id: "y-axis-right",
            orient: AxisOrient::Right,
            translate: (canvas.width - canvas.padding, 0.0),
            extent: ctx.month_scale_right.range(),
            ticks: month_ticks(&ctx.month_scale_right),
        },
    }
}

/// Integer-labelled ticks along the year scale.
pub fn year_ticks(scale: &LinearScale) -> Vec<Tick> {
    scale
        .ticks(YEAR_TICK_COUNT)
        .into_iter()
        .map(|year| Tick {
            position: scale.scale(year),
            label: format!("{}", year.round() as i64),
        })
        .collect()
}

/// One tick per month start, labelled with the full month name.
pub fn month_ticks(scale: &MonthScale) -> Vec<Tick> {
    scale
        .month_starts()
        .into_iter()
        .map(|date| Tick {
            position: scale.scale_date(date),
            label: MONTH_NAMES[month0_of(date) as usize].to_string(),
        })
        .collect()
}

//! Heatmap rendering for monthly temperature variance data.
//!
//! Pipeline:
//! - Scales: linear year axis, calendar month axis ([`scale`])
//! - Classification of variance into four bands ([`band`])
//! - Cell layout through an explicit [`context::RenderContext`]
//! - Axes, legend and tooltip text
//! - Serialization to SVG and HTML, rasterization to PNG

pub mod axis;
pub mod band;
pub mod context;
pub mod html;
pub mod legend;
pub mod png;
pub mod raster;
pub mod render;
pub mod scale;
pub mod svg;
pub mod tooltip;

pub use band::{classify, Band, Palette};
pub use context::{Cell, RenderContext};
pub use render::{render_heatmap, RenderOptions, RenderedHeatmap};
pub use tooltip::{tooltip_text, Tooltip};

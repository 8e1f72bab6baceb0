//! Common types and utilities shared across the heatmap crates.

pub mod canvas;
pub mod color;
pub mod dataset;
pub mod error;
pub mod month;

pub use canvas::{CanvasSpec, LegendSpec};
pub use color::Color;
pub use dataset::{Dataset, MonthlyVariance, DEFAULT_DATASET_URL};
pub use error::{HeatmapError, HeatmapResult};
pub use month::{month_name, MONTH_NAMES};

//! Drawing surface geometry.

use serde::{Deserialize, Serialize};

use crate::error::{HeatmapError, HeatmapResult};

/// Size of the main drawing surface and the margin reserved for axes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasSpec {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
}

impl Default for CanvasSpec {
    fn default() -> Self {
        Self {
            width: 1200.0,
            height: 600.0,
            padding: 60.0,
        }
    }
}

impl CanvasSpec {
    /// Width of the area between the left and right padding.
    pub fn plot_width(&self) -> f64 {
        self.width - 2.0 * self.padding
    }

    /// Height of the area between the top and bottom padding.
    pub fn plot_height(&self) -> f64 {
        self.height - 2.0 * self.padding
    }

    /// Reject surfaces with no room left for the plot.
    pub fn validate(&self) -> HeatmapResult<()> {
        if !(self.width > 0.0 && self.height > 0.0 && self.padding >= 0.0) {
            return Err(HeatmapError::Config(format!(
                "canvas dimensions must be positive: {}x{} padding {}",
                self.width, self.height, self.padding
            )));
        }
        if self.plot_width() <= 0.0 || self.plot_height() <= 0.0 {
            return Err(HeatmapError::Config(format!(
                "padding {} leaves no plotting area in {}x{}",
                self.padding, self.width, self.height
            )));
        }
        Ok(())
    }
}

/// Size of the legend surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LegendSpec {
    pub width: f64,
    pub height: f64,
}

impl Default for LegendSpec {
    fn default() -> Self {
        Self {
            width: 300.0,
            height: 155.0,
        }
    }
}

//! Monthly temperature variance dataset.
//!
//! The wire format is a single JSON object:
//!
//! ```json
//! {
//!   "baseTemperature": 8.66,
//!   "monthlyVariance": [{ "year": 1753, "month": 1, "variance": -1.366 }]
//! }
//! ```
//!
//! The dataset is loaded once and never mutated afterwards.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{HeatmapError, HeatmapResult};
use crate::month::month_name;

/// Published global temperature reference data.
pub const DEFAULT_DATASET_URL: &str =
    "https://raw.githubusercontent.com/freeCodeCamp/ProjectReferenceData/master/global-temperature.json";

/// Variance from the base temperature for one year/month.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MonthlyVariance {
    pub year: i32,
    /// 1-based month number.
    pub month: u32,
    pub variance: f64,
}

impl MonthlyVariance {
    pub fn new(year: i32, month: u32, variance: f64) -> Self {
        Self {
            year,
            month,
            variance,
        }
    }

    /// Zero-based month index.
    pub fn month_index(&self) -> u32 {
        self.month.saturating_sub(1)
    }

    pub fn month_name(&self) -> Option<&'static str> {
        month_name(self.month)
    }
}

/// Base temperature plus the ordered monthly variance records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub base_temperature: f64,
    pub monthly_variance: Vec<MonthlyVariance>,
}

impl Dataset {
    pub fn new(base_temperature: f64, monthly_variance: Vec<MonthlyVariance>) -> Self {
        Self {
            base_temperature,
            monthly_variance,
        }
    }

    /// Parse and validate a dataset from a JSON string.
    pub fn from_json(json: &str) -> HeatmapResult<Self> {
        let dataset: Self = serde_json::from_str(json)?;
        dataset.validate()?;
        Ok(dataset)
    }

    /// Parse and validate a dataset from raw response bytes.
    pub fn from_slice(bytes: &[u8]) -> HeatmapResult<Self> {
        let dataset: Self = serde_json::from_slice(bytes)?;
        dataset.validate()?;
        Ok(dataset)
    }

    /// Load a dataset from a JSON file on disk.
    pub fn from_file(path: impl AsRef<Path>) -> HeatmapResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Check that every record names a real month.
    ///
    /// Nothing else is rejected: empty datasets and single-year datasets are
    /// loaded as-is and render degenerately.
    pub fn validate(&self) -> HeatmapResult<()> {
        if let Some(bad) = self
            .monthly_variance
            .iter()
            .find(|r| !(1..=12).contains(&r.month))
        {
            return Err(HeatmapError::MonthOutOfRange {
                year: bad.year,
                month: bad.month,
            });
        }
        Ok(())
    }

    pub fn records(&self) -> &[MonthlyVariance] {
        &self.monthly_variance
    }

    pub fn len(&self) -> usize {
        self.monthly_variance.len()
    }

    pub fn is_empty(&self) -> bool {
        self.monthly_variance.is_empty()
    }

    /// Earliest and latest year, `None` for an empty dataset.
    pub fn year_bounds(&self) -> Option<(i32, i32)> {
        let min = self.monthly_variance.iter().map(|r| r.year).min()?;
        let max = self.monthly_variance.iter().map(|r| r.year).max()?;
        Some((min, max))
    }

    /// Actual temperature for a record.
    pub fn temperature(&self, record: &MonthlyVariance) -> f64 {
        self.base_temperature + record.variance
    }
}

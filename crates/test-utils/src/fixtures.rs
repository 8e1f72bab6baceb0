//! Common test fixtures for heatmap tests.
//!
//! This module provides pre-defined datasets that represent common
//! scenarios: the head of the published data, band boundary values and
//! the degenerate inputs the renderer has to tolerate.

use heatmap_common::{Dataset, MonthlyVariance};

/// Base temperature of the published dataset.
pub const PUBLISHED_BASE_TEMPERATURE: f64 = 8.66;

/// The first months of the published dataset, in its wire format.
pub const SAMPLE_JSON: &str = r#"{
  "baseTemperature": 8.66,
  "monthlyVariance": [
    { "year": 1753, "month": 1, "variance": -1.366 },
    { "year": 1753, "month": 2, "variance": -2.223 },
    { "year": 1753, "month": 3, "variance": 0.211 },
    { "year": 1753, "month": 4, "variance": -0.843 },
    { "year": 1753, "month": 5, "variance": -0.129 },
    { "year": 1753, "month": 6, "variance": 0.44 },
    { "year": 1753, "month": 7, "variance": 0.916 },
    { "year": 1753, "month": 8, "variance": 1.101 },
    { "year": 1753, "month": 9, "variance": 0.275 },
    { "year": 1753, "month": 10, "variance": 0.101 },
    { "year": 1753, "month": 11, "variance": -0.028 },
    { "year": 1753, "month": 12, "variance": -0.581 },
    { "year": 1754, "month": 1, "variance": -1.452 },
    { "year": 1754, "month": 2, "variance": 0.0 },
    { "year": 1754, "month": 3, "variance": -1.0 },
    { "year": 1754, "month": 4, "variance": 1.0 }
  ]
}"#;

/// Parsed form of [`SAMPLE_JSON`].
pub fn sample_dataset() -> Dataset {
    Dataset::new(
        PUBLISHED_BASE_TEMPERATURE,
        vec![
            MonthlyVariance::new(1753, 1, -1.366),
            MonthlyVariance::new(1753, 2, -2.223),
            MonthlyVariance::new(1753, 3, 0.211),
            MonthlyVariance::new(1753, 4, -0.843),
            MonthlyVariance::new(1753, 5, -0.129),
            MonthlyVariance::new(1753, 6, 0.44),
            MonthlyVariance::new(1753, 7, 0.916),
            MonthlyVariance::new(1753, 8, 1.101),
            MonthlyVariance::new(1753, 9, 0.275),
            MonthlyVariance::new(1753, 10, 0.101),
            MonthlyVariance::new(1753, 11, -0.028),
            MonthlyVariance::new(1753, 12, -0.581),
            MonthlyVariance::new(1754, 1, -1.452),
            MonthlyVariance::new(1754, 2, 0.0),
            MonthlyVariance::new(1754, 3, -1.0),
            MonthlyVariance::new(1754, 4, 1.0),
        ],
    )
}

/// Variance values sitting exactly on and around the band boundaries.
pub mod boundaries {
    /// Strictly inside the cold band.
    pub const COLD: f64 = -1.5;
    /// Lower boundary, still cold.
    pub const MINUS_ONE: f64 = -1.0;
    /// Just above -1, mild-cold.
    pub const JUST_ABOVE_MINUS_ONE: f64 = -0.999;
    /// Upper boundary of mild-cold.
    pub const ZERO: f64 = 0.0;
    /// Just above 0, mild-warm.
    pub const JUST_ABOVE_ZERO: f64 = 0.001;
    /// Just below 1, still mild-warm.
    pub const JUST_BELOW_ONE: f64 = 0.999;
    /// First warm value.
    pub const ONE: f64 = 1.0;
}

/// Datasets the renderer must draw without failing.
pub mod degenerate {
    use heatmap_common::{Dataset, MonthlyVariance};

    /// No records at all.
    pub fn empty() -> Dataset {
        Dataset::new(8.66, Vec::new())
    }

    /// Every record in the same year, so the year span is zero.
    pub fn single_year() -> Dataset {
        Dataset::new(
            8.66,
            (1..=12)
                .map(|m| MonthlyVariance::new(1900, m, 0.1 * m as f64))
                .collect(),
        )
    }
}

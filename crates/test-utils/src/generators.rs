//! Test data generators for creating synthetic variance datasets.
//!
//! These generators create predictable, verifiable datasets that can be
//! used across the test suite.

use heatmap_common::{Dataset, MonthlyVariance};

/// Creates a full dataset covering every month of `min_year..=max_year`.
///
/// Variance follows a deterministic pattern that sweeps through all four
/// bands: `((year * 12 + month) % 41) / 10 - 2`, giving values in
/// `-2.0..=2.0` in steps of 0.1.
///
/// # Example
///
/// ```
/// use test_utils::create_dataset;
///
/// let dataset = create_dataset(1900, 1909, 8.0);
/// assert_eq!(dataset.len(), 120); // 10 years * 12 months
/// assert_eq!(dataset.year_bounds(), Some((1900, 1909)));
/// ```
pub fn create_dataset(min_year: i32, max_year: i32, base_temperature: f64) -> Dataset {
    let mut records = Vec::new();
    for year in min_year..=max_year {
        for month in 1..=12u32 {
            records.push(MonthlyVariance::new(year, month, pattern_variance(year, month)));
        }
    }
    Dataset::new(base_temperature, records)
}

/// Creates a dataset shaped like the published one: 1753 through 2015.
pub fn create_published_shape_dataset() -> Dataset {
    create_dataset(1753, 2015, 8.66)
}

/// Creates a dataset with one record per given variance, all in January of
/// consecutive years starting at 1900.
pub fn create_variance_sweep(variances: &[f64]) -> Dataset {
    let records = variances
        .iter()
        .enumerate()
        .map(|(i, &v)| MonthlyVariance::new(1900 + i as i32, 1, v))
        .collect();
    Dataset::new(8.0, records)
}

fn pattern_variance(year: i32, month: u32) -> f64 {
    let step = (year as i64 * 12 + month as i64).rem_euclid(41);
    step as f64 / 10.0 - 2.0
}

//! Domain-to-pixel scales.
//!
//! - [`LinearScale`]: continuous numeric domain (years along the x axis)
//! - [`MonthScale`]: calendar domain spanning one reference year (months
//!   along the y axis)
//!
//! Both are pure: constructing one captures domain and range, calling
//! `scale` never mutates anything. A degenerate domain (NaN bounds) maps
//! every input to NaN instead of failing.

use chrono::{Datelike, NaiveDate};

/// Reference calendar year used by the month scale. Non-leap, so the span
/// is 365 days.
pub const REFERENCE_YEAR: i32 = 1900;

/// Linear map from `[d0, d1]` to `[r0, r1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    /// Map a domain value to the range.
    ///
    /// A zero-width domain maps everything to the middle of the range.
    pub fn scale(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = d1 - d0;
        let t = if span == 0.0 { 0.5 } else { (value - d0) / span };
        r0 + t * (r1 - r0)
    }

    /// Roughly `count` round tick values inside the domain.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        nice_ticks(self.domain.0, self.domain.1, count as f64)
    }
}

/// Time-shaped scale covering the twelve months of [`REFERENCE_YEAR`].
///
/// The domain runs from "day 0 of January" (the last day of the preceding
/// December) to "day 0 of month 12" (December 31 of the reference year).
/// Positions are proportional to elapsed days, so months of different
/// lengths get slightly different spacing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthScale {
    start: NaiveDate,
    end: NaiveDate,
    range: (f64, f64),
}

impl MonthScale {
    /// Build a month scale over `range`. Left and right axes each call this
    /// so they hold independent instances.
    pub fn new(range: (f64, f64)) -> Self {
        Self {
            start: day_zero_of(REFERENCE_YEAR, 0).unwrap_or(NaiveDate::MIN),
            end: day_zero_of(REFERENCE_YEAR, 12).unwrap_or(NaiveDate::MAX),
            range,
        }
    }

    pub fn domain(&self) -> (NaiveDate, NaiveDate) {
        (self.start, self.end)
    }

    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    /// Map a calendar date to the range.
    pub fn scale_date(&self, date: NaiveDate) -> f64 {
        let span = (self.end - self.start).num_days() as f64;
        let elapsed = (date - self.start).num_days() as f64;
        let (r0, r1) = self.range;
        r0 + elapsed / span * (r1 - r0)
    }

    /// Top edge of the row for a 1-based month. NaN outside 1..=12.
    pub fn scale_month(&self, month: u32) -> f64 {
        match month_index_for(month) {
            Some(date) => self.scale_date(date),
            None => f64::NAN,
        }
    }

    /// First day of every month in the domain, used as axis ticks.
    pub fn month_starts(&self) -> Vec<NaiveDate> {
        (1..=12)
            .filter_map(|m| NaiveDate::from_ymd_opt(REFERENCE_YEAR, m, 1))
            .filter(|d| *d >= self.start && *d <= self.end)
            .collect()
    }
}

/// Date a 1-based month is placed at: day 0 of the zero-based month, which
/// is the last day of the month before it.
pub fn month_index_for(month: u32) -> Option<NaiveDate> {
    if !(1..=12).contains(&month) {
        return None;
    }
    day_zero_of(REFERENCE_YEAR, month - 1)
}

/// "Day 0" of a zero-based month (0 = January). Month 12 wraps into the
/// next year, so `day_zero_of(y, 12)` is December 31 of `y`.
fn day_zero_of(year: i32, month0: u32) -> Option<NaiveDate> {
    let (y, m) = (year + (month0 / 12) as i32, month0 % 12 + 1);
    let first = NaiveDate::from_ymd_opt(y, m, 1)?;
    first.pred_opt()
}

/// Zero-based month of a date, for labelling ticks.
pub fn month0_of(date: NaiveDate) -> u32 {
    date.month0()
}

const E10: f64 = 7.0710678118654755; // sqrt(50)
const E5: f64 = 3.1622776601683795; // sqrt(10)
const E2: f64 = 1.4142135623730951; // sqrt(2)

/// Round tick values between `start` and `stop`, stepping by 1, 2 or 5
/// times a power of ten so that roughly `count` ticks result.
pub fn nice_ticks(start: f64, stop: f64, count: f64) -> Vec<f64> {
    if !(count > 0.0) || !start.is_finite() || !stop.is_finite() {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }

    let reverse = stop < start;
    let (lo, hi) = if reverse { (stop, start) } else { (start, stop) };

    let Some((i1, i2, inc)) = tick_spec(lo, hi, count) else {
        return Vec::new();
    };
    if i2 < i1 {
        return Vec::new();
    }

    let mut ticks: Vec<f64> = (i1..=i2)
        .map(|i| {
            if inc < 0.0 {
                i as f64 / -inc
            } else {
                i as f64 * inc
            }
        })
        .collect();
    if reverse {
        ticks.reverse();
    }
    ticks
}

fn tick_spec(start: f64, stop: f64, count: f64) -> Option<(i64, i64, f64)> {
    let step = (stop - start) / count;
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    };

    let mut i1;
    let mut i2;
    let inc;
    if power < 0.0 {
        let inv = 10f64.powf(-power) / factor;
        i1 = (start * inv).round();
        i2 = (stop * inv).round();
        if i1 / inv < start {
            i1 += 1.0;
        }
        if i2 / inv > stop {
            i2 -= 1.0;
        }
        inc = -inv;
    } else {
        inc = 10f64.powf(power) * factor;
        i1 = (start / inc).round();
        i2 = (stop / inc).round();
        if i1 * inc < start {
            i1 += 1.0;
        }
        if i2 * inc > stop {
            i2 -= 1.0;
        }
    }

    if i2 < i1 && (0.5..2.0).contains(&count) {
        return tick_spec(start, stop, count * 2.0);
    }
    if !i1.is_finite() || !i2.is_finite() {
        return None;
    }
    Some((i1 as i64, i2 as i64, inc))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_scale_endpoints() {
        let scale = LinearScale::new((2000.0, 2016.0), (11.0, 55.0));
        assert_eq!(scale.scale(2000.0), 11.0);
        assert_eq!(scale.scale(2016.0), 55.0);
        assert_eq!(scale.scale(2003.0), 19.25);
    }

    #[test]
    fn test_day_zero_wraps_year() {
        assert_eq!(
            day_zero_of(1900, 0),
            NaiveDate::from_ymd_opt(1899, 12, 31)
        );
        assert_eq!(
            day_zero_of(1900, 12),
            NaiveDate::from_ymd_opt(1900, 12, 31)
        );
    }

    #[test]
    fn test_month_index_for() {
        assert_eq!(month_index_for(1), NaiveDate::from_ymd_opt(1899, 12, 31));
        assert_eq!(month_index_for(3), NaiveDate::from_ymd_opt(1900, 2, 28));
        assert_eq!(month_index_for(0), None);
        assert_eq!(month_index_for(13), None);
    }

    #[test]
    fn test_nice_ticks_small_steps() {
        let ticks = nice_ticks(0.0, 1.0, 10.0);
        assert_eq!(ticks.len(), 11);
        assert!((ticks[3] - 0.3).abs() < 1e-12);
    }
}

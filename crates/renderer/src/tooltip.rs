//! Hover tooltip text and visibility.
//!
//! The text itself is a pure function of a record and the base temperature.
//! [`Tooltip`] models the single tooltip element a host toggles on
//! hover/hover-end; whichever hover arrived last wins.

use heatmap_common::MonthlyVariance;

/// Tooltip text: `"{year} {monthName} - {base+variance} ({variance})"`.
pub fn tooltip_text(record: &MonthlyVariance, base_temperature: f64) -> String {
    format!(
        "{} {} - {} ({})",
        record.year,
        record.month_name().unwrap_or("undefined"),
        format_number(base_temperature + record.variance),
        format_number(record.variance),
    )
}

/// Shortest decimal that round-trips, without a trailing `.0`.
///
/// Magnitudes below `1e-6` or from `1e21` up switch to exponent form
/// (`1e-7`, `1.5e+21`). Negative zero prints as `0`; non-finite values
/// print as `NaN`, `Infinity` and `-Infinity`.
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let scientific = format!("{:e}", value);
    match scientific.split_once('e') {
        Some((mantissa, exponent)) => match exponent.parse::<i32>() {
            Ok(exp) if exp < -6 => format!("{}e{}", mantissa, exp),
            Ok(exp) if exp >= 21 => format!("{}e+{}", mantissa, exp),
            _ => format!("{}", value),
        },
        None => format!("{}", value),
    }
}

/// State of the single tooltip element.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tooltip {
    visible: bool,
    text: String,
    data_year: Option<i32>,
}

impl Tooltip {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show the tooltip for `record`, replacing whatever it showed before.
    pub fn on_hover(&mut self, record: &MonthlyVariance, base_temperature: f64) {
        self.visible = true;
        self.text = tooltip_text(record, base_temperature);
        self.data_year = Some(record.year);
    }

    /// Hide the tooltip. Text and year are left in place, as the element
    /// keeps its content while hidden.
    pub fn on_hover_end(&mut self) {
        self.visible = false;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn data_year(&self) -> Option<i32> {
        self.data_year
    }
}

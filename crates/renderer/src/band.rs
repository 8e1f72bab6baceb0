//! Severity bands for temperature variance and their fill colors.

use heatmap_common::Color;
use serde::{Deserialize, Serialize};

/// One of four ordered variance classifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Band {
    Cold,
    MildCold,
    MildWarm,
    Warm,
}

impl Band {
    /// All bands, coldest first.
    pub const ALL: [Band; 4] = [Band::Cold, Band::MildCold, Band::MildWarm, Band::Warm];

    pub fn name(&self) -> &'static str {
        match self {
            Band::Cold => "cold",
            Band::MildCold => "mild-cold",
            Band::MildWarm => "mild-warm",
            Band::Warm => "warm",
        }
    }

    /// Variance interval covered by the band, for the legend.
    pub fn range_label(&self) -> &'static str {
        match self {
            Band::Cold => "variance ≤ -1",
            Band::MildCold => "-1 < variance ≤ 0",
            Band::MildWarm => "0 < variance < 1",
            Band::Warm => "variance ≥ 1",
        }
    }
}

/// Classify a variance into a band.
///
/// Comparisons are non-strict at -1 and 0 but strict at 1. NaN fails every
/// comparison and lands in [`Band::Warm`].
pub fn classify(variance: f64) -> Band {
    if variance <= -1.0 {
        Band::Cold
    } else if variance <= 0.0 {
        Band::MildCold
    } else if variance < 1.0 {
        Band::MildWarm
    } else {
        Band::Warm
    }
}

/// Fill color per band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub cold: Color,
    pub mild_cold: Color,
    pub mild_warm: Color,
    pub warm: Color,
}

/// SteelBlue
pub const COLD_FILL: Color = Color::rgb(70, 130, 180);
/// LightSteelBlue
pub const MILD_COLD_FILL: Color = Color::rgb(176, 196, 222);
/// Orange
pub const MILD_WARM_FILL: Color = Color::rgb(255, 165, 0);
/// Crimson
pub const WARM_FILL: Color = Color::rgb(220, 20, 60);

impl Default for Palette {
    fn default() -> Self {
        Self {
            cold: COLD_FILL,
            mild_cold: MILD_COLD_FILL,
            mild_warm: MILD_WARM_FILL,
            warm: WARM_FILL,
        }
    }
}

impl Palette {
    pub fn fill(&self, band: Band) -> Color {
        match band {
            Band::Cold => self.cold,
            Band::MildCold => self.mild_cold,
            Band::MildWarm => self.mild_warm,
            Band::Warm => self.warm,
        }
    }

    /// Shorthand for `fill(classify(variance))`.
    pub fn fill_for_variance(&self, variance: f64) -> Color {
        self.fill(classify(variance))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bands_are_ordered() {
        let mut sorted = Band::ALL;
        sorted.sort();
        assert_eq!(sorted, Band::ALL);
    }

    #[test]
    fn test_band_serde_names() {
        assert_eq!(serde_json::to_string(&Band::MildCold).unwrap(), "\"mild-cold\"");
        for band in Band::ALL {
            assert_eq!(
                serde_json::to_string(&band).unwrap(),
                format!("\"{}\"", band.name())
            );
        }
    }
}

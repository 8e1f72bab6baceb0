//! Tests for variance classification and band colors.

use heatmap_common::{CanvasSpec, Color, MonthlyVariance};
use renderer::band::{classify, Band, Palette, WARM_FILL};
use renderer::RenderContext;
use test_utils::{boundaries, create_variance_sweep};

// ============================================================================
// Boundary values
// ============================================================================

#[test]
fn test_minus_one_is_cold() {
    assert_eq!(classify(boundaries::MINUS_ONE), Band::Cold);
}

#[test]
fn test_zero_is_mild_cold() {
    assert_eq!(classify(boundaries::ZERO), Band::MildCold);
}

#[test]
fn test_negative_zero_is_mild_cold() {
    assert_eq!(classify(-0.0), Band::MildCold);
}

#[test]
fn test_one_is_warm() {
    assert_eq!(classify(boundaries::ONE), Band::Warm);
}

#[test]
fn test_values_around_boundaries() {
    assert_eq!(classify(boundaries::COLD), Band::Cold);
    assert_eq!(classify(boundaries::JUST_ABOVE_MINUS_ONE), Band::MildCold);
    assert_eq!(classify(boundaries::JUST_ABOVE_ZERO), Band::MildWarm);
    assert_eq!(classify(boundaries::JUST_BELOW_ONE), Band::MildWarm);
}

#[test]
fn test_extremes() {
    assert_eq!(classify(f64::NEG_INFINITY), Band::Cold);
    assert_eq!(classify(f64::INFINITY), Band::Warm);
    assert_eq!(classify(-100.0), Band::Cold);
    assert_eq!(classify(100.0), Band::Warm);
}

#[test]
fn test_nan_falls_through_to_warm() {
    assert_eq!(classify(f64::NAN), Band::Warm);
}

#[test]
fn test_classification_is_monotonic() {
    let mut previous = Band::Cold;
    let mut v = -3.0;
    while v <= 3.0 {
        let band = classify(v);
        assert!(band >= previous, "band decreased at variance {}", v);
        previous = band;
        v += 0.01;
    }
}

// ============================================================================
// Fill colors
// ============================================================================

#[test]
fn test_default_palette_colors() {
    let palette = Palette::default();
    assert_eq!(palette.fill(Band::Cold), Color::named("SteelBlue").unwrap());
    assert_eq!(palette.fill(Band::MildCold), Color::named("LightSteelBlue").unwrap());
    assert_eq!(palette.fill(Band::MildWarm), Color::named("Orange").unwrap());
    assert_eq!(palette.fill(Band::Warm), Color::named("Crimson").unwrap());
}

#[test]
fn test_warm_record_gets_crimson_fill() {
    let dataset = heatmap_common::Dataset::new(8.0, vec![MonthlyVariance::new(2000, 12, 1.2)]);
    let ctx = RenderContext::new(&dataset, CanvasSpec::default());
    let cell = ctx.layout_cell(&dataset.records()[0], &Palette::default());

    assert_eq!(cell.band, Band::Warm);
    assert_eq!(cell.fill, WARM_FILL);
    assert_eq!(cell.fill.to_hex(), "#dc143c");
}

#[test]
fn test_custom_palette_is_used() {
    let palette = Palette {
        warm: Color::rgb(1, 2, 3),
        ..Palette::default()
    };
    assert_eq!(palette.fill_for_variance(2.0), Color::rgb(1, 2, 3));
    assert_eq!(palette.fill_for_variance(-2.0), Palette::default().cold);
}

#[test]
fn test_palette_deserializes_partial_override() {
    let palette: Palette = serde_json::from_str(r##"{"warm": "#000000"}"##).unwrap();
    assert_eq!(palette.warm, Color::rgb(0, 0, 0));
    assert_eq!(palette.cold, Palette::default().cold);
}

#[test]
fn test_every_sweep_value_gets_exactly_one_band() {
    let dataset = create_variance_sweep(&[-1.5, -1.0, -0.5, 0.0, 0.5, 0.999, 1.0, 1.5]);
    let bands: Vec<Band> = dataset.records().iter().map(|r| classify(r.variance)).collect();
    assert_eq!(
        bands,
        vec![
            Band::Cold,
            Band::Cold,
            Band::MildCold,
            Band::MildCold,
            Band::MildWarm,
            Band::MildWarm,
            Band::Warm,
            Band::Warm,
        ]
    );
}

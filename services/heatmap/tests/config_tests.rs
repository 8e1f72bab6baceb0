//! Tests for configuration loading and layering.

use std::io::Write;
use std::path::PathBuf;

use heatmap::config::HeatmapConfig;
use heatmap_common::{CanvasSpec, Color, HeatmapError, LegendSpec, DEFAULT_DATASET_URL};
use renderer::band::Palette;

#[test]
fn test_defaults_match_compiled_constants() {
    let config = HeatmapConfig::default();
    assert_eq!(config.source.url, DEFAULT_DATASET_URL);
    assert!(config.source.input.is_none());
    assert_eq!(config.canvas, CanvasSpec::default());
    assert_eq!(config.canvas.width, 1200.0);
    assert_eq!(config.canvas.height, 600.0);
    assert_eq!(config.canvas.padding, 60.0);
    assert_eq!(config.legend, LegendSpec::default());
    assert_eq!(config.palette, Palette::default());
    assert_eq!(config.output.directory, PathBuf::from("output"));
    assert!(!config.output.png);
    assert_eq!(config.server.listen, "0.0.0.0:8080");
}

#[test]
fn test_empty_yaml_is_defaults() {
    assert_eq!(HeatmapConfig::from_yaml("").unwrap(), HeatmapConfig::default());
}

#[test]
fn test_partial_yaml_merges_over_defaults() {
    let yaml = r##"
canvas:
  width: 800
source:
  max_retries: 7
palette:
  warm: "#ff0000"
"##;
    let config = HeatmapConfig::from_yaml(yaml).unwrap();

    assert_eq!(config.canvas.width, 800.0);
    assert_eq!(config.canvas.height, 600.0);
    assert_eq!(config.canvas.padding, 60.0);
    assert_eq!(config.source.max_retries, 7);
    assert_eq!(config.source.timeout_secs, 30);
    assert_eq!(config.palette.warm, Color::rgb(255, 0, 0));
    assert_eq!(config.palette.cold, Palette::default().cold);
}

#[test]
fn test_named_palette_colors() {
    let yaml = "palette:\n  cold: Blue\n  mild_warm: orange\n";
    let config = HeatmapConfig::from_yaml(yaml).unwrap();
    assert_eq!(config.palette.cold, Color::rgb(0, 0, 255));
    assert_eq!(config.palette.mild_warm, Color::rgb(255, 165, 0));
}

#[test]
fn test_unknown_color_is_config_error() {
    let err = HeatmapConfig::from_yaml("palette:\n  warm: not-a-color\n").unwrap_err();
    assert!(matches!(err, HeatmapError::Config(_)));
}

#[test]
fn test_malformed_yaml_is_config_error() {
    let err = HeatmapConfig::from_yaml("canvas: [1, 2").unwrap_err();
    assert!(matches!(err, HeatmapError::Config(_)));
}

#[test]
fn test_invalid_canvas_is_rejected() {
    assert!(HeatmapConfig::from_yaml("canvas:\n  padding: 700\n").is_err());
}

#[test]
fn test_invalid_png_scale_is_rejected() {
    assert!(HeatmapConfig::from_yaml("output:\n  png_scale: 0\n").is_err());
}

#[test]
fn test_empty_url_without_input_is_rejected() {
    assert!(HeatmapConfig::from_yaml("source:\n  url: \"\"\n").is_err());
    assert!(HeatmapConfig::from_yaml("source:\n  url: \"\"\n  input: data.json\n").is_ok());
}

#[test]
fn test_shipped_config_file_loads() {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("config/heatmap.yaml");
    let config = HeatmapConfig::load(Some(&path)).unwrap();
    assert_eq!(config, HeatmapConfig::default());
}

#[test]
fn test_load_from_temp_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "output:\n  directory: /tmp/heatmap\n  png: true").unwrap();

    let config = HeatmapConfig::load(Some(file.path())).unwrap();
    assert_eq!(config.output.directory, PathBuf::from("/tmp/heatmap"));
    assert!(config.output.png);
}

#[test]
fn test_load_without_path_is_defaults() {
    assert_eq!(HeatmapConfig::load(None).unwrap(), HeatmapConfig::default());
}

#[test]
fn test_missing_file_is_config_error() {
    let err = HeatmapConfig::load(Some(std::path::Path::new("/nonexistent/heatmap.yaml")))
        .unwrap_err();
    assert!(matches!(err, HeatmapError::Config(_)));
}

#[test]
fn test_url_and_input_overrides() {
    let mut config = HeatmapConfig::default();
    config.set_input(PathBuf::from("local.json"));
    assert_eq!(config.source.input, Some(PathBuf::from("local.json")));

    config.set_url("http://example.test/data.json".to_string());
    assert_eq!(config.source.url, "http://example.test/data.json");
    assert!(config.source.input.is_none());
}

#[test]
fn test_render_options_follow_config() {
    let config = HeatmapConfig::from_yaml("canvas:\n  width: 900\noutput:\n  axis_labels: true\n")
        .unwrap();
    let options = config.render_options();
    assert_eq!(options.canvas.width, 900.0);
    assert!(options.svg.axis_labels);
    assert_eq!(options.legend, LegendSpec::default());
}

//! Configuration loading for the heatmap service.
//!
//! Values are layered: compiled defaults, then an optional YAML file
//! (`--config` or `HEATMAP_CONFIG`), then command-line flags applied by
//! `main`. Every section may be omitted from the YAML file.

use std::path::{Path, PathBuf};
use std::time::Duration;

use heatmap_common::{CanvasSpec, HeatmapError, HeatmapResult, LegendSpec, DEFAULT_DATASET_URL};
use renderer::band::Palette;
use renderer::svg::SvgOptions;
use renderer::RenderOptions;
use serde::Deserialize;
use tracing::{debug, info};

/// Root configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct HeatmapConfig {
    pub source: SourceConfig,
    pub canvas: CanvasSpec,
    pub legend: LegendSpec,
    pub palette: Palette,
    pub output: OutputConfig,
    pub server: ServerConfig,
}

/// Where the dataset comes from and how hard to try.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SourceConfig {
    #[serde(default = "default_url")]
    pub url: String,
    /// Local JSON file; takes precedence over `url` when set.
    #[serde(default)]
    pub input: Option<PathBuf>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
    /// Initial retry delay (doubles each retry)
    #[serde(default = "default_initial_retry_delay_ms")]
    pub initial_retry_delay_ms: u64,
    #[serde(default = "default_max_retry_delay_ms")]
    pub max_retry_delay_ms: u64,
}

fn default_url() -> String {
    DEFAULT_DATASET_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_connect_timeout_secs() -> u64 {
    10
}

fn default_max_retries() -> u32 {
    3
}

fn default_initial_retry_delay_ms() -> u64 {
    500
}

fn default_max_retry_delay_ms() -> u64 {
    10_000
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            input: None,
            timeout_secs: default_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
            max_retries: default_max_retries(),
            initial_retry_delay_ms: default_initial_retry_delay_ms(),
            max_retry_delay_ms: default_max_retry_delay_ms(),
        }
    }
}

impl SourceConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn initial_retry_delay(&self) -> Duration {
        Duration::from_millis(self.initial_retry_delay_ms)
    }

    pub fn max_retry_delay(&self) -> Duration {
        Duration::from_millis(self.max_retry_delay_ms)
    }
}

/// Files written by `heatmap render`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_output_dir")]
    pub directory: PathBuf,
    #[serde(default)]
    pub png: bool,
    #[serde(default = "default_png_scale")]
    pub png_scale: f32,
    #[serde(default)]
    pub axis_labels: bool,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("output")
}

fn default_png_scale() -> f32 {
    1.0
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: default_output_dir(),
            png: false,
            png_scale: default_png_scale(),
            axis_labels: false,
        }
    }
}

/// HTTP server settings for `heatmap serve`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_listen")]
    pub listen: String,
}

fn default_listen() -> String {
    "0.0.0.0:8080".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen: default_listen(),
        }
    }
}

impl HeatmapConfig {
    /// Defaults, overlaid with `path` when given.
    pub fn load(path: Option<&Path>) -> HeatmapResult<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                debug!("No config file given, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load and validate a YAML config file.
    pub fn from_file(path: &Path) -> HeatmapResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            HeatmapError::Config(format!("failed to read {}: {}", path.display(), e))
        })?;
        let config = Self::from_yaml(&contents)?;
        info!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Parse and validate YAML. An empty document yields the defaults.
    pub fn from_yaml(yaml: &str) -> HeatmapResult<Self> {
        let config: Self = if yaml.trim().is_empty() {
            Self::default()
        } else {
            serde_yaml::from_str(yaml)
                .map_err(|e| HeatmapError::Config(format!("invalid YAML: {}", e)))?
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> HeatmapResult<()> {
        self.canvas.validate()?;
        if self.source.input.is_none() && self.source.url.trim().is_empty() {
            return Err(HeatmapError::Config(
                "source.url must be set when no input file is given".to_string(),
            ));
        }
        if !(self.output.png_scale > 0.0 && self.output.png_scale.is_finite()) {
            return Err(HeatmapError::Config(format!(
                "output.png_scale must be positive, got {}",
                self.output.png_scale
            )));
        }
        Ok(())
    }

    /// Point the source at a URL, dropping any input file.
    pub fn set_url(&mut self, url: String) {
        self.source.url = url;
        self.source.input = None;
    }

    pub fn set_input(&mut self, input: PathBuf) {
        self.source.input = Some(input);
    }

    /// Renderer options derived from the canvas, legend and palette sections.
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            canvas: self.canvas,
            legend: self.legend,
            palette: self.palette,
            svg: SvgOptions {
                axis_labels: self.output.axis_labels,
                ..SvgOptions::default()
            },
        }
    }
}

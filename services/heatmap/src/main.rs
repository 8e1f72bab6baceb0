//! Heatmap CLI
//!
//! Renders the monthly global land-surface temperature heatmap to files, or
//! serves it over HTTP.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use heatmap::config::HeatmapConfig;
use heatmap::fetch::load_dataset;
use heatmap::output::write_outputs;
use heatmap::pipeline::render_dataset;
use heatmap::server::build_router;
use heatmap::state::AppState;

/// Global temperature variance heatmap
#[derive(Parser, Debug)]
#[command(name = "heatmap")]
#[command(about = "Render the monthly global temperature variance heatmap")]
struct Cli {
    /// Log level
    #[arg(long, default_value = "info", env = "RUST_LOG", global = true)]
    log_level: String,

    /// YAML configuration file
    #[arg(short, long, env = "HEATMAP_CONFIG", global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write heatmap.svg, legend.svg, heatmap.html and optionally heatmap.png
    Render {
        #[command(flatten)]
        source: SourceArgs,

        /// Output directory
        #[arg(short, long, env = "HEATMAP_OUTPUT_DIR")]
        out_dir: Option<PathBuf>,

        /// Also rasterize to PNG
        #[arg(long)]
        png: bool,

        /// PNG scale factor
        #[arg(long)]
        png_scale: Option<f32>,
    },
    /// Serve the rendered heatmap over HTTP
    Serve {
        #[command(flatten)]
        source: SourceArgs,

        /// Listen address
        #[arg(short, long, env = "HEATMAP_LISTEN_ADDR")]
        listen: Option<String>,

        /// Number of worker threads
        #[arg(long, env = "HEATMAP_WORKER_THREADS")]
        worker_threads: Option<usize>,
    },
}

#[derive(Args, Debug)]
struct SourceArgs {
    /// Dataset URL
    #[arg(long, env = "HEATMAP_DATA_URL")]
    url: Option<String>,

    /// Local dataset file (takes precedence over --url)
    #[arg(long, env = "HEATMAP_INPUT")]
    input: Option<PathBuf>,
}

impl SourceArgs {
    fn apply(self, config: &mut HeatmapConfig) {
        if let Some(url) = self.url {
            config.set_url(url);
        }
        if let Some(input) = self.input {
            config.set_input(input);
        }
    }
}

fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    // Build runtime with configured threads
    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();

    if let Command::Serve {
        worker_threads: Some(threads),
        ..
    } = &cli.command
    {
        runtime_builder.worker_threads(*threads);
    }

    let runtime = runtime_builder
        .build()
        .context("Failed to create Tokio runtime")?;

    runtime.block_on(run(cli))
}

fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .json()
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    let mut config = HeatmapConfig::load(cli.config.as_deref()).context("Failed to load config")?;

    match cli.command {
        Command::Render {
            source,
            out_dir,
            png,
            png_scale,
        } => {
            source.apply(&mut config);
            if let Some(dir) = out_dir {
                config.output.directory = dir;
            }
            config.output.png |= png;
            if let Some(scale) = png_scale {
                config.output.png_scale = scale;
            }
            config.validate().context("Invalid configuration")?;
            render_command(config).await
        }
        Command::Serve { source, listen, .. } => {
            source.apply(&mut config);
            if let Some(listen) = listen {
                config.server.listen = listen;
            }
            config.validate().context("Invalid configuration")?;
            serve_command(config).await
        }
    }
}

async fn render_command(config: HeatmapConfig) -> Result<()> {
    info!("Starting heatmap render");

    let dataset = load_dataset(&config.source)
        .await
        .context("Failed to load dataset")?;
    let rendered = render_dataset(&dataset, &config);
    let written = write_outputs(&rendered, &config.output)
        .await
        .context("Failed to write output files")?;

    for path in written.iter() {
        info!(path = %path.display(), "Output ready");
    }
    Ok(())
}

async fn serve_command(config: HeatmapConfig) -> Result<()> {
    // Initialize Prometheus metrics exporter
    let prometheus_handle = metrics_exporter_prometheus::PrometheusBuilder::new()
        .install_recorder()
        .context("Failed to install Prometheus recorder")?;

    info!("Prometheus metrics exporter initialized");
    info!("Starting heatmap server");

    let dataset = load_dataset(&config.source)
        .await
        .context("Failed to load dataset")?;
    let state = AppState::new(dataset, &config)
        .await
        .context("Failed to render heatmap")?;
    let state = Arc::new(state);

    let app = build_router(state, prometheus_handle);

    let addr: SocketAddr = config
        .server
        .listen
        .parse()
        .with_context(|| format!("Invalid listen address: {}", config.server.listen))?;

    info!("Heatmap server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await.context("Server failed")?;
    Ok(())
}

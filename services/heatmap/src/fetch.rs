//! Dataset loading with retry logic.
//!
//! The dataset is fetched with a single HTTP GET. Transient failures
//! (connection errors, 429 and 5xx responses) are retried with exponential
//! backoff; anything else fails immediately.

use std::path::Path;
use std::time::Duration;

use heatmap_common::{Dataset, HeatmapError, HeatmapResult};
use metrics::counter;
use reqwest::Client;
use tracing::{debug, info, instrument, warn};

use crate::config::SourceConfig;

/// Retry and timeout settings for [`DatasetFetcher`].
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Maximum number of retry attempts
    pub max_retries: u32,
    /// Initial retry delay (doubles each retry)
    pub initial_retry_delay: Duration,
    /// Maximum retry delay
    pub max_retry_delay: Duration,
    /// HTTP request timeout
    pub request_timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self::from(&SourceConfig::default())
    }
}

impl From<&SourceConfig> for FetchConfig {
    fn from(source: &SourceConfig) -> Self {
        Self {
            max_retries: source.max_retries,
            initial_retry_delay: source.initial_retry_delay(),
            max_retry_delay: source.max_retry_delay(),
            request_timeout: source.timeout(),
            connect_timeout: source.connect_timeout(),
        }
    }
}

/// Fetches and parses the published dataset.
pub struct DatasetFetcher {
    client: Client,
    config: FetchConfig,
}

impl DatasetFetcher {
    pub fn new(config: FetchConfig) -> HeatmapResult<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .build()
            .map_err(|e| HeatmapError::Config(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self { client, config })
    }

    /// GET `url` and parse the body, retrying transient failures.
    #[instrument(skip(self), fields(url = %url))]
    pub async fn fetch(&self, url: &str) -> HeatmapResult<Dataset> {
        let mut attempt = 0;
        let mut delay = self.config.initial_retry_delay;

        loop {
            attempt += 1;
            counter!("heatmap_fetch_attempts_total").increment(1);

            match self.fetch_once(url).await {
                Ok(dataset) => {
                    info!(
                        records = dataset.len(),
                        base_temperature = dataset.base_temperature,
                        attempts = attempt,
                        "Dataset fetched"
                    );
                    return Ok(dataset);
                }
                Err(e) => {
                    counter!("heatmap_fetch_failures_total").increment(1);

                    if !e.is_transient() {
                        return Err(e);
                    }
                    if attempt > self.config.max_retries {
                        warn!(error = %e, attempts = attempt, "Giving up on dataset fetch");
                        return Err(e);
                    }

                    warn!(
                        error = %e,
                        retry = attempt,
                        max_retries = self.config.max_retries,
                        delay_ms = delay.as_millis() as u64,
                        "Fetch failed, retrying"
                    );

                    tokio::time::sleep(delay).await;
                    delay = next_retry_delay(delay, self.config.max_retry_delay);
                }
            }
        }
    }

    async fn fetch_once(&self, url: &str) -> HeatmapResult<Dataset> {
        let fetch_error = |e: reqwest::Error| HeatmapError::Fetch {
            url: url.to_string(),
            message: e.to_string(),
        };

        let response = self.client.get(url).send().await.map_err(fetch_error)?;
        let status = response.status();
        if !status.is_success() {
            return Err(HeatmapError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(fetch_error)?;
        debug!(bytes = body.len(), "Received dataset body");
        Dataset::from_slice(&body)
    }
}

/// Double `current`, capped at `max`.
pub fn next_retry_delay(current: Duration, max: Duration) -> Duration {
    std::cmp::min(current.saturating_mul(2), max)
}

/// Read the dataset from a local JSON file.
#[instrument]
pub async fn read_dataset(path: &Path) -> HeatmapResult<Dataset> {
    let bytes = tokio::fs::read(path).await?;
    let dataset = Dataset::from_slice(&bytes)?;
    info!(records = dataset.len(), "Dataset read from file");
    Ok(dataset)
}

/// Load the dataset from wherever `source` points.
pub async fn load_dataset(source: &SourceConfig) -> HeatmapResult<Dataset> {
    match &source.input {
        Some(path) => read_dataset(path).await,
        None => {
            let fetcher = DatasetFetcher::new(FetchConfig::from(source))?;
            fetcher.fetch(&source.url).await
        }
    }
}

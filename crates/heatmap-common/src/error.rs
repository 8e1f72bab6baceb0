//! Error types for the heatmap crates.

use thiserror::Error;

/// Result type alias using HeatmapError.
pub type HeatmapResult<T> = Result<T, HeatmapError>;

/// Primary error type for loading and rendering a heatmap.
#[derive(Debug, Error)]
pub enum HeatmapError {
    // === Load Errors ===
    #[error("Failed to fetch dataset from {url}: {message}")]
    Fetch { url: String, message: String },

    #[error("Unexpected HTTP status {status} from {url}")]
    HttpStatus { url: String, status: u16 },

    #[error("Invalid dataset: {0}")]
    InvalidDataset(String),

    #[error("Month {month} out of range 1-12 (year {year})")]
    MonthOutOfRange { year: i32, month: u32 },

    // === Configuration Errors ===
    #[error("Invalid color: {0}")]
    InvalidColor(String),

    #[error("Configuration error: {0}")]
    Config(String),

    // === Output Errors ===
    #[error("Rendering failed: {0}")]
    RenderError(String),

    #[error("Encoding failed: {0}")]
    EncodeError(String),

    #[error("I/O error: {0}")]
    Io(String),
}

impl HeatmapError {
    /// Whether retrying the same request could succeed.
    pub fn is_transient(&self) -> bool {
        match self {
            HeatmapError::Fetch { .. } => true,
            HeatmapError::HttpStatus { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }
}

impl From<std::io::Error> for HeatmapError {
    fn from(err: std::io::Error) -> Self {
        HeatmapError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for HeatmapError {
    fn from(err: serde_json::Error) -> Self {
        HeatmapError::InvalidDataset(format!("JSON error: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transient_classification() {
        let fetch = HeatmapError::Fetch {
            url: "http://x".into(),
            message: "connection reset".into(),
        };
        assert!(fetch.is_transient());

        let server = HeatmapError::HttpStatus {
            url: "http://x".into(),
            status: 503,
        };
        assert!(server.is_transient());

        let missing = HeatmapError::HttpStatus {
            url: "http://x".into(),
            status: 404,
        };
        assert!(!missing.is_transient());
        assert!(!HeatmapError::InvalidDataset("bad".into()).is_transient());
    }

    #[test]
    fn test_json_error_converts() {
        let err: HeatmapError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(matches!(err, HeatmapError::InvalidDataset(_)));
    }
}

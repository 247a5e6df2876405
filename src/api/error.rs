use http::StatusCode;

/// Failure of a single fetch. None of these are fatal to the poll loop.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("HTTP error: {0}")]
    Http(StatusCode),
    #[error("unexpected API response: {0}")]
    Decode(#[source] serde_json::Error),
}

impl FetchError {
    pub fn is_rate_exceeded(&self) -> bool {
        matches!(self, FetchError::Http(StatusCode::TOO_MANY_REQUESTS))
    }
}

/// Startup failure; the exporter refuses to run.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("No device specified. Please use the environment variable POWERFOX_DEVICE to set the serial.")]
    MissingDevice,
    #[error("polling interval must be greater than zero")]
    InvalidInterval,
    #[error("request timeout must be greater than zero")]
    InvalidTimeout,
    #[error("unable to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),
    #[error("unable to register metrics: {0}")]
    Metrics(#[from] prometheus::Error),
}

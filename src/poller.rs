use crate::api::{self, endpoint, ConfigError, FetchError};
use crate::metrics::MetricSet;
use crate::model::{ConnectedApi, Reading};
use prometheus::Registry;
use std::time::Duration;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Clone)]
pub struct PollerConfig {
    pub interval: Duration,
    pub device: String,
    pub username: String,
    pub password: String,
    pub api_url: String,
    pub timeout: Duration,
}

impl PollerConfig {
    /// Configuration against the public powerfox API with the default request timeout.
    pub fn new(interval: Duration, device: String, username: String, password: String) -> Self {
        PollerConfig {
            interval,
            device,
            username,
            password,
            api_url: endpoint::API_ROOT.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// Fetches the current reading of one device every `interval` and publishes it as gauges.
///
/// Gauges keep their last value when a fetch fails.
pub struct Poller {
    api: ConnectedApi,
    device: String,
    interval: Duration,
    metrics: MetricSet,
}

impl Poller {
    pub fn initialize(config: PollerConfig) -> Result<Self, ConfigError> {
        log::info!("Initializing...");

        let device = config.device.trim();
        if device.is_empty() {
            return Err(ConfigError::MissingDevice);
        }
        if config.interval.is_zero() {
            return Err(ConfigError::InvalidInterval);
        }
        if config.timeout.is_zero() {
            return Err(ConfigError::InvalidTimeout);
        }

        let api = api::connect(
            &api::api(config.api_url, config.username, config.password),
            config.timeout,
        )?;

        Ok(Poller {
            api,
            device: device.to_string(),
            interval: config.interval,
            metrics: MetricSet::new()?,
        })
    }

    pub fn registry(&self) -> Registry {
        self.metrics.registry()
    }

    /// Poll forever. Each tick runs to completion before the interval sleep starts.
    pub async fn run(self) {
        log::info!(
            "Metrics loop started for device {} (interval {:?}).",
            self.device,
            self.interval
        );
        loop {
            self.tick().await;
            tokio::time::sleep(self.interval).await;
        }
    }

    /// One fetch-and-publish cycle.
    pub async fn tick(&self) {
        if let Ok(reading) = self.fetch_once().await {
            self.metrics.publish(&self.device, &reading);
        }
    }

    pub async fn fetch_once(&self) -> Result<Reading, FetchError> {
        let result = api::current(&self.api, &self.device).await;

        match &result {
            Ok(reading) => log::debug!("device {}: {:?}", self.device, reading),
            Err(e) => {
                log::error!("device {}: {}", self.device, e);
                if e.is_rate_exceeded() {
                    log::warn!("Consider increasing the polling interval.");
                }
            }
        }

        result
    }
}

use crate::api::endpoint::API_ROOT;
use crate::poller::PollerConfig;
use config::{Config, Environment};
use std::time::Duration;

#[derive(Debug, thiserror::Error)]
#[error("Configuration error: {0}")]
pub struct SettingsError(#[from] config::ConfigError);

/// Exporter settings, read from the environment. Keys are the lowercased variable names.
#[derive(Clone, serde::Deserialize)]
pub struct Settings {
    pub exporter_port: u16,
    pub exporter_address: String,
    pub polling_interval_seconds: u64,
    pub powerfox_api_user: String,
    pub powerfox_api_password: String,
    pub powerfox_device: String,
    pub powerfox_api_root: String,
    pub powerfox_api_timeout_seconds: u64,
}

impl Settings {
    pub fn poller_config(&self) -> PollerConfig {
        PollerConfig {
            api_url: self.powerfox_api_root.to_owned(),
            timeout: Duration::from_secs(self.powerfox_api_timeout_seconds),
            ..PollerConfig::new(
                Duration::from_secs(self.polling_interval_seconds),
                self.powerfox_device.to_owned(),
                self.powerfox_api_user.to_owned(),
                self.powerfox_api_password.to_owned(),
            )
        }
    }
}

fn load(environment: Environment) -> Result<Settings, SettingsError> {
    let settings = Config::builder()
        .set_default("exporter_port", 9813)?
        .set_default("exporter_address", "0.0.0.0")?
        /* the powerfox API is rate limited */
        .set_default("polling_interval_seconds", 60)?
        .set_default("powerfox_api_user", "")?
        .set_default("powerfox_api_password", "")?
        .set_default("powerfox_device", "")?
        .set_default("powerfox_api_root", API_ROOT)?
        .set_default("powerfox_api_timeout_seconds", 10)?
        .add_source(environment)
        .build()?;

    Ok(settings.try_deserialize()?)
}

pub fn read_settings() -> Result<Settings, SettingsError> {
    load(Environment::default())
}

#[cfg(test)]
mod test {
    use super::*;
    use std::collections::HashMap;

    fn from_env_map(vars: HashMap<String, String>) -> Result<Settings, SettingsError> {
        load(Environment::default().source(Some(vars)))
    }

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn defaults() {
        let settings = from_env_map(HashMap::new()).unwrap();

        assert_eq!(9813, settings.exporter_port);
        assert_eq!("0.0.0.0", settings.exporter_address);
        assert_eq!(60, settings.polling_interval_seconds);
        assert_eq!("", settings.powerfox_api_user);
        assert_eq!("", settings.powerfox_api_password);
        assert_eq!("", settings.powerfox_device);
        assert_eq!(API_ROOT, settings.powerfox_api_root);
        assert_eq!(10, settings.powerfox_api_timeout_seconds);
    }

    #[test]
    fn environment_overrides() {
        let settings = from_env_map(vars(&[
            ("EXPORTER_PORT", "9999"),
            ("POLLING_INTERVAL_SECONDS", "120"),
            ("POWERFOX_API_USER", "me@example.com"),
            ("POWERFOX_API_PASSWORD", "hunter2"),
            ("POWERFOX_DEVICE", "abc123"),
            ("UNRELATED", "ignored"),
        ]))
        .unwrap();

        assert_eq!(9999, settings.exporter_port);
        assert_eq!(120, settings.polling_interval_seconds);

        let config = settings.poller_config();
        assert_eq!(Duration::from_secs(120), config.interval);
        assert_eq!("abc123", config.device);
        assert_eq!("me@example.com", config.username);
        assert_eq!("hunter2", config.password);
        assert_eq!(API_ROOT, config.api_url);
        assert_eq!(Duration::from_secs(10), config.timeout);
    }

    #[test]
    fn api_root_and_timeout_overrides() {
        let config = from_env_map(vars(&[
            ("POWERFOX_API_ROOT", "http://127.0.0.1:8080"),
            ("POWERFOX_API_TIMEOUT_SECONDS", "3"),
        ]))
        .unwrap()
        .poller_config();

        assert_eq!("http://127.0.0.1:8080", config.api_url);
        assert_eq!(Duration::from_secs(3), config.timeout);
    }

    #[test]
    fn invalid_interval() {
        let result = from_env_map(vars(&[("POLLING_INTERVAL_SECONDS", "often")]));
        assert!(result.is_err());
    }
}

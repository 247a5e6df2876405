pub mod endpoint;
pub mod error;
pub mod response;

use crate::model;
pub use error::{ConfigError, FetchError};
use response::Current;

use std::time::Duration;

pub fn api(api_url: String, username: String, password: String) -> model::Api {
    model::Api {
        api_url,
        username,
        password,
    }
}

/// Build the HTTP client used for every subsequent request. Requests are bounded by `timeout`.
pub fn connect(api: &model::Api, timeout: Duration) -> Result<model::ConnectedApi, ConfigError> {
    let client = reqwest::ClientBuilder::new()
        .timeout(timeout)
        .build()
        .map_err(ConfigError::HttpClient)?;

    Ok(model::ConnectedApi {
        api_url: api.api_url.to_owned(),
        username: api.username.to_owned(),
        password: api.password.to_owned(),
        client,
    })
}

/// Carry a 2xx response forward, map any other status (including unfollowed 3xx) to `FetchError`.
fn map_response_status(response: reqwest::Response) -> Result<reqwest::Response, FetchError> {
    let status = response.status();

    if status.is_success() {
        Ok(response)
    } else {
        Err(FetchError::Http(status))
    }
}

fn into_reading(current: Current) -> model::Reading {
    model::Reading {
        /* convert Wh to kWh */
        consumption: current.a_plus / 1000.0,
        feedin: current.a_minus / 1000.0,
        power: current.watt,
        outdated: current.outdated,
    }
}

/// Read the current meter values of `device`.
pub async fn current(
    api: &model::ConnectedApi,
    device: &str,
) -> Result<model::Reading, FetchError> {
    let url = endpoint::current_url(&api.api_url, device);

    let response_text = api
        .client
        .get(url)
        .basic_auth(&api.username, Some(&api.password))
        .send()
        .await
        .map_err(FetchError::Transport)
        .and_then(map_response_status)?
        .text()
        .await
        .map_err(FetchError::Transport)?;

    log::trace!("device: {}, response_text: {}", device, response_text);

    serde_json::from_str::<Current>(&response_text)
        .map(into_reading)
        .map_err(FetchError::Decode)
}

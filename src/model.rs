pub type KWh = f64;
pub type Watt = f64;

#[derive(Debug, Clone)]
pub struct Api {
    pub api_url: String,
    pub username: String,
    pub password: String,
}

/// `Api` paired with a configured HTTP client, ready to issue requests.
#[derive(Debug)]
pub struct ConnectedApi {
    pub api_url: String,
    pub username: String,
    pub password: String,
    pub client: reqwest::Client,
}

/// Latest meter values decoded from one `current` response.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reading {
    pub consumption: KWh,
    pub feedin: KWh,
    pub power: Watt,
    pub outdated: bool,
}

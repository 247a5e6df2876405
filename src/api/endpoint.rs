pub const API_ROOT: &str = "https://backend.powerfox.energy";
pub const API_VERSION: &str = "2.0";

/// URL of the `current` reading endpoint of `device` below `api_root`.
pub fn current_url(api_root: &str, device: &str) -> String {
    format!(
        "{}/api/{}/my/{}/current/",
        api_root.trim_end_matches('/'),
        API_VERSION,
        device
    )
}
